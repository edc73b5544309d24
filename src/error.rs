use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error(
        "styled table support is not compiled in. \
         Rebuild with `cargo build --features rich-tables` to use this command."
    )]
    TableSupportMissing,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
