use clap::Parser;

/// Arguments shared by both template binaries.
///
/// The required positional argument is echoed back in the greeting; the
/// optional one defaults to absent and is logged as `None` when missing.
#[derive(Parser, Debug)]
#[command(author, version, about = "Command-Line App Template", long_about = None)]
pub struct Cli {
    /// Required positional argument, echoed in the greeting
    pub required_arg: String,

    /// Optional second argument, absent by default
    pub optional_arg: Option<String>,
}
