mod progress;
mod styling;
mod tables;

pub use progress::CycleProgress;
pub use styling::{dim, magenta_bold, red};
pub use tables::render_box_office;

/// Prints the `clikit` banner to stderr.
///
/// Displays the tool name, version, and description at the start of execution.
pub fn print_banner() {
    eprintln!(
        r"
{} {}
  {}
",
        magenta_bold("🧰 clikit"),
        dim(env!("CARGO_PKG_VERSION")),
        dim("Command-Line App Template")
    );
}
