use log::info;

use crate::cli::Cli;
use crate::error::Result;
use crate::output::render_box_office;
use crate::runner::greeting;

/// Log the greeting, then render the demo table.
///
/// Fails with [`crate::error::TemplateError::TableSupportMissing`] when the
/// `rich-tables` feature is not compiled in.
pub fn run(cli: &Cli) -> Result<()> {
    info!(
        "{}",
        greeting(&cli.required_arg, cli.optional_arg.as_deref())
    );

    let table = render_box_office()?;
    println!("{table}");

    Ok(())
}
