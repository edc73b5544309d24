//! The box-office demo table.
//!
//! Styled table rendering is an optional capability gated behind the
//! `rich-tables` feature. The gate is checked at call time so a build
//! without the feature fails with a remediation hint instead of at link
//! time.

#[cfg(feature = "rich-tables")]
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
#[cfg(feature = "rich-tables")]
use comfy_table::presets::UTF8_FULL;
#[cfg(feature = "rich-tables")]
use comfy_table::{
    Attribute, Cell, CellAlignment, Color as TableColor, ColumnConstraint, ContentArrangement,
    Table, Width,
};

use crate::error::Result;
#[cfg(feature = "rich-tables")]
use super::styling::red;

/// Renders the demo table, or reports the missing capability.
#[cfg(feature = "rich-tables")]
pub fn render_box_office() -> Result<String> {
    Ok(box_office_table().to_string())
}

#[cfg(not(feature = "rich-tables"))]
pub fn render_box_office() -> Result<String> {
    Err(crate::error::TemplateError::TableSupportMissing)
}

#[cfg(feature = "rich-tables")]
fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

#[cfg(feature = "rich-tables")]
fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(TableColor::Blue)
        .add_attribute(Attribute::Bold)
}

#[cfg(feature = "rich-tables")]
fn box_office_table() -> Table {
    let mut table = create_table();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Title"),
        header_cell("Production Budget"),
        header_cell("Box Office"),
    ]);

    // Date column is dim and fixed-width; the money columns right-align.
    if let Some(column) = table.column_mut(0) {
        column.set_constraint(ColumnConstraint::Absolute(Width::Fixed(12)));
    }
    for index in [2, 3] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.add_row(vec![
        Cell::new("Dev 20, 2019").add_attribute(Attribute::Dim),
        Cell::new("Star Wars: The Rise of Skywalker"),
        Cell::new("$275,000,000"),
        Cell::new("$375,126,118"),
    ]);
    table.add_row(vec![
        Cell::new("May 25, 2018").add_attribute(Attribute::Dim),
        Cell::new(format!("{}: A Star Wars Story", red("Solo"))),
        Cell::new("$275,000,000"),
        Cell::new("$393,151,347"),
    ]);
    table.add_row(vec![
        Cell::new("Dec 15, 2017").add_attribute(Attribute::Dim),
        Cell::new("Star Wars Ep. VIII: The Last Jedi"),
        Cell::new("$262,000,000"),
        Cell::new("$1,332,539,889").add_attribute(Attribute::Bold),
    ]);

    table
}


#[cfg(all(test, not(feature = "rich-tables")))]
mod tests {
    use super::*;
    use crate::error::TemplateError;

    #[test]
    fn test_render_reports_missing_capability() {
        let err = render_box_office().unwrap_err();
        assert!(matches!(err, TemplateError::TableSupportMissing));
        assert!(err.to_string().contains("--features rich-tables"));
    }
}
