use console::style;

/// Styling helpers for terminal output
pub fn dim(text: impl std::fmt::Display) -> console::StyledObject<String> {
    style(text.to_string()).dim()
}

pub fn magenta_bold(text: impl std::fmt::Display) -> console::StyledObject<String> {
    style(text.to_string()).magenta().bold()
}

pub fn red(text: impl std::fmt::Display) -> console::StyledObject<String> {
    style(text.to_string()).red()
}
