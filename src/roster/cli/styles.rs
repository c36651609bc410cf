//! Shared styles for screen rendering.
//!
//! Screens format through a single set of named `console` styles so the look
//! stays consistent across pages; notices go through `colored` instead (see
//! `commands`). `--no-color` disables both globally.

use console::Style;
use once_cell::sync::Lazy;

pub struct ScreenTheme {
    /// Page and section headers.
    pub header: Style,
    /// The active entry in the navigation line.
    pub nav_active: Style,
    /// Inactive navigation entries.
    pub nav: Style,
    /// Field labels in detail and form views.
    pub label: Style,
    /// Metadata such as timestamps and hints.
    pub muted: Style,
    /// Inline validation errors.
    pub error: Style,
    /// List positions.
    pub index: Style,
}

pub static THEME: Lazy<ScreenTheme> = Lazy::new(|| ScreenTheme {
    header: Style::new().bold(),
    nav_active: Style::new().cyan().bold(),
    nav: Style::new().dim(),
    label: Style::new().bold(),
    muted: Style::new().dim(),
    error: Style::new().red(),
    index: Style::new().yellow(),
});
