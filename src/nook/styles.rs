use console::Style;
use once_cell::sync::Lazy;

/// Named styles shared by every printing path. Styling degrades to plain
/// text when stdout is not a terminal, or when colors are disabled globally
/// (the `--plain` flag).
pub struct Theme {
    pub title: Style,
    pub meta: Style,
    pub info: Style,
    pub success: Style,
    pub error: Style,
}

pub static THEME: Lazy<Theme> = Lazy::new(|| Theme {
    title: Style::new().bold(),
    meta: Style::new().dim().italic(),
    info: Style::new().dim(),
    success: Style::new().green(),
    error: Style::new().red(),
});
