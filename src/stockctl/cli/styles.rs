use console::Style;
use once_cell::sync::Lazy;

pub(super) struct MenuStyles {
    pub header: Style,
    pub code: Style,
}

pub(super) static STYLES: Lazy<MenuStyles> = Lazy::new(|| MenuStyles {
    header: Style::new().bold(),
    code: Style::new().yellow(),
});
