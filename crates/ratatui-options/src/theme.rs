use ratatui::style::Style;

#[derive(Clone, Debug)]
pub struct Theme {
    pub text_primary: Style,
    pub text_muted: Style,
    pub accent: Style,
    pub heading: Style,
    pub danger: Style,
    pub warning: Style,
    pub field: Style,
    pub field_focused: Style,
    pub field_error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            text_muted: Style::default().dark_gray(),
            accent: Style::default().cyan(),
            heading: Style::default().bold(),
            danger: Style::default().red(),
            warning: Style::default().yellow(),
            field: Style::default().underlined(),
            field_focused: Style::default().reversed(),
            field_error: Style::default().red().underlined(),
        }
    }
}
