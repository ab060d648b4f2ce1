use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui_options_core::entry::LabeledEntry;
use ratatui_options_core::line_input::LineInput;
use ratatui_options_core::option::OptionField;
use ratatui_options_core::render;
use ratatui_options_core::validate::Severity;

#[derive(Clone, Debug)]
pub struct LabeledInputOptions {
    /// Width of each field when both value and label are shown.
    pub value_width: u16,
    pub value_caption: String,
    pub label_caption: String,
}

impl Default for LabeledInputOptions {
    fn default() -> Self {
        Self {
            value_width: 16,
            value_caption: "Value ".to_string(),
            label_caption: "Label ".to_string(),
        }
    }
}

/// Draws one option row:
///
/// ```text
/// Option 2
/// Value b               Label Banana
/// This option is invalid. ...
/// ```
///
/// The message line is only present when the row is not valid.
#[derive(Clone, Debug, Default)]
pub struct LabeledInputView {
    options: LabeledInputOptions,
}

impl LabeledInputView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LabeledInputOptions) -> Self {
        Self { options }
    }

    /// Rows are two lines tall, three with a message.
    pub fn height(entry: &LabeledEntry<'_>) -> u16 {
        if entry.status().message().is_empty() {
            2
        } else {
            3
        }
    }

    /// Render `entry`. When `focus` is set, that field is drawn by the given editor instead of
    /// from the stored text, and the editor's cursor position is returned.
    pub fn render(
        &self,
        entry: &LabeledEntry<'_>,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        mut focus: Option<(OptionField, &mut LineInput)>,
    ) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let status = entry.status();
        let title_style = match status.severity() {
            Severity::Error => theme.danger,
            Severity::Warning => theme.warning,
            Severity::None => theme.accent,
        };
        render::render_str_clipped(
            area.x,
            area.y,
            0,
            area.width,
            buf,
            &entry.title(),
            title_style,
        );

        let mut cursor = None;
        if area.height >= 2 {
            let y = area.y + 1;
            let mut x = area.x;
            let right = area.x + area.width;
            let fields: &[OptionField] = if entry.shows_value() {
                &[OptionField::Value, OptionField::Label]
            } else {
                &[OptionField::Label]
            };
            for &field in fields {
                if x >= right {
                    break;
                }
                let caption = match field {
                    OptionField::Value => &self.options.value_caption,
                    OptionField::Label => &self.options.label_caption,
                };
                let caption_w = (render::display_width(caption) as u16).min(right - x);
                render::render_str_clipped(x, y, 0, caption_w, buf, caption, theme.text_muted);
                x += caption_w;

                let remaining = right - x;
                let width = if field == OptionField::Value {
                    self.options.value_width.min(remaining)
                } else {
                    remaining
                };
                let field_area = Rect::new(x, y, width, 1);
                let style = if entry.has_error(field) {
                    theme.field_error
                } else {
                    theme.field
                };

                match focus.as_mut() {
                    Some((f, editor)) if *f == field => {
                        let mut opts = editor.options().clone();
                        opts.style = theme.field_focused;
                        opts.placeholder_style = theme.field_focused.patch(theme.text_muted);
                        opts.placeholder = entry.hint(field).placeholder.to_string();
                        editor.set_options(opts);
                        editor.render_ref(field_area, buf);
                        cursor = editor.cursor_pos(field_area);
                    }
                    _ => render_field(
                        entry.pair.field(field),
                        entry.hint(field).placeholder,
                        field_area,
                        buf,
                        style,
                        theme.text_muted,
                    ),
                }
                x = (x + width).saturating_add(1).min(right);
            }
        }

        let message = status.message();
        if area.height >= 3 && !message.is_empty() {
            let style = match status.severity() {
                Severity::Error => theme.danger,
                _ => theme.warning,
            };
            render::render_str_clipped(area.x, area.y + 2, 0, area.width, buf, message, style);
        }
        cursor
    }
}

fn render_field(
    text: &str,
    placeholder: &str,
    area: Rect,
    buf: &mut Buffer,
    style: Style,
    placeholder_style: Style,
) {
    if area.width == 0 {
        return;
    }
    buf.set_style(area, style);
    if text.is_empty() {
        render::render_str_clipped(
            area.x,
            area.y,
            0,
            area.width,
            buf,
            placeholder,
            style.patch(placeholder_style),
        );
    } else {
        render::render_str_clipped(area.x, area.y, 0, area.width, buf, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui_options_core::option::OptionPair;

    fn rows(buf: &Buffer, area: Rect) -> Vec<String> {
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn valid_row_has_no_message() {
        let pair = OptionPair::new("b", "Banana");
        let entry = LabeledEntry::new(1, &pair, false, 100);
        assert_eq!(LabeledInputView::height(&entry), 2);

        let area = Rect::new(0, 0, 40, 2);
        let mut buf = Buffer::empty(area);
        LabeledInputView::new().render(&entry, area, &mut buf, &Theme::default(), None);
        assert_eq!(
            rows(&buf, area),
            ["Option 2", "Value b                Label Banana"]
        );
    }

    #[test]
    fn half_filled_row_shows_error_message() {
        let pair = OptionPair::new("a", "");
        let entry = LabeledEntry::new(0, &pair, false, 100);
        assert_eq!(LabeledInputView::height(&entry), 3);

        let area = Rect::new(0, 0, 90, 3);
        let mut buf = Buffer::empty(area);
        LabeledInputView::new().render(&entry, area, &mut buf, &Theme::default(), None);
        let r = rows(&buf, area);
        assert_eq!(r[1], "Value a                Label Human friendly value");
        assert_eq!(
            r[2],
            "This option is invalid. Value input is not empty but Label input is empty."
        );
    }

    #[test]
    fn label_only_hides_value_and_uses_focus_editor() {
        let pair = OptionPair::new("x", "Yes");
        let entry = LabeledEntry::new(0, &pair, true, 100);
        let mut editor = LineInput::new();
        editor.set_text("Yes");

        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        let cursor = LabeledInputView::new().render(
            &entry,
            area,
            &mut buf,
            &Theme::default(),
            Some((OptionField::Label, &mut editor)),
        );
        assert_eq!(rows(&buf, area)[1], "Label Yes");
        assert_eq!(cursor, Some((9, 1)));
    }
}
