//! Live example of the field being built, drawn as the selected control kind.

use crate::theme::Theme;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui_options_core::option::DisplayMode;
use ratatui_options_core::preview::Preview;

/// Lines for the preview: the shared label, then the choices as a closed select with its list,
/// or as a row of radio buttons or checkboxes.
pub fn preview_lines(preview: &Preview, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if !preview.heading.is_empty() {
        lines.push(Line::from(Span::styled(
            preview.heading.clone(),
            theme.text_primary,
        )));
    }

    if preview.is_empty() {
        lines.push(Line::from(Span::styled("(no options)", theme.text_muted)));
        return lines;
    }

    match preview.mode {
        DisplayMode::Select => {
            let first = preview.choices[0].label.clone();
            lines.push(Line::from(vec![
                Span::styled("[ ", theme.text_muted),
                Span::styled(first, theme.text_primary),
                Span::styled(" ▾ ]", theme.text_muted),
            ]));
            for choice in &preview.choices {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(choice.label.clone(), theme.text_muted),
                ]));
            }
        }
        DisplayMode::Radio | DisplayMode::Checkbox => {
            let marker = if preview.mode == DisplayMode::Radio {
                "( ) "
            } else {
                "[ ] "
            };
            let mut spans = Vec::new();
            for (i, choice) in preview.choices.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.push(Span::styled(marker, theme.accent));
                spans.push(Span::styled(choice.label.clone(), theme.text_primary));
            }
            lines.push(Line::from(spans));
        }
    }
    lines
}
