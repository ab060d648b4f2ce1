//! Help line listing the builder commands that apply right now.

use crate::theme::Theme;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui_options_core::keymap::Binding;
use ratatui_options_core::keymap::BuilderBindings;

const SEPARATOR: &str = " • ";

/// What the builder currently allows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HelpContext {
    /// A row is focused, so field/row movement and delete apply.
    pub has_focus: bool,
    pub label_only: bool,
    /// The source loaded; otherwise no list command does anything.
    pub editable: bool,
}

/// Bindings in display order for `ctx`. The label-only toggle names the mode it switches to.
pub fn help_bindings(bindings: &BuilderBindings, ctx: HelpContext) -> Vec<Binding> {
    if !ctx.editable {
        return Vec::new();
    }
    let mut out = Vec::new();
    if ctx.has_focus {
        out.push(bindings.next_field.clone());
        out.push(bindings.next_row.clone());
    }
    out.push(bindings.add_row.clone());
    if ctx.has_focus {
        out.push(bindings.remove_row.clone());
    }
    let mut toggle = bindings.toggle_label_only.clone();
    if ctx.label_only {
        toggle.help_desc = "value/label pairs".to_string();
    }
    out.push(toggle);
    out
}

pub fn help_line(bindings: &BuilderBindings, ctx: HelpContext, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, b) in help_bindings(bindings, ctx).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, theme.text_muted));
        }
        spans.push(Span::styled(b.help_key, theme.accent));
        spans.push(Span::styled(format!(" {}", b.help_desc), theme.text_muted));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn line(ctx: HelpContext) -> String {
        plain(&help_line(&BuilderBindings::default(), ctx, &Theme::default()))
    }

    #[test]
    fn focused_row_lists_every_command() {
        let ctx = HelpContext {
            has_focus: true,
            label_only: false,
            editable: true,
        };
        assert_eq!(
            line(ctx),
            "tab next field • ↓ next option • C-n add option • C-d delete option • C-l label only"
        );
    }

    #[test]
    fn empty_list_only_offers_add_and_toggle() {
        let ctx = HelpContext {
            has_focus: false,
            label_only: true,
            editable: true,
        };
        assert_eq!(line(ctx), "C-n add option • C-l value/label pairs");
    }

    #[test]
    fn unreadable_source_shows_no_commands() {
        assert_eq!(line(HelpContext::default()), "");
    }
}
