use crate::help;
use crate::help::HelpContext;
use crate::labeled_input::LabeledInputView;
use crate::preview;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui_options_core::builder::BuilderAction;
use ratatui_options_core::builder::BuilderEvent;
use ratatui_options_core::builder::OptionBuilder;
use ratatui_options_core::input::InputEvent;
use ratatui_options_core::keymap::BuilderBindings;
use ratatui_options_core::keymap::BuilderCommand;
use ratatui_options_core::line_input::LineInput;
use ratatui_options_core::line_input::LineInputAction;
use ratatui_options_core::line_input::LineInputOptions;
use ratatui_options_core::option::OptionField;
use ratatui_options_core::render;
use ratatui_options_core::viewport::ViewportState;

#[derive(Clone, Debug)]
pub struct OptionBuilderViewOptions {
    pub show_help: bool,
    pub show_scrollbar: bool,
    /// Preview never takes more than this share of the height (in percent).
    pub max_preview_percent: u16,
    pub bindings: BuilderBindings,
}

impl Default for OptionBuilderViewOptions {
    fn default() -> Self {
        Self {
            show_help: true,
            show_scrollbar: true,
            max_preview_percent: 40,
            bindings: BuilderBindings::default(),
        }
    }
}

/// Interactive option builder: heading, label-only toggle, live preview, and one editable row per
/// option.
///
/// Keys bound in [`BuilderBindings`] move the focus or edit the list; everything else goes to
/// the focused field. Every returned [`BuilderAction::SourceChanged`] carries the text the host
/// should store in its source field (or call [`OptionBuilder::write_back`]).
pub struct OptionBuilderView {
    builder: OptionBuilder,
    options: OptionBuilderViewOptions,
    rows: LabeledInputView,
    focus_row: Option<usize>,
    focus_field: OptionField,
    editor: LineInput,
    pub viewport: ViewportState,
}

impl OptionBuilderView {
    pub fn new(builder: OptionBuilder) -> Self {
        Self::with_options(builder, OptionBuilderViewOptions::default())
    }

    pub fn with_options(builder: OptionBuilder, options: OptionBuilderViewOptions) -> Self {
        let mut view = Self {
            focus_row: (!builder.is_empty()).then_some(0),
            builder,
            options,
            rows: LabeledInputView::new(),
            focus_field: OptionField::Value,
            // The builder sanitizes each edit once; the editor only enforces the length.
            editor: LineInput::with_options(LineInputOptions {
                sanitize: false,
                ..Default::default()
            }),
            viewport: ViewportState::default(),
        };
        view.sync_editor();
        view
    }

    pub fn builder(&self) -> &OptionBuilder {
        &self.builder
    }

    pub fn into_builder(self) -> OptionBuilder {
        self.builder
    }

    pub fn focus(&self) -> Option<(usize, OptionField)> {
        self.focus_row.map(|row| (row, self.focus_field))
    }

    /// Apply an event that did not come from the keyboard (mode selector, shared label, ...).
    pub fn handle_builder_event(&mut self, event: BuilderEvent) -> BuilderAction {
        let action = self.builder.dispatch(event);
        self.sync_editor();
        action
    }

    pub fn handle_event(&mut self, event: InputEvent) -> BuilderAction {
        if let InputEvent::Key(key) = &event {
            if let Some(cmd) = self.options.bindings.command(key) {
                return self.run(cmd);
            }
        }

        let Some(row) = self.focus_row else {
            return BuilderAction::None;
        };
        match self.editor.input(event) {
            LineInputAction::Changed => {
                let action = self.builder.dispatch(BuilderEvent::OptionChanged {
                    index: row,
                    field: self.focus_field,
                    text: self.editor.text().to_string(),
                });
                self.sync_editor_text();
                action
            }
            LineInputAction::Submitted(_) => self.run(BuilderCommand::NextField),
            LineInputAction::None => BuilderAction::Redraw,
        }
    }

    fn run(&mut self, cmd: BuilderCommand) -> BuilderAction {
        let len = self.builder.len();
        match cmd {
            BuilderCommand::NextRow | BuilderCommand::PrevRow => {
                let Some(row) = self.focus_row else {
                    return BuilderAction::None;
                };
                let next = if cmd == BuilderCommand::NextRow {
                    (row + 1).min(len.saturating_sub(1))
                } else {
                    row.saturating_sub(1)
                };
                self.focus_row = Some(next);
                self.sync_editor();
                BuilderAction::Redraw
            }
            BuilderCommand::NextField | BuilderCommand::PrevField => {
                let Some(row) = self.focus_row else {
                    return BuilderAction::None;
                };
                let forward = cmd == BuilderCommand::NextField;
                let (row, field) = self.step_field(row, forward);
                self.focus_row = Some(row);
                self.focus_field = field;
                self.sync_editor();
                BuilderAction::Redraw
            }
            BuilderCommand::AddRow => {
                let action = self.builder.dispatch(BuilderEvent::AddOption);
                if let Some(last) = self.builder.len().checked_sub(1) {
                    self.focus_row = Some(last);
                    self.focus_field = self.first_field();
                    self.sync_editor();
                }
                action
            }
            BuilderCommand::RemoveRow => {
                let Some(row) = self.focus_row else {
                    return BuilderAction::None;
                };
                let action = self.builder.dispatch(BuilderEvent::RemoveOption(row));
                let len = self.builder.len();
                self.focus_row = (len > 0).then(|| row.min(len - 1));
                self.sync_editor();
                action
            }
            BuilderCommand::ToggleLabelOnly => {
                let on = !self.builder.label_only();
                let action = self.builder.dispatch(BuilderEvent::LabelOnlyChanged(on));
                if on {
                    self.focus_field = OptionField::Label;
                }
                self.sync_editor();
                action
            }
        }
    }

    fn first_field(&self) -> OptionField {
        if self.builder.label_only() {
            OptionField::Label
        } else {
            OptionField::Value
        }
    }

    // Value -> Label -> next row's Value; label-only rows have just the label.
    fn step_field(&self, row: usize, forward: bool) -> (usize, OptionField) {
        let len = self.builder.len();
        let two_fields = !self.builder.label_only();
        match (forward, self.focus_field) {
            (true, OptionField::Value) if two_fields => (row, OptionField::Label),
            (false, OptionField::Label) if two_fields => (row, OptionField::Value),
            (true, _) if row + 1 < len => (row + 1, self.first_field()),
            (false, _) if row > 0 => (row - 1, OptionField::Label),
            _ => (row, self.focus_field),
        }
    }

    fn sync_editor(&mut self) {
        self.editor.set_max_chars(self.builder.max_length());
        self.editor.set_text("");
        if let Some(row) = self.focus_row {
            if self.builder.label_only() {
                self.focus_field = OptionField::Label;
            }
            if let Some(entry) = self.builder.entry(row) {
                self.editor.set_text(entry.pair.field(self.focus_field));
            }
        }
    }

    // Keep the cursor when the stored text already matches what was typed.
    fn sync_editor_text(&mut self) {
        let Some(entry) = self.focus_row.and_then(|row| self.builder.entry(row)) else {
            return;
        };
        let stored = entry.pair.field(self.focus_field).to_string();
        if stored != self.editor.text() {
            self.editor.set_text(stored);
        }
    }

    /// Render the builder. Returns the terminal cursor position for the focused field.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 || !self.builder.is_visible() {
            return None;
        }

        let bottom = area.y + area.height;
        let mut y = area.y;
        let heading = Line::from(Span::styled(self.builder.heading(), theme.heading));
        put_line(area, &mut y, &heading, buf, theme);
        put_line(area, &mut y, &self.mode_toggle_line(theme), buf, theme);
        if let Some(err) = self.builder.load_error() {
            let line = Line::from(Span::styled(
                format!("Could not load options: {err}"),
                theme.danger,
            ));
            put_line(area, &mut y, &line, buf, theme);
        }

        let preview_budget =
            (area.height as u32 * self.options.max_preview_percent as u32 / 100).max(1) as usize;
        let preview = preview::preview_lines(&self.builder.preview(), theme);
        for line in preview.iter().take(preview_budget) {
            put_line(area, &mut y, line, buf, theme);
        }
        y = (y + 1).min(bottom);

        let help_h = u16::from(self.options.show_help && bottom > y);
        let hint_h = u16::from(self.focus_row.is_some() && bottom - y > help_h);
        let rows_area = Rect::new(area.x, y, area.width, bottom - y - help_h - hint_h);
        let cursor = self.render_rows(rows_area, buf, theme);

        if hint_h == 1 {
            let hint = self
                .focus()
                .and_then(|(row, field)| self.builder.entry(row).map(|e| e.hint(field).title));
            if let Some(title) = hint {
                render::render_str_clipped(
                    area.x,
                    bottom - help_h - 1,
                    0,
                    area.width,
                    buf,
                    title,
                    theme.text_muted,
                );
            }
        }
        if help_h == 1 {
            let ctx = HelpContext {
                has_focus: self.focus_row.is_some(),
                label_only: self.builder.label_only(),
                editable: self.builder.is_editable(),
            };
            let line = help::help_line(&self.options.bindings, ctx, theme);
            let mut help_y = bottom - 1;
            put_line(area, &mut help_y, &line, buf, theme);
        }
        cursor
    }

    fn mode_toggle_line(&self, theme: &Theme) -> Line<'static> {
        let (single, double) = if self.builder.label_only() {
            ("(•)", "( )")
        } else {
            ("( )", "(•)")
        };
        Line::from(vec![
            Span::styled(single, theme.accent),
            Span::styled(" Label only  ", theme.text_primary),
            Span::styled(double, theme.accent),
            Span::styled(" Value/label pairs", theme.text_primary),
        ])
    }

    fn render_rows(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let (content_area, scrollbar_x) = if self.options.show_scrollbar && area.width >= 2 {
            (
                Rect::new(area.x, area.y, area.width - 1, area.height),
                Some(area.x + area.width - 1),
            )
        } else {
            (area, None)
        };

        let mut tops = Vec::with_capacity(self.builder.len());
        let mut total = 0u32;
        for entry in self.builder.entries() {
            tops.push(total);
            total += LabeledInputView::height(&entry) as u32 + 1;
        }

        self.viewport.set_viewport(content_area.height);
        self.viewport.set_content(total);
        if let Some(row) = self.focus_row {
            if let Some(entry) = self.builder.entry(row) {
                self.viewport
                    .ensure_visible(tops[row], LabeledInputView::height(&entry) as u32);
            }
        }

        let mut cursor = None;
        let view_top = self.viewport.y;
        let view_bottom = view_top + content_area.height as u32;
        for (entry, top) in self.builder.entries().zip(tops.iter().copied()) {
            if top < view_top {
                continue;
            }
            if top >= view_bottom {
                break;
            }
            let h = (LabeledInputView::height(&entry) as u32).min(view_bottom - top) as u16;
            let row_area = Rect::new(
                content_area.x,
                content_area.y + (top - view_top) as u16,
                content_area.width,
                h,
            );
            let focus = (self.focus_row == Some(entry.index))
                .then_some((self.focus_field, &mut self.editor));
            let pos = self.rows.render(&entry, row_area, buf, theme, focus);
            if pos.is_some() {
                cursor = pos;
            }
        }

        if self.builder.is_empty() && self.builder.is_editable() {
            let text = format!(
                "No options yet. Press {} to add one.",
                self.options.bindings.add_row.help_key
            );
            render::render_str_clipped(
                content_area.x,
                content_area.y,
                0,
                content_area.width,
                buf,
                &text,
                theme.text_muted,
            );
        }

        if let Some(sb_x) = scrollbar_x {
            render::render_scrollbar(
                Rect::new(sb_x, area.y, 1, area.height),
                buf,
                &self.viewport,
                theme.text_muted,
            );
        }
        cursor
    }
}

fn put_line(area: Rect, y: &mut u16, line: &Line<'_>, buf: &mut Buffer, theme: &Theme) {
    if *y >= area.y + area.height {
        return;
    }
    render::render_spans_clipped(
        area.x,
        *y,
        0,
        area.width,
        buf,
        &line.spans,
        theme.text_primary,
    );
    *y += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui_options_core::codec;
    use ratatui_options_core::input::KeyCode;
    use ratatui_options_core::keymap;
    use ratatui_options_core::option::DisplayMode;

    fn view(raw: &str) -> OptionBuilderView {
        let (format, options) = codec::load(raw).unwrap();
        OptionBuilderView::new(OptionBuilder::new(options, format, DisplayMode::Select))
    }

    fn type_str(v: &mut OptionBuilderView, s: &str) -> BuilderAction {
        let mut last = BuilderAction::None;
        for ch in s.chars() {
            last = v.handle_event(InputEvent::key(KeyCode::Char(ch)));
        }
        last
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut v = view("a^Apple");
        assert_eq!(v.focus(), Some((0, OptionField::Value)));
        v.handle_event(InputEvent::key(KeyCode::Tab));
        assert_eq!(v.focus(), Some((0, OptionField::Label)));
        let action = type_str(&mut v, "s");
        assert_eq!(action, BuilderAction::SourceChanged("a^Apples".into()));
    }

    #[test]
    fn paste_strips_one_disallowed_run_per_edit() {
        let mut v = view("a^Apple");
        v.handle_event(InputEvent::key(KeyCode::Tab));
        let action = v.handle_event(InputEvent::Paste("x#y#z".to_string()));
        assert_eq!(action, BuilderAction::SourceChanged("a^Applexy#z".into()));
        assert_eq!(v.builder().options()[0].label, "Applexy#z");
    }

    #[test]
    fn rejected_keystroke_leaves_text_unchanged() {
        let mut v = view("a^Apple");
        v.handle_event(InputEvent::key(KeyCode::Tab));
        let action = v.handle_event(InputEvent::key(KeyCode::Char('^')));
        assert_eq!(action, BuilderAction::SourceChanged("a^Apple".into()));
        assert_eq!(type_str(&mut v, "s"), BuilderAction::SourceChanged("a^Apples".into()));
    }

    #[test]
    fn tab_wraps_to_next_row() {
        let mut v = view("a^Apple~b^Banana");
        v.handle_event(InputEvent::key(KeyCode::Tab));
        v.handle_event(InputEvent::key(KeyCode::Tab));
        assert_eq!(v.focus(), Some((1, OptionField::Value)));
        v.handle_event(InputEvent::key(KeyCode::BackTab));
        assert_eq!(v.focus(), Some((0, OptionField::Label)));
    }

    #[test]
    fn add_and_remove_rows_move_focus() {
        let mut v = view("");
        assert_eq!(v.focus(), None);
        let action = v.handle_event(InputEvent::Key(keymap::key_ctrl('n')));
        assert_eq!(action, BuilderAction::SourceChanged("^".into()));
        assert_eq!(v.focus(), Some((0, OptionField::Value)));
        type_str(&mut v, "y");
        v.handle_event(InputEvent::key(KeyCode::Tab));
        assert_eq!(type_str(&mut v, "Yes"), BuilderAction::SourceChanged("y^Yes".into()));

        let action = v.handle_event(InputEvent::Key(keymap::key_ctrl('d')));
        assert_eq!(action, BuilderAction::SourceChanged(String::new()));
        assert_eq!(v.focus(), None);
    }

    #[test]
    fn label_only_focuses_label() {
        let mut v = view("a^Apple");
        v.handle_event(InputEvent::Key(keymap::key_ctrl('l')));
        assert_eq!(v.focus(), Some((0, OptionField::Label)));
        assert!(v.builder().label_only());
        v.handle_event(InputEvent::key(KeyCode::Backspace));
        assert_eq!(v.builder().serialize(), "Appl^Appl");
    }

    #[test]
    fn hidden_builder_renders_nothing() {
        let mut v = view("a^Apple");
        assert_eq!(
            v.handle_builder_event(BuilderEvent::ModeChanged("text".into())),
            BuilderAction::Hidden
        );
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        assert_eq!(v.render(area, &mut buf, &Theme::default()), None);
        assert_eq!(buf, Buffer::empty(area));
    }
}
