use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::render;
use crate::sanitize;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;

#[derive(Clone, Debug)]
pub struct LineInputOptions {
    pub style: Style,
    pub placeholder_style: Style,
    pub placeholder: String,
    /// Strip disallowed characters after every edit.
    pub sanitize: bool,
    pub max_chars: usize,
}

impl Default for LineInputOptions {
    fn default() -> Self {
        Self {
            style: Style::default(),
            placeholder_style: Style::default(),
            placeholder: String::new(),
            sanitize: true,
            max_chars: 255,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineInputAction {
    None,
    Changed,
    Submitted(String),
}

/// Single-line text input.
#[derive(Clone, Debug, Default)]
pub struct LineInput {
    text: String,
    cursor: usize, // char index
    scroll_x: u32, // display columns
    options: LineInputOptions,
}

impl LineInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LineInputOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &LineInputOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: LineInputOptions) {
        self.options = options;
        self.apply_limits();
    }

    pub fn set_max_chars(&mut self, max_chars: usize) {
        self.options.max_chars = max_chars;
        self.apply_limits();
    }

    /// Replace the text without filtering and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_len();
        self.scroll_x = 0;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn input(&mut self, event: InputEvent) -> LineInputAction {
        match event {
            InputEvent::Paste(s) => {
                let s: String = s.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                if s.is_empty() {
                    return LineInputAction::None;
                }
                for ch in s.chars() {
                    self.insert_char(ch);
                }
                self.apply_limits();
                LineInputAction::Changed
            }
            InputEvent::Key(key) => self.handle_key(key),
        }
    }

    pub fn render_ref(&mut self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let row = Rect::new(area.x, area.y, area.width, 1);
        buf.set_style(row, self.options.style);
        self.ensure_cursor_visible(area.width);

        if self.text.is_empty() {
            render::render_str_clipped(
                area.x,
                area.y,
                0,
                area.width,
                buf,
                &self.options.placeholder,
                self.options.placeholder_style,
            );
            return;
        }
        render::render_str_clipped(
            area.x,
            area.y,
            self.scroll_x,
            area.width,
            buf,
            &self.text,
            self.options.style,
        );
    }

    pub fn cursor_pos(&self, area: Rect) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let x = (self.cursor_display_x() as u32).checked_sub(self.scroll_x)?;
        if x >= area.width as u32 {
            return None;
        }
        Some((area.x + x as u16, area.y))
    }

    fn handle_key(&mut self, key: KeyEvent) -> LineInputAction {
        match key.code {
            KeyCode::Char(c) => {
                if !key.modifiers.is_plain() {
                    return LineInputAction::None;
                }
                self.insert_char(c);
                self.apply_limits();
                LineInputAction::Changed
            }
            KeyCode::Enter => LineInputAction::Submitted(self.text.clone()),
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return LineInputAction::None;
                }
                let start = self.byte_index(self.cursor - 1);
                let end = self.byte_index(self.cursor);
                self.text.replace_range(start..end, "");
                self.cursor -= 1;
                self.apply_limits();
                LineInputAction::Changed
            }
            KeyCode::Delete => {
                if self.cursor >= self.char_len() {
                    return LineInputAction::None;
                }
                let start = self.byte_index(self.cursor);
                let end = self.byte_index(self.cursor + 1);
                self.text.replace_range(start..end, "");
                self.apply_limits();
                LineInputAction::Changed
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                LineInputAction::None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                LineInputAction::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                LineInputAction::None
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                LineInputAction::None
            }
            KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Esc
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown => LineInputAction::None,
        }
    }

    // Runs after every edit, like a keyup handler: filter, truncate, then keep the cursor on
    // the same logical position.
    fn apply_limits(&mut self) {
        let before = self.char_len();
        let next = if self.options.sanitize {
            sanitize::sanitize(&self.text, self.options.max_chars)
        } else {
            sanitize::truncate_chars(&self.text, self.options.max_chars)
        };
        if next != self.text {
            let removed = before.saturating_sub(next.chars().count());
            self.text = next;
            self.cursor = self.cursor.saturating_sub(removed);
        }
        self.cursor = self.cursor.min(self.char_len());
    }

    fn insert_char(&mut self, ch: char) {
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, ch);
        self.cursor += 1;
    }

    fn ensure_cursor_visible(&mut self, width: u16) {
        let cx = self.cursor_display_x() as u32;
        let width = width.max(1) as u32;
        if cx < self.scroll_x {
            self.scroll_x = cx;
        } else if cx >= self.scroll_x + width {
            self.scroll_x = cx + 1 - width;
        }
    }

    fn cursor_display_x(&self) -> usize {
        self.text
            .chars()
            .take(self.cursor)
            .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
            .sum()
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        match self.text.char_indices().nth(char_idx) {
            Some((i, _)) => i,
            None => self.text.len(),
        }
    }
}
