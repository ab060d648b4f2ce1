use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub keys: Vec<KeyEvent>,
    pub help_key: String,
    pub help_desc: String,
}

impl Binding {
    pub fn new(
        help_key: impl Into<String>,
        help_desc: impl Into<String>,
        keys: Vec<KeyEvent>,
    ) -> Self {
        Self {
            keys,
            help_key: help_key.into(),
            help_desc: help_desc.into(),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.keys.iter().any(|k| key_event_matches(k, event))
    }
}

pub fn key_event_matches(pattern: &KeyEvent, event: &KeyEvent) -> bool {
    pattern.code == event.code && modifiers_match(pattern.modifiers, event.modifiers)
}

fn modifiers_match(pattern: KeyModifiers, event: KeyModifiers) -> bool {
    pattern.shift == event.shift && pattern.ctrl == event.ctrl && pattern.alt == event.alt
}

pub fn key_ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c)).with_modifiers(KeyModifiers::ctrl())
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code)
}

/// Navigation and list-editing commands of the option builder view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuilderCommand {
    NextRow,
    PrevRow,
    NextField,
    PrevField,
    AddRow,
    RemoveRow,
    ToggleLabelOnly,
}

/// Key bindings for [`BuilderCommand`]s; keys not bound here go to the focused input.
#[derive(Clone, Debug)]
pub struct BuilderBindings {
    pub next_row: Binding,
    pub prev_row: Binding,
    pub next_field: Binding,
    pub prev_field: Binding,
    pub add_row: Binding,
    pub remove_row: Binding,
    pub toggle_label_only: Binding,
}

impl Default for BuilderBindings {
    fn default() -> Self {
        Self {
            next_row: Binding::new("↓", "next option", vec![key(KeyCode::Down)]),
            prev_row: Binding::new("↑", "prev option", vec![key(KeyCode::Up)]),
            next_field: Binding::new("tab", "next field", vec![key(KeyCode::Tab)]),
            prev_field: Binding::new(
                "S-tab",
                "prev field",
                vec![
                    key(KeyCode::BackTab),
                    key(KeyCode::BackTab).with_modifiers(KeyModifiers::shift()),
                ],
            ),
            add_row: Binding::new("C-n", "add option", vec![key_ctrl('n')]),
            remove_row: Binding::new("C-d", "delete option", vec![key_ctrl('d')]),
            toggle_label_only: Binding::new("C-l", "label only", vec![key_ctrl('l')]),
        }
    }
}

impl BuilderBindings {
    pub fn command(&self, event: &KeyEvent) -> Option<BuilderCommand> {
        [
            (&self.next_row, BuilderCommand::NextRow),
            (&self.prev_row, BuilderCommand::PrevRow),
            (&self.next_field, BuilderCommand::NextField),
            (&self.prev_field, BuilderCommand::PrevField),
            (&self.add_row, BuilderCommand::AddRow),
            (&self.remove_row, BuilderCommand::RemoveRow),
            (&self.toggle_label_only, BuilderCommand::ToggleLabelOnly),
        ]
        .into_iter()
        .find(|(b, _)| b.matches(event))
        .map(|(_, cmd)| cmd)
    }
}
