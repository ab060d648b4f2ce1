//! Host-owned form fields the option builder reads from and writes to.
//!
//! The builder never looks fields up on its own; the host hands it a [`FieldHost`] together with
//! a [`BuilderConfig`] naming the three collaborators.

use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// A selection control; `value` holds the selected choice.
    Select { choices: Vec<String> },
    /// A single-line text input.
    Text,
    /// Anything else (textarea, checkbox, ...). Never accepted as a collaborator.
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostField {
    pub kind: FieldKind,
    pub value: String,
    pub read_only: bool,
}

impl HostField {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Text,
            value: value.into(),
            read_only: false,
        }
    }

    /// A select field with `selected` as its current value.
    pub fn select<I, S>(choices: I, selected: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: FieldKind::Select {
                choices: choices.into_iter().map(Into::into).collect(),
            },
            value: selected.into(),
            read_only: false,
        }
    }

    pub fn other(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Other(kind.into()),
            value: value.into(),
            read_only: false,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, FieldKind::Text)
    }

    pub fn choices(&self) -> Option<&[String]> {
        match &self.kind {
            FieldKind::Select { choices } => Some(choices),
            _ => None,
        }
    }
}

pub trait FieldHost {
    fn field(&self, id: &str) -> Option<&HostField>;
    fn field_mut(&mut self, id: &str) -> Option<&mut HostField>;
}

/// In-memory [`FieldHost`].
#[derive(Clone, Debug, Default)]
pub struct FieldMap {
    fields: HashMap<String, HostField>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<String>, field: HostField) -> Self {
        self.insert(id, field);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, field: HostField) {
        self.fields.insert(id.into(), field);
    }

    /// Set a field's value the way a user edit would; read-only fields are left alone.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.fields.get_mut(id) {
            Some(field) if !field.read_only => {
                field.value = value.into();
                true
            }
            _ => false,
        }
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.fields.get(id).map(|f| f.value.as_str())
    }
}

impl FieldHost for FieldMap {
    fn field(&self, id: &str) -> Option<&HostField> {
        self.fields.get(id)
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut HostField> {
        self.fields.get_mut(id)
    }
}

/// Ids of the collaborator fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Text input holding the raw option data; overwritten with the builder's output.
    pub source_id: String,
    /// Select whose value picks the display mode.
    pub controller_id: String,
    /// Text input whose value is the builder's heading.
    pub label_id: String,
}

impl BuilderConfig {
    pub fn new(
        source_id: impl Into<String>,
        controller_id: impl Into<String>,
        label_id: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            controller_id: controller_id.into(),
            label_id: label_id.into(),
        }
    }
}
