use std::fmt;

/// One value/label pair.
///
/// `value` is the machine token written to the source field, `label` is the text shown to users.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionPair {
    pub value: String,
    pub label: String,
}

impl OptionPair {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Both sides are non-empty, so the pair shows up in the preview.
    pub fn is_complete(&self) -> bool {
        !self.value.is_empty() && !self.label.is_empty()
    }

    pub fn field(&self, field: OptionField) -> &str {
        match field {
            OptionField::Value => &self.value,
            OptionField::Label => &self.label,
        }
    }

    pub fn field_mut(&mut self, field: OptionField) -> &mut String {
        match field {
            OptionField::Value => &mut self.value,
            OptionField::Label => &mut self.label,
        }
    }
}

/// Ordered list of options; order is display order and serialization order.
pub type OptionList = Vec<OptionPair>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionField {
    Value,
    Label,
}

/// Which control kind the preview renders as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    #[default]
    Select,
    Radio,
    Checkbox,
}

impl DisplayMode {
    /// Exact match against `select`, `radio` or `checkbox`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "select" => Some(DisplayMode::Select),
            "radio" => Some(DisplayMode::Radio),
            "checkbox" => Some(DisplayMode::Checkbox),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Select => "select",
            DisplayMode::Radio => "radio",
            DisplayMode::Checkbox => "checkbox",
        }
    }

    /// Shared maximum length for every value and label while this mode is active.
    pub fn max_length(self) -> usize {
        match self {
            DisplayMode::Select => 255,
            DisplayMode::Radio | DisplayMode::Checkbox => 100,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parse_is_exact() {
        assert_eq!(DisplayMode::parse("radio"), Some(DisplayMode::Radio));
        assert_eq!(DisplayMode::parse("Radio"), None);
        assert_eq!(DisplayMode::parse("bogus"), None);
    }

    #[test]
    fn max_length_per_mode() {
        assert_eq!(DisplayMode::Select.max_length(), 255);
        assert_eq!(DisplayMode::Radio.max_length(), 100);
        assert_eq!(DisplayMode::Checkbox.max_length(), 100);
    }

    #[test]
    fn completeness_requires_both_sides() {
        assert!(OptionPair::new("a", "b").is_complete());
        assert!(!OptionPair::new("a", "").is_complete());
        assert!(!OptionPair::default().is_complete());
    }
}
