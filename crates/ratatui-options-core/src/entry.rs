//! The labeled input row: one option's value and label plus its validation state.

use crate::option::OptionField;
use crate::option::OptionPair;
use crate::sanitize;
use crate::validate;
use crate::validate::ValidationStatus;

/// Rows never accept a maximum length below this.
pub const MIN_MAX_LENGTH: usize = 10;

/// Title and placeholder shown for an input field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldHint {
    pub title: &'static str,
    pub placeholder: &'static str,
}

pub const VALUE_HINT: FieldHint = FieldHint {
    title: "Value shown in CSV",
    placeholder: "CSV value",
};

pub const LABEL_HINT: FieldHint = FieldHint {
    title: "Value shown to user and in PDF",
    placeholder: "Human friendly value",
};

pub const LABEL_ONLY_HINT: FieldHint = FieldHint {
    title: "Same value used in CSV, shown in to user and in PDF",
    placeholder: "CSV & Human friendly value",
};

/// Borrowed view of one row of the option list.
#[derive(Clone, Copy, Debug)]
pub struct LabeledEntry<'a> {
    pub index: usize,
    pub pair: &'a OptionPair,
    pub label_only: bool,
    pub max_length: usize,
}

impl<'a> LabeledEntry<'a> {
    pub fn new(index: usize, pair: &'a OptionPair, label_only: bool, max_length: usize) -> Self {
        Self {
            index,
            pair,
            label_only,
            max_length,
        }
    }

    /// 1-based number shown as "Option N".
    pub fn display_number(&self) -> usize {
        self.index + 1
    }

    pub fn title(&self) -> String {
        format!("Option {}", self.display_number())
    }

    pub fn status(&self) -> ValidationStatus {
        validate::validate(&self.pair.value, &self.pair.label, self.label_only)
    }

    /// The value field is hidden in label-only mode.
    pub fn shows_value(&self) -> bool {
        !self.label_only
    }

    pub fn hint(&self, field: OptionField) -> FieldHint {
        match field {
            OptionField::Value => VALUE_HINT,
            OptionField::Label if self.label_only => LABEL_ONLY_HINT,
            OptionField::Label => LABEL_HINT,
        }
    }

    pub fn has_error(&self, field: OptionField) -> bool {
        let status = self.status();
        match field {
            OptionField::Value => status.value_has_error(),
            OptionField::Label => status.label_has_error(),
        }
    }
}

/// Sanitize `text`, store it in `field` and re-check the row.
///
/// In label-only mode the label is authoritative: the value is overwritten with it whichever
/// field was edited.
pub fn apply_edit(
    pair: &mut OptionPair,
    field: OptionField,
    text: &str,
    label_only: bool,
    max_length: usize,
) -> ValidationStatus {
    *pair.field_mut(field) = sanitize::sanitize(text, max_length);
    if label_only {
        pair.value = pair.label.clone();
    }
    validate::validate(&pair.value, &pair.label, label_only)
}

/// Accept a per-row maximum length override unless it is below [`MIN_MAX_LENGTH`].
pub fn accept_max_length(current: usize, requested: usize) -> usize {
    if requested >= MIN_MAX_LENGTH {
        requested
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_one_based() {
        let pair = OptionPair::new("a", "b");
        let e = LabeledEntry::new(0, &pair, false, 100);
        assert_eq!(e.title(), "Option 1");
        assert_eq!(e.status(), ValidationStatus::Valid);
    }

    #[test]
    fn hints_follow_label_only_mode() {
        let pair = OptionPair::default();
        let both = LabeledEntry::new(0, &pair, false, 100);
        let single = LabeledEntry::new(0, &pair, true, 100);
        assert_eq!(both.hint(OptionField::Label), LABEL_HINT);
        assert_eq!(single.hint(OptionField::Label), LABEL_ONLY_HINT);
        assert_eq!(single.hint(OptionField::Value), VALUE_HINT);
        assert!(!single.shows_value());
    }

    #[test]
    fn edit_sanitizes_and_revalidates() {
        let mut pair = OptionPair::new("a", "Apple");
        let status = apply_edit(&mut pair, OptionField::Label, "", false, 100);
        assert_eq!(status, ValidationStatus::MissingLabel);

        let status = apply_edit(&mut pair, OptionField::Label, "Ap#ple pie", false, 5);
        assert_eq!(pair.label, "Apple");
        assert_eq!(status, ValidationStatus::Valid);
    }

    #[test]
    fn label_only_edit_mirrors_label() {
        let mut pair = OptionPair::new("old", "old");
        apply_edit(&mut pair, OptionField::Label, "new", true, 100);
        assert_eq!(pair, OptionPair::new("new", "new"));

        apply_edit(&mut pair, OptionField::Value, "ignored", true, 100);
        assert_eq!(pair.value, "new");
    }

    #[test]
    fn max_length_override_has_a_floor() {
        assert_eq!(accept_max_length(100, 9), 100);
        assert_eq!(accept_max_length(100, 10), 10);
        assert_eq!(accept_max_length(100, 255), 255);
    }

    #[test]
    fn error_side_is_reported_per_field() {
        let pair = OptionPair::new("", "b");
        let e = LabeledEntry::new(3, &pair, false, 100);
        assert!(e.has_error(OptionField::Value));
        assert!(!e.has_error(OptionField::Label));
    }
}
