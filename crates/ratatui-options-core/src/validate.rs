//! Value/label consistency checks for a single option row.
//!
//! A row is either complete, fully empty (ignored, reported as a warning), or half filled
//! (reported as an error on the empty side). Invalid rows stay in the list so they can be fixed.

pub const MISSING_LABEL_MESSAGE: &str =
    "This option is invalid. Value input is not empty but Label input is empty.";
pub const MISSING_VALUE_MESSAGE: &str =
    "This option is invalid. Value input is empty but Label input is not empty.";
pub const IGNORED_MESSAGE: &str =
    "This option is ignored because both value and label inputs are empty.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    None,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationStatus {
    Ignored,
    MissingLabel,
    MissingValue,
    Valid,
}

impl ValidationStatus {
    pub fn message(self) -> &'static str {
        match self {
            ValidationStatus::Ignored => IGNORED_MESSAGE,
            ValidationStatus::MissingLabel => MISSING_LABEL_MESSAGE,
            ValidationStatus::MissingValue => MISSING_VALUE_MESSAGE,
            ValidationStatus::Valid => "",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            ValidationStatus::Ignored => Severity::Warning,
            ValidationStatus::MissingLabel | ValidationStatus::MissingValue => Severity::Error,
            ValidationStatus::Valid => Severity::None,
        }
    }

    pub fn label_has_error(self) -> bool {
        self == ValidationStatus::MissingLabel
    }

    pub fn value_has_error(self) -> bool {
        self == ValidationStatus::MissingValue
    }

    pub fn is_ignored(self) -> bool {
        self == ValidationStatus::Ignored
    }
}

/// Classify a value/label pair.
///
/// With `label_only` the label is authoritative and the value is taken to equal it.
pub fn validate(value: &str, label: &str, label_only: bool) -> ValidationStatus {
    let value = if label_only { label } else { value };

    match (value.is_empty(), label.is_empty()) {
        (false, true) => ValidationStatus::MissingLabel,
        (true, false) => ValidationStatus::MissingValue,
        (true, true) => ValidationStatus::Ignored,
        (false, false) => ValidationStatus::Valid,
    }
}
