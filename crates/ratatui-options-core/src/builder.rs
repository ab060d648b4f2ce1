//! The option list controller.
//!
//! [`OptionBuilder`] owns the option list and mediates between the codecs, the row validator,
//! and the host fields named in a [`BuilderConfig`]. Every change arrives as a [`BuilderEvent`];
//! [`OptionBuilder::dispatch`] applies it and reports a [`BuilderAction`] so the caller knows
//! whether to redraw or to write the serialized list back.

use crate::codec::SourceFormat;
use crate::entry;
use crate::entry::LabeledEntry;
use crate::error::ConfigurationError;
use crate::error::FormatError;
use crate::error::Result;
use crate::field::BuilderConfig;
use crate::field::FieldHost;
use crate::option::DisplayMode;
use crate::option::OptionField;
use crate::option::OptionList;
use crate::option::OptionPair;
use crate::preview::Preview;
use crate::validate::ValidationStatus;
use std::borrow::Cow;
use tracing::debug;
use tracing::error;
use tracing::trace;
use tracing::warn;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuilderEvent {
    /// The mode selector changed to this token.
    ModeChanged(String),
    /// The shared label field changed.
    SharedLabelChanged(String),
    OptionChanged {
        index: usize,
        field: OptionField,
        text: String,
    },
    LabelOnlyChanged(bool),
    AddOption,
    RemoveOption(usize),
}

impl BuilderEvent {
    /// Route a change notification from a host field to the matching event.
    ///
    /// Returns `None` for fields the builder does not listen to. The source field is read-only
    /// and is not routed.
    pub fn from_field_change(config: &BuilderConfig, id: &str, value: &str) -> Option<Self> {
        if id == config.controller_id {
            Some(BuilderEvent::ModeChanged(value.to_string()))
        } else if id == config.label_id {
            Some(BuilderEvent::SharedLabelChanged(value.to_string()))
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuilderAction {
    None,
    Redraw,
    /// An unrecognized mode was selected; the builder is hidden until a valid one arrives.
    Hidden,
    /// The option list changed; carries the new serialized source text.
    SourceChanged(String),
}

#[derive(Debug)]
pub struct OptionBuilder {
    config: BuilderConfig,
    options: OptionList,
    mode: DisplayMode,
    max_length: usize,
    label_only: bool,
    shared_label: String,
    format: SourceFormat,
    visible: bool,
    mode_linked: bool,
    load_error: Option<FormatError>,
}

impl OptionBuilder {
    /// A detached builder holding `options`, saved with `format`.
    pub fn new(options: OptionList, format: SourceFormat, mode: DisplayMode) -> Self {
        Self {
            config: BuilderConfig::default(),
            options,
            mode,
            max_length: mode.max_length(),
            label_only: false,
            shared_label: String::new(),
            format,
            visible: true,
            mode_linked: true,
            load_error: None,
        }
    }

    /// Wire a builder to its host fields and load the source text.
    ///
    /// Missing or wrong-kind collaborators are fatal. A source that parses as neither format is
    /// logged and leaves the list empty; the error is kept in [`OptionBuilder::load_error`].
    pub fn initialize(
        config: BuilderConfig,
        host: &mut impl FieldHost,
    ) -> std::result::Result<Self, ConfigurationError> {
        let controller = host
            .field(&config.controller_id)
            .ok_or_else(|| ConfigurationError::Controller {
                id: config.controller_id.clone(),
            })?;
        let Some(choices) = controller.choices() else {
            return Err(ConfigurationError::Controller {
                id: config.controller_id.clone(),
            });
        };
        let mode_linked = choices
            .iter()
            .any(|c| DisplayMode::parse(&c.to_ascii_lowercase()).is_some());
        let selected_mode = DisplayMode::parse(&controller.value.to_ascii_lowercase());

        let label = host
            .field(&config.label_id)
            .filter(|f| f.is_text())
            .ok_or_else(|| ConfigurationError::Label {
                id: config.label_id.clone(),
            })?;
        let shared_label = label.value.clone();

        let source = host
            .field_mut(&config.source_id)
            .filter(|f| f.is_text())
            .ok_or_else(|| ConfigurationError::Source {
                id: config.source_id.clone(),
            })?;
        source.read_only = true;
        let raw = source.value.clone();

        let mut builder = Self::new(Vec::new(), SourceFormat::detect(&raw), DisplayMode::default());
        builder.config = config;
        builder.shared_label = shared_label;
        builder.mode_linked = mode_linked;

        if mode_linked {
            match selected_mode {
                Some(mode) => builder.apply_mode(mode),
                None => builder.visible = false,
            }
        } else {
            error!(
                controller = %builder.config.controller_id,
                "option builder mode selector offers none of \"select\", \"radio\" or \"checkbox\""
            );
        }

        // A bad source is kept in `load_error`; the collaborators themselves are fine.
        let _ = builder.load(&raw);

        Ok(builder)
    }

    /// Re-read the source field and replace the option list.
    pub fn reload(&mut self, host: &impl FieldHost) -> Result<()> {
        let raw = host
            .field(&self.config.source_id)
            .filter(|f| f.is_text())
            .map(|f| f.value.clone())
            .ok_or_else(|| ConfigurationError::Source {
                id: self.config.source_id.clone(),
            })?;
        self.load(&raw)?;
        Ok(())
    }

    fn load(&mut self, raw: &str) -> std::result::Result<(), FormatError> {
        self.options.clear();
        self.format = SourceFormat::detect(raw);
        match self.format.parse(raw) {
            Ok(options) => {
                debug!(format = ?self.format, count = options.len(), "option builder loaded source");
                self.options = options;
                self.load_error = None;
                Ok(())
            }
            Err(err) => {
                error!(
                    source = %self.config.source_id,
                    %err,
                    "option builder expects the source to be a tilda/caret separated string or JSON"
                );
                self.load_error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn options(&self) -> &[OptionPair] {
        &self.options
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn label_only(&self) -> bool {
        self.label_only
    }

    pub fn shared_label(&self) -> &str {
        &self.shared_label
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the mode selector offered a recognized mode at initialization.
    pub fn is_mode_linked(&self) -> bool {
        self.mode_linked
    }

    pub fn load_error(&self) -> Option<&FormatError> {
        self.load_error.as_ref()
    }

    /// False while the last load failed. The list cannot be edited or written back then, so
    /// the unreadable source text is left as it is.
    pub fn is_editable(&self) -> bool {
        self.load_error.is_none()
    }

    pub fn heading(&self) -> String {
        format!("{} option builder", self.mode)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<LabeledEntry<'_>> {
        self.options
            .get(index)
            .map(|pair| LabeledEntry::new(index, pair, self.label_only, self.max_length))
    }

    pub fn entries(&self) -> impl Iterator<Item = LabeledEntry<'_>> + '_ {
        self.options
            .iter()
            .enumerate()
            .map(|(i, pair)| LabeledEntry::new(i, pair, self.label_only, self.max_length))
    }

    pub fn row_status(&self, index: usize) -> Option<ValidationStatus> {
        self.entry(index).map(|e| e.status())
    }

    /// Switch the display mode.
    ///
    /// Unknown tokens leave the mode and maximum length untouched and hide the builder.
    pub fn set_mode(&mut self, token: &str) -> bool {
        match DisplayMode::parse(token) {
            Some(mode) => {
                self.apply_mode(mode);
                true
            }
            None => {
                debug!(token, "option builder hidden for unknown mode");
                self.visible = false;
                false
            }
        }
    }

    fn apply_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.max_length = mode.max_length();
        self.visible = true;
        debug!(%mode, max_length = self.max_length, "option builder mode changed");
    }

    /// Override the maximum input length of every row. Requests below
    /// [`entry::MIN_MAX_LENGTH`] are ignored; the next mode change resets it.
    pub fn set_max_length(&mut self, requested: usize) -> usize {
        self.max_length = entry::accept_max_length(self.max_length, requested);
        self.max_length
    }

    pub fn set_label_only(&mut self, label_only: bool) {
        self.label_only = label_only;
    }

    pub fn on_shared_label_change(&mut self, text: impl Into<String>) {
        self.shared_label = text.into();
    }

    /// Apply an edit to one field of one row. Returns the row's new status, or `None` when
    /// `index` is out of range.
    pub fn on_option_field_change(
        &mut self,
        index: usize,
        field: OptionField,
        text: &str,
    ) -> Option<ValidationStatus> {
        let pair = self.options.get_mut(index)?;
        let status = entry::apply_edit(pair, field, text, self.label_only, self.max_length);
        trace!(index, ?field, ?status, "option edited");
        Some(status)
    }

    /// Append an empty row.
    pub fn add_option(&mut self) -> usize {
        self.options.push(OptionPair::default());
        self.options.len() - 1
    }

    pub fn remove_option(&mut self, index: usize) -> Option<OptionPair> {
        (index < self.options.len()).then(|| self.options.remove(index))
    }

    /// The options as they will be written: in label-only mode each value is its label.
    pub fn effective_options(&self) -> Cow<'_, [OptionPair]> {
        if !self.label_only {
            return Cow::Borrowed(self.options.as_slice());
        }
        Cow::Owned(
            self.options
                .iter()
                .map(|o| OptionPair::new(o.label.clone(), o.label.clone()))
                .collect(),
        )
    }

    /// Encode the list with the codec the source was loaded with. Invalid rows are written
    /// verbatim.
    pub fn serialize(&self) -> String {
        self.format.write(&self.effective_options())
    }

    pub fn preview(&self) -> Preview {
        Preview::build(self.mode, &self.shared_label, &self.effective_options())
    }

    /// Overwrite the source field with [`OptionBuilder::serialize`]. Does nothing (and returns
    /// `false`) after a failed load or when the host has no source field.
    pub fn write_back(&self, host: &mut impl FieldHost) -> bool {
        if !self.is_editable() {
            return false;
        }
        match host.field_mut(&self.config.source_id) {
            Some(field) => {
                field.value = self.serialize();
                field.read_only = true;
                true
            }
            None => false,
        }
    }

    pub fn dispatch(&mut self, event: BuilderEvent) -> BuilderAction {
        match event {
            BuilderEvent::ModeChanged(_) if !self.mode_linked => BuilderAction::None,
            BuilderEvent::OptionChanged { .. }
            | BuilderEvent::LabelOnlyChanged(_)
            | BuilderEvent::AddOption
            | BuilderEvent::RemoveOption(_)
                if !self.is_editable() =>
            {
                warn!("option builder source did not load; edit ignored");
                BuilderAction::None
            }
            BuilderEvent::ModeChanged(token) => {
                if self.set_mode(&token) {
                    BuilderAction::Redraw
                } else {
                    BuilderAction::Hidden
                }
            }
            BuilderEvent::SharedLabelChanged(text) => {
                self.on_shared_label_change(text);
                BuilderAction::Redraw
            }
            BuilderEvent::OptionChanged { index, field, text } => {
                match self.on_option_field_change(index, field, &text) {
                    Some(_) => BuilderAction::SourceChanged(self.serialize()),
                    None => BuilderAction::None,
                }
            }
            BuilderEvent::LabelOnlyChanged(on) => {
                if self.label_only == on {
                    return BuilderAction::None;
                }
                self.set_label_only(on);
                BuilderAction::SourceChanged(self.serialize())
            }
            BuilderEvent::AddOption => {
                self.add_option();
                BuilderAction::SourceChanged(self.serialize())
            }
            BuilderEvent::RemoveOption(index) => match self.remove_option(index) {
                Some(_) => BuilderAction::SourceChanged(self.serialize()),
                None => BuilderAction::None,
            },
        }
    }

    /// [`OptionBuilder::dispatch`], then write the source field when the list changed.
    pub fn handle(&mut self, event: BuilderEvent, host: &mut impl FieldHost) -> BuilderAction {
        let action = self.dispatch(event);
        if matches!(action, BuilderAction::SourceChanged(_)) {
            self.write_back(host);
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    fn builder(raw: &str) -> OptionBuilder {
        let (format, options) = codec::load(raw).unwrap();
        OptionBuilder::new(options, format, DisplayMode::Select)
    }

    #[test]
    fn set_mode_updates_max_length() {
        let mut b = builder("");
        assert!(b.set_mode("radio"));
        assert_eq!(b.max_length(), 100);
        assert!(b.set_mode("select"));
        assert_eq!(b.max_length(), 255);
        assert!(b.set_mode("checkbox"));
        assert_eq!(b.max_length(), 100);
    }

    #[test]
    fn max_length_override_has_a_floor() {
        let mut b = builder("a^Apple");
        assert_eq!(b.set_max_length(5), 255);
        assert_eq!(b.set_max_length(12), 12);
        b.on_option_field_change(0, OptionField::Label, "Pineapple juice");
        assert_eq!(b.options()[0].label, "Pineapple ju");
        b.set_mode("radio");
        assert_eq!(b.max_length(), 100);
    }

    #[test]
    fn unknown_mode_hides_without_changing_state() {
        let mut b = builder("");
        b.set_mode("radio");
        assert_eq!(b.dispatch(BuilderEvent::ModeChanged("bogus".into())), BuilderAction::Hidden);
        assert_eq!(b.mode(), DisplayMode::Radio);
        assert_eq!(b.max_length(), 100);
        assert!(!b.is_visible());

        b.set_mode("select");
        assert!(b.is_visible());
    }

    #[test]
    fn edits_reserialize_in_source_format() {
        let mut b = builder("a^Apple~b^Banana");
        let action = b.dispatch(BuilderEvent::OptionChanged {
            index: 1,
            field: OptionField::Label,
            text: "Blueberry".into(),
        });
        assert_eq!(
            action,
            BuilderAction::SourceChanged("a^Apple~b^Blueberry".into())
        );

        let mut b = builder(r#"{"a":"Apple"}"#);
        b.on_option_field_change(0, OptionField::Value, "x");
        assert_eq!(b.serialize(), r#"{"x":"Apple"}"#);
    }

    #[test]
    fn out_of_range_edit_is_a_no_op() {
        let mut b = builder("a^Apple");
        let action = b.dispatch(BuilderEvent::OptionChanged {
            index: 7,
            field: OptionField::Label,
            text: "x".into(),
        });
        assert_eq!(action, BuilderAction::None);
        assert_eq!(b.serialize(), "a^Apple");
    }

    #[test]
    fn invalid_rows_are_kept_and_written() {
        let mut b = builder("a^Apple");
        let status = b.on_option_field_change(0, OptionField::Label, "");
        assert_eq!(status, Some(ValidationStatus::MissingLabel));
        assert_eq!(b.len(), 1);
        assert_eq!(b.serialize(), "a^");
    }

    #[test]
    fn edits_are_limited_by_mode_length() {
        let mut b = builder("a^Apple");
        b.set_mode("radio");
        let long = "x".repeat(150);
        b.on_option_field_change(0, OptionField::Label, &long);
        assert_eq!(b.options()[0].label.len(), 100);
    }

    #[test]
    fn label_only_writes_label_as_value() {
        let mut b = builder("a^Apple");
        let action = b.dispatch(BuilderEvent::LabelOnlyChanged(true));
        assert_eq!(action, BuilderAction::SourceChanged("Apple^Apple".into()));
        assert_eq!(b.dispatch(BuilderEvent::LabelOnlyChanged(true)), BuilderAction::None);

        b.dispatch(BuilderEvent::LabelOnlyChanged(false));
        assert_eq!(b.serialize(), "a^Apple");
    }

    #[test]
    fn add_and_remove_rows() {
        let mut b = builder("a^Apple");
        b.dispatch(BuilderEvent::AddOption);
        assert_eq!(b.row_status(1), Some(ValidationStatus::Ignored));
        assert_eq!(b.serialize(), "a^Apple~^");
        assert_eq!(
            b.dispatch(BuilderEvent::RemoveOption(0)),
            BuilderAction::SourceChanged("^".into())
        );
        assert_eq!(b.dispatch(BuilderEvent::RemoveOption(5)), BuilderAction::None);
    }

    #[test]
    fn preview_uses_shared_label_and_skips_incomplete_rows() {
        let mut b = builder("a^Apple~b^Banana");
        b.on_option_field_change(1, OptionField::Value, "");
        b.dispatch(BuilderEvent::SharedLabelChanged("Fruit".into()));
        let p = b.preview();
        assert_eq!(p.heading, "Fruit");
        assert_eq!(p.choices.len(), 1);
        assert_eq!(b.heading(), "select option builder");
    }

    #[test]
    fn routes_host_field_changes() {
        let config = BuilderConfig::new("src", "ctl", "lbl");
        assert_eq!(
            BuilderEvent::from_field_change(&config, "ctl", "radio"),
            Some(BuilderEvent::ModeChanged("radio".into()))
        );
        assert_eq!(
            BuilderEvent::from_field_change(&config, "lbl", "Pick"),
            Some(BuilderEvent::SharedLabelChanged("Pick".into()))
        );
        assert_eq!(BuilderEvent::from_field_change(&config, "src", "x"), None);
    }
}
