//! `ratatui-options-core` is the headless half of the option builder: everything needed to turn
//! a compact option string into editable value/label rows and back, without drawing anything.
//!
//! The option builder edits the choices of a multiple-choice form field (a select, a radio
//! group or a checkbox group). The choices live in a single host text field, either as
//! tilda/caret text (`a^Apple~b^Banana`) or as a JSON object (`{"a":"Apple"}`).
//!
//! ## Design goals
//!
//! - Event-loop agnostic: the host feeds [`builder::BuilderEvent`]s and decides when to redraw.
//! - No global registry: the host builds an [`builder::OptionBuilder`] from a
//!   [`field::BuilderConfig`] and hands it whatever [`field::FieldHost`] owns its form fields.
//! - Loading fails closed: a source that parses as neither format leaves the list empty.
//!
//! ## Getting started
//!
//! Most users should depend on the facade crate `ratatui-options`, which adds ratatui widgets.
//!
//! Useful entry points:
//! - [`builder::OptionBuilder`]: the option list controller.
//! - [`codec`]: tilda/caret and JSON parsing and writing.
//! - [`validate::validate`]: value/label consistency for one row.
//! - [`line_input::LineInput`]: single-line input that sanitizes as you type.
pub mod error;

pub mod codec;
pub mod option;
pub mod sanitize;
pub mod validate;

pub mod builder;
pub mod entry;
pub mod field;
pub mod preview;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod render;
pub mod viewport;

pub mod input;
pub mod keymap;
pub mod line_input;
