//! `ratatui-options` draws and drives an option builder: the editor for the choices of a select,
//! radio or checkbox form field.
//!
//! The headless model lives in [`ratatui_options_core`] and is re-exported here, so most users
//! only depend on this crate.
//!
//! ```no_run
//! use ratatui_options::builder::OptionBuilder;
//! use ratatui_options::field::BuilderConfig;
//! use ratatui_options::field::FieldMap;
//! use ratatui_options::field::HostField;
//! use ratatui_options::option_builder::OptionBuilderView;
//!
//! let mut fields = FieldMap::new()
//!     .with("type", HostField::select(["select", "radio", "checkbox"], "radio"))
//!     .with("question", HostField::text("Favourite fruit"))
//!     .with("source", HostField::text("a^Apple~b^Banana"));
//! let config = BuilderConfig::new("source", "type", "question");
//! let builder = OptionBuilder::initialize(config, &mut fields)?;
//! let view = OptionBuilderView::new(builder);
//! # let _ = view;
//! # Ok::<(), ratatui_options::error::ConfigurationError>(())
//! ```
pub mod theme;

pub mod help;
pub mod labeled_input;
pub mod preview;

pub mod option_builder;

pub use ratatui_options_core::builder;
pub use ratatui_options_core::codec;
pub use ratatui_options_core::entry;
pub use ratatui_options_core::error;
pub use ratatui_options_core::field;
pub use ratatui_options_core::input;
pub use ratatui_options_core::keymap;
pub use ratatui_options_core::line_input;
pub use ratatui_options_core::option;
pub use ratatui_options_core::sanitize;
pub use ratatui_options_core::validate;

#[cfg(feature = "crossterm")]
pub use ratatui_options_core::crossterm_input;
