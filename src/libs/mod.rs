//! Core library modules of the timepicker application.
//!
//! ## Layout
//!
//! - **Values**: [`time_of_day`], [`codec`] for canonical strings
//! - **Display**: [`pattern`], [`locale`], [`formatter`], [`relative`]
//! - **Lists**: [`step_list`] for generated and predefined time lists
//! - **Control**: [`picker`], the facade tying the pieces together
//! - **Application**: [`config`], [`data_storage`], [`logging`], [`messages`], [`view`]
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use timepicker::libs::locale::BuiltinLocaleData;
//! use timepicker::libs::picker::TimePicker;
//!
//! let mut picker = TimePicker::new(Arc::new(BuiltinLocaleData)).with_step(30);
//! assert_eq!(picker.items().len(), 48);
//! ```

pub mod codec;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod logging;
pub mod messages;
pub mod pattern;
pub mod picker;
pub mod relative;
pub mod step_list;
pub mod time_of_day;
pub mod view;
