//! # Timepicker
//!
//! A time-of-day picker control and the command-line tool around it.
//!
//! The control keeps two strings in sync: a fixed-width canonical value such
//! as `174502` exchanged with storage, and a locale-aware display value such
//! as `5:45:02 PM` shown to the user. It also produces the list of times a
//! user picks from, spaced by a configurable step.
//!
//! ## Features
//!
//! - **Canonical codec**: strict `HHmmss` / `HHmm` encoding and decoding
//! - **Display patterns**: short, medium and long styles per locale, or an
//!   explicit pattern from a bound time type
//! - **Relative phrasing**: "in 5 minutes", "2 hours ago"
//! - **Time lists**: generated from a step or loaded from a JSON file
//! - **Change events**: one notification per completed value transition
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timepicker::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
