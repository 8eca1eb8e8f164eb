//! Command-line interface of the timepicker application.
//!
//! Every value command (`format`, `parse`, `list`, `pick`, `demo`) starts from
//! the stored [`Config`] and applies the overrides in [`PickerArgs`] before
//! building the picker, so one-off runs never touch `config.json`.

pub mod demo;
pub mod format;
pub mod init;
pub mod list;
pub mod parse;
pub mod pick;

use crate::libs::codec::SourcePattern;
use crate::libs::config::Config;
use crate::libs::formatter::{BindingType, TimeFormatOptions};
use crate::libs::messages::Message;
use crate::libs::picker::TimePicker;
use crate::msg_warning;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Convert a canonical value to its display string", arg_required_else_help = true)]
    Format(format::FormatArgs),
    #[command(about = "Convert a display string to its canonical value", arg_required_else_help = true)]
    Parse(parse::ParseArgs),
    #[command(about = "Show the list of selectable times")]
    List(list::ListArgs),
    #[command(about = "Pick a time interactively")]
    Pick(pick::PickArgs),
    #[command(about = "Replay the demo time values")]
    Demo(demo::DemoArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Format(args) => format::cmd(args),
            Commands::Parse(args) => parse::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Pick(args) => pick::cmd(args),
            Commands::Demo(args) => demo::cmd(args),
        }
    }
}

/// Per-run overrides of the stored picker settings.
#[derive(Debug, Clone, Default, Args)]
pub struct PickerArgs {
    /// Locale tag, e.g. de-DE
    #[arg(long)]
    pub locale: Option<String>,

    /// Time style: short, medium or long; anything else means medium
    #[arg(long)]
    pub style: Option<String>,

    /// Minutes between list entries
    #[arg(long)]
    pub step: Option<u32>,

    /// Canonical value pattern: HHmm or HHmmss
    #[arg(long)]
    pub source_pattern: Option<SourcePattern>,

    /// Explicit display pattern, e.g. "HH 'h' mm"
    #[arg(long)]
    pub pattern: Option<String>,

    /// Show times relative to now
    #[arg(long)]
    pub relative: bool,

    /// JSON file with predefined time values
    #[arg(long)]
    pub values: Option<PathBuf>,
}

impl PickerArgs {
    /// The stored configuration with these overrides applied.
    ///
    /// An unreadable configuration file is reported and replaced by defaults.
    pub fn config(&self) -> Config {
        let mut config = Config::read().unwrap_or_else(|e| {
            msg_warning!(Message::ConfigReadFailed(e.to_string()));
            Config::default()
        });

        if let Some(locale) = &self.locale {
            config.locale = locale.clone();
        }
        if let Some(style) = &self.style {
            config.style = style.clone();
        }
        if let Some(step) = self.step {
            config.step = step;
        }
        if let Some(source_pattern) = self.source_pattern {
            config.source_pattern = source_pattern;
        }
        if let Some(values) = &self.values {
            config.predefined_values = Some(values.clone());
        }
        config
    }

    /// Builds the picker for this run.
    ///
    /// `--pattern` and `--relative` bind the display value to a time type.
    /// Relative output without an explicit pattern parses absolute input with
    /// the pattern the style would have used.
    pub fn picker(&self) -> TimePicker {
        let mut picker = self.config().picker();
        if self.pattern.is_none() && !self.relative {
            return picker;
        }

        let pattern = self
            .pattern
            .clone()
            .or_else(|| picker.display_pattern().map(|pattern| pattern.as_str().to_string()));
        picker.bind_display(Some(BindingType::Time(TimeFormatOptions { pattern, relative: self.relative })));
        picker
    }
}
