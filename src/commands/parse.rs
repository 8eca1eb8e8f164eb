use super::PickerArgs;
use crate::{libs::messages::Message, msg_error_anyhow};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Display string in the active format, e.g. "5:45 PM"
    value: String,

    #[command(flatten)]
    picker: PickerArgs,
}

pub fn cmd(args: ParseArgs) -> Result<()> {
    let mut picker = args.picker.picker();
    let canonical = picker.canonical_for(&args.value).map_err(|e| {
        tracing::debug!(input = %args.value, error = %e, "parse failed");
        msg_error_anyhow!(Message::InvalidDisplayValue(args.value.clone()))
    })?;

    println!("{}", canonical);
    Ok(())
}
