use super::PickerArgs;
use crate::{libs::messages::Message, msg_error_anyhow};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Canonical value, e.g. 174502
    value: String,

    #[command(flatten)]
    picker: PickerArgs,
}

pub fn cmd(args: FormatArgs) -> Result<()> {
    let mut picker = args.picker.picker();
    let display = picker.display_for(&args.value).map_err(|e| {
        tracing::debug!(input = %args.value, error = %e, "format failed");
        msg_error_anyhow!(Message::InvalidCanonicalValue(args.value.clone()))
    })?;

    println!("{}", display);
    Ok(())
}
