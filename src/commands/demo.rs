use super::PickerArgs;
use crate::{libs::messages::Message, msg_print};
use anyhow::Result;
use clap::Args;

/// Canonical values the demo walks through, in order.
pub const DEMO_VALUES: [&str; 6] = ["223001", "174502", "174503", "081506", "100101", "175832"];

#[derive(Debug, Args)]
pub struct DemoArgs {
    #[command(flatten)]
    picker: PickerArgs,
}

pub fn cmd(args: DemoArgs) -> Result<()> {
    let mut picker = args.picker.picker();
    picker.on_change(|event| {
        if !event.is_invalid {
            msg_print!(Message::DemoTimeChange(event.canonical_value.clone()));
        }
    });

    msg_print!(Message::DemoHeader, true);
    for value in DEMO_VALUES {
        picker.set_canonical(value);
    }
    Ok(())
}
