use super::PickerArgs;
use crate::{
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print the list as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    picker: PickerArgs,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let mut picker = args.picker.picker();
    let predefined = picker.predefined_values().is_some();
    let step = picker.step();
    let items = picker.items();

    if args.json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    if items.is_empty() {
        msg_info!(Message::EmptyTimeList);
        return Ok(());
    }

    if predefined {
        msg_print!(Message::PredefinedListHeader(items.len()), true);
    } else {
        msg_print!(Message::TimeListHeader(step.minutes()), true);
    }
    View::items(items);
    Ok(())
}
