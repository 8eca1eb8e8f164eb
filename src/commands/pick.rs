//! Interactive time selection.
//!
//! The user either picks an entry of the time list or types a display string.
//! Invalid input is reported and the prompt repeats until a valid time is set
//! or the value is cleared with empty input.

use super::PickerArgs;
use crate::{
    libs::{
        messages::Message,
        picker::{ChangeEvent, TimePicker},
        view::View,
    },
    msg_bail_anyhow, msg_debug, msg_error, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct PickArgs {
    /// Select the list entry with this key without prompting
    #[arg(long)]
    key: Option<usize>,

    #[command(flatten)]
    picker: PickerArgs,
}

pub fn cmd(args: PickArgs) -> Result<()> {
    let mut picker = args.picker.picker();
    picker.on_change(|event| {
        msg_debug!(format!("change event: {:?}", event));
    });

    if let Some(key) = args.key {
        if !picker.items().iter().any(|item| item.key == key) {
            msg_bail_anyhow!(Message::ListKeyNotFound(key));
        }
        if let Some(event) = picker.select(key) {
            report(&event);
        }
        return Ok(());
    }

    loop {
        let event = if picker.items().is_empty() {
            enter_manually(&mut picker)?
        } else {
            let modes = [Message::PickFromList.to_string(), Message::PickEnterManually.to_string()];
            let mode = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPickMode.to_string())
                .items(&modes)
                .default(0)
                .interact()?;
            match mode {
                0 => select_from_list(&mut picker)?,
                _ => enter_manually(&mut picker)?,
            }
        };

        match event {
            Some(event) if !event.is_invalid => {
                report(&event);
                return Ok(());
            }
            _ => msg_info!(Message::PickTryAgain),
        }
    }
}

fn select_from_list(picker: &mut TimePicker) -> Result<Option<ChangeEvent>> {
    let (keys, texts): (Vec<usize>, Vec<String>) =
        picker.items().iter().map(|item| (item.key, item.text.clone())).unzip();

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTime.to_string())
        .items(&texts)
        .default(0)
        .max_length(12)
        .interact()?;

    Ok(picker.select(keys[index]))
}

fn enter_manually(picker: &mut TimePicker) -> Result<Option<ChangeEvent>> {
    let pattern = picker.display_pattern().map(|pattern| pattern.as_str().to_string()).unwrap_or_default();
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTime(pattern).to_string())
        .allow_empty(true)
        .interact_text()?;

    let event = picker.set_display(&input);
    if event.as_ref().is_some_and(|event| event.is_invalid) {
        msg_error!(Message::InvalidDisplayValue(input));
    }
    Ok(event)
}

fn report(event: &ChangeEvent) {
    if event.canonical_value.is_empty() {
        msg_info!(Message::ValueCleared);
        return;
    }
    msg_print!(Message::ChangeEventHeader, true);
    View::event(event);
}
