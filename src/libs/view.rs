use super::picker::{ChangeEvent, TimeListItem};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn items(items: &[TimeListItem]) {
        let mut table = Table::new();

        table.add_row(row!["KEY", "VALUE", "TIME"]);
        for item in items {
            table.add_row(row![item.key, item.value, item.text]);
        }
        table.printstd();
    }

    pub fn event(event: &ChangeEvent) {
        let mut table = Table::new();

        table.add_row(row!["CANONICAL", "DISPLAY", "INVALID"]);
        table.add_row(row![event.canonical_value, event.display_value, event.is_invalid]);
        table.printstd();
    }
}
