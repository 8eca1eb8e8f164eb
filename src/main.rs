use timepicker::commands::Cli;
use timepicker::libs::logging;

fn main() -> anyhow::Result<()> {
    logging::init();
    Cli::menu()
}
