use std::{env, error::Error, io};

use cd_inventory::config::Config;
use cd_inventory::console::Terminal;
use cd_inventory::interaction::{InteractionLoop, Session};

use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize the logger, RUST_LOG still wins over the default level
    let mut logger = pretty_env_logger::formatted_builder();
    logger.filter(None, log::LevelFilter::Warn);
    if let Ok(filters) = env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    }
    logger.init();

    let config = Config::from_args(env::args().skip(1));
    info!("Using inventory file {}", config.inventory_path.display());

    // Drive the menu over the process's stdin and stdout
    let stdin = io::stdin();
    let stdout = io::stdout();
    let terminal = Terminal::new(stdin.lock(), stdout.lock());
    let mut interaction = InteractionLoop::new(terminal, Session::new(config.inventory_path));
    interaction.run()?;
    Ok(())
}
