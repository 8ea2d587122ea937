use colored::Colorize;
use std::error::Error;
use std::io;
use vlsm_calculator::config::Config;
use vlsm_calculator::console::Console;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = Config::from_env();
    if let Err(e) = log4rs::init_file(&config.log_config, Default::default()) {
        eprintln!(
            "{} {}: {e}",
            "logging disabled".on_red(),
            config.log_config.display()
        );
    }
    log::info!("#Start main() config={config:?}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock(), config.output_order).run()?;

    log::info!("#End main()");
    Ok(())
}
