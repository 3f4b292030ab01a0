use cidr_calc::calculator;
use cidr_calc::config::{init_logging, Settings};
use colored::Colorize;
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let settings = Settings::from_env();
    if let Err(e) = init_logging(&settings) {
        eprintln!("{} logging disabled: {e}", "WARN".on_red());
    }
    log::info!("#Start main()");

    println!("version: {}", env!("CARGO_PKG_VERSION"));
    let stdin = io::stdin();
    let stdout = io::stdout();
    calculator::run(stdin.lock(), &mut stdout.lock())?;

    log::info!("#End main()");
    Ok(())
}
