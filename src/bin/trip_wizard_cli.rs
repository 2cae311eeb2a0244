use std::{env, process};

use trip_wizard::{cli, config::ConfigManager, init};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let command = env::args().nth(1).unwrap_or_else(|| "new".to_string());
    let manager = ConfigManager::from_env();

    match command.as_str() {
        "new" => cli::run_new_trip(&manager)?,
        "destinations" => cli::list_destinations(&manager)?,
        "init-config" => cli::init_config(&manager)?,
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!(
        "Usage: trip_wizard_cli [command]\n\
         Commands:\n  \
         new            run the trip wizard (default)\n  \
         destinations   list available destinations\n  \
         init-config    write the configuration file"
    );
}
