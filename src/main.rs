use anyhow::Result;
use clap::Parser;
use console::{Term, style};
use folder_factory::cli::{Cli, Commands, run_create};
use folder_factory::config::types::Config;
use folder_factory::init;
use folder_factory::menu::show_main_menu;
use folder_factory::signal::setup_shutdown_signal;
use log::{info, warn};
use rust_i18n::t;

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en-US");

fn main() -> Result<()> {
    let cli = Cli::parse();
    init::init(cli.verbose);
    let shutdown_signal = setup_shutdown_signal()?;

    // Load config and set locale
    let mut config = Config::new()?;
    rust_i18n::set_locale(config.settings.language.as_str());

    if let Some(Commands::Create(args)) = &cli.command {
        return run_create(args, &config, &shutdown_signal);
    }

    let term = Term::stdout();

    loop {
        match show_main_menu(&term, &shutdown_signal, &mut config) {
            Ok(true) => {}
            Ok(false) => {
                term.clear_screen()?;
                println!("\n{}", style(t!("main_menu.goodbye")).green().bold());
                info!("Program exited normally");
                break;
            }
            Err(e) => {
                warn!("Program error: {e}");
                eprintln!("{} {}", style(t!("main_menu.error_prefix")).red().bold(), e);
                break;
            }
        }
    }

    Ok(())
}
