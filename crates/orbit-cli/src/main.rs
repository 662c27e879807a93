//! Orbit CLI - Command-line access to the dashboard object graph.

use clap::Parser;
use orbit_cli::commands;
use orbit_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> orbit_cli::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    if let Some(database) = cli.database {
        config.database = database;
    }

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Config(args) => commands::execute_config(args, &config, &config_path, &formatter),
        Command::Resolve(args) => commands::execute_resolve(args, &commands::open_service(&config)?, &formatter),
        Command::Save(args) => commands::execute_save(args, &commands::open_service(&config)?, &formatter),
        Command::List(args) => commands::execute_list(args, &commands::open_service(&config)?, &formatter),
        Command::Roots => commands::execute_roots(&commands::open_service(&config)?, &formatter),
    }
}
