mod cli;

use clap::Parser;
use cli::{Args, Command};
use ratio_placeholder::catalog::{Catalog, CatalogPolicy};
use ratio_placeholder::components::Rounding;
use ratio_placeholder::config::Config;
use ratio_placeholder::plan::Planner;

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = match Config::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match args.command {
        Command::Resolve {
            dimensions,
            policy,
            rounding,
            json,
        } => {
            // Merge settings: CLI args > config file > built-in defaults
            let policy = policy.map(CatalogPolicy::from).unwrap_or(config.catalog.policy);
            let rounding = rounding
                .map(Rounding::from)
                .unwrap_or(config.components.rounding);
            let catalog = Catalog::with_extra(policy, &config.catalog.extra);

            Planner::new(catalog, config.components.bound, rounding)
                .map_err(|e| e.to_string())
                .and_then(|planner| cli::resolve(&planner, dimensions, json))
        }
        Command::Catalog { policy } => {
            let policy = policy.map(CatalogPolicy::from).unwrap_or(config.catalog.policy);
            cli::print_catalog(&Catalog::with_extra(policy, &config.catalog.extra));
            Ok(())
        }
        Command::Svg {
            dimensions,
            data_uri,
        } => cli::print_svg(dimensions, data_uri),
        Command::Config { action } => {
            cli::handle_config_action(action, args.config.as_deref(), &config);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
