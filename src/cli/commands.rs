//! Subcommand handlers for resolve, catalog, svg and config actions.

use std::path::Path;

use ratio_placeholder::catalog::Catalog;
use ratio_placeholder::config::{default_path as get_config_path, Config, DEFAULT_CONFIG};
use ratio_placeholder::plan::{PlaceholderPlan, Planner};
use ratio_placeholder::ratio::reduce;
use ratio_placeholder::svg::{empty_placeholder_svg, placeholder_data_uri};

use super::args::ConfigAction;

/// Resolve dimensions with `planner` and print the plan.
pub fn resolve(planner: &Planner, dimensions: (u32, u32), json: bool) -> Result<(), String> {
    let (width, height) = dimensions;
    let plan = planner.plan(width, height).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&plan).map_err(|e| e.to_string())?;
        println!("{}", out);
    } else {
        print!("{}", format_plan(&plan));
    }
    Ok(())
}

/// Human-readable plan summary.
pub fn format_plan(plan: &PlaceholderPlan) -> String {
    format!(
        "Source:      {}x{}\n\
         Reduced:     {}\n\
         Canonical:   {} (distance {:.4})\n\
         Components:  {}x{} (scaled {})\n\
         Box style:   {}\n\
         Empty image: {}\n",
        plan.source.width(),
        plan.source.height(),
        plan.reduced,
        plan.canonical,
        plan.distance,
        plan.components.x,
        plan.components.y,
        plan.scaled,
        plan.box_style.to_style_attribute(),
        plan.empty_image_url,
    )
}

/// List catalog entries in the order they are matched.
pub fn print_catalog(catalog: &Catalog) {
    println!(
        "{} entries, {:?} distance:",
        catalog.len(),
        catalog.metric()
    );
    for (i, entry) in catalog.entries().iter().enumerate() {
        println!("  [{:2}] {:<8} {:.4}", i, entry.to_string(), entry.value());
    }
}

/// Print the blank placeholder for `dimensions`, reduced to lowest terms.
pub fn print_svg(dimensions: (u32, u32), data_uri: bool) -> Result<(), String> {
    let (width, height) = dimensions;
    let ratio = reduce(width, height).map_err(|e| e.to_string())?;

    if data_uri {
        println!("{}", placeholder_data_uri(ratio, None));
    } else {
        println!("{}", empty_placeholder_svg(ratio));
    }
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config_path: Option<&Path>, config: &Config) {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(get_config_path);

    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            println!("  Catalog policy: {:?}", config.catalog.policy);
            println!("  Extra ratios: {}", config.catalog.extra.len());
            println!("  Component bound: {}", config.components.bound);
            println!("  Rounding: {:?}", config.components.rounding);
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                eprintln!("Config file already exists: {}", config_path.display());
                eprintln!("Use 'ratio-placeholder config show' to view current settings.");
                std::process::exit(1);
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error creating config directory: {}", e);
                    std::process::exit(1);
                }
            }

            if let Err(e) = std::fs::write(&config_path, DEFAULT_CONFIG) {
                eprintln!("Error writing config file: {}", e);
                std::process::exit(1);
            }

            println!("Created config file: {}", config_path.display());
        }
    }
}
