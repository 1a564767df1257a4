// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the TUI starts. Subcommands:
// - list [--category C]: print the trip list, optionally filtered
// - show <id>: print one trip's details
// - config --show | --path | --init [--force]: manage the config file

use crate::api::TripClient;
use crate::config::{Config, VERSION};
use crate::trips::{display, filter_trips, CategoryFilter, TripId};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

/// Browse trips from the trip API in the terminal
#[derive(Parser)]
#[command(name = "tripdeck")]
#[command(version = VERSION)]
#[command(about = "Browse trips, guides and packing lists from the trip API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print all trips, optionally filtered by category
    List {
        /// All, BEACH, CITY, SNOW, LAKE, FOREST or SEA
        #[arg(long, short, value_parser = parse_category, default_value = "All")]
        category: CategoryFilter,
    },

    /// Print the details of one trip
    Show {
        /// Trip id
        id: TripId,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Write a config file with defaults
        #[arg(long)]
        init: bool,

        /// Overwrite an existing file with --init
        #[arg(long, requires = "init")]
        force: bool,
    },
}

fn parse_category(s: &str) -> Result<CategoryFilter, String> {
    CategoryFilter::parse(s).ok_or_else(|| {
        let labels: Vec<&str> = CategoryFilter::ALL.iter().map(|c| c.label()).collect();
        format!("unknown category '{}' (expected one of {})", s, labels.join(", "))
    })
}

/// Commands that do not need logging or the network
pub fn handle_config_command(command: &Commands) -> Result<bool> {
    let Commands::Config {
        show,
        path,
        init,
        force,
    } = command
    else {
        return Ok(false);
    };

    if *path {
        handle_config_path()?;
    } else if *show {
        handle_config_show();
    } else if *init {
        handle_config_init(*force)?;
    } else {
        println!("Usage: tripdeck config [--show|--path|--init [--force]]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
        println!("  --init    Write a config file with defaults");
    }
    Ok(true)
}

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine home directory for config path")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show() {
    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", Config::from_env().to_toml());
}

fn handle_config_init(force: bool) -> Result<()> {
    let path = config_path()?;
    Config::write_default(&path, force)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Network-backed commands
// ─────────────────────────────────────────────────────────────────────────────

/// Print the trip list filtered by `category`
pub async fn run_list(config: &Config, category: CategoryFilter) -> Result<()> {
    let client = TripClient::new(&config.api_url)?;
    let trips = client
        .fetch_all_trips()
        .await
        .with_context(|| format!("Failed to fetch trips from {}", client.trips_url()))?;

    let visible = filter_trips(&trips, category);
    tracing::debug!("{} of {} trips match {}", visible.len(), trips.len(), category);

    print!(
        "{}",
        display::list_text(&visible, category, &config.display)
    );
    Ok(())
}

/// Print the detail view of one trip
pub async fn run_show(config: &Config, id: TripId) -> Result<()> {
    let client = TripClient::new(&config.api_url)?;
    let detail = client
        .fetch_trip_detail(id)
        .await
        .with_context(|| format!("Failed to fetch trip {}", id))?;

    print!(
        "{}",
        display::detail_text(Some(&detail), &config.display)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_category_flag() {
        let cli = Cli::try_parse_from(["tripdeck", "list", "--category", "city"]).unwrap();
        match cli.command {
            Some(Commands::List { category }) => assert_eq!(category, CategoryFilter::City),
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_list_defaults_to_all() {
        let cli = Cli::try_parse_from(["tripdeck", "list"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                category: CategoryFilter::All
            })
        ));
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!(Cli::try_parse_from(["tripdeck", "list", "-c", "DESERT"]).is_err());
    }

    #[test]
    fn test_show_requires_numeric_id() {
        let cli = Cli::try_parse_from(["tripdeck", "show", "7"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Show { id: 7 })));
        assert!(Cli::try_parse_from(["tripdeck", "show", "seven"]).is_err());
    }

    #[test]
    fn test_no_subcommand_runs_tui() {
        let cli = Cli::try_parse_from(["tripdeck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_force_requires_init() {
        assert!(Cli::try_parse_from(["tripdeck", "config", "--force"]).is_err());
        assert!(Cli::try_parse_from(["tripdeck", "config", "--init", "--force"]).is_ok());
    }

    #[test]
    fn test_non_config_commands_fall_through() {
        let handled = handle_config_command(&Commands::Show { id: 1 }).unwrap();
        assert!(!handled);
    }
}
