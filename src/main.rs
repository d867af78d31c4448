//! Binary entrypoint for the buncafe CLI.
//!
//! Commands:
//! - `init` - create a starter `config.toml`
//! - `validate` - load the catalog and report every integrity violation
//! - `menu [--category <c>]` - render the drink and snack menu
//! - `list <table> [--category <c>]` - list a table in declaration order
//! - `show <table> <id>` - record detail with resolved references
//! - `daily [--date YYYY-MM-DD] [--random]` - message of the day
//! - `export --dir <dir>` - write the catalog as JSON seed files
//!
//! See the library crate docs for module-level details: `buncafe::`.
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::info;

use buncafe::catalog::{
    integrity, loader, seed, Catalog, CatalogError, DrinkCategory, Rarity, SnackCategory,
    TableKind,
};
use buncafe::config::Config;
use buncafe::{daily, menu};

#[derive(Parser)]
#[command(name = "buncafe")]
#[command(about = "Catalog engine for the Bun & Bean rabbit cafe")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a starter configuration file
    Init,
    /// Load the catalog and report every integrity violation
    Validate,
    /// Render the drink and snack menu
    Menu {
        /// Restrict to one category (signature, classic, yogurt, seasonal, sweets, savory)
        #[arg(short = 'C', long)]
        category: Option<String>,
    },
    /// List a table in declaration order
    List {
        /// Table name (drinks, snacks, bun-treats, bun-toys, friendship-levels,
        /// rabbits, reward-tiers, shop-items, daily-messages, stamp-icons)
        table: String,
        /// Category filter, where the table has one
        #[arg(short = 'C', long)]
        category: Option<String>,
    },
    /// Show one record with its references resolved
    Show {
        table: String,
        id: String,
    },
    /// Print the message of the day
    Daily {
        /// Date to show, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Pick a random message instead of today's
        #[arg(long)]
        random: bool,
    },
    /// Write the catalog as JSON seed files
    Export {
        /// Output directory (created if missing)
        #[arg(short, long)]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Init = cli.command {
        Config::create_default(&cli.config)?;
        println!("Wrote starter config to {}", cli.config);
        return Ok(());
    }

    // Missing config is fine (defaults apply); a broken one is not.
    let config = if Path::new(&cli.config).exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Init => unreachable!("handled above"),
        Commands::Validate => run_validate(&config),
        Commands::Menu { category } => run_menu(&config, category.as_deref()),
        Commands::List { table, category } => run_list(&config, &table, category.as_deref()),
        Commands::Show { table, id } => run_show(&config, &table, &id),
        Commands::Daily { date, random } => run_daily(&config, date.as_deref(), random),
        Commands::Export { dir } => run_export(&config, &dir),
    }
}

fn init_logging(config: &Config, verbose: u8) {
    let level = match verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));
    if !atty::is(atty::Stream::Stderr) {
        builder.write_style(env_logger::WriteStyle::Never);
    }
    let _ = builder.try_init();
}

/// Gather tables from the configured seed directory, or the built-in seeds.
fn load_tables(config: &Config) -> Result<buncafe::catalog::CatalogTables> {
    match &config.cafe.seed_dir {
        Some(dir) => {
            info!("loading seed overrides from {dir}");
            Ok(loader::load_from_dir(dir)?)
        }
        None => Ok(seed::builtin_tables()),
    }
}

fn load_catalog(config: &Config) -> Result<Catalog> {
    Ok(Catalog::from_tables(load_tables(config)?)?)
}

fn run_validate(config: &Config) -> Result<()> {
    let tables = load_tables(config)?;
    let catalog = match Catalog::from_tables_unchecked(tables) {
        Ok(catalog) => catalog,
        Err(CatalogError::Integrity(violations)) => {
            for violation in &violations {
                eprintln!("  ✗ {violation}");
            }
            bail!("catalog has {} violation(s)", violations.len());
        }
        Err(other) => return Err(other.into()),
    };

    let violations = integrity::violations(&catalog);
    if violations.is_empty() {
        println!(
            "Catalog OK: {} drinks, {} snacks, {} treats, {} toys, {} rabbits, {} levels, {} tiers, {} shop items, {} daily messages, {} stamp icons",
            catalog.drinks().len(),
            catalog.snacks().len(),
            catalog.bun_treats().len(),
            catalog.bun_toys().len(),
            catalog.rabbits().len(),
            catalog.friendship_levels().len(),
            catalog.reward_tiers().len(),
            catalog.shop_items().len(),
            catalog.daily_messages().len(),
            catalog.stamp_icons().len(),
        );
        Ok(())
    } else {
        for violation in &violations {
            eprintln!("  ✗ {violation}");
        }
        bail!("catalog has {} violation(s)", violations.len());
    }
}

fn run_menu(config: &Config, category: Option<&str>) -> Result<()> {
    let catalog = load_catalog(config)?;
    println!("=== {} ===", config.cafe.name);
    if !config.cafe.tagline.is_empty() {
        println!("{}", config.cafe.tagline);
    }
    println!();

    match category {
        None => {
            print!("{}", menu::format_drink_menu(&catalog, None));
            println!();
            print!("{}", menu::format_snack_menu(&catalog, None));
        }
        Some(raw) => {
            if let Some(c) = DrinkCategory::parse(raw) {
                print!("{}", menu::format_drink_menu(&catalog, Some(c)));
            } else if let Some(c) = SnackCategory::parse(raw) {
                print!("{}", menu::format_snack_menu(&catalog, Some(c)));
            } else {
                bail!("unknown category '{raw}'");
            }
        }
    }
    Ok(())
}

fn run_list(config: &Config, table: &str, category: Option<&str>) -> Result<()> {
    let catalog = load_catalog(config)?;
    let kind = TableKind::parse(table)
        .ok_or_else(|| CatalogError::UnknownTable(table.to_string()))?;

    let lines = match category {
        None => menu::list_lines(&catalog, kind),
        Some(raw) => match kind {
            TableKind::Drinks => {
                let c = DrinkCategory::parse(raw)
                    .ok_or_else(|| anyhow::anyhow!("unknown drink category '{raw}'"))?;
                catalog
                    .drinks_by_category(c)
                    .into_iter()
                    .map(menu::drink_line)
                    .collect()
            }
            TableKind::Snacks => {
                let c = SnackCategory::parse(raw)
                    .ok_or_else(|| anyhow::anyhow!("unknown snack category '{raw}'"))?;
                catalog
                    .snacks_by_category(c)
                    .into_iter()
                    .map(menu::snack_line)
                    .collect()
            }
            TableKind::Rabbits => {
                let rarity = Rarity::parse(raw)
                    .ok_or_else(|| anyhow::anyhow!("unknown rarity '{raw}'"))?;
                catalog
                    .rabbits_by_rarity(rarity)
                    .into_iter()
                    .map(menu::rabbit_line)
                    .collect()
            }
            other => bail!("table {other} has no category filter"),
        },
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn run_show(config: &Config, table: &str, id: &str) -> Result<()> {
    let catalog = load_catalog(config)?;
    let kind = TableKind::parse(table)
        .ok_or_else(|| CatalogError::UnknownTable(table.to_string()))?;

    match menu::describe(&catalog, kind, id) {
        Ok(detail) => {
            print!("{detail}");
            Ok(())
        }
        // Absence is not a crash: say so and leave the exit code clean.
        Err(CatalogError::NotFound { table, id }) => {
            println!("No record '{id}' in {table}.");
            Ok(())
        }
        Err(other) => Err(other.into()),
    }
}

fn run_daily(config: &Config, date: Option<&str>, random: bool) -> Result<()> {
    let catalog = load_catalog(config)?;
    let message = if random {
        daily::random_message(&catalog)
    } else {
        let date = match date {
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|e| anyhow::anyhow!("invalid date '{raw}': {e}"))?,
            None => Local::now().date_naive(),
        };
        daily::message_for_date(&catalog, date)
    };

    match message {
        Some(message) => println!("{}", daily::format_daily(&catalog, message)),
        None => println!("No daily messages in the catalog."),
    }
    Ok(())
}

fn run_export(config: &Config, dir: &Path) -> Result<()> {
    let catalog = load_catalog(config)?;
    loader::export_to_dir(&catalog, dir)?;
    println!("Exported catalog seed files to {}", dir.display());
    Ok(())
}
