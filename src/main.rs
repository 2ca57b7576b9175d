// SPDX-License-Identifier: PMPL-1.0-or-later

//! locale-symbols: inspect, export and verify locale symbol tables
//!
//! Tables come from an explicit `--bundle` file, from the configured bundle
//! directories, or from the tables built into the crate, in that order.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use locale_symbols::config::Config;
use locale_symbols::export::{self, ExportFormat};
use locale_symbols::{bundles, source, verify, LocaleId, SymbolTable, SymbolValue};
use std::borrow::Cow;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "locale-symbols")]
#[command(version)]
#[command(about = "Inspect, export and verify locale calendar symbol tables")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (default: $LOCALE_SYMBOLS_CONFIG or ./locale-symbols.yaml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TableArgs {
    /// Locale of the table, e.g. hi_IN (default from config)
    #[arg(short, long)]
    locale: Option<String>,

    /// Load the table from this bundle document instead
    #[arg(short, long, value_name = "FILE", conflicts_with = "locale")]
    bundle: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value stored under a key
    Get {
        /// Symbol key, e.g. islamic.DayNames
        #[arg(value_name = "KEY")]
        key: String,

        #[command(flatten)]
        table: TableArgs,
    },

    /// List every key in a table
    Keys {
        #[command(flatten)]
        table: TableArgs,
    },

    /// Serialize a table as a bundle document
    Export {
        #[command(flatten)]
        table: TableArgs,

        /// Output format (default from config)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        /// Write to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check list lengths and value shapes
    Verify {
        #[command(flatten)]
        table: TableArgs,
    },

    /// List available locales
    Locales,
}

fn init_tracing(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(config.log_level.as_deref().unwrap_or("warn"))
        }),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_table(args: &TableArgs, config: &Config) -> Result<Cow<'static, SymbolTable>> {
    if let Some(path) = &args.bundle {
        return Ok(Cow::Owned(source::load_file(path)?));
    }

    let locale = match &args.locale {
        Some(raw) => LocaleId::parse(raw).with_context(|| format!("invalid locale {:?}", raw))?,
        None => config.default_locale()?,
    };

    if let Some(table) = source::load_bundle(&config.bundle_dirs, &locale)? {
        debug!(%locale, "using bundle from configured directory");
        return Ok(Cow::Owned(table));
    }

    bundles::table_for(&locale)
        .map(Cow::Borrowed)
        .ok_or_else(|| anyhow!("no symbol table for locale {}", locale))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config_path = Config::locate(cli.config.as_deref());
    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    init_tracing(cli.verbose, &config);
    match &config_path {
        Some(path) => debug!(path = %path.display(), "loaded config"),
        None => debug!("no config file found, using defaults"),
    }

    match cli.command {
        Commands::Get { key, table } => {
            let table = resolve_table(&table, &config)?;
            match table.get(&key)? {
                SymbolValue::Text(text) => println!("{}", text),
                SymbolValue::List(list) => {
                    for item in list.iter() {
                        println!("{}", item);
                    }
                }
            }
        }

        Commands::Keys { table } => {
            let table = resolve_table(&table, &config)?;
            let mut keys: Vec<&str> = table.keys().collect();
            keys.sort_unstable();
            for key in keys {
                println!("{}", key);
            }
        }

        Commands::Export {
            table,
            format,
            output,
        } => {
            let table = resolve_table(&table, &config)?;
            let format = format.unwrap_or(config.export_format);
            match output {
                Some(path) => {
                    export::write(&table, format, &path)?;
                    println!("Exported {} to: {}", table.locale(), path.display());
                }
                None => println!("{}", format.serialize(&table)?),
            }
        }

        Commands::Verify { table } => {
            let table = resolve_table(&table, &config)?;
            let findings = verify::check(&table);
            verify::print_findings(&table, &findings);
            if verify::has_errors(&findings) {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Locales => {
            println!("{}", "Built-in".bold());
            for locale in bundles::available() {
                let name = LocaleId::parse(locale)
                    .ok()
                    .and_then(|id| id.language_name())
                    .unwrap_or("");
                println!("  {:8} {}", locale, name);
            }
            let found = source::list_bundles(&config.bundle_dirs);
            if !found.is_empty() {
                println!("{}", "Configured directories".bold());
                for (locale, path) in found {
                    println!("  {:8} {}", locale.to_string(), path.display());
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
