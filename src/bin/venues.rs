//! Venues CLI
//!
//! Read-only discovery of the venue MinionTypes.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use minions_venues::{
    create_client, Catalog, ClientOptions, MinionType, TypeRegistry, VenuesConfig, DESCRIPTION,
    VERSION,
};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "venues")]
#[command(about = DESCRIPTION)]
#[command(version)]
struct Cli {
    /// Path to a config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show project info
    Info,

    /// Inspect MinionType schemas
    Types {
        #[command(subcommand)]
        command: TypesCommand,
    },

    /// Export all types as a JSON catalog
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a client configuration
    Client {
        /// Option as key=value; values are parsed as JSON when possible
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
}

#[derive(Subcommand)]
enum TypesCommand {
    /// List all available MinionTypes
    #[command(alias = "ls")]
    List,

    /// Show the detailed schema for a MinionType
    Show {
        slug: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli
        .config
        .as_deref()
        .map(|p| p.to_str().ok_or_else(|| anyhow!("config path is not UTF-8: {:?}", p)))
        .transpose()?;
    let config = VenuesConfig::load_from(config_path).context("loading configuration")?;
    let registry = TypeRegistry::with_custom_types();

    match cli.command {
        Commands::Info => {
            println!("Minions Venues");
            println!("{}", DESCRIPTION);
            println!();
            println!("  Version: {}", VERSION);
            println!("  Types:   {}", registry.len());
            Ok(())
        }

        Commands::Types { command: TypesCommand::List } => {
            println!();
            println!("  {} MinionTypes available:", registry.len());
            println!();
            for t in &registry {
                println!("  {}{} ({})", icon_prefix(t, &config), t.name, t.slug);
                println!("     {}", t.description);
                if config.display.show_fields {
                    println!(
                        "     {} fields: {}",
                        t.field_count(),
                        t.field_names().join(", ")
                    );
                }
                println!();
            }
            Ok(())
        }

        Commands::Types { command: TypesCommand::Show { slug } } => {
            let t = registry
                .require_slug(&slug)
                .map_err(|_| anyhow!(render_unknown(&registry, &slug)))?;

            println!();
            println!("  {}{}", icon_prefix(t, &config), t.name);
            println!("  {}", t.description);
            println!("  ID: {}  Slug: {}", t.id, t.slug);
            println!();
            println!("  Fields:");
            println!();
            let width = t.schema.iter().map(|f| f.name.len()).max().unwrap_or(0);
            for field in &t.schema {
                println!("    {:<width$}  {}", field.name, field.field_type, width = width);
            }
            println!();
            Ok(())
        }

        Commands::Export { output } => {
            println!("{}", export(&registry, &config, output.as_deref())?);
            Ok(())
        }

        Commands::Client { set } => {
            let options = parse_options(&set)?;
            let client = create_client(options);
            println!("{}", serde_json::to_string_pretty(&client)?);
            Ok(())
        }
    }
}

fn icon_prefix(t: &MinionType, config: &VenuesConfig) -> String {
    if config.display.icons {
        format!("{}  ", t.icon)
    } else {
        String::new()
    }
}

/// Message for a slug that is not registered, with close matches
fn render_unknown(registry: &TypeRegistry, slug: &str) -> String {
    let mut message = format!(
        "Unknown type: {}\nAvailable: {}",
        slug,
        registry.slugs().join(", ")
    );
    let suggestions: Vec<_> = registry
        .suggest(slug, 3)
        .into_iter()
        .map(|t| t.slug.as_str())
        .collect();
    if !suggestions.is_empty() {
        message.push_str(&format!("\nDid you mean: {}?", suggestions.join(", ")));
    }
    message
}

/// Export the catalog to `output`, or render it for stdout
///
/// Returns the text to print.
fn export(
    registry: &TypeRegistry,
    config: &VenuesConfig,
    output: Option<&Path>,
) -> anyhow::Result<String> {
    let catalog = Catalog::new(registry, config.export.include_checksum)?;
    match output {
        Some(path) => {
            catalog
                .write_to(path, &config.export)
                .with_context(|| format!("writing catalog to {}", path.display()))?;
            Ok(format!("✅ Catalog written to {}", path.display()))
        }
        None => Ok(catalog.to_json(config.export.output_format)?),
    }
}

/// Parse `key=value` pairs, falling back to a plain string when the value is not JSON
fn parse_options(pairs: &[String]) -> anyhow::Result<ClientOptions> {
    let mut options = ClientOptions::new();
    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("expected KEY=VALUE, got {:?}", pair))?;
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        options.insert(key.to_string(), value);
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minions_venues::config::OutputFormat;

    #[test]
    fn test_parse_options() {
        let pairs = vec![
            "debug=true".to_string(),
            "retries=3".to_string(),
            "name=Hofbräu".to_string(),
            "empty=".to_string(),
        ];
        let options = parse_options(&pairs).unwrap();
        assert_eq!(options["debug"], Value::Bool(true));
        assert_eq!(options["retries"], serde_json::json!(3));
        assert_eq!(options["name"], Value::String("Hofbräu".to_string()));
        assert_eq!(options["empty"], Value::String(String::new()));
    }

    #[test]
    fn test_parse_options_rejects_missing_equals() {
        assert!(parse_options(&["debug".to_string()]).is_err());
    }

    #[test]
    fn test_unknown_slug_message() {
        let registry = TypeRegistry::with_custom_types();
        let message = render_unknown(&registry, "schedule");
        let lines: Vec<_> = message.lines().collect();
        assert_eq!(lines[0], "Unknown type: schedule");
        assert_eq!(
            lines[1],
            "Available: tent, tent-area, reservation-rule, opening-schedule"
        );
        assert!(lines[2].starts_with("Did you mean: opening-schedule"));
    }

    #[test]
    fn test_unknown_slug_without_suggestions() {
        let registry = TypeRegistry::with_custom_types();
        let message = render_unknown(&registry, "zzzz");
        assert_eq!(message.lines().count(), 2);
        assert!(!message.contains("Did you mean"));
    }

    #[test]
    fn test_export_to_stdout() {
        let registry = TypeRegistry::with_custom_types();
        let mut config = VenuesConfig::default();
        config.export.output_format = OutputFormat::Compact;
        config.export.include_checksum = false;

        let json = export(&registry, &config, None).unwrap();
        let catalog: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(catalog.types.len(), 4);
        assert!(catalog.checksum.is_none());
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let registry = TypeRegistry::with_custom_types();

        let message = export(&registry, &VenuesConfig::default(), Some(&path)).unwrap();
        assert_eq!(message, format!("✅ Catalog written to {}", path.display()));
        let catalog = Catalog::read_from(&path).unwrap();
        assert!(catalog.checksum.is_some());
        assert!(catalog.verify().unwrap());
    }

    #[test]
    fn test_export_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("catalog.json");
        let err = export(&TypeRegistry::with_custom_types(), &VenuesConfig::default(), Some(&path))
            .unwrap_err();
        assert!(err.to_string().starts_with("writing catalog to "));
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["venues", "types", "show", "tent"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Types { command: TypesCommand::Show { slug } } if slug == "tent"
        ));
        let cli = Cli::try_parse_from(["venues", "types", "ls"]).unwrap();
        assert!(matches!(cli.command, Commands::Types { command: TypesCommand::List }));
    }
}
