//! Vocabgraph CLI - query a schema.org-style vocabulary from the terminal

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;
use vocabgraph_core::Vocabulary;
use vocabgraph_core::config::VocabConfig;
use vocabgraph_core::graph::TypeRef;

#[derive(Parser)]
#[command(name = "vocabgraph")]
#[command(author, version, about = "Query a schema.org-style vocabulary", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON-LD vocabulary document (defaults to $VOCABGRAPH_DOCUMENT)
    #[arg(short, long, global = true)]
    document: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show details of a type
    Type {
        /// Type name, e.g. Person or schema:Person
        name: String,
    },

    /// Search types by keyword
    Search {
        query: String,
        /// Maximum number of results (1-100)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show direct parents and children of a type
    Hierarchy { name: String },

    /// Show every ancestor of a type, nearest first
    Lineage { name: String },

    /// List properties applicable to a type
    Properties {
        name: String,
        /// Skip properties inherited from direct parents
        #[arg(long)]
        direct_only: bool,
    },

    /// Generate an example JSON-LD instance
    Example {
        name: String,
        /// Override a property (value parsed as JSON, else taken as text)
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        set: Vec<(String, String)>,
        /// Overrides as a JSON object
        #[arg(long)]
        properties: Option<String>,
    },

    /// Show index statistics
    Stats,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Reset configuration to defaults
    Reset,
    /// Show config file path
    Path,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vocabgraph=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if let Some(hint) = err
                .downcast_ref::<vocabgraph_core::Error>()
                .and_then(|e| e.suggestion())
            {
                eprintln!("Hint: {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        command,
        document,
        format,
        quiet,
    } = cli;
    let out = Output { format, quiet };
    let document = document.as_deref();

    match command {
        Commands::Type { name } => cmd_type(&open(document).await?, &name, out),
        Commands::Search { query, limit } => {
            cmd_search(&open(document).await?, &query, limit, out)
        }
        Commands::Hierarchy { name } => cmd_hierarchy(&open(document).await?, &name, out),
        Commands::Lineage { name } => cmd_lineage(&open(document).await?, &name, out),
        Commands::Properties { name, direct_only } => {
            cmd_properties(&open(document).await?, &name, !direct_only, out)
        }
        Commands::Example {
            name,
            set,
            properties,
        } => cmd_example(&open(document).await?, &name, set, properties.as_deref()),
        Commands::Stats => cmd_stats(&open(document).await?, out),
        Commands::Config { action } => cmd_config(action, quiet),
    }
}

fn document_path(flag: Option<&Path>) -> anyhow::Result<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| env::var_os("VOCABGRAPH_DOCUMENT").map(PathBuf::from))
        .ok_or_else(|| {
            anyhow!("No vocabulary document given. Pass --document <path> or set VOCABGRAPH_DOCUMENT.")
        })
}

/// Load config and the vocabulary document; only query commands need this
async fn open(document: Option<&Path>) -> anyhow::Result<Vocabulary> {
    let config = VocabConfig::load()?;
    let path = document_path(document)?;
    load_vocabulary(&path, config).await
}

async fn load_vocabulary(path: &Path, config: VocabConfig) -> anyhow::Result<Vocabulary> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read vocabulary document: {}", path.display()))?;
    let document: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse vocabulary document: {}", path.display()))?;
    debug!(path = %path.display(), bytes = raw.len(), "Loaded vocabulary document");

    Ok(Vocabulary::with_config(&document, config)?)
}

// ============================================================================
// Command Implementations
// ============================================================================

#[derive(Clone, Copy)]
struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    fn json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn labels(refs: &[TypeRef]) -> String {
    if refs.is_empty() {
        return "(none)".to_string();
    }
    refs.iter()
        .map(|r| r.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn cmd_type(vocab: &Vocabulary, name: &str, out: Output) -> anyhow::Result<()> {
    let summary = vocab.get_type(name)?;
    if out.json() {
        return print_json(&summary);
    }

    println!("{} ({})", summary.name, summary.id);
    if !out.quiet {
        println!("  {}", summary.description);
        println!("  Type: {}", summary.kinds.join(", "));
        println!("  Supertypes: {}", labels(&summary.super_types));
        println!("  URL: {}", summary.url);
    }
    Ok(())
}

fn cmd_search(
    vocab: &Vocabulary,
    query: &str,
    limit: Option<usize>,
    out: Output,
) -> anyhow::Result<()> {
    let hits = vocab.search(query, limit)?;
    if out.json() {
        return print_json(&hits);
    }

    if hits.is_empty() {
        if !out.quiet {
            println!("No types found matching '{}'.", query);
        }
        return Ok(());
    }

    for (i, hit) in hits.iter().enumerate() {
        if out.quiet {
            println!("{}", hit.name);
        } else {
            let kind = if hit.relevance >= 2 { "name" } else { "description" };
            println!("{:>3}. {} ({} match)", i + 1, hit.name, kind);
            println!("     {}", hit.url);
        }
    }
    Ok(())
}

fn cmd_hierarchy(vocab: &Vocabulary, name: &str, out: Output) -> anyhow::Result<()> {
    let hierarchy = vocab.hierarchy(name)?;
    if out.json() {
        return print_json(&hierarchy);
    }

    println!("{} ({})", hierarchy.name, hierarchy.id);
    println!("  Parents: {}", labels(&hierarchy.parents));
    println!("  Children: {}", labels(&hierarchy.children));
    Ok(())
}

fn cmd_lineage(vocab: &Vocabulary, name: &str, out: Output) -> anyhow::Result<()> {
    if out.json() {
        return print_json(&vocab.lineage(name)?);
    }

    let path = vocab.lineage_path(name)?;
    let labels: Vec<&str> = path.iter().map(|r| r.label.as_str()).collect();
    println!("{}", labels.join(" > "));
    Ok(())
}

fn cmd_properties(
    vocab: &Vocabulary,
    name: &str,
    include_inherited: bool,
    out: Output,
) -> anyhow::Result<()> {
    let properties = vocab.properties(name, include_inherited);
    if out.json() {
        return print_json(&properties);
    }

    if !out.quiet {
        println!("Found {} properties for {}", properties.len(), name);
    }
    for property in &properties {
        let expected = property.expected_type_names.join(" | ");
        match &property.inherited_from {
            Some(parent) => println!("  {}: {} (from {})", property.name, expected, parent),
            None => println!("  {}: {}", property.name, expected),
        }
    }
    Ok(())
}

fn cmd_example(
    vocab: &Vocabulary,
    name: &str,
    set: Vec<(String, String)>,
    properties: Option<&str>,
) -> anyhow::Result<()> {
    let mut overrides = Map::new();

    if let Some(raw) = properties {
        let parsed: Value =
            serde_json::from_str(raw).context("Failed to parse --properties as JSON")?;
        match parsed {
            Value::Object(map) => overrides.extend(map),
            _ => return Err(anyhow!("--properties must be a JSON object")),
        }
    }

    for (key, raw) in set {
        let value = serde_json::from_str(&raw).unwrap_or(Value::String(raw));
        overrides.insert(key, value);
    }

    let overrides = if overrides.is_empty() {
        None
    } else {
        Some(&overrides)
    };
    let example = vocab.synthesize(name, overrides)?;

    // JSON-LD is the only sensible rendering
    print_json(&example)
}

fn cmd_stats(vocab: &Vocabulary, out: Output) -> anyhow::Result<()> {
    let stats = vocab.stats();
    if out.json() {
        return print_json(&stats);
    }

    println!("Entities:   {}", stats.entities);
    println!("Classes:    {}", stats.classes);
    println!("Properties: {}", stats.properties);
    println!("Labels:     {}", stats.labels);
    Ok(())
}

fn cmd_config(action: ConfigAction, quiet: bool) -> anyhow::Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = VocabConfig::load()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = VocabConfig::load()?;
            config.set(&key, &value)?;
            config.save()?;
            if !quiet {
                println!("Set {} = {}", key, config.get(&key)?);
            }
        }
        ConfigAction::List => {
            let config = VocabConfig::load()?;
            for (key, value) in config.list()? {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Reset => {
            VocabConfig::reset()?;
            if !quiet {
                println!("Configuration reset to defaults");
            }
        }
        ConfigAction::Path => {
            println!("{}", VocabConfig::config_path()?.display());
        }
    }
    Ok(())
}
