//! xmlrpc-stubgen CLI
//!
//! Command-line interface for generating Python stubs from the XML-RPC API
//! documentation page. Generated source goes to stdout (or `--output`);
//! progress and errors go to stderr.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use xmlrpc_stubgen::{
    extract_catalog_from, generate_stubs, DocumentSource, FileSource, HttpSource,
};
use xmlrpc_stubgen_common::Catalog;
use xmlrpc_stubgen_generator::{StubGenerator, TypeMapper};

#[derive(Parser)]
#[command(name = "xmlrpc-stubgen")]
#[command(version, about = "Generate Python stubs from XML-RPC API documentation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the method catalog and display it
    #[command(after_help = "EXAMPLES:\n  \
        # Summarise the live documentation\n  \
        xmlrpc-stubgen parse\n\n  \
        # Dump a saved copy of the page as JSON\n  \
        xmlrpc-stubgen parse --input xml-rpc.html --json")]
    Parse {
        #[command(flatten)]
        source: SourceArgs,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate stubs (the default when no subcommand is given)
    #[command(after_help = "EXAMPLES:\n  \
        # Print stubs for the live documentation\n  \
        xmlrpc-stubgen generate\n\n  \
        # Generate from a saved page into a file\n  \
        xmlrpc-stubgen generate \\\n    \
        --input xml-rpc.html \\\n    \
        --output infusionsoft/stubs.py")]
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Where to read the documentation page from
#[derive(Args)]
struct SourceArgs {
    /// Documentation URL
    #[arg(long, conflicts_with = "input")]
    url: Option<String>,

    /// Saved copy of the documentation page
    #[arg(short, long)]
    input: Option<PathBuf>,
}

impl SourceArgs {
    fn into_source(self) -> Box<dyn DocumentSource> {
        match (self.input, self.url) {
            (Some(path), _) => Box::new(FileSource::new(path)),
            (None, Some(url)) => Box::new(HttpSource::new(url)),
            (None, None) => Box::new(HttpSource::default()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        eprintln!("{} Verbose mode enabled", "→".cyan());
    }

    match cli.command {
        Some(Commands::Parse { source, json }) => {
            parse_command(source.into_source().as_ref(), json, cli.verbose)?;
        }
        Some(Commands::Generate { source, output }) => {
            generate_command(source.into_source().as_ref(), output)?;
        }
        None => {
            let stubs = generate_stubs().context("Failed to generate stubs")?;
            print!("{}", stubs);
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flag
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_err()
    {
        eprintln!("{} tracing subscriber already initialized", "⚠".yellow());
    }
}

fn load_catalog(source: &dyn DocumentSource) -> Result<Catalog> {
    eprintln!("{} Reading documentation: {}", "→".cyan(), source.describe());

    let catalog = extract_catalog_from(source)
        .with_context(|| format!("Failed to extract methods from {}", source.describe()))?;

    eprintln!(
        "{} Extracted {} methods across {} services",
        "✓".green(),
        catalog.method_count(),
        catalog.service_count()
    );
    Ok(catalog)
}

fn parse_command(source: &dyn DocumentSource, json: bool, verbose: bool) -> Result<()> {
    let catalog = load_catalog(source)?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&catalog).context("Failed to serialize catalog")?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("{}", "Services:".bold());
    for (service, methods) in catalog.services() {
        let methods: Vec<_> = methods.collect();
        println!("  • {} ({} methods)", service.cyan(), methods.len());

        if verbose {
            for method in methods {
                let params: Vec<String> = method
                    .call_parameters()
                    .iter()
                    .map(|p| format!("{}: {}", p.identifier, TypeMapper::map_type(&p.type_token)))
                    .collect();
                println!(
                    "      {}({}) -> {}",
                    method.name.yellow(),
                    params.join(", "),
                    TypeMapper::map_return_type(method.return_type.as_deref())
                );
            }
        }
    }

    Ok(())
}

fn generate_command(source: &dyn DocumentSource, output: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(source)?;

    eprintln!("{} Generating stubs...", "→".cyan());
    let generator = StubGenerator::new(catalog).context("Failed to create generator")?;

    match output {
        Some(path) => {
            generator
                .generate_to_file(&path)
                .with_context(|| format!("Failed to write stubs to {}", path.display()))?;
            eprintln!("{} Wrote {}", "✓".green(), path.display());
        }
        None => {
            let stubs = generator.render().context("Failed to render stubs")?;
            print!("{}", stubs);
        }
    }

    Ok(())
}
