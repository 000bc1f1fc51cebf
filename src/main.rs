use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use graphql_decl_gen::ast::{self, Document};
use graphql_decl_gen::codegen;
use graphql_decl_gen::config::{self, GeneratorConfig};
use graphql_decl_gen::error::Result;

/// Generate C# declarations from a GraphQL schema.
///
/// Reads a schema document (SDL text or its JSON syntax tree), merges
/// interfaces and type extensions, and writes class, interface and enum
/// skeletons.
#[derive(Parser)]
#[command(name = "graphql-decl-gen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render C# declarations for a schema document.
    Generate {
        #[command(flatten)]
        input: InputArgs,

        /// Output file. Declarations go to stdout when omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// JSON generator configuration (scalar overrides, layout).
        #[arg(long, env = "GRAPHQL_DECL_GEN_CONFIG")]
        config: Option<PathBuf>,

        /// Suppress non-error output.
        #[arg(long, short)]
        quiet: bool,
    },

    /// Print the merged type model as JSON.
    Model {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    /// Schema document to read.
    #[arg(long, short)]
    input: PathBuf,

    /// Input format. `auto` picks JSON for `.json` files and SDL otherwise.
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    format: InputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    Auto,
    Json,
    Sdl,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");

        // Print cause chain.
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = std::error::Error::source(cause);
        }

        process::exit(1);
    }
}

fn init_tracing(cli: &Cli) {
    let default_level = match cli.command {
        Commands::Generate { quiet: true, .. } => "warn",
        _ => "info",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            input,
            output,
            config: config_path,
            quiet,
        } => {
            let config = match &config_path {
                Some(path) => config::load_config(path)?,
                None => GeneratorConfig::default(),
            };

            if !quiet {
                eprintln!("Loading schema from {}", input.input.display());
            }
            let document = load_input(&input)?;
            if !quiet {
                eprintln!("Loaded {} definitions", document.definitions.len());
            }

            let generated = codegen::generate(&document, &config)?;
            match &output {
                Some(path) => codegen::write_output(path, &generated.source)?,
                None => print!("{}", generated.source),
            }

            if !quiet {
                let stats = &generated.stats;
                eprintln!(
                    "Generated {} classes, {} interfaces, {} enums",
                    stats.classes_generated, stats.interfaces_generated, stats.enums_generated
                );
                if stats.extensions_folded > 0 || stats.extensions_promoted > 0 {
                    eprintln!(
                        "Folded {} extensions, promoted {} to standalone classes",
                        stats.extensions_folded, stats.extensions_promoted
                    );
                }
                if stats.entities > 0 {
                    eprintln!("Aggregated {} entities", stats.entities);
                }
                if stats.definitions_skipped > 0 {
                    eprintln!(
                        "Skipped {} definitions (scalars, unions, inputs, schema, directives)",
                        stats.definitions_skipped
                    );
                }
                if let Some(path) = &output {
                    eprintln!("Wrote {}", path.display());
                }
                eprintln!("Done.");
            }
        }

        Commands::Model { input } => {
            let document = load_input(&input)?;
            let (items, _) = codegen::build_model(&document)?;
            println!("{}", codegen::model_json(&items)?);
        }
    }

    Ok(())
}

fn load_input(args: &InputArgs) -> Result<Document> {
    let format = match args.format {
        InputFormat::Auto if is_json(&args.input) => InputFormat::Json,
        InputFormat::Auto => InputFormat::Sdl,
        other => other,
    };

    match format {
        InputFormat::Json => ast::load_document(&args.input),
        _ => load_sdl(&args.input),
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(feature = "sdl")]
fn load_sdl(path: &Path) -> Result<Document> {
    graphql_decl_gen::sdl::load_sdl(path)
}

#[cfg(not(feature = "sdl"))]
fn load_sdl(path: &Path) -> Result<Document> {
    Err(graphql_decl_gen::error::Error::Parse(format!(
        "{}: SDL input requires the `sdl` feature; pass a JSON document instead",
        path.display()
    )))
}
