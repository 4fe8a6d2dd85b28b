//! Command-line interface for xsd-typegen

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use xsd_typegen::codegen::{declarations, validators, NamingConvention};
#[cfg(feature = "cli")]
use xsd_typegen::loaders::{discover_xsd_files, load_source};
#[cfg(feature = "cli")]
use xsd_typegen::parser::parse_xsd;
#[cfg(feature = "cli")]
use xsd_typegen::{Diagnostics, Error, Result};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "xsd-typegen")]
#[command(author, version, about = "TypeScript type and validator generation from XSD schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate TypeScript declarations and validators
    Generate {
        /// An .xsd file, or a directory searched recursively
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Directory the generated files are written to
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Identifier casing for generated fields and types
        #[arg(short, long, value_enum, default_value_t = NamingConvention::Camel)]
        naming: NamingConvention,
    },

    /// Inspect the parsed schema model of one document
    Inspect {
        /// Path to the XSD schema file
        #[arg(value_name = "SCHEMA")]
        schema: PathBuf,

        /// Dump the full model as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            input,
            out_dir,
            naming,
        } => generate(&input, &out_dir, naming),
        Commands::Inspect { schema, json } => inspect(&schema, json),
    }
}

#[cfg(feature = "cli")]
fn generate(input: &PathBuf, out_dir: &PathBuf, naming: NamingConvention) -> Result<()> {
    let sources = discover_xsd_files(input)?;
    if sources.is_empty() {
        return Err(Error::Resource(format!(
            "no .xsd files found under '{}'",
            input.display()
        )));
    }

    fs::create_dir_all(out_dir)?;

    for source in sources {
        let text = load_source(&source)?;
        let parsed = parse_xsd(&text)?;

        let mut diagnostics = parsed.diagnostics;
        let mut sort_diagnostics = Diagnostics::new();
        let schema = parsed.schema.sorted(&mut sort_diagnostics);
        diagnostics.extend(sort_diagnostics);
        report(&source, &diagnostics);

        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("schema");

        let types_path = out_dir.join(format!("{}.types.ts", stem));
        fs::write(&types_path, declarations::emit_declarations(&schema, naming))?;

        let validators_path = out_dir.join(format!("{}.validators.ts", stem));
        fs::write(&validators_path, validators::emit_validators(&schema, naming))?;

        println!(
            "{} -> {}, {}",
            source.display(),
            types_path.display(),
            validators_path.display()
        );
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn inspect(path: &PathBuf, json: bool) -> Result<()> {
    let text = load_source(path)?;
    let parsed = parse_xsd(&text)?;

    let mut diagnostics = parsed.diagnostics;
    let mut sort_diagnostics = Diagnostics::new();
    let schema = parsed.schema.sorted(&mut sort_diagnostics);
    diagnostics.extend(sort_diagnostics);
    report(path, &diagnostics);

    if json {
        let dump = serde_json::to_string_pretty(&schema)
            .map_err(|e| Error::Other(format!("failed to serialize schema: {}", e)))?;
        println!("{}", dump);
        return Ok(());
    }

    if let Some(ns) = &schema.target_namespace {
        println!("targetNamespace: {}", ns);
    }
    println!("elements: {}", schema.elements.len());
    for element in &schema.elements {
        println!("  {} ({})", element.name, element.type_name.as_deref().unwrap_or("inline"));
    }
    println!("complexTypes: {}", schema.complex_types.len());
    for complex_type in &schema.complex_types {
        println!(
            "  {} ({} fields)",
            complex_type.name.as_deref().unwrap_or("<anonymous>"),
            complex_type.content.len()
        );
    }
    println!("simpleTypes: {}", schema.simple_types.len());
    for simple_type in &schema.simple_types {
        println!(
            "  {} (base {})",
            simple_type.name.as_deref().unwrap_or("<anonymous>"),
            simple_type.restriction.base
        );
    }

    Ok(())
}

/// Print collected warnings to stderr; the core never prints them itself
#[cfg(feature = "cli")]
fn report(source: &std::path::Path, diagnostics: &Diagnostics) {
    for warning in diagnostics.warnings() {
        eprintln!("warning: {}: {}", source.display(), warning);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("xsd-typegen was built without the 'cli' feature");
    std::process::exit(1);
}
