//! oas2proto CLI
//!
//! Command-line interface for translating OpenAPI 3.0 documents into proto3
//! service definitions.
//!
//! Exit codes, one per failure class:
//! 1 usage, 2 input read, 3 parse, 4 validation, 5 output write.

use clap::Parser;
use colored::*;
use oas2proto_common::{Result, TranslateError, EXIT_USAGE};
use oas2proto_generator::ProtoGenerator;
use oas2proto_parser::OpenApiParser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "oas2proto")]
#[command(version, about = "Translate an OpenAPI 3.0 document into a proto3 service definition", long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
    # Translate a YAML spec\n  \
    oas2proto petstore.yaml petstore.proto\n\n  \
    # Translate a JSON spec with progress output\n  \
    oas2proto --verbose api.json api.proto")]
struct Cli {
    /// Path to the OpenAPI document (JSON or YAML)
    input: PathBuf,

    /// Path for the generated .proto file
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Usage errors (wrong argument count, unknown flags) exit 1; clap's
    // help/version output keeps its own success path.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    };

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "✗".red(), e);
        process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.verbose {
        println!(
            "{} Loading OpenAPI document: {}",
            "→".cyan(),
            cli.input.display()
        );
    }

    let document = OpenApiParser::from_file(&cli.input)?.validated()?;

    if cli.verbose {
        println!(
            "{} Parsed {} schemas, {} paths",
            "→".cyan(),
            document.schemas().len(),
            document.paths.len()
        );
        println!("{} Translating to proto3...", "→".cyan());
    }

    let proto = ProtoGenerator::new(document).generate();

    write_output(&cli.output, &proto)?;

    println!(
        "{} Wrote proto to {}",
        "✓".green(),
        cli.output.display().to_string().yellow()
    );

    Ok(())
}

fn write_output(path: &Path, proto: &str) -> Result<()> {
    fs::write(path, proto)
        .map_err(|e| TranslateError::Write(format!("{}: {}", path.display(), e)))
}
