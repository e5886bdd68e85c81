//! gen-maps CLI - compile the symbol/command catalogs into maps.rs

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use tylax_mapgen::{generate, DEFAULT_OUTPUT_PATH};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "gen-maps")]
#[command(author = "SciPenAI")]
#[command(version)]
#[command(about = "Generate the Tylax symbol mapping tables", long_about = None)]
struct Cli {
    /// External mapping source (tex2typst map.ts) to merge over the
    /// embedded Symbol Catalog before compiling
    source: Option<PathBuf>,

    /// Output path for the generated file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Print the generated code to stdout instead of writing the file
    #[arg(long)]
    stdout: bool,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let generated = match generate(cli.source.as_deref()) {
        Ok(generated) => generated,
        Err(err) => {
            eprintln!("✗ {}", err);
            std::process::exit(1);
        }
    };

    if let Some(ref err) = generated.import_error {
        eprintln!("⚠ {} - continuing with embedded baseline", err);
    } else if cli.source.is_some() {
        eprintln!("✓ Merged {} external mappings", generated.imported);
    }

    eprintln!(
        "Generating maps.rs with {} tex->typst and {} typst->tex mappings",
        generated.forward_entries, generated.reverse_entries
    );

    if cli.stdout {
        print!("{}", generated.code);
        return;
    }

    // Single write of the fully assembled artifact: a failure before this
    // point leaves no file behind
    match fs::write(&cli.output, &generated.code) {
        Ok(()) => eprintln!("✓ Generated: {}", cli.output.display()),
        Err(err) => {
            eprintln!("✗ {} - write error: {}", cli.output.display(), err);
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo run --features cli --bin gen-maps [SOURCE]");
}
