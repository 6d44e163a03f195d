//! Command-line generator for structure/set exports.
//!
//! Discovers `structures/*.xml` and `sets/*.xml` under a project directory,
//! loads the registry once, then writes the type-declarations artifact and
//! one data module per set. A failure on one set file never stops the
//! remaining files; a failure loading structures is fatal because the
//! registry is foundational.

use anyhow::{Context, Result};
use clap::Parser;
use setsmith_codegen::{EmitOptions, emit_data_module, emit_declarations};
use setsmith_schema::registry::Registry;
use setsmith_schema::{loader, tree};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "setsmith", version, about = "Generate TypeScript modules from structure/set exports")]
struct Cli {
    /// Project directory containing structures/ and sets/.
    #[arg(long, default_value = ".")]
    project: PathBuf,

    /// Output directory for generated modules.
    #[arg(long, default_value = "generated")]
    out: PathBuf,

    /// Generate a single set by name instead of every set.
    #[arg(long)]
    set: Option<String>,

    /// Spaces per indentation level in generated code.
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Emit progress logs.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(cli: &Cli) -> Result<()> {
    let options = EmitOptions { indent: cli.indent };

    let registry = load_registry(&cli.project.join("structures"))?;
    fs::create_dir_all(&cli.out)
        .with_context(|| format!("creating output directory {}", cli.out.display()))?;

    let declarations = emit_declarations(&registry, &options);
    let declarations_path = cli.out.join("structures.ts");
    fs::write(&declarations_path, declarations)
        .with_context(|| format!("writing {}", declarations_path.display()))?;
    tracing::info!("wrote {}", declarations_path.display());

    let sets_dir = cli.project.join("sets");
    if !sets_dir.is_dir() {
        tracing::warn!("no sets directory at {}, nothing to generate", sets_dir.display());
        return Ok(());
    }

    let mut generated = 0usize;
    let mut matched = false;
    for path in discover_xml(&sets_dir)
        .with_context(|| format!("reading sets directory {}", sets_dir.display()))?
    {
        let name = set_name(&path);
        if let Some(wanted) = &cli.set {
            if name != *wanted {
                continue;
            }
            matched = true;
            // Single-set mode: a failure is the run's failure.
            generate_set(&registry, &path, &name, &cli.out, &options)?;
            generated += 1;
        } else {
            match generate_set(&registry, &path, &name, &cli.out, &options) {
                Ok(()) => generated += 1,
                Err(e) => tracing::error!("failed to generate set '{}': {:#}", name, e),
            }
        }
    }

    if let Some(wanted) = &cli.set {
        if !matched {
            anyhow::bail!("set '{}' not found under {}", wanted, sets_dir.display());
        }
    }
    tracing::info!("generated {} set module(s)", generated);

    Ok(())
}

/// Parses every structure file and loads the registry.
///
/// Individual malformed files are skipped with a logged error; an unreadable
/// directory fails the run.
fn load_registry(dir: &Path) -> Result<Registry> {
    let files = discover_xml(dir)
        .with_context(|| format!("reading structures directory {}", dir.display()))?;

    let mut sources = Vec::new();
    for path in &files {
        match tree::parse_file(path) {
            Ok(source) => sources.push(source),
            Err(e) => tracing::error!("skipping structure file '{}': {}", path.display(), e),
        }
    }

    tracing::debug!("loaded {} structure file(s) from {}", sources.len(), dir.display());
    Ok(loader::load(&sources))
}

/// Generates one data module for a set file.
fn generate_set(
    registry: &Registry,
    path: &Path,
    name: &str,
    out: &Path,
    options: &EmitOptions,
) -> Result<()> {
    let set = tree::parse_file(path)
        .with_context(|| format!("parsing {}", path.display()))?;
    let module = emit_data_module(registry, set.name(), &set, name, options)
        .with_context(|| format!("encoding {}", path.display()))?;

    let out_path = out.join(format!("{name}.ts"));
    fs::write(&out_path, module)
        .with_context(|| format!("writing {}", out_path.display()))?;
    tracing::info!("wrote {}", out_path.display());
    Ok(())
}

/// Lists the XML files in a directory, sorted for deterministic output.
fn discover_xml(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Returns the set name for a data file (its stem).
fn set_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("set")
        .to_string()
}
