use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use modscope::{build_and_render, discover_modules, ExportFormat, GoModGraph, ModuleName};

/// Render the modules that depend on a focus module as a Graphviz graph.
#[derive(Parser)]
#[command(name = "modscope")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Focused transitive module dependency graphs rendered for Graphviz", long_about = None)]
struct Cli {
    /// Module whose dependents are graphed (e.g. github.com/ipld/go-ipld-prime)
    #[arg(short, long)]
    focus: String,

    /// Project directories to run `go mod graph` in
    directories: Vec<PathBuf>,

    /// Also use every Go module found under this root (repeatable)
    #[arg(long, value_name = "ROOT")]
    discover: Vec<PathBuf>,

    /// Go executable used to produce module graphs
    #[arg(long, value_name = "PATH", default_value = "go")]
    go: PathBuf,

    /// Output format: dot or json
    #[arg(long, default_value = "dot")]
    format: ExportFormat,

    /// Verbose logging on stderr (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout is reserved for the rendered graph.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut directories = cli.directories.clone();
    for root in &cli.discover {
        let found = discover_modules(root)
            .with_context(|| format!("failed to discover modules under {}", root.display()))?;
        directories.extend(found);
    }

    if directories.is_empty() {
        bail!("no project directories given; pass DIRECTORIES or --discover <ROOT>");
    }

    let source = GoModGraph::with_program(&cli.go);
    let focus = ModuleName::from(cli.focus.as_str());
    let output = build_and_render(&source, &directories, &focus, cli.format)
        .with_context(|| format!("failed to build the dependency graph of {}", focus))?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write graph to stdout")?;
    Ok(())
}
