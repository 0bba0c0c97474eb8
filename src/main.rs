//! DNA Sequence Statistics (dnastat) - CLI entry point

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use dnastat::engine::{AnalysisError, AnalysisOutcome, AnalyzeOptions, CancelToken, Session};
use dnastat::Config;

/// File extensions conventionally used for sequence data. A hint only;
/// content is processed uniformly regardless of extension.
const KNOWN_EXTENSIONS: [&str; 4] = ["txt", "fasta", "fa", "seq"];

#[derive(Parser)]
#[command(name = "dnastat")]
#[command(about = "DNA sequence statistics - base counts, GC/AT content, windowed GC profile")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze sequence files (or stdin when no file is given)
    Analyze {
        /// Sequence files (.txt, .fasta, .fa, .seq); stdin if omitted
        files: Vec<PathBuf>,
        /// Write the CSV export of the most recent result to this path
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Override the configured GC window size
        #[arg(long)]
        window_size: Option<usize>,
        /// Override the configured chunk size
        #[arg(long)]
        chunk_size: Option<usize>,
        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            files,
            out,
            window_size,
            chunk_size,
            quiet,
        } => cmd_analyze(&files, out.as_deref(), window_size, chunk_size, quiet),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => cmd_config_show(),
            ConfigCommands::Path => cmd_config_path(),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "dnastat", &mut io::stdout());
            Ok(())
        }
    }
}

fn cmd_analyze(
    files: &[PathBuf],
    out: Option<&Path>,
    window_size: Option<usize>,
    chunk_size: Option<usize>,
    quiet: bool,
) -> Result<()> {
    let config = Config::load()?;

    let base_options = AnalyzeOptions::default()
        .chunk_size(chunk_size.unwrap_or(config.analysis.chunk_size))
        .window_size(window_size.unwrap_or(config.analysis.window_size));

    let mut session = match config.analysis.history_limit {
        Some(limit) => Session::with_history_limit(limit),
        None => Session::new(),
    };

    // Ctrl-C requests cooperative cancellation at the next chunk boundary.
    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || {
        handler_token.cancel();
    })
    .ok(); // Ignore if a handler is already set

    if files.is_empty() {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read sequence from stdin")?;

        let outcome = run_analysis(&mut session, &raw, &base_options, &cancel, quiet)?;
        let Some(outcome) = outcome else {
            return Ok(()); // cancelled
        };
        print_summary(&outcome);
    } else {
        for file in files {
            let raw = fs::read_to_string(file)
                .with_context(|| format!("Failed to read sequence file: {:?}", file))?;

            let known = file
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| KNOWN_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));
            if !known {
                tracing::debug!(?file, "unrecognized extension; content processed as text");
            }

            let source = file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown")
                .to_string();
            let options = base_options.clone().source_name(source);

            let outcome = run_analysis(&mut session, &raw, &options, &cancel, quiet)
                .with_context(|| format!("Analysis failed for {:?}", file))?;
            let Some(outcome) = outcome else {
                return Ok(()); // cancelled
            };
            print_summary(&outcome);
        }
    }

    if let Some(path) = out {
        let record = session
            .current_result()
            .context("No completed analysis to export")?;
        fs::write(path, dnastat::to_csv(record))
            .with_context(|| format!("Failed to write CSV export: {:?}", path))?;
        println!("Exported CSV to: {}", path.display());
    }

    if session.history().len() > 1 {
        print_history(&session);
    }

    Ok(())
}

/// Run one analysis, rendering progress on stderr.
///
/// Returns `Ok(None)` when the user cancelled; empty input is a hard
/// error.
fn run_analysis(
    session: &mut Session,
    raw: &str,
    options: &AnalyzeOptions,
    cancel: &CancelToken,
    quiet: bool,
) -> Result<Option<AnalysisOutcome>> {
    let result = session.analyze(raw, options, cancel, |pct| {
        if !quiet {
            eprint!("\rAnalyzing... {:>5.1}%", pct);
            let _ = io::stderr().flush();
        }
    });

    if !quiet {
        // Clear the progress line
        eprint!("\r                      \r");
    }

    match result {
        Ok(outcome) => {
            if outcome.had_invalid {
                eprintln!("Warning: invalid characters ignored");
            }
            Ok(Some(outcome))
        }
        Err(AnalysisError::Cancelled) => {
            eprintln!("Analysis cancelled.");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn print_summary(outcome: &AnalysisOutcome) {
    let record = &outcome.record;
    let counts = record.counts();

    if let Some(name) = record.source_name() {
        println!("=== {} ===", name);
    } else {
        println!("=== pasted sequence ===");
    }
    println!("Total Length: {}", record.total());
    println!(
        "Base Count:   A:{} C:{} G:{} T:{}",
        counts.a, counts.c, counts.g, counts.t
    );
    println!("GC Content:   {:.2}%", record.gc_percent());
    println!("AT Content:   {:.2}%", record.at_percent());
    println!("GC Windows:   {}", record.windows().len());
    println!();
}

fn print_history(session: &Session) {
    println!("Results history (newest first):");
    for (i, record) in session.history().iter().enumerate() {
        println!(
            "{:>3}. #{} [{}] {} - {} bases",
            i + 1,
            record.id(),
            record.timestamp(),
            record.source_name().unwrap_or("pasted sequence"),
            record.total()
        );
    }
}

fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{}", toml_str);
    Ok(())
}

fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
