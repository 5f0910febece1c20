//! Quadsink CLI: append quads to the shared record log and inspect it.
//!
//! Usage:
//!   quadsink append --document-id ID --title TITLE [--input FILE] [--log PATH]
//!   quadsink inspect [--log PATH]
//!   quadsink classify TAG

use clap::{Parser, Subcommand};
use quadsink::{DatasetClassifier, LogReader, Quad, SinkConfig, TripleLogSink};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "quadsink",
    version,
    about = "Deduplicating append-only log sink for extracted quads"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the log file path
    #[arg(long, global = true)]
    log: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write JSON-lines quads for one document and append its record
    Append {
        /// Document identifier written as the record's first line
        #[arg(long)]
        document_id: String,
        /// Page title the resource URI is derived from
        #[arg(long)]
        title: String,
        /// JSON-lines file of quads (stdin if omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Print one summary line per record in the log
    Inspect,
    /// Print the consumer identity for a dataset tag
    Classify {
        /// Dataset tag, e.g. "labels" or "PageLinks"
        tag: String,
    },
}

fn load_config(config: Option<PathBuf>, log: Option<PathBuf>) -> Result<SinkConfig, String> {
    let mut cfg = match config {
        Some(path) => SinkConfig::load(&path).map_err(|e| format!("Failed to load config: {}", e))?,
        None => SinkConfig::default(),
    };
    if let Some(log) = log {
        cfg = cfg.with_log_path(log);
    }
    Ok(cfg)
}

fn read_quads(input: Option<PathBuf>) -> Result<Vec<Quad>, String> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => {
            let file = std::fs::File::open(&path)
                .map_err(|e| format!("cannot open '{}': {}", path.display(), e))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(std::io::stdin())),
    };

    let mut quads = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("read error: {}", e))?;
        if line.trim().is_empty() {
            continue;
        }
        let quad: Quad = serde_json::from_str(&line)
            .map_err(|e| format!("line {}: invalid quad: {}", i + 1, e))?;
        quads.push(quad);
    }
    Ok(quads)
}

fn cmd_append(cfg: &SinkConfig, document_id: &str, title: &str, input: Option<PathBuf>) -> i32 {
    let quads = match read_quads(input) {
        Ok(q) => q,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let sink = TripleLogSink::new(cfg, title, document_id);
    let stats = match sink.merge(&quads) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match sink.try_close() {
        Ok(receipt) => {
            println!(
                "Appended '{}' to {} ({} triples, {} duplicates, {} bytes)",
                document_id,
                cfg.log_path.display(),
                stats.inserted,
                stats.overwritten,
                receipt.bytes_written
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_inspect(cfg: &SinkConfig) -> i32 {
    let records = match LogReader::read_all(&cfg.log_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if records.is_empty() {
        println!("No records.");
        return 0;
    }
    println!("{:<20}  {:<48}  {:>6}  {:>7}", "DOCUMENT", "RESOURCE", "GROUPS", "TRIPLES");
    println!("{}", "-".repeat(88));
    for record in records {
        println!(
            "{:<20}  {:<48}  {:>6}  {:>7}",
            record.document_id,
            record.resource_uri,
            record.group_count(),
            record.triple_count()
        );
    }
    0
}

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let cfg = match load_config(cli.config, cli.log) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let code = match cli.command {
        Commands::Append { document_id, title, input } => cmd_append(&cfg, &document_id, &title, input),
        Commands::Inspect => cmd_inspect(&cfg),
        Commands::Classify { tag } => {
            println!("{}", DatasetClassifier::classify(&tag));
            0
        }
    };
    std::process::exit(code);
}
