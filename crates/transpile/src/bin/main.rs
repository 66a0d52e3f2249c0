// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! unified-sql: translate SQL between dialects
//!
//! ```bash
//! unified-sql --read spark --write presto "SELECT SIZE(x) FROM t"
//! echo "SELECT 1" | unified-sql --read hive --write duckdb --pretty
//! RUST_LOG=debug unified-sql --read spark --write bigquery --config options.json < query.sql
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use unified_sql_transpile::{IdentifierQuoting, TranspileOptions, translate};

#[derive(Parser)]
#[command(name = "unified-sql")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Translate SQL statements from one dialect to another", long_about = None)]
struct Cli {
    /// SQL to translate; read from stdin when omitted
    sql: Option<String>,

    /// Source dialect
    #[arg(short, long, default_value = "ansi")]
    read: String,

    /// Target dialect
    #[arg(short, long, default_value = "ansi")]
    write: String,

    /// Put clauses on their own lines
    #[arg(short, long)]
    pretty: bool,

    /// Quote every identifier
    #[arg(short = 'q', long)]
    quote_identifiers: bool,

    /// JSON options file; flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let cli = Cli::parse();

    let mut options = match &cli.config {
        Some(path) => TranspileOptions::from_file(path)?,
        None => TranspileOptions::default(),
    };
    if cli.pretty {
        options = options.with_pretty(true);
    }
    if cli.quote_identifiers {
        options = options.with_identifier_quoting(IdentifierQuoting::Always);
    }

    let sql = match cli.sql {
        Some(sql) => sql,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read SQL from stdin")?;
            buffer
        }
    };

    let output = translate(&sql, &cli.read, &cli.write, &options)
        .with_context(|| format!("Cannot translate from {} to {}", cli.read, cli.write))?;
    println!("{output}");
    Ok(())
}
