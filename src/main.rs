//! Command-line interface for mess
//!
//! # Usage Examples
//!
//! ```bash
//! # Insert 1000 rows into the simulated table
//! mess generate --dml insert --num-rows 1000 \
//!   --schema-path demos/users.yaml \
//!   --snapshot-path ./metadata.json \
//!   --output-path insert.sql
//!
//! # Update 200 of the rows created above, reproducibly
//! mess generate --dml update --num-rows 200 \
//!   --schema-path demos/users.yaml \
//!   --output-path update.sql --seed 42
//!
//! # Delete rows, with PostgreSQL quoting
//! mess generate --dml delete --num-rows 50 \
//!   --schema-path demos/users.yaml \
//!   --output-path delete.sql --dialect postgresql
//! ```
//!
//! Every flag can also be set through its `MESS_*` environment variable.
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=info`).

use clap::{Parser, Subcommand};
use mess::{run_generate, GenerateArgs};

#[derive(Parser)]
#[command(name = "mess")]
#[command(about = "Generate constraint-valid SQL DML against a simulated table")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate SQL statements with random data
    Generate(GenerateArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            run_generate(&args)?;
        }
    }

    Ok(())
}
