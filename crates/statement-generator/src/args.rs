//! CLI argument definitions for the `generate` command.

use clap::Args;
use mess_core::DmlKind;
use std::path::PathBuf;

use crate::{DialectKind, GenerateConfig};

/// Arguments of `mess generate`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Kind of statement to generate
    #[arg(long, value_enum, default_value_t = DmlKind::Update, env = "MESS_DML")]
    pub dml: DmlKind,

    /// Number of statements to generate (must be greater than zero)
    #[arg(long, default_value_t = 1000, env = "MESS_NUM_ROWS")]
    pub num_rows: u64,

    /// Path to the table schema (YAML or JSON)
    #[arg(long, short = 's', env = "MESS_SCHEMA_PATH")]
    pub schema_path: PathBuf,

    /// Snapshot of the simulated table, read at start and rewritten at exit
    #[arg(
        long,
        visible_alias = "metadata-path",
        default_value = "./metadata.json",
        env = "MESS_SNAPSHOT_PATH"
    )]
    pub snapshot_path: PathBuf,

    /// File the generated statements are written to
    #[arg(long, short = 'o', default_value = "output.sql", env = "MESS_OUTPUT_PATH")]
    pub output_path: PathBuf,

    /// SQL dialect for identifier quoting and string escaping
    #[arg(long, value_enum, default_value_t = DialectKind::Mysql, env = "MESS_DIALECT")]
    pub dialect: DialectKind,

    /// Random seed for deterministic generation (same seed and snapshot = same output)
    #[arg(long, env = "MESS_SEED")]
    pub seed: Option<u64>,

    /// Give up after this many conflicting candidates for one statement (default: retry forever)
    #[arg(long, env = "MESS_MAX_ATTEMPTS")]
    pub max_attempts: Option<u32>,

    /// Probability that an UPDATE leaves a non-key column out of its SET clause
    #[arg(long, default_value_t = 0.5, env = "MESS_UPDATE_SKIP_PROBABILITY")]
    pub update_skip_probability: f64,
}

impl GenerateArgs {
    /// Generation settings derived from the arguments.
    pub fn config(&self) -> GenerateConfig {
        GenerateConfig {
            max_attempts: self.max_attempts,
            update_skip_probability: self.update_skip_probability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::parse_from(["mess", "--schema-path", "schema.yaml"]);
        let args = cli.args;

        assert_eq!(args.dml, DmlKind::Update);
        assert_eq!(args.num_rows, 1000);
        assert_eq!(args.snapshot_path, PathBuf::from("./metadata.json"));
        assert_eq!(args.output_path, PathBuf::from("output.sql"));
        assert_eq!(args.dialect, DialectKind::Mysql);
        assert_eq!(args.seed, None);
        assert_eq!(args.config(), GenerateConfig::default());
    }

    #[test]
    fn test_metadata_path_alias() {
        let cli = TestCli::parse_from([
            "mess",
            "--schema-path",
            "schema.yaml",
            "--metadata-path",
            "state.json",
            "--dml",
            "delete",
            "--dialect",
            "postgresql",
            "--max-attempts",
            "10",
        ]);

        assert_eq!(cli.args.snapshot_path, PathBuf::from("state.json"));
        assert_eq!(cli.args.dml, DmlKind::Delete);
        assert_eq!(cli.args.dialect, DialectKind::Postgresql);
        assert_eq!(cli.args.config().max_attempts, Some(10));
    }

    #[test]
    fn test_unknown_dml_rejected() {
        let result = TestCli::try_parse_from(["mess", "--schema-path", "s.yaml", "--dml", "upsert"]);
        assert!(result.is_err());
    }
}
