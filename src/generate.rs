//! Generate command handler.

use anyhow::{bail, Context};
use mess_core::TableSchema;
use row_registry::RowRegistry;
use statement_generator::{GenerateArgs, StatementGenerator};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use value_generator::DataGenerator;

/// Outcome of a complete generate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Statements written to the output file.
    pub statements_written: usize,
    /// Rows saved in the snapshot.
    pub rows_in_snapshot: usize,
}

/// Run the generate command.
///
/// The output file and the snapshot are always written together: if the
/// batch stops early (no rows left, or constraint exhaustion), the partial
/// statements are still written and the snapshot still saved before the
/// error is returned, so the snapshot matches the emitted statements.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<GenerateSummary> {
    if args.num_rows == 0 {
        bail!("--num-rows should be greater than zero");
    }

    let schema = TableSchema::from_file(&args.schema_path)
        .with_context(|| format!("Failed to load schema from {:?}", args.schema_path))?;
    tracing::info!(
        "Loaded schema for table '{}' with {} fields",
        schema.table(),
        schema.fields().len()
    );

    let registry = RowRegistry::open_path(&schema, &args.snapshot_path)
        .with_context(|| format!("Failed to open snapshot {:?}", args.snapshot_path))?;

    let mut generator = StatementGenerator::new(
        schema,
        registry,
        args.dialect.dialect(),
        args.config(),
        DataGenerator::new(args.seed),
    )?;

    let (statements, failure) = match generator.generate_batch(args.dml, args.num_rows) {
        Ok(statements) => (statements, None),
        Err(e) => {
            let (statements, cause) = e.into_parts();
            (statements, Some(cause))
        }
    };

    write_statements(&args.output_path, &statements)
        .with_context(|| format!("Failed to write statements to {:?}", args.output_path))?;

    let rows_in_snapshot = generator
        .into_registry()
        .close()
        .with_context(|| format!("Failed to save snapshot {:?}", args.snapshot_path))?;

    if let Some(cause) = failure {
        return Err(anyhow::Error::new(cause).context(format!(
            "Stopped after {} of {} {} statements (written to {:?})",
            statements.len(),
            args.num_rows,
            args.dml,
            args.output_path
        )));
    }

    tracing::info!(
        "Wrote {} statements to {:?}; snapshot holds {} rows",
        statements.len(),
        args.output_path,
        rows_in_snapshot
    );
    Ok(GenerateSummary {
        statements_written: statements.len(),
        rows_in_snapshot,
    })
}

/// Write one statement per line, replacing the file.
fn write_statements(path: &Path, statements: &[String]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for statement in statements {
        writeln!(writer, "{statement}")?;
    }
    writer.flush()
}
