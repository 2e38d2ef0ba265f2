use anyhow::{bail, Context, Result};
use comfy_table::Table as ComfyTable;

use mocksmith_core::synthesize_records;

use super::{load_config, read_schema, resolve_mode};
use crate::args::PreviewArgs;

const MAX_CELL_WIDTH: usize = 40;

pub fn run(args: &PreviewArgs) -> Result<()> {
    let config = load_config()?;

    let mut options = config.synthesis_options();
    if let Some(len) = args.array_length {
        if len == 0 {
            bail!("--array-length must be at least 1");
        }
        options.array_length = len;
    }
    options.mode = resolve_mode(args.deterministic, options.mode);
    options.seed = args.seed.or(options.seed);

    let schema_json = read_schema(&args.schema)?;
    let records = synthesize_records(args.count, &schema_json, &options)
        .with_context(|| format!("Invalid schema in {}", args.schema.display()))?;

    let Some(first) = records.first().and_then(|r| r.as_object()) else {
        println!("(no records)");
        return Ok(());
    };
    let columns: Vec<&String> = first.keys().collect();

    let mut t = ComfyTable::new();
    t.set_header(columns.iter().map(|c| c.as_str()).collect::<Vec<_>>());

    for record in &records {
        let values: Vec<String> = columns
            .iter()
            .map(|col| {
                record
                    .get(col.as_str())
                    .map(cell_text)
                    .unwrap_or_default()
            })
            .collect();
        t.add_row(values);
    }

    println!(
        "━━━ {} ({} records, {:?}) ━━━",
        args.schema.display(),
        records.len(),
        options.mode
    );
    println!("{}\n", t);

    Ok(())
}

/// Strings print bare; nested values print as compact JSON. Long cells are cut.
fn cell_text(value: &serde_json::Value) -> String {
    let s = match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if s.chars().count() > MAX_CELL_WIDTH {
        let cut: String = s.chars().take(MAX_CELL_WIDTH - 3).collect();
        format!("{}...", cut)
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_truncates() {
        let long = serde_json::Value::String("x".repeat(100));
        let cell = cell_text(&long);
        assert_eq!(cell.chars().count(), MAX_CELL_WIDTH);
        assert!(cell.ends_with("..."));
    }

    #[test]
    fn test_cell_text_nested_is_json() {
        let nested = serde_json::json!({"a": 1});
        assert_eq!(cell_text(&nested), r#"{"a":1}"#);
    }
}
