use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use mocksmith_core::synthesize_records;

use super::{load_config, read_schema, resolve_mode};
use crate::args::RecordsArgs;

const DEFAULT_COUNT: usize = 10;

pub fn run(args: &RecordsArgs) -> Result<()> {
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

    let count = args
        .count
        .or(config.generate.count)
        .unwrap_or(DEFAULT_COUNT);

    let schema_json = read_schema(&args.schema)?;
    let records = synthesize_records(count, &schema_json, &options)
        .with_context(|| format!("Invalid schema in {}", args.schema.display()))?;

    let rendered = if args.compact {
        serde_json::to_string(&records)?
    } else {
        serde_json::to_string_pretty(&records)?
    };

    match &args.output {
        Some(path) => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.cyan} {msg}")
                    .unwrap(),
            );
            pb.set_message(format!("Writing {}...", path.display()));

            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writer.write_all(rendered.as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()?;

            pb.finish_with_message(format!(
                "Wrote {} records to {} ✓",
                records.len(),
                path.display()
            ));
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
