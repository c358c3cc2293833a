use anyhow::{Context, Result};
use comfy_table::Table;

use atlas_cli::pipeline::{PipelineConfig, export, ingest, load, transform, validate};
use atlas_ingest::{CountrySource, LAYOUT_RULES};
use atlas_model::{CLEAN_TABLE, Metric};
use atlas_store::{MemoryWarehouse, Warehouse, read_table_csv};
use atlas_validate::{CheckKind, ValidationReport, write_validation_report_json};

use crate::cli::{CheckArgs, RunArgs};
use crate::summary::apply_table_style;
use crate::types::RunResult;

pub fn run_pipeline(args: &RunArgs) -> Result<RunResult> {
    let config = PipelineConfig {
        raw_dir: args.raw_dir.clone(),
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| args.raw_dir.join("output")),
    };

    let ingested = ingest(&config)?;
    let transformed = transform(&ingested)?;
    let paths = export(&config, &transformed)?;

    let mut warehouse = MemoryWarehouse::new();
    load(&mut warehouse, &transformed)?;

    let (validation, report) = if args.skip_validation {
        (None, None)
    } else {
        let report = validate(&warehouse)?;
        let path = write_validation_report_json(&config.output_dir, CLEAN_TABLE, &report)
            .context("write validation report")?;
        (Some(report), Some(path))
    };

    Ok(RunResult {
        output_dir: config.output_dir,
        clean_csv: paths.clean_csv,
        profile: paths.profile,
        report,
        sources: ingested.sources,
        merged_rows: transformed.frame.record_count(),
        validation,
    })
}

pub fn run_check(args: &CheckArgs) -> Result<ValidationReport> {
    let frame = read_table_csv(&args.csv)
        .with_context(|| format!("read snapshot: {}", args.csv.display()))?;
    let mut warehouse = MemoryWarehouse::new();
    warehouse.replace(CLEAN_TABLE, frame)?;
    let report = validate(&warehouse)?;
    if let Some(dir) = &args.report_dir {
        write_validation_report_json(dir, CLEAN_TABLE, &report)
            .context("write validation report")?;
    }
    Ok(report)
}

pub fn run_metrics() -> Result<()> {
    let mut metrics = Table::new();
    metrics.set_header(vec!["Metric", "Source prefix", "Description"]);
    apply_table_style(&mut metrics);
    for metric in Metric::ALL {
        metrics.add_row(vec![
            metric.column_name().to_string(),
            format!("{}*.csv", metric.file_prefix()),
            metric.description().to_string(),
        ]);
    }
    println!("{metrics}");

    let mut layouts = Table::new();
    layouts.set_header(vec!["Layout", "Requires", "Country"]);
    apply_table_style(&mut layouts);
    for rule in LAYOUT_RULES {
        let country = match rule.country {
            CountrySource::Column(name) => format!("column '{name}'"),
            CountrySource::Literal(literal) => format!("literal \"{literal}\""),
        };
        layouts.add_row(vec![
            rule.name.to_string(),
            rule.requires.join(", "),
            country,
        ]);
    }
    println!("{layouts}");

    let mut checks = Table::new();
    checks.set_header(vec!["Check", "Kind", "Rule"]);
    apply_table_style(&mut checks);
    for check in CheckKind::ALL {
        let kind = if check.is_hard() { "hard" } else { "soft" };
        checks.add_row(vec![
            check.as_str().to_string(),
            kind.to_string(),
            check.rule().to_string(),
        ]);
    }
    println!("{checks}");
    Ok(())
}
