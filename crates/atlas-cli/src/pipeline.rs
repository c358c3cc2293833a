//! Staged pipeline orchestration.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: select the latest source file per metric, normalize
//!    its layout, and clean it into a typed series
//! 2. **Transform**: outer-join merge, sanitize, forward-fill, sort
//! 3. **Export**: write `clean_data.csv` and the quality profile
//! 4. **Load**: replace the `clean_data` table in the warehouse
//! 5. **Validate**: run the data-quality check suite
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. Configuration is explicit; nothing reads ambient globals.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use atlas_ingest::{latest_source_file, load_series};
use atlas_model::{CLEAN_TABLE, IndicatorSeries, Metric};
use atlas_store::{Warehouse, write_table_csv};
use atlas_transform::{
    CleanFrame, QualityProfile, build_clean_frame, merge_series, profile_rows,
};
use atlas_validate::{ValidationReport, run_checks};

/// Explicit run configuration passed into each stage.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory holding the raw date-stamped source CSVs.
    pub raw_dir: PathBuf,
    /// Directory receiving the canonical CSV and reports.
    pub output_dir: PathBuf,
}

/// One ingested source file.
#[derive(Debug)]
pub struct SourceSummary {
    pub metric: Metric,
    pub path: PathBuf,
    pub rows: usize,
}

/// Result of the ingest stage: one cleaned series per metric.
#[derive(Debug)]
pub struct IngestResult {
    series: [IndicatorSeries; 3],
    pub sources: Vec<SourceSummary>,
}

impl IngestResult {
    pub fn series(&self, metric: Metric) -> &IndicatorSeries {
        &self.series[metric.index()]
    }
}

/// Select, read, normalize, and clean the three source series.
pub fn ingest(config: &PipelineConfig) -> Result<IngestResult> {
    let span = info_span!("ingest", raw_dir = %config.raw_dir.display());
    let _guard = span.enter();

    let mut sources = Vec::with_capacity(Metric::ALL.len());
    let mut series = Vec::with_capacity(Metric::ALL.len());
    for metric in Metric::ALL {
        let path = latest_source_file(&config.raw_dir, metric)?;
        let cleaned = load_series(&path, metric)
            .with_context(|| format!("load {metric} from {}", path.display()))?;
        info!(metric = %metric, file = %path.display(), rows = cleaned.len(), "ingested series");
        sources.push(SourceSummary {
            metric,
            path,
            rows: cleaned.len(),
        });
        series.push(cleaned);
    }
    let series: [IndicatorSeries; 3] = series
        .try_into()
        .ok()
        .context("expected exactly three series")?;
    Ok(IngestResult { series, sources })
}

/// Result of the transform stage.
#[derive(Debug)]
pub struct TransformResult {
    pub frame: CleanFrame,
    pub profile: QualityProfile,
}

/// Merge the cleaned series into the canonical frame and profile it.
pub fn transform(ingested: &IngestResult) -> Result<TransformResult> {
    let span = info_span!("transform");
    let _guard = span.enter();

    let rows = merge_series(
        ingested.series(Metric::Population),
        ingested.series(Metric::Gdp),
        ingested.series(Metric::Co2Emissions),
    );
    let profile = profile_rows(&rows);
    let mut frame = build_clean_frame(&rows)?;
    for source in &ingested.sources {
        frame.add_source_file(source.path.clone());
    }
    info!(rows = frame.record_count(), "built canonical frame");
    Ok(TransformResult { frame, profile })
}

/// Artifacts written by the export stage.
#[derive(Debug)]
pub struct ExportPaths {
    pub clean_csv: PathBuf,
    pub profile: PathBuf,
}

/// Write the canonical CSV and the data-quality profile.
pub fn export(config: &PipelineConfig, transformed: &TransformResult) -> Result<ExportPaths> {
    let span = info_span!("export", output_dir = %config.output_dir.display());
    let _guard = span.enter();

    info!(
        sources = transformed.frame.source_files().len(),
        "exporting canonical snapshot"
    );
    let clean_csv = config.output_dir.join("clean_data.csv");
    write_table_csv(&transformed.frame.data, &clean_csv)?;
    let profile = config.output_dir.join("data_quality_summary.txt");
    transformed.profile.write_to(&profile)?;
    Ok(ExportPaths { clean_csv, profile })
}

/// Replace the canonical table in the warehouse.
pub fn load(warehouse: &mut dyn Warehouse, transformed: &TransformResult) -> Result<()> {
    let span = info_span!("load", table = CLEAN_TABLE);
    let _guard = span.enter();

    warehouse.replace(CLEAN_TABLE, transformed.frame.data.clone())?;
    info!(rows = transformed.frame.record_count(), "loaded canonical table");
    Ok(())
}

/// Run the validation suite against the loaded table.
pub fn validate(warehouse: &dyn Warehouse) -> atlas_validate::Result<ValidationReport> {
    let span = info_span!("validate", table = CLEAN_TABLE);
    let _guard = span.enter();

    run_checks(warehouse, CLEAN_TABLE)
}
