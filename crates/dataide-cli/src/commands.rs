use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dataide_export::{
    build_export_zip, profiling_csv, profiling_json, samples_zip, table_csv, write_archive,
};
use dataide_generate::{
    DatasetSupplier, FileSupplier, GenerateOptions, SyntheticSupplier, generate_payload,
    render_mermaid_erd, synthetic_payload,
};
use dataide_ingest::{load_samples_dir, read_payload, read_schemas};
use dataide_model::{DatasetPayload, SampleTables, SuggestedChart, TableSchema};
use dataide_profile::{
    ChartOptions, ProfileOptions, compute_profile_with_options, suggest_charts_with_options,
};
use tracing::{debug, info, info_span, trace};

use crate::cli::{ChartsArgs, ExportArgs, GenerateArgs, ProfileArgs, ProfileFormatArg, SourceArgs};
use crate::logging::redact_value;
use crate::summary::profile_table;

/// Sample tables plus the schemas that describe them.
#[derive(Debug, Clone, Default)]
pub struct SampleSource {
    pub samples: SampleTables,
    pub schemas: Vec<TableSchema>,
}

/// Result of `dataide generate`.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub payload: DatasetPayload,
    pub json: String,
    pub written: Option<PathBuf>,
}

/// Result of `dataide export`.
#[derive(Debug)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub bytes: usize,
    pub tables: usize,
    pub caveats: Vec<String>,
}

/// Loads sample tables from a payload file, a CSV folder, or the synthetic
/// dataset when neither is given.
pub fn load_source(source: &SourceArgs) -> Result<SampleSource> {
    let loaded = if let Some(path) = &source.payload {
        let payload = read_payload(path)
            .with_context(|| format!("read payload {}", path.display()))?;
        SampleSource {
            samples: payload.sample_rows,
            schemas: payload.tables,
        }
    } else if let Some(dir) = &source.samples {
        let samples =
            load_samples_dir(dir).with_context(|| format!("load samples from {}", dir.display()))?;
        SampleSource {
            samples,
            schemas: Vec::new(),
        }
    } else {
        info!(seed = source.seed, "no source given, using synthetic dataset");
        let payload = synthetic_payload("sample", source.seed);
        SampleSource {
            samples: payload.sample_rows,
            schemas: payload.tables,
        }
    };

    for (table, rows) in &loaded.samples {
        debug!(table = %table, rows = rows.len(), "loaded sample table");
        if let Some(first) = rows.first() {
            let preview = serde_json::to_string(first).unwrap_or_default();
            trace!(table = %table, first_row = redact_value(&preview), "sample preview");
        }
    }
    Ok(loaded)
}

fn supplier_for(payload: Option<&Path>, seed: u64) -> Box<dyn DatasetSupplier> {
    match payload {
        Some(path) => Box::new(FileSupplier::new(path)),
        None => Box::new(SyntheticSupplier::new(seed)),
    }
}

/// Asks the configured supplier for a payload and fills in anything the
/// supplier left out.
pub fn resolve_payload(prompt: &str, payload: Option<&Path>, seed: u64) -> DatasetPayload {
    let supplier = supplier_for(payload, seed);
    info!(supplier = supplier.name(), "resolving payload");
    debug!(prompt = redact_value(prompt), "prompt");

    let options = GenerateOptions::default().with_seed(seed);
    let mut payload = generate_payload(supplier.as_ref(), prompt, &options);
    if payload.mermaid_erd.trim().is_empty() && !payload.tables.is_empty() {
        payload.mermaid_erd = render_mermaid_erd(&payload.tables);
        debug!("rendered missing ERD");
    }
    payload
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateOutcome> {
    let span = info_span!("generate");
    let _guard = span.enter();

    let payload = resolve_payload(&args.prompt, args.payload.as_deref(), args.seed);
    let json = serde_json::to_string_pretty(&payload).context("serialize payload")?;
    if let Some(path) = &args.output {
        std::fs::write(path, &json).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "wrote payload");
    }
    Ok(GenerateOutcome {
        payload,
        json,
        written: args.output.clone(),
    })
}

/// Profiles the selected source and renders it in the requested format.
pub fn run_profile(args: &ProfileArgs) -> Result<String> {
    let span = info_span!("profile");
    let _guard = span.enter();

    let mut source = load_source(&args.source)?;
    if let Some(path) = &args.schema {
        source.schemas =
            read_schemas(path).with_context(|| format!("read schemas {}", path.display()))?;
    }
    let options = ProfileOptions::default().with_top_values_limit(args.top_values);
    let summary = compute_profile_with_options(&source.samples, &source.schemas, &options);

    let rendered = match args.format {
        ProfileFormatArg::Table => profile_table(&summary).to_string(),
        ProfileFormatArg::Json => profiling_json(&summary).context("render profiling JSON")?,
        ProfileFormatArg::Csv => profiling_csv(&summary).context("render profiling CSV")?,
    };
    Ok(rendered)
}

pub fn run_charts(args: &ChartsArgs) -> Result<Vec<SuggestedChart>> {
    let span = info_span!("charts");
    let _guard = span.enter();

    let source = load_source(&args.source)?;
    let options = ChartOptions::default().with_max_charts(args.max_charts);
    let charts = suggest_charts_with_options(&source.samples, &options);
    info!(charts = charts.len(), "suggested charts");
    Ok(charts)
}

pub fn run_export(args: &ExportArgs) -> Result<ExportOutcome> {
    let span = info_span!("export", samples_only = args.samples_only);
    let _guard = span.enter();

    let payload = resolve_payload(&args.prompt, args.payload.as_deref(), args.seed);
    if let Some(table) = &args.table {
        let csv = table_csv(&payload.sample_rows, table)
            .with_context(|| format!("export table {table}"))?;
        std::fs::write(&args.output, &csv)
            .with_context(|| format!("write {}", args.output.display()))?;
        info!(table = %table, path = %args.output.display(), "wrote table CSV");
        return Ok(ExportOutcome {
            path: args.output.clone(),
            bytes: csv.len(),
            tables: 1,
            caveats: payload.caveats.unwrap_or_default(),
        });
    }
    let bytes = if args.samples_only {
        samples_zip(&payload.sample_rows).context("build samples archive")?
    } else {
        build_export_zip(&args.prompt, &payload).context("build export archive")?
    };
    write_archive(&args.output, &bytes)
        .with_context(|| format!("write {}", args.output.display()))?;

    Ok(ExportOutcome {
        path: args.output.clone(),
        bytes: bytes.len(),
        tables: payload
            .sample_rows
            .values()
            .filter(|rows| !rows.is_empty())
            .count(),
        caveats: payload.caveats.unwrap_or_default(),
    })
}
