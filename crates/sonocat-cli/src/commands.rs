use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tracing::{info, info_span};

use sonocat_cli::render::{dataset_listing, facets_table, issues_table, validation_summary};
use sonocat_cli::selection::build_criteria;
use sonocat_ingest::{load, try_load};
use sonocat_model::{DatasetSchema, RecordSet, SchemaPreset};
use sonocat_query::{DatasetRow, FacetValues, FilterEngine};
use sonocat_validate::{ValidationOptions, ValidationReport, validate};

use crate::cli::{FacetsArgs, ListArgs, OutputFormatArg, SchemaArg, SourceArgs, ValidateArgs};

pub fn run_list(args: &ListArgs) -> Result<()> {
    let schema = resolve_schema(&args.source)?;
    let records = load_lenient(&args.source, &schema)?;
    let criteria = build_criteria(args.query.as_deref(), &args.filters, &args.flags);

    let engine = FilterEngine::new(&schema);
    let visible = info_span!("filter").in_scope(|| engine.filter(&records, &criteria));
    let rows: Vec<DatasetRow> = visible
        .iter()
        .map(|record| DatasetRow::from_record(record, &schema, args.tag_limit))
        .collect();

    match args.format {
        OutputFormatArg::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormatArg::Table => println!("{}", dataset_listing(&rows, &schema, records.len())),
    }
    Ok(())
}

pub fn run_facets(args: &FacetsArgs) -> Result<()> {
    let schema = resolve_schema(&args.source)?;
    let records = load_lenient(&args.source, &schema)?;
    let facets = FacetValues::derive(&records, &schema);

    match args.format {
        OutputFormatArg::Json => println!("{}", serde_json::to_string_pretty(&facets)?),
        OutputFormatArg::Table => println!("{}", facets_table(&facets)),
    }
    Ok(())
}

/// Load strictly and validate. Load failures are errors here, unlike
/// `list` and `facets` which show an empty catalog.
pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let schema = resolve_schema(&args.source)?;
    let source = &args.source.source;
    let records = runtime()?
        .block_on(try_load(source, &schema))
        .with_context(|| format!("load {source}"))?;

    let snapshot = args.source.schema_file.is_none()
        && matches!(args.source.schema, SchemaArg::Snapshot);
    let options = ValidationOptions::default()
        .with_threshold(args.threshold)
        .with_partial_matching(args.partial_match || snapshot);
    let report = info_span!("validate", source = %source)
        .in_scope(|| validate(&records, &schema, &options));

    match args.format {
        OutputFormatArg::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormatArg::Table => {
            if !report.issues.is_empty() {
                println!("{}", issues_table(&report));
            }
            println!("{}", validation_summary(&report));
        }
    }
    Ok(report)
}

fn resolve_schema(args: &SourceArgs) -> Result<DatasetSchema> {
    match &args.schema_file {
        Some(path) => {
            let schema = DatasetSchema::load_from(path)
                .with_context(|| format!("load schema {}", path.display()))?;
            info!(path = %path.display(), "using schema file");
            Ok(schema)
        }
        None => Ok(SchemaPreset::from(args.schema).schema()),
    }
}

fn load_lenient(args: &SourceArgs, schema: &DatasetSchema) -> Result<RecordSet> {
    Ok(runtime()?.block_on(load(&args.source, schema)))
}

/// One fetch per invocation, so a single-threaded runtime is enough.
fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start async runtime")
}
