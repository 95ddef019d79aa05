use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use routine_cli::config::{Overrides, config_path, effective_settings};
use routine_cli::render::{options_table, search_json, search_output};
use routine_ingest::{
    Settings, SourcePlan, load_rows, read_rows, refresh, save_settings_to, to_toml,
};
use routine_model::{Field, Row};
use routine_query::{DomainSets, query};

use crate::cli::{ConfigArgs, OptionsArgs, OutputFormatArg, SearchArgs, SourceArgs};

pub fn run_search(args: &SearchArgs, overrides: &Overrides) -> Result<()> {
    let rows = load_dataset(&args.source, overrides)?;
    let filters = args.filter_state();
    let span = info_span!("search", active = filters.active_count());
    let _guard = span.enter();

    let result = query(&rows, &filters);
    match args.format {
        OutputFormatArg::Table => println!("{}", search_output(result.status(), result.rows())),
        OutputFormatArg::Json => {
            let json = search_json(result.status(), result.rows()).context("encode results")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_options(args: &OptionsArgs, overrides: &Overrides) -> Result<()> {
    let rows = load_dataset(&args.source, overrides)?;
    let domains = DomainSets::from_rows(&rows);
    let fields: Vec<Field> = match args.field {
        Some(field) => vec![field],
        None => Field::ALL.to_vec(),
    };
    let lists: Vec<_> = fields
        .into_iter()
        .map(|field| (field, domains.options(field)))
        .collect();
    println!("{}", options_table(&lists));
    Ok(())
}

pub fn run_refresh(overrides: &Overrides) -> Result<()> {
    let plan = source_plan(overrides, false)?;
    let rows = refresh(&plan).context("refresh routine")?;
    println!(
        "Fetched {} classes into {}",
        rows.len(),
        plan.cache_path.display()
    );
    Ok(())
}

pub fn run_config(args: &ConfigArgs, overrides: &Overrides) -> Result<()> {
    let path = config_path(overrides)?;
    if args.init {
        if path.exists() {
            println!("Settings file already exists: {}", path.display());
        } else {
            save_settings_to(&Settings::default(), &path)
                .with_context(|| format!("write {}", path.display()))?;
            println!("Wrote default settings to {}", path.display());
        }
    }

    let settings = effective_settings(overrides)?;
    println!("Settings file: {}", path.display());
    println!();
    print!("{}", to_toml(&settings, &path)?);
    Ok(())
}

fn source_plan(overrides: &Overrides, offline: bool) -> Result<SourcePlan> {
    let settings = effective_settings(overrides)?;
    let cache_path = settings
        .cache
        .resolved_path()
        .context("resolve cache location; pass --cache")?;
    Ok(SourcePlan::from_settings(&settings, cache_path).offline(offline))
}

/// Rows for a lookup: a local export when `--input` is given, else the
/// configured source with cache fallback.
fn load_dataset(source: &SourceArgs, overrides: &Overrides) -> Result<Vec<Row>> {
    if let Some(path) = &source.input {
        let rows = read_rows(path).with_context(|| format!("read {}", path.display()))?;
        debug!(rows = rows.len(), path = %path.display(), "loaded local export");
        return Ok(rows);
    }
    let plan = source_plan(overrides, source.offline)?;
    let loaded = load_rows(&plan);
    info!(rows = loaded.rows.len(), origin = %loaded.origin, "routine loaded");
    Ok(loaded.rows)
}
