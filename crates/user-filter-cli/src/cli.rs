//! Core logic behind the `user-filter` binary.

use crate::argparse::Cli;
use crate::preset_dir::PresetDir;
use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use user_filter::{
    records_from_json, AdvancedFilterConfig, FilterConditionUpdate, FilterGroupUpdate,
    FilterStateStore, QuickFilters, Record,
};

fn read_input(path: Option<&Path>, mut stdin: impl Read) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs_err::read_to_string(p).with_context(|| format!("reading records from {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("reading records from stdin")?;
            Ok(buf)
        }
    }
}

fn load_filter(cli: &Cli, presets: &PresetDir) -> Result<AdvancedFilterConfig> {
    if let Some(path) = &cli.filter {
        let text = fs_err::read_to_string(path)?;
        return AdvancedFilterConfig::from_json(&text)
            .with_context(|| format!("parsing filter {}", path.display()));
    }
    if let Some(name) = &cli.preset {
        return presets
            .load(name)
            .with_context(|| format!("loading preset from {}", presets.root().display()));
    }
    Ok(AdvancedFilterConfig::default())
}

fn apply_edits(cli: &Cli, store: &mut FilterStateStore) {
    for edit in &cli.group_logic {
        if store.filters().group(&edit.group_id).is_none() {
            log::warn!("--group-logic: no group {:?}", edit.group_id);
        }
        store.update_group(&edit.group_id, &FilterGroupUpdate::logic(edit.logic));
    }
    for edit in &cli.set {
        let known = store
            .filters()
            .group(&edit.group_id)
            .is_some_and(|g| g.conditions.iter().any(|c| c.id == edit.condition_id));
        if !known {
            log::warn!(
                "--set: no condition {:?} in group {:?}",
                edit.condition_id,
                edit.group_id
            );
        }
        store.update_condition(
            &edit.group_id,
            &edit.condition_id,
            &FilterConditionUpdate::value(edit.value.clone()),
        );
    }
}

/// Runs one invocation and returns what should be printed to stdout.
pub fn run(cli: &Cli, stdin: impl Read) -> Result<String> {
    let presets = PresetDir::new(&cli.preset_dir);

    if cli.list_presets {
        return Ok(presets.list()?.join("\n"));
    }

    let input = read_input(cli.records.as_deref(), stdin)?;
    let records = records_from_json(&input).context("parsing records")?;
    let config = load_filter(cli, &presets)?;

    let mut store = FilterStateStore::with_filters(records, config);
    apply_edits(cli, &mut store);

    let config = store.filters();
    log::info!(
        "filter applied with {} condition{}",
        config.condition_count(),
        if config.condition_count() == 1 { "" } else { "s" }
    );

    if let Some(name) = &cli.save_preset {
        store
            .save_preset(&presets, name)
            .with_context(|| format!("saving preset {name:?}"))?;
    }

    let quick = QuickFilters {
        search: cli.search.clone(),
        role: cli.role.clone(),
        status: cli.status.clone(),
        department: cli.department.clone(),
    };
    let matched: Vec<&Record> = quick.apply(store.filtered_records());

    if cli.count {
        return Ok(matched.len().to_string());
    }
    let out = Value::Array(matched.into_iter().cloned().map(Value::Object).collect());
    Ok(serde_json::to_string_pretty(&out)?)
}
