//! Holds the editable filter tree and the records it is applied to.

use crate::error::FilterError;
use crate::evaluate::evaluate_query;
use crate::preset::PresetSink;
use crate::types::{AdvancedFilterConfig, FilterConditionUpdate, FilterGroupUpdate, Record};
use std::sync::Arc;

/// Filter state for one filtering session.
///
/// The tree is replaced, never mutated in place: every edit that matches
/// builds a new [`AdvancedFilterConfig`] behind a fresh `Arc`, and an edit
/// that matches nothing keeps the old `Arc`. The filtered view is recomputed
/// from scratch whenever the records or the tree change.
pub struct FilterStateStore {
    records: Vec<Record>,
    config: Arc<AdvancedFilterConfig>,
    /// Positions in `records` that pass `config`, ascending.
    filtered: Vec<usize>,
}

impl FilterStateStore {
    /// Creates a store with an empty AND filter.
    pub fn new(records: Vec<Record>) -> Self {
        Self::with_filters(records, AdvancedFilterConfig::default())
    }

    pub fn with_filters(records: Vec<Record>, initial: AdvancedFilterConfig) -> Self {
        let mut store = FilterStateStore {
            records,
            config: Arc::new(initial),
            filtered: Vec::new(),
        };
        store.recompute();
        store
    }

    pub fn filters(&self) -> Arc<AdvancedFilterConfig> {
        Arc::clone(&self.config)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Replaces the whole filter tree.
    pub fn set_filters(&mut self, config: AdvancedFilterConfig) {
        log::debug!(
            "filter applied: {} groups, {} conditions",
            config.groups.len(),
            config.condition_count()
        );
        self.config = Arc::new(config);
        self.recompute();
    }

    /// Replaces the record collection.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.recompute();
    }

    /// Merges `update` into the group `group_id`. Unknown ids are a no-op.
    pub fn update_group(&mut self, group_id: &str, update: &FilterGroupUpdate) {
        match self.config.with_group_update(group_id, update) {
            Some(next) => {
                self.config = Arc::new(next);
                self.recompute();
            }
            None => log::debug!("update_group: no group {group_id:?}"),
        }
    }

    /// Merges `update` into condition `condition_id` of group `group_id`.
    /// Unknown ids are a no-op.
    pub fn update_condition(
        &mut self,
        group_id: &str,
        condition_id: &str,
        update: &FilterConditionUpdate,
    ) {
        match self
            .config
            .with_condition_update(group_id, condition_id, update)
        {
            Some(next) => {
                self.config = Arc::new(next);
                self.recompute();
            }
            None => log::debug!("update_condition: no condition {condition_id:?} in group {group_id:?}"),
        }
    }

    /// Records passing the current filter, in input order.
    pub fn filtered_records(&self) -> Vec<&Record> {
        self.filtered.iter().map(|&i| &self.records[i]).collect()
    }

    pub fn filtered_indices(&self) -> &[usize] {
        &self.filtered
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Hands a snapshot of the current tree to `sink` under `name`.
    ///
    /// A failure is returned to the caller as is; nothing is retried.
    pub fn save_preset<S>(&self, sink: &S, name: &str) -> Result<(), FilterError>
    where
        S: PresetSink + ?Sized,
    {
        match sink.save(&self.config, name) {
            Ok(()) => {
                log::info!("filter preset {name:?} saved");
                Ok(())
            }
            Err(e) => {
                log::warn!("error saving filter preset {name:?}: {e}");
                Err(e)
            }
        }
    }

    fn recompute(&mut self) {
        let config = &self.config;
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| evaluate_query(r, config))
            .map(|(i, _)| i)
            .collect();
        log::debug!(
            "filtered {} of {} records",
            self.filtered.len(),
            self.records.len()
        );
    }
}
