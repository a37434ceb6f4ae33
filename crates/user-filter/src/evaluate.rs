//! The three evaluators: condition, group and query.
//!
//! All of them are pure and total: identical inputs give identical results
//! and nothing can fail.

use crate::types::{AdvancedFilterConfig, FilterCondition, FilterGroup, Record};
use crate::value::{resolve, FieldValue};

/// Decides whether `record` satisfies `condition`.
///
/// A condition without a field has not been configured yet and passes.
pub fn evaluate_condition(record: &Record, condition: &FilterCondition) -> bool {
    if !condition.is_configured() {
        return true;
    }
    let field = resolve(record, &condition.field);
    let operand = FieldValue::from(condition.value.as_ref());
    condition.operator.apply(field, operand)
}

/// Combines the configured conditions of `group` with the group's logic.
///
/// Unconfigured conditions are left out of the fold rather than counted as
/// `true`, so they cannot turn an OR group into a pass. A group with nothing
/// left to test passes.
pub fn evaluate_group(record: &Record, group: &FilterGroup) -> bool {
    group.logic.combine(
        group
            .conditions
            .iter()
            .filter(|c| c.is_configured())
            .map(|c| evaluate_condition(record, c)),
    )
}

/// Combines the groups of `config` with the config's logic.
///
/// Groups with an empty id are malformed and skipped. A config with no
/// remaining groups passes.
pub fn evaluate_query(record: &Record, config: &AdvancedFilterConfig) -> bool {
    config.logic.combine(
        config
            .groups
            .iter()
            .filter(|g| !g.id.is_empty())
            .map(|g| evaluate_group(record, g)),
    )
}

/// Returns the records that satisfy `config`, in their original order.
pub fn filter_records<'a>(records: &'a [Record], config: &AdvancedFilterConfig) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|r| evaluate_query(r, config))
        .collect()
}
