//! Integration tests for `FilterStateStore`.

use serde_json::{json, Value};
use std::cell::RefCell;
use std::sync::Arc;
use user_filter::{
    AdvancedFilterConfig, FilterCondition, FilterConditionUpdate, FilterError, FilterGroup,
    FilterGroupUpdate, FilterStateStore, Logic, OperatorKind, Record,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn users() -> Vec<Record> {
    serde_json::from_value(json!([
        {"name": "Alice", "role": "ADMIN", "age": 34},
        {"name": "Bob", "role": "STAFF", "age": 27},
        {"name": "Carol", "role": "VIEWER", "age": 45},
        {"name": "Dave", "role": "STAFF", "age": 61},
    ]))
    .unwrap()
}

fn names(store: &FilterStateStore) -> Vec<String> {
    store
        .filtered_records()
        .into_iter()
        .map(|r| r["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

fn role_filter(role: &str) -> AdvancedFilterConfig {
    AdvancedFilterConfig::new(
        Logic::And,
        vec![FilterGroup::new(
            "g1",
            Logic::And,
            vec![FilterCondition::new("c1", "role", OperatorKind::Eq, json!(role))],
        )],
    )
}

#[test]
fn test_new_store_has_empty_and_filter() {
    init_logger();
    let store = FilterStateStore::new(users());
    assert_eq!(*store.filters(), AdvancedFilterConfig::default());
    assert_eq!(names(&store), vec!["Alice", "Bob", "Carol", "Dave"]);
}

#[test]
fn test_initial_filters_apply_immediately() {
    let store = FilterStateStore::with_filters(users(), role_filter("STAFF"));
    assert_eq!(names(&store), vec!["Bob", "Dave"]);
    assert_eq!(store.filtered_indices(), &[1, 3]);
    assert_eq!(store.filtered_count(), 2);
}

#[test]
fn test_set_filters_replaces_tree() {
    let mut store = FilterStateStore::new(users());
    store.set_filters(role_filter("VIEWER"));
    assert_eq!(names(&store), vec!["Carol"]);
    store.set_filters(AdvancedFilterConfig::default());
    assert_eq!(store.filtered_count(), 4);
}

#[test]
fn test_set_records_recomputes() {
    let mut store = FilterStateStore::with_filters(users(), role_filter("ADMIN"));
    assert_eq!(names(&store), vec!["Alice"]);
    let more: Vec<Record> = serde_json::from_value(json!([
        {"name": "Erin", "role": "ADMIN"},
        {"name": "Frank", "role": "STAFF"},
        {"name": "Grace", "role": "ADMIN"},
    ]))
    .unwrap();
    store.set_records(more);
    assert_eq!(names(&store), vec!["Erin", "Grace"]);
}

#[test]
fn test_update_condition_value() {
    let mut store = FilterStateStore::with_filters(users(), role_filter("ADMIN"));
    store.update_condition("g1", "c1", &FilterConditionUpdate::value(json!("STAFF")));
    assert_eq!(names(&store), vec!["Bob", "Dave"]);

    let condition = &store.filters().groups[0].conditions[0];
    assert_eq!(condition.id, "c1");
    assert_eq!(condition.field, "role");
    assert_eq!(condition.value, Some(json!("STAFF")));
}

#[test]
fn test_update_condition_operator_and_field() {
    let mut store = FilterStateStore::with_filters(users(), role_filter("ADMIN"));
    store.update_condition(
        "g1",
        "c1",
        &FilterConditionUpdate {
            field: Some("age".to_string()),
            operator: Some(OperatorKind::Gt),
            value: Some(Some(json!(40))),
            ..Default::default()
        },
    );
    assert_eq!(names(&store), vec!["Carol", "Dave"]);
}

#[test]
fn test_update_unknown_condition_is_noop() {
    let mut store = FilterStateStore::with_filters(users(), role_filter("ADMIN"));
    let before = store.filters();
    let before_json = serde_json::to_string(&*before).unwrap();

    store.update_condition("g1", "missing", &FilterConditionUpdate::value(json!("NEW")));
    store.update_condition("missing", "c1", &FilterConditionUpdate::value(json!("NEW")));

    let after = store.filters();
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(serde_json::to_string(&*after).unwrap(), before_json);
    assert_eq!(names(&store), vec!["Alice"]);
}

#[test]
fn test_update_condition_leaves_other_nodes_untouched() {
    let config = AdvancedFilterConfig::new(
        Logic::Or,
        vec![
            FilterGroup::new(
                "g1",
                Logic::And,
                vec![
                    FilterCondition::new("c1", "role", OperatorKind::Eq, json!("ADMIN")),
                    FilterCondition::new("c2", "age", OperatorKind::Lt, json!(50)),
                ],
            ),
            FilterGroup::new(
                "g2",
                Logic::And,
                vec![FilterCondition::new("c1", "role", OperatorKind::Eq, json!("VIEWER"))],
            ),
        ],
    );
    let mut store = FilterStateStore::with_filters(users(), config.clone());
    store.update_condition("g2", "c1", &FilterConditionUpdate::value(json!("STAFF")));

    let after = store.filters();
    assert_eq!(after.groups[0], config.groups[0]);
    assert_eq!(after.groups[1].conditions[0].value, Some(json!("STAFF")));
    assert_eq!(names(&store), vec!["Alice", "Bob", "Dave"]);
}

#[test]
fn test_update_group_logic() {
    let config = AdvancedFilterConfig::new(
        Logic::And,
        vec![FilterGroup::new(
            "g1",
            Logic::And,
            vec![
                FilterCondition::new("c1", "role", OperatorKind::Eq, json!("ADMIN")),
                FilterCondition::new("c2", "age", OperatorKind::Gt, json!(60)),
            ],
        )],
    );
    let mut store = FilterStateStore::with_filters(users(), config);
    assert!(names(&store).is_empty());

    store.update_group("g1", &FilterGroupUpdate::logic(Logic::Or));
    assert_eq!(names(&store), vec!["Alice", "Dave"]);
    assert_eq!(store.filters().groups[0].conditions.len(), 2);
}

#[test]
fn test_update_group_conditions() {
    let mut store = FilterStateStore::with_filters(users(), role_filter("ADMIN"));
    store.update_group(
        "g1",
        &FilterGroupUpdate::conditions(vec![FilterCondition::new(
            "c9",
            "name",
            OperatorKind::StartsWith,
            json!("c"),
        )]),
    );
    assert_eq!(names(&store), vec!["Carol"]);
    assert_eq!(store.filters().groups[0].logic, Logic::And);
}

#[test]
fn test_update_unknown_group_is_noop() {
    let mut store = FilterStateStore::with_filters(users(), role_filter("ADMIN"));
    let before = store.filters();
    store.update_group("nope", &FilterGroupUpdate::logic(Logic::Or));
    assert!(Arc::ptr_eq(&before, &store.filters()));
}

#[test]
fn test_snapshots_are_not_affected_by_later_edits() {
    let mut store = FilterStateStore::with_filters(users(), role_filter("ADMIN"));
    let snapshot = store.filters();
    store.update_condition("g1", "c1", &FilterConditionUpdate::value(json!("STAFF")));
    assert_eq!(snapshot.groups[0].conditions[0].value, Some(json!("ADMIN")));
}

// ----------------------------------------------------------------- Presets

#[test]
fn test_save_preset_passes_current_config() {
    init_logger();
    let store = FilterStateStore::with_filters(users(), role_filter("STAFF"));
    let saved: RefCell<Vec<(String, Value)>> = RefCell::new(Vec::new());
    let sink = |config: &AdvancedFilterConfig, name: &str| -> Result<(), FilterError> {
        saved
            .borrow_mut()
            .push((name.to_string(), serde_json::to_value(config)?));
        Ok(())
    };

    store.save_preset(&sink, "Staff only").unwrap();

    let saved = saved.into_inner();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].0, "Staff only");
    assert_eq!(saved[0].1["groups"][0]["conditions"][0]["value"], json!("STAFF"));
}

#[test]
fn test_save_preset_failure_is_propagated() {
    let store = FilterStateStore::new(users());
    let calls = RefCell::new(0);
    let sink = |_: &AdvancedFilterConfig, name: &str| -> Result<(), FilterError> {
        *calls.borrow_mut() += 1;
        Err(FilterError::PresetRejected {
            name: name.to_string(),
            reason: "quota exceeded".to_string(),
        })
    };

    let err = store.save_preset(&sink, "mine").unwrap_err();
    assert!(matches!(err, FilterError::PresetRejected { ref name, .. } if name == "mine"));
    assert_eq!(calls.into_inner(), 1);
}
