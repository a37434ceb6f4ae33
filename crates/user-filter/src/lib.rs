//! Advanced filter evaluation for user record collections.
//!
//! # Overview
//!
//! A filter is a two-level tree: an [`AdvancedFilterConfig`] combines
//! [`FilterGroup`]s with AND/OR, and each group combines
//! [`FilterCondition`]s with AND/OR. Conditions test one record field with
//! one [`OperatorKind`].
//!
//! Unconfigured or malformed parts of the tree pass every record, so a
//! half-edited filter never hides the whole collection.
//!
//! # Example
//!
//! ```
//! use user_filter::{
//!     evaluate_query, AdvancedFilterConfig, FilterCondition, FilterGroup, Logic, OperatorKind,
//! };
//! use serde_json::json;
//!
//! let config = AdvancedFilterConfig::new(
//!     Logic::And,
//!     vec![FilterGroup::new(
//!         "g1",
//!         Logic::Or,
//!         vec![
//!             FilterCondition::new("c1", "role", OperatorKind::Eq, json!("ADMIN")),
//!             FilterCondition::new("c2", "role", OperatorKind::Eq, json!("STAFF")),
//!         ],
//!     )],
//! );
//!
//! let staff = json!({"name": "Bob", "role": "STAFF"});
//! let viewer = json!({"name": "Eve", "role": "VIEWER"});
//! assert!(evaluate_query(staff.as_object().unwrap(), &config));
//! assert!(!evaluate_query(viewer.as_object().unwrap(), &config));
//! ```

pub mod error;
pub mod evaluate;
pub mod operators;
pub mod preset;
pub mod quick;
pub mod store;
pub mod types;
pub mod util;
pub mod value;

pub use error::FilterError;
pub use evaluate::{evaluate_condition, evaluate_group, evaluate_query, filter_records};
pub use operators::OperatorKind;
pub use preset::{FilterPreset, PresetSink};
pub use quick::QuickFilters;
pub use store::FilterStateStore;
pub use types::{
    records_from_json, AdvancedFilterConfig, FilterCondition, FilterConditionUpdate, FilterGroup,
    FilterGroupUpdate, Logic, Record,
};
pub use value::{resolve, FieldValue};
