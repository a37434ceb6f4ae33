use crate::operators::OperatorKind;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One user entity under test: an open mapping from field name to value.
pub type Record = Map<String, Value>;

/// Combinator for a group's conditions or a config's groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Logic {
    #[default]
    And,
    Or,
}

impl Logic {
    /// Folds boolean results: `every` for AND, `some` for OR.
    ///
    /// An empty input is vacuously `true` under both combinators.
    pub fn combine<I>(self, mut results: I) -> bool
    where
        I: Iterator<Item = bool>,
    {
        let mut seen = false;
        let outcome = match self {
            Logic::And => results.all(|r| {
                seen = true;
                r
            }),
            Logic::Or => results.any(|r| {
                seen = true;
                r
            }),
        };
        outcome || !seen
    }
}

impl std::fmt::Display for Logic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Logic::And => f.write_str("AND"),
            Logic::Or => f.write_str("OR"),
        }
    }
}

/// Accepts the wire names only, so command-line input and filter files agree.
impl std::str::FromStr for Logic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AND" => Ok(Logic::And),
            "OR" => Ok(Logic::Or),
            other => Err(format!("logic must be AND or OR, got {other:?}")),
        }
    }
}

/// A single predicate against a named record attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub id: String,
    /// Empty means "not yet configured": the condition always passes.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub field: String,
    /// Missing or `null` decodes as the unset operator, which passes.
    #[serde(default = "OperatorKind::unset", deserialize_with = "operator_or_unset")]
    pub operator: OperatorKind,
    /// `None` when the key is missing, `Some(Value::Null)` for an explicit null.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
}

impl FilterCondition {
    pub fn new(
        id: impl Into<String>,
        field: impl Into<String>,
        operator: OperatorKind,
        value: Value,
    ) -> Self {
        FilterCondition {
            id: id.into(),
            field: field.into(),
            operator,
            value: Some(value),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.field.is_empty()
    }
}

/// Conditions combined by one logic operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterGroup {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default)]
    pub logic: Logic,
    #[serde(default)]
    pub conditions: Vec<FilterCondition>,
}

impl FilterGroup {
    pub fn new(id: impl Into<String>, logic: Logic, conditions: Vec<FilterCondition>) -> Self {
        FilterGroup {
            id: id.into(),
            logic,
            conditions,
        }
    }
}

/// Root of the filter tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancedFilterConfig {
    #[serde(default)]
    pub logic: Logic,
    #[serde(default)]
    pub groups: Vec<FilterGroup>,
}

impl AdvancedFilterConfig {
    pub fn new(logic: Logic, groups: Vec<FilterGroup>) -> Self {
        AdvancedFilterConfig { logic, groups }
    }

    pub fn from_json(json: &str) -> Result<Self, crate::FilterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Total number of conditions across all groups.
    pub fn condition_count(&self) -> usize {
        self.groups.iter().map(|g| g.conditions.len()).sum()
    }

    pub fn group(&self, group_id: &str) -> Option<&FilterGroup> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    /// Returns a new tree with every group whose id is `group_id` merged with
    /// `update`, or `None` if no group matched.
    pub fn with_group_update(&self, group_id: &str, update: &FilterGroupUpdate) -> Option<Self> {
        if !self.groups.iter().any(|g| g.id == group_id) {
            return None;
        }
        let groups = self
            .groups
            .iter()
            .map(|g| {
                if g.id == group_id {
                    update.apply_to(g)
                } else {
                    g.clone()
                }
            })
            .collect();
        Some(AdvancedFilterConfig {
            logic: self.logic,
            groups,
        })
    }

    /// Returns a new tree with the condition `condition_id` inside group
    /// `group_id` merged with `update`, or `None` if that pair does not exist.
    pub fn with_condition_update(
        &self,
        group_id: &str,
        condition_id: &str,
        update: &FilterConditionUpdate,
    ) -> Option<Self> {
        let matched = self
            .groups
            .iter()
            .filter(|g| g.id == group_id)
            .any(|g| g.conditions.iter().any(|c| c.id == condition_id));
        if !matched {
            return None;
        }
        let groups = self
            .groups
            .iter()
            .map(|g| {
                if g.id != group_id {
                    return g.clone();
                }
                FilterGroup {
                    id: g.id.clone(),
                    logic: g.logic,
                    conditions: g
                        .conditions
                        .iter()
                        .map(|c| {
                            if c.id == condition_id {
                                update.apply_to(c)
                            } else {
                                c.clone()
                            }
                        })
                        .collect(),
                }
            })
            .collect();
        Some(AdvancedFilterConfig {
            logic: self.logic,
            groups,
        })
    }
}

/// Partial edit of a [`FilterCondition`]: set fields overwrite, unset keep.
///
/// `value` has three states: `None` keeps the old value, `Some(None)` makes it
/// absent and `Some(Some(v))` replaces it. A JSON key (even `null`) decodes as
/// a replacement.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FilterConditionUpdate {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub operator: Option<OperatorKind>,
    #[serde(default, deserialize_with = "replacement_value")]
    pub value: Option<Option<Value>>,
}

impl FilterConditionUpdate {
    pub fn value(value: Value) -> Self {
        FilterConditionUpdate {
            value: Some(Some(value)),
            ..Default::default()
        }
    }

    pub fn clear_value() -> Self {
        FilterConditionUpdate {
            value: Some(None),
            ..Default::default()
        }
    }

    pub fn field(field: impl Into<String>) -> Self {
        FilterConditionUpdate {
            field: Some(field.into()),
            ..Default::default()
        }
    }

    pub fn operator(operator: OperatorKind) -> Self {
        FilterConditionUpdate {
            operator: Some(operator),
            ..Default::default()
        }
    }

    pub fn apply_to(&self, condition: &FilterCondition) -> FilterCondition {
        FilterCondition {
            id: self.id.clone().unwrap_or_else(|| condition.id.clone()),
            field: self.field.clone().unwrap_or_else(|| condition.field.clone()),
            operator: self
                .operator
                .clone()
                .unwrap_or_else(|| condition.operator.clone()),
            value: match &self.value {
                Some(value) => value.clone(),
                None => condition.value.clone(),
            },
        }
    }
}

/// Partial edit of a [`FilterGroup`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FilterGroupUpdate {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub logic: Option<Logic>,
    #[serde(default)]
    pub conditions: Option<Vec<FilterCondition>>,
}

impl FilterGroupUpdate {
    pub fn logic(logic: Logic) -> Self {
        FilterGroupUpdate {
            logic: Some(logic),
            ..Default::default()
        }
    }

    pub fn conditions(conditions: Vec<FilterCondition>) -> Self {
        FilterGroupUpdate {
            conditions: Some(conditions),
            ..Default::default()
        }
    }

    pub fn apply_to(&self, group: &FilterGroup) -> FilterGroup {
        FilterGroup {
            id: self.id.clone().unwrap_or_else(|| group.id.clone()),
            logic: self.logic.unwrap_or(group.logic),
            conditions: self
                .conditions
                .clone()
                .unwrap_or_else(|| group.conditions.clone()),
        }
    }
}

/// Parses a JSON array of objects into a record collection.
pub fn records_from_json(json: &str) -> Result<Vec<Record>, crate::FilterError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(crate::FilterError::NotACollection);
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(map) => Ok(map),
            _ => Err(crate::FilterError::NotARecord(i)),
        })
        .collect()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn operator_or_unset<'de, D>(deserializer: D) -> Result<OperatorKind, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(OperatorKind::from)
        .unwrap_or_else(OperatorKind::unset))
}

// With `#[serde(default)]` a missing key stays `None`; anything present,
// including `null`, becomes `Some`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn replacement_value<'de, D>(deserializer: D) -> Result<Option<Option<Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| Some(Some(v)))
}
