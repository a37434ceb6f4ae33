//! Condition operators.
//!
//! [`OperatorKind`] is closed over the names the filter builder emits. Any
//! other name is kept as [`OperatorKind::Unknown`] and passes every record.

pub mod comparison;
pub mod membership;
pub mod presence;
pub mod string;

use crate::value::FieldValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OperatorKind {
    Eq,
    Neq,
    Contains,
    StartsWith,
    EndsWith,
    In,
    NotIn,
    Gt,
    Gte,
    Lt,
    Lte,
    Between,
    IsEmpty,
    IsNotEmpty,
    IsNull,
    IsNotNull,
    /// An operator name outside the set above.
    Unknown(String),
}

impl OperatorKind {
    /// Every recognized operator, in builder menu order.
    pub const KNOWN: [OperatorKind; 16] = [
        OperatorKind::Eq,
        OperatorKind::Neq,
        OperatorKind::Contains,
        OperatorKind::StartsWith,
        OperatorKind::EndsWith,
        OperatorKind::In,
        OperatorKind::NotIn,
        OperatorKind::Gt,
        OperatorKind::Gte,
        OperatorKind::Lt,
        OperatorKind::Lte,
        OperatorKind::Between,
        OperatorKind::IsEmpty,
        OperatorKind::IsNotEmpty,
        OperatorKind::IsNull,
        OperatorKind::IsNotNull,
    ];

    /// Operator of a condition whose operator was never chosen.
    pub fn unset() -> Self {
        OperatorKind::Unknown(String::new())
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "eq" => OperatorKind::Eq,
            "neq" => OperatorKind::Neq,
            "contains" => OperatorKind::Contains,
            "startsWith" => OperatorKind::StartsWith,
            "endsWith" => OperatorKind::EndsWith,
            "in" => OperatorKind::In,
            "notIn" => OperatorKind::NotIn,
            "gt" => OperatorKind::Gt,
            "gte" => OperatorKind::Gte,
            "lt" => OperatorKind::Lt,
            "lte" => OperatorKind::Lte,
            "between" => OperatorKind::Between,
            "isEmpty" => OperatorKind::IsEmpty,
            "isNotEmpty" => OperatorKind::IsNotEmpty,
            "isNull" => OperatorKind::IsNull,
            "isNotNull" => OperatorKind::IsNotNull,
            other => OperatorKind::Unknown(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            OperatorKind::Eq => "eq",
            OperatorKind::Neq => "neq",
            OperatorKind::Contains => "contains",
            OperatorKind::StartsWith => "startsWith",
            OperatorKind::EndsWith => "endsWith",
            OperatorKind::In => "in",
            OperatorKind::NotIn => "notIn",
            OperatorKind::Gt => "gt",
            OperatorKind::Gte => "gte",
            OperatorKind::Lt => "lt",
            OperatorKind::Lte => "lte",
            OperatorKind::Between => "between",
            OperatorKind::IsEmpty => "isEmpty",
            OperatorKind::IsNotEmpty => "isNotEmpty",
            OperatorKind::IsNull => "isNull",
            OperatorKind::IsNotNull => "isNotNull",
            OperatorKind::Unknown(name) => name,
        }
    }

    /// Applies the operator to a resolved field value and the condition's
    /// operand.
    pub fn apply(&self, field: FieldValue<'_>, operand: FieldValue<'_>) -> bool {
        match self {
            OperatorKind::Eq => comparison::eq(field, operand),
            OperatorKind::Neq => comparison::neq(field, operand),
            OperatorKind::Contains => string::contains(field, operand),
            OperatorKind::StartsWith => string::starts_with(field, operand),
            OperatorKind::EndsWith => string::ends_with(field, operand),
            OperatorKind::In => membership::is_in(field, operand),
            OperatorKind::NotIn => membership::not_in(field, operand),
            OperatorKind::Gt => comparison::gt(field, operand),
            OperatorKind::Gte => comparison::gte(field, operand),
            OperatorKind::Lt => comparison::lt(field, operand),
            OperatorKind::Lte => comparison::lte(field, operand),
            OperatorKind::Between => comparison::between(field, operand),
            OperatorKind::IsEmpty => presence::is_empty(field),
            OperatorKind::IsNotEmpty => presence::is_not_empty(field),
            OperatorKind::IsNull => presence::is_null(field),
            OperatorKind::IsNotNull => presence::is_not_null(field),
            OperatorKind::Unknown(name) => {
                log::trace!("unknown operator {name:?}, condition passes");
                true
            }
        }
    }
}

impl From<String> for OperatorKind {
    fn from(name: String) -> Self {
        match OperatorKind::from_name(&name) {
            // reuse the allocation
            OperatorKind::Unknown(_) => OperatorKind::Unknown(name),
            known => known,
        }
    }
}

impl From<OperatorKind> for String {
    fn from(op: OperatorKind) -> Self {
        match op {
            OperatorKind::Unknown(name) => name,
            known => known.name().to_string(),
        }
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
