//! Quick filter bar: free-text search plus exact role/status/department pickers.

use crate::types::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuickFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

fn set(opt: &Option<String>) -> Option<&str> {
    opt.as_deref().filter(|s| !s.is_empty())
}

fn field_equals(record: &Record, field: &str, expected: &str) -> bool {
    matches!(record.get(field), Some(Value::String(s)) if s == expected)
}

fn field_contains(record: &Record, field: &str, needle: &str) -> bool {
    matches!(record.get(field), Some(Value::String(s)) if s.to_lowercase().contains(needle))
}

impl QuickFilters {
    pub fn is_empty(&self) -> bool {
        set(&self.search).is_none()
            && set(&self.role).is_none()
            && set(&self.status).is_none()
            && set(&self.department).is_none()
    }

    /// Narrows `records` by every set filter, keeping their order.
    ///
    /// The department picker only applies when the first remaining record
    /// carries a `department` key; collections without that column ignore it.
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a Record>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut result: Vec<&Record> = records.into_iter().collect();

        if let Some(search) = set(&self.search) {
            let needle = search.to_lowercase();
            result.retain(|r| field_contains(r, "name", &needle) || field_contains(r, "email", &needle));
        }
        if let Some(role) = set(&self.role) {
            result.retain(|r| field_equals(r, "role", role));
        }
        if let Some(status) = set(&self.status) {
            result.retain(|r| field_equals(r, "status", status));
        }
        if let Some(department) = set(&self.department) {
            if result.first().is_some_and(|r| r.contains_key("department")) {
                result.retain(|r| field_equals(r, "department", department));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(v: Value) -> Vec<Record> {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_search_matches_name_or_email() {
        let users = records(json!([
            {"name": "Alice", "email": "alice@acme.com"},
            {"name": "Bob", "email": "bob@globex.com"},
            {"name": "Carol", "email": "carol@ACME.com"},
        ]));
        let quick = QuickFilters {
            search: Some("Acme".to_string()),
            ..Default::default()
        };
        let names: Vec<_> = quick.apply(&users).iter().map(|r| r["name"].clone()).collect();
        assert_eq!(names, vec![json!("Alice"), json!("Carol")]);
    }

    #[test]
    fn test_role_and_status_are_exact() {
        let users = records(json!([
            {"name": "a", "role": "ADMIN", "status": "ACTIVE"},
            {"name": "b", "role": "admin", "status": "ACTIVE"},
            {"name": "c", "role": "ADMIN", "status": "SUSPENDED"},
        ]));
        let quick = QuickFilters {
            role: Some("ADMIN".to_string()),
            status: Some("ACTIVE".to_string()),
            ..Default::default()
        };
        let out = quick.apply(&users);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0]["name"], json!("a"));
    }

    #[test]
    fn test_department_ignored_without_column() {
        let users = records(json!([{"name": "a"}, {"name": "b"}]));
        let quick = QuickFilters {
            department: Some("Sales".to_string()),
            ..Default::default()
        };
        assert_eq!(quick.apply(&users).len(), 2);

        let staffed = records(json!([
            {"name": "a", "department": "Sales"},
            {"name": "b", "department": "Ops"},
        ]));
        assert_eq!(quick.apply(&staffed).len(), 1);
    }

    #[test]
    fn test_empty_strings_are_unset() {
        let users = records(json!([{"name": "a"}]));
        let quick = QuickFilters {
            search: Some(String::new()),
            role: Some(String::new()),
            ..Default::default()
        };
        assert!(quick.is_empty());
        assert_eq!(quick.apply(&users).len(), 1);
    }
}
