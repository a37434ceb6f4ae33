use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;
use std::str::FromStr;
use user_filter::Logic;

#[derive(Parser, Debug)]
#[command(
    name = "user-filter",
    about = "Filter a JSON collection of user records with an advanced AND/OR filter",
    version
)]
pub struct Cli {
    /// JSON array of user records; `-` or omitted reads stdin
    #[arg(long)]
    pub records: Option<PathBuf>,

    /// Advanced filter config as JSON
    #[arg(long, conflicts_with = "preset")]
    pub filter: Option<PathBuf>,

    /// Use a saved preset as the filter
    #[arg(long)]
    pub preset: Option<String>,

    /// Directory holding saved presets
    #[arg(long, env = "USER_FILTER_PRESET_DIR", default_value = "presets")]
    pub preset_dir: PathBuf,

    /// Save the effective filter under this preset name
    #[arg(long)]
    pub save_preset: Option<String>,

    /// Print the names of saved presets and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Replace a condition's value before filtering, e.g. `g1/c2="ADMIN"`
    #[arg(long = "set", value_name = "GROUP/CONDITION=JSON")]
    pub set: Vec<ConditionEdit>,

    /// Switch a group's logic before filtering, e.g. `g1=OR`
    #[arg(long = "group-logic", value_name = "GROUP=AND|OR")]
    pub group_logic: Vec<GroupLogicEdit>,

    /// Case-insensitive search over name and email
    #[arg(long)]
    pub search: Option<String>,

    /// Exact role
    #[arg(long)]
    pub role: Option<String>,

    /// Exact status
    #[arg(long)]
    pub status: Option<String>,

    /// Exact department (ignored when records have no department)
    #[arg(long)]
    pub department: Option<String>,

    /// Print only the number of matching records
    #[arg(long)]
    pub count: bool,

    #[arg(long, short)]
    pub verbose: bool,
}

/// `GROUP/CONDITION=JSON`. A value that is not valid JSON is taken as a string.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionEdit {
    pub group_id: String,
    pub condition_id: String,
    pub value: Value,
}

impl FromStr for ConditionEdit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (target, raw) = s
            .split_once('=')
            .ok_or_else(|| format!("expected GROUP/CONDITION=VALUE, found {s:?}"))?;
        let (group_id, condition_id) = target
            .split_once('/')
            .filter(|(g, c)| !g.is_empty() && !c.is_empty())
            .ok_or_else(|| format!("expected GROUP/CONDITION before '=', found {target:?}"))?;
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        Ok(ConditionEdit {
            group_id: group_id.to_string(),
            condition_id: condition_id.to_string(),
            value,
        })
    }
}

/// `GROUP=AND` or `GROUP=OR`.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupLogicEdit {
    pub group_id: String,
    pub logic: Logic,
}

impl FromStr for GroupLogicEdit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (group_id, logic) = s
            .split_once('=')
            .filter(|(g, _)| !g.is_empty())
            .ok_or_else(|| format!("expected GROUP=AND|OR, found {s:?}"))?;
        Ok(GroupLogicEdit {
            group_id: group_id.to_string(),
            logic: logic.parse()?,
        })
    }
}
