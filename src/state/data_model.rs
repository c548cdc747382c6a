use std::fmt;

use serde::{Deserialize, Serialize};

/// Calendar month number, 1 for January through 12 for December.
pub type Month = u8;

pub const MONTH_COUNT: usize = 12;

/// Canonical month abbreviations, indexed by `month - 1`. These are the
/// labels `month_columns` emits; the UI localizes header text separately.
pub const MONTH_LABELS: [&str; MONTH_COUNT] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Row identifier: plan files may use either a JSON string or an integer.
/// The two never compare equal, so `"6"` and `6` name different rows.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowKey {
    Int(i64),
    Text(String),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Int(id) => write!(f, "{id}"),
            RowKey::Text(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for RowKey {
    fn from(id: &str) -> Self {
        RowKey::Text(id.to_string())
    }
}

impl From<String> for RowKey {
    fn from(id: String) -> Self {
        RowKey::Text(id)
    }
}

impl From<i64> for RowKey {
    fn from(id: i64) -> Self {
        RowKey::Int(id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowHeader {
    pub id: RowKey,
    pub label: String,
}

/// One of the twelve columns produced by `month_columns`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthColumn {
    pub month: Month,
    pub label: String,
}

/// A value entry starting at `month` and spanning `duration` consecutive
/// columns, wrapping past December into January.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub row_id: RowKey,
    pub month: Month,
    pub value: String,
    #[serde(default = "default_duration")]
    pub duration: u8,
}

fn default_duration() -> u8 {
    1
}

/// One grid slot. A cell covered by another entry's span is hidden and
/// holds no data; a cell with data is never hidden.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Cell {
    pub is_hidden: bool,
    pub data: Option<Entry>,
}

/// Returns the twelve month columns in display order, starting at
/// `start_month` and wrapping past December. Start months outside `1..=12`
/// are clamped to the nearest bound; plan loading rejects them earlier.
pub fn month_columns(start_month: Month) -> Vec<MonthColumn> {
    let base = usize::from(start_month.clamp(1, 12)) - 1;
    (0..MONTH_COUNT)
        .map(|offset| {
            let index = (base + offset) % MONTH_COUNT;
            MonthColumn {
                month: (index + 1) as Month,
                label: MONTH_LABELS[index].to_string(),
            }
        })
        .collect()
}
