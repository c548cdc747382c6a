use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::data_model::{Entry, MONTH_COUNT, Month, RowHeader, RowKey};

/// On-disk shape of a plan file: the sticky column title, the row set, the
/// month the calendar starts at, and the entries to seed the grid with.
/// Any change to this object means a full grid rebuild.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanConfig {
    #[serde(default)]
    pub sticky_column_header: String,
    pub row_headers: Vec<RowHeader>,
    pub start_month: Month,
    #[serde(default)]
    pub initial_data: Vec<Entry>,
}

#[derive(Debug)]
pub enum ConfigError {
    StartMonthOutOfRange(Month),
    EntryMonthOutOfRange { row_id: RowKey, month: Month },
    EntryDurationTooLong { row_id: RowKey, duration: u8 },
    DuplicateRowId(RowKey),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::StartMonthOutOfRange(month) => {
                write!(f, "start month {month} is outside 1..=12")
            }
            ConfigError::EntryMonthOutOfRange { row_id, month } => {
                write!(f, "entry for row '{row_id}' has month {month} outside 1..=12")
            }
            ConfigError::EntryDurationTooLong { row_id, duration } => {
                write!(f, "entry for row '{row_id}' has duration {duration} exceeding 12 months")
            }
            ConfigError::DuplicateRowId(row_id) => {
                write!(f, "duplicate row id '{row_id}' in row headers")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl PlanConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=12).contains(&self.start_month) {
            return Err(ConfigError::StartMonthOutOfRange(self.start_month));
        }

        let mut seen = BTreeSet::new();
        for row in &self.row_headers {
            if !seen.insert(&row.id) {
                return Err(ConfigError::DuplicateRowId(row.id.clone()));
            }
        }

        for entry in &self.initial_data {
            if !(1..=12).contains(&entry.month) {
                return Err(ConfigError::EntryMonthOutOfRange {
                    row_id: entry.row_id.clone(),
                    month: entry.month,
                });
            }
            if usize::from(entry.duration) > MONTH_COUNT {
                return Err(ConfigError::EntryDurationTooLong {
                    row_id: entry.row_id.clone(),
                    duration: entry.duration,
                });
            }
        }

        Ok(())
    }

    /// Raises zero durations to 1 so every entry covers at least one month.
    pub fn normalize(&mut self) {
        for entry in &mut self.initial_data {
            if entry.duration == 0 {
                entry.duration = 1;
            }
        }
    }
}
