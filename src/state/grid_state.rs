use std::collections::BTreeMap;

use crate::state::config::PlanConfig;
use crate::state::data_model::{
    month_columns, Cell, Entry, MONTH_COUNT, Month, MonthColumn, RowHeader, RowKey,
};

/// Pointer to the cell currently being edited. At most one exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveCell {
    pub row_id: RowKey,
    pub month: Month,
}

/// Live state of a drag-resize, from handle press to pointer release.
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeInfo {
    pub row_id: RowKey,
    pub start_month: Month,
    pub initial_duration: u8,
    pub start_x: f64,
    pub cell_width: f64,
}

/// The calendar grid and its two transient interaction state machines
/// (cell editing and drag-resize). Rows and months are fixed by the plan
/// configuration; edits only ever flip cells between empty, primary
/// (holding an entry) and hidden (covered by a neighbor's span).
#[derive(Clone, Debug, PartialEq, Default)]
pub struct GridState {
    sticky_column_header: String,
    row_headers: Vec<RowHeader>,
    month_headers: Vec<MonthColumn>,
    cells: BTreeMap<RowKey, BTreeMap<Month, Cell>>,
    active_cell: Option<ActiveCell>,
    draft: String,
    resize: Option<ResizeInfo>,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: PlanConfig) -> Self {
        let mut state = Self::default();
        state.replace_config(config);
        state
    }

    /// Rebuilds the grid from scratch. Headers and cells are regenerated
    /// and any in-flight edit or resize is discarded, then each configured
    /// entry is placed in input order. Entries naming an unknown row are
    /// silently ignored.
    pub fn replace_config(&mut self, config: PlanConfig) {
        self.sticky_column_header = config.sticky_column_header;
        self.row_headers = config.row_headers;
        self.month_headers = month_columns(config.start_month);
        self.active_cell = None;
        self.draft.clear();
        self.resize = None;

        self.cells = self
            .row_headers
            .iter()
            .map(|row| {
                let months = self
                    .month_headers
                    .iter()
                    .map(|column| (column.month, Cell::default()))
                    .collect::<BTreeMap<Month, Cell>>();
                (row.id.clone(), months)
            })
            .collect();

        for entry in config.initial_data {
            self.place(&entry.row_id, entry.month, &entry.value, entry.duration);
        }
    }

    pub fn sticky_column_header(&self) -> &str {
        &self.sticky_column_header
    }

    pub fn row_headers(&self) -> &[RowHeader] {
        &self.row_headers
    }

    pub fn month_headers(&self) -> &[MonthColumn] {
        &self.month_headers
    }

    pub fn start_month(&self) -> Month {
        self.month_headers.first().map(|column| column.month).unwrap_or(1)
    }

    pub fn is_empty(&self) -> bool {
        self.row_headers.is_empty()
    }

    pub fn cell(&self, row_id: &RowKey, month: Month) -> Option<&Cell> {
        self.cells.get(row_id).and_then(|row| row.get(&month))
    }

    /// 1-based position of `month` within the active header ordering (not
    /// the raw calendar month number).
    pub fn column_index(&self, month: Month) -> Option<usize> {
        self.month_headers
            .iter()
            .position(|column| column.month == month)
            .map(|index| index + 1)
    }

    /// Flattens the grid back into entries: every primary cell with a
    /// non-empty value. The order of the returned list is unspecified.
    pub fn entries(&self) -> Vec<Entry> {
        let mut out = Vec::new();
        for row in self.cells.values() {
            for cell in row.values() {
                if let Some(entry) = &cell.data {
                    if !entry.value.is_empty() {
                        out.push(entry.clone());
                    }
                }
            }
        }
        out
    }

    /// Snapshot for saving: the current configuration with `initial_data`
    /// replaced by the grid's live entries.
    pub fn to_config(&self) -> PlanConfig {
        PlanConfig {
            sticky_column_header: self.sticky_column_header.clone(),
            row_headers: self.row_headers.clone(),
            start_month: self.start_month(),
            initial_data: self.entries(),
        }
    }

    /// Writes an entry into its primary cell and hides the cells its span
    /// covers. If the target cell already holds an entry, that entry's span
    /// is released first, so shrinking or regrowing never leaves orphaned
    /// hidden cells. No-op when the row or month is not in the grid.
    /// Durations clamp into `1..=12`; a span never wraps far enough to fold
    /// back onto its own primary cell.
    pub fn place(&mut self, row_id: &RowKey, month: Month, value: &str, duration: u8) {
        let duration = duration.clamp(1, MONTH_COUNT as u8);

        let previous = self
            .cell(row_id, month)
            .and_then(|cell| cell.data.as_ref())
            .map(|entry| entry.duration);
        if let Some(previous_duration) = previous {
            self.clear(row_id, month, previous_duration);
        }

        let Some(covered) = self.covered_months(month, duration) else {
            return;
        };
        let Some(row) = self.cells.get_mut(row_id) else {
            return;
        };
        let Some(primary) = row.get_mut(&month) else {
            return;
        };

        primary.is_hidden = false;
        primary.data = Some(Entry {
            row_id: row_id.clone(),
            month,
            value: value.to_string(),
            duration,
        });

        for covered_month in covered {
            if let Some(cell) = row.get_mut(&covered_month) {
                cell.is_hidden = true;
                cell.data = None;
            }
        }
    }

    /// Inverse of `place`: empties the primary cell and unhides the cells
    /// the span covered. Cells are permanent slots; only their
    /// data/hidden flags change.
    pub fn clear(&mut self, row_id: &RowKey, month: Month, duration: u8) {
        let duration = duration.clamp(1, MONTH_COUNT as u8);

        let Some(covered) = self.covered_months(month, duration) else {
            return;
        };
        let Some(row) = self.cells.get_mut(row_id) else {
            return;
        };

        if let Some(primary) = row.get_mut(&month) {
            primary.data = None;
        }
        for covered_month in covered {
            if let Some(cell) = row.get_mut(&covered_month) {
                cell.is_hidden = false;
            }
        }
    }

    pub fn active_cell(&self) -> Option<&ActiveCell> {
        self.active_cell.as_ref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_cell_active(&self, row_id: &RowKey, month: Month) -> bool {
        self.active_cell
            .as_ref()
            .is_some_and(|active| active.row_id == *row_id && active.month == month)
    }

    /// Enters edit mode on a cell. No-op while a resize is in flight, when
    /// the cell is already active, or when the cell is absent or hidden
    /// (hidden cells are not user-visible and editing one would corrupt
    /// span bookkeeping).
    pub fn click_cell(&mut self, row_id: &RowKey, month: Month) -> bool {
        if self.resize.is_some() || self.is_cell_active(row_id, month) {
            return false;
        }

        let draft = {
            let Some(cell) = self.cell(row_id, month) else {
                return false;
            };
            if cell.is_hidden {
                return false;
            }
            cell.data
                .as_ref()
                .map(|entry| entry.value.clone())
                .unwrap_or_default()
        };

        self.draft = draft;
        self.active_cell = Some(ActiveCell {
            row_id: row_id.clone(),
            month,
        });
        true
    }

    pub fn set_draft(&mut self, draft: String) {
        if self.active_cell.is_some() {
            self.draft = draft;
        }
    }

    /// Commits the draft and leaves edit mode. A blank draft deletes the
    /// cell's entry; otherwise the draft is placed at the cell's existing
    /// duration (1 for a previously empty cell).
    pub fn save_edit(&mut self) -> bool {
        let Some(active) = self.active_cell.clone() else {
            return false;
        };

        if self.draft.trim().is_empty() {
            self.delete_entry(&active.row_id, active.month);
        } else {
            let duration = self
                .cell(&active.row_id, active.month)
                .and_then(|cell| cell.data.as_ref())
                .map(|entry| entry.duration)
                .unwrap_or(1);
            let value = self.draft.clone();
            self.place(&active.row_id, active.month, &value, duration);
        }

        self.clear_active_state();
        true
    }

    pub fn cancel_edit(&mut self) -> bool {
        if self.active_cell.is_none() {
            return false;
        }
        self.clear_active_state();
        true
    }

    /// Removes the entry at `(row_id, month)`, unhiding every cell its span
    /// covered. `false` when the cell holds no entry.
    pub fn delete_entry(&mut self, row_id: &RowKey, month: Month) -> bool {
        let Some(duration) = self
            .cell(row_id, month)
            .and_then(|cell| cell.data.as_ref())
            .map(|entry| entry.duration)
        else {
            return false;
        };

        self.clear(row_id, month, duration);
        self.clear_active_state();
        true
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    pub fn resize_info(&self) -> Option<&ResizeInfo> {
        self.resize.as_ref()
    }

    /// Clamps a requested duration so the span neither extends past the
    /// twelfth visible column nor shrinks below a single month.
    pub fn clamped_duration(&self, start_month: Month, requested: i64) -> u8 {
        let max = self
            .column_index(start_month)
            .map(|column| self.month_headers.len() + 1 - column)
            .unwrap_or(1);
        requested.clamp(1, max as i64) as u8
    }

    /// Starts a drag-resize of the entry at `(row_id, month)`. Refused when
    /// a resize is already in flight, when no cell width could be measured,
    /// or when the cell holds no entry.
    pub fn begin_resize(
        &mut self,
        row_id: &RowKey,
        month: Month,
        start_x: f64,
        cell_width: f64,
    ) -> bool {
        if self.resize.is_some() || cell_width <= 0.0 {
            return false;
        }
        let Some(initial_duration) = self
            .cell(row_id, month)
            .and_then(|cell| cell.data.as_ref())
            .map(|entry| entry.duration.max(1))
        else {
            return false;
        };

        self.resize = Some(ResizeInfo {
            row_id: row_id.clone(),
            start_month: month,
            initial_duration,
            start_x,
            cell_width,
        });
        true
    }

    /// Applies the duration implied by the pointer's horizontal travel.
    /// Each application fully supersedes the previous one; the grid is only
    /// touched when the clamped duration differs from the current one.
    /// Returns whether the grid changed.
    pub fn resize_to(&mut self, pointer_x: f64) -> bool {
        let Some(info) = self.resize.clone() else {
            return false;
        };

        let delta = pointer_x - info.start_x;
        // Halves round toward the next column; a half-cell drag leftward
        // keeps the span.
        let months_moved = (delta / info.cell_width + 0.5).floor() as i64;
        let requested = i64::from(info.initial_duration) + months_moved;
        let new_duration = self.clamped_duration(info.start_month, requested);

        let Some(entry) = self
            .cell(&info.row_id, info.start_month)
            .and_then(|cell| cell.data.as_ref())
        else {
            return false;
        };
        if entry.duration == new_duration {
            return false;
        }

        let value = entry.value.clone();
        self.place(&info.row_id, info.start_month, &value, new_duration);
        true
    }

    /// Leaves resize mode unconditionally; the last applied duration is
    /// final. `false` when no resize was in flight.
    pub fn end_resize(&mut self) -> bool {
        self.resize.take().is_some()
    }

    fn clear_active_state(&mut self) {
        self.active_cell = None;
        self.draft.clear();
    }

    /// Months covered by a span beyond its primary cell: offsets
    /// `1..duration` walked through the header ordering, wrapping mod 12.
    fn covered_months(&self, month: Month, duration: u8) -> Option<Vec<Month>> {
        let column = self.column_index(month)?;
        let months = (1..usize::from(duration))
            .map(|offset| {
                let index = (column - 1 + offset) % self.month_headers.len();
                self.month_headers[index].month
            })
            .collect();
        Some(months)
    }
}
