use planboard::state::config::PlanConfig;
use planboard::state::data_model::{Cell, Entry, RowHeader, RowKey};
use planboard::state::grid_state::GridState;

fn row(id: &str, label: &str) -> RowHeader {
    RowHeader {
        id: RowKey::from(id),
        label: label.to_string(),
    }
}

fn entry(row_id: &str, month: u8, value: &str, duration: u8) -> Entry {
    Entry {
        row_id: RowKey::from(row_id),
        month,
        value: value.to_string(),
        duration,
    }
}

fn sample_config() -> PlanConfig {
    PlanConfig {
        sticky_column_header: "Tactic".to_string(),
        row_headers: vec![
            row("google", "Google"),
            row("meta", "Meta"),
            row("tiktok", "TikTok"),
        ],
        start_month: 6,
        initial_data: vec![
            entry("meta", 6, "$100,000", 2),
            entry("tiktok", 7, "$50,000", 3),
        ],
    }
}

fn cell<'a>(grid: &'a GridState, row_id: &str, month: u8) -> &'a Cell {
    grid.cell(&RowKey::from(row_id), month).unwrap()
}

fn sorted_entries(grid: &GridState) -> Vec<Entry> {
    let mut entries = grid.entries();
    entries.sort_by(|a, b| (&a.row_id, a.month).cmp(&(&b.row_id, b.month)));
    entries
}

#[test]
fn test_new_grid_is_empty() {
    let grid = GridState::new();
    assert!(grid.is_empty());
    assert!(grid.month_headers().is_empty());
    assert!(grid.entries().is_empty());
    assert_eq!(grid.start_month(), 1);
}

#[test]
fn test_from_config_builds_full_matrix() {
    let grid = GridState::from_config(sample_config());

    assert_eq!(grid.sticky_column_header(), "Tactic");
    assert_eq!(grid.start_month(), 6);
    assert_eq!(grid.row_headers().len(), 3);
    assert_eq!(grid.month_headers().len(), 12);

    for column in grid.month_headers() {
        let slot = cell(&grid, "google", column.month);
        assert!(!slot.is_hidden);
        assert!(slot.data.is_none());
    }
}

#[test]
fn test_from_config_places_initial_entries() {
    let grid = GridState::from_config(sample_config());

    let meta = cell(&grid, "meta", 6);
    let meta_entry = meta.data.as_ref().unwrap();
    assert_eq!(meta_entry.value, "$100,000");
    assert_eq!(meta_entry.duration, 2);
    assert!(cell(&grid, "meta", 7).is_hidden);
    assert!(!cell(&grid, "meta", 8).is_hidden);

    assert!(cell(&grid, "tiktok", 7).data.is_some());
    assert!(cell(&grid, "tiktok", 8).is_hidden);
    assert!(cell(&grid, "tiktok", 9).is_hidden);
    assert!(!cell(&grid, "tiktok", 10).is_hidden);
}

#[test]
fn test_place_single_month_hides_nothing() {
    let mut grid = GridState::from_config(sample_config());
    grid.place(&RowKey::from("google"), 10, "Brand push", 1);

    assert_eq!(cell(&grid, "google", 10).data.as_ref().unwrap().value, "Brand push");
    assert!(!cell(&grid, "google", 11).is_hidden);
}

#[test]
fn test_place_span_hides_covered_cells() {
    let mut grid = GridState::from_config(sample_config());
    grid.place(&RowKey::from("google"), 8, "Summer", 3);

    assert!(!cell(&grid, "google", 8).is_hidden);
    assert!(cell(&grid, "google", 9).is_hidden);
    assert!(cell(&grid, "google", 10).is_hidden);
    assert!(!cell(&grid, "google", 11).is_hidden);
    assert!(cell(&grid, "google", 9).data.is_none());
}

#[test]
fn test_place_wraps_past_december() {
    let mut grid = GridState::from_config(sample_config());
    grid.place(&RowKey::from("google"), 12, "Year end", 3);

    assert!(!cell(&grid, "google", 12).is_hidden);
    assert!(cell(&grid, "google", 1).is_hidden);
    assert!(cell(&grid, "google", 2).is_hidden);
    assert!(!cell(&grid, "google", 3).is_hidden);
}

#[test]
fn test_place_duration_beyond_grid_is_clamped() {
    let mut grid = GridState::from_config(sample_config());
    grid.place(&RowKey::from("google"), 6, "All year", 13);

    let primary = cell(&grid, "google", 6);
    assert!(!primary.is_hidden);
    assert_eq!(primary.data.as_ref().unwrap().duration, 12);

    for month in [7, 8, 9, 10, 11, 12, 1, 2, 3, 4, 5] {
        assert!(cell(&grid, "google", month).is_hidden);
    }
    assert_eq!(grid.entries().len(), 3);
}

#[test]
fn test_from_config_overlong_duration_keeps_entry() {
    let mut config = sample_config();
    config.initial_data[0].duration = 255;
    let grid = GridState::from_config(config);

    let meta = cell(&grid, "meta", 6);
    assert!(!meta.is_hidden);
    assert_eq!(meta.data.as_ref().unwrap().duration, 12);
    assert_eq!(grid.entries().len(), 2);
}

#[test]
fn test_place_replaces_own_previous_span() {
    let mut grid = GridState::from_config(sample_config());
    let google = RowKey::from("google");

    grid.place(&google, 8, "Long", 4);
    grid.place(&google, 8, "Short", 1);

    for month in [9, 10, 11] {
        assert!(!cell(&grid, "google", month).is_hidden);
    }
    assert_eq!(cell(&grid, "google", 8).data.as_ref().unwrap().duration, 1);
}

#[test]
fn test_place_same_span_updates_value() {
    let mut grid = GridState::from_config(sample_config());
    let google = RowKey::from("google");

    grid.place(&google, 8, "First", 3);
    grid.place(&google, 8, "Second", 3);

    assert_eq!(cell(&grid, "google", 8).data.as_ref().unwrap().value, "Second");
    assert!(cell(&grid, "google", 9).is_hidden);
    assert!(cell(&grid, "google", 10).is_hidden);
}

#[test]
fn test_place_unknown_row_is_ignored() {
    let mut grid = GridState::from_config(sample_config());
    let before = sorted_entries(&grid);

    grid.place(&RowKey::from("missing"), 6, "Ghost", 2);

    assert_eq!(sorted_entries(&grid), before);
    assert!(grid.cell(&RowKey::from("missing"), 6).is_none());
}

#[test]
fn test_place_unknown_month_is_ignored() {
    let mut grid = GridState::from_config(sample_config());
    let before = sorted_entries(&grid);

    grid.place(&RowKey::from("google"), 0, "Ghost", 1);
    grid.place(&RowKey::from("google"), 13, "Ghost", 1);

    assert_eq!(sorted_entries(&grid), before);
}

#[test]
fn test_clear_unhides_covered_cells() {
    let mut grid = GridState::from_config(sample_config());
    grid.clear(&RowKey::from("tiktok"), 7, 3);

    assert!(cell(&grid, "tiktok", 7).data.is_none());
    assert!(!cell(&grid, "tiktok", 8).is_hidden);
    assert!(!cell(&grid, "tiktok", 9).is_hidden);
}

#[test]
fn test_delete_entry_unhides_span() {
    let mut grid = GridState::from_config(sample_config());

    assert!(grid.delete_entry(&RowKey::from("meta"), 6));
    assert!(cell(&grid, "meta", 6).data.is_none());
    assert!(!cell(&grid, "meta", 7).is_hidden);

    assert!(!grid.delete_entry(&RowKey::from("meta"), 6));
}

#[test]
fn test_entries_skips_blank_values() {
    let mut grid = GridState::from_config(sample_config());
    grid.place(&RowKey::from("google"), 10, "", 1);

    let entries = grid.entries();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| !e.value.is_empty()));
}

#[test]
fn test_entries_round_trip_through_config() {
    let grid = GridState::from_config(sample_config());
    let rebuilt = GridState::from_config(grid.to_config());

    assert_eq!(sorted_entries(&grid), sorted_entries(&rebuilt));
    assert_eq!(grid.start_month(), rebuilt.start_month());
    assert_eq!(grid.row_headers(), rebuilt.row_headers());
}

#[test]
fn test_column_index_follows_header_order() {
    let grid = GridState::from_config(sample_config());

    assert_eq!(grid.column_index(6), Some(1));
    assert_eq!(grid.column_index(12), Some(7));
    assert_eq!(grid.column_index(5), Some(12));
    assert_eq!(grid.column_index(13), None);
}

#[test]
fn test_clamped_duration_limits_span_to_grid_edge() {
    let grid = GridState::from_config(sample_config());

    assert_eq!(grid.clamped_duration(6, 40), 12);
    assert_eq!(grid.clamped_duration(4, 5), 2);
    assert_eq!(grid.clamped_duration(5, 3), 1);
    assert_eq!(grid.clamped_duration(6, 0), 1);
    assert_eq!(grid.clamped_duration(6, -7), 1);
    assert_eq!(grid.clamped_duration(13, 5), 1);
}

#[test]
fn test_replace_config_discards_transient_state() {
    let mut grid = GridState::from_config(sample_config());

    assert!(grid.click_cell(&RowKey::from("google"), 6));
    grid.replace_config(sample_config());
    assert!(grid.active_cell().is_none());

    assert!(grid.begin_resize(&RowKey::from("meta"), 6, 100.0, 80.0));
    grid.replace_config(sample_config());
    assert!(!grid.is_resizing());
}

#[test]
fn test_to_config_preserves_layout() {
    let grid = GridState::from_config(sample_config());
    let config = grid.to_config();

    assert_eq!(config.sticky_column_header, "Tactic");
    assert_eq!(config.start_month, 6);
    assert_eq!(config.row_headers, sample_config().row_headers);
}
