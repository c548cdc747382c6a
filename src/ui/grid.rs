use dioxus::prelude::{Key, *};

use crate::state::data_model::{Month, RowHeader, RowKey};
use crate::state::grid_state::GridState;
use crate::state::i18n::{self, Language};

/// One `td` worth of a row: hidden cells are folded into the colspan of
/// the entry that covers them and never reach the DOM.
#[derive(Clone, PartialEq)]
struct RenderCell {
    month: Month,
    duration: u8,
    value: Option<String>,
}

#[component]
pub fn Grid(
    grid: Signal<GridState>,
    language: Signal<Language>,
    cell_width: Signal<Option<f64>>,
) -> Element {
    let snapshot = grid.read().clone();
    let current_language = *language.read();

    if snapshot.is_empty() {
        let empty_label = i18n::tr(current_language, "grid.empty");
        return rsx! {
            p { class: "empty-message", id: "empty-message", "{empty_label}" }
        };
    }

    let sticky_header = snapshot.sticky_column_header().to_string();
    let months = snapshot.month_headers().to_vec();
    let rows = snapshot.row_headers().to_vec();

    rsx! {
        div { class: "grid-container", id: "grid-container",
            table {
                thead {
                    tr {
                        th { class: "sticky-col", "{sticky_header}" }
                        for column in &months {
                            th {
                                class: "month-col",
                                id: format!("month-col-{}", column.month),
                                // Month columns share one width; any header can
                                // supply the measurement for resize arithmetic.
                                onmounted: move |evt| {
                                    let mut cell_width = cell_width;
                                    spawn(async move {
                                        if let Ok(rect) = evt.data().get_client_rect().await {
                                            cell_width.set(Some(rect.size.width));
                                        }
                                    });
                                },
                                "{i18n::month_label(current_language, column.month)}"
                            }
                        }
                    }
                }
                tbody {
                    for row in rows {
                        GridRow {
                            row: row.clone(),
                            cells: render_cells(&snapshot, &row.id),
                            grid,
                            language,
                            cell_width,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GridRow(
    row: RowHeader,
    cells: Vec<RenderCell>,
    grid: Signal<GridState>,
    language: Signal<Language>,
    cell_width: Signal<Option<f64>>,
) -> Element {
    let row_slug = sanitize_id(&row.id.to_string());
    let delete_label = i18n::tr(*language.read(), "grid.delete_entry");

    rsx! {
        tr { id: format!("row-{row_slug}"),
            td { class: "sticky-col", "{row.label}" }
            for cell in &cells {
                if grid.read().is_cell_active(&row.id, cell.month) {
                    td {
                        class: "data-col editing-cell",
                        colspan: "{cell.duration}",
                        input {
                            class: "cell-input",
                            id: format!("cell-input-{row_slug}-{}", cell.month),
                            value: "{grid.read().draft()}",
                            autofocus: true,
                            oninput: move |evt| {
                                let value = evt.value();
                                let mut grid = grid;
                                grid.with_mut(|state| {
                                    state.set_draft(value);
                                });
                            },
                            onblur: move |_| {
                                let mut grid = grid;
                                grid.with_mut(|state| {
                                    state.save_edit();
                                });
                            },
                            onkeydown: move |evt| {
                                let mut grid = grid;
                                match evt.key() {
                                    Key::Enter => {
                                        grid.with_mut(|state| {
                                            state.save_edit();
                                        });
                                    }
                                    Key::Escape => {
                                        grid.with_mut(|state| {
                                            state.cancel_edit();
                                        });
                                    }
                                    _ => {}
                                }
                            }
                        }
                    }
                } else {
                    td {
                        class: entry_class(cell),
                        colspan: "{cell.duration}",
                        id: format!("cell-{row_slug}-{}", cell.month),
                        onclick: {
                            let row_id = row.id.clone();
                            let month = cell.month;
                            let mut grid = grid;
                            move |_| {
                                grid.with_mut(|state| {
                                    state.click_cell(&row_id, month);
                                });
                            }
                        },
                        if let Some(value) = &cell.value {
                            span { class: "entry-value", "{value}" }
                            button {
                                class: "entry-delete",
                                id: format!("delete-{row_slug}-{}", cell.month),
                                title: "{delete_label}",
                                onclick: {
                                    let row_id = row.id.clone();
                                    let month = cell.month;
                                    let mut grid = grid;
                                    move |evt: Event<MouseData>| {
                                        evt.stop_propagation();
                                        grid.with_mut(|state| {
                                            state.delete_entry(&row_id, month);
                                        });
                                    }
                                },
                                "\u{2715}"
                            }
                            div {
                                class: "resize-handle",
                                id: format!("resize-{row_slug}-{}", cell.month),
                                onclick: move |evt: Event<MouseData>| {
                                    evt.stop_propagation();
                                },
                                onmousedown: {
                                    let row_id = row.id.clone();
                                    let month = cell.month;
                                    let mut grid = grid;
                                    move |evt: Event<MouseData>| {
                                        evt.stop_propagation();
                                        evt.prevent_default();
                                        let Some(width) = *cell_width.read() else {
                                            return;
                                        };
                                        let start_x = evt.client_coordinates().x;
                                        grid.with_mut(|state| {
                                            state.begin_resize(&row_id, month, start_x, width);
                                        });
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_cells(snapshot: &GridState, row_id: &RowKey) -> Vec<RenderCell> {
    snapshot
        .month_headers()
        .iter()
        .filter_map(|column| {
            let cell = snapshot.cell(row_id, column.month)?;
            if cell.is_hidden {
                return None;
            }
            Some(RenderCell {
                month: column.month,
                duration: cell.data.as_ref().map(|entry| entry.duration).unwrap_or(1),
                value: cell.data.as_ref().map(|entry| entry.value.clone()),
            })
        })
        .collect()
}

fn entry_class(cell: &RenderCell) -> &'static str {
    if cell.value.is_some() {
        "data-col entry-cell"
    } else {
        "data-col"
    }
}

fn sanitize_id(value: &str) -> String {
    value
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect()
}
