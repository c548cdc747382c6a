use dioxus::prelude::*;
use std::path::PathBuf;

use crate::io::plan_io;
use crate::state::grid_state::GridState;
use crate::state::i18n::{self, Language};

pub async fn open_file(
    mut grid: Signal<GridState>,
    language: Signal<Language>,
    mut file_path: Signal<Option<PathBuf>>,
    mut error_message: Signal<Option<String>>,
) {
    let task = rfd::AsyncFileDialog::new()
        .add_filter(i18n::tr(*language.read(), "dialog.json_filter"), &["json"])
        .pick_file()
        .await;

    if let Some(handle) = task {
        let path = handle.path().to_path_buf();
        match plan_io::load_plan(&path) {
            Ok(config) => {
                grid.with_mut(|state| {
                    state.replace_config(config);
                });
                file_path.set(Some(path));
                error_message.set(None);
            }
            Err(e) => {
                error_message.set(Some(e.to_string()));
            }
        }
    }
}

pub fn save_file(
    grid: Signal<GridState>,
    file_path: Signal<Option<PathBuf>>,
    mut error_message: Signal<Option<String>>,
) -> bool {
    let path = {
        let read = file_path.read();
        let Some(path) = read.as_ref() else {
            return false;
        };
        path.clone()
    };

    let config = grid.read().to_config();
    if let Err(err) = plan_io::save_plan(&path, &config) {
        error_message.set(Some(err.to_string()));
        return false;
    }

    error_message.set(None);
    true
}
