use dioxus::prelude::*;
use std::path::PathBuf;

use crate::io::plan_io;
use crate::state::grid_state::GridState;
use crate::state::i18n::Language;
use crate::ui::grid::Grid;
use crate::ui::toolbar::Toolbar;

const STYLES: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    let grid = use_signal(GridState::new);
    let language = use_signal(Language::default);
    let file_path = use_signal::<Option<PathBuf>>(|| None);
    let error_message = use_signal::<Option<String>>(|| None);
    let save_success = use_signal(|| false);
    let cell_width = use_signal::<Option<f64>>(|| None);

    use_effect({
        let mut grid = grid;
        let mut file_path = file_path;
        let mut error_message = error_message;
        move || {
            if let Ok(path) = std::env::var("PLANBOARD_OPEN") {
                let path = PathBuf::from(path);
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
    });

    rsx! {
        document::Stylesheet { href: STYLES }
        div {
            class: "app",
            // Drag tracking lives on the window-sized root so a resize keeps
            // following the pointer after it leaves the grid.
            onmousemove: move |evt| {
                let resizing = grid.read().is_resizing();
                if resizing {
                    let pointer_x = evt.client_coordinates().x;
                    let mut grid = grid;
                    grid.with_mut(|state| {
                        state.resize_to(pointer_x);
                    });
                }
            },
            onmouseup: move |_| {
                let resizing = grid.read().is_resizing();
                if resizing {
                    let mut grid = grid;
                    grid.with_mut(|state| {
                        state.end_resize();
                    });
                }
            },
            Toolbar { grid, language, file_path, error_message, save_success }
            Grid { grid, language, cell_width }
        }
    }
}
