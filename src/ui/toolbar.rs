use dioxus::prelude::*;
use std::path::PathBuf;

use crate::state::grid_state::GridState;
use crate::state::i18n::{self, Language};
use crate::ui::actions;

#[component]
pub fn Toolbar(
    grid: Signal<GridState>,
    language: Signal<Language>,
    file_path: Signal<Option<PathBuf>>,
    error_message: Signal<Option<String>>,
    save_success: Signal<bool>,
) -> Element {
    let current_language = *language.read();

    let open_label = i18n::tr(current_language, "toolbar.open");
    let save_label = i18n::tr(current_language, "toolbar.save");
    let save_success_label = i18n::tr(current_language, "toolbar.save_success");

    rsx! {
        div { class: "toolbar",
            div { class: "toolbar-group",
                select {
                    class: "toolbar-select toolbar-select-sm",
                    id: "select-language",
                    value: "{current_language.code()}",
                    onchange: move |evt| {
                        if let Some(next_language) = Language::from_code(&evt.value()) {
                            language.set(next_language);
                        }
                    },
                    for lang in Language::all().iter().copied() {
                        option { value: "{lang.code()}", "{i18n::tr(current_language, lang.label_key())}" }
                    }
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-open",
                    onclick: move |_| {
                        spawn(async move {
                            actions::open_file(grid, language, file_path, error_message).await;
                        });
                    },
                    "\u{1F4C2} {open_label}"
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-save",
                    disabled: file_path.read().is_none(),
                    onclick: move |_| {
                        let success = actions::save_file(grid, file_path, error_message);
                        if success {
                            save_success.set(true);
                            spawn(async move {
                                tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                                save_success.set(false);
                            });
                        }
                    },
                    "\u{1F4BE} {save_label}"
                }
                if *save_success.read() {
                    span { class: "save-success", "\u{2714} {save_success_label}" }
                }
            }

            div { class: "toolbar-info",
                if let Some(path) = file_path.read().as_ref() {
                    span { class: "file-path", "{path.display()}" }
                }
                if let Some(err) = error_message.read().as_ref() {
                    span { class: "error-message", id: "error-message", "{err}" }
                }
            }
        }
    }
}
