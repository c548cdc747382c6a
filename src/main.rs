use dioxus::prelude::*;
use planboard::ui::app::App;

fn main() {
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title("Planboard")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 800.0)),
            ),
        )
        .launch(App);
}
