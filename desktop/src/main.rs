#[cfg(feature = "desktop")]
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    #[cfg(feature = "desktop")]
    dioxus::launch(App);

    #[cfg(not(feature = "desktop"))]
    eprintln!("postboard was built without a renderer; rebuild with `--features desktop`");
}

#[cfg(feature = "desktop")]
#[component]
fn App() -> Element {
    ui::App()
}
