use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // WASM builds always run on the built-in configuration.
    let config = use_hook(ui::load_config);

    rsx! {
        document::Title { "AlumniConnect" }
        ui::LandingProvider {
            config: config,
            ui::views::LandingView {}
        }
    }
}
