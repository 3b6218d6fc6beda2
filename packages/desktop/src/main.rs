use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Reads <config_dir>/alumniconnect/alumni.toml when it exists.
    let config = use_hook(ui::load_config);
    use_hook(|| {
        tracing::info!(
            signup_ms = config.latency.signup_ms,
            login_ms = config.latency.login_ms,
            seed = config.directory.seed.len(),
            "starting AlumniConnect"
        )
    });

    rsx! {
        document::Title { "AlumniConnect" }
        ui::LandingProvider {
            config: config,
            ui::views::LandingView {}
        }
    }
}
