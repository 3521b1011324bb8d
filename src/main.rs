use makertoo_landing::config::LandingConfig;
use makertoo_landing::pages::landing::{Landing, LandingProps};
use makertoo_landing::utils::logging;

fn main() {
    console_error_panic_hook::set_once();

    let config = match LandingConfig::load() {
        Ok(config) => config,
        Err(err) => {
            gloo_console::error!(format!("Invalid landing config, using defaults: {}", err));
            LandingConfig::default()
        }
    };
    logging::init(&config.log_filter);
    tracing::info!(
        type_ms = config.typing.type_interval_ms,
        delete_ms = config.typing.delete_interval_ms,
        hold_ms = config.typing.hold_ms,
        close_ms = config.popup.close_animation_ms,
        "mounting landing page"
    );

    yew::Renderer::<Landing>::with_props(LandingProps { config }).render();
}
