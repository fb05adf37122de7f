#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::util::{
    logging::init_logging,
    persistence::{load_settings, settings_path},
    version::{version_label, APP_NAME},
};

fn main() {
    // WebKit's DMABUF renderer opts into explicit sync; disable it unless the user overrides.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let loaded = load_settings();
    let settings = match &loaded {
        Ok(Some(settings)) => settings.clone(),
        _ => Default::default(),
    };
    init_logging(settings.log_filter.as_deref());

    match loaded {
        Ok(Some(_)) => tracing::info!(path = ?settings_path(), "loaded settings"),
        Ok(None) => tracing::debug!("no settings file, using defaults"),
        Err(err) => tracing::warn!("ignoring settings file: {err}"),
    }
    tracing::info!("starting {APP_NAME} {}", version_label());

    let builder = LaunchBuilder::new().with_context(settings);

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
            )
        };
        builder.with_cfg(config)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.launch(app::App);
}
