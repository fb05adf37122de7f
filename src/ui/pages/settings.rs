use dioxus::prelude::*;

use crate::{
    domain::{format::format_input, AppState, InputParameters, ParamField},
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::{
        persistence::{save_settings, settings_path, AppSettings},
        version::{version_label, APP_NAME},
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let settings_location = settings_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "unavailable on this platform".to_string());
    let starting = state.with(|st| st.settings.starting_params());
    let customised = state.with(|st| st.settings.starting_params.is_some());
    let differences = changed_fields(&starting);

    let on_save_current = {
        let mut state = state;
        move |_| {
            let current = state.with(|st| *st.estimator.params());
            let next = state.with(|st| AppSettings {
                starting_params: Some(current),
                ..st.settings.clone()
            });
            apply_settings(&mut state, toasts, next, "Saved current inputs as starting values.");
        }
    };

    let on_restore_defaults = {
        let mut state = state;
        move |_| {
            let next = state.with(|st| AppSettings {
                starting_params: None,
                ..st.settings.clone()
            });
            apply_settings(&mut state, toasts, next, "Starting values restored to defaults.");
        }
    };

    rsx! {
        div { class: "settings-stack",
            section {
                class: "panel",
                h2 { class: "panel-title", "Starting Values" }
                p { class: "panel-copy",
                    "Each session starts from these values. Estimates themselves are never saved."
                }
                if customised && !differences.is_empty() {
                    table {
                        class: "breakdown-table",
                        thead {
                            tr {
                                th { "Field" }
                                th { "Default" }
                                th { "Yours" }
                            }
                        }
                        tbody {
                            for (label, default_value, custom_value) in differences {
                                tr {
                                    td { class: "breakdown-label", "{label}" }
                                    td { class: "breakdown-amount", "{default_value}" }
                                    td { class: "breakdown-amount", "{custom_value}" }
                                }
                            }
                        }
                    }
                } else {
                    p { class: "panel-copy muted", "Using the built-in defaults." }
                }
                div { class: "button-row",
                    button { class: "button-primary", onclick: on_save_current, "Use current inputs" }
                    button { class: "button-secondary", onclick: on_restore_defaults, "Restore defaults" }
                }
            }

            section {
                class: "panel",
                h2 { class: "panel-title", "About" }
                p { class: "panel-copy", "{APP_NAME} {version_label()}" }
                p { class: "panel-copy muted", "Settings file: {settings_location}" }
                p { class: "panel-copy muted",
                    "Set RUST_LOG or the logFilter setting to change log verbosity."
                }
            }
        }
    }
}

fn apply_settings(
    state: &mut Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    next: AppSettings,
    success: &str,
) {
    match save_settings(&next) {
        Ok(()) => {
            state.with_mut(|st| st.settings = next);
            push_toast(toasts, ToastKind::Success, success);
        }
        Err(err) => {
            tracing::warn!("failed to save settings: {err}");
            push_toast(toasts, ToastKind::Error, format!("Could not save settings: {err}"));
        }
    }
}

/// Fields whose starting value differs from the documented default, as
/// `(label, default, configured)` display strings.
fn changed_fields(starting: &InputParameters) -> Vec<(&'static str, String, String)> {
    let defaults = InputParameters::default();
    ParamField::ALL
        .into_iter()
        .filter(|field| starting.get(*field) != defaults.get(*field))
        .map(|field| {
            (
                field.label(),
                format_input(defaults.get(field)),
                format_input(starting.get(field)),
            )
        })
        .collect()
}
