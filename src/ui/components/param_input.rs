use dioxus::prelude::*;

use crate::domain::{format::format_input, ParamField};

/// One numeric form field. A plain text box with a decimal keypad hint, since
/// number inputs report half-typed text like `-` or `1e` as empty. While
/// focused it shows exactly what was typed; on blur it snaps back to the
/// coerced value the estimate actually uses. Arrow keys step by the field's
/// increment.
#[component]
pub fn ParamInput(field: ParamField, value: f64, on_edit: EventHandler<(ParamField, String)>) -> Element {
    let mut draft = use_signal(|| None::<String>);
    let shown = draft().unwrap_or_else(|| format_input(value));

    rsx! {
        div {
            class: "field",
            label { class: "field-label", r#for: "{field.key()}", "{field.label()}" }
            input {
                class: "field-input",
                id: "{field.key()}",
                name: "{field.key()}",
                r#type: "text",
                inputmode: "decimal",
                autocomplete: "off",
                value: "{shown}",
                oninput: move |evt| {
                    let raw = evt.value();
                    draft.set(Some(raw.clone()));
                    on_edit.call((field, raw));
                },
                onkeydown: move |evt| {
                    let direction = match evt.key() {
                        Key::ArrowUp => 1.0,
                        Key::ArrowDown => -1.0,
                        _ => return,
                    };
                    evt.prevent_default();
                    let next = format_input(stepped(value, field.step(), direction));
                    draft.set(Some(next.clone()));
                    on_edit.call((field, next));
                },
                onblur: move |_| draft.set(None),
            }
        }
    }
}

/// Rounded to six decimals so repeated 0.1 steps don't drift into `1.2000000000000002`.
fn stepped(value: f64, step: f64, direction: f64) -> f64 {
    ((value + step * direction) * 1e6).round() / 1e6
}
