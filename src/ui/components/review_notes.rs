use dioxus::prelude::*;

use crate::domain::ReviewNote;
use crate::ui::theme;

#[component]
pub fn ReviewNotes(notes: Vec<ReviewNote>) -> Element {
    if notes.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "review",
            h3 { class: "section-title", "Input Review" }
            ul {
                class: "review-list",
                for note in notes {
                    li {
                        key: "{note.field.key()}",
                        title: "{note.field.label()}",
                        class: "{theme::note_class(note.severity)}",
                        span { class: "note-icon", "{theme::note_icon(note.severity)}" }
                        span { "{note.message}" }
                    }
                }
            }
        }
    }
}
