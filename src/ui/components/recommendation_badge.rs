use dioxus::prelude::*;

use crate::domain::EstimateResult;
use crate::ui::theme::{self, Tone};

#[component]
pub fn RecommendationBadge(result: EstimateResult) -> Element {
    let tone = Tone::for_result(&result);
    let (icon, label) = if tone == Tone::Neutral {
        ("…", "Enter a square footage above zero to get a recommendation")
    } else {
        (result.recommendation.icon(), result.recommendation.label())
    };

    rsx! {
        div {
            class: "recommendation",
            h3 { class: "section-title", "Recommendation" }
            div {
                class: "{theme::badge_class(tone)}",
                span { class: "badge-icon", "{icon}" }
                span { "{label}" }
            }
        }
    }
}
