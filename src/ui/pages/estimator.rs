use dioxus::prelude::*;

use crate::{
    domain::{
        format::{format_dollars, format_per_sqft, UNDEFINED},
        AppState, ParamField, ParamGroup,
    },
    ui::{
        components::{
            breakdown_table::{BreakdownRow, BreakdownTable},
            kpi_card::KpiCard,
            param_input::ParamInput,
            recommendation_badge::RecommendationBadge,
            review_notes::ReviewNotes,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme::{self, Tone},
    },
};

#[component]
pub fn EstimatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let params = state.with(|st| *st.estimator.params());
    let result = state.with(|st| *st.estimator.result());
    let notes = state.with(|st| st.estimator.notes());

    let tone = Tone::for_result(&result);
    let updc_display = format_dollars(result.updc);
    let base_display = format_dollars(result.base_total);
    let per_sqft_display = result
        .defined_cost_per_sqft()
        .map_or_else(|| UNDEFINED.to_string(), format_per_sqft);
    let rows: Vec<BreakdownRow> = result
        .breakdown(params.land_price)
        .iter()
        .map(BreakdownRow::from)
        .collect();

    let on_edit = {
        let mut state = state;
        move |(field, raw): (ParamField, String)| {
            state.with_mut(|st| st.estimator.apply_edit(field, &raw));
        }
    };

    let on_reset = {
        let mut state = state;
        move |_| {
            tracing::info!("reset estimator to starting values");
            state.with_mut(|st| st.reset_estimator());
            push_toast(toasts, ToastKind::Info, "Inputs reset to starting values.");
        }
    };

    rsx! {
        div { class: "estimator-grid",
            section {
                class: "panel form-panel",
                div { class: "panel-header",
                    h2 { class: "panel-title", "🏠 Input Parameters" }
                    button { class: "button-secondary", onclick: on_reset, "Reset to starting values" }
                }
                for group in ParamGroup::ALL {
                    div {
                        key: "{group.title()}",
                        class: "field-group",
                        h3 { class: "section-title", "{group.title()}" }
                        div { class: "field-grid",
                            for field in group.fields() {
                                ParamInput {
                                    key: "{field.key()}",
                                    field,
                                    value: params.get(field),
                                    on_edit,
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "panel results-panel",
                h2 { class: "panel-title", "📈 Results" }
                KpiCard {
                    title: "Total UPDC".to_string(),
                    value: updc_display.clone(),
                    value_class: theme::kpi_value_class(Tone::Neutral),
                    description: Some(format!("Base build cost {base_display} before multipliers")),
                }
                KpiCard {
                    title: "Cost per Sq Ft".to_string(),
                    value: per_sqft_display,
                    value_class: theme::kpi_value_class(tone),
                    description: Some(format!("{} sq ft livable area", params.sqft)),
                }
                BreakdownTable { rows, total: updc_display }
                RecommendationBadge { result }
                ReviewNotes { notes }
            }
        }
    }
}
