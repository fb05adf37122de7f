pub mod breakdown_table;
pub mod kpi_card;
pub mod param_input;
pub mod recommendation_badge;
pub mod review_notes;
pub mod toast;
