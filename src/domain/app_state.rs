use super::{
    estimate::{compute, EstimateResult},
    params::{coerce_numeric, InputParameters, ParamField},
    review::{review, ReviewNote},
};
use crate::util::persistence::AppSettings;

#[derive(Clone, Debug)]
pub struct AppState {
    pub estimator: EstimatorState,
    pub settings: AppSettings,
}

impl AppState {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            estimator: EstimatorState::new(settings.starting_params()),
            settings,
        }
    }

    /// Puts the session back on whatever the settings say a session starts from.
    pub fn reset_estimator(&mut self) {
        self.estimator.replace_all(self.settings.starting_params());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppSettings::default())
    }
}

/// Owns the one mutable parameter set of a session. Every edit goes through
/// here and triggers a full recompute, so `result` is never stale.
#[derive(Clone, Debug, PartialEq)]
pub struct EstimatorState {
    params: InputParameters,
    result: EstimateResult,
}

impl EstimatorState {
    pub fn new(params: InputParameters) -> Self {
        let result = recompute(&params);
        Self { params, result }
    }

    pub fn params(&self) -> &InputParameters {
        &self.params
    }

    pub fn result(&self) -> &EstimateResult {
        &self.result
    }

    pub fn notes(&self) -> Vec<ReviewNote> {
        review(&self.params)
    }

    /// Applies raw form text to one field; text that is not a number counts as 0.
    pub fn apply_edit(&mut self, field: ParamField, raw: &str) {
        self.set_value(field, coerce_numeric(raw));
    }

    pub fn set_value(&mut self, field: ParamField, value: f64) {
        self.params.set(field, value);
        self.result = recompute(&self.params);
    }

    pub fn replace_all(&mut self, params: InputParameters) {
        self.params = params;
        self.result = recompute(&self.params);
    }
}

impl Default for EstimatorState {
    fn default() -> Self {
        Self::new(InputParameters::default())
    }
}

fn recompute(params: &InputParameters) -> EstimateResult {
    let result = compute(params);
    tracing::debug!(
        updc = result.updc,
        cost_per_sqft = result.cost_per_sqft,
        recommendation = ?result.recommendation,
        "recomputed estimate"
    );
    result
}
