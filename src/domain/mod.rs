//! Cost estimation logic lives here.

pub mod app_state;
pub mod estimate;
pub mod format;
pub mod params;
pub mod review;

#[allow(unused_imports)]
pub use app_state::{AppState, EstimatorState};
#[allow(unused_imports)]
pub use estimate::{compute, BreakdownLine, EstimateResult, Recommendation};
#[allow(unused_imports)]
pub use params::{coerce_numeric, InputParameters, ParamField, ParamGroup};
#[allow(unused_imports)]
pub use review::{review, NoteSeverity, ReviewNote};
