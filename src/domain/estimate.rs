//! The cost model. Everything here is pure arithmetic over an
//! [`InputParameters`] snapshot; nothing is validated, clamped or rounded.

use super::params::InputParameters;

/// Cost per square foot strictly below this is economical.
pub const ECONOMICAL_CEILING: f64 = 300.0;
/// Cost per square foot strictly below this (and at or above
/// [`ECONOMICAL_CEILING`]) is worth negotiating.
pub const NEGOTIATE_CEILING: f64 = 400.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimateResult {
    pub base_total: f64,
    pub construction_cost: f64,
    pub soft_costs: f64,
    pub risk_cost: f64,
    pub updc: f64,
    /// Raw `updc / sqft`. Non-finite when `sqft` is zero and meaningless when
    /// it is negative; see [`EstimateResult::defined_cost_per_sqft`].
    pub cost_per_sqft: f64,
    pub recommendation: Recommendation,
    sqft: f64,
}

pub fn compute(params: &InputParameters) -> EstimateResult {
    let base_total = params.sqft * params.baseline_cost;
    let construction_cost = base_total
        * params.quality_level
        * params.region_multiplier
        * params.material_multiplier
        * params.labor_multiplier
        * params.land_grade
        + params.subcontractor_cost;
    let soft_costs = params.contractor_fee
        + params.inspection_cost
        + params.site_prep_cost
        + params.bank_fees
        + params.loan_interest;
    let risk_cost = params.contingency * (construction_cost + soft_costs);
    let updc = params.land_price + construction_cost + soft_costs + risk_cost;
    let cost_per_sqft = updc / params.sqft;

    EstimateResult {
        base_total,
        construction_cost,
        soft_costs,
        risk_cost,
        updc,
        cost_per_sqft,
        recommendation: Recommendation::classify(cost_per_sqft),
        sqft: params.sqft,
    }
}

impl EstimateResult {
    /// Cost per square foot only means something for a positive living area.
    pub fn has_defined_cost_per_sqft(&self) -> bool {
        self.sqft > 0.0 && self.cost_per_sqft.is_finite()
    }

    pub fn defined_cost_per_sqft(&self) -> Option<f64> {
        self.has_defined_cost_per_sqft().then_some(self.cost_per_sqft)
    }

    pub fn breakdown(&self, land_price: f64) -> [BreakdownLine; 4] {
        let share = |amount: f64| {
            if self.updc == 0.0 || !self.updc.is_finite() {
                None
            } else {
                Some(amount / self.updc)
            }
        };

        [
            BreakdownLine {
                label: "Land Price",
                amount: land_price,
                share: share(land_price),
            },
            BreakdownLine {
                label: "Construction",
                amount: self.construction_cost,
                share: share(self.construction_cost),
            },
            BreakdownLine {
                label: "Soft Costs",
                amount: self.soft_costs,
                share: share(self.soft_costs),
            },
            BreakdownLine {
                label: "Contingency",
                amount: self.risk_cost,
                share: share(self.risk_cost),
            },
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownLine {
    pub label: &'static str,
    pub amount: f64,
    /// Fraction of the UPDC total, absent when the total is zero or undefined.
    pub share: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recommendation {
    Economical,
    Negotiate,
    HighCost,
}

impl Recommendation {
    /// NaN falls through to `HighCost`, same as an ordered `<` chain would.
    pub fn classify(cost_per_sqft: f64) -> Self {
        if cost_per_sqft < ECONOMICAL_CEILING {
            Recommendation::Economical
        } else if cost_per_sqft < NEGOTIATE_CEILING {
            Recommendation::Negotiate
        } else {
            Recommendation::HighCost
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Economical => "Economical — good value",
            Recommendation::Negotiate => "Consider negotiating land price",
            Recommendation::HighCost => "High cost — review parameters",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Recommendation::Economical => "✓",
            Recommendation::Negotiate => "⚠",
            Recommendation::HighCost => "✗",
        }
    }
}
