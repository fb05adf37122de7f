//! Advisory notes for parameters outside their usual domain. Nothing here
//! alters the inputs or stops the estimate from being computed.

use super::params::{InputParameters, ParamField};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum NoteSeverity {
    Info,
    Warning,
    /// The related figure cannot be displayed.
    Blocking,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewNote {
    pub field: ParamField,
    pub severity: NoteSeverity,
    pub message: String,
}

impl ReviewNote {
    fn new(field: ParamField, severity: NoteSeverity, message: impl Into<String>) -> Self {
        Self {
            field,
            severity,
            message: message.into(),
        }
    }
}

/// Notes are returned most severe first, then in form order.
pub fn review(params: &InputParameters) -> Vec<ReviewNote> {
    let mut notes = Vec::new();

    for field in ParamField::ALL {
        let value = params.get(field);
        if let Some(note) = review_field(field, value) {
            notes.push(note);
        }
    }

    notes.sort_by(|a, b| b.severity.cmp(&a.severity));
    notes
}

fn review_field(field: ParamField, value: f64) -> Option<ReviewNote> {
    match field {
        ParamField::Sqft if value <= 0.0 => Some(ReviewNote::new(
            field,
            NoteSeverity::Blocking,
            "Square footage must be above zero to compute cost per square foot.",
        )),
        ParamField::BaselineCost if value <= 0.0 => Some(ReviewNote::new(
            field,
            NoteSeverity::Warning,
            "Baseline cost per square foot should be above zero.",
        )),
        ParamField::Bedrooms | ParamField::Bathrooms if value < 0.0 => Some(ReviewNote::new(
            field,
            NoteSeverity::Warning,
            format!("{} cannot be negative.", field.label()),
        )),
        _ if value < 0.0 && (field.is_flat_cost() || field.is_multiplier()) => {
            Some(ReviewNote::new(
                field,
                NoteSeverity::Warning,
                format!("{} is negative and will reduce the estimate.", field.label()),
            ))
        }
        ParamField::Contingency if value < 0.0 => Some(ReviewNote::new(
            field,
            NoteSeverity::Warning,
            "A negative contingency reduces the estimate instead of buffering risk.",
        )),
        _ => out_of_typical_range(field, value),
    }
}

fn out_of_typical_range(field: ParamField, value: f64) -> Option<ReviewNote> {
    let (low, high) = field.typical_range();
    let high = high?;
    if value >= low && value <= high {
        return None;
    }

    Some(ReviewNote::new(
        field,
        NoteSeverity::Info,
        format!(
            "{} of {} is outside the usual {}–{} range.",
            field.label(),
            value,
            low,
            high
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_need_no_review() {
        assert!(review(&InputParameters::default()).is_empty());
    }

    #[test]
    fn zero_sqft_is_blocking() {
        let notes = review(&InputParameters::default().with(ParamField::Sqft, 0.0));
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].field, ParamField::Sqft);
        assert_eq!(notes[0].severity, NoteSeverity::Blocking);
    }

    #[test]
    fn negative_costs_and_contingency_warn() {
        let params = InputParameters::default()
            .with(ParamField::BankFees, -10.0)
            .with(ParamField::LaborMultiplier, -1.0)
            .with(ParamField::Contingency, -0.05);
        let notes = review(&params);
        let fields: Vec<_> = notes.iter().map(|note| note.field).collect();
        assert_eq!(
            fields,
            vec![
                ParamField::LaborMultiplier,
                ParamField::BankFees,
                ParamField::Contingency
            ]
        );
        assert!(notes
            .iter()
            .all(|note| note.severity == NoteSeverity::Warning));
    }

    #[test]
    fn typical_ranges_are_inclusive() {
        let params = InputParameters::default()
            .with(ParamField::QualityLevel, 1.4)
            .with(ParamField::LandGrade, 0.7)
            .with(ParamField::Contingency, 0.20);
        assert!(review(&params).is_empty());
    }

    #[test]
    fn out_of_range_values_are_informational_and_sorted_last() {
        let params = InputParameters::default()
            .with(ParamField::QualityLevel, 1.6)
            .with(ParamField::Sqft, 0.0);
        let notes = review(&params);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].severity, NoteSeverity::Blocking);
        assert_eq!(notes[1].field, ParamField::QualityLevel);
        assert_eq!(notes[1].severity, NoteSeverity::Info);
        assert!(notes[1].message.contains("1.6"));
    }
}
