use serde::{Deserialize, Serialize};

/// Everything the estimate is computed from. Bedrooms and bathrooms are
/// descriptive and never enter the formula.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputParameters {
    pub sqft: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub quality_level: f64,
    pub region_multiplier: f64,
    pub land_price: f64,
    pub land_grade: f64,
    pub inspection_cost: f64,
    pub site_prep_cost: f64,
    pub material_multiplier: f64,
    pub labor_multiplier: f64,
    pub contractor_fee: f64,
    pub subcontractor_cost: f64,
    pub bank_fees: f64,
    pub loan_interest: f64,
    pub contingency: f64,
    pub baseline_cost: f64,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            sqft: 2000.0,
            bedrooms: 3.0,
            bathrooms: 2.0,
            quality_level: 1.0,
            region_multiplier: 1.0,
            land_price: 100_000.0,
            land_grade: 1.0,
            inspection_cost: 5_000.0,
            site_prep_cost: 15_000.0,
            material_multiplier: 1.0,
            labor_multiplier: 1.0,
            contractor_fee: 15_000.0,
            subcontractor_cost: 10_000.0,
            bank_fees: 5_000.0,
            loan_interest: 8_000.0,
            contingency: 0.15,
            baseline_cost: 200.0,
        }
    }
}

impl InputParameters {
    pub fn get(&self, field: ParamField) -> f64 {
        match field {
            ParamField::Sqft => self.sqft,
            ParamField::Bedrooms => self.bedrooms,
            ParamField::Bathrooms => self.bathrooms,
            ParamField::QualityLevel => self.quality_level,
            ParamField::BaselineCost => self.baseline_cost,
            ParamField::RegionMultiplier => self.region_multiplier,
            ParamField::LandPrice => self.land_price,
            ParamField::LandGrade => self.land_grade,
            ParamField::InspectionCost => self.inspection_cost,
            ParamField::SitePrepCost => self.site_prep_cost,
            ParamField::MaterialMultiplier => self.material_multiplier,
            ParamField::LaborMultiplier => self.labor_multiplier,
            ParamField::ContractorFee => self.contractor_fee,
            ParamField::SubcontractorCost => self.subcontractor_cost,
            ParamField::BankFees => self.bank_fees,
            ParamField::LoanInterest => self.loan_interest,
            ParamField::Contingency => self.contingency,
        }
    }

    pub fn set(&mut self, field: ParamField, value: f64) {
        let slot = match field {
            ParamField::Sqft => &mut self.sqft,
            ParamField::Bedrooms => &mut self.bedrooms,
            ParamField::Bathrooms => &mut self.bathrooms,
            ParamField::QualityLevel => &mut self.quality_level,
            ParamField::BaselineCost => &mut self.baseline_cost,
            ParamField::RegionMultiplier => &mut self.region_multiplier,
            ParamField::LandPrice => &mut self.land_price,
            ParamField::LandGrade => &mut self.land_grade,
            ParamField::InspectionCost => &mut self.inspection_cost,
            ParamField::SitePrepCost => &mut self.site_prep_cost,
            ParamField::MaterialMultiplier => &mut self.material_multiplier,
            ParamField::LaborMultiplier => &mut self.labor_multiplier,
            ParamField::ContractorFee => &mut self.contractor_fee,
            ParamField::SubcontractorCost => &mut self.subcontractor_cost,
            ParamField::BankFees => &mut self.bank_fees,
            ParamField::LoanInterest => &mut self.loan_interest,
            ParamField::Contingency => &mut self.contingency,
        };
        *slot = value;
    }

    /// Returns a copy with one field replaced.
    pub fn with(mut self, field: ParamField, value: f64) -> Self {
        self.set(field, value);
        self
    }
}

/// Form sections, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamGroup {
    PropertyAndHome,
    Land,
    MarketAndTime,
    ContractorAndFinancing,
}

impl ParamGroup {
    pub const ALL: [ParamGroup; 4] = [
        ParamGroup::PropertyAndHome,
        ParamGroup::Land,
        ParamGroup::MarketAndTime,
        ParamGroup::ContractorAndFinancing,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ParamGroup::PropertyAndHome => "Property & Home",
            ParamGroup::Land => "Land",
            ParamGroup::MarketAndTime => "Market & Time",
            ParamGroup::ContractorAndFinancing => "Contractor & Financing",
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = ParamField> + '_ {
        ParamField::ALL
            .into_iter()
            .filter(move |field| field.group() == *self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamField {
    Sqft,
    Bedrooms,
    Bathrooms,
    QualityLevel,
    BaselineCost,
    RegionMultiplier,
    LandPrice,
    LandGrade,
    InspectionCost,
    SitePrepCost,
    MaterialMultiplier,
    LaborMultiplier,
    ContractorFee,
    SubcontractorCost,
    BankFees,
    LoanInterest,
    Contingency,
}

impl ParamField {
    /// Every field in form order.
    pub const ALL: [ParamField; 17] = [
        ParamField::Sqft,
        ParamField::Bedrooms,
        ParamField::Bathrooms,
        ParamField::QualityLevel,
        ParamField::BaselineCost,
        ParamField::RegionMultiplier,
        ParamField::LandPrice,
        ParamField::LandGrade,
        ParamField::InspectionCost,
        ParamField::SitePrepCost,
        ParamField::MaterialMultiplier,
        ParamField::LaborMultiplier,
        ParamField::ContractorFee,
        ParamField::SubcontractorCost,
        ParamField::BankFees,
        ParamField::LoanInterest,
        ParamField::Contingency,
    ];

    /// Matches the serialized (camelCase) field name.
    pub fn key(&self) -> &'static str {
        match self {
            ParamField::Sqft => "sqft",
            ParamField::Bedrooms => "bedrooms",
            ParamField::Bathrooms => "bathrooms",
            ParamField::QualityLevel => "qualityLevel",
            ParamField::BaselineCost => "baselineCost",
            ParamField::RegionMultiplier => "regionMultiplier",
            ParamField::LandPrice => "landPrice",
            ParamField::LandGrade => "landGrade",
            ParamField::InspectionCost => "inspectionCost",
            ParamField::SitePrepCost => "sitePrepCost",
            ParamField::MaterialMultiplier => "materialMultiplier",
            ParamField::LaborMultiplier => "laborMultiplier",
            ParamField::ContractorFee => "contractorFee",
            ParamField::SubcontractorCost => "subcontractorCost",
            ParamField::BankFees => "bankFees",
            ParamField::LoanInterest => "loanInterest",
            ParamField::Contingency => "contingency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ParamField::Sqft => "Square Footage",
            ParamField::Bedrooms => "Bedrooms",
            ParamField::Bathrooms => "Bathrooms",
            ParamField::QualityLevel => "Quality Level (0.8-1.4)",
            ParamField::BaselineCost => "Baseline Cost/sqft ($)",
            ParamField::RegionMultiplier => "Region Multiplier",
            ParamField::LandPrice => "Land Price ($)",
            ParamField::LandGrade => "Land Grade (0.7-1.6)",
            ParamField::InspectionCost => "Inspection Cost ($)",
            ParamField::SitePrepCost => "Site Prep Cost ($)",
            ParamField::MaterialMultiplier => "Material Multiplier",
            ParamField::LaborMultiplier => "Labor Multiplier",
            ParamField::ContractorFee => "Contractor Fee ($)",
            ParamField::SubcontractorCost => "Subcontractor Cost ($)",
            ParamField::BankFees => "Bank Fees ($)",
            ParamField::LoanInterest => "Loan Interest ($)",
            ParamField::Contingency => "Contingency (0.1-0.2)",
        }
    }

    /// Increment used by the number input spinner.
    pub fn step(&self) -> f64 {
        match self {
            ParamField::Bathrooms => 0.5,
            ParamField::QualityLevel
            | ParamField::RegionMultiplier
            | ParamField::LandGrade
            | ParamField::MaterialMultiplier
            | ParamField::LaborMultiplier => 0.1,
            ParamField::Contingency => 0.05,
            _ => 1.0,
        }
    }

    pub fn group(&self) -> ParamGroup {
        match self {
            ParamField::Sqft
            | ParamField::Bedrooms
            | ParamField::Bathrooms
            | ParamField::QualityLevel
            | ParamField::BaselineCost
            | ParamField::RegionMultiplier => ParamGroup::PropertyAndHome,
            ParamField::LandPrice
            | ParamField::LandGrade
            | ParamField::InspectionCost
            | ParamField::SitePrepCost => ParamGroup::Land,
            ParamField::MaterialMultiplier | ParamField::LaborMultiplier => {
                ParamGroup::MarketAndTime
            }
            ParamField::ContractorFee
            | ParamField::SubcontractorCost
            | ParamField::BankFees
            | ParamField::LoanInterest
            | ParamField::Contingency => ParamGroup::ContractorAndFinancing,
        }
    }

    /// Inclusive range the value is expected to fall in. `None` for an upper
    /// bound means unbounded.
    pub fn typical_range(&self) -> (f64, Option<f64>) {
        match self {
            ParamField::QualityLevel => (0.8, Some(1.4)),
            ParamField::LandGrade => (0.7, Some(1.6)),
            ParamField::Contingency => (0.10, Some(0.20)),
            _ => (0.0, None),
        }
    }

    /// Multiplicative factors applied to the square-footage base cost.
    pub fn is_multiplier(&self) -> bool {
        matches!(
            self,
            ParamField::QualityLevel
                | ParamField::RegionMultiplier
                | ParamField::MaterialMultiplier
                | ParamField::LaborMultiplier
                | ParamField::LandGrade
        )
    }

    /// Flat dollar amounts.
    pub fn is_flat_cost(&self) -> bool {
        matches!(
            self,
            ParamField::LandPrice
                | ParamField::InspectionCost
                | ParamField::SitePrepCost
                | ParamField::ContractorFee
                | ParamField::SubcontractorCost
                | ParamField::BankFees
                | ParamField::LoanInterest
        )
    }
}

/// Turns raw form text into a number. Text without a numeric prefix becomes 0;
/// trailing garbage after a valid prefix is ignored (`"12abc"` is 12).
pub fn coerce_numeric(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let prefix = &trimmed[..numeric_prefix_len(trimmed)];
    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

fn numeric_prefix_len(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut idx = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        idx += 1;
    }

    let int_start = idx;
    while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
        idx += 1;
    }
    let mut digits = idx - int_start;

    if bytes.get(idx) == Some(&b'.') {
        let frac_start = idx + 1;
        let mut end = frac_start;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if digits > 0 || end > frac_start {
            digits += end - frac_start;
            idx = end;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Only consume an exponent when at least one digit follows it.
    if matches!(bytes.get(idx), Some(b'e') | Some(b'E')) {
        let mut end = idx + 1;
        if matches!(bytes.get(end), Some(b'+') | Some(b'-')) {
            end += 1;
        }
        let exp_start = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end > exp_start {
            idx = end;
        }
    }

    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let params = InputParameters::default();
        assert_eq!(params.sqft, 2000.0);
        assert_eq!(params.bedrooms, 3.0);
        assert_eq!(params.bathrooms, 2.0);
        assert_eq!(params.land_price, 100_000.0);
        assert_eq!(params.contingency, 0.15);
        assert_eq!(params.baseline_cost, 200.0);
        assert_eq!(params.loan_interest, 8_000.0);
    }

    #[test]
    fn set_replaces_only_one_field() {
        let before = InputParameters::default();
        let after = before.with(ParamField::LandGrade, 1.3);
        for field in ParamField::ALL {
            if field == ParamField::LandGrade {
                assert_eq!(after.get(field), 1.3);
            } else {
                assert_eq!(after.get(field), before.get(field), "{field:?} changed");
            }
        }
    }

    #[test]
    fn keys_match_serde_names() {
        let json = serde_json::to_value(InputParameters::default()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), ParamField::ALL.len());
        for field in ParamField::ALL {
            assert_eq!(object[field.key()].as_f64(), Some(InputParameters::default().get(field)));
        }
    }

    #[test]
    fn every_field_belongs_to_exactly_one_group() {
        let total: usize = ParamGroup::ALL.iter().map(|group| group.fields().count()).sum();
        assert_eq!(total, ParamField::ALL.len());
        let market: Vec<_> = ParamGroup::MarketAndTime.fields().collect();
        assert_eq!(
            market,
            vec![ParamField::MaterialMultiplier, ParamField::LaborMultiplier]
        );
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let params: InputParameters =
            serde_json::from_str(r#"{ "sqft": 1500, "regionMultiplier": 1.25 }"#).unwrap();
        assert_eq!(params.sqft, 1500.0);
        assert_eq!(params.region_multiplier, 1.25);
        assert_eq!(params.baseline_cost, 200.0);
    }

    #[test]
    fn coerces_plain_numbers() {
        assert_eq!(coerce_numeric("2000"), 2000.0);
        assert_eq!(coerce_numeric("  0.15 "), 0.15);
        assert_eq!(coerce_numeric("-12.5"), -12.5);
        assert_eq!(coerce_numeric(".5"), 0.5);
        assert_eq!(coerce_numeric("7."), 7.0);
        assert_eq!(coerce_numeric("1e3"), 1000.0);
    }

    #[test]
    fn coerces_leading_numeric_prefix() {
        assert_eq!(coerce_numeric("12abc"), 12.0);
        assert_eq!(coerce_numeric("3.5.1"), 3.5);
        assert_eq!(coerce_numeric("4e"), 4.0);
        assert_eq!(coerce_numeric("4e+x"), 4.0);
    }

    #[test]
    fn non_numeric_text_becomes_zero() {
        assert_eq!(coerce_numeric(""), 0.0);
        assert_eq!(coerce_numeric("abc"), 0.0);
        assert_eq!(coerce_numeric("-"), 0.0);
        assert_eq!(coerce_numeric("."), 0.0);
        assert_eq!(coerce_numeric("$100"), 0.0);
        assert_eq!(coerce_numeric("Infinity"), 0.0);
        assert_eq!(coerce_numeric("1e999"), 0.0);
    }
}
