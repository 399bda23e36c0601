/// Property-based tests using proptest
/// Tests invariants that should hold for all inputs
use proptest::prelude::*;
use rust_credit_risk_api::classifier::{classify, ProbabilityModel};
use rust_credit_risk_api::encoder::{
    age_to_days_birth, employment_years_to_days_employed, encode, parse_profile,
    CategoricalDomains,
};
use rust_credit_risk_api::errors::AppError;
use rust_credit_risk_api::models::{ClassificationResult, FeatureSchema, FeatureVector, RawFields};
use rust_credit_risk_api::tiers::{tier, RiskTier};

/// Fixed-probability stand-in for the trained model.
struct StubModel {
    probability: f64,
    width: usize,
}

impl ProbabilityModel for StubModel {
    fn n_features(&self) -> usize {
        self.width
    }

    fn predict_proba(&self, features: &[f64]) -> Result<f64, AppError> {
        if features.len() != self.width {
            return Err(AppError::Inference("width mismatch".to_string()));
        }
        Ok(self.probability)
    }
}

fn small_schema() -> FeatureSchema {
    FeatureSchema::new(
        [
            "CNT_CHILDREN",
            "AMT_INCOME_TOTAL",
            "BIRTH(Years)",
            "EMPLOYED(Years)",
            "FLAG_WORK_PHONE",
            "FLAG_PHONE",
            "FLAG_EMAIL",
            "CNT_FAM_MEMBERS",
            "CODE_GENDER_F",
            "CODE_GENDER_M",
            "FLAG_OWN_CAR_N",
            "FLAG_OWN_CAR_Y",
            "FLAG_OWN_REALTY_N",
            "FLAG_OWN_REALTY_Y",
            "NAME_INCOME_TYPE_Pensioner",
            "NAME_INCOME_TYPE_Working",
            "NAME_EDUCATION_TYPE_Higher education",
            "NAME_EDUCATION_TYPE_Secondary / secondary special",
            "NAME_FAMILY_STATUS_Married",
            "NAME_FAMILY_STATUS_Single / not married",
            "NAME_HOUSING_TYPE_House / apartment",
            "NAME_HOUSING_TYPE_With parents",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    )
}

// Property: the decision is 1 exactly when probability reaches the threshold
proptest! {
    #[test]
    fn decision_iff_probability_reaches_threshold(
        probability in 0.0f64..1.0,
        threshold in 0.0f64..=1.0
    ) {
        let schema = small_schema();
        let vector = FeatureVector::zeroed(&schema);
        let model = StubModel { probability, width: schema.len() };

        let result = classify(&model, &vector, threshold).unwrap();
        prop_assert_eq!(result.bad_risk, probability >= threshold);
        prop_assert_eq!(result.probability, probability);
    }
}

// Property: tier bands are exhaustive and mutually exclusive
proptest! {
    #[test]
    fn every_result_maps_to_exactly_one_tier(
        probability in 0.0f64..=1.0,
        bad_risk in proptest::bool::ANY
    ) {
        let result = ClassificationResult { probability, bad_risk };
        let mapped = tier(&result);

        let expected = if bad_risk {
            RiskTier::Poor
        } else if probability < 0.10 {
            RiskTier::Excellent
        } else if probability < 0.30 {
            RiskTier::Good
        } else {
            RiskTier::Fair
        };
        prop_assert_eq!(mapped, expected);
    }

    #[test]
    fn good_risk_never_maps_to_poor(probability in 0.0f64..=1.0) {
        let result = ClassificationResult { probability, bad_risk: false };
        prop_assert_ne!(tier(&result), RiskTier::Poor);
    }
}

// Property: age conversion is strictly decreasing and employment keeps its sentinel
proptest! {
    #[test]
    fn days_birth_strictly_decreasing(age_a in 0u32..120, age_b in 0u32..120) {
        prop_assume!(age_a < age_b);
        prop_assert!(age_to_days_birth(age_a) > age_to_days_birth(age_b));
    }

    #[test]
    fn days_birth_never_positive(age in 0u32..150) {
        prop_assert!(age_to_days_birth(age) <= 0);
    }

    #[test]
    fn days_employed_zero_only_for_unemployed(years in 0.01f64..60.0) {
        prop_assert!(employment_years_to_days_employed(years) < 0);
        prop_assert_eq!(employment_years_to_days_employed(0.0), 0);
    }
}

// Property: parsing never panics and encoding always matches the schema shape
proptest! {
    #[test]
    fn parse_profile_never_panics(
        age in "\\PC*",
        income in "\\PC*",
        gender in "\\PC*"
    ) {
        let mut fields = RawFields::new();
        fields.insert("AGE_YEARS".to_string(), age);
        fields.insert("AMT_INCOME_TOTAL".to_string(), income);
        fields.insert("CODE_GENDER".to_string(), gender);
        let _ = parse_profile(&fields);
    }

    #[test]
    fn encoded_vector_always_schema_shaped(
        age in 0u32..100,
        employed in 0.0f64..50.0,
        income in 0.0f64..1_000_000.0,
        gender in "\\PC*",
        income_type in "\\PC*",
        housing in "\\PC*"
    ) {
        let schema = small_schema();
        let domains = CategoricalDomains::from_schema(&schema);

        let mut fields = RawFields::new();
        fields.insert("AGE_YEARS".to_string(), age.to_string());
        fields.insert("EMPLOYED_YEARS".to_string(), employed.to_string());
        fields.insert("AMT_INCOME_TOTAL".to_string(), income.to_string());
        fields.insert("CODE_GENDER".to_string(), gender);
        fields.insert("NAME_INCOME_TYPE".to_string(), income_type);
        fields.insert("NAME_HOUSING_TYPE".to_string(), housing);

        let profile = parse_profile(&fields).unwrap();
        let vector = encode(&profile, &schema, &domains);
        prop_assert_eq!(vector.len(), schema.len());
    }

    #[test]
    fn unseen_category_equals_absent_field(housing in "[a-zA-Z ]{1,20}") {
        let schema = small_schema();
        let domains = CategoricalDomains::from_schema(&schema);
        prop_assume!(!domains.contains("NAME_HOUSING_TYPE", housing.trim()));

        let mut with_unseen = RawFields::new();
        with_unseen.insert("AGE_YEARS".to_string(), "30".to_string());
        with_unseen.insert("NAME_HOUSING_TYPE".to_string(), housing);

        let mut without = RawFields::new();
        without.insert("AGE_YEARS".to_string(), "30".to_string());

        let unseen_vector = encode(&parse_profile(&with_unseen).unwrap(), &schema, &domains);
        let absent_vector = encode(&parse_profile(&without).unwrap(), &schema, &domains);
        prop_assert_eq!(unseen_vector, absent_vector);
    }

    #[test]
    fn indicator_count_matches_known_values(
        gender in prop::sample::select(vec!["M", "F", "X"]),
        housing in prop::sample::select(vec![
            "House / apartment",
            "With parents",
            "Houseboat",
        ])
    ) {
        let schema = small_schema();
        let domains = CategoricalDomains::from_schema(&schema);

        let mut fields = RawFields::new();
        fields.insert("CODE_GENDER".to_string(), gender.to_string());
        fields.insert("NAME_HOUSING_TYPE".to_string(), housing.to_string());

        let profile = parse_profile(&fields).unwrap();
        let vector = encode(&profile, &schema, &domains);

        let active: f64 = vector.as_slice().iter().sum();
        let mut expected = 0.0;
        if domains.contains("CODE_GENDER", gender) {
            expected += 1.0;
        }
        if domains.contains("NAME_HOUSING_TYPE", housing) {
            expected += 1.0;
        }
        prop_assert_eq!(active, expected);
    }
}
