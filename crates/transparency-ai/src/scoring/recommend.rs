use crate::product::{is_truthy, ProductDisclosure};
use serde::Serialize;
use serde_json::Value;

const MAX_RECOMMENDATIONS: usize = 5;

/// Categories where shoppers expect a full ingredient declaration.
const INGREDIENT_SENSITIVE_CATEGORIES: [&str; 2] = ["Food & Beverage", "Personal Care"];

/// Derive up to five advisory messages: one score band first, then the
/// conditional gap messages in fixed order, truncated as a whole.
pub(crate) fn recommendations(data: &ProductDisclosure, score: u8) -> Vec<String> {
    let mut messages: Vec<String> = Vec::new();

    if score < 40 {
        messages.push("Critical: Significantly improve product information transparency".into());
        messages.push("Provide detailed ingredient/component information".into());
        messages.push("Obtain basic industry certifications".into());
    } else if score < 60 {
        messages.push("Moderate: Add more detailed product specifications".into());
        messages.push("Consider obtaining additional quality certifications".into());
    } else if score < 80 {
        messages.push("Good: Focus on sustainability documentation".into());
        messages.push("Highlight existing certifications more prominently".into());
    } else {
        messages
            .push("Excellent transparency! Consider using this as a marketing advantage".into());
    }

    if !is_truthy(data.ingredients.as_ref()) && in_ingredient_sensitive_category(data) {
        messages.push("Add complete ingredient list for better consumer trust".into());
    }

    if certifications_missing(data) {
        messages.push("Obtain relevant industry certifications (ISO, FDA, etc.)".into());
    }

    if !is_truthy(data.sustainability_efforts.as_ref()) {
        messages.push("Document environmental and sustainability initiatives".into());
    }

    if !is_truthy(data.country_of_origin.as_ref())
        && !is_truthy(data.manufacturing_location.as_ref())
    {
        messages.push("Provide manufacturing location and origin information".into());
    }

    messages.truncate(MAX_RECOMMENDATIONS);
    messages
}

fn in_ingredient_sensitive_category(data: &ProductDisclosure) -> bool {
    match data.category.as_ref() {
        Some(Value::String(category)) => INGREDIENT_SENSITIVE_CATEGORIES
            .iter()
            .any(|candidate| candidate == category),
        _ => false,
    }
}

fn certifications_missing(data: &ProductDisclosure) -> bool {
    match data.certifications.as_ref() {
        Some(Value::Array(items)) => {
            items.is_empty() || *items == vec![Value::String("None".into())]
        }
        other => !is_truthy(other),
    }
}

/// Consumer trust signal derived from the score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrustLevel {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

/// How complete the disclosure looks, aligned to the trust bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Completeness {
    High,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CategoryCompliance {
    Compliant,
    #[serde(rename = "Needs Review")]
    NeedsReview,
}

/// Endpoint-level analysis labels attached to every score response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransparencyAnalysis {
    pub trust_level: TrustLevel,
    pub completeness: Completeness,
    pub category_compliance: CategoryCompliance,
}

/// Map a score onto the three analysis labels.
pub fn analyze(score: u8) -> TransparencyAnalysis {
    let (trust_level, completeness) = if score >= 80 {
        (TrustLevel::Excellent, Completeness::High)
    } else if score >= 60 {
        (TrustLevel::Good, Completeness::MediumHigh)
    } else if score >= 40 {
        (TrustLevel::Fair, Completeness::Medium)
    } else {
        (TrustLevel::NeedsImprovement, Completeness::Low)
    };

    let category_compliance = if score >= 50 {
        CategoryCompliance::Compliant
    } else {
        CategoryCompliance::NeedsReview
    };

    TransparencyAnalysis {
        trust_level,
        completeness,
        category_compliance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn disclosure(value: serde_json::Value) -> ProductDisclosure {
        serde_json::from_value(value).expect("disclosure deserializes")
    }

    #[test]
    fn critical_band_with_all_gaps_truncates_to_five() {
        let data = disclosure(json!({ "category": "Food & Beverage" }));
        let messages = recommendations(&data, 35);

        assert_eq!(messages.len(), 5);
        assert_eq!(
            messages[0],
            "Critical: Significantly improve product information transparency"
        );
        assert_eq!(messages[1], "Provide detailed ingredient/component information");
        assert_eq!(messages[2], "Obtain basic industry certifications");
        assert_eq!(messages[3], "Add complete ingredient list for better consumer trust");
        assert_eq!(
            messages[4],
            "Obtain relevant industry certifications (ISO, FDA, etc.)"
        );
    }

    #[test]
    fn each_band_contributes_its_fixed_messages() {
        let data = ProductDisclosure::default();

        let moderate = recommendations(&data, 45);
        assert_eq!(moderate[0], "Moderate: Add more detailed product specifications");

        let good = recommendations(&data, 65);
        assert_eq!(good[0], "Good: Focus on sustainability documentation");

        let excellent = recommendations(&data, 85);
        assert_eq!(
            excellent[0],
            "Excellent transparency! Consider using this as a marketing advantage"
        );
    }

    #[test]
    fn ingredient_message_requires_sensitive_category() {
        let electronics = disclosure(json!({ "category": "Electronics" }));
        assert!(!recommendations(&electronics, 85)
            .iter()
            .any(|message| message.contains("ingredient list")));

        let personal_care = disclosure(json!({ "category": "Personal Care" }));
        assert!(recommendations(&personal_care, 85)
            .iter()
            .any(|message| message.contains("ingredient list")));
    }

    #[test]
    fn none_placeholder_list_counts_as_missing_certifications() {
        let data = disclosure(json!({ "certifications": ["None"] }));
        assert!(recommendations(&data, 85)
            .iter()
            .any(|message| message.contains("industry certifications")));

        let real = disclosure(json!({ "certifications": ["ISO 9001"] }));
        assert!(!recommendations(&real, 85)
            .iter()
            .any(|message| message.contains("industry certifications")));
    }

    #[test]
    fn origin_message_needs_both_location_fields_absent() {
        let located = disclosure(json!({ "manufacturing_location": "Lyon" }));
        assert!(!recommendations(&located, 85)
            .iter()
            .any(|message| message.contains("manufacturing location")));
    }

    #[test]
    fn analysis_labels_follow_score_bands() {
        assert_eq!(analyze(92).trust_level, TrustLevel::Excellent);
        assert_eq!(analyze(92).completeness, Completeness::High);
        assert_eq!(analyze(80).trust_level, TrustLevel::Excellent);
        assert_eq!(analyze(60).trust_level, TrustLevel::Good);
        assert_eq!(analyze(59).trust_level, TrustLevel::Fair);
        assert_eq!(analyze(40).completeness, Completeness::Medium);
        assert_eq!(analyze(39).trust_level, TrustLevel::NeedsImprovement);
        assert_eq!(analyze(50).category_compliance, CategoryCompliance::Compliant);
        assert_eq!(analyze(49).category_compliance, CategoryCompliance::NeedsReview);
    }

    #[test]
    fn analysis_serializes_human_readable_labels() {
        let wire = serde_json::to_value(analyze(30)).expect("analysis serializes");
        assert_eq!(wire["trust_level"], "Needs Improvement");
        assert_eq!(wire["completeness"], "Low");
        assert_eq!(wire["category_compliance"], "Needs Review");
    }
}
