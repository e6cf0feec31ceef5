//! Deterministic transparency scoring.
//!
//! The rubric sums five independently capped sub-scores over the declared
//! attributes of a product. Missing or malformed fields degrade the score;
//! they never produce an error.

mod recommend;

pub use recommend::{
    analyze, CategoryCompliance, Completeness, TransparencyAnalysis, TrustLevel,
};

use crate::product::{is_truthy, text_len, ProductDisclosure};
use serde_json::Value;

/// Weight ceiling for each sub-score, in rubric order.
pub const BASIC_INFO_WEIGHT: u8 = 30;
pub const DETAILED_COMPOSITION_WEIGHT: u8 = 25;
pub const CERTIFICATIONS_WEIGHT: u8 = 20;
pub const MANUFACTURING_INFO_WEIGHT: u8 = 15;
pub const SUSTAINABILITY_WEIGHT: u8 = 10;

/// The five capped sub-scores behind a transparency score.
///
/// Sustainability accrues in 2.5-point increments; fractions survive until
/// [`ScoreBreakdown::total`], which truncates only the grand total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub basic_info: u8,
    pub detailed_composition: u8,
    pub certifications: u8,
    pub manufacturing_info: u8,
    pub sustainability: f32,
}

impl ScoreBreakdown {
    /// Final score: truncated sum of the sub-scores, clamped to 0..=100.
    pub fn total(&self) -> u8 {
        let sum = f32::from(self.basic_info)
            + f32::from(self.detailed_composition)
            + f32::from(self.certifications)
            + f32::from(self.manufacturing_info)
            + self.sustainability;
        (sum.max(0.0) as u8).min(100)
    }
}

/// Pure scorer over a snapshot of declared product data.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransparencyScorer;

impl TransparencyScorer {
    pub fn new() -> Self {
        Self
    }

    /// Compute the full sub-score breakdown for a disclosure.
    pub fn breakdown(&self, data: &ProductDisclosure) -> ScoreBreakdown {
        ScoreBreakdown {
            basic_info: basic_info_score(data),
            detailed_composition: detailed_composition_score(data),
            certifications: certifications_score(data),
            manufacturing_info: manufacturing_info_score(data),
            sustainability: sustainability_score(data),
        }
    }

    /// Transparency score in 0..=100. Total over any disclosure.
    pub fn score(&self, data: &ProductDisclosure) -> u8 {
        self.breakdown(data).total()
    }

    /// Up to five advisory messages derived from the disclosure and score.
    pub fn recommend(&self, data: &ProductDisclosure, score: u8) -> Vec<String> {
        recommend::recommendations(data, score)
    }
}

fn identity_field_points(value: Option<&Value>) -> u8 {
    if is_truthy(value) && text_len(value) > 2 {
        10
    } else {
        0
    }
}

fn basic_info_score(data: &ProductDisclosure) -> u8 {
    let mut raw = identity_field_points(data.name.as_ref())
        + identity_field_points(data.brand.as_ref())
        + identity_field_points(data.category.as_ref());

    if is_truthy(data.description.as_ref()) && text_len(data.description.as_ref()) > 20 {
        raw += 10;
    }

    raw.min(BASIC_INFO_WEIGHT)
}

fn detailed_composition_score(data: &ProductDisclosure) -> u8 {
    if !is_truthy(data.ingredients.as_ref()) {
        return 0;
    }

    let raw = match text_len(data.ingredients.as_ref()) {
        length if length > 100 => 25,
        length if length > 50 => 15,
        length if length > 10 => 10,
        _ => 0,
    };

    raw.min(DETAILED_COMPOSITION_WEIGHT)
}

fn certifications_score(data: &ProductDisclosure) -> u8 {
    match data.certifications.as_ref() {
        // A populated list earns 5 per entry, even for throwaway values like
        // ["None"]; dedup is the submitter's problem, the cap is ours.
        Some(Value::Array(items)) if !items.is_empty() => {
            let per_entry = items.len().saturating_mul(5);
            per_entry.min(usize::from(CERTIFICATIONS_WEIGHT)) as u8
        }
        Some(scalar) if is_truthy(Some(scalar)) && *scalar != Value::String("None".into()) => 10,
        _ => 0,
    }
}

fn manufacturing_info_score(data: &ProductDisclosure) -> u8 {
    let fields = [
        data.country_of_origin.as_ref(),
        data.manufacturing_location.as_ref(),
        data.manufacturing_date.as_ref(),
    ];

    let raw: u8 = fields.iter().map(|field| u8::from(is_truthy(*field)) * 5).sum();
    raw.min(MANUFACTURING_INFO_WEIGHT)
}

fn sustainability_score(data: &ProductDisclosure) -> f32 {
    let fields = [
        data.sustainability_efforts.as_ref(),
        data.organic.as_ref(),
        data.cruelty_free.as_ref(),
        data.eco_friendly.as_ref(),
    ];

    let raw: f32 = fields
        .iter()
        .map(|field| if is_truthy(*field) { 2.5 } else { 0.0 })
        .sum();
    raw.min(f32::from(SUSTAINABILITY_WEIGHT))
}
