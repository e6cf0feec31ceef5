use crate::product::{ProductProfile, Question, QuestionType};

/// Options offered by the fixed quality-certifications question.
pub const CERTIFICATION_OPTIONS: [&str; 7] = [
    "ISO 9001",
    "FDA Approved",
    "CE Mark",
    "GMP",
    "HACCP",
    "Other",
    "None",
];

const FOOD_AND_BEVERAGE: [&str; 7] = [
    "What are the complete ingredients and their proportions?",
    "What allergens are present in this product?",
    "What is the nutritional information per serving?",
    "Are there any preservatives or artificial additives?",
    "What is the shelf life and storage requirements?",
    "Is this product organic or contains GMOs?",
    "What food safety certifications does it have?",
];

const PERSONAL_CARE: [&str; 7] = [
    "What are the active ingredients and their concentrations?",
    "Is this product suitable for sensitive skin?",
    "Has this product been dermatologically tested?",
    "What is the pH level of this product?",
    "Are there any known side effects or contraindications?",
    "Is this product cruelty-free and vegan?",
    "What regulatory approvals does it have?",
];

const ELECTRONICS: [&str; 7] = [
    "What are the technical specifications?",
    "What safety certifications does this product have?",
    "What is the warranty period and coverage?",
    "What materials are used in construction?",
    "Does it comply with environmental regulations?",
    "What is the expected lifespan?",
    "Are replacement parts available?",
];

const HOUSEHOLD: [&str; 6] = [
    "What cleaning agents or chemicals are used?",
    "Is this product safe for children and pets?",
    "What environmental impact does it have?",
    "What safety precautions should be taken?",
    "How should this product be disposed of?",
    "What certifications for safety does it have?",
];

/// Number of category-specific entries taken for the fallback batch.
const TEMPLATE_QUESTIONS_PER_CATEGORY: usize = 3;

/// Read-only store of per-category template questions plus the two common
/// questions appended to every fallback batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionCatalog;

impl QuestionCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Template texts for a category label; unknown categories are empty.
    pub fn templates_for(&self, category: &str) -> &'static [&'static str] {
        match category {
            "Food & Beverage" => &FOOD_AND_BEVERAGE,
            "Personal Care" => &PERSONAL_CARE,
            "Electronics" => &ELECTRONICS,
            "Household" => &HOUSEHOLD,
            _ => &[],
        }
    }

    /// Build the deterministic fallback batch for a profile: up to three
    /// category questions followed by the two common questions.
    pub fn fallback_questions(&self, profile: &ProductProfile) -> Vec<Question> {
        let category = profile.category.as_str();
        let id_stem: String = category
            .to_lowercase()
            .chars()
            .filter(|ch| *ch != ' ')
            .collect();

        let mut questions: Vec<Question> = self
            .templates_for(category)
            .iter()
            .take(TEMPLATE_QUESTIONS_PER_CATEGORY)
            .enumerate()
            .map(|(index, text)| Question::required_text(format!("template_{id_stem}{index}"), *text))
            .collect();

        questions.push(Question::required_text(
            "manufacturing_location",
            "Where is this product manufactured?",
        ));
        questions.push(Question {
            id: "quality_certifications".to_string(),
            text: "What quality certifications does this product have?".to_string(),
            question_type: QuestionType::Multiselect,
            options: Some(
                CERTIFICATION_OPTIONS
                    .iter()
                    .map(|option| option.to_string())
                    .collect(),
            ),
            required: false,
        });

        questions
    }
}
