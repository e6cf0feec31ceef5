use serde_json::json;
use transparency_ai::product::ProductDisclosure;
use transparency_ai::scoring::{analyze, TransparencyScorer};

fn disclosure(value: serde_json::Value) -> ProductDisclosure {
    serde_json::from_value(value).expect("disclosure deserializes")
}

#[test]
fn score_stays_in_bounds_for_arbitrary_shapes() {
    let scorer = TransparencyScorer::new();
    let samples = [
        json!({}),
        json!({ "name": 42, "brand": true, "category": [1, 2, 3] }),
        json!({ "ingredients": "x".repeat(10_000), "certifications": vec!["a"; 50] }),
        json!({ "description": { "nested": "object" }, "organic": 1 }),
        json!({ "unrelated": "keys", "another": null }),
    ];

    for sample in samples {
        let score = scorer.score(&disclosure(sample.clone()));
        assert!(score <= 100, "score {score} out of range for {sample}");
    }
}

#[test]
fn empty_disclosure_scores_zero_with_low_labels() {
    let scorer = TransparencyScorer::new();
    let data = disclosure(json!({}));

    let score = scorer.score(&data);
    assert_eq!(score, 0);

    let analysis = analyze(score);
    let wire = serde_json::to_value(analysis).expect("analysis serializes");
    assert_eq!(wire["trust_level"], "Needs Improvement");
    assert_eq!(wire["completeness"], "Low");
    assert_eq!(wire["category_compliance"], "Needs Review");
}

#[test]
fn basic_profile_earns_exactly_the_basic_info_weight() {
    let scorer = TransparencyScorer::new();
    let data = disclosure(json!({
        "name": "Trail Mix",
        "brand": "Summit Foods",
        "category": "Food & Beverage",
        "description": "Roasted nuts and dried fruit, packed at origin.",
    }));

    assert_eq!(scorer.score(&data), 30);
}

#[test]
fn long_ingredient_list_adds_full_composition_credit() {
    let scorer = TransparencyScorer::new();

    // Identity fields of length 1 earn nothing; only the description and the
    // ingredient list contribute here.
    let data = disclosure(json!({
        "name": "A",
        "brand": "B",
        "category": "C",
        "description": "x".repeat(21),
        "ingredients": "y".repeat(150),
    }));
    let breakdown = scorer.breakdown(&data);
    assert_eq!(breakdown.basic_info, 10);
    assert_eq!(breakdown.detailed_composition, 25);
    assert_eq!(scorer.score(&data), 35);

    // With real identity fields the same ingredient list lands on 55.
    let named = disclosure(json!({
        "name": "Alpha",
        "brand": "Bravo",
        "category": "Chems",
        "description": "x".repeat(21),
        "ingredients": "y".repeat(150),
    }));
    assert_eq!(scorer.score(&named), 55);
}

#[test]
fn seven_certifications_cap_at_twenty() {
    let scorer = TransparencyScorer::new();
    let data = disclosure(json!({
        "certifications": ["ISO 9001", "FDA Approved", "CE Mark", "GMP", "HACCP", "Other", "None"],
    }));

    let breakdown = scorer.breakdown(&data);
    assert_eq!(breakdown.certifications, 20);
    assert_eq!(scorer.score(&data), 20);
}

#[test]
fn low_score_recommendations_keep_band_order_then_truncate() {
    let scorer = TransparencyScorer::new();
    let data = disclosure(json!({ "category": "Food & Beverage" }));
    let score = scorer.score(&data);
    assert!(score < 40);

    let messages = scorer.recommend(&data, 35);
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
fn recommend_is_deterministic() {
    let scorer = TransparencyScorer::new();
    let data = disclosure(json!({
        "name": "Desk Lamp",
        "brand": "Lumen Works",
        "category": "Electronics",
        "description": "An adjustable desk lamp with a replaceable LED module.",
        "certifications": ["CE Mark"],
    }));

    let score = scorer.score(&data);
    assert_eq!(scorer.recommend(&data, score), scorer.recommend(&data, score));
    assert_eq!(score, scorer.score(&data));
}
