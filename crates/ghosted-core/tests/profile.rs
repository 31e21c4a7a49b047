use ghosted_core::profile::{StyleProfile, DEFAULT_OPENING};
use serde_json::json;

#[test]
fn strict_json_parses_into_structured_profile() {
    let profile = StyleProfile::from_model_output(r#"{"tone":"dry","opening_line":"hey you"}"#);

    assert!(matches!(profile, StyleProfile::Structured(_)));
    assert_eq!(profile.opening_line(), "hey you");

    // Only the fields the model produced are echoed back.
    let value = serde_json::to_value(&profile).unwrap();
    assert_eq!(value, json!({"tone": "dry", "opening_line": "hey you"}));
}

#[test]
fn full_schema_with_nested_records_parses() {
    let raw = json!({
        "name": null,
        "tone": "dry, playful",
        "favorite_phrases": ["no way", "fr"],
        "emoji_usage": {
            "frequency": "rare",
            "types": ["😂"],
            "position": "end-of-message",
            "notes": null
        },
        "punctuation_style": {
            "periods": "never",
            "exclamations": "light",
            "question_marks": "heavy",
            "ellipses": "sometimes",
            "commas": "sparse",
            "quirks": ["double '??'"]
        },
        "capitalization": "all lower",
        "abbreviations": ["u", "idk"],
        "response_length": "short",
        "formality": "very casual",
        "cursing": "mild",
        "pet_names": [],
        "quirks": ["soooo"],
        "boundaries": null,
        "summary": "Short, dry, lowercase texts.",
        "opening_line": "sup",
        "evidence_examples": ["idk u tell me"]
    })
    .to_string();

    let profile = StyleProfile::from_model_output(&raw);
    let StyleProfile::Structured(fields) = &profile else {
        panic!("expected structured profile");
    };

    assert_eq!(fields.tone.as_deref(), Some("dry, playful"));
    assert_eq!(
        fields
            .emoji_usage
            .as_ref()
            .and_then(|e| e.frequency.as_deref()),
        Some("rare")
    );
    assert_eq!(
        fields
            .punctuation_style
            .as_ref()
            .and_then(|p| p.question_marks.as_deref()),
        Some("heavy")
    );
    assert_eq!(profile.opening_line(), "sup");
}

#[test]
fn unparseable_output_degrades_to_fallback() {
    let raw = "Honestly they just text like a normal person.";
    let profile = StyleProfile::from_model_output(raw);

    assert!(matches!(profile, StyleProfile::Fallback(_)));
    assert_eq!(profile.opening_line(), DEFAULT_OPENING);

    let value = serde_json::to_value(&profile).unwrap();
    assert_eq!(value, json!({"summary": raw, "opening_line": "Hey."}));
}

#[test]
fn non_object_json_degrades_to_fallback() {
    let profile = StyleProfile::from_model_output("[1, 2, 3]");
    assert!(matches!(profile, StyleProfile::Fallback(_)));
}

#[test]
fn null_opening_line_falls_back_to_default() {
    let profile = StyleProfile::from_model_output(r#"{"opening_line": null}"#);
    assert!(matches!(profile, StyleProfile::Structured(_)));
    assert_eq!(profile.opening_line(), DEFAULT_OPENING);
}

#[test]
fn missing_opening_line_falls_back_to_default() {
    let profile = StyleProfile::from_model_output(r#"{"tone":"blunt"}"#);
    assert_eq!(profile.opening_line(), DEFAULT_OPENING);
}
