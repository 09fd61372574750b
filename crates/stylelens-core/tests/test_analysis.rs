use stylelens_core::analysis::{parse_hex_color, AnalysisResult};

const FULL_RESPONSE: &str = r##"{
    "rating": 8.5,
    "color_analysis": {
        "primary_colors": ["#112233", "#445566"],
        "dominant_color": "#112233"
    },
    "skin_tone_analysis": {"tone": "medium", "color": "#c68642"},
    "suggestions": ["Try a belt"],
    "alternative_colors": ["#eeddcc", "#332211", "#998877"],
    "color_compatibility": {
        "complementary_colors": ["#000000", "#1a1a1a"],
        "avoid_colors": ["#ffffff"]
    }
}"##;

#[test]
fn test_deserialize_full_response() {
    let result: AnalysisResult = serde_json::from_str(FULL_RESPONSE).unwrap();

    assert!((result.rating - 8.5).abs() < 1e-9);
    assert_eq!(
        result.color_analysis.primary_colors,
        vec!["#112233", "#445566"]
    );
    assert_eq!(result.color_analysis.dominant_color, "#112233");
    assert_eq!(result.skin_tone_analysis.tone, "medium");
    assert_eq!(result.skin_tone_analysis.color, "#c68642");
    assert_eq!(result.suggestions, vec!["Try a belt"]);
    assert_eq!(result.alternative_colors.len(), 3);

    let compat = result.color_compatibility.expect("compatibility present");
    assert_eq!(compat.complementary_colors, vec!["#000000", "#1a1a1a"]);
    assert_eq!(compat.avoid_colors, vec!["#ffffff"]);
}

#[test]
fn test_deserialize_without_compatibility() {
    let body = r##"{
        "rating": 6.0,
        "color_analysis": {"primary_colors": ["#abcdef"], "dominant_color": "#abcdef"},
        "skin_tone_analysis": {"tone": "Light", "color": "#e0b090"},
        "suggestions": [],
        "alternative_colors": []
    }"##;
    let result: AnalysisResult = serde_json::from_str(body).unwrap();
    assert!(result.color_compatibility.is_none());
    assert!(result.suggestions.is_empty());
}

#[test]
fn test_suggestion_and_color_order_is_preserved() {
    let body = r##"{
        "rating": 7.0,
        "color_analysis": {
            "primary_colors": ["#010101", "#020202", "#030303"],
            "dominant_color": "#010101"
        },
        "skin_tone_analysis": {"tone": "Dark", "color": "#8d5524"},
        "suggestions": ["first", "second", "third"],
        "alternative_colors": ["#0a0a0a", "#0b0b0b"]
    }"##;
    let result: AnalysisResult = serde_json::from_str(body).unwrap();
    assert_eq!(result.suggestions, vec!["first", "second", "third"]);
    assert_eq!(
        result.color_analysis.primary_colors,
        vec!["#010101", "#020202", "#030303"]
    );
    assert_eq!(result.alternative_colors, vec!["#0a0a0a", "#0b0b0b"]);
}

#[test]
fn test_missing_required_field_is_an_error() {
    let body = r#"{"rating": 5.0}"#;
    assert!(serde_json::from_str::<AnalysisResult>(body).is_err());
}

#[test]
fn test_serialize_roundtrip() {
    let result: AnalysisResult = serde_json::from_str(FULL_RESPONSE).unwrap();
    let encoded = serde_json::to_string(&result).unwrap();
    let decoded: AnalysisResult = serde_json::from_str(&encoded).unwrap();
    assert_eq!(result, decoded);
}

#[test]
fn test_rating_fraction() {
    let mut result: AnalysisResult = serde_json::from_str(FULL_RESPONSE).unwrap();
    assert!((result.rating_fraction() - 0.85).abs() < 1e-6);

    result.rating = 12.0;
    assert_eq!(result.rating_fraction(), 1.0);

    result.rating = -3.0;
    assert_eq!(result.rating_fraction(), 0.0);
}

#[test]
fn test_parse_hex_color_valid() {
    assert_eq!(parse_hex_color("#112233"), Some([0x11, 0x22, 0x33]));
    assert_eq!(parse_hex_color("#ffffff"), Some([255, 255, 255]));
    assert_eq!(parse_hex_color("#C68642"), Some([0xc6, 0x86, 0x42]));
}

#[test]
fn test_parse_hex_color_invalid() {
    assert_eq!(parse_hex_color("112233"), None);
    assert_eq!(parse_hex_color("#fff"), None);
    assert_eq!(parse_hex_color("#11223344"), None);
    assert_eq!(parse_hex_color("#11223g"), None);
    assert_eq!(parse_hex_color(""), None);
}
