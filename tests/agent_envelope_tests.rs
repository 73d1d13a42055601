//! Agent Envelope Decoding Tests
//!
//! The agent service response is only trusted after validation at the
//! network boundary: the outer `success` flag, the inner `status` field, and
//! the schema of the opaque `result` payload must all check out before a
//! `CarouselResult` exists. These tests cover acceptance of a well-formed
//! envelope and rejection of every failure class.

use postdeck::app::agent_client::{decode_result, AgentEnvelope};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

/// A minimal but complete result payload matching the carousel schema
fn sample_result_payload() -> Value {
    json!({
        "carousel_slides": [
            {
                "slide_number": 1,
                "headline": "Why AI tools matter",
                "supporting_text": "Founders who adopt early move faster.",
                "visual_suggestion": "Bold stat on a dark background",
                "design_notes": "Large headline, high contrast"
            },
            {
                "slide_number": 2,
                "headline": "Start small",
                "supporting_text": "Automate one workflow this week.",
                "visual_suggestion": "Checklist illustration",
                "design_notes": "Keep whitespace generous"
            }
        ],
        "caption": {
            "full_caption": "AI tools are eating busywork.\n\nComment 'AI' for the list.",
            "hook": "AI tools are eating busywork.",
            "body": "Here is how founders use them.",
            "cta": "Comment 'AI' for the list."
        },
        "hashtags": {
            "broad": ["#AI", "#Productivity"],
            "niche": ["#FounderLife", "#StartupTools"],
            "authority": ["#BuildInPublic"],
            "all_hashtags": "#AI #Productivity #FounderLife #StartupTools #BuildInPublic"
        },
        "alternative_hooks": ["Stop doing busywork.", "Your competitors automated this."],
        "alternative_ctas": ["Follow for more.", "Save this for later."],
        "posting_recommendations": {
            "best_times": ["8-10 AM", "12-1 PM"],
            "best_days": ["Tuesday", "Thursday"],
            "reasoning": "B2B audiences browse before meetings."
        },
        "engagement_questions": ["Which tool saved you the most time?"],
        "content_strategy_notes": "Lead with outcomes, not features."
    })
}

fn envelope(success: bool, status: &str, result: Value) -> AgentEnvelope {
    serde_json::from_value(json!({
        "success": success,
        "response": {
            "status": status,
            "result": result
        }
    }))
    .expect("envelope JSON should deserialize")
}

// ============================================================================
// Acceptance
// ============================================================================

#[test]
fn well_formed_envelope_decodes() {
    let result = decode_result(envelope(true, "success", sample_result_payload()))
        .expect("valid envelope should decode");

    assert_eq!(result.carousel_slides.len(), 2);
    assert_eq!(result.carousel_slides[0].slide_number, 1);
    assert_eq!(result.carousel_slides[1].headline, "Start small");
    assert_eq!(result.caption.hook, "AI tools are eating busywork.");
    assert_eq!(result.hashtags.broad, vec!["#AI", "#Productivity"]);
    assert_eq!(result.posting_recommendations.best_days.len(), 2);
    assert_eq!(result.engagement_questions.len(), 1);
    assert_eq!(
        result.content_strategy_notes,
        "Lead with outcomes, not features."
    );
}

#[test]
fn unknown_extra_fields_are_tolerated() {
    let mut payload = sample_result_payload();
    payload["sentiment_score"] = json!(0.92);
    payload["caption"]["emoji_density"] = json!("low");

    let result = decode_result(envelope(true, "success", payload))
        .expect("extra fields should not break decoding");
    assert_eq!(result.carousel_slides.len(), 2);
}

#[test]
fn slide_clipboard_text_format() {
    let result = decode_result(envelope(true, "success", sample_result_payload())).unwrap();
    let text = result.carousel_slides[0].clipboard_text();
    assert_eq!(
        text,
        "Slide 1\n\nHeadline: Why AI tools matter\n\n\
         Founders who adopt early move faster.\n\n\
         Visual: Bold stat on a dark background"
    );
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn unsuccessful_envelope_is_rejected() {
    let err = decode_result(envelope(false, "success", sample_result_payload()))
        .expect_err("success=false must be rejected");
    assert!(err.to_string().contains("reported failure"));
}

#[test]
fn non_success_status_is_rejected_with_status_in_reason() {
    let err = decode_result(envelope(true, "rate_limited", sample_result_payload()))
        .expect_err("non-success status must be rejected");
    assert!(err.to_string().contains("rate_limited"));
}

#[test]
fn payload_missing_required_section_is_rejected() {
    let mut payload = sample_result_payload();
    payload.as_object_mut().unwrap().remove("caption");

    let err = decode_result(envelope(true, "success", payload))
        .expect_err("payload without caption must fail schema validation");
    assert!(err.to_string().contains("carousel schema"));
}

#[test]
fn payload_with_wrong_types_is_rejected() {
    let mut payload = sample_result_payload();
    payload["carousel_slides"][0]["slide_number"] = json!("one");

    assert!(decode_result(envelope(true, "success", payload)).is_err());
}

#[test]
fn missing_result_field_is_rejected() {
    // `result` defaults to JSON null when absent; null cannot satisfy the schema
    let envelope: AgentEnvelope = serde_json::from_value(json!({
        "success": true,
        "response": { "status": "success" }
    }))
    .expect("envelope without result should still deserialize");

    assert!(decode_result(envelope).is_err());
}
