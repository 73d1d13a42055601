//! Prompt Builder Unit Tests
//!
//! Covers the fixed clause order of the generated prompt, the literal labels
//! introducing each clause, and the omission rules for optional clauses.
//! Also covers the submission gate on the two required fields.
//!
//! # Test Coverage
//!
//! - **Golden prompt**: exact output for a fully specified minimal input
//! - **Fixed clauses**: goal/tone/depth/CTA present for every enum variant
//! - **Optional clauses**: industry/examples omitted when blank or
//!   whitespace-only, emitted with their literal labels otherwise
//! - **Submission gate**: topic and target audience must be non-blank after
//!   trimming; no other field participates

use postdeck::app::carousel::{
    build_prompt, CarouselInput, ContentDepth, CtaType, PrimaryGoal, Tone,
};
use pretty_assertions::assert_eq;

/// Helper to create the reference input used across tests
fn base_input() -> CarouselInput {
    CarouselInput {
        topic: "AI tools".to_string(),
        target_audience: "founders".to_string(),
        primary_goal: PrimaryGoal::Educate,
        tone: Tone::Bold,
        content_depth: ContentDepth::Intermediate,
        cta_type: CtaType::Comment,
        industry: String::new(),
        examples: String::new(),
    }
}

// ============================================================================
// Golden prompt
// ============================================================================

#[test]
fn golden_prompt_matches_expected_text() {
    let prompt = build_prompt(&base_input());
    assert_eq!(
        prompt,
        "AI tools. Target audience: founders. Goal: Educate. Tone: Bold. \
         Content Depth: Intermediate. CTA: Comment"
    );
}

#[test]
fn golden_prompt_has_no_optional_clauses() {
    let prompt = build_prompt(&base_input());
    assert!(!prompt.contains("industry"));
    assert!(!prompt.contains("Examples/Inspiration"));
}

// ============================================================================
// Fixed clauses
// ============================================================================

#[test]
fn goal_clause_present_for_every_variant() {
    for goal in PrimaryGoal::ALL {
        let mut input = base_input();
        input.primary_goal = goal;
        let prompt = build_prompt(&input);
        assert!(
            prompt.contains(&format!(". Goal: {}", goal.label())),
            "missing goal clause in: {prompt}"
        );
    }
}

#[test]
fn tone_clause_present_for_every_variant() {
    for tone in Tone::ALL {
        let mut input = base_input();
        input.tone = tone;
        let prompt = build_prompt(&input);
        assert!(prompt.contains(&format!(". Tone: {}", tone.label())));
    }
}

#[test]
fn depth_clause_present_for_every_variant() {
    for depth in ContentDepth::ALL {
        let mut input = base_input();
        input.content_depth = depth;
        let prompt = build_prompt(&input);
        assert!(prompt.contains(&format!(". Content Depth: {}", depth.label())));
    }
}

#[test]
fn cta_clause_present_for_every_variant() {
    for cta in CtaType::ALL {
        let mut input = base_input();
        input.cta_type = cta;
        let prompt = build_prompt(&input);
        assert!(prompt.contains(&format!(". CTA: {}", cta.label())));
    }
}

#[test]
fn dm_variant_uses_uppercase_label() {
    let mut input = base_input();
    input.cta_type = CtaType::Dm;
    assert!(build_prompt(&input).ends_with(". CTA: DM"));
}

// ============================================================================
// Optional clauses
// ============================================================================

#[test]
fn industry_clause_attaches_to_cta_sentence() {
    let mut input = base_input();
    input.industry = "SaaS".to_string();
    let prompt = build_prompt(&input);
    assert!(prompt.ends_with(". CTA: Comment in the SaaS industry"));
}

#[test]
fn examples_clause_appended_last() {
    let mut input = base_input();
    input.examples = "Justin Welsh style".to_string();
    let prompt = build_prompt(&input);
    assert!(prompt.ends_with(". Examples/Inspiration: Justin Welsh style"));
}

#[test]
fn industry_then_examples_order() {
    let mut input = base_input();
    input.industry = "Finance".to_string();
    input.examples = "carousel threads".to_string();
    let prompt = build_prompt(&input);
    assert!(prompt.ends_with(
        ". CTA: Comment in the Finance industry. Examples/Inspiration: carousel threads"
    ));
}

#[test]
fn whitespace_only_industry_is_omitted() {
    let mut input = base_input();
    input.industry = "   ".to_string();
    assert_eq!(build_prompt(&input), build_prompt(&base_input()));
}

#[test]
fn whitespace_only_examples_are_omitted() {
    let mut input = base_input();
    input.examples = "\n\t ".to_string();
    assert_eq!(build_prompt(&input), build_prompt(&base_input()));
}

#[test]
fn blank_audience_omits_audience_clause() {
    // The builder is total: with a blank audience the clause disappears
    // entirely rather than being emitted empty.
    let mut input = base_input();
    input.target_audience = "  ".to_string();
    let prompt = build_prompt(&input);
    assert!(!prompt.contains("Target audience"));
    assert!(prompt.starts_with("AI tools. Goal: Educate"));
}

// ============================================================================
// Submission gate
// ============================================================================

#[test]
fn submittable_with_both_required_fields() {
    assert!(base_input().is_submittable());
}

#[test]
fn empty_topic_blocks_submission() {
    let mut input = base_input();
    input.topic = String::new();
    assert!(!input.is_submittable());
}

#[test]
fn whitespace_topic_blocks_submission() {
    let mut input = base_input();
    input.topic = "   \n".to_string();
    assert!(!input.is_submittable());
}

#[test]
fn empty_audience_blocks_submission() {
    let mut input = base_input();
    input.target_audience = String::new();
    assert!(!input.is_submittable());
}

#[test]
fn whitespace_audience_blocks_submission() {
    let mut input = base_input();
    input.target_audience = "\t".to_string();
    assert!(!input.is_submittable());
}

#[test]
fn optional_fields_do_not_affect_submission() {
    let mut input = base_input();
    input.industry = String::new();
    input.examples = String::new();
    for goal in PrimaryGoal::ALL {
        for cta in CtaType::ALL {
            input.primary_goal = goal;
            input.cta_type = cta;
            assert!(input.is_submittable());
        }
    }
}

#[test]
fn default_input_is_not_submittable() {
    assert!(!CarouselInput::default().is_submittable());
}
