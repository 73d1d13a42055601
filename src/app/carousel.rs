//! Carousel input model, prompt assembly, and the typed result shape.
//!
//! This module owns the data the rest of the application moves around:
//! [`CarouselInput`] (the mutable form state), the fixed-choice field enums
//! that drive the form widgets, and [`CarouselResult`] (the immutable decoded
//! response from the generation agent). The prompt sent to the agent is
//! assembled here by [`build_prompt`] so the wire text has a single owner.

use serde::{Deserialize, Serialize};

/// Primary goal of the carousel post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PrimaryGoal {
    #[default]
    Educate,
    LeadGen,
    PersonalBrand,
    Sales,
}

impl PrimaryGoal {
    pub const ALL: [PrimaryGoal; 4] = [
        PrimaryGoal::Educate,
        PrimaryGoal::LeadGen,
        PrimaryGoal::PersonalBrand,
        PrimaryGoal::Sales,
    ];

    /// Label shown in the UI and spliced into the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryGoal::Educate => "Educate",
            PrimaryGoal::LeadGen => "Lead Gen",
            PrimaryGoal::PersonalBrand => "Personal Brand",
            PrimaryGoal::Sales => "Sales",
        }
    }
}

impl std::fmt::Display for PrimaryGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Writing tone of the generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Tone {
    #[default]
    Bold,
    Conversational,
    Authoritative,
    Empathetic,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Bold,
        Tone::Conversational,
        Tone::Authoritative,
        Tone::Empathetic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Bold => "Bold",
            Tone::Conversational => "Conversational",
            Tone::Authoritative => "Authoritative",
            Tone::Empathetic => "Empathetic",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How deep the content should go for the target audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ContentDepth {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl ContentDepth {
    pub const ALL: [ContentDepth; 3] = [
        ContentDepth::Beginner,
        ContentDepth::Intermediate,
        ContentDepth::Advanced,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContentDepth::Beginner => "Beginner",
            ContentDepth::Intermediate => "Intermediate",
            ContentDepth::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for ContentDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Call-to-action the final slide and caption should push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CtaType {
    #[default]
    Comment,
    Follow,
    Dm,
    Save,
    Share,
}

impl CtaType {
    pub const ALL: [CtaType; 5] = [
        CtaType::Comment,
        CtaType::Follow,
        CtaType::Dm,
        CtaType::Save,
        CtaType::Share,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CtaType::Comment => "Comment",
            CtaType::Follow => "Follow",
            CtaType::Dm => "DM",
            CtaType::Save => "Save",
            CtaType::Share => "Share",
        }
    }
}

impl std::fmt::Display for CtaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Mutable form state describing the carousel the user wants.
///
/// Created with defaults at session start, mutated on every keystroke or
/// selection, never persisted. `topic` and `target_audience` are required;
/// `industry` and `examples` are optional and treated as absent when blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CarouselInput {
    pub topic: String,
    pub target_audience: String,
    pub primary_goal: PrimaryGoal,
    pub tone: Tone,
    pub content_depth: ContentDepth,
    pub cta_type: CtaType,
    pub industry: String,
    pub examples: String,
}

impl CarouselInput {
    /// Whether the input is complete enough to submit.
    ///
    /// Only the two required fields gate submission; whitespace-only values
    /// do not count. No other validation is performed.
    pub fn is_submittable(&self) -> bool {
        !self.topic.trim().is_empty() && !self.target_audience.trim().is_empty()
    }
}

/// Assemble the natural-language prompt sent to the generation agent.
///
/// Clause order is fixed: topic, target audience, goal, tone, content depth,
/// CTA, industry, examples. Each clause after the topic is introduced by its
/// literal label and joined with a period-space separator (the industry
/// clause attaches to the CTA sentence). Optional clauses are omitted
/// entirely when their source field is blank or whitespace-only.
pub fn build_prompt(input: &CarouselInput) -> String {
    let mut prompt = input.topic.clone();

    if !input.target_audience.trim().is_empty() {
        prompt.push_str(&format!(". Target audience: {}", input.target_audience));
    }

    prompt.push_str(&format!(". Goal: {}", input.primary_goal.label()));
    prompt.push_str(&format!(". Tone: {}", input.tone.label()));
    prompt.push_str(&format!(". Content Depth: {}", input.content_depth.label()));
    prompt.push_str(&format!(". CTA: {}", input.cta_type.label()));

    if !input.industry.trim().is_empty() {
        prompt.push_str(&format!(" in the {} industry", input.industry));
    }

    if !input.examples.trim().is_empty() {
        prompt.push_str(&format!(". Examples/Inspiration: {}", input.examples));
    }

    prompt
}

/// One slide of the generated carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselSlide {
    pub slide_number: u32,
    pub headline: String,
    pub supporting_text: String,
    pub visual_suggestion: String,
    pub design_notes: String,
}

impl CarouselSlide {
    /// Text placed on the clipboard when the user copies a slide card.
    pub fn clipboard_text(&self) -> String {
        format!(
            "Slide {}\n\nHeadline: {}\n\n{}\n\nVisual: {}",
            self.slide_number, self.headline, self.supporting_text, self.visual_suggestion
        )
    }
}

/// Post caption broken into its parts plus the assembled full text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub full_caption: String,
    pub hook: String,
    pub body: String,
    pub cta: String,
}

/// The three hashtag tiers plus the pre-joined combined string.
///
/// Tiers target different reach strategies: `broad` for visibility, `niche`
/// for the target audience, `authority` for thought leadership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hashtags {
    pub broad: Vec<String>,
    pub niche: Vec<String>,
    pub authority: Vec<String>,
    pub all_hashtags: String,
}

/// When the post should go out, with the agent's reasoning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostingRecommendations {
    pub best_times: Vec<String>,
    pub best_days: Vec<String>,
    pub reasoning: String,
}

/// Immutable snapshot of a successful generation.
///
/// Decoded from the agent envelope's `result` payload at the network
/// boundary; replaced wholesale on regeneration and discarded on exit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselResult {
    pub carousel_slides: Vec<CarouselSlide>,
    pub caption: Caption,
    pub hashtags: Hashtags,
    pub alternative_hooks: Vec<String>,
    pub alternative_ctas: Vec<String>,
    pub posting_recommendations: PostingRecommendations,
    pub engagement_questions: Vec<String>,
    pub content_strategy_notes: String,
}
