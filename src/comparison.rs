//! Side-by-side comparison of two articles.

use serde::Serialize;

use crate::models::Article;

/// Absolute per-dimension difference between two `BiasScores`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BiasDelta {
    pub ideological_stance: u8,
    pub factual_grounding: u8,
    pub framing_choices: u8,
    pub emotional_tone: u8,
    pub source_transparency: u8,
}

/// One shared fact and how each side framed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FramingContrast {
    pub fact: &'static str,
    pub article1_framing: &'static str,
    pub article2_framing: &'static str,
}

/// Illustrative contrast attached to every comparison.
///
/// This is a static annotation, not extracted from the two compared articles.
/// It stands in until contrastive framing extraction exists.
pub const SAME_FACTS_DIFFERENT_SPIN: &[FramingContrast] = &[FramingContrast {
    fact: "Rebate amounts range from $500-2000",
    article1_framing: "will help struggling families",
    article2_framing: "could destabilize trade agreements",
}];

#[derive(Debug, Clone, Serialize)]
pub struct Comparison<'a> {
    pub article1: &'a Article,
    pub article2: &'a Article,
    pub bias_delta: BiasDelta,
    pub same_facts_different_spin: &'static [FramingContrast],
}

impl<'a> Comparison<'a> {
    pub fn new(article1: &'a Article, article2: &'a Article) -> Self {
        Self {
            article1,
            article2,
            bias_delta: article1.bias_scores.delta(&article2.bias_scores),
            same_facts_different_spin: SAME_FACTS_DIFFERENT_SPIN,
        }
    }
}
