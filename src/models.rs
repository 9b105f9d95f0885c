//! Article and narrative records served by the API.
//!
//! All records are plain data. Validation runs once when the catalog is
//! built; after that the values are never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::comparison::BiasDelta;
use crate::error::CatalogError;

/// Upper bound shared by the five integer bias dimensions.
pub const MAX_SCORE: u8 = 100;

/// Five-dimension bias assessment plus a confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiasScores {
    /// 0 = far left, 50 = center, 100 = far right
    pub ideological_stance: u8,
    /// Higher = more factual
    pub factual_grounding: u8,
    /// Higher = more manipulative framing
    pub framing_choices: u8,
    /// Higher = more inflammatory
    pub emotional_tone: u8,
    /// Higher = better attribution
    pub source_transparency: u8,
    /// 0-1
    pub confidence: f64,
}

impl BiasScores {
    /// Check every integer dimension is within 0..=100 and confidence within [0, 1].
    pub fn validate(&self) -> Result<(), CatalogError> {
        for dimension in BiasDimension::ALL {
            let value = self.get(dimension);
            if value > MAX_SCORE {
                return Err(CatalogError::ScoreOutOfRange {
                    field: dimension.as_str(),
                    value,
                });
            }
        }
        validate_fraction("confidence", self.confidence)
    }

    /// Score for a single dimension.
    pub fn get(&self, dimension: BiasDimension) -> u8 {
        match dimension {
            BiasDimension::IdeologicalStance => self.ideological_stance,
            BiasDimension::FactualGrounding => self.factual_grounding,
            BiasDimension::FramingChoices => self.framing_choices,
            BiasDimension::EmotionalTone => self.emotional_tone,
            BiasDimension::SourceTransparency => self.source_transparency,
        }
    }

    /// Absolute per-dimension difference. Confidence is not part of the delta.
    pub fn delta(&self, other: &BiasScores) -> BiasDelta {
        BiasDelta {
            ideological_stance: self.ideological_stance.abs_diff(other.ideological_stance),
            factual_grounding: self.factual_grounding.abs_diff(other.factual_grounding),
            framing_choices: self.framing_choices.abs_diff(other.framing_choices),
            emotional_tone: self.emotional_tone.abs_diff(other.emotional_tone),
            source_transparency: self.source_transparency.abs_diff(other.source_transparency),
        }
    }
}

/// The five scored dimensions. Serialized as the matching `BiasScores` field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasDimension {
    IdeologicalStance,
    FactualGrounding,
    FramingChoices,
    EmotionalTone,
    SourceTransparency,
}

impl BiasDimension {
    pub const ALL: [BiasDimension; 5] = [
        BiasDimension::IdeologicalStance,
        BiasDimension::FactualGrounding,
        BiasDimension::FramingChoices,
        BiasDimension::EmotionalTone,
        BiasDimension::SourceTransparency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BiasDimension::IdeologicalStance => "ideological_stance",
            BiasDimension::FactualGrounding => "factual_grounding",
            BiasDimension::FramingChoices => "framing_choices",
            BiasDimension::EmotionalTone => "emotional_tone",
            BiasDimension::SourceTransparency => "source_transparency",
        }
    }
}

/// Political lean of the publishing outlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLean {
    Left,
    Center,
    Right,
}

/// A phrase flagged as evidence for one bias dimension.
///
/// `start`/`end` are advisory character offsets into the article text and are
/// not guaranteed to line up with `text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasedPhrase {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub dimension: BiasDimension,
    pub explanation: String,
}

impl BiasedPhrase {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.start > self.end {
            return Err(CatalogError::PhraseOffsets {
                text: self.text.clone(),
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub source: String,
    pub source_lean: SourceLean,
    pub published: DateTime<Utc>,
    pub url: String,
    pub excerpt: String,
    pub full_text: String,
    pub bias_scores: BiasScores,
    /// Ordered by relevance, not by position in the text.
    pub biased_phrases: Vec<BiasedPhrase>,
    /// Narrative id this article belongs to. Not checked against the narrative list.
    pub narrative_cluster: String,
}

impl Article {
    pub fn validate(&self) -> Result<(), CatalogError> {
        let wrap = |source: CatalogError| CatalogError::InvalidArticle {
            id: self.id.clone(),
            source: Box::new(source),
        };

        self.bias_scores.validate().map_err(wrap)?;
        for phrase in &self.biased_phrases {
            phrase.validate().map_err(wrap)?;
        }
        Ok(())
    }
}

/// Curated summary of how a story is covered across outlets.
///
/// `article_count`, `sources` and `average_bias` are curated constants and are
/// not derived from the article list, so they can disagree with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    pub id: String,
    pub title: String,
    pub article_count: u32,
    pub sources: Vec<String>,
    pub average_bias: BiasScores,
    /// 0-1, higher = outlets disagree more
    pub divergence_score: f64,
    pub trending: bool,
}

impl Narrative {
    pub fn validate(&self) -> Result<(), CatalogError> {
        let wrap = |source: CatalogError| CatalogError::InvalidNarrative {
            id: self.id.clone(),
            source: Box::new(source),
        };

        self.average_bias.validate().map_err(wrap)?;
        validate_fraction("divergence_score", self.divergence_score).map_err(wrap)
    }
}

fn validate_fraction(field: &'static str, value: f64) -> Result<(), CatalogError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(CatalogError::FractionOutOfRange { field, value });
    }
    Ok(())
}
