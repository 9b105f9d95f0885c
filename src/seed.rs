//! Seed records for the tariff rebate story and its neighbouring clusters.
//!
//! Built once at startup. Every article carries the same `published`
//! timestamp, taken when the catalog is constructed.

use chrono::{DateTime, Utc};

use crate::models::{Article, BiasDimension, BiasScores, BiasedPhrase, Narrative, SourceLean};

use crate::models::BiasDimension::*;

fn scores(
    ideological_stance: u8,
    factual_grounding: u8,
    framing_choices: u8,
    emotional_tone: u8,
    source_transparency: u8,
    confidence: f64,
) -> BiasScores {
    BiasScores {
        ideological_stance,
        factual_grounding,
        framing_choices,
        emotional_tone,
        source_transparency,
        confidence,
    }
}

fn phrase(text: &str, start: usize, end: usize, dimension: BiasDimension, explanation: &str) -> BiasedPhrase {
    BiasedPhrase {
        text: text.to_string(),
        start,
        end,
        dimension,
        explanation: explanation.to_string(),
    }
}

struct ArticleSeed {
    id: &'static str,
    title: &'static str,
    source: &'static str,
    source_lean: SourceLean,
    url: &'static str,
    excerpt: &'static str,
    full_text: &'static str,
    bias_scores: BiasScores,
    biased_phrases: Vec<BiasedPhrase>,
    narrative_cluster: &'static str,
}

impl ArticleSeed {
    fn build(self, published: DateTime<Utc>) -> Article {
        Article {
            id: self.id.to_string(),
            title: self.title.to_string(),
            source: self.source.to_string(),
            source_lean: self.source_lean,
            published,
            url: self.url.to_string(),
            excerpt: self.excerpt.to_string(),
            full_text: self.full_text.to_string(),
            bias_scores: self.bias_scores,
            biased_phrases: self.biased_phrases,
            narrative_cluster: self.narrative_cluster.to_string(),
        }
    }
}

/// Articles in catalog order: the five tariff rebate pieces, then broader coverage.
pub fn articles(published: DateTime<Utc>) -> Vec<Article> {
    let seeds = vec![
        ArticleSeed {
            id: "cnn-001",
            title: "Trump's Tariff Rebate Checks: Economic Relief or Political Theater?",
            source: "CNN",
            source_lean: SourceLean::Left,
            url: "https://cnn.com/...",
            excerpt: "Critics argue the proposed rebate checks are a political ploy ahead of primary season, with economists warning of inflationary pressures.",
            full_text: "Critics argue the proposed rebate checks are a political ploy ahead of primary season, with economists warning of inflationary pressures. The plan, which Trump claims will 'put money back in hardworking Americans' pockets,' has drawn skepticism from fiscal conservatives who question the timing. Leading economists suggest the rebates could fuel inflation rather than provide meaningful relief. 'This is clearly about politics, not policy,' said one Democratic strategist.",
            bias_scores: scores(25, 72, 65, 45, 78, 0.85),
            biased_phrases: vec![
                phrase("political ploy", 35, 49, FramingChoices, "Frames policy as manipulative rather than genuine"),
                phrase("Critics argue", 0, 13, IdeologicalStance, "Leads with opposition perspective"),
            ],
            narrative_cluster: "tariff-rebates",
        },
        ArticleSeed {
            id: "fox-001",
            title: "Trump Delivers: Rebate Checks to Offset Biden's Inflation Crisis",
            source: "Fox News",
            source_lean: SourceLean::Right,
            url: "https://foxnews.com/...",
            excerpt: "President Trump's bold plan to return tariff revenue directly to American families offers real relief from the Biden administration's economic failures.",
            full_text: "President Trump's bold plan to return tariff revenue directly to American families offers real relief from the Biden administration's economic failures. The rebate checks, ranging from $500 to $2000 per household, will help struggling families cope with skyrocketing prices. Trump stated, 'We're putting America First by returning China's tariff payments directly to the people.' Conservative economists praise the move as 'innovative fiscal policy' that rewards working Americans.",
            bias_scores: scores(78, 68, 72, 58, 71, 0.87),
            biased_phrases: vec![
                phrase("Biden's Inflation Crisis", 75, 99, FramingChoices, "Attributes complex economic issue to single administration"),
                phrase("Trump Delivers", 0, 14, EmotionalTone, "Heroic framing without policy details"),
                phrase("bold plan", 22, 31, IdeologicalStance, "Positive characterization of policy"),
            ],
            narrative_cluster: "tariff-rebates",
        },
        ArticleSeed {
            id: "reuters-001",
            title: "Trump Proposes Tariff Revenue Rebates to American Households",
            source: "Reuters",
            source_lean: SourceLean::Center,
            url: "https://reuters.com/...",
            excerpt: "Former President Trump announced a plan to distribute tariff revenues as direct payments to Americans, with details remaining unclear.",
            full_text: "Former President Trump announced a plan to distribute tariff revenues as direct payments to Americans, with details remaining unclear. The proposal would allocate approximately $50 billion in collected tariff revenues for direct household payments. Treasury analysts note implementation challenges and potential trade partner responses. The rebates would range from $500-2000 based on household size, though funding mechanisms require congressional approval.",
            bias_scores: scores(50, 88, 25, 15, 92, 0.91),
            biased_phrases: vec![
                phrase("details remaining unclear", 98, 123, FactualGrounding, "Highlights uncertainty without speculation"),
            ],
            narrative_cluster: "tariff-rebates",
        },
        ArticleSeed {
            id: "wsj-001",
            title: "Tariff Rebate Proposal Faces Economic Scrutiny",
            source: "Wall Street Journal",
            source_lean: SourceLean::Center,
            url: "https://wsj.com/...",
            excerpt: "Economists question the fiscal impact of Trump's proposed tariff rebate system on federal revenues and trade relationships.",
            full_text: "Economists question the fiscal impact of Trump's proposed tariff rebate system on federal revenues and trade relationships. The plan would redistribute an estimated $50-75 billion in tariff collections directly to households. Federal Reserve officials express concern about potential inflationary effects. Trade partners may retaliate with their own tariff adjustments, potentially escalating trade tensions. Market analysts project a 0.3% GDP impact if implemented.",
            bias_scores: scores(48, 85, 30, 20, 89, 0.88),
            biased_phrases: vec![
                phrase("Economists question", 0, 19, SourceTransparency, "Cites expert perspective neutrally"),
            ],
            narrative_cluster: "tariff-rebates",
        },
        ArticleSeed {
            id: "msnbc-001",
            title: "Trump's Rebate Scheme: A Desperate Bid for Relevance",
            source: "MSNBC",
            source_lean: SourceLean::Left,
            url: "https://msnbc.com/...",
            excerpt: "The former president's latest proposal reveals a dangerous pattern of fiscal irresponsibility designed to buy voter support.",
            full_text: "The former president's latest proposal reveals a dangerous pattern of fiscal irresponsibility designed to buy voter support. Experts warn that the rebate checks could destabilize carefully balanced trade agreements. Progressive economists call it 'a cynical attempt to purchase popularity' while ignoring climate and social priorities. The timing, coinciding with primary season, is hardly coincidental say political observers.",
            bias_scores: scores(18, 65, 78, 72, 70, 0.83),
            biased_phrases: vec![
                phrase("Desperate Bid", 22, 35, EmotionalTone, "Emotionally charged characterization"),
                phrase("dangerous pattern", 58, 75, FramingChoices, "Frames policy as threatening without specifics"),
                phrase("cynical attempt", 241, 256, IdeologicalStance, "Attributes negative motives"),
            ],
            narrative_cluster: "tariff-rebates",
        },
        ArticleSeed {
            id: "bloomberg-001",
            title: "Fed Signals Concern Over Fiscal Stimulus Timing",
            source: "Bloomberg",
            source_lean: SourceLean::Center,
            url: "https://bloomberg.com/...",
            excerpt: "Federal Reserve officials privately express concerns about additional stimulus measures affecting monetary policy objectives.",
            full_text: "Federal Reserve officials privately express concerns about additional stimulus measures affecting monetary policy objectives...",
            bias_scores: scores(52, 90, 22, 12, 88, 0.92),
            biased_phrases: vec![],
            narrative_cluster: "fed-policy",
        },
        ArticleSeed {
            id: "nyt-001",
            title: "How Tariff Policies Reshape American Trade Dynamics",
            source: "New York Times",
            source_lean: SourceLean::Left,
            url: "https://nytimes.com/...",
            excerpt: "A comprehensive analysis of how tariff revenues and rebate proposals reflect broader shifts in American trade policy.",
            full_text: "A comprehensive analysis of how tariff revenues and rebate proposals reflect broader shifts in American trade policy...",
            bias_scores: scores(35, 82, 38, 25, 85, 0.86),
            biased_phrases: vec![],
            narrative_cluster: "trade-analysis",
        },
    ];

    seeds.into_iter().map(|seed| seed.build(published)).collect()
}

/// Curated narrative summaries. Counts, sources and averages are literal values.
pub fn narratives() -> Vec<Narrative> {
    fn narrative(
        id: &str,
        title: &str,
        article_count: u32,
        sources: &[&str],
        average_bias: BiasScores,
        divergence_score: f64,
        trending: bool,
    ) -> Narrative {
        Narrative {
            id: id.to_string(),
            title: title.to_string(),
            article_count,
            sources: sources.iter().map(|s| s.to_string()).collect(),
            average_bias,
            divergence_score,
            trending,
        }
    }

    vec![
        narrative(
            "tariff-rebates",
            "Trump Tariff Rebate Checks",
            5,
            &["CNN", "Fox News", "Reuters", "WSJ", "MSNBC"],
            scores(48, 75, 48, 38, 79, 0.86),
            0.78,
            true,
        ),
        narrative(
            "fed-policy",
            "Federal Reserve Policy Response",
            2,
            &["Bloomberg", "WSJ"],
            scores(51, 88, 26, 15, 87, 0.90),
            0.15,
            false,
        ),
        narrative(
            "trade-analysis",
            "US-China Trade Relations",
            3,
            &["NYT", "Reuters", "Bloomberg"],
            scores(42, 83, 32, 22, 84, 0.87),
            0.35,
            true,
        ),
    ]
}
