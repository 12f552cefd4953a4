//! Tone - report の文体

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tone は orchestrator に渡す文体の指定
///
/// `description()` は prompt にそのまま埋め込まれる説明文です。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Objective,
    Formal,
    Analytical,
    Persuasive,
    Informative,
    Explanatory,
    Descriptive,
    Critical,
    Comparative,
    Speculative,
    Reflective,
    Narrative,
    Humorous,
    Optimistic,
    Pessimistic,
    Simple,
    Casual,
}

impl Tone {
    pub const ALL: [Tone; 17] = [
        Tone::Objective,
        Tone::Formal,
        Tone::Analytical,
        Tone::Persuasive,
        Tone::Informative,
        Tone::Explanatory,
        Tone::Descriptive,
        Tone::Critical,
        Tone::Comparative,
        Tone::Speculative,
        Tone::Reflective,
        Tone::Narrative,
        Tone::Humorous,
        Tone::Optimistic,
        Tone::Pessimistic,
        Tone::Simple,
        Tone::Casual,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tone::Objective => "Objective",
            Tone::Formal => "Formal",
            Tone::Analytical => "Analytical",
            Tone::Persuasive => "Persuasive",
            Tone::Informative => "Informative",
            Tone::Explanatory => "Explanatory",
            Tone::Descriptive => "Descriptive",
            Tone::Critical => "Critical",
            Tone::Comparative => "Comparative",
            Tone::Speculative => "Speculative",
            Tone::Reflective => "Reflective",
            Tone::Narrative => "Narrative",
            Tone::Humorous => "Humorous",
            Tone::Optimistic => "Optimistic",
            Tone::Pessimistic => "Pessimistic",
            Tone::Simple => "Simple",
            Tone::Casual => "Casual",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tone::Objective => "Objective (impartial and unbiased presentation of facts and findings)",
            Tone::Formal => "Formal (adheres to academic standards with sophisticated language and structure)",
            Tone::Analytical => "Analytical (critical evaluation and detailed examination of data and theories)",
            Tone::Persuasive => "Persuasive (convincing the audience of a particular viewpoint or argument)",
            Tone::Informative => "Informative (providing clear and comprehensive information on a topic)",
            Tone::Explanatory => "Explanatory (clarifying complex concepts and processes)",
            Tone::Descriptive => "Descriptive (detailed portrayal of phenomena, experiments, or case studies)",
            Tone::Critical => "Critical (judging the validity and relevance of the research and its conclusions)",
            Tone::Comparative => "Comparative (juxtaposing different theories, data, or methods to highlight differences and similarities)",
            Tone::Speculative => "Speculative (exploring hypotheses and potential implications or future research directions)",
            Tone::Reflective => "Reflective (considering the research process and personal insights or experiences)",
            Tone::Narrative => "Narrative (telling a story to illustrate research findings or methodologies)",
            Tone::Humorous => "Humorous (light-hearted and engaging, usually to make the content more relatable)",
            Tone::Optimistic => "Optimistic (highlighting positive findings and potential benefits)",
            Tone::Pessimistic => "Pessimistic (focusing on limitations, challenges, or negative outcomes)",
            Tone::Simple => "Simple (written for young readers, using basic vocabulary and clear explanations)",
            Tone::Casual => "Casual (conversational and relaxed style for easy, everyday reading)",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tone '{0}'")]
pub struct UnknownTone(pub String);

impl FromStr for Tone {
    type Err = UnknownTone;

    /// 名前で大文字小文字を区別せずに引く
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTone(s.to_string()))
    }
}
