use serde::{Deserialize, Serialize};

/// Unique identifier for a model in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(pub String);

impl ModelId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A capability family the caller can weigh when selecting models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    InstructionFollowing,
    Knowledge,
    Reasoning,
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InstructionFollowing => write!(f, "instruction-following"),
            Self::Knowledge => write!(f, "knowledge"),
            Self::Reasoning => write!(f, "reasoning"),
        }
    }
}

/// One benchmark dimension of a capability vector.
///
/// Variants are declared in vector order: instruction-following first, then
/// knowledge, then reasoning. [`Benchmark::ALL`] preserves that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Benchmark {
    IfEval,
    Mmlu,
    MmluPro,
    ArcEasy,
    ArcChallenge,
    Hellaswag,
}

impl Benchmark {
    /// Every dimension in capability-vector order
    pub const ALL: [Self; 6] = [
        Self::IfEval,
        Self::Mmlu,
        Self::MmluPro,
        Self::ArcEasy,
        Self::ArcChallenge,
        Self::Hellaswag,
    ];

    /// The ability this benchmark contributes to
    #[must_use]
    pub fn ability(self) -> Ability {
        match self {
            Self::IfEval => Ability::InstructionFollowing,
            Self::Mmlu | Self::MmluPro => Ability::Knowledge,
            Self::ArcEasy | Self::ArcChallenge | Self::Hellaswag => Ability::Reasoning,
        }
    }

    /// Dataset label used in the published benchmark table
    #[must_use]
    pub fn dataset_label(self) -> &'static str {
        match self {
            Self::IfEval => "Instruction-Following Evaluation(IFeval)",
            Self::Mmlu => "MMLU",
            Self::MmluPro => "MMLU-pro",
            Self::ArcEasy => "ARC-easy",
            Self::ArcChallenge => "ARC-Challenge",
            Self::Hellaswag => "Hellaswag",
        }
    }

    /// Look up a benchmark by its dataset label (case-insensitive)
    #[must_use]
    pub fn from_dataset_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.dataset_label().eq_ignore_ascii_case(label))
    }

    /// Whether the published value is a 0-1 fraction rather than a percentage
    #[must_use]
    pub fn is_fractional(self) -> bool {
        matches!(self, Self::MmluPro)
    }
}

impl std::fmt::Display for Benchmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IfEval => write!(f, "IFEval"),
            Self::Mmlu => write!(f, "MMLU"),
            Self::MmluPro => write!(f, "MMLU-Pro"),
            Self::ArcEasy => write!(f, "ARC-Easy"),
            Self::ArcChallenge => write!(f, "ARC-Challenge"),
            Self::Hellaswag => write!(f, "HellaSwag"),
        }
    }
}

/// Which abilities a request weighs.
///
/// Field names follow the query parameters of the HTTP API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilitySelection {
    #[serde(default)]
    pub include_instruction_following: bool,
    #[serde(default)]
    pub include_knowledge: bool,
    #[serde(default)]
    pub include_reasoning: bool,
}

impl AbilitySelection {
    #[must_use]
    pub fn new(instruction_following: bool, knowledge: bool, reasoning: bool) -> Self {
        Self {
            include_instruction_following: instruction_following,
            include_knowledge: knowledge,
            include_reasoning: reasoning,
        }
    }

    /// Select every ability
    #[must_use]
    pub fn all() -> Self {
        Self::new(true, true, true)
    }

    #[must_use]
    pub fn includes(&self, ability: Ability) -> bool {
        match ability {
            Ability::InstructionFollowing => self.include_instruction_following,
            Ability::Knowledge => self.include_knowledge,
            Ability::Reasoning => self.include_reasoning,
        }
    }

    /// True when no ability is selected; every capability vector is then empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.include_instruction_following || self.include_knowledge || self.include_reasoning)
    }

    /// Selected dimensions in capability-vector order
    #[must_use]
    pub fn dimensions(&self) -> Vec<Benchmark> {
        Benchmark::ALL
            .into_iter()
            .filter(|b| self.includes(b.ability()))
            .collect()
    }
}

impl std::fmt::Display for AbilitySelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = [
            Ability::InstructionFollowing,
            Ability::Knowledge,
            Ability::Reasoning,
        ]
        .into_iter()
        .filter(|a| self.includes(*a))
        .map(|a| a.to_string())
        .collect();

        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join("+"))
        }
    }
}

/// Two selected model ids, strongest or discovered first.
///
/// An absent slot is an empty string so the pair always has two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPair {
    pub first: String,
    pub second: String,
}

impl ModelPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// True when both slots hold a model
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.first.is_empty() && !self.second.is_empty()
    }
}

impl std::fmt::Display for ModelPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn slot(s: &str) -> &str {
            if s.is_empty() {
                "-"
            } else {
                s
            }
        }
        write!(f, "({}, {})", slot(&self.first), slot(&self.second))
    }
}
