use std::fmt;
use std::num::NonZeroUsize;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Seeds
// ---------------------------------------------------------------------------

/// Seed of one problem instance. Owned by the caller and threaded explicitly
/// through every selection call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(pub u64);

impl Seed {
    /// Seed for the response at `position` inside a problem.
    ///
    /// Position 0 keeps the problem seed as-is, so a single-response problem
    /// selects exactly like a bare `select` call with the same seed.
    pub const fn for_position(self, position: usize) -> Seed {
        Seed(self.0 ^ (position as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed(value)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Choices
// ---------------------------------------------------------------------------

/// One selectable answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Answer key submitted by the learner, `choice_<display_order>`.
    pub name: String,
    pub text: String,
    pub correct: bool,
    /// Links the choice to its targeted feedback / solution text.
    pub explanation_id: String,
    /// Index in the authored list.
    pub display_order: usize,
}

impl Choice {
    pub fn new(
        display_order: usize,
        text: impl Into<String>,
        correct: bool,
        explanation_id: impl Into<String>,
    ) -> Self {
        Choice {
            name: choice_name(display_order),
            text: text.into(),
            correct,
            explanation_id: explanation_id.into(),
            display_order,
        }
    }
}

/// Learner-facing key for the choice at `display_order`.
pub fn choice_name(display_order: usize) -> String {
    format!("choice_{display_order}")
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

// ---------------------------------------------------------------------------
// Answer pool
// ---------------------------------------------------------------------------

/// Raw `answer_pool` attribute as authored: an integer or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PoolAttribute {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for PoolAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolAttribute::Int(n)   => write!(f, "{n}"),
            PoolAttribute::Float(x) => write!(f, "{x}"),
            PoolAttribute::Text(s)  => write!(f, "{s}"),
        }
    }
}

/// How many choices to present. `None` means no pooling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerPoolSpec {
    pub pool_size: Option<NonZeroUsize>,
}

impl AnswerPoolSpec {
    /// No pooling: present every choice.
    pub const UNSET: AnswerPoolSpec = AnswerPoolSpec { pool_size: None };

    pub fn with_size(size: usize) -> Self {
        AnswerPoolSpec { pool_size: NonZeroUsize::new(size) }
    }

    /// Interpret an authored attribute. Anything that is not a positive
    /// integer falls back to "no pooling".
    pub fn from_attribute(attr: Option<&PoolAttribute>) -> Self {
        let Some(attr) = attr else {
            return AnswerPoolSpec::UNSET;
        };
        let parsed = match attr {
            PoolAttribute::Int(n) => usize::try_from(*n).ok(),
            PoolAttribute::Float(_) => None,
            PoolAttribute::Text(s) => s.trim().parse::<usize>().ok(),
        };
        match parsed {
            Some(n) => AnswerPoolSpec::with_size(n),
            None => {
                tracing::warn!(
                    target: "capa_answer_pool",
                    attribute = %attr,
                    "Ignoring invalid answer_pool value; presenting all choices"
                );
                AnswerPoolSpec::UNSET
            }
        }
    }

    /// Pool size that actually limits `total` choices, if any.
    pub fn effective_size(&self, total: usize) -> Option<usize> {
        self.pool_size.map(NonZeroUsize::get).filter(|&k| k < total)
    }
}

// ---------------------------------------------------------------------------
// Selection output
// ---------------------------------------------------------------------------

/// Choices to present for one response, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub choices: Vec<Choice>,
    /// True when an answer pool limited the presented subset.
    pub pooled: bool,
}

impl SelectionResult {
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.name == name)
    }

    pub fn correct_choices(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter().filter(|c| c.correct)
    }

    /// Choice texts in display order.
    pub fn texts(&self) -> Vec<&str> {
        self.choices.iter().map(|c| c.text.as_str()).collect()
    }
}

// ---------------------------------------------------------------------------
// Feedback modes and learner input
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetedFeedbackMode {
    /// Feedback for the learner's own choice only.
    #[default]
    Default,
    /// Also reveal the explanation of every presented correct choice.
    AlwaysShowCorrectChoiceExplanations,
}

/// A learner's submission for one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentAnswer {
    Single(String),
    Multiple(Vec<String>),
}

impl StudentAnswer {
    /// Every choice name in the submission.
    pub fn names(&self) -> Vec<&str> {
        match self {
            StudentAnswer::Single(name) => vec![name.as_str()],
            StudentAnswer::Multiple(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for StudentAnswer {
    fn from(name: &str) -> Self {
        StudentAnswer::Single(name.to_string())
    }
}
