//! Response types behind a single capability interface.
//!
//! | Type                     | Selection                         | Grading |
//! |--------------------------|-----------------------------------|---------|
//! | [`MultipleChoiceResponse`] | answer pool / shuffle / authored | one choice, must be correct |
//! | [`CheckboxResponse`]     | authored order                    | selected set == correct set |

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grading_engine::{
    definition::{build_choices, CheckboxDefinition, MultipleChoiceDefinition},
    error::{GradeError, SelectionError},
    feedback::{self, Explanation, FeedbackSet},
    models::{AnswerPoolSpec, Choice, Seed, SelectionResult, StudentAnswer, TargetedFeedbackMode},
    pool,
};

/// Outcome of grading one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub response_id: String,
    pub correct: bool,
    pub selected: Vec<String>,
}

/// A choice as sent to the learner: no correctness, no explanation id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedChoice {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedResponse {
    pub response_id: String,
    pub prompt: String,
    pub choices: Vec<RenderedChoice>,
    pub selected: Vec<String>,
    pub feedback: Vec<Explanation>,
    pub solutions: Vec<Explanation>,
}

pub trait ResponseType: fmt::Debug + Send + Sync {
    fn id(&self) -> &str;

    fn prompt(&self) -> &str;

    /// Authored choices in authored order.
    fn choices(&self) -> &[Choice];

    fn validate(&self) -> Result<(), SelectionError>;

    /// Choices to present for a problem instance seeded with `seed`.
    fn select_choices(&self, seed: Seed) -> Result<SelectionResult, SelectionError>;

    fn grade(&self, selection: &SelectionResult, answer: &StudentAnswer) -> Result<Grade, GradeError>;

    fn render(
        &self,
        selection: &SelectionResult,
        answer: Option<&StudentAnswer>,
        show_solutions: bool,
    ) -> RenderedResponse;
}

/// Resolve submitted names against the presented selection.
fn resolve<'a>(
    authored: &[Choice],
    selection: &'a SelectionResult,
    answer: &StudentAnswer,
) -> Result<Vec<&'a Choice>, GradeError> {
    answer
        .names()
        .into_iter()
        .map(|name| match selection.get(name) {
            Some(choice) => Ok(choice),
            None if authored.iter().any(|c| c.name == name) => {
                Err(GradeError::NotPresented(name.to_string()))
            }
            None => Err(GradeError::UnknownChoice(name.to_string())),
        })
        .collect()
}

fn rendered_choices(selection: &SelectionResult) -> Vec<RenderedChoice> {
    selection
        .iter()
        .map(|c| RenderedChoice { name: c.name.clone(), text: c.text.clone() })
        .collect()
}

fn selected_names(answer: Option<&StudentAnswer>) -> Vec<String> {
    answer
        .map(|a| a.names().into_iter().map(str::to_string).collect())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Multiple choice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct MultipleChoiceResponse {
    id: String,
    prompt: String,
    choices: Vec<Choice>,
    pool: AnswerPoolSpec,
    /// An `answer_pool` attribute was authored, valid or not.
    pool_requested: bool,
    targeted_feedback: Option<TargetedFeedbackMode>,
    feedback: FeedbackSet,
    solutions: FeedbackSet,
}

impl MultipleChoiceResponse {
    pub fn from_definition(id: impl Into<String>, def: &MultipleChoiceDefinition) -> Self {
        MultipleChoiceResponse {
            id: id.into(),
            prompt: def.prompt.clone(),
            choices: build_choices(&def.choices),
            pool: AnswerPoolSpec::from_attribute(def.answer_pool.as_ref()),
            pool_requested: def.answer_pool.is_some(),
            targeted_feedback: def.targeted_feedback,
            feedback: FeedbackSet::new(def.targeted_feedback_set.clone()),
            solutions: FeedbackSet::new(def.solutions.clone()),
        }
    }

    pub fn pool(&self) -> AnswerPoolSpec {
        self.pool
    }

    /// Plain multiple choice keeps authored order; pools and targeted
    /// feedback always shuffle.
    pub fn requires_shuffle(&self) -> bool {
        self.pool_requested || self.targeted_feedback.is_some()
    }
}

impl ResponseType for MultipleChoiceResponse {
    fn id(&self) -> &str {
        &self.id
    }

    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn choices(&self) -> &[Choice] {
        &self.choices
    }

    fn validate(&self) -> Result<(), SelectionError> {
        pool::validate_choices(&self.choices)
    }

    fn select_choices(&self, seed: Seed) -> Result<SelectionResult, SelectionError> {
        if self.requires_shuffle() {
            return pool::select(&self.choices, &self.pool, seed);
        }
        self.validate()?;
        Ok(SelectionResult { choices: self.choices.clone(), pooled: false })
    }

    fn grade(&self, selection: &SelectionResult, answer: &StudentAnswer) -> Result<Grade, GradeError> {
        let picked = resolve(&self.choices, selection, answer)?;
        let [choice] = picked.as_slice() else {
            return Err(GradeError::InvalidAnswerShape { expected: "exactly one", actual: picked.len() });
        };
        Ok(Grade {
            response_id: self.id.clone(),
            correct: choice.correct,
            selected: vec![choice.name.clone()],
        })
    }

    fn render(
        &self,
        selection: &SelectionResult,
        answer: Option<&StudentAnswer>,
        show_solutions: bool,
    ) -> RenderedResponse {
        let selected = selected_names(answer);
        // Feedback only for a well-formed single answer; `grade` rejects the rest.
        let feedback = match (self.targeted_feedback, selected.as_slice()) {
            (Some(mode), [name]) => {
                feedback::targeted_feedback(mode, &self.feedback, selection, &[name.as_str()])
            }
            _ => Vec::new(),
        };
        let solutions = if show_solutions {
            feedback::solutions(&self.solutions, selection)
        } else {
            Vec::new()
        };
        RenderedResponse {
            response_id: self.id.clone(),
            prompt: self.prompt.clone(),
            choices: rendered_choices(selection),
            selected,
            feedback,
            solutions,
        }
    }
}

// ---------------------------------------------------------------------------
// Checkbox
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CheckboxResponse {
    id: String,
    prompt: String,
    choices: Vec<Choice>,
    solutions: FeedbackSet,
}

impl CheckboxResponse {
    pub fn from_definition(id: impl Into<String>, def: &CheckboxDefinition) -> Self {
        CheckboxResponse {
            id: id.into(),
            prompt: def.prompt.clone(),
            choices: build_choices(&def.choices),
            solutions: FeedbackSet::new(def.solutions.clone()),
        }
    }
}

impl ResponseType for CheckboxResponse {
    fn id(&self) -> &str {
        &self.id
    }

    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn choices(&self) -> &[Choice] {
        &self.choices
    }

    fn validate(&self) -> Result<(), SelectionError> {
        pool::validate_choices(&self.choices)
    }

    fn select_choices(&self, _seed: Seed) -> Result<SelectionResult, SelectionError> {
        self.validate()?;
        Ok(SelectionResult { choices: self.choices.clone(), pooled: false })
    }

    fn grade(&self, selection: &SelectionResult, answer: &StudentAnswer) -> Result<Grade, GradeError> {
        let mut picked = resolve(&self.choices, selection, answer)?;
        let mut seen = BTreeSet::new();
        picked.retain(|c| seen.insert(c.display_order));
        let expected: BTreeSet<usize> = selection.correct_choices().map(|c| c.display_order).collect();
        Ok(Grade {
            response_id: self.id.clone(),
            correct: seen == expected,
            selected: picked.iter().map(|c| c.name.clone()).collect(),
        })
    }

    fn render(
        &self,
        selection: &SelectionResult,
        answer: Option<&StudentAnswer>,
        show_solutions: bool,
    ) -> RenderedResponse {
        RenderedResponse {
            response_id: self.id.clone(),
            prompt: self.prompt.clone(),
            choices: rendered_choices(selection),
            selected: selected_names(answer),
            feedback: Vec::new(),
            solutions: if show_solutions {
                feedback::solutions(&self.solutions, selection)
            } else {
                Vec::new()
            },
        }
    }
}
