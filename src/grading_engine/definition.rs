//! Serde model of an authored problem and its loaders.
//!
//! A definition is plain data: nothing here shuffles or grades. Build a
//! [`Problem`](crate::grading_engine::problem::Problem) from it to do that.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::grading_engine::{
    error::DefinitionError,
    models::{Choice, PoolAttribute, TargetedFeedbackMode},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemDefinition {
    pub id: String,
    pub responses: Vec<ResponseDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseDefinition {
    MultipleChoice(MultipleChoiceDefinition),
    Checkbox(CheckboxDefinition),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MultipleChoiceDefinition {
    #[serde(default)]
    pub id: Option<String>,
    pub prompt: String,
    pub choices: Vec<ChoiceDefinition>,
    /// Integer or text; anything but a positive integer disables pooling.
    #[serde(default)]
    pub answer_pool: Option<PoolAttribute>,
    #[serde(default)]
    pub targeted_feedback: Option<TargetedFeedbackMode>,
    /// Explanation id -> feedback text shown after answering.
    #[serde(default)]
    pub targeted_feedback_set: BTreeMap<String, String>,
    /// Explanation id -> solution text.
    #[serde(default)]
    pub solutions: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckboxDefinition {
    #[serde(default)]
    pub id: Option<String>,
    pub prompt: String,
    pub choices: Vec<ChoiceDefinition>,
    #[serde(default)]
    pub solutions: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChoiceDefinition {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
    pub explanation_id: String,
}

/// Turn authored choices into [`Choice`]s, numbered in authored order.
pub fn build_choices(defs: &[ChoiceDefinition]) -> Vec<Choice> {
    defs.iter()
        .enumerate()
        .map(|(i, d)| Choice::new(i, d.text.clone(), d.correct, d.explanation_id.clone()))
        .collect()
}

impl ResponseDefinition {
    pub fn explicit_id(&self) -> Option<&str> {
        match self {
            ResponseDefinition::MultipleChoice(d) => d.id.as_deref(),
            ResponseDefinition::Checkbox(d) => d.id.as_deref(),
        }
    }
}

impl ProblemDefinition {
    /// Id of the response at `index`; authored ids win over the default.
    pub fn response_id(&self, index: usize) -> String {
        self.responses
            .get(index)
            .and_then(ResponseDefinition::explicit_id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}_{}", self.id, index))
    }

    pub fn from_json_str(s: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            error!(target: "capa_answer_pool", path = %path.display(), error = %e, "Failed to read problem definition");
            e
        })?;
        match Self::from_json_str(&raw) {
            Ok(def) => {
                info!(
                    target: "capa_answer_pool",
                    path = %path.display(),
                    problem = %def.id,
                    responses = def.responses.len(),
                    "Loaded problem definition"
                );
                Ok(def)
            }
            Err(e) => {
                error!(target: "capa_answer_pool", path = %path.display(), error = %e, "Failed to parse problem definition");
                Err(e)
            }
        }
    }
}
