use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::grading_engine::{
    definition::{ProblemDefinition, ResponseDefinition},
    error::{DefinitionError, GradeError, ProblemError, SelectionError},
    models::{Seed, SelectionResult, StudentAnswer},
    response::{CheckboxResponse, Grade, MultipleChoiceResponse, RenderedResponse, ResponseType},
};

/// Learner submissions keyed by response id.
pub type StudentAnswers = BTreeMap<String, StudentAnswer>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedProblem {
    pub problem_id: String,
    pub seed: Seed,
    pub responses: Vec<RenderedResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemGrade {
    pub problem_id: String,
    pub grades: Vec<Grade>,
    pub score: usize,
    pub max_score: usize,
}

/// A validated problem. Holds no seed; every call takes one.
#[derive(Debug)]
pub struct Problem {
    id: String,
    responses: Vec<Box<dyn ResponseType>>,
}

impl Problem {
    pub fn from_definition(def: &ProblemDefinition) -> Result<Self, DefinitionError> {
        if def.responses.is_empty() {
            return Err(DefinitionError::NoResponses(def.id.clone()));
        }

        let mut seen = HashSet::new();
        let mut responses: Vec<Box<dyn ResponseType>> = Vec::with_capacity(def.responses.len());
        for (index, rdef) in def.responses.iter().enumerate() {
            let response_id = def.response_id(index);
            if !seen.insert(response_id.clone()) {
                return Err(DefinitionError::DuplicateResponseId(response_id));
            }
            let response: Box<dyn ResponseType> = match rdef {
                ResponseDefinition::MultipleChoice(d) => {
                    Box::new(MultipleChoiceResponse::from_definition(response_id.clone(), d))
                }
                ResponseDefinition::Checkbox(d) => {
                    Box::new(CheckboxResponse::from_definition(response_id.clone(), d))
                }
            };
            response
                .validate()
                .map_err(|source| DefinitionError::InvalidResponse { response_id, source })?;
            responses.push(response);
        }

        Ok(Problem { id: def.id.clone(), responses })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn responses(&self) -> &[Box<dyn ResponseType>] {
        &self.responses
    }

    /// One selection per response, each seeded from `(seed, position)` so a
    /// response never depends on how many draws the ones before it made.
    #[instrument(level = "debug", skip(self), fields(problem = %self.id))]
    pub fn select_all(&self, seed: Seed) -> Result<Vec<SelectionResult>, SelectionError> {
        self.responses
            .iter()
            .enumerate()
            .map(|(i, r)| r.select_choices(seed.for_position(i)))
            .collect()
    }

    pub fn render(
        &self,
        seed: Seed,
        answers: &StudentAnswers,
        show_solutions: bool,
    ) -> Result<RenderedProblem, ProblemError> {
        let selections = self.select_all(seed)?;
        let responses = self
            .responses
            .iter()
            .zip(&selections)
            .map(|(r, sel)| r.render(sel, answers.get(r.id()), show_solutions))
            .collect();
        Ok(RenderedProblem { problem_id: self.id.clone(), seed, responses })
    }

    /// Grade every response; all of them must be answered.
    pub fn grade(&self, seed: Seed, answers: &StudentAnswers) -> Result<ProblemGrade, ProblemError> {
        let selections = self.select_all(seed)?;
        let mut grades = Vec::with_capacity(self.responses.len());
        for (response, selection) in self.responses.iter().zip(&selections) {
            let answer = answers
                .get(response.id())
                .ok_or_else(|| GradeError::MissingAnswer(response.id().to_string()))?;
            grades.push(response.grade(selection, answer)?);
        }
        let score = grades.iter().filter(|g| g.correct).count();
        debug!(target: "capa_answer_pool", problem = %self.id, %seed, score, max_score = grades.len(), "Graded problem");
        Ok(ProblemGrade {
            problem_id: self.id.clone(),
            max_score: grades.len(),
            score,
            grades,
        })
    }
}
