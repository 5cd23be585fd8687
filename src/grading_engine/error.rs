use thiserror::Error;

/// Authoring errors detected while selecting choices.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("response has no choices")]
    EmptyChoiceSet,
    #[error("response has no correct choice")]
    NoCorrectChoice,
}

#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("invalid response {response_id}: {source}")]
    InvalidResponse {
        response_id: String,
        #[source]
        source: SelectionError,
    },
    #[error("duplicate response id: {0}")]
    DuplicateResponseId(String),
    #[error("problem {0} has no responses")]
    NoResponses(String),
    #[error(transparent)]
    JsonParse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Problems with a learner's submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GradeError {
    #[error("no answer submitted for response {0}")]
    MissingAnswer(String),
    #[error("unknown choice: {0}")]
    UnknownChoice(String),
    #[error("choice {0} was not presented to the learner")]
    NotPresented(String),
    #[error("invalid answer shape: expected {expected}, got {actual} choices")]
    InvalidAnswerShape { expected: &'static str, actual: usize },
}

#[derive(Error, Debug)]
pub enum ProblemError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Grade(#[from] GradeError),
}
