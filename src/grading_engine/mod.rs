//! Core grading engine: answer-pool selection, response types and grading.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: seeds, choices, pool specs, selections, learner answers |
//! | `pool`       | Seeded answer-pool selection and shuffling |
//! | `definition` | Serde model of authored problems plus JSON loaders |
//! | `feedback`   | Targeted feedback and solution lookup by explanation id |
//! | `response`   | `ResponseType` interface with multiple-choice and checkbox variants |
//! | `problem`    | Validated problem instances: select, render and grade per seed |
//! | `error`      | Error enums for selection, definitions and grading |

pub mod definition;
pub mod error;
pub mod feedback;
pub mod models;
pub mod pool;
pub mod problem;
pub mod response;

// Re-export the public API surface so callers can use
// `grading_engine::select` without reaching into sub-modules.
pub use definition::{ChoiceDefinition, ProblemDefinition, ResponseDefinition};
pub use error::{DefinitionError, GradeError, ProblemError, SelectionError};
pub use feedback::{Explanation, FeedbackSet};
pub use models::{
    AnswerPoolSpec, Choice, PoolAttribute, Seed, SelectionResult, StudentAnswer,
    TargetedFeedbackMode,
};
pub use pool::select;
pub use problem::{Problem, ProblemGrade, RenderedProblem, StudentAnswers};
pub use response::{CheckboxResponse, Grade, MultipleChoiceResponse, RenderedResponse, ResponseType};
