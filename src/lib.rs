//! # capa_answer_pool
//!
//! Deterministic answer-pool selection and grading for multiple-choice
//! assessment problems.
//!
//! A multiple-choice response may limit how many of its authored choices a
//! learner sees (an *answer pool*) and may attach targeted feedback to each
//! choice through an *explanation id*. Given a seed, the engine picks and
//! shuffles the presented choices reproducibly, keeps every choice linked to
//! its explanation, and grades the learner's answer against what was shown.
//!
//! ## How it works
//!
//! 1. Load a [`ProblemDefinition`] from JSON (or build one in code).
//! 2. Validate it into a [`Problem`] with [`Problem::from_definition`].
//! 3. Call [`Problem::render`] / [`Problem::grade`] with the instance's
//!    [`Seed`]. Response `i` is seeded with `seed.for_position(i)`, so
//!    responses never disturb each other's draws.
//!
//! The bare selector is available as [`select`] for callers that manage their
//! own choice lists.
//!
//! ## Quick start
//!
//! ```rust
//! use capa_answer_pool::{select, AnswerPoolSpec, Choice, Seed};
//!
//! let choices = vec![
//!     Choice::new(0, "wrong-1", false, "feedback1"),
//!     Choice::new(1, "wrong-2", false, "feedback2"),
//!     Choice::new(2, "correct-1", true, "feedbackC"),
//!     Choice::new(3, "wrong-3", false, "feedback3"),
//! ];
//!
//! let shown = select(&choices, &AnswerPoolSpec::with_size(3), Seed(723)).unwrap();
//! assert_eq!(shown.len(), 3);
//! assert_eq!(shown.correct_choices().count(), 1);
//!
//! // Same seed, same pool.
//! assert_eq!(shown, select(&choices, &AnswerPoolSpec::with_size(3), Seed(723)).unwrap());
//! ```

pub mod grading_engine;

// Convenience re-exports so callers can use `capa_answer_pool::select`
// directly without reaching into `grading_engine::`.
pub use grading_engine::{
    select, AnswerPoolSpec, CheckboxResponse, Choice, ChoiceDefinition, DefinitionError,
    Explanation, FeedbackSet, Grade, GradeError, MultipleChoiceResponse, PoolAttribute, Problem,
    ProblemDefinition, ProblemError, ProblemGrade, RenderedProblem, RenderedResponse,
    ResponseDefinition, ResponseType, Seed, SelectionError, SelectionResult, StudentAnswer,
    StudentAnswers, TargetedFeedbackMode,
};
