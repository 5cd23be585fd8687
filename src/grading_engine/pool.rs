//! Answer-pool selection.
//!
//! Picks the subset of choices a learner sees and the order they appear in.
//! The generator is seeded only from the supplied [`Seed`], so the same
//! (choices, pool spec, seed) triple always yields the same sequence.
//!
//! ## Draw policy
//!
//! With a pool of `k` choices out of `n`, exactly one correct choice is drawn
//! unless there are too few incorrect choices to fill the rest of the pool, in
//! which case the shortfall is made up with further correct choices. The
//! correct draw happens before the incorrect draw and the combined set is then
//! shuffled; changing that RNG call order changes every seeded output.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::grading_engine::{
    error::SelectionError,
    models::{AnswerPoolSpec, Choice, Seed, SelectionResult},
};

/// Check the invariants every authored choice list must satisfy.
pub fn validate_choices(choices: &[Choice]) -> Result<(), SelectionError> {
    if choices.is_empty() {
        return Err(SelectionError::EmptyChoiceSet);
    }
    if !choices.iter().any(|c| c.correct) {
        return Err(SelectionError::NoCorrectChoice);
    }
    Ok(())
}

/// Number of correct choices to draw for a pool of `k`.
fn correct_draw_count(k: usize, incorrect: usize) -> usize {
    k.saturating_sub(incorrect).max(1)
}

/// Select and shuffle the choices to present.
///
/// Without an effective pool size every choice is returned, shuffled.
pub fn select(
    choices: &[Choice],
    spec: &AnswerPoolSpec,
    seed: Seed,
) -> Result<SelectionResult, SelectionError> {
    validate_choices(choices)?;

    let mut rng = StdRng::seed_from_u64(seed.0);

    let Some(k) = spec.effective_size(choices.len()) else {
        let mut all = choices.to_vec();
        all.shuffle(&mut rng);
        tracing::debug!(
            target: "capa_answer_pool",
            %seed,
            total = choices.len(),
            "No answer pool; shuffled all choices"
        );
        return Ok(SelectionResult { choices: all, pooled: false });
    };

    let (correct, incorrect): (Vec<&Choice>, Vec<&Choice>) =
        choices.iter().partition(|c| c.correct);

    let n_correct = correct_draw_count(k, incorrect.len());
    let n_incorrect = k - n_correct;

    let mut drawn: Vec<Choice> = correct
        .choose_multiple(&mut rng, n_correct)
        .map(|c| (*c).clone())
        .collect();
    drawn.extend(
        incorrect
            .choose_multiple(&mut rng, n_incorrect)
            .map(|c| (*c).clone()),
    );
    drawn.shuffle(&mut rng);

    tracing::debug!(
        target: "capa_answer_pool",
        %seed,
        total = choices.len(),
        pool_size = k,
        n_correct,
        n_incorrect,
        "Drew answer pool"
    );

    Ok(SelectionResult { choices: drawn, pooled: true })
}
