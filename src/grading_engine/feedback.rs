//! Explanation lookup for targeted feedback and solutions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::grading_engine::models::{SelectionResult, TargetedFeedbackMode};

/// Explanation id -> text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackSet(BTreeMap<String, String>);

impl FeedbackSet {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        FeedbackSet(entries)
    }

    pub fn get(&self, explanation_id: &str) -> Option<&str> {
        self.0.get(explanation_id).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for FeedbackSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        FeedbackSet(iter.into_iter().collect())
    }
}

/// One explanation shown to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub explanation_id: String,
    pub text: String,
}

/// Targeted feedback to show once the learner picked `selected`.
///
/// The learner's own choice comes first. In
/// [`TargetedFeedbackMode::AlwaysShowCorrectChoiceExplanations`] the feedback
/// of every presented correct choice follows, each id at most once.
pub fn targeted_feedback(
    mode: TargetedFeedbackMode,
    feedback: &FeedbackSet,
    selection: &SelectionResult,
    selected: &[&str],
) -> Vec<Explanation> {
    let mut ids: Vec<&str> = selected
        .iter()
        .filter_map(|name| selection.get(name))
        .map(|c| c.explanation_id.as_str())
        .collect();

    if mode == TargetedFeedbackMode::AlwaysShowCorrectChoiceExplanations {
        ids.extend(selection.correct_choices().map(|c| c.explanation_id.as_str()));
    }

    lookup_unique(feedback, ids)
}

/// Solutions for the correct choices that were actually presented.
///
/// A pooled selection that drew only `correct-2` reveals only its solution.
pub fn solutions(solutions: &FeedbackSet, selection: &SelectionResult) -> Vec<Explanation> {
    lookup_unique(
        solutions,
        selection.correct_choices().map(|c| c.explanation_id.as_str()),
    )
}

fn lookup_unique<'a>(set: &FeedbackSet, ids: impl IntoIterator<Item = &'a str>) -> Vec<Explanation> {
    let mut out: Vec<Explanation> = Vec::new();
    for id in ids {
        if out.iter().any(|e| e.explanation_id == id) {
            continue;
        }
        // Choices without authored feedback are silently skipped.
        if let Some(text) = set.get(id) {
            out.push(Explanation { explanation_id: id.to_string(), text: text.to_string() });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading_engine::models::Choice;

    fn selection() -> SelectionResult {
        SelectionResult {
            choices: vec![
                Choice::new(3, "wrong-3", false, "feedback3"),
                Choice::new(0, "wrong-1", false, "feedback1"),
                Choice::new(2, "correct-1", true, "feedbackC"),
            ],
            pooled: true,
        }
    }

    fn feedback() -> FeedbackSet {
        [
            ("feedback1", "This is the 1st WRONG solution"),
            ("feedback2", "This is the 2nd WRONG solution"),
            ("feedback3", "This is the 3rd WRONG solution"),
            ("feedbackC", "Feedback on your correct solution..."),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn default_mode_shows_only_the_selected_choice() {
        let shown = targeted_feedback(TargetedFeedbackMode::Default, &feedback(), &selection(), &["choice_3"]);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].text, "This is the 3rd WRONG solution");
    }

    #[test]
    fn always_show_mode_appends_correct_explanations_once() {
        let mode = TargetedFeedbackMode::AlwaysShowCorrectChoiceExplanations;
        let wrong = targeted_feedback(mode, &feedback(), &selection(), &["choice_0"]);
        let ids: Vec<&str> = wrong.iter().map(|e| e.explanation_id.as_str()).collect();
        assert_eq!(ids, vec!["feedback1", "feedbackC"]);

        let right = targeted_feedback(mode, &feedback(), &selection(), &["choice_2"]);
        assert_eq!(right.len(), 1);
        assert_eq!(right[0].explanation_id, "feedbackC");
    }

    #[test]
    fn unpresented_choices_get_no_feedback() {
        let shown = targeted_feedback(TargetedFeedbackMode::Default, &feedback(), &selection(), &["choice_1"]);
        assert!(shown.is_empty());
    }

    #[test]
    fn solutions_follow_the_presented_correct_choice() {
        let sols: FeedbackSet = [("feedbackC", "solution C"), ("other", "solution X")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let shown = solutions(&sols, &selection());
        assert_eq!(shown, vec![Explanation { explanation_id: "feedbackC".into(), text: "solution C".into() }]);
    }
}
