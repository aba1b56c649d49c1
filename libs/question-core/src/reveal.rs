//! Question viewer state machine.
//!
//! `Idle -> Loading -> Displayed(unanswered) -> Displayed(answered) -> Idle`.
//! A displayed question accepts exactly one answer; the answered state can only
//! be left by loading another question or closing the viewer.

use crate::types::{LoadedQuestion, Question};

/// Whether the single attempt on a displayed question has been used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Unanswered,
    Answered { selected: usize },
}

/// Result of the accepted option click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    Correct,
    Incorrect,
}

/// Visual marks for one option after rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionMark {
    pub selected: bool,
    pub correct: bool,
    pub incorrect: bool,
}

/// Which optional panels are visible for the displayed question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelVisibility {
    pub options: bool,
    pub correct_answer: bool,
    pub rationale: bool,
}

/// A question currently shown in the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedQuestion {
    pub id: String,
    pub folder: String,
    pub question: Question,
    /// First authored correct letter, if any.
    pub correct_letter: Option<String>,
    reveal: RevealState,
}

impl DisplayedQuestion {
    fn new(id: String, loaded: LoadedQuestion) -> Self {
        let correct_letter = if loaded.question.has_options() {
            loaded.question.correct_answer.first().cloned()
        } else {
            None
        };
        Self {
            id,
            folder: loaded.folder,
            question: loaded.question,
            correct_letter,
            reveal: RevealState::Unanswered,
        }
    }

    pub fn reveal(&self) -> RevealState {
        self.reveal
    }

    pub fn is_answered(&self) -> bool {
        matches!(self.reveal, RevealState::Answered { .. })
    }

    /// Outcome of the accepted click, once answered.
    pub fn outcome(&self) -> Option<RevealOutcome> {
        match self.reveal {
            RevealState::Unanswered => None,
            RevealState::Answered { selected } => Some(self.outcome_for(selected)),
        }
    }

    fn outcome_for(&self, index: usize) -> RevealOutcome {
        let keyed = self
            .question
            .answer_options
            .get(index)
            .is_some_and(|o| self.question.is_key(&o.id));
        if keyed {
            RevealOutcome::Correct
        } else {
            RevealOutcome::Incorrect
        }
    }

    /// Per-option marks in display order.
    ///
    /// A wrong pick also marks every keyed option correct.
    pub fn marks(&self) -> Vec<OptionMark> {
        let options = &self.question.answer_options;
        match self.reveal {
            RevealState::Unanswered => vec![OptionMark::default(); options.len()],
            RevealState::Answered { selected } => {
                let missed = self.outcome_for(selected) == RevealOutcome::Incorrect;
                options
                    .iter()
                    .enumerate()
                    .map(|(i, option)| {
                        let keyed = self.question.is_key(&option.id);
                        let picked = i == selected;
                        OptionMark {
                            selected: picked,
                            correct: keyed && (picked || missed),
                            incorrect: picked && !keyed,
                        }
                    })
                    .collect()
            }
        }
    }

    pub fn panels(&self) -> PanelVisibility {
        if self.question.has_options() {
            let answered = self.is_answered();
            PanelVisibility {
                options: true,
                correct_answer: answered,
                rationale: answered,
            }
        } else {
            PanelVisibility {
                options: false,
                correct_answer: !self.question.correct_answer.is_empty(),
                rationale: self.question.rationale().is_some(),
            }
        }
    }
}

/// Phase of the question viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewerPhase {
    #[default]
    Idle,
    Loading,
    Displayed(Box<DisplayedQuestion>),
}

/// Explicit viewer state owned by the question viewer component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerState {
    phase: ViewerPhase,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &ViewerPhase {
        &self.phase
    }

    pub fn displayed(&self) -> Option<&DisplayedQuestion> {
        match &self.phase {
            ViewerPhase::Displayed(q) => Some(&**q),
            _ => None,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.displayed().is_some_and(DisplayedQuestion::is_answered)
    }

    /// A fetch has started.
    pub fn begin_load(&mut self) {
        self.phase = ViewerPhase::Loading;
    }

    /// A fetch succeeded; the question replaces whatever was shown.
    pub fn show(&mut self, id: impl Into<String>, loaded: LoadedQuestion) {
        self.phase = ViewerPhase::Displayed(Box::new(DisplayedQuestion::new(id.into(), loaded)));
    }

    /// A fetch failed.
    pub fn fail(&mut self) {
        self.phase = ViewerPhase::Idle;
    }

    /// Record a click on the option at `index`.
    ///
    /// Only the first click on an unanswered, displayed question is accepted;
    /// every other click returns `None` and leaves the state untouched.
    pub fn select(&mut self, index: usize) -> Option<RevealOutcome> {
        let ViewerPhase::Displayed(question) = &mut self.phase else {
            return None;
        };
        if question.is_answered() || index >= question.question.answer_options.len() {
            return None;
        }
        question.reveal = RevealState::Answered { selected: index };
        question.outcome()
    }

    pub fn close(&mut self) {
        self.phase = ViewerPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnswerOption;
    use pretty_assertions::assert_eq;

    fn option(id: &str) -> AnswerOption {
        AnswerOption {
            id: id.to_string(),
            content: format!("content {id}"),
        }
    }

    fn mcq(keys: &[&str]) -> LoadedQuestion {
        LoadedQuestion {
            question: Question {
                id: "q1".to_string(),
                stem: "Pick one".to_string(),
                answer_options: vec![option("id1"), option("id2"), option("id3")],
                keys: keys.iter().map(|k| k.to_string()).collect(),
                correct_answer: vec!["B".to_string()],
                rationale: Some("Because.".to_string()),
                ..Default::default()
            },
            folder: "math/algebra".to_string(),
        }
    }

    fn displayed(state: &ViewerState) -> &DisplayedQuestion {
        state.displayed().expect("question displayed")
    }

    #[test]
    fn test_starts_idle() {
        let state = ViewerState::new();
        assert_eq!(state.phase(), &ViewerPhase::Idle);
        assert!(!state.is_answered());
    }

    #[test]
    fn test_load_cycle() {
        let mut state = ViewerState::new();
        state.begin_load();
        assert_eq!(state.phase(), &ViewerPhase::Loading);

        state.show("q1", mcq(&["id2"]));
        let shown = state.displayed().unwrap();
        assert_eq!(shown.reveal(), RevealState::Unanswered);
        assert_eq!(shown.correct_letter.as_deref(), Some("B"));

        state.close();
        assert_eq!(state.phase(), &ViewerPhase::Idle);
    }

    #[test]
    fn test_failed_load_returns_to_idle() {
        let mut state = ViewerState::new();
        state.begin_load();
        state.fail();
        assert_eq!(state.phase(), &ViewerPhase::Idle);
    }

    #[test]
    fn test_wrong_pick_reveals_keyed_option() {
        let mut state = ViewerState::new();
        state.show("q1", mcq(&["id2"]));

        assert_eq!(state.select(0), Some(RevealOutcome::Incorrect));

        let q = displayed(&state);
        assert_eq!(
            q.marks(),
            vec![
                OptionMark {
                    selected: true,
                    correct: false,
                    incorrect: true,
                },
                OptionMark {
                    selected: false,
                    correct: true,
                    incorrect: false,
                },
                OptionMark::default(),
            ]
        );
        assert_eq!(
            q.panels(),
            PanelVisibility {
                options: true,
                correct_answer: true,
                rationale: true,
            }
        );
    }

    #[test]
    fn test_right_pick_marks_only_selection() {
        let mut state = ViewerState::new();
        state.show("q1", mcq(&["id2"]));

        assert_eq!(state.select(1), Some(RevealOutcome::Correct));
        assert_eq!(
            displayed(&state).marks(),
            vec![
                OptionMark::default(),
                OptionMark {
                    selected: true,
                    correct: true,
                    incorrect: false,
                },
                OptionMark::default(),
            ]
        );
    }

    #[test]
    fn test_second_click_is_ignored() {
        let mut state = ViewerState::new();
        state.show("q1", mcq(&["id2"]));
        state.select(0);
        let before = state.clone();

        assert_eq!(state.select(1), None);
        assert_eq!(state.select(0), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_clicks_outside_displayed_are_ignored() {
        let mut state = ViewerState::new();
        assert_eq!(state.select(0), None);
        state.begin_load();
        assert_eq!(state.select(0), None);
        assert_eq!(state.phase(), &ViewerPhase::Loading);
    }

    #[test]
    fn test_out_of_range_click_does_not_answer() {
        let mut state = ViewerState::new();
        state.show("q1", mcq(&["id2"]));
        assert_eq!(state.select(9), None);
        assert!(!state.is_answered());
        assert_eq!(state.select(1), Some(RevealOutcome::Correct));
    }

    #[test]
    fn test_reload_resets_answer() {
        let mut state = ViewerState::new();
        state.show("q1", mcq(&["id2"]));
        state.select(0);
        assert!(state.is_answered());

        state.show("q2", mcq(&["id1"]));
        assert!(!state.is_answered());
        assert_eq!(displayed(&state).id, "q2");
    }

    #[test]
    fn test_unanswered_mcq_hides_panels() {
        let mut state = ViewerState::new();
        state.show("q1", mcq(&["id2"]));
        let shown = state.displayed().unwrap();
        assert_eq!(
            shown.panels(),
            PanelVisibility {
                options: true,
                correct_answer: false,
                rationale: false,
            }
        );
    }

    #[test]
    fn test_informational_item_shows_panels_immediately() {
        let mut state = ViewerState::new();
        let loaded = LoadedQuestion {
            question: Question {
                correct_answer: vec!["42".to_string()],
                rationale: Some("<p>Why</p>".to_string()),
                ..Default::default()
            },
            folder: "misc".to_string(),
        };
        state.show("info", loaded);
        let shown = state.displayed().unwrap();
        assert_eq!(
            shown.panels(),
            PanelVisibility {
                options: false,
                correct_answer: true,
                rationale: true,
            }
        );
        assert_eq!(shown.correct_letter, None);
    }

    #[test]
    fn test_informational_item_without_answer_hides_panels() {
        let mut state = ViewerState::new();
        let loaded = LoadedQuestion {
            question: Question {
                rationale: Some(String::new()),
                ..Default::default()
            },
            folder: "misc".to_string(),
        };
        state.show("info", loaded);
        let shown = state.displayed().unwrap();
        assert_eq!(
            shown.panels(),
            PanelVisibility {
                options: false,
                correct_answer: false,
                rationale: false,
            }
        );
    }
}
