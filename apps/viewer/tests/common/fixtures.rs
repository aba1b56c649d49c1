//! Question fixtures.

use question_core::{AnswerOption, Question};

/// Two-option question whose second option (`id2`) is the key.
pub fn two_option_question() -> Question {
    Question {
        id: "q-1".to_string(),
        stem: "What is <math><mn>1</mn><mo>+</mo><mn>1</mn></math>?".to_string(),
        kind: Some("mcq".to_string()),
        answer_options: vec![
            AnswerOption {
                id: "id1".to_string(),
                content: "1".to_string(),
            },
            AnswerOption {
                id: "id2".to_string(),
                content: "2".to_string(),
            },
        ],
        keys: vec!["id2".to_string()],
        correct_answer: vec!["B".to_string()],
        rationale: Some("<p>One plus one is two.</p>".to_string()),
    }
}

/// Informational item: no options, an authored answer and no rationale.
pub fn no_option_question() -> Question {
    Question {
        id: "q-2".to_string(),
        stem: "Read the passage.".to_string(),
        kind: Some("spr".to_string()),
        correct_answer: vec!["C".to_string()],
        ..Default::default()
    }
}

/// Question with the given stem text and one keyed option.
pub fn stem_question(stem: &str) -> Question {
    Question {
        stem: stem.to_string(),
        answer_options: vec![AnswerOption {
            id: "only".to_string(),
            content: "yes".to_string(),
        }],
        keys: vec!["only".to_string()],
        correct_answer: vec!["A".to_string()],
        ..Default::default()
    }
}
