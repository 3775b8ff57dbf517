use survey_engine_types::{
    AnswerChoice, ChoiceQuestion, Completion, Question, QuestionKind, SurveyDefinition,
};

use crate::storybook_session;

/// A single select with an "other" write-in.
pub fn satisfaction_select() -> SurveyDefinition {
    SurveyDefinition::new(
        storybook_session(),
        vec![Question::new(
            1,
            "Based on your experience so far, how satisfied are you with Site Kit?",
            QuestionKind::SingleSelect(ChoiceQuestion::new(vec![
                AnswerChoice::new(1, "Unhappy"),
                AnswerChoice::new(2, "Dissatisfied"),
                AnswerChoice::new(3, "Neutral"),
                AnswerChoice::new(4, "Satisfied"),
                AnswerChoice::new(5, "Delighted"),
                AnswerChoice::other(6, "Other"),
            ])),
        )],
        vec![Completion::new(1, "Thanks for sharing your thoughts!")],
    )
}
