use survey_engine_types::{Completion, OpenTextQuestion, Question, QuestionKind, SurveyDefinition};

use crate::storybook_session;

pub fn site_kit_feedback() -> SurveyDefinition {
    SurveyDefinition::new(
        storybook_session(),
        vec![
            Question::new(
                1,
                "How satisfied are you with Site Kit?",
                QuestionKind::OpenText(OpenTextQuestion::with_placeholder("Write here")),
            )
            .with_subtitle("Based on your experience so far, tell us."),
        ],
        vec![Completion::new(1, "Thanks for sharing your thoughts!")],
    )
}
