use survey_engine_types::{
    Completion, OpenTextQuestion, Question, QuestionKind, SurveyDefinition,
};

use crate::rating::five_point_scale;
use crate::storybook_session;

/// A payload whose second question has a type the engine does not know.
pub const INVALID_QUESTION_TYPE_JSON: &str = r#"{
    "session": { "session_id": "storybook_session", "session_token": "token_12345" },
    "survey_payload": {
        "question": [
            {
                "question_ordinal": 1,
                "question_type": "rating",
                "question_text": "How satisfied are you with Site Kit?",
                "question": {
                    "answer_choice": [
                        { "answer_ordinal": 1, "text": "Unhappy" },
                        { "answer_ordinal": 5, "text": "Delighted" }
                    ]
                }
            },
            {
                "question_ordinal": 2,
                "question_type": "not_a_real_question_type",
                "question_text": "Which of these is not a question?",
                "question": {}
            }
        ],
        "completion": [
            { "completion_ordinal": 1, "completion_title": "Thanks for sharing your thoughts!" }
        ]
    }
}"#;

/// A supported question followed by an unknown one.
pub fn invalid_question_type() -> SurveyDefinition {
    SurveyDefinition::new(
        storybook_session(),
        vec![
            Question::new(
                1,
                "How satisfied are you with Site Kit?",
                QuestionKind::Rating(five_point_scale()),
            ),
            Question::new(
                2,
                "Which of these is not a question?",
                QuestionKind::Unsupported("not_a_real_question_type".to_string()),
            ),
            Question::new(
                3,
                "Anything else?",
                QuestionKind::OpenText(OpenTextQuestion::new()),
            ),
        ],
        vec![Completion::new(1, "Thanks for sharing your thoughts!")],
    )
}
