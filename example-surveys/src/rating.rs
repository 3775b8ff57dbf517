use survey_engine_types::{
    AnswerChoice, ChoiceQuestion, Completion, Question, QuestionKind, SurveyDefinition,
    TriggerCondition,
};

use crate::storybook_session;

/// `satisfaction_rating()` as delivered by the survey endpoint.
pub const RATING_JSON: &str = r#"{
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
                        { "answer_ordinal": 2, "text": "Dissatisfied" },
                        { "answer_ordinal": 3, "text": "Neutral" },
                        { "answer_ordinal": 4, "text": "Satisfied" },
                        { "answer_ordinal": 5, "text": "Delighted" }
                    ]
                }
            }
        ],
        "completion": [
            {
                "completion_ordinal": 1,
                "completion_title": "Thanks for sharing your thoughts!",
                "completion_text": "Do you have a few minutes to tell us more?",
                "follow_up_text": "Let’s go",
                "follow_up_url": "https://example.com/survey",
                "trigger_condition": [ { "question_ordinal": 1, "answer_ordinal": [3, 4, 5] } ]
            },
            {
                "completion_ordinal": 2,
                "completion_title": "Sorry to hear that!",
                "completion_text": "We are working hard to improve Site Kit.",
                "trigger_condition": [ { "question_ordinal": 1, "answer_ordinal": [1, 2] } ]
            }
        ]
    }
}"#;

/// The five-point scale used by every rating question in this crate.
pub fn five_point_scale() -> ChoiceQuestion {
    ChoiceQuestion::new(vec![
        AnswerChoice::new(1, "Unhappy"),
        AnswerChoice::new(2, "Dissatisfied"),
        AnswerChoice::new(3, "Neutral"),
        AnswerChoice::new(4, "Satisfied"),
        AnswerChoice::new(5, "Delighted"),
    ])
}

/// One rating question. Neutral or better leads to a follow-up invitation;
/// anything lower to an apology. There is no fallback completion.
pub fn satisfaction_rating() -> SurveyDefinition {
    SurveyDefinition::new(
        storybook_session(),
        vec![Question::new(
            1,
            "How satisfied are you with Site Kit?",
            QuestionKind::Rating(five_point_scale()),
        )],
        vec![
            Completion::new(1, "Thanks for sharing your thoughts!")
                .with_text("Do you have a few minutes to tell us more?")
                .with_follow_up("Let’s go", "https://example.com/survey")
                .with_trigger(TriggerCondition::any_of(1, [3, 4, 5])),
            Completion::new(2, "Sorry to hear that!")
                .with_text("We are working hard to improve Site Kit.")
                .with_trigger(TriggerCondition::any_of(1, [1, 2])),
        ],
    )
}
