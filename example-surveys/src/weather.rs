use survey_engine_types::{
    Completion, OpenTextQuestion, Question, QuestionKind, SurveyDefinition, TriggerCondition,
};

use crate::rating::five_point_scale;
use crate::storybook_session;

/// Four rating questions. Loving rain leads to its own completion; everything
/// else ends on the fallback.
pub fn weather() -> SurveyDefinition {
    let rating = |ordinal, text: &str| {
        Question::new(ordinal, text, QuestionKind::Rating(five_point_scale()))
    };

    SurveyDefinition::new(
        storybook_session(),
        vec![
            rating(1, "How do you feel about rain?"),
            rating(2, "How do you feel about sunny days?"),
            rating(3, "How do you feel about overcast skies?"),
            rating(4, "How do you feel about the weather today?"),
        ],
        vec![
            Completion::new(1, "You answered positively!")
                .with_text("Rain lovers are rare. Tell us more?")
                .with_follow_up("Sure", "https://example.com/rain")
                .with_trigger(TriggerCondition::new(1, 5)),
            Completion::new(2, "Thanks for answering!"),
        ],
    )
}

/// The follow-up about rain is only asked when rain was rated Satisfied or better.
pub fn rainy_day() -> SurveyDefinition {
    SurveyDefinition::new(
        storybook_session(),
        vec![
            Question::new(
                1,
                "How do you feel about rain?",
                QuestionKind::Rating(five_point_scale()),
            ),
            Question::new(
                2,
                "What do you like about rain?",
                QuestionKind::OpenText(OpenTextQuestion::new()),
            )
            .with_trigger(TriggerCondition::any_of(1, [4, 5])),
            Question::new(
                3,
                "How do you feel about sunny days?",
                QuestionKind::Rating(five_point_scale()),
            ),
        ],
        vec![Completion::new(1, "Thanks for answering!")],
    )
}
