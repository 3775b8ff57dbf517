use survey_engine_types::{
    AnswerChoice, Completion, MultiSelectQuestion, Question, QuestionKind, SurveyDefinition,
};

use crate::storybook_session;

/// Pick between two and four toppings, "other" included.
pub fn pizza_toppings() -> SurveyDefinition {
    SurveyDefinition::new(
        storybook_session(),
        vec![Question::new(
            1,
            "What are your favorite pizza toppings?",
            QuestionKind::MultiSelect(
                MultiSelectQuestion::new(vec![
                    AnswerChoice::new(1, "Pepperoni"),
                    AnswerChoice::new(2, "Mushrooms"),
                    AnswerChoice::new(3, "Sausage"),
                    AnswerChoice::new(4, "Black Olives"),
                    AnswerChoice::new(5, "Sweetcorn"),
                    AnswerChoice::other(6, "Other"),
                ])
                .with_bounds(Some(2), Some(4)),
            ),
        )],
        vec![
            Completion::new(1, "Thanks for sharing your thoughts!")
                .with_text("Enjoy your next slice."),
        ],
    )
}
