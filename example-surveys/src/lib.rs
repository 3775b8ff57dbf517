//! Survey definitions shared by the engine tests and the terminal demos.

use survey_engine_types::Session;

pub mod invalid;
pub mod multi_select;
pub mod open_text;
pub mod rating;
pub mod single_select;
pub mod weather;

pub use invalid::{INVALID_QUESTION_TYPE_JSON, invalid_question_type};
pub use multi_select::pizza_toppings;
pub use open_text::site_kit_feedback;
pub use rating::{RATING_JSON, satisfaction_rating};
pub use single_select::satisfaction_select;
pub use weather::{rainy_day, weather};

/// The session every example survey is delivered for.
pub fn storybook_session() -> Session {
    Session::new("storybook_session", "token_12345")
}
