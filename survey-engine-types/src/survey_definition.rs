use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Completion, DefinitionError, Question, QuestionKind, Session};

/// Everything delivered for one survey session: the questions to ask and the
/// completions to choose from once they are answered.
///
/// Immutable for the lifetime of a mounted survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireSurvey", into = "WireSurvey")]
pub struct SurveyDefinition {
    pub session: Session,

    /// Questions in definition order.
    pub questions: Vec<Question>,

    /// Completions in definition order.
    pub completions: Vec<Completion>,
}

impl SurveyDefinition {
    /// Create a new survey definition.
    pub fn new(session: Session, questions: Vec<Question>, completions: Vec<Completion>) -> Self {
        Self {
            session,
            questions,
            completions,
        }
    }

    /// Parse a definition from the survey endpoint's JSON.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize back to the survey endpoint's JSON.
    pub fn to_json(&self) -> Result<String, DefinitionError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Get the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the completions.
    pub fn completions(&self) -> &[Completion] {
        &self.completions
    }

    /// Look up a question by ordinal.
    pub fn question(&self, ordinal: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.ordinal() == ordinal)
    }

    /// Look up a completion by ordinal.
    pub fn completion(&self, ordinal: u32) -> Option<&Completion> {
        self.completions
            .iter()
            .find(|c| c.completion_ordinal == ordinal)
    }

    /// The first question whose type is not recognized, if any.
    pub fn first_unsupported(&self) -> Option<&Question> {
        self.questions.iter().find(|q| !q.is_supported())
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the survey has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Check the definition for structural problems.
    ///
    /// Unsupported question types pass: rendering nothing for them is the
    /// engine's policy, not a definition error.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.ordinal()) {
                return Err(DefinitionError::DuplicateQuestion(question.ordinal()));
            }

            let choices = question.kind().choices();
            let needs_choices = matches!(
                question.kind(),
                QuestionKind::Rating(_) | QuestionKind::SingleSelect(_) | QuestionKind::MultiSelect(_)
            );
            if needs_choices && choices.is_empty() {
                return Err(DefinitionError::NoChoices(question.ordinal()));
            }
            if choices.iter().filter(|choice| choice.is_other).count() > 1 {
                return Err(DefinitionError::MultipleWriteIns(question.ordinal()));
            }

            if let QuestionKind::MultiSelect(multi) = question.kind()
                && let (Some(min), Some(max)) = (multi.min_choices, multi.max_choices)
                && min > max
            {
                return Err(DefinitionError::InvertedBounds {
                    question: question.ordinal(),
                    min,
                    max,
                });
            }
        }

        let mut seen = HashSet::new();
        for completion in &self.completions {
            if !seen.insert(completion.completion_ordinal) {
                return Err(DefinitionError::DuplicateCompletion(
                    completion.completion_ordinal,
                ));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireSurvey {
    session: Session,
    survey_payload: WirePayload,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct WirePayload {
    #[serde(default)]
    question: Vec<Question>,
    #[serde(default)]
    completion: Vec<Completion>,
}

impl From<WireSurvey> for SurveyDefinition {
    fn from(wire: WireSurvey) -> Self {
        Self {
            session: wire.session,
            questions: wire.survey_payload.question,
            completions: wire.survey_payload.completion,
        }
    }
}

impl From<SurveyDefinition> for WireSurvey {
    fn from(definition: SurveyDefinition) -> Self {
        Self {
            session: definition.session,
            survey_payload: WirePayload {
                question: definition.questions,
                completion: definition.completions,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnswerChoice, ChoiceQuestion, MultiSelectQuestion, TriggerCondition};

    const PAYLOAD: &str = r#"{
        "session": { "session_id": "storybook_session", "session_token": "token_12345" },
        "survey_payload": {
            "question": [
                {
                    "question_ordinal": 1,
                    "question_type": "rating",
                    "question_text": "How satisfied are you?",
                    "question": {
                        "answer_choice": [
                            { "answer_ordinal": 1, "text": "Unhappy" },
                            { "answer_ordinal": 5, "text": "Delighted" }
                        ]
                    }
                }
            ],
            "completion": [
                {
                    "completion_ordinal": 1,
                    "completion_title": "Thanks for sharing your thoughts!",
                    "completion_text": "Do you want to help us?",
                    "follow_up_text": "Let’s go",
                    "follow_up_url": "https://example.com/",
                    "trigger_condition": [ { "question_ordinal": 1, "answer_ordinal": 5 } ]
                },
                { "completion_ordinal": 2, "completion_title": "Thanks!" }
            ]
        }
    }"#;

    #[test]
    fn parses_endpoint_payload() {
        let definition = SurveyDefinition::from_json(PAYLOAD).unwrap();

        assert_eq!(definition.session().id(), "storybook_session");
        assert_eq!(definition.len(), 1);
        assert_eq!(definition.completions().len(), 2);
        assert_eq!(
            definition.completion(1).unwrap().trigger_condition,
            vec![TriggerCondition::new(1, 5)]
        );
        assert!(definition.completion(2).unwrap().is_fallback());
        assert!(definition.first_unsupported().is_none());
        definition.validate().unwrap();
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let result = SurveyDefinition::from_json(r#"{ "survey_payload": {} }"#);
        assert!(matches!(result, Err(DefinitionError::Malformed(_))));
    }

    #[test]
    fn json_round_trip_keeps_wire_names() {
        let definition = SurveyDefinition::from_json(PAYLOAD).unwrap();
        let json = definition.to_json().unwrap();
        assert!(json.contains("\"survey_payload\""));
        assert_eq!(SurveyDefinition::from_json(&json).unwrap(), definition);
    }

    #[test]
    fn validate_rejects_structural_problems() {
        let session = Session::new("s", "t");
        let rating = |ordinal| {
            Question::new(
                ordinal,
                "Rate",
                QuestionKind::Rating(ChoiceQuestion::new(vec![AnswerChoice::new(1, "Ok")])),
            )
        };

        let duplicate = SurveyDefinition::new(session.clone(), vec![rating(1), rating(1)], vec![]);
        assert!(matches!(
            duplicate.validate(),
            Err(DefinitionError::DuplicateQuestion(1))
        ));

        let empty = SurveyDefinition::new(
            session.clone(),
            vec![Question::new(
                1,
                "Pick",
                QuestionKind::SingleSelect(ChoiceQuestion::default()),
            )],
            vec![],
        );
        assert!(matches!(empty.validate(), Err(DefinitionError::NoChoices(1))));

        let two_others = SurveyDefinition::new(
            session.clone(),
            vec![Question::new(
                1,
                "Pick",
                QuestionKind::SingleSelect(ChoiceQuestion::new(vec![
                    AnswerChoice::other(1, "Other"),
                    AnswerChoice::other(2, "Something else"),
                ])),
            )],
            vec![],
        );
        assert!(matches!(
            two_others.validate(),
            Err(DefinitionError::MultipleWriteIns(1))
        ));

        let inverted = SurveyDefinition::new(
            session.clone(),
            vec![Question::new(
                1,
                "Pick",
                QuestionKind::MultiSelect(
                    MultiSelectQuestion::new(vec![AnswerChoice::new(1, "A")])
                        .with_bounds(Some(3), Some(2)),
                ),
            )],
            vec![],
        );
        assert!(matches!(
            inverted.validate(),
            Err(DefinitionError::InvertedBounds { question: 1, min: 3, max: 2 })
        ));

        let completions = SurveyDefinition::new(
            session,
            vec![rating(1)],
            vec![Completion::new(1, "A"), Completion::new(1, "B")],
        );
        assert!(matches!(
            completions.validate(),
            Err(DefinitionError::DuplicateCompletion(1))
        ));
    }
}
