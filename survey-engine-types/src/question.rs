use serde::{Deserialize, Serialize};

use crate::TriggerCondition;

/// A single question in a survey.
///
/// On the wire a question is a flat object keyed by `question_type`; in memory the
/// type lives in `QuestionKind` so every consumer matches on it exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireQuestion", into = "WireQuestion")]
pub struct Question {
    /// Unique positive ordinal; defines display and answer order.
    ordinal: u32,

    /// The prompt text shown to the respondent.
    text: String,

    /// Optional secondary line shown under the prompt.
    subtitle: Option<String>,

    /// The kind of question (determines input type and validation).
    kind: QuestionKind,

    /// Conditions on earlier answers; the question is only asked when all hold.
    trigger_condition: Vec<TriggerCondition>,
}

impl Question {
    /// Create a new question.
    pub fn new(ordinal: u32, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            ordinal,
            text: text.into(),
            subtitle: None,
            kind,
            trigger_condition: Vec::new(),
        }
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Only ask this question when the given condition holds.
    pub fn with_trigger(mut self, condition: TriggerCondition) -> Self {
        self.trigger_condition.push(condition);
        self
    }

    /// Get the question ordinal.
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the subtitle, if any.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get the conditions gating this question.
    pub fn trigger_condition(&self) -> &[TriggerCondition] {
        &self.trigger_condition
    }

    /// Check if this question can be rendered at all.
    pub fn is_supported(&self) -> bool {
        !self.kind.is_unsupported()
    }
}

/// The kind of question, determining input type and answer shape.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Pick one point on a scale; answered as soon as a point is picked.
    Rating(ChoiceQuestion),

    /// Pick exactly one option, then submit.
    SingleSelect(ChoiceQuestion),

    /// Pick a bounded number of options, then submit.
    MultiSelect(MultiSelectQuestion),

    /// Free text, truncated at the configured length.
    OpenText(OpenTextQuestion),

    /// A `question_type` this engine does not know. Carries the raw type name.
    Unsupported(String),
}

impl QuestionKind {
    pub const RATING: &'static str = "rating";
    pub const SINGLE_SELECT: &'static str = "single_select";
    pub const MULTI_SELECT: &'static str = "multi_select";
    pub const OPEN_TEXT: &'static str = "open_text";

    /// The wire name of this kind.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Rating(_) => Self::RATING,
            Self::SingleSelect(_) => Self::SINGLE_SELECT,
            Self::MultiSelect(_) => Self::MULTI_SELECT,
            Self::OpenText(_) => Self::OPEN_TEXT,
            Self::Unsupported(name) => name,
        }
    }

    /// The answer choices; empty for open text and unsupported kinds.
    pub fn choices(&self) -> &[AnswerChoice] {
        match self {
            Self::Rating(q) | Self::SingleSelect(q) => &q.choices,
            Self::MultiSelect(q) => &q.choices,
            Self::OpenText(_) | Self::Unsupported(_) => &[],
        }
    }

    /// Look up a choice by its answer ordinal.
    pub fn choice(&self, answer_ordinal: u32) -> Option<&AnswerChoice> {
        self.choices()
            .iter()
            .find(|choice| choice.answer_ordinal == answer_ordinal)
    }

    /// Check if this kind was not recognized.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

/// One selectable option of a rating or select question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerChoice {
    pub answer_ordinal: u32,

    pub text: String,

    /// The "other" option, which needs accompanying free text when selected.
    #[serde(default, rename = "write_in", skip_serializing_if = "std::ops::Not::not")]
    pub is_other: bool,
}

impl AnswerChoice {
    /// Create a regular choice.
    pub fn new(answer_ordinal: u32, text: impl Into<String>) -> Self {
        Self {
            answer_ordinal,
            text: text.into(),
            is_other: false,
        }
    }

    /// Create the "other" choice.
    pub fn other(answer_ordinal: u32, text: impl Into<String>) -> Self {
        Self {
            answer_ordinal,
            text: text.into(),
            is_other: true,
        }
    }
}

/// Configuration for a rating or single select question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceQuestion {
    pub choices: Vec<AnswerChoice>,
}

impl ChoiceQuestion {
    pub fn new(choices: Vec<AnswerChoice>) -> Self {
        Self { choices }
    }
}

/// Configuration for a multi select question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiSelectQuestion {
    pub choices: Vec<AnswerChoice>,

    /// Inclusive lower bound on the number of selected options.
    pub min_choices: Option<usize>,

    /// Inclusive upper bound on the number of selected options.
    pub max_choices: Option<usize>,
}

impl MultiSelectQuestion {
    /// Create an unbounded multi select question.
    pub fn new(choices: Vec<AnswerChoice>) -> Self {
        Self {
            choices,
            min_choices: None,
            max_choices: None,
        }
    }

    /// Set selection count bounds.
    pub fn with_bounds(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_choices = min;
        self.max_choices = max;
        self
    }

    /// Check if `count` selections satisfy both bounds.
    pub fn accepts(&self, count: usize) -> bool {
        self.min_choices.is_none_or(|min| count >= min)
            && self.max_choices.is_none_or(|max| count <= max)
    }

    /// Check if `count` selections leave no room for another one.
    pub fn is_full(&self, count: usize) -> bool {
        self.max_choices.is_some_and(|max| count >= max)
    }
}

/// Configuration for an open text question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenTextQuestion {
    /// Hint shown inside the empty input.
    pub placeholder: Option<String>,
}

impl OpenTextQuestion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: Some(placeholder.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireQuestion {
    question_ordinal: u32,
    question_type: String,
    #[serde(default)]
    question_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    trigger_condition: Vec<TriggerCondition>,
    #[serde(default)]
    question: WireQuestionBody,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct WireQuestionBody {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    answer_choice: Vec<AnswerChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_choices: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_choices: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
}

impl From<WireQuestion> for Question {
    fn from(wire: WireQuestion) -> Self {
        let body = wire.question;
        let kind = match wire.question_type.as_str() {
            QuestionKind::RATING => QuestionKind::Rating(ChoiceQuestion::new(body.answer_choice)),
            QuestionKind::SINGLE_SELECT => {
                QuestionKind::SingleSelect(ChoiceQuestion::new(body.answer_choice))
            }
            QuestionKind::MULTI_SELECT => QuestionKind::MultiSelect(
                MultiSelectQuestion::new(body.answer_choice)
                    .with_bounds(body.min_choices, body.max_choices),
            ),
            QuestionKind::OPEN_TEXT => QuestionKind::OpenText(OpenTextQuestion {
                placeholder: body.placeholder,
            }),
            _ => QuestionKind::Unsupported(wire.question_type),
        };

        Self {
            ordinal: wire.question_ordinal,
            text: wire.question_text,
            subtitle: wire.subtitle,
            kind,
            trigger_condition: wire.trigger_condition,
        }
    }
}

impl From<Question> for WireQuestion {
    fn from(question: Question) -> Self {
        let question_type = question.kind.type_name().to_string();
        let question_body = match question.kind {
            QuestionKind::Rating(q) | QuestionKind::SingleSelect(q) => WireQuestionBody {
                answer_choice: q.choices,
                ..Default::default()
            },
            QuestionKind::MultiSelect(q) => WireQuestionBody {
                answer_choice: q.choices,
                min_choices: q.min_choices,
                max_choices: q.max_choices,
                placeholder: None,
            },
            QuestionKind::OpenText(q) => WireQuestionBody {
                placeholder: q.placeholder,
                ..Default::default()
            },
            QuestionKind::Unsupported(_) => WireQuestionBody::default(),
        };

        Self {
            question_ordinal: question.ordinal,
            question_type,
            question_text: question.text,
            subtitle: question.subtitle,
            trigger_condition: question.trigger_condition,
            question: question_body,
        }
    }
}
