use serde::{Deserialize, Serialize};

use crate::{AnswerValue, Session};

/// A lifecycle telemetry event.
///
/// Serializes externally tagged, e.g. `{"survey_shown": {}}` or
/// `{"completion_shown": {"completion_ordinal": 1}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyEvent {
    SurveyShown {},

    QuestionAnswered {
        question_ordinal: u32,
        #[serde(with = "crate::answer::wrapped_answer")]
        answer: AnswerValue,
    },

    CompletionShown {
        completion_ordinal: u32,
    },

    FollowUpLinkClicked {
        completion_ordinal: u32,
    },

    SurveyClosed {},
}

impl SurveyEvent {
    /// Get the kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::SurveyShown {} => EventKind::SurveyShown,
            Self::QuestionAnswered { .. } => EventKind::QuestionAnswered,
            Self::CompletionShown { .. } => EventKind::CompletionShown,
            Self::FollowUpLinkClicked { .. } => EventKind::FollowUpLinkClicked,
            Self::SurveyClosed {} => EventKind::SurveyClosed,
        }
    }
}

/// Payload-free discriminant of `SurveyEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    SurveyShown,
    QuestionAnswered,
    CompletionShown,
    FollowUpLinkClicked,
    SurveyClosed,
}

impl EventKind {
    /// The wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SurveyShown => "survey_shown",
            Self::QuestionAnswered => "question_answered",
            Self::CompletionShown => "completion_shown",
            Self::FollowUpLinkClicked => "follow_up_link_clicked",
            Self::SurveyClosed => "survey_closed",
        }
    }

    /// Check if at most one event of this kind may be sent per mounted survey.
    pub fn is_once_per_mount(&self) -> bool {
        matches!(
            self,
            Self::SurveyShown | Self::CompletionShown | Self::SurveyClosed
        )
    }
}

/// An event tagged with the session it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event: SurveyEvent,
    pub session: Session,
}

impl EventEnvelope {
    pub fn new(event: SurveyEvent, session: Session) -> Self {
        Self { event, session }
    }

    /// Get the kind of the wrapped event.
    pub fn kind(&self) -> EventKind {
        self.event.kind()
    }

    /// The body posted to the survey event endpoint: `{"data": {event, session}}`.
    pub fn request_body(&self) -> RequestBody<'_> {
        RequestBody { data: self }
    }
}

/// Borrowed request body for the survey event endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RequestBody<'a> {
    pub data: &'a EventEnvelope,
}
