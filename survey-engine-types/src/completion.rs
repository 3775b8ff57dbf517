use serde::{Deserialize, Deserializer, Serialize};

use crate::Answers;

/// A closing screen shown once every question has been answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub completion_ordinal: u32,

    #[serde(default)]
    pub completion_title: String,

    #[serde(default)]
    pub completion_text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_url: Option<String>,

    /// Every condition must hold for this completion to qualify.
    /// Empty (or absent) marks the fallback completion.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub trigger_condition: Vec<TriggerCondition>,
}

impl Completion {
    /// Create a completion with no trigger (a fallback).
    pub fn new(completion_ordinal: u32, title: impl Into<String>) -> Self {
        Self {
            completion_ordinal,
            completion_title: title.into(),
            completion_text: String::new(),
            follow_up_text: None,
            follow_up_url: None,
            trigger_condition: Vec::new(),
        }
    }

    /// Set the body text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.completion_text = text.into();
        self
    }

    /// Attach a follow-up link.
    pub fn with_follow_up(mut self, text: impl Into<String>, url: impl Into<String>) -> Self {
        self.follow_up_text = Some(text.into());
        self.follow_up_url = Some(url.into());
        self
    }

    /// Add a condition that must hold for this completion to qualify.
    pub fn with_trigger(mut self, condition: TriggerCondition) -> Self {
        self.trigger_condition.push(condition);
        self
    }

    /// Check if this is a fallback completion (no trigger conditions).
    pub fn is_fallback(&self) -> bool {
        self.trigger_condition.is_empty()
    }

    /// The follow-up link, present only when a URL is set.
    pub fn follow_up(&self) -> Option<FollowUp<'_>> {
        let url = self.follow_up_url.as_deref()?;
        Some(FollowUp {
            text: self.follow_up_text.as_deref().unwrap_or(url),
            url,
        })
    }
}

/// A completion's follow-up link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowUp<'a> {
    pub text: &'a str,
    pub url: &'a str,
}

/// One `(question_ordinal, answer_ordinal)` requirement on the recorded answers.
///
/// The wire form accepts either a single `answer_ordinal` or a list; with a list
/// the condition holds when any listed ordinal was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerCondition {
    pub question_ordinal: u32,

    #[serde(rename = "answer_ordinal", with = "one_or_many")]
    pub answer_ordinals: Vec<u32>,
}

impl TriggerCondition {
    /// Require a specific answer to a question.
    pub fn new(question_ordinal: u32, answer_ordinal: u32) -> Self {
        Self {
            question_ordinal,
            answer_ordinals: vec![answer_ordinal],
        }
    }

    /// Require any one of several answers to a question.
    pub fn any_of(question_ordinal: u32, answer_ordinals: impl Into<Vec<u32>>) -> Self {
        Self {
            question_ordinal,
            answer_ordinals: answer_ordinals.into(),
        }
    }

    /// Check if the recorded answer to this condition's question chose a listed ordinal.
    ///
    /// For multi select answers the ordinal may appear anywhere in the selection.
    /// Open text answers never satisfy a condition.
    pub fn is_satisfied_by(&self, answers: &Answers) -> bool {
        answers.get(self.question_ordinal).is_some_and(|record| {
            self.answer_ordinals
                .iter()
                .any(|&ordinal| record.answer.contains_ordinal(ordinal))
        })
    }

    /// Check if every condition in `conditions` holds. Vacuously true when empty.
    pub fn all_satisfied(conditions: &[TriggerCondition], answers: &Answers) -> bool {
        conditions
            .iter()
            .all(|condition| condition.is_satisfied_by(answers))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<TriggerCondition>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TriggerCondition>>::deserialize(deserializer)?.unwrap_or_default())
}

mod one_or_many {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(u32),
        Many(Vec<u32>),
    }

    pub fn serialize<S: Serializer>(ordinals: &[u32], serializer: S) -> Result<S::Ok, S::Error> {
        match ordinals {
            [single] => single.serialize(serializer),
            many => many.serialize(serializer),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u32>, D::Error> {
        Ok(match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(ordinal) => vec![ordinal],
            OneOrMany::Many(ordinals) => ordinals,
        })
    }
}
