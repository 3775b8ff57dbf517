use serde::{Deserialize, Serialize};

/// One chosen option, with the write-in text when it is the "other" option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChosenAnswer {
    pub answer_ordinal: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_text: Option<String>,
}

impl ChosenAnswer {
    /// A plain choice.
    pub fn new(answer_ordinal: u32) -> Self {
        Self {
            answer_ordinal,
            answer_text: None,
        }
    }

    /// An "other" choice with its write-in text.
    pub fn with_text(answer_ordinal: u32, answer_text: impl Into<String>) -> Self {
        Self {
            answer_ordinal,
            answer_text: Some(answer_text.into()),
        }
    }
}

/// The answer to a single question.
///
/// The JSON shape depends on the question type: an object for rating and single
/// select, an array of objects (ascending by ordinal) for multi select, and a bare
/// string for open text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Open text.
    Text(String),

    /// Rating or single select.
    Choice(ChosenAnswer),

    /// Multi select.
    Choices(Vec<ChosenAnswer>),
}

impl AnswerValue {
    /// Check if `answer_ordinal` was chosen. Text answers contain no ordinals.
    pub fn contains_ordinal(&self, answer_ordinal: u32) -> bool {
        match self {
            Self::Text(_) => false,
            Self::Choice(choice) => choice.answer_ordinal == answer_ordinal,
            Self::Choices(choices) => choices
                .iter()
                .any(|choice| choice.answer_ordinal == answer_ordinal),
        }
    }

    /// Try to get this value as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Try to get this value as a single choice.
    pub fn as_choice(&self) -> Option<&ChosenAnswer> {
        match self {
            Self::Choice(choice) => Some(choice),
            _ => None,
        }
    }

    /// Try to get this value as a list of choices.
    pub fn as_choices(&self) -> Option<&[ChosenAnswer]> {
        match self {
            Self::Choices(choices) => Some(choices),
            _ => None,
        }
    }

    /// Get the type name of this value for log messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Choice(_) => "Choice",
            Self::Choices(_) => "Choices",
        }
    }
}

impl From<String> for AnswerValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for AnswerValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<ChosenAnswer> for AnswerValue {
    fn from(choice: ChosenAnswer) -> Self {
        Self::Choice(choice)
    }
}

impl From<Vec<ChosenAnswer>> for AnswerValue {
    fn from(choices: Vec<ChosenAnswer>) -> Self {
        Self::Choices(choices)
    }
}

/// The recorded answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_ordinal: u32,

    #[serde(with = "wrapped_answer")]
    pub answer: AnswerValue,
}

impl AnswerRecord {
    pub fn new(question_ordinal: u32, answer: impl Into<AnswerValue>) -> Self {
        Self {
            question_ordinal,
            answer: answer.into(),
        }
    }
}

/// The answers recorded for one session, in the order they were given.
///
/// Holds at most one record per question ordinal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    records: Vec<AnswerRecord>,
}

impl Answers {
    /// Create an empty answer set.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record an answer. A later answer to the same question replaces the earlier
    /// one in place.
    pub fn upsert(&mut self, record: AnswerRecord) {
        match self
            .records
            .iter_mut()
            .find(|existing| existing.question_ordinal == record.question_ordinal)
        {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Get the record for a question.
    pub fn get(&self, question_ordinal: u32) -> Option<&AnswerRecord> {
        self.records
            .iter()
            .find(|record| record.question_ordinal == question_ordinal)
    }

    /// Check if a question has been answered.
    pub fn contains(&self, question_ordinal: u32) -> bool {
        self.get(question_ordinal).is_some()
    }

    /// Iterate over records in the order they were given.
    pub fn iter(&self) -> impl Iterator<Item = &AnswerRecord> {
        self.records.iter()
    }

    /// Get the number of answered questions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if nothing has been answered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the records as a slice.
    pub fn as_slice(&self) -> &[AnswerRecord] {
        &self.records
    }
}

impl From<Vec<AnswerRecord>> for Answers {
    fn from(records: Vec<AnswerRecord>) -> Self {
        let mut answers = Answers::new();
        for record in records {
            answers.upsert(record);
        }
        answers
    }
}

impl FromIterator<AnswerRecord> for Answers {
    fn from_iter<I: IntoIterator<Item = AnswerRecord>>(iter: I) -> Self {
        let mut answers = Answers::new();
        for record in iter {
            answers.upsert(record);
        }
        answers
    }
}

impl IntoIterator for Answers {
    type Item = AnswerRecord;
    type IntoIter = std::vec::IntoIter<AnswerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = &'a AnswerRecord;
    type IntoIter = std::slice::Iter<'a, AnswerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// `answer` fields travel as `{ "answer": <value> }`.
pub(crate) mod wrapped_answer {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::AnswerValue;

    #[derive(Serialize)]
    struct Borrowed<'a> {
        answer: &'a AnswerValue,
    }

    #[derive(Deserialize)]
    struct Owned {
        answer: AnswerValue,
    }

    pub fn serialize<S: Serializer>(answer: &AnswerValue, serializer: S) -> Result<S::Ok, S::Error> {
        Borrowed { answer }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<AnswerValue, D::Error> {
        Owned::deserialize(deserializer).map(|wrapped| wrapped.answer)
    }
}
