use survey_engine_types::{AnswerChoice, Completion, FollowUp, Question, QuestionKind};

use crate::Draft;

/// What a frontend should render right now.
///
/// Building a view has no side effects.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    /// Dismissed, unsupported, or complete without a selectable completion.
    Nothing,

    Question(QuestionView<'a>),

    Completion(CompletionView<'a>),
}

impl View<'_> {
    /// Check if there is nothing to render.
    pub fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }
}

/// The question on screen together with its in-progress input.
#[derive(Debug, Clone, Copy)]
pub struct QuestionView<'a> {
    question: &'a Question,
    draft: &'a Draft,
    position: usize,
    total: usize,
}

/// One option of a rating or select question as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionView<'a> {
    pub choice: &'a AnswerChoice,
    pub selected: bool,
    /// Clicking a disabled option does nothing.
    pub enabled: bool,
}

impl<'a> QuestionView<'a> {
    pub(crate) fn new(question: &'a Question, draft: &'a Draft, position: usize, total: usize) -> Self {
        Self {
            question,
            draft,
            position,
            total,
        }
    }

    pub fn question(&self) -> &'a Question {
        self.question
    }

    pub fn ordinal(&self) -> u32 {
        self.question.ordinal()
    }

    pub fn text(&self) -> &'a str {
        self.question.text()
    }

    pub fn subtitle(&self) -> Option<&'a str> {
        self.question.subtitle()
    }

    pub fn kind(&self) -> &'a QuestionKind {
        self.question.kind()
    }

    /// 1-based position of this question in the definition.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of questions in the definition.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn draft(&self) -> &'a Draft {
        self.draft
    }

    /// The options with their selection and interactivity.
    pub fn options(&self) -> Vec<OptionView<'a>> {
        let kind = self.question.kind();
        kind.choices()
            .iter()
            .map(|choice| OptionView {
                choice,
                selected: self.draft.is_selected(choice.answer_ordinal),
                enabled: self.draft.option_enabled(kind, choice.answer_ordinal),
            })
            .collect()
    }

    /// Check if the "other" write-in input accepts text.
    pub fn other_input_enabled(&self) -> bool {
        self.draft.other_input_enabled(self.question.kind())
    }

    /// Ratings are answered by picking a point; every other kind has a submit button.
    pub fn has_submit_control(&self) -> bool {
        !matches!(self.question.kind(), QuestionKind::Rating(_))
    }

    /// Check if the submit control is enabled.
    pub fn submit_enabled(&self) -> bool {
        self.draft.can_submit(self.question.kind())
    }
}

/// The selected completion.
#[derive(Debug, Clone, Copy)]
pub struct CompletionView<'a> {
    completion: &'a Completion,
}

impl<'a> CompletionView<'a> {
    pub(crate) fn new(completion: &'a Completion) -> Self {
        Self { completion }
    }

    pub fn completion(&self) -> &'a Completion {
        self.completion
    }

    pub fn ordinal(&self) -> u32 {
        self.completion.completion_ordinal
    }

    pub fn title(&self) -> &'a str {
        &self.completion.completion_title
    }

    pub fn text(&self) -> &'a str {
        &self.completion.completion_text
    }

    pub fn follow_up(&self) -> Option<FollowUp<'a>> {
        self.completion.follow_up()
    }
}
