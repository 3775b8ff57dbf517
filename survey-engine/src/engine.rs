use std::collections::HashSet;

use survey_engine_types::{
    AnswerRecord, AnswerStore, Answers, Completion, EventEnvelope, EventKind, EventSink, Question,
    QuestionKind, Session, SurveyDefinition, SurveyEvent,
};

use crate::completion::{Selection, select_completion};
use crate::sequencer::{Step, next_step};
use crate::{CompletionView, Draft, EngineConfig, EngineError, QuestionView, View};

/// The state of a mounted survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// A question is on screen.
    Asking { question_ordinal: u32 },

    /// Every question is answered. `None` when no completion could be selected,
    /// in which case nothing is rendered.
    Complete { completion_ordinal: Option<u32> },

    /// Closed by the respondent. Terminal.
    Dismissed,

    /// The definition contains an unknown question type. Terminal.
    Unsupported,
}

impl EngineState {
    /// Check if no further input or events are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Dismissed | Self::Unsupported)
    }
}

/// The effect of one piece of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing happened: the control is disabled in the current state.
    Ignored,

    /// The in-progress input changed.
    Updated,

    /// The engine entered a new state.
    Transitioned(EngineState),
}

/// A survey mounted for one session.
///
/// Created by [`SurveyEngine::mount`], which resolves the initial state from the
/// answers already in the store and sends `survey_shown`. Every later event is
/// sent from a state transition, never from reading the view.
pub struct SurveyEngine<S, E> {
    definition: SurveyDefinition,
    store: S,
    sink: E,
    config: EngineConfig,
    answers: Answers,
    state: EngineState,
    draft: Draft,
    sent: HashSet<EventKind>,
    /// Set when the store could not be read at mount; the next write merges
    /// with whatever the store holds instead of replacing it.
    unread: bool,
}

impl<S: AnswerStore, E: EventSink> SurveyEngine<S, E> {
    /// Mount a survey with the default configuration.
    pub fn mount(definition: SurveyDefinition, store: S, sink: E) -> Self {
        Self::mount_with_config(definition, store, sink, EngineConfig::default())
    }

    /// Mount a survey.
    ///
    /// An unknown question type anywhere in the definition leaves the engine
    /// `Unsupported`: it renders nothing and sends nothing. Otherwise the engine
    /// resumes from the stored answers, asking the next question or going
    /// straight to the completion. If the store cannot be read the survey
    /// starts over, and the first submit re-reads the store so nothing stored
    /// is overwritten.
    pub fn mount_with_config(
        definition: SurveyDefinition,
        store: S,
        sink: E,
        config: EngineConfig,
    ) -> Self {
        let mut engine = Self {
            definition,
            store,
            sink,
            config,
            answers: Answers::new(),
            state: EngineState::Unsupported,
            draft: Draft::Empty,
            sent: HashSet::new(),
            unread: false,
        };

        if let Some(question) = engine.definition.first_unsupported() {
            tracing::warn!(
                session_id = %engine.definition.session.session_id,
                question_ordinal = question.ordinal(),
                question_type = question.kind().type_name(),
                "unsupported question type, rendering nothing"
            );
            return engine;
        }

        match engine.load_answers() {
            Some(answers) => engine.answers = answers,
            None => engine.unread = true,
        }
        tracing::info!(
            session_id = %engine.definition.session.session_id,
            questions = engine.definition.len(),
            answered = engine.answers.len(),
            "survey shown"
        );
        engine.emit(SurveyEvent::SurveyShown {});
        engine.advance();
        engine
    }

    /// Select an option of the current question; toggles for multi select.
    ///
    /// A rating is submitted as soon as the picked point makes it submittable.
    pub fn select(&mut self, answer_ordinal: u32) -> Result<Outcome, EngineError> {
        let Some(question) = on_screen(&self.definition, self.state) else {
            return Ok(Outcome::Ignored);
        };
        let question_ordinal = question.ordinal();
        let is_rating = matches!(question.kind(), QuestionKind::Rating(_));

        if !self.draft.select(question.kind(), answer_ordinal) {
            tracing::debug!(question_ordinal, answer_ordinal, "option disabled, ignoring");
            return Ok(Outcome::Ignored);
        }

        if is_rating && self.can_submit() {
            return self.submit();
        }
        Ok(Outcome::Updated)
    }

    /// Replace the "other" write-in text. Truncated to `max_text_length`.
    ///
    /// A rating has no submit control, so it is submitted as soon as the
    /// write-in makes it submittable.
    pub fn set_other_text(&mut self, text: &str) -> Result<Outcome, EngineError> {
        let Some(question) = on_screen(&self.definition, self.state) else {
            return Ok(Outcome::Ignored);
        };
        let is_rating = matches!(question.kind(), QuestionKind::Rating(_));

        if !self
            .draft
            .set_other_text(question.kind(), text, self.config.max_text_length)
        {
            tracing::debug!(
                question_ordinal = question.ordinal(),
                "write-in input disabled, ignoring"
            );
            return Ok(Outcome::Ignored);
        }

        if is_rating && self.can_submit() {
            return self.submit();
        }
        Ok(Outcome::Updated)
    }

    /// Replace the open text answer. Truncated to `max_text_length`.
    pub fn set_text(&mut self, text: &str) -> Outcome {
        if self.asking().is_none() {
            return Outcome::Ignored;
        }
        if self.draft.set_text(text, self.config.max_text_length) {
            Outcome::Updated
        } else {
            Outcome::Ignored
        }
    }

    /// Clear the in-progress input of the current question.
    pub fn reset_draft(&mut self) -> Outcome {
        let Some(question) = on_screen(&self.definition, self.state) else {
            return Outcome::Ignored;
        };
        self.draft = Draft::for_kind(question.kind());
        Outcome::Updated
    }

    /// Check if the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.asking()
            .is_some_and(|question| self.draft.can_submit(question.kind()))
    }

    /// Record the current answer, send `question_answered`, and move on.
    ///
    /// Ignored while submit is disabled. If the store rejects the write the
    /// engine stays on the current question with its input intact.
    pub fn submit(&mut self) -> Result<Outcome, EngineError> {
        let Some(question) = self.asking() else {
            return Ok(Outcome::Ignored);
        };
        let question_ordinal = question.ordinal();
        let Some(answer) = self.draft.to_answer(question.kind()) else {
            tracing::debug!(question_ordinal, "submit disabled, ignoring");
            return Ok(Outcome::Ignored);
        };

        let record_error = |source| EngineError::RecordAnswer {
            question_ordinal,
            source,
        };
        let session_id = &self.definition.session.session_id;

        let mut answers = if self.unread {
            let stored = self.store.answers(session_id).map_err(record_error)?;
            let mut merged = stored.unwrap_or_default();
            tracing::debug!(
                session_id = %session_id,
                stored = merged.len(),
                "merging with answers stored before mount"
            );
            for record in self.answers.iter().cloned() {
                merged.upsert(record);
            }
            merged
        } else {
            self.answers.clone()
        };
        answers.upsert(AnswerRecord::new(question_ordinal, answer.clone()));
        self.store
            .set_answers(session_id, answers.clone())
            .map_err(record_error)?;
        self.answers = answers;
        self.unread = false;

        tracing::debug!(
            question_ordinal,
            answer_type = answer.type_name(),
            "question answered"
        );
        self.emit(SurveyEvent::QuestionAnswered {
            question_ordinal,
            answer,
        });
        Ok(Outcome::Transitioned(self.advance()))
    }

    /// Close the survey from the dismiss control.
    pub fn dismiss(&mut self) -> Outcome {
        match self.state {
            EngineState::Asking { .. }
            | EngineState::Complete {
                completion_ordinal: Some(_),
            } => Outcome::Transitioned(self.close()),
            EngineState::Complete {
                completion_ordinal: None,
            }
            | EngineState::Dismissed
            | EngineState::Unsupported => Outcome::Ignored,
        }
    }

    /// Follow the completion's follow-up link, closing the survey.
    ///
    /// Returns the URL to open, or `None` when there is no link on screen.
    pub fn follow_up(&mut self) -> Option<String> {
        let EngineState::Complete {
            completion_ordinal: Some(completion_ordinal),
        } = self.state
        else {
            return None;
        };
        let url = self
            .definition
            .completion(completion_ordinal)?
            .follow_up()?
            .url
            .to_string();

        tracing::info!(completion_ordinal, url = %url, "follow-up link clicked");
        self.emit(SurveyEvent::FollowUpLinkClicked { completion_ordinal });
        self.close();
        Some(url)
    }

    /// What to render right now. Has no side effects.
    pub fn view(&self) -> View<'_> {
        match self.state {
            EngineState::Asking { question_ordinal } => {
                let questions = self.definition.questions();
                questions
                    .iter()
                    .position(|q| q.ordinal() == question_ordinal)
                    .map_or(View::Nothing, |index| {
                        View::Question(QuestionView::new(
                            &questions[index],
                            &self.draft,
                            index + 1,
                            questions.len(),
                        ))
                    })
            }
            EngineState::Complete {
                completion_ordinal: Some(_),
            } => self
                .current_completion()
                .map_or(View::Nothing, |c| View::Completion(CompletionView::new(c))),
            EngineState::Complete {
                completion_ordinal: None,
            }
            | EngineState::Dismissed
            | EngineState::Unsupported => View::Nothing,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn definition(&self) -> &SurveyDefinition {
        &self.definition
    }

    pub fn session(&self) -> &Session {
        &self.definition.session
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Answers recorded for this session, including those found at mount.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    /// The ordinal of the question on screen.
    pub fn current_question_ordinal(&self) -> Option<u32> {
        match self.state {
            EngineState::Asking { question_ordinal } => Some(question_ordinal),
            _ => None,
        }
    }

    /// The question on screen.
    pub fn current_question(&self) -> Option<&Question> {
        self.asking()
    }

    /// The completion on screen.
    pub fn current_completion(&self) -> Option<&Completion> {
        match self.state {
            EngineState::Complete {
                completion_ordinal: Some(ordinal),
            } => self.definition.completion(ordinal),
            _ => None,
        }
    }

    pub fn is_dismissed(&self) -> bool {
        self.state == EngineState::Dismissed
    }

    fn asking(&self) -> Option<&Question> {
        on_screen(&self.definition, self.state)
    }

    fn load_answers(&self) -> Option<Answers> {
        let session_id = &self.definition.session.session_id;
        match self.store.answers(session_id) {
            Ok(answers) => Some(answers.unwrap_or_default()),
            Err(err) => {
                tracing::warn!(
                    session_id = %session_id,
                    error = %err,
                    "failed to read stored answers, starting from the first question"
                );
                None
            }
        }
    }

    /// Move to wherever the recorded answers lead and run that state's entry action.
    fn advance(&mut self) -> EngineState {
        self.state = match next_step(&self.definition, &self.answers) {
            Step::Ask(question_ordinal) => EngineState::Asking { question_ordinal },
            Step::Complete => EngineState::Complete {
                completion_ordinal: self.choose_completion(),
            },
        };

        match self.state {
            EngineState::Asking { question_ordinal } => {
                self.draft = self
                    .definition
                    .question(question_ordinal)
                    .map_or(Draft::Empty, |q| Draft::for_kind(q.kind()));
                tracing::debug!(question_ordinal, "asking question");
            }
            EngineState::Complete {
                completion_ordinal: Some(completion_ordinal),
            } => {
                self.draft = Draft::Empty;
                tracing::info!(completion_ordinal, "completion shown");
                self.emit(SurveyEvent::CompletionShown { completion_ordinal });
            }
            EngineState::Complete {
                completion_ordinal: None,
            } => {
                self.draft = Draft::Empty;
                tracing::warn!(
                    session_id = %self.definition.session.session_id,
                    "survey complete but no completion to show"
                );
            }
            EngineState::Dismissed | EngineState::Unsupported => {}
        }
        self.state
    }

    fn choose_completion(&self) -> Option<u32> {
        let selection = select_completion(
            self.definition.completions(),
            &self.answers,
            self.config.no_match_policy,
        )?;
        match selection {
            Selection::Triggered(completion) => {
                tracing::debug!(
                    completion_ordinal = completion.completion_ordinal,
                    "completion trigger matched"
                );
            }
            Selection::Fallback(completion) => {
                tracing::debug!(
                    completion_ordinal = completion.completion_ordinal,
                    "no trigger matched, using fallback completion"
                );
            }
            Selection::NoMatch(completion) => {
                tracing::warn!(
                    completion_ordinal = completion.completion_ordinal,
                    "no trigger matched and no fallback completion, using first completion"
                );
            }
        }
        Some(selection.completion().completion_ordinal)
    }

    fn close(&mut self) -> EngineState {
        self.emit(SurveyEvent::SurveyClosed {});
        self.state = EngineState::Dismissed;
        self.draft = Draft::Empty;
        tracing::info!(
            session_id = %self.definition.session.session_id,
            "survey dismissed"
        );
        self.state
    }

    fn emit(&mut self, event: SurveyEvent) {
        let kind = event.kind();
        if kind.is_once_per_mount() && !self.sent.insert(kind) {
            tracing::debug!(event = kind.as_str(), "already sent for this survey, skipping");
            return;
        }
        tracing::debug!(event = kind.as_str(), "sending survey event");
        self.sink
            .send(EventEnvelope::new(event, self.definition.session.clone()));
    }
}

fn on_screen(definition: &SurveyDefinition, state: EngineState) -> Option<&Question> {
    match state {
        EngineState::Asking { question_ordinal } => definition.question(question_ordinal),
        _ => None,
    }
}
