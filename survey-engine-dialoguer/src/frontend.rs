//! Dialoguer prompts driving a mounted survey.

use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};
use survey_engine::{
    AnswerChoice, AnswerStore, EngineError, EngineState, EventSink, MultiSelectQuestion,
    OpenTextQuestion, Question, QuestionKind, SurveyEngine, View,
};
use thiserror::Error;

/// Error type for the Dialoguer frontend.
///
/// Cancelling a prompt is not an error: it dismisses the survey.
#[derive(Debug, Error)]
pub enum FrontendError {
    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// The engine could not record an answer.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

/// Dialoguer frontend for interactive CLI surveys.
#[derive(Debug, Default, Clone)]
pub struct DialoguerFrontend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerFrontend {
    /// Create a new Dialoguer frontend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a frontend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Prompt until the survey is over and return the state it ended in.
    ///
    /// Ends once a completion has been shown, the survey is dismissed, or there
    /// is nothing to render.
    pub fn run<S: AnswerStore, E: EventSink>(
        &self,
        engine: &mut SurveyEngine<S, E>,
    ) -> Result<EngineState, FrontendError> {
        loop {
            let next = match engine.view() {
                View::Question(view) => Some((
                    view.question().clone(),
                    format!("[{}/{}] {}", view.position(), view.total(), view.text()),
                )),
                View::Completion(_) => None,
                View::Nothing => return Ok(engine.state()),
            };
            let Some((question, prompt)) = next else {
                self.show_completion(engine)?;
                return Ok(engine.state());
            };

            if let Some(subtitle) = question.subtitle() {
                println!("{subtitle}");
            }

            let answered = match question.kind() {
                QuestionKind::Rating(q) | QuestionKind::SingleSelect(q) => {
                    self.ask_choice(engine, &question, &prompt, &q.choices)?
                }
                QuestionKind::MultiSelect(q) => self.ask_choices(engine, &prompt, q)?,
                QuestionKind::OpenText(q) => self.ask_text(engine, &prompt, q)?,
                QuestionKind::Unsupported(_) => None,
            };

            if answered.is_none() {
                tracing::debug!(
                    question_ordinal = question.ordinal(),
                    "prompt cancelled, dismissing survey"
                );
                engine.dismiss();
            }
        }
    }

    fn ask_choice<S: AnswerStore, E: EventSink>(
        &self,
        engine: &mut SurveyEngine<S, E>,
        question: &Question,
        prompt: &str,
        choices: &[AnswerChoice],
    ) -> Result<Option<()>, FrontendError> {
        let items: Vec<&str> = choices.iter().map(|c| c.text.as_str()).collect();
        let Some(index) = self.select(prompt, &items)? else {
            return Ok(None);
        };
        let choice = &choices[index];

        // Ratings without a write-in are recorded right here.
        engine.select(choice.answer_ordinal)?;

        if choice.is_other {
            let Some(text) = self.input("Please specify")? else {
                return Ok(None);
            };
            engine.set_other_text(&text)?;
        }
        if engine.current_question_ordinal() == Some(question.ordinal()) {
            engine.submit()?;
        }
        Ok(Some(()))
    }

    fn ask_choices<S: AnswerStore, E: EventSink>(
        &self,
        engine: &mut SurveyEngine<S, E>,
        prompt: &str,
        multi: &MultiSelectQuestion,
    ) -> Result<Option<()>, FrontendError> {
        let items: Vec<&str> = multi.choices.iter().map(|c| c.text.as_str()).collect();

        let picked = loop {
            let Some(indices) = self.multi_select(prompt, &items)? else {
                return Ok(None);
            };
            if !multi.accepts(indices.len()) {
                println!("Error: {}", bounds_hint(multi));
                continue;
            }
            break indices;
        };

        engine.reset_draft();
        for &index in &picked {
            engine.select(multi.choices[index].answer_ordinal)?;
        }
        if picked.iter().any(|&index| multi.choices[index].is_other) {
            let Some(text) = self.input("Please specify")? else {
                return Ok(None);
            };
            engine.set_other_text(&text)?;
        }
        engine.submit()?;
        Ok(Some(()))
    }

    fn ask_text<S: AnswerStore, E: EventSink>(
        &self,
        engine: &mut SurveyEngine<S, E>,
        prompt: &str,
        open: &OpenTextQuestion,
    ) -> Result<Option<()>, FrontendError> {
        let prompt = match &open.placeholder {
            Some(placeholder) => format!("{prompt} ({placeholder})"),
            None => prompt.to_string(),
        };
        let Some(text) = self.input(&prompt)? else {
            return Ok(None);
        };

        engine.set_text(&text);
        if engine.draft().text().chars().count() < text.chars().count() {
            println!(
                "Note: answer shortened to {} characters",
                engine.config().max_text_length
            );
        }
        engine.submit()?;
        Ok(Some(()))
    }

    fn show_completion<S: AnswerStore, E: EventSink>(
        &self,
        engine: &mut SurveyEngine<S, E>,
    ) -> Result<(), FrontendError> {
        let Some(completion) = engine.current_completion().cloned() else {
            return Ok(());
        };

        println!();
        println!("{}", completion.completion_title);
        if !completion.completion_text.is_empty() {
            println!("{}", completion.completion_text);
        }

        let Some(link) = completion.follow_up() else {
            return Ok(());
        };
        if self.confirm(link.text)? == Some(true) {
            if let Some(url) = engine.follow_up() {
                println!("Opening {url}");
            }
        } else {
            engine.dismiss();
        }
        Ok(())
    }

    fn select(&self, prompt: &str, items: &[&str]) -> Result<Option<usize>, FrontendError> {
        let mut builder: Select;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder.with_prompt(prompt).items(items).default(0);

        match builder.interact_opt() {
            Ok(selection) => Ok(selection),
            Err(e) if is_cancelled(&e) => Ok(None),
            Err(e) => Err(FrontendError::Dialoguer(e)),
        }
    }

    fn multi_select(
        &self,
        prompt: &str,
        items: &[&str],
    ) -> Result<Option<Vec<usize>>, FrontendError> {
        let mut builder: MultiSelect;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = MultiSelect::with_theme(&_theme);
        } else {
            builder = MultiSelect::new();
        }

        builder = builder.with_prompt(prompt).items(items);

        match builder.interact_opt() {
            Ok(selection) => Ok(selection),
            Err(e) if is_cancelled(&e) => Ok(None),
            Err(e) => Err(FrontendError::Dialoguer(e)),
        }
    }

    fn input(&self, prompt: &str) -> Result<Option<String>, FrontendError> {
        let _theme;
        let mut builder: Input<String>;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Input::with_theme(&_theme);
        } else {
            builder = Input::new();
        }

        builder = builder
            .with_prompt(prompt)
            .validate_with(|text: &String| -> Result<(), &str> {
                if text.trim().is_empty() {
                    Err("Please enter an answer")
                } else {
                    Ok(())
                }
            });

        match builder.interact_text() {
            Ok(text) => Ok(Some(text)),
            Err(e) if is_cancelled(&e) => Ok(None),
            Err(e) => Err(FrontendError::Dialoguer(e)),
        }
    }

    fn confirm(&self, prompt: &str) -> Result<Option<bool>, FrontendError> {
        let mut builder: Confirm;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Confirm::with_theme(&_theme);
        } else {
            builder = Confirm::new();
        }

        builder = builder.with_prompt(prompt).default(true);

        match builder.interact_opt() {
            Ok(answer) => Ok(answer),
            Err(e) if is_cancelled(&e) => Ok(None),
            Err(e) => Err(FrontendError::Dialoguer(e)),
        }
    }
}

fn bounds_hint(multi: &MultiSelectQuestion) -> String {
    match (multi.min_choices, multi.max_choices) {
        (Some(min), Some(max)) => format!("Choose between {min} and {max} options"),
        (Some(min), None) => format!("Choose at least {min} options"),
        (None, Some(max)) => format!("Choose at most {max} options"),
        (None, None) => "Invalid selection".to_string(),
    }
}
