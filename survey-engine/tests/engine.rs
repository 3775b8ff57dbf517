use std::cell::Cell;

use anyhow::anyhow;
use example_surveys::{
    pizza_toppings, rainy_day, satisfaction_rating, satisfaction_select, site_kit_feedback,
    storybook_session, weather,
};
use serde_json::json;
use survey_engine::{
    AnswerChoice, AnswerRecord, AnswerStore, AnswerValue, Answers, ChoiceQuestion, ChosenAnswer,
    Completion, EngineConfig, EngineError, EngineState, EventKind, InMemoryAnswerStore,
    NoMatchPolicy, Outcome, Question, QuestionKind, RecordingEventSink, StoreError,
    SurveyDefinition, SurveyEngine, SurveyEvent, TriggerCondition, View,
};

const SESSION_ID: &str = "storybook_session";

/// Store whose reads and writes fail until `recover` is called.
struct FlakyStore {
    inner: InMemoryAnswerStore,
    healthy: Cell<bool>,
}

impl FlakyStore {
    fn broken() -> Self {
        Self {
            inner: InMemoryAnswerStore::new(),
            healthy: Cell::new(false),
        }
    }

    fn recover(&self) {
        self.healthy.set(true);
    }
}

impl AnswerStore for FlakyStore {
    fn answers(&self, session_id: &str) -> Result<Option<Answers>, StoreError> {
        if self.healthy.get() {
            self.inner.answers(session_id)
        } else {
            Err(StoreError::Unavailable("offline".to_string()))
        }
    }

    fn set_answers(&self, session_id: &str, answers: Answers) -> Result<(), StoreError> {
        if self.healthy.get() {
            self.inner.set_answers(session_id, answers)
        } else {
            Err(StoreError::backend(anyhow!("quota exceeded")))
        }
    }
}

fn question_ordinal(engine: &SurveyEngine<&InMemoryAnswerStore, &RecordingEventSink>) -> u32 {
    match engine.view() {
        View::Question(question) => question.ordinal(),
        other => panic!("expected a question, got {other:?}"),
    }
}

fn answered_events(sink: &RecordingEventSink) -> Vec<(u32, AnswerValue)> {
    sink.events()
        .into_iter()
        .filter_map(|envelope| match envelope.event {
            SurveyEvent::QuestionAnswered {
                question_ordinal,
                answer,
            } => Some((question_ordinal, answer)),
            _ => None,
        })
        .collect()
}

#[test]
fn mount_shows_first_question_once() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let engine = SurveyEngine::mount(weather(), &store, &sink);

    assert_eq!(engine.state(), EngineState::Asking { question_ordinal: 1 });
    assert_eq!(sink.kinds(), vec![EventKind::SurveyShown]);

    for _ in 0..5 {
        let View::Question(question) = engine.view() else {
            panic!("expected a question");
        };
        assert_eq!(question.ordinal(), 1);
        assert_eq!(question.position(), 1);
        assert_eq!(question.total(), 4);
    }
    assert_eq!(sink.len(), 1);

    let shown = &sink.events()[0];
    assert_eq!(shown.session, storybook_session());
    assert_eq!(
        serde_json::to_value(shown.request_body()).unwrap(),
        json!({
            "data": {
                "event": { "survey_shown": {} },
                "session": { "session_id": "storybook_session", "session_token": "token_12345" }
            }
        })
    );
}

#[test]
fn multi_select_bounds() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(pizza_toppings(), &store, &sink);

    assert!(!engine.can_submit());
    engine.select(1).unwrap();
    assert!(!engine.can_submit());
    assert_eq!(engine.submit().unwrap(), Outcome::Ignored);

    engine.select(2).unwrap();
    assert!(engine.can_submit());
    engine.select(3).unwrap();
    assert!(engine.can_submit());
    engine.select(4).unwrap();
    assert!(engine.can_submit());

    assert_eq!(engine.select(5).unwrap(), Outcome::Ignored);
    assert_eq!(engine.draft().selected_count(), 4);

    let View::Question(question) = engine.view() else {
        panic!("expected a question");
    };
    let enabled: Vec<(u32, bool)> = question
        .options()
        .iter()
        .map(|option| (option.choice.answer_ordinal, option.enabled))
        .collect();
    assert_eq!(
        enabled,
        vec![(1, true), (2, true), (3, true), (4, true), (5, false), (6, false)]
    );

    // Deselecting frees a slot again.
    assert_eq!(engine.select(4).unwrap(), Outcome::Updated);
    assert_eq!(engine.select(5).unwrap(), Outcome::Updated);
    assert_eq!(sink.len(), 1);
}

#[test]
fn multi_select_answer_shape() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(pizza_toppings(), &store, &sink);

    engine.select(6).unwrap();
    engine.select(3).unwrap();
    engine.select(1).unwrap();
    assert!(!engine.can_submit());

    assert_eq!(engine.set_other_text("My answer").unwrap(), Outcome::Updated);
    let outcome = engine.submit().unwrap();
    assert_eq!(
        outcome,
        Outcome::Transitioned(EngineState::Complete {
            completion_ordinal: Some(1)
        })
    );

    let envelope = &sink.events()[1];
    assert_eq!(
        serde_json::to_value(&envelope.event).unwrap(),
        json!({
            "question_answered": {
                "question_ordinal": 1,
                "answer": {
                    "answer": [
                        { "answer_ordinal": 1 },
                        { "answer_ordinal": 3 },
                        { "answer_ordinal": 6, "answer_text": "My answer" }
                    ]
                }
            }
        })
    );
}

#[test]
fn open_text_is_truncated() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(site_kit_feedback(), &store, &sink);

    let long = "a".repeat(110);
    engine.set_text(&long);
    assert_eq!(engine.draft().text(), &long[..100]);

    engine.submit().unwrap();
    let stored = store.answers_for(SESSION_ID).unwrap();
    assert_eq!(stored.get(1).unwrap().answer.as_text(), Some(&long[..100]));
    assert_eq!(
        answered_events(&sink),
        vec![(1, AnswerValue::Text(long[..100].to_string()))]
    );
}

#[test]
fn open_text_respects_configured_length() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let config = EngineConfig::new().with_max_text_length(10);
    let mut engine = SurveyEngine::mount_with_config(site_kit_feedback(), &store, &sink, config);

    engine.set_text("Site Kit is great");
    assert_eq!(engine.draft().text(), "Site Kit i");
}

#[test]
fn blank_open_text_cannot_be_submitted() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(site_kit_feedback(), &store, &sink);

    engine.set_text("   ");
    assert!(!engine.can_submit());
    assert_eq!(engine.submit().unwrap(), Outcome::Ignored);
    assert!(store.answers_for(SESSION_ID).is_none());
    assert_eq!(sink.kinds(), vec![EventKind::SurveyShown]);
}

#[test]
fn completion_waits_for_every_question() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(weather(), &store, &sink);

    // Matches completion 1's trigger, but three questions are still open.
    engine.select(5).unwrap();
    assert_eq!(engine.state(), EngineState::Asking { question_ordinal: 2 });
    assert_eq!(sink.count(EventKind::CompletionShown), 0);

    engine.select(1).unwrap();
    engine.select(2).unwrap();
    assert_eq!(question_ordinal(&engine), 4);
    assert!(engine.current_completion().is_none());

    engine.select(3).unwrap();
    assert_eq!(
        engine.state(),
        EngineState::Complete {
            completion_ordinal: Some(1)
        }
    );
    let View::Completion(completion) = engine.view() else {
        panic!("expected the completion");
    };
    assert_eq!(completion.title(), "You answered positively!");
    assert_eq!(
        sink.kinds(),
        vec![
            EventKind::SurveyShown,
            EventKind::QuestionAnswered,
            EventKind::QuestionAnswered,
            EventKind::QuestionAnswered,
            EventKind::QuestionAnswered,
            EventKind::CompletionShown,
        ]
    );
}

#[test]
fn falls_back_to_untriggered_completion() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(weather(), &store, &sink);

    for point in [4, 5, 5, 5] {
        engine.select(point).unwrap();
    }

    assert_eq!(
        engine.state(),
        EngineState::Complete {
            completion_ordinal: Some(2)
        }
    );
    assert_eq!(
        sink.events().last().unwrap().event,
        SurveyEvent::CompletionShown {
            completion_ordinal: 2
        }
    );
}

#[test]
fn triggered_completion_with_any_of_list() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(satisfaction_rating(), &store, &sink);

    engine.select(2).unwrap();
    let View::Completion(completion) = engine.view() else {
        panic!("expected the completion");
    };
    assert_eq!(completion.ordinal(), 2);
    assert!(completion.follow_up().is_none());
}

#[test]
fn no_match_without_fallback_follows_policy() {
    let definition = SurveyDefinition::new(
        storybook_session(),
        satisfaction_rating().questions,
        vec![
            Completion::new(1, "Loved it").with_trigger(TriggerCondition::new(1, 5)),
            Completion::new(2, "Hated it").with_trigger(TriggerCondition::new(1, 1)),
        ],
    );

    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(definition.clone(), &store, &sink);
    engine.select(3).unwrap();
    assert_eq!(
        engine.state(),
        EngineState::Complete {
            completion_ordinal: Some(1)
        }
    );

    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let config = EngineConfig::new().with_no_match_policy(NoMatchPolicy::RenderNothing);
    let mut engine = SurveyEngine::mount_with_config(definition, &store, &sink, config);
    engine.select(3).unwrap();
    assert_eq!(
        engine.state(),
        EngineState::Complete {
            completion_ordinal: None
        }
    );
    assert!(engine.view().is_nothing());
    assert_eq!(sink.count(EventKind::CompletionShown), 0);
    assert_eq!(engine.dismiss(), Outcome::Ignored);
}

#[test]
fn submit_records_and_advances() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(weather(), &store, &sink);

    let outcome = engine.select(4).unwrap();
    assert_eq!(
        outcome,
        Outcome::Transitioned(EngineState::Asking { question_ordinal: 2 })
    );

    let stored = store.answers_for(SESSION_ID).unwrap();
    assert_eq!(
        stored.as_slice(),
        &[AnswerRecord::new(1, ChosenAnswer::new(4))]
    );
    assert_eq!(engine.answers(), &stored);
    assert_eq!(
        answered_events(&sink),
        vec![(1, AnswerValue::Choice(ChosenAnswer::new(4)))]
    );
    assert_eq!(engine.current_question_ordinal(), Some(2));
    assert_eq!(engine.draft().selected_count(), 0);
}

#[test]
fn single_select_waits_for_submit() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(satisfaction_select(), &store, &sink);

    assert_eq!(engine.select(4).unwrap(), Outcome::Updated);
    assert_eq!(engine.select(6).unwrap(), Outcome::Updated);
    assert!(!engine.can_submit());
    assert_eq!(engine.submit().unwrap(), Outcome::Ignored);

    engine.set_other_text("My cool answer.").unwrap();
    assert!(engine.can_submit());
    engine.submit().unwrap();

    assert_eq!(
        answered_events(&sink),
        vec![(
            1,
            AnswerValue::Choice(ChosenAnswer::with_text(6, "My cool answer."))
        )]
    );
}

#[test]
fn rating_has_no_submit_control() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let engine = SurveyEngine::mount(satisfaction_rating(), &store, &sink);

    let View::Question(question) = engine.view() else {
        panic!("expected a question");
    };
    assert!(!question.has_submit_control());
    assert_eq!(question.options().len(), 5);
}

#[test]
fn dismiss_while_asking() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(weather(), &store, &sink);

    assert_eq!(
        engine.dismiss(),
        Outcome::Transitioned(EngineState::Dismissed)
    );
    assert!(engine.view().is_nothing());

    // Nothing gets through once dismissed.
    assert_eq!(engine.dismiss(), Outcome::Ignored);
    assert_eq!(engine.select(5).unwrap(), Outcome::Ignored);
    assert_eq!(engine.submit().unwrap(), Outcome::Ignored);
    assert_eq!(engine.set_text("late"), Outcome::Ignored);
    assert!(engine.follow_up().is_none());

    assert_eq!(
        sink.kinds(),
        vec![EventKind::SurveyShown, EventKind::SurveyClosed]
    );
    assert!(store.answers_for(SESSION_ID).is_none());
}

#[test]
fn dismiss_on_completion() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(satisfaction_rating(), &store, &sink);

    engine.select(5).unwrap();
    assert_eq!(
        engine.dismiss(),
        Outcome::Transitioned(EngineState::Dismissed)
    );
    assert_eq!(engine.dismiss(), Outcome::Ignored);
    assert!(engine.view().is_nothing());
    assert_eq!(sink.count(EventKind::SurveyClosed), 1);
    assert_eq!(sink.len(), 4);
}

#[test]
fn follow_up_closes_the_survey() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(satisfaction_rating(), &store, &sink);

    engine.select(4).unwrap();
    let View::Completion(completion) = engine.view() else {
        panic!("expected the completion");
    };
    let link = completion.follow_up().unwrap();
    assert_eq!(link.text, "Let’s go");

    assert_eq!(
        engine.follow_up().as_deref(),
        Some("https://example.com/survey")
    );
    assert!(engine.is_dismissed());
    assert!(engine.follow_up().is_none());

    let events = sink.events();
    let tail: Vec<_> = events[events.len() - 2..]
        .iter()
        .map(|envelope| envelope.event.clone())
        .collect();
    assert_eq!(
        tail,
        vec![
            SurveyEvent::FollowUpLinkClicked {
                completion_ordinal: 1
            },
            SurveyEvent::SurveyClosed {},
        ]
    );
}

#[test]
fn remount_after_every_answer_goes_to_completion() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    {
        let mut engine = SurveyEngine::mount(weather(), &store, &sink);
        for point in [5, 3, 3, 3] {
            engine.select(point).unwrap();
        }
    }

    let sink = RecordingEventSink::new();
    let engine = SurveyEngine::mount(weather(), &store, &sink);
    assert_eq!(
        engine.state(),
        EngineState::Complete {
            completion_ordinal: Some(1)
        }
    );
    assert_eq!(
        sink.kinds(),
        vec![EventKind::SurveyShown, EventKind::CompletionShown]
    );
    assert_eq!(engine.answers().len(), 4);
}

#[test]
fn remount_resumes_at_first_unanswered() {
    let store = InMemoryAnswerStore::new().with_answers(
        SESSION_ID,
        Answers::from(vec![
            AnswerRecord::new(1, ChosenAnswer::new(2)),
            AnswerRecord::new(2, ChosenAnswer::new(4)),
        ]),
    );
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(weather(), &store, &sink);
    assert_eq!(engine.current_question_ordinal(), Some(3));

    let View::Question(question) = engine.view() else {
        panic!("expected a question");
    };
    assert_eq!(question.position(), 3);

    engine.select(1).unwrap();
    engine.select(1).unwrap();
    assert_eq!(store.answers_for(SESSION_ID).unwrap().len(), 4);
}

#[test]
fn unsupported_question_type_renders_nothing() {
    let definition = example_surveys::invalid_question_type();
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(definition, &store, &sink);

    assert_eq!(engine.state(), EngineState::Unsupported);
    assert!(engine.view().is_nothing());
    assert_eq!(engine.select(1).unwrap(), Outcome::Ignored);
    assert_eq!(engine.dismiss(), Outcome::Ignored);
    assert!(sink.is_empty());
}

#[test]
fn unsupported_question_type_from_json() {
    let definition =
        SurveyDefinition::from_json(example_surveys::INVALID_QUESTION_TYPE_JSON).unwrap();
    let unknown = definition.first_unsupported().unwrap();
    assert_eq!(
        unknown.kind(),
        &QuestionKind::Unsupported("not_a_real_question_type".to_string())
    );

    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let engine = SurveyEngine::mount(definition, &store, &sink);
    assert!(engine.view().is_nothing());
    assert!(sink.is_empty());
}

#[test]
fn conditional_question_is_skipped_until_triggered() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(rainy_day(), &store, &sink);

    engine.select(2).unwrap();
    assert_eq!(engine.current_question_ordinal(), Some(3));
    engine.select(4).unwrap();
    assert!(matches!(engine.state(), EngineState::Complete { .. }));
    assert_eq!(engine.answers().len(), 2);

    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(rainy_day(), &store, &sink);

    engine.select(5).unwrap();
    assert_eq!(engine.current_question_ordinal(), Some(2));
    engine.set_text("The smell");
    engine.submit().unwrap();
    assert_eq!(engine.current_question_ordinal(), Some(3));
}

#[test]
fn store_write_failure_keeps_the_question() {
    let store = FlakyStore::broken();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(site_kit_feedback(), &store, &sink);

    // The failed read at mount falls back to a fresh survey.
    assert_eq!(engine.current_question_ordinal(), Some(1));

    engine.set_text("Foobar");
    let err = engine.submit().unwrap_err();
    assert!(matches!(
        err,
        EngineError::RecordAnswer {
            question_ordinal: 1,
            ..
        }
    ));
    assert_eq!(engine.current_question_ordinal(), Some(1));
    assert_eq!(engine.draft().text(), "Foobar");
    assert!(engine.answers().is_empty());
    assert_eq!(sink.kinds(), vec![EventKind::SurveyShown]);

    store.recover();
    engine.submit().unwrap();
    assert!(matches!(engine.state(), EngineState::Complete { .. }));
    assert_eq!(store.inner.answers_for(SESSION_ID).unwrap().len(), 1);
}

#[test]
fn survey_without_completions_renders_nothing_at_the_end() {
    let definition = SurveyDefinition::new(
        storybook_session(),
        vec![Question::new(
            1,
            "How satisfied are you with Site Kit?",
            QuestionKind::Rating(example_surveys::rating::five_point_scale()),
        )],
        vec![],
    );
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(definition, &store, &sink);

    engine.select(3).unwrap();
    assert_eq!(
        engine.state(),
        EngineState::Complete {
            completion_ordinal: None
        }
    );
    assert!(engine.view().is_nothing());
    assert_eq!(
        sink.kinds(),
        vec![EventKind::SurveyShown, EventKind::QuestionAnswered]
    );
}

#[test]
fn reset_draft_clears_input() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(pizza_toppings(), &store, &sink);

    engine.select(1).unwrap();
    engine.select(2).unwrap();
    assert_eq!(engine.reset_draft(), Outcome::Updated);
    assert_eq!(engine.draft().selected_count(), 0);
    assert!(!engine.can_submit());
}

/// Store whose first read fails; later reads and all writes succeed.
struct FirstReadFails {
    inner: InMemoryAnswerStore,
    reads: Cell<usize>,
}

impl AnswerStore for FirstReadFails {
    fn answers(&self, session_id: &str) -> Result<Option<Answers>, StoreError> {
        self.reads.set(self.reads.get() + 1);
        if self.reads.get() == 1 {
            return Err(StoreError::Unavailable("timeout".to_string()));
        }
        self.inner.answers(session_id)
    }

    fn set_answers(&self, session_id: &str, answers: Answers) -> Result<(), StoreError> {
        self.inner.set_answers(session_id, answers)
    }
}

#[test]
fn rating_write_in_submits_once_filled() {
    let definition = SurveyDefinition::new(
        storybook_session(),
        vec![Question::new(
            1,
            "How satisfied are you with Site Kit?",
            QuestionKind::Rating(ChoiceQuestion::new(vec![
                AnswerChoice::new(1, "Unhappy"),
                AnswerChoice::other(2, "Other"),
            ])),
        )],
        vec![Completion::new(1, "Thanks for sharing your thoughts!")],
    );
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(definition, &store, &sink);

    assert_eq!(engine.select(2).unwrap(), Outcome::Updated);
    let View::Question(question) = engine.view() else {
        panic!("expected a question");
    };
    assert!(!question.has_submit_control());
    assert!(question.other_input_enabled());

    // Blank write-ins keep the question on screen.
    assert_eq!(engine.set_other_text("  ").unwrap(), Outcome::Updated);
    assert_eq!(engine.current_question_ordinal(), Some(1));

    assert_eq!(
        engine.set_other_text("hello").unwrap(),
        Outcome::Transitioned(EngineState::Complete {
            completion_ordinal: Some(1)
        })
    );
    assert_eq!(
        answered_events(&sink),
        vec![(1, AnswerValue::Choice(ChosenAnswer::with_text(2, "hello")))]
    );
}

#[test]
fn failed_read_at_mount_keeps_stored_answers() {
    let store = FirstReadFails {
        inner: InMemoryAnswerStore::new().with_answers(
            SESSION_ID,
            Answers::from(vec![
                AnswerRecord::new(1, ChosenAnswer::new(2)),
                AnswerRecord::new(2, ChosenAnswer::new(4)),
            ]),
        ),
        reads: Cell::new(0),
    };
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(weather(), &store, &sink);
    assert_eq!(engine.current_question_ordinal(), Some(1));

    engine.select(3).unwrap();

    let stored = store.inner.answers_for(SESSION_ID).unwrap();
    assert_eq!(
        stored.as_slice(),
        &[
            AnswerRecord::new(1, ChosenAnswer::new(3)),
            AnswerRecord::new(2, ChosenAnswer::new(4)),
        ]
    );
    assert_eq!(engine.answers(), &stored);
    assert_eq!(engine.current_question_ordinal(), Some(3));

    // Later submits write through without re-reading.
    engine.select(1).unwrap();
    assert_eq!(store.reads.get(), 2);
    assert_eq!(store.inner.answers_for(SESSION_ID).unwrap().len(), 3);
}

#[test]
fn failed_re_read_writes_nothing() {
    let store = FlakyStore::broken();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(site_kit_feedback(), &store, &sink);

    engine.set_text("Foobar");
    let err = engine.submit().unwrap_err();
    assert!(matches!(
        err,
        EngineError::RecordAnswer {
            question_ordinal: 1,
            source: StoreError::Unavailable(_)
        }
    ));
    assert!(store.inner.answers_for(SESSION_ID).is_none());
}

#[test]
fn completion_shown_once_across_views() {
    let store = InMemoryAnswerStore::new();
    let sink = RecordingEventSink::new();
    let mut engine = SurveyEngine::mount(satisfaction_rating(), &store, &sink);

    engine.select(5).unwrap();
    for _ in 0..5 {
        let View::Completion(completion) = engine.view() else {
            panic!("expected the completion");
        };
        assert_eq!(completion.ordinal(), 1);
    }
    assert!(engine.current_completion().is_some());

    assert_eq!(sink.count(EventKind::CompletionShown), 1);
    assert_eq!(
        sink.kinds(),
        vec![
            EventKind::SurveyShown,
            EventKind::QuestionAnswered,
            EventKind::CompletionShown
        ]
    );
}
