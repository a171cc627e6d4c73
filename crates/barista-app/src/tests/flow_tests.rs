//! End-to-end flows through the event loop, driven the way the UI drives it

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use barista_config::{Baseline, Config};
use barista_lang_spanish::{SpanishConverter, SpanishPack};
use barista_speech::{
    RecognitionCapability, RecognitionOptions, ScriptedRecognizer, SpeechAdapter, SpeechError,
    SpeechSynthesizer,
};
use barista_types::{
    AppEvent, ConversionResult, OptionMark, QuizView, RecognitionEvent, RecognitionSlot, UiEvent,
};
use barista_ui::render::RECOGNITION_UNAVAILABLE;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::controller::recognition_sink;
use crate::events::{EventContext, event_loop};
use crate::scheduler::Scheduler;
use crate::state::AppState;

#[derive(Clone, Default)]
struct RecordingSynthesizer {
    speaking: Arc<AtomicBool>,
    spoken: Arc<Mutex<Vec<String>>>,
}

impl SpeechSynthesizer for RecordingSynthesizer {
    fn is_speaking(&self) -> bool {
        self.speaking.load(Ordering::SeqCst)
    }

    fn speak(&mut self, text: &str, _locale: &str) -> Result<(), SpeechError> {
        self.speaking.store(true, Ordering::SeqCst);
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

struct Harness {
    to_app: AsyncSender<AppEvent>,
    from_app: AsyncReceiver<AppEvent>,
    synth: RecordingSynthesizer,
    _cancel: CancellationToken,
}

impl Harness {
    async fn new(recognition: RecognitionCapability) -> Self {
        let config = Config::default();
        let (to_app, app_rx) = kanal::bounded_async(64);
        let (ui_tx, from_app) = kanal::bounded_async(64);

        let synth = RecordingSynthesizer::default();
        let speech = SpeechAdapter::new(
            Box::new(synth.clone()),
            recognition,
            RecognitionOptions::from(&config.speech),
            recognition_sink(to_app.clone()),
        );
        let converter = SpanishConverter::new(Baseline::Lowercased).unwrap();
        let state =
            AppState::new(config, &SpanishPack::new(), Box::new(converter), speech).unwrap();

        let cancel = CancellationToken::new();
        let ctx = EventContext {
            app_to_ui_tx: ui_tx,
            scheduler: Scheduler::new(to_app.clone(), cancel.child_token()),
        };
        tokio::spawn(event_loop(state, app_rx, ctx));

        let harness = Self {
            to_app,
            from_app,
            synth,
            _cancel: cancel,
        };

        match harness.next().await {
            AppEvent::ShowPhrases(phrases) => assert_eq!(phrases.len(), 9),
            other => panic!("expected phrases, got {other:?}"),
        }
        assert!(matches!(
            harness.next().await,
            AppEvent::ShowQuiz(QuizView::NotStarted)
        ));
        assert!(matches!(harness.next().await, AppEvent::BackendReady));

        harness
    }

    async fn send(&self, event: UiEvent) {
        self.to_app.send(AppEvent::UiEvent(event)).await.unwrap();
    }

    async fn next(&self) -> AppEvent {
        timeout(Duration::from_secs(5), self.from_app.recv())
            .await
            .expect("Timeout - event never arrived!")
            .expect("channel closed")
    }

    async fn nothing_within(&self, wait: Duration) -> bool {
        timeout(wait, self.from_app.recv()).await.is_err()
    }

    async fn quiz(&self) -> QuizView {
        match self.next().await {
            AppEvent::ShowQuiz(view) => view,
            other => panic!("expected quiz view, got {other:?}"),
        }
    }

    /// Round-trips a score request so every earlier event has been handled
    async fn sync(&self) -> String {
        self.send(UiEvent::ShowScore).await;
        match self.next().await {
            AppEvent::Notice(text) => text,
            other => panic!("expected notice, got {other:?}"),
        }
    }
}

fn question_number(view: &QuizView) -> usize {
    match view {
        QuizView::Question(q) => q.number,
        other => panic!("expected question, got {other:?}"),
    }
}

fn marks(view: &QuizView) -> Vec<OptionMark> {
    match view {
        QuizView::Question(q) => q.options.iter().map(|o| o.mark).collect(),
        other => panic!("expected question, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_full_quiz_run() {
    let h = Harness::new(RecognitionCapability::Unsupported).await;
    assert_eq!(h.sync().await, "Puntaje actual: 0 / 4");

    h.send(UiEvent::StartQuiz).await;
    assert_eq!(question_number(&h.quiz().await), 1);

    // (option, correct?) for each question
    let answers = [(2, true), (1, true), (0, false), (1, true)];
    for (n, (option, correct)) in answers.into_iter().enumerate() {
        h.send(UiEvent::SelectOption(option)).await;
        let evaluated = h.quiz().await;
        let marks = marks(&evaluated);
        if correct {
            assert_eq!(marks[option], OptionMark::Correct);
        } else {
            assert_eq!(marks[option], OptionMark::Wrong);
            assert_eq!(marks.iter().filter(|m| **m == OptionMark::Correct).count(), 1);
        }

        // answer stays visible for the advance delay
        assert!(h.nothing_within(Duration::from_millis(800)).await);

        let next = h.quiz().await;
        if n + 1 < answers.len() {
            assert_eq!(question_number(&next), n + 2);
        } else {
            assert_eq!(next, QuizView::Summary { score: 3, total: 4 });
        }
    }

    h.send(UiEvent::SelectOption(0)).await;
    assert_eq!(h.sync().await, "Puntaje actual: 3 / 4");
}

#[tokio::test(start_paused = true)]
async fn test_second_click_is_ignored() {
    let h = Harness::new(RecognitionCapability::Unsupported).await;
    h.send(UiEvent::StartQuiz).await;
    h.quiz().await;

    h.send(UiEvent::SelectOption(2)).await;
    h.send(UiEvent::SelectOption(0)).await;
    let evaluated = h.quiz().await;
    assert_eq!(
        marks(&evaluated),
        vec![OptionMark::Unmarked, OptionMark::Unmarked, OptionMark::Correct]
    );

    // next view is the second question, not a re-evaluation
    assert_eq!(question_number(&h.quiz().await), 2);
    assert_eq!(h.sync().await, "Puntaje actual: 1 / 4");
}

#[tokio::test(start_paused = true)]
async fn test_restart_drops_pending_advance() {
    let h = Harness::new(RecognitionCapability::Unsupported).await;
    h.send(UiEvent::StartQuiz).await;
    h.quiz().await;

    h.send(UiEvent::SelectOption(2)).await;
    h.quiz().await;

    h.send(UiEvent::StartQuiz).await;
    let restarted = h.quiz().await;
    assert_eq!(question_number(&restarted), 1);
    assert_eq!(marks(&restarted), vec![OptionMark::Unmarked; 3]);

    assert!(h.nothing_within(Duration::from_secs(2)).await);
    assert_eq!(h.sync().await, "Puntaje actual: 0 / 4");
}

#[tokio::test(start_paused = true)]
async fn test_conversion_panel() {
    let h = Harness::new(RecognitionCapability::Unsupported).await;

    h.send(UiEvent::ConvertText("¿Me da un café con leche?".to_string()))
        .await;
    assert!(matches!(
        h.next().await,
        AppEvent::ShowConversion(ConversionResult::Translated { text })
            if text == "Can i have a coffee with milk"
    ));

    h.send(UiEvent::ConvertText("Buenas tardes".to_string())).await;
    assert!(matches!(
        h.next().await,
        AppEvent::ShowConversion(ConversionResult::LowConfidence)
    ));

    // blank input is ignored entirely
    h.send(UiEvent::ConvertText("   ".to_string())).await;
    assert_eq!(h.sync().await, "Puntaje actual: 0 / 4");
}

#[tokio::test(start_paused = true)]
async fn test_speak_while_busy_is_dropped() {
    let h = Harness::new(RecognitionCapability::Unsupported).await;

    h.send(UiEvent::Speak("Hello, welcome.".to_string())).await;
    h.send(UiEvent::Speak("Anything else?".to_string())).await;
    h.sync().await;

    assert_eq!(
        *h.synth.spoken.lock().unwrap(),
        vec!["Hello, welcome.".to_string()]
    );

    h.synth.speaking.store(false, Ordering::SeqCst);
    h.send(UiEvent::Speak("Anything else?".to_string())).await;
    h.sync().await;
    assert_eq!(h.synth.spoken.lock().unwrap().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_recognition_unavailable_notice() {
    let h = Harness::new(RecognitionCapability::Unsupported).await;

    h.send(UiEvent::StartRecognition).await;
    assert!(matches!(
        h.next().await,
        AppEvent::Notice(text) if text == RECOGNITION_UNAVAILABLE
    ));

    // stop without a session does nothing
    h.send(UiEvent::StopRecognition).await;
    assert_eq!(h.sync().await, "Puntaje actual: 0 / 4");
}

#[tokio::test(start_paused = true)]
async fn test_recognition_cycle_updates_slot() {
    let recognizer = ScriptedRecognizer::new(vec![RecognitionEvent::Result(
        "Anything else?".to_string(),
    )]);
    let h = Harness::new(RecognitionCapability::Supported(Box::new(recognizer))).await;

    h.send(UiEvent::StartRecognition).await;
    assert!(matches!(
        h.next().await,
        AppEvent::ShowRecognized(RecognitionSlot::Listening)
    ));

    h.send(UiEvent::StopRecognition).await;
    assert!(matches!(
        h.next().await,
        AppEvent::ShowRecognized(RecognitionSlot::Stopped)
    ));
    assert!(matches!(
        h.next().await,
        AppEvent::ShowRecognized(RecognitionSlot::Transcript(text)) if text == "Anything else?"
    ));

    // script exhausted: the next attempt reports the platform error code
    h.send(UiEvent::StartRecognition).await;
    h.next().await;
    h.send(UiEvent::StopRecognition).await;
    h.next().await;
    assert!(matches!(
        h.next().await,
        AppEvent::ShowRecognized(RecognitionSlot::Error(code)) if code == "no-speech"
    ));
}

#[tokio::test(start_paused = true)]
async fn test_quick_relisten_keeps_attempts_apart() {
    let recognizer = ScriptedRecognizer::new(vec![
        RecognitionEvent::Result("first".to_string()),
        RecognitionEvent::Result("second".to_string()),
    ]);
    let h = Harness::new(RecognitionCapability::Supported(Box::new(recognizer))).await;

    // queued back to back, before the first result makes it into the loop
    h.send(UiEvent::StartRecognition).await;
    h.send(UiEvent::StopRecognition).await;
    h.send(UiEvent::StartRecognition).await;

    let mut slots = Vec::new();
    for _ in 0..3 {
        match h.next().await {
            AppEvent::ShowRecognized(slot) => slots.push(slot),
            other => panic!("expected recognized slot, got {other:?}"),
        }
    }
    assert_eq!(
        slots,
        vec![
            RecognitionSlot::Listening,
            RecognitionSlot::Stopped,
            RecognitionSlot::Listening,
        ]
    );

    // the first attempt's transcript must not complete the second one
    assert!(h.nothing_within(Duration::from_secs(1)).await);

    h.send(UiEvent::StopRecognition).await;
    assert!(matches!(
        h.next().await,
        AppEvent::ShowRecognized(RecognitionSlot::Stopped)
    ));
    assert!(matches!(
        h.next().await,
        AppEvent::ShowRecognized(RecognitionSlot::Transcript(text)) if text == "second"
    ));
    assert!(h.nothing_within(Duration::from_secs(1)).await);
}

#[tokio::test(start_paused = true)]
async fn test_close_ends_event_loop() {
    let h = Harness::new(RecognitionCapability::Unsupported).await;

    h.send(UiEvent::Close).await;
    let closed = timeout(Duration::from_secs(1), h.from_app.recv()).await;
    assert!(matches!(closed, Ok(Err(_))), "backend should drop its UI sender");
}
