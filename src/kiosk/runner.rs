//! Kiosk orchestrator: the single task that owns reaction memory.
//!
//! [`KioskOrchestrator`] owns the [`ReactionMachine`] and the
//! [`CameraController`], so the reaction state is only ever touched from
//! one task.  Its loop multiplexes four sources:
//!
//! ```text
//! KioskCommand (UI / hotkeys) ──▶ activate / deactivate / visibility / chat
//! sampling interval tick      ──▶ spawn one sample task (skipped if busy)
//! SampleOutcome               ──▶ overlay + ReactionMachine ──▶ speech
//! chat reply                  ──▶ transcript (+ speech)
//! ```
//!
//! Sample tasks are tagged with the session generation they were started
//! in; results from an earlier session are dropped.  Speech and chat never
//! block the loop.

use std::sync::{Arc, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::chat::{AssistantReply, ChatClient, ChatError};
use crate::config::{AppConfig, CameraConfig, ChatConfig};
use crate::emotion::Detection;
use crate::reaction::{PhraseBook, Reaction, ReactionMachine};
use crate::speech::SpeechDispatcher;
use crate::vision::{ExpressionSampler, SampleError};

use super::lifecycle::CameraController;
use super::state::{KioskState, SharedState};

// ---------------------------------------------------------------------------
// KioskCommand
// ---------------------------------------------------------------------------

/// Requests sent to the orchestrator by the window and the hotkey listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KioskCommand {
    /// Switch the camera session on if off, off if on.
    ToggleCamera,
    ActivateCamera,
    DeactivateCamera,
    /// Show or hide the camera panel.  Does not touch the session.
    ToggleVisibility,
    /// Send one chat message.
    SendChat(String),
    DismissNotice,
}

/// Result of one sampling task.
#[derive(Debug)]
pub struct SampleOutcome {
    pub generation: u64,
    pub result: Result<Detection, SampleError>,
}

// ---------------------------------------------------------------------------
// KioskOrchestrator
// ---------------------------------------------------------------------------

/// Drives sampling, reactions, camera lifecycle and chat.
///
/// Create with [`KioskOrchestrator::new`] inside a tokio runtime, then spawn
/// [`run`](Self::run).
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use emotion_kiosk::chat::ChatClient;
/// # use emotion_kiosk::vision::ExpressionSampler;
/// use emotion_kiosk::config::AppConfig;
/// use emotion_kiosk::kiosk::{shared_state_with_capacity, KioskOrchestrator};
/// use emotion_kiosk::reaction::PhraseBook;
/// use emotion_kiosk::speech::{SilentSpeech, SpeechDispatcher};
///
/// # async fn example(sampler: ExpressionSampler, chat: Arc<dyn ChatClient>) {
/// let config = AppConfig::default();
/// let state = shared_state_with_capacity(config.chat.max_transcript_entries);
/// let speech = SpeechDispatcher::spawn(
///     Arc::new(SilentSpeech),
///     state.clone(),
///     config.speech.caption_duration(),
/// );
///
/// let (command_tx, command_rx) = tokio::sync::mpsc::channel(32);
/// let orchestrator = KioskOrchestrator::new(
///     &config,
///     state,
///     sampler,
///     chat,
///     speech,
///     PhraseBook::from_config(&config.phrases),
/// );
/// tokio::spawn(orchestrator.run(command_rx));
/// # drop(command_tx);
/// # }
/// ```
pub struct KioskOrchestrator {
    state: SharedState,
    camera: CameraController,
    machine: ReactionMachine,
    sampler: ExpressionSampler,
    chat: Arc<dyn ChatClient>,
    speech: SpeechDispatcher,

    camera_config: CameraConfig,
    chat_config: ChatConfig,
    period: Duration,

    /// Generation of the sample task currently running, if any.
    in_flight: Option<u64>,

    sample_tx: mpsc::UnboundedSender<SampleOutcome>,
    sample_rx: mpsc::UnboundedReceiver<SampleOutcome>,
    chat_tx: mpsc::UnboundedSender<Result<String, ChatError>>,
    chat_rx: mpsc::UnboundedReceiver<Result<String, ChatError>>,
}

impl KioskOrchestrator {
    pub fn new(
        config: &AppConfig,
        state: SharedState,
        sampler: ExpressionSampler,
        chat: Arc<dyn ChatClient>,
        speech: SpeechDispatcher,
        phrases: PhraseBook,
    ) -> Self {
        Self::with_machine(config, state, sampler, chat, speech, ReactionMachine::new(phrases))
    }

    /// Use a pre-built machine (e.g. one with a seeded picker).
    pub fn with_machine(
        config: &AppConfig,
        state: SharedState,
        sampler: ExpressionSampler,
        chat: Arc<dyn ChatClient>,
        speech: SpeechDispatcher,
        machine: ReactionMachine,
    ) -> Self {
        let camera = CameraController::new(sampler.source(), config.camera.start_visible);
        let (sample_tx, sample_rx) = mpsc::unbounded_channel();
        let (chat_tx, chat_rx) = mpsc::unbounded_channel();

        {
            let mut st = state.lock().unwrap_or_else(PoisonError::into_inner);
            st.camera_visible = camera.is_visible();
        }

        Self {
            state,
            camera,
            machine,
            sampler,
            chat,
            speech,
            camera_config: config.camera.clone(),
            chat_config: config.chat.clone(),
            period: config.sampler.period(),
            in_flight: None,
            sample_tx,
            sample_rx,
            chat_tx,
            chat_rx,
        }
    }

    // -----------------------------------------------------------------------
    // Main async loop
    // -----------------------------------------------------------------------

    /// Run until `command_rx` is closed.
    ///
    /// When `camera.start_active` is set the first session starts silently.
    pub async fn run(mut self, mut command_rx: mpsc::Receiver<KioskCommand>) {
        if self.camera_config.start_active {
            self.activate_camera(false);
        }

        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                command = command_rx.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                _ = ticker.tick() => self.on_tick(),
                Some(outcome) = self.sample_rx.recv() => {
                    self.on_sample(outcome);
                }
                Some(result) = self.chat_rx.recv() => self.on_chat_reply(result),
            }
        }

        self.camera.deactivate(&mut self.machine);
        log::info!("kiosk: command channel closed, orchestrator shutting down");
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    pub fn handle_command(&mut self, command: KioskCommand) {
        log::debug!("kiosk: {command:?}");
        match command {
            KioskCommand::ToggleCamera => {
                if self.camera.is_active() {
                    self.deactivate_camera();
                } else {
                    self.activate_camera(true);
                }
            }
            KioskCommand::ActivateCamera => self.activate_camera(true),
            KioskCommand::DeactivateCamera => self.deactivate_camera(),
            KioskCommand::ToggleVisibility => {
                let visible = self.camera.toggle_visibility();
                self.with_state(|st| st.camera_visible = visible);
            }
            KioskCommand::SendChat(message) => self.send_chat(&message),
            KioskCommand::DismissNotice => self.with_state(|st| st.notice = None),
        }
    }

    /// Start a fresh session.  `acknowledge` speaks the camera-on message.
    fn activate_camera(&mut self, acknowledge: bool) {
        match self.camera.activate(&mut self.machine) {
            Ok(()) => {
                self.with_state(|st| {
                    st.camera_active = true;
                    st.notice = None;
                    st.clear_session();
                });
                if acknowledge {
                    self.speech.announce(&self.camera_config.camera_on_message);
                }
            }
            Err(e) => {
                let notice = self.camera_config.unavailable_message.clone();
                log::error!("kiosk: camera unavailable: {e}");
                self.with_state(|st| {
                    st.camera_active = false;
                    st.notice = Some(notice);
                    st.clear_session();
                });
            }
        }
    }

    fn deactivate_camera(&mut self) {
        self.camera.deactivate(&mut self.machine);
        self.with_state(|st| {
            st.camera_active = false;
            st.clear_session();
        });
        self.speech.announce(&self.camera_config.camera_off_message);
    }

    fn send_chat(&mut self, message: &str) {
        let message = message.trim();
        if message.is_empty() {
            return;
        }

        self.with_state(|st| {
            st.transcript.push_user(message);
            st.pending_chats += 1;
        });

        let chat = Arc::clone(&self.chat);
        let tx = self.chat_tx.clone();
        let message = message.to_string();
        tokio::spawn(async move {
            let result = chat.reply(&message).await;
            let _ = tx.send(result);
        });
    }

    // -----------------------------------------------------------------------
    // Sampling
    // -----------------------------------------------------------------------

    /// Start one sampling task unless the camera is off or one is running.
    pub fn on_tick(&mut self) {
        if !self.camera.is_active() {
            return;
        }
        if let Some(generation) = self.in_flight {
            log::debug!("sampler: tick skipped, sample from session {generation} in flight");
            return;
        }

        let generation = self.camera.generation();
        self.in_flight = Some(generation);

        let sampler = self.sampler.clone();
        let tx = self.sample_tx.clone();
        tokio::spawn(async move {
            let result = sampler.sample().await;
            let _ = tx.send(SampleOutcome { generation, result });
        });
    }

    /// Feed one sample result through the reaction machine.
    ///
    /// Returns `None` when the result is stale or failed.
    pub fn on_sample(&mut self, outcome: SampleOutcome) -> Option<Reaction> {
        self.in_flight = None;

        if !self.camera.is_active() || outcome.generation != self.camera.generation() {
            log::debug!(
                "sampler: dropping result from session {} (current {})",
                outcome.generation,
                self.camera.generation()
            );
            return None;
        }

        let detection = match outcome.result {
            Ok(detection) => detection,
            Err(e) => {
                log::warn!("sampler: {e}; skipping tick");
                return None;
            }
        };

        if let Some(reading) = detection.reading() {
            let reading = reading.clone();
            self.with_state(|st| st.overlay = Some(reading));
        }

        let reaction = self.machine.on_detection(&detection);
        if let Reaction::Speak { label, text } = &reaction {
            let label = *label;
            self.with_state(|st| st.last_reaction = Some(label));
            self.speech.announce(text);
        }
        Some(reaction)
    }

    // -----------------------------------------------------------------------
    // Chat
    // -----------------------------------------------------------------------

    pub fn on_chat_reply(&mut self, result: Result<String, ChatError>) {
        let reply = AssistantReply::resolve(result, &self.chat_config);
        self.with_state(|st| {
            st.pending_chats = st.pending_chats.saturating_sub(1);
            st.transcript.push_assistant(reply.text.clone());
        });
        if reply.speak {
            self.speech.announce(&reply.text);
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn with_state(&self, f: impl FnOnce(&mut KioskState)) {
        let mut st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut st);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::chat::{ScriptedChat, Speaker};
    use crate::emotion::{EmotionLabel, ExpressionReading};
    use crate::kiosk::new_shared_state;
    use crate::reaction::PhrasePicker;
    use crate::speech::RecordingSpeech;
    use crate::vision::{ClassifierError, MockClassifier, MockFrameSource};

    struct Harness {
        orch: KioskOrchestrator,
        state: SharedState,
        spoken: mpsc::UnboundedReceiver<String>,
    }

    impl Harness {
        /// Next utterance, or `None` if nothing arrives within a second.
        async fn next_spoken(&mut self) -> Option<String> {
            tokio::time::timeout(Duration::from_secs(1), self.spoken.recv())
                .await
                .ok()
                .flatten()
        }

        fn nothing_spoken(&mut self) -> bool {
            self.spoken.try_recv().is_err()
        }
    }

    fn single_phrase_book() -> PhraseBook {
        let mut table = BTreeMap::new();
        table.insert("happy".to_string(), vec!["¡Qué alegría!".to_string()]);
        table.insert("sad".to_string(), vec!["Ánimo.".to_string()]);
        table.insert(
            "neutral".to_string(),
            vec!["Hola.".to_string(), "¿Todo bien?".to_string()],
        );
        table.insert("default".to_string(), vec!["Hola, ¿cómo estás?".to_string()]);
        PhraseBook::from_config(&table)
    }

    fn harness_with(source: MockFrameSource, chat: ScriptedChat) -> Harness {
        let config = AppConfig::default();
        let state = new_shared_state();
        let (speech, spoken) = RecordingSpeech::with_channel();
        let dispatcher =
            SpeechDispatcher::spawn(Arc::new(speech), state.clone(), Duration::from_secs(4));
        let sampler = ExpressionSampler::new(
            Arc::new(source),
            Arc::new(MockClassifier::always(EmotionLabel::Happy)),
        );
        let machine =
            ReactionMachine::with_picker(single_phrase_book(), PhrasePicker::seeded(7));
        let orch = KioskOrchestrator::with_machine(
            &config,
            state.clone(),
            sampler,
            Arc::new(chat),
            dispatcher,
            machine,
        );
        Harness { orch, state, spoken }
    }

    fn harness() -> Harness {
        harness_with(MockFrameSource::default(), ScriptedChat::answering("¡Hola!"))
    }

    fn face(label: EmotionLabel, generation: u64) -> SampleOutcome {
        SampleOutcome {
            generation,
            result: Ok(Detection::Face(
                ExpressionReading::new([(label, 0.9)]).unwrap(),
            )),
        }
    }

    fn no_face(generation: u64) -> SampleOutcome {
        SampleOutcome {
            generation,
            result: Ok(Detection::NoFace),
        }
    }

    // ---- Camera lifecycle ---

    #[tokio::test]
    async fn activate_speaks_acknowledgment() {
        let mut h = harness();
        h.orch.handle_command(KioskCommand::ActivateCamera);

        assert!(h.state.lock().unwrap().camera_active);
        assert_eq!(
            h.next_spoken().await.as_deref(),
            Some("Cámara activada. Continuando con el análisis.")
        );
    }

    #[tokio::test]
    async fn deactivate_clears_overlay_and_speaks() {
        let mut h = harness();
        h.orch.activate_camera(false);
        let generation = h.orch.camera.generation();
        h.orch.on_sample(face(EmotionLabel::Happy, generation));
        assert!(h.state.lock().unwrap().overlay.is_some());
        assert_eq!(h.next_spoken().await.as_deref(), Some("¡Qué alegría!"));

        h.orch.handle_command(KioskCommand::DeactivateCamera);

        {
            let st = h.state.lock().unwrap();
            assert!(!st.camera_active);
            assert!(st.overlay.is_none());
            assert!(st.last_reaction.is_none());
        }
        assert_eq!(
            h.next_spoken().await.as_deref(),
            Some("He apagado la cámara, pero sigo aquí para ayudarte.")
        );
    }

    #[tokio::test]
    async fn toggle_camera_alternates() {
        let mut h = harness();
        h.orch.handle_command(KioskCommand::ToggleCamera);
        assert!(h.orch.camera.is_active());
        h.orch.handle_command(KioskCommand::ToggleCamera);
        assert!(!h.orch.camera.is_active());
    }

    #[tokio::test]
    async fn unavailable_camera_sets_notice_without_ack() {
        let mut h = harness_with(
            MockFrameSource::unavailable(),
            ScriptedChat::answering("¡Hola!"),
        );
        h.orch.handle_command(KioskCommand::ActivateCamera);

        {
            let st = h.state.lock().unwrap();
            assert!(!st.camera_active);
            assert!(st.notice.is_some());
        }
        tokio::task::yield_now().await;
        assert!(h.nothing_spoken());

        h.orch.handle_command(KioskCommand::DismissNotice);
        assert!(h.state.lock().unwrap().notice.is_none());
    }

    #[tokio::test]
    async fn toggle_visibility_does_not_touch_session() {
        let mut h = harness();
        h.orch.activate_camera(false);
        let generation = h.orch.camera.generation();

        h.orch.handle_command(KioskCommand::ToggleVisibility);

        assert!(!h.state.lock().unwrap().camera_visible);
        assert!(h.orch.camera.is_active());
        assert_eq!(h.orch.camera.generation(), generation);
    }

    // ---- Reactions ---

    #[tokio::test]
    async fn repeated_label_speaks_once() {
        let mut h = harness();
        h.orch.activate_camera(false);
        let generation = h.orch.camera.generation();

        let first = h.orch.on_sample(face(EmotionLabel::Happy, generation));
        let second = h.orch.on_sample(face(EmotionLabel::Happy, generation));

        assert!(matches!(first, Some(Reaction::Speak { .. })));
        assert_eq!(second, Some(Reaction::Unchanged(EmotionLabel::Happy)));
        assert_eq!(h.next_spoken().await.as_deref(), Some("¡Qué alegría!"));
        tokio::task::yield_now().await;
        assert!(h.nothing_spoken());
        assert_eq!(
            h.state.lock().unwrap().last_reaction,
            Some(EmotionLabel::Happy)
        );
    }

    #[tokio::test]
    async fn no_face_keeps_overlay_and_memory() {
        let mut h = harness();
        h.orch.activate_camera(false);
        let generation = h.orch.camera.generation();

        h.orch.on_sample(face(EmotionLabel::Sad, generation));
        let reaction = h.orch.on_sample(no_face(generation));

        assert_eq!(reaction, Some(Reaction::Ignored));
        let st = h.state.lock().unwrap();
        assert!(st.overlay.as_ref().and_then(|r| r.score(EmotionLabel::Sad)).is_some());
        assert_eq!(h.orch.machine.state().last_emotion, Some(EmotionLabel::Sad));
    }

    #[tokio::test]
    async fn stale_sample_after_deactivate_is_dropped() {
        let mut h = harness();
        h.orch.activate_camera(false);
        let old_generation = h.orch.camera.generation();
        h.orch.handle_command(KioskCommand::DeactivateCamera);
        h.orch.activate_camera(false);

        let reaction = h.orch.on_sample(face(EmotionLabel::Happy, old_generation));

        assert_eq!(reaction, None);
        assert!(h.orch.machine.state().last_emotion.is_none());
        assert!(h.state.lock().unwrap().overlay.is_none());
    }

    #[tokio::test]
    async fn sample_while_inactive_is_dropped() {
        let mut h = harness();
        let generation = h.orch.camera.generation();
        assert_eq!(h.orch.on_sample(face(EmotionLabel::Happy, generation)), None);
    }

    #[tokio::test]
    async fn classifier_failure_changes_nothing() {
        let mut h = harness();
        h.orch.activate_camera(false);
        let generation = h.orch.camera.generation();

        let reaction = h.orch.on_sample(SampleOutcome {
            generation,
            result: Err(ClassifierError::Timeout.into()),
        });

        assert_eq!(reaction, None);
        assert!(h.orch.machine.state().is_fresh());
    }

    #[tokio::test]
    async fn reactivation_resets_reaction_memory() {
        let mut h = harness();
        h.orch.activate_camera(false);
        let generation = h.orch.camera.generation();
        h.orch.on_sample(face(EmotionLabel::Happy, generation));

        h.orch.handle_command(KioskCommand::DeactivateCamera);
        h.orch.handle_command(KioskCommand::ActivateCamera);
        let generation = h.orch.camera.generation();
        let reaction = h.orch.on_sample(face(EmotionLabel::Happy, generation));

        assert!(matches!(reaction, Some(Reaction::Speak { .. })));
    }

    #[tokio::test]
    async fn tick_is_skipped_while_sample_in_flight() {
        let mut h = harness();
        h.orch.activate_camera(false);

        h.orch.on_tick();
        let first = h.orch.in_flight;
        h.orch.on_tick();

        assert_eq!(first, Some(h.orch.camera.generation()));
        let outcome = tokio::time::timeout(Duration::from_secs(1), h.orch.sample_rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert!(h.orch.sample_rx.try_recv().is_err());

        h.orch.on_sample(outcome);
        assert!(h.orch.in_flight.is_none());
    }

    #[tokio::test]
    async fn tick_does_nothing_while_inactive() {
        let mut h = harness();
        h.orch.on_tick();
        assert!(h.orch.in_flight.is_none());
    }

    // ---- Chat ---

    #[tokio::test]
    async fn chat_reply_is_appended_and_spoken() {
        let mut h = harness();
        h.orch.handle_command(KioskCommand::SendChat("  hola  ".into()));
        {
            let st = h.state.lock().unwrap();
            assert_eq!(st.transcript.last().map(|e| e.text.as_str()), Some("hola"));
            assert_eq!(st.pending_chats, 1);
        }

        let result = h.orch.chat_rx.recv().await.unwrap();
        h.orch.on_chat_reply(result);

        {
            let st = h.state.lock().unwrap();
            let last = st.transcript.last().unwrap();
            assert_eq!(last.speaker, Speaker::Assistant);
            assert_eq!(last.text, "¡Hola!");
            assert_eq!(st.pending_chats, 0);
        }
        assert_eq!(h.next_spoken().await.as_deref(), Some("¡Hola!"));
    }

    #[tokio::test]
    async fn blank_chat_is_ignored() {
        let mut h = harness();
        h.orch.handle_command(KioskCommand::SendChat("   ".into()));
        let st = h.state.lock().unwrap();
        assert!(st.transcript.is_empty());
        assert_eq!(st.pending_chats, 0);
    }

    #[tokio::test]
    async fn connection_error_is_shown_not_spoken() {
        let mut h = harness_with(
            MockFrameSource::default(),
            ScriptedChat::new(vec![Err(ChatError::Request("refused".into()))]),
        );
        h.orch.handle_command(KioskCommand::SendChat("hola".into()));
        let result = h.orch.chat_rx.recv().await.unwrap();
        h.orch.on_chat_reply(result);

        assert_eq!(
            h.state.lock().unwrap().transcript.last().map(|e| e.text.clone()),
            Some("Error al conectar con el servidor.".to_string())
        );
        tokio::task::yield_now().await;
        assert!(h.nothing_spoken());
    }

    #[tokio::test]
    async fn chat_does_not_affect_reaction_state() {
        let mut h = harness_with(
            MockFrameSource::default(),
            ScriptedChat::new(vec![Err(ChatError::EmptyResponse)]),
        );
        h.orch.activate_camera(false);
        let generation = h.orch.camera.generation();
        h.orch.on_sample(face(EmotionLabel::Sad, generation));

        h.orch.handle_command(KioskCommand::SendChat("hola".into()));
        let result = h.orch.chat_rx.recv().await.unwrap();
        h.orch.on_chat_reply(result);

        assert_eq!(h.orch.machine.state().last_emotion, Some(EmotionLabel::Sad));
        assert_eq!(h.next_spoken().await.as_deref(), Some("Ánimo."));
        assert_eq!(
            h.next_spoken().await.as_deref(),
            Some("Error obteniendo respuesta.")
        );
    }

    // ---- Full loop ---

    #[tokio::test]
    async fn run_loop_reacts_then_shuts_down() {
        let mut config = AppConfig::default();
        config.sampler.period_ms = 10;
        let state = new_shared_state();
        let (speech, mut spoken) = RecordingSpeech::with_channel();
        let dispatcher =
            SpeechDispatcher::spawn(Arc::new(speech), state.clone(), Duration::from_secs(4));
        let source = Arc::new(MockFrameSource::default());
        let sampler = ExpressionSampler::new(
            source.clone(),
            Arc::new(MockClassifier::always(EmotionLabel::Happy)),
        );
        let machine =
            ReactionMachine::with_picker(single_phrase_book(), PhrasePicker::seeded(1));
        let orch = KioskOrchestrator::with_machine(
            &config,
            state.clone(),
            sampler,
            Arc::new(ScriptedChat::answering("ok")),
            dispatcher,
            machine,
        );

        let (command_tx, command_rx) = mpsc::channel(8);
        let handle = tokio::spawn(orch.run(command_rx));

        // Startup session is silent; the first utterance is the reaction.
        let first = tokio::time::timeout(Duration::from_secs(2), spoken.recv())
            .await
            .unwrap();
        assert_eq!(first.as_deref(), Some("¡Qué alegría!"));
        assert!(state.lock().unwrap().camera_active);

        drop(command_tx);
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            source.closed.load(std::sync::atomic::Ordering::SeqCst),
            1
        );
    }
}
