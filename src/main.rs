//! Application entry point for the emotion kiosk.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] (defaults on first run, written back to disk).
//! 3. Create the tokio runtime and enter it.
//! 4. Build the collaborators: classifier, frame source, speech, chat.
//! 5. Spawn the [`KioskOrchestrator`].
//! 6. Start the global hotkey listener and forward its events.
//! 7. Run [`eframe::run_native`] until the window is closed.

use std::sync::Arc;

use anyhow::Context;
use eframe::egui;
use tokio::sync::mpsc;

use emotion_kiosk::{
    app::KioskApp,
    chat::{ApiChat, ChatClient},
    config::AppConfig,
    hotkey::{HotkeyBindings, HotkeyEvent, HotkeyListener},
    kiosk::{shared_state_with_capacity, KioskCommand, KioskOrchestrator},
    reaction::PhraseBook,
    speech::{CommandSpeech, SilentSpeech, SpeechDispatcher, SpeechEngine},
    vision::{ExpressionSampler, FrameSource, HttpClassifier, SnapshotFileSource},
};

fn native_options(config: &AppConfig) -> eframe::NativeOptions {
    let mut vp = egui::ViewportBuilder::default()
        .with_decorations(false)
        .with_transparent(true)
        .with_inner_size([420.0, 640.0])
        .with_min_inner_size([320.0, 420.0]);

    if config.ui.always_on_top {
        vp = vp.with_always_on_top();
    }

    if let Some((x, y)) = config.ui.window_position {
        vp = vp.with_position(egui::pos2(x, y));
    }

    eframe::NativeOptions {
        viewport: vp,
        ..Default::default()
    }
}

fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("emotion kiosk starting up");

    // 2. Configuration
    let first_run = AppConfig::is_first_run();
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("failed to load config ({e}); using defaults");
        AppConfig::default()
    });
    if first_run {
        if let Err(e) = config.save() {
            log::warn!("could not write default config: {e}");
        }
    }

    // 3. Runtime.  Entered for the whole process so spawns from here work.
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;
    let _guard = rt.enter();

    // 4. Collaborators
    let classifier = Arc::new(HttpClassifier::from_config(&config.sampler));
    {
        let classifier = Arc::clone(&classifier);
        let url = config.sampler.classifier_url.clone();
        rt.spawn(async move {
            match classifier.health_check().await {
                Ok(()) => log::info!("sampler: classifier ready at {url}"),
                Err(e) => log::warn!("sampler: classifier at {url} not ready: {e}"),
            }
        });
    }

    let snapshot = config.camera.resolved_snapshot_path();
    let source: Arc<dyn FrameSource> = Arc::new(SnapshotFileSource::new(snapshot));
    let sampler = ExpressionSampler::new(source, classifier);

    let engine: Arc<dyn SpeechEngine> = if config.speech.enabled {
        Arc::new(CommandSpeech::from_config(&config.speech))
    } else {
        log::info!("speech: disabled, captions only");
        Arc::new(SilentSpeech)
    };

    let chat: Arc<dyn ChatClient> = Arc::new(ApiChat::from_config(&config.chat));

    let state = shared_state_with_capacity(config.chat.max_transcript_entries);
    let speech = SpeechDispatcher::spawn(
        engine,
        Arc::clone(&state),
        config.speech.caption_duration(),
    );

    // 5. Orchestrator
    let (command_tx, command_rx) = mpsc::channel::<KioskCommand>(32);
    let orchestrator = KioskOrchestrator::new(
        &config,
        Arc::clone(&state),
        sampler,
        chat,
        speech,
        PhraseBook::from_config(&config.phrases),
    );
    rt.spawn(orchestrator.run(command_rx));

    // 6. Global hotkeys (optional: the window buttons cover everything)
    let (hotkey_tx, mut hotkey_rx) = mpsc::channel::<HotkeyEvent>(16);
    let _hotkey_listener = match HotkeyBindings::from_config(&config.hotkey) {
        Ok(bindings) => match HotkeyListener::start(bindings, hotkey_tx) {
            Ok(listener) => Some(listener),
            Err(e) => {
                log::warn!("hotkey: cannot start listener thread: {e}");
                None
            }
        },
        Err(e) => {
            log::warn!("hotkey: {e}; global shortcuts disabled");
            None
        }
    };
    {
        let command_tx = command_tx.clone();
        rt.spawn(async move {
            while let Some(event) = hotkey_rx.recv().await {
                if command_tx.send(KioskCommand::from(event)).await.is_err() {
                    break;
                }
            }
        });
    }

    // 7. Window (blocks until closed)
    let app = KioskApp::new(state, command_tx, config.ui.clone());
    let options = native_options(&config);

    eframe::run_native(
        &config.ui.assistant_name,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("kiosk window failed: {e}"))?;

    log::info!("emotion kiosk shut down");
    Ok(())
}
