//! Application state and composition.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::infrastructure::{
    announcer::LogAnnouncer,
    datamuse::DatamuseClient,
    offline_lexicon::OfflineLexicon,
    ports::{AnnouncerPort, RandomPort, WordLookupPort},
    random::SystemRandom,
    settings::{LookupBackend, LookupSettings, PuzzleSettings},
};
use crate::use_cases::{
    AcquireWord, PuzzleEngine, PuzzleHandle, PuzzleRuntime, WordCandidateSource,
};

/// Main application state.
///
/// Holds the port implementations a puzzle session is built from.
pub struct App {
    pub settings: PuzzleSettings,
    pub lookup: Arc<dyn WordLookupPort>,
    pub announcer: Arc<dyn AnnouncerPort>,
    pub random: Arc<dyn RandomPort>,
}

impl App {
    pub fn new(
        settings: PuzzleSettings,
        lookup: Arc<dyn WordLookupPort>,
        announcer: Arc<dyn AnnouncerPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            settings,
            lookup,
            announcer,
            random,
        }
    }

    /// Production wiring: configured lookup backend, logged announcements,
    /// system randomness.
    pub fn from_settings(settings: PuzzleSettings, lookup: &LookupSettings) -> Self {
        Self::new(
            settings,
            build_lookup(lookup),
            Arc::new(LogAnnouncer),
            Arc::new(SystemRandom::new()),
        )
    }

    pub fn with_announcer(mut self, announcer: Arc<dyn AnnouncerPort>) -> Self {
        self.announcer = announcer;
        self
    }

    /// Start a puzzle session on the current tokio runtime.
    pub fn spawn_puzzle(&self) -> (PuzzleHandle, JoinHandle<()>) {
        let source = WordCandidateSource::new(
            self.lookup.clone(),
            self.random.clone(),
            self.settings.max_results,
        );
        let acquire = Arc::new(AcquireWord::new(
            source,
            self.random.clone(),
            self.settings.max_attempts,
        ));
        let engine = PuzzleEngine::new(&self.settings, self.random.clone());
        PuzzleRuntime::spawn(engine, acquire, self.announcer.clone())
    }
}

/// Pick the word lookup adapter.
pub fn build_lookup(settings: &LookupSettings) -> Arc<dyn WordLookupPort> {
    match settings.backend {
        LookupBackend::Datamuse => {
            tracing::info!(base_url = %settings.base_url, "Using Datamuse word lookup");
            Arc::new(DatamuseClient::from_settings(settings))
        }
        LookupBackend::Offline => {
            tracing::info!(words = OfflineLexicon::new().len(), "Using offline word list");
            Arc::new(OfflineLexicon::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unscramble_domain::{PuzzlePhase, Topic};
    use unscramble_shared::PuzzleCommand;

    use crate::infrastructure::ports::MockAnnouncerPort;
    use crate::infrastructure::random::FixedRandom;

    #[tokio::test(start_paused = true)]
    async fn offline_session_serves_topic_words() {
        let settings = PuzzleSettings {
            initial_topic: Topic::from_input("animals"),
            ..PuzzleSettings::default()
        };
        let lookup = LookupSettings {
            backend: LookupBackend::Offline,
            ..LookupSettings::default()
        };
        let mut announcer = MockAnnouncerPort::new();
        announcer.expect_announce().returning(|_| ());

        let app = App::new(
            settings,
            build_lookup(&lookup),
            Arc::new(announcer),
            Arc::new(FixedRandom(0)),
        );
        let (handle, task) = app.spawn_puzzle();

        let mut rx = handle.subscribe();
        let active = rx
            .wait_for(|s| matches!(s.phase, PuzzlePhase::Active | PuzzlePhase::NoWordsAvailable))
            .await
            .expect("runtime alive")
            .clone();

        // FixedRandom(0) always asks for "a??" in the animals tag: only "ant".
        assert_eq!(active.phase, PuzzlePhase::Active);
        assert_eq!(active.tiles.len(), 3);
        assert_eq!(active.topic.as_deref(), Some("animals"));

        handle
            .send(PuzzleCommand::RefreshHint)
            .await
            .expect("runtime alive");
        drop(rx);
        drop(handle);
        task.await.expect("runtime exits cleanly");
    }
}
