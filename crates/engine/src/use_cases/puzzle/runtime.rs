//! Async driver for the puzzle engine.
//!
//! A single task owns the `PuzzleEngine`. Player commands arrive on an mpsc
//! channel; lookups and feedback timers run as spawned tasks that report back
//! on an internal channel tagged with their generation. Every transition that
//! changes the observable state is published on a `watch` channel.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use unscramble_shared::{PuzzleCommand, PuzzleSnapshot};

use crate::infrastructure::ports::AnnouncerPort;
use crate::use_cases::acquisition::{AcquireWord, AcquisitionError};
use crate::use_cases::word_source::Candidate;

use super::engine::{Effect, Generation, PuzzleEngine};

/// Pending player commands before senders wait.
const COMMAND_BUFFER: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Puzzle runtime has stopped")]
pub struct RuntimeStopped;

/// Completions reported by spawned tasks.
#[derive(Debug)]
enum RuntimeEvent {
    Acquired {
        generation: Generation,
        result: Result<Candidate, AcquisitionError>,
    },
    FeedbackElapsed {
        generation: Generation,
    },
}

/// Client side of a running puzzle: send commands, observe snapshots.
///
/// Dropping every handle stops the runtime.
#[derive(Clone)]
pub struct PuzzleHandle {
    commands: mpsc::Sender<PuzzleCommand>,
    snapshots: watch::Receiver<PuzzleSnapshot>,
}

impl PuzzleHandle {
    pub async fn send(&self, command: PuzzleCommand) -> Result<(), RuntimeStopped> {
        self.commands.send(command).await.map_err(|_| RuntimeStopped)
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> PuzzleSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PuzzleSnapshot> {
        self.snapshots.clone()
    }
}

pub struct PuzzleRuntime {
    engine: PuzzleEngine,
    acquire: Arc<AcquireWord>,
    announcer: Arc<dyn AnnouncerPort>,
    commands: mpsc::Receiver<PuzzleCommand>,
    events_tx: mpsc::UnboundedSender<RuntimeEvent>,
    events_rx: mpsc::UnboundedReceiver<RuntimeEvent>,
    snapshots: watch::Sender<PuzzleSnapshot>,
}

impl PuzzleRuntime {
    /// Start the event loop on the current tokio runtime.
    pub fn spawn(
        engine: PuzzleEngine,
        acquire: Arc<AcquireWord>,
        announcer: Arc<dyn AnnouncerPort>,
    ) -> (PuzzleHandle, JoinHandle<()>) {
        let (commands_tx, commands_rx) = mpsc::channel(COMMAND_BUFFER);
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (snapshots_tx, snapshots_rx) = watch::channel(engine.snapshot());

        let runtime = Self {
            engine,
            acquire,
            announcer,
            commands: commands_rx,
            events_tx,
            events_rx,
            snapshots: snapshots_tx,
        };
        let task = tokio::spawn(runtime.run());

        let handle = PuzzleHandle {
            commands: commands_tx,
            snapshots: snapshots_rx,
        };
        (handle, task)
    }

    async fn run(mut self) {
        tracing::info!("Puzzle runtime started");
        let effects = self.engine.start();
        self.apply(effects);
        self.publish();

        loop {
            tokio::select! {
                command = self.commands.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    tracing::debug!(?command, "Applying command");
                    let effects = self.engine.handle(command);
                    self.apply(effects);
                }
                Some(event) = self.events_rx.recv() => {
                    let effects = match event {
                        RuntimeEvent::Acquired { generation, result } => {
                            self.engine.on_acquired(generation, result)
                        }
                        RuntimeEvent::FeedbackElapsed { generation } => {
                            self.engine.on_feedback_elapsed(generation)
                        }
                    };
                    self.apply(effects);
                }
            }
            self.publish();
        }

        tracing::info!("Puzzle runtime stopped");
    }

    fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Acquire {
                    generation,
                    topic,
                    excluding,
                } => {
                    let acquire = self.acquire.clone();
                    let events = self.events_tx.clone();
                    tokio::spawn(async move {
                        let result = acquire.execute(topic, excluding).await;
                        // The runtime may have stopped meanwhile.
                        let _ = events.send(RuntimeEvent::Acquired { generation, result });
                    });
                }
                Effect::ScheduleNextRound { generation, delay } => {
                    let events = self.events_tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        let _ = events.send(RuntimeEvent::FeedbackElapsed { generation });
                    });
                }
                Effect::Announce(phrase) => {
                    let announcer = self.announcer.clone();
                    tokio::spawn(async move {
                        announcer.announce(phrase).await;
                    });
                }
            }
        }
    }

    fn publish(&self) {
        let snapshot = self.engine.snapshot();
        self.snapshots.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use unscramble_domain::{PuzzlePhase, Topic};

    use crate::infrastructure::ports::{LookupEntry, MockWordLookupPort};
    use crate::infrastructure::random::FixedRandom;
    use crate::infrastructure::settings::PuzzleSettings;
    use crate::use_cases::word_source::WordCandidateSource;

    #[derive(Default)]
    struct RecordingAnnouncer {
        phrases: Mutex<Vec<String>>,
    }

    impl RecordingAnnouncer {
        fn phrases(&self) -> Vec<String> {
            self.phrases.lock().map(|p| p.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl AnnouncerPort for RecordingAnnouncer {
        async fn announce(&self, phrase: String) {
            if let Ok(mut phrases) = self.phrases.lock() {
                phrases.push(phrase);
            }
        }
    }

    fn spawn_with(
        lookup: MockWordLookupPort,
        settings: PuzzleSettings,
    ) -> (PuzzleHandle, JoinHandle<()>, Arc<RecordingAnnouncer>) {
        let random = Arc::new(FixedRandom(0));
        let source = WordCandidateSource::new(Arc::new(lookup), random.clone(), 20);
        let acquire = Arc::new(AcquireWord::new(source, random.clone(), settings.max_attempts));
        let engine = PuzzleEngine::new(&settings, random);
        let announcer = Arc::new(RecordingAnnouncer::default());
        let (handle, task) = PuzzleRuntime::spawn(engine, acquire, announcer.clone());
        (handle, task, announcer)
    }

    fn words(list: &'static [&'static str]) -> MockWordLookupPort {
        let mut lookup = MockWordLookupPort::new();
        let mut next = 0;
        lookup.expect_lookup().returning(move |_| {
            let word = list[next % list.len()];
            next += 1;
            Ok(vec![LookupEntry::new(word, vec![format!("n\t{} gloss", word)])])
        });
        lookup
    }

    async fn wait_for_phase(handle: &PuzzleHandle, phase: PuzzlePhase) -> PuzzleSnapshot {
        let mut rx = handle.subscribe();
        let snapshot = rx
            .wait_for(|s| s.phase == phase)
            .await
            .expect("runtime alive");
        snapshot.clone()
    }

    #[tokio::test(start_paused = true)]
    async fn plays_a_round_and_moves_on_after_feedback_delay() {
        let settings = PuzzleSettings {
            initial_topic: Topic::from_input("animals"),
            ..PuzzleSettings::default()
        };
        let (handle, task, announcer) = spawn_with(words(&["cat", "dog"]), settings);

        let active = wait_for_phase(&handle, PuzzlePhase::Active).await;
        assert_eq!(active.tiles.len(), 3);
        assert_eq!(active.hint, "Hint: cat gloss");
        assert_eq!(active.topic.as_deref(), Some("animals"));

        let started = tokio::time::Instant::now();
        for letter in ['c', 'a', 't'] {
            handle
                .send(PuzzleCommand::TapTile { letter })
                .await
                .expect("runtime alive");
        }

        let success = wait_for_phase(&handle, PuzzlePhase::Success).await;
        assert_eq!(success.success_count, 1);
        assert!(!success.input_enabled);

        let next = wait_for_phase(&handle, PuzzlePhase::Active).await;
        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(next.words_served, 2);
        assert_eq!(next.hint, "Hint: dog gloss");

        assert_eq!(announcer.phrases(), vec!["Well done!".to_string()]);

        drop(handle);
        task.await.expect("runtime exits cleanly");
    }

    #[tokio::test(start_paused = true)]
    async fn wrong_guess_reveals_answer() {
        let (handle, _task, announcer) =
            spawn_with(words(&["cat", "dog"]), PuzzleSettings::default());

        wait_for_phase(&handle, PuzzlePhase::Active).await;
        for (letter, slot) in [('t', 0), ('a', 1), ('c', 2)] {
            handle
                .send(PuzzleCommand::PlaceTile { letter, slot })
                .await
                .expect("runtime alive");
        }

        let error = wait_for_phase(&handle, PuzzlePhase::Error).await;
        assert_eq!(error.message, "Try again! The answer was: cat");
        assert!(error.is_error);

        wait_for_phase(&handle, PuzzlePhase::Active).await;
        assert_eq!(
            announcer.phrases(),
            vec!["Try again! The answer was: cat".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn empty_lookups_end_in_no_words_available() {
        let mut lookup = MockWordLookupPort::new();
        lookup.expect_lookup().times(5).returning(|_| Ok(vec![]));

        let (handle, _task, _announcer) = spawn_with(lookup, PuzzleSettings::default());

        let snapshot = wait_for_phase(&handle, PuzzlePhase::NoWordsAvailable).await;
        assert!(snapshot.tiles.is_empty());
        assert!(!snapshot.input_enabled);
        assert_eq!(snapshot.hint, "No hint available");
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_runtime_rejects_commands() {
        let (handle, task, _announcer) = spawn_with(words(&["cat"]), PuzzleSettings::default());
        wait_for_phase(&handle, PuzzlePhase::Active).await;

        task.abort();
        let _ = task.await;

        assert_eq!(
            handle.send(PuzzleCommand::Shuffle).await,
            Err(RuntimeStopped)
        );
    }
}
