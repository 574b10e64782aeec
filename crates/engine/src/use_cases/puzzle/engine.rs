//! Puzzle session state machine.
//!
//! `PuzzleEngine` is synchronous: every command or completion mutates the
//! engine and returns the side effects the caller must carry out (start a
//! lookup, arm the feedback timer, announce a result). Asynchronous results
//! come back tagged with the `Generation` that requested them; anything
//! tagged with an older generation is dropped.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use unscramble_domain::{HintCycler, PuzzlePhase, TileBoard, Topic, TopicSession, Word};
use unscramble_shared::{PuzzleCommand, PuzzleSnapshot};

use crate::infrastructure::ports::{pick_index, RandomPort};
use crate::infrastructure::settings::PuzzleSettings;
use crate::use_cases::acquisition::AcquisitionError;
use crate::use_cases::word_source::Candidate;

pub const SUCCESS_MESSAGE: &str = "Well done!";
pub const NO_WORDS_MESSAGE: &str =
    "No valid words found. Shuffle or choose another topic to try again.";
pub const LOADING_HINT: &str = "Loading...";
pub const NO_HINT: &str = "No hint available";

/// Monotonic token minted on every entry into loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Work requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Find a word for the round identified by `generation`
    Acquire {
        generation: Generation,
        topic: Option<Topic>,
        excluding: HashSet<String>,
    },
    /// Call `on_feedback_elapsed(generation)` after `delay`
    ScheduleNextRound {
        generation: Generation,
        delay: Duration,
    },
    /// Fire-and-forget phrase for the announcer
    Announce(String),
}

pub struct PuzzleEngine {
    phase: PuzzlePhase,
    generation: Generation,
    word: Option<Word>,
    board: TileBoard,
    hints: HintCycler,
    session: TopicSession,
    message: String,
    success_delay: Duration,
    error_delay: Duration,
    random: Arc<dyn RandomPort>,
}

impl PuzzleEngine {
    pub fn new(settings: &PuzzleSettings, random: Arc<dyn RandomPort>) -> Self {
        Self {
            phase: PuzzlePhase::Loading,
            generation: Generation::default(),
            word: None,
            board: TileBoard::new(),
            hints: HintCycler::new(),
            session: TopicSession::with_max_words(
                settings.initial_topic.clone(),
                settings.max_words_per_topic,
            ),
            message: String::new(),
            success_delay: settings.success_delay,
            error_delay: settings.error_delay,
            random,
        }
    }

    /// Request the first word.
    pub fn start(&mut self) -> Vec<Effect> {
        self.begin_loading()
    }

    pub fn handle(&mut self, command: PuzzleCommand) -> Vec<Effect> {
        match command {
            PuzzleCommand::Submit => self.submit(),
            PuzzleCommand::Shuffle => self.shuffle(),
            PuzzleCommand::TapTile { letter } => self.tap_tile(letter),
            PuzzleCommand::PlaceTile { letter, slot } => self.place_tile(letter, slot),
            PuzzleCommand::RefreshHint => self.refresh_hint(),
            PuzzleCommand::ChangeTopic { topic } => {
                self.change_topic(topic.as_deref().and_then(Topic::from_input))
            }
        }
    }

    /// Evaluate a full board. Ignored while any slot is empty.
    pub fn submit(&mut self) -> Vec<Effect> {
        if !self.phase.accepts_input() || !self.board.all_slots_filled() {
            return Vec::new();
        }
        self.evaluate()
    }

    /// Move a tile to the first empty slot, evaluating once the board is full.
    pub fn tap_tile(&mut self, letter: char) -> Vec<Effect> {
        if !self.phase.accepts_input() || !self.board.place(letter) {
            return Vec::new();
        }
        self.evaluate_if_full()
    }

    /// Drop a tile onto `slot`. Occupied slots reject the drop.
    pub fn place_tile(&mut self, letter: char, slot: usize) -> Vec<Effect> {
        if !self.phase.accepts_input() || !self.board.place_at(letter, slot) {
            return Vec::new();
        }
        self.evaluate_if_full()
    }

    /// Re-scramble the current word, or retry after acquisition gave up.
    pub fn shuffle(&mut self) -> Vec<Effect> {
        match self.phase {
            PuzzlePhase::Active => {
                if let Some(word) = &self.word {
                    self.board
                        .reset(word, |n| pick_index(self.random.as_ref(), n));
                }
                self.message.clear();
                Vec::new()
            }
            PuzzlePhase::NoWordsAvailable => self.begin_loading(),
            _ => Vec::new(),
        }
    }

    pub fn refresh_hint(&mut self) -> Vec<Effect> {
        if self.phase == PuzzlePhase::Active {
            self.hints.advance();
        }
        Vec::new()
    }

    /// Switch topic. A new topic resets the session; re-selecting the current
    /// topic only retries when no words were found.
    pub fn change_topic(&mut self, topic: Option<Topic>) -> Vec<Effect> {
        if topic.as_ref() != self.session.topic() {
            tracing::info!(
                topic = ?topic.as_ref().map(Topic::as_str),
                "Topic changed"
            );
            self.session.reset_for_topic(topic);
            return self.begin_loading();
        }
        if self.phase == PuzzlePhase::NoWordsAvailable {
            return self.begin_loading();
        }
        Vec::new()
    }

    /// Apply the result of the acquisition started for `generation`.
    pub fn on_acquired(
        &mut self,
        generation: Generation,
        result: Result<Candidate, AcquisitionError>,
    ) -> Vec<Effect> {
        if generation != self.generation || self.phase != PuzzlePhase::Loading {
            tracing::debug!(
                generation = generation.value(),
                current = self.generation.value(),
                "Discarding stale acquisition"
            );
            return Vec::new();
        }

        match result {
            Ok(Candidate { word, definitions }) => {
                self.session.record_served(&word);
                self.board
                    .reset(&word, |n| pick_index(self.random.as_ref(), n));
                self.hints.set_definitions(definitions);
                tracing::info!(
                    generation = generation.value(),
                    words_served = self.session.words_served(),
                    "Round started"
                );
                self.word = Some(word);
                self.message.clear();
                self.phase = PuzzlePhase::Active;
            }
            Err(e) => {
                tracing::warn!(
                    generation = generation.value(),
                    error = %e,
                    "No words available"
                );
                self.clear_round();
                self.message = NO_WORDS_MESSAGE.to_string();
                self.phase = PuzzlePhase::NoWordsAvailable;
            }
        }
        Vec::new()
    }

    /// Close the Success/Error feedback window opened for `generation`.
    pub fn on_feedback_elapsed(&mut self, generation: Generation) -> Vec<Effect> {
        let in_feedback = matches!(self.phase, PuzzlePhase::Success | PuzzlePhase::Error);
        if generation != self.generation || !in_feedback {
            tracing::debug!(
                generation = generation.value(),
                current = self.generation.value(),
                "Discarding stale feedback timer"
            );
            return Vec::new();
        }
        self.begin_loading()
    }

    pub fn snapshot(&self) -> PuzzleSnapshot {
        let tiles: Vec<char> = self
            .board
            .tiles()
            .iter()
            .map(char::to_ascii_uppercase)
            .collect();
        let hint = match (self.phase, self.hints.current()) {
            (PuzzlePhase::Loading, _) => LOADING_HINT.to_string(),
            (_, Some(gloss)) => format!("Hint: {}", gloss),
            (_, None) => NO_HINT.to_string(),
        };

        PuzzleSnapshot {
            phase: self.phase,
            outcome: self.phase.outcome(),
            scrambled: tiles.iter().collect(),
            tiles,
            slots: self
                .board
                .slots()
                .iter()
                .map(|slot| slot.map(|c| c.to_ascii_uppercase()))
                .collect(),
            hint,
            hint_available: self.phase == PuzzlePhase::Active && self.hints.is_available(),
            message: self.message.clone(),
            is_success: self.phase == PuzzlePhase::Success,
            is_error: self.phase == PuzzlePhase::Error,
            input_enabled: self.phase.accepts_input(),
            success_count: self.session.success_count(),
            words_served: self.session.words_served(),
            max_words_per_topic: self.session.max_words(),
            topic: self.session.topic().map(|t| t.as_str().to_string()),
        }
    }

    pub fn phase(&self) -> PuzzlePhase {
        self.phase
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.word.as_ref()
    }

    pub fn session(&self) -> &TopicSession {
        &self.session
    }

    /// Enter loading with a fresh generation, or finish the topic at its cap.
    fn begin_loading(&mut self) -> Vec<Effect> {
        self.generation = self.generation.next();
        self.clear_round();

        if self.session.is_at_capacity() {
            tracing::info!(
                success_count = self.session.success_count(),
                words_served = self.session.words_served(),
                "Topic complete"
            );
            self.message = format!(
                "Topic complete! You solved {} of {} words.",
                self.session.success_count(),
                self.session.words_served()
            );
            self.phase = PuzzlePhase::TopicComplete;
            return Vec::new();
        }

        self.message.clear();
        self.phase = PuzzlePhase::Loading;
        vec![Effect::Acquire {
            generation: self.generation,
            topic: self.session.topic().cloned(),
            excluding: self.session.seen_words().clone(),
        }]
    }

    fn clear_round(&mut self) {
        self.word = None;
        self.board.clear();
        self.hints.clear();
    }

    fn evaluate_if_full(&mut self) -> Vec<Effect> {
        if self.board.all_slots_filled() {
            self.evaluate()
        } else {
            Vec::new()
        }
    }

    /// Score the full board and open the feedback window.
    fn evaluate(&mut self) -> Vec<Effect> {
        let Some(word) = &self.word else {
            return Vec::new();
        };
        let guess = self.board.current_guess();

        let delay = if word.matches_guess(&guess) {
            self.session.record_success();
            self.message = SUCCESS_MESSAGE.to_string();
            self.phase = PuzzlePhase::Success;
            self.success_delay
        } else {
            self.message = format!("Try again! The answer was: {}", word);
            self.phase = PuzzlePhase::Error;
            self.error_delay
        };

        tracing::info!(
            generation = self.generation.value(),
            word = %word,
            guess = %guess,
            outcome = %self.phase,
            success_count = self.session.success_count(),
            "Round finished"
        );

        vec![
            Effect::Announce(self.message.clone()),
            Effect::ScheduleNextRound {
                generation: self.generation,
                delay,
            },
        ]
    }
}
