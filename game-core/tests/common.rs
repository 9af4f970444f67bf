#![allow(dead_code)]

use async_trait::async_trait;
use game_core::{
    Command, FrameSink, GuessValidator, LengthOnlyValidator, LookupOutcome, RoundMachine,
    RoundState, SecretWord, WordList, WordLookup, classify,
};
use game_types::FrameOutcome;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Creates a test word list with a known set of words
pub fn create_test_word_list() -> WordList {
    WordList::from_word_list(
        "blade\nknife\nrisen\nspoon\ntable\nweird\ninput\nindex\nprize\nmouse\nzebra",
    )
}

/// Creates a fresh round for the given secret
pub fn create_round(secret: &str) -> RoundState {
    RoundState::new(SecretWord::parse(secret).unwrap())
}

pub fn length_only_machine() -> RoundMachine<LengthOnlyValidator> {
    RoundMachine::new(LengthOnlyValidator)
}

/// Raw keys that type a word and press Enter
pub fn type_word(word: &str) -> Vec<String> {
    let mut keys: Vec<String> = word.chars().map(|ch| ch.to_string()).collect();
    keys.push("Enter".to_string());
    keys
}

/// Classify and apply raw keys one after another
pub async fn play_keys<V: GuessValidator>(
    machine: &RoundMachine<V>,
    mut state: RoundState,
    keys: &[String],
) -> (RoundState, Vec<FrameOutcome>) {
    let mut outcomes = Vec::new();
    for key in keys {
        let command: Command = classify(key);
        let (next, outcome) = machine.apply(state, command).await;
        state = next;
        outcomes.push(outcome);
    }
    (state, outcomes)
}

/// Frame collector for testing what reaches the presentation layer
#[derive(Clone, Default)]
pub struct EventCollector {
    frames: Arc<Mutex<Vec<FrameOutcome>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_frames(&self) -> Vec<FrameOutcome> {
        self.frames.lock().unwrap().clone()
    }

    pub fn last_frame(&self) -> Option<FrameOutcome> {
        self.frames.lock().unwrap().last().cloned()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.lock().unwrap().len()
    }
}

impl FrameSink for EventCollector {
    fn handle_frame(&mut self, frame: FrameOutcome) {
        self.frames.lock().unwrap().push(frame);
    }
}

/// Lookup that answers from a word list after a delay, counting calls
pub struct SlowLookup {
    words: WordList,
    delay: Duration,
    calls: AtomicU32,
}

impl SlowLookup {
    pub fn new(delay: Duration) -> Self {
        Self {
            words: create_test_word_list(),
            delay,
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WordLookup for SlowLookup {
    async fn lookup(&self, word: &str) -> LookupOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.words.lookup(word).await
    }
}
