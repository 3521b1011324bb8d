use std::rc::Rc;

use crate::config::TypingConfig;
use crate::utils::timer::{Deferred, TimedState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    /// No phrases to show. Nothing is ever scheduled.
    Idle,
    Typing,
    /// Current phrase fully shown, waiting for the hold delay.
    Holding,
    Deleting,
}

/// Typewriter that cycles through a fixed phrase list forever.
///
/// Lengths count `char`s, so multi-byte text is revealed one visible
/// character at a time. `displayed_text` is always the prefix of the current
/// phrase of length `revealed_len`.
#[derive(Clone, Debug, PartialEq)]
pub struct TypingAnimator {
    phrases: Rc<[String]>,
    config: TypingConfig,
    phrase_index: usize,
    revealed_len: usize,
    is_deleting: bool,
    displayed: String,
}

impl TypingAnimator {
    pub fn new(phrases: Rc<[String]>, config: TypingConfig) -> Self {
        Self {
            phrases,
            config,
            phrase_index: 0,
            revealed_len: 0,
            is_deleting: false,
            displayed: String::new(),
        }
    }

    /// Same timing, new phrase list, back at the start.
    pub fn with_phrases(&self, phrases: Rc<[String]>) -> Self {
        Self::new(phrases, self.config)
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn config(&self) -> TypingConfig {
        self.config
    }

    pub fn displayed_text(&self) -> &str {
        &self.displayed
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn revealed_len(&self) -> usize {
        self.revealed_len
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    pub fn current_phrase(&self) -> Option<&str> {
        self.phrases.get(self.phrase_index).map(String::as_str)
    }

    pub fn phase(&self) -> TypingPhase {
        let Some(phrase) = self.current_phrase() else {
            return TypingPhase::Idle;
        };
        if self.is_deleting {
            TypingPhase::Deleting
        } else if self.revealed_len < phrase.chars().count() {
            TypingPhase::Typing
        } else {
            TypingPhase::Holding
        }
    }

    fn reveal(&mut self, len: usize) {
        self.revealed_len = len;
        self.displayed = self
            .current_phrase()
            .map(|phrase| phrase.chars().take(len).collect())
            .unwrap_or_default();
    }

    // A fully deleted phrase moves straight on to typing the next one.
    fn settle(&mut self) {
        if self.is_deleting && self.revealed_len == 0 {
            self.is_deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            tracing::debug!(phrase_index = self.phrase_index, "tagline advanced");
        }
    }
}

impl TimedState for TypingAnimator {
    fn pending(&self) -> Option<Deferred> {
        match self.phase() {
            TypingPhase::Idle => None,
            TypingPhase::Typing => Some(Deferred::after(self.config.type_interval_ms)),
            TypingPhase::Holding => Some(Deferred::after(self.config.hold_ms)),
            TypingPhase::Deleting => Some(Deferred::after(self.config.delete_interval_ms)),
        }
    }

    fn elapsed(&self) -> Self {
        let mut next = self.clone();
        match self.phase() {
            TypingPhase::Idle => {}
            TypingPhase::Typing => next.reveal(self.revealed_len + 1),
            TypingPhase::Holding => {
                tracing::trace!(phrase_index = self.phrase_index, "hold elapsed, deleting");
                next.is_deleting = true;
                next.settle();
            }
            TypingPhase::Deleting => {
                next.reveal(self.revealed_len.saturating_sub(1));
                next.settle();
            }
        }
        next
    }
}
