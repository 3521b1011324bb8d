use crate::config::PopupConfig;
use crate::content::{self, Principle};
use crate::utils::timer::{Deferred, TimedState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupPhase {
    Closed,
    Open,
    /// Exit animation running; the selection is still shown.
    Closing,
}

/// Visibility of the principle detail sheet.
///
/// Opening is immediate. Closing flips `is_closing` right away and clears
/// the selection once `close_animation_ms` has elapsed.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupState {
    is_open: bool,
    is_closing: bool,
    selected: Option<&'static Principle>,
    config: PopupConfig,
}

impl PopupState {
    pub fn new(config: PopupConfig) -> Self {
        Self {
            is_open: false,
            is_closing: false,
            selected: None,
            config,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_closing(&self) -> bool {
        self.is_closing
    }

    pub fn selected(&self) -> Option<&'static Principle> {
        self.selected
    }

    pub fn phase(&self) -> PopupPhase {
        match (self.is_open, self.is_closing) {
            (false, _) => PopupPhase::Closed,
            (true, false) => PopupPhase::Open,
            (true, true) => PopupPhase::Closing,
        }
    }

    /// Shows `principle`, replacing any current selection in place. A close
    /// still animating is abandoned and its timer goes with it.
    pub fn open(&self, principle: &'static Principle) -> Self {
        if self.phase() == PopupPhase::Closing {
            tracing::debug!(principle = principle.id, "reopened during close animation");
        } else {
            tracing::debug!(principle = principle.id, "popup opened");
        }
        Self {
            is_open: true,
            is_closing: false,
            selected: Some(principle),
            config: self.config,
        }
    }

    pub fn select(&self, id: u32) -> Self {
        match content::principle(id) {
            Some(principle) => self.open(principle),
            None => {
                tracing::warn!(id, "ignoring selection of unknown principle");
                self.clone()
            }
        }
    }

    pub fn close(&self) -> Self {
        match self.phase() {
            PopupPhase::Open => {
                tracing::debug!("popup closing");
                Self {
                    is_closing: true,
                    ..self.clone()
                }
            }
            // Already closing: same value, so the running timer is kept.
            PopupPhase::Closing | PopupPhase::Closed => self.clone(),
        }
    }
}

impl TimedState for PopupState {
    fn pending(&self) -> Option<Deferred> {
        (self.phase() == PopupPhase::Closing).then(|| Deferred::after(self.config.close_animation_ms))
    }

    fn elapsed(&self) -> Self {
        if self.phase() != PopupPhase::Closing {
            return self.clone();
        }
        tracing::debug!("popup closed");
        Self::new(self.config)
    }
}
