//! Drives the page state on a virtual clock with the same rules as the
//! browser hook: a changed value cancels the armed timer and arms its own,
//! an unchanged value keeps the armed timer, disposal cancels it.

use std::rc::Rc;

use makertoo_landing::config::{PopupConfig, TypingConfig};
use makertoo_landing::content::PRINCIPLES;
use makertoo_landing::utils::popup::{PopupPhase, PopupState};
use makertoo_landing::utils::timer::TimedState;
use makertoo_landing::utils::typing::{TypingAnimator, TypingPhase};

struct Timeline<T: TimedState> {
    now: u64,
    state: T,
    deadline: Option<u64>,
    arms: usize,
    history: Vec<(u64, T)>,
}

impl<T: TimedState> Timeline<T> {
    fn mount(state: T) -> Self {
        let mut timeline = Self {
            now: 0,
            state,
            deadline: None,
            arms: 0,
            history: Vec::new(),
        };
        timeline.rearm();
        timeline
    }

    fn rearm(&mut self) {
        self.deadline = self
            .state
            .pending()
            .map(|deferred| self.now + u64::from(deferred.delay_ms));
        if self.deadline.is_some() {
            self.arms += 1;
        }
    }

    fn set(&mut self, next: T) {
        if next != self.state {
            self.state = next;
            self.history.push((self.now, self.state.clone()));
            self.rearm();
        }
    }

    fn input(&mut self, event: impl FnOnce(&T) -> T) {
        let next = event(&self.state);
        self.set(next);
    }

    fn advance_to(&mut self, until: u64) {
        while let Some(deadline) = self.deadline.filter(|deadline| *deadline <= until) {
            self.now = deadline;
            self.deadline = None;
            let next = self.state.elapsed();
            self.set(next);
        }
        self.now = until;
    }

    fn dispose(&mut self) {
        self.deadline = None;
    }
}

fn phrases(list: &[&str]) -> Rc<[String]> {
    list.iter().map(|phrase| phrase.to_string()).collect()
}

fn typewriter(list: &[&str]) -> Timeline<TypingAnimator> {
    Timeline::mount(TypingAnimator::new(phrases(list), TypingConfig::default()))
}

fn popup() -> Timeline<PopupState> {
    Timeline::mount(PopupState::new(PopupConfig::default()))
}

#[test]
fn hi_yo_reference_timeline() {
    let mut t = typewriter(&["Hi", "Yo"]);
    assert_eq!(t.state.displayed_text(), "");

    t.advance_to(79);
    assert_eq!(t.state.displayed_text(), "");
    t.advance_to(80);
    assert_eq!(t.state.displayed_text(), "H");
    t.advance_to(160);
    assert_eq!(t.state.displayed_text(), "Hi");
    assert_eq!(t.state.phase(), TypingPhase::Holding);

    t.advance_to(1959);
    assert!(!t.state.is_deleting());
    t.advance_to(1960);
    assert!(t.state.is_deleting());
    assert_eq!(t.state.displayed_text(), "Hi");

    t.advance_to(2000);
    assert_eq!(t.state.displayed_text(), "H");
    t.advance_to(2040);
    assert_eq!(t.state.displayed_text(), "");
    assert_eq!(t.state.phrase_index(), 1);
    assert_eq!(t.state.phase(), TypingPhase::Typing);

    t.advance_to(2120);
    assert_eq!(t.state.displayed_text(), "Y");
    t.advance_to(2200);
    assert_eq!(t.state.displayed_text(), "Yo");
}

#[test]
fn lengths_move_by_exactly_one_per_tick() {
    let mut t = typewriter(&["Privacy-Powered Operations."]);
    t.advance_to(10_000);

    let mut previous = 0usize;
    for (_, state) in &t.history {
        let len = state.revealed_len();
        let step = len as isize - previous as isize;
        assert!(step.abs() <= 1, "jumped from {previous} to {len}");
        assert_eq!(state.displayed_text().chars().count(), len);
        previous = len;
    }
}

#[test]
fn typing_ticks_are_type_interval_apart() {
    let mut t = typewriter(&["abcd"]);
    t.advance_to(320);
    let times: Vec<u64> = t.history.iter().map(|(at, _)| *at).collect();
    assert_eq!(times, vec![80, 160, 240, 320]);
}

#[test]
fn full_cycle_returns_to_first_phrase() {
    let list = ["Hi", "Yo", "Hey"];
    let mut t = typewriter(&list);
    let config = TypingConfig::default();
    let cycle: u64 = list
        .iter()
        .map(|phrase| {
            let len = phrase.chars().count() as u64;
            len * u64::from(config.type_interval_ms)
                + u64::from(config.hold_ms)
                + len * u64::from(config.delete_interval_ms)
        })
        .sum();

    t.advance_to(cycle - 1);
    assert_eq!(t.state.phrase_index(), 2);
    t.advance_to(cycle);
    assert_eq!(t.state.phrase_index(), 0);
    assert_eq!(t.state.displayed_text(), "");

    let advances: Vec<usize> = t
        .history
        .windows(2)
        .filter(|pair| pair[0].1.phrase_index() != pair[1].1.phrase_index())
        .map(|pair| pair[1].1.phrase_index())
        .collect();
    assert_eq!(advances, vec![1, 2, 0]);
}

#[test]
fn empty_phrase_list_never_ticks() {
    let mut t = typewriter(&[]);
    t.advance_to(60_000);
    assert_eq!(t.arms, 0);
    assert!(t.history.is_empty());
    assert_eq!(t.state.displayed_text(), "");
}

#[test]
fn disposal_cancels_pending_tick() {
    let mut t = typewriter(&["Hello"]);
    t.advance_to(80);
    assert_eq!(t.state.displayed_text(), "H");
    let updates = t.history.len();

    t.dispose();
    t.advance_to(60_000);
    assert_eq!(t.history.len(), updates);
    assert_eq!(t.state.displayed_text(), "H");
}

#[test]
fn changing_phrases_restarts_the_cycle() {
    let mut t = typewriter(&["Hello"]);
    t.advance_to(200);
    assert_eq!(t.state.displayed_text(), "He");

    t.input(|animator| animator.with_phrases(phrases(&["Bye"])));
    assert_eq!(t.state.displayed_text(), "");
    t.advance_to(279);
    assert_eq!(t.state.displayed_text(), "");
    t.advance_to(280);
    assert_eq!(t.state.displayed_text(), "B");
}

#[test]
fn open_close_then_animation_clears_everything() {
    let mut t = popup();
    t.input(|p| p.open(&PRINCIPLES[0]));
    t.input(|p| p.close());
    assert!(t.state.is_closing());
    assert!(t.state.selected().is_some());

    t.advance_to(349);
    assert_eq!(t.state.phase(), PopupPhase::Closing);
    t.advance_to(350);
    assert!(!t.state.is_open());
    assert!(!t.state.is_closing());
    assert!(t.state.selected().is_none());
}

#[test]
fn open_twice_never_passes_through_closed() {
    let mut t = popup();
    t.input(|p| p.open(&PRINCIPLES[0]));
    t.advance_to(50);
    t.input(|p| p.open(&PRINCIPLES[1]));
    t.advance_to(1_000);

    assert_eq!(t.state.phase(), PopupPhase::Open);
    assert_eq!(t.state.selected().map(|p| p.id), Some(2));
    assert!(t
        .history
        .iter()
        .all(|(_, state)| state.phase() == PopupPhase::Open));
}

#[test]
fn repeated_close_clears_exactly_once() {
    let mut t = popup();
    t.input(|p| p.select(3));
    t.advance_to(100);
    t.input(|p| p.close());
    t.advance_to(200);
    t.input(|p| p.close());
    t.input(|p| p.close());
    assert_eq!(t.arms, 1);

    t.advance_to(449);
    assert_eq!(t.state.phase(), PopupPhase::Closing);
    t.advance_to(450);
    assert_eq!(t.state.phase(), PopupPhase::Closed);

    t.advance_to(5_000);
    let closes = t
        .history
        .iter()
        .filter(|(_, state)| state.phase() == PopupPhase::Closed)
        .count();
    assert_eq!(closes, 1);
}

#[test]
fn reopening_during_close_keeps_the_popup() {
    let mut t = popup();
    t.input(|p| p.open(&PRINCIPLES[0]));
    t.input(|p| p.close());
    t.advance_to(200);
    t.input(|p| p.open(&PRINCIPLES[1]));
    t.advance_to(5_000);

    assert_eq!(t.state.phase(), PopupPhase::Open);
    assert_eq!(t.state.selected().map(|p| p.id), Some(2));
}

#[test]
fn popup_disposed_mid_close_stays_put() {
    let mut t = popup();
    t.input(|p| p.select(1));
    t.input(|p| p.close());
    t.dispose();
    t.advance_to(5_000);
    assert_eq!(t.state.phase(), PopupPhase::Closing);
}
