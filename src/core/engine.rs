//! Game engine - the Idle/Running state machine behind a round
//!
//! The engine owns the running score, the single active target cell, and
//! two logical timers: a repeating reveal timer and a one-shot auto-hide
//! armed by each reveal. Both advance through `tick(elapsed_ms)`, so tests
//! drive a virtual clock instead of waiting on wall-clock timers.
//!
//! Consumers register observers with `subscribe` and receive `GameEvent`
//! notifications. Handlers run synchronously inside the engine call that
//! emits them and must not call back into the engine.

use crate::core::difficulty::{find_tier, tiers, DifficultyTier};
use crate::core::rng::{pick_target, SimpleRng};
use crate::types::{Difficulty, GameEvent, DEFAULT_REVEAL_MS, DEFAULT_SCORE_PER_HIT};

/// Token returned by `subscribe`, used to remove the observer again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u32);

type EventHandler = Box<dyn FnMut(&GameEvent)>;

/// Engine state machine.
///
/// Invariants:
/// - at most one cell is active at any time;
/// - `active_cell` is `Some` iff a reveal is currently shown;
/// - Idle implies no outstanding timers and no active cell.
pub struct GameEngine {
    is_active: bool,
    difficulty: Option<Difficulty>,
    active_cell: Option<u32>,
    score: u32,
    total_cells: u32,
    /// Accumulator for the repeating reveal timer.
    reveal_timer_ms: u32,
    /// Remaining time on the one-shot auto-hide; `None` when not armed.
    hide_timer_ms: Option<u32>,
    rng: SimpleRng,
    subscribers: Vec<(SubscriptionId, EventHandler)>,
    next_subscription: u32,
}

impl GameEngine {
    /// Create an idle engine with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            is_active: false,
            difficulty: None,
            active_cell: None,
            score: 0,
            total_cells: 0,
            reveal_timer_ms: 0,
            hide_timer_ms: None,
            rng: SimpleRng::new(seed),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn active_cell(&self) -> Option<u32> {
        self.active_cell
    }

    /// The difficulty table, in menu order.
    pub fn difficulties(&self) -> &'static [DifficultyTier] {
        tiers()
    }

    /// Register an observer for engine notifications.
    pub fn subscribe(&mut self, handler: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription = self.next_subscription.wrapping_add(1);
        self.subscribers.push((id, Box::new(handler)));
        id
    }

    /// Remove a previously registered observer.
    ///
    /// Returns false if the token was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    fn emit(&mut self, event: GameEvent) {
        for (_, handler) in &mut self.subscribers {
            handler(&event);
        }
    }

    /// Cadence of the current tier, falling back to the default when no
    /// difficulty has been selected.
    pub fn reveal_interval_ms(&self) -> u32 {
        self.difficulty
            .and_then(find_tier)
            .map(|tier| tier.reveal_interval_ms)
            .unwrap_or(DEFAULT_REVEAL_MS)
    }

    fn score_per_hit(&self) -> u32 {
        self.difficulty
            .and_then(find_tier)
            .map(|tier| tier.score_per_hit)
            .unwrap_or(DEFAULT_SCORE_PER_HIT)
    }

    /// Start a round over `total_cells` cells.
    ///
    /// Valid only from Idle; a zero-cell grid is refused. Returns whether
    /// the round actually started.
    pub fn start(&mut self, total_cells: u32) -> bool {
        if self.is_active || total_cells == 0 {
            return false;
        }
        self.is_active = true;
        self.total_cells = total_cells;
        self.reveal_timer_ms = 0;
        self.emit(GameEvent::GameStarted);
        true
    }

    /// Advance the engine clock.
    ///
    /// The pending auto-hide is serviced before the reveal timer so that
    /// when both expire on the same tick the hide is observed first, as it
    /// would be with real one-shot/repeating timers.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.is_active {
            return;
        }

        if let Some(remaining) = self.hide_timer_ms {
            if remaining <= elapsed_ms {
                self.hide_target();
            } else {
                self.hide_timer_ms = Some(remaining - elapsed_ms);
            }
        }

        self.reveal_timer_ms = self.reveal_timer_ms.saturating_add(elapsed_ms);
        if self.reveal_timer_ms >= self.reveal_interval_ms() {
            self.reveal_timer_ms = 0;
            self.reveal_target();
        }
    }

    /// Reveal a new target cell.
    ///
    /// No-op when Idle, which guards against a stale timer firing after
    /// `stop`. The previous target (and its pending auto-hide) is always
    /// cleared before the new cell is chosen, so no two cells are ever
    /// active at once.
    pub fn reveal_target(&mut self) {
        if !self.is_active {
            return;
        }

        let previous = self.active_cell;
        self.hide_target();

        let cell = pick_target(&mut self.rng, previous, self.total_cells);
        self.active_cell = Some(cell);
        self.emit(GameEvent::TargetShown { cell });
        self.hide_timer_ms = Some(self.reveal_interval_ms());
    }

    /// Clear the active target and cancel the pending auto-hide.
    ///
    /// Idempotent: emits `TargetHidden` only if a cell was actually active.
    pub fn hide_target(&mut self) {
        self.hide_timer_ms = None;
        if let Some(cell) = self.active_cell.take() {
            self.emit(GameEvent::TargetHidden { cell });
        }
    }

    /// End the round: cancel both timers, clear the target, reset the
    /// score. Idempotent, callable from Idle as well.
    pub fn stop(&mut self) {
        self.is_active = false;
        self.reveal_timer_ms = 0;
        self.hide_target();
        self.emit(GameEvent::GameEnded);
        self.score = 0;
    }

    /// Select a difficulty tier.
    ///
    /// A running cadence is not rescheduled; the new interval applies from
    /// the next timer expiry. Callers wanting an immediate effect stop and
    /// restart the round.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = Some(difficulty);
    }

    /// Award the current tier's points for a hit.
    ///
    /// Deliberately callable from Idle as well; hits originate from the
    /// revealed cell, so real invocations only happen while Running.
    pub fn register_hit(&mut self) {
        self.score = self.score.saturating_add(self.score_per_hit());
    }
}
