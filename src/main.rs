//! Terminal whack-a-mole runner (default binary).
//!
//! Drives two screens: a home screen for name entry and difficulty
//! selection, and the game screen with the 3x3 grid. The engine advances
//! on a fixed tick; engine notifications are drained from a queue filled
//! by an observer subscription, and round results flow into the score
//! store when a round ends.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_mole::core::GameEngine;
use tui_mole::input::{handle_game_key, handle_home_key, should_quit, GameInput, HomeInput};
use tui_mole::store::name::capitalize;
use tui_mole::store::{ScoreStore, DEFAULT_DIFFICULTY};
use tui_mole::term::{GameScreen, GameView, HomeScreen, HomeView, TerminalRenderer, Viewport};
use tui_mole::types::{GameEvent, HIT_FLASH_MS, TICK_MS, TOTAL_CELLS};

/// Profile collection file, one JSON array.
const STORE_FILE: &str = "users.json";

const MAX_NAME_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Home,
    Game,
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut engine = GameEngine::new(time_seed());
    let mut store = ScoreStore::new(STORE_FILE);

    let events: Rc<RefCell<VecDeque<GameEvent>>> = Rc::new(RefCell::new(VecDeque::new()));
    let sink = Rc::clone(&events);
    engine.subscribe(move |event| sink.borrow_mut().push_back(*event));

    let mut screen = Screen::Home;
    let mut name_input = String::new();
    let mut selected = DEFAULT_DIFFICULTY;
    // (cell, remaining ms) of the hit-feedback highlight.
    let mut hit_flash: Option<(u32, u32)> = None;
    // Score captured at the moment a round ends, consumed by the
    // GameEnded handler below.
    let mut last_round_score: u32 = 0;

    let home_view = HomeView;
    let game_view = GameView::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let fb = match screen {
            Screen::Home => {
                let greeting = store
                    .current_user()
                    .map(|user| capitalize(&user.display_name));
                home_view.render(
                    &HomeScreen {
                        name_input: &name_input,
                        selected,
                        greeting: greeting.as_deref(),
                        best_score: store.max_score(selected),
                    },
                    viewport,
                )
            }
            Screen::Game => {
                let player = store
                    .current_user()
                    .map(|user| capitalize(&user.display_name))
                    .unwrap_or_default();
                game_view.render(
                    &GameScreen {
                        player: &player,
                        difficulty: engine.difficulty(),
                        score: engine.score(),
                        best: store.max_score(selected).unwrap_or(0),
                        running: engine.is_active(),
                        active_cell: engine.active_cell(),
                        hit_cell: hit_flash.map(|(cell, _)| cell),
                    },
                    viewport,
                )
            }
        };
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match screen {
                        Screen::Home => match handle_home_key(key) {
                            Some(HomeInput::Type(c)) => {
                                if name_input.chars().count() < MAX_NAME_LEN {
                                    name_input.push(c);
                                }
                            }
                            Some(HomeInput::Backspace) => {
                                name_input.pop();
                            }
                            Some(HomeInput::CycleDifficulty) => {
                                selected = selected.next();
                            }
                            Some(HomeInput::Submit) => {
                                let trimmed = name_input.trim();
                                if !trimmed.is_empty() {
                                    store.create_or_resume(trimmed)?;
                                    // Resuming restores the tier the player
                                    // last used.
                                    if let Some(user) = store.current_user() {
                                        selected = user.last_difficulty;
                                    }
                                    engine.set_difficulty(selected);
                                    screen = Screen::Game;
                                }
                            }
                            Some(HomeInput::Exit) => return Ok(()),
                            None => {}
                        },
                        Screen::Game => {
                            if should_quit(key) {
                                if engine.is_active() {
                                    last_round_score = engine.score();
                                    engine.stop();
                                    drain_events(&events, &mut store, selected, last_round_score);
                                }
                                return Ok(());
                            }
                            match handle_game_key(key) {
                                Some(GameInput::Cell(cell)) => {
                                    if engine.is_active() && engine.active_cell() == Some(cell) {
                                        engine.register_hit();
                                        engine.hide_target();
                                        hit_flash = Some((cell, HIT_FLASH_MS));
                                    }
                                }
                                Some(GameInput::ToggleRound) => {
                                    if engine.is_active() {
                                        last_round_score = engine.score();
                                        engine.stop();
                                    } else {
                                        engine.start(TOTAL_CELLS);
                                    }
                                }
                                Some(GameInput::CycleDifficulty) => {
                                    if !engine.is_active() {
                                        selected = selected.next();
                                        engine.set_difficulty(selected);
                                        // Best-effort: a failed write only
                                        // loses the remembered tier.
                                        let _ = store.update_user_data(selected, None);
                                    }
                                }
                                Some(GameInput::LeaveRound) => {
                                    if engine.is_active() {
                                        last_round_score = engine.score();
                                        engine.stop();
                                    }
                                    screen = Screen::Home;
                                }
                                None => {}
                            }
                        }
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.tick(TICK_MS);
            if let Some((cell, remaining)) = hit_flash {
                hit_flash = remaining
                    .checked_sub(TICK_MS)
                    .filter(|left| *left > 0)
                    .map(|left| (cell, left));
            }
        }

        drain_events(&events, &mut store, selected, last_round_score);
    }
}

/// React to engine notifications: a finished round persists its score and
/// tier for the current player. Persistence is best-effort.
fn drain_events(
    events: &Rc<RefCell<VecDeque<GameEvent>>>,
    store: &mut ScoreStore,
    selected: tui_mole::types::Difficulty,
    last_round_score: u32,
) {
    while let Some(event) = events.borrow_mut().pop_front() {
        if event == GameEvent::GameEnded {
            let _ = store.update_user_data(selected, Some(last_round_score));
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
