//! Terminal rendering module.
//!
//! Views render application state into a plain framebuffer of styled
//! character cells; the renderer flushes that framebuffer to a raw-mode
//! alternate-screen terminal. Views stay pure and unit-testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameScreen, GameView, HomeScreen, HomeView, Viewport};
pub use renderer::TerminalRenderer;
