//! Board definition: the static, ordered square table.
//!
//! Pure data. The engine and the presentation layer both read squares
//! by index; nothing mutates the board after construction.

mod layout;
mod square;

pub use layout::{Board, SQUARES_PER_ROW};
pub use square::{Square, SquareType};
