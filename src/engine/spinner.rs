//! Spin sources: where movement values come from.
//!
//! Production games use `GameRng`. Tests and replays plug in
//! `ScriptedSpins` to get an exact sequence.

use crate::core::GameRng;

/// Source of movement values.
///
/// Implementations should return values in `1..=faces`. The engine
/// rejects anything below 1 with `GameError::InvalidMovement`.
pub trait SpinSource {
    /// Produce the next movement value.
    fn spin(&mut self, faces: u8) -> i64;
}

impl SpinSource for GameRng {
    fn spin(&mut self, faces: u8) -> i64 {
        GameRng::spin(self, faces)
    }
}

/// Replays a fixed sequence of spins, cycling when exhausted.
///
/// Values are returned as given, ignoring `faces`. An empty script
/// always yields 0.
///
/// ```
/// use career_life::engine::{ScriptedSpins, SpinSource};
///
/// let mut spins = ScriptedSpins::new([3, 5]);
/// assert_eq!(spins.spin(6), 3);
/// assert_eq!(spins.spin(6), 5);
/// assert_eq!(spins.spin(6), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedSpins {
    values: Vec<i64>,
    cursor: usize,
}

impl ScriptedSpins {
    /// Create a script from the given values.
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of spins handed out so far.
    #[must_use]
    pub fn spins_taken(&self) -> usize {
        self.cursor
    }
}

impl SpinSource for ScriptedSpins {
    fn spin(&mut self, _faces: u8) -> i64 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
