#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board dimensions (pure Rust, no config files).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    pub name: String,
    pub width: i32,
    pub height: i32,
}

impl BoardConfig {
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// The standard 9×9 board.
    pub fn standard() -> Self {
        Self::new("standard", 9, 9)
    }

    /// The 5×5 minishogi board.
    pub fn mini() -> Self {
        Self::new("mini", 5, 5)
    }

    pub fn square_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::standard()
    }
}
