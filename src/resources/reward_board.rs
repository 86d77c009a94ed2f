use bevy::prelude::*;

/// The board currently offered to the player.
///
/// Only what the blink logic needs: how many tiles there are and which one
/// has been chosen to win.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardBoard {
    pub tile_count: usize,
    /// Tile the reward sequence always lands on.
    pub rigged_winner_index: usize,
}

impl Default for RewardBoard {
    fn default() -> Self {
        Self::new(5, 0)
    }
}

impl RewardBoard {
    pub fn new(tile_count: usize, rigged_winner_index: usize) -> Self {
        Self {
            tile_count,
            rigged_winner_index,
        }
    }

    /// True if the board has tiles and the winner is one of them.
    pub fn is_valid(&self) -> bool {
        self.tile_count > 0 && self.rigged_winner_index < self.tile_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity() {
        assert!(RewardBoard::new(5, 4).is_valid());
        assert!(RewardBoard::new(1, 0).is_valid());
        assert!(!RewardBoard::new(5, 5).is_valid());
        assert!(!RewardBoard::new(0, 0).is_valid());
    }
}
