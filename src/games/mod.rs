//! The two cabinet games.

pub mod flappy;
pub mod tictactoe;

/// Which game a menu entry launches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    TicTacToe,
    Flappy,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::TicTacToe, GameKind::Flappy];

    pub fn title(self) -> &'static str {
        match self {
            Self::TicTacToe => "Tic-Tac-Toe",
            Self::Flappy => "Flappy Bird",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_games_have_distinct_titles() {
        let titles: Vec<_> = GameKind::ALL.iter().map(|kind| kind.title()).collect();
        assert_eq!(titles.len(), 2);
        assert_ne!(titles[0], titles[1]);
    }
}
