//! Built-in move oracle: a bare-kings board.
//!
//! White king on a1, black king on h1, white to move. Generation is
//! pseudo-legal: a king may step onto an attacked square and may capture the
//! opposing king. A side whose king has been captured has no moves, so its
//! turn ends the session.

use crate::oracle::MoveOracle;

/// Square index 0..64, a1 = 0, b1 = 1, .., h8 = 63.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square(pub u8);

impl Square {
    fn file(self) -> i8 {
        (self.0 % 8) as i8
    }

    fn rank(self) -> i8 {
        (self.0 / 8) as i8
    }

    /// Coordinate name, `a1` through `h8`.
    pub fn name(self) -> String {
        let file = (b'a' + self.0 % 8) as char;
        format!("{}{}", file, self.0 / 8 + 1)
    }
}

/// Position of the two kings plus the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KingsState {
    pub white: Option<Square>,
    pub black: Option<Square>,
    pub white_to_move: bool,
}

/// A king step from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KingMove {
    pub from: Square,
    pub to: Square,
}

/// Two-king pseudo-legal walk, the default move source for encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct BareKings;

impl MoveOracle for BareKings {
    type State = KingsState;
    type Move = KingMove;

    fn initial_state(&self) -> KingsState {
        KingsState {
            white: Some(Square(0)),
            black: Some(Square(7)),
            white_to_move: true,
        }
    }

    fn options(&self, state: &KingsState) -> Vec<KingMove> {
        let mover = if state.white_to_move {
            state.white
        } else {
            state.black
        };
        let from = match mover {
            Some(sq) => sq,
            None => return Vec::new(),
        };
        // Targets in ascending square order keeps the enumeration stable.
        let mut moves = Vec::with_capacity(8);
        for to in 0..64u8 {
            let to = Square(to);
            let df = (to.file() - from.file()).abs();
            let dr = (to.rank() - from.rank()).abs();
            if df <= 1 && dr <= 1 && (df, dr) != (0, 0) {
                moves.push(KingMove { from, to });
            }
        }
        moves
    }

    fn apply(&self, state: &KingsState, mv: &KingMove) -> KingsState {
        let mut next = *state;
        if state.white_to_move {
            next.white = Some(mv.to);
            if next.black == Some(mv.to) {
                next.black = None;
            }
        } else {
            next.black = Some(mv.to);
            if next.white == Some(mv.to) {
                next.white = None;
            }
        }
        next.white_to_move = !state.white_to_move;
        next
    }

    fn label(&self, mv: &KingMove) -> String {
        format!("{}{}", mv.from.name(), mv.to.name())
    }
}
