use super::Color;
use crate::error::MoveError;

pub const SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Triangle,
    Circle,
    Square,
    Pentagon,
}

impl Shape {
    /// Get shape name for display
    pub fn name(self) -> &'static str {
        match self {
            Shape::Triangle => "triangle",
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Pentagon => "pentagon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub color: Color,
}

impl Piece {
    pub const fn new(shape: Shape, color: Color) -> Self {
        Piece { shape, color }
    }

    /// Pentagons are shields: they never count as material and cannot be taken.
    pub fn is_capturable(self) -> bool {
        self.shape != Shape::Pentagon
    }
}

/// A board coordinate. Row 0 is White's home edge, row 5 is Black's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Pos { row, col }
    }

    pub fn is_on_board(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Fail with `InvalidCoordinate` unless the position lies on the grid.
    pub fn validate(self) -> Result<Pos, MoveError> {
        if self.is_on_board() {
            Ok(self)
        } else {
            Err(MoveError::InvalidCoordinate {
                row: self.row,
                col: self.col,
            })
        }
    }

    /// Step by a signed offset, returning `None` once the grid edge is crossed.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if row < 0 || row >= SIZE as i32 || col < 0 || col >= SIZE as i32 {
            return None;
        }
        Some(Pos::new(row as usize, col as usize))
    }
}

/// One ply: a relocation, or a capture-and-relocate when `is_capture` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
    pub is_capture: bool,
}

/// Fixed 14-piece starting layout.
const INITIAL_LAYOUT: [(usize, usize, Shape, Color); 14] = [
    (0, 1, Shape::Triangle, Color::White),
    (0, 4, Shape::Triangle, Color::White),
    (1, 1, Shape::Circle, Color::White),
    (1, 4, Shape::Circle, Color::White),
    (1, 0, Shape::Square, Color::White),
    (1, 5, Shape::Square, Color::White),
    (3, 3, Shape::Pentagon, Color::White),
    (5, 1, Shape::Triangle, Color::Black),
    (5, 4, Shape::Triangle, Color::Black),
    (4, 1, Shape::Circle, Color::Black),
    (4, 4, Shape::Circle, Color::Black),
    (4, 0, Shape::Square, Color::Black),
    (4, 5, Shape::Square, Color::Black),
    (2, 2, Shape::Pentagon, Color::Black),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; SIZE]; SIZE],
}

impl Board {
    /// Create a board with no pieces on it
    pub fn empty() -> Self {
        Board {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// Create the standard starting position
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for (row, col, shape, color) in INITIAL_LAYOUT {
            board.cells[row][col] = Some(Piece::new(shape, color));
        }
        board
    }

    /// Build a board from an explicit piece list. Later entries overwrite earlier ones.
    pub fn with_pieces(pieces: &[(Pos, Piece)]) -> Result<Self, MoveError> {
        let mut board = Board::empty();
        for &(pos, piece) in pieces {
            board.place(pos, Some(piece))?;
        }
        Ok(board)
    }

    /// Get the piece at a position; off-board positions read as empty
    pub fn get(&self, pos: Pos) -> Option<Piece> {
        self.cells
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .flatten()
    }

    /// Get the piece at a position, rejecting off-board coordinates
    pub fn piece_at(&self, pos: Pos) -> Result<Option<Piece>, MoveError> {
        let pos = pos.validate()?;
        Ok(self.cells[pos.row][pos.col])
    }

    /// Put a piece on (or clear) a cell
    pub fn place(&mut self, pos: Pos, piece: Option<Piece>) -> Result<(), MoveError> {
        let pos = pos.validate()?;
        self.cells[pos.row][pos.col] = piece;
        Ok(())
    }

    /// Occupied cells in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|piece| (Pos::new(row, col), piece)))
        })
    }

    /// Number of non-pentagon pieces a color still has
    pub fn capturable_count(&self, color: Color) -> usize {
        self.pieces()
            .filter(|(_, piece)| piece.color == color && piece.is_capturable())
            .count()
    }

    /// A game is decided once either side is down to its last capturable piece
    pub fn is_decided(&self) -> bool {
        self.capturable_count(Color::White) == 1 || self.capturable_count(Color::Black) == 1
    }

    /// Produce the board after `mv`. Legality is not checked here; the source cell
    /// is cleared and the mover overwrites whatever stood on the destination.
    pub fn apply(&self, mv: &Move) -> Result<Board, MoveError> {
        let from = mv.from.validate()?;
        let to = mv.to.validate()?;
        let piece = self.cells[from.row][from.col].ok_or(MoveError::EmptySourceCell {
            row: from.row,
            col: from.col,
        })?;

        let mut next = *self;
        next.cells[from.row][from.col] = None;
        next.cells[to.row][to.col] = Some(piece);
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

/// Free-function form of [`Board::apply`].
pub fn apply(board: &Board, mv: &Move) -> Result<Board, MoveError> {
    board.apply(mv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: (usize, usize), to: (usize, usize)) -> Move {
        Move {
            from: Pos::new(from.0, from.1),
            to: Pos::new(to.0, to.1),
            is_capture: false,
        }
    }

    #[test]
    fn test_empty_board_is_empty() {
        let board = Board::empty();
        for row in 0..SIZE {
            for col in 0..SIZE {
                assert_eq!(board.get(Pos::new(row, col)), None);
            }
        }
        assert_eq!(board.pieces().count(), 0);
    }

    #[test]
    fn test_initial_layout() {
        let board = Board::initial();
        assert_eq!(board.pieces().count(), 14);
        assert_eq!(
            board.get(Pos::new(0, 1)),
            Some(Piece::new(Shape::Triangle, Color::White))
        );
        assert_eq!(
            board.get(Pos::new(3, 3)),
            Some(Piece::new(Shape::Pentagon, Color::White))
        );
        assert_eq!(
            board.get(Pos::new(4, 5)),
            Some(Piece::new(Shape::Square, Color::Black))
        );
        assert_eq!(
            board.get(Pos::new(2, 2)),
            Some(Piece::new(Shape::Pentagon, Color::Black))
        );
        assert_eq!(board.capturable_count(Color::White), 6);
        assert_eq!(board.capturable_count(Color::Black), 6);
        assert!(!board.is_decided());
    }

    #[test]
    fn test_initial_layout_is_mirrored() {
        let board = Board::initial();
        for (pos, piece) in board.pieces().filter(|(_, p)| p.shape != Shape::Pentagon) {
            let mirrored = board.get(Pos::new(SIZE - 1 - pos.row, pos.col));
            assert_eq!(mirrored, Some(Piece::new(piece.shape, piece.color.other())));
        }
    }

    #[test]
    fn test_pieces_are_row_major() {
        let board = Board::initial();
        let positions: Vec<Pos> = board.pieces().map(|(pos, _)| pos).collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_offset_stops_at_edges() {
        assert_eq!(Pos::new(0, 0).offset(-1, 0), None);
        assert_eq!(Pos::new(5, 5).offset(0, 1), None);
        assert_eq!(Pos::new(2, 3).offset(1, -1), Some(Pos::new(3, 2)));
    }

    #[test]
    fn test_apply_relocates_piece() {
        let board = Board::initial();
        let next = board.apply(&mv((1, 0), (2, 0))).unwrap();

        assert_eq!(next.get(Pos::new(1, 0)), None);
        assert_eq!(
            next.get(Pos::new(2, 0)),
            Some(Piece::new(Shape::Square, Color::White))
        );
        // Source board is untouched
        assert!(board.get(Pos::new(1, 0)).is_some());
    }

    #[test]
    fn test_apply_capture_overwrites_target() {
        let board = Board::with_pieces(&[
            (Pos::new(2, 2), Piece::new(Shape::Square, Color::White)),
            (Pos::new(3, 2), Piece::new(Shape::Circle, Color::Black)),
        ])
        .unwrap();
        let capture = Move {
            is_capture: true,
            ..mv((2, 2), (3, 2))
        };
        let next = board.apply(&capture).unwrap();

        assert_eq!(
            next.get(Pos::new(3, 2)),
            Some(Piece::new(Shape::Square, Color::White))
        );
        assert_eq!(next.capturable_count(Color::Black), 0);
    }

    #[test]
    fn test_apply_rejects_off_board() {
        let board = Board::initial();
        assert_eq!(
            board.apply(&mv((1, 0), (6, 0))),
            Err(MoveError::InvalidCoordinate { row: 6, col: 0 })
        );
        assert_eq!(
            board.apply(&mv((7, 1), (2, 0))),
            Err(MoveError::InvalidCoordinate { row: 7, col: 1 })
        );
    }

    #[test]
    fn test_apply_rejects_empty_source() {
        let board = Board::initial();
        assert_eq!(
            apply(&board, &mv((2, 0), (3, 0))),
            Err(MoveError::EmptySourceCell { row: 2, col: 0 })
        );
    }

    #[test]
    fn test_place_and_piece_at() {
        let mut board = Board::empty();
        let piece = Piece::new(Shape::Circle, Color::Black);
        board.place(Pos::new(5, 5), Some(piece)).unwrap();
        assert_eq!(board.piece_at(Pos::new(5, 5)), Ok(Some(piece)));
        assert!(board.place(Pos::new(0, 6), Some(piece)).is_err());
        assert!(board.piece_at(Pos::new(6, 6)).is_err());
        assert_eq!(board.get(Pos::new(6, 6)), None);
    }

    #[test]
    fn test_decided_at_one_capturable_piece() {
        let board = Board::with_pieces(&[
            (Pos::new(0, 0), Piece::new(Shape::Square, Color::White)),
            (Pos::new(0, 1), Piece::new(Shape::Pentagon, Color::White)),
            (Pos::new(5, 0), Piece::new(Shape::Square, Color::Black)),
            (Pos::new(5, 1), Piece::new(Shape::Circle, Color::Black)),
        ])
        .unwrap();
        assert_eq!(board.capturable_count(Color::White), 1);
        assert!(board.is_decided());
    }
}
