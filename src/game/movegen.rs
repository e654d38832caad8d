//! Per-shape ray generation.
//!
//! Every shape slides along a fixed set of rays up to its range. A friendly
//! pentagon on a ray is stepped over for free; any other occupant ends the ray,
//! and is a destination only when it is a capturable enemy and the mover is
//! allowed to capture. Circles may additionally restart from a friendly
//! pentagon they pass over, in any of their directions.

use super::board::{Board, Move, Piece, Pos, Shape, SIZE};
use super::Color;
use crate::error::MoveError;

const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONALS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const ALL_DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Movement parameters of one shape.
#[derive(Debug, Clone, Copy)]
pub struct MoveRule {
    pub directions: &'static [(i32, i32)],
    pub range: usize,
    /// May restart from a friendly pentagon it passes over.
    pub redirects: bool,
    pub captures: bool,
}

impl MoveRule {
    pub fn of(shape: Shape) -> Self {
        match shape {
            Shape::Triangle => MoveRule {
                directions: &DIAGONALS,
                range: 3,
                redirects: false,
                captures: true,
            },
            Shape::Square => MoveRule {
                directions: &ORTHOGONALS,
                range: 2,
                redirects: false,
                captures: true,
            },
            Shape::Circle => MoveRule {
                directions: &ALL_DIRECTIONS,
                range: 1,
                redirects: true,
                captures: true,
            },
            Shape::Pentagon => MoveRule {
                directions: &ALL_DIRECTIONS,
                range: 1,
                redirects: false,
                captures: false,
            },
        }
    }
}

/// Destinations for a `shape` of `color` standing on `from`.
///
/// The board cell at `from` is not consulted for the mover's identity; it is
/// treated as occupied by the mover, so no ray ever lands back on it. Each
/// destination is listed once, in direction order; squares reached by
/// restarting from a friendly pentagon follow the mover's own rays.
pub fn moves_for(
    board: &Board,
    from: Pos,
    shape: Shape,
    color: Color,
) -> Result<Vec<Pos>, MoveError> {
    let from = from.validate()?;
    let rule = MoveRule::of(shape);

    let mut destinations = Vec::new();
    let mut seen = [[false; SIZE]; SIZE];
    // Friendly pentagon squares already used as restart points.
    let mut expanded = [[false; SIZE]; SIZE];
    let mut origins = vec![(from, rule.range)];

    while let Some((origin, range)) = origins.pop() {
        for &(dr, dc) in rule.directions {
            let mut cursor = origin;
            let mut steps = 0;

            while steps < range {
                let Some(next) = cursor.offset(dr, dc) else {
                    break;
                };
                if next == from {
                    break;
                }
                cursor = next;

                match board.get(next) {
                    None => {
                        push_once(&mut destinations, &mut seen, next);
                        steps += 1;
                    }
                    Some(Piece {
                        shape: Shape::Pentagon,
                        color: owner,
                    }) if owner == color => {
                        if rule.redirects && !expanded[next.row][next.col] {
                            expanded[next.row][next.col] = true;
                            origins.push((next, range - steps));
                        }
                    }
                    Some(target) => {
                        if rule.captures && target.color != color && target.is_capturable() {
                            push_once(&mut destinations, &mut seen, next);
                        }
                        break;
                    }
                }
            }
        }
    }

    Ok(destinations)
}

fn push_once(out: &mut Vec<Pos>, seen: &mut [[bool; SIZE]; SIZE], pos: Pos) {
    if !seen[pos.row][pos.col] {
        seen[pos.row][pos.col] = true;
        out.push(pos);
    }
}

/// Every move available to `color`: pieces in row-major order, each piece's
/// destinations in generation order.
pub fn all_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces().filter(|(_, piece)| piece.color == color) {
        // `from` comes from the board itself, so it is always on the grid
        let Ok(destinations) = moves_for(board, from, piece.shape, color) else {
            continue;
        };
        moves.extend(destinations.into_iter().map(|to| Move {
            from,
            to,
            is_capture: is_capture(board, to, piece, color),
        }));
    }
    moves
}

/// Whether moving `mover` onto `to` takes an opposing piece.
pub fn is_capture(board: &Board, to: Pos, mover: Piece, color: Color) -> bool {
    mover.is_capturable()
        && board
            .get(to)
            .is_some_and(|target| target.color != color && target.is_capturable())
}
