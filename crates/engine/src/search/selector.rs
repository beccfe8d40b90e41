//! Two-ply minimax move selection with static material leaves.

use futures_lite::future::yield_now;
use instant::Instant;
use tracing::debug;

use crate::evaluation::evaluate_material;
use crate::move_gen::all_legal_moves;
use crate::position::Position;
use crate::types::{Color, Move};

/// Select a move for the side to move in `position`.
///
/// Every first-ply candidate is applied on a fresh clone; if the resulting
/// position has legal replies, the opponent is assumed to pick the reply
/// whose material score is worst for the original mover, otherwise the
/// static evaluation of the position stands (which scores checkmate and
/// stalemate leaves correctly without special-casing). Ties keep the
/// first-encountered candidate in enumeration order, so selection is
/// deterministic for a fixed position.
///
/// The future yields once per candidate so a cooperative runtime can
/// interleave legality queries and rendering with the search; only the
/// final choice is observable. Never mutates `position` - all work happens
/// on clones.
///
/// Returns `None` only when the mover has no legal moves; callers should
/// have detected game over first.
pub async fn select_move(position: &Position) -> Option<Move> {
    let started = Instant::now();
    let mover = position.side_to_move;
    let root = position.clone();
    let candidates = all_legal_moves(&root);
    if candidates.is_empty() {
        return None;
    }

    let mut best: Option<Move> = None;
    let mut best_score = match mover {
        Color::White => i32::MIN,
        Color::Black => i32::MAX,
    };

    for candidate in &candidates {
        yield_now().await;

        let mut after = root.clone();
        after.apply_unchecked(candidate);

        let replies = all_legal_moves(&after);
        let score = if replies.is_empty() {
            evaluate_material(&after)
        } else {
            worst_case_reply(&after, &replies, mover)
        };

        let improved = match mover {
            Color::White => score > best_score,
            Color::Black => score < best_score,
        };
        if improved {
            best_score = score;
            best = Some(*candidate);
        }
    }

    debug!(
        candidates = candidates.len(),
        score = best_score,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "engine move selected"
    );

    best.or_else(|| candidates.first().copied())
}

/// Apply every reply on a further clone and keep the material score the
/// opponent would choose: minimal if the original mover is white, maximal
/// if black.
fn worst_case_reply(after: &Position, replies: &[Move], mover: Color) -> i32 {
    let mut worst = match mover {
        Color::White => i32::MAX,
        Color::Black => i32::MIN,
    };
    for reply in replies {
        let mut leaf = after.clone();
        leaf.apply_unchecked(reply);
        let score = evaluate_material(&leaf);
        worst = match mover {
            Color::White => worst.min(score),
            Color::Black => worst.max(score),
        };
    }
    worst
}
