//! Fence placement rules.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. The player still has a fence to place.
//! 2. The orientation tag is `h` or `v`.
//! 3. The anchor lies in `0..=7` on both axes.
//! 4. The same fence is not already on the board.
//! 5. With the fence added, both pawns can still reach their goal rows.
//!
//! Step 5 runs on `FenceSet::with`, a structurally shared copy of the
//! placed fences plus the candidate. The state passed in is never modified,
//! whatever the outcome; the caller commits the returned fence itself.

use tracing::debug;

use super::reachability::path_exists;
use crate::core::{Fence, FenceRequest, GameState, Player};
use crate::error::{RuleResult, RuleViolation};

/// Validate a raw fence request for `player`.
///
/// On success returns the checked `Fence` for the caller to commit.
pub fn validate_fence_placement(
    state: &GameState,
    player: Player,
    request: &FenceRequest,
) -> RuleResult<Fence> {
    ensure_fences_left(state, player)?;
    let fence = Fence::try_from(request).inspect_err(|violation| {
        debug!(%player, ?request, %violation, "fence request rejected");
    })?;
    check_placement(state, player, fence)?;
    Ok(fence)
}

/// Validate an already-constructed fence for `player`.
///
/// Orientation and bounds are guaranteed by `Fence`, so only the fence
/// stock, overlap and path checks run.
pub fn check_fence(state: &GameState, player: Player, fence: Fence) -> RuleResult<()> {
    ensure_fences_left(state, player)?;
    check_placement(state, player, fence)
}

fn ensure_fences_left(state: &GameState, player: Player) -> RuleResult<()> {
    if state.fences_left(player) == 0 {
        debug!(%player, "no fences remaining");
        return Err(RuleViolation::NoFencesRemaining);
    }
    Ok(())
}

fn check_placement(state: &GameState, player: Player, fence: Fence) -> RuleResult<()> {
    if state.fences.contains(&fence) {
        debug!(%player, %fence, "fence overlaps an existing fence");
        return Err(RuleViolation::FenceOverlap);
    }

    let hypothetical = state.fences.with(fence);
    let open = Player::ALL
        .iter()
        .all(|&p| path_exists(&hypothetical, state.pawn(p), p.goal_row()));

    if !open {
        debug!(%player, %fence, "fence would seal a pawn off");
        return Err(RuleViolation::PathBlocked);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Orientation, Position};

    fn request(x: i32, y: i32, orientation: &str) -> FenceRequest {
        FenceRequest::new(x, y, orientation)
    }

    #[test]
    fn test_valid_placement() {
        let state = GameState::new();
        let fence = validate_fence_placement(&state, Player::First, &request(3, 4, "h")).unwrap();

        assert_eq!(fence, Fence::horizontal(3, 4));
        assert!(state.fences.is_empty());
    }

    #[test]
    fn test_check_order() {
        let mut state = GameState::new();
        state.fences_remaining[Player::First] = 0;

        // Fence stock is checked before anything else.
        assert_eq!(
            validate_fence_placement(&state, Player::First, &request(99, 99, "z")),
            Err(RuleViolation::NoFencesRemaining)
        );
        // Orientation before bounds.
        assert_eq!(
            validate_fence_placement(&state, Player::Second, &request(99, 99, "z")),
            Err(RuleViolation::InvalidOrientation)
        );
        assert_eq!(
            validate_fence_placement(&state, Player::Second, &request(8, 0, "v")),
            Err(RuleViolation::OutOfBounds)
        );
        assert_eq!(
            validate_fence_placement(&state, Player::Second, &request(0, -1, "h")),
            Err(RuleViolation::OutOfBounds)
        );
    }

    #[test]
    fn test_overlap() {
        let mut state = GameState::new();
        state.fences.insert(Fence::vertical(2, 2));

        assert_eq!(
            validate_fence_placement(&state, Player::First, &request(2, 2, "v")),
            Err(RuleViolation::FenceOverlap)
        );
        // Same anchor, other orientation, is a different fence.
        assert!(validate_fence_placement(&state, Player::First, &request(2, 2, "h")).is_ok());
    }

    #[test]
    fn test_path_blocked() {
        let mut state = GameState::new();
        for x in [0u8, 2, 4, 6] {
            state.fences.insert(Fence::horizontal(x, 3));
        }
        state.fences.insert(Fence::horizontal(7, 2));
        let before = state.clone();

        // Closing the last gap in column 8 seals both pawns.
        assert_eq!(
            check_fence(&state, Player::Second, Fence::vertical(7, 3)),
            Err(RuleViolation::PathBlocked)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_blocking_only_one_pawn_is_rejected() {
        // First's pawn in the corner with a fence below it; closing its side
        // leaves Second untouched but still fails.
        let mut state = GameState::new();
        state.pawns[Player::First] = Position::new(0, 0);
        state.fences.insert(Fence::horizontal(0, 0));

        assert_eq!(
            check_fence(&state, Player::Second, Fence::vertical(0, 0)),
            Err(RuleViolation::PathBlocked)
        );
        assert!(path_exists(&state.fences, state.pawn(Player::Second), 0));
    }

    #[test]
    fn test_check_fence_skips_raw_checks() {
        let state = GameState::new();
        assert_eq!(check_fence(&state, Player::First, Fence::new(7, 7, Orientation::Vertical)), Ok(()));
    }
}
