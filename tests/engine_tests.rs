//! Full-game tests through the commit layer.
//!
//! These drive `QuoridorRules::apply_action` the way an API or CLI layer
//! would: propose, validate, commit, check for a winner, pass the move.

use quoridor_rules::core::{Action, Fence, GameConfig, GameState, Player, Position};
use quoridor_rules::rules::{check_invariants, GameResult, QuoridorRules, RulesEngine};
use quoridor_rules::RuleViolation;

fn play(
    rules: &QuoridorRules,
    state: &mut GameState,
    script: &[(Player, Action)],
) -> Option<GameResult> {
    let mut result = None;
    for (player, action) in script {
        result = rules
            .apply_action(state, *player, action)
            .unwrap_or_else(|e| panic!("{player} {action:?} rejected: {e}"));
        assert!(check_invariants(state).is_empty());
    }
    result
}

/// Two pawns race down the same column; Second jumps and wins first.
#[test]
fn test_race_with_jump() {
    use Player::{First, Second};

    let rules = QuoridorRules::default();
    let mut state = rules.initial_state();

    let script = [
        (First, Action::move_pawn(4, 1)),
        (Second, Action::move_pawn(4, 7)),
        (First, Action::move_pawn(4, 2)),
        (Second, Action::move_pawn(4, 6)),
        (First, Action::move_pawn(4, 3)),
        (Second, Action::move_pawn(4, 5)),
        (First, Action::move_pawn(4, 4)),
        (Second, Action::move_pawn(4, 3)), // jump
        (First, Action::move_pawn(4, 5)),
        (Second, Action::move_pawn(4, 2)),
        (First, Action::move_pawn(4, 6)),
        (Second, Action::move_pawn(4, 1)),
        (First, Action::move_pawn(4, 7)),
        (Second, Action::move_pawn(4, 0)),
    ];

    let result = play(&rules, &mut state, &script);

    assert_eq!(result, Some(GameResult { winner: Second }));
    assert_eq!(state.winner, Some(Second));
    assert_eq!(state.history.len(), 14);
    assert_eq!(state.turn_number, 15);
    assert_eq!(state.history[7].action, Action::move_pawn(4, 3));
    assert_eq!(state.history[7].turn, 8);

    // First would have won next move, but the game is over.
    assert_eq!(
        rules.apply_action(&mut state, First, &Action::move_pawn(4, 8)),
        Err(RuleViolation::GameOver)
    );
}

/// A fence behind the opponent turns the jump into a side-step.
#[test]
fn test_fence_forces_diagonal() {
    use Player::{First, Second};

    let rules = QuoridorRules::default();
    let mut state = rules.initial_state();
    state.pawns[First] = Position::new(4, 3);
    state.pawns[Second] = Position::new(4, 4);
    state.to_move = Second;

    play(&rules, &mut state, &[(Second, Action::place_fence(4, 4, "h"))]);

    assert_eq!(
        rules.apply_action(&mut state, First, &Action::move_pawn(4, 5)),
        Err(RuleViolation::InvalidMove)
    );
    play(&rules, &mut state, &[(First, Action::move_pawn(5, 4))]);

    assert_eq!(state.pawn(First), Position::new(5, 4));
    assert_eq!(state.fences_left(Second), 9);
}

/// Turn order is enforced and rejected actions cost nothing.
#[test]
fn test_turn_order() {
    let rules = QuoridorRules::default();
    let mut state = rules.initial_state();

    assert_eq!(
        rules.apply_action(&mut state, Player::Second, &Action::place_fence(0, 0, "h")),
        Err(RuleViolation::NotYourTurn(Player::Second))
    );
    assert_eq!(state.fences_left(Player::Second), 10);
    assert!(state.fences.is_empty());

    rules
        .apply_action(&mut state, Player::First, &Action::place_fence(0, 0, "h"))
        .unwrap();
    assert_eq!(
        rules.apply_action(&mut state, Player::First, &Action::move_pawn(4, 1)),
        Err(RuleViolation::NotYourTurn(Player::First))
    );
    assert_eq!(
        rules.apply_action(&mut state, Player::Second, &Action::place_fence(0, 0, "h")),
        Err(RuleViolation::FenceOverlap)
    );
    assert_eq!(state.to_move, Player::Second);
}

/// Custom fence stock runs out through the commit layer.
#[test]
fn test_custom_fence_stock() {
    use Player::{First, Second};

    let rules = QuoridorRules::new(GameConfig::default().with_fences_per_player(1));
    let mut state = rules.initial_state();

    play(
        &rules,
        &mut state,
        &[
            (First, Action::place_fence(0, 4, "h")),
            (Second, Action::move_pawn(4, 7)),
        ],
    );

    assert_eq!(
        rules.apply_action(&mut state, First, &Action::place_fence(2, 4, "h")),
        Err(RuleViolation::NoFencesRemaining)
    );
}

/// A snapshot survives a JSON round trip and play continues from it.
#[test]
fn test_snapshot_round_trip() {
    use Player::{First, Second};

    let rules = QuoridorRules::default();
    let mut state = rules.initial_state();
    play(
        &rules,
        &mut state,
        &[
            (First, Action::move_pawn(4, 1)),
            (Second, Action::place_fence(3, 6, "v")),
        ],
    );

    let json = serde_json::to_string(&state).unwrap();
    let mut restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
    assert!(restored.fences.contains(&Fence::vertical(3, 6)));

    play(&rules, &mut restored, &[(First, Action::move_pawn(4, 2))]);
    assert_eq!(restored.to_move, Second);
    assert_eq!(state.pawn(First), Position::new(4, 1));
}

/// A stored game with a tampered fence set is caught before play.
#[test]
fn test_loaded_state_invariants() {
    let json = r#"{
        "pawns": {"data": [{"x": 0, "y": 0}, {"x": 4, "y": 8}]},
        "fences_remaining": {"data": [8, 10]},
        "fences": {"fences": [
            {"x": 0, "y": 0, "orientation": "h"},
            {"x": 0, "y": 0, "orientation": "v"}
        ]},
        "to_move": "First",
        "winner": null,
        "turn_number": 5,
        "history": []
    }"#;

    let state: GameState = serde_json::from_str(json).unwrap();
    let violations = check_invariants(&state);
    assert_eq!(violations.len(), 1);

    let bad_cell = json.replace(r#"{"x": 0, "y": 0}, {"x": 4"#, r#"{"x": 9, "y": 0}, {"x": 4"#);
    assert!(serde_json::from_str::<GameState>(&bad_cell).is_err());
}
