use super::*;
use quarto_core::{Board, Piece, Player};

fn piece(id: u8) -> Piece {
    Piece::from_id(id).unwrap()
}

fn seeded() -> TieredEngine {
    TieredEngine::new(EngineConfig {
        seed: Some(9),
        ..EngineConfig::default()
    })
}

#[test]
fn strategy_by_remaining() {
    assert_eq!(Strategy::for_remaining(16, 13), Strategy::Heuristic);
    assert_eq!(Strategy::for_remaining(14, 13), Strategy::Heuristic);
    assert_eq!(Strategy::for_remaining(13, 13), Strategy::Search);
    assert_eq!(Strategy::for_remaining(2, 13), Strategy::Search);
}

#[test]
fn opening_proposal_names_only_a_piece() {
    let mut engine = seeded();
    let state = MatchState::new();
    let req = engine.propose_move(&state).unwrap();
    assert_eq!(req.position, None);
    assert!(req.next_piece.unwrap() < 16);
    assert!(!req.quarto);
}

#[test]
fn illegal_proposal_is_replaced() {
    let mut engine = seeded();
    let mut board = Board::empty();
    board.set_piece(0, Some(piece(5)));
    let state = MatchState::from_position(board, Some(piece(9)), Player::Two).unwrap();

    let occupied = Move::new(Some(0), Some(piece(1)));
    let mv = engine.settle(&state, Some(occupied), Strategy::Heuristic);
    assert_ne!(mv, occupied);
    assert!(state.child(mv).is_ok());

    let mv = engine.settle(&state, None, Strategy::Search);
    assert!(state.child(mv).is_ok());
}

#[test]
fn legal_proposal_is_kept() {
    let mut engine = seeded();
    let state = MatchState::new();
    let mv = Move::new(None, Some(piece(3)));
    assert_eq!(engine.settle(&state, Some(mv), Strategy::Heuristic), mv);
}

#[test]
fn finished_match_is_refused() {
    let mut engine = seeded();
    let mut board = Board::empty();
    for (cell, id) in [(0u8, 0u8), (1, 1), (2, 2)] {
        board.set_piece(cell, Some(piece(id)));
    }
    let mut state = MatchState::from_position(board, Some(piece(3)), Player::One).unwrap();
    state
        .play(Move {
            position: Some(3),
            next_piece: Some(piece(4)),
            quarto: true,
        })
        .unwrap();

    assert_eq!(
        engine.propose_move(&state),
        Err(MoveRejection::GameAlreadyOver)
    );
    assert!(engine.search(&state, SearchLimits::depth(1)).best_move.is_none());
}

#[test]
fn threshold_option() {
    let mut engine = seeded();
    assert!(engine.set_option("SearchThreshold", "10"));
    assert_eq!(engine.config().search_threshold, 10);
    assert!(engine.set_option("LateDepth", "4"));
    assert!(engine.set_option("PressureOverlap", "3"));
    assert!(!engine.set_option("SearchThreshold", "lots"));
    assert!(!engine.set_option("Bogus", "1"));
}
