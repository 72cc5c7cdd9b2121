use super::*;
use crate::board::LINES;

/// A full board on which no line shares an attribute.
const DRAWN_LAYOUT: [u8; 16] = [11, 6, 7, 5, 8, 15, 2, 14, 3, 9, 13, 4, 12, 1, 10, 0];

fn piece(id: u8) -> Piece {
    Piece::from_id(id).unwrap()
}

/// Opening hands piece 0, then pieces 0, 1, 2, ... are placed on `cells` in
/// order, each mover handing over the lowest remaining piece.
fn play_in_order(cells: &[usize]) -> MatchState {
    let mut state = MatchState::new();
    state.apply_move(&MoveRequest::opening(0)).unwrap();
    for &cell in cells {
        state.apply_move(&MoveRequest::place(cell, 0)).unwrap();
    }
    state
}

#[test]
fn test_opening_move_sets_pending_piece() {
    let mut state = MatchState::new();
    let status = state.apply_move(&MoveRequest::opening(3)).unwrap();

    assert_eq!(status, GameStatus::InProgress(Phase::AwaitingPlacement));
    assert_eq!(state.pending_piece(), Some(piece(3)));
    assert_eq!(state.pending_index(), Some(3));
    assert_eq!(state.current_player(), Player::Two);
    assert_eq!(state.remaining(), 16);
    assert_eq!(state.board().placed_count(), 0);
}

#[test]
fn test_opening_without_next_piece_is_rejected() {
    let mut state = MatchState::new();
    let before = state;
    let err = state.apply_move(&MoveRequest::default()).unwrap_err();
    assert_eq!(err, MoveRejection::MissingNextPiece);
    assert_eq!(state, before);
}

#[test]
fn test_occupied_position_is_rejected_and_state_unchanged() {
    let mut state = play_in_order(&[0]);
    let before = state;

    let err = state.apply_move(&MoveRequest::place(0, 5)).unwrap_err();

    assert_eq!(err, MoveRejection::PositionOccupied(0));
    assert_eq!(state, before);
}

#[test]
fn test_position_errors() {
    let mut state = play_in_order(&[]);
    let before = state;

    assert_eq!(
        state.apply_move(&MoveRequest::place(16, 0)),
        Err(MoveRejection::PositionOutOfRange(16))
    );
    let no_position = MoveRequest {
        position: None,
        next_piece: Some(0),
        quarto: false,
    };
    assert_eq!(state.apply_move(&no_position), Err(MoveRejection::MissingPosition));
    assert_eq!(state, before);
}

#[test]
fn test_piece_index_errors_roll_back_the_placement() {
    let mut state = play_in_order(&[]);
    let before = state;

    // 15 pieces remain after the placement, so 15 is one past the end.
    assert_eq!(
        state.apply_move(&MoveRequest::place(4, 15)),
        Err(MoveRejection::InvalidPieceIndex {
            index: 15,
            pool_len: 15
        })
    );
    let no_piece = MoveRequest {
        position: Some(4),
        next_piece: None,
        quarto: false,
    };
    assert_eq!(state.apply_move(&no_piece), Err(MoveRejection::MissingNextPiece));
    assert_eq!(state, before);
    assert!(state.board().is_free(4));
}

#[test]
fn test_next_piece_indexes_pool_after_placement() {
    let mut state = play_in_order(&[]);
    // Piece 0 is pending; once placed, index 0 names piece 1.
    state.apply_move(&MoveRequest::place(7, 0)).unwrap();
    assert_eq!(state.board().piece_at(7), Some(piece(0)));
    assert_eq!(state.pending_piece(), Some(piece(1)));
    assert_eq!(state.remaining(), 15);
}

#[test]
fn test_false_claim_rolls_back_whole_move() {
    // Pieces 0, 1, 2 (all round and dark) on cells 0..3 of the top row.
    let mut state = play_in_order(&[0, 1, 2]);
    let before = state;

    // Piece 3 goes somewhere off the row: no line is complete.
    let claim = MoveRequest::place(5, 0).with_claim();
    assert_eq!(state.apply_move(&claim), Err(MoveRejection::FalseQuartoClaim));
    assert_eq!(state, before);
    assert!(state.board().is_free(5));
    assert!(!state.quarto_claimed());
}

#[test]
fn test_claim_completing_line_wins() {
    let mut state = play_in_order(&[0, 1, 2]);
    let mover = state.current_player();

    let status = state
        .apply_move(&MoveRequest::place(3, 0).with_claim())
        .unwrap();

    assert_eq!(status, GameStatus::Won(mover));
    assert_eq!(state.winner(), WinnerOutcome::Player(mover));
    assert!(state.quarto_claimed());
    assert_eq!(state.board().winning_line(), Some(&LINES[0]));
}

#[test]
fn test_unclaimed_line_can_be_claimed_on_a_later_move() {
    // The row is completed without a claim; the next mover claims it
    // while placing on an unrelated cell.
    let mut state = play_in_order(&[0, 1, 2, 3]);
    assert!(state.check_line_win());
    assert_eq!(state.winner(), WinnerOutcome::None);

    let mover = state.current_player();
    let status = state
        .apply_move(&MoveRequest::place(10, 0).with_claim())
        .unwrap();
    assert_eq!(status, GameStatus::Won(mover));
}

#[test]
fn test_terminal_state_rejects_moves() {
    let mut state = play_in_order(&[0, 1, 2]);
    state
        .apply_move(&MoveRequest::place(3, 0).with_claim())
        .unwrap();
    let before = state;

    assert_eq!(
        state.apply_move(&MoveRequest::place(8, 0)),
        Err(MoveRejection::GameAlreadyOver)
    );
    assert_eq!(state, before);
}

#[test]
fn test_full_board_without_line_is_drawn() {
    let mut state = MatchState::new();
    state
        .play(Move::new(None, Piece::from_id(DRAWN_LAYOUT[0])))
        .unwrap();
    for cell in 0..16usize {
        let next = DRAWN_LAYOUT.get(cell + 1).and_then(|&id| Piece::from_id(id));
        let status = state.play(Move::new(Some(cell as u8), next)).unwrap();
        if cell < 15 {
            assert!(!status.is_terminal());
        }
    }

    assert!(state.board().is_full());
    assert!(state.is_drawn());
    assert_eq!(state.winner(), WinnerOutcome::Draw);
    assert_eq!(state.remaining(), 0);
    assert_eq!(state.pending_piece(), None);
}

#[test]
fn test_claim_on_full_drawn_board_is_false() {
    let mut board = Board::empty();
    for (cell, &id) in DRAWN_LAYOUT.iter().enumerate().take(15) {
        board.set_piece(cell as u8, Some(piece(id)));
    }
    let mut state =
        MatchState::from_position(board, Some(piece(DRAWN_LAYOUT[15])), Player::Two).unwrap();
    let before = state;

    let claim = Move {
        position: Some(15),
        next_piece: None,
        quarto: true,
    };
    assert_eq!(state.play(claim), Err(MoveRejection::FalseQuartoClaim));
    assert_eq!(state, before);
}

#[test]
fn test_pure_apply_move_leaves_input_untouched() {
    let state = MatchState::new();
    let next = apply_move(&state, &MoveRequest::opening(9)).unwrap();
    assert_eq!(state, MatchState::new());
    assert_eq!(next.pending_piece(), Some(piece(9)));
    assert_eq!(winner(&next), WinnerOutcome::None);
}

#[test]
fn test_from_position_rejects_inconsistent_input() {
    let mut board = Board::empty();
    board.set_piece(0, Some(piece(4)));
    assert!(MatchState::from_position(board, Some(piece(4)), Player::One).is_none());
    assert!(MatchState::from_position(board, None, Player::One).is_none());
    assert!(MatchState::from_position(board, Some(piece(5)), Player::One).is_some());

    board.set_piece(1, Some(piece(4)));
    assert!(MatchState::from_position(board, Some(piece(5)), Player::One).is_none());
}

#[test]
fn test_position_hash_tracks_board_and_pending() {
    let a = play_in_order(&[0]);
    let b = play_in_order(&[1]);
    assert_ne!(a.position_hash(), b.position_hash());
    assert_eq!(a.position_hash(), play_in_order(&[0]).position_hash());
    assert_ne!(MatchState::new().position_hash(), play_in_order(&[]).position_hash());
}
