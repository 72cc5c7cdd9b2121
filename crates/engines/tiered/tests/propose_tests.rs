//! Whole matches driven through `propose_move` and `apply_move`, the way a
//! transport layer would use the engine.

use quarto_core::{MatchState, WinnerOutcome};
use tiered_engine::{EngineConfig, TieredEngine};

fn engine(seed: u64) -> TieredEngine {
    TieredEngine::new(EngineConfig {
        seed: Some(seed),
        max_nodes: Some(50_000),
        ..EngineConfig::default()
    })
}

#[test]
fn self_play_proposals_are_always_accepted() {
    for seed in 0..3 {
        let mut players = [engine(seed), engine(seed + 100)];
        let mut state = MatchState::new();
        let mut turn = 0;

        while !state.is_over() {
            let req = players[turn % 2].propose_move(&state).unwrap();
            state
                .apply_move(&req)
                .unwrap_or_else(|e| panic!("seed {seed}: {req:?} refused: {e}"));
            turn += 1;
        }

        assert!(turn <= 17);
        assert_ne!(state.winner(), WinnerOutcome::None);
    }
}

#[test]
fn claims_only_real_quartos() {
    let mut players = [engine(5), engine(6)];
    let mut state = MatchState::new();
    let mut turn = 0;

    while !state.is_over() {
        let req = players[turn % 2].propose_move(&state).unwrap();
        if req.quarto {
            let after = quarto_core::apply_move(&state, &req).unwrap();
            assert!(after.check_line_win());
        }
        state.apply_move(&req).unwrap();
        turn += 1;
    }
}
