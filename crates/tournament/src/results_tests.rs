use super::*;

fn sample() -> TournamentResults {
    let mut results = TournamentResults::new(
        "tiered vs random",
        vec!["tiered".to_string(), "random".to_string()],
        MatchConfig {
            num_games: 3,
            ..Default::default()
        },
    );
    let mut result = MatchResult::new();
    result.record(GameResult::Win, false);
    result.record(GameResult::Win, true);
    result.record(GameResult::Draw, false);
    results.add_match("tiered", "random", result);
    results
}

#[test]
fn test_match_result_tally() {
    let result = &sample().matches[0].result;
    assert_eq!(result.total_games(), 3);
    assert_eq!(result.forfeits, 1);
    assert!((result.score() - 2.5 / 3.0).abs() < 1e-9);
    assert_eq!(MatchResult::new().score(), 0.5);
}

#[test]
fn test_flipped() {
    assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
    assert_eq!(GameResult::Draw.flipped(), GameResult::Draw);
}

#[test]
fn test_save_and_load() {
    let path = std::env::temp_dir().join(format!("quarto_results_{}.json", std::process::id()));
    let results = sample();
    results.save(&path).unwrap();

    let loaded = TournamentResults::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.name, results.name);
    assert_eq!(loaded.matches[0].result, results.matches[0].result);
    assert_eq!(loaded.config.num_games, 3);
}

#[test]
fn test_load_missing_file() {
    let err = TournamentResults::load(Path::new("no/such/results.json")).unwrap_err();
    assert!(matches!(err, ResultsError::Read { .. }));
}

#[test]
fn test_report_lists_matches() {
    let report = sample().generate_report();
    assert!(report.contains("=== Tournament: tiered vs random ==="));
    assert!(report.contains("no time limit"));
    assert!(report.contains("tiered"));
}
