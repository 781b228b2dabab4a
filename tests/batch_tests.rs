//! Batch runner tests.
//!
//! These verify reproducibility, serial/parallel agreement, and the
//! aggregation rules for games that hit the turn threshold.

use war_sim::core::{ConfigError, PlayerId, SimConfig};
use war_sim::rules::EndState;
use war_sim::sim::{BatchRunner, BatchSummary};

fn small_batch(seed: u64) -> SimConfig {
    SimConfig::new().with_games(200).with_card_count(20).with_seed(seed)
}

/// Test that the same seed reproduces the same statistics.
#[test]
fn test_seeded_batch_is_reproducible() {
    let first = BatchRunner::new(small_batch(1234)).unwrap().run();
    let second = BatchRunner::new(small_batch(1234)).unwrap().run();

    assert_eq!(first, second);
    assert_eq!(first.games, 200);
}

/// Test that different seeds give different games.
#[test]
fn test_different_seeds_differ() {
    let a = BatchRunner::new(small_batch(1)).unwrap().results();
    let b = BatchRunner::new(small_batch(2)).unwrap().results();

    assert_ne!(a, b);
}

/// Test that running on rayon changes nothing.
#[test]
fn test_parallel_matches_serial() {
    let serial = BatchRunner::new(small_batch(77)).unwrap().results();
    let parallel = BatchRunner::new(small_batch(77).with_parallel(true))
        .unwrap()
        .results();

    assert_eq!(serial, parallel);
}

/// Test that tracing changes nothing.
#[test]
fn test_trace_does_not_change_results() {
    let config = SimConfig::new().with_games(5).with_card_count(8).with_seed(3);
    let quiet = BatchRunner::new(config.clone()).unwrap().results();
    let traced = BatchRunner::new(config.with_trace(true)).unwrap().results();

    assert_eq!(quiet, traced);
}

/// Test that every result obeys the end-state rules.
#[test]
fn test_results_are_well_formed() {
    let runner = BatchRunner::new(small_batch(9)).unwrap();

    for result in runner.results() {
        let sizes = &result.final_sizes;
        assert_eq!(sizes[PlayerId::One] + sizes[PlayerId::Two], 20);

        match result.end_state.winner() {
            Some(winner) => {
                assert_eq!(sizes[winner.opponent()], 0);
                assert!(result.turns <= 10_000);
            }
            None => assert_eq!(result.turns, 10_001),
        }
    }
}

/// Test a batch where every game is cut off.
#[test]
fn test_tiny_threshold_batch() {
    let config = SimConfig::new()
        .with_games(10)
        .with_card_count(52)
        .with_turn_threshold(1)
        .with_seed(5);
    let runner = BatchRunner::new(config).unwrap();

    // 26 cards each cannot change hands in two turns
    let results = runner.results();
    assert!(results.iter().all(|r| r.end_state == EndState::TooLong && r.turns == 2));

    let summary = runner.run();
    assert_eq!(summary.too_long, 10);
    assert_eq!(summary.valid_games, 0);
    assert_eq!(summary.mean_turns, None);
    assert_eq!(summary.player_one_wins + summary.player_two_wins, 0);
}

/// Test the two-card batch: every game lasts exactly one turn.
#[test]
fn test_two_card_batch() {
    let config = SimConfig::new().with_games(50).with_card_count(2).with_seed(8);
    let summary = BatchRunner::new(config).unwrap().run();

    assert_eq!(summary.valid_games, 50);
    assert_eq!(summary.mean_turns, Some(1.0));
    assert_eq!(summary.player_one_wins + summary.player_two_wins, 50);
    assert!(summary.player_one_wins > 0);
    assert!(summary.player_two_wins > 0);
}

/// Test that win counts and the mean agree with the raw results.
#[test]
fn test_summary_matches_results() {
    let runner = BatchRunner::new(small_batch(31)).unwrap();
    let results = runner.results();
    let summary = BatchSummary::from_results(20, &results);

    let decided: Vec<_> = results.iter().filter(|r| r.is_decided()).collect();
    let total: u64 = decided.iter().map(|r| u64::from(r.turns)).sum();

    assert_eq!(summary.valid_games, decided.len());
    assert_eq!(summary.too_long, results.len() - decided.len());
    assert_eq!(
        summary.player_one_wins,
        decided.iter().filter(|r| r.end_state == EndState::PlayerOneWin).count()
    );
    assert_eq!(summary.mean_turns, Some(total as f64 / decided.len() as f64));
    assert_eq!(summary, runner.run());
}

/// Test the JSON shape of a summary.
#[test]
fn test_summary_json() {
    let summary = BatchRunner::new(small_batch(4)).unwrap().run();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["games"], 200);
    assert_eq!(json["card_count"], 20);
    assert!(json["mean_turns"].is_number());

    let back: BatchSummary = serde_json::from_value(json).unwrap();
    assert_eq!(back, summary);
}

/// Test configuration errors surface before any game runs.
#[test]
fn test_invalid_configs() {
    let cases = [
        (SimConfig::new().with_card_count(13), ConfigError::OddCardCount { count: 13 }),
        (SimConfig::new().with_card_count(0), ConfigError::TooFewCards { count: 0 }),
        (SimConfig::new().with_turn_threshold(0), ConfigError::ZeroThreshold),
        (SimConfig::new().with_games(0), ConfigError::ZeroGames),
    ];

    for (config, expected) in cases {
        assert_eq!(BatchRunner::new(config).err(), Some(expected));
    }
}
