// End-to-end session tests for the public game cores.
// Everything here is pure logic, so no terminal is needed.

use std::collections::HashSet;

use learnplay::game::{
    CollisionType, Direction, GameEngine, GameState, Phase, Position, Snake, SnakeConfig,
};
use learnplay::progress::{Progress, ProgressSink};
use learnplay::rounds::{Advance, Letter, RoundConfig, RoundEngine, RoundValue};
use learnplay::session::{ActivityKind, FeedbackCue, SessionResult, SessionSink};
use rand::{Rng, SeedableRng, rngs::StdRng};

#[test]
fn perfect_letter_session_reports_five_of_five() {
    let mut engine = RoundEngine::with_rng(
        Letter::default_pool(),
        RoundConfig::default(),
        StdRng::seed_from_u64(2024),
    )
    .unwrap();
    let mut sink: Vec<SessionResult> = Vec::new();

    loop {
        let target = engine.choice().target;
        assert_eq!(engine.select_option(&target), Some(true));
        match engine.advance().unwrap() {
            Advance::NextRound(_) => continue,
            Advance::Finished(report) => {
                assert_eq!(report.cue, Some(FeedbackCue::SessionSuccess));
                sink.on_session_complete(report.result);
                break;
            }
        }
    }

    assert_eq!(sink, vec![SessionResult::new(ActivityKind::Letters, 5, 5)]);
}

#[test]
fn selection_is_locked_until_next_round() {
    let mut engine = RoundEngine::with_rng(
        Letter::default_pool(),
        RoundConfig::default(),
        StdRng::seed_from_u64(5),
    )
    .unwrap();

    let first = engine.choice().options[0];
    let verdict = engine.select_option(&first);
    assert!(verdict.is_some());
    let tally = engine.state().correct;

    for option in engine.choice().options.clone() {
        assert_eq!(engine.select_option(&option), None);
    }
    assert_eq!(engine.state().correct, tally);
    assert_eq!(engine.state().selected, Some(first));
}

#[test]
fn snake_driving_into_wall_scores_zero() {
    let mut engine = GameEngine::with_rng(SnakeConfig::default(), StdRng::seed_from_u64(1));
    let mut state = GameState::new(
        Snake::new(Position::new(0, 10), Direction::Up, 1),
        Position::new(15, 15),
        20,
        20,
    );
    assert!(engine.start(&mut state));

    assert!(engine.request_direction(&mut state, Direction::Left));
    let result = engine.step(&mut state);

    assert!(result.terminated);
    assert_eq!(state.phase, Phase::GameOver(CollisionType::Wall));
    let report = result.report.unwrap();
    assert_eq!(report.result, SessionResult::new(ActivityKind::Snake, 0, 1));
}

#[test]
fn snake_eats_once_then_bites_itself() {
    let mut engine = GameEngine::with_rng(SnakeConfig::default(), StdRng::seed_from_u64(9));
    // Body (5,5) (4,5) (3,5) (2,5), food straight ahead
    let mut state = GameState::new(
        Snake::new(Position::new(5, 5), Direction::Right, 4),
        Position::new(6, 5),
        20,
        20,
    );
    engine.start(&mut state);

    let result = engine.step(&mut state);
    assert!(result.info.ate_food);
    assert_eq!(state.snake.len(), 5);
    // Keep the replacement food off the path of the loop below
    state.food = Some(Position::new(19, 19));

    let mut report = None;
    for direction in [Direction::Down, Direction::Left, Direction::Up] {
        engine.request_direction(&mut state, direction);
        let result = engine.step(&mut state);
        if result.terminated {
            report = result.report;
            break;
        }
    }

    assert_eq!(state.phase, Phase::GameOver(CollisionType::SelfCollision));
    let report = report.unwrap();
    assert_eq!(report.result, SessionResult::new(ActivityKind::Snake, 1, 1));

    let mut progress = Progress::default();
    ProgressSink::new(&mut progress).on_session_complete(report.result);
    assert_eq!(progress.xp, 2);
    assert_eq!(progress.badges, vec!["Snake Master".to_string()]);
}

#[test]
fn random_play_keeps_snake_invariants() {
    let config = SnakeConfig::default();
    let directions = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut engine = GameEngine::with_rng(config.clone(), StdRng::seed_from_u64(seed + 1000));
        let mut state = engine.reset();
        engine.start(&mut state);

        for _ in 0..500 {
            if rng.gen_bool(0.3) {
                let direction = directions[rng.gen_range(0..directions.len())];
                let previous = state.snake.direction;
                let accepted = engine.request_direction(&mut state, direction);
                assert_eq!(accepted, !direction.is_parallel(previous));
            }

            let head = state.snake.head();
            let length = state.snake.len();
            let score = state.score;
            let result = engine.step(&mut state);

            if result.terminated {
                assert!(state.phase.is_terminal());
                assert!(result.report.is_some());
                break;
            }

            assert_eq!(state.snake.head().distance(head), 1);
            if result.info.ate_food {
                assert_eq!(state.snake.len(), length + 1);
                assert_eq!(state.score, score + 1);
            } else {
                assert_eq!(state.snake.len(), length);
                assert_eq!(state.score, score);
            }

            let cells: HashSet<_> = state.snake.body.iter().copied().collect();
            assert_eq!(cells.len(), state.snake.len());
            if let Some(food) = state.food {
                assert!(!cells.contains(&food));
            }
        }
    }
}

#[test]
fn reversal_request_does_not_change_heading() {
    let mut engine = GameEngine::with_rng(SnakeConfig::default(), StdRng::seed_from_u64(3));
    let mut state = engine.reset();
    state.food = Some(Position::new(0, 0));
    engine.start(&mut state);

    engine.request_direction(&mut state, Direction::Down);
    engine.step(&mut state);

    assert_eq!(state.snake.direction, Direction::Up);
    assert_eq!(state.snake.head(), Position::new(10, 9));
}
