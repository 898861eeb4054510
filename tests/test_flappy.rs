use arcade_loops::compute::flappy::*;
use arcade_loops::config::FlappyConfig;
use arcade_loops::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

/// A running game with no pipes in play.
fn make_state() -> FlappyState {
    FlappyState {
        bird: Bird {
            y: 300.0,
            velocity: 0.0,
        },
        pipes: Vec::new(),
        score: 0,
        status: GameStatus::Running,
        config: FlappyConfig::default(),
    }
}

/// A pipe whose gap comfortably contains a bird at y≈300.
fn open_pipe(x: f32) -> Pipe {
    Pipe {
        x,
        gap_top: 250.0,
        passed: false,
    }
}

// ── init_state / jump ─────────────────────────────────────────────────────────

#[test]
fn init_state_waits_for_first_jump() {
    let s = init_state(FlappyConfig::default());
    assert_eq!(s.bird.y, 300.0);
    assert_eq!(s.bird.velocity, 0.0);
    assert!(s.pipes.is_empty());
    assert_eq!(s.status, GameStatus::Ready);
}

#[test]
fn ticks_do_nothing_before_first_jump() {
    let s = init_state(FlappyConfig::default());
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.bird, s.bird);
    assert!(s2.pipes.is_empty());
}

#[test]
fn first_jump_starts_game_and_seeds_a_pipe() {
    let s = init_state(FlappyConfig::default());
    let s2 = jump(&s, &mut seeded_rng());
    assert_eq!(s2.status, GameStatus::Running);
    assert_eq!(s2.bird.velocity, -10.0);
    assert_eq!(s2.pipes.len(), 1);
    assert_eq!(s2.pipes[0].x, 400.0);
    assert!(!s2.pipes[0].passed);
}

#[test]
fn jump_ignored_after_game_over() {
    let mut s = make_state();
    s.status = GameStatus::Over;
    s.bird.velocity = 4.0;
    let s2 = jump(&s, &mut seeded_rng());
    assert_eq!(s2.bird.velocity, 4.0);
    assert_eq!(s2.status, GameStatus::Over);
}

#[test]
fn new_pipe_gap_within_margins() {
    let config = FlappyConfig::default();
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let p = new_pipe(&config, &mut rng);
        assert!(p.gap_top >= 50.0 && p.gap_top < 400.0);
        assert_eq!(p.gap_top, p.gap_top.floor());
    }
}

// ── tick — physics ────────────────────────────────────────────────────────────

#[test]
fn gravity_then_position() {
    let s2 = tick(&make_state(), &mut seeded_rng());
    assert_eq!(s2.bird.velocity, 0.5);
    assert_eq!(s2.bird.y, 300.5);
}

#[test]
fn jump_overrides_velocity_until_next_tick() {
    let mut s = make_state();
    s.bird.velocity = 6.0;
    let jumped = jump(&s, &mut seeded_rng());
    assert_eq!(jumped.bird.velocity, -10.0);
    assert_eq!(jumped.bird.y, 300.0);

    let s2 = tick(&jumped, &mut seeded_rng());
    assert_eq!(s2.bird.velocity, -9.5);
    assert_eq!(s2.bird.y, 290.5);
}

#[test]
fn floor_ends_game_without_moving() {
    let mut s = make_state();
    s.bird.y = 569.0;
    s.bird.velocity = 1.0;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.status, GameStatus::Over);
    assert_eq!(s2.bird, s.bird);
}

#[test]
fn ceiling_ends_game() {
    let mut s = make_state();
    s.bird.y = 2.0;
    s.bird.velocity = -10.0;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.status, GameStatus::Over);
}

#[test]
fn resting_on_the_floor_is_still_legal() {
    let mut s = make_state();
    s.bird.y = 569.5;
    s.bird.velocity = -0.5;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.bird.y, 569.5);
    assert_eq!(s2.status, GameStatus::Running);
}

// ── tick — pipes ──────────────────────────────────────────────────────────────

#[test]
fn pipes_scroll_left() {
    let mut s = make_state();
    s.pipes = vec![open_pipe(300.0)];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.pipes[0].x, 297.0);
}

#[test]
fn pipe_spawned_when_none_in_play() {
    let s2 = tick(&make_state(), &mut seeded_rng());
    assert_eq!(s2.pipes.len(), 1);
    assert_eq!(s2.pipes[0].x, 400.0);
}

#[test]
fn next_pipe_waits_for_spacing() {
    let mut s = make_state();
    s.pipes = vec![open_pipe(300.0)];
    assert_eq!(tick(&s, &mut seeded_rng()).pipes.len(), 1);

    s.pipes = vec![open_pipe(202.0)];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.pipes.len(), 2); // 199 < 400 - 200
    assert_eq!(s2.pipes[1].x, 400.0);
}

#[test]
fn offscreen_pipes_dropped() {
    let mut s = make_state();
    s.pipes = vec![open_pipe(-78.0), open_pipe(250.0)];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.pipes.len(), 1);
    assert_eq!(s2.pipes[0].x, 247.0);
}

#[test]
fn scores_once_when_trailing_edge_crosses_center() {
    // Trailing edge 122 + 80 = 202, then 199 after one tick: past x = 200.
    let mut s = make_state();
    s.pipes = vec![open_pipe(122.0)];
    s.bird.velocity = -0.5; // hold altitude

    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.score, 1);
    assert!(s2.pipes[0].passed);

    let mut s3 = s2.clone();
    for _ in 0..5 {
        s3.bird.velocity = -0.5;
        s3 = tick(&s3, &mut seeded_rng());
    }
    assert_eq!(s3.score, 1);
}

#[test]
fn no_score_before_crossing() {
    let mut s = make_state();
    s.pipes = vec![open_pipe(124.0)]; // trailing edge lands on 201
    s.bird.velocity = -0.5;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.score, 0);
    assert!(!s2.pipes[0].passed);
}

#[test]
fn hitting_a_pipe_ends_game() {
    let mut s = make_state();
    s.pipes = vec![Pipe {
        x: 180.0,
        gap_top: 50.0, // gap 50..200, bird is at 300
        passed: false,
    }];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.status, GameStatus::Over);
    assert_eq!(s2.pipes, s.pipes);
    assert_eq!(s2.bird, s.bird);
}

#[test]
fn flying_through_the_gap_is_safe() {
    let mut s = make_state();
    s.pipes = vec![open_pipe(180.0)];
    s.bird.velocity = -0.5;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.status, GameStatus::Running);
}

#[test]
fn hits_pipe_requires_horizontal_overlap() {
    let config = FlappyConfig::default();
    let bird = Bird {
        y: 0.0,
        velocity: 0.0,
    };
    let far = Pipe {
        x: 300.0,
        gap_top: 300.0,
        passed: false,
    };
    let near = Pipe { x: 150.0, ..far.clone() };
    assert!(!hits_pipe(&bird, &far, &config));
    assert!(hits_pipe(&bird, &near, &config));
}

#[test]
fn game_over_freezes_everything() {
    let mut s = make_state();
    s.status = GameStatus::Over;
    s.pipes = vec![open_pipe(122.0)];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.bird, s.bird);
    assert_eq!(s2.pipes, s.pipes);
    assert_eq!(s2.score, 0);
}

#[test]
fn reset_returns_to_ready() {
    let mut s = make_state();
    s.score = 9;
    s.pipes = vec![open_pipe(10.0)];
    s.status = GameStatus::Over;
    let s2 = reset(&s);
    assert_eq!(s2.status, GameStatus::Ready);
    assert_eq!(s2.score, 0);
    assert!(s2.pipes.is_empty());
    assert_eq!(s2.bird.y, 300.0);
}
