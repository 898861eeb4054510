use arcade_loops::compute::shooter::*;
use arcade_loops::config::ShooterConfig;
use arcade_loops::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// A running game with nothing in play and spawning pushed far away.
fn make_state() -> ShooterState {
    ShooterState {
        player_x: 50.0,
        enemies: Vec::new(),
        lasers: Vec::new(),
        lives: 3,
        score: 0,
        status: GameStatus::Running,
        frame: 0,
        config: ShooterConfig {
            spawn_interval: 1_000,
            ..ShooterConfig::default()
        },
    }
}

fn enemy(x: f32, y: f32) -> Enemy {
    Enemy { x, y }
}

fn laser(x: f32, y: f32) -> Laser {
    Laser { x, y }
}

// ── init_state / reset ────────────────────────────────────────────────────────

#[test]
fn init_state_defaults() {
    let s = init_state(ShooterConfig::default());
    assert_eq!(s.player_x, 50.0);
    assert_eq!(s.lives, 3);
    assert_eq!(s.score, 0);
    assert!(s.enemies.is_empty());
    assert!(s.lasers.is_empty());
    assert_eq!(s.status, GameStatus::Ready);
}

#[test]
fn begin_and_reset_run_the_game() {
    let s = begin(&init_state(ShooterConfig::default()));
    assert_eq!(s.status, GameStatus::Running);

    let mut over = make_state();
    over.lives = 0;
    over.score = 120;
    over.enemies = vec![enemy(1.0, 1.0)];
    over.status = GameStatus::Over;
    let s2 = reset(&over);
    assert_eq!(s2.status, GameStatus::Running);
    assert_eq!(s2.lives, 3);
    assert_eq!(s2.score, 0);
    assert!(s2.enemies.is_empty());
}

// ── steer / shoot ─────────────────────────────────────────────────────────────

#[test]
fn steer_sets_position() {
    assert_eq!(steer(&make_state(), 33.0).player_x, 33.0);
}

#[test]
fn steer_clamps_to_playfield() {
    assert_eq!(steer(&make_state(), 99.0).player_x, 90.0);
    assert_eq!(steer(&make_state(), -4.0).player_x, 0.0);
}

#[test]
fn steer_ignored_when_not_running() {
    let mut s = make_state();
    s.status = GameStatus::Over;
    assert_eq!(steer(&s, 10.0).player_x, 50.0);
}

#[test]
fn shoot_spawns_laser_at_player() {
    let s = steer(&make_state(), 20.0);
    let s2 = shoot(&s);
    assert_eq!(s2.lasers, vec![laser(20.0, 90.0)]);
}

#[test]
fn shoot_has_no_cap() {
    let mut s = make_state();
    for _ in 0..12 {
        s = shoot(&s);
    }
    assert_eq!(s.lasers.len(), 12);
}

#[test]
fn shoot_ignored_after_game_over() {
    let mut s = make_state();
    s.status = GameStatus::Over;
    assert!(shoot(&s).lasers.is_empty());
}

// ── tick — movement ──────────────────────────────────────────────────────────

#[test]
fn tick_increments_frame() {
    let mut s = make_state();
    s.frame = 5;
    assert_eq!(tick(&s, &mut seeded_rng()).frame, 6);
}

#[test]
fn lasers_move_up_enemies_move_down() {
    let mut s = make_state();
    s.lasers = vec![laser(10.0, 90.0)];
    s.enemies = vec![enemy(60.0, 20.0)];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.lasers, vec![laser(10.0, 80.0)]);
    assert_eq!(s2.enemies, vec![enemy(60.0, 23.0)]);
}

#[test]
fn lasers_past_the_top_are_dropped() {
    let mut s = make_state();
    s.lasers = vec![laser(10.0, 0.0), laser(30.0, 1.0)];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.lasers, vec![laser(30.0, -9.0)]);
}

#[test]
fn enemies_spawn_on_interval() {
    let mut s = make_state();
    s.config.spawn_interval = 20;
    let mut rng = seeded_rng();
    for _ in 0..19 {
        s = tick(&s, &mut rng);
    }
    assert!(s.enemies.is_empty());
    s = tick(&s, &mut rng);
    assert_eq!(s.enemies.len(), 1);
    assert_eq!(s.enemies[0].y, 0.0);
    assert!(s.enemies[0].x >= 0.0 && s.enemies[0].x < 90.0);
}

// ── tick — escapes ────────────────────────────────────────────────────────────

#[test]
fn enemy_escape_costs_one_life() {
    let mut s = make_state();
    s.enemies = vec![enemy(40.0, 95.0)];

    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.enemies, vec![enemy(40.0, 98.0)]);
    assert_eq!(s2.lives, 3);

    let s3 = tick(&s2, &mut seeded_rng());
    assert!(s3.enemies.is_empty());
    assert_eq!(s3.lives, 2);
    assert_eq!(s3.status, GameStatus::Running);
}

#[test]
fn reaching_exactly_the_bottom_is_not_an_escape() {
    let mut s = make_state();
    s.enemies = vec![enemy(40.0, 97.0)];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.enemies.len(), 1);
    assert_eq!(s2.lives, 3);
}

#[test]
fn each_escape_counts_once() {
    let mut s = make_state();
    s.enemies = vec![enemy(10.0, 99.0), enemy(50.0, 99.0), enemy(70.0, 50.0)];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.lives, 1);
    assert_eq!(s2.enemies, vec![enemy(70.0, 53.0)]);
}

#[test]
fn last_life_lost_ends_game() {
    let mut s = make_state();
    s.lives = 1;
    s.enemies = vec![enemy(10.0, 99.0)];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.lives, 0);
    assert_eq!(s2.status, GameStatus::Over);
}

#[test]
fn lives_never_underflow() {
    let mut s = make_state();
    s.lives = 1;
    s.enemies = vec![enemy(10.0, 99.0), enemy(30.0, 99.0)];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.lives, 0);
    assert_eq!(s2.status, GameStatus::Over);
}

// ── tick — hits ───────────────────────────────────────────────────────────────

#[test]
fn laser_destroys_enemy() {
    let mut s = make_state();
    s.enemies = vec![enemy(40.0, 50.0)];
    s.lasers = vec![laser(45.0, 65.0)]; // after moving: dx 5, dy 2
    let s2 = tick(&s, &mut seeded_rng());
    assert!(s2.enemies.is_empty());
    assert!(s2.lasers.is_empty());
    assert_eq!(s2.score, 10);
}

#[test]
fn hit_needs_both_axes_within_reach() {
    let mut s = make_state();
    s.enemies = vec![enemy(40.0, 50.0)];
    s.lasers = vec![laser(50.0, 63.0)]; // dx exactly 10
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.enemies.len(), 1);
    assert_eq!(s2.lasers.len(), 1);
    assert_eq!(s2.score, 0);
}

#[test]
fn one_laser_kills_only_one_enemy() {
    let mut s = make_state();
    s.enemies = vec![enemy(40.0, 50.0), enemy(42.0, 51.0)];
    s.lasers = vec![laser(41.0, 63.0)];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.score, 10);
    assert_eq!(s2.enemies, vec![enemy(42.0, 54.0)]); // first enemy went
    assert!(s2.lasers.is_empty());
}

#[test]
fn one_enemy_absorbs_only_one_laser() {
    let mut s = make_state();
    s.enemies = vec![enemy(40.0, 50.0)];
    s.lasers = vec![laser(41.0, 63.0), laser(39.0, 62.0)];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.score, 10);
    assert_eq!(s2.lasers, vec![laser(39.0, 52.0)]); // first laser went
}

#[test]
fn shot_enemy_does_not_also_escape() {
    let mut s = make_state();
    s.enemies = vec![enemy(40.0, 99.0)];
    s.lasers = vec![laser(40.0, 105.0)];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.score, 10);
    assert_eq!(s2.lives, 3);
    assert!(s2.enemies.is_empty());
}

#[test]
fn resolve_hits_pairs_in_index_order() {
    let enemies = vec![enemy(0.0, 0.0), enemy(5.0, 0.0), enemy(80.0, 80.0)];
    let lasers = vec![laser(3.0, 0.0), laser(4.0, 0.0)];
    let (hit, used) = resolve_hits(&enemies, &lasers, 10.0);
    assert_eq!(hit, vec![true, true, false]);
    assert_eq!(used, vec![true, true]);
}

#[test]
fn game_over_freezes_everything() {
    let mut s = make_state();
    s.status = GameStatus::Over;
    s.enemies = vec![enemy(40.0, 50.0)];
    s.lasers = vec![laser(45.0, 65.0)];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.enemies, s.enemies);
    assert_eq!(s2.lasers, s.lasers);
    assert_eq!(s2.score, 0);
    assert_eq!(s2.frame, s.frame);
}
