use game_core::*;
use glam::Vec2;
use hecs::World;
use proptest::prelude::*;

struct Match {
    world: World,
    time: Time,
    config: Config,
    phase: Phase,
    score: Score,
    events: Events,
    notices: Notices,
    rng: GameRng,
}

impl Match {
    fn new(phase: Phase) -> Self {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, &config, Side::Left);
        create_paddle(&mut world, &config, Side::Right);
        create_ball(&mut world, config.court_center(), Vec2::new(320.0, 0.0));
        Self {
            world,
            time: Time::default(),
            config,
            phase,
            score: Score::new(),
            events: Events::new(),
            notices: Notices::new(),
            rng: GameRng::new(7),
        }
    }

    fn run(&mut self, dt: f32) {
        self.events.clear();
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.phase,
            &mut self.score,
            &mut self.events,
            &mut self.notices,
            &mut self.rng,
        );
    }

    fn ball(&self) -> Ball {
        let mut query = self.world.query::<&Ball>();
        let ball = *query.iter().next().unwrap().1;
        ball
    }

    fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_, ball) in self.world.query_mut::<&mut Ball>() {
            *ball = Ball::new(pos, vel);
        }
    }

    fn paddle_y(&self, side: Side) -> f32 {
        let mut query = self.world.query::<&Paddle>();
        let y = query
            .iter()
            .find(|(_, paddle)| paddle.side == side)
            .unwrap()
            .1
            .y;
        y
    }
}

#[test]
fn test_idle_game_waits_for_start() {
    let mut game = Game::default();
    for _ in 0..10 {
        game.advance(0.1);
    }
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.status(), "Press Start or Space to begin.");
}

#[test]
fn test_first_frame_has_zero_dt() {
    let mut clock = FrameClock::new();
    let mut game = Game::default();
    game.start();

    game.advance(clock.tick(98_765.0));
    assert_eq!(game.phase(), Phase::Serving { timer: 0.0 });

    game.advance(clock.tick(98_865.0));
    match game.phase() {
        Phase::Serving { timer } => assert!((timer - 0.1).abs() < 1e-4),
        other => panic!("expected Serving, got {other:?}"),
    }
}

#[test]
fn test_serve_transitions_exactly_once() {
    let mut game = Game::default();
    game.start();
    game.drain_notices();

    let mut rally_starts = 0;
    for _ in 0..20 {
        game.advance(0.1);
        if game.events().rally_started {
            rally_starts += 1;
        }
    }
    assert_eq!(rally_starts, 1);
    let cleared = game
        .drain_notices()
        .into_iter()
        .filter(|notice| *notice == Notice::StatusChanged(String::new()))
        .count();
    assert_eq!(cleared, 1);
}

#[test]
fn test_ball_leaving_left_edge_scores_for_right() {
    let mut m = Match::new(Phase::Rallying);
    let radius = m.config.ball_radius;
    m.set_ball(Vec2::new(-radius - 1.0, 100.0), Vec2::new(-320.0, 0.0));
    m.run(0.001);

    assert_eq!(m.score, Score { left: 0, right: 1 });
    assert!(m.events.right_scored);
    assert_eq!(m.phase, Phase::Serving { timer: 0.0 });

    let ball = m.ball();
    assert_eq!(ball.pos, m.config.court_center());
    assert_eq!(ball.speed, m.config.ball_speed_initial);
    assert_eq!(
        m.notices.drain(),
        vec![
            Notice::ScoreChanged { left: 0, right: 1 },
            Notice::StatusChanged("Point for Right Player!".to_owned()),
        ]
    );
}

#[test]
fn test_ball_touching_edge_is_still_in_play() {
    let mut m = Match::new(Phase::Rallying);
    let radius = m.config.ball_radius;
    m.set_ball(Vec2::new(radius, 100.0), Vec2::new(0.0, 0.0));
    m.run(0.01);
    assert_eq!(m.score, Score::new());
    assert_eq!(m.phase, Phase::Rallying);
}

#[test]
fn test_serving_ball_does_not_move() {
    let mut m = Match::new(Phase::Serving { timer: 0.0 });
    let before = m.ball().pos;
    m.run(0.5);
    assert_eq!(m.ball().pos, before);
}

#[test]
fn test_rally_returns_off_right_paddle() {
    let mut m = Match::new(Phase::Rallying);
    let paddle_x = m.config.paddle_x(Side::Right);
    let center_y = m.config.court_height / 2.0;
    m.set_ball(
        Vec2::new(paddle_x - m.config.ball_radius - 2.0, center_y),
        Vec2::new(320.0, 0.0),
    );
    m.run(0.05);

    let ball = m.ball();
    assert!(ball.vel.x < 0.0, "Ball heads back toward the left player");
    assert_eq!(ball.speed, 330.0);
}

#[test]
fn test_win_freezes_simulation() {
    let mut m = Match::new(Phase::Rallying);
    m.score = Score { left: 3, right: 10 };
    let radius = m.config.ball_radius;
    m.set_ball(Vec2::new(-radius - 1.0, 100.0), Vec2::new(-320.0, 0.0));
    m.run(0.001);

    assert_eq!(m.score, Score { left: 3, right: 11 });
    assert_eq!(m.phase, Phase::Stopped { winner: Side::Right });
    assert_eq!(
        m.notices.latest_status(),
        Some("Right Player wins! Press Start or Space to play again.")
    );

    let ball = m.ball().pos;
    let left_y = m.paddle_y(Side::Left);
    for (_, intent) in m.world.query_mut::<&mut PaddleIntent>() {
        intent.dir = 1;
    }
    m.run(0.1);
    assert_eq!(m.ball().pos, ball);
    assert_eq!(m.paddle_y(Side::Left), left_y);
}

#[test]
fn test_restart_after_win() {
    let mut game = Game::default();
    game.start();
    let past_right = game.config().court_width + game.config().ball_radius + 1.0;
    // Every rally ends with the ball pushed out past the right paddle
    for _ in 0..1_000 {
        game.advance(0.05);
        if game.phase().is_rallying() {
            for (_, ball) in game.world_mut().query_mut::<&mut Ball>() {
                ball.pos.x = past_right;
                ball.vel.x = ball.vel.x.abs();
            }
        }
        if !game.phase().is_running() {
            break;
        }
    }
    assert_eq!(game.phase(), Phase::Stopped { winner: Side::Left });
    assert_eq!(game.score(), Score { left: 11, right: 0 });

    assert!(game.start());
    assert_eq!(game.score(), Score::new());
    assert_eq!(game.phase(), Phase::Serving { timer: 0.0 });
}

#[test]
fn test_huge_dt_is_clamped() {
    let mut m = Match::new(Phase::Rallying);
    let start = m.ball().pos;
    m.run(5.0);
    let travelled = m.ball().pos.x - start.x;
    assert!((travelled - 320.0 * Params::MAX_DT).abs() < 1e-2);
    assert!((m.time.now - Params::MAX_DT).abs() < 1e-6);
}

#[test]
fn test_negative_and_nan_dt_are_ignored() {
    let mut m = Match::new(Phase::Rallying);
    let start = m.ball().pos;
    m.run(-1.0);
    m.run(f32::NAN);
    assert_eq!(m.ball().pos, start);
    assert_eq!(m.time.now, 0.0);
}

#[test]
fn test_custom_court() {
    let config = Config::for_court(400.0, 300.0).unwrap();
    let mut game = Game::new(config, 1);
    game.start();
    let snapshot = game.advance(0.0);
    assert_eq!(snapshot.court_width, 400.0);
    assert_eq!(snapshot.ball.x, 200.0);
    assert_eq!(snapshot.right_paddle.x, 400.0 - 24.0 - 14.0);
    assert!(Config::for_court(50.0, 300.0).is_err());
}

proptest! {
    #[test]
    fn prop_paddles_stay_in_court(
        frames in prop::collection::vec((-1i8..=1, -1i8..=1, 0.0f32..0.2), 1..60)
    ) {
        let mut game = Game::default();
        game.start();
        let max_y = game.config().court_height - game.config().paddle_height;
        for (left, right, dt) in frames {
            game.set_intent(Side::Left, left);
            game.set_intent(Side::Right, right);
            let snapshot = game.advance(dt);
            for paddle in [&snapshot.left_paddle, &snapshot.right_paddle] {
                prop_assert!(paddle.y >= 0.0 && paddle.y <= max_y);
            }
        }
    }

    #[test]
    fn prop_ball_speed_capped_and_monotonic_within_rally(
        seed in any::<u64>(),
        frames in prop::collection::vec((-1i8..=1, 0.0f32..0.1), 1..200)
    ) {
        let mut game = Game::new(Config::default(), seed);
        game.start();
        let max = game.config().ball_speed_max;
        let mut last_speed = game.ball().unwrap().speed;
        for (dir, dt) in frames {
            // Both paddles chase the same way so rallies actually happen
            game.set_intent(Side::Left, dir);
            game.set_intent(Side::Right, dir);
            game.advance(dt);
            let speed = game.ball().unwrap().speed;
            prop_assert!(speed <= max + 1e-3);
            let point_scored = game.events().left_scored || game.events().right_scored;
            if !point_scored {
                prop_assert!(speed >= last_speed - 1e-3);
            }
            last_speed = speed;
        }
    }
}
