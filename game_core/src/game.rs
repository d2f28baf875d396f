//! The game controller: owns the world and runs it one host frame at a time

use hecs::{Entity, World};

use crate::{
    create_ball, create_paddle, status, step, Ball, Config, Events, GameRng, InputState,
    KeyBindings, Notice, Notices, Paddle, PaddleIntent, Phase, PhaseAction, Score, Side, Time,
    WorldSnapshot,
};

/// A complete two-player Pong match
pub struct Game {
    world: World,
    time: Time,
    config: Config,
    bindings: KeyBindings,
    phase: Phase,
    score: Score,
    events: Events,
    notices: Notices,
    rng: GameRng,
    status: String,
    left_paddle: Entity,
    right_paddle: Entity,
    ball: Entity,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let left_paddle = create_paddle(&mut world, &config, Side::Left);
        let right_paddle = create_paddle(&mut world, &config, Side::Right);

        let mut serve = Ball::new(config.court_center(), glam::Vec2::ZERO);
        serve.reset(&config, true, &mut rng);
        let ball = create_ball(&mut world, serve.pos, serve.vel);

        let mut notices = Notices::new();
        notices.status(status::PRESS_START);

        Self {
            world,
            time: Time::default(),
            config,
            bindings: KeyBindings::default(),
            phase: Phase::Idle,
            score: Score::new(),
            events: Events::new(),
            notices,
            rng,
            status: status::PRESS_START.to_owned(),
            left_paddle,
            right_paddle,
            ball,
        }
    }

    /// Begin a new game from Idle or after a win.
    ///
    /// Returns false (and changes nothing) while a game is already running.
    pub fn start(&mut self) -> bool {
        let result = self.phase.transition(PhaseAction::Start);
        if !result.success {
            log::debug!("start ignored in phase {}", result.from);
            return false;
        }

        if matches!(result.from, Phase::Stopped { .. }) {
            self.score.reset();
            self.notices.score(&self.score);
        }

        let rest_y = self.config.paddle_rest_y();
        for (_entity, (paddle, intent)) in self
            .world
            .query_mut::<(&mut Paddle, &mut PaddleIntent)>()
        {
            paddle.y = rest_y;
            *intent = PaddleIntent::new();
        }
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.reset(&self.config, false, &mut self.rng);
        }

        self.set_status(status::SERVE_INCOMING);
        log::info!("game started from {}", result.from);
        true
    }

    /// Set a paddle's movement direction; any value is reduced to its sign
    pub fn set_intent(&mut self, side: Side, dir: i8) {
        let entity = match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        };
        if let Ok(mut intent) = self.world.get::<&mut PaddleIntent>(entity) {
            *intent = PaddleIntent::from_dir(dir);
        }
    }

    /// Derive both paddle intents from the held keys
    pub fn apply_input(&mut self, input: &InputState) {
        let (left, right) = input.intents(&self.bindings);
        crate::systems::apply_intents(&mut self.world, left, right);
    }

    /// Advance the simulation by a host frame of `dt` seconds
    pub fn advance(&mut self, dt: f32) -> WorldSnapshot {
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

        if let Some(latest) = self.notices.latest_status() {
            if latest != self.status {
                self.status = latest.to_owned();
            }
        }

        self.snapshot()
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::capture(
            &self.world,
            &self.config,
            self.score,
            self.phase,
            &self.status,
            &self.events,
        )
    }

    /// Take every notice raised since the previous drain, oldest first.
    /// Call once per frame; undrained notices are capped at `Notices::CAPACITY`.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    fn set_status(&mut self, message: &str) {
        self.status = message.to_owned();
        self.notices.status(message);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Events raised during the last `advance`
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        };
        self.world.get::<&Paddle>(entity).ok().map(|paddle| *paddle)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default(), 12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn serve_through(game: &mut Game) {
        // 1.2s serve delay at 0.1s frames, with headroom
        for _ in 0..14 {
            game.advance(0.1);
            if game.phase() == Phase::Rallying {
                return;
            }
        }
        panic!("serve never ended");
    }

    fn place_ball(game: &mut Game, pos: Vec2, vel: Vec2) {
        let entity = game.ball;
        let mut ball = game.world_mut().get::<&mut Ball>(entity).unwrap();
        ball.pos = pos;
        ball.vel = vel;
        ball.speed = vel.length();
    }

    #[test]
    fn test_new_game_is_idle() {
        let mut game = Game::default();
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.score(), Score::new());
        assert_eq!(game.status(), status::PRESS_START);
        assert_eq!(
            game.drain_notices(),
            vec![Notice::StatusChanged(status::PRESS_START.to_owned())]
        );

        let config = game.config().clone();
        let ball = game.ball().unwrap();
        assert_eq!(ball.pos, config.court_center());
        assert_eq!(ball.speed, config.ball_speed_initial);
        assert_eq!(game.paddle(Side::Left).unwrap().y, config.paddle_rest_y());
    }

    #[test]
    fn test_idle_ignores_frames_and_intents() {
        let mut game = Game::default();
        game.set_intent(Side::Left, 1);
        let before = game.snapshot();
        let after = game.advance(0.1);
        assert_eq!(before.left_paddle.y, after.left_paddle.y);
        assert_eq!(before.ball, after.ball);
    }

    #[test]
    fn test_start_serves_right() {
        let mut game = Game::default();
        game.drain_notices();

        assert!(game.start());
        assert_eq!(game.phase(), Phase::Serving { timer: 0.0 });
        assert_eq!(game.status(), status::SERVE_INCOMING);
        assert!(game.ball().unwrap().vel.x > 0.0, "Opening serve heads right");
        assert_eq!(
            game.drain_notices(),
            vec![Notice::StatusChanged(status::SERVE_INCOMING.to_owned())]
        );
    }

    #[test]
    fn test_start_ignored_while_running() {
        let mut game = Game::default();
        assert!(game.start());
        game.advance(0.5);
        assert!(!game.start());
        assert!(matches!(game.phase(), Phase::Serving { timer } if timer > 0.0));
    }

    #[test]
    fn test_ball_parked_while_serving() {
        let mut game = Game::default();
        game.start();
        game.set_intent(Side::Right, -1);
        let snapshot = game.advance(0.5);
        let config = game.config().clone();
        assert_eq!(snapshot.ball.x, config.court_width / 2.0);
        assert!(
            snapshot.right_paddle.y < config.paddle_rest_y(),
            "Paddles move during the serve delay"
        );
    }

    #[test]
    fn test_serve_clears_status() {
        let mut game = Game::default();
        game.start();
        serve_through(&mut game);
        assert_eq!(game.status(), "");
        assert!(game
            .drain_notices()
            .contains(&Notice::StatusChanged(String::new())));
    }

    #[test]
    fn test_set_intent_normalizes() {
        let mut game = Game::default();
        game.start();
        game.set_intent(Side::Left, 5);
        let snapshot = game.advance(0.1);
        let expected = game.config().paddle_rest_y() + game.config().paddle_speed * 0.1;
        assert!((snapshot.left_paddle.y - expected).abs() < 1e-3);
        assert_eq!(snapshot.left_paddle.dir, 1);
    }

    #[test]
    fn test_apply_input_from_keys() {
        let mut game = Game::default();
        let mut input = InputState::new();
        input.press("ArrowDown");
        input.press("w");
        game.apply_input(&input);
        let snapshot = game.snapshot();
        assert_eq!(snapshot.left_paddle.dir, -1);
        assert_eq!(snapshot.right_paddle.dir, 1);
    }

    #[test]
    fn test_snapshot_reports_paddle_hit() {
        let mut game = Game::default();
        game.start();
        serve_through(&mut game);

        let config = game.config().clone();
        let face = config.paddle_x(Side::Right) - config.ball_radius + 1.0;
        place_ball(
            &mut game,
            Vec2::new(face, config.court_height / 2.0),
            Vec2::new(320.0, 0.0),
        );
        let snapshot = game.advance(0.001);

        assert!(snapshot.events.ball_hit_paddle);
        assert!(!snapshot.events.ball_hit_wall);
        assert!(snapshot.ball.vx < 0.0);

        let quiet = game.advance(0.001);
        assert!(!quiet.events.ball_hit_paddle, "Events only cover one frame");
    }

    #[test]
    fn test_point_announced() {
        let mut game = Game::default();
        game.start();
        serve_through(&mut game);
        game.drain_notices();

        let config = game.config().clone();
        place_ball(
            &mut game,
            Vec2::new(-config.ball_radius - 1.0, 200.0),
            Vec2::new(-320.0, 0.0),
        );
        game.advance(0.0001);

        assert_eq!(game.score(), Score { left: 0, right: 1 });
        assert_eq!(game.phase(), Phase::Serving { timer: 0.0 });
        assert_eq!(game.status(), "Point for Right Player!");
        assert_eq!(
            game.drain_notices(),
            vec![
                Notice::ScoreChanged { left: 0, right: 1 },
                Notice::StatusChanged("Point for Right Player!".to_owned()),
            ]
        );
    }

    #[test]
    fn test_win_freezes_and_restart_resets() {
        let mut game = Game::default();
        game.start();
        serve_through(&mut game);
        game.score = Score { left: 10, right: 3 };

        let config = game.config().clone();
        place_ball(
            &mut game,
            Vec2::new(config.court_width + config.ball_radius + 1.0, 250.0),
            Vec2::new(320.0, 0.0),
        );
        game.advance(0.0001);

        assert_eq!(game.score(), Score { left: 11, right: 3 });
        assert_eq!(game.phase(), Phase::Stopped { winner: Side::Left });
        assert_eq!(
            game.status(),
            "Left Player wins! Press Start or Space to play again."
        );

        // Frozen: paddles and ball ignore further frames
        game.set_intent(Side::Left, 1);
        let frozen = game.snapshot();
        let later = game.advance(0.1);
        assert_eq!(frozen.ball, later.ball);
        assert_eq!(frozen.left_paddle.y, later.left_paddle.y);
        game.drain_notices();

        assert!(game.start());
        assert_eq!(game.score(), Score::new());
        assert_eq!(game.phase(), Phase::Serving { timer: 0.0 });
        assert_eq!(game.paddle(Side::Left).unwrap().y, config.paddle_rest_y());
        assert_eq!(game.ball().unwrap().pos, config.court_center());
        assert_eq!(
            game.drain_notices(),
            vec![
                Notice::ScoreChanged { left: 0, right: 0 },
                Notice::StatusChanged(status::SERVE_INCOMING.to_owned()),
            ]
        );
    }
}
