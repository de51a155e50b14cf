// Game session: the rules of a round
//
// Owns the game state and reacts to events from the host loop. The world it
// plays in is passed in on every call.

use super::difficulty::Difficulty;
use super::events::GameEvent;
use super::layout::{layout_scene, Layout};
use super::movement::{MovePlan, MoveTimings};
use super::spawn;
use super::state::{GameState, Phase};
use super::textures::GameTextures;
use crate::config::GameConfig;
use crate::constants::Z_ACTORS;
use crate::engine::physics::{presets, CollisionCategory, ContactKind};
use crate::engine::scene::{Action, NodeId, SpriteNode};
use crate::engine::timer::RepeatingTimer;
use crate::engine::world::{SceneContact, World};
use glam::Vec2;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

pub struct GameSession {
    config: GameConfig,
    difficulty: Difficulty,
    timings: MoveTimings,
    textures: GameTextures,
    state: GameState,
    layout: Layout,
    /// The falling asteroid, if one is in play
    asteroid: Option<NodeId>,
    countdown_timer: Option<RepeatingTimer>,
    rng: StdRng,
}

impl GameSession {
    /// Lay out the scene and prepare an idle session
    pub fn new(config: GameConfig, textures: GameTextures, world: &mut World) -> Self {
        Self::with_rng(config, textures, world, StdRng::from_entropy())
    }

    /// Like `new`, with a fixed spawn sequence
    #[cfg(test)]
    pub fn with_seed(config: GameConfig, textures: GameTextures, world: &mut World, seed: u64) -> Self {
        Self::with_rng(config, textures, world, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, textures: GameTextures, world: &mut World, rng: StdRng) -> Self {
        let layout = layout_scene(world, &textures, &config);
        let state = GameState::new(config.initial_gravity, config.countdown_start);

        world.set_gravity(state.gravity);
        let hud = world.hud_mut();
        hud.score.set_text(state.score_text());
        hud.countdown.set_text("");

        Self {
            difficulty: Difficulty::from_config(&config),
            timings: MoveTimings::from_config(&config),
            config,
            textures,
            state,
            layout,
            asteroid: None,
            countdown_timer: None,
            rng,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[cfg(test)]
    pub fn rocket(&self) -> NodeId {
        self.layout.rocket
    }

    #[cfg(test)]
    pub fn asteroid(&self) -> Option<NodeId> {
        self.asteroid
    }

    /// Dispatch one event
    pub fn handle(&mut self, event: GameEvent, world: &mut World) {
        match event {
            GameEvent::Start => self.start_game(world),
            GameEvent::Stop => self.stop_game(),
            GameEvent::CountdownTick => self.tick(world),
            GameEvent::Contact(contact) => self.on_contact(contact, world),
            GameEvent::MoveTo(target) => self.move_rocket(target, world),
        }
    }

    /// Advance the countdown timer by `dt` seconds
    pub fn update(&mut self, dt: f32, world: &mut World) {
        let fired = self
            .countdown_timer
            .as_mut()
            .map_or(0, |timer| timer.advance(dt));
        for _ in 0..fired {
            self.handle(GameEvent::CountdownTick, world);
        }
    }

    /// Start a round; does nothing while one is already running
    pub fn start_game(&mut self, world: &mut World) {
        if self.state.running {
            debug!("Start ignored, a round is already running");
            return;
        }

        // A round never begins with an asteroid already in play
        if let Some(leftover) = self.asteroid.take() {
            world.despawn(leftover);
        }

        self.state
            .restart(self.config.initial_gravity, self.config.countdown_start);
        world.set_gravity(self.state.gravity);
        self.refresh_score(world);

        let countdown = &mut world.hud_mut().countdown;
        countdown.set_text(self.state.countdown.to_string());
        countdown.hidden = false;

        self.countdown_timer = Some(RepeatingTimer::start(self.config.countdown_interval));
        info!("Game started, countdown from {}", self.state.countdown);
    }

    /// Stop the round, keeping the score and labels as they are
    pub fn stop_game(&mut self) {
        if !self.state.running {
            return;
        }
        self.state.running = false;
        if let Some(mut timer) = self.countdown_timer.take() {
            timer.invalidate();
        }
        info!("Game stopped with score {}", self.state.score);
    }

    fn tick(&mut self, world: &mut World) {
        if !matches!(self.state.phase(), Phase::Countdown(_)) {
            return;
        }

        self.state.countdown -= 1;
        world
            .hud_mut()
            .countdown
            .set_text(self.state.countdown.to_string());

        if self.state.countdown == 0 {
            if let Some(mut timer) = self.countdown_timer.take() {
                timer.invalidate();
            }
            let countdown = &mut world.hud_mut().countdown;
            countdown.set_text("");
            countdown.hidden = true;
            self.spawn_asteroid(world);
            info!("Go!");
        }
    }

    fn on_contact(&mut self, contact: SceneContact, world: &mut World) {
        match contact.kind {
            ContactKind::GroundAsteroid => {
                let hit = contact.node_in(CollisionCategory::Asteroid);
                if hit.is_none() || hit != self.asteroid {
                    trace!("Ground contact for an asteroid no longer in play");
                    return;
                }
                self.land_asteroid(world);
            }
            ContactKind::RocketAsteroid => {
                debug!("Rocket hit by an asteroid at score {}", self.state.score);
            }
            ContactKind::Unrecognized => {
                trace!("Ignoring contact {:?}", contact.bodies);
            }
        }
    }

    /// The asteroid reached the ground: replace it and score a point
    fn land_asteroid(&mut self, world: &mut World) {
        if let Some(asteroid) = self.asteroid.take() {
            world.despawn(asteroid);
        }

        if self.state.phase() != Phase::Active {
            debug!("Asteroid landed outside a round, not replaced");
            return;
        }

        self.spawn_asteroid(world);
        self.state.score += 1;
        self.refresh_score(world);

        if self.difficulty.apply(&mut self.state) {
            world.set_gravity(self.state.gravity);
            self.refresh_score(world);
            info!(
                "Level up: level {} gravity {:.1}",
                self.state.level, self.state.gravity
            );
        }
    }

    fn spawn_asteroid(&mut self, world: &mut World) {
        let size = self.config.asteroid_size;
        let position = spawn::asteroid_position(
            &mut self.rng,
            world.frame(),
            size,
            self.config.spawn_min_x,
        );

        let asteroid = world.spawn_body(
            SpriteNode::new(self.textures.asteroid, position, Vec2::splat(size), Z_ACTORS),
            presets::asteroid_body(position.x, position.y),
            presets::asteroid_collider(size),
        );
        world.run_action(
            asteroid,
            Action::repeat_forever(Action::rotate_by(-TAU, self.config.asteroid_revolution)),
        );
        self.asteroid = Some(asteroid);
        debug!("Asteroid spawned at x={}", position.x);
    }

    /// Steer the rocket towards a tapped point
    pub fn move_rocket(&mut self, target: Vec2, world: &mut World) {
        let rocket = self.layout.rocket;
        let Some(node) = world.node(rocket) else {
            return;
        };

        let plan = MovePlan::new(
            node.position(),
            target,
            node.size,
            world.frame(),
            self.config.bank_angle_degrees,
        );
        world.halt_body(rocket);
        world.replace_actions(rocket, plan.into_action(self.timings));
        debug!("Rocket moving to x={}", plan.target.x);
    }

    fn refresh_score(&self, world: &mut World) {
        world.hud_mut().score.set_text(self.state.score_text());
    }
}
