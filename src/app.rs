// Application: ties the session, world, input and clock together
//
// The host event loop forwards window events to `input_mut()` and calls
// `frame()` once per redraw.

use crate::config::GameConfig;
use crate::core::Rect;
use crate::engine::clock::FrameClock;
use crate::engine::input::{Action, InputManager};
use crate::engine::world::World;
use crate::game::{GameEvent, GameSession, GameTextures};
use glam::Vec2;
use log::info;
use std::collections::VecDeque;

pub struct App {
    world: World,
    session: GameSession,
    input: InputManager,
    clock: FrameClock,
    events: VecDeque<GameEvent>,
    caption: String,
    quit: bool,
}

impl App {
    /// Build the scene and start the first round
    pub fn new(config: GameConfig, textures: GameTextures, window_size: Vec2) -> Self {
        let scene_size = Vec2::new(config.screen_width, config.screen_height);
        let mut world = World::new(
            Rect::from_size(scene_size.x, scene_size.y),
            config.initial_gravity,
            config.points_per_meter,
        );
        let session = GameSession::new(config, textures, &mut world);

        let mut app = Self {
            world,
            session,
            input: InputManager::new(window_size, scene_size),
            clock: FrameClock::new(),
            events: VecDeque::new(),
            caption: String::new(),
            quit: false,
        };
        app.push(GameEvent::Start);
        app.dispatch();
        app.caption = app.world.hud().caption();
        app
    }

    pub fn input_mut(&mut self) -> &mut InputManager {
        &mut self.input
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Current text of the display surface
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Run the fixed updates owed since the last frame
    ///
    /// Returns the new caption when the labels changed.
    pub fn frame(&mut self) -> Option<&str> {
        self.handle_actions();

        let steps = self.clock.begin_frame();
        let dt = self.clock.fixed_timestep();
        for _ in 0..steps {
            self.fixed_update(dt);
        }

        self.refresh_caption()
    }

    /// One fixed step: input, countdown, physics, then the events they raised
    pub fn fixed_update(&mut self, dt: f32) {
        for point in self.input.drain_points() {
            self.push(GameEvent::MoveTo(point));
        }
        self.dispatch();

        self.session.update(dt, &mut self.world);

        for contact in self.world.step(dt) {
            self.push(GameEvent::Contact(contact));
        }
        self.dispatch();
    }

    fn handle_actions(&mut self) {
        for action in self.input.drain_actions() {
            match action {
                Action::Restart => {
                    info!("Restarting");
                    self.push(GameEvent::Stop);
                    self.push(GameEvent::Start);
                }
                Action::Pause => {
                    self.clock.toggle_pause();
                    // Taps made while frozen are not replayed on resume
                    self.input.reset();
                }
                Action::Quit => {
                    info!(
                        "Quit requested after {} frames, {} updates",
                        self.clock.frame_count(),
                        self.clock.update_count()
                    );
                    self.quit = true;
                }
            }
        }
        self.dispatch();
    }

    fn push(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    fn dispatch(&mut self) {
        while let Some(event) = self.events.pop_front() {
            self.session.handle(event, &mut self.world);
        }
    }

    fn refresh_caption(&mut self) -> Option<&str> {
        let mut caption = self.world.hud().caption();
        if self.clock.is_paused() {
            caption.push_str("  (paused)");
        }
        if caption == self.caption {
            return None;
        }
        self.caption = caption;
        Some(&self.caption)
    }
}
