// Initial scene layout: backdrop planets, the ground strip and the rocket

use super::textures::GameTextures;
use crate::config::GameConfig;
use crate::constants::*;
use crate::engine::physics::presets;
use crate::engine::scene::{Action, NodeId, SpriteNode};
use crate::engine::world::World;
use glam::Vec2;
use std::f32::consts::TAU;

/// Nodes that live for the whole game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub rocket: NodeId,
    pub ground: NodeId,
    pub mars: NodeId,
    pub earth: NodeId,
}

/// Populate an empty world
pub fn layout_scene(world: &mut World, textures: &GameTextures, config: &GameConfig) -> Layout {
    let frame = world.frame();

    let mars = world.spawn_sprite(SpriteNode::new(
        textures.mars,
        Vec2::new(frame.mid_x() + 60.0, frame.max_y() - MARS_SIZE),
        Vec2::splat(MARS_SIZE),
        Z_BACKDROP,
    ));
    world.run_action(
        mars,
        Action::repeat_forever(Action::rotate_by(-TAU, MARS_REVOLUTION_SECS)),
    );

    let earth = world.spawn_sprite(SpriteNode::new(
        textures.earth,
        Vec2::new(frame.mid_x() - 60.0, frame.mid_y() + EARTH_SIZE),
        Vec2::splat(EARTH_SIZE),
        Z_BACKDROP,
    ));
    world.run_action(
        earth,
        Action::repeat_forever(Action::rotate_by(TAU, EARTH_REVOLUTION_SECS)),
    );

    let ground_position = Vec2::new(frame.mid_x(), frame.min_y());
    let ground = world.spawn_body(
        SpriteNode::solid(
            ground_position,
            Vec2::new(GROUND_WIDTH, GROUND_HEIGHT),
            Z_ACTORS,
        ),
        presets::ground_body(ground_position.x, ground_position.y),
        presets::ground_collider(GROUND_WIDTH, GROUND_HEIGHT),
    );

    let rocket_position = Vec2::new(frame.mid_x(), frame.min_y() + config.rocket_size);
    let rocket = world.spawn_body(
        SpriteNode::new(
            textures.rocket,
            rocket_position,
            Vec2::splat(config.rocket_size),
            Z_ACTORS,
        ),
        presets::rocket_body(rocket_position.x, rocket_position.y),
        presets::rocket_collider(config.rocket_size),
    );

    Layout {
        rocket,
        ground,
        mars,
        earth,
    }
}
