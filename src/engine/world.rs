// The world the game plays in: physics bodies attached to scene sprites
//
// Each step runs node actions first, pushes animated transforms into their
// bodies, steps physics, then pulls body transforms back into the nodes.

use crate::core::Rect;
use crate::engine::physics::body::ColliderBuilder2D;
use crate::engine::physics::{CollisionCategory, ContactKind, PhysicsWorld, RigidBodyHandle};
use crate::engine::scene::{Action, Hud, NodeId, SceneGraph, SpriteNode};
use rapier2d::prelude::*;
use std::collections::HashMap;

/// A begin-contact between two scene nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneContact {
    pub kind: ContactKind,
    pub bodies: [(CollisionCategory, Option<NodeId>); 2],
}

impl SceneContact {
    /// The node on the side tagged with `category`
    pub fn node_in(&self, category: CollisionCategory) -> Option<NodeId> {
        self.bodies
            .iter()
            .find(|(c, _)| *c == category)
            .and_then(|(_, node)| *node)
    }
}

/// Physics, sprites and labels for one screen
pub struct World {
    frame: Rect,
    physics: PhysicsWorld,
    scene: SceneGraph,
    hud: Hud,
    bodies: HashMap<NodeId, RigidBodyHandle>,
}

impl World {
    /// Create a world showing `frame` with vertical gravity in m/s²
    pub fn new(frame: Rect, gravity_y: f32, points_per_meter: f32) -> Self {
        Self {
            frame,
            physics: PhysicsWorld::new(gravity_y, points_per_meter),
            scene: SceneGraph::new(),
            hud: Hud::default(),
            bodies: HashMap::new(),
        }
    }

    /// The visible frame
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Add a sprite without a physics body
    pub fn spawn_sprite(&mut self, node: SpriteNode) -> NodeId {
        self.scene.add(node)
    }

    /// Add a sprite with a physics body
    ///
    /// The collider is tagged with the node id so contacts can be traced back.
    pub fn spawn_body(
        &mut self,
        node: SpriteNode,
        body: RigidBody,
        collider: ColliderBuilder2D,
    ) -> NodeId {
        let id = self.scene.add(node);
        let collider = collider.user_data(id.as_u128()).build();
        let handle = self.physics.add_body(body, collider);
        self.bodies.insert(id, handle);
        id
    }

    /// Remove a sprite and its body; returns false when it was already gone
    pub fn despawn(&mut self, id: NodeId) -> bool {
        if let Some(handle) = self.bodies.remove(&id) {
            self.physics.remove_rigid_body(handle);
        }
        self.scene.remove(id).is_some()
    }

    #[cfg(test)]
    pub fn contains(&self, id: NodeId) -> bool {
        self.scene.contains(id)
    }

    pub fn node(&self, id: NodeId) -> Option<&SpriteNode> {
        self.scene.get(id)
    }

    #[cfg(test)]
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    /// Start an action on a node
    pub fn run_action(&mut self, id: NodeId, action: Action) {
        if let Some(node) = self.scene.get_mut(id) {
            node.run(action);
        }
    }

    /// Start an action on a node, replacing whatever it was doing
    pub fn replace_actions(&mut self, id: NodeId, action: Action) {
        if let Some(node) = self.scene.get_mut(id) {
            node.remove_all_actions();
            node.run(action);
        }
    }

    /// Zero a body's velocity and stop physics from rotating it
    pub fn halt_body(&mut self, id: NodeId) {
        let Some(&handle) = self.bodies.get(&id) else {
            return;
        };
        if let Some(body) = self.physics.get_rigid_body_mut(handle) {
            body.set_linvel(vector![0.0, 0.0], true);
            body.set_angvel(0.0, true);
            body.lock_rotations(true, true);
        }
    }

    /// Set vertical gravity in m/s²
    pub fn set_gravity(&mut self, gravity_y: f32) {
        self.physics.set_gravity_y(gravity_y);
    }

    /// Current vertical gravity in m/s²
    #[cfg(test)]
    pub fn gravity(&self) -> f32 {
        self.physics.gravity_y()
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn hud_mut(&mut self) -> &mut Hud {
        &mut self.hud
    }

    /// Advance actions and physics by `dt` seconds, returns the new contacts
    pub fn step(&mut self, dt: f32) -> Vec<SceneContact> {
        let animated: Vec<NodeId> = self
            .bodies
            .keys()
            .copied()
            .filter(|id| self.scene.get(*id).is_some_and(SpriteNode::has_actions))
            .collect();
        self.scene.update(dt);
        self.push_transforms(&animated);

        self.physics.set_timestep(dt);
        self.physics.step();

        self.pull_body_transforms();
        self.physics
            .contacts()
            .into_iter()
            .map(|contact| {
                let first = (
                    contact.first.category,
                    NodeId::from_u128(contact.first.user_data),
                );
                let second = (
                    contact.second.category,
                    NodeId::from_u128(contact.second.user_data),
                );
                SceneContact {
                    kind: ContactKind::classify(first.0, second.0),
                    bodies: [first, second],
                }
            })
            .collect()
    }

    /// Copy node transforms into bodies; covers actions that finished this step
    fn push_transforms(&mut self, ids: &[NodeId]) {
        for id in ids {
            let (Some(node), Some(handle)) = (self.scene.get(*id), self.bodies.get(id)) else {
                continue;
            };
            let position = node.position();
            let rotation = node.rotation();
            if let Some(body) = self.physics.get_rigid_body_mut(*handle) {
                body.set_position(Isometry::new(vector![position.x, position.y], rotation), true);
            }
        }
    }

    fn pull_body_transforms(&mut self) {
        for (id, handle) in &self.bodies {
            let (Some(body), Some(node)) =
                (self.physics.get_rigid_body(*handle), self.scene.get_mut(*id))
            else {
                continue;
            };
            node.transform.position.x = body.translation().x;
            node.transform.position.y = body.translation().y;
            node.transform.rotation = body.rotation().angle();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::{AssetHandle, AssetId, TextureHandle};
    use crate::engine::physics::presets;
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn texture() -> TextureHandle {
        AssetHandle::new(AssetId::from_index(1))
    }

    fn world() -> World {
        World::new(Rect::from_size(400.0, 800.0), -3.0, 150.0)
    }

    fn spawn_ground(world: &mut World) -> NodeId {
        world.spawn_body(
            SpriteNode::new(texture(), Vec2::new(200.0, 0.0), Vec2::new(1000.0, 10.0), 0.0),
            presets::ground_body(200.0, 0.0),
            presets::ground_collider(1000.0, 10.0),
        )
    }

    fn spawn_asteroid(world: &mut World, y: f32) -> NodeId {
        world.spawn_body(
            SpriteNode::new(texture(), Vec2::new(200.0, y), Vec2::splat(60.0), 2.0),
            presets::asteroid_body(200.0, y),
            presets::asteroid_collider(60.0),
        )
    }

    #[test]
    fn test_falling_node_follows_body() {
        let mut world = world();
        let asteroid = spawn_asteroid(&mut world, 500.0);

        for _ in 0..30 {
            world.step(1.0 / 60.0);
        }
        assert!(world.node(asteroid).unwrap().position().y < 500.0);
    }

    #[test]
    fn test_ground_contact_names_both_nodes() {
        let mut world = world();
        let ground = spawn_ground(&mut world);
        let asteroid = spawn_asteroid(&mut world, 60.0);

        let contact = (0..600)
            .find_map(|_| world.step(1.0 / 60.0).into_iter().next())
            .expect("no contact");

        assert_eq!(contact.kind, ContactKind::GroundAsteroid);
        assert_eq!(contact.node_in(CollisionCategory::Ground), Some(ground));
        assert_eq!(contact.node_in(CollisionCategory::Asteroid), Some(asteroid));
        assert_eq!(contact.node_in(CollisionCategory::Rocket), None);
    }

    #[test]
    fn test_actions_drive_bodies() {
        let mut world = world();
        let rocket = world.spawn_body(
            SpriteNode::new(texture(), Vec2::new(200.0, 100.0), Vec2::splat(100.0), 2.0),
            presets::rocket_body(200.0, 100.0),
            presets::rocket_collider(100.0),
        );
        world.halt_body(rocket);
        world.run_action(rocket, Action::move_to_x(300.0, 0.1));

        for _ in 0..12 {
            world.step(1.0 / 60.0);
        }
        let node = world.node(rocket).unwrap();
        assert!(!node.has_actions());
        assert_relative_eq!(node.position().x, 300.0, epsilon = 0.5);
        assert_relative_eq!(node.position().y, 100.0, epsilon = 0.5);
    }

    #[test]
    fn test_despawn_removes_body() {
        let mut world = world();
        let asteroid = spawn_asteroid(&mut world, 300.0);
        assert!(world.despawn(asteroid));
        assert!(!world.contains(asteroid));
        assert!(!world.despawn(asteroid));
        assert!(world.step(1.0 / 60.0).is_empty());
    }

    #[test]
    fn test_gravity_passthrough() {
        let mut world = world();
        world.set_gravity(-4.5);
        assert_relative_eq!(world.gravity(), -4.5);
    }
}
