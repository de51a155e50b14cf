// Sprite nodes and the scene graph that owns them

use super::action::{Action, Progress, RunningAction, Transform};
use crate::engine::assets::TextureHandle;
use glam::Vec2;
use std::collections::BTreeMap;

/// Identifier of a node in the scene graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Raw value, stored as collider user data
    pub fn as_u128(self) -> u128 {
        self.0 as u128
    }

    /// Recover a node id from collider user data
    pub fn from_u128(raw: u128) -> Option<Self> {
        u64::try_from(raw).ok().map(Self)
    }
}

/// A sprite placed in the scene
#[derive(Debug, Clone)]
pub struct SpriteNode {
    /// Texture handle (None = plain white rectangle)
    #[allow(dead_code)]
    pub texture: Option<TextureHandle>,
    pub transform: Transform,
    /// Size in scene points (width, height)
    pub size: Vec2,
    /// Z-order for layering (higher = drawn on top)
    #[allow(dead_code)]
    pub z_order: f32,
    actions: Vec<RunningAction>,
}

impl SpriteNode {
    /// Create a textured sprite
    pub fn new(texture: TextureHandle, position: Vec2, size: Vec2, z_order: f32) -> Self {
        Self {
            texture: Some(texture),
            ..Self::solid(position, size, z_order)
        }
    }

    /// Create an untextured sprite
    pub fn solid(position: Vec2, size: Vec2, z_order: f32) -> Self {
        Self {
            texture: None,
            transform: Transform {
                position,
                rotation: 0.0,
            },
            size,
            z_order,
            actions: Vec::new(),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    pub fn rotation(&self) -> f32 {
        self.transform.rotation
    }

    /// Whether any action is still playing on this node
    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }

    /// Start an action alongside whatever is already running
    pub fn run(&mut self, action: Action) {
        self.actions.push(action.start());
    }

    /// Stop all running actions, leaving the transform where it is
    pub fn remove_all_actions(&mut self) {
        self.actions.clear();
    }

    fn update_actions(&mut self, dt: f32) {
        let transform = &mut self.transform;
        self.actions
            .retain_mut(|action| action.update(transform, dt) == Progress::Running);
    }
}

/// Owns every sprite in the scene
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: BTreeMap<NodeId, SpriteNode>,
    next_id: u64,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sprite and return its id
    pub fn add(&mut self, node: SpriteNode) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    /// Remove a sprite from the scene
    pub fn remove(&mut self, id: NodeId) -> Option<SpriteNode> {
        self.nodes.remove(&id)
    }

    pub fn get(&self, id: NodeId) -> Option<&SpriteNode> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SpriteNode> {
        self.nodes.get_mut(&id)
    }

    #[cfg(test)]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of sprites in the scene
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Count sprites drawn with a given texture
    #[cfg(test)]
    pub fn count_with_texture(&self, texture: TextureHandle) -> usize {
        self.nodes
            .values()
            .filter(|n| n.texture == Some(texture))
            .count()
    }

    /// Advance every node's actions
    pub fn update(&mut self, dt: f32) {
        for node in self.nodes.values_mut() {
            node.update_actions(dt);
        }
    }
}
