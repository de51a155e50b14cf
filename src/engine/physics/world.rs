use rapier2d::prelude::*;

use super::collision::{CollisionCategory, CollisionEventQueue};

/// Handle to identify rigid bodies
pub type RigidBodyHandle = rapier2d::prelude::RigidBodyHandle;

/// Handle to identify colliders
pub type ColliderHandle = rapier2d::prelude::ColliderHandle;

/// One side of a begin-contact event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactBody {
    pub category: CollisionCategory,
    /// Collider user data (the scene node id)
    pub user_data: u128,
}

/// A begin-contact event between two colliders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub first: ContactBody,
    pub second: ContactBody,
}

/// Physics world that manages all physics simulation
///
/// Works in scene points; gravity is given in m/s² and scaled by
/// `points_per_meter`.
pub struct PhysicsWorld {
    /// Gravity vector in points/s²
    gravity: Vector<Real>,

    /// Scale between scene points and physics meters
    points_per_meter: Real,

    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,

    /// Collision event handler
    collision_event_queue: CollisionEventQueue,
}

impl PhysicsWorld {
    /// Create a physics world with vertical gravity in m/s²
    pub fn new(gravity_y: Real, points_per_meter: Real) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        // Fixed timestep of 1/60 seconds (60 FPS)
        integration_parameters.dt = 1.0 / 60.0;

        Self {
            gravity: vector![0.0, gravity_y * points_per_meter],
            points_per_meter,
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            collision_event_queue: CollisionEventQueue::new(),
        }
    }

    /// Step the physics simulation forward by one timestep
    pub fn step(&mut self) {
        // Clear previous frame's collision events
        self.collision_event_queue.clear();

        let event_handler = &self.collision_event_queue;

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            event_handler,
        );
    }

    /// Add a rigid body with a single attached collider
    pub fn add_body(&mut self, body: RigidBody, collider: Collider) -> RigidBodyHandle {
        let handle = self.rigid_body_set.insert(body);
        self.collider_set
            .insert_with_parent(collider, handle, &mut self.rigid_body_set);
        handle
    }

    /// Remove a rigid body and all its attached colliders
    pub fn remove_rigid_body(&mut self, handle: RigidBodyHandle) {
        self.rigid_body_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true, // remove attached colliders
        );
    }

    /// Get a reference to a rigid body
    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Get a mutable reference to a rigid body
    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }

    /// Number of live bodies
    #[cfg(test)]
    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    /// Begin-contact events from the last step, with both sides classified
    pub fn contacts(&self) -> Vec<Contact> {
        self.collision_event_queue
            .events()
            .into_iter()
            .filter_map(|event| {
                Some(Contact {
                    first: self.contact_body(event.collider1)?,
                    second: self.contact_body(event.collider2)?,
                })
            })
            .collect()
    }

    fn contact_body(&self, handle: ColliderHandle) -> Option<ContactBody> {
        let collider = self.collider_set.get(handle)?;
        let category =
            CollisionCategory::from_bits(collider.collision_groups().memberships.bits())?;
        Some(ContactBody {
            category,
            user_data: collider.user_data,
        })
    }

    /// Set vertical gravity in m/s²
    pub fn set_gravity_y(&mut self, gravity_y: Real) {
        self.gravity = vector![0.0, gravity_y * self.points_per_meter];
    }

    /// Current vertical gravity in m/s²
    #[cfg(test)]
    pub fn gravity_y(&self) -> Real {
        self.gravity.y / self.points_per_meter
    }

    /// Set the timestep for physics simulation
    pub fn set_timestep(&mut self, dt: Real) {
        self.integration_parameters.dt = dt;
    }
}

#[cfg(test)]
mod tests {
    use super::super::body::presets;
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gravity_scaling() {
        let mut world = PhysicsWorld::new(-3.0, 150.0);
        assert_relative_eq!(world.gravity_y(), -3.0);

        world.set_gravity_y(-3.5);
        assert_relative_eq!(world.gravity_y(), -3.5);
    }

    #[test]
    fn test_asteroid_falls_and_hits_ground() {
        let mut world = PhysicsWorld::new(-3.0, 150.0);
        world.add_body(
            presets::ground_body(0.0, 0.0),
            presets::ground_collider(1000.0, 10.0).user_data(1).build(),
        );
        let asteroid = world.add_body(
            presets::asteroid_body(0.0, 60.0),
            presets::asteroid_collider(60.0).user_data(2).build(),
        );

        let mut contact = None;
        for _ in 0..600 {
            world.step();
            if let Some(c) = world.contacts().first() {
                contact = Some(*c);
                break;
            }
        }

        let contact = contact.expect("asteroid never reached the ground");
        let mut ids = [contact.first.user_data, contact.second.user_data];
        ids.sort();
        assert_eq!(ids, [1, 2]);
        assert!(world.get_rigid_body(asteroid).is_some());
    }

    #[test]
    fn test_remove_body() {
        let mut world = PhysicsWorld::new(-3.0, 150.0);
        let handle = world.add_body(
            presets::asteroid_body(0.0, 0.0),
            presets::asteroid_collider(60.0).build(),
        );
        assert_eq!(world.body_count(), 1);

        world.remove_rigid_body(handle);
        assert_eq!(world.body_count(), 0);
        assert!(world.get_rigid_body(handle).is_none());
    }
}
