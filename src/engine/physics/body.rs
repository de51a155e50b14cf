use super::collision::{mask, CollisionCategory};
use rapier2d::prelude::*;

/// Builder for creating rigid bodies with common configurations
pub struct BodyBuilder {
    body_type: RigidBodyType,
    position: Isometry<Real>,
    gravity_scale: Real,
    can_sleep: bool,
    locked_axes: LockedAxes,
    linear_damping: Real,
    angular_damping: Real,
}

impl BodyBuilder {
    /// Create a new dynamic body (affected by forces and collisions)
    pub fn new_dynamic() -> Self {
        Self {
            body_type: RigidBodyType::Dynamic,
            position: Isometry::identity(),
            gravity_scale: 1.0,
            can_sleep: true,
            locked_axes: LockedAxes::empty(),
            linear_damping: 0.1,
            angular_damping: 0.1,
        }
    }

    /// Create a new fixed (static) body (completely immovable)
    pub fn new_fixed() -> Self {
        Self {
            body_type: RigidBodyType::Fixed,
            position: Isometry::identity(),
            gravity_scale: 0.0,
            can_sleep: false,
            locked_axes: LockedAxes::empty(),
            linear_damping: 0.0,
            angular_damping: 0.0,
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, x: Real, y: Real) -> Self {
        self.position = Isometry::translation(x, y);
        self
    }

    /// Set the gravity scale (1.0 = normal gravity, 0.0 = no gravity)
    pub fn gravity_scale(mut self, scale: Real) -> Self {
        self.gravity_scale = scale;
        self
    }

    /// Set whether the body can sleep when inactive
    pub fn can_sleep(mut self, can_sleep: bool) -> Self {
        self.can_sleep = can_sleep;
        self
    }

    /// Lock rotation so only animation can turn the body
    pub fn lock_rotation(mut self) -> Self {
        self.locked_axes = LockedAxes::ROTATION_LOCKED;
        self
    }

    /// Build the rigid body
    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .position(self.position)
            .gravity_scale(self.gravity_scale)
            .can_sleep(self.can_sleep)
            .locked_axes(self.locked_axes)
            .linear_damping(self.linear_damping)
            .angular_damping(self.angular_damping)
            .build()
    }
}

/// Builder for creating colliders tagged with a collision category
pub struct ColliderBuilder2D {
    shape: SharedShape,
    category: CollisionCategory,
    collides_with: u32,
    contact_mask: u32,
    user_data: u128,
}

impl ColliderBuilder2D {
    /// Create a box-shaped collider
    pub fn box_shape(half_width: Real, half_height: Real) -> Self {
        Self::with_shape(SharedShape::cuboid(half_width, half_height))
    }

    /// Create a circle-shaped collider
    pub fn circle(radius: Real) -> Self {
        Self::with_shape(SharedShape::ball(radius))
    }

    fn with_shape(shape: SharedShape) -> Self {
        Self {
            shape,
            category: CollisionCategory::None,
            collides_with: 0,
            contact_mask: 0,
            user_data: 0,
        }
    }

    /// Tag the collider with its category
    pub fn category(mut self, category: CollisionCategory) -> Self {
        self.category = category;
        self
    }

    /// Categories this collider physically interacts with
    pub fn collides_with(mut self, categories: &[CollisionCategory]) -> Self {
        self.collides_with = mask(categories);
        self
    }

    /// Categories whose contacts should be reported as events
    ///
    /// Contact reporting needs an interaction, so these are added to the
    /// collision filter too.
    pub fn contact_test(mut self, categories: &[CollisionCategory]) -> Self {
        self.contact_mask = mask(categories);
        self
    }

    /// Attach an identifier that comes back with contact events
    pub fn user_data(mut self, data: u128) -> Self {
        self.user_data = data;
        self
    }

    /// Build the collider
    pub fn build(self) -> Collider {
        let filter = self.collides_with | self.contact_mask;
        let active_events = if self.contact_mask != 0 {
            ActiveEvents::COLLISION_EVENTS
        } else {
            ActiveEvents::empty()
        };

        rapier2d::prelude::ColliderBuilder::new(self.shape)
            .collision_groups(self.category.to_interaction_groups(filter))
            .active_events(active_events)
            .user_data(self.user_data)
            .build()
    }
}

/// Body and collider configurations for the game's actors
pub mod presets {
    use super::*;

    /// Rocket body: dynamic, ignores gravity, never sleeps, turned only by actions
    pub fn rocket_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_dynamic()
            .position(x, y)
            .gravity_scale(0.0)
            .can_sleep(false)
            .lock_rotation()
            .build()
    }

    /// Rocket collider: rests on the ground, reports contacts with asteroids
    pub fn rocket_collider(size: Real) -> ColliderBuilder2D {
        ColliderBuilder2D::circle(size * 0.4)
            .category(CollisionCategory::Rocket)
            .collides_with(&[CollisionCategory::Asteroid, CollisionCategory::Ground])
            .contact_test(&[CollisionCategory::Asteroid])
    }

    /// Asteroid body: dynamic and pulled down by gravity
    pub fn asteroid_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_dynamic()
            .position(x, y)
            .can_sleep(false)
            .build()
    }

    /// Asteroid collider
    pub fn asteroid_collider(size: Real) -> ColliderBuilder2D {
        ColliderBuilder2D::circle(size * 0.5)
            .category(CollisionCategory::Asteroid)
            .collides_with(&[CollisionCategory::Rocket, CollisionCategory::Ground])
    }

    /// Ground body (fixed)
    pub fn ground_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_fixed().position(x, y).build()
    }

    /// Ground collider: stops the rocket, reports contacts with asteroids
    pub fn ground_collider(width: Real, height: Real) -> ColliderBuilder2D {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .category(CollisionCategory::Ground)
            .collides_with(&[CollisionCategory::Rocket])
            .contact_test(&[CollisionCategory::Asteroid])
    }
}
