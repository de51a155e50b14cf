// Timed transform actions for scene nodes
//
// An `Action` describes what should happen; `RunningAction` holds the
// playback state while it is attached to a node.

use crate::core::math::lerp;
use glam::Vec2;

/// Position and rotation of a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    /// Rotation in radians, counter-clockwise
    pub rotation: f32,
}

/// Description of an animated change to a node's transform
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Move to an absolute position; `None` leaves that axis alone
    MoveTo {
        x: Option<f32>,
        y: Option<f32>,
        duration: f32,
    },
    /// Rotate to an absolute angle (radians)
    RotateTo { angle: f32, duration: f32 },
    /// Rotate by a relative angle (radians)
    RotateBy { angle: f32, duration: f32 },
    /// Run actions one after another
    Sequence(Vec<Action>),
    /// Run actions at the same time; finishes with the longest one
    Group(Vec<Action>),
    /// Restart the inner action every time it finishes
    RepeatForever(Box<Action>),
}

impl Action {
    pub fn move_to_x(x: f32, duration: f32) -> Self {
        Self::MoveTo {
            x: Some(x),
            y: None,
            duration,
        }
    }

    pub fn move_to_y(y: f32, duration: f32) -> Self {
        Self::MoveTo {
            x: None,
            y: Some(y),
            duration,
        }
    }

    pub fn rotate_to(angle: f32, duration: f32) -> Self {
        Self::RotateTo { angle, duration }
    }

    pub fn rotate_by(angle: f32, duration: f32) -> Self {
        Self::RotateBy { angle, duration }
    }

    pub fn sequence(actions: Vec<Action>) -> Self {
        Self::Sequence(actions)
    }

    pub fn group(actions: Vec<Action>) -> Self {
        Self::Group(actions)
    }

    pub fn repeat_forever(action: Action) -> Self {
        Self::RepeatForever(Box::new(action))
    }

    /// Total playback time, `None` for actions that never end
    pub fn duration(&self) -> Option<f32> {
        match self {
            Self::MoveTo { duration, .. }
            | Self::RotateTo { duration, .. }
            | Self::RotateBy { duration, .. } => Some(*duration),
            Self::Sequence(actions) => actions.iter().map(Action::duration).sum(),
            Self::Group(actions) => actions
                .iter()
                .map(Action::duration)
                .try_fold(0.0f32, |longest, d| d.map(|d| longest.max(d))),
            Self::RepeatForever(_) => None,
        }
    }

    /// Start playback
    pub fn start(self) -> RunningAction {
        RunningAction::new(self)
    }
}

/// Result of advancing an action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress {
    Running,
    /// Finished, with the part of `dt` that was not consumed
    Finished { leftover: f32 },
}

/// Playback state of an action attached to a node
#[derive(Debug, Clone)]
pub enum RunningAction {
    Tween {
        action: Action,
        elapsed: f32,
        /// Transform captured on the first update
        from: Option<Transform>,
    },
    Sequence {
        pending: std::vec::IntoIter<Action>,
        current: Option<Box<RunningAction>>,
    },
    Group {
        children: Vec<RunningAction>,
    },
    Repeat {
        template: Action,
        current: Box<RunningAction>,
    },
}

impl RunningAction {
    fn new(action: Action) -> Self {
        match action {
            Action::Sequence(actions) => {
                let mut pending = actions.into_iter();
                let current = pending.next().map(|a| Box::new(Self::new(a)));
                Self::Sequence { pending, current }
            }
            Action::Group(actions) => Self::Group {
                children: actions.into_iter().map(Self::new).collect(),
            },
            Action::RepeatForever(inner) => Self::Repeat {
                current: Box::new(Self::new((*inner).clone())),
                template: *inner,
            },
            tween => Self::Tween {
                action: tween,
                elapsed: 0.0,
                from: None,
            },
        }
    }

    /// Advance playback by `dt` seconds, writing into `transform`
    pub fn update(&mut self, transform: &mut Transform, dt: f32) -> Progress {
        match self {
            Self::Tween {
                action,
                elapsed,
                from,
            } => {
                let start = *from.get_or_insert(*transform);
                *elapsed += dt;
                let duration = action.duration().unwrap_or(0.0);
                let t = if duration > 0.0 {
                    (*elapsed / duration).min(1.0)
                } else {
                    1.0
                };
                apply_tween(action, start, transform, t);

                if *elapsed >= duration {
                    Progress::Finished {
                        leftover: *elapsed - duration,
                    }
                } else {
                    Progress::Running
                }
            }
            Self::Sequence { pending, current } => {
                let mut remaining = dt;
                loop {
                    let Some(step) = current.as_mut() else {
                        return Progress::Finished {
                            leftover: remaining,
                        };
                    };
                    match step.update(transform, remaining) {
                        Progress::Running => return Progress::Running,
                        Progress::Finished { leftover } => {
                            remaining = leftover;
                            *current = pending.next().map(|a| Box::new(Self::new(a)));
                        }
                    }
                }
            }
            Self::Group { children } => {
                let mut min_leftover = dt;
                children.retain_mut(|child| match child.update(transform, dt) {
                    Progress::Running => {
                        min_leftover = 0.0;
                        true
                    }
                    Progress::Finished { leftover } => {
                        min_leftover = min_leftover.min(leftover);
                        false
                    }
                });
                if children.is_empty() {
                    Progress::Finished {
                        leftover: min_leftover,
                    }
                } else {
                    Progress::Running
                }
            }
            Self::Repeat { template, current } => {
                let mut remaining = dt;
                while let Progress::Finished { leftover } = current.update(transform, remaining) {
                    **current = Self::new(template.clone());
                    // A zero-length cycle would spin here forever
                    if leftover <= 0.0 || leftover >= remaining {
                        break;
                    }
                    remaining = leftover;
                }
                Progress::Running
            }
        }
    }
}

fn apply_tween(action: &Action, start: Transform, transform: &mut Transform, t: f32) {
    match *action {
        Action::MoveTo { x, y, .. } => {
            if let Some(x) = x {
                transform.position.x = lerp(start.position.x, x, t);
            }
            if let Some(y) = y {
                transform.position.y = lerp(start.position.y, y, t);
            }
        }
        Action::RotateTo { angle, .. } => {
            transform.rotation = lerp(start.rotation, angle, t);
        }
        Action::RotateBy { angle, .. } => {
            transform.rotation = start.rotation + angle * t;
        }
        Action::Sequence(_) | Action::Group(_) | Action::RepeatForever(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_4, TAU};

    fn origin() -> Transform {
        Transform {
            position: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    /// Step an action in fixed increments until it finishes or `max_time` passes
    fn run(running: &mut RunningAction, transform: &mut Transform, dt: f32, max_time: f32) -> f32 {
        let mut time = 0.0;
        while time < max_time {
            time += dt;
            if let Progress::Finished { .. } = running.update(transform, dt) {
                break;
            }
        }
        time
    }

    #[test]
    fn test_move_lands_on_target() {
        let mut transform = origin();
        let mut running = Action::MoveTo {
            x: Some(100.0),
            y: Some(50.0),
            duration: 0.4,
        }
        .start();

        let progress = running.update(&mut transform, 0.2);
        assert_eq!(progress, Progress::Running);
        assert_relative_eq!(transform.position.x, 50.0, epsilon = 1e-4);

        let progress = running.update(&mut transform, 0.3);
        assert!(matches!(progress, Progress::Finished { leftover } if (leftover - 0.1).abs() < 1e-4));
        assert_eq!(transform.position, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_single_axis_move_leaves_other_axis() {
        let mut transform = Transform {
            position: Vec2::new(10.0, 20.0),
            rotation: 0.0,
        };
        let mut running = Action::move_to_x(30.0, 0.1).start();
        running.update(&mut transform, 0.5);
        assert_eq!(transform.position, Vec2::new(30.0, 20.0));
    }

    #[test]
    fn test_sequence_runs_in_order() {
        let mut transform = origin();
        let mut running = Action::sequence(vec![
            Action::rotate_to(-FRAC_PI_4, 0.2),
            Action::move_to_x(100.0, 0.4),
            Action::rotate_to(0.0, 0.5),
        ])
        .start();

        running.update(&mut transform, 0.2);
        assert_relative_eq!(transform.rotation, -FRAC_PI_4, epsilon = 1e-5);
        assert_eq!(transform.position.x, 0.0);

        running.update(&mut transform, 0.4);
        assert_relative_eq!(transform.position.x, 100.0, epsilon = 1e-3);
        assert_relative_eq!(transform.rotation, -FRAC_PI_4, epsilon = 1e-5);

        let progress = running.update(&mut transform, 0.6);
        assert!(matches!(progress, Progress::Finished { .. }));
        assert_relative_eq!(transform.rotation, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_sequence_carries_leftover_time() {
        let mut transform = origin();
        let mut running = Action::sequence(vec![
            Action::move_to_x(10.0, 0.1),
            Action::move_to_y(10.0, 0.2),
        ])
        .start();

        // One big step covers the first tween and half of the second
        running.update(&mut transform, 0.2);
        assert_eq!(transform.position.x, 10.0);
        assert_relative_eq!(transform.position.y, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_group_runs_in_parallel() {
        let mut transform = origin();
        let mut running = Action::group(vec![
            Action::move_to_x(40.0, 0.4),
            Action::move_to_y(80.0, 0.4),
        ])
        .start();

        running.update(&mut transform, 0.2);
        assert_relative_eq!(transform.position.x, 20.0, epsilon = 1e-4);
        assert_relative_eq!(transform.position.y, 40.0, epsilon = 1e-4);

        let time = 0.2 + run(&mut running, &mut transform, 0.05, 1.0);
        assert_relative_eq!(time, 0.4, epsilon = 0.06);
        assert_eq!(transform.position, Vec2::new(40.0, 80.0));
    }

    #[test]
    fn test_repeat_forever_never_finishes() {
        let mut transform = origin();
        let mut running = Action::repeat_forever(Action::rotate_by(-TAU, 20.0)).start();

        for _ in 0..(60 * 45) {
            assert_eq!(running.update(&mut transform, 1.0 / 60.0), Progress::Running);
        }
        // Two and a quarter revolutions
        assert_relative_eq!(transform.rotation, -TAU * 2.25, epsilon = 1e-2);
    }

    #[test]
    fn test_repeat_of_instant_action_terminates() {
        let mut transform = origin();
        let mut running = Action::repeat_forever(Action::rotate_by(1.0, 0.0)).start();
        assert_eq!(running.update(&mut transform, 0.1), Progress::Running);
    }

    #[test]
    fn test_durations() {
        let action = Action::sequence(vec![
            Action::rotate_to(1.0, 0.2),
            Action::group(vec![Action::move_to_x(1.0, 0.4), Action::move_to_y(1.0, 0.3)]),
            Action::rotate_to(0.0, 0.5),
        ]);
        assert_relative_eq!(action.duration().unwrap(), 1.1, epsilon = 1e-6);
        assert_eq!(Action::repeat_forever(Action::rotate_by(1.0, 1.0)).duration(), None);
    }
}
