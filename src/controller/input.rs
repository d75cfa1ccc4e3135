//! Platform-agnostic input boundary for the locomotion pipeline.

use glam::Vec2;

/// Platform-independent input events. The embedding shell translates
/// whatever raw events it receives into these channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Current 2D move axis: x strafes right, y walks forward. Components
    /// are clamped to [-1, 1] on receipt.
    Move(Vec2),
    /// Look delta since the last event, unbounded.
    Look(Vec2),
    /// Jump button level. The collector derives the press edge itself, so
    /// key-repeat events are harmless.
    Jump { pressed: bool },
    Crouch { held: bool },
    Slide { held: bool },
    /// Window focus loss. Drops all held state so no key sticks while
    /// release events cannot be observed.
    FocusLost,
}

/// One tick's worth of input, handed immutably into the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub move_axis: Vec2,
    /// Accumulated look delta since the previous snapshot.
    pub look_delta: Vec2,
    /// A jump press edge was observed since the previous snapshot.
    pub jump_pressed: bool,
    /// Jump button level at snapshot time; sustains a jump while ascending.
    pub jump_held: bool,
    pub crouch_held: bool,
    pub slide_held: bool,
}

/// Accumulates input events between ticks and produces one snapshot per
/// tick. Edge-triggered values (look delta, jump press) are consumed by
/// [`take_snapshot`](Self::take_snapshot); held levels persist.
#[derive(Debug, Default)]
pub struct InputCollector {
    move_axis: Vec2,
    look_delta: Vec2,
    jump_pressed: bool,
    jump_held: bool,
    crouch_held: bool,
    slide_held: bool,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Move(axis) => {
                self.move_axis = axis.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
            }
            InputEvent::Look(delta) => {
                self.look_delta += delta;
            }
            InputEvent::Jump { pressed } => {
                if pressed && !self.jump_held {
                    self.jump_pressed = true;
                }
                self.jump_held = pressed;
            }
            InputEvent::Crouch { held } => {
                self.crouch_held = held;
            }
            InputEvent::Slide { held } => {
                self.slide_held = held;
            }
            InputEvent::FocusLost => {
                self.clear();
            }
        }
    }

    /// Produces the snapshot for the upcoming tick, consuming the
    /// accumulated look delta and any pending jump edge.
    pub fn take_snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            move_axis: self.move_axis,
            look_delta: self.look_delta,
            jump_pressed: self.jump_pressed,
            jump_held: self.jump_held,
            crouch_held: self.crouch_held,
            slide_held: self.slide_held,
        };
        self.look_delta = Vec2::ZERO;
        self.jump_pressed = false;
        snapshot
    }

    /// Drops everything, including held levels.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_edge_fires_once_per_press() {
        let mut collector = InputCollector::new();
        collector.process_event(InputEvent::Jump { pressed: true });
        // Key repeat delivers the held level again.
        collector.process_event(InputEvent::Jump { pressed: true });

        let first = collector.take_snapshot();
        assert!(first.jump_pressed);
        assert!(first.jump_held);

        let second = collector.take_snapshot();
        assert!(!second.jump_pressed, "edge must be consumed");
        assert!(second.jump_held, "level persists while held");

        collector.process_event(InputEvent::Jump { pressed: false });
        collector.process_event(InputEvent::Jump { pressed: true });
        let third = collector.take_snapshot();
        assert!(third.jump_pressed, "release then press is a new edge");
    }

    #[test]
    fn look_delta_accumulates_and_is_consumed() {
        let mut collector = InputCollector::new();
        collector.process_event(InputEvent::Look(Vec2::new(1.0, 2.0)));
        collector.process_event(InputEvent::Look(Vec2::new(0.5, -1.0)));

        let snapshot = collector.take_snapshot();
        assert_eq!(snapshot.look_delta, Vec2::new(1.5, 1.0));
        assert_eq!(collector.take_snapshot().look_delta, Vec2::ZERO);
    }

    #[test]
    fn move_axis_is_clamped_and_persists() {
        let mut collector = InputCollector::new();
        collector.process_event(InputEvent::Move(Vec2::new(3.0, -0.5)));

        let snapshot = collector.take_snapshot();
        assert_eq!(snapshot.move_axis, Vec2::new(1.0, -0.5));
        // Levels persist across snapshots until a new event arrives.
        assert_eq!(collector.take_snapshot().move_axis, Vec2::new(1.0, -0.5));
    }

    #[test]
    fn focus_loss_clears_all_state() {
        let mut collector = InputCollector::new();
        collector.process_event(InputEvent::Move(Vec2::ONE));
        collector.process_event(InputEvent::Jump { pressed: true });
        collector.process_event(InputEvent::Crouch { held: true });
        collector.process_event(InputEvent::Slide { held: true });
        collector.process_event(InputEvent::Look(Vec2::ONE));

        collector.process_event(InputEvent::FocusLost);

        assert_eq!(collector.take_snapshot(), InputSnapshot::default());
    }
}
