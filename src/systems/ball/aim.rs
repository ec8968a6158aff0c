//! Aiming - drag-to-shoot state and the shot velocity computation.
//!
//! Aim coordinates arrive in screen pixels from the input layer; the shot
//! magnitude converts through the grid's cell size.

use super::{Ball, BallPhase, Vec2, MAX_VELOCITY, POWER_MULTIPLIER};

/// Present while the player is dragging a shot.
#[derive(Clone, Copy, Debug, Default)]
pub struct AimState {
    pub active: bool,
    pub click_pos: Vec2,
    pub current_pos: Vec2,
}

/// Shot power loss when shooting out of sand.
const SAND_SHOT_DAMPING: f64 = 0.5;

impl Ball {
    /// Begin a drag. Rejected unless the ball is idle and able to shoot.
    pub fn start_aiming(&mut self, x: f64, y: f64) -> bool {
        if !self.can_shoot() {
            return false;
        }
        self.phase = BallPhase::Aiming;
        self.aim = AimState {
            active: true,
            click_pos: Vec2::new(x, y),
            current_pos: Vec2::new(x, y),
        };
        true
    }

    pub fn update_aim(&mut self, x: f64, y: f64) {
        if self.aim.active {
            self.aim.current_pos = Vec2::new(x, y);
        }
    }

    /// Release the drag and fire.
    ///
    /// Velocity points from the release position back toward the click
    /// (slingshot style) with magnitude `|click - release| / cell_size *
    /// POWER_MULTIPLIER`, halved when the ball sits in sand. A zero-length
    /// drag is a no-shot: aim state clears, velocity is untouched.
    pub fn shoot(&mut self, cell_size: f64) -> bool {
        if self.phase != BallPhase::Aiming || !self.aim.active {
            return false;
        }
        self.phase = BallPhase::Free;
        self.aim.active = false;

        let drag = self.aim.click_pos - self.aim.current_pos;
        let pixels = drag.length();
        if pixels < 1e-9 || cell_size <= 0.0 {
            return false;
        }

        let mut speed = pixels / cell_size * POWER_MULTIPLIER;
        if self.in_sand {
            speed *= SAND_SHOT_DAMPING;
        }
        self.velocity = (drag.normalize() * speed).clamp_length(MAX_VELOCITY);
        self.crater_created = false;
        true
    }

    /// Abort the drag without firing; velocity is left as-is.
    pub fn cancel_shot(&mut self) {
        if self.aim.active {
            self.phase = BallPhase::Free;
            self.aim.active = false;
        }
    }

    pub fn aim(&self) -> &AimState {
        &self.aim
    }
}
