//! Movement domain: jetpack fuel state machine.
//!
//! The jetpack is either flying (burning fuel) or refueling. Running dry
//! locks thrust out until the tank is back to half, even if the player
//! keeps holding thrust the whole time.

use crate::movement::JetpackTuning;

/// Fraction of `max_fuel` needed before a dry jetpack can fly again.
pub const REIGNITE_FRACTION: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JetpackPhase {
    Flying,
    #[default]
    Refueling,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JetpackState {
    pub fuel: f32,
    pub is_refueling: bool,
    pub must_wait_for_fuel: bool,
}

impl JetpackState {
    /// A full tank, ready to fly.
    pub fn full(tuning: &JetpackTuning) -> Self {
        Self {
            fuel: tuning.max_fuel,
            is_refueling: false,
            must_wait_for_fuel: false,
        }
    }

    /// Whether thrust would be honoured this tick.
    pub fn can_fly(&self) -> bool {
        !self.must_wait_for_fuel
    }

    pub fn fuel_fraction(&self, tuning: &JetpackTuning) -> f32 {
        (self.fuel / tuning.max_fuel).clamp(0.0, 1.0)
    }

    /// Advance one fixed tick and report which phase the tick ran in.
    pub fn step(&mut self, thrust_requested: bool, tuning: &JetpackTuning) -> JetpackPhase {
        if thrust_requested && !self.must_wait_for_fuel {
            self.is_refueling = false;
            self.fuel = (self.fuel - tuning.usage_rate).max(0.0);
            if self.fuel <= 0.0 {
                self.must_wait_for_fuel = true;
            }
            JetpackPhase::Flying
        } else {
            self.is_refueling = true;
            self.fuel = (self.fuel + tuning.refill_rate).min(tuning.max_fuel);
            if self.fuel >= tuning.max_fuel * REIGNITE_FRACTION {
                self.must_wait_for_fuel = false;
            }
            JetpackPhase::Refueling
        }
    }
}
