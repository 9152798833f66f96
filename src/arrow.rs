use crate::math::{clock_angle, column_vector, length, rotate, Vector2};
use std::f64::consts::PI;

/// Which hand of the clock an arrow represents
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Hour,
    Minute,
}

impl Hand {
    /// Radians the hand moves per minute of clock time
    pub fn angular_velocity(self) -> f64 {
        match self {
            Hand::Hour => PI / 6.0 / 60.0,
            Hand::Minute => PI / 30.0,
        }
    }

    /// Length of the hand relative to a face of radius 1
    pub fn length(self) -> f64 {
        match self {
            Hand::Hour => 0.4,
            Hand::Minute => 0.6,
        }
    }
}

/// Direction of a single nudge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// `1.0` for forward, `-1.0` for backward
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// A clock hand: a vector from the center of the face to the tip
#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    hand: Hand,
    vector: Vector2,
    /// Clock minutes covered by one key press
    minutes_per_step: u32,
}

impl Arrow {
    /// Creates a hand pointing `angle` radians clockwise from 12 o'clock
    pub fn new(hand: Hand, angle: f64) -> Self {
        Arrow::with_step(hand, angle, 1)
    }

    /// Like [`Arrow::new`], but each step covers `minutes_per_step` minutes
    pub fn with_step(hand: Hand, angle: f64, minutes_per_step: u32) -> Self {
        Arrow {
            hand,
            vector: rotate(&column_vector(0.0, hand.length()), angle),
            minutes_per_step,
        }
    }

    /// Radians turned by a single key press
    pub fn velocity(&self) -> f64 {
        self.hand.angular_velocity() * f64::from(self.minutes_per_step)
    }

    /// Current tip offset from the center
    pub fn value(&self) -> Vector2 {
        self.vector
    }

    /// Angle of the hand, clockwise from 12 o'clock
    pub fn angle(&self) -> f64 {
        clock_angle(&self.vector)
    }

    /// Replaces the vector with one rotated by a single angular-velocity step
    pub fn step(&mut self, direction: Direction) {
        self.vector = rotate(&self.vector, direction.sign() * self.velocity());
        debug_assert!((length(&self.vector) - self.hand.length()).abs() < 1e-6);
    }
}
