//! Start time handling
//!
//! Converts between wall-clock times and hand angles. The hands only ever
//! move in whole-minute steps, so the time they show is tracked as a count
//! of minutes since midnight.

use crate::arrow::Hand;
use crate::error::ClockError;
use chrono::{Local, NaiveTime, Timelike};
use std::f64::consts::PI;

const MINUTES_PER_TURN: i64 = 12 * 60;

/// Where the hands start
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartTime {
    /// Local wall-clock time at startup
    Now,
    Fixed(NaiveTime),
}

impl StartTime {
    /// Resolves to `(hour, minute)` with the hour in `0..24`
    pub fn resolve(self) -> (u32, u32) {
        let time = match self {
            StartTime::Now => Local::now().time(),
            StartTime::Fixed(time) => time,
        };
        (time.hour(), time.minute())
    }
}

/// Parses a `HH:MM` start time
pub fn parse_start_time(input: &str) -> Result<StartTime, ClockError> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map(StartTime::Fixed)
        .map_err(|_| ClockError::InvalidTime(input.to_string()))
}

/// Hand angles `(hour, minute)` for a time of day
pub fn initial_angles(hour: u32, minute: u32) -> (f64, f64) {
    let hour_angle =
        f64::from(hour % 12) * PI / 6.0 + f64::from(minute) * Hand::Hour.angular_velocity();
    let minute_angle = f64::from(minute) * Hand::Minute.angular_velocity();
    (hour_angle, minute_angle)
}

/// Minutes past the last 12 o'clock for a time of day
pub fn minutes_since_midnight(hour: u32, minute: u32) -> i64 {
    i64::from(hour % 12) * 60 + i64::from(minute)
}

/// Time shown by the hands, as `(hour in 1..=12, minute in 0..60)`
pub fn displayed_time(minutes: i64) -> (u32, u32) {
    let minutes = minutes.rem_euclid(MINUTES_PER_TURN);
    let hour = (minutes / 60) as u32;
    let minute = (minutes % 60) as u32;
    (if hour == 0 { 12 } else { hour }, minute)
}
