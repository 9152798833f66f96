use crate::arrow::{Arrow, Direction, Hand};
use crate::time::{displayed_time, initial_angles, minutes_since_midnight};

/// Clock state
#[derive(Clone, Debug)]
pub struct ClockState {
    /// Hour hand
    pub hour: Arrow,
    /// Minute hand
    pub minute: Arrow,
    /// Start position, in minutes since midnight
    start: i64,
    /// Net key-press steps taken since the start position
    steps: i64,
    /// Clock minutes covered by one key press
    step_minutes: u32,
    /// Enable debug mode
    pub debug: bool,
}

impl ClockState {
    /// Clock showing `hour:minute`, one minute per key press
    pub fn new(hour: u32, minute: u32) -> Self {
        ClockState::with_step(hour, minute, 1)
    }

    /// Clock showing `hour:minute`, `step_minutes` minutes per key press
    pub fn with_step(hour: u32, minute: u32, step_minutes: u32) -> Self {
        let (hour_angle, minute_angle) = initial_angles(hour, minute);
        ClockState {
            hour: Arrow::with_step(Hand::Hour, hour_angle, step_minutes),
            minute: Arrow::with_step(Hand::Minute, minute_angle, step_minutes),
            start: minutes_since_midnight(hour, minute),
            steps: 0,
            step_minutes,
            debug: false,
        }
    }

    /// Rotates both hands by one step of their own angular velocity
    pub fn nudge(&mut self, direction: Direction) {
        self.hour.step(direction);
        self.minute.step(direction);
        self.steps += match direction {
            Direction::Forward => 1,
            Direction::Backward => -1,
        };
        tracing::debug!(
            ?direction,
            steps = self.steps,
            hour_angle = self.hour.angle(),
            minute_angle = self.minute.angle(),
            "Nudged hands"
        );
    }

    /// Puts both hands back where they started
    pub fn reset(&mut self) {
        let (hour, minute) = displayed_time(self.start);
        let debug = self.debug;
        *self = ClockState::with_step(hour, minute, self.step_minutes);
        self.debug = debug;
        tracing::debug!("Reset hands to {:02}:{:02}", hour, minute);
    }

    /// Shows or hides the debug overlay
    pub fn toggle_debug(&mut self) {
        self.debug = !self.debug;
    }

    /// Net key presses since the start position, backward presses counting negative
    pub fn steps(&self) -> i64 {
        self.steps
    }

    /// Time the hands currently show
    pub fn time_shown(&self) -> (u32, u32) {
        displayed_time(self.start + self.steps * i64::from(self.step_minutes))
    }
}
