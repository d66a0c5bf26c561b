use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::functional::Reducible;

/// Time left until the public sale, kept as four calendar-style fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Countdown {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    pub const ZERO: Countdown = Countdown::new(0, 0, 0, 0);

    pub const fn new(days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// One second less, borrowing from the next larger unit when a field is
    /// exhausted. Zero is a fixed point.
    pub fn tick(self) -> Self {
        if self.seconds > 0 {
            Self {
                seconds: self.seconds - 1,
                ..self
            }
        } else if self.minutes > 0 {
            Self {
                minutes: self.minutes - 1,
                seconds: 59,
                ..self
            }
        } else if self.hours > 0 {
            Self {
                hours: self.hours - 1,
                minutes: 59,
                seconds: 59,
                ..self
            }
        } else if self.days > 0 {
            Self {
                days: self.days - 1,
                hours: 23,
                minutes: 59,
                seconds: 59,
            }
        } else {
            self
        }
    }

    pub fn is_finished(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.days) * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds)
    }

    /// Label/value pairs in the order they are shown on the page.
    pub fn units(&self) -> [(&'static str, u32); 4] {
        [
            ("days", self.days),
            ("hours", self.hours),
            ("minutes", self.minutes),
            ("seconds", self.seconds),
        ]
    }
}

pub enum CountdownAction {
    Tick,
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            // Returning the same Rc at zero keeps the page from re-rendering every second
            CountdownAction::Tick if self.is_finished() => self,
            CountdownAction::Tick => Rc::new(self.tick()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_n(mut countdown: Countdown, n: u64) -> Countdown {
        for _ in 0..n {
            countdown = countdown.tick();
        }
        countdown
    }

    #[test]
    fn tick_decrements_only_seconds_when_seconds_left() {
        for start in [
            Countdown::new(0, 0, 0, 1),
            Countdown::new(10, 8, 45, 30),
            Countdown::new(3, 23, 59, 59),
        ] {
            let next = start.tick();
            assert_eq!(next.seconds, start.seconds - 1);
            assert_eq!(next.minutes, start.minutes);
            assert_eq!(next.hours, start.hours);
            assert_eq!(next.days, start.days);
        }
    }

    #[test]
    fn tick_borrows_from_minutes() {
        assert_eq!(Countdown::new(2, 5, 17, 0).tick(), Countdown::new(2, 5, 16, 59));
    }

    #[test]
    fn tick_borrows_from_hours() {
        assert_eq!(Countdown::new(2, 5, 0, 0).tick(), Countdown::new(2, 4, 59, 59));
    }

    #[test]
    fn tick_borrows_from_days() {
        assert_eq!(Countdown::new(1, 0, 0, 0).tick(), Countdown::new(0, 23, 59, 59));
        assert_eq!(Countdown::new(7, 0, 0, 0).tick(), Countdown::new(6, 23, 59, 59));
    }

    #[test]
    fn zero_is_a_fixed_point() {
        assert_eq!(Countdown::ZERO.tick(), Countdown::ZERO);
        assert!(Countdown::ZERO.is_finished());
    }

    #[test]
    fn ten_seconds_run_out_after_ten_ticks_and_stay_at_zero() {
        let start = Countdown::new(0, 0, 0, 10);
        let n = start.total_seconds();
        assert_eq!(n, 10);
        assert_eq!(tick_n(start, n), Countdown::ZERO);
        assert_eq!(tick_n(start, n + 1), Countdown::ZERO);
    }

    #[test]
    fn one_minute_counts_down_through_fifty_nine() {
        let start = Countdown::new(0, 0, 1, 0);
        assert_eq!(start.tick(), Countdown::new(0, 0, 0, 59));
        assert_eq!(tick_n(start, 60), Countdown::ZERO);
    }

    #[test]
    fn every_tick_removes_exactly_one_second() {
        let mut countdown = Countdown::new(1, 1, 1, 1);
        let mut expected = countdown.total_seconds();
        while !countdown.is_finished() {
            countdown = countdown.tick();
            expected -= 1;
            assert_eq!(countdown.total_seconds(), expected);
            assert!(countdown.hours <= 23 && countdown.minutes <= 59 && countdown.seconds <= 59);
        }
        assert_eq!(expected, 0);
    }

    #[test]
    fn out_of_range_seconds_drain_before_borrowing() {
        let start = Countdown::new(0, 0, 1, 90);
        assert_eq!(start.tick(), Countdown::new(0, 0, 1, 89));
        assert_eq!(tick_n(start, 90), Countdown::new(0, 0, 1, 0));
        assert_eq!(tick_n(start, 91), Countdown::new(0, 0, 0, 59));
    }

    #[test]
    fn units_are_ordered_largest_first() {
        let labels: Vec<_> = Countdown::new(10, 8, 45, 30)
            .units()
            .iter()
            .map(|(label, value)| format!("{}={}", label, value))
            .collect();
        assert_eq!(labels, ["days=10", "hours=8", "minutes=45", "seconds=30"]);
    }

    #[test]
    fn reducer_keeps_same_state_at_zero() {
        let zero = Rc::new(Countdown::ZERO);
        let next = zero.clone().reduce(CountdownAction::Tick);
        assert!(Rc::ptr_eq(&zero, &next));

        let running = Rc::new(Countdown::new(0, 0, 0, 2));
        assert_eq!(*running.reduce(CountdownAction::Tick), Countdown::new(0, 0, 0, 1));
    }

    #[test]
    fn missing_fields_deserialize_as_zero() {
        let parsed: Countdown = serde_json::from_str(r#"{"days": 3, "seconds": 5}"#).unwrap();
        assert_eq!(parsed, Countdown::new(3, 0, 0, 5));
    }
}
