use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::countdown::{Countdown, CountdownAction};

/// Something that can fire a callback on a fixed period.
///
/// Dropping the returned handle cancels the schedule.
pub trait Scheduler {
    type Handle;

    fn schedule_every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser `setInterval` through gloo.
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn schedule_every(&self, period_ms: u32, mut callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, move || callback())
    }
}

/// Periodic trigger with an explicit start/stop lifecycle.
///
/// `start` while running and `stop` while stopped are no-ops that return
/// `false`, so a surface can never end up with two schedules driving the
/// same state. Dropping the ticker stops it.
pub struct Ticker<S: Scheduler> {
    scheduler: S,
    period_ms: u32,
    handle: Option<S::Handle>,
}

impl<S: Scheduler> Ticker<S> {
    pub fn new(scheduler: S, period_ms: u32) -> Self {
        Self {
            scheduler,
            period_ms,
            handle: None,
        }
    }

    pub fn start<F>(&mut self, on_tick: F) -> bool
    where
        F: FnMut() + 'static,
    {
        if self.handle.is_some() {
            debug!("Ticker already running, ignoring start");
            return false;
        }
        debug!("Starting ticker every {}ms", self.period_ms);
        self.handle = Some(self.scheduler.schedule_every(self.period_ms, Box::new(on_tick)));
        true
    }

    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                drop(handle);
                debug!("Ticker stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl<S: Scheduler> Drop for Ticker<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Counts down from `start`, one tick per `period_ms`, for as long as the
/// calling component stays mounted.
#[hook]
pub fn use_countdown(start: Countdown, period_ms: u32) -> Countdown {
    let remaining = use_reducer(move || start);

    {
        let dispatcher = remaining.dispatcher();
        use_effect_with_deps(
            move |period_ms| {
                let mut ticker = Ticker::new(IntervalScheduler, *period_ms);
                ticker.start(move || dispatcher.dispatch(CountdownAction::Tick));
                move || {
                    ticker.stop();
                }
            },
            period_ms,
        );
    }

    *remaining
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    struct Slot {
        period_ms: u32,
        elapsed_ms: u32,
        active: Rc<Cell<bool>>,
        callback: Box<dyn FnMut()>,
    }

    /// Fake clock: callbacks only fire when the test advances time.
    #[derive(Clone, Default)]
    struct ManualScheduler {
        slots: Rc<RefCell<Vec<Slot>>>,
    }

    struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(false);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule_every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> ManualHandle {
            let active = Rc::new(Cell::new(true));
            self.slots.borrow_mut().push(Slot {
                period_ms,
                elapsed_ms: 0,
                active: active.clone(),
                callback,
            });
            ManualHandle(active)
        }
    }

    impl ManualScheduler {
        fn advance(&self, ms: u32) {
            for slot in self.slots.borrow_mut().iter_mut() {
                if !slot.active.get() {
                    continue;
                }
                slot.elapsed_ms += ms;
                while slot.elapsed_ms >= slot.period_ms {
                    slot.elapsed_ms -= slot.period_ms;
                    (slot.callback)();
                }
            }
        }

        fn active_schedules(&self) -> usize {
            self.slots.borrow().iter().filter(|s| s.active.get()).count()
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let calls = Rc::new(Cell::new(0));
        let inner = calls.clone();
        (calls, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn fires_once_per_period() {
        let clock = ManualScheduler::default();
        let mut ticker = Ticker::new(clock.clone(), 1000);
        let (calls, on_tick) = counter();

        assert!(ticker.start(on_tick));
        clock.advance(999);
        assert_eq!(calls.get(), 0);
        clock.advance(1);
        assert_eq!(calls.get(), 1);
        clock.advance(3000);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn no_ticks_after_stop() {
        let clock = ManualScheduler::default();
        let mut ticker = Ticker::new(clock.clone(), 1000);
        let (calls, on_tick) = counter();

        ticker.start(on_tick);
        clock.advance(2000);
        assert!(ticker.stop());
        assert!(!ticker.is_running());
        clock.advance(10_000);
        assert_eq!(calls.get(), 2);
        assert_eq!(clock.active_schedules(), 0);
    }

    #[test]
    fn no_ticks_after_drop() {
        let clock = ManualScheduler::default();
        let (calls, on_tick) = counter();
        {
            let mut ticker = Ticker::new(clock.clone(), 1000);
            ticker.start(on_tick);
            clock.advance(1000);
        }
        clock.advance(5000);
        assert_eq!(calls.get(), 1);
        assert_eq!(clock.active_schedules(), 0);
    }

    #[test]
    fn double_start_keeps_a_single_schedule() {
        let clock = ManualScheduler::default();
        let mut ticker = Ticker::new(clock.clone(), 1000);
        let (calls, on_tick) = counter();
        let (second_calls, second_on_tick) = counter();

        assert!(ticker.start(on_tick));
        assert!(!ticker.start(second_on_tick));
        clock.advance(3000);
        assert_eq!(calls.get(), 3);
        assert_eq!(second_calls.get(), 0);
        assert_eq!(clock.active_schedules(), 1);
    }

    #[test]
    fn double_stop_is_harmless() {
        let clock = ManualScheduler::default();
        let mut ticker = Ticker::new(clock.clone(), 1000);
        assert!(!ticker.stop());
        ticker.start(|| ());
        assert!(ticker.stop());
        assert!(!ticker.stop());
    }

    #[test]
    fn restart_after_stop_schedules_again() {
        let clock = ManualScheduler::default();
        let mut ticker = Ticker::new(clock.clone(), 500);
        let (calls, on_tick) = counter();
        let (restart_calls, restart_on_tick) = counter();

        ticker.start(on_tick);
        clock.advance(500);
        ticker.stop();
        assert!(ticker.start(restart_on_tick));
        clock.advance(1000);
        assert_eq!(calls.get(), 1);
        assert_eq!(restart_calls.get(), 2);
    }

    #[test]
    fn drives_a_countdown_to_zero_and_stops_on_teardown() {
        let clock = ManualScheduler::default();
        let state = Rc::new(Cell::new(Countdown::new(0, 0, 1, 0)));
        let (calls, mut count) = counter();

        let mut ticker = Ticker::new(clock.clone(), 1000);
        {
            let state = state.clone();
            ticker.start(move || {
                count();
                state.set(state.get().tick());
            });
        }

        clock.advance(1000);
        assert_eq!(state.get(), Countdown::new(0, 0, 0, 59));
        clock.advance(59_000);
        assert_eq!(state.get(), Countdown::ZERO);
        clock.advance(5000);
        assert_eq!(state.get(), Countdown::ZERO);
        assert_eq!(calls.get(), 65);

        drop(ticker);
        clock.advance(5000);
        assert_eq!(calls.get(), 65);
    }
}
