//! Handles for the recurring work the initializer schedules.
//!
//! gloo timers clear themselves when dropped, so owning them in one struct
//! gives page teardown a single cancellation point. The classic page-lifetime
//! behavior is `forget()`.

use gloo_timers::callback::{Interval, Timeout};

/// Owns every timer the page behavior initializer started.
#[derive(Default)]
pub struct PageTasks {
    /// One pending auto-dismiss per non-danger alert found at init.
    pub(crate) alert_timers: Vec<Timeout>,
    /// The footer clock, when scheduled.
    pub(crate) clock: Option<Interval>,
}

impl PageTasks {
    /// Stop every scheduled task. Alerts not yet dismissed stay on screen.
    pub fn cancel(self) {
        for timer in self.alert_timers {
            timer.cancel();
        }
        if let Some(clock) = self.clock {
            clock.cancel();
        }
    }

    /// Leak the timers so they run for the remaining page lifetime.
    pub fn forget(self) {
        for timer in self.alert_timers {
            timer.forget();
        }
        if let Some(clock) = self.clock {
            clock.forget();
        }
    }
}
