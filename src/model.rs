//! Countdown state for the session timer display.
//! The server-side idle-logout middleware is a separate layer; this model
//! only drives what the user sees.

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerPhase {
    /// Counting down, one tick per second.
    Running,
    /// Terminal. The display freezes at zero and nothing is scheduled.
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerState {
    /// Whole seconds left before the visible countdown expires.
    /// Never increases; the unsigned type keeps it non-negative.
    pub remaining_secs: u32,
    pub phase: TimerPhase,
}

pub enum TimerAction {
    /// One elapsed second.
    Tick,
}

impl TimerState {
    pub fn new(initial_secs: u32) -> Self {
        let phase = if initial_secs == 0 {
            TimerPhase::Stopped
        } else {
            TimerPhase::Running
        };
        Self {
            remaining_secs: initial_secs,
            phase,
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.phase == TimerPhase::Stopped
    }
}

impl Reducible for TimerState {
    type Action = TimerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TimerAction::Tick => {
                if self.is_stopped() {
                    return self;
                }
                let remaining = self.remaining_secs.saturating_sub(1);
                Rc::new(Self {
                    remaining_secs: remaining,
                    phase: if remaining == 0 {
                        TimerPhase::Stopped
                    } else {
                        TimerPhase::Running
                    },
                })
            }
        }
    }
}
