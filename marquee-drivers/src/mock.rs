//! Test doubles sharing a virtual clock
//!
//! `MockDelay` advances the clock instead of sleeping; `MockPin` logs every
//! level change with the time it happened.

use marquee_hal::{Delay, InputPin, OutputPin};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

#[derive(Clone, Default)]
pub struct Clock(Rc<Cell<u64>>);

impl Clock {
    pub fn now_us(&self) -> u64 {
        self.0.get()
    }
}

pub struct MockDelay(pub Clock);

impl Delay for MockDelay {
    fn delay_us(&mut self, us: u32) {
        let clock = &self.0 .0;
        clock.set(clock.get() + u64::from(us));
    }
}

/// Output pin logging `(time_us, level)` on every write
pub struct MockPin {
    clock: Clock,
    high: bool,
    pub edges: Rc<RefCell<Vec<(u64, bool)>>>,
}

impl MockPin {
    pub fn new(clock: &Clock) -> Self {
        Self {
            clock: clock.clone(),
            high: false,
            edges: Rc::default(),
        }
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
        self.edges.borrow_mut().push((self.clock.now_us(), true));
    }

    fn set_low(&mut self) {
        self.high = false;
        self.edges.borrow_mut().push((self.clock.now_us(), false));
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input pin with a level the test can change
#[derive(Clone, Default)]
pub struct MockInput(pub Rc<Cell<bool>>);

impl MockInput {
    pub fn set(&self, high: bool) {
        self.0.set(high);
    }
}

impl InputPin for MockInput {
    fn is_high(&self) -> bool {
        self.0.get()
    }
}
