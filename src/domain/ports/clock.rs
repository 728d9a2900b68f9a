//! Clock port - lets polling loops wait without tying tests to real time

use std::time::Duration;

pub trait Clock {
    fn sleep(&self, duration: Duration);
}

impl<T: Clock + ?Sized> Clock for &T {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}
