//! Tick cadence.

use std::thread;
use std::time::{Duration, Instant};

/// Blocks between ticks.
pub trait Pacer {
    /// Wait until the next tick boundary.
    fn wait(&mut self);
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn wait(&mut self) {
        (**self).wait()
    }
}

/// Sleeps so that successive ticks are at least one interval apart.
///
/// Late ticks are not caught up; movement is per tick, so a slow frame simply
/// makes the game run slower for that frame.
#[derive(Debug, Clone)]
pub struct FixedRate {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl FixedRate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    pub fn from_hz(hz: u32) -> Self {
        Self::new(Duration::from_nanos(1_000_000_000 / hz.max(1) as u64))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Pacer for FixedRate {
    fn wait(&mut self) {
        if let Some(last) = self.last_tick {
            if let Some(rest) = self.interval.checked_sub(last.elapsed()) {
                thread::sleep(rest);
            }
        }
        self.last_tick = Some(Instant::now());
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

impl Pacer for Unpaced {
    fn wait(&mut self) {}
}
