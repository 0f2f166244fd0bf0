use std::time::Instant;
use chrono::{Local, NaiveTime, TimeDelta, Timelike};

/// Wall-clock fields delivered once per minute.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Tick {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl Tick {
    pub fn from_time(time: NaiveTime) -> Self {
        Self { hour: time.hour(), minute: time.minute(), second: time.second() }
    }
}

/// Receives ticks from the host loop.
pub trait TickHandler {
    fn handle_tick(&mut self, tick: &Tick);
}

pub trait WallClock {
    fn now(&mut self) -> NaiveTime;
}

pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&mut self) -> NaiveTime {
        Local::now().time()
    }
}

/// Runs `speed` times faster than real time, starting from `start`.
pub struct SimulatedClock {
    start: NaiveTime,
    origin: Instant,
    speed: f64,
}

impl SimulatedClock {
    pub fn new(start: NaiveTime, speed: f64) -> Self {
        Self { start, origin: Instant::now(), speed }
    }

    pub fn at(&self, elapsed_secs: f64) -> NaiveTime {
        let millis = (elapsed_secs * self.speed * 1000.0) as i64;
        // NaiveTime addition wraps around midnight
        self.start + TimeDelta::milliseconds(millis)
    }
}

impl WallClock for SimulatedClock {
    fn now(&mut self) -> NaiveTime {
        self.at(self.origin.elapsed().as_secs_f64())
    }
}

const MINUTES_PER_DAY: u32 = 24 * 60;
const MAX_CATCH_UP_MINUTES: u32 = 60;   // One wrap of the hour

/// Turns polled wall-clock time into one tick per minute boundary.
#[derive(Debug, Default)]
pub struct MinuteTicker {
    last: Option<u32>, // Minute of the day last seen
}

impl MinuteTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of ticks delivered to `handler`.
    ///
    /// The first poll only primes the ticker, like subscribing to a minute
    /// timer: the first delivery happens on the next minute change. Every
    /// minute boundary crossed since the previous poll is delivered in order
    /// with `second: 0`, at most one hour's worth.
    pub fn poll<H: TickHandler + ?Sized>(&mut self, now: NaiveTime, handler: &mut H) -> u32 {
        let current = now.hour() * 60 + now.minute();
        let Some(last) = self.last.replace(current) else {
            return 0;
        };

        let elapsed = (current + MINUTES_PER_DAY - last) % MINUTES_PER_DAY;
        let delivered = elapsed.min(MAX_CATCH_UP_MINUTES);
        for back in (0..delivered).rev() {
            let minute_of_day = (current + MINUTES_PER_DAY - back) % MINUTES_PER_DAY;
            handler.handle_tick(&Tick {
                hour: minute_of_day / 60,
                minute: minute_of_day % 60,
                second: 0,
            });
        }
        delivered
    }
}
