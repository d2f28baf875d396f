/// Converts host frame timestamps (milliseconds) into simulation deltas (seconds).
///
/// The first timestamp only primes the clock and yields a zero delta, so a
/// page that has been open for minutes does not start with a huge jump.
/// Timestamps that go backwards or are not finite also yield zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        if !timestamp_ms.is_finite() {
            return 0.0;
        }

        let dt = match self.last_ms {
            Some(last) if timestamp_ms > last => ((timestamp_ms - last) / 1000.0) as f32,
            _ => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        dt
    }

    /// Forget the last timestamp, e.g. after the host was suspended
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
