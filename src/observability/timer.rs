//! Duration timer for logging elapsed time

use std::time::Instant;

/// A simple duration timer
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed milliseconds as a string, ready to be a log field
    pub fn elapsed_ms(&self) -> String {
        self.start.elapsed().as_millis().to_string()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_is_numeric() {
        let timer = Timer::new();
        let elapsed: u128 = timer.elapsed_ms().parse().unwrap();
        assert!(elapsed < 60_000);
    }
}
