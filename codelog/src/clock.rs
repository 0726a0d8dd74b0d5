//! Wall-clock collaborator used to timestamp error reports.

/// Source of the current time, formatted `HH:MM:SS`.
pub trait Clock {
    fn now_hms(&self) -> String;
}

/// Local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_hms(&self) -> String {
        chrono::Local::now().format("%H:%M:%S").to_string()
    }
}

/// A clock frozen at one reading.  Useful for deterministic output.
#[derive(Debug, Clone)]
pub struct FixedClock(String);

impl FixedClock {
    pub fn new(hms: impl Into<String>) -> Self {
        Self(hms.into())
    }
}

impl Clock for FixedClock {
    fn now_hms(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_shape() {
        let s = SystemClock.now_hms();
        let parts: Vec<&str> = s.split(':').collect();
        assert_eq!(parts.len(), 3, "{s}");
        assert!(parts.iter().all(|p| p.len() == 2 && p.bytes().all(|b| b.is_ascii_digit())));
    }

    #[test]
    fn fixed_clock() {
        assert_eq!(FixedClock::new("01:02:03").now_hms(), "01:02:03");
    }
}
