use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The voting window of a survey.
///
/// Edits keep `end >= start`: choosing a start after the current end pulls
/// the end forward, choosing an end before the current start snaps it to the
/// start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(rename = "startDate")]
    start: Option<DateTime<Utc>>,
    #[serde(rename = "endDate")]
    end: Option<DateTime<Utc>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    /// Pick a start date, clamping the end if it now precedes the start.
    pub fn pick_start(&mut self, start: DateTime<Utc>) {
        self.start = Some(start);
        if let Some(end) = self.end
            && end < start
        {
            self.end = Some(start);
        }
    }

    /// Pick an end date; an end before the current start becomes the start.
    pub fn pick_end(&mut self, end: DateTime<Utc>) {
        self.end = match self.start {
            Some(start) if end < start => Some(start),
            _ => Some(end),
        };
    }

    /// Both dates are set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn later_start_pulls_end() {
        let mut s = Schedule::new();
        s.pick_start(day(1));
        s.pick_end(day(5));
        s.pick_start(day(10));
        assert_eq!(s.start(), Some(day(10)));
        assert_eq!(s.end(), Some(day(10)));
    }

    #[test]
    fn early_end_snaps_to_start() {
        let mut s = Schedule::new();
        s.pick_start(day(10));
        s.pick_end(day(3));
        assert_eq!(s.end(), Some(day(10)));
    }

    #[test]
    fn end_without_start_is_kept() {
        let mut s = Schedule::new();
        s.pick_end(day(3));
        assert_eq!(s.end(), Some(day(3)));
        assert!(!s.is_complete());
        s.pick_start(day(1));
        assert!(s.is_complete());
        assert_eq!(s.end(), Some(day(3)));
    }
}
