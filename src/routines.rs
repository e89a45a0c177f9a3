use crate::models::{percentage, DayCompletion, Routine};
use chrono::{Duration, NaiveDate};

pub const DEFAULT_STREAK_SCAN_DAYS: u32 = 365;
pub const DEFAULT_RATE_WINDOW_DAYS: u32 = 30;
pub const DEFAULT_HISTORY_DAYS: u32 = 7;

impl Routine {
    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.completions.get(&date).copied().unwrap_or(false)
    }

    // Entries are kept only for completed days, so a double toggle restores
    // the exact map it started from.
    pub fn toggle_completion(&mut self, date: NaiveDate) -> bool {
        let next = !self.completed_on(date);
        if next {
            self.completions.insert(date, true);
        } else {
            self.completions.remove(&date);
        }
        next
    }

    pub fn streak(&self, as_of: NaiveDate) -> u32 {
        self.streak_within(as_of, DEFAULT_STREAK_SCAN_DAYS)
    }

    pub fn streak_within(&self, as_of: NaiveDate, scan_days: u32) -> u32 {
        let mut run = 0;
        for offset in 0..scan_days {
            if self.completed_on(as_of - Duration::days(offset as i64)) {
                run += 1;
            } else {
                break;
            }
        }
        run
    }

    pub fn completion_rate(&self, as_of: NaiveDate, window_days: u32) -> u32 {
        if window_days == 0 {
            return 0;
        }
        let completed = (0..window_days)
            .filter(|offset| self.completed_on(as_of - Duration::days(*offset as i64)))
            .count();
        percentage(completed, window_days as usize)
    }

    pub fn history(&self, as_of: NaiveDate, days: u32) -> Vec<DayCompletion> {
        let mut series = Vec::with_capacity(days as usize);
        for offset in (0..days).rev() {
            let date = as_of - Duration::days(offset as i64);
            series.push(DayCompletion {
                date,
                completed: self.completed_on(date),
            });
        }
        series
    }
}
