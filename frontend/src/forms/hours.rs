use chrono::{NaiveTime, Weekday};

use crate::api::ScheduleEntry;
use crate::utils::time::{format_clock, parse_clock};

pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl TimeRange {
    pub fn parse(open: &str, close: &str) -> Option<Self> {
        Some(Self {
            open: parse_clock(open)?,
            close: parse_clock(close)?,
        })
    }
}

/// Unsaved contents of the add/edit modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoursDraft {
    pub day: Option<Weekday>,
    pub open: String,
    pub close: String,
}

impl HoursDraft {
    pub fn can_save(&self) -> bool {
        TimeRange::parse(&self.open, &self.close).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoursEditor {
    days: [Option<TimeRange>; 7],
    draft: Option<HoursDraft>,
    pending_delete: Option<Weekday>,
}

impl Default for HoursEditor {
    fn default() -> Self {
        let range = TimeRange::parse("00:21", "23:21");
        Self {
            days: [range; 7],
            draft: None,
            pending_delete: None,
        }
    }
}

impl HoursEditor {
    /// Days missing from `entries`, or with unreadable times, start closed.
    pub fn from_entries(entries: &[ScheduleEntry]) -> Self {
        let mut days = [None; 7];
        for entry in entries {
            let Some(slot) = (entry.day as usize).checked_sub(1).filter(|i| *i < 7) else {
                continue;
            };
            days[slot] = TimeRange::parse(&entry.opening_time, &entry.closing_time);
        }
        Self {
            days,
            draft: None,
            pending_delete: None,
        }
    }

    pub fn day(&self, day: Weekday) -> Option<TimeRange> {
        self.days[day.num_days_from_monday() as usize]
    }

    pub fn draft(&self) -> Option<&HoursDraft> {
        self.draft.as_ref()
    }

    pub fn pending_delete(&self) -> Option<Weekday> {
        self.pending_delete
    }

    /// Opens the modal for `day`, pre-filled unless the day is closed.
    pub fn begin_edit(&mut self, day: Weekday) {
        let (open, close) = match self.day(day) {
            Some(range) => (format_clock(range.open), format_clock(range.close)),
            None => (String::new(), String::new()),
        };
        self.draft = Some(HoursDraft {
            day: Some(day),
            open,
            close,
        });
    }

    pub fn edit_draft(&mut self, update: impl FnOnce(&mut HoursDraft)) {
        if let Some(draft) = self.draft.as_mut() {
            update(draft);
        }
    }

    /// Commits the draft. Returns the notification text, or `None` when the
    /// draft is missing or incomplete.
    pub fn save(&mut self) -> Option<&'static str> {
        let draft = self.draft.as_ref()?;
        let day = draft.day?;
        let range = TimeRange::parse(&draft.open, &draft.close)?;
        let slot = &mut self.days[day.num_days_from_monday() as usize];
        let message = if slot.is_some() {
            "Schedule updated successfully"
        } else {
            "Schedule added successfully"
        };
        *slot = Some(range);
        self.draft = None;
        Some(message)
    }

    pub fn request_delete(&mut self, day: Weekday) {
        if self.day(day).is_some() {
            self.pending_delete = Some(day);
        }
    }

    pub fn confirm_delete(&mut self) -> Option<&'static str> {
        let day = self.pending_delete.take()?;
        self.days[day.num_days_from_monday() as usize] = None;
        Some("Schedule removed successfully")
    }

    /// Closes whichever modal is open without changing any day.
    pub fn cancel(&mut self) {
        self.draft = None;
        self.pending_delete = None;
    }

    pub fn to_schedule_entries(&self) -> Vec<ScheduleEntry> {
        WEEK.iter()
            .filter_map(|day| {
                self.day(*day).map(|range| ScheduleEntry {
                    day: day.number_from_monday() as u8,
                    opening_time: format_clock(range.open),
                    closing_time: format_clock(range.close),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_entries_seed_the_week() {
        let hours = HoursEditor::from_entries(&[
            ScheduleEntry {
                day: 1,
                opening_time: "09:00".into(),
                closing_time: "22:00:00".into(),
            },
            ScheduleEntry {
                day: 9,
                opening_time: "09:00".into(),
                closing_time: "22:00".into(),
            },
        ]);
        let monday = hours.day(Weekday::Mon).unwrap();
        assert_eq!(format_clock(monday.close), "22:00");
        assert!(hours.day(Weekday::Tue).is_none());
        assert_eq!(hours.to_schedule_entries().len(), 1);
    }

    #[test]
    fn every_day_starts_open() {
        let editor = HoursEditor::default();
        for day in WEEK {
            let range = editor.day(day).unwrap();
            assert_eq!(format_clock(range.open), "00:21");
            assert_eq!(format_clock(range.close), "23:21");
        }
    }

    #[test]
    fn confirmed_delete_clears_only_that_day() {
        let mut editor = HoursEditor::default();
        editor.request_delete(Weekday::Wed);
        assert_eq!(editor.day(Weekday::Wed), TimeRange::parse("00:21", "23:21"));
        assert_eq!(editor.confirm_delete(), Some("Schedule removed successfully"));
        assert!(editor.day(Weekday::Wed).is_none());
        for day in WEEK.into_iter().filter(|d| *d != Weekday::Wed) {
            assert!(editor.day(day).is_some());
        }
        assert_eq!(editor.to_schedule_entries().len(), 6);
    }

    #[test]
    fn cancelled_delete_keeps_the_day() {
        let mut editor = HoursEditor::default();
        editor.request_delete(Weekday::Fri);
        editor.cancel();
        assert!(editor.confirm_delete().is_none());
        assert!(editor.day(Weekday::Fri).is_some());
    }

    #[test]
    fn edit_prefills_and_closed_day_starts_blank() {
        let mut editor = HoursEditor::default();
        editor.begin_edit(Weekday::Mon);
        assert_eq!(editor.draft().unwrap().open, "00:21");

        editor.request_delete(Weekday::Tue);
        editor.confirm_delete();
        editor.begin_edit(Weekday::Tue);
        let draft = editor.draft().unwrap();
        assert!(draft.open.is_empty() && draft.close.is_empty());
        assert!(!draft.can_save());
        assert!(editor.save().is_none());

        editor.edit_draft(|d| {
            d.open = "09:00".into();
            d.close = "22:30".into();
        });
        assert_eq!(editor.save(), Some("Schedule added successfully"));
        assert_eq!(editor.day(Weekday::Tue), TimeRange::parse("09:00", "22:30"));

        editor.begin_edit(Weekday::Tue);
        assert_eq!(editor.save(), Some("Schedule updated successfully"));
    }

    #[test]
    fn schedule_entries_use_iso_weekdays() {
        let entries = HoursEditor::default().to_schedule_entries();
        assert_eq!(entries[0].day, 1);
        assert_eq!(entries[6].day, 7);
        assert_eq!(entries[6].opening_time, "00:21");
    }
}
