//! Gregorian clock state with lunar tracking, solar-term detection, and
//! holiday resolution.

pub mod holiday;
pub mod lunar;
pub mod solar_term;

use core::fmt::Write;

use heapless::String;
use log::warn;

pub use lunar::{LunarDate, LunarOutOfRange};

/// Weekday display names, indexed 0 = Sunday.
pub static WEEKDAY_NAMES: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// Lunar numeral / month-name characters shared by month and day spelling.
static LUNAR_LO: [&str; 13] = [
    "一", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊", "正",
];

/// Lunar day-of-month decade prefixes.
static LUNAR_HI: [&str; 5] = ["初", "十", "廿", "二", "三"];

/// Wire length of a time-set record: a tag byte plus 11 payload bytes.
pub const TIME_RECORD_LEN: usize = 12;

/// Highest-significance state change produced by a clock step, ordered by
/// how much of the display it invalidates.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Tick {
    Unchanged,
    Minute,
    TenMinute,
    Hour,
    Day,
}

/// Calendar and wall-clock state.
///
/// `month` and `day` are 0-based throughout; `weekday` counts 0 = Sunday.
pub struct Calendar {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    lunar: LunarDate,
    lunar_valid: bool,
    cal_minute: Option<u32>,
    solar_term_text: Option<&'static str>,
    holiday_text: Option<&'static str>,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar {
    /// Starts at 2025-01-01 00:00:00 (a Wednesday) until a time-set record
    /// arrives.
    pub fn new() -> Self {
        let mut cal = Self {
            year: 2025,
            month: 0,
            day: 0,
            weekday: 3,
            hour: 0,
            minute: 0,
            second: 0,
            lunar: LunarDate::new(4, 11, 1),
            lunar_valid: true,
            cal_minute: None,
            solar_term_text: None,
            holiday_text: None,
        };
        cal.resolve_holidays();
        cal
    }

    /// The lunar date, when it is still inside the supported window.
    pub fn lunar(&self) -> Option<&LunarDate> {
        self.lunar_valid.then_some(&self.lunar)
    }

    /// Solar-term name for today, if today is a term day (or a holiday
    /// shuffled into the slot, see [`Self::resolve_holidays`]).
    pub fn solar_term_text(&self) -> Option<&'static str> {
        self.solar_term_text
    }

    /// Holiday name for today, if any.
    pub fn holiday_text(&self) -> Option<&'static str> {
        self.holiday_text
    }

    /// Minutes elapsed since the last time-set record; `None` until the
    /// first record arrives. Exported for drift calibration.
    pub fn calibration_minutes(&self) -> Option<u32> {
        self.cal_minute
    }

    /// Resets the calibration accumulator after the host has read it.
    pub fn reset_calibration(&mut self) {
        self.cal_minute = Some(0);
    }

    /// Advances the clock by `delta` seconds and reports the largest unit
    /// that changed.
    ///
    /// At most one minute boundary is processed per call; leftover seconds
    /// beyond it accumulate and surface on later calls.
    pub fn advance_clock(&mut self, delta: u32) -> Tick {
        self.second += delta;
        if self.second < 60 {
            return Tick::Unchanged;
        }
        self.second -= 60;

        self.minute += 1;
        let mut tick = if self.minute % 10 == 0 {
            Tick::TenMinute
        } else {
            Tick::Minute
        };

        if let Some(m) = self.cal_minute.as_mut() {
            *m += 1;
        }

        if self.minute >= 60 {
            self.minute = 0;
            self.hour += 1;
            tick = Tick::Hour;
            if self.hour >= 24 {
                self.hour = 0;
                self.advance_date();
                tick = Tick::Day;
            }
        }

        tick
    }

    /// Advances the Gregorian date by one day and re-resolves the lunar
    /// date, solar term, and holiday.
    pub fn advance_date(&mut self) {
        self.weekday = (self.weekday + 1) % 7;

        self.day += 1;
        if self.day == days_in_month(self.year, self.month) {
            self.day = 0;
            self.month += 1;
            if self.month >= 12 {
                self.month = 0;
                self.year += 1;
            }
        }

        if self.lunar_valid && self.lunar.advance().is_err() {
            warn!("lunar date left the supported window, freezing lunar display");
            self.lunar_valid = false;
        }

        self.resolve_holidays();
    }

    /// Applies a 12-byte time-set record: `[tag, yearLo, yearHi,
    /// month(1-based), day(1-based), hour, minute, second, weekday,
    /// lunarYearIndex, lunarMonth, lunarDay(1-based)]`.
    ///
    /// Re-resolves holidays and restarts the calibration accumulator.
    /// Returns `false` on a short record, leaving the state untouched.
    pub fn apply_time_record(&mut self, record: &[u8]) -> bool {
        let &[_, year_lo, year_hi, month, day, hour, minute, second, weekday, l_year, l_month, l_day] =
            record
        else {
            return false;
        };

        self.year = i32::from(u16::from_le_bytes([year_lo, year_hi]));
        self.month = u32::from(month.saturating_sub(1));
        self.day = u32::from(day.saturating_sub(1));
        self.hour = u32::from(hour);
        self.minute = u32::from(minute);
        self.second = u32::from(second);
        self.weekday = u32::from(weekday);
        self.lunar = LunarDate::new(l_year, l_month, l_day.saturating_sub(1));
        // A hostile or garbled record must not poison the lunar display:
        // the month (leap flag aside) and day have to index the tables.
        self.lunar_valid = (l_month & !lunar::LEAP_FLAG) < 12
            && l_day.saturating_sub(1) < 30
            && self.lunar.month_days().is_ok();

        self.resolve_holidays();
        self.cal_minute = Some(0);
        true
    }

    /// Recomputes today's solar-term and holiday texts.
    ///
    /// The first matching holiday takes the holiday slot. A second match on
    /// the same day moves the first into the solar-term slot when that slot
    /// is free; any further matches are dropped.
    pub fn resolve_holidays(&mut self) {
        self.solar_term_text = None;
        self.holiday_text = None;

        if let Some(i) = solar_term::solar_term(self.year, self.month, self.day) {
            self.solar_term_text = Some(solar_term::TERM_NAMES[i]);
        }

        for entry in &holiday::HOLIDAYS {
            let month = (entry.month & 0x0F) - 1;
            let day = u32::from(entry.day & 0x1F).wrapping_sub(1);

            if entry.month & holiday::LUNAR != 0 {
                if !self.lunar_valid {
                    continue;
                }
                let day = if entry.month & holiday::LUNAR_LAST_DAY == holiday::LUNAR_LAST_DAY {
                    match self.lunar.month_days() {
                        Ok(days) => days - 1,
                        Err(LunarOutOfRange) => continue,
                    }
                } else {
                    day
                };
                if self.lunar.month == month && u32::from(self.lunar.day) == day {
                    self.set_holiday(entry.name);
                }
            } else if entry.day & holiday::NTH_WEEKDAY != 0 {
                let week_ordinal = self.day / 7;
                let wanted_ordinal = u32::from((entry.day >> 4) & 0x03);
                let weekday = day & 0x07;
                if self.month == u32::from(month)
                    && week_ordinal == wanted_ordinal
                    && self.weekday == weekday
                {
                    self.set_holiday(entry.name);
                }
            } else if self.month == u32::from(month) && self.day == day {
                self.set_holiday(entry.name);
            }
        }
    }

    fn set_holiday(&mut self, name: &'static str) {
        if self.holiday_text.is_none() {
            self.holiday_text = Some(name);
        } else if self.solar_term_text.is_none() {
            self.solar_term_text = self.holiday_text;
            self.holiday_text = Some(name);
        }
    }

    /// Lunar date spelled out (e.g. `腊月初二`, `闰四月十五`), without the
    /// year. Empty when the lunar date left the table window.
    pub fn lunar_text(&self) -> String<16> {
        let mut out = String::new();
        if !self.lunar_valid {
            return out;
        }

        let leap = if self.lunar.month & lunar::LEAP_FLAG != 0 {
            "闰"
        } else {
            ""
        };
        let mut lm = usize::from(self.lunar.month & 0x7F);
        if lm == 0 {
            lm = 12;
        }

        let mut hi = usize::from(self.lunar.day / 10);
        let lo = usize::from(self.lunar.day % 10);
        // 19 and 29 spell as 十九 / 廿九, not 初十九 / 十十九.
        if lo == 9 {
            if hi == 1 {
                hi = 3;
            } else if hi == 2 {
                hi = 4;
            }
        }

        let _ = write!(
            out,
            "{leap}{}月{}{}",
            LUNAR_LO[lm], LUNAR_HI[hi], LUNAR_LO[lo]
        );
        out
    }
}

pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Days in a 0-based Gregorian month.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    static DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 1 && is_leap_year(year) {
        29
    } else {
        DAYS[month as usize % 12]
    }
}

/// 0-based day of the year for a 0-based month/day pair.
pub(crate) fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    let mut total = day;
    for m in 0..month {
        total += days_in_month(year, m);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2000));
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2025, 1), 28);
    }

    #[test]
    fn default_state_resolves_new_years_day() {
        let cal = Calendar::new();
        assert_eq!(cal.holiday_text(), Some("元旦"));
        assert_eq!(cal.solar_term_text(), None);
        assert_eq!(cal.lunar_text().as_str(), "腊月初二");
    }

    #[test]
    fn sub_minute_steps_report_no_change() {
        let mut cal = Calendar::new();
        assert_eq!(cal.advance_clock(30), Tick::Unchanged);
        assert_eq!(cal.second, 30);
    }

    #[test]
    fn minute_and_ten_minute_boundaries() {
        let mut cal = Calendar::new();
        assert_eq!(cal.advance_clock(60), Tick::Minute);
        assert_eq!((cal.minute, cal.second), (1, 0));

        cal.minute = 9;
        assert_eq!(cal.advance_clock(60), Tick::TenMinute);
        assert_eq!(cal.minute, 10);
    }

    #[test]
    fn one_minute_boundary_per_call() {
        let mut cal = Calendar::new();
        cal.second = 59;
        assert_eq!(cal.advance_clock(120), Tick::Minute);
        // The surplus stays banked in the seconds field.
        assert_eq!((cal.minute, cal.second), (1, 119));
        assert_eq!(cal.advance_clock(0), Tick::Minute);
        assert_eq!((cal.minute, cal.second), (2, 59));
    }

    #[test]
    fn hour_and_day_rollover() {
        let mut cal = Calendar::new();
        cal.hour = 10;
        cal.minute = 59;
        assert_eq!(cal.advance_clock(60), Tick::Hour);
        assert_eq!((cal.hour, cal.minute), (11, 0));

        cal.hour = 23;
        cal.minute = 59;
        assert_eq!(cal.advance_clock(60), Tick::Day);
        assert_eq!(cal.hour, 0);
        assert_eq!((cal.month, cal.day, cal.weekday), (0, 1, 4));
        // Lunar followed along: 腊月初二 -> 初三.
        assert_eq!(cal.lunar_text().as_str(), "腊月初三");
    }

    #[test]
    fn month_and_year_rollover() {
        let mut cal = Calendar::new();
        cal.year = 2025;
        cal.month = 11;
        cal.day = 30;
        cal.advance_date();
        assert_eq!((cal.year, cal.month, cal.day), (2026, 0, 0));
    }

    #[test]
    fn time_record_applies_all_fields() {
        let mut cal = Calendar::new();
        assert_eq!(cal.calibration_minutes(), None);

        // 2025-06-01 08:30:15, Sunday, lunar year index 5 month 4 day 6.
        let record = [0x91, 0xE9, 0x07, 6, 1, 8, 30, 15, 0, 5, 4, 6];
        assert!(cal.apply_time_record(&record));

        assert_eq!((cal.year, cal.month, cal.day), (2025, 5, 0));
        assert_eq!((cal.hour, cal.minute, cal.second), (8, 30, 15));
        assert_eq!(cal.weekday, 0);
        assert_eq!(cal.lunar(), Some(&LunarDate::new(5, 4, 5)));
        assert_eq!(cal.calibration_minutes(), Some(0));
        // 2025-06-01 is Children's Day.
        assert_eq!(cal.holiday_text(), Some("儿童节"));

        assert!(!cal.apply_time_record(&record[..8]));
    }

    #[test]
    fn malformed_lunar_record_freezes_the_lunar_display() {
        // A lunar month past the table width must not make later spelling
        // or holiday lookups index out of bounds.
        let mut cal = Calendar::new();
        let record = [0x91, 0xE9, 0x07, 6, 1, 8, 30, 15, 0, 5, 13, 6];
        assert!(cal.apply_time_record(&record));
        assert_eq!(cal.lunar(), None);
        assert!(cal.lunar_text().is_empty());
        // The Gregorian fields still applied.
        assert_eq!((cal.year, cal.month, cal.day), (2025, 5, 0));

        // Same for a day past any month length.
        let record = [0x91, 0xE9, 0x07, 6, 1, 8, 30, 15, 0, 5, 4, 200];
        assert!(cal.apply_time_record(&record));
        assert_eq!(cal.lunar(), None);
        assert!(cal.lunar_text().is_empty());
    }

    #[test]
    fn a_year_of_day_steps_returns_to_the_same_date() {
        let mut cal = Calendar::new();
        for _ in 0..365 {
            cal.advance_date();
        }
        assert_eq!((cal.year, cal.month, cal.day), (2026, 0, 0));
        assert_eq!(cal.weekday, (3 + 365 % 7) % 7);

        let mut cal = Calendar::new();
        cal.year = 2024;
        cal.weekday = 1;
        for _ in 0..366 {
            cal.advance_date();
        }
        assert_eq!((cal.year, cal.month, cal.day), (2025, 0, 0));
        assert_eq!(cal.weekday, (1 + 366 % 7) % 7);
    }

    #[test]
    fn calibration_counts_minutes_since_time_set() {
        let mut cal = Calendar::new();
        let record = [0x91, 0xE9, 0x07, 1, 1, 0, 0, 0, 3, 4, 11, 2];
        assert!(cal.apply_time_record(&record));

        cal.advance_clock(60);
        cal.advance_clock(60);
        assert_eq!(cal.calibration_minutes(), Some(2));

        cal.reset_calibration();
        assert_eq!(cal.calibration_minutes(), Some(0));
    }

    #[test]
    fn fixed_gregorian_holiday_matches() {
        let mut cal = Calendar::new();
        cal.month = 9;
        cal.day = 0;
        cal.resolve_holidays();
        assert_eq!(cal.holiday_text(), Some("国庆节"));
    }

    #[test]
    fn lunar_last_day_rule_matches_short_and_long_months() {
        let mut cal = Calendar::new();
        // 2020's last lunar month (index 11 of year 0) has 30 days, so its
        // eve falls on day index 29.
        cal.lunar = LunarDate::new(0, 11, 29);
        assert_eq!(cal.lunar.month_days(), Ok(30));
        cal.month = 1;
        cal.day = 10;
        cal.resolve_holidays();
        assert_eq!(cal.holiday_text(), Some("除夕"));
    }

    #[test]
    fn nth_weekday_rule_decodes_week_and_day() {
        let mut cal = Calendar::new();
        // Second week of May, matching weekday slot of the rule byte.
        cal.month = 4;
        cal.day = 9;
        cal.weekday = 6;
        cal.resolve_holidays();
        assert_eq!(cal.holiday_text(), Some("母亲节"));

        // Same weekday one week earlier does not match.
        cal.day = 2;
        cal.resolve_holidays();
        assert_eq!(cal.holiday_text(), None);
    }

    #[test]
    fn third_simultaneous_holiday_is_dropped() {
        let mut cal = Calendar::new();
        // Construct a day where a lunar festival, a fixed date, and an
        // Nth-weekday rule all match: 护士节 (May 12) with 端午节 on the
        // lunar side and the May weekly rule satisfied.
        cal.month = 4;
        cal.day = 11;
        cal.weekday = 6;
        cal.lunar = LunarDate::new(1, 4, 4);
        cal.resolve_holidays();

        // The lunar festival matched first, then shuffled into the free
        // solar-term slot when the fixed date matched; the weekly rule
        // found both slots taken.
        assert_eq!(cal.solar_term_text(), Some("端午节"));
        assert_eq!(cal.holiday_text(), Some("护士节"));
    }

    #[test]
    fn lunar_window_exit_freezes_lunar_display() {
        let mut cal = Calendar::new();
        cal.lunar = LunarDate::new(31, 11, 28);
        // Step days until the lunar advance fails.
        for _ in 0..5 {
            cal.advance_date();
        }
        assert_eq!(cal.lunar(), None);
        assert!(cal.lunar_text().is_empty());
        // The Gregorian side keeps running.
        assert_eq!(cal.day, 5);
    }

    #[test]
    fn lunar_day_spelling_special_cases() {
        let mut cal = Calendar::new();
        let cases: [(u8, u8, &str); 6] = [
            (11, 0, "腊月初一"),
            (11, 9, "腊月初十"),
            (11, 14, "腊月十五"),
            (11, 19, "腊月二十"),
            (11, 29, "腊月三十"),
            (0, 0, "正月初一"),
        ];
        for (month, day, expected) in cases {
            cal.lunar = LunarDate::new(4, month, day);
            assert_eq!(cal.lunar_text().as_str(), expected, "{expected}");
        }
    }
}
