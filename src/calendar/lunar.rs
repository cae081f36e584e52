//! Lunar (agricultural) calendar arithmetic over a 32-year table window.
//!
//! Each table entry packs one lunar year: bits 15..4 flag 30-day months
//! (bit `0x8000 >> month`), bits 3..0 hold the leap-month index (0 = no
//! leap month). A separate per-year bitmask marks years whose leap month
//! has 30 days.

/// Gregorian year of table index 0.
pub const YEAR_BASE: i32 = 2020;

/// Leap-month marker carried in the high bit of the month field.
pub const LEAP_FLAG: u8 = 0x80;

/// Per-year month-length and leap-month packing, 2020 through 2051.
static YEAR_INFO: [u16; 32] = [
    0x07954, 0x06AA0, 0x0AD50, 0x05B52, 0x04B60, 0x0A6E6, 0x0A4E0, 0x0D260,
    0x0EA65, 0x0D530, 0x05AA0, 0x076A3, 0x096D0, 0x04AFB, 0x04AD0, 0x0A4D0,
    0x0D0B6, 0x0D250, 0x0D520, 0x0DD45, 0x0B5A0, 0x056D0, 0x055B2, 0x049B0,
    0x0A577, 0x0A4B0, 0x0AA50, 0x0B255, 0x06D20, 0x0ADA0, 0x04B63, 0x09370,
];

/// Bit per table index: set when that year's leap month has 30 days.
const LEAP_MONTH_BIG: u32 = 0x4801_0000;

/// The requested lunar date falls outside the supported table window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LunarOutOfRange;

/// A lunar calendar date.
///
/// `month` is 0-based (0 = first month, 11 = last) with [`LEAP_FLAG`] set
/// for leap months; `day` is 0-based (0 = first day of the month).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LunarDate {
    pub year_index: u8,
    pub month: u8,
    pub day: u8,
}

impl LunarDate {
    pub const fn new(year_index: u8, month: u8, day: u8) -> Self {
        Self {
            year_index,
            month,
            day,
        }
    }

    /// Year packing with the 30-day-leap-month flag folded into bit 16.
    fn year_info(&self) -> Result<u32, LunarOutOfRange> {
        let index = usize::from(self.year_index);
        let base = YEAR_INFO.get(index).copied().ok_or(LunarOutOfRange)?;

        let mut info = u32::from(base);
        if LEAP_MONTH_BIG & (1 << index) != 0 {
            info |= 0x1_0000;
        }
        Ok(info)
    }

    /// Length of the current month in days (29 or 30).
    pub fn month_days(&self) -> Result<u32, LunarOutOfRange> {
        let info = self.year_info()?;

        let big = if self.month & LEAP_FLAG != 0 {
            info & 0x1_0000 != 0
        } else {
            info & (0x8000 >> (self.month & 0x7F)) != 0
        };

        Ok(if big { 30 } else { 29 })
    }

    /// Advances the date by one day, rolling months, the leap month, and
    /// the year. Fails without modifying `self` when the step would leave
    /// the table window.
    pub fn advance(&mut self) -> Result<(), LunarOutOfRange> {
        let info = self.year_info()?;
        let month_days = self.month_days()?;

        if u32::from(self.day) + 1 < month_days {
            self.day += 1;
            return Ok(());
        }

        let mut leap = self.month & LEAP_FLAG;
        let mut month = (self.month & 0x7F) + 1;
        let mut year_index = self.year_index;

        // A month is followed by its leap twin when the year has one.
        if leap == 0 && u32::from(month) == info & 0x0F {
            leap = LEAP_FLAG;
            month -= 1;
        } else {
            leap = 0;
        }

        if month == 12 {
            month = 0;
            year_index += 1;
            if usize::from(year_index) >= YEAR_INFO.len() {
                return Err(LunarOutOfRange);
            }
        }

        self.day = 0;
        self.month = leap | month;
        self.year_index = year_index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths_follow_the_year_packing() {
        // 2020 (index 0): 0x07954. Month 0 -> bit 15 clear -> 29 days,
        // month 3 -> bit 12 set -> 30 days.
        assert_eq!(LunarDate::new(0, 0, 0).month_days(), Ok(29));
        assert_eq!(LunarDate::new(0, 3, 0).month_days(), Ok(30));
    }

    #[test]
    fn every_month_length_in_the_window_is_29_or_30() {
        for year_index in 0..32u8 {
            for month in 0..12u8 {
                let plain = LunarDate::new(year_index, month, 0).month_days();
                assert!(
                    matches!(plain, Ok(29) | Ok(30)),
                    "year {year_index} month {month}"
                );

                let leap = LunarDate::new(year_index, LEAP_FLAG | month, 0).month_days();
                assert!(
                    matches!(leap, Ok(29) | Ok(30)),
                    "year {year_index} leap month {month}"
                );
            }
        }
    }

    #[test]
    fn plain_day_step_keeps_the_month() {
        let mut d = LunarDate::new(0, 0, 5);
        assert_eq!(d.advance(), Ok(()));
        assert_eq!(d, LunarDate::new(0, 0, 6));
    }

    #[test]
    fn leap_month_follows_its_plain_twin() {
        // 2020's leap month index is 4, so the fourth month (index 3)
        // repeats with the leap flag set.
        let mut d = LunarDate::new(0, 3, 29);
        assert_eq!(d.advance(), Ok(()));
        assert_eq!(d, LunarDate::new(0, LEAP_FLAG | 3, 0));

        // The leap month itself is short (29 days) in 2020 and rolls into
        // the plain fifth month.
        assert_eq!(d.month_days(), Ok(29));
        let mut d = LunarDate::new(0, LEAP_FLAG | 3, 28);
        assert_eq!(d.advance(), Ok(()));
        assert_eq!(d, LunarDate::new(0, 4, 0));
    }

    #[test]
    fn year_rollover_resets_to_first_month() {
        let mut d = LunarDate::new(0, 11, 0);
        let last = d.month_days().unwrap() - 1;
        d.day = last as u8;

        assert_eq!(d.advance(), Ok(()));
        assert_eq!(d, LunarDate::new(1, 0, 0));
    }

    #[test]
    fn stepping_past_the_table_window_fails_unchanged() {
        let mut d = LunarDate::new(31, 11, 0);
        let last = (d.month_days().unwrap() - 1) as u8;
        d.day = last;

        assert_eq!(d.advance(), Err(LunarOutOfRange));
        assert_eq!(d, LunarDate::new(31, 11, last));

        let mut oob = LunarDate::new(32, 0, 0);
        assert_eq!(oob.month_days(), Err(LunarOutOfRange));
        assert_eq!(oob.advance(), Err(LunarOutOfRange));
    }
}
