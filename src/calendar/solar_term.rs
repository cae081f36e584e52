//! Solar-term (节气) detection.
//!
//! Terms are located as second offsets from the first term of 2020. The
//! per-year drift constant is the fractional-day remainder of a tropical
//! year, rounded up slightly to absorb accumulated error over the
//! supported window; whole leap days are subtracted separately.

/// Seconds into 2020 of the first term (小寒).
const FIRST_TERM_2020: i32 = 451_804;

/// Tropical-year drift in seconds per year beyond 365 days.
const YEAR_DRIFT: i32 = 20_950;

const SECONDS_PER_DAY: i32 = 86_400;

/// Second offsets of the 24 terms from the year's first term.
static TERM_OFFSETS: [i32; 24] = [
    0, 1_272_283, 2_547_462, 3_828_568, 5_117_483, 6_416_376, 7_726_093,
    9_047_327, 10_379_235, 11_721_860, 13_072_410, 14_428_379, 15_787_551,
    17_145_937, 18_501_082, 19_850_188, 21_190_911, 22_520_708, 23_839_844,
    25_146_961, 26_443_845, 27_730_671, 29_010_666, 30_284_551,
];

pub static TERM_NAMES: [&str; 24] = [
    "小寒", "大寒", "立春", "水月", "惊蛰", "春分", "清明", "谷雨",
    "立夏", "小满", "芒种", "夏至", "小暑", "大暑", "立秋", "处暑",
    "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

/// Returns the index of the solar term falling on the given date, if any.
///
/// `month` and `day` are 0-based. Accurate over the 2020-2052 window.
pub fn solar_term(year: i32, month: u32, day: u32) -> Option<usize> {
    let target = super::day_of_year(year, month, day) as i32;

    let y = year - 2020;
    let leap_days = if y != 0 { (y - 1) / 4 + 1 } else { 0 };
    let first_term = FIRST_TERM_2020 + YEAR_DRIFT * y - leap_days * SECONDS_PER_DAY;

    TERM_OFFSETS
        .iter()
        .position(|&offset| (first_term + offset) / SECONDS_PER_DAY == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_term_of_the_base_year() {
        // 2020-01-06.
        assert_eq!(solar_term(2020, 0, 5), Some(0));
        assert_eq!(solar_term(2020, 0, 4), None);
        assert_eq!(solar_term(2020, 0, 6), None);
    }

    #[test]
    fn winter_solstice_of_the_base_year() {
        // 2020-12-21.
        assert_eq!(solar_term(2020, 11, 20), Some(23));
    }

    #[test]
    fn drift_carries_across_years() {
        // 2025-01-05.
        assert_eq!(solar_term(2025, 0, 4), Some(0));
        assert_eq!(solar_term(2025, 0, 0), None);
    }

    #[test]
    fn every_year_in_window_yields_24_terms() {
        for year in 2020..=2051 {
            let mut count = 0;
            for month in 0..12 {
                for day in 0..super::super::days_in_month(year, month) {
                    if solar_term(year, month, day).is_some() {
                        count += 1;
                    }
                }
            }
            assert_eq!(count, 24, "year {year}");
        }
    }
}
