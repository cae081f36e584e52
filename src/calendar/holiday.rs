//! Static holiday table.
//!
//! `month` bit 7 marks a lunar-calendar date and bit 6 "last day of that
//! lunar month"; the low nibble is the 1-based month. For Gregorian
//! entries, `day` bit 7 selects an Nth-weekday rule: bits 5..4 carry the
//! 0-based week ordinal and the low bits the weekday, both decoded by the
//! resolver.

pub const LUNAR: u8 = 0x80;
pub const LUNAR_LAST_DAY: u8 = 0xC0;
pub const NTH_WEEKDAY: u8 = 0x80;

pub struct HolidayEntry {
    pub name: &'static str,
    pub month: u8,
    pub day: u8,
}

const fn entry(name: &'static str, month: u8, day: u8) -> HolidayEntry {
    HolidayEntry { name, month, day }
}

pub static HOLIDAYS: [HolidayEntry; 47] = [
    // Lunar-calendar dates.
    entry("腊八", LUNAR | 12, 8),
    entry("小年", LUNAR | 12, 23),
    entry("除夕", LUNAR_LAST_DAY | 12, 30),
    entry("春节", LUNAR | 1, 1),
    entry("元宵节", LUNAR | 1, 15),
    entry("龙抬头", LUNAR | 2, 2),
    entry("寒食节", LUNAR | 3, 3),
    entry("端午节", LUNAR | 5, 5),
    entry("七夕节", LUNAR | 7, 7),
    entry("中元节", LUNAR | 7, 15),
    entry("中秋节", LUNAR | 8, 15),
    entry("重阳节", LUNAR | 9, 9),
    entry("下元节", LUNAR | 10, 15),
    // Fixed Gregorian dates.
    entry("元旦", 1, 1),
    entry("湿地日", 2, 2),
    entry("情人节", 2, 14),
    entry("妇女节", 3, 8),
    entry("植树节", 3, 12),
    entry("权益日", 3, 15),
    entry("愚人节", 4, 1),
    entry("读书日", 4, 23),
    entry("航天日", 4, 24),
    entry("劳动节", 5, 1),
    entry("青年节", 5, 4),
    entry("护士节", 5, 12),
    entry("儿童节", 6, 1),
    entry("环境日", 6, 5),
    entry("遗产日", 6, 8),
    entry("建党节", 7, 1),
    entry("建军节", 8, 1),
    entry("抗战日", 9, 3),
    entry("教师节", 9, 10),
    entry("安全日", 9, 15),
    entry("烈士日", 9, 30),
    entry("国庆节", 10, 1),
    entry("程序员节", 10, 24),
    entry("万圣节", 10, 31),
    entry("消防日", 11, 9),
    entry("记者节", 11, 8),
    entry("光棍节", 11, 11),
    entry("宪法日", 12, 4),
    entry("志愿日", 12, 5),
    entry("公祭日", 12, 13),
    entry("圣诞节", 12, 25),
    // Nth-weekday rules.
    entry("母亲节", 5, NTH_WEEKDAY | 0x17),
    entry("父亲节", 6, NTH_WEEKDAY | 0x27),
    entry("感恩节", 11, NTH_WEEKDAY | 0x24),
];
