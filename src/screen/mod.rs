//! Screen composition: turns calendar/clock state into plane buffers.

mod icons;

use core::fmt::Write;

use heapless::String;
use inkplane::{Canvas, CanvasError, Color};
use log::debug;

use crate::calendar::{self, Calendar, Tick, WEEKDAY_NAMES};
use crate::font::{self, FontSet, Glyph, builtin};
use crate::layout::{self, LAYOUTS};

/// Display modes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    /// Pairing code with captions.
    Qr,
    /// Time, date, lunar date, solar term, holiday.
    Clock,
    /// Month grid with today highlighted.
    Calendar,
    /// Remote-drawn clock face placeholder.
    CustomClock,
    /// Battery-empty mark.
    LowBattery,
}

/// Refresh intensity the panel driver should use for the composed frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RefreshClass {
    Full,
    Fast,
    Flying,
    Gray,
}

/// Owner of the render state: canvas, fonts, calendar, layout, and mode.
///
/// Composition never touches the panel; callers take [`Device::planes`]
/// and the returned [`RefreshClass`] to their panel driver.
pub struct Device {
    pub(crate) canvas: Canvas,
    pub(crate) fonts: FontSet,
    calendar: Calendar,
    layout: usize,
    mode: Screen,
    default_mode: Screen,
    pub(crate) battery_mv: u32,
    pub(crate) device_id: String<20>,
    h24: bool,
    fixed: bool,
    link_up: bool,
    last_grid_hour: u32,
}

impl Device {
    /// Creates a device for the given panel resolution with the built-in
    /// font tables. Unsupported resolutions render with the first layout's
    /// anchors.
    pub fn new(width: u32, height: u32, has_accent: bool) -> Result<Self, CanvasError> {
        Self::with_fonts(width, height, has_accent, &builtin::FONTS)
    }

    /// [`Self::new`] with a caller-supplied font list replacing the
    /// built-in tables; firmware links its full (CJK included) tables in
    /// this way. Index 0 is the fallback font, and the layout font ids
    /// index into the list.
    pub fn with_fonts(
        width: u32,
        height: u32,
        has_accent: bool,
        fonts: &'static [font::Font],
    ) -> Result<Self, CanvasError> {
        Ok(Self {
            canvas: Canvas::new(width, height, has_accent)?,
            fonts: FontSet::new(fonts),
            calendar: Calendar::new(),
            layout: layout::select_layout(width, height).unwrap_or(0),
            mode: Screen::Clock,
            default_mode: Screen::Clock,
            battery_mv: 0,
            device_id: String::new(),
            h24: true,
            fixed: false,
            link_up: false,
            last_grid_hour: 0,
        })
    }

    pub fn mode(&self) -> Screen {
        self.mode
    }

    pub fn default_mode(&self) -> Screen {
        self.default_mode
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn battery_millivolts(&self) -> u32 {
        self.battery_mv
    }

    pub fn set_battery_millivolts(&mut self, mv: u32) {
        self.battery_mv = mv;
    }

    pub fn set_link_up(&mut self, up: bool) {
        self.link_up = up;
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Active layout resolution.
    pub fn resolution(&self) -> (u32, u32) {
        let lt = &LAYOUTS[self.layout];
        (lt.width, lt.height)
    }

    /// Sets the advertised device name shown on the pairing screen,
    /// truncated to the buffer capacity.
    pub fn set_device_id(&mut self, id: &str) {
        self.device_id.clear();
        for ch in id.chars() {
            if self.device_id.push(ch).is_err() {
                break;
            }
        }
    }

    /// Plane export: `(primary, accent)` byte slices of the active window.
    pub fn planes(&self) -> (&[u8], &[u8]) {
        (self.canvas.primary(), self.canvas.accent())
    }

    /// Switches the display mode without composing.
    pub fn set_mode(&mut self, mode: Screen) {
        self.mode = mode;
    }

    /// Rotates the default mode Clock -> Calendar -> CustomClock and
    /// composes the new screen.
    pub fn cycle_default_mode(&mut self) -> Option<RefreshClass> {
        self.default_mode = match self.default_mode {
            Screen::Clock => Screen::Calendar,
            Screen::Calendar => Screen::CustomClock,
            _ => Screen::Clock,
        };
        self.mode = self.default_mode;
        debug!("default mode -> {:?}", self.default_mode);
        self.compose()
    }

    /// Advances the clock and composes when anything display-visible
    /// changed. `None` means the panel can stay asleep.
    ///
    /// On the clock screen the refresh intensity follows the tick
    /// magnitude: minutes ride a flying refresh, ten-minute marks a fast
    /// one, and hour or day changes pay for a full repaint.
    pub fn tick(&mut self, delta_seconds: u32) -> Option<RefreshClass> {
        let tick = self.calendar.advance_clock(delta_seconds);
        if tick == Tick::Unchanged {
            return None;
        }

        let class = self.compose()?;
        if self.mode != Screen::Clock {
            return Some(class);
        }

        Some(if tick >= Tick::Hour {
            RefreshClass::Full
        } else if tick >= Tick::TenMinute {
            RefreshClass::Fast
        } else {
            RefreshClass::Flying
        })
    }

    /// Applies a time-set record, snaps back to the clock screen, and
    /// composes with a fast refresh.
    pub fn apply_time_record(&mut self, record: &[u8]) -> Option<RefreshClass> {
        if !self.calendar.apply_time_record(record) {
            return None;
        }
        self.mode = Screen::Clock;
        self.compose().map(|_| RefreshClass::Fast)
    }

    /// Toggles 12h/24h time display and recomposes the clock screen.
    pub fn toggle_h24(&mut self) -> Option<RefreshClass> {
        self.h24 = !self.h24;
        self.mode = Screen::Clock;
        self.compose().map(|_| RefreshClass::Fast)
    }

    /// Freezes/unfreezes the screen. While frozen, composition is
    /// suppressed; entering the frozen state stamps a lock mark over the
    /// current frame for a light refresh.
    pub fn toggle_fixed(&mut self) -> Option<RefreshClass> {
        self.fixed = !self.fixed;
        if !self.fixed {
            return None;
        }

        let h = LAYOUTS[self.layout].height as i32;
        self.canvas.fill_rect(5, h - 5, 25, h - 1, Color::Black);
        self.canvas.rect(10, h - 7, 20, h - 5, Color::Black);
        Some(RefreshClass::Flying)
    }

    /// Clears both planes and draws the current mode.
    ///
    /// Returns the refresh class to use, or `None` when the screen is
    /// frozen and must not change.
    pub fn compose(&mut self) -> Option<RefreshClass> {
        if self.fixed {
            return None;
        }
        self.canvas.clear();

        Some(match self.mode {
            Screen::Qr => {
                self.draw_qr();
                RefreshClass::Fast
            }
            Screen::Clock => {
                self.draw_clock();
                RefreshClass::Full
            }
            Screen::Calendar => self.draw_calendar_grid(),
            Screen::CustomClock => {
                self.draw_custom_placeholder();
                RefreshClass::Full
            }
            Screen::LowBattery => {
                self.canvas.blit_qr(60, 10, 4, &icons::LOW_BATTERY);
                RefreshClass::Full
            }
        })
    }

    fn draw_clock(&mut self) {
        let lt = &LAYOUTS[self.layout];
        let a = &lt.anchors;
        let cal = &self.calendar;
        let mut buf: String<40> = String::new();

        self.fonts.select(lt.font_char);
        let _ = write!(buf, "{}.{:03}V", self.battery_mv / 1000, self.battery_mv % 1000);
        self.fonts
            .draw_text(&mut self.canvas, a.power.0, a.power.1, &buf, Color::Black);

        if self.link_up
            && let Some(glyph) = Glyph::parse(&builtin::ICON_LINK)
        {
            font::draw_glyph_record(&mut self.canvas, a.link.0, a.link.1, &glyph, 1, Color::Black);
        }

        // Large time digits.
        self.fonts.select(lt.font_digits);
        buf.clear();
        let mut afternoon = false;
        if self.h24 {
            let _ = write!(buf, "{:02}:{:02}", cal.hour, cal.minute);
        } else {
            let mut h = cal.hour;
            if h >= 12 {
                if h > 12 {
                    h -= 12;
                }
                afternoon = true;
            } else if h == 0 {
                h = 12;
            }
            let _ = write!(buf, "{:2}:{:02}", h, cal.minute);
        }
        self.fonts
            .draw_text(&mut self.canvas, a.time.0, a.time.1, &buf, Color::Black);

        self.fonts.select(lt.font_char);
        if !self.h24 {
            let meridiem = if afternoon { "下午" } else { "上午" };
            self.fonts.draw_text(
                &mut self.canvas,
                a.meridiem.0,
                a.meridiem.1,
                meridiem,
                Color::Black,
            );
        }

        buf.clear();
        let _ = write!(
            buf,
            "{:4}年{:2}月{:2}日   星期{}",
            cal.year,
            cal.month + 1,
            cal.day + 1,
            WEEKDAY_NAMES[cal.weekday as usize % 7]
        );
        self.fonts
            .draw_text(&mut self.canvas, a.date.0, a.date.1, &buf, Color::Black);

        let lunar = self.calendar.lunar_text();
        self.fonts
            .draw_text(&mut self.canvas, a.lunar.0, a.lunar.1, &lunar, Color::Black);

        if let Some(term) = self.calendar.solar_term_text() {
            self.fonts.draw_text_filled(
                &mut self.canvas,
                a.solar_term.0,
                a.solar_term.1,
                term,
                Color::White,
            );
        }
        if let Some(holiday) = self.calendar.holiday_text() {
            self.fonts.draw_text(
                &mut self.canvas,
                a.holiday.0,
                a.holiday.1,
                holiday,
                Color::Black,
            );
        }
    }

    fn draw_calendar_grid(&mut self) -> RefreshClass {
        let class = if self.last_grid_hour != self.calendar.hour {
            self.last_grid_hour = self.calendar.hour;
            RefreshClass::Fast
        } else {
            RefreshClass::Flying
        };

        let lt = &LAYOUTS[self.layout];
        let max_x = lt.width as i32;
        let max_y = lt.height as i32;
        let cal = &self.calendar;
        let mut buf: String<24> = String::new();

        // Left panel: year/month, big day-of-month, weekday.
        self.fonts.select(lt.font_char);
        let _ = write!(buf, "{}年{}月", cal.year - 2000, cal.month + 1);
        self.fonts
            .draw_text(&mut self.canvas, 10, 5, &buf, Color::Black);

        self.fonts.select(4);
        self.fonts.set_scale(3);
        buf.clear();
        let _ = write!(buf, "{}", cal.day + 1);
        self.fonts
            .draw_text(&mut self.canvas, 15, 25, &buf, Color::Black);
        self.fonts.set_scale(1);

        buf.clear();
        let _ = write!(buf, "星期{}", WEEKDAY_NAMES[cal.weekday as usize % 7]);
        self.fonts
            .draw_text(&mut self.canvas, 15, 80, &buf, Color::Black);

        let grid_x = 80;
        self.canvas.vline(grid_x - 5, 5, max_y - 10, Color::Black);

        // Right panel: weekday header plus the month grid.
        let col_w = (max_x - grid_x) / 7;
        let row_h = 16;
        let grid_y = 2;

        for (i, name) in WEEKDAY_NAMES.iter().enumerate() {
            let offset_x = (col_w - 16) / 2;
            self.fonts.draw_text(
                &mut self.canvas,
                grid_x + i as i32 * col_w + offset_x,
                grid_y,
                name,
                Color::Black,
            );
        }
        self.canvas
            .hline(grid_y + row_h + 2, grid_x, max_x - 2, Color::Black);

        let start_wday = (cal.weekday + 7 - cal.day % 7) % 7;
        let days = calendar::days_in_month(cal.year, cal.month);

        for day in 0..days {
            let col = ((start_wday + day) % 7) as i32;
            let row = 1 + ((start_wday + day) / 7) as i32;

            let x = grid_x + col * col_w;
            let y = grid_y + row * row_h + 6;

            buf.clear();
            let _ = write!(buf, "{}", day + 1);
            let text_offset_x = if day + 1 < 10 {
                (col_w - 8) / 2
            } else {
                (col_w - 16) / 2
            };

            self.fonts
                .draw_text(&mut self.canvas, x + text_offset_x, y, &buf, Color::Black);
            if day == cal.day {
                self.canvas.fill_rect(
                    x + text_offset_x - 1,
                    y,
                    x + text_offset_x + 17,
                    y + 16,
                    Color::Swap,
                );
            }
        }

        // Status line.
        self.fonts.select(lt.font_char);
        buf.clear();
        let _ = write!(
            buf,
            "| {:02}:{:02} | {}mv |",
            self.calendar.hour, self.calendar.minute, self.battery_mv
        );
        self.fonts
            .draw_text(&mut self.canvas, 5, max_y - 16, &buf, Color::Black);

        class
    }

    fn draw_qr(&mut self) {
        let lt = &LAYOUTS[self.layout];
        let max_x = lt.width as i32;
        let max_y = lt.height as i32;

        self.canvas.blit_qr(5, 56, 2, &icons::QR_PAIRING);
        self.canvas.hline(20, 0, max_x, Color::Black);

        self.fonts.select(lt.font_char);
        self.fonts.set_scale(2);
        self.fonts
            .draw_text_filled(&mut self.canvas, 1, 0, "Scan\nto pair", Color::White);
        self.fonts.set_scale(1);

        self.canvas.line(0, max_y, max_x, 0, Color::Swap);
        self.fonts
            .draw_text_filled(&mut self.canvas, 0, 0, &self.device_id, Color::Swap);
    }

    fn draw_custom_placeholder(&mut self) {
        let lt = &LAYOUTS[self.layout];
        self.fonts.select(4);
        self.fonts.draw_text_filled(
            &mut self.canvas,
            5,
            5,
            "CUSTOM CLOCK\nIN DEVELOPMENT",
            Color::White,
        );
        self.fonts.select(lt.font_char);
    }
}
