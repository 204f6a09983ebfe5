//! Pointing report filtering: motion gating by layer, held buttons and drag scrolling.

use embassy_time::Instant;
use serde::{Deserialize, Serialize};
use usbd_hid::descriptor::MouseReport;

use crate::config::PointingConfig;
use crate::keymap::LayerState;
use crate::types::mouse_button::MouseButtons;

/// Pointing report as produced by the sensor driver, before it is sent to the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointingReport {
    pub buttons: u8,
    pub x: i16,
    pub y: i16,
    /// Horizontal scroll
    pub h: i8,
    /// Vertical scroll
    pub v: i8,
}

impl From<PointingReport> for MouseReport {
    fn from(report: PointingReport) -> Self {
        MouseReport {
            buttons: report.buttons,
            x: report.x.clamp(i8::MIN as i16, i8::MAX as i16) as i8,
            y: report.y.clamp(i8::MIN as i16, i8::MAX as i16) as i8,
            wheel: report.v,
            pan: report.h,
        }
    }
}

/// State of drag scrolling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollState {
    /// The scroll key is held
    pub scrolling: bool,
    /// Time of the last scroll step
    pub last_scroll: Instant,
    /// Horizontal motion not turned into a scroll step yet
    pub pending_h: i32,
    /// Vertical motion not turned into a scroll step yet
    pub pending_v: i32,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            scrolling: false,
            last_scroll: Instant::from_ticks(0),
            pending_h: 0,
            pending_v: 0,
        }
    }
}

/// Mouse side state of the keymap
#[derive(Clone, Copy, Debug, Default)]
pub struct MouseState {
    pub scroll: ScrollState,
    /// Buttons held through mouse button keys
    pub buttons: MouseButtons,
}

impl MouseState {
    /// Filter a report before it is sent.
    ///
    /// - When the mouse layer is configured and off, motion is dropped.
    /// - Otherwise the held buttons are written into the report, and while scrolling the
    ///   motion is accumulated and turned into single scroll steps, at most one per
    ///   `interval`, on the axis that moved most. Ties go to the vertical axis.
    pub fn filter(
        &mut self,
        mut report: PointingReport,
        layers: LayerState,
        now: Instant,
        config: &PointingConfig,
    ) -> PointingReport {
        if config.mouse_layer.is_some_and(|l| !layers.is_on(l)) {
            report.x = 0;
            report.y = 0;
            return report;
        }

        // The host resets the buttons on every report, so held buttons are restored here
        report.buttons = self.buttons.into_bits();

        if self.scroll.scrolling {
            let scroll = &mut self.scroll;
            scroll.pending_h = scroll.pending_h.saturating_add(report.x as i32);
            scroll.pending_v = scroll.pending_v.saturating_add(report.y as i32);
            let pending = scroll.pending_h.unsigned_abs().max(scroll.pending_v.unsigned_abs());

            report.x = 0;
            report.y = 0;

            if now.saturating_duration_since(scroll.last_scroll) < config.scroll.interval
                || pending < config.scroll.threshold.unsigned_abs()
            {
                return report;
            }

            if scroll.pending_h.unsigned_abs() > scroll.pending_v.unsigned_abs() {
                report.h = if scroll.pending_h > 0 { -1 } else { 1 };
            } else {
                report.v = if scroll.pending_v > 0 { -1 } else { 1 };
            }
            debug!("Scroll step, h: {}, v: {}", report.h, report.v);

            scroll.last_scroll = now;
            scroll.pending_h = 0;
            scroll.pending_v = 0;
        }

        report
    }
}
