//! Services of the host firmware used by the keymap.
//!
//! The host owns the HID stack, the sensor driver and the lighting engine. The
//! dispatcher reaches them only through these traits, so it can run against a
//! real firmware or against a recording test double.

use embassy_time::{Duration, Instant};

use crate::mouse::PointingReport;
use crate::types::keycode::KeyCode;

/// Key injection into the host's HID report
pub trait KeyInjector {
    /// Add the key to the next report, until it is unregistered
    fn register_code(&mut self, keycode: KeyCode);

    fn unregister_code(&mut self, keycode: KeyCode);

    /// Press and release the key
    fn tap_code(&mut self, keycode: KeyCode) {
        self.register_code(keycode);
        self.unregister_code(keycode);
    }
}

/// The trackball sensor and its pending report
pub trait PointingDevice {
    /// Current resolution read back from the sensor
    fn cpi(&mut self) -> u16;

    /// Request a new resolution. The sensor may ignore it, check with [`PointingDevice::cpi`].
    fn set_cpi(&mut self, cpi: u16);

    /// The pointing report currently pending in the host
    fn report(&self) -> PointingReport;
}

pub trait Lighting {
    /// Toggle the RGB lighting without writing to persistent storage
    fn toggle_noeeprom(&mut self);
}

pub trait Clock {
    fn now(&self) -> Instant;

    fn elapsed(&self, since: Instant) -> Duration {
        self.now().saturating_duration_since(since)
    }
}

/// Everything the dispatcher needs from the host
pub trait Host: KeyInjector + PointingDevice + Lighting + Clock {}

impl<T: KeyInjector + PointingDevice + Lighting + Clock> Host for T {}

/// Clock backed by the embassy time driver
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
