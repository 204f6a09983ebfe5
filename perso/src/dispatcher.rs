//! The keymap hooks called by the host firmware.
//!
//! The host calls [`Dispatcher::keyboard_post_init`] once at start, then
//! [`Dispatcher::process_record`] before its own handling of every key event, [`Dispatcher::post_process_record`] after it, [`Dispatcher::layer_state_set`]
//! on every layer change and [`Dispatcher::pointing_device_task`] before every pointing
//! report is sent.

use embassy_time::Instant;

use crate::config::PersoConfig;
use crate::event::KeyEvent;
use crate::host::Host;
use crate::keymap::{LayerState, update_tri_layer_state};
use crate::mouse::{MouseState, PointingReport};
use crate::pointing::set_cpi_confirmed;
use crate::types::action::{Action, CustomKey};
use crate::types::mouse_button::MouseButtons;
use crate::unicode::send_unicode;

pub struct Dispatcher {
    pub(crate) config: PersoConfig,
    pub(crate) mouse: MouseState,
}

impl Dispatcher {
    pub fn new(config: PersoConfig) -> Self {
        Self {
            config,
            mouse: MouseState::default(),
        }
    }

    pub fn config(&self) -> &PersoConfig {
        &self.config
    }

    pub fn mouse_state(&self) -> &MouseState {
        &self.mouse
    }

    /// Start-up: run the sensor at the default resolution
    pub fn keyboard_post_init<H: Host>(&mut self, host: &mut H) {
        let snipe = self.config.pointing.snipe;
        if let Err(e) = set_cpi_confirmed(host, snipe.default_cpi, &snipe) {
            error!("Init: sensor resolution not set: {:?}", e);
        }
    }

    /// Derive the effective layer state from the requested one
    pub fn layer_state_set(&self, state: LayerState) -> LayerState {
        match self.config.behavior.tri_layer {
            Some([l1, l2, l3]) => update_tri_layer_state(state, l1, l2, l3),
            None => state,
        }
    }

    /// Handle the custom keys.
    ///
    /// Always returns `true`: the host continues with its default handling of the event.
    pub fn process_record<H: Host>(&mut self, action: Action, event: KeyEvent, host: &mut H) -> bool {
        let Action::Custom(custom) = action else {
            return true;
        };

        match custom {
            CustomKey::RgbToggle => {
                if event.pressed {
                    host.toggle_noeeprom();
                }
            }
            CustomKey::MouseScroll => {
                self.mouse.scroll.scrolling = event.pressed;
            }
            CustomKey::MouseSnipe => {
                let snipe = self.config.pointing.snipe;
                let target = if event.pressed {
                    snipe.snipe_cpi
                } else {
                    snipe.default_cpi
                };
                if let Err(e) = set_cpi_confirmed(host, target, &snipe) {
                    error!("Snipe: sensor resolution not changed: {:?}", e);
                }
            }
            CustomKey::Unicode(c) => {
                if event.pressed {
                    send_unicode(host, c, &self.config.unicode);
                }
            }
        }

        true
    }

    /// Refresh the held mouse buttons after a mouse button key was handled by the host
    pub fn post_process_record<H: Host>(&mut self, action: Action, _event: KeyEvent, host: &mut H) {
        if action.is_mouse_button() {
            self.mouse.buttons = MouseButtons::from_bits(host.report().buttons);
            debug!("Mouse buttons: {:#x}", self.mouse.buttons.into_bits());
        }
    }

    /// Filter the pending pointing report, `layers` is the effective layer state
    pub fn pointing_device_task(&mut self, report: PointingReport, layers: LayerState, now: Instant) -> PointingReport {
        self.mouse.filter(report, layers, now, &self.config.pointing)
    }
}
