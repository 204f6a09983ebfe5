use crate::config::PersoConfig;
use crate::dispatcher::Dispatcher;
use crate::event::KeyEvent;
use crate::host::Host;
use crate::keymap::{KeyMap, LayerState};
use crate::mouse::PointingReport;
use crate::types::action::{Action, KeyAction};
use crate::types::keycode::KeyCode;
use crate::types::modifier::ModifierCombination;

/// Drives the keymap hooks the way the host firmware does: resolve the action of a key
/// event, run the custom handling, run the default handling, then the post processing.
pub struct Keyboard<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Keymap
    pub(crate) keymap: KeyMap<'a, ROW, COL, NUM_LAYER>,
    /// Hooks
    pub(crate) dispatcher: Dispatcher,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Keyboard<'a, ROW, COL, NUM_LAYER> {
    pub fn new(keymap: KeyMap<'a, ROW, COL, NUM_LAYER>, config: PersoConfig) -> Self {
        let mut keyboard = Self {
            keymap,
            dispatcher: Dispatcher::new(config),
        };
        keyboard.update_layer_state();
        keyboard
    }

    pub fn keymap(&self) -> &KeyMap<'a, ROW, COL, NUM_LAYER> {
        &self.keymap
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Layers currently used for resolving actions
    pub fn layer_state(&self) -> LayerState {
        self.keymap.effective_layers()
    }

    /// Run the start-up hook, once before the first key event
    pub fn init<H: Host>(&mut self, host: &mut H) {
        self.dispatcher.keyboard_post_init(host);
    }

    /// Process a key event from the matrix
    pub fn process_key_event<H: Host>(&mut self, key_event: KeyEvent, host: &mut H) {
        let key_action = self.keymap.get_action_with_layer_cache(key_event);
        debug!("Process key action: {:?}, {:?}", key_action, key_event);

        let action = match key_action {
            KeyAction::Single(action) => action,
            KeyAction::No | KeyAction::Transparent => return,
        };

        if self.dispatcher.process_record(action, key_event, host) {
            self.process_action(action, key_event, host);
        }
        self.dispatcher.post_process_record(action, key_event, host);
    }

    /// Filter the pending pointing report of the host, returns the report to send
    pub fn pointing_tick<H: Host>(&mut self, host: &H) -> PointingReport {
        let report = host.report();
        self.dispatcher
            .pointing_device_task(report, self.keymap.effective_layers(), host.now())
    }

    /// Default handling of an action
    fn process_action<H: Host>(&mut self, action: Action, key_event: KeyEvent, host: &mut H) {
        match action {
            Action::Key(key) => self.process_action_key(key, key_event, host),
            Action::KeyWithModifier(key, modifiers) => {
                self.process_action_key_with_modifier(key, modifiers, key_event, host)
            }
            Action::LayerOn(layer_num) => self.process_action_layer_switch(layer_num, key_event),
            // Handled by the dispatcher
            Action::Custom(_) => (),
        }
    }

    fn process_action_key<H: Host>(&mut self, key: KeyCode, key_event: KeyEvent, host: &mut H) {
        if key == KeyCode::No {
            return;
        }
        if key_event.pressed {
            host.register_code(key);
        } else {
            host.unregister_code(key);
        }
    }

    /// Modifiers are pressed before the key and released after it
    fn process_action_key_with_modifier<H: Host>(
        &mut self,
        key: KeyCode,
        modifiers: ModifierCombination,
        key_event: KeyEvent,
        host: &mut H,
    ) {
        let modifier_keys = modifiers.to_keycodes();
        if key_event.pressed {
            for m in modifier_keys.iter() {
                host.register_code(*m);
            }
            host.register_code(key);
        } else {
            host.unregister_code(key);
            for m in modifier_keys.iter().rev() {
                host.unregister_code(*m);
            }
        }
    }

    /// Process layer switch action.
    fn process_action_layer_switch(&mut self, layer_num: u8, key_event: KeyEvent) {
        // Change layer state only when the key's state is changed
        if key_event.pressed {
            self.keymap.activate_layer(layer_num);
        } else {
            self.keymap.deactivate_layer(layer_num);
        }
        self.update_layer_state();
    }

    /// Recompute the effective layers through the layer state hook
    fn update_layer_state(&mut self) {
        let requested = self.keymap.requested_layers();
        let effective = self.dispatcher.layer_state_set(requested);
        if effective != self.keymap.effective_layers() {
            info!("Layer state: {:#x} (requested {:#x})", effective.0, requested.0);
        }
        self.keymap.set_effective_layers(effective);
    }
}

#[cfg(test)]
mod tests {
    use embassy_time::Instant;
    use heapless::Vec;

    use super::*;
    use crate::host::{Clock, KeyInjector, Lighting, PointingDevice};
    use crate::layout::{COL, Layer, NUM_LAYER, ROW, get_default_keymap, perso_config};

    #[derive(Default)]
    struct NullHost {
        pressed: Vec<KeyCode, 16>,
    }

    impl KeyInjector for NullHost {
        fn register_code(&mut self, keycode: KeyCode) {
            let _ = self.pressed.push(keycode);
        }

        fn unregister_code(&mut self, keycode: KeyCode) {
            self.pressed.retain(|k| *k != keycode);
        }
    }

    impl PointingDevice for NullHost {
        fn cpi(&mut self) -> u16 {
            800
        }

        fn set_cpi(&mut self, _cpi: u16) {}

        fn report(&self) -> PointingReport {
            PointingReport::default()
        }
    }

    impl Lighting for NullHost {
        fn toggle_noeeprom(&mut self) {}
    }

    impl Clock for NullHost {
        fn now(&self) -> Instant {
            Instant::from_millis(0)
        }
    }

    #[test]
    fn test_tri_layer_is_effective_only() {
        let layers = get_default_keymap();
        let mut keyboard: Keyboard<'_, ROW, COL, NUM_LAYER> = Keyboard::new(KeyMap::new(&layers), perso_config());
        let mut host = NullHost::default();

        // Lf then Rf thumbs
        keyboard.process_key_event(KeyEvent::press(4, 4), &mut host);
        keyboard.process_key_event(KeyEvent::press(4, 7), &mut host);
        assert!(keyboard.layer_state().is_on(Layer::LfRf.index()));
        assert!(!keyboard.keymap().requested_layers().is_on(Layer::LfRf.index()));

        // Releasing one trigger turns the combined layer off
        keyboard.process_key_event(KeyEvent::release(4, 7), &mut host);
        assert!(!keyboard.layer_state().is_on(Layer::LfRf.index()));
        assert!(keyboard.layer_state().is_on(Layer::Lf.index()));
    }

    #[test]
    fn test_key_with_modifier_order() {
        let layers = get_default_keymap();
        let mut keyboard: Keyboard<'_, ROW, COL, NUM_LAYER> = Keyboard::new(KeyMap::new(&layers), perso_config());
        let mut host = NullHost::default();

        // `?` on the base layer is Shift + M
        keyboard.process_key_event(KeyEvent::press(2, 0), &mut host);
        assert_eq!(host.pressed.as_slice(), &[KeyCode::LShift, KeyCode::M]);
        keyboard.process_key_event(KeyEvent::release(2, 0), &mut host);
        assert!(host.pressed.is_empty());
    }
}
