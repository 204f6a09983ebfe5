use serde::{Deserialize, Serialize};

use crate::event::KeyEvent;
use crate::types::action::KeyAction;

/// Set of active layers, bit `n` is layer `n`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(pub u32);

impl LayerState {
    pub const MAX_LAYERS: u8 = 32;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn is_on(self, layer: u8) -> bool {
        layer < Self::MAX_LAYERS && self.0 & (1 << layer) != 0
    }

    pub const fn with(self, layer: u8) -> Self {
        if layer < Self::MAX_LAYERS {
            Self(self.0 | (1 << layer))
        } else {
            self
        }
    }

    pub const fn without(self, layer: u8) -> Self {
        if layer < Self::MAX_LAYERS {
            Self(self.0 & !(1 << layer))
        } else {
            self
        }
    }
}

/// Tri layer rule: when both `l1` and `l2` are on, `l3` is on too.
///
/// Otherwise the state is returned unchanged.
pub fn update_tri_layer_state(state: LayerState, l1: u8, l2: u8, l3: u8) -> LayerState {
    if state.is_on(l1) && state.is_on(l2) {
        state.with(l3)
    } else {
        state
    }
}

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// Two layer states are kept: the `requested` one holds the layers switched on by keys,
/// the `effective` one is what the layer state hook derived from it, and is the one used
/// for resolving actions.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Layers requested by keys
    requested: LayerState,
    /// Layers used for resolving actions
    effective: LayerState,
    /// Default layer number, max: 32
    default_layer: u8,
    /// Layer used when a key was pressed, so that its release resolves in the same layer
    layer_cache: [[u8; COL]; ROW],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER]) -> Self {
        Self {
            layers,
            requested: LayerState::empty(),
            effective: LayerState::empty(),
            default_layer: 0,
            layer_cache: [[0; COL]; ROW],
        }
    }

    pub fn get_keymap_config(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }

    pub fn default_layer(&self) -> u8 {
        self.default_layer
    }

    /// Layers switched on by keys
    pub fn requested_layers(&self) -> LayerState {
        self.requested
    }

    /// Layers currently used for resolving actions
    pub fn effective_layers(&self) -> LayerState {
        self.effective
    }

    pub fn set_effective_layers(&mut self, state: LayerState) {
        self.effective = state;
    }

    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> KeyAction {
        self.layers
            .get(layer_num)
            .and_then(|l| l.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or_default()
    }

    /// Fetch the action in keymap, with layer cache
    pub fn get_action_with_layer_cache(&mut self, key_event: KeyEvent) -> KeyAction {
        let row = key_event.row as usize;
        let col = key_event.col as usize;
        if row >= ROW || col >= COL {
            warn!("Key event out of the matrix: row {}, col {}", row, col);
            return KeyAction::No;
        }

        if !key_event.pressed {
            // Releasing a pressed key, use cached layer and restore the cache
            let layer = self.pop_layer_from_cache(row, col);
            return self.layers[layer as usize][row][col];
        }

        // Iterate from higher layer to lower layer, the lowest checked layer is the default layer
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if self.effective.is_on(layer_idx as u8) || layer_idx as u8 == self.default_layer {
                let action = layer[row][col];
                if action == KeyAction::Transparent {
                    continue;
                }

                // Found a valid action in the layer, cache it
                self.save_layer_cache(row, col, layer_idx as u8);

                return action;
            }

            if layer_idx as u8 == self.default_layer {
                // No action
                break;
            }
        }

        KeyAction::No
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = self.default_layer;

        layer
    }

    fn save_layer_cache(&mut self, row: usize, col: usize, layer_num: u8) {
        self.layer_cache[row][col] = layer_num;
    }

    /// Request given layer.
    ///
    /// The effective state is not updated here, it has to be recomputed from [`KeyMap::requested_layers`].
    pub fn activate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.requested = self.requested.with(layer_num);
    }

    /// Release the request of given layer
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.requested = self.requested.without(layer_num);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::action::Action;
    use crate::types::keycode::KeyCode;

    const A: KeyAction = KeyAction::Single(Action::Key(KeyCode::A));
    const B: KeyAction = KeyAction::Single(Action::Key(KeyCode::B));
    const T: KeyAction = KeyAction::Transparent;

    static LAYERS: [[[KeyAction; 2]; 1]; 3] = [[[A, A]], [[B, T]], [[T, T]]];

    #[test]
    fn test_tri_layer_rule() {
        // Exhaustive over the 3 involved layers, with an unrelated layer on
        for bits in 0u32..8 {
            let state = LayerState(((bits & 1) << 1) | ((bits & 2) << 2) | ((bits & 4) << 3) | (1 << 9));
            let result = update_tri_layer_state(state, 1, 3, 5);
            if state.is_on(1) && state.is_on(3) {
                assert!(result.is_on(5));
                assert_eq!(result, state.with(5));
            } else {
                assert_eq!(result, state);
            }
        }
    }

    #[test]
    fn test_layer_state_bits() {
        let state = LayerState::empty().with(1).with(5);
        assert!(state.is_on(1));
        assert!(!state.is_on(2));
        assert!(!state.without(5).is_on(5));
        assert!(state.without(5).is_on(1));
        // Out of range layers are ignored
        assert_eq!(state.with(40), state);
        assert!(!state.is_on(40));
    }

    #[test]
    fn test_transparent_falls_through() {
        let mut keymap = KeyMap::new(&LAYERS);
        keymap.activate_layer(1);
        keymap.activate_layer(2);
        keymap.set_effective_layers(keymap.requested_layers());

        assert_eq!(keymap.get_action_with_layer_cache(KeyEvent::press(0, 0)), B);
        assert_eq!(keymap.get_action_with_layer_cache(KeyEvent::press(0, 1)), A);
    }

    #[test]
    fn test_release_uses_layer_cache() {
        let mut keymap = KeyMap::new(&LAYERS);
        keymap.activate_layer(1);
        keymap.set_effective_layers(keymap.requested_layers());
        assert_eq!(keymap.get_action_with_layer_cache(KeyEvent::press(0, 0)), B);

        keymap.deactivate_layer(1);
        keymap.set_effective_layers(keymap.requested_layers());
        assert_eq!(keymap.get_action_with_layer_cache(KeyEvent::release(0, 0)), B);
        // Cache is restored to the default layer
        assert_eq!(keymap.get_action_with_layer_cache(KeyEvent::release(0, 0)), A);
    }

    #[test]
    fn test_invalid_positions_and_layers() {
        let mut keymap = KeyMap::new(&LAYERS);
        assert_eq!(keymap.get_action_with_layer_cache(KeyEvent::press(3, 0)), KeyAction::No);
        assert_eq!(keymap.get_action_at(0, 5, 0), KeyAction::No);

        keymap.activate_layer(7);
        assert_eq!(keymap.requested_layers(), LayerState::empty());
        assert_eq!(keymap.get_keymap_config(), (1, 2, 3));
    }
}
