use embassy_time::Duration;

use crate::types::keycode::KeyCode;

/// The config struct of the keymap dispatcher.
///
/// There are 3 groups of configs:
/// 1. `BehaviorConfig`: Configurations of layer behaviors.
/// 2. `PointingConfig`: Configurations of the trackball, scrolling and sniping.
/// 3. `UnicodeConfig`: How the host expects Unicode characters to be typed.
#[derive(Clone, Debug, Default)]
pub struct PersoConfig {
    pub behavior: BehaviorConfig,
    pub pointing: PointingConfig,
    pub unicode: UnicodeConfig,
}

/// Config for configurable action behavior
#[derive(Clone, Debug, Default)]
pub struct BehaviorConfig {
    /// `[l1, l2, l3]`: `l3` is active whenever both `l1` and `l2` are
    pub tri_layer: Option<[u8; 3]>,
}

/// Config for the pointing device
#[derive(Clone, Copy, Debug, Default)]
pub struct PointingConfig {
    /// Motion is only reported while this layer is active.
    ///
    /// If `None`, motion is always reported.
    pub mouse_layer: Option<u8>,
    pub scroll: ScrollConfig,
    pub snipe: SnipeConfig,
}

/// Configurations for drag scrolling
#[derive(Clone, Copy, Debug)]
pub struct ScrollConfig {
    /// Accumulated motion needed for one scroll step
    pub threshold: i32,
    /// Minimal time between two scroll steps
    pub interval: Duration,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold: 100,
            interval: Duration::from_millis(20),
        }
    }
}

/// Configurations for sniping, the low resolution mode of the sensor
#[derive(Clone, Copy, Debug)]
pub struct SnipeConfig {
    /// Resolution while the snipe key is held
    pub snipe_cpi: u16,
    /// Resolution restored on release
    pub default_cpi: u16,
    /// Number of writes before giving up
    pub max_retries: u8,
    /// Time budget of a confirmed resolution change
    pub timeout: Duration,
}

impl Default for SnipeConfig {
    fn default() -> Self {
        Self {
            snipe_cpi: 200,
            default_cpi: 800,
            max_retries: 8,
            timeout: Duration::from_millis(50),
        }
    }
}

/// Host side Unicode input method.
///
/// The default is the IBus/GTK sequence: `Ctrl+Shift+U`, hex digits, `Space`.
#[derive(Clone, Copy, Debug)]
pub struct UnicodeConfig {
    /// Modifiers held while tapping `trigger`, pressed in order and released in reverse
    pub modifiers: [KeyCode; 2],
    pub trigger: KeyCode,
    /// Tapped after the hex digits
    pub terminator: KeyCode,
    /// Keys typing `a` ~ `f` on the host layout
    pub hex_letters: [KeyCode; 6],
}

impl Default for UnicodeConfig {
    fn default() -> Self {
        Self {
            modifiers: [KeyCode::LCtrl, KeyCode::LShift],
            trigger: KeyCode::U,
            terminator: KeyCode::Space,
            hex_letters: [KeyCode::A, KeyCode::B, KeyCode::C, KeyCode::D, KeyCode::E, KeyCode::F],
        }
    }
}
