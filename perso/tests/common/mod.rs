#![allow(dead_code)]

use embassy_time::{Duration, Instant};
use perso::event::KeyEvent;
use perso::host::{Clock, KeyInjector, Lighting, PointingDevice};
use perso::keyboard::Keyboard;
use perso::keymap::KeyMap;
use perso::layout::{COL, NUM_LAYER, ROW, perso_config};
use perso::mouse::PointingReport;
use perso::types::action::KeyAction;
use perso::types::keycode::KeyCode;
use perso::types::mouse_button::MouseButtons;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub type PersoKeyboard<'a> = Keyboard<'a, ROW, COL, NUM_LAYER>;

/// Positions on the logical matrix, `(row, col)`
pub const LF_KEY: (u8, u8) = (4, 4);
pub const RF_KEY: (u8, u8) = (4, 7);
/// `MO(Mouse)` while `Lf` is held
pub const MOUSE_KEY: (u8, u8) = (4, 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOp {
    Register(KeyCode),
    Unregister(KeyCode),
    ToggleRgb,
    SetCpi(u16),
}

/// How the fake sensor reacts to resolution writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpiAck {
    Always,
    /// Ignores the first `n` writes
    After(u32),
    Never,
}

/// A host firmware which records everything the keymap asks for
pub struct TestHost {
    pub ops: Vec<HostOp>,
    pub pressed: Vec<KeyCode>,
    pub rgb_enabled: bool,
    pub cpi: u16,
    pub cpi_ack: CpiAck,
    pub cpi_writes: u32,
    /// Time spent by each resolution write
    pub cpi_write_time: Duration,
    /// Motion pending in the host's report
    pub motion: (i16, i16),
    pub now: Instant,
}

impl Default for TestHost {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            pressed: Vec::new(),
            rgb_enabled: true,
            cpi: 800,
            cpi_ack: CpiAck::Always,
            cpi_writes: 0,
            cpi_write_time: Duration::from_millis(1),
            motion: (0, 0),
            now: Instant::from_millis(1000),
        }
    }
}

impl TestHost {
    pub fn advance(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
    }

    /// Recorded key operations, other operations are skipped
    pub fn key_ops(&self) -> Vec<HostOp> {
        self.ops
            .iter()
            .copied()
            .filter(|op| matches!(op, HostOp::Register(_) | HostOp::Unregister(_)))
            .collect()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl KeyInjector for TestHost {
    fn register_code(&mut self, keycode: KeyCode) {
        self.ops.push(HostOp::Register(keycode));
        if !self.pressed.contains(&keycode) {
            self.pressed.push(keycode);
        }
    }

    fn unregister_code(&mut self, keycode: KeyCode) {
        self.ops.push(HostOp::Unregister(keycode));
        self.pressed.retain(|k| *k != keycode);
    }
}

impl PointingDevice for TestHost {
    fn cpi(&mut self) -> u16 {
        self.cpi
    }

    fn set_cpi(&mut self, cpi: u16) {
        self.ops.push(HostOp::SetCpi(cpi));
        self.cpi_writes += 1;
        self.now += self.cpi_write_time;
        let accepted = match self.cpi_ack {
            CpiAck::Always => true,
            CpiAck::After(n) => self.cpi_writes > n,
            CpiAck::Never => false,
        };
        if accepted {
            self.cpi = cpi;
        }
    }

    /// Buttons of the report follow the registered mouse button keys, like the host's mouse keys do
    fn report(&self) -> PointingReport {
        let buttons = self
            .pressed
            .iter()
            .filter_map(|k| k.as_mouse_button())
            .fold(MouseButtons::new(), |acc, b| acc | b);
        PointingReport {
            buttons: buttons.into_bits(),
            x: self.motion.0,
            y: self.motion.1,
            h: 0,
            v: 0,
        }
    }
}

impl Lighting for TestHost {
    fn toggle_noeeprom(&mut self) {
        self.ops.push(HostOp::ToggleRgb);
        self.rgb_enabled = !self.rgb_enabled;
    }
}

impl Clock for TestHost {
    fn now(&self) -> Instant {
        self.now
    }
}

pub fn create_test_keyboard(layers: &[[[KeyAction; COL]; ROW]; NUM_LAYER]) -> PersoKeyboard<'_> {
    Keyboard::new(KeyMap::new(layers), perso_config())
}

pub fn press(keyboard: &mut PersoKeyboard<'_>, host: &mut TestHost, pos: (u8, u8)) {
    keyboard.process_key_event(KeyEvent::press(pos.0, pos.1), host);
}

pub fn release(keyboard: &mut PersoKeyboard<'_>, host: &mut TestHost, pos: (u8, u8)) {
    keyboard.process_key_event(KeyEvent::release(pos.0, pos.1), host);
}

pub fn tap(keyboard: &mut PersoKeyboard<'_>, host: &mut TestHost, pos: (u8, u8)) {
    press(keyboard, host, pos);
    release(keyboard, host, pos);
}

/// Expected key operations of a tap
pub fn tapped(keycode: KeyCode) -> [HostOp; 2] {
    [HostOp::Register(keycode), HostOp::Unregister(keycode)]
}

/// Expected key operations of the Unicode prefix, `Ctrl+Shift+U`
pub fn unicode_prefix() -> Vec<HostOp> {
    vec![
        HostOp::Register(KeyCode::LCtrl),
        HostOp::Register(KeyCode::LShift),
        HostOp::Register(KeyCode::U),
        HostOp::Unregister(KeyCode::U),
        HostOp::Unregister(KeyCode::LShift),
        HostOp::Unregister(KeyCode::LCtrl),
    ]
}
