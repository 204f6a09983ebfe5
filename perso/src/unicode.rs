//! Typing characters through the host's Unicode input method

use heapless::Vec;

use crate::config::UnicodeConfig;
use crate::host::KeyInjector;
use crate::types::action::UnicodeChar;
use crate::types::keycode::KeyCode;

/// Keys typing the lowercase hexadecimal form of `code_point`, without leading zeros.
///
/// Digits use the number row, letters come from `config.hex_letters`.
pub fn hex_digit_keys(code_point: u32, config: &UnicodeConfig) -> Vec<KeyCode, 8> {
    let mut keys = Vec::new();
    let mut started = false;
    for shift in (0..8).rev() {
        let digit = ((code_point >> (shift * 4)) & 0xF) as u8;
        if digit == 0 && !started && shift != 0 {
            continue;
        }
        started = true;
        let key = match digit {
            0..=9 => KeyCode::from_digit(digit),
            _ => config.hex_letters.get((digit - 10) as usize).copied(),
        };
        if let Some(key) = key {
            // A u32 has at most 8 hex digits
            let _ = keys.push(key);
        }
    }
    keys
}

/// Type `c`: hold the modifiers, tap the trigger, release the modifiers, tap the
/// hexadecimal digits of the code point, then tap the terminator.
pub fn send_unicode<K: KeyInjector>(injector: &mut K, c: UnicodeChar, config: &UnicodeConfig) {
    debug!("Typing unicode {:?}", c);
    for m in config.modifiers {
        injector.register_code(m);
    }
    injector.tap_code(config.trigger);
    for m in config.modifiers.iter().rev() {
        injector.unregister_code(*m);
    }

    for key in hex_digit_keys(c.code_point(), config) {
        injector.tap_code(key);
    }
    injector.tap_code(config.terminator);
}

#[cfg(test)]
mod tests {
    use heapless::Vec;

    use super::*;
    use crate::layout::perso_config;

    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    enum Op {
        Down(KeyCode),
        Up(KeyCode),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op, 64>,
    }

    impl KeyInjector for Recorder {
        fn register_code(&mut self, keycode: KeyCode) {
            self.ops.push(Op::Down(keycode)).unwrap();
        }

        fn unregister_code(&mut self, keycode: KeyCode) {
            self.ops.push(Op::Up(keycode)).unwrap();
        }
    }

    #[test]
    fn test_hex_digits() {
        let config = UnicodeConfig::default();
        assert_eq!(
            hex_digit_keys(0x2026, &config).as_slice(),
            &[KeyCode::Kc2, KeyCode::Kc0, KeyCode::Kc2, KeyCode::Kc6]
        );
        // No leading zero
        assert_eq!(
            hex_digit_keys(0x153, &config).as_slice(),
            &[KeyCode::Kc1, KeyCode::Kc5, KeyCode::Kc3]
        );
        assert_eq!(
            hex_digit_keys(0x21AF, &config).as_slice(),
            &[KeyCode::Kc2, KeyCode::Kc1, KeyCode::A, KeyCode::F]
        );
        assert_eq!(hex_digit_keys(0, &config).as_slice(), &[KeyCode::Kc0]);
    }

    #[test]
    fn test_hex_letters_on_azerty() {
        let config = perso_config().unicode;
        // `«`, U+AB
        assert_eq!(hex_digit_keys(0xAB, &config).as_slice(), &[KeyCode::Q, KeyCode::B]);
        assert_eq!(
            hex_digit_keys(0x21AF, &config).as_slice(),
            &[KeyCode::Kc2, KeyCode::Kc1, KeyCode::Q, KeyCode::F]
        );
        // Digits stay on the unshifted number row
        assert_eq!(
            hex_digit_keys(0x2190, &config).as_slice(),
            &[KeyCode::Kc2, KeyCode::Kc1, KeyCode::Kc9, KeyCode::Kc0]
        );
    }

    #[test]
    fn test_three_dots_sequence() {
        let mut recorder = Recorder::default();
        send_unicode(&mut recorder, UnicodeChar::ThreeDots, &UnicodeConfig::default());

        use KeyCode::*;
        let expected = [
            Op::Down(LCtrl),
            Op::Down(LShift),
            Op::Down(U),
            Op::Up(U),
            Op::Up(LShift),
            Op::Up(LCtrl),
            Op::Down(Kc2),
            Op::Up(Kc2),
            Op::Down(Kc0),
            Op::Up(Kc0),
            Op::Down(Kc2),
            Op::Up(Kc2),
            Op::Down(Kc6),
            Op::Up(Kc6),
            Op::Down(Space),
            Op::Up(Space),
        ];
        assert_eq!(recorder.ops.as_slice(), &expected);
    }

    #[test]
    fn test_every_char_ends_with_terminator() {
        for c in UnicodeChar::ALL {
            let mut recorder = Recorder::default();
            send_unicode(&mut recorder, c, &UnicodeConfig::default());
            let digits = hex_digit_keys(c.code_point(), &UnicodeConfig::default()).len();
            // 6 ops for the prefix, 2 per digit, 2 for the terminator
            assert_eq!(recorder.ops.len(), 6 + 2 * digits + 2);
            assert_eq!(recorder.ops.last(), Some(&Op::Up(KeyCode::Space)));
        }
    }
}
