/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::A))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::KeyCode::$k,
        ))
    };
}

/// Create a normal key with modifier action, e.g. `wm!(PageUp, GUI)`
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::KeyWithModifier(
            $crate::types::keycode::KeyCode::$x,
            $m,
        ))
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::types::action::KeyAction::$a
    };
}

/// Create a layer activate action. For example, `mo!(1)` activates layer 1.
#[macro_export]
macro_rules! mo {
    ($x: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::LayerOn($x as u8))
    };
}

/// Create a custom key, e.g. `ck!(MouseScroll)`
#[macro_export]
macro_rules! ck {
    ($c: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Custom(
            $crate::types::action::CustomKey::$c,
        ))
    };
}

/// Create a key typing a Unicode character, e.g. `uc!(ThreeDots)`
#[macro_export]
macro_rules! uc {
    ($c: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Custom(
            $crate::types::action::CustomKey::Unicode($crate::types::action::UnicodeChar::$c),
        ))
    };
}

/// Create a layer of the Charybdis 4x6, in the order keys are laid out on the board.
///
/// Four rows of 12 keys (6 per half), then the thumb clusters: the first thumb row is
/// 3 left keys and 2 right keys, the second one is 2 left keys and 1 right key.
/// The thumb keys are placed on row 4 of the matrix, left ones at columns 1 ~ 5 and right
/// ones at columns 6 ~ 8, unused positions are `No`.
#[macro_export]
macro_rules! charybdis_layout {
    (
        [$($r0: expr),+ $(,)?],
        [$($r1: expr),+ $(,)?],
        [$($r2: expr),+ $(,)?],
        [$($r3: expr),+ $(,)?],
        [$l0: expr, $l1: expr, $l2: expr, $t0: expr, $t1: expr $(,)?],
        [$l3: expr, $l4: expr, $t2: expr $(,)?] $(,)?
    ) => {
        $crate::layer!([
            [$($r0),+],
            [$($r1),+],
            [$($r2),+],
            [$($r3),+],
            [
                $crate::a!(No),
                $l0,
                $l1,
                $l2,
                $l3,
                $l4,
                $t0,
                $t1,
                $t2,
                $crate::a!(No),
                $crate::a!(No),
                $crate::a!(No)
            ]
        ])
    };
}
