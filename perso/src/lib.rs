//! # perso
//!
//! Personal keymap of the Bastard Keyboards Charybdis 4x6, used with a French AZERTY host.
//!
//! The host firmware scans the matrix, owns the USB stack, the sensor driver and the RGB
//! engine. This crate provides what a keymap adds on top of it:
//!
//! - The layers of the layout, see [`layout`]
//! - The layer state hook, which applies the tri layer rule
//! - Custom keys: RGB toggle, drag scrolling, sniping and Unicode characters
//! - The pointing report filter, see [`mouse`]
//!
//! All hooks are methods of [`dispatcher::Dispatcher`]. [`keyboard::Keyboard`] drives them
//! the way the host firmware does, resolving key events through a [`keymap::KeyMap`].
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod dispatcher;
pub mod event;
pub mod french;
pub mod host;
pub mod keyboard;
pub mod keymap;
pub mod layout;
pub mod layout_macro;
pub mod mouse;
pub mod pointing;
pub mod unicode;

pub use perso_types as types;

pub use dispatcher::Dispatcher;
pub use keyboard::Keyboard;
pub use keymap::{KeyMap, LayerState};
