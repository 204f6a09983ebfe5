//! # perso types
//!
//! This crate provides the type definitions shared by the perso keymap.
//!
//! ## Modules
//!
//! - [`action`] - Key actions stored in the keymap, including the custom actions of this keymap
//! - [`keycode`] - HID keycodes, including media and mouse keycodes
//! - [`modifier`] - Modifier key combinations
//! - [`mouse_button`] - Mouse button state
//!
//! All actions are resolved when the keymap is built: a layer table only ever contains
//! values of the closed [`action::KeyAction`] type, there is no numeric keycode range that
//! has to be compared at runtime to find out whether a key is a custom one.

#![no_std]

pub mod action;
pub mod keycode;
pub mod modifier;
pub mod mouse_button;
