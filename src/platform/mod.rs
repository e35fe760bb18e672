//! Platform abstraction layer
//!
//! Browser glue lives in `web`: DOM score display, joystick knob element and
//! event coordinate extraction. Native builds have nothing here; they use the
//! headless surfaces from `renderer`.

#[cfg(target_arch = "wasm32")]
pub mod web;
