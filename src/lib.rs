// src/lib.rs

//! Vendora Oxide - A cross-platform marketplace storefront with unified
//! media galleries and cascading variant selection

#![cfg_attr(debug_assertions, allow(unsafe_code))]
#![deny(unsafe_code)]
#![cfg_attr(test, allow(unsafe_code))]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::result_large_err)]
#![allow(clippy::type_complexity)]
#![allow(clippy::large_enum_variant)]

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = tracing_wasm::try_set_as_global_default() {
        web_sys::console::error_1(&format!("Failed to set up tracing: {:?}", e).into());
    }

    dioxus::launch(ui::App);
}

// Core modules (always available)
pub mod catalog;
pub mod config;
pub mod error;
pub mod platform;
pub mod storefront;
pub mod types;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use error::{Error, ErrorKind, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
