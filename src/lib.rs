// Crate root library declaration and module exports.
rust_i18n::i18n!("locales", fallback = "en");

pub mod cli;
pub mod color_utils;
pub mod config;
pub mod context;
pub mod controller;
pub mod model;
pub mod store;

// --- ANDROID SUPPORT ---
#[cfg(feature = "mobile")]
pub mod mobile;

#[cfg(feature = "mobile")]
uniffi::setup_scaffolding!();
