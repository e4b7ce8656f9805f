pub mod config;
pub mod content;
pub mod logging;
pub mod menu;
pub mod sections;
pub mod theme;
pub mod typewriter;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
