//! CLI library components for the StickerSmash editor.

pub mod logging;
pub mod runner;
pub mod script;
