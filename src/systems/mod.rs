//! Systems: layout, interaction, host backends and scene assembly.

pub mod backend;
pub mod interaction;
pub mod layout;
pub mod scene;
