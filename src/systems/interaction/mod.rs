//! Grab/drag interaction - which block is held and how it is constrained.

mod controller;
mod gate;
mod pick;
mod state;

pub use controller::{IgnoreReason, InteractionController, Transition};
pub use gate::{DragGate, PointerButton};
pub use pick::{PickHit, PickResult};
pub use state::{GrabState, SavedProperty};
