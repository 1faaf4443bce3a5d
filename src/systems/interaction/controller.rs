use std::fmt::Debug;

use crate::domain::config::DragConstraint;
use crate::systems::backend::PhysicsBackend;

use super::gate::{DragGate, PointerButton};
use super::pick::PickResult;
use super::state::{GrabState, SavedProperty};

/// Why an event left the controller untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Pick hit nothing.
    EmptyPick,
    /// Pick hit a body that is not a tower block (e.g. the ground).
    NotABlock,
    /// Secondary button is down; grabbing is disabled.
    GateClosed,
    /// The backend does not know the picked or held body.
    UnknownBody,
    /// Release or drag with nothing held.
    NotHolding,
    /// Drag update while holding a kinematic block; nothing to enforce.
    Unconstrained,
}

/// Outcome of one controller event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition<H> {
    /// `block` is now held. `replaced` is the block implicitly released first.
    Grabbed { block: H, replaced: Option<H> },
    Released { block: H },
    /// Held block was pinned back to height `y`.
    Clamped { block: H, y: f32 },
    Ignored(IgnoreReason),
}

impl<H> Transition<H> {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored(_))
    }
}

/// Idle/Holding state machine for grabbing tower blocks.
///
/// Every mass or position change made for a grab goes through one of the
/// `on_*` transitions, and a release always restores through the handle
/// captured at grab time.
pub struct InteractionController<H> {
    constraint: DragConstraint,
    state: GrabState<H>,
    gate: DragGate,
}

impl<H: Copy + Eq + Debug> InteractionController<H> {
    pub fn new(constraint: DragConstraint) -> Self {
        Self {
            constraint,
            state: GrabState::Idle,
            gate: DragGate::default(),
        }
    }

    pub fn constraint(&self) -> DragConstraint {
        self.constraint
    }

    pub fn state(&self) -> &GrabState<H> {
        &self.state
    }

    pub fn held(&self) -> Option<H> {
        self.state.held()
    }

    pub fn is_holding(&self) -> bool {
        !self.state.is_idle()
    }

    pub fn gate(&self) -> &DragGate {
        &self.gate
    }

    /// Update the drag gate from the button that went down.
    pub fn on_pointer_down(&mut self, button: PointerButton) {
        self.gate.on_pointer_down(button);
    }

    /// Grab the picked block, releasing any block already held.
    pub fn on_grab_start<B>(&mut self, pick: &PickResult<H>, backend: &mut B) -> Transition<H>
    where
        B: PhysicsBackend<Handle = H>,
    {
        if !self.gate.is_open() {
            return self.ignore(IgnoreReason::GateClosed);
        }
        if pick.hit.is_none() {
            return self.ignore(IgnoreReason::EmptyPick);
        }
        let Some(&block) = pick.block() else {
            return self.ignore(IgnoreReason::NotABlock);
        };
        if !self.can_capture(block, backend) {
            return self.ignore(IgnoreReason::UnknownBody);
        }

        let replaced = match self.release(backend) {
            Transition::Released { block } => Some(block),
            _ => None,
        };

        // Read after the implicit release so re-grabbing the same block sees
        // its restored mass.
        let saved = match self.constraint {
            DragConstraint::Kinematic => {
                let Some(mass) = backend.mass(block) else {
                    return self.ignore(IgnoreReason::UnknownBody);
                };
                backend.set_mass(block, 0.0);
                SavedProperty::Mass(mass)
            }
            DragConstraint::HeightLock => {
                let Some(position) = backend.position(block) else {
                    return self.ignore(IgnoreReason::UnknownBody);
                };
                SavedProperty::LockedY(position.y)
            }
        };

        self.state = GrabState::Holding { block, saved };
        log::debug!("grab {:?} ({:?}), replaced {:?}", block, saved, replaced);
        Transition::Grabbed { block, replaced }
    }

    /// Pin a height-locked block back to its captured height.
    pub fn on_drag_update<B>(&mut self, backend: &mut B) -> Transition<H>
    where
        B: PhysicsBackend<Handle = H>,
    {
        let GrabState::Holding { block, saved } = self.state else {
            return self.ignore(IgnoreReason::NotHolding);
        };
        let SavedProperty::LockedY(y) = saved else {
            return Transition::Ignored(IgnoreReason::Unconstrained);
        };
        let Some(mut position) = backend.position(block) else {
            return self.ignore(IgnoreReason::UnknownBody);
        };

        position.y = y;
        backend.set_position(block, position);
        Transition::Clamped { block, y }
    }

    /// Release the held block, restoring what was captured at grab time.
    pub fn on_grab_end<B>(&mut self, backend: &mut B) -> Transition<H>
    where
        B: PhysicsBackend<Handle = H>,
    {
        match self.release(backend) {
            Transition::Ignored(reason) => self.ignore(reason),
            released => {
                log::debug!("release {:?}", released);
                released
            }
        }
    }

    fn release<B>(&mut self, backend: &mut B) -> Transition<H>
    where
        B: PhysicsBackend<Handle = H>,
    {
        let GrabState::Holding { block, saved } = std::mem::take(&mut self.state) else {
            return Transition::Ignored(IgnoreReason::NotHolding);
        };
        match saved {
            SavedProperty::Mass(mass) => backend.set_mass(block, mass),
            SavedProperty::LockedY(_) => {}
        }
        Transition::Released { block }
    }

    fn can_capture<B>(&self, block: H, backend: &B) -> bool
    where
        B: PhysicsBackend<Handle = H>,
    {
        match self.constraint {
            DragConstraint::Kinematic => backend.mass(block).is_some(),
            DragConstraint::HeightLock => backend.position(block).is_some(),
        }
    }

    fn ignore(&self, reason: IgnoreReason) -> Transition<H> {
        log::trace!("ignored pointer event: {:?}", reason);
        Transition::Ignored(reason)
    }
}
