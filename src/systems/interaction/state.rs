/// Property captured at grab time and given back (or enforced) until release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SavedProperty {
    /// Simulation mass before the block was made kinematic.
    Mass(f32),
    /// Height the block is pinned to while dragged.
    LockedY(f32),
}

/// At most one block is held at any time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GrabState<H> {
    Idle,
    Holding { block: H, saved: SavedProperty },
}

impl<H> Default for GrabState<H> {
    fn default() -> Self {
        GrabState::Idle
    }
}

impl<H: Copy> GrabState<H> {
    pub fn held(&self) -> Option<H> {
        match self {
            GrabState::Idle => None,
            GrabState::Holding { block, .. } => Some(*block),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GrabState::Idle)
    }
}
