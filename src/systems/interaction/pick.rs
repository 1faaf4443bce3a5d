use crate::domain::block::BLOCK_NAME;

/// Topmost body under the pointer, as reported by the host's ray picker.
#[derive(Clone, Debug, PartialEq)]
pub struct PickHit<H> {
    pub body: H,
    /// Name the scene assigned when the body was created.
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PickResult<H> {
    pub hit: Option<PickHit<H>>,
}

impl<H> PickResult<H> {
    pub fn hit(body: H, name: impl Into<String>) -> Self {
        Self {
            hit: Some(PickHit { body, name: name.into() }),
        }
    }

    pub fn miss() -> Self {
        Self { hit: None }
    }

    /// The picked body, if it is a tower block.
    pub fn block(&self) -> Option<&H> {
        self.hit
            .as_ref()
            .filter(|h| h.name == BLOCK_NAME)
            .map(|h| &h.body)
    }
}
