/// DOM `MouseEvent.button` values the gate cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl PointerButton {
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }
}

/// Primary button enables grabbing; secondary disables it so the host can
/// rotate the camera while hovering a block. Other buttons leave it as is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragGate {
    enabled: bool,
}

impl Default for DragGate {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl DragGate {
    pub fn is_open(&self) -> bool {
        self.enabled
    }

    pub fn on_pointer_down(&mut self, button: PointerButton) {
        match button {
            PointerButton::Primary => self.enabled = true,
            PointerButton::Secondary => self.enabled = false,
            PointerButton::Auxiliary | PointerButton::Other(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_toggle_gate() {
        let mut gate = DragGate::default();
        assert!(gate.is_open());

        gate.on_pointer_down(PointerButton::from_dom(2));
        assert!(!gate.is_open());

        gate.on_pointer_down(PointerButton::from_dom(1));
        assert!(!gate.is_open());

        gate.on_pointer_down(PointerButton::from_dom(0));
        assert!(gate.is_open());
    }
}
