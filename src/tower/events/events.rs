use glam::Vec3;

use crate::systems::backend::PhysicsBackend;
use crate::systems::interaction::{IgnoreReason, PickResult, PointerButton, Transition};

use super::TowerCore;

pub(super) fn pointer_down(tower: &mut TowerCore, button: i16) {
    tower.controller.on_pointer_down(PointerButton::from_dom(button));
}

pub(super) fn grab_start(
    tower: &mut TowerCore,
    hit: Option<(u32, &str, f32, Vec3)>,
) -> Transition<u32> {
    let mut observed = None;
    let pick = match hit {
        Some((body, name, mass, position)) => {
            let pick = PickResult::hit(body, name);
            // Only blocks may be captured; don't cache state for the ground.
            if pick.block().is_some() && tower.controller.held() != Some(body) {
                tower.backend.observe_mass(body, mass);
                tower.backend.observe_position(body, position);
                observed = Some(body);
            }
            pick
        }
        None => PickResult::miss(),
    };

    let transition = tower.controller.on_grab_start(&pick, &mut tower.backend);
    if let (true, Some(body)) = (transition.is_ignored(), observed) {
        tower.backend.forget(body);
    }
    if let Transition::Grabbed { block, replaced: Some(previous) } = transition {
        if previous != block {
            tower.backend.forget(previous);
        }
    }
    tower.stats.record(&transition);
    transition
}

pub(super) fn drag_update(tower: &mut TowerCore, position: Vec3) -> Transition<u32> {
    let Some(body) = tower.controller.held() else {
        let transition = Transition::Ignored(IgnoreReason::NotHolding);
        tower.stats.record(&transition);
        return transition;
    };

    tower.backend.observe_position(body, position);
    let transition = tower.controller.on_drag_update(&mut tower.backend);
    tower.stats.record(&transition);
    transition
}

pub(super) fn grab_end(tower: &mut TowerCore) -> Transition<u32> {
    let transition = tower.controller.on_grab_end(&mut tower.backend);
    if let Transition::Released { block } = transition {
        // The host owns the body again; its next pick reports fresh state.
        let restored = tower.backend.mass(block);
        log::debug!("block {} released, mass {:?}", block, restored);
        tower.backend.forget(block);
    }
    tower.stats.record(&transition);
    transition
}
