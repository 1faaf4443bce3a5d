use glam::Vec3;
use serde::Serialize;

use crate::domain::block::BlockSpec;
use crate::domain::config::{CameraRig, Color3, DragConstraint, LightRig, TowerConfig, TowerVariant};
use crate::systems::backend::BodyDesc;
use crate::systems::layout::{middle_block, tower_height};

use super::assemble::ground_desc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ShadowSetup {
    pub blocks_cast: bool,
    pub ground_receives: bool,
}

/// Which orbit gestures the host enables on its camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OrbitControls {
    pub zoom: bool,
    pub pan: bool,
    /// `PointerEvent.button` that rotates the camera.
    pub rotate_button: i16,
}

/// Scene setup the host performs around the tower, serialised as JSON.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneDescriptor {
    pub variant: TowerVariant,
    pub camera: CameraRig,
    pub orbit: OrbitControls,
    pub light: LightRig,
    pub shadows: ShadowSetup,
    /// Normal of the plane blocks are dragged in; `None` drags in the view plane.
    pub drag_plane_normal: Option<Vec3>,
    pub clear_color: Color3,
    pub ground: BodyDesc,
    pub block_count: usize,
    pub tower_height: f32,
    /// Position of the middle block, or the origin for an empty tower.
    pub focus: Vec3,
}

impl SceneDescriptor {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn orbit_controls(camera: &CameraRig) -> OrbitControls {
    match camera {
        CameraRig::ArcRotate { .. } => OrbitControls { zoom: true, pan: true, rotate_button: 0 },
        // Left button is reserved for dragging blocks.
        CameraRig::Perspective { .. } => OrbitControls { zoom: false, pan: false, rotate_button: 2 },
    }
}

fn shadow_setup(light: &LightRig) -> ShadowSetup {
    let enabled = matches!(light, LightRig::Directional { shadow_map_size, .. } if *shadow_map_size > 0);
    ShadowSetup { blocks_cast: enabled, ground_receives: enabled }
}

fn drag_plane_normal(constraint: DragConstraint) -> Option<Vec3> {
    match constraint {
        DragConstraint::Kinematic => Some(Vec3::Y),
        // The controller pins y itself.
        DragConstraint::HeightLock => None,
    }
}

pub fn describe_scene(config: &TowerConfig, specs: &[BlockSpec]) -> SceneDescriptor {
    SceneDescriptor {
        variant: config.variant,
        camera: config.camera,
        orbit: orbit_controls(&config.camera),
        light: config.light,
        shadows: shadow_setup(&config.light),
        drag_plane_normal: drag_plane_normal(config.drag_constraint),
        clear_color: config.clear_color,
        ground: ground_desc(config),
        block_count: specs.len(),
        tower_height: tower_height(config),
        focus: middle_block(specs).map(|b| b.position).unwrap_or(Vec3::ZERO),
    }
}
