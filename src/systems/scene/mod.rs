//! Scene assembly - turns the layout into host bodies and describes the
//! camera, light and ground the host should set up around them.

mod assemble;
mod descriptor;

pub use assemble::{block_desc, build_scene, ground_desc, TowerScene};
pub use descriptor::{describe_scene, OrbitControls, SceneDescriptor, ShadowSetup};
