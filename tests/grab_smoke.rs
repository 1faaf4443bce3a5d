use jenga_engine::systems::backend::{MemoryBackend, PhysicsBackend};
use jenga_engine::systems::interaction::IgnoreReason;
use jenga_engine::systems::scene::build_scene;
use jenga_engine::{generate_tower, GrabState, InteractionController, PickResult, TowerConfig, Transition};

#[test]
fn grab_and_release_middle_block_of_default_tower() {
    let config = TowerConfig::default();
    let specs = generate_tower(&config).unwrap();
    let mut backend = MemoryBackend::new();
    let scene = build_scene(&config, &specs, &mut backend);
    assert_eq!(scene.body_count(), 3 * 18 + 1);

    let mut ctl = InteractionController::new(config.drag_constraint);
    let middle = scene.blocks[specs.len() / 2];

    let t = ctl.on_grab_start(&backend.pick(middle), &mut backend);
    assert_eq!(t, Transition::Grabbed { block: middle, replaced: None });
    assert_eq!(backend.mass(middle), Some(0.0));

    // Release takes no pick: whatever is under the pointer now, the captured
    // handle is the one restored.
    assert_eq!(ctl.on_grab_end(&mut backend), Transition::Released { block: middle });
    assert_eq!(backend.mass(middle), Some(10.0));
    assert_eq!(ctl.state(), &GrabState::Idle);
}

#[test]
fn ground_is_not_grabbable() {
    let config = TowerConfig::default();
    let specs = generate_tower(&config).unwrap();
    let mut backend = MemoryBackend::new();
    let scene = build_scene(&config, &specs, &mut backend);

    let mut ctl = InteractionController::new(config.drag_constraint);
    let t = ctl.on_grab_start(&backend.pick(scene.ground), &mut backend);
    assert_eq!(t, Transition::Ignored(IgnoreReason::NotABlock));
    assert!(ctl.state().is_idle());

    let t = ctl.on_grab_start(&PickResult::miss(), &mut backend);
    assert_eq!(t, Transition::Ignored(IgnoreReason::EmptyPick));
}

#[test]
fn tabletop_block_slides_at_fixed_height() {
    let config = TowerConfig::tabletop();
    let specs = generate_tower(&config).unwrap();
    let mut backend = MemoryBackend::new();
    let scene = build_scene(&config, &specs, &mut backend);

    let mut ctl = InteractionController::new(config.drag_constraint);
    let block = backend.block_handle(4).unwrap();
    assert_eq!(scene.blocks[4], block);

    ctl.on_grab_start(&backend.pick(block), &mut backend);
    for step in 1..=5 {
        let mut p = backend.position(block).unwrap();
        p.x += 0.5;
        p.y += 0.3 * step as f32;
        backend.set_position(block, p);
        ctl.on_drag_update(&mut backend);
        assert_eq!(backend.position(block).unwrap().y, 2.0);
    }
    assert_eq!(backend.position(block).unwrap().x, 2.5);
    assert_eq!(backend.mass(block), Some(10.0));

    ctl.on_grab_end(&mut backend);
    assert!(ctl.held().is_none());
}
