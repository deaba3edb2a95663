use wyrm::{
    CommandRecorder, Creature, CreatureConfig, FollowInput, FrameLoop, LoopState,
    NoOpFrameObserver, PointerKind, Vec2, Viewport,
};

fn creature() -> Creature<f32> {
    let mut creature = Creature::new(CreatureConfig::new()).expect("valid config");
    creature.resize(&Viewport::new(400.0, 400.0, 1.0), &mut NoOpFrameObserver);
    creature
}

#[test]
fn dormant_loop_does_nothing() {
    let mut frames = FrameLoop::new();
    let mut creature = creature();
    let mut recorder = CommandRecorder::new();

    assert_eq!(frames.state(), LoopState::Dormant);
    assert!(!frames.tick(&mut creature, &mut recorder, &mut NoOpFrameObserver));
    assert_eq!(creature.frame(), 0);
    assert!(recorder.is_empty());
}

#[test]
fn start_gesture_takes_effect_once() {
    let mut frames = FrameLoop::default();
    assert!(frames.start());
    assert!(!frames.start());
    assert!(frames.is_running());

    frames.stop();
    assert!(!frames.start());
    assert_eq!(frames.state(), LoopState::Stopped);
}

#[test]
fn tick_updates_then_renders() {
    let mut frames = FrameLoop::new();
    let mut creature = creature();
    let mut recorder = CommandRecorder::new();
    frames.start();

    creature.set_target(Vec2::new(300.0, 120.0));
    for _ in 0..3 {
        recorder.clear();
        assert!(frames.tick(&mut creature, &mut recorder, &mut NoOpFrameObserver));
        assert!(recorder.strokes() > 0);
    }
    assert_eq!(creature.frame(), 3);
    assert!(creature.head().x > 200.0);

    frames.stop();
    assert!(!frames.tick(&mut creature, &mut recorder, &mut NoOpFrameObserver));
    assert_eq!(creature.frame(), 3);
}

#[test]
fn mouse_always_steers() {
    let mut input = FollowInput::new(false);
    assert!(input.is_active());
    let at = Vec2::new(10.0f32, 20.0);
    assert_eq!(input.pointer_move(PointerKind::Mouse, at), Some(at));
    input.pointer_up();
    assert_eq!(input.pointer_move(PointerKind::Mouse, at), Some(at));
}

#[test]
fn touch_follows_only_while_pressed() {
    let mut input = FollowInput::new(true);
    let at = Vec2::new(5.0f64, 5.0);
    assert!(!input.is_active());
    assert_eq!(input.pointer_move(PointerKind::Touch, at), None);

    assert_eq!(input.pointer_down(at), Some(at));
    assert_eq!(input.pointer_move(PointerKind::Touch, at), Some(at));

    input.pointer_cancel();
    assert!(!input.is_active());
    assert_eq!(input.pointer_move(PointerKind::Touch, at), None);
}

#[test]
fn fine_pointer_device_tracks_pen_hover() {
    let mut input = FollowInput::new(false);
    let at = Vec2::new(1.0f32, 2.0);
    assert_eq!(input.pointer_move(PointerKind::Pen, at), Some(at));
    input.pointer_down(at);
    input.pointer_up();
    assert!(input.is_active());
}
