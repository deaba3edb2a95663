use wyrm::{Creature, CreatureConfig, NoOpFrameObserver, Vec2, Viewport};

fn creature_at(width: f64, height: f64) -> Creature<f64> {
    let config = CreatureConfig::new().with_move_speed(0.04);
    let mut creature = Creature::new(config).expect("default layout is valid");
    creature.resize(&Viewport::new(width, height, 1.0), &mut NoOpFrameObserver);
    creature
}

#[test]
fn rebuild_lays_spine_behind_center() {
    let creature = creature_at(800.0, 600.0);
    let chain = creature.chain();
    assert_eq!(chain.len(), 84);
    assert_eq!(creature.head(), Vec2::new(400.0, 300.0));
    assert_eq!(creature.target(), creature.head());

    let first = chain.points()[0].pos;
    assert_eq!(first.x, 400.0 - 8.0);
    assert_eq!(first.y, 300.0);
}

#[test]
fn rebuild_is_bitwise_reproducible() {
    let a = creature_at(1024.0, 768.0);
    let b = creature_at(1024.0, 768.0);
    assert_eq!(a.chain().points(), b.chain().points());
}

#[test]
fn rebuild_discards_previous_pose() {
    let mut creature = creature_at(800.0, 600.0);
    creature.set_target(Vec2::new(10.0, 10.0));
    for _ in 0..50 {
        creature.update(&mut NoOpFrameObserver);
    }
    creature.resize(&Viewport::new(800.0, 600.0, 1.0), &mut NoOpFrameObserver);
    let fresh = creature_at(800.0, 600.0);
    assert_eq!(creature.chain().points(), fresh.chain().points());
    assert_eq!(creature.head(), fresh.head());
}

#[test]
fn head_eases_by_move_speed() {
    let mut creature = creature_at(1000.0, 1000.0);
    assert_eq!(creature.head(), Vec2::new(500.0, 500.0));
    creature.set_target(Vec2::new(700.0, 500.0));
    creature.update(&mut NoOpFrameObserver);
    let head = creature.head();
    assert!((head.x - 508.0).abs() < 1e-9, "head.x = {}", head.x);
    assert!((head.y - 500.0).abs() < 1e-9, "head.y = {}", head.y);
}

#[test]
fn head_converges_without_overshoot() {
    let mut creature = creature_at(1000.0, 1000.0);
    let target = Vec2::new(820.0, 260.0);
    creature.set_target(target);

    let mut dist = creature.head().distance(target);
    for _ in 0..300 {
        creature.update(&mut NoOpFrameObserver);
        let next = creature.head().distance(target);
        assert!(next < dist, "distance grew from {} to {}", dist, next);
        let head = creature.head();
        assert!(head.x <= target.x && head.y >= target.y, "overshot to {:?}", head);
        dist = next;
    }
    assert!(dist < 0.01, "still {} away after 300 frames", dist);
}

#[test]
fn links_never_exceed_segment_length() {
    let mut creature = creature_at(900.0, 700.0);
    let seg_len = creature.config().seg_len;

    // wander: circle, then sudden jumps across the canvas
    for frame in 0..600 {
        let t = frame as f64 * 0.05;
        let target = if frame % 150 < 100 {
            Vec2::new(450.0 + 300.0 * t.cos(), 350.0 + 250.0 * t.sin())
        } else {
            Vec2::new((frame * 37 % 900) as f64, (frame * 53 % 700) as f64)
        };
        creature.set_target(target);
        creature.update(&mut NoOpFrameObserver);
        let longest = creature.chain().max_link();
        assert!(longest <= seg_len + 1e-9, "frame {}: link of {}", frame, longest);
    }
}

#[test]
fn slack_links_are_left_alone() {
    let mut creature = creature_at(800.0, 600.0);
    creature.update(&mut NoOpFrameObserver);
    let settled = creature.chain().positions();
    // head already at target: nothing is stretched, nothing moves
    creature.update(&mut NoOpFrameObserver);
    for (a, b) in creature.chain().positions().iter().zip(settled.iter()) {
        assert!(a.distance(*b) < 1e-9, "{:?} drifted to {:?}", b, a);
    }
}
