use wyrm::{Creature, CreatureConfig, FrameObserver, NoOpFrameObserver, Vec2, Viewport};

fn resting_creature() -> Creature<f64> {
    let mut creature = Creature::new(CreatureConfig::new()).expect("valid config");
    creature.resize(&Viewport::new(640.0, 480.0, 2.0), &mut NoOpFrameObserver);
    creature
}

#[derive(Default)]
struct StepCounter {
    updates: u64,
    walked: u64,
}

impl FrameObserver for StepCounter {
    fn on_update(&mut self, _frame: u64, walked: bool) {
        self.updates += 1;
        if walked {
            self.walked += 1;
        }
    }
}

#[test]
fn idle_creature_breathes_but_does_not_walk() {
    let mut creature = resting_creature();
    let mut counter = StepCounter::default();
    for _ in 0..200 {
        creature.update(&mut counter);
    }
    assert_eq!(creature.gait().walk_phase(), 0.0);
    assert!(creature.gait().breathe_phase() > 0.0);
    assert_eq!(counter.updates, 200);
    assert_eq!(counter.walked, 0);
}

#[test]
fn moving_creature_walks() {
    let mut creature = resting_creature();
    creature.set_target(Vec2::new(600.0, 100.0));
    let mut counter = StepCounter::default();
    for _ in 0..20 {
        creature.update(&mut counter);
    }
    assert_eq!(counter.walked, 20);
    let expected = 20.0 * creature.config().gait.walk_rate;
    assert!((creature.gait().walk_phase() - expected).abs() < 1e-9);
}

#[test]
fn walking_stops_once_target_is_reached() {
    let mut creature = resting_creature();
    creature.set_target(Vec2::new(330.0, 250.0));
    for _ in 0..400 {
        creature.update(&mut NoOpFrameObserver);
    }
    let frozen = creature.gait().walk_phase();
    let mut counter = StepCounter::default();
    for _ in 0..10 {
        creature.update(&mut counter);
    }
    assert_eq!(counter.walked, 0);
    assert_eq!(creature.gait().walk_phase(), frozen);
}

#[test]
fn phases_stay_wrapped() {
    let mut creature = resting_creature();
    for frame in 0..5000 {
        // keep the head chasing so the walk phase never idles
        let x = if frame % 2 == 0 { 0.0 } else { 640.0 };
        creature.set_target(Vec2::new(x, 240.0));
        creature.update(&mut NoOpFrameObserver);
        let walk = creature.gait().walk_phase();
        let breathe = creature.gait().breathe_phase();
        assert!((0.0..core::f64::consts::TAU).contains(&walk), "walk phase {}", walk);
        assert!((0.0..1.0).contains(&breathe), "breathe phase {}", breathe);
    }
}

#[test]
fn phases_survive_resize() {
    let mut creature = resting_creature();
    creature.set_target(Vec2::new(0.0, 0.0));
    for _ in 0..30 {
        creature.update(&mut NoOpFrameObserver);
    }
    let gait = *creature.gait();
    creature.resize(&Viewport::new(1280.0, 720.0, 1.0), &mut NoOpFrameObserver);
    assert_eq!(*creature.gait(), gait);
}
