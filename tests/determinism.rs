use wyrm::{CommandRecorder, Creature, CreatureConfig, NoOpFrameObserver, Vec2, Viewport};

fn run(frames: usize) -> (Vec<Vec2<f32>>, CommandRecorder<f32>) {
    let mut creature = Creature::new(CreatureConfig::new()).expect("valid config");
    creature.resize(&Viewport::new(1280.0, 720.0, 1.5), &mut NoOpFrameObserver);
    for i in 0..frames {
        let t = i as f32 * 0.02;
        creature.set_target(Vec2::new(640.0 + 400.0 * t.cos(), 360.0 + 200.0 * (2.0 * t).sin()));
        creature.update(&mut NoOpFrameObserver);
    }
    let mut recorder = CommandRecorder::new();
    creature.render(&mut recorder, &mut NoOpFrameObserver);
    (creature.chain().positions(), recorder)
}

#[test]
fn creature_deterministic() {
    let results: Vec<_> = (0..5).map(|_| run(240)).collect();
    for (positions, recorder) in &results[1..] {
        assert_eq!(&results[0].0, positions);
        assert_eq!(results[0].1.commands(), recorder.commands());
    }
}
