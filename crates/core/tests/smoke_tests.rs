use core::{SceneConfig, SceneDirector};

#[test]
fn long_default_run_keeps_drawing_and_stays_sane() {
    let mut director = SceneDirector::new(SceneConfig::default(), 12_345).expect("valid config");

    let mut total_draws = 0usize;
    for _ in 0..1_500 {
        let output = director.tick();
        total_draws += output.draws.len();

        let stats = director.stats();
        assert!(stats.live_agents <= stats.live_mazes * director.config().max_agents);
    }

    assert!(total_draws > 1_000, "a default run should carve thousands of segments");
    assert!(director.snapshot_hash() != 0);
}

#[test]
fn scene_survives_maze_turnover() {
    // Small grids with a proportionate population finish fast; a long run
    // therefore exercises removal plus periodic respawn without the scene
    // wedging or leaking mazes.
    let config = SceneConfig {
        grid_width: 12,
        grid_height: 12,
        max_agents: 12,
        ..SceneConfig::default()
    };
    let mut director = SceneDirector::new(config, 9_876).expect("valid config");

    let mut max_live = 0usize;
    for _ in 0..10_000 {
        let _output = director.tick();
        max_live = max_live.max(director.stats().live_mazes);
    }

    assert!(max_live >= 2, "the cadence should overlap mazes in 10k ticks");
    assert!(
        director.stats().live_mazes <= max_live,
        "live maze count should stay bounded by its own peak"
    );
}

#[test]
fn spawnless_run_is_a_single_wandering_agent() {
    let config = SceneConfig {
        spawn_chance: 0.0,
        new_maze_chance_ratio: 0.0,
        ..SceneConfig::default()
    };
    let mut director = SceneDirector::new(config, 4).expect("valid config");

    for _ in 0..200 {
        let output = director.tick();
        assert!(output.draws.len() <= 1, "one agent can draw at most one segment per tick");
        assert!(!output.fade);
        let stats = director.stats();
        assert_eq!(stats.live_mazes, 1);
        assert_eq!(stats.live_agents, 1);
    }
}
