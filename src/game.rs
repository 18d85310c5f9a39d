//! High-level game loop.
//!
//! [`GameLoop`] owns the ECS world and the per-tick schedule and exposes the
//! explicit surface the platform adapter drives:
//!
//! 1. [`GameLoop::new`] – build the world and insert resources
//! 2. [`GameLoop::init`] – load animation definitions and spawn the player
//! 3. [`GameLoop::tick`] – advance one simulate-then-render pass and return
//!    the draw commands for the frame
//! 4. [`GameLoop::should_exit`] – observe the exit request
//!
//! There is no engine base type to inherit from; a windowed front end calls
//! these four methods around its own event loop.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::animation::Animation;
use crate::components::group::Group;
use crate::components::health::Health;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::components::screenbound::ScreenBound;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::resources::animationstore::AnimationStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputSample, InputState};
use crate::resources::renderqueue::{DrawCommand, RenderQueue};
use crate::resources::rng::SpawnRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::spawner::EnemySpawner;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::bounds::clamp_to_screen;
use crate::systems::input::check_exit;
use crate::systems::inputcontroller::input_controller;
use crate::systems::movement::movement;
use crate::systems::offscreen::offscreen_cull;
use crate::systems::render::render;
use crate::systems::spawner::enemy_spawner;
use crate::systems::time::update_world_time;

/// The simulation core: world, schedule and the tick contract.
pub struct GameLoop {
    world: World,
    schedule: Schedule,
}

impl GameLoop {
    /// Build the world, insert all resources and wire the tick schedule.
    ///
    /// `seed` feeds the spawner's random source, so a session is fully
    /// deterministic given its config, seed and input trace.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(1.0));
        world.insert_resource(WorldSignals::default());
        world.insert_resource(ScreenSize {
            w: config.viewport_width as i32,
            h: config.viewport_height as i32,
        });
        world.insert_resource(InputState::default());
        world.insert_resource(RenderQueue::default());
        world.insert_resource(SpawnRng::with_seed(seed));
        world.insert_resource(config);

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                check_exit,
                input_controller,
                clamp_to_screen,
                enemy_spawner,
                movement,
                animation,
                offscreen_cull,
                render,
            )
                .chain(),
        );
        schedule
            .initialize(&mut world)
            .expect("Failed to initialize schedule");

        Self { world, schedule }
    }

    /// Load the animation set and populate the session: the player ship at
    /// `player_start` and the spawner configured to emit `enemy_key` mines.
    ///
    /// Both keys must exist in `animations`; a missing key is a caller bug.
    pub fn init(
        &mut self,
        animations: AnimationStore,
        player_key: &str,
        player_start: Vec2,
        enemy_key: &str,
    ) {
        let player_spec = animations
            .get(player_key)
            .expect("player animation not in store")
            .clone();
        assert!(
            animations.get(enemy_key).is_some(),
            "enemy animation not in store"
        );

        let config = self.world.resource::<GameConfig>().clone();

        self.world.insert_resource(EnemySpawner::new(
            enemy_key,
            config.spawn_interval,
            Vec2::new(-config.enemy_drift_speed, 0.0),
        ));
        self.world.insert_resource(animations);

        self.world.spawn((
            Group::new("player"),
            MapPosition::new(player_start.x, player_start.y),
            ZIndex(0),
            Sprite {
                tex_key: player_spec.tex_key.clone(),
                width: player_spec.frame_width,
                height: player_spec.frame_height,
                offset: player_spec.origin,
            },
            Animation::new(player_key),
            InputControlled::from_speed(config.move_speed),
            ScreenBound,
            Health::default(),
            Tint::default(),
            Scale::default(),
        ));

        log::info!(
            "session ready: player '{player_key}' at ({}, {}), enemies '{enemy_key}' every {}s",
            player_start.x,
            player_start.y,
            config.spawn_interval
        );
    }

    /// Advance one tick and return the frame's draw commands in draw order.
    pub fn tick(&mut self, dt: f32, input: &InputSample) -> &[DrawCommand] {
        update_world_time(&mut self.world, dt);
        self.world
            .resource_mut::<InputState>()
            .apply_sample(input);

        self.schedule.run(&mut self.world);
        self.world.clear_trackers();

        &self.world.resource::<RenderQueue>().commands
    }

    /// True once an exit request has been observed.
    pub fn should_exit(&self) -> bool {
        self.world.resource::<WorldSignals>().has_flag("quit_game")
    }

    /// Read access to the world, for adapters and tests.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world, for adapters and tests.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
