//! Enemy spawning system.
//!
//! Every tick the spawner compares total simulated time against its cadence
//! and, when the interval has elapsed, spawns one enemy just past the right
//! viewport edge at a random height inside the spawn band. Spawned enemies
//! drift left at a constant velocity until the cull system removes them.

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::offscreen::DespawnOffscreen;
use crate::components::rigidbody::RigidBody;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::resources::animationstore::AnimationStore;
use crate::resources::rng::SpawnRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::spawner::EnemySpawner;
use crate::resources::worldtime::WorldTime;

/// Vertical margin of the spawn band, in pixels from each viewport edge.
const SPAWN_BAND_MARGIN: i32 = 100;

/// Spawn one enemy when the cadence interval has elapsed.
///
/// The spawn position is `(w + frame_width / 2, rng in [100, h - 100))`.
/// A viewport shorter than twice the band margin is a configuration error.
pub fn enemy_spawner(
    mut spawner: ResMut<EnemySpawner>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
    mut rng: ResMut<SpawnRng>,
    animation_store: Res<AnimationStore>,
    mut commands: Commands,
) {
    if time.elapsed - spawner.last_spawn_time <= spawner.interval {
        return;
    }
    spawner.last_spawn_time = time.elapsed;

    let Some(spec) = animation_store.get(&spawner.animation_key) else {
        log::warn!("spawner animation '{}' not in store", spawner.animation_key);
        return;
    };

    debug_assert!(
        screen.h >= 2 * SPAWN_BAND_MARGIN,
        "viewport height {} below spawn band minimum {}",
        screen.h,
        2 * SPAWN_BAND_MARGIN
    );

    let x = screen.w as f32 + spec.frame_width * 0.5;
    let y = rng.0.i32(SPAWN_BAND_MARGIN..screen.h - SPAWN_BAND_MARGIN) as f32;

    commands.spawn((
        Group::new("enemy"),
        MapPosition::new(x, y),
        ZIndex(1),
        Sprite {
            tex_key: spec.tex_key.clone(),
            width: spec.frame_width,
            height: spec.frame_height,
            offset: spec.origin,
        },
        Animation::new(spawner.animation_key.clone()),
        RigidBody::with_velocity(spawner.drift),
        DespawnOffscreen,
        Tint::default(),
        Scale::default(),
    ));

    spawner.spawned += 1;
    log::debug!("spawned enemy #{} at ({x}, {y})", spawner.spawned);
}
