//! Animation system.
//!
//! [`animation`] advances animations based on elapsed time and updates the
//! visible sprite frame.
//!
//! # Animation Flow
//!
//! 1. Animation data is defined in [`AnimationStore`](crate::resources::animationstore::AnimationStore)
//! 2. Entities have an [`Animation`](crate::components::animation::Animation) component pointing to a key
//! 3. The `animation` system advances frames based on `fps` and updates the
//!    [`Sprite`](crate::components::sprite::Sprite) offset

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::{AnimationSpec, AnimationStore};
use crate::resources::worldtime::WorldTime;

/// Advance one animation by `delta` seconds.
///
/// Accumulated time is consumed one whole frame duration at a time, so a
/// large delta catches up over several frames in a single call. A looping
/// animation wraps past the last frame; a non-looping one clamps on it,
/// marks itself finished and stops accumulating.
pub fn advance_animation(anim: &mut Animation, spec: &AnimationSpec, delta: f32) {
    if anim.finished {
        return;
    }
    anim.elapsed_time += delta;

    let frame_duration = spec.frame_duration();
    while anim.elapsed_time >= frame_duration {
        anim.elapsed_time -= frame_duration;
        anim.frame_index += 1;

        if anim.frame_index >= spec.frame_count {
            if spec.looped {
                anim.frame_index = 0;
            } else {
                anim.frame_index = spec.frame_count - 1; // stay on last frame
                anim.finished = true;
                break;
            }
        }
    }
}

/// Sheet offset of the current frame (horizontal strip layout).
pub fn frame_offset(anim: &Animation, spec: &AnimationSpec) -> Vec2 {
    Vec2::new(
        spec.origin.x + anim.frame_index as f32 * spec.frame_width,
        spec.origin.y,
    )
}

/// Advance animation playback and update the sprite frame.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Looks up animation data from [`AnimationStore`].
/// - Mutates [`Animation`] component state and the [`Sprite`] offset.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim_comp, mut sprite) in query.iter_mut() {
        if let Some(spec) = animation_store.get(&anim_comp.animation_key) {
            advance_animation(&mut anim_comp, spec, time.delta);

            // Update the sprite's offset to display the current frame
            sprite.offset = frame_offset(&anim_comp, spec);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(frame_count: usize, fps: f32, looped: bool) -> AnimationSpec {
        AnimationSpec {
            tex_key: "sheet".into(),
            origin: Vec2::ZERO,
            frame_width: 32.0,
            frame_height: 32.0,
            frame_count,
            fps,
            looped,
        }
    }

    #[test]
    fn test_no_advance_below_frame_duration() {
        let spec = spec(8, 30.0, true);
        let mut anim = Animation::new("a");
        advance_animation(&mut anim, &spec, 0.01);
        assert_eq!(anim.frame_index, 0);
        assert!(anim.elapsed_time > 0.0);
    }

    #[test]
    fn test_advance_one_frame_at_duration() {
        let spec = spec(8, 30.0, true);
        let mut anim = Animation::new("a");
        advance_animation(&mut anim, &spec, spec.frame_duration());
        assert_eq!(anim.frame_index, 1);
    }

    #[test]
    fn test_looping_wraps_to_zero_after_full_cycle() {
        let spec = spec(8, 30.0, true);
        let mut anim = Animation::new("a");
        for _ in 0..spec.frame_count {
            advance_animation(&mut anim, &spec, spec.frame_duration());
        }
        assert_eq!(anim.frame_index, 0);
        assert!(!anim.finished);
    }

    #[test]
    fn test_non_looping_clamps_on_last_frame() {
        let spec = spec(4, 30.0, false);
        let mut anim = Animation::new("a");
        for _ in 0..16 {
            advance_animation(&mut anim, &spec, spec.frame_duration());
        }
        assert_eq!(anim.frame_index, spec.frame_count - 1);
        assert!(anim.finished);

        // Further advances are no-ops.
        advance_animation(&mut anim, &spec, 1.0);
        assert_eq!(anim.frame_index, spec.frame_count - 1);

        // A reset restarts playback from the first frame.
        anim.reset();
        assert_eq!(anim.frame_index, 0);
        assert!(!anim.finished);
        advance_animation(&mut anim, &spec, spec.frame_duration());
        assert_eq!(anim.frame_index, 1);
    }

    #[test]
    fn test_large_delta_catches_up_multiple_frames() {
        let spec = spec(8, 30.0, true);
        let mut anim = Animation::new("a");
        advance_animation(&mut anim, &spec, 3.5 * spec.frame_duration());
        assert_eq!(anim.frame_index, 3);
    }

    #[test]
    fn test_frame_offset_walks_the_strip() {
        let mut spec = spec(8, 30.0, true);
        spec.origin = Vec2::new(0.0, 64.0);
        let mut anim = Animation::new("a");
        assert_eq!(frame_offset(&anim, &spec), Vec2::new(0.0, 64.0));
        anim.frame_index = 5;
        assert_eq!(frame_offset(&anim, &spec), Vec2::new(160.0, 64.0));
    }

    #[test]
    fn test_frame_index_stays_in_range() {
        let spec = spec(3, 24.0, true);
        let mut anim = Animation::new("a");
        let mut t = 0.0;
        while t < 2.0 {
            advance_animation(&mut anim, &spec, 0.017);
            assert!(anim.frame_index < spec.frame_count);
            t += 0.017;
        }
    }
}
