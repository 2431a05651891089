//! Player controller operations.
//!
//! Free functions over the player's components so the systems and the
//! tests can drive them without a world.

use glam::Vec2;

use homeward_core::components::{Animation, Body, Health, Hitbox, Invincibility, Motion};
use homeward_core::config::PlayerTuning;
use homeward_core::enums::Facing;
use homeward_core::geometry::{move_and_slide, normalize_or_zero, Rect};

/// Set the movement direction from a raw input vector. Non-zero input is
/// normalized so diagonals are not faster; zero input stays zero.
pub fn set_move_direction(motion: &mut Motion, input: Vec2) {
    motion.direction = normalize_or_zero(input);
}

/// Facing for a movement direction. Horizontal wins when both axes move;
/// no movement keeps the previous facing.
pub fn facing_for(direction: Vec2, previous: Facing) -> Facing {
    if direction.x > 0.0 {
        Facing::Right
    } else if direction.x < 0.0 {
        Facing::Left
    } else if direction.y < 0.0 {
        Facing::Up
    } else if direction.y > 0.0 {
        Facing::Down
    } else {
        previous
    }
}

/// Step the walk cycle: advance while moving, reset when standing still.
pub fn animate(animation: &mut Animation, direction: Vec2, dt: f32, tuning: &PlayerTuning) {
    animation.facing = facing_for(direction, animation.facing);
    if direction == Vec2::ZERO {
        animation.frame = 0.0;
    } else {
        let frames = tuning.frames_per_facing.max(1) as f32;
        animation.frame = (animation.frame + tuning.animation_fps * dt) % frames;
    }
}

/// Move a hitbox with obstacle resolution and re-center the sprite on it.
pub fn slide_body(body: &mut Body, hitbox: &mut Hitbox, motion: &Motion, dt: f32, obstacles: &[Rect]) {
    hitbox.rect = move_and_slide(hitbox.rect, motion.direction, motion.speed * dt, obstacles);
    body.rect.set_center(hitbox.rect.center());
}

/// One frame of player motion: position, facing, and animation.
pub fn advance(
    body: &mut Body,
    hitbox: &mut Hitbox,
    animation: &mut Animation,
    motion: &Motion,
    dt: f32,
    obstacles: &[Rect],
    tuning: &PlayerTuning,
) {
    slide_body(body, hitbox, motion, dt, obstacles);
    animate(animation, motion.direction, dt, tuning);
}

/// Apply damage unless invincible. Health is clamped at zero. Returns
/// whether the damage landed.
pub fn take_damage(health: &mut Health, invincibility: &mut Invincibility, amount: u8, now: f64) -> bool {
    if invincibility.active {
        return false;
    }
    health.current = (health.current - i32::from(amount)).max(0);
    invincibility.active = true;
    invincibility.since_secs = now;
    true
}

/// Clear invincibility once `duration` has passed since the last hit.
pub fn update_invincibility(invincibility: &mut Invincibility, now: f64, duration: f64) {
    if invincibility.active && now - invincibility.since_secs >= duration {
        invincibility.active = false;
    }
}

/// Aim toward the pointer relative to the screen center. A pointer exactly
/// on the center keeps the previous aim.
pub fn aim_from_pointer(pointer: Vec2, screen_center: Vec2, previous: Vec2) -> Vec2 {
    let aim = normalize_or_zero(pointer - screen_center);
    if aim == Vec2::ZERO {
        previous
    } else {
        aim
    }
}

/// Gun center orbiting the player at `distance` along the aim.
pub fn gun_center(player_center: Vec2, aim: Vec2, distance: f32) -> Vec2 {
    player_center + aim * distance
}

/// Render rotation for the right-facing gun art, in degrees, plus whether
/// the art must be mirrored vertically (aiming left).
pub fn gun_orientation(aim: Vec2) -> (f32, bool) {
    let angle = aim.x.atan2(aim.y).to_degrees() - 90.0;
    (angle, aim.x < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeward_core::config::GameConfig;
    use proptest::prelude::*;

    fn player_parts() -> (Body, Hitbox, Animation, Motion) {
        let cfg = GameConfig::default();
        let body = Body {
            rect: Rect::from_center(Vec2::ZERO, Vec2::new(cfg.player.sprite_width, cfg.player.sprite_height)),
        };
        let hitbox = Hitbox {
            rect: body.rect.inflate(cfg.player.hitbox_inflate_x, cfg.player.hitbox_inflate_y),
        };
        (body, hitbox, Animation::default(), Motion { direction: Vec2::ZERO, speed: cfg.player.speed })
    }

    #[test]
    fn test_set_move_direction_normalizes() {
        let mut motion = Motion::default();
        set_move_direction(&mut motion, Vec2::new(1.0, 1.0));
        assert!((motion.direction.length() - 1.0).abs() < 1e-6);
        set_move_direction(&mut motion, Vec2::ZERO);
        assert_eq!(motion.direction, Vec2::ZERO);
    }

    #[test]
    fn test_facing_horizontal_precedence() {
        assert_eq!(facing_for(Vec2::new(-0.7, 0.7), Facing::Up), Facing::Left);
        assert_eq!(facing_for(Vec2::new(0.0, -1.0), Facing::Left), Facing::Up);
        assert_eq!(facing_for(Vec2::ZERO, Facing::Right), Facing::Right);
    }

    #[test]
    fn test_advance_moves_and_keeps_sprite_centered() {
        let tuning = PlayerTuning::default();
        let (mut body, mut hitbox, mut anim, mut motion) = player_parts();
        set_move_direction(&mut motion, Vec2::new(1.0, 0.0));
        advance(&mut body, &mut hitbox, &mut anim, &motion, 0.125, &[], &tuning);
        assert_eq!(body.rect.center(), Vec2::new(62.5, 0.0));
        assert_eq!(hitbox.rect.center(), body.rect.center());
        assert_eq!(anim.facing, Facing::Right);
        assert!(anim.frame > 0.0);

        set_move_direction(&mut motion, Vec2::ZERO);
        advance(&mut body, &mut hitbox, &mut anim, &motion, 0.125, &[], &tuning);
        assert_eq!(anim.frame, 0.0);
        assert_eq!(anim.facing, Facing::Right);
    }

    #[test]
    fn test_animation_wraps_frame_count() {
        let tuning = PlayerTuning::default();
        let mut anim = Animation::default();
        for _ in 0..40 {
            animate(&mut anim, Vec2::new(0.0, 1.0), 0.125, &tuning);
            assert!(anim.frame < tuning.frames_per_facing as f32);
        }
    }

    #[test]
    fn test_take_damage_respects_invincibility() {
        let mut health = Health { current: 5, max: 5 };
        let mut inv = Invincibility::default();
        assert!(take_damage(&mut health, &mut inv, 2, 1.0));
        assert_eq!(health.current, 3);
        assert!(inv.active);

        assert!(!take_damage(&mut health, &mut inv, 2, 1.5));
        assert_eq!(health.current, 3);

        update_invincibility(&mut inv, 1.9, 1.0);
        assert!(inv.active);
        update_invincibility(&mut inv, 2.0, 1.0);
        assert!(!inv.active);

        assert!(take_damage(&mut health, &mut inv, 9, 2.0));
        assert_eq!(health.current, 0);
    }

    #[test]
    fn test_aim_keeps_previous_at_center() {
        let center = Vec2::new(640.0, 360.0);
        let prev = Vec2::new(0.0, 1.0);
        assert_eq!(aim_from_pointer(center, center, prev), prev);
        assert_eq!(aim_from_pointer(Vec2::new(740.0, 360.0), center, prev), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_gun_orientation() {
        let (angle, flip) = gun_orientation(Vec2::new(1.0, 0.0));
        assert!(angle.abs() < 1e-4);
        assert!(!flip);
        let (angle, flip) = gun_orientation(Vec2::new(-1.0, 0.0));
        assert!((angle + 180.0).abs() < 1e-4);
        assert!(flip);
        assert_eq!(gun_center(Vec2::ZERO, Vec2::new(0.0, 1.0), 140.0), Vec2::new(0.0, 140.0));
    }

    proptest! {
        #[test]
        fn prop_health_stays_bounded(hits in proptest::collection::vec((0u8..4, 0.0f64..3.0), 0..40)) {
            let mut health = Health { current: 5, max: 5 };
            let mut inv = Invincibility::default();
            let mut now = 0.0;
            for (amount, gap) in hits {
                now += gap;
                update_invincibility(&mut inv, now, 1.0);
                let was_invincible = inv.active;
                let before = health.current;
                let landed = take_damage(&mut health, &mut inv, amount, now);
                prop_assert!(health.current >= 0 && health.current <= health.max);
                if was_invincible {
                    prop_assert!(!landed);
                    prop_assert_eq!(health.current, before);
                }
            }
        }
    }
}
