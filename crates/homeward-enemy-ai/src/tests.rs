#[cfg(test)]
mod tests {
    use glam::Vec2;
    use homeward_core::config::EnemyTuning;
    use homeward_core::constants::*;
    use homeward_core::enums::{EnemyKind, EnemyState};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::fsm::{animate, apply_hit, chase_direction, evaluate, Lifecycle};
    use crate::profiles::{choose_kind, get_profile};

    #[test]
    fn test_profile_table_ordering() {
        let tuning = EnemyTuning::default();
        let normal = get_profile(EnemyKind::Normal, &tuning);
        let fast = get_profile(EnemyKind::Fast, &tuning);
        let tank = get_profile(EnemyKind::Tank, &tuning);

        assert!(fast.speed > normal.speed);
        assert!(tank.speed < normal.speed);
        assert_eq!(fast.damage, normal.damage);
        assert!(tank.damage > normal.damage);
        for p in [normal, fast, tank] {
            assert_eq!(p.health, 1);
        }
        assert_eq!(normal.speed, NORMAL_ENEMY_SPEED);
        assert_eq!(tank.damage, TANK_ENEMY_DAMAGE);
    }

    #[test]
    fn test_choose_kind_covers_every_variant() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut seen = [false; 3];
        for _ in 0..200 {
            match choose_kind(&mut rng) {
                EnemyKind::Normal => seen[0] = true,
                EnemyKind::Fast => seen[1] = true,
                EnemyKind::Tank => seen[2] = true,
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_choose_kind_is_seeded() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        let xs: Vec<_> = (0..20).map(|_| choose_kind(&mut a)).collect();
        let ys: Vec<_> = (0..20).map(|_| choose_kind(&mut b)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_chase_direction_zero_guarded() {
        let p = Vec2::new(10.0, 10.0);
        assert_eq!(chase_direction(p, p), Vec2::ZERO);
        assert_eq!(chase_direction(Vec2::ZERO, Vec2::new(0.0, 5.0)), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_lethal_hit_enters_dying_once() {
        let hit = apply_hit(1, EnemyState::Alive, 3.0);
        assert!(hit.killed);
        assert_eq!(hit.health, 0);
        assert_eq!(hit.state, EnemyState::Dying { since_secs: 3.0 });

        // A second bullet on the corpse changes nothing and is not a kill.
        let again = apply_hit(hit.health, hit.state, 3.1);
        assert!(!again.killed);
        assert_eq!(again.health, 0);
        assert_eq!(again.state, EnemyState::Dying { since_secs: 3.0 });
    }

    #[test]
    fn test_non_lethal_hit_stays_alive() {
        let hit = apply_hit(3, EnemyState::Alive, 1.0);
        assert!(!hit.killed);
        assert_eq!(hit.health, 2);
        assert_eq!(hit.state, EnemyState::Alive);
    }

    #[test]
    fn test_lifecycle_removal_after_death_duration() {
        let dying = EnemyState::Dying { since_secs: 2.0 };
        assert_eq!(evaluate(EnemyState::Alive, 100.0, ENEMY_DEATH_SECS), Lifecycle::Active);
        assert_eq!(evaluate(dying, 2.25, 0.5), Lifecycle::Lingering);
        assert_eq!(evaluate(dying, 2.5, 0.5), Lifecycle::Remove);
    }

    #[test]
    fn test_animate_wraps() {
        let f = animate(3.5, 0.25, 6.0, 4);
        assert!((f - 1.0).abs() < 1e-6);
        assert_eq!(animate(0.0, 0.0, 6.0, 4), 0.0);
    }
}
