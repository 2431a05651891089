#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::{FrameInput, PlayerCommand};
    use crate::config::GameConfig;
    use crate::enums::*;
    use crate::error::SetupError;
    use crate::events::GameEvent;
    use crate::geometry::Rect;
    use crate::map::{MapData, MapEntity, SessionLayout};
    use crate::state::GameStateSnapshot;
    use crate::types::{EntityId, SimTime};

    fn entity(name: &str, x: f32, y: f32) -> MapEntity {
        MapEntity {
            name: name.to_string(),
            position: Vec2::new(x, y),
        }
    }

    fn valid_map() -> MapData {
        MapData {
            objects: vec![Rect::new(0.0, 0.0, 64.0, 64.0)],
            borders: vec![Rect::new(-64.0, -64.0, 64.0, 1000.0)],
            health_packs: vec![Vec2::new(300.0, 300.0)],
            entities: vec![
                entity("Player", 500.0, 500.0),
                entity("Home", 2000.0, 2000.0),
                entity("Home", 100.0, 2000.0),
                entity("Bat", 0.0, 900.0),
                entity("Blob", 900.0, 0.0),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Start,
            GamePhase::Playing,
            GamePhase::Won,
            GamePhase::Lost,
            GamePhase::Exited,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_enemy_kind_serde() {
        for v in EnemyKind::ALL {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_terminal_phases() {
        assert!(GamePhase::Won.is_terminal());
        assert!(GamePhase::Lost.is_terminal());
        assert!(!GamePhase::Playing.is_terminal());
        assert!(!GamePhase::Start.is_terminal());
        assert!(!GamePhase::Exited.is_terminal());
    }

    #[test]
    fn test_player_command_tagged_json() {
        let json = serde_json::to_string(&PlayerCommand::Restart).unwrap();
        assert_eq!(json, r#"{"type":"Restart"}"#);
        let back: PlayerCommand = serde_json::from_str(r#"{"type":"Quit"}"#).unwrap();
        assert_eq!(back, PlayerCommand::Quit);
    }

    #[test]
    fn test_game_event_tagged_json() {
        let event = GameEvent::EnemyKilled {
            id: EntityId(7),
            kind: EnemyKind::Tank,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"EnemyKilled""#));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_key_vector_cancels_opposites() {
        let input = FrameInput {
            up: true,
            down: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.key_vector(), Vec2::new(1.0, 0.0));
        assert_eq!(FrameInput::default().key_vector(), Vec2::ZERO);
    }

    #[test]
    fn test_sim_time_ignores_negative_delta() {
        let mut t = SimTime::default();
        t.advance(0.5);
        t.advance(-1.0);
        assert_eq!(t.frame, 2);
        assert_eq!(t.elapsed_secs, 0.5);
        assert!(t.has_elapsed(0.0, 0.5));
        assert!(!t.has_elapsed(0.25, 0.5));
    }

    #[test]
    fn test_snapshot_default_serializes() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Start);
        assert!(back.player.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_config_json_fills_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"player":{"speed":250.0}}"#).unwrap();
        assert_eq!(config.player.speed, 250.0);
        assert_eq!(config.player.max_health, 5);
        assert_eq!(config.waves, GameConfig::default().waves);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = GameConfig::default();
        config.waves.min_spawn_interval_secs = 3.0;
        assert!(matches!(
            config.validate(),
            Err(SetupError::InvalidConfig {
                field: "waves.min_spawn_interval_secs",
                ..
            })
        ));

        let mut config = GameConfig::default();
        config.player.max_health = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.enemy.fast.speed = -1.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.player.hitbox_inflate_x = -96.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_layout_classifies_entities() {
        let layout = SessionLayout::from_map(&valid_map()).unwrap();
        assert_eq!(layout.player_start, Vec2::new(500.0, 500.0));
        assert_eq!(layout.home_candidates.len(), 2);
        assert_eq!(layout.spawn_points.len(), 2);
        assert_eq!(layout.objects.len(), 1);
        assert_eq!(layout.borders.len(), 1);
    }

    #[test]
    fn test_layout_errors() {
        let mut map = valid_map();
        map.entities.retain(|e| e.name != "Player");
        assert_eq!(SessionLayout::from_map(&map), Err(SetupError::MissingPlayerStart));

        let mut map = valid_map();
        map.entities.push(entity("Player", 1.0, 1.0));
        assert_eq!(
            SessionLayout::from_map(&map),
            Err(SetupError::DuplicatePlayerStart { count: 2 })
        );

        let mut map = valid_map();
        map.entities.retain(|e| e.name == "Player" || e.name == "Home");
        assert_eq!(SessionLayout::from_map(&map), Err(SetupError::NoSpawnPoints));

        let mut map = valid_map();
        map.entities.retain(|e| e.name != "Home");
        assert_eq!(SessionLayout::from_map(&map), Err(SetupError::NoHomeCandidates));

        let mut map = valid_map();
        map.borders.push(Rect::new(0.0, 0.0, 0.0, 10.0));
        assert_eq!(
            SessionLayout::from_map(&map),
            Err(SetupError::DegenerateRect {
                layer: "borders",
                index: 1
            })
        );
    }

    #[test]
    fn test_setup_error_messages() {
        let msg = SetupError::DegenerateRect {
            layer: "objects",
            index: 3,
        }
        .to_string();
        assert!(msg.contains("objects"));
        assert!(msg.contains("#3"));
        assert_eq!(SetupError::NoSpawnPoints.to_string(), "map has no enemy spawn points");
    }
}
