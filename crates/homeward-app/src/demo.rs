//! Built-in map used when no `--map` is given.

use glam::Vec2;

use homeward_core::geometry::Rect;
use homeward_core::map::{MapData, MapEntity, MapTile, HOME_CANDIDATE_NAME, PLAYER_START_NAME};

const HALF_WIDTH: f32 = 2000.0;
const HALF_HEIGHT: f32 = 1400.0;
const BORDER: f32 = 64.0;
const TILE: f32 = 64.0;
const TILESET_SIZE: u32 = 4;

fn entity(name: &str, x: f32, y: f32) -> MapEntity {
    MapEntity {
        name: name.to_string(),
        position: Vec2::new(x, y),
    }
}

/// A walled field. The player starts in the middle, one Home candidate
/// sits down each axis, rocks fill the diagonals and enemies come from the
/// corners and edges.
pub fn demo_map() -> MapData {
    let (w, h) = (HALF_WIDTH, HALF_HEIGHT);
    let borders = vec![
        Rect::new(-w, -h - BORDER, 2.0 * w, BORDER),
        Rect::new(-w, h, 2.0 * w, BORDER),
        Rect::new(-w - BORDER, -h, BORDER, 2.0 * h),
        Rect::new(w, -h, BORDER, 2.0 * h),
    ];

    let mut objects = Vec::new();
    for (sx, sy) in [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)] {
        objects.push(Rect::from_center(Vec2::new(sx * 800.0, sy * 600.0), Vec2::splat(128.0)));
        objects.push(Rect::from_center(
            Vec2::new(sx * 1300.0, sy * 900.0),
            Vec2::new(256.0, 96.0),
        ));
    }

    let mut tiles = Vec::new();
    let (cols, rows) = ((2.0 * w / TILE) as i32, (2.0 * h / TILE) as i32);
    for row in 0..rows {
        for col in 0..cols {
            tiles.push(MapTile {
                position: Vec2::new(-w + col as f32 * TILE, -h + row as f32 * TILE),
                tile: (row * 7 + col * 3).unsigned_abs() % TILESET_SIZE,
            });
        }
    }

    MapData {
        tiles,
        objects,
        borders,
        health_packs: vec![Vec2::new(400.0, 400.0), Vec2::new(-464.0, -464.0)],
        entities: vec![
            entity(PLAYER_START_NAME, 0.0, 0.0),
            entity(HOME_CANDIDATE_NAME, 1600.0, 0.0),
            entity(HOME_CANDIDATE_NAME, -1600.0, 0.0),
            entity(HOME_CANDIDATE_NAME, 0.0, 1000.0),
            entity(HOME_CANDIDATE_NAME, 0.0, -1000.0),
            entity("Spawner", 1800.0, 1200.0),
            entity("Spawner", -1800.0, 1200.0),
            entity("Spawner", 1800.0, -1200.0),
            entity("Spawner", -1800.0, -1200.0),
            entity("Spawner", 1000.0, 1200.0),
            entity("Spawner", -1000.0, -1200.0),
        ],
    }
}
