//! Map data as handed over by the map provider, and its validated,
//! classified form.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::geometry::Rect;

/// Entity layer name for the player start.
pub const PLAYER_START_NAME: &str = "Player";
/// Entity layer name for home candidates.
pub const HOME_CANDIDATE_NAME: &str = "Home";

/// Render-only ground or decoration tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapTile {
    /// Top-left corner in world pixels.
    pub position: Vec2,
    /// Tileset index, opaque to the simulation.
    pub tile: u32,
}

/// A named point from the entity layer. Anything that is not the player
/// start or a home candidate is an enemy spawn point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapEntity {
    pub name: String,
    pub position: Vec2,
}

/// Raw map contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapData {
    pub tiles: Vec<MapTile>,
    /// Visible solid objects.
    pub objects: Vec<Rect>,
    /// Invisible border rectangles.
    pub borders: Vec<Rect>,
    /// Top-left corners of health packs.
    pub health_packs: Vec<Vec2>,
    pub entities: Vec<MapEntity>,
}

/// Map data after classification and validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionLayout {
    pub player_start: Vec2,
    pub home_candidates: Vec<Vec2>,
    pub spawn_points: Vec<Vec2>,
    pub objects: Vec<Rect>,
    pub borders: Vec<Rect>,
    pub health_packs: Vec<Vec2>,
    pub tiles: Vec<MapTile>,
}

fn check_rects(layer: &'static str, rects: &[Rect]) -> Result<(), SetupError> {
    for (index, r) in rects.iter().enumerate() {
        let finite = r.x.is_finite() && r.y.is_finite() && r.w.is_finite() && r.h.is_finite();
        if !finite || r.w <= 0.0 || r.h <= 0.0 {
            return Err(SetupError::DegenerateRect { layer, index });
        }
    }
    Ok(())
}

impl SessionLayout {
    pub fn from_map(map: &MapData) -> Result<Self, SetupError> {
        check_rects("objects", &map.objects)?;
        check_rects("borders", &map.borders)?;

        let mut starts = Vec::new();
        let mut home_candidates = Vec::new();
        let mut spawn_points = Vec::new();
        for entity in &map.entities {
            match entity.name.as_str() {
                PLAYER_START_NAME => starts.push(entity.position),
                HOME_CANDIDATE_NAME => home_candidates.push(entity.position),
                _ => spawn_points.push(entity.position),
            }
        }

        let player_start = match starts.as_slice() {
            [] => return Err(SetupError::MissingPlayerStart),
            [start] => *start,
            _ => return Err(SetupError::DuplicatePlayerStart { count: starts.len() }),
        };
        if spawn_points.is_empty() {
            return Err(SetupError::NoSpawnPoints);
        }
        if home_candidates.is_empty() {
            return Err(SetupError::NoHomeCandidates);
        }

        Ok(Self {
            player_start,
            home_candidates,
            spawn_points,
            objects: map.objects.clone(),
            borders: map.borders.clone(),
            health_packs: map.health_packs.clone(),
            tiles: map.tiles.clone(),
        })
    }
}
