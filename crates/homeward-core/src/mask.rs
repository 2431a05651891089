//! Per-pixel collision masks.
//!
//! A mask is a solid/empty grid the size of a sprite frame. Two masks
//! collide when any solid pixel lands on another solid pixel after placing
//! both at their sprites' top-left corners (truncated to whole pixels).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::enums::EnemyKind;
use crate::error::SetupError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionMask {
    width: u32,
    height: u32,
    /// Row-major solidity.
    bits: Vec<bool>,
}

impl CollisionMask {
    /// Every pixel solid.
    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; (width * height) as usize],
        }
    }

    /// Solid inside the ellipse inscribed in the frame. Stands in for the
    /// round silhouettes of the character art when no image data is loaded.
    pub fn ellipse(width: u32, height: u32) -> Self {
        let rx = width as f32 / 2.0;
        let ry = height as f32 / 2.0;
        let mut bits = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let dx = (x as f32 + 0.5 - rx) / rx;
                let dy = (y as f32 + 0.5 - ry) / ry;
                bits.push(dx * dx + dy * dy <= 1.0);
            }
        }
        Self { width, height, bits }
    }

    /// Build from a row-major alpha channel. Pixels with alpha above
    /// `threshold` are solid.
    pub fn from_alpha(width: u32, height: u32, alpha: &[u8], threshold: u8) -> Result<Self, SetupError> {
        let expected = (width * height) as usize;
        if alpha.len() != expected {
            return Err(SetupError::InvalidConfig {
                field: "mask",
                reason: format!("alpha buffer has {} pixels, expected {expected}", alpha.len()),
            });
        }
        Ok(Self {
            width,
            height,
            bits: alpha.iter().map(|&a| a > threshold).collect(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[(y * self.width + x) as usize]
    }

    /// Number of solid pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// True if any solid pixel of `other`, placed at `offset` relative to
    /// this mask's origin, coincides with a solid pixel of this mask.
    pub fn overlaps(&self, other: &CollisionMask, offset: (i32, i32)) -> bool {
        let (ox, oy) = offset;
        let x_start = ox.max(0);
        let y_start = oy.max(0);
        let x_end = (ox + other.width as i32).min(self.width as i32);
        let y_end = (oy + other.height as i32).min(self.height as i32);

        for y in y_start..y_end {
            for x in x_start..x_end {
                if self.get(x as u32, y as u32) && other.get((x - ox) as u32, (y - oy) as u32) {
                    return true;
                }
            }
        }
        false
    }

    /// [`overlaps`](Self::overlaps) for two masks anchored at world-space
    /// top-left corners.
    pub fn overlaps_at(&self, origin: Vec2, other: &CollisionMask, other_origin: Vec2) -> bool {
        let offset = (
            other_origin.x.floor() as i32 - origin.x.floor() as i32,
            other_origin.y.floor() as i32 - origin.y.floor() as i32,
        );
        self.overlaps(other, offset)
    }
}

/// The collision masks for every sprite that takes part in mask tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteMasks {
    pub player: CollisionMask,
    pub bullet: CollisionMask,
    pub normal_enemy: CollisionMask,
    pub fast_enemy: CollisionMask,
    pub tank_enemy: CollisionMask,
}

impl SpriteMasks {
    /// Elliptical masks sized to the configured sprite bounds.
    pub fn from_config(config: &GameConfig) -> Self {
        let player = CollisionMask::ellipse(
            config.player.sprite_width.max(0.0) as u32,
            config.player.sprite_height.max(0.0) as u32,
        );
        let bullet_edge = config.weapon.bullet_size.max(0.0) as u32;
        let enemy = CollisionMask::ellipse(
            config.enemy.sprite_width.max(0.0) as u32,
            config.enemy.sprite_height.max(0.0) as u32,
        );
        Self {
            player,
            bullet: CollisionMask::ellipse(bullet_edge, bullet_edge),
            normal_enemy: enemy.clone(),
            fast_enemy: enemy.clone(),
            tank_enemy: enemy,
        }
    }

    pub fn enemy(&self, kind: EnemyKind) -> &CollisionMask {
        match kind {
            EnemyKind::Normal => &self.normal_enemy,
            EnemyKind::Fast => &self.fast_enemy,
            EnemyKind::Tank => &self.tank_enemy,
        }
    }
}

impl Default for SpriteMasks {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_masks_overlap_only_when_sharing_pixels() {
        let a = CollisionMask::filled(10, 10);
        let b = CollisionMask::filled(10, 10);
        assert!(a.overlaps(&b, (9, 9)));
        assert!(!a.overlaps(&b, (10, 0)));
        assert!(!a.overlaps(&b, (0, -10)));
    }

    #[test]
    fn test_ellipse_corners_are_empty() {
        let m = CollisionMask::ellipse(40, 40);
        assert!(!m.get(0, 0));
        assert!(!m.get(39, 39));
        assert!(m.get(20, 20));
        // Two circles whose bounding boxes overlap only at the corner
        // do not collide.
        assert!(!m.overlaps(&m, (35, 35)));
        assert!(m.overlaps(&m, (20, 0)));
    }

    #[test]
    fn test_from_alpha_threshold_and_size_check() {
        let alpha = [0, 127, 128, 255];
        let m = CollisionMask::from_alpha(2, 2, &alpha, 127).unwrap();
        assert_eq!(m.count(), 2);
        assert!(!m.get(1, 0));
        assert!(m.get(0, 1));

        assert!(CollisionMask::from_alpha(3, 3, &alpha, 127).is_err());
    }

    #[test]
    fn test_overlaps_at_truncates_world_coordinates() {
        let a = CollisionMask::filled(4, 4);
        let b = CollisionMask::filled(4, 4);
        assert!(a.overlaps_at(Vec2::new(0.0, 0.0), &b, Vec2::new(3.9, 3.9)));
        assert!(!a.overlaps_at(Vec2::new(0.0, 0.0), &b, Vec2::new(4.0, 0.0)));
    }
}
