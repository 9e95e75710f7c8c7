/**
 * MOTION - Couche d'animation décorative
 *
 * RÔLE : Positions aléatoires de marqueurs superposés aux flux vidéo et au
 * tracker, régénérées à chaque demande.
 *
 * NOTE : Ne lit ni n'écrit aucune donnée du modèle. Les positions n'ont
 * aucune valeur d'information.
 */

use rand::Rng;
use serde::Serialize;

/// Durée d'une animation de marqueur, en millisecondes
const MIN_DURATION_MS: u32 = 1_500;
const MAX_DURATION_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub x: u32,
    pub y: u32,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MotionFrame {
    pub width: u32,
    pub height: u32,
    pub markers: Vec<Marker>,
}

pub fn frame(count: usize, width: u32, height: u32) -> MotionFrame {
    let mut rng = rand::thread_rng();
    frame_with(&mut rng, count, width, height)
}

pub(crate) fn frame_with<R: Rng + ?Sized>(rng: &mut R, count: usize, width: u32, height: u32) -> MotionFrame {
    let markers = (0..count)
        .map(|_| Marker {
            x: rng.gen_range(0..width.max(1)),
            y: rng.gen_range(0..height.max(1)),
            duration_ms: rng.gen_range(MIN_DURATION_MS..=MAX_DURATION_MS),
        })
        .collect();
    MotionFrame { width, height, markers }
}
