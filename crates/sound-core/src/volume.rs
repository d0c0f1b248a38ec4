use crate::geometry::Coordinate;
use glam::DVec2;

/// Vector from the chosen block to the viewport center (`center - chosen`),
/// defined only when both points are known.
#[inline]
pub fn collide_vector(center: Option<Coordinate>, chosen: Option<Coordinate>) -> Option<DVec2> {
    Some(center? - chosen?)
}

/// Map a center offset to a volume.
///
/// Each axis contributes `(range - |d|) / range`; the two are averaged and
/// floored at zero. Neither axis term can exceed 1, so the result never
/// exceeds 1 and no upper clamp is applied.
pub fn sound_volume(collide: Option<DVec2>, volume_range: f64) -> f64 {
    let Some(d) = collide else {
        return 0.0;
    };
    if volume_range <= 0.0 {
        return 0.0;
    }
    let horizontal = (volume_range - d.x.abs()) / volume_range;
    let vertical = (volume_range - d.y.abs()) / volume_range;
    let avg = (horizontal + vertical) / 2.0;
    if avg < 0.0 {
        0.0
    } else {
        avg
    }
}
