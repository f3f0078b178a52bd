/// Planar joint angle geometry

use crate::models::landmark::Landmark;

/// Angle at `vertex` from ray vertex→`first` to ray vertex→`last`, in degrees.
///
/// Only x and y are used. The signed difference of the two ray headings is
/// folded into [0, 360), so the result is orientation-aware: swapping
/// `first` and `last` yields `360 - angle`.
///
/// `first` and `last` must both differ from `vertex`; coincident points give
/// an arbitrary (but finite) result and NaN inputs propagate.
pub fn angle_at(first: &Landmark, vertex: &Landmark, last: &Landmark) -> f64 {
    let heading_last = (last.y - vertex.y).atan2(last.x - vertex.x);
    let heading_first = (first.y - vertex.y).atan2(first.x - vertex.x);

    let mut angle = (heading_last - heading_first).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }
    // a tiny negative difference rounds up to exactly 360 after the shift
    if angle >= 360.0 {
        angle -= 360.0;
    }
    angle
}
