use nalgebra::{Point3, Vector3};

/// Cumulative distances along a chain of points, starting at zero for the first.
///
/// Each entry is the previous one plus the distance between consecutive points,
/// i.e. the arc length to that point measured along the chain.
pub fn cumulative_arc_lengths(points: &[Point3<f64>]) -> Vec<f64> {
    let mut arc = Vec::with_capacity(points.len());
    let mut total = 0.0;
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            total += (point - points[i - 1]).norm();
        }
        arc.push(total);
    }
    arc
}

/// Mass-weighted average of a set of points.
///
/// Returns `None` when the masses do not sum to a positive value or the slices
/// differ in length.
pub fn mass_weighted_center(points: &[Point3<f64>], masses: &[f64]) -> Option<Point3<f64>> {
    if points.len() != masses.len() {
        return None;
    }
    let total: f64 = masses.iter().sum();
    if total <= 0.0 {
        return None;
    }
    let weighted: Vector3<f64> = points
        .iter()
        .zip(masses)
        .map(|(p, &m)| p.coords * m)
        .sum();
    Some(Point3::from(weighted / total))
}

/// Mass-weighted mean of scalar positions along a line.
pub fn center_along_line(positions: &[f64], masses: &[f64]) -> Option<f64> {
    if positions.len() != masses.len() {
        return None;
    }
    let total: f64 = masses.iter().sum();
    if total <= 0.0 {
        return None;
    }
    Some(
        positions
            .iter()
            .zip(masses)
            .map(|(r, m)| r * m)
            .sum::<f64>()
            / total,
    )
}
