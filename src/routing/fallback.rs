use geo::{Coord, Point};
use rand::Rng;
use rand::rngs::SmallRng;

use crate::{FALLBACK_JITTER_DEG, FALLBACK_SEGMENT_POINTS};

/// Synthesize a plausible path through the given via points when no road
/// geometry is available.
///
/// Each consecutive pair is joined by a fixed-size segment: exact endpoints,
/// interior points linearly interpolated and displaced by a small bounded
/// jitter so the line does not render perfectly straight. Joint points
/// shared by consecutive segments are kept once.
pub(crate) fn fallback_path(points: &[Point<f64>], rng: &mut SmallRng) -> Vec<Coord<f64>> {
    let mut path: Vec<Coord<f64>> = Vec::new();

    for pair in points.windows(2) {
        let segment = fallback_segment(pair[0], pair[1], rng);
        let skip = usize::from(!path.is_empty());
        path.extend(segment.into_iter().skip(skip));
    }

    path
}

fn fallback_segment(start: Point<f64>, end: Point<f64>, rng: &mut SmallRng) -> Vec<Coord<f64>> {
    let mut segment = Vec::with_capacity(FALLBACK_SEGMENT_POINTS);
    segment.push(start.0);

    for i in 1..FALLBACK_SEGMENT_POINTS - 1 {
        let ratio = i as f64 / FALLBACK_SEGMENT_POINTS as f64;
        let jitter_lng = rng.gen_range(-FALLBACK_JITTER_DEG..=FALLBACK_JITTER_DEG);
        let jitter_lat = rng.gen_range(-FALLBACK_JITTER_DEG..=FALLBACK_JITTER_DEG);

        segment.push(Coord {
            x: start.x() + (end.x() - start.x()) * ratio + jitter_lng,
            y: start.y() + (end.y() - start.y()) * ratio + jitter_lat,
        });
    }

    segment.push(end.0);
    segment
}
