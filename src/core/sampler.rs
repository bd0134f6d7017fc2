//! Diskretisierung der Kurve: Referenz-Polyline und animierte Vordergrund-Kurve.

use super::de_casteljau::{curve_point, hue_at};
use super::parameter::{clamp_parameter, Resolution};
use glam::DVec2;

/// Ein Segment der Vordergrund-Kurve mit dem Hue-Wert seines Endpunkts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    pub start: DVec2,
    pub end: DVec2,
    /// Interpolierter Hue (`0..1`) am Endpunkt des Segments
    pub hue: f64,
}

/// Gesamte Kurve an `R + 1` gleichmäßigen Parameterstellen `k / R`.
///
/// Unabhängig vom aktuellen `t`. Leer bei weniger als zwei Kontrollpunkten.
pub fn reference_polyline(control: &[DVec2], resolution: Resolution) -> Vec<DVec2> {
    if control.len() < 2 {
        return Vec::new();
    }

    (0..=resolution.get())
        .filter_map(|k| curve_point(control, resolution.sample_parameter(k)))
        .collect()
}

/// Kurve von `0` bis `t`: volle Abtastsegmente bis zur letzten Stelle `≤ t`,
/// danach ein Abschlusssegment bis zum exakten Kurvenpunkt bei `t`.
///
/// Das Abschlusssegment ist immer vorhanden (ggf. mit Länge null), damit die
/// Vordergrund-Kurve exakt am Live-Punkt endet.
pub fn foreground_polyline(
    control: &[DVec2],
    resolution: Resolution,
    t: f64,
) -> Vec<CurveSegment> {
    if control.len() < 2 {
        return Vec::new();
    }

    let t = clamp_parameter(t);
    let count = control.len();
    let steps = resolution.steps_until(t);
    let mut segments = Vec::with_capacity(steps as usize + 1);

    let sample = |k: u32| -> Option<DVec2> { curve_point(control, resolution.sample_parameter(k)) };

    let Some(mut previous) = sample(0) else {
        return Vec::new();
    };
    for k in 1..=steps {
        let Some(next) = sample(k) else {
            break;
        };
        segments.push(CurveSegment {
            start: previous,
            end: next,
            hue: hue_at(count, resolution.sample_parameter(k)),
        });
        previous = next;
    }

    if let Some(live) = curve_point(control, t) {
        segments.push(CurveSegment {
            start: previous,
            end: live,
            hue: hue_at(count, t),
        });
    }

    segments
}

/// Punktfolge einer Segmentkette (Start des ersten, dann alle Endpunkte).
pub fn segment_points(segments: &[CurveSegment]) -> Vec<DVec2> {
    let Some(first) = segments.first() else {
        return Vec::new();
    };
    std::iter::once(first.start)
        .chain(segments.iter().map(|s| s.end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn linear() -> Vec<DVec2> {
        vec![DVec2::new(0.0, 0.0), DVec2::new(0.0, 10.0)]
    }

    #[test]
    fn reference_polyline_of_linear_curve() {
        let points = reference_polyline(&linear(), Resolution::new(4));
        let expected = [0.0, 2.5, 5.0, 7.5, 10.0];

        assert_eq!(points.len(), 5);
        for (p, y) in points.iter().zip(expected) {
            assert_relative_eq!(p.x, 0.0);
            assert_relative_eq!(p.y, y);
        }
    }

    #[test]
    fn reference_polyline_has_r_plus_one_points_and_hits_ends() {
        let control = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(3.0, 8.0),
            DVec2::new(9.0, -2.0),
            DVec2::new(12.0, 5.0),
        ];
        for r in [2, 3, 17, 128] {
            let points = reference_polyline(&control, Resolution::new(r));
            assert_eq!(points.len(), r as usize + 1);
            assert_eq!(points[0], control[0]);
            assert_eq!(*points.last().unwrap(), control[3]);
        }
    }

    #[test]
    fn degenerate_control_yields_no_curve() {
        let r = Resolution::new(8);
        assert!(reference_polyline(&[], r).is_empty());
        assert!(reference_polyline(&[DVec2::ONE], r).is_empty());
        assert!(foreground_polyline(&[], r, 0.5).is_empty());
        assert!(foreground_polyline(&[DVec2::ONE], r, 0.5).is_empty());
    }

    #[test]
    fn foreground_ends_exactly_at_live_point() {
        let control = linear();
        let r = Resolution::new(4);
        let segments = foreground_polyline(&control, r, 0.6);

        // 0.6·4 = 2.4 → zwei volle Segmente + Abschlusssegment
        assert_eq!(segments.len(), 3);
        assert_relative_eq!(segments[1].end.y, 5.0);
        assert_relative_eq!(segments[2].start.y, 5.0);
        assert_relative_eq!(segments[2].end.y, 6.0);
    }

    #[test]
    fn foreground_segments_are_contiguous_with_end_hues() {
        let control = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
        ];
        let r = Resolution::new(8);
        let segments = foreground_polyline(&control, r, 0.5);

        assert_eq!(segments.len(), 5);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        for (i, segment) in segments.iter().take(4).enumerate() {
            let s = (i + 1) as f64 / 8.0;
            assert_relative_eq!(segment.hue, s * 2.0 / 3.0, epsilon = 1e-12);
        }
        // Eingerastetes t: Abschlusssegment hat Länge null
        assert_eq!(segments[4].start, segments[4].end);
        assert_relative_eq!(segments[4].end.x, 7.5);
        assert_relative_eq!(segments[4].end.y, 2.5);
    }

    #[test]
    fn foreground_at_zero_is_single_degenerate_segment() {
        let segments = foreground_polyline(&linear(), Resolution::new(4), 0.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, segments[0].end);
        assert_eq!(segments[0].hue, 0.0);
    }

    #[test]
    fn foreground_at_one_covers_reference_polyline() {
        let control = linear();
        let r = Resolution::new(4);
        let segments = foreground_polyline(&control, r, 1.0);
        let points = segment_points(&segments);
        let reference = reference_polyline(&control, r);

        assert_eq!(segments.len(), 5);
        assert_eq!(&points[..5], &reference[..]);
        assert_eq!(points[5], control[1]);
    }
}
