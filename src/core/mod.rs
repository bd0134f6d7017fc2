//! Core-Geometrie: Interpolation, De Casteljau, Bernstein, Zerlegung, Abtastung.
//!
//! Reine Funktionen ohne Zustand über Frames hinweg. Jede Abfrage wird aus dem
//! aktuellen Snapshot (Kontrollpunkte, `t`, Auflösung) neu berechnet.

pub mod bernstein;
pub mod control_polygon;
pub mod de_casteljau;
pub mod decomposition;
pub mod lerp;
pub mod parameter;
pub mod sampler;

pub use bernstein::{bernstein, bernstein_point, bernstein_weights, binomial, factorial};
pub use control_polygon::ControlPolygon;
pub use de_casteljau::{curve_point, hue_at, hue_pyramid, hue_values, TierPyramid};
pub use decomposition::{
    centroid, expanded_decomposition, stacked_decomposition, ExpandedDecomposition,
    StackedDecomposition, VectorDecomposition, WeightedVector,
};
pub use lerp::{lerp, lerp_pairs, Lerpable};
pub use parameter::{
    clamp_parameter, snap_parameter, Resolution, RESOLUTION_MAX, RESOLUTION_MIN,
};
pub use sampler::{foreground_polyline, reference_polyline, segment_points, CurveSegment};
