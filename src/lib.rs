//! Bézier Tiers Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CurveState, StateChanges, ViewState,
};
pub use crate::core::{
    bernstein_point, curve_point, foreground_polyline, reference_polyline, ControlPolygon,
    CurveSegment, Resolution, TierPyramid, VectorDecomposition,
};
pub use shared::{RenderMode, RenderScene, ViewerOptions};
