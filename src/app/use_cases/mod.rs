//! Use-Cases der Application-Layer-Orchestrierung.

pub mod control_points;
pub mod parameter;
pub mod playback;
pub mod view;
