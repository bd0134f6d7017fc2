//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `ui` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_mode;
mod render_scene;

pub use options::ViewerOptions;
pub use render_mode::RenderMode;
pub use render_scene::RenderScene;
