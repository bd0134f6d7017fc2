//! UI-Komponenten: Steuer-Panel, Status-Bar und Zeichenflächen-Input.

pub mod canvas;
pub mod panel;
/// UI-Layer mit egui
///
/// Panels lesen den State per Referenz und liefern ausschließlich `AppIntent`s.
pub mod status;

pub use canvas::{pick_control_point, CanvasInput};
pub use panel::render_control_panel;
pub use status::render_status_bar;
