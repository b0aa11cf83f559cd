pub mod ports;
pub mod viewer;

pub use viewer::{DdlViewerController, DdlViewerState};
