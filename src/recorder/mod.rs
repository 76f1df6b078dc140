pub mod controller;
mod loop_worker;
pub mod state;

pub use controller::RecorderController;
pub use state::{RecorderPhase, RecorderState};
