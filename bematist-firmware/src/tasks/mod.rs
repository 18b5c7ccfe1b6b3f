//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod motion;
pub mod stop_button;

pub use motion::{motion_task, GaitCommand};
pub use stop_button::stop_button_task;
