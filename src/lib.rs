pub mod category;
pub mod config;
pub mod descriptor;
pub mod layout;
pub mod line;
pub mod render;
pub mod scheduler;
pub mod server;
pub mod state;
pub mod timefmt;

pub use crate::config::{CardConfig, ConfigFile};
pub use crate::layout::{build, BoardModel, DisplayModel, DisplayRow};
pub use crate::scheduler::{FramePump, RenderScheduler};
pub use crate::state::StateStore;
