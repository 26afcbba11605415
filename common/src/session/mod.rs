mod local_session;
mod mode;

pub use local_session::LocalSession;
pub use mode::{GameMode, PlayerMark};
