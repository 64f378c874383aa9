mod ask;
mod diff;
mod error;
mod export;
mod extract;
mod health;
mod options;
mod refine;
mod session;

pub use ask::ask_handler;
pub use diff::diff_handler;
pub use error::ErrorResponse;
pub use export::export_handler;
pub use extract::extract_handler;
pub use health::health_handler;
pub use options::options_handler;
pub use refine::{RefineBody, refine_handler};
pub use session::{SessionView, session_refine_handler, session_state_handler, toggle_diff_handler};
