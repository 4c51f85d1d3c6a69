// Export our modules for use by the web front-end and tests
pub mod app;
pub mod config;
pub mod domain;
pub mod format;
pub mod loader;
pub mod location;
pub mod view;

pub use app::{Board, BoardState, Surface};
pub use config::BoardConfig;
pub use domain::{Completion, Project, Task, TaskStatus};
pub use loader::LoadError;
pub use location::AddressBar;
