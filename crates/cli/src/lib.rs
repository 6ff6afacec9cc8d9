//! Interactive text menu over the in-memory inventory.
//!
//! The session reads operator input from any `BufRead` and writes to any `Write`, so the
//! whole loop runs the same against a terminal or a scripted buffer.

pub mod config;
pub mod menu;
pub mod output;
pub mod session;

pub use config::Config;
pub use menu::MenuChoice;
pub use output::Output;
pub use session::{Session, SessionOptions};
