//! Turn engine, session and presentation helpers

mod driver;
mod engine;
mod log;
pub mod render;
mod session;


pub use driver::*;
pub use engine::*;
pub use log::*;
pub use session::*;
