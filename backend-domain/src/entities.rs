// Domain entities
pub mod clock_in;
pub mod config;
pub mod item;

pub use clock_in::*;
pub use config::*;
pub use item::*;
