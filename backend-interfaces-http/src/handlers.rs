pub mod clock_in_handlers;
pub mod item_handlers;
pub mod ops_handlers;

pub use clock_in_handlers::*;
pub use item_handlers::*;
pub use ops_handlers::*;
