pub mod error;
pub mod handlers;
pub mod responses;
pub mod routes;

pub use error::*;
pub use handlers::*;
pub use responses::*;
pub use routes::*;
