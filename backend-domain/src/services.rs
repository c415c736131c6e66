// Store query documents built from domain criteria
pub mod query_documents;

pub use query_documents::*;
