pub mod clock_in_queries;
pub mod item_queries;
