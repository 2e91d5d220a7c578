pub mod grouping;
pub mod handlers;
pub mod queries;
pub mod seed;
