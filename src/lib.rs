pub mod api;
pub mod error;
pub mod inference;
pub mod route_analyzer;
pub mod shared_data;
