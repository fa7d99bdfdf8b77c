pub mod repository;
mod routes;
pub mod selector;

pub use routes::get_router;
