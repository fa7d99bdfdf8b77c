pub mod auth;
pub mod health;
pub mod menu;
pub mod place;
pub mod recommendation;
pub mod review;
pub mod user;

mod router;
pub use router::get_router;
