mod routes;

pub use routes::{get_router, welcome};
