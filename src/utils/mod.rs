pub mod database;
pub mod storage;
pub mod validation;
