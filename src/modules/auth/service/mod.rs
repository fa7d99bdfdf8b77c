pub mod oauth;
pub mod password;
pub mod token;
