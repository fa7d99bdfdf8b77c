use super::types::response;

pub async fn service() -> response::Response {
    response::Success::Welcome
}
