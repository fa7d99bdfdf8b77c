use super::{service::service, types::request};
use crate::{modules::user::repository::AuthProvider, types::Context};
use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn kakao(
    State(ctx): State<Arc<Context>>,
    Json(body): Json<request::KakaoBody>,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            provider: AuthProvider::Kakao,
            token: body.access_token,
        },
    )
    .await
}

pub async fn google(
    State(ctx): State<Arc<Context>>,
    Json(body): Json<request::GoogleBody>,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            provider: AuthProvider::Google,
            token: body.id_token,
        },
    )
    .await
}
