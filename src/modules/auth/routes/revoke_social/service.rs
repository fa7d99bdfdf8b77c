use super::types::{request, response};
use crate::{
    modules::user::{self, repository::User},
    types::Context,
};
use std::sync::Arc;

fn check_revocable(user: &User) -> Result<(), response::Error> {
    if !user.is_social() {
        return Err(response::Error::NotASocialAccount);
    }

    if !user.has_password_login() {
        return Err(response::Error::NoRemainingSignInMethod);
    }

    Ok(())
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let user = payload.auth.user;
    check_revocable(&user)?;

    user::repository::clear_social_by_id(&ctx.db_conn.pool, user.id)
        .await
        .map_err(|err| match err {
            user::repository::Error::ConstraintViolation => {
                response::Error::NoRemainingSignInMethod
            }
            _ => response::Error::FailedToRevoke,
        })
        .map(response::Success::Revoked)
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;

    fn user(email: Option<&str>, password_hash: Option<&str>, provider: Option<&str>) -> User {
        User {
            id: 1,
            display_name: String::from("먹보"),
            email: email.map(String::from),
            password_hash: password_hash.map(String::from),
            auth_provider: provider.map(String::from),
            auth_sub: provider.map(|_| String::from("123456789")),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn email_users_have_nothing_to_revoke() {
        assert!(matches!(
            check_revocable(&user(Some("a@weeat.site"), Some("$2b$12$hash"), None)),
            Err(response::Error::NotASocialAccount)
        ));
    }

    #[test]
    fn social_users_without_a_password_keep_their_identity() {
        assert!(matches!(
            check_revocable(&user(Some("a@kakao.com"), None, Some("kakao"))),
            Err(response::Error::NoRemainingSignInMethod)
        ));
        assert!(matches!(
            check_revocable(&user(None, None, Some("google"))),
            Err(response::Error::NoRemainingSignInMethod)
        ));
    }

    #[test]
    fn social_users_with_a_password_can_revoke() {
        assert!(check_revocable(&user(Some("a@kakao.com"), Some("$2b$12$hash"), Some("kakao"))).is_ok());
    }
}
