#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

// bcrypt is deliberately slow, keep it off the async workers
pub async fn hash(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|err| {
            tracing::error!("Password hashing task failed: {}", err);
            Error::UnexpectedError
        })?
        .map_err(|err| {
            tracing::error!("Failed to hash password: {}", err);
            Error::UnexpectedError
        })
}

pub async fn verify(password: String, hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|err| {
            tracing::error!("Password verification task failed: {}", err);
            Error::UnexpectedError
        })?
        .map_err(|err| {
            tracing::error!("Failed to verify password: {}", err);
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn verifies_only_the_original_password() {
        let hashed = hash(String::from("correct horse")).await.unwrap();

        assert_ne!(hashed, "correct horse");
        assert!(verify(String::from("correct horse"), hashed.clone())
            .await
            .unwrap());
        assert!(!verify(String::from("battery staple"), hashed).await.unwrap());
    }
}
