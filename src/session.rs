//! Session store: bearer token, cached user id, verified flag
//!
//! The one piece of cross-screen shared mutable state. Auth flows are the
//! single writer; every authenticated request is a reader. Values persist
//! in a small JSON key-value file on device storage, no schema versioning.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SessionData {
    jwt_token: Option<String>,
    user_id: Option<String>,
    is_verified: Option<bool>,
}

#[derive(Clone)]
pub struct SessionStore {
    data: Arc<RwLock<SessionData>>,
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            data: Arc::new(RwLock::new(SessionData::default())),
            path: path.as_ref().to_path_buf(),
        }
    }

    pub async fn load_from_disk(&self) -> Result<()> {
        if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)?;
            let loaded: SessionData = serde_json::from_str(&content)?;
            *self.data.write().await = loaded;
        }
        Ok(())
    }

    async fn save_to_disk(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let data = self.data.read().await;
        let content = serde_json::to_string(&*data)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// The stored bearer token, if any. A token whose `exp` claim is
    /// decodable and in the past reads as absent, so callers fall through
    /// to the login redirect instead of sending a request doomed to 401.
    pub async fn token(&self) -> Option<String> {
        let data = self.data.read().await;
        let token = data.jwt_token.clone()?;
        if let Some(expires_at) = token_expiry(&token) {
            if expires_at <= Utc::now() {
                tracing::debug!(%expires_at, "stored token is past its expiration");
                return None;
            }
        }
        Some(token)
    }

    pub async fn set_token(&self, token: String) -> Result<()> {
        {
            let mut data = self.data.write().await;
            data.jwt_token = Some(token);
        }
        self.save_to_disk().await
    }

    pub async fn user_id(&self) -> Option<String> {
        self.data.read().await.user_id.clone()
    }

    pub async fn set_user_id(&self, user_id: String) -> Result<()> {
        {
            let mut data = self.data.write().await;
            data.user_id = Some(user_id);
        }
        self.save_to_disk().await
    }

    pub async fn is_verified(&self) -> Option<bool> {
        self.data.read().await.is_verified
    }

    pub async fn set_verified(&self, verified: bool) -> Result<()> {
        {
            let mut data = self.data.write().await;
            data.is_verified = Some(verified);
        }
        self.save_to_disk().await
    }

    /// Logout: drop everything, in memory and on disk.
    pub async fn clear(&self) -> Result<()> {
        *self.data.write().await = SessionData::default();
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct JwtClaims {
    exp: Option<i64>,
}

/// Read the `exp` claim out of a JWT without verifying the signature.
/// The client never validates tokens; this only backs the local
/// pre-flight staleness check.
fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: JwtClaims = serde_json::from_slice(&bytes).ok()?;
    DateTime::<Utc>::from_timestamp(claims.exp?, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn make_token(exp: Option<DateTime<Utc>>) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let claims = match exp {
            Some(exp) => format!(r#"{{"sub":"42","exp":{}}}"#, exp.timestamp()),
            None => r#"{"sub":"42"}"#.to_string(),
        };
        let payload = URL_SAFE_NO_PAD.encode(claims.as_bytes());
        format!("{}.{}.sig", header, payload)
    }

    fn temp_store() -> SessionStore {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        // Leak the dir so the file outlives the guard for the test body.
        std::mem::forget(dir);
        SessionStore::new(path)
    }

    #[tokio::test]
    async fn token_round_trips_through_disk() {
        let store = temp_store();
        let token = make_token(Some(Utc::now() + Duration::hours(1)));
        store.set_token(token.clone()).await.unwrap();

        let reloaded = SessionStore::new(&store.path);
        reloaded.load_from_disk().await.unwrap();
        assert_eq!(reloaded.token().await, Some(token));
    }

    #[tokio::test]
    async fn expired_token_reads_as_absent() {
        let store = temp_store();
        let token = make_token(Some(Utc::now() - Duration::minutes(5)));
        store.set_token(token).await.unwrap();
        assert_eq!(store.token().await, None);
    }

    #[tokio::test]
    async fn token_without_exp_claim_is_usable() {
        let store = temp_store();
        let token = make_token(None);
        store.set_token(token.clone()).await.unwrap();
        assert_eq!(store.token().await, Some(token));
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let store = temp_store();
        store.set_token(make_token(None)).await.unwrap();
        store.set_user_id("u-1".into()).await.unwrap();
        store.set_verified(true).await.unwrap();

        store.clear().await.unwrap();
        assert_eq!(store.token().await, None);
        assert_eq!(store.user_id().await, None);
        assert_eq!(store.is_verified().await, None);
        assert!(!store.path.exists());
    }
}
