//! Google ID token verification.
//!
//! Bearer tokens are Google ID tokens. Signing keys come from Google's JWKS endpoint and
//! are cached in memory for one hour. A token signed with a key id missing from the cache
//! forces a refresh, since Google rotates keys without notice. Refreshes are capped at
//! five per minute; past the cap, lookups are answered from the keys already held.

use jsonwebtoken::{
    decode, decode_header,
    jwk::{Jwk, JwkSet},
    Algorithm, DecodingKey, Validation,
};
use serde::Deserialize;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::server::error::{auth::AuthError, AppError};

const GOOGLE_JWKS_URL: &str = "https://www.googleapis.com/oauth2/v3/certs";

/// Issuer values Google puts in ID tokens.
const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// How long fetched signing keys are trusted before refetching.
const JWKS_TTL: Duration = Duration::from_secs(60 * 60);

/// Window over which key refreshes are counted.
const REFRESH_WINDOW: Duration = Duration::from_secs(60);

/// Most key refreshes allowed inside one `REFRESH_WINDOW`.
const MAX_REFRESHES_PER_WINDOW: usize = 5;

/// Claims read from a verified ID token.
#[derive(Debug, Clone, Deserialize)]
pub struct IdTokenClaims {
    /// Subject identifier of the signed-in Google account.
    pub sub: String,
}

/// Signing keys with the time they were fetched.
struct CachedKeys {
    keys: JwkSet,
    fetched_at: Instant,
}

impl CachedKeys {
    fn new(keys: JwkSet) -> Self {
        Self {
            keys,
            fetched_at: Instant::now(),
        }
    }

    fn is_expired(&self) -> bool {
        self.fetched_at.elapsed() >= JWKS_TTL
    }
}

/// Signing keys together with the times of recent refreshes.
#[derive(Default)]
struct KeyCache {
    keys: Option<CachedKeys>,
    refreshes: VecDeque<Instant>,
}

impl KeyCache {
    #[cfg(test)]
    fn with_keys(keys: JwkSet) -> Self {
        Self {
            keys: Some(CachedKeys::new(keys)),
            refreshes: VecDeque::new(),
        }
    }

    /// Finds `kid` in the held keys, `None` if they are missing or past their TTL.
    fn find_fresh(&self, kid: &str) -> Option<Jwk> {
        self.keys
            .as_ref()
            .filter(|cached| !cached.is_expired())
            .and_then(|cached| cached.keys.find(kid))
            .cloned()
    }

    /// Finds `kid` in the held keys regardless of their age.
    fn find_any(&self, kid: &str) -> Option<Jwk> {
        self.keys
            .as_ref()
            .and_then(|cached| cached.keys.find(kid))
            .cloned()
    }

    /// Records a refresh at `now` unless the window is already full.
    fn try_start_refresh(&mut self, now: Instant) -> bool {
        while self
            .refreshes
            .front()
            .is_some_and(|started| now.duration_since(*started) >= REFRESH_WINDOW)
        {
            self.refreshes.pop_front();
        }

        if self.refreshes.len() >= MAX_REFRESHES_PER_WINDOW {
            return false;
        }

        self.refreshes.push_back(now);
        true
    }
}

/// Verifies bearer ID tokens against Google's published keys.
///
/// Cloning shares the key cache.
#[derive(Clone)]
pub struct IdTokenVerifier {
    http_client: reqwest::Client,
    /// OAuth client id, the expected `aud` claim.
    audience: String,
    algorithm: Algorithm,
    jwks_url: String,
    cache: Arc<RwLock<KeyCache>>,
}

impl IdTokenVerifier {
    /// Creates a verifier for tokens issued to `client_id`.
    ///
    /// No keys are fetched until the first token is verified.
    pub fn new(http_client: reqwest::Client, client_id: String) -> Self {
        Self {
            http_client,
            audience: client_id,
            algorithm: Algorithm::RS256,
            jwks_url: GOOGLE_JWKS_URL.to_string(),
            cache: Arc::new(RwLock::new(KeyCache::default())),
        }
    }

    /// Creates a verifier with a preloaded key set, bypassing the JWKS endpoint.
    #[cfg(test)]
    pub fn with_keys(client_id: &str, keys: JwkSet, algorithm: Algorithm) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            audience: client_id.to_string(),
            algorithm,
            jwks_url: GOOGLE_JWKS_URL.to_string(),
            cache: Arc::new(RwLock::new(KeyCache::with_keys(keys))),
        }
    }

    /// Creates a verifier that fetches its keys from `jwks_url`.
    #[cfg(test)]
    pub fn with_jwks_url(client_id: &str, jwks_url: String, algorithm: Algorithm) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            audience: client_id.to_string(),
            algorithm,
            jwks_url,
            cache: Arc::new(RwLock::new(KeyCache::default())),
        }
    }

    /// Verifies a token's signature, expiry, issuer and audience.
    ///
    /// # Arguments
    /// - `token` - Raw JWT from the `Authorization` header
    ///
    /// # Returns
    /// - `Ok(IdTokenClaims)` - Token is valid
    /// - `Err(AppError::AuthErr)` - Token is malformed, expired, mis-addressed or signed
    ///   with an unknown key
    /// - `Err(AppError::ReqwestErr)` - Google's key set could not be fetched
    pub async fn verify(&self, token: &str) -> Result<IdTokenClaims, AppError> {
        let header = decode_header(token).map_err(AuthError::from)?;

        let Some(kid) = header.kid else {
            return Err(AuthError::UnknownKeyId(None).into());
        };

        let jwk = self.find_key(&kid).await?;
        let key = DecodingKey::from_jwk(&jwk).map_err(AuthError::from)?;

        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&GOOGLE_ISSUERS);
        validation.set_audience(&[&self.audience]);

        let data = decode::<IdTokenClaims>(token, &key, &validation).map_err(AuthError::from)?;

        Ok(data.claims)
    }

    /// Looks up a signing key, refreshing the cache when it is stale or lacks `kid`.
    ///
    /// The write lock is held across the fetch so concurrent misses share one request.
    /// When the refresh budget is spent the held keys answer, even past their TTL.
    async fn find_key(&self, kid: &str) -> Result<Jwk, AppError> {
        if let Some(jwk) = self.cache.read().await.find_fresh(kid) {
            return Ok(jwk);
        }

        let mut cache = self.cache.write().await;

        if let Some(jwk) = cache.find_fresh(kid) {
            return Ok(jwk);
        }

        if !cache.try_start_refresh(Instant::now()) {
            tracing::debug!("Skipping signing key refresh for key id {}", kid);

            return cache
                .find_any(kid)
                .ok_or_else(|| AuthError::UnknownKeyId(Some(kid.to_string())).into());
        }

        tracing::debug!("Refreshing Google signing keys for key id {}", kid);

        let keys = self.fetch_keys().await?;
        cache.keys = Some(CachedKeys::new(keys));

        cache
            .find_any(kid)
            .ok_or_else(|| AuthError::UnknownKeyId(Some(kid.to_string())).into())
    }

    async fn fetch_keys(&self) -> Result<JwkSet, AppError> {
        let keys = self
            .http_client
            .get(&self.jwks_url)
            .send()
            .await?
            .error_for_status()?
            .json::<JwkSet>()
            .await?;

        Ok(keys)
    }
}
