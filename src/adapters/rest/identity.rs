//! Identity provider backed by the managed REST backend.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use reqwest::{Method, StatusCode};

use crate::adapters::backend::events::{SessionChannel, SessionWatcher};
use crate::adapters::backend::traits::IdentityProvider;
use crate::config::{secret_string, SecretString};
use crate::domain::ids::UserId;
use crate::domain::user::AuthUser;
use crate::domain::{IdentityError, RafiqError, Result};
use crate::logging::redact::identifier_digest;

use super::client::RestClient;
use super::models::{error_message, CredentialsRequest, SessionResponse};

/// Account and session operations over `POST /auth/accounts`,
/// `POST /auth/sessions` and `DELETE /auth/sessions/current`.
///
/// The backend has no push channel, so the provider is its own event source:
/// it publishes a session change whenever one of its calls changes the
/// session. That matches the interactive flow, where every session change
/// goes through this process anyway.
pub struct RestIdentityProvider {
    client: RestClient,
    session: SessionChannel,
    token: RwLock<Option<SecretString>>,
}

impl RestIdentityProvider {
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            session: SessionChannel::new(),
            token: RwLock::new(None),
        }
    }

    /// Records a freshly established session and announces it.
    fn establish(&self, response: SessionResponse, request_email: &str) -> Result<AuthUser> {
        let uid = UserId::new(response.uid)
            .map_err(|e| RafiqError::Identity(IdentityError::InvalidResponse(e)))?;

        *self.token.write().unwrap_or_else(PoisonError::into_inner) =
            response.token.map(secret_string);

        let email = response.email.or_else(|| Some(request_email.to_string()));
        let user = AuthUser::new(uid, email);

        tracing::debug!(
            uid = %identifier_digest(user.uid.as_str()),
            "Session established"
        );
        self.session.publish(Some(user.clone()));
        Ok(user)
    }

    fn session_token(&self) -> Option<SecretString> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn read_session_response(resp: reqwest::Response) -> Result<SessionResponse> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RafiqError::Identity(status_error(status, &body)));
        }
        resp.json::<SessionResponse>()
            .await
            .map_err(|e| RafiqError::Identity(IdentityError::InvalidResponse(e.to_string())))
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    fn subscribe(&self) -> SessionWatcher {
        self.session.watch()
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.session.current()
    }

    async fn sign_in(&self, email: &str, password: &SecretString) -> Result<AuthUser> {
        use secrecy::ExposeSecret;

        let response = self
            .client
            .with_retry(|| async {
                let resp = self
                    .client
                    .request(Method::POST, "auth/sessions")
                    .json(&CredentialsRequest {
                        email,
                        password: password.expose_secret().as_ref(),
                    })
                    .send()
                    .await
                    .map_err(transport_error)?;
                Self::read_session_response(resp).await
            })
            .await?;

        self.establish(response, email)
    }

    async fn sign_out(&self) -> Result<()> {
        let token = self.session_token();

        self.client
            .with_retry(|| async {
                use secrecy::ExposeSecret;

                let mut request = self.client.request(Method::DELETE, "auth/sessions/current");
                if let Some(token) = &token {
                    request = request.header("X-Session-Token", token.expose_secret().as_ref());
                }
                let resp = request.send().await.map_err(transport_error)?;

                let status = resp.status();
                if !status.is_success() {
                    let body = resp.text().await.unwrap_or_default();
                    return Err(RafiqError::Identity(IdentityError::SignOutFailed(format!(
                        "HTTP {status}: {}",
                        error_message(&body)
                    ))));
                }
                Ok(())
            })
            .await?;

        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        self.session.publish(None);
        tracing::debug!("Session ended");
        Ok(())
    }

    async fn create_user(&self, email: &str, password: &SecretString) -> Result<AuthUser> {
        use secrecy::ExposeSecret;

        let response = self
            .client
            .with_retry(|| async {
                let resp = self
                    .client
                    .request(Method::POST, "auth/accounts")
                    .json(&CredentialsRequest {
                        email,
                        password: password.expose_secret().as_ref(),
                    })
                    .send()
                    .await
                    .map_err(transport_error)?;
                Self::read_session_response(resp).await
            })
            .await?;

        self.establish(response, email)
    }
}

fn transport_error(e: reqwest::Error) -> RafiqError {
    if e.is_timeout() {
        RafiqError::Identity(IdentityError::Timeout(e.to_string()))
    } else {
        RafiqError::Identity(IdentityError::ConnectionFailed(e.to_string()))
    }
}

/// Maps a non-success status to the identity error the rest of the crate
/// matches on.
fn status_error(status: StatusCode, body: &str) -> IdentityError {
    let message = error_message(body);
    match status {
        StatusCode::CONFLICT => IdentityError::EmailAlreadyExists(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            IdentityError::InvalidCredentials(message)
        }
        StatusCode::NOT_FOUND => IdentityError::AccountNotFound(message),
        status if status.is_server_error() => IdentityError::ServerError {
            status: status.as_u16(),
            message,
        },
        status => IdentityError::RequestRejected {
            status: status.as_u16(),
            message,
        },
    }
}
