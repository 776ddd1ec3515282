pub mod account;
pub mod query;
pub mod types;

use crate::account::{map_account, map_action, AccountRequest};
use crate::query::AccountQuery;
use crate::types::{
    Account, AccountAction, AccountPayload, AccountSettings, AccountType, AccountTypeParseError,
    EndSessionStatus, RateLimitStatus, Totals, User,
};
use reqwest::Client;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("account query must include a 'type' filter")]
    MissingQueryType,
    #[error(transparent)]
    InvalidQueryType(#[from] AccountTypeParseError),
    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },
    #[error("expected {expected} payload, got {got}")]
    UnexpectedPayload {
        expected: &'static str,
        got: &'static str,
    },
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    pub(crate) fn unexpected_payload(
        expected: &'static str,
        got: Option<&AccountPayload>,
    ) -> Self {
        Self::UnexpectedPayload {
            expected,
            got: got.map_or("no payload", AccountPayload::name),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::malformed(error.to_string())
    }
}

pub struct ChirpClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl ChirpClient {
    async fn get(&self, url: String) -> Result<String, Error> {
        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?
            .error_for_status()?;
        response.text().await.map_err(Error::from)
    }

    async fn post(&self, url: String) -> Result<String, Error> {
        let response = self
            .client
            .post(url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?
            .error_for_status()?;
        response.text().await.map_err(Error::from)
    }

    /// Creates a new `ChirpClient` with the given credentials, pointed at the
    /// main API.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: "https://api.twitter.com/1/".to_string(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Points the client at a different API root, e.g. a compatible server or
    /// a test double. The URL must end with a trailing slash.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Runs an account query end to end: resolve the selector, fetch the
    /// sub-resource, map the response.
    ///
    /// # Errors
    /// Returns an error if the query lacks a valid `type` filter, the HTTP
    /// request fails, or the response cannot be mapped.
    pub async fn account(&self, query: &AccountQuery) -> Result<Account, Error> {
        let request = AccountRequest::from_query(query)?;
        let body = self.get(request.url(&self.base_url)).await?;
        map_account(request.query_type(), &body)
    }

    /// Verifies the client's credentials and returns the account profile.
    ///
    /// # Errors
    /// Returns an error if the HTTP request fails (including a 401 for bad
    /// credentials) or the response cannot be parsed.
    pub async fn verify_credentials(&self) -> Result<User, Error> {
        self.query_payload(AccountType::VerifyCredentials).await
    }

    /// Retrieves the client's standing against the hourly call quota.
    ///
    /// # Errors
    /// Returns an error if the HTTP request fails or the response cannot be
    /// parsed.
    pub async fn rate_limit_status(&self) -> Result<RateLimitStatus, Error> {
        self.query_payload(AccountType::RateLimitStatus).await
    }

    /// Retrieves aggregate activity counters for the account.
    ///
    /// # Errors
    /// Returns an error if the HTTP request fails or the response cannot be
    /// parsed.
    pub async fn totals(&self) -> Result<Totals, Error> {
        self.query_payload(AccountType::Totals).await
    }

    /// Retrieves the account settings.
    ///
    /// # Errors
    /// Returns an error if the HTTP request fails or the response cannot be
    /// parsed.
    pub async fn settings(&self) -> Result<AccountSettings, Error> {
        self.query_payload(AccountType::Settings).await
    }

    /// Ends the session the client's credentials are bound to.
    ///
    /// # Errors
    /// Returns an error if the HTTP request fails or the response cannot be
    /// parsed.
    pub async fn end_session(&self) -> Result<EndSessionStatus, Error> {
        let url = format!("{}{}", self.base_url, AccountAction::EndSession.endpoint());
        let body = self.post(url).await?;
        map_action(AccountAction::EndSession, &body)?.try_into()
    }

    /// Private helper running a typed query and narrowing to its payload.
    async fn query_payload<T>(&self, query_type: AccountType) -> Result<T, Error>
    where
        T: TryFrom<Account, Error = Error>,
    {
        let account = self.account(&AccountQuery::new().of_type(query_type)).await?;
        account.try_into()
    }
}
