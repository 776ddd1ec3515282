use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

// =============================================================================
// QUERY SELECTORS - Closed enums that pick the sub-resource and response shape
// =============================================================================

/// Account read queries. Exactly one variant is active per request; it picks
/// both the sub-resource URL and the response interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    /// Check that the supplied credentials are valid; returns the full profile.
    VerifyCredentials,
    /// Standing against the hourly API call quota.
    RateLimitStatus,
    /// Aggregate activity counters for the authenticated account.
    Totals,
    /// Account settings: trend location, sleep window, timezone, flags.
    Settings,
}

impl AccountType {
    /// Every query variant, in declaration order.
    pub const VARIANTS: [Self; 4] = [
        Self::VerifyCredentials,
        Self::RateLimitStatus,
        Self::Totals,
        Self::Settings,
    ];

    /// Returns the canonical API-style name for this query type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VerifyCredentials => "verify_credentials",
            Self::RateLimitStatus => "rate_limit_status",
            Self::Totals => "totals",
            Self::Settings => "settings",
        }
    }

    /// Sub-resource path for this query type, relative to the API base URL.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::VerifyCredentials => "account/verify_credentials.json",
            Self::RateLimitStatus => "account/rate_limit_status.json",
            Self::Totals => "account/totals.json",
            Self::Settings => "account/settings.json",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct AccountTypeParseError {
    value: String,
}

impl std::fmt::Display for AccountTypeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid account query type '{}'; expected one of: {}",
            self.value,
            AccountType::VARIANTS.map(AccountType::as_str).join(", ")
        )
    }
}

impl std::error::Error for AccountTypeParseError {}

impl std::str::FromStr for AccountType {
    type Err = AccountTypeParseError;

    /// Case-insensitive; spaces, dashes, and underscores are interchangeable.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '-', '_'], "");
        let account_type = match normalized.as_str() {
            "verifycredentials" => Self::VerifyCredentials,
            "ratelimitstatus" => Self::RateLimitStatus,
            "totals" => Self::Totals,
            "settings" => Self::Settings,
            _ => {
                return Err(AccountTypeParseError {
                    value: value.to_string(),
                })
            }
        };
        Ok(account_type)
    }
}

/// Side-effecting account calls. A separate namespace from [`AccountType`]:
/// actions are never resolved from query filters and use their own dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    /// Invalidate the session the credentials are bound to.
    EndSession,
}

impl AccountAction {
    /// Every action variant, in declaration order.
    pub const VARIANTS: [Self; 1] = [Self::EndSession];

    /// Returns the canonical API-style name for this action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EndSession => "end_session",
        }
    }

    /// Sub-resource path for this action, relative to the API base URL.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::EndSession => "account/end_session.json",
        }
    }
}

impl std::fmt::Display for AccountAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct AccountActionParseError {
    value: String,
}

impl std::fmt::Display for AccountActionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid account action '{}'; expected one of: {}",
            self.value,
            AccountAction::VARIANTS.map(AccountAction::as_str).join(", ")
        )
    }
}

impl std::error::Error for AccountActionParseError {}

impl std::str::FromStr for AccountAction {
    type Err = AccountActionParseError;

    /// Case-insensitive; spaces, dashes, and underscores are interchangeable.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '-', '_'], "");
        let action = match normalized.as_str() {
            "endsession" => Self::EndSession,
            _ => {
                return Err(AccountActionParseError {
                    value: value.to_string(),
                })
            }
        };
        Ok(action)
    }
}

// =============================================================================
// UNIFIED RESULT ENTITY - One tagged result type for queries and actions
// =============================================================================

/// Which call produced an [`Account`]: a read query or a side-effecting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountSource {
    Query(AccountType),
    Action(AccountAction),
}

/// Unified result of an account call.
///
/// Carries the variant that produced it plus at most one matching payload.
/// An empty response body yields `payload: None`, which is a valid
/// no-content result rather than an error.
#[derive(Debug, Clone)]
pub struct Account {
    pub source: AccountSource,
    pub payload: Option<AccountPayload>,
}

impl Account {
    /// The query variant behind this entity, if it came from a read query.
    #[must_use]
    pub const fn query_type(&self) -> Option<AccountType> {
        match self.source {
            AccountSource::Query(query_type) => Some(query_type),
            AccountSource::Action(_) => None,
        }
    }
}

/// Variant-specific payload carried by an [`Account`].
#[derive(Debug, Clone)]
pub enum AccountPayload {
    Settings(AccountSettings),
    RateLimit(RateLimitStatus),
    Profile(Box<User>),
    Totals(Totals),
    EndSession(EndSessionStatus),
}

impl AccountPayload {
    /// Short payload name, used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Settings(_) => "settings",
            Self::RateLimit(_) => "rate limit",
            Self::Profile(_) => "profile",
            Self::Totals(_) => "totals",
            Self::EndSession(_) => "end session",
        }
    }
}

impl TryFrom<Account> for AccountSettings {
    type Error = crate::Error;

    fn try_from(account: Account) -> Result<Self, Self::Error> {
        match account.payload {
            Some(AccountPayload::Settings(settings)) => Ok(settings),
            other => Err(crate::Error::unexpected_payload("settings", other.as_ref())),
        }
    }
}

impl TryFrom<Account> for RateLimitStatus {
    type Error = crate::Error;

    fn try_from(account: Account) -> Result<Self, Self::Error> {
        match account.payload {
            Some(AccountPayload::RateLimit(status)) => Ok(status),
            other => Err(crate::Error::unexpected_payload("rate limit", other.as_ref())),
        }
    }
}

impl TryFrom<Account> for User {
    type Error = crate::Error;

    fn try_from(account: Account) -> Result<Self, Self::Error> {
        match account.payload {
            Some(AccountPayload::Profile(user)) => Ok(*user),
            other => Err(crate::Error::unexpected_payload("profile", other.as_ref())),
        }
    }
}

impl TryFrom<Account> for Totals {
    type Error = crate::Error;

    fn try_from(account: Account) -> Result<Self, Self::Error> {
        match account.payload {
            Some(AccountPayload::Totals(totals)) => Ok(totals),
            other => Err(crate::Error::unexpected_payload("totals", other.as_ref())),
        }
    }
}

impl TryFrom<Account> for EndSessionStatus {
    type Error = crate::Error;

    fn try_from(account: Account) -> Result<Self, Self::Error> {
        match account.payload {
            Some(AccountPayload::EndSession(status)) => Ok(status),
            other => Err(crate::Error::unexpected_payload("end session", other.as_ref())),
        }
    }
}

// =============================================================================
// DOCUMENT-WALK PAYLOADS - Assembled field by field from dynamic JSON
// =============================================================================

/// Account settings, assembled from the settings document.
#[derive(Debug, Clone)]
pub struct AccountSettings {
    /// Trend location the account is tuned to. The API wraps it in a
    /// one-element array; only that first element is kept.
    pub trend_location: Option<TrendLocation>,
    /// Nightly window during which notifications are muted.
    pub sleep_time: SleepTime,
    /// Interface language code, e.g. "en".
    pub language: String,
    /// Whether the account forces HTTPS.
    pub always_use_https: bool,
    /// Whether the account can be found by its email address.
    pub discoverable_by_email: bool,
    /// Whether updates carry geolocation.
    pub geo_enabled: bool,
    pub time_zone: TimeZone,
}

/// A place trends can be scoped to.
#[derive(Debug, Clone)]
pub struct TrendLocation {
    pub name: String,
    /// Where On Earth ID of the location.
    pub woeid: u32,
    pub country: Option<String>,
}

/// Nightly do-not-disturb window.
#[derive(Debug, Clone)]
pub struct SleepTime {
    pub enabled: bool,
    /// Hour the window opens (0-23); absent while the window is disabled.
    pub start_time: Option<u8>,
    /// Hour the window closes (0-23); absent while the window is disabled.
    pub end_time: Option<u8>,
}

/// Timezone descriptor attached to account settings.
#[derive(Debug, Clone)]
pub struct TimeZone {
    /// Human-readable name, e.g. "Pacific Time (US & Canada)".
    pub name: String,
    /// tzinfo database identifier, e.g. "`America/Los_Angeles`".
    pub tzinfo_name: String,
    /// Offset from UTC in seconds.
    pub utc_offset: i32,
}

/// Standing against the hourly API call quota.
#[derive(Debug, Clone)]
pub struct RateLimitStatus {
    /// Calls allowed per hour.
    pub hourly_limit: u64,
    /// Calls left in the current window.
    pub remaining_hits: u64,
    /// When the quota resets. Substituted with the maximum representable
    /// timestamp when the wire value cannot be parsed.
    pub reset_time: OffsetDateTime,
    /// Reset instant as a Unix timestamp, as reported by the API.
    pub reset_time_in_seconds: i64,
}

// =============================================================================
// SCHEMA-BOUND PAYLOADS - Deserialized directly from their wire shape
// =============================================================================

/// Aggregate activity counters for the authenticated account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Totals {
    pub favorites: u64,
    pub followers: u64,
    pub friends: u64,
    pub updates: u64,
}

/// Echo returned by session-ending calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndSessionStatus {
    /// The request path the server acted on.
    pub request: String,
    /// Error message when the call failed server-side.
    pub error: Option<String>,
}

/// Full user profile, as returned by credential verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Numeric account ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Handle, without the leading '@'.
    pub screen_name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Whether the account's updates are visible to approved followers only.
    #[serde(default)]
    pub protected: bool,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub friends_count: u64,
    #[serde(default)]
    pub favourites_count: u64,
    #[serde(default)]
    pub statuses_count: u64,
    /// When the account was created.
    #[serde(with = "legacy_date")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub time_zone: Option<String>,
    /// Offset from UTC in seconds.
    #[serde(default)]
    pub utc_offset: Option<i32>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub geo_enabled: bool,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

/// Serde adapter for the API's legacy date strings,
/// e.g. "Thu Sep 02 10:00:00 +0000 2010".
pub(crate) mod legacy_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::format_description::BorrowedFormatItem;
    use time::macros::format_description;
    use time::OffsetDateTime;

    pub(crate) const FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
        "[weekday repr:short] [month repr:short] [day] [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute] [year]"
    );

    pub fn serialize<S>(datetime: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = datetime.format(FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        OffsetDateTime::parse(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
