//! Account request processing: resolving a query into a request URL and
//! mapping the per-variant response shapes into the unified [`Account`]
//! entity. Nothing here performs I/O; [`crate::ChirpClient`] wires these
//! pieces to the transport.

use crate::query::AccountQuery;
use crate::types::{
    legacy_date, Account, AccountAction, AccountPayload, AccountSettings, AccountSource,
    AccountType, RateLimitStatus, SleepTime, TimeZone, TrendLocation, User,
};
use crate::Error;
use serde_json::Value;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Substituted for [`RateLimitStatus::reset_time`] when the wire value cannot
/// be parsed. The endpoint also reports the reset as a Unix timestamp, so a
/// garbled date string is tolerated rather than failing the whole response.
pub const RESET_TIME_FALLBACK: OffsetDateTime = PrimitiveDateTime::MAX.assume_utc();

/// A resolved account request: the query's selector plus URL construction.
///
/// Construction validates the query, so a value of this type always targets a
/// routable sub-resource.
#[derive(Debug, Clone, Copy)]
pub struct AccountRequest {
    query_type: AccountType,
}

impl AccountRequest {
    /// Resolves a query into a request.
    ///
    /// # Errors
    /// Returns [`Error::MissingQueryType`] if the query has no `type` filter,
    /// or [`Error::InvalidQueryType`] if the filter value names no known
    /// query type.
    pub fn from_query(query: &AccountQuery) -> Result<Self, Error> {
        let parameters = query.parameters();
        let raw = parameters.get("type").ok_or(Error::MissingQueryType)?;
        let query_type = raw.parse::<AccountType>()?;
        Ok(Self { query_type })
    }

    /// The resolved query variant.
    #[must_use]
    pub const fn query_type(&self) -> AccountType {
        self.query_type
    }

    /// Full request URL: `base_url` plus the variant's fixed sub-resource path.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{base_url}{}", self.query_type.endpoint())
    }
}

/// Maps a query response body into the unified entity.
///
/// An empty body is a valid no-content result and yields an entity without a
/// payload. Settings and rate-limit documents are read with an explicit field
/// walk; totals and profiles deserialize straight into their wire shape. The
/// two strategies are both needed because the upstream payloads are not
/// consistent in nesting or naming between endpoints.
///
/// # Errors
/// Returns [`Error::MalformedResponse`] if the body does not match the shape
/// the variant calls for.
pub fn map_account(query_type: AccountType, body: &str) -> Result<Account, Error> {
    let source = AccountSource::Query(query_type);
    if body.trim().is_empty() {
        return Ok(Account {
            source,
            payload: None,
        });
    }
    let payload = match query_type {
        AccountType::VerifyCredentials => {
            let user: User = serde_json::from_str(body)?;
            AccountPayload::Profile(Box::new(user))
        }
        AccountType::RateLimitStatus => AccountPayload::RateLimit(read_rate_limit(body)?),
        AccountType::Totals => AccountPayload::Totals(serde_json::from_str(body)?),
        AccountType::Settings => AccountPayload::Settings(read_settings(body)?),
    };
    Ok(Account {
        source,
        payload: Some(payload),
    })
}

/// Maps an action response body into the unified entity.
///
/// Same contract as [`map_account`], keyed by the action namespace instead of
/// the query one.
///
/// # Errors
/// Returns [`Error::MalformedResponse`] if the body does not match the shape
/// the action calls for.
pub fn map_action(action: AccountAction, body: &str) -> Result<Account, Error> {
    let source = AccountSource::Action(action);
    if body.trim().is_empty() {
        return Ok(Account {
            source,
            payload: None,
        });
    }
    let payload = match action {
        AccountAction::EndSession => AccountPayload::EndSession(serde_json::from_str(body)?),
    };
    Ok(Account {
        source,
        payload: Some(payload),
    })
}

fn read_rate_limit(body: &str) -> Result<RateLimitStatus, Error> {
    let doc: Value = serde_json::from_str(body)?;
    let reset_time = doc
        .get("reset_time")
        .and_then(Value::as_str)
        .and_then(|raw| OffsetDateTime::parse(raw, legacy_date::FORMAT).ok())
        .unwrap_or(RESET_TIME_FALLBACK);
    Ok(RateLimitStatus {
        hourly_limit: u64_field(&doc, "hourly_limit")?,
        remaining_hits: u64_field(&doc, "remaining_hits")?,
        reset_time,
        reset_time_in_seconds: i64_field(&doc, "reset_time_in_seconds")?,
    })
}

fn read_settings(body: &str) -> Result<AccountSettings, Error> {
    let doc: Value = serde_json::from_str(body)?;
    let trend_location = doc
        .get("trend_location")
        .and_then(|locations| locations.get(0))
        .map(read_trend_location)
        .transpose()?;
    let sleep = doc.get("sleep_time").ok_or_else(|| missing("sleep_time"))?;
    let time_zone = doc.get("time_zone").ok_or_else(|| missing("time_zone"))?;
    Ok(AccountSettings {
        trend_location,
        sleep_time: SleepTime {
            enabled: bool_field(sleep, "enabled")?,
            start_time: hour_field(sleep, "start_time"),
            end_time: hour_field(sleep, "end_time"),
        },
        language: str_field(&doc, "language")?,
        always_use_https: bool_field(&doc, "always_use_https")?,
        discoverable_by_email: bool_field(&doc, "discoverable_by_email")?,
        geo_enabled: bool_field(&doc, "geo_enabled")?,
        time_zone: TimeZone {
            name: str_field(time_zone, "name")?,
            tzinfo_name: str_field(time_zone, "tzinfo_name")?,
            utc_offset: i32::try_from(i64_field(time_zone, "utc_offset")?)
                .map_err(|_| missing("utc_offset"))?,
        },
    })
}

fn read_trend_location(location: &Value) -> Result<TrendLocation, Error> {
    Ok(TrendLocation {
        name: str_field(location, "name")?,
        woeid: u32::try_from(u64_field(location, "woeid")?).map_err(|_| missing("woeid"))?,
        country: location
            .get("country")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

fn missing(field: &str) -> Error {
    Error::malformed(format!("missing or mistyped field '{field}'"))
}

fn str_field(value: &Value, field: &str) -> Result<String, Error> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| missing(field))
}

fn bool_field(value: &Value, field: &str) -> Result<bool, Error> {
    value
        .get(field)
        .and_then(Value::as_bool)
        .ok_or_else(|| missing(field))
}

fn u64_field(value: &Value, field: &str) -> Result<u64, Error> {
    value
        .get(field)
        .and_then(Value::as_u64)
        .ok_or_else(|| missing(field))
}

fn i64_field(value: &Value, field: &str) -> Result<i64, Error> {
    value
        .get(field)
        .and_then(Value::as_i64)
        .ok_or_else(|| missing(field))
}

// start_time/end_time are null while the sleep window is disabled
fn hour_field(value: &Value, field: &str) -> Option<u8> {
    value
        .get(field)
        .and_then(Value::as_u64)
        .and_then(|hour| u8::try_from(hour).ok())
}
