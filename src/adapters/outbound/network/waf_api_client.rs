use crate::monitoring::domain::{
    Disposition, EventId, RuleFrequency, SecurityEvent, SourceFrequency, StatsSnapshot, Verdict,
};
use crate::ports::outbound::WafApi;
use crate::shared::error::{FetchError, MonitorError};
use crate::shared::{FetchResult, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Base endpoint used when none is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:3001/api";

/// Identifier or rule code as the backend sends it: a JSON number or a string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireScalar {
    Integer(i64),
    Text(String),
}

impl fmt::Display for WireScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireScalar::Integer(n) => write!(f, "{}", n),
            WireScalar::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireEventsEnvelope {
    #[serde(default)]
    events: Option<Vec<WireEvent>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireEvent {
    id: WireScalar,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    src_ip: Option<String>,
    #[serde(default)]
    rule_id: Option<WireScalar>,
    #[serde(default)]
    payload: Option<String>,
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    operator_action: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireStats {
    #[serde(default)]
    total_events: Option<u64>,
    #[serde(default)]
    recent_events: Option<u64>,
    #[serde(default)]
    top_ips: Option<Vec<WireSourceCount>>,
    #[serde(default)]
    top_rules: Option<Vec<WireRuleCount>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireSourceCount {
    src_ip: String,
    #[serde(default)]
    count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct WireRuleCount {
    rule_id: WireScalar,
    #[serde(default)]
    payload: Option<String>,
    #[serde(default)]
    count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct WireActionResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<String>,
}

/// HttpWafApi adapter for the WAFGuard backend HTTP API
///
/// This adapter implements the WafApi port with an async reqwest client.
/// It performs exactly one request per call and never retries; retrying is
/// the sync loop's next tick.
///
/// The backend reports its own failures as HTTP 200 with an `error` field in
/// the body. Those are classified as [`FetchError`]s like any other failure.
pub struct HttpWafApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpWafApi {
    /// Creates a client for `api_base`, e.g. `http://localhost:3001/api`.
    ///
    /// No request timeout is imposed unless `timeout` is given.
    pub fn new(api_base: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Self::normalize_base_url(api_base)?;

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("wafguard-monitor/{}", version);
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| MonitorError::HttpClientError {
            details: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validates an http(s) base URL and strips trailing slashes
    pub fn normalize_base_url(raw: &str) -> Result<String> {
        let trimmed = raw.trim().trim_end_matches('/');
        let invalid = |reason: &str| MonitorError::InvalidApiBase {
            url: raw.to_string(),
            reason: reason.to_string(),
        };

        let parsed = reqwest::Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https").into());
        }
        if parsed.host_str().is_none() {
            return Err(invalid("missing host").into());
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("must not contain a query or fragment").into());
        }

        Ok(trimmed.to_string())
    }

    fn events_url(&self, limit: usize) -> String {
        format!("{}/events?limit={}", self.base_url, limit)
    }

    fn stats_url(&self) -> String {
        format!("{}/stats", self.base_url)
    }

    fn action_url(&self, event_id: &EventId, verdict: Verdict) -> String {
        format!(
            "{}/events/{}/action?action={}",
            self.base_url,
            urlencoding::encode(event_id.as_str()),
            verdict.as_str()
        )
    }

    /// Sends the request and returns the body of a 2xx response
    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> FetchResult<String> {
        let response = request.send().await.map_err(|e| {
            debug!(url = %url, error = %e, "request failed");
            FetchError::transport(e)
        })?;

        let status = response.status();
        debug!(url = %url, status = status.as_u16(), "response received");
        if !status.is_success() {
            return Err(FetchError::http_status(status.as_u16()));
        }

        response.text().await.map_err(FetchError::transport)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        debug!(url = %url, "GET");
        let body = self.send(self.client.get(url), url).await?;
        serde_json::from_str(&body).map_err(FetchError::decode)
    }
}

#[async_trait]
impl WafApi for HttpWafApi {
    async fn fetch_events(&self, limit: usize) -> FetchResult<Vec<SecurityEvent>> {
        let envelope: WireEventsEnvelope = self.get_json(&self.events_url(limit)).await?;
        decode_events(envelope)
    }

    async fn fetch_stats(&self) -> FetchResult<StatsSnapshot> {
        let stats: WireStats = self.get_json(&self.stats_url()).await?;
        decode_stats(stats)
    }

    async fn apply_action(&self, event_id: &EventId, verdict: Verdict) -> FetchResult<()> {
        let url = self.action_url(event_id, verdict);
        debug!(url = %url, "POST");
        let body = self.send(self.client.post(&url), &url).await?;
        decode_action_response(&body)
    }
}

fn decode_events(envelope: WireEventsEnvelope) -> FetchResult<Vec<SecurityEvent>> {
    if let Some(reported) = envelope.error {
        return Err(FetchError::backend(reported));
    }

    envelope
        .events
        .unwrap_or_default()
        .into_iter()
        .filter_map(|wire| decode_event(wire).transpose())
        .collect()
}

/// Returns `None` for a row without a readable timestamp
fn decode_event(wire: WireEvent) -> FetchResult<Option<SecurityEvent>> {
    let id = EventId::new(wire.id.to_string()).map_err(FetchError::decode)?;
    let Some(timestamp) = wire.timestamp.as_deref().and_then(parse_timestamp) else {
        warn!(event = %id, raw = ?wire.timestamp, "skipping event without a readable timestamp");
        return Ok(None);
    };
    let operator_action = wire
        .operator_action
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(str::parse::<Verdict>)
        .transpose()
        .map_err(FetchError::decode)?;

    Ok(Some(SecurityEvent::new(
        id,
        timestamp,
        wire.src_ip.unwrap_or_default(),
        wire.rule_id.map(|r| r.to_string()).unwrap_or_default(),
    )
    .with_payload(wire.payload.unwrap_or_default())
    .with_target_uri(wire.uri.unwrap_or_default())
    .with_disposition(
        wire.action
            .as_deref()
            .map(Disposition::from_wire)
            .unwrap_or(Disposition::Pending),
    )
    .with_operator_action(operator_action)))
}

/// Accepts RFC 3339, or a naive ISO-8601 datetime which is taken as UTC
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn decode_stats(wire: WireStats) -> FetchResult<StatsSnapshot> {
    if let Some(reported) = wire.error {
        return Err(FetchError::backend(reported));
    }

    let top_sources = wire
        .top_ips
        .unwrap_or_default()
        .into_iter()
        .map(|entry| SourceFrequency {
            src_ip: entry.src_ip,
            count: entry.count.unwrap_or(0),
        })
        .collect();
    let top_rules = wire
        .top_rules
        .unwrap_or_default()
        .into_iter()
        .map(|entry| RuleFrequency {
            rule_id: entry.rule_id.to_string(),
            sample_payload: entry.payload,
            count: entry.count.unwrap_or(0),
        })
        .collect();

    Ok(StatsSnapshot::new(
        wire.total_events.unwrap_or(0),
        wire.recent_events.unwrap_or(0),
        top_sources,
        top_rules,
    ))
}

/// An empty or non-JSON body counts as success; only an explicit
/// `"success": false` is a failure.
fn decode_action_response(body: &str) -> FetchResult<()> {
    match serde_json::from_str::<WireActionResponse>(body) {
        Ok(WireActionResponse {
            success: Some(false),
            error,
        }) => Err(FetchError::backend(
            error.unwrap_or_else(|| "action was rejected".to_string()),
        )),
        _ => Ok(()),
    }
}
