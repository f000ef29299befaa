use serde::Deserialize;
use std::collections::HashMap;

/// One log line as decoded from JSON, before the required keys are checked.
///
/// Both keys are optional so that an absent key is a normal value rather
/// than a decode failure. A JSON `null` decodes to `None` as well. Any other
/// keys on the line are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawLogRecord {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub response_time: Option<f64>,
}

/// A single request record with both required keys present.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Endpoint URL, used as the aggregation key.
    pub url: String,
    /// Response time of the request.
    pub response_time: f64,
}

/// Name of a required key that was absent from a [`RawLogRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingKey(pub &'static str);

impl RawLogRecord {
    /// Turn the raw record into a [`LogRecord`].
    ///
    /// `url` is checked before `response_time`, so a line missing both keys
    /// reports `url`.
    pub fn into_record(self) -> Result<LogRecord, MissingKey> {
        let url = self.url.ok_or(MissingKey("url"))?;
        let response_time = self.response_time.ok_or(MissingKey("response_time"))?;
        Ok(LogRecord { url, response_time })
    }
}

/// Request count and response-time sum for one endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EndpointStats {
    pub count: u64,
    pub total_response_time: f64,
}

impl EndpointStats {
    /// Add one request to the running totals.
    pub fn add(&mut self, response_time: f64) {
        self.count += 1;
        self.total_response_time += response_time;
    }

    /// Mean response time, or `0.0` when no request has been counted.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_response_time / self.count as f64
        }
    }
}

/// Per-endpoint statistics keyed by URL, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsTable {
    entries: Vec<(String, EndpointStats)>,
    index: HashMap<String, usize>,
}

impl StatsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one request for `url`, creating its entry on first sight.
    pub fn record(&mut self, url: &str, response_time: f64) {
        self.entry_mut(url).add(response_time);
    }

    /// Mutable stats for `url`, inserting zeroed stats at the end if absent.
    pub fn entry_mut(&mut self, url: &str) -> &mut EndpointStats {
        let pos = match self.index.get(url) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.entries.push((url.to_string(), EndpointStats::default()));
                self.index.insert(url.to_string(), pos);
                pos
            }
        };
        &mut self.entries[pos].1
    }

    pub fn get(&self, url: &str) -> Option<&EndpointStats> {
        self.index.get(url).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.index.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order their URL was first recorded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EndpointStats)> {
        self.entries.iter().map(|(url, stats)| (url.as_str(), stats))
    }

    /// URLs in first-seen order.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(url, _)| url.as_str())
    }

    /// Sum of request counts over all endpoints.
    pub fn total_requests(&self) -> u64 {
        self.entries.iter().map(|(_, stats)| stats.count).sum()
    }
}

/// One line of the endpoint report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Zero-based position in the report.
    pub index: usize,
    pub url: String,
    /// Number of requests seen for `url`.
    pub count: u64,
    /// Average response time rendered with three decimals, e.g. `"0.200"`.
    pub avg_response_time: String,
}
