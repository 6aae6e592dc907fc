//! Serde model for the subset of HAR 1.2 read by the converter.

use serde::Deserialize;

/// Top-level HAR document
#[derive(Debug, Clone, Deserialize)]
pub struct HarFile {
    pub log: HarLog,
}

/// The `log` object; only the entry list matters here
#[derive(Debug, Clone, Deserialize)]
pub struct HarLog {
    pub entries: Vec<HarEntry>,
}

/// One request/response pair
#[derive(Debug, Clone, Deserialize)]
pub struct HarEntry {
    /// e.g. "2017-11-18T10:06:12.123-05:00"
    #[serde(rename = "startedDateTime")]
    pub started_date_time: String,
    /// Total elapsed time of the request in milliseconds
    pub time: f64,
    #[serde(default)]
    pub response: Option<HarResponse>,
}

/// Response sizes in bytes. HAR writers omit or null these when unknown.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarResponse {
    #[serde(rename = "headersSize", default)]
    pub headers_size: Option<f64>,
    #[serde(rename = "bodySize", default)]
    pub body_size: Option<f64>,
}

impl HarEntry {
    /// Combined header and body size in bytes, if both are known
    pub fn response_bytes(&self) -> Option<f64> {
        let response = self.response.as_ref()?;
        Some(response.headers_size? + response.body_size?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_entry_ignores_unknown_fields() {
        let json = r#"{
            "startedDateTime": "2017-11-18T10:06:12.123-05:00",
            "time": 87.5,
            "request": { "method": "GET", "url": "https://example.com/" },
            "response": { "status": 200, "headersSize": 300, "bodySize": 724 },
            "timings": { "wait": 40 }
        }"#;

        let entry: HarEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.started_date_time, "2017-11-18T10:06:12.123-05:00");
        assert_eq!(entry.time, 87.5);
        assert_eq!(entry.response_bytes(), Some(1024.0));
    }

    #[test]
    fn test_missing_sizes() {
        let json = r#"{ "startedDateTime": "x", "time": 1, "response": { "headersSize": 10 } }"#;
        let entry: HarEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.response_bytes(), None);

        let json = r#"{ "startedDateTime": "x", "time": 1, "response": { "headersSize": 10, "bodySize": null } }"#;
        let entry: HarEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.response_bytes(), None);

        let json = r#"{ "startedDateTime": "x", "time": 1 }"#;
        let entry: HarEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.response_bytes(), None);
    }
}
