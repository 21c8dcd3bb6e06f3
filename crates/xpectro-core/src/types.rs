//! Core domain types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a top-level navigable view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Dashboard,
    Smishing,
    #[serde(rename = "fakevoice")]
    FakeVoice,
    Vishing,
    Domains,
    Pricing,
    Login,
}

impl ViewId {
    /// All view ids, in menu order
    pub const ALL: [ViewId; 7] = [
        ViewId::Dashboard,
        ViewId::Smishing,
        ViewId::FakeVoice,
        ViewId::Vishing,
        ViewId::Domains,
        ViewId::Pricing,
        ViewId::Login,
    ];

    /// Stable string id (`"fakevoice"`, `"domains"`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Smishing => "smishing",
            ViewId::FakeVoice => "fakevoice",
            ViewId::Vishing => "vishing",
            ViewId::Domains => "domains",
            ViewId::Pricing => "pricing",
            ViewId::Login => "login",
        }
    }

    /// Parse a string id. Matching is exact; anything else yields `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.as_str() == id)
    }

    /// Detection kind shown by this view, if it is a detection view
    pub fn detection_kind(&self) -> Option<DetectionKind> {
        match self {
            ViewId::Smishing => Some(DetectionKind::Smishing),
            ViewId::FakeVoice => Some(DetectionKind::Voice),
            ViewId::Vishing => Some(DetectionKind::Vishing),
            _ => None,
        }
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of threat a detection view covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectionKind {
    Smishing,
    Voice,
    Vishing,
}

impl DetectionKind {
    pub fn label(&self) -> &'static str {
        match self {
            DetectionKind::Smishing => "Smishing",
            DetectionKind::Voice => "Voice",
            DetectionKind::Vishing => "Vishing",
        }
    }
}

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Protocol a monitored domain is reached over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Https,
    Http,
    Wp,
    Ftp,
}

impl Protocol {
    pub const ALL: [Protocol; 4] = [Protocol::Https, Protocol::Http, Protocol::Wp, Protocol::Ftp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Https => "https",
            Protocol::Http => "http",
            Protocol::Wp => "wp",
            Protocol::Ftp => "ftp",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(id.trim()))
    }

    /// Next protocol in selector order, wrapping around
    pub fn cycle(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Verification status of a monitored domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainStatus {
    Secured,
    Review,
    Pending,
}

impl DomainStatus {
    pub const ALL: [DomainStatus; 3] = [
        DomainStatus::Secured,
        DomainStatus::Review,
        DomainStatus::Pending,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DomainStatus::Secured => "Secured",
            DomainStatus::Review => "Review",
            DomainStatus::Pending => "Pending",
        }
    }
}

/// Outcome of a detection task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "High Risk")]
    HighRisk,
    Safe,
    Review,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::HighRisk, TaskStatus::Safe, TaskStatus::Review];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::HighRisk => "High Risk",
            TaskStatus::Safe => "Safe",
            TaskStatus::Review => "Review",
        }
    }
}

/// A monitored domain. Owned by the domain registry; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    pub id: u64,
    pub url: String,
    pub protocol: Protocol,
    pub status: DomainStatus,
    pub ssl_enabled: bool,
    pub added_date: NaiveDate,
}

/// A detection task supplied by a data provider (read-only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub status: TaskStatus,
    pub description: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_id_round_trips_through_str() {
        for view in ViewId::ALL {
            assert_eq!(ViewId::from_id(view.as_str()), Some(view));
        }
    }

    #[test]
    fn test_view_id_unknown_is_none() {
        assert_eq!(ViewId::from_id("settings"), None);
        assert_eq!(ViewId::from_id(""), None);
    }

    #[test]
    fn test_view_id_parse_is_exact() {
        assert_eq!(ViewId::from_id("fakevoice"), Some(ViewId::FakeVoice));
        assert_eq!(ViewId::from_id(" FakeVoice "), None);
        assert_eq!(ViewId::from_id("DASHBOARD"), None);
        assert_eq!(ViewId::from_id("dashboard "), None);
    }

    #[test]
    fn test_view_id_serde_uses_string_ids() {
        let json = serde_json::to_string(&ViewId::FakeVoice).unwrap();
        assert_eq!(json, "\"fakevoice\"");
        let view: ViewId = serde_json::from_str("\"domains\"").unwrap();
        assert_eq!(view, ViewId::Domains);
    }

    #[test]
    fn test_detection_kind_only_for_detection_views() {
        assert_eq!(ViewId::Smishing.detection_kind(), Some(DetectionKind::Smishing));
        assert_eq!(ViewId::FakeVoice.detection_kind(), Some(DetectionKind::Voice));
        assert_eq!(ViewId::Vishing.detection_kind(), Some(DetectionKind::Vishing));
        assert_eq!(ViewId::Domains.detection_kind(), None);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_protocol_cycle_wraps() {
        assert_eq!(Protocol::Https.cycle(), Protocol::Http);
        assert_eq!(Protocol::Ftp.cycle(), Protocol::Https);
    }

    #[test]
    fn test_task_status_serializes_with_label() {
        let json = serde_json::to_string(&TaskStatus::HighRisk).unwrap();
        assert_eq!(json, "\"High Risk\"");
    }
}
