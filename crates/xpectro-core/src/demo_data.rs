//! Fixed-shape data providers for the dashboard views
//!
//! Every view reads its charts, cards and task lists through [`DataProvider`].
//! [`DemoData`] serves the built-in demo dataset.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{DetectionKind, DomainRecord, DomainStatus, Protocol, TaskRecord, TaskStatus, ViewId};

/// Summary card on the dashboard; activating it navigates to `route`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: String,
    /// View id string of the view this card opens
    pub route: String,
}

impl StatCard {
    /// A rising count is bad news for threat cards
    pub fn is_rising(&self) -> bool {
        self.change.starts_with('+')
    }
}

/// One day of the weekly threat chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreatPoint {
    pub day: &'static str,
    pub smishing: u64,
    pub voice: u64,
    pub vishing: u64,
}

/// Slice of the threat-distribution pie
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionSlice {
    pub name: &'static str,
    pub value: u64,
}

/// One month of the scans-vs-risk chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanPoint {
    pub month: &'static str,
    pub scans: u64,
    pub risk: u64,
}

/// One axis of the biometric radar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadarAxis {
    pub subject: &'static str,
    pub value: u64,
    pub full_mark: u64,
}

/// Educational panel shown on a detection view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionContent {
    pub title: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub tips: [&'static str; 3],
}

/// A pricing tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    pub name: &'static str,
    pub audience: &'static str,
    pub price: u32,
    /// `"mo"` or `"yr"`
    pub period: &'static str,
    pub features: Vec<String>,
    pub highlighted: bool,
}

/// Source of the read-only data the views display
pub trait DataProvider {
    fn stat_cards(&self) -> Vec<StatCard>;
    fn weekly_threats(&self) -> Vec<ThreatPoint>;
    fn threat_distribution(&self) -> Vec<DistributionSlice>;
    fn detection_tasks(&self, kind: DetectionKind) -> Vec<TaskRecord>;
    fn monthly_scans(&self) -> Vec<ScanPoint>;
    fn biometrics(&self) -> Vec<RadarAxis>;
    fn detection_content(&self, kind: DetectionKind) -> DetectionContent;
    fn pricing_plans(&self, yearly: bool) -> Vec<PricingPlan>;
    /// Domains the registry starts with
    fn seed_domains(&self) -> Vec<DomainRecord>;
}

/// The built-in demo dataset
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoData;

impl DataProvider for DemoData {
    fn stat_cards(&self) -> Vec<StatCard> {
        [
            ("Smishing Threats", "1,240", "+12%", ViewId::Smishing),
            ("Voice Clones", "85", "-5%", ViewId::FakeVoice),
            ("Vishing Calls", "342", "+24%", ViewId::Vishing),
        ]
        .into_iter()
        .map(|(title, value, change, route)| StatCard {
            title: title.to_string(),
            value: value.to_string(),
            change: change.to_string(),
            route: route.as_str().to_string(),
        })
        .collect()
    }

    fn weekly_threats(&self) -> Vec<ThreatPoint> {
        [
            ("Mon", 400, 240, 240),
            ("Tue", 300, 139, 221),
            ("Wed", 200, 980, 229),
            ("Thu", 278, 390, 200),
            ("Fri", 189, 480, 218),
            ("Sat", 239, 380, 250),
            ("Sun", 349, 430, 210),
        ]
        .into_iter()
        .map(|(day, smishing, voice, vishing)| ThreatPoint {
            day,
            smishing,
            voice,
            vishing,
        })
        .collect()
    }

    fn threat_distribution(&self) -> Vec<DistributionSlice> {
        vec![
            DistributionSlice { name: "Secure", value: 65 },
            DistributionSlice { name: "Suspicious", value: 25 },
            DistributionSlice { name: "Malicious", value: 10 },
        ]
    }

    fn detection_tasks(&self, kind: DetectionKind) -> Vec<TaskRecord> {
        vec![
            TaskRecord {
                id: "TSK-9921".to_string(),
                status: TaskStatus::HighRisk,
                description: format!("Suspicious {} pattern from unknown origin", kind.label()),
                timestamp: "2 mins ago".to_string(),
            },
            TaskRecord {
                id: "TSK-9920".to_string(),
                status: TaskStatus::Safe,
                description: "Routine scan complete - No threats".to_string(),
                timestamp: "15 mins ago".to_string(),
            },
            TaskRecord {
                id: "TSK-9919".to_string(),
                status: TaskStatus::Review,
                description: "Flagged for manual review by admin".to_string(),
                timestamp: "1 hr ago".to_string(),
            },
        ]
    }

    fn monthly_scans(&self) -> Vec<ScanPoint> {
        [
            ("Jan", 4000, 2400),
            ("Feb", 3000, 1398),
            ("Mar", 2000, 9800),
            ("Apr", 2780, 3908),
            ("May", 1890, 4800),
            ("Jun", 2390, 3800),
        ]
        .into_iter()
        .map(|(month, scans, risk)| ScanPoint { month, scans, risk })
        .collect()
    }

    fn biometrics(&self) -> Vec<RadarAxis> {
        [
            ("Tone", 120),
            ("Pitch", 98),
            ("Cadence", 86),
            ("Background", 99),
            ("Keywords", 85),
            ("Biometrics", 65),
        ]
        .into_iter()
        .map(|(subject, value)| RadarAxis {
            subject,
            value,
            full_mark: 150,
        })
        .collect()
    }

    fn detection_content(&self, kind: DetectionKind) -> DetectionContent {
        match kind {
            DetectionKind::Smishing => DetectionContent {
                title: "How Smishing Works",
                description: "Smishing (SMS Phishing) attacks use text messages to trick you \
                              into downloading malware or sharing sensitive information.",
                example: "ALERT: Your bank account locked. Click: http://bit.ly/secure-login",
                tips: ["Check sender number", "Don't click links", "Verify with bank"],
            },
            DetectionKind::Voice => DetectionContent {
                title: "Deepfake Audio Detection",
                description: "AI-generated voice clones can mimic executives to authorize \
                              transfers. Our engine analyzes frequency artifacts.",
                example: "Audio: 'Wire $50k immediately. I can't talk.'",
                tips: ["Verify via 2nd channel", "Listen for pauses", "Challenge questions"],
            },
            DetectionKind::Vishing => DetectionContent {
                title: "Vishing (Voice Phishing)",
                description: "Attackers use phone calls and social engineering. We monitor \
                              call patterns and cross-reference blacklisted numbers.",
                example: "Caller: 'Microsoft Support. You have a virus.'",
                tips: ["Hang up", "Never give remote access", "Check Caller ID"],
            },
        }
    }

    fn pricing_plans(&self, yearly: bool) -> Vec<PricingPlan> {
        [("Scout", "Startups"), ("Guardian", "Growing Teams"), ("Sentinel", "Large Orgs")]
            .into_iter()
            .enumerate()
            .map(|(i, (name, audience))| {
                let tier = i as u32 + 1;
                let voice = if i > 0 {
                    "Advanced Voice Biometrics"
                } else {
                    "Basic Voice Scan"
                };
                let domains = if i > 1 {
                    "Unlimited Monitored Domains".to_string()
                } else {
                    format!("{} Monitored Domains", tier * 5)
                };
                PricingPlan {
                    name,
                    audience,
                    price: if yearly { tier * 90 } else { tier * 10 },
                    period: if yearly { "yr" } else { "mo" },
                    features: vec![
                        "Real-time Smishing Scan".to_string(),
                        voice.to_string(),
                        domains,
                    ],
                    highlighted: i == 1,
                }
            })
            .collect()
    }

    fn seed_domains(&self) -> Vec<DomainRecord> {
        vec![
            DomainRecord {
                id: 1,
                url: "finance.xpectro.com".to_string(),
                protocol: Protocol::Https,
                status: DomainStatus::Secured,
                ssl_enabled: true,
                added_date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap_or_default(),
            },
            DomainRecord {
                id: 2,
                url: "legacy.xpectro-internal.net".to_string(),
                protocol: Protocol::Http,
                status: DomainStatus::Review,
                ssl_enabled: false,
                added_date: NaiveDate::from_ymd_opt(2023, 10, 5).unwrap_or_default(),
            },
        ]
    }
}
