use serde::Deserialize;

/// The stages document as shipped in `stages-data.json`.
///
/// `stages` is optional on purpose: a document without the field is treated
/// as an empty model by the mapper (with a diagnostic), not a parse failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StagesDocument {
    #[serde(default)]
    pub stages: Option<Vec<StageRecord>>,
}

impl StagesDocument {
    pub fn stage_records(&self) -> &[StageRecord] {
        self.stages.as_deref().unwrap_or_default()
    }
}

/// One phase of the process model. `step` is unique and defines display order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageRecord {
    pub step: u32,
    pub id: String,
    pub title: String,
    pub promise: String,
    #[serde(default)]
    pub description: String,
    pub color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default)]
    pub engine: String,
    #[serde(default)]
    pub engine_color: String,
    #[serde(default)]
    pub people: People,
    #[serde(default)]
    pub processes: Vec<ProcessItem>,
    #[serde(default)]
    pub back_process: Vec<BackProcessItem>,
    #[serde(default)]
    pub tdr: Option<TdrRecord>,
}

fn default_text_color() -> String {
    "white".to_string()
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct People {
    #[serde(default)]
    pub experts: String,
    #[serde(default)]
    pub coordinators: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcessItem {
    pub name: String,
    /// Raw status code from the document. Display code derived via
    /// [`ProcessStatus::from_raw`].
    #[serde(default)]
    pub status: String,
}

/// Supporting-department work item behind a stage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackProcessItem {
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

/// Documentation-readiness record attached to a stage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TdrRecord {
    pub tier: u8,
    #[serde(default)]
    pub target: Option<HealthTarget>,
    #[serde(default)]
    pub rule: String,
    #[serde(default)]
    pub documentation: Vec<String>,
    #[serde(default)]
    pub ai_implication: String,
}

/// Readiness target as found in the document: either a bare number or a
/// string like `"45%"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum HealthTarget {
    Number(i64),
    Text(String),
}

impl HealthTarget {
    /// Percentage value of the target. `None` for values that don't parse
    /// as a non-negative integer; callers choose the fallback.
    pub fn percent(&self) -> Option<u32> {
        match self {
            HealthTarget::Number(n) => u32::try_from(*n).ok(),
            HealthTarget::Text(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        }
    }

    /// Display form, with the `%` suffix normalized on.
    pub fn display(&self) -> String {
        match self {
            HealthTarget::Number(n) => format!("{n}%"),
            HealthTarget::Text(s) => s.trim().to_string(),
        }
    }
}

/// Display status of a front process.
///
/// `from_raw` is total: the four known codes map to their counterpart and
/// every other input falls back to `Active`. That fallback is the documented
/// default for this display layer, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    New,
    Active,
    Todo,
    Merge,
}

impl ProcessStatus {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "new" => ProcessStatus::New,
            "active" => ProcessStatus::Active,
            "todo" => ProcessStatus::Todo,
            "merge" => ProcessStatus::Merge,
            _ => ProcessStatus::Active,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            ProcessStatus::New => "new",
            ProcessStatus::Active => "active",
            ProcessStatus::Todo => "todo",
            ProcessStatus::Merge => "merge",
        }
    }
}

/// Documentation-readiness tier. Unrecognized tier numbers fall back to
/// tier 1, the documented default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TdrTier {
    /// Tier 1 (green).
    Relational,
    /// Tier 2 (blue).
    Strategic,
    /// Tier 3 (red).
    Compliance,
}

/// Default palette for a tier, used when the stage supplies no accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPalette {
    pub border: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub badge: &'static str,
}

impl TdrTier {
    pub fn from_number(tier: u8) -> Self {
        match tier {
            2 => TdrTier::Strategic,
            3 => TdrTier::Compliance,
            _ => TdrTier::Relational,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            TdrTier::Relational => 1,
            TdrTier::Strategic => 2,
            TdrTier::Compliance => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TdrTier::Relational => "Agile & Relational",
            TdrTier::Strategic => "Technical & Strategic",
            TdrTier::Compliance => "Compliance & Safety",
        }
    }

    pub fn palette(&self) -> TierPalette {
        match self {
            TdrTier::Relational => TierPalette {
                border: "#10b981",
                background: "#ecfdf5",
                text: "#065f46",
                badge: "#10b981",
            },
            TdrTier::Strategic => TierPalette {
                border: "#3b82f6",
                background: "#eff6ff",
                text: "#1e40af",
                badge: "#3b82f6",
            },
            TdrTier::Compliance => TierPalette {
                border: "#ef4444",
                background: "#fef2f2",
                text: "#991b1b",
                badge: "#ef4444",
            },
        }
    }
}

/// Normalized department category used to highlight which support functions
/// are active for a stage. A closed set; department names outside the lookup
/// table map to no pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pillar {
    AccountMgmt,
    Finance,
    Hr,
    It,
    Marketing,
    Ceo,
    Legal,
}

impl Pillar {
    pub const ALL: [Pillar; 7] = [
        Pillar::AccountMgmt,
        Pillar::Finance,
        Pillar::Hr,
        Pillar::It,
        Pillar::Marketing,
        Pillar::Ceo,
        Pillar::Legal,
    ];

    /// Exact-string lookup from a department name. `None` means the
    /// department has no pillar mapping, not an error.
    pub fn from_department(name: &str) -> Option<Pillar> {
        match name {
            "Account Management" => Some(Pillar::AccountMgmt),
            "Finance" | "Finance and Admin" | "Financial Health" => Some(Pillar::Finance),
            "People" | "Talent & Culture" | "HR (People)" => Some(Pillar::Hr),
            "IT & Ops" | "Tech & Security" | "IT" => Some(Pillar::It),
            "Marketing" => Some(Pillar::Marketing),
            "CEO Office" => Some(Pillar::Ceo),
            "Legal" => Some(Pillar::Legal),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Pillar::AccountMgmt => "account_mgmt",
            Pillar::Finance => "finance",
            Pillar::Hr => "hr",
            Pillar::It => "it",
            Pillar::Marketing => "marketing",
            Pillar::Ceo => "ceo",
            Pillar::Legal => "legal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Pillar::AccountMgmt => "Account Management",
            Pillar::Finance => "Finance",
            Pillar::Hr => "People",
            Pillar::It => "IT & Ops",
            Pillar::Marketing => "Marketing",
            Pillar::Ceo => "CEO Office",
            Pillar::Legal => "Legal",
        }
    }

    /// CEO Office and Legal support every stage; they are never listed as
    /// stage-specific gateway pillars.
    pub fn is_always_on(&self) -> bool {
        matches!(self, Pillar::Ceo | Pillar::Legal)
    }
}
