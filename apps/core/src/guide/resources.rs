//! Support-resource catalog and per-request bundle.
//!
//! The catalog is a fixed, read-only table shared by every request. A
//! [`ResourceBundle`] is the deduplicated selection made for one analysis;
//! it preserves insertion order so composed text is stable across runs.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Resource category identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    ImmediateCrisis,
    TherapyServices,
    DepressionSupport,
    AnxietySupport,
}

impl ResourceKind {
    /// Returns the wire label for the resource category
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::ImmediateCrisis => "immediate_crisis",
            ResourceKind::TherapyServices => "therapy_services",
            ResourceKind::DepressionSupport => "depression_support",
            ResourceKind::AnxietySupport => "anxiety_support",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One catalog entry: a named list of canned resource lines
#[derive(Debug, Serialize)]
pub struct ResourceCategory {
    #[serde(skip)]
    pub kind: ResourceKind,
    /// Display name used as the section header in composed text
    pub name: &'static str,
    /// One-line description of what the category offers
    pub description: &'static str,
    /// Resource lines, most important first
    pub resources: &'static [&'static str],
}

// Rows follow ResourceKind declaration order.
static CATALOG: &[ResourceCategory] = &[
    ResourceCategory {
        kind: ResourceKind::ImmediateCrisis,
        name: "Immediate Crisis Support",
        description: "Available 24/7 for immediate help",
        resources: &[
            "Vandrevala Foundation: 9999666555",
            "iCall: 9152987821",
            "AASRA: 9820466726",
            "Emergency: 112/108",
        ],
    },
    ResourceCategory {
        kind: ResourceKind::TherapyServices,
        name: "Professional Therapy",
        description: "Licensed mental health professionals",
        resources: &[
            "Practo - Find Psychiatrists & Therapists",
            "Lybrate - Online Mental Health Consultations",
            "YourDOST - Online Counseling",
            "Manastha - Online Therapy",
        ],
    },
    ResourceCategory {
        kind: ResourceKind::DepressionSupport,
        name: "Depression Support",
        description: "Specialized depression resources",
        resources: &[
            "Fortis Stress Helpline: +91-8376804102",
            "NIMHANS Bangalore: 080-46110007",
            "Depression and Bipolar Support Alliance",
        ],
    },
    ResourceCategory {
        kind: ResourceKind::AnxietySupport,
        name: "Anxiety Support",
        description: "Anxiety-specific help and tools",
        resources: &[
            "Anxiety and Depression Association of America",
            "Calm App for anxiety management",
            "Headspace for mindfulness",
        ],
    },
];

/// The full fixed catalog, in declaration order
pub fn catalog() -> &'static [ResourceCategory] {
    CATALOG
}

/// Look up one catalog entry
pub fn category(kind: ResourceKind) -> &'static ResourceCategory {
    match kind {
        ResourceKind::ImmediateCrisis => &CATALOG[0],
        ResourceKind::TherapyServices => &CATALOG[1],
        ResourceKind::DepressionSupport => &CATALOG[2],
        ResourceKind::AnxietySupport => &CATALOG[3],
    }
}

/// Deduplicated, insertion-ordered selection of resource categories
#[derive(Debug, Clone, Default)]
pub struct ResourceBundle {
    selected: Vec<ResourceKind>,
}

impl ResourceBundle {
    /// Add a category; duplicate inserts are ignored
    pub fn insert(&mut self, kind: ResourceKind) {
        if !self.selected.contains(&kind) {
            self.selected.push(kind);
        }
    }

    /// Whether the bundle contains a category
    pub fn contains(&self, kind: ResourceKind) -> bool {
        self.selected.contains(&kind)
    }

    /// Look up a selected category's catalog entry
    pub fn get(&self, kind: ResourceKind) -> Option<&'static ResourceCategory> {
        self.contains(kind).then(|| category(kind))
    }

    /// Number of selected categories
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing was selected
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterate selected catalog entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &'static ResourceCategory> + '_ {
        self.selected.iter().map(|kind| category(*kind))
    }
}

// Serialized as a map keyed by category id, in insertion order.
impl Serialize for ResourceBundle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.selected.len()))?;
        for entry in self.iter() {
            map.serialize_entry(entry.kind.label(), entry)?;
        }
        map.end()
    }
}
