//! Method identity and hormone classification

use std::fmt;

/// Unique identifier for a contraceptive method
///
/// This is a closed enumeration: every method the system knows about is a
/// variant, declared in catalog order. The derived `Ord` therefore matches
/// catalog order, which keeps candidate sets and display partitions stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MethodId {
    /// Combined oral contraceptive pill
    CombinedPill,

    /// Progestin-only pill
    ProgestinPill,

    /// Transdermal patch
    Patch,

    /// Monthly vaginal ring (NuvaRing)
    Nuvaring,

    /// Year-long vaginal ring (Annovera)
    Annovera,

    /// Injectable (Depo-subQ Provera)
    Shot,

    /// Vaginal diaphragm
    Diaphragm,
}

impl MethodId {
    /// All method ids, in catalog order
    pub const ALL: [MethodId; 7] = [
        MethodId::CombinedPill,
        MethodId::ProgestinPill,
        MethodId::Patch,
        MethodId::Nuvaring,
        MethodId::Annovera,
        MethodId::Shot,
        MethodId::Diaphragm,
    ];

    /// Get the wire id as a string
    ///
    /// These are the keys external answer snapshots and JSON output use.
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodId::CombinedPill => "combinedPill",
            MethodId::ProgestinPill => "progestinPill",
            MethodId::Patch => "patch",
            MethodId::Nuvaring => "nuvaring",
            MethodId::Annovera => "annovera",
            MethodId::Shot => "shot",
            MethodId::Diaphragm => "diaphragm",
        }
    }

    /// Parse a method id from its wire string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "combinedPill" => Some(MethodId::CombinedPill),
            "progestinPill" => Some(MethodId::ProgestinPill),
            "patch" => Some(MethodId::Patch),
            "nuvaring" => Some(MethodId::Nuvaring),
            "annovera" => Some(MethodId::Annovera),
            "shot" => Some(MethodId::Shot),
            "diaphragm" => Some(MethodId::Diaphragm),
            _ => None,
        }
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MethodId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid method id: {}", s))
    }
}

/// Hormonal composition of a method
///
/// The eligibility rules only ever ask two things of a profile: does it
/// contain estrogen, and does it contain any hormone at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HormoneProfile {
    /// Estrogen only
    Estrogen,

    /// Progestin only
    Progestin,

    /// No hormonal content
    NonHormonal,

    /// Combined estrogen and progestin
    EstrogenProgestin,
}

impl HormoneProfile {
    /// Get the display name of the profile
    pub fn as_str(&self) -> &'static str {
        match self {
            HormoneProfile::Estrogen => "Estrogen",
            HormoneProfile::Progestin => "Progestin",
            HormoneProfile::NonHormonal => "Non Hormonal",
            HormoneProfile::EstrogenProgestin => "Estrogen + Progestin",
        }
    }

    /// Whether the profile includes estrogen
    pub fn contains_estrogen(&self) -> bool {
        matches!(
            self,
            HormoneProfile::Estrogen | HormoneProfile::EstrogenProgestin
        )
    }

    /// Whether the profile includes any hormone
    pub fn is_hormonal(&self) -> bool {
        !matches!(self, HormoneProfile::NonHormonal)
    }
}

impl fmt::Display for HormoneProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
