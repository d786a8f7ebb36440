//! Region codes for the Eurostat life expectancy dataset.
//!
//! The dataset publishes observations for individual countries alongside
//! statistical aggregates (union totals, economic areas, multi-country
//! blocs). The aggregate codes are a fixed, hand-maintained exclusion set;
//! everything else in the enumeration is a country.

use std::fmt;
use std::str::FromStr;

/// A region code as published in the dataset.
///
/// Variants are declared in the dataset's enumeration order, which is the
/// order [`Region::ALL`] and [`Region::countries`] preserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    At,
    Be,
    Bg,
    Ch,
    Cy,
    Cz,
    Dk,
    Ee,
    El,
    Es,
    Eu27_2020,
    Fi,
    Fr,
    Hr,
    Hu,
    Is,
    It,
    Li,
    Lt,
    Lu,
    Lv,
    Mt,
    Nl,
    No,
    Pl,
    Pt,
    Ro,
    Se,
    Si,
    Sk,
    De,
    DeTot,
    Al,
    Ea18,
    Ea19,
    Efta,
    Ie,
    Me,
    Mk,
    Rs,
    Am,
    Az,
    Ge,
    Tr,
    Ua,
    By,
    Eea30_2007,
    Eea31,
    Eu27_2007,
    Eu28,
    Uk,
    Xk,
    Fx,
    Md,
    Sm,
    Ru,
}

/// Codes representing unions, economic areas, or other multi-country
/// groupings rather than single countries.
const AGGREGATE_CODES: [Region; 9] = [
    Region::Eu27_2020,
    Region::DeTot,
    Region::Ea18,
    Region::Ea19,
    Region::Efta,
    Region::Eea30_2007,
    Region::Eea31,
    Region::Eu27_2007,
    Region::Eu28,
];

impl Region {
    /// Every declared region code, in declaration order.
    pub const ALL: [Region; 56] = [
        Region::At,
        Region::Be,
        Region::Bg,
        Region::Ch,
        Region::Cy,
        Region::Cz,
        Region::Dk,
        Region::Ee,
        Region::El,
        Region::Es,
        Region::Eu27_2020,
        Region::Fi,
        Region::Fr,
        Region::Hr,
        Region::Hu,
        Region::Is,
        Region::It,
        Region::Li,
        Region::Lt,
        Region::Lu,
        Region::Lv,
        Region::Mt,
        Region::Nl,
        Region::No,
        Region::Pl,
        Region::Pt,
        Region::Ro,
        Region::Se,
        Region::Si,
        Region::Sk,
        Region::De,
        Region::DeTot,
        Region::Al,
        Region::Ea18,
        Region::Ea19,
        Region::Efta,
        Region::Ie,
        Region::Me,
        Region::Mk,
        Region::Rs,
        Region::Am,
        Region::Az,
        Region::Ge,
        Region::Tr,
        Region::Ua,
        Region::By,
        Region::Eea30_2007,
        Region::Eea31,
        Region::Eu27_2007,
        Region::Eu28,
        Region::Uk,
        Region::Xk,
        Region::Fx,
        Region::Md,
        Region::Sm,
        Region::Ru,
    ];

    /// Returns the code as published in the dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::At => "AT",
            Region::Be => "BE",
            Region::Bg => "BG",
            Region::Ch => "CH",
            Region::Cy => "CY",
            Region::Cz => "CZ",
            Region::Dk => "DK",
            Region::Ee => "EE",
            Region::El => "EL",
            Region::Es => "ES",
            Region::Eu27_2020 => "EU27_2020",
            Region::Fi => "FI",
            Region::Fr => "FR",
            Region::Hr => "HR",
            Region::Hu => "HU",
            Region::Is => "IS",
            Region::It => "IT",
            Region::Li => "LI",
            Region::Lt => "LT",
            Region::Lu => "LU",
            Region::Lv => "LV",
            Region::Mt => "MT",
            Region::Nl => "NL",
            Region::No => "NO",
            Region::Pl => "PL",
            Region::Pt => "PT",
            Region::Ro => "RO",
            Region::Se => "SE",
            Region::Si => "SI",
            Region::Sk => "SK",
            Region::De => "DE",
            Region::DeTot => "DE_TOT",
            Region::Al => "AL",
            Region::Ea18 => "EA18",
            Region::Ea19 => "EA19",
            Region::Efta => "EFTA",
            Region::Ie => "IE",
            Region::Me => "ME",
            Region::Mk => "MK",
            Region::Rs => "RS",
            Region::Am => "AM",
            Region::Az => "AZ",
            Region::Ge => "GE",
            Region::Tr => "TR",
            Region::Ua => "UA",
            Region::By => "BY",
            Region::Eea30_2007 => "EEA30_2007",
            Region::Eea31 => "EEA31",
            Region::Eu27_2007 => "EU27_2007",
            Region::Eu28 => "EU28",
            Region::Uk => "UK",
            Region::Xk => "XK",
            Region::Fx => "FX",
            Region::Md => "MD",
            Region::Sm => "SM",
            Region::Ru => "RU",
        }
    }

    /// Returns true if this code names a multi-country grouping rather
    /// than a single country.
    pub fn is_aggregate(self) -> bool {
        AGGREGATE_CODES.contains(&self)
    }

    /// All country codes: the full enumeration minus the aggregate set,
    /// in declaration order.
    pub fn countries() -> Vec<Region> {
        Region::ALL
            .iter()
            .copied()
            .filter(|region| !region.is_aggregate())
            .collect()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    /// Parse a region code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Region::ALL
            .iter()
            .copied()
            .find(|region| region.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown region code: {s}"))
    }
}
