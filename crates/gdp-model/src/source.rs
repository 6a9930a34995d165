//! GDP-per-capita sources and the profiles describing their wide layouts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A publisher of wide GDP-per-capita tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// World Development Indicators (World Bank DataBank export).
    #[default]
    Wdi,
    /// Maddison Project Database.
    Maddison,
    /// Penn World Table.
    Pwt,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Wdi, Source::Maddison, Source::Pwt];

    pub fn code(self) -> &'static str {
        match self {
            Self::Wdi => "wdi",
            Self::Maddison => "maddison",
            Self::Pwt => "pwt",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Wdi => "World Development Indicators (constant 2011 international $, PPP)",
            Self::Maddison => "Maddison Project Database",
            Self::Pwt => "Penn World Table",
        }
    }

    pub fn homepage(self) -> &'static str {
        match self {
            Self::Wdi => {
                "https://databank.worldbank.org/source/world-development-indicators"
            }
            Self::Maddison => "https://www.rug.nl/ggdc/historicaldevelopment/maddison/",
            Self::Pwt => "https://www.rug.nl/ggdc/productivity/pwt/",
        }
    }

    /// File name used for the tidy output when no path is given.
    pub fn default_output_name(self) -> &'static str {
        match self {
            Self::Wdi => "WDI_gdp_cap_ppp2011_tidy.csv",
            Self::Maddison => "maddison_gdp_cap_tidy.csv",
            Self::Pwt => "pwt_gdp_cap_tidy.csv",
        }
    }

    /// Whether a builtin loader exists for this source.
    pub fn has_loader(self) -> bool {
        self.profile().is_some()
    }

    /// Builtin profile, if the source's input schema is known.
    pub fn profile(self) -> Option<SourceProfile> {
        match self {
            Self::Wdi => Some(SourceProfile::wdi()),
            Self::Maddison | Self::Pwt => None,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How the bracketed series suffix is removed from year labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum YearLabelMatch {
    /// `[YR` followed by any four characters and `]`.
    #[default]
    Pattern,
    /// Only this exact substring is removed.
    Literal { text: String },
}

/// Layout of one source's wide CSV export.
///
/// Column names are written as they appear in the file; the transform
/// removes spaces from them the same way it does for the header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceProfile {
    pub source: Source,
    /// Metadata lines preceding the header row.
    pub skip_rows: usize,
    pub country_column: String,
    pub code_column: String,
    /// Columns dropped before the reshape; all must be present.
    pub descriptor_columns: Vec<String>,
    pub year_label: YearLabelMatch,
    /// Cell values read as missing GDP figures (compared after trimming).
    pub missing_markers: Vec<String>,
}

impl SourceProfile {
    /// DataBank export of `NY.GDP.PCAP.PP.KD`.
    pub fn wdi() -> Self {
        Self {
            source: Source::Wdi,
            skip_rows: 4,
            country_column: "Country Name".to_string(),
            code_column: "Country Code".to_string(),
            descriptor_columns: vec!["Series Name".to_string(), "Series Code".to_string()],
            year_label: YearLabelMatch::Pattern,
            missing_markers: vec![String::new(), "..".to_string()],
        }
    }

    #[must_use]
    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }

    #[must_use]
    pub fn with_missing_markers(mut self, markers: Vec<String>) -> Self {
        self.missing_markers = markers;
        self
    }

    #[must_use]
    pub fn with_year_label(mut self, year_label: YearLabelMatch) -> Self {
        self.year_label = year_label;
        self
    }

    /// True when `value` (trimmed) is one of the configured missing markers.
    pub fn is_missing_marker(&self, value: &str) -> bool {
        let trimmed = value.trim();
        self.missing_markers
            .iter()
            .any(|marker| marker.trim() == trimmed)
    }
}

impl Default for SourceProfile {
    fn default() -> Self {
        Self::wdi()
    }
}
