//! Canonical configuration schema and override conformance

pub mod conformance;
pub mod types;

pub use conformance::{base_shape, check_conformance, ConformanceIssue, IssueKind, ValueKind};
pub use types::{
    AgencyInfo, AirportConfig, AirportInfo, AppSettings, AuthSettings, DashboardSettings,
    MapSettings, Palette, PaletteColor, ProviderSettings, ServerUrls, Theme,
};
