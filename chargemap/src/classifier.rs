//! Visual classification of POIs.
//!
//! A POI is drawn with an icon chosen by its charging level and by one of three mutually
//! exclusive categories. Private access wins over operational status:
//!
//! | condition                                   | category         |
//! |---------------------------------------------|------------------|
//! | usage type title contains `"Private"`       | `_private`       |
//! | status type present, `IsOperational: false` | `_nonoperational`|
//! | otherwise                                   | `_operational`   |

use serde::{Deserialize, Serialize};

use crate::poi::Poi;

/// Default base path of the marker icons, relative to the asset root.
pub const DEFAULT_ICON_BASE_PATH: &str = "images/icons/map/level";

/// Visual category of a POI marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum MarkerCategory {
    /// Access is restricted.
    Private,
    /// Site is known to be out of service.
    NonOperational,
    /// Anything else.
    Operational,
}

impl MarkerCategory {
    /// Category of the given POI.
    pub fn of(poi: &Poi) -> Self {
        if poi.is_private() {
            Self::Private
        } else if poi.is_non_operational() {
            Self::NonOperational
        } else {
            Self::Operational
        }
    }

    /// Suffix appended to the icon key.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Private => "_private",
            Self::NonOperational => "_nonoperational",
            Self::Operational => "_operational",
        }
    }
}

/// Result of classifying one POI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStyle {
    /// Charging level used in the icon key.
    pub level: u32,
    /// Visual category.
    pub category: MarkerCategory,
    /// Icon path relative to the asset root, e.g. `images/icons/map/level2_operational_icon.png`.
    pub icon_key: String,
    /// Marker title shown on the map.
    pub tooltip: String,
}

/// Maps POI records to marker styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoiClassifier {
    icon_base_path: String,
}

impl Default for PoiClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_ICON_BASE_PATH)
    }
}

impl PoiClassifier {
    /// Creates a classifier producing icon keys under the given base path.
    pub fn new(icon_base_path: impl Into<String>) -> Self {
        Self {
            icon_base_path: icon_base_path.into(),
        }
    }

    /// Classifies the POI using its own connection levels.
    pub fn classify(&self, poi: &Poi) -> MarkerStyle {
        self.classify_with_level(poi, poi.max_level())
    }

    /// Classifies the POI with an externally computed level.
    pub fn classify_with_level(&self, poi: &Poi, level: u32) -> MarkerStyle {
        let category = MarkerCategory::of(poi);
        MarkerStyle {
            level,
            category,
            icon_key: self.icon_key(level, category),
            tooltip: tooltip(poi, level),
        }
    }

    fn icon_key(&self, level: u32, category: MarkerCategory) -> String {
        format!("{}{level}{}_icon.png", self.icon_base_path, category.suffix())
    }
}

/// Builds the marker title: `OCM-{id}: {address title}:` followed by the usage title, the level
/// (when above zero) and the status title, each only when present.
pub fn tooltip(poi: &Poi, level: u32) -> String {
    let title = poi
        .address_info
        .as_ref()
        .and_then(|a| a.title.as_deref())
        .unwrap_or_default();
    let mut tooltip = format!("OCM-{}: {title}:", poi.id);

    if let Some(usage) = &poi.usage_type {
        tooltip.push(' ');
        tooltip.push_str(usage.title.as_deref().unwrap_or_default());
    }
    if level > 0 {
        tooltip.push_str(&format!(" Level {level}"));
    }
    if let Some(status) = &poi.status_type {
        tooltip.push(' ');
        tooltip.push_str(status.title.as_deref().unwrap_or_default());
    }

    tooltip
}
