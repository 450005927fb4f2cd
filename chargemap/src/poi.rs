//! Charging point records as supplied by the caller.
//!
//! The field layout follows the Open Charge Map JSON shape, so a list of POIs deserializes
//! directly from an API response. The engine only ever reads these records.

use chargemap_types::{GeoLatLng, NewGeoPoint};
use serde::{Deserialize, Serialize};

/// Identifier of a point of interest.
pub type PoiId = u64;

/// A charging point record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Poi {
    /// Unique identifier.
    #[serde(rename = "ID")]
    pub id: PoiId,
    /// Location of the site.
    #[serde(default)]
    pub address_info: Option<AddressInfo>,
    /// Who may use the site.
    #[serde(default)]
    pub usage_type: Option<UsageType>,
    /// Operational status of the site.
    #[serde(default)]
    pub status_type: Option<StatusType>,
    /// Charging connections available at the site.
    #[serde(default)]
    pub connections: Option<Vec<Connection>>,
}

/// Address and location of a POI.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressInfo {
    /// Site title.
    #[serde(default)]
    pub title: Option<String>,
    /// Latitude in degrees.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Access classification of a POI.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UsageType {
    /// Human readable usage, e.g. `"Public"` or `"Private - Restricted Access"`.
    #[serde(default)]
    pub title: Option<String>,
}

/// Operational status of a POI.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusType {
    /// `Some(false)` when the site is known to be out of service.
    #[serde(default)]
    pub is_operational: Option<bool>,
    /// Human readable status.
    #[serde(default)]
    pub title: Option<String>,
}

/// A single charging connection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Connection {
    /// Charging level (1 = slow, 2 = medium, 3 = rapid).
    #[serde(default, rename = "LevelID")]
    pub level_id: Option<u32>,
}

impl Poi {
    /// Position of the POI, or `None` if the address info or either coordinate is missing, or
    /// the coordinates are out of range.
    pub fn position(&self) -> Option<GeoLatLng> {
        let address = self.address_info.as_ref()?;
        match GeoLatLng::try_latlng(address.latitude?, address.longitude?) {
            Ok(position) => Some(position),
            Err(err) => {
                log::trace!("POI {} has an invalid position: {err}", self.id);
                None
            }
        }
    }

    /// Highest charging level among the POI connections, `0` if no level is known.
    pub fn max_level(&self) -> u32 {
        self.connections
            .iter()
            .flatten()
            .filter_map(|c| c.level_id)
            .max()
            .unwrap_or(0)
    }

    /// Returns true if the usage type marks the site as private.
    pub fn is_private(&self) -> bool {
        self.usage_type
            .as_ref()
            .and_then(|u| u.title.as_deref())
            .is_some_and(|title| title.contains("Private"))
    }

    /// Returns true if the status type is present and explicitly says the site is not operational.
    pub fn is_non_operational(&self) -> bool {
        self.status_type
            .as_ref()
            .is_some_and(|s| s.is_operational == Some(false))
    }
}
