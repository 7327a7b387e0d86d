pub type Endpoint = str;

pub const INVENTORY: &Endpoint = "inventory";
pub const ENERGY: &Endpoint = "energy";
pub const ENERGY_DETAILS: &Endpoint = "energyDetails";

/// Only daily granularity is requested.
pub const TIME_UNIT: &str = "DAY";

/// Bounds of a full day for the `energyDetails` time parameters.
pub const START_OF_DAY: &str = "00:00:00";
pub const END_OF_DAY: &str = "23:59:59";

/// Path of `endpoint` for site `site_id`, relative to the API base URL.
pub fn site_path(site_id: &str, endpoint: &Endpoint) -> String {
    format!("/site/{}/{}", site_id, endpoint)
}
