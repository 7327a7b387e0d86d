/// Energy reading as received, keeping the integer or float form of the JSON number.
type KWh = serde_json::Number;

#[derive(Debug, Clone)]
pub struct Api {
    pub api_url: String,
    pub site_id: String,
    pub api_key: String,
    pub client: reqwest::Client,
}

/// Resolved reporting period, both ends formatted `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct InventoryItem {
    pub name: Option<String>,
    pub id: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub firmware_version: Option<String>,
    pub nameplate_capacity: Option<String>,
    pub connected_optimizers: Option<String>,
    pub connected_to: Option<String>,
    pub connected_solaredge_device_sn: Option<String>,
    pub connected_inverter_sn: Option<String>,
    pub device_type: Option<String>,
    pub form: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryCategory {
    Meters,
    Sensors,
    Gateways,
    Batteries,
    Inverters,
}

impl InventoryCategory {
    /// Rendering order.
    pub const ALL: [InventoryCategory; 5] = [
        InventoryCategory::Meters,
        InventoryCategory::Sensors,
        InventoryCategory::Gateways,
        InventoryCategory::Batteries,
        InventoryCategory::Inverters,
    ];

    pub fn title(self) -> &'static str {
        match self {
            InventoryCategory::Meters => "Meters",
            InventoryCategory::Sensors => "Sensors",
            InventoryCategory::Gateways => "Gateways",
            InventoryCategory::Batteries => "Batteries",
            InventoryCategory::Inverters => "Inverters",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            InventoryCategory::Meters => "meters",
            InventoryCategory::Sensors => "sensors",
            InventoryCategory::Gateways => "gateways",
            InventoryCategory::Batteries => "batteries",
            InventoryCategory::Inverters => "inverters",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Inventory {
    pub meters: Vec<InventoryItem>,
    pub sensors: Vec<InventoryItem>,
    pub gateways: Vec<InventoryItem>,
    pub batteries: Vec<InventoryItem>,
    pub inverters: Vec<InventoryItem>,
}

impl Inventory {
    pub fn items(&self, category: InventoryCategory) -> &[InventoryItem] {
        match category {
            InventoryCategory::Meters => &self.meters,
            InventoryCategory::Sensors => &self.sensors,
            InventoryCategory::Gateways => &self.gateways,
            InventoryCategory::Batteries => &self.batteries,
            InventoryCategory::Inverters => &self.inverters,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnergyPoint {
    pub date: String,
    pub value: Option<KWh>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Energy {
    pub unit: String,
    pub values: Vec<EnergyPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeterSeries {
    pub meter_type: String,
    pub values: Vec<EnergyPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnergyDetails {
    pub unit: String,
    pub meters: Vec<MeterSeries>,
}
