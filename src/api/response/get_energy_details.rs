use super::get_energy::Value;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Meter {
    #[serde(rename = "type")]
    pub meter_type: String,
    #[serde(default)]
    pub values: Vec<Value>,
}

#[derive(Deserialize)]
pub struct Data {
    pub unit: String,
    pub meters: Vec<Meter>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEnergyDetails {
    pub energy_details: Data,
}
