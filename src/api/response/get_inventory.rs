use super::text_value::TextValue;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: Option<TextValue>,
    pub id: Option<TextValue>,
    pub manufacturer: Option<TextValue>,
    pub model: Option<TextValue>,
    #[serde(rename = "SN")]
    pub sn: Option<TextValue>,
    pub firmware_version: Option<TextValue>,
    pub nameplate_capacity: Option<TextValue>,
    pub connected_optimizers: Option<TextValue>,
    pub connected_to: Option<TextValue>,
    #[serde(rename = "connectedSolaredgeDeviceSN")]
    pub connected_solaredge_device_sn: Option<TextValue>,
    pub connected_inverter_sn: Option<TextValue>,
    #[serde(rename = "type")]
    pub device_type: Option<TextValue>,
    pub form: Option<TextValue>,
    pub category: Option<TextValue>,
}

#[derive(Deserialize)]
pub struct Data {
    #[serde(default)]
    pub meters: Vec<Item>,
    #[serde(default)]
    pub sensors: Vec<Item>,
    #[serde(default)]
    pub gateways: Vec<Item>,
    #[serde(default)]
    pub batteries: Vec<Item>,
    #[serde(default)]
    pub inverters: Vec<Item>,
}

#[derive(Deserialize)]
pub struct GetInventory {
    #[serde(rename = "Inventory")]
    pub inventory: Data,
}
