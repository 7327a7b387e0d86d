pub mod endpoint;
pub mod error;
pub mod response;

use crate::model;
pub use error::Error;
use http::StatusCode;
use reqwest::{Request, Url};
use response::get_energy::{self, GetEnergy};
use response::get_energy_details::GetEnergyDetails;
use response::get_inventory::{self, GetInventory};
use serde::de::DeserializeOwned;

const API_KEY: &str = "api_key";

pub fn api(api_url: String, site_id: String, api_key: String) -> Result<model::Api, Error> {
    let client = reqwest::ClientBuilder::new()
        .build()
        .or(Err(Error::InternalError))?;

    Ok(model::Api {
        api_url: api_url.trim_end_matches('/').to_owned(),
        site_id,
        api_key,
        client,
    })
}

/// Request URL with the API key masked, for logging.
fn redacted(url: &Url) -> String {
    let query = url
        .query_pairs()
        .map(|(k, v)| {
            if k == API_KEY {
                format!("{}=***", k)
            } else {
                format!("{}={}", k, v)
            }
        })
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", url.path(), query)
}

/// Map HTTP status >= 400 to `Error::ApiError`, carry the body forward otherwise.
fn check_response(status: StatusCode, body: String) -> Result<String, Error> {
    if status.as_u16() >= 400 {
        Err(Error::ApiError { status, body })
    } else {
        Ok(body)
    }
}

/// Build a GET for `endpoint` of the configured site. `query` is sent in order, followed by the
/// API key.
fn get_request(
    api: &model::Api,
    endpoint: &endpoint::Endpoint,
    query: &[(&str, &str)],
) -> Result<Request, Error> {
    let url = format!(
        "{}{}",
        api.api_url,
        endpoint::site_path(&api.site_id, endpoint)
    );

    api.client
        .get(url)
        .query(query)
        .query(&[(API_KEY, api.api_key.as_str())])
        .build()
        .map_err(|e| Error::RequestError(e.to_string()))
}

async fn execute<T: DeserializeOwned>(api: &model::Api, request: Request) -> Result<T, Error> {
    log::debug!("GET {}", redacted(request.url()));

    let response = api
        .client
        .execute(request)
        .await
        .map_err(|e| Error::RequestError(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::RequestError(format!("Error reading API response: {}", e)))?;

    log::trace!("status: {}, response_text: {}", status, body);

    let body = check_response(status, body)?;
    serde_json::from_str(&body).map_err(|e| Error::InvalidResponse(e.to_string(), body))
}

pub fn inventory_request(api: &model::Api) -> Result<Request, Error> {
    get_request(api, endpoint::INVENTORY, &[])
}

pub fn energy_request(api: &model::Api, range: &model::DateRange) -> Result<Request, Error> {
    get_request(
        api,
        endpoint::ENERGY,
        &[
            ("timeUnit", endpoint::TIME_UNIT),
            ("endDate", range.end.as_str()),
            ("startDate", range.start.as_str()),
        ],
    )
}

pub fn energy_details_request(
    api: &model::Api,
    range: &model::DateRange,
) -> Result<Request, Error> {
    let end_time = format!("{} {}", range.end, endpoint::END_OF_DAY);
    let start_time = format!("{} {}", range.start, endpoint::START_OF_DAY);

    get_request(
        api,
        endpoint::ENERGY_DETAILS,
        &[
            ("timeUnit", endpoint::TIME_UNIT),
            ("endTime", end_time.as_str()),
            ("startTime", start_time.as_str()),
        ],
    )
}

fn inventory_items(items: Vec<get_inventory::Item>) -> Vec<model::InventoryItem> {
    items
        .into_iter()
        .map(|item| model::InventoryItem {
            name: item.name.map(String::from),
            id: item.id.map(String::from),
            manufacturer: item.manufacturer.map(String::from),
            model: item.model.map(String::from),
            serial_number: item.sn.map(String::from),
            firmware_version: item.firmware_version.map(String::from),
            nameplate_capacity: item.nameplate_capacity.map(String::from),
            connected_optimizers: item.connected_optimizers.map(String::from),
            connected_to: item.connected_to.map(String::from),
            connected_solaredge_device_sn: item.connected_solaredge_device_sn.map(String::from),
            connected_inverter_sn: item.connected_inverter_sn.map(String::from),
            device_type: item.device_type.map(String::from),
            form: item.form.map(String::from),
            category: item.category.map(String::from),
        })
        .collect()
}

fn energy_points(values: Vec<get_energy::Value>) -> Vec<model::EnergyPoint> {
    values
        .into_iter()
        .map(|v| model::EnergyPoint {
            date: v.date,
            value: v.value,
        })
        .collect()
}

/// Read the equipment inventory of the configured site.
pub async fn inventory(api: &model::Api) -> Result<model::Inventory, Error> {
    let response: GetInventory = execute(api, inventory_request(api)?).await?;
    let data = response.inventory;

    Ok(model::Inventory {
        meters: inventory_items(data.meters),
        sensors: inventory_items(data.sensors),
        gateways: inventory_items(data.gateways),
        batteries: inventory_items(data.batteries),
        inverters: inventory_items(data.inverters),
    })
}

/// Read daily site energy production over `range`.
pub async fn energy(api: &model::Api, range: &model::DateRange) -> Result<model::Energy, Error> {
    let response: GetEnergy = execute(api, energy_request(api, range)?).await?;

    Ok(model::Energy {
        unit: response.energy.unit,
        values: energy_points(response.energy.values),
    })
}

/// Read daily energy over `range`, broken down per meter type.
pub async fn energy_details(
    api: &model::Api,
    range: &model::DateRange,
) -> Result<model::EnergyDetails, Error> {
    let response: GetEnergyDetails = execute(api, energy_details_request(api, range)?).await?;
    let details = response.energy_details;

    Ok(model::EnergyDetails {
        unit: details.unit,
        meters: details
            .meters
            .into_iter()
            .map(|meter| model::MeterSeries {
                meter_type: meter.meter_type,
                values: energy_points(meter.values),
            })
            .collect(),
    })
}
