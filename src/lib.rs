#[macro_use]
extern crate lazy_static;

pub mod api;
pub mod dates;
pub mod model;
pub mod render;
pub mod settings;

pub use api::Error;
use chrono::NaiveDate;
use render::EnergyMode;

/// Build an `Api` handle from loaded settings.
pub fn connect(config: settings::SolarEdgeConfig) -> Result<model::Api, Error> {
    api::api(config.api_url, config.site_id, config.api_key)
}

/// Fetch the site inventory and render it. Nothing is rendered unless the whole response was
/// read successfully.
pub async fn inventory_report(api: &model::Api) -> Result<String, Error> {
    let inventory = api::inventory(api).await?;

    let mut out = String::new();
    render::inventory(&mut out, &inventory).or(Err(Error::FormatError))?;
    Ok(out)
}

/// Resolve the reporting period, fetch energy production in `mode` and render it. Dates are
/// validated before any request is sent.
pub async fn energy_report(
    api: &model::Api,
    start: Option<&str>,
    end: Option<&str>,
    mode: EnergyMode,
    today: NaiveDate,
) -> Result<String, Error> {
    let range = dates::resolve(start, end, today)?;

    let mut out = String::new();
    let rendered = match mode {
        EnergyMode::Simple => {
            let energy = api::energy(api, &range).await?;
            render::energy(&mut out, &energy)
        }
        EnergyMode::Detailed => {
            let details = api::energy_details(api, &range).await?;
            render::energy_details(&mut out, &details)
        }
    };
    rendered.or(Err(Error::FormatError))?;

    Ok(out)
}
