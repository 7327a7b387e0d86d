use crate::model::{Energy, EnergyDetails, Inventory, InventoryCategory, InventoryItem};
use serde_json::Number;
use std::fmt::{self, Write};

const NOT_AVAILABLE: &str = "N/A";
const DATE_WIDTH: usize = 10;
const VALUE_WIDTH: usize = 13;

/// Energy output mode of the `energy` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyMode {
    /// Site total per day, followed by the period total.
    Simple,
    /// One column per meter type, with per-meter totals.
    Detailed,
}

/// Day part of an API timestamp (`2022-03-01 00:00:00` -> `2022-03-01`).
fn day(date: &str) -> &str {
    date.split(' ').next().unwrap_or(date)
}

/// Running sum of readings. Integers add up to an integer; once a float is added the sum is
/// shown as a float (`21345.0`).
#[derive(Debug, Default, Clone, Copy)]
struct Total {
    sum: f64,
    float: bool,
}

impl Total {
    fn add(&mut self, value: &Number) {
        self.sum += value.as_f64().unwrap_or(0.0);
        self.float |= value.is_f64();
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.float {
            return write!(f, "{}", self.sum as i64);
        }
        match Number::from_f64(self.sum) {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "{}", self.sum),
        }
    }
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

fn write_item<W: Write>(w: &mut W, item: &InventoryItem) -> fmt::Result {
    let name = item
        .name
        .as_deref()
        .or_else(|| item.id.as_deref())
        .unwrap_or("Unknown Name");

    writeln!(w, "- {}", name)?;
    writeln!(w, "    Manufacturer: {}", or_na(&item.manufacturer))?;
    writeln!(w, "    Model: {}", or_na(&item.model))?;
    writeln!(w, "    Serial Number: {}", or_na(&item.serial_number))?;
    writeln!(w, "    Firmware Version: {}", or_na(&item.firmware_version))?;

    if let Some(capacity) = &item.nameplate_capacity {
        writeln!(w, "    Nameplate Capacity: {}", capacity)?;
    }
    if let Some(optimizers) = &item.connected_optimizers {
        writeln!(w, "    Connected Optimizers: {}", optimizers)?;
    }
    if let Some(connected_to) = &item.connected_to {
        let connected_sn = item
            .connected_solaredge_device_sn
            .as_deref()
            .or_else(|| item.connected_inverter_sn.as_deref())
            .unwrap_or("");
        writeln!(w, "    Connected To: {} ({})", connected_to, connected_sn)?;
    }
    if let Some(device_type) = &item.device_type {
        writeln!(w, "    Type: {}", device_type)?;
    }
    if let Some(form) = &item.form {
        writeln!(w, "    Form: {}", form)?;
    }
    if let Some(category) = &item.category {
        writeln!(w, "    Category: {}", category)?;
    }

    Ok(())
}

/// Grouped listing of the site equipment, one section per category.
pub fn inventory<W: Write>(w: &mut W, inventory: &Inventory) -> fmt::Result {
    writeln!(w)?;

    for category in InventoryCategory::ALL.iter() {
        writeln!(w, "{}", category.title())?;

        let items = inventory.items(*category);
        if items.is_empty() {
            writeln!(w, "No {} registered", category.key())?;
        } else {
            for item in items {
                write_item(w, item)?;
            }
        }
        writeln!(w)?;
    }

    Ok(())
}

pub fn energy<W: Write>(w: &mut W, energy: &Energy) -> fmt::Result {
    let unit = &energy.unit;
    let mut total = Total::default();

    for point in &energy.values {
        match &point.value {
            Some(value) => {
                writeln!(w, "{}: {}{}", day(&point.date), value, unit)?;
                total.add(value);
            }
            None => writeln!(w, "{}: No energy reported", day(&point.date))?,
        }
    }

    writeln!(w)?;
    writeln!(w, "Total energy produced over the period: {}{}", total, unit)
}

/// Fixed-width table with one column per meter. Rows are matched across meters by position,
/// not by date.
pub fn energy_details<W: Write>(w: &mut W, details: &EnergyDetails) -> fmt::Result {
    let unit = &details.unit;
    let meters = &details.meters;
    let rows = meters.iter().map(|m| m.values.len()).max().unwrap_or(0);
    let mut totals = vec![Total::default(); meters.len()];

    write!(w, "{:>width$}", "Date", width = DATE_WIDTH)?;
    for meter in meters {
        write!(w, " {:>width$}", meter.meter_type, width = VALUE_WIDTH)?;
    }
    writeln!(w)?;

    for row in 0..rows {
        let date = meters
            .iter()
            .find_map(|m| m.values.get(row))
            .map(|p| day(&p.date))
            .unwrap_or("");
        write!(w, "{:>width$}", date, width = DATE_WIDTH)?;

        for (column, meter) in meters.iter().enumerate() {
            let cell = match meter.values.get(row).and_then(|p| p.value.as_ref()) {
                Some(value) => {
                    totals[column].add(value);
                    format!("{}{}", value, unit)
                }
                None => String::new(),
            };
            write!(w, " {:>width$}", cell, width = VALUE_WIDTH)?;
        }
        writeln!(w)?;
    }

    write!(w, "{:>width$}", "Totals", width = DATE_WIDTH)?;
    for total in totals {
        write!(w, " {:>width$}", format!("{}{}", total, unit), width = VALUE_WIDTH)?;
    }
    writeln!(w)
}
