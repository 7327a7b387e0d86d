pub mod get_energy;
pub mod get_energy_details;
pub mod get_inventory;
pub mod text_value;

#[cfg(test)]
mod test {
    use std::fs;
    use std::path::PathBuf;

    fn read_resource(filename: &str) -> String {
        let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        d.push(format!("resources/test/{}", filename));
        fs::read_to_string(d.as_path()).unwrap()
    }

    #[test]
    fn get_inventory() {
        let input = read_resource("inventory.json");
        let output: super::get_inventory::GetInventory = serde_json::from_str(&input).unwrap();
        let inverter = &output.inventory.inverters[0];
        assert_eq!("Inverter 1", inverter.name.clone().unwrap().0);
        assert_eq!("7E123456-9A", inverter.sn.clone().unwrap().0);
        /* numeric fields are kept as text */
        assert_eq!("24", inverter.connected_optimizers.clone().unwrap().0);
        assert!(output.inventory.sensors.is_empty());
        assert_eq!(
            "Production",
            output.inventory.meters[0].device_type.clone().unwrap().0
        );
    }

    #[test]
    fn get_inventory_missing_category() {
        let input = r#"{"Inventory": {"inverters": []}}"#;
        let output: super::get_inventory::GetInventory = serde_json::from_str(input).unwrap();
        assert!(output.inventory.meters.is_empty());
        assert!(output.inventory.batteries.is_empty());
    }

    #[test]
    fn get_energy() {
        let input = read_resource("energy.json");
        let output: super::get_energy::GetEnergy = serde_json::from_str(&input).unwrap();
        assert_eq!("Wh", output.energy.unit);
        assert_eq!("2022-03-01 00:00:00", output.energy.values[0].date);
        assert_eq!(
            "21345.0",
            output.energy.values[0].value.as_ref().unwrap().to_string()
        );
        assert_eq!(None, output.energy.values[1].value);
    }

    #[test]
    fn get_energy_details() {
        let input = read_resource("energyDetails.json");
        let output: super::get_energy_details::GetEnergyDetails =
            serde_json::from_str(&input).unwrap();
        assert_eq!(2, output.energy_details.meters.len());
        assert_eq!("Production", output.energy_details.meters[0].meter_type);
        /* a missing `value` key reads as absent */
        assert_eq!(None, output.energy_details.meters[1].values[1].value);
    }

    #[test]
    #[should_panic]
    fn get_energy_invalid_json() {
        let input = read_resource("invalid_json.json");
        let _output: super::get_energy::GetEnergy = serde_json::from_str(&input).unwrap();
    }
}
