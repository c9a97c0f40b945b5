use std::io::Read;

use serde::Deserialize;

use super::normalizer::normalize_name;
use super::CatalogImportError;
use crate::catalog::domain::{BodyType, Powertrain, VehicleRecord};

/// One entry of an `evdb_sync.json` export. Everything except the name is
/// optional; `resolve` substitutes the documented defaults so the missing-
/// field policy lives in exactly one place.
#[derive(Debug, Deserialize)]
pub(crate) struct SyncRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    powertrain: Option<Powertrain>,
    #[serde(default)]
    vehicle_type: Option<BodyType>,
    #[serde(default)]
    year: Option<u16>,
    #[serde(default)]
    base_price: Option<f64>,
    #[serde(default)]
    range_km: Option<f64>,
    #[serde(default)]
    battery_kwh: Option<f64>,
    #[serde(default)]
    dc_charging_kw: Option<f64>,
    #[serde(default)]
    kwh_per_100km: Option<f64>,
    #[serde(default)]
    l_per_100km: Option<f64>,
    #[serde(default)]
    combined_range_km: Option<f64>,
    #[serde(default)]
    zero_to_100_kmh: Option<f64>,
    #[serde(default)]
    top_speed_kmh: Option<f64>,
    #[serde(default)]
    horsepower: Option<u32>,
    #[serde(default)]
    torque_nm: Option<u32>,
    #[serde(default)]
    cargo_liters: Option<f64>,
    #[serde(default)]
    curb_weight_kg: Option<u32>,
    #[serde(default)]
    seats: Option<u8>,
    #[serde(default)]
    awd: Option<bool>,
    #[serde(default)]
    towing_capacity_kg: Option<u32>,
    #[serde(default)]
    safety_rating_ncap: Option<f64>,
    #[serde(default)]
    reliability_score: Option<f64>,
    #[serde(default)]
    autopilot_available: Option<bool>,
    #[serde(default)]
    ota_updates: Option<bool>,
    #[serde(default)]
    heat_pump: Option<bool>,
    #[serde(default)]
    v2l_capable: Option<bool>,
    #[serde(default)]
    v2h_capable: Option<bool>,
    #[serde(default)]
    frunk_liters: Option<f64>,
    #[serde(default)]
    made_in_north_america: Option<bool>,
    #[serde(default)]
    battery_sourcing_compliant: Option<bool>,
}

impl SyncRow {
    /// Resolve the row into a full record, or `None` when the name is blank.
    ///
    /// Defaults: consumption 18 kWh/100km, fuel 6 L/100km (PHEV only),
    /// PHEV electric range 50 km, price 40 000, seats 5, cargo 400 L,
    /// safety 5.0, reliability 4.0, acceleration 8.0 s. Flags default off,
    /// which is the conservative (lower-incentive) branch for the origin
    /// and sourcing fields.
    pub(crate) fn resolve(self) -> Option<VehicleRecord> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return None;
        }

        let powertrain = self.powertrain.unwrap_or(Powertrain::Ev);
        let is_phev = powertrain == Powertrain::Phev;
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| slug(&name));

        Some(VehicleRecord {
            id,
            brand: self.brand.unwrap_or_else(|| "Unknown".to_string()),
            powertrain,
            body_type: self.vehicle_type.unwrap_or(BodyType::Sedan),
            year: self.year.unwrap_or(2024),
            base_price: self.base_price.unwrap_or(40_000.0),
            range_km: self
                .range_km
                .unwrap_or(if is_phev { 50.0 } else { 0.0 }),
            battery_kwh: self.battery_kwh.unwrap_or(0.0),
            dc_charging_kw: self.dc_charging_kw.unwrap_or(0.0),
            kwh_per_100km: self.kwh_per_100km.unwrap_or(18.0),
            fuel_l_per_100km: if is_phev {
                Some(self.l_per_100km.unwrap_or(6.0))
            } else {
                None
            },
            combined_range_km: if is_phev { self.combined_range_km } else { None },
            zero_to_100_s: self.zero_to_100_kmh.unwrap_or(8.0),
            top_speed_kmh: self.top_speed_kmh.unwrap_or(160.0),
            horsepower: self.horsepower.unwrap_or(0),
            torque_nm: self.torque_nm.unwrap_or(0),
            cargo_liters: self.cargo_liters.unwrap_or(400.0),
            curb_weight_kg: self.curb_weight_kg.unwrap_or(2000),
            seats: self.seats.unwrap_or(5),
            awd: self.awd.unwrap_or(false),
            towing_capacity_kg: self.towing_capacity_kg.unwrap_or(0),
            safety_rating: self.safety_rating_ncap.unwrap_or(5.0),
            reliability_rating: self.reliability_score.unwrap_or(4.0),
            autopilot: self.autopilot_available.unwrap_or(false),
            ota_updates: self.ota_updates.unwrap_or(false),
            heat_pump: self.heat_pump.unwrap_or(false),
            v2l: self.v2l_capable.unwrap_or(false),
            v2h: self.v2h_capable.unwrap_or(false),
            frunk_liters: self.frunk_liters.unwrap_or(0.0),
            made_in_north_america: self.made_in_north_america.unwrap_or(false),
            battery_sourcing_compliant: self.battery_sourcing_compliant.unwrap_or(false),
            name,
        })
    }
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<SyncRow>, CatalogImportError> {
    let rows: Vec<SyncRow> = serde_json::from_reader(reader)?;
    Ok(rows)
}

fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_sep = true;
    for c in normalize_name(name).chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }
    out.trim_end_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let rows = parse_records("[{\"name\": \"  \"}]".as_bytes()).expect("parses");
        assert_eq!(rows.len(), 1);
        assert!(rows.into_iter().next().and_then(SyncRow::resolve).is_none());
    }

    #[test]
    fn missing_fields_resolve_to_documented_defaults() {
        let rows = parse_records(
            "[{\"name\": \"Example EV\", \"powertrain\": \"EV\"}]".as_bytes(),
        )
        .expect("parses");
        let record = rows
            .into_iter()
            .next()
            .and_then(SyncRow::resolve)
            .expect("resolves");

        assert_eq!(record.id, "example_ev");
        assert_eq!(record.kwh_per_100km, 18.0);
        assert_eq!(record.base_price, 40_000.0);
        assert_eq!(record.seats, 5);
        assert_eq!(record.cargo_liters, 400.0);
        assert_eq!(record.fuel_l_per_100km, None);
        assert!(!record.made_in_north_america);
    }

    #[test]
    fn phev_defaults_include_fuel_and_electric_range() {
        let rows = parse_records(
            "[{\"name\": \"Example PHEV\", \"powertrain\": \"PHEV\"}]".as_bytes(),
        )
        .expect("parses");
        let record = rows
            .into_iter()
            .next()
            .and_then(SyncRow::resolve)
            .expect("resolves");

        assert_eq!(record.range_km, 50.0);
        assert_eq!(record.fuel_l_per_100km, Some(6.0));
    }
}
