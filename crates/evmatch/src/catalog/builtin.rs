//! Static vehicle catalog, 2024 model year spec-sheet data.

use super::domain::{BodyType, Powertrain, VehicleRecord};

/// The built-in catalog. Order is stable and meaningful: the orchestrator
/// breaks score ties by catalog position.
pub(crate) fn vehicles() -> Vec<VehicleRecord> {
    vec![
        VehicleRecord {
            id: "tesla_model_3_sr".into(),
            name: "Tesla Model 3 Standard Range".into(),
            brand: "Tesla".into(),
            powertrain: Powertrain::Ev,
            body_type: BodyType::Sedan,
            year: 2024,
            base_price: 40_240.0,
            range_km: 438.0,
            battery_kwh: 60.0,
            dc_charging_kw: 170.0,
            kwh_per_100km: 13.7,
            fuel_l_per_100km: None,
            combined_range_km: None,
            zero_to_100_s: 6.1,
            top_speed_kmh: 201.0,
            horsepower: 271,
            torque_nm: 420,
            cargo_liters: 561.0,
            curb_weight_kg: 1752,
            seats: 5,
            awd: false,
            towing_capacity_kg: 0,
            safety_rating: 5.0,
            reliability_rating: 3.5,
            autopilot: true,
            ota_updates: true,
            heat_pump: true,
            v2l: false,
            v2h: false,
            frunk_liters: 88.0,
            made_in_north_america: true,
            battery_sourcing_compliant: true,
        },
        VehicleRecord {
            id: "tesla_model_3_lr".into(),
            name: "Tesla Model 3 Long Range AWD".into(),
            brand: "Tesla".into(),
            powertrain: Powertrain::Ev,
            body_type: BodyType::Sedan,
            year: 2024,
            base_price: 47_240.0,
            range_km: 629.0,
            battery_kwh: 82.0,
            dc_charging_kw: 250.0,
            kwh_per_100km: 14.1,
            fuel_l_per_100km: None,
            combined_range_km: None,
            zero_to_100_s: 4.4,
            top_speed_kmh: 201.0,
            horsepower: 366,
            torque_nm: 493,
            cargo_liters: 561.0,
            curb_weight_kg: 1830,
            seats: 5,
            awd: true,
            towing_capacity_kg: 0,
            safety_rating: 5.0,
            reliability_rating: 3.5,
            autopilot: true,
            ota_updates: true,
            heat_pump: true,
            v2l: false,
            v2h: false,
            frunk_liters: 88.0,
            made_in_north_america: true,
            battery_sourcing_compliant: true,
        },
        VehicleRecord {
            id: "tesla_model_y_lr".into(),
            name: "Tesla Model Y Long Range AWD".into(),
            brand: "Tesla".into(),
            powertrain: Powertrain::Ev,
            body_type: BodyType::Suv,
            year: 2024,
            base_price: 48_490.0,
            range_km: 533.0,
            battery_kwh: 82.0,
            dc_charging_kw: 250.0,
            kwh_per_100km: 15.4,
            fuel_l_per_100km: None,
            combined_range_km: None,
            zero_to_100_s: 5.0,
            top_speed_kmh: 217.0,
            horsepower: 384,
            torque_nm: 493,
            cargo_liters: 854.0,
            curb_weight_kg: 1979,
            seats: 5,
            awd: true,
            towing_capacity_kg: 1588,
            safety_rating: 5.0,
            reliability_rating: 3.5,
            autopilot: true,
            ota_updates: true,
            heat_pump: true,
            v2l: false,
            v2h: false,
            frunk_liters: 117.0,
            made_in_north_america: true,
            battery_sourcing_compliant: true,
        },
        VehicleRecord {
            id: "hyundai_ioniq_5_sr".into(),
            name: "Hyundai Ioniq 5 Standard Range".into(),
            brand: "Hyundai".into(),
            powertrain: Powertrain::Ev,
            body_type: BodyType::Crossover,
            year: 2024,
            base_price: 41_450.0,
            range_km: 354.0,
            battery_kwh: 58.0,
            dc_charging_kw: 175.0,
            kwh_per_100km: 16.4,
            fuel_l_per_100km: None,
            combined_range_km: None,
            zero_to_100_s: 8.5,
            top_speed_kmh: 185.0,
            horsepower: 168,
            torque_nm: 350,
            cargo_liters: 527.0,
            curb_weight_kg: 1800,
            seats: 5,
            awd: false,
            towing_capacity_kg: 0,
            safety_rating: 5.0,
            reliability_rating: 4.0,
            autopilot: false,
            ota_updates: true,
            heat_pump: true,
            v2l: true,
            v2h: false,
            frunk_liters: 57.0,
            made_in_north_america: false,
            battery_sourcing_compliant: false,
        },
        VehicleRecord {
            id: "hyundai_ioniq_6_lr".into(),
            name: "Hyundai Ioniq 6 Long Range".into(),
            brand: "Hyundai".into(),
            powertrain: Powertrain::Ev,
            body_type: BodyType::Sedan,
            year: 2024,
            base_price: 45_500.0,
            range_km: 614.0,
            battery_kwh: 77.4,
            dc_charging_kw: 233.0,
            kwh_per_100km: 13.9,
            fuel_l_per_100km: None,
            combined_range_km: None,
            zero_to_100_s: 7.4,
            top_speed_kmh: 185.0,
            horsepower: 225,
            torque_nm: 350,
            cargo_liters: 401.0,
            curb_weight_kg: 1885,
            seats: 5,
            awd: false,
            towing_capacity_kg: 0,
            safety_rating: 5.0,
            reliability_rating: 4.0,
            autopilot: false,
            ota_updates: true,
            heat_pump: true,
            v2l: true,
            v2h: false,
            frunk_liters: 0.0,
            made_in_north_america: false,
            battery_sourcing_compliant: false,
        },
        VehicleRecord {
            id: "hyundai_kona_ev".into(),
            name: "Hyundai Kona Electric".into(),
            brand: "Hyundai".into(),
            powertrain: Powertrain::Ev,
            body_type: BodyType::Crossover,
            year: 2024,
            base_price: 33_550.0,
            range_km: 418.0,
            battery_kwh: 64.8,
            dc_charging_kw: 102.0,
            kwh_per_100km: 15.5,
            fuel_l_per_100km: None,
            combined_range_km: None,
            zero_to_100_s: 7.8,
            top_speed_kmh: 167.0,
            horsepower: 201,
            torque_nm: 255,
            cargo_liters: 466.0,
            curb_weight_kg: 1715,
            seats: 5,
            awd: false,
            towing_capacity_kg: 0,
            safety_rating: 5.0,
            reliability_rating: 4.2,
            autopilot: false,
            ota_updates: false,
            heat_pump: true,
            v2l: true,
            v2h: false,
            frunk_liters: 0.0,
            made_in_north_america: false,
            battery_sourcing_compliant: false,
        },
        VehicleRecord {
            id: "kia_ev6_lr".into(),
            name: "Kia EV6 Long Range AWD".into(),
            brand: "Kia".into(),
            powertrain: Powertrain::Ev,
            body_type: BodyType::Crossover,
            year: 2024,
            base_price: 54_900.0,
            range_km: 499.0,
            battery_kwh: 77.4,
            dc_charging_kw: 233.0,
            kwh_per_100km: 15.5,
            fuel_l_per_100km: None,
            combined_range_km: None,
            zero_to_100_s: 5.2,
            top_speed_kmh: 188.0,
            horsepower: 320,
            torque_nm: 605,
            cargo_liters: 490.0,
            curb_weight_kg: 2090,
            seats: 5,
            awd: true,
            towing_capacity_kg: 1600,
            safety_rating: 5.0,
            reliability_rating: 4.0,
            autopilot: false,
            ota_updates: true,
            heat_pump: true,
            v2l: true,
            v2h: false,
            frunk_liters: 52.0,
            made_in_north_america: false,
            battery_sourcing_compliant: false,
        },
        VehicleRecord {
            id: "ford_mache_select".into(),
            name: "Ford Mustang Mach-E Select".into(),
            brand: "Ford".into(),
            powertrain: Powertrain::Ev,
            body_type: BodyType::Suv,
            year: 2024,
            base_price: 42_995.0,
            range_km: 402.0,
            battery_kwh: 72.6,
            dc_charging_kw: 115.0,
            kwh_per_100km: 18.0,
            fuel_l_per_100km: None,
            combined_range_km: None,
            zero_to_100_s: 6.3,
            top_speed_kmh: 180.0,
            horsepower: 266,
            torque_nm: 430,
            cargo_liters: 822.0,
            curb_weight_kg: 1969,
            seats: 5,
            awd: false,
            towing_capacity_kg: 0,
            safety_rating: 5.0,
            reliability_rating: 3.5,
            autopilot: false,
            ota_updates: true,
            heat_pump: false,
            v2l: false,
            v2h: false,
            frunk_liters: 136.0,
            made_in_north_america: true,
            battery_sourcing_compliant: true,
        },
        VehicleRecord {
            id: "ford_f150_lightning_er".into(),
            name: "Ford F-150 Lightning Extended Range".into(),
            brand: "Ford".into(),
            powertrain: Powertrain::Ev,
            body_type: BodyType::Truck,
            year: 2024,
            base_price: 59_995.0,
            range_km: 515.0,
            battery_kwh: 131.0,
            dc_charging_kw: 150.0,
            kwh_per_100km: 25.4,
            fuel_l_per_100km: None,
            combined_range_km: None,
            zero_to_100_s: 4.5,
            top_speed_kmh: 180.0,
            horsepower: 580,
            torque_nm: 1050,
            cargo_liters: 1495.0,
            curb_weight_kg: 3130,
            seats: 5,
            awd: true,
            towing_capacity_kg: 4536,
            safety_rating: 5.0,
            reliability_rating: 3.5,
            autopilot: false,
            ota_updates: true,
            heat_pump: false,
            v2l: true,
            v2h: true,
            frunk_liters: 400.0,
            made_in_north_america: true,
            battery_sourcing_compliant: true,
        },
        VehicleRecord {
            id: "chevy_bolt_ev".into(),
            name: "Chevrolet Bolt EV".into(),
            brand: "Chevrolet".into(),
            powertrain: Powertrain::Ev,
            body_type: BodyType::Hatchback,
            year: 2024,
            base_price: 27_495.0,
            range_km: 423.0,
            battery_kwh: 65.0,
            dc_charging_kw: 55.0,
            kwh_per_100km: 15.4,
            fuel_l_per_100km: None,
            combined_range_km: None,
            zero_to_100_s: 7.0,
            top_speed_kmh: 150.0,
            horsepower: 200,
            torque_nm: 360,
            cargo_liters: 462.0,
            curb_weight_kg: 1616,
            seats: 5,
            awd: false,
            towing_capacity_kg: 0,
            safety_rating: 5.0,
            reliability_rating: 4.0,
            autopilot: false,
            ota_updates: false,
            heat_pump: false,
            v2l: false,
            v2h: false,
            frunk_liters: 0.0,
            made_in_north_america: true,
            battery_sourcing_compliant: false,
        },
        VehicleRecord {
            id: "chevy_equinox_ev".into(),
            name: "Chevrolet Equinox EV".into(),
            brand: "Chevrolet".into(),
            powertrain: Powertrain::Ev,
            body_type: BodyType::Suv,
            year: 2024,
            base_price: 34_995.0,
            range_km: 515.0,
            battery_kwh: 85.0,
            dc_charging_kw: 150.0,
            kwh_per_100km: 16.5,
            fuel_l_per_100km: None,
            combined_range_km: None,
            zero_to_100_s: 7.0,
            top_speed_kmh: 180.0,
            horsepower: 213,
            torque_nm: 320,
            cargo_liters: 863.0,
            curb_weight_kg: 2086,
            seats: 5,
            awd: false,
            towing_capacity_kg: 0,
            safety_rating: 5.0,
            reliability_rating: 3.8,
            autopilot: true,
            ota_updates: true,
            heat_pump: false,
            v2l: false,
            v2h: false,
            frunk_liters: 0.0,
            made_in_north_america: true,
            battery_sourcing_compliant: true,
        },
        VehicleRecord {
            id: "vw_id4_standard".into(),
            name: "Volkswagen ID.4 Standard".into(),
            brand: "Volkswagen".into(),
            powertrain: Powertrain::Ev,
            body_type: BodyType::Suv,
            year: 2024,
            base_price: 38_995.0,
            range_km: 338.0,
            battery_kwh: 62.0,
            dc_charging_kw: 135.0,
            kwh_per_100km: 18.3,
            fuel_l_per_100km: None,
            combined_range_km: None,
            zero_to_100_s: 8.5,
            top_speed_kmh: 160.0,
            horsepower: 201,
            torque_nm: 310,
            cargo_liters: 543.0,
            curb_weight_kg: 2058,
            seats: 5,
            awd: false,
            towing_capacity_kg: 0,
            safety_rating: 5.0,
            reliability_rating: 3.5,
            autopilot: false,
            ota_updates: true,
            heat_pump: true,
            v2l: false,
            v2h: false,
            frunk_liters: 0.0,
            made_in_north_america: true,
            battery_sourcing_compliant: true,
        },
        VehicleRecord {
            id: "bmw_i4_edrive35".into(),
            name: "BMW i4 eDrive35".into(),
            brand: "BMW".into(),
            powertrain: Powertrain::Ev,
            body_type: BodyType::Sedan,
            year: 2024,
            base_price: 52_200.0,
            range_km: 435.0,
            battery_kwh: 66.0,
            dc_charging_kw: 180.0,
            kwh_per_100km: 15.2,
            fuel_l_per_100km: None,
            combined_range_km: None,
            zero_to_100_s: 5.8,
            top_speed_kmh: 190.0,
            horsepower: 281,
            torque_nm: 400,
            cargo_liters: 470.0,
            curb_weight_kg: 2050,
            seats: 5,
            awd: false,
            towing_capacity_kg: 0,
            safety_rating: 5.0,
            reliability_rating: 3.5,
            autopilot: false,
            ota_updates: true,
            heat_pump: false,
            v2l: false,
            v2h: false,
            frunk_liters: 0.0,
            made_in_north_america: false,
            battery_sourcing_compliant: false,
        },
        VehicleRecord {
            id: "polestar_2".into(),
            name: "Polestar 2 Long Range".into(),
            brand: "Polestar".into(),
            powertrain: Powertrain::Ev,
            body_type: BodyType::Sedan,
            year: 2024,
            base_price: 51_000.0,
            range_km: 551.0,
            battery_kwh: 82.0,
            dc_charging_kw: 205.0,
            kwh_per_100km: 16.8,
            fuel_l_per_100km: None,
            combined_range_km: None,
            zero_to_100_s: 7.4,
            top_speed_kmh: 160.0,
            horsepower: 231,
            torque_nm: 330,
            cargo_liters: 405.0,
            curb_weight_kg: 1994,
            seats: 5,
            awd: false,
            towing_capacity_kg: 1500,
            safety_rating: 5.0,
            reliability_rating: 4.3,
            autopilot: false,
            ota_updates: false,
            heat_pump: false,
            v2l: false,
            v2h: false,
            frunk_liters: 0.0,
            made_in_north_america: false,
            battery_sourcing_compliant: false,
        },
        VehicleRecord {
            id: "mercedes_eqs_450".into(),
            name: "Mercedes-Benz EQS 450+".into(),
            brand: "Mercedes-Benz".into(),
            powertrain: Powertrain::Ev,
            body_type: BodyType::Sedan,
            year: 2024,
            base_price: 104_400.0,
            range_km: 560.0,
            battery_kwh: 108.4,
            dc_charging_kw: 200.0,
            kwh_per_100km: 19.4,
            fuel_l_per_100km: None,
            combined_range_km: None,
            zero_to_100_s: 6.2,
            top_speed_kmh: 210.0,
            horsepower: 329,
            torque_nm: 565,
            cargo_liters: 610.0,
            curb_weight_kg: 2480,
            seats: 5,
            awd: false,
            towing_capacity_kg: 0,
            safety_rating: 5.0,
            reliability_rating: 3.8,
            autopilot: false,
            ota_updates: true,
            heat_pump: true,
            v2l: false,
            v2h: false,
            frunk_liters: 0.0,
            made_in_north_america: false,
            battery_sourcing_compliant: false,
        },
        VehicleRecord {
            id: "nissan_leaf_s".into(),
            name: "Nissan Leaf S".into(),
            brand: "Nissan".into(),
            powertrain: Powertrain::Ev,
            body_type: BodyType::Hatchback,
            year: 2024,
            base_price: 28_140.0,
            range_km: 240.0,
            battery_kwh: 40.0,
            dc_charging_kw: 50.0,
            kwh_per_100km: 16.7,
            fuel_l_per_100km: None,
            combined_range_km: None,
            zero_to_100_s: 7.9,
            top_speed_kmh: 144.0,
            horsepower: 147,
            torque_nm: 320,
            cargo_liters: 435.0,
            curb_weight_kg: 1520,
            seats: 5,
            awd: false,
            towing_capacity_kg: 0,
            safety_rating: 5.0,
            reliability_rating: 4.0,
            autopilot: false,
            ota_updates: false,
            heat_pump: false,
            v2l: false,
            v2h: false,
            frunk_liters: 0.0,
            made_in_north_america: true,
            battery_sourcing_compliant: false,
        },
        VehicleRecord {
            id: "toyota_rav4_prime".into(),
            name: "Toyota RAV4 Prime XSE".into(),
            brand: "Toyota".into(),
            powertrain: Powertrain::Phev,
            body_type: BodyType::Suv,
            year: 2024,
            base_price: 48_090.0,
            range_km: 68.0,
            battery_kwh: 18.1,
            dc_charging_kw: 0.0,
            kwh_per_100km: 17.5,
            fuel_l_per_100km: Some(6.0),
            combined_range_km: Some(980.0),
            zero_to_100_s: 5.7,
            top_speed_kmh: 180.0,
            horsepower: 302,
            torque_nm: 227,
            cargo_liters: 949.0,
            curb_weight_kg: 2015,
            seats: 5,
            awd: true,
            towing_capacity_kg: 1134,
            safety_rating: 5.0,
            reliability_rating: 4.5,
            autopilot: false,
            ota_updates: false,
            heat_pump: false,
            v2l: false,
            v2h: false,
            frunk_liters: 0.0,
            made_in_north_america: true,
            battery_sourcing_compliant: true,
        },
        VehicleRecord {
            id: "toyota_prius_prime".into(),
            name: "Toyota Prius Prime".into(),
            brand: "Toyota".into(),
            powertrain: Powertrain::Phev,
            body_type: BodyType::Hatchback,
            year: 2024,
            base_price: 32_675.0,
            range_km: 72.0,
            battery_kwh: 13.6,
            dc_charging_kw: 0.0,
            kwh_per_100km: 16.0,
            fuel_l_per_100km: Some(4.7),
            combined_range_km: Some(870.0),
            zero_to_100_s: 6.6,
            top_speed_kmh: 177.0,
            horsepower: 220,
            torque_nm: 208,
            cargo_liters: 538.0,
            curb_weight_kg: 1570,
            seats: 5,
            awd: true,
            towing_capacity_kg: 0,
            safety_rating: 5.0,
            reliability_rating: 4.8,
            autopilot: false,
            ota_updates: false,
            heat_pump: false,
            v2l: false,
            v2h: false,
            frunk_liters: 0.0,
            made_in_north_america: true,
            battery_sourcing_compliant: true,
        },
        VehicleRecord {
            id: "honda_crv_phev".into(),
            name: "Honda CR-V Plug-in Hybrid".into(),
            brand: "Honda".into(),
            powertrain: Powertrain::Phev,
            body_type: BodyType::Suv,
            year: 2024,
            base_price: 47_195.0,
            range_km: 60.0,
            battery_kwh: 17.7,
            dc_charging_kw: 0.0,
            kwh_per_100km: 18.5,
            fuel_l_per_100km: Some(6.5),
            combined_range_km: Some(595.0),
            zero_to_100_s: 7.5,
            top_speed_kmh: 180.0,
            horsepower: 315,
            torque_nm: 335,
            cargo_liters: 587.0,
            curb_weight_kg: 2013,
            seats: 5,
            awd: true,
            towing_capacity_kg: 0,
            safety_rating: 5.0,
            reliability_rating: 4.5,
            autopilot: false,
            ota_updates: false,
            heat_pump: false,
            v2l: false,
            v2h: false,
            frunk_liters: 0.0,
            made_in_north_america: true,
            battery_sourcing_compliant: true,
        },
        VehicleRecord {
            id: "volvo_xc60_recharge".into(),
            name: "Volvo XC60 Recharge".into(),
            brand: "Volvo".into(),
            powertrain: Powertrain::Phev,
            body_type: BodyType::Suv,
            year: 2024,
            base_price: 57_395.0,
            range_km: 56.0,
            battery_kwh: 18.8,
            dc_charging_kw: 0.0,
            kwh_per_100km: 19.5,
            fuel_l_per_100km: Some(7.5),
            combined_range_km: Some(660.0),
            zero_to_100_s: 4.9,
            top_speed_kmh: 180.0,
            horsepower: 455,
            torque_nm: 709,
            cargo_liters: 468.0,
            curb_weight_kg: 2185,
            seats: 5,
            awd: true,
            towing_capacity_kg: 2100,
            safety_rating: 5.0,
            reliability_rating: 3.8,
            autopilot: false,
            ota_updates: true,
            heat_pump: false,
            v2l: false,
            v2h: false,
            frunk_liters: 0.0,
            made_in_north_america: false,
            battery_sourcing_compliant: false,
        },
        VehicleRecord {
            id: "jeep_wrangler_4xe".into(),
            name: "Jeep Wrangler 4xe".into(),
            brand: "Jeep".into(),
            powertrain: Powertrain::Phev,
            body_type: BodyType::Suv,
            year: 2024,
            base_price: 56_395.0,
            range_km: 35.0,
            battery_kwh: 17.3,
            dc_charging_kw: 0.0,
            kwh_per_100km: 22.0,
            fuel_l_per_100km: Some(10.5),
            combined_range_km: Some(595.0),
            zero_to_100_s: 6.0,
            top_speed_kmh: 177.0,
            horsepower: 375,
            torque_nm: 637,
            cargo_liters: 548.0,
            curb_weight_kg: 2313,
            seats: 5,
            awd: true,
            towing_capacity_kg: 1588,
            safety_rating: 4.0,
            reliability_rating: 3.5,
            autopilot: false,
            ota_updates: false,
            heat_pump: false,
            v2l: false,
            v2h: false,
            frunk_liters: 0.0,
            made_in_north_america: true,
            battery_sourcing_compliant: true,
        },
        VehicleRecord {
            id: "bmw_x5_xdrive50e".into(),
            name: "BMW X5 xDrive50e".into(),
            brand: "BMW".into(),
            powertrain: Powertrain::Phev,
            body_type: BodyType::Suv,
            year: 2024,
            base_price: 73_900.0,
            range_km: 64.0,
            battery_kwh: 25.7,
            dc_charging_kw: 0.0,
            kwh_per_100km: 21.0,
            fuel_l_per_100km: Some(8.5),
            combined_range_km: Some(700.0),
            zero_to_100_s: 4.8,
            top_speed_kmh: 243.0,
            horsepower: 483,
            torque_nm: 700,
            cargo_liters: 500.0,
            curb_weight_kg: 2595,
            seats: 5,
            awd: true,
            towing_capacity_kg: 2700,
            safety_rating: 5.0,
            reliability_rating: 3.5,
            autopilot: false,
            ota_updates: true,
            heat_pump: false,
            v2l: false,
            v2h: false,
            frunk_liters: 0.0,
            made_in_north_america: true,
            battery_sourcing_compliant: false,
        },
    ]
}
