//! CSV export functionality

use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::Load;

/// One flat CSV row per load
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadRow {
    #[serde(rename = "externalTMSLoadID")]
    pub external_tms_load_id: String,
    #[serde(rename = "freightLoadID")]
    pub freight_load_id: String,
    pub status: String,
    pub customer: String,
    pub carrier: String,
    pub pickup_city: String,
    pub pickup_state: String,
    pub pickup_zip: String,
    pub pickup_appointment: String,
    pub delivery_city: String,
    pub delivery_state: String,
    pub delivery_zip: String,
    pub delivery_appointment: String,
    pub total_weight: f64,
    pub po_numbers: String,
}

impl From<&Load> for LoadRow {
    fn from(load: &Load) -> Self {
        let stamp = |t: Option<chrono::DateTime<chrono::Utc>>| {
            t.map(|t| t.to_rfc3339()).unwrap_or_default()
        };

        LoadRow {
            external_tms_load_id: load.external_tms_load_id.clone(),
            freight_load_id: load.freight_load_id.clone(),
            status: load.status.clone(),
            customer: load.customer.name.clone(),
            carrier: load.carrier.name.clone(),
            pickup_city: load.pickup.city.clone(),
            pickup_state: load.pickup.state.clone(),
            pickup_zip: load.pickup.zipcode.clone(),
            pickup_appointment: stamp(load.pickup.appt_time),
            delivery_city: load.consignee.city.clone(),
            delivery_state: load.consignee.state.clone(),
            delivery_zip: load.consignee.zipcode.clone(),
            delivery_appointment: stamp(load.consignee.appt_time),
            total_weight: load.specifications.total_weight,
            po_numbers: load.specifications.po_nums.clone(),
        }
    }
}

/// Export data to CSV file
pub fn export_to_csv<T, P>(data: &[T], path: P) -> Result<usize>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    let mut count = 0;
    for item in data {
        writer
            .serialize(item)
            .map_err(|e| AppError::Export(format!("CSV serialization error: {}", e)))?;
        count += 1;
    }

    writer
        .flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {}", e)))?;

    Ok(count)
}

/// Flatten loads and write them as CSV
pub fn export_loads_to_csv<P: AsRef<Path>>(loads: &[Load], path: P) -> Result<usize> {
    let rows: Vec<LoadRow> = loads.iter().map(LoadRow::from).collect();
    export_to_csv(&rows, path)
}
