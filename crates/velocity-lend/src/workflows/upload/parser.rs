use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One inventory line from a customer export.
#[derive(Debug, Clone, PartialEq)]
pub struct SkuRow {
    pub erp_code: String,
    pub warehouse_code: String,
    pub storefront_slug: String,
    pub product_name: String,
    pub monthly_units: f64,
    pub unit_cost: f64,
    pub on_hand_units: f64,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<SkuRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<UploadRow>() {
        let row = record?;
        rows.push(SkuRow {
            erp_code: row.sku_code,
            warehouse_code: row.wms_code.unwrap_or_default(),
            storefront_slug: row.storefront_slug.unwrap_or_default(),
            product_name: row.product_name,
            monthly_units: row.monthly_units.unwrap_or(0.0),
            unit_cost: row.unit_cost.unwrap_or(0.0),
            on_hand_units: row.on_hand_units.unwrap_or(0.0),
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct UploadRow {
    #[serde(rename = "SKU Code")]
    sku_code: String,
    #[serde(rename = "WMS Code", default, deserialize_with = "empty_string_as_none")]
    wms_code: Option<String>,
    #[serde(
        rename = "Storefront Slug",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    storefront_slug: Option<String>,
    #[serde(rename = "Product Name")]
    product_name: String,
    #[serde(
        rename = "Monthly Units",
        default,
        deserialize_with = "lenient_number"
    )]
    monthly_units: Option<f64>,
    #[serde(rename = "Unit Cost", default, deserialize_with = "lenient_number")]
    unit_cost: Option<f64>,
    #[serde(
        rename = "On Hand Units",
        default,
        deserialize_with = "lenient_number"
    )]
    on_hand_units: Option<f64>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Accepts "1250", "$4.20", "1,800", or blank; anything unparseable reads as
/// absent so one dirty cell does not sink the whole export.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.and_then(|value| {
        let cleaned: String = value
            .trim()
            .chars()
            .filter(|c| *c != '$' && *c != ',')
            .collect();
        if cleaned.is_empty() {
            return None;
        }
        cleaned.parse::<f64>().ok()
    }))
}

#[cfg(test)]
pub(crate) fn parse_number_for_tests(value: &str) -> Option<f64> {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        None
    } else {
        cleaned.parse::<f64>().ok()
    }
}
