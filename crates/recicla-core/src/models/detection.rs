use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One entry of the JSON list the analysis prompt asks the model for.
///
/// Field names on the wire are the Portuguese keys used in the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedItem {
    #[serde(rename = "Tipo de objeto")]
    pub object_type: String,
    #[serde(rename = "Tipo de material")]
    pub material_type: String,
    #[serde(rename = "Quantidade")]
    pub quantity: u32,
}

/// Sum detected quantities per material type.
///
/// Quantities come from model output; totals saturate at `u32::MAX`.
pub fn tally_by_material(items: &[DetectedItem]) -> BTreeMap<String, u32> {
    let mut totals: BTreeMap<String, u32> = BTreeMap::new();
    for item in items {
        let total = totals.entry(item.material_type.clone()).or_insert(0);
        *total = total.saturating_add(item.quantity);
    }
    totals
}
