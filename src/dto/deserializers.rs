use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseId {
    Int(i64),
    Text(String),
}

impl LooseId {
    fn into_i32(self) -> Option<i32> {
        match self {
            LooseId::Int(id) => i32::try_from(id).ok(),
            LooseId::Text(text) => text.trim().parse::<i32>().ok(),
        }
    }
}

// clients send category ids both as numbers and as numeric strings ("1");
// anything that is not a valid i32 reads as absent
pub fn deserialize_loose_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseId>::deserialize(deserializer)?;
    Ok(value.and_then(LooseId::into_i32))
}

/// List form of [`deserialize_loose_id`]: `null` is an empty list and
/// entries that are not valid ids are dropped.
pub fn deserialize_loose_ids<'de, D>(deserializer: D) -> Result<Vec<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Option<LooseId>>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .filter_map(LooseId::into_i32)
        .collect())
}
