use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use super::record::{CategoryKeys, RawRecord};

#[derive(Clone, Debug, Deserialize)]
struct AgeGapRow {
    actor_1_age: u32,
    actor_2_age: u32,
    character_1_gender: String,
    character_2_gender: String,
    movie_name: String,
    actor_1_name: String,
    actor_2_name: String,
}

pub fn load_records(path: &Path, keys: &CategoryKeys) -> Result<Vec<RawRecord>> {
    let file = File::open(path).with_context(|| format!("failed to open dataset {}", path.display()))?;
    read_records(file, keys).with_context(|| format!("failed to read dataset {}", path.display()))
}

pub fn read_records<R: Read>(reader: R, keys: &CategoryKeys) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (row_index, row) in reader.deserialize::<AgeGapRow>().enumerate() {
        let row_number = row_index + 1;
        let row = row.with_context(|| format!("invalid data row {row_number}"))?;

        let resolve = |value: &str| {
            keys.resolve(value).ok_or_else(|| {
                anyhow!(
                    "data row {row_number}: unknown category {value:?} (expected {:?} or {:?})",
                    keys.first,
                    keys.second
                )
            })
        };

        records.push(RawRecord {
            age_a: row.actor_1_age,
            age_b: row.actor_2_age,
            category_a: resolve(&row.character_1_gender)?,
            category_b: resolve(&row.character_2_gender)?,
            label: row.movie_name,
            name_a: row.actor_1_name,
            name_b: row.actor_2_name,
        });
    }

    if records.is_empty() {
        return Err(anyhow!("dataset contains no rows"));
    }

    Ok(records)
}
