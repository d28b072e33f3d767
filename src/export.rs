use anyhow::{anyhow, Result};
use serde::Serialize;
use serde_json::Value;

/// Render a list of flat records as CSV. The header is the union of field
/// names across all records in first-seen order, so optional fields that
/// only appear later in the list still get a column.
pub fn to_csv<T: Serialize>(entries: &[T]) -> Result<String> {
    let rows: Vec<Value> = entries
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<_, _>>()?;

    if rows.is_empty() {
        return Ok(String::new());
    }

    let mut headers: Vec<String> = vec![];
    for row in &rows {
        let object = row
            .as_object()
            .ok_or_else(|| anyhow!("csv export expects flat objects"))?;
        for key in object.keys() {
            if !headers.iter().any(|h| h == key) {
                headers.push(key.clone());
            }
        }
    }

    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(&headers)?;

    for row in &rows {
        let object = row.as_object().expect("checked above");
        let record: Vec<String> = headers
            .iter()
            .map(|header| match object.get(header) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            })
            .collect();
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow!("couldnt flush csv: {err}"))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn to_json<T: Serialize>(entries: &[T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
