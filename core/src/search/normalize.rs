use anyhow::anyhow;
use serde_json::Value;

use crate::errors::UpstreamError;

use super::record::InfluencerRecord;
use super::result::SearchResult;

/// Turns the endpoint's JSON body into a [`SearchResult`].
///
/// Profiles are read from `data` (or a bare top-level array). The total is
/// taken from `pagination.total`, `meta.total`, `totalCount` or `total`, in
/// that order, and falls back to the number of profiles on the page when the
/// body carries none (the caller did not ask for `trackTotal`).
pub fn normalize_response(raw: &Value) -> Result<SearchResult, UpstreamError> {
    let items = match raw {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => &EMPTY,
            Some(other) => {
                return Err(UpstreamError::Decode(anyhow!(
                    "`data` is not a list: {}",
                    kind(other)
                )))
            }
        },
        other => {
            return Err(UpstreamError::Decode(anyhow!(
                "unexpected body: {}",
                kind(other)
            )))
        }
    };

    let records = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<InfluencerRecord>(item.clone())
                .map_err(|e| UpstreamError::Decode(anyhow!("profile #{i}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total_count = read_total(raw).unwrap_or(records.len() as u64);

    Ok(SearchResult {
        records,
        total_count,
    })
}

static EMPTY: Vec<Value> = Vec::new();

fn read_total(raw: &Value) -> Option<u64> {
    [
        raw.pointer("/pagination/total"),
        raw.pointer("/meta/total"),
        raw.get("totalCount"),
        raw.get("total"),
    ]
    .into_iter()
    .flatten()
    .find_map(Value::as_u64)
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
