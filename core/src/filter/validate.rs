use crate::errors::FilterError;

use super::range::{non_blank, QUALITY_MAX};
use super::state::{FilterState, MAX_PER_PAGE};

/// Rejects a filter that must not reach the wire.
///
/// Inverted ranges are rejected, not swapped: a silently corrected query
/// would return results for criteria the user never entered.
pub fn validate(filter: &FilterState) -> Result<(), FilterError> {
    if filter.page < 1 {
        return Err(FilterError::InvalidPage(filter.page));
    }
    if filter.per_page < 1 || filter.per_page > MAX_PER_PAGE {
        return Err(FilterError::InvalidPerPage {
            got: filter.per_page,
            max: MAX_PER_PAGE,
        });
    }

    for range in filter.ranges() {
        let min = range
            .min()
            .map(|v| parse_bound(range.min_param, v))
            .transpose()?;
        let max = range
            .max()
            .map(|v| parse_bound(range.max_param, v))
            .transpose()?;

        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(FilterError::InvertedRange {
                    min_param: range.min_param,
                    max_param: range.max_param,
                    min: range.min.trim().to_string(),
                    max: range.max.trim().to_string(),
                });
            }
        }
    }

    for threshold in filter.thresholds() {
        if let Some(v) = threshold.value() {
            parse_bound(threshold.param, v)?;
        }
    }

    let quality = filter.quality();
    for (param, value) in [
        ("minQualityScore", quality.min),
        ("maxQualityScore", quality.max),
    ] {
        if value > QUALITY_MAX {
            return Err(FilterError::QualityOutOfDomain { param, value });
        }
    }
    if quality.min > quality.max {
        return Err(FilterError::InvertedRange {
            min_param: "minQualityScore",
            max_param: "maxQualityScore",
            min: quality.min.to_string(),
            max: quality.max.to_string(),
        });
    }

    Ok(())
}

fn parse_bound(param: &'static str, raw: &str) -> Result<f64, FilterError> {
    let value = non_blank(raw).unwrap_or_default();
    let n: f64 = value.parse().map_err(|_| FilterError::NotANumber {
        param,
        value: value.to_string(),
    })?;
    if !n.is_finite() {
        return Err(FilterError::NotANumber {
            param,
            value: value.to_string(),
        });
    }
    if n < 0.0 {
        return Err(FilterError::Negative {
            param,
            value: value.to_string(),
        });
    }
    Ok(n)
}
