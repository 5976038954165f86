pub const QUALITY_MIN: u8 = 0;
pub const QUALITY_MAX: u8 = 100;

/// Borrowed view over one optional min/max pair of a filter.
///
/// Bounds are kept string-encoded, exactly as typed. Blank means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeField<'a> {
    pub min_param: &'static str,
    pub max_param: &'static str,
    pub min: &'a str,
    pub max: &'a str,
}

impl<'a> RangeField<'a> {
    pub fn min(&self) -> Option<&'a str> {
        non_blank(self.min)
    }

    pub fn max(&self) -> Option<&'a str> {
        non_blank(self.max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min().is_none() && self.max().is_none()
    }
}

/// A single-sided threshold such as `minAudienceAgePercent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold<'a> {
    pub param: &'static str,
    pub value: &'a str,
}

impl<'a> Threshold<'a> {
    pub fn value(&self) -> Option<&'a str> {
        non_blank(self.value)
    }
}

pub(crate) fn non_blank(s: &str) -> Option<&str> {
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        Some(t)
    }
}

/// Quality-score slider. Unlike the other pairs it is always present and
/// always sent; the default is the whole domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityRange {
    pub min: u8,
    pub max: u8,
}

impl Default for QualityRange {
    fn default() -> Self {
        Self {
            min: QUALITY_MIN,
            max: QUALITY_MAX,
        }
    }
}

impl QualityRange {
    pub fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn is_full(&self) -> bool {
        self.min == QUALITY_MIN && self.max == QUALITY_MAX
    }
}
