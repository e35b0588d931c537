//! Pagination for list endpoints.

use serde::{Deserialize, Serialize};

/// Page size applied when a filter leaves `count` unset.
pub const DEFAULT_PAGE_COUNT: u32 = 100;
/// Offset applied when a filter leaves `offset` unset.
pub const DEFAULT_PAGE_OFFSET: u32 = 0;

/// Filters for list endpoints that only page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteringParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl FilteringParameters {
    /// Request `count` records starting at `offset`.
    ///
    /// A `count` of zero still becomes the default page size when sent.
    pub fn new(count: u32, offset: u32) -> Self {
        Self {
            count: Some(count),
            offset: Some(offset),
        }
    }
}

/// A filter record carrying `count`/`offset` paging fields.
pub trait Paginated {
    fn count_mut(&mut self) -> &mut Option<u32>;
    fn offset_mut(&mut self) -> &mut Option<u32>;

    /// Fill in missing paging values without touching explicit ones.
    ///
    /// A `count` of zero is treated as missing; the API has no use for empty pages.
    fn apply_default_pagination(&mut self) {
        let count = self.count_mut();
        *count = Some(count.filter(|c| *c > 0).unwrap_or(DEFAULT_PAGE_COUNT));

        let offset = self.offset_mut();
        *offset = Some(offset.unwrap_or(DEFAULT_PAGE_OFFSET));
    }
}

macro_rules! impl_paginated {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Paginated for $ty {
                fn count_mut(&mut self) -> &mut Option<u32> {
                    &mut self.count
                }

                fn offset_mut(&mut self) -> &mut Option<u32> {
                    &mut self.offset
                }
            }
        )*
    };
}

impl_paginated!(
    FilteringParameters,
    super::BounceFilteringParameters,
    super::TemplateFilteringParameters,
    super::ServerFilteringParameters,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn defaulted(count: Option<u32>, offset: Option<u32>) -> FilteringParameters {
        let mut filter = FilteringParameters { count, offset };
        filter.apply_default_pagination();
        filter
    }

    #[test]
    fn empty_filter_gets_defaults() {
        assert_eq!(defaulted(None, None), FilteringParameters::new(100, 0));
    }

    #[test]
    fn explicit_values_are_kept() {
        assert_eq!(defaulted(Some(5), None), FilteringParameters::new(5, 0));
        assert_eq!(defaulted(Some(20), Some(40)), FilteringParameters::new(20, 40));
        assert_eq!(defaulted(None, Some(0)), FilteringParameters::new(100, 0));
    }

    #[test]
    fn zero_count_is_treated_as_missing() {
        assert_eq!(defaulted(Some(0), None), FilteringParameters::new(100, 0));
    }

    #[test]
    fn bounce_filter_keeps_its_other_fields() {
        let mut filter = super::super::BounceFilteringParameters {
            tag: Some("welcome".to_string()),
            count: Some(10),
            ..Default::default()
        };
        filter.apply_default_pagination();

        assert_eq!(filter.count, Some(10));
        assert_eq!(filter.offset, Some(0));
        assert_eq!(filter.tag.as_deref(), Some("welcome"));
    }
}
