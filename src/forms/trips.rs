use serde::Deserialize;
use validator::Validate;

use crate::forms::FormError;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Query string of `GET /api/trips`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TripsQueryForm {
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, message = "pageSize must be at least 1"))]
    pub page_size: Option<i64>,
}

/// Validated paging parameters with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripsQuery {
    pub page: usize,
    pub page_size: usize,
}

impl TryFrom<TripsQueryForm> for TripsQuery {
    type Error = FormError;

    fn try_from(form: TripsQueryForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            page: form.page.map_or(DEFAULT_PAGE, |page| page as usize),
            page_size: form
                .page_size
                .map_or(DEFAULT_PAGE_SIZE, |page_size| page_size as usize),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_missing() {
        let query = TripsQuery::try_from(TripsQueryForm::default()).unwrap();
        assert_eq!(
            query,
            TripsQuery {
                page: 1,
                page_size: 10
            }
        );
    }

    #[test]
    fn explicit_values_are_kept() {
        let form = TripsQueryForm {
            page: Some(3),
            page_size: Some(25),
        };
        let query = TripsQuery::try_from(form).unwrap();
        assert_eq!(query.page, 3);
        assert_eq!(query.page_size, 25);
    }

    #[test]
    fn non_positive_values_are_rejected() {
        let zero_size = TripsQueryForm {
            page: Some(1),
            page_size: Some(0),
        };
        assert!(matches!(
            TripsQuery::try_from(zero_size),
            Err(FormError::Validation(_))
        ));

        let negative_page = TripsQueryForm {
            page: Some(-1),
            page_size: None,
        };
        assert!(TripsQuery::try_from(negative_page).is_err());
    }
}
