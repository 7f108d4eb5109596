//! Paginated trip listing.

use crate::dto::trips::{TripSummary, TripsPage};
use crate::forms::trips::{TripsQuery, TripsQueryForm};
use crate::repository::{TripListQuery, TripReader};
use crate::services::ServiceResult;

/// Returns one page of trips, latest start date first.
///
/// A page past the end yields an empty list with the real page count.
pub fn list_trips<R>(repo: &R, form: TripsQueryForm) -> ServiceResult<TripsPage>
where
    R: TripReader + ?Sized,
{
    let TripsQuery { page, page_size } = TripsQuery::try_from(form)?;

    let (total, trips) = repo
        .list_trips(TripListQuery::new().paginate(page, page_size))
        .map_err(|err| {
            log::error!("Failed to list trips: {err}");
            err
        })?;

    Ok(TripsPage {
        page_num: page,
        page_size,
        all_pages: total.div_ceil(page_size),
        trips: trips.into_iter().map(TripSummary::from).collect(),
    })
}
