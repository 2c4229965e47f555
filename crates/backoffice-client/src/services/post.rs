//! Marketplace posts, read-only in the console.

use backoffice_core::types::{PostPackageId, PostTripId, SortKeys};
use backoffice_entity::post::{PostPackage, PostTrip};

use crate::resource::Resource;
use crate::routes::Routes;

/// Package shipping posts.
#[derive(Debug, Clone, Copy)]
pub struct PostPackages;

impl Resource for PostPackages {
    type Id = PostPackageId;
    type Record = PostPackage;
    const ROUTES: Routes = Routes::rest(
        "Post package",
        "/PostPackage/get-all",
        "/PostPackage/get-details/{id}",
    )
    .with_sort_keys(SortKeys::BY_ORDER);

    fn id_of(record: &PostPackage) -> PostPackageId {
        record.post_package_id
    }
}

/// Trip crew posts. Rows are complete, so there is no detail route.
#[derive(Debug, Clone, Copy)]
pub struct PostTrips;

impl Resource for PostTrips {
    type Id = PostTripId;
    type Record = PostTrip;
    const ROUTES: Routes = Routes::list_only("Post trip", "/PostTrip/all");

    fn id_of(record: &PostTrip) -> PostTripId {
        record.post_trip_id
    }
}
