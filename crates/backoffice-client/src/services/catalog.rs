//! Read-only catalogue resources: items, packages, vehicles, trips, and
//! wallet transactions.

use std::cmp::Ordering;

use backoffice_core::types::{ItemId, PackageId, SortDirection, SortKeys, TransactionId, TripId, VehicleId};
use backoffice_entity::item::Item;
use backoffice_entity::package::Package;
use backoffice_entity::transaction::Transaction;
use backoffice_entity::trip::Trip;
use backoffice_entity::vehicle::Vehicle;

use crate::resource::Resource;
use crate::routes::Routes;

/// Provider items.
#[derive(Debug, Clone, Copy)]
pub struct Items;

impl Resource for Items {
    type Id = ItemId;
    type Record = Item;
    const ROUTES: Routes = Routes::rest("Item", "/Item/get-all-items", "/Item/get-item-by-id/{id}")
        .with_sort_keys(SortKeys::BY_ORDER);

    fn id_of(record: &Item) -> ItemId {
        record.item_id
    }
}

/// Shipment packages.
#[derive(Debug, Clone, Copy)]
pub struct Packages;

impl Resource for Packages {
    type Id = PackageId;
    type Record = Package;
    const ROUTES: Routes = Routes::rest(
        "Package",
        "/Package/get-all-packages",
        "/Package/get-package-by-id/{id}",
    )
    .with_sort_keys(SortKeys::BY_ORDER);

    fn id_of(record: &Package) -> PackageId {
        record.package_id
    }
}

/// Owner vehicles.
#[derive(Debug, Clone, Copy)]
pub struct Vehicles;

impl Resource for Vehicles {
    type Id = VehicleId;
    type Record = Vehicle;
    const ROUTES: Routes =
        Routes::rest("Vehicle", "/Vehicle", "/Vehicle/{id}").with_sort_keys(SortKeys::BY_ORDER);

    fn id_of(record: &Vehicle) -> VehicleId {
        record.vehicle_id
    }
}

/// Trips. The list endpoint ignores search and sort.
#[derive(Debug, Clone, Copy)]
pub struct Trips;

impl Resource for Trips {
    type Id = TripId;
    type Record = Trip;
    const ROUTES: Routes = Routes::rest("Trip", "/Trip/all", "/Trip/{id}");
    const LOCAL_QUERY: bool = true;

    fn id_of(record: &Trip) -> TripId {
        record.trip_id
    }

    fn matches(record: &Trip, search: &str) -> bool {
        record.matches(search)
    }

    fn compare(a: &Trip, b: &Trip, field: &str, direction: SortDirection) -> Ordering {
        a.compare_by(b, field, direction)
    }
}

/// Wallet transactions.
#[derive(Debug, Clone, Copy)]
pub struct Transactions;

impl Resource for Transactions {
    type Id = TransactionId;
    type Record = Transaction;
    const ROUTES: Routes = Routes::rest("Transaction", "/Transaction", "/Transaction/{id}");

    fn id_of(record: &Transaction) -> TransactionId {
        record.transaction_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use backoffice_core::traits::HttpMethod;
    use backoffice_core::types::ListQuery;
    use serde_json::json;

    use crate::client::ApiClient;
    use crate::mock::MockTransport;
    use crate::resource::ResourceService;

    #[tokio::test]
    async fn test_trips_searched_locally() {
        let mock = Arc::new(MockTransport::new());
        mock.ok(
            HttpMethod::Get,
            "/Trip/all",
            json!({
                "data": [
                    { "tripId": "5a4b3c2d-1e0f-4a9b-8c7d-6e5f4a3b2c1d", "tripCode": "TRIP-1", "ownerName": "Binh" },
                    { "tripId": "6a4b3c2d-1e0f-4a9b-8c7d-6e5f4a3b2c1d", "tripCode": "TRIP-2", "ownerName": "Chau" }
                ],
                "currentPage": 1, "totalPages": 1, "totalCount": 2
            }),
        );
        let service = ResourceService::<Trips>::new(ApiClient::new(mock));
        let mut query = ListQuery::new(10);
        query.set_search("chau");
        let page = service.list(&query).await.unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].trip_code, "TRIP-2");
    }

    #[tokio::test]
    async fn test_item_detail_route() {
        let mock = Arc::new(MockTransport::new());
        let id = ItemId::new();
        let path = format!("/Item/get-item-by-id/{id}");
        mock.ok(HttpMethod::Get, &path, json!({ "itemId": id, "itemName": "Cement" }));
        let service = ResourceService::<Items>::new(ApiClient::new(mock.clone()));
        let item = service.get(id).await.unwrap();
        assert_eq!(item.item_name, "Cement");
        assert_eq!(mock.count(HttpMethod::Get, &path), 1);
    }
}
