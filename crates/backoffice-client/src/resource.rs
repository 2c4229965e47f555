//! Generic CRUD over a backend resource.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use backoffice_core::traits::{ApiRequest, RequestBody};
use backoffice_core::types::pagination::MAX_PAGE_SIZE;
use backoffice_core::types::{ListQuery, Page, SortDirection};
use backoffice_core::{AppError, AppResult};

use crate::client::{ApiClient, Outcome};
use crate::routes::Routes;

/// Records fetched per request for lists that are searched locally.
pub const LOCAL_FETCH_SIZE: u32 = 200;

/// A backend resource the console lists and shows.
pub trait Resource: Send + Sync + 'static {
    /// Record key.
    type Id: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static;
    /// Record shape.
    type Record: DeserializeOwned + Clone + Debug + Send + Sync + 'static;

    /// Routes of this resource.
    const ROUTES: Routes;

    /// Whether the list endpoint ignores search and sort, so the console
    /// fetches one large page and applies them itself.
    const LOCAL_QUERY: bool = false;

    /// Key of a record.
    fn id_of(record: &Self::Record) -> Self::Id;

    /// Local search predicate (only used when [`Self::LOCAL_QUERY`]).
    fn matches(_record: &Self::Record, _search: &str) -> bool {
        true
    }

    /// Local sort comparator (only used when [`Self::LOCAL_QUERY`]).
    fn compare(_a: &Self::Record, _b: &Self::Record, _field: &str, _direction: SortDirection) -> Ordering {
        Ordering::Equal
    }
}

/// A resource the console can create and update.
///
/// Create and edit may use different payloads (an account is registered
/// with a password but edited without one).
pub trait Editable: Resource {
    /// Create payload.
    type CreateForm: Clone + Debug + Send + Sync + 'static;
    /// Edit payload.
    type UpdateForm: Clone + Debug + Send + Sync + 'static;

    /// Body of the create request.
    fn create_body(form: &Self::CreateForm) -> AppResult<RequestBody>;

    /// Body of the update request.
    fn update_body(id: Self::Id, form: &Self::UpdateForm) -> AppResult<RequestBody>;

    /// Key of a freshly created record, when the server returns one.
    fn created_id(result: Option<&Value>) -> Option<Self::Id>;
}

/// List, detail, create, update, and delete for one resource.
pub struct ResourceService<R: Resource> {
    /// Shared API client.
    client: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Debug for ResourceService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceService")
            .field("resource", &R::ROUTES.name)
            .finish()
    }
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone())
    }
}

impl<R: Resource> ResourceService<R> {
    /// Create a service.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// The route table in use.
    pub fn routes(&self) -> Routes {
        R::ROUTES
    }

    /// The shared client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Fetch one page.
    pub async fn list(&self, query: &ListQuery) -> AppResult<Page<R::Record>> {
        let routes = R::ROUTES;
        if !R::LOCAL_QUERY {
            let request = ApiRequest::get(routes.list).with_query(query.to_pairs_with(routes.sort_keys));
            return self.client.fetch_page(routes.name, request).await;
        }

        let fetch = ListQuery::new(LOCAL_FETCH_SIZE);
        let request = ApiRequest::get(routes.list).with_query(fetch.to_pairs());
        let page: Page<R::Record> = self.client.fetch_page(routes.name, request).await?;

        let mut records: Vec<R::Record> = page
            .data
            .into_iter()
            .filter(|record| R::matches(record, query.search()))
            .collect();
        if let Some(sort) = query.sort() {
            records.sort_by(|a, b| R::compare(a, b, &sort.field, sort.direction));
        }
        Ok(Page::paginate(records, query.page_number(), query.page_size()))
    }

    /// Fetch one record. A resource without a detail endpoint is looked
    /// up in the largest list page the backend serves.
    pub async fn get(&self, id: R::Id) -> AppResult<R::Record> {
        let routes = R::ROUTES;
        if let Some(path) = routes.detail_path(id) {
            return self.client.fetch(routes.name, ApiRequest::get(path)).await;
        }

        let query = ListQuery::new(MAX_PAGE_SIZE);
        let request = ApiRequest::get(routes.list).with_query(query.to_pairs_with(routes.sort_keys));
        let page: Page<R::Record> = self.client.fetch_page(routes.name, request).await?;
        page.data
            .into_iter()
            .find(|record| R::id_of(record) == id)
            .ok_or_else(|| AppError::not_found(format!("{} {id} not found", routes.name)))
    }

    /// Delete one record.
    pub async fn delete(&self, id: R::Id) -> AppResult<Outcome> {
        let routes = R::ROUTES;
        let outcome = self.client.call(ApiRequest::delete(routes.delete_path(id)?)).await?;
        info!(resource = routes.name, %id, "Record deleted");
        Ok(outcome)
    }
}

impl<R: Editable> ResourceService<R> {
    /// Create a record. Returns the server outcome and the new key, if
    /// the server reported one.
    pub async fn create(&self, form: &R::CreateForm) -> AppResult<(Outcome, Option<R::Id>)> {
        let routes = R::ROUTES;
        let request = with_body(ApiRequest::post(routes.create_path()?), R::create_body(form)?);
        let outcome = self.client.call(request).await?;
        let id = R::created_id(outcome.result.as_ref());
        info!(resource = routes.name, id = ?id, "Record created");
        Ok((outcome, id))
    }

    /// Replace a record's editable fields.
    pub async fn update(&self, id: R::Id, form: &R::UpdateForm) -> AppResult<Outcome> {
        let routes = R::ROUTES;
        let request = with_body(ApiRequest::put(routes.update_path(id)?), R::update_body(id, form)?);
        let outcome = self.client.call(request).await?;
        info!(resource = routes.name, %id, "Record updated");
        Ok(outcome)
    }
}

fn with_body(mut request: ApiRequest, body: RequestBody) -> ApiRequest {
    request.body = body;
    request
}

/// Read a key field out of a create result. Accepts the record itself or
/// a bare id string.
pub fn id_field<I: DeserializeOwned>(result: Option<&Value>, field: &str) -> Option<I> {
    match result? {
        Value::Object(map) => map
            .get(field)
            .and_then(|v| serde_json::from_value(v.clone()).ok()),
        value @ Value::String(_) => serde_json::from_value(value.clone()).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use backoffice_core::traits::HttpMethod;
    use backoffice_core::types::{SortDirection, SortKeys};
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Debug, Clone, Deserialize, PartialEq)]
    struct Crate {
        id: u32,
        name: String,
    }

    struct Crates;

    impl Resource for Crates {
        type Id = u32;
        type Record = Crate;
        const ROUTES: Routes = Routes::rest("Crate", "/Crate", "/Crate/{id}")
            .with_delete("/Crate/{id}")
            .with_sort_keys(SortKeys::BY_ORDER);

        fn id_of(record: &Crate) -> u32 {
            record.id
        }
    }

    struct LocalCrates;

    impl Resource for LocalCrates {
        type Id = u32;
        type Record = Crate;
        const ROUTES: Routes = Routes::rest("Crate", "/Crate/all", "/Crate/{id}");
        const LOCAL_QUERY: bool = true;

        fn id_of(record: &Crate) -> u32 {
            record.id
        }

        fn matches(record: &Crate, search: &str) -> bool {
            record.name.contains(search)
        }

        fn compare(a: &Crate, b: &Crate, _field: &str, direction: SortDirection) -> Ordering {
            match direction {
                SortDirection::Asc => a.id.cmp(&b.id),
                SortDirection::Desc => b.id.cmp(&a.id),
            }
        }
    }

    fn setup() -> (Arc<MockTransport>, ApiClient) {
        let mock = Arc::new(MockTransport::new());
        (mock.clone(), ApiClient::new(mock))
    }

    #[tokio::test]
    async fn test_list_sends_endpoint_sort_names() {
        let (mock, client) = setup();
        mock.ok(
            HttpMethod::Get,
            "/Crate",
            json!({ "data": [{ "id": 1, "name": "a" }], "currentPage": 1, "totalPages": 1, "totalCount": 1 }),
        );
        let service = ResourceService::<Crates>::new(client);
        let query = ListQuery::new(10).sorted_by("name", SortDirection::Asc);
        let page = service.list(&query).await.unwrap();
        assert_eq!(page.data.len(), 1);

        let sent = &mock.requests()[0];
        assert_eq!(sent.query_value("sortBy"), Some("name"));
        assert_eq!(sent.query_value("sortOrder"), Some("ASC"));
    }

    #[tokio::test]
    async fn test_local_query_filters_sorts_and_pages() {
        let (mock, client) = setup();
        mock.ok(
            HttpMethod::Get,
            "/Crate/all",
            json!({
                "data": [
                    { "id": 1, "name": "apple" }, { "id": 3, "name": "apricot" },
                    { "id": 2, "name": "banana" }, { "id": 4, "name": "avocado" }
                ],
                "currentPage": 1, "totalPages": 1, "totalCount": 4
            }),
        );
        let service = ResourceService::<LocalCrates>::new(client);
        let mut query = ListQuery::new(2).sorted_by("id", SortDirection::Desc);
        query.set_search("a");
        query.set_page(1);
        let page = service.list(&query).await.unwrap();

        let ids: Vec<u32> = page.data.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![4, 3]);
        assert_eq!(page.total_count, 4);
        assert!(page.has_next_page());
        assert_eq!(mock.requests()[0].query_value("pageSize"), Some("200"));
        assert_eq!(mock.requests()[0].query_value("search"), None);
    }

    #[tokio::test]
    async fn test_delete_unsupported_sends_nothing() {
        let (mock, client) = setup();
        let service = ResourceService::<LocalCrates>::new(client);
        assert!(service.delete(1).await.unwrap_err().is_validation());
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn test_id_field() {
        let id: Option<u32> = id_field(Some(&json!({ "crateId": 9 })), "crateId");
        assert_eq!(id, Some(9));
        let id: Option<String> = id_field(Some(&json!("abc")), "crateId");
        assert_eq!(id.as_deref(), Some("abc"));
        assert_eq!(id_field::<u32>(None, "crateId"), None);
    }
}
