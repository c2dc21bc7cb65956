use async_trait::async_trait;
use novaposhta_models::framework::mock::{MockClient, MockError};
use novaposhta_models::lifecycle::Session;
use novaposhta_models::{api_method, bind_api_method, props, resource, Client, PropertyMap, Resource};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

resource! {
    /// Address directory.
    pub struct Address => "Address";
}

resource! {
    /// Shipment tracking.
    pub struct TrackingDocument => "TrackingDocument";
}

impl<C: Client> Address<C> {
    api_method! {
        /// Lists cities, optionally filtered by name.
        pub fn get_cities(&self, find_by_string: Option<&str>, page: Option<u32>) => "getCities" {
            props! { "FindByString" => find_by_string, "Page" => page }
        }

        /// Lists warehouses of a city.
        pub fn get_warehouses(&self, city_ref: &str, type_refs: Vec<&str>) => "getWarehouses" {
            props! { "CityRef" => city_ref, "TypeOfWarehouseRef" => type_refs }
        }
    }
}

impl<C: Client> TrackingDocument<C> {
    api_method! {
        pub fn get_status(&self, id: u32) => "getStatus" {
            props! { "id" => id }
        }
    }
}

/// A client that always fails and counts how often it was asked.
#[derive(Default)]
struct OutageClient {
    attempts: AtomicUsize,
}

#[derive(Debug, PartialEq)]
struct Outage(usize);

#[async_trait]
impl Client for OutageClient {
    type Response = Value;
    type Error = Outage;

    async fn send(&self, _: &str, _: &str, _: PropertyMap) -> Result<Value, Outage> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        Err(Outage(attempt))
    }
}

/// Echoes the call back as the response.
struct EchoClient;

#[async_trait]
impl Client for EchoClient {
    type Response = Value;
    type Error = MockError;

    async fn send(&self, resource: &str, method: &str, props: PropertyMap) -> Result<Value, MockError> {
        Ok(json!({ "model": resource, "method": method, "props": props }))
    }
}

#[tokio::test]
async fn test_bound_method_dispatches_exactly_once() {
    let client = Arc::new(MockClient::new());
    client
        .expect("TrackingDocument", "getStatus")
        .return_ok(json!({ "success": true, "data": [{ "Status": "Delivered" }] }));

    let document = TrackingDocument::new(client.clone());
    let response = document.get_status(5).await.expect("getStatus failed");

    assert_eq!(response, json!({ "success": true, "data": [{ "Status": "Delivered" }] }));
    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].resource, "TrackingDocument");
    assert_eq!(calls[0].method, "getStatus");
    assert_eq!(Value::Object(calls[0].props.clone()), json!({ "id": "5" }));
    client.verify();
}

#[tokio::test]
async fn test_absent_arguments_are_not_sent() {
    let client = Arc::new(MockClient::new());
    client.expect("Address", "getCities").return_ok(json!({ "data": [] }));
    client.expect("Address", "getCities").return_ok(json!({ "data": [] }));

    let address = Address::new(client.clone());
    address.get_cities(None, None).await.unwrap();
    address.get_cities(Some("Kyiv"), Some(2)).await.unwrap();

    let calls = client.calls();
    assert!(calls[0].props.is_empty());
    assert_eq!(
        Value::Object(calls[1].props.clone()),
        json!({ "FindByString": "Kyiv", "Page": "2" })
    );
    client.verify();
}

#[tokio::test]
async fn test_sequences_are_sent_unchanged() {
    let client = Arc::new(MockClient::new());
    client.expect("Address", "getWarehouses").return_ok(json!({ "data": [] }));

    let address = Address::new(client.clone());
    address
        .get_warehouses("8d5a980d-391c-11dd-90d9-001a92567626", vec![])
        .await
        .unwrap();

    assert_eq!(
        Value::Object(client.calls()[0].props.clone()),
        json!({ "CityRef": "8d5a980d-391c-11dd-90d9-001a92567626", "TypeOfWarehouseRef": [] })
    );
}

#[tokio::test]
async fn test_client_error_surfaces_without_retry() {
    let client = Arc::new(OutageClient::default());
    let document = TrackingDocument::new(client.clone());

    let result = document.get_status(5).await;

    assert_eq!(result, Err(Outage(1)));
    assert_eq!(client.attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_response_passes_through_unchanged() {
    let address = Address::new(Arc::new(EchoClient));

    let response = address.get_cities(Some("Odesa"), None).await.unwrap();

    assert_eq!(
        response,
        json!({ "model": "Address", "method": "getCities", "props": { "FindByString": "Odesa" } })
    );
}

#[tokio::test]
async fn test_ad_hoc_binding_on_base_resource() {
    let session = Session::new(EchoClient);
    let common = session.base("Common");

    let response = bind_api_method("getTimeIntervals")
        .invoke(&common, |_| props! { "RecipientCityRef" => "abc", "DateTime" => None::<String> })
        .await
        .unwrap();

    assert_eq!(response["model"], json!("Common"));
    assert_eq!(response["method"], json!("getTimeIntervals"));
    assert_eq!(response["props"], json!({ "RecipientCityRef": "abc" }));
}

#[tokio::test]
async fn test_resource_text_is_its_name() {
    let session = Session::new(EchoClient);
    let address: Address<_> = session.resource();

    assert_eq!(address.to_string(), "Address");
    assert_eq!(format!("{}", session.base("address")), "address");
    assert_eq!(address.name(), "Address");
}

#[tokio::test]
async fn test_shared_model_across_tasks() {
    let session = Session::new(EchoClient);
    let address: Arc<Address<_>> = Arc::new(session.resource());

    let handles: Vec<_> = (1..=4u32)
        .map(|page| {
            let address = Arc::clone(&address);
            tokio::spawn(async move { address.get_cities(None, Some(page)).await })
        })
        .collect();

    let mut pages = Vec::new();
    for handle in handles {
        let response = handle.await.expect("task panicked").expect("dispatch failed");
        pages.push(response["props"]["Page"].as_str().unwrap_or_default().to_string());
    }

    assert_eq!(pages, vec!["1", "2", "3", "4"]);
}
