use std::rc::Rc;

use common::datetime::{from_backend_instant, to_backend_instant};
use common::error::{ApiError, StoreError};
use common::model::reservation::{NewReservation, Reservation, ReservationPatch, ReservationStatus};
use common::model::user::{User, UserPatch};
use common::store::memory::MemoryClient;
use common::store::{Resource, RestClient, ResourceStore};
use serde_json::json;

fn stores() -> (Rc<MemoryClient>, ResourceStore<Reservation>, ResourceStore<User>) {
    let client = Rc::new(MemoryClient::new());
    let transport = client.clone() as Rc<dyn RestClient>;
    (
        client,
        ResourceStore::new(transport.clone()),
        ResourceStore::new(transport),
    )
}

#[tokio::test]
async fn booking_from_form_input() {
    let (client, reservations, _) = stores();

    let slot = to_backend_instant("24/12/2025", "23:45").unwrap();
    reservations
        .create(&NewReservation::pending(slot, "window seat"))
        .await
        .unwrap();

    let listed = reservations.items();
    assert_eq!(listed.len(), 1);
    let booked = &listed[0];
    assert_eq!(booked.status, ReservationStatus::Pending);
    assert_eq!(booked.notes.as_deref(), Some("window seat"));
    assert!(booked.is_well_formed());
    assert_eq!(booked.start_time.to_string(), "2025-12-24T23:45:00");
    assert_eq!(booked.end_time.to_string(), "2025-12-25T00:45:00");

    let shown = from_backend_instant(&booked.start_time.to_string()).unwrap();
    assert_eq!((shown.date.as_str(), shown.time.as_str()), ("24/12/2025", "23:45"));

    assert_eq!(client.requests(), ["POST reservations/", "GET reservations/"]);
}

#[tokio::test]
async fn status_workflow_and_filtering() {
    let (client, reservations, _) = stores();
    client.seed(
        "reservations/",
        [
            json!({
                "id": 1,
                "start_time": "2025-12-24T10:00:00",
                "end_time": "2025-12-24T11:00:00",
                "status": "pending",
                "created_at": "2025-12-01T09:00:00"
            }),
            json!({
                "id": 2,
                "start_time": "2025-12-25T10:00:00",
                "end_time": "2025-12-25T11:00:00",
                "status": "confirmed",
                "customer": 4,
                "created_at": "2025-12-01T09:30:00"
            }),
        ],
    );
    reservations.refresh().await;

    reservations.set_filter(|r: &Reservation| r.status == ReservationStatus::Pending);
    assert_eq!(reservations.items().len(), 1);

    reservations
        .update_field(&1, &ReservationPatch::status(ReservationStatus::Confirmed))
        .await
        .unwrap();
    assert!(reservations.items().is_empty());
    assert_eq!(reservations.all_items().len(), 2);

    reservations
        .update_field(&2, &ReservationPatch::status(ReservationStatus::Cancelled))
        .await
        .unwrap();
    reservations.clear_filter();
    let statuses: Vec<_> = reservations.items().iter().map(|r| r.status).collect();
    assert_eq!(statuses, [ReservationStatus::Confirmed, ReservationStatus::Cancelled]);
}

#[tokio::test]
async fn user_admin_edit_and_delete() {
    let (client, _, users) = stores();
    client.seed(
        "users/",
        [
            json!({ "id": 1, "username": "ada", "first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com" }),
            json!({ "id": 2, "username": "bob", "email": "bob@example.com", "is_staff": true }),
        ],
    );
    users.refresh().await;

    let original = users.find(&1).unwrap();
    let mut edited = original.clone();
    edited.is_active = false;
    users
        .update_field(&1, &UserPatch::diff(&original, &edited))
        .await
        .unwrap();
    assert!(!users.find(&1).unwrap().is_active);

    assert!(!users.delete(&2, &|_: &str| false).await);
    assert_eq!(users.items().len(), 2);

    assert!(users.delete(&2, &|_: &str| true).await);
    assert_eq!(users.items().len(), 1);
    assert_eq!(
        client.requests(),
        ["GET users/", "PATCH users/1/", "GET users/", "DELETE users/2/", "GET users/"]
    );
}

#[tokio::test]
async fn write_failures_leave_snapshot_alone() {
    let (client, _, users) = stores();
    client.seed("users/", [json!({ "id": 1, "username": "ada" })]);
    users.refresh().await;

    client.fail_next(ApiError::Network("connection reset".to_string()));
    let err = users
        .update_field(&1, &json!({ "first_name": "Augusta" }))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Network(ApiError::Network(_))));
    assert_eq!(users.find(&1).unwrap().first_name, "");

    client.fail_next(ApiError::Network("connection reset".to_string()));
    users.refresh().await;
    assert_eq!(users.items().len(), 1);
    assert!(!users.is_loading());

    assert!(!users.delete(&9, &|_: &str| true).await);
    assert_eq!(users.items().len(), 1);
}

#[tokio::test]
async fn malformed_reservations_stay_listed() {
    let (client, reservations, _) = stores();
    client.seed(
        "reservations/",
        [json!({
            "id": 3,
            "start_time": "2025-12-24T11:00:00",
            "end_time": "2025-12-24T10:00:00",
            "status": "pending",
            "created_at": "2025-12-01T09:00:00"
        })],
    );
    reservations.refresh().await;

    let listed = reservations.items();
    assert_eq!(listed.len(), 1);
    assert!(!listed[0].is_well_formed());
}
