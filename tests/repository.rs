use diesel::prelude::*;

use client_api::domain::client::{NewClient, UpdateClient};
use client_api::models::client::NewClientOrder;
use client_api::repository::errors::RepositoryError;
use client_api::repository::{ClientListQuery, ClientReader, ClientWriter, DieselRepository};
use client_api::schema::client_orders;

mod common;

#[test]
fn test_client_repository_crud() {
    let test_db = common::TestDb::new("test_client_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let alice = repo
        .create_client(&NewClient::new("Alice".to_string(), 4500.0))
        .unwrap();
    let bob = repo
        .create_client(&NewClient::new("Bob".to_string(), 2200.0))
        .unwrap();
    assert!(alice.id > 0);
    assert_ne!(alice.id, bob.id);

    let (total, items) = repo.list_clients(ClientListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(items.len(), 2);
    // Listing is ordered by id ascending.
    assert_eq!(items[0].id, alice.id);
    assert_eq!(items[1].id, bob.id);

    let fetched = repo.get_client_by_id(bob.id).unwrap().unwrap();
    assert_eq!(fetched.name, "Bob");
    assert_eq!(fetched.income, 2200.0);

    let updated = repo
        .update_client(bob.id, &UpdateClient::new("Bobby".to_string(), 2300.0))
        .unwrap();
    assert_eq!(updated.id, bob.id);
    assert_eq!(updated.name, "Bobby");
    assert_eq!(updated.income, 2300.0);

    repo.delete_client(alice.id).unwrap();
    assert!(repo.get_client_by_id(alice.id).unwrap().is_none());

    let (total_after, items_after) = repo.list_clients(ClientListQuery::new()).unwrap();
    assert_eq!(total_after, 1);
    assert_eq!(items_after[0].name, "Bobby");
}

#[test]
fn test_list_clients_pagination() {
    let test_db = common::TestDb::new("test_list_clients_pagination.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    for i in 1..=25 {
        repo.create_client(&NewClient::new(format!("Client #{i}"), 100.0 * i as f64))
            .unwrap();
    }

    let (total, first_page) = repo
        .list_clients(ClientListQuery::new().paginate(1, 10))
        .unwrap();
    assert_eq!(total, 25);
    assert_eq!(first_page.len(), 10);
    assert_eq!(first_page[0].name, "Client #1");

    let (_, last_page) = repo
        .list_clients(ClientListQuery::new().paginate(3, 10))
        .unwrap();
    assert_eq!(last_page.len(), 5);
    assert_eq!(last_page[0].name, "Client #21");

    // Page 0 is treated as the first page.
    let (_, zero_page) = repo
        .list_clients(ClientListQuery::new().paginate(0, 10))
        .unwrap();
    assert_eq!(zero_page[0].name, "Client #1");
}

#[test]
fn test_update_missing_client_is_not_found() {
    let test_db = common::TestDb::new("test_update_missing_client.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let err = repo
        .update_client(1000, &UpdateClient::new("Nobody".to_string(), 0.0))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_delete_missing_client_is_not_found() {
    let test_db = common::TestDb::new("test_delete_missing_client.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let err = repo.delete_client(1000).unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_delete_client_with_orders_is_a_constraint_violation() {
    let test_db = common::TestDb::new("test_delete_client_with_orders.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let client = repo
        .create_client(&NewClient::new("Carol".to_string(), 7000.0))
        .unwrap();

    let mut conn = test_db.pool().get().unwrap();
    diesel::insert_into(client_orders::table)
        .values(&NewClientOrder {
            client_id: client.id,
            description: "Order #1",
        })
        .execute(&mut conn)
        .unwrap();
    drop(conn);

    let err = repo.delete_client(client.id).unwrap_err();
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));

    // The client is still there.
    assert!(repo.get_client_by_id(client.id).unwrap().is_some());
}
