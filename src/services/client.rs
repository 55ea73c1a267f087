use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Fetches a client by its identifier.
pub fn get_client<R>(repo: &R, client_id: i32) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    repo.get_client_by_id(client_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Returns the total count and the requested page of clients.
pub fn list_clients<R>(repo: &R, query: ClientListQuery) -> ServiceResult<(usize, Vec<Client>)>
where
    R: ClientReader + ?Sized,
{
    repo.list_clients(query).map_err(ServiceError::from)
}

/// Persists a new client and returns it with its assigned identifier.
pub fn insert_client<R>(repo: &R, new_client: &NewClient) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    repo.create_client(new_client).map_err(ServiceError::from)
}

/// Applies the provided updates to the client entity.
pub fn update_client<R>(repo: &R, client_id: i32, updates: &UpdateClient) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    repo.update_client(client_id, updates)
        .map_err(ServiceError::from)
}

/// Removes the client. Fails when the id is unknown or when dependent
/// records still reference it.
pub fn delete_client<R>(repo: &R, client_id: i32) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    repo.delete_client(client_id).map_err(ServiceError::from)
}
