use crate::{
    domain::client::{Client, NewClient, UpdateClient},
    repository::errors::RepositoryResult,
};

pub mod client;
pub mod errors;
#[cfg(test)]
pub mod mock;

pub use client::DieselRepository;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Filter and paging options applied when listing clients.
#[derive(Debug, Clone, Default)]
pub struct ClientListQuery {
    pub pagination: Option<Pagination>,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<Client>>;
    /// Returns the total number of matching clients alongside the
    /// (possibly paginated) page of items, ordered by id.
    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    fn update_client(&self, client_id: i32, updates: &UpdateClient) -> RepositoryResult<Client>;
    fn delete_client(&self, client_id: i32) -> RepositoryResult<()>;
}

/// Object-safe bundle of the repository capabilities the HTTP layer needs.
pub trait ClientRepository: ClientReader + ClientWriter + Send + Sync {}

impl<T> ClientRepository for T where T: ClientReader + ClientWriter + Send + Sync {}
