use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;
use validator::Validate;

use crate::domain::client::{NewClient, UpdateClient};
use crate::dto::client::{ClientDto, ClientForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{ClientListQuery, ClientRepository};
use crate::routes::error_response;
use crate::services;
use crate::services::ServiceError;

#[derive(Deserialize)]
struct ListQueryParams {
    page: Option<usize>,
    per_page: Option<usize>,
}

#[post("/clients")]
pub async fn create_client(
    req: HttpRequest,
    repo: web::Data<dyn ClientRepository>,
    web::Json(form): web::Json<ClientForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return error_response(&ServiceError::Validation(e.to_string()), req.path());
    }

    let new_client: NewClient = (&form).into();
    match services::client::insert_client(repo.get_ref(), &new_client) {
        Ok(client) => HttpResponse::Created().json(ClientDto::from(client)),
        Err(e) => error_response(&e, req.path()),
    }
}

#[get("/clients/{id}")]
pub async fn get_client(
    req: HttpRequest,
    client_id: web::Path<i32>,
    repo: web::Data<dyn ClientRepository>,
) -> impl Responder {
    match services::client::get_client(repo.get_ref(), client_id.into_inner()) {
        Ok(client) => HttpResponse::Ok().json(ClientDto::from(client)),
        Err(e) => error_response(&e, req.path()),
    }
}

#[get("/clients")]
pub async fn list_clients(
    req: HttpRequest,
    params: web::Query<ListQueryParams>,
    repo: web::Data<dyn ClientRepository>,
) -> impl Responder {
    // Without a page parameter the full ordered collection is returned as a
    // bare array; with one, a page envelope.
    let Some(page) = params.page else {
        return match services::client::list_clients(repo.get_ref(), ClientListQuery::new()) {
            Ok((_total, items)) => {
                let items: Vec<ClientDto> = items.into_iter().map(Into::into).collect();
                HttpResponse::Ok().json(items)
            }
            Err(e) => error_response(&e, req.path()),
        };
    };

    let per_page = params.per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE);
    let query = ClientListQuery::new().paginate(page, per_page);

    match services::client::list_clients(repo.get_ref(), query) {
        Ok((total, items)) => {
            let items: Vec<ClientDto> = items.into_iter().map(Into::into).collect();
            HttpResponse::Ok().json(Paginated::new(items, page, total, per_page))
        }
        Err(e) => error_response(&e, req.path()),
    }
}

#[put("/clients/{id}")]
pub async fn update_client(
    req: HttpRequest,
    client_id: web::Path<i32>,
    repo: web::Data<dyn ClientRepository>,
    web::Json(form): web::Json<ClientForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return error_response(&ServiceError::Validation(e.to_string()), req.path());
    }

    let updates: UpdateClient = (&form).into();
    match services::client::update_client(repo.get_ref(), client_id.into_inner(), &updates) {
        Ok(client) => HttpResponse::Ok().json(ClientDto::from(client)),
        Err(e) => error_response(&e, req.path()),
    }
}

#[delete("/clients/{id}")]
pub async fn delete_client(
    req: HttpRequest,
    client_id: web::Path<i32>,
    repo: web::Data<dyn ClientRepository>,
) -> impl Responder {
    match services::client::delete_client(repo.get_ref(), client_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e, req.path()),
    }
}
