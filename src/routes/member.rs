use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use serde_json::json;

use crate::forms::member::MemberSearchForm;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::member::{search_members_v1, search_members_v2, search_members_v3};

/// Repeated `sort` keys need a form decoder, `web::Query` keeps only one.
fn parse_search_form(req: &HttpRequest) -> Result<MemberSearchForm, HttpResponse> {
    serde_html_form::from_str(req.query_string()).map_err(|err| {
        HttpResponse::BadRequest().json(json!({ "error": format!("invalid query string: {err}") }))
    })
}

#[get("/v1/members")]
pub async fn search_member_v1(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let form = match parse_search_form(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };

    match search_members_v1(form, repo.get_ref()) {
        Ok(members) => HttpResponse::Ok().json(members),
        Err(err) => service_error_response(err),
    }
}

#[get("/v2/members")]
pub async fn search_member_v2(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let form = match parse_search_form(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };

    match search_members_v2(form, repo.get_ref()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err),
    }
}

#[get("/v3/members")]
pub async fn search_member_v3(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let form = match parse_search_form(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };

    match search_members_v3(form, repo.get_ref()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err),
    }
}
