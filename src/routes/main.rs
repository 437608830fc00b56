use actix_web::{HttpResponse, Responder, get};

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body("hello")
}

#[get("/hello")]
pub async fn hello() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body("hello")
}
