use crate::user_api::server_api::{ErrorS, NewUser, UserService};
use actix_web::{HttpResponse, web};
use tracing::debug;

pub async fn get_user_handler(
    service: web::Data<UserService>,
    path: web::Path<String>,
) -> HttpResponse {
    let raw_id = path.into_inner();
    match raw_id.parse::<i64>() {
        Ok(id) => service.get_user(id),
        Err(_) => {
            debug!("rejecting non-numeric user id '{raw_id}'");
            HttpResponse::BadRequest().json(ErrorS {
                error: format!("User id must be an integer, got '{raw_id}'"),
            })
        }
    }
}

pub async fn create_user_handler(
    service: web::Data<UserService>,
    body: web::Json<NewUser>,
) -> HttpResponse {
    service.create_user(body.into_inner())
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/users/{user_id}", web::get().to(get_user_handler))
        .route("/users", web::post().to(create_user_handler));
}
