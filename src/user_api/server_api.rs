use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::error;

use crate::store::interface::UserStore;
use crate::store::model::UserRecord;
use crate::user_check::checker::process_user_data;

pub struct UserService {
    store: Box<dyn UserStore>,
}

#[derive(Serialize)]
pub struct ErrorS {
    pub error: String,
}

#[derive(Deserialize)]
pub struct NewUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl UserService {
    pub fn new(store: Box<dyn UserStore>) -> Self {
        UserService { store }
    }

    pub fn get_user(&self, id: i64) -> HttpResponse {
        match self.store.find_by_id(id) {
            Err(e) => {
                error!("user lookup failed: {e}");
                let err = ErrorS {
                    error: format!("{e}"),
                };
                HttpResponse::InternalServerError().json(err)
            }
            Ok(Some(user)) => HttpResponse::Ok().json(user),
            Ok(None) => HttpResponse::NotFound().json(ErrorS {
                error: "User not found".to_string(),
            }),
        }
    }

    pub fn create_user(&self, new_user: NewUser) -> HttpResponse {
        let processed = match process_user_data(&new_user.name, &new_user.email, new_user.age) {
            Ok(p) => p,
            Err(e) => {
                return HttpResponse::BadRequest().json(ErrorS {
                    error: format!("{e}"),
                });
            }
        };

        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::from(processed.name.clone()));
        fields.insert("email".to_string(), Value::from(processed.email.clone()));
        fields.insert("age".to_string(), Value::from(processed.age));

        let record = UserRecord {
            id: new_user.id,
            fields,
        };

        match self.store.insert(record) {
            Ok(()) => HttpResponse::Created().json(processed),
            Err(e) => {
                error!("user insert failed: {e}");
                let err = ErrorS {
                    error: format!("{e}"),
                };
                HttpResponse::InternalServerError().json(err)
            }
        }
    }
}
