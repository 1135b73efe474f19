use actix_web::{web, App};
use avaliacao_api::db::postgres_service::PostgresService;
use avaliacao_api::types::user::DBUserCreate;
use std::sync::Arc;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(avaliacao_api::routes::configure_routes)
    }

    pub async fn create_test_user(&self, role: &str) -> Uuid {
        self.create_test_user_with_push(role, false).await
    }

    #[allow(dead_code)]
    pub async fn create_test_user_with_push(&self, role: &str, push_enabled: bool) -> Uuid {
        let tag = Uuid::new_v4();
        self.db
            .create_user(DBUserCreate {
                nome: format!("Test {role}"),
                email: format!("{role}-{tag}@test.com"),
                role: role.to_string(),
                push_enabled,
            })
            .await
            .expect("Failed to create user")
    }
}

#[allow(dead_code)]
pub fn auth_header() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", super::TEST_SERVICE_KEY))
}
