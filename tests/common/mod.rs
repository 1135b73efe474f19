use avaliacao_api::config::{EnvConfig, MailConfig, PushConfig, CONFIG};
use avaliacao_api::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub const TEST_SERVICE_KEY: &str = "test-key";

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // Mail/push point at a closed port so deliveries fail fast; the
        // operations under test must succeed regardless.
        CONFIG.set(test_config()).ok();

        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "unused".to_string(),
        service_key: TEST_SERVICE_KEY.to_string(),
        mail: MailConfig {
            api_key: "test".to_string(),
            endpoint: "http://127.0.0.1:1/emails".to_string(),
            sender: "avaliacoes@test.local".to_string(),
        },
        push: PushConfig {
            api_key: "test".to_string(),
            endpoint: "http://127.0.0.1:1/push".to_string(),
        },
    }
}

// Test data helpers
pub mod test_data {
    use avaliacao_api::types::evaluation::{AnswerInput, RCreateEvaluation};
    use uuid::Uuid;

    pub fn sample_evaluation(
        funcionario_id: Uuid,
        avaliador_id: Uuid,
        periodo: &str,
    ) -> RCreateEvaluation {
        RCreateEvaluation {
            funcionario_id: funcionario_id.to_string(),
            avaliador_id: avaliador_id.to_string(),
            ciclo_id: None,
            periodo: periodo.to_string(),
            data_inicio: None,
            data_fim: None,
        }
    }

    pub fn scored_answer(pergunta_id: i32, nota: f64) -> AnswerInput {
        AnswerInput {
            pergunta_id,
            nota: Some(nota),
            comentario: None,
        }
    }
}
