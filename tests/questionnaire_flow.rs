mod common;

use actix_web::{http::StatusCode, test};
use avaliacao_api::types::evaluation::{AnswerInput, RManagerDecision, RSubmitQuestionnaire};
use avaliacao_api::workflow::{DecisionAction, RespondentType};
use common::{client::auth_header, client::TestClient, test_data, TestContext};
use serde_json::Value;
use uuid::Uuid;

async fn create_evaluation(
    db: &avaliacao_api::db::postgres_service::PostgresService,
    funcionario: Uuid,
    avaliador: Uuid,
) -> String {
    let payload = test_data::sample_evaluation(funcionario, avaliador, "2026-S1");
    avaliacao_api::service::evaluation::create_evaluation(db, payload)
        .await
        .expect("Failed to create evaluation")
        .id
        .to_string()
}

fn submit_body(respondente: RespondentType, respostas: Vec<AnswerInput>) -> RSubmitQuestionnaire {
    RSubmitQuestionnaire {
        respondente_tipo: respondente,
        respostas,
    }
}

#[tokio::test]
async fn test_collaborator_submission_moves_to_manager_queue() {
    println!("\n\n[+] Running test: test_collaborator_submission_moves_to_manager_queue");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let funcionario = client.create_test_user("user").await;
    let avaliador = client.create_test_user("manager").await;
    let id = create_evaluation(&ctx.db, funcionario, avaliador).await;

    let body = submit_body(
        RespondentType::Collaborator,
        vec![
            test_data::scored_answer(1, 8.0),
            test_data::scored_answer(2, 6.0),
        ],
    );
    let req = test::TestRequest::post()
        .uri(&format!("/avaliacoes/{id}/questionario"))
        .insert_header(auth_header())
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", body);
    assert_eq!(body["data"]["status"], "awaiting_manager");
    // No settings seeded, so simple average applies.
    assert_eq!(body["data"]["media_geral"], 7.0);
    assert_eq!(body["data"]["pontuacao_total"], 14.0);

    // The reviewer is told, and the operation survived the dead mail endpoint.
    let notifications = ctx.db.notifications_for_user(avaliador).await.unwrap();
    let submissions: Vec<_> = notifications
        .iter()
        .filter(|n| n.tipo == "submissao")
        .collect();
    assert_eq!(submissions.len(), 1);
    assert!(!submissions[0].enviada_email);
    println!("[/] Test passed: submission flow complete.");
}

#[tokio::test]
async fn test_resubmitting_a_question_overwrites_the_answer() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let funcionario = client.create_test_user("user").await;
    let avaliador = client.create_test_user("manager").await;
    let id = create_evaluation(&ctx.db, funcionario, avaliador).await;
    let uuid = Uuid::parse_str(&id).unwrap();

    // First pass straight through the db layer so the status gate stays open.
    ctx.db
        .upsert_answers(
            uuid,
            RespondentType::Collaborator,
            &[test_data::scored_answer(1, 4.0)],
        )
        .await
        .unwrap();

    let body = submit_body(
        RespondentType::Collaborator,
        vec![
            test_data::scored_answer(1, 9.0),
            test_data::scored_answer(2, 7.0),
        ],
    );
    let req = test::TestRequest::post()
        .uri(&format!("/avaliacoes/{id}/questionario"))
        .insert_header(auth_header())
        .set_json(&body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let answers = ctx.db.answers_for_evaluation(uuid).await.unwrap();
    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0].pergunta_id, 1);
    assert_eq!(answers[0].nota, Some(9.0));
}

#[tokio::test]
async fn test_submission_is_gated_by_status() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let funcionario = client.create_test_user("user").await;
    let avaliador = client.create_test_user("manager").await;
    let id = create_evaluation(&ctx.db, funcionario, avaliador).await;

    // Manager cannot answer while the collaborator still holds the pen.
    let body = submit_body(
        RespondentType::Manager,
        vec![test_data::scored_answer(1, 5.0)],
    );
    let req = test::TestRequest::post()
        .uri(&format!("/avaliacoes/{id}/questionario"))
        .insert_header(auth_header())
        .set_json(&body)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    // Empty submissions are caller mistakes.
    let body = submit_body(RespondentType::Collaborator, vec![]);
    let req = test::TestRequest::post()
        .uri(&format!("/avaliacoes/{id}/questionario"))
        .insert_header(auth_header())
        .set_json(&body)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_manager_submission_closes_as_approved() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let funcionario = client.create_test_user("user").await;
    let avaliador = client.create_test_user("manager").await;
    let id = create_evaluation(&ctx.db, funcionario, avaliador).await;

    let body = submit_body(
        RespondentType::Collaborator,
        vec![test_data::scored_answer(1, 8.0)],
    );
    let req = test::TestRequest::post()
        .uri(&format!("/avaliacoes/{id}/questionario"))
        .insert_header(auth_header())
        .set_json(&body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let body = submit_body(
        RespondentType::Manager,
        vec![test_data::scored_answer(1, 7.0)],
    );
    let req = test::TestRequest::post()
        .uri(&format!("/avaliacoes/{id}/questionario"))
        .insert_header(auth_header())
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "approved");

    let approvals = ctx.db.notifications_for_user(funcionario).await.unwrap();
    assert!(approvals.iter().any(|n| n.tipo == "aprovacao"));
}

#[tokio::test]
async fn test_return_for_adjustment_relays_the_reason() {
    println!("\n\n[+] Running test: test_return_for_adjustment_relays_the_reason");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let funcionario = client.create_test_user("user").await;
    let avaliador = client.create_test_user("manager").await;
    let id = create_evaluation(&ctx.db, funcionario, avaliador).await;

    let body = submit_body(
        RespondentType::Collaborator,
        vec![test_data::scored_answer(1, 8.0)],
    );
    let req = test::TestRequest::post()
        .uri(&format!("/avaliacoes/{id}/questionario"))
        .insert_header(auth_header())
        .set_json(&body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // Return without a reason is refused.
    let decision = RManagerDecision {
        acao: DecisionAction::Return,
        comentario_avaliador: None,
        motivo_devolucao: None,
    };
    let req = test::TestRequest::post()
        .uri(&format!("/avaliacoes/{id}/decisao"))
        .insert_header(auth_header())
        .set_json(&decision)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let motivo = "Faltam evidências nas metas do trimestre.";
    let decision = RManagerDecision {
        acao: DecisionAction::Return,
        comentario_avaliador: Some("Rever seção de metas.".to_string()),
        motivo_devolucao: Some(motivo.to_string()),
    };
    let req = test::TestRequest::post()
        .uri(&format!("/avaliacoes/{id}/decisao"))
        .insert_header(auth_header())
        .set_json(&decision)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "returned_for_adjustment");

    // The reviewee reads exactly what the manager wrote.
    let notifications = ctx.db.notifications_for_user(funcionario).await.unwrap();
    let devolucao = notifications
        .iter()
        .find(|n| n.tipo == "devolucao")
        .expect("missing return notification");
    assert_eq!(devolucao.mensagem, motivo);

    // The manager comment landed in its designated answer slot.
    let uuid = Uuid::parse_str(&id).unwrap();
    let answers = ctx.db.answers_for_evaluation(uuid).await.unwrap();
    assert!(answers
        .iter()
        .any(|a| a.pergunta_id == 15 && a.respondente_tipo == "manager"));

    // Approving out of returned_for_adjustment is legal.
    let decision = RManagerDecision {
        acao: DecisionAction::Approve,
        comentario_avaliador: None,
        motivo_devolucao: None,
    };
    let req = test::TestRequest::post()
        .uri(&format!("/avaliacoes/{id}/decisao"))
        .insert_header(auth_header())
        .set_json(&decision)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "approved");
    println!("[/] Test passed: return and approve cycle complete.");
}

#[tokio::test]
async fn test_decision_on_fresh_evaluation_is_premature() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let funcionario = client.create_test_user("user").await;
    let avaliador = client.create_test_user("manager").await;
    let id = create_evaluation(&ctx.db, funcionario, avaliador).await;

    let decision = RManagerDecision {
        acao: DecisionAction::Approve,
        comentario_avaliador: None,
        motivo_devolucao: None,
    };
    let req = test::TestRequest::post()
        .uri(&format!("/avaliacoes/{id}/decisao"))
        .insert_header(auth_header())
        .set_json(&decision)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
}
