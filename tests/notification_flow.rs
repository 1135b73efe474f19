mod common;

use actix_web::{http::StatusCode, test};
use avaliacao_api::types::evaluation::DBEvaluationCreate;
use avaliacao_api::workflow::EvaluationStatus;
use chrono::{Duration, Utc};
use common::{client::auth_header, client::TestClient, test_data, TestContext};
use serde_json::Value;
use uuid::Uuid;

async fn seed_evaluation(
    ctx: &TestContext,
    funcionario: Uuid,
    avaliador: Uuid,
    periodo: &str,
    days_until_deadline: i64,
) -> Uuid {
    let today = Utc::now().date_naive();
    ctx.db
        .create_evaluation(DBEvaluationCreate {
            funcionario_id: funcionario,
            avaliador_id: avaliador,
            ciclo_id: None,
            periodo: periodo.to_string(),
            data_inicio: Some(today),
            data_fim: Some(today + Duration::days(days_until_deadline)),
        })
        .await
        .expect("Failed to seed evaluation")
        .id
}

#[tokio::test]
async fn test_reminder_batch_targets_upcoming_deadlines() {
    println!("\n\n[+] Running test: test_reminder_batch_targets_upcoming_deadlines");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let funcionario_a = client.create_test_user("user").await;
    let funcionario_b = client.create_test_user("user").await;
    let avaliador = client.create_test_user("manager").await;

    // Inside the window.
    seed_evaluation(&ctx, funcionario_a, avaliador, "2026-S1", 2).await;
    // Too far out.
    seed_evaluation(&ctx, funcionario_b, avaliador, "2026-S1", 10).await;

    let req = test::TestRequest::post()
        .uri("/avaliacoes/lembretes")
        .insert_header(auth_header())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", body);
    assert_eq!(body["data"]["lembretes_enviados"], 1);

    let reminded = ctx.db.notifications_for_user(funcionario_a).await.unwrap();
    assert!(reminded.iter().any(|n| n.tipo == "lembrete"));

    let quiet = ctx.db.notifications_for_user(funcionario_b).await.unwrap();
    assert!(quiet.iter().all(|n| n.tipo != "lembrete"));
    println!("[/] Test passed: only the imminent deadline was reminded.");
}

#[tokio::test]
async fn test_reminder_includes_manager_while_awaiting_review() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let funcionario = client.create_test_user("user").await;
    let avaliador = client.create_test_user("manager").await;
    let id = seed_evaluation(&ctx, funcionario, avaliador, "2026-S1", 1).await;

    ctx.db
        .update_status_checked(
            id,
            EvaluationStatus::PendingResponse,
            EvaluationStatus::AwaitingManager,
        )
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/avaliacoes/lembretes")
        .insert_header(auth_header())
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    // One record for each side of the evaluation.
    assert_eq!(body["data"]["lembretes_enviados"], 2);

    let manager_side = ctx.db.notifications_for_user(avaliador).await.unwrap();
    assert!(manager_side.iter().any(|n| n.tipo == "lembrete"));
}

#[tokio::test]
async fn test_approved_evaluations_get_no_reminder() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let funcionario = client.create_test_user("user").await;
    let avaliador = client.create_test_user("manager").await;
    let id = seed_evaluation(&ctx, funcionario, avaliador, "2026-S1", 1).await;

    ctx.db
        .update_status_checked(
            id,
            EvaluationStatus::PendingResponse,
            EvaluationStatus::AwaitingManager,
        )
        .await
        .unwrap();
    ctx.db
        .update_status_checked(
            id,
            EvaluationStatus::AwaitingManager,
            EvaluationStatus::Approved,
        )
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/avaliacoes/lembretes")
        .insert_header(auth_header())
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["lembretes_enviados"], 0);
}

#[tokio::test]
async fn test_trash_notifies_both_parties_once_each() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let funcionario = client.create_test_user("user").await;
    let avaliador = client.create_test_user("manager").await;
    let id = seed_evaluation(&ctx, funcionario, avaliador, "2026-S1", 30).await;

    let req = test::TestRequest::post()
        .uri(&format!("/avaliacoes/{id}/lixeira"))
        .insert_header(auth_header())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    for user in [funcionario, avaliador] {
        let rows = ctx.db.notifications_for_user(user).await.unwrap();
        assert_eq!(rows.iter().filter(|n| n.tipo == "lixeira").count(), 1);
    }
}

#[tokio::test]
async fn test_self_evaluation_trash_is_not_notified_twice() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    // A manager reviewing themselves sits on both sides of the record.
    let manager = client.create_test_user("manager").await;
    let id = seed_evaluation(&ctx, manager, manager, "2026-S1", 30).await;

    avaliacao_api::service::evaluation::trash_evaluation(&ctx.db, id)
        .await
        .unwrap();

    let rows = ctx.db.notifications_for_user(manager).await.unwrap();
    assert_eq!(rows.iter().filter(|n| n.tipo == "lixeira").count(), 1);
}

#[tokio::test]
async fn test_push_opt_in_does_not_block_the_operation() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let funcionario = client.create_test_user("user").await;
    let avaliador = client.create_test_user("manager").await;
    ctx.db.set_push_enabled(funcionario, true).await.unwrap();

    let payload = test_data::sample_evaluation(funcionario, avaliador, "2026-S1");
    avaliacao_api::service::evaluation::create_evaluation(&ctx.db, payload)
        .await
        .expect("creation must succeed despite dead delivery endpoints");

    // The webhook is unreachable, so the attempted push fails quietly and the
    // row keeps its delivery flags unset.
    let rows = ctx.db.notifications_for_user(funcionario).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tipo, "ciclo_abertura");
    assert!(!rows[0].enviada_push);
    assert!(!rows[0].enviada_email);
}

#[tokio::test]
async fn test_metrics_reflect_status_distribution() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let avaliador = client.create_test_user("manager").await;
    let mut ids = Vec::new();
    for _ in 0..4 {
        let funcionario = client.create_test_user("user").await;
        ids.push(seed_evaluation(&ctx, funcionario, avaliador, "2026-S1", 30).await);
    }

    for id in ids.iter().take(2) {
        ctx.db
            .update_status_checked(
                *id,
                EvaluationStatus::PendingResponse,
                EvaluationStatus::AwaitingManager,
            )
            .await
            .unwrap();
        ctx.db
            .update_status_checked(
                *id,
                EvaluationStatus::AwaitingManager,
                EvaluationStatus::Approved,
            )
            .await
            .unwrap();
    }

    let req = test::TestRequest::get()
        .uri("/avaliacoes/metricas")
        .insert_header(auth_header())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"], 4);
    assert_eq!(body["data"]["por_status"]["approved"], 2);
    assert_eq!(body["data"]["por_status"]["pending_response"], 2);
    assert_eq!(body["data"]["taxa_conclusao"], 0.5);
}

#[tokio::test]
async fn test_concurrent_style_stale_update_is_refused() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let funcionario = client.create_test_user("user").await;
    let avaliador = client.create_test_user("manager").await;
    let id = seed_evaluation(&ctx, funcionario, avaliador, "2026-S1", 30).await;

    ctx.db
        .update_status_checked(
            id,
            EvaluationStatus::PendingResponse,
            EvaluationStatus::AwaitingManager,
        )
        .await
        .unwrap();

    // A second writer still holding the old status loses.
    let stale = ctx
        .db
        .update_status_checked(
            id,
            EvaluationStatus::PendingResponse,
            EvaluationStatus::AwaitingManager,
        )
        .await;
    assert!(matches!(
        stale,
        Err(avaliacao_api::types::error::AppError::Precondition(_))
    ));
}
