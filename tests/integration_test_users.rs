mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp, ADMIN_EMAIL, ADMIN_PASSWORD};
use serde_json::json;

#[tokio::test]
async fn test_first_account_bootstraps_admin_and_logs_in() {
    let app = TestApp::new().await;

    let res = app.register(None, "Admin", "1100000000", ADMIN_EMAIL, ADMIN_PASSWORD, Some("admin")).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = parse_body(res).await;
    assert_eq!(body["msg"], "Usuário criado com sucesso!");
    assert!(body["user_id"].as_i64().unwrap() > 0);

    let login = app.request("POST", "/login", None, Some(json!({"email": ADMIN_EMAIL, "senha": ADMIN_PASSWORD}))).await;
    assert_eq!(login.status(), StatusCode::OK);
    let login_body = parse_body(login).await;
    assert_eq!(login_body["papel"], "admin");
    assert_eq!(login_body["nome"], "Admin");
    assert!(!login_body["access_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_only_admins_create_admins_after_bootstrap() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (_, user) = app.user_token("Bia", "1100000001", "bia@x.com").await;

    let anon = app.register(None, "Eve", "1100000002", "eve@x.com", "pw", Some("admin")).await;
    assert_eq!(anon.status(), StatusCode::FORBIDDEN);

    let by_user = app.register(Some(&user), "Eve", "1100000002", "eve@x.com", "pw", Some("admin")).await;
    assert_eq!(by_user.status(), StatusCode::FORBIDDEN);

    let by_admin = app.register(Some(&admin), "Eve", "1100000002", "eve@x.com", "pw", Some("ADMIN")).await;
    assert_eq!(by_admin.status(), StatusCode::CREATED);

    let eve = app.login("eve@x.com", "pw").await;
    let list = app.request("GET", "/usuarios", Some(&eve), None).await;
    assert_eq!(list.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_registration_validation_and_duplicates() {
    let app = TestApp::new().await;

    let missing = app.request("POST", "/cadastro/usuario", None, Some(json!({"nome": "A", "email": "a@a.com", "senha": "x"}))).await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(missing).await["msg"], "Nome, telefone, email e senha são obrigatórios.");

    let blank = app.register(None, "   ", "1", "a@a.com", "x", None).await;
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);

    let bad_role = app.register(None, "A", "1", "a@a.com", "x", Some("gerente")).await;
    assert_eq!(bad_role.status(), StatusCode::BAD_REQUEST);

    let long_phone = app.register(None, "A", "123456789012345678901", "a@a.com", "x", None).await;
    assert_eq!(long_phone.status(), StatusCode::BAD_REQUEST);

    assert_eq!(app.register(None, "Ana", "111", " ana@x.com ", "pw", None).await.status(), StatusCode::CREATED);

    let dup_email = app.register(None, "Outra", "222", "ana@x.com", "pw", None).await;
    assert_eq!(dup_email.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(dup_email).await["msg"], "Usuário já existente!");

    let dup_phone = app.register(None, "Outra", "111", "outra@x.com", "pw", None).await;
    assert_eq!(dup_phone.status(), StatusCode::BAD_REQUEST);

    let dup_name = app.register(None, "Ana", "333", "ana2@x.com", "pw", None).await;
    assert_eq!(dup_name.status(), StatusCode::BAD_REQUEST);

    let malformed = app.request("POST", "/cadastro/usuario", None, Some(json!({"nome": 5}))).await;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    assert!(parse_body(malformed).await["msg"].is_string());
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = TestApp::new().await;
    app.admin_token().await;

    let wrong_pw = app.request("POST", "/login", None, Some(json!({"email": ADMIN_EMAIL, "senha": "nope"}))).await;
    assert_eq!(wrong_pw.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(parse_body(wrong_pw).await["msg"], "Credenciais inválidas");

    let unknown = app.request("POST", "/login", None, Some(json!({"email": "ghost@x.com", "senha": "x"}))).await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_edits_self_but_not_others() {
    let app = TestApp::new().await;
    app.admin_token().await;
    let (bia_id, bia) = app.user_token("Bia", "1100000001", "bia@x.com").await;
    let (caio_id, _) = app.user_token("Caio", "1100000002", "caio@x.com").await;

    let res = app.request("PUT", &format!("/editar/usuario/{}", bia_id), Some(&bia), Some(json!({
        "nome": " Beatriz ",
        "telefone": "",
        "senha": "new-pass"
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["nome"], "Beatriz");
    assert_eq!(body["telefone"], "1100000001");
    assert_eq!(body["papel"], "usuario");
    assert_eq!(body["status"], true);

    app.login("bia@x.com", "new-pass").await;

    let other = app.request("PUT", &format!("/editar/usuario/{}", caio_id), Some(&bia), Some(json!({"nome": "X"}))).await;
    assert_eq!(other.status(), StatusCode::FORBIDDEN);

    let clash = app.request("PUT", &format!("/editar/usuario/{}", bia_id), Some(&bia), Some(json!({"email": "caio@x.com"}))).await;
    assert_eq!(clash.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(clash).await["msg"], "Este email já está cadastrado!");

    let promote = app.request("PUT", &format!("/editar/usuario/{}", bia_id), Some(&bia), Some(json!({"papel": "admin"}))).await;
    assert_eq!(promote.status(), StatusCode::FORBIDDEN);

    let no_token = app.request("PUT", &format!("/editar/usuario/{}", bia_id), None, Some(json!({"nome": "Y"}))).await;
    assert_eq!(no_token.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_status_coercion_on_users() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (bia_id, _) = app.user_token("Bia", "1100000001", "bia@x.com").await;
    let uri = format!("/editar/usuario/{}", bia_id);

    let off = app.request("PUT", &uri, Some(&admin), Some(json!({"status": "2"}))).await;
    assert_eq!(off.status(), StatusCode::OK);
    assert_eq!(parse_body(off).await["status"], false);

    let disabled_login = app.request("POST", "/login", None, Some(json!({"email": "bia@x.com", "senha": "user-pass"}))).await;
    assert_eq!(disabled_login.status(), StatusCode::FORBIDDEN);

    // Unrecognized values are ignored for users.
    let ignored = app.request("PUT", &uri, Some(&admin), Some(json!({"status": "talvez"}))).await;
    assert_eq!(ignored.status(), StatusCode::OK);
    assert_eq!(parse_body(ignored).await["status"], false);

    let on = app.request("PUT", &uri, Some(&admin), Some(json!({"status": 1}))).await;
    assert_eq!(parse_body(on).await["status"], true);

    let missing = app.request("PUT", "/editar/usuario/9999", Some(&admin), Some(json!({"nome": "Z"}))).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_list_is_admin_only_and_hides_hashes() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (_, user) = app.user_token("Bia", "1100000001", "bia@x.com").await;

    let forbidden = app.request("GET", "/usuarios", Some(&user), None).await;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    let res = app.request("GET", "/usuarios", Some(&admin), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let users = body["usuarios"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));
    assert!(users.iter().any(|u| u["email"] == "bia@x.com" && u["papel"] == "usuario"));

    let garbage = app.request("GET", "/usuarios", Some("not-a-jwt"), None).await;
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);
}
