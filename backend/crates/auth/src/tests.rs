//! Scenario tests for the auth crate
//! Run against the in-memory store; the PostgreSQL suite lives in `tests/`.

#[cfg(test)]
mod support {
    use std::sync::Arc;

    use crate::application::config::AuthConfig;
    use crate::application::service::AuthService;
    use crate::domain::value_object::user_id::UserId;
    use crate::infra::memory::MemoryAuthRepository;

    pub const ADMIN: &str = "perecarretero";
    pub const ADMIN_PASSWORD: &str = "MiContrasenaDePere123!";

    pub fn service(repo: &MemoryAuthRepository) -> AuthService<MemoryAuthRepository> {
        AuthService::new(Arc::new(repo.clone()), Arc::new(AuthConfig::development()))
    }

    /// Store with the default administrator provisioned
    pub async fn seeded() -> (MemoryAuthRepository, AuthService<MemoryAuthRepository>, UserId) {
        let repo = MemoryAuthRepository::new();
        let service = service(&repo);

        service
            .ensure_default_admin(ADMIN, ADMIN_PASSWORD)
            .await
            .unwrap();
        let user = service.authenticate(ADMIN, ADMIN_PASSWORD).await.unwrap();

        (repo, service, user.user_id)
    }
}

#[cfg(test)]
mod sign_in_tests {
    use super::support::*;
    use crate::domain::entity::{
        role::NewRole,
        user::{NewUser, RoleAssignment},
    };
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::{
        role_name::RoleName, user_name::UserName, user_password::UserPassword,
    };
    use crate::error::AuthError;
    use crate::infra::memory::MemoryAuthRepository;

    #[tokio::test]
    async fn test_correct_password_returns_user() {
        let (_, service, user_id) = seeded().await;

        let user = service.authenticate(ADMIN, ADMIN_PASSWORD).await.unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.user_name.as_str(), ADMIN);
    }

    #[tokio::test]
    async fn test_wrong_password_fails() {
        let (_, service, _) = seeded().await;

        let err = service.authenticate(ADMIN, "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_unknown_user_and_wrong_password_are_indistinguishable() {
        let (_, service, _) = seeded().await;

        let ghost = service.authenticate("ghost", "whatever").await.unwrap_err();
        let wrong = service.authenticate(ADMIN, "wrongpass").await.unwrap_err();

        assert!(matches!(ghost, AuthError::InvalidCredentials));
        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert_eq!(ghost.to_string(), wrong.to_string());
        assert_eq!(
            ghost.to_app_error().to_string(),
            wrong.to_app_error().to_string()
        );
    }

    #[tokio::test]
    async fn test_user_name_is_case_sensitive() {
        let (_, service, _) = seeded().await;

        let err = service
            .authenticate("PereCarretero", ADMIN_PASSWORD)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_malformed_user_name_fails_uniformly() {
        let (_, service, _) = seeded().await;

        let err = service.authenticate("", ADMIN_PASSWORD).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_inactive_user_cannot_sign_in() {
        let (repo, service, user_id) = seeded().await;
        assert!(repo.set_active(user_id, false).await);

        let err = service
            .authenticate(ADMIN, ADMIN_PASSWORD)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));

        // Still resolvable by id for display
        assert_eq!(service.username_for(user_id).await.unwrap().as_str(), ADMIN);
    }

    #[tokio::test]
    async fn test_legacy_bcrypt_hash_signs_in_and_is_upgraded() {
        let repo = MemoryAuthRepository::new();
        let service = service(&repo);
        let legacy = bcrypt::hash("ContrasenaAntigua99!", 4).unwrap();
        let user = NewUser::active(
            UserName::new("contable").unwrap(),
            UserPassword::from_db(legacy),
            RoleAssignment::Create(NewRole {
                role_name: RoleName::administrator(),
                description: None,
            }),
        );
        let created = UserRepository::create(&repo, &user).await.unwrap();
        assert!(created.password.needs_rehash());

        let signed_in = service
            .authenticate("contable", "ContrasenaAntigua99!")
            .await
            .unwrap();
        assert_eq!(signed_in.user_id, created.user_id);

        let stored = repo
            .find_active_by_user_name(&user.user_name)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.password.as_phc_string().starts_with("$argon2id$"));
        assert!(!stored.password.needs_rehash());

        // Same password keeps working against the new hash
        assert!(service.authenticate("contable", "ContrasenaAntigua99!").await.is_ok());
        assert!(matches!(
            service.authenticate("contable", "wrong").await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_dummy_hash_is_ready_once_service_exists() {
        let _service = service(&MemoryAuthRepository::new());
        assert!(platform::password::is_dummy_hash_ready());
    }
}

#[cfg(test)]
mod session_tests {
    use chrono::{Duration, Utc};
    use tokio::task::JoinSet;

    use super::support::*;
    use crate::domain::value_object::{session_token::SessionToken, user_id::UserId};
    use crate::error::AuthError;

    #[tokio::test]
    async fn test_issue_then_validate() {
        let (_, service, user_id) = seeded().await;

        let issued = service.issue_session(user_id).await.unwrap();
        assert_eq!(issued.token.as_str().len(), 86);
        assert!(issued.expires_at > Utc::now() + Duration::days(29));

        assert_eq!(service.resolve_session(&issued.token).await.unwrap(), user_id);
    }

    #[tokio::test]
    async fn test_new_session_supersedes_previous() {
        let (repo, service, user_id) = seeded().await;

        let first = service.issue_session(user_id).await.unwrap();
        let second = service.issue_session(user_id).await.unwrap();
        assert_ne!(first.token, second.token);

        assert!(matches!(
            service.resolve_session(&first.token).await,
            Err(AuthError::SessionInvalid)
        ));
        assert_eq!(service.resolve_session(&second.token).await.unwrap(), user_id);
        assert_eq!(repo.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_expired_session_is_invalid_and_swept() {
        let (repo, service, user_id) = seeded().await;

        let issued = service
            .issue_session_with_ttl(user_id, Duration::days(30))
            .await
            .unwrap();
        assert_eq!(service.resolve_session(&issued.token).await.unwrap(), user_id);

        assert!(
            repo.set_expiry(&issued.token, Utc::now() - Duration::seconds(1))
                .await
        );
        assert!(repo.contains_token(issued.token.as_str()).await);

        assert!(matches!(
            service.resolve_session(&issued.token).await,
            Err(AuthError::SessionInvalid)
        ));
        assert!(!repo.contains_token(issued.token.as_str()).await);
    }

    #[tokio::test]
    async fn test_validating_any_token_sweeps_expired_rows() {
        let (repo, service, user_id) = seeded().await;

        let issued = service.issue_session(user_id).await.unwrap();
        repo.set_expiry(&issued.token, Utc::now() - Duration::hours(1))
            .await;

        let unrelated = SessionToken::generate();
        assert!(service.resolve_session(&unrelated).await.is_err());

        assert!(!repo.contains_token(issued.token.as_str()).await);
        assert_eq!(repo.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_revoke() {
        let (_, service, user_id) = seeded().await;
        let issued = service.issue_session(user_id).await.unwrap();

        assert!(service.revoke_session(&issued.token).await.unwrap());
        assert!(matches!(
            service.resolve_session(&issued.token).await,
            Err(AuthError::SessionInvalid)
        ));

        // Idempotent
        assert!(!service.revoke_session(&issued.token).await.unwrap());
        assert!(
            !service
                .revoke_session(&SessionToken::generate())
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_end_session_is_best_effort() {
        let (repo, service, user_id) = seeded().await;
        let issued = service.issue_session(user_id).await.unwrap();

        service.end_session(&SessionToken::from_raw("garbage")).await;
        assert_eq!(repo.session_count().await, 1);

        service.end_session(&issued.token).await;
        assert_eq!(repo.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_invalid_tokens_are_uniform() {
        let (_, service, _) = seeded().await;

        for token in [
            SessionToken::generate(),
            SessionToken::from_raw(""),
            SessionToken::from_raw("tampered.token"),
        ] {
            let err = service.resolve_session(&token).await.unwrap_err();
            assert!(matches!(err, AuthError::SessionInvalid));
        }
    }

    #[tokio::test]
    async fn test_tampered_token_is_invalid() {
        let (_, service, user_id) = seeded().await;
        let issued = service.issue_session(user_id).await.unwrap();

        let mut tampered = issued.token.as_str().to_string();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert!(
            service
                .resolve_session(&SessionToken::from_raw(tampered))
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_issue_failures() {
        let (_, service, user_id) = seeded().await;

        assert!(matches!(
            service.issue_session(UserId::from_raw(9999)).await,
            Err(AuthError::IssueFailure)
        ));
        assert!(matches!(
            service
                .issue_session_with_ttl(user_id, Duration::zero())
                .await,
            Err(AuthError::IssueFailure)
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_issue_leaves_one_session() {
        let (repo, service, user_id) = seeded().await;

        let mut set = JoinSet::new();
        for _ in 0..16 {
            let service = service.clone();
            set.spawn(async move { service.issue_session(user_id).await });
        }

        let mut tokens = Vec::new();
        while let Some(result) = set.join_next().await {
            tokens.push(result.unwrap().unwrap().token);
        }

        assert_eq!(repo.session_count().await, 1);
        let live: Vec<_> = {
            let mut live = Vec::new();
            for token in &tokens {
                if repo.contains_token(token.as_str()).await {
                    live.push(token.clone());
                }
            }
            live
        };
        assert_eq!(live.len(), 1);
        assert_eq!(service.resolve_session(&live[0]).await.unwrap(), user_id);
    }

    #[tokio::test]
    async fn test_username_for() {
        let (_, service, user_id) = seeded().await;

        assert_eq!(service.username_for(user_id).await.unwrap().as_str(), ADMIN);
        assert!(matches!(
            service.username_for(UserId::from_raw(404)).await,
            Err(AuthError::UserNotFound)
        ));
    }
}

#[cfg(test)]
mod provision_tests {
    use super::support::*;
    use crate::domain::repository::{RoleRepository, UserRepository};
    use crate::domain::value_object::{role_name::RoleName, user_name::UserName};
    use crate::error::AuthError;
    use crate::infra::memory::MemoryAuthRepository;

    #[tokio::test]
    async fn test_first_run_creates_role_and_user() {
        let repo = MemoryAuthRepository::new();
        let service = service(&repo);

        let output = service
            .ensure_default_admin(ADMIN, ADMIN_PASSWORD)
            .await
            .unwrap();
        assert!(output.role_created);
        assert!(output.user_created);

        let role = RoleRepository::find_by_name(&repo, &RoleName::administrator())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(role.role_id, output.role_id);
        assert_eq!(
            role.description.as_deref(),
            Some("Acceso completo al sistema ERP")
        );
    }

    #[tokio::test]
    async fn test_rerun_is_idempotent() {
        let (_, service, user_id) = seeded().await;

        let output = service
            .ensure_default_admin(ADMIN, "AnotherPassword456!")
            .await
            .unwrap();
        assert!(!output.role_created);
        assert!(!output.user_created);

        // Original password kept
        let user = service.authenticate(ADMIN, ADMIN_PASSWORD).await.unwrap();
        assert_eq!(user.user_id, user_id);
        assert!(
            service
                .authenticate(ADMIN, "AnotherPassword456!")
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_second_admin_shares_role() {
        let (_, service, _) = seeded().await;

        let first = service
            .ensure_default_admin(ADMIN, ADMIN_PASSWORD)
            .await
            .unwrap();
        let second = service
            .ensure_default_admin("contable", "OtraContrasena789!")
            .await
            .unwrap();

        assert!(second.user_created);
        assert!(!second.role_created);
        assert_eq!(first.role_id, second.role_id);
    }

    #[tokio::test]
    async fn test_weak_password_aborts() {
        let repo = MemoryAuthRepository::new();
        let service = service(&repo);

        let err = service
            .ensure_default_admin(ADMIN, "short")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::PasswordValidation(_)));

        // Nothing half-provisioned
        assert!(
            RoleRepository::find_by_name(&repo, &RoleName::administrator())
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            !repo
                .exists_by_user_name(&UserName::new(ADMIN).unwrap())
                .await
                .unwrap()
        );

        // A later valid run starts from scratch
        let output = service
            .ensure_default_admin(ADMIN, ADMIN_PASSWORD)
            .await
            .unwrap();
        assert!(output.role_created);
        assert!(output.user_created);
    }

    #[tokio::test]
    async fn test_invalid_user_name_aborts() {
        let repo = MemoryAuthRepository::new();
        let service = service(&repo);

        let err = service
            .ensure_default_admin("  ", ADMIN_PASSWORD)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidUserName(_)));
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use tower::ServiceExt;

    use super::support::*;
    use crate::application::config::AuthConfig;
    use crate::infra::memory::MemoryAuthRepository;
    use crate::presentation::dto::{CurrentUserResponse, SessionStatusResponse, SignInResponse};
    use crate::presentation::router::auth_router_generic;

    async fn app() -> (MemoryAuthRepository, Router) {
        let (repo, _, _) = seeded().await;
        let router = auth_router_generic(repo.clone(), AuthConfig::development());
        (repo, router)
    }

    fn sign_in_request(user_name: &str, password: &str, remember_me: bool) -> Request<Body> {
        let body = serde_json::json!({
            "userName": user_name,
            "password": password,
            "rememberMe": remember_me,
        });
        Request::builder()
            .method("POST")
            .uri("/signin")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    fn set_cookie(response: &Response) -> Option<String> {
        response
            .headers()
            .get(header::SET_COOKIE)
            .map(|v| v.to_str().unwrap().to_string())
    }

    async fn sign_in(router: &Router, remember_me: bool) -> (Option<String>, SignInResponse) {
        let response = router
            .clone()
            .oneshot(sign_in_request(ADMIN, ADMIN_PASSWORD, remember_me))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = set_cookie(&response);
        let body = serde_json::from_slice(&body_bytes(response).await).unwrap();
        (cookie, body)
    }

    async fn status_with_cookie(router: &Router, token: &str) -> SessionStatusResponse {
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/status")
                    .header(header::COOKIE, format!("session_token={token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_sign_in_sets_browser_session_cookie() {
        let (_, router) = app().await;

        let (cookie, body) = sign_in(&router, false).await;
        let cookie = cookie.unwrap();

        assert!(cookie.starts_with(&format!("session_token={}", body.session_token)));
        assert!(cookie.contains("HttpOnly"));
        assert!(!cookie.contains("Max-Age"));
        assert_eq!(body.user_name, ADMIN);
        assert!(body.session_token.starts_with("bs."));
        assert!(!body.persistent);
    }

    #[tokio::test]
    async fn test_browser_sign_in_writes_no_session_row() {
        let (repo, router) = app().await;

        let (_, body) = sign_in(&router, false).await;
        assert_eq!(repo.session_count().await, 0);

        let status = status_with_cookie(&router, &body.session_token).await;
        assert!(status.authenticated);
        assert_eq!(status.user_id, Some(body.user_id));
    }

    #[tokio::test]
    async fn test_browser_sign_in_keeps_remembered_session() {
        let (repo, router) = app().await;

        let (_, remembered) = sign_in(&router, true).await;
        let (_, browser) = sign_in(&router, false).await;
        assert_ne!(remembered.session_token, browser.session_token);

        // The remembered device stays signed in
        assert!(repo.contains_token(&remembered.session_token).await);
        assert_eq!(repo.session_count().await, 1);
        let status = status_with_cookie(&router, &remembered.session_token).await;
        assert!(status.authenticated);
        assert_eq!(status.user_name.as_deref(), Some(ADMIN));

        // A second remembered sign-in still supersedes it
        let (_, again) = sign_in(&router, true).await;
        assert!(!repo.contains_token(&remembered.session_token).await);
        assert!(status_with_cookie(&router, &again.session_token).await.authenticated);
        assert!(!status_with_cookie(&router, &remembered.session_token).await.authenticated);
    }

    #[tokio::test]
    async fn test_browser_token_from_another_process_is_rejected() {
        let (repo, router) = app().await;
        let (_, body) = sign_in(&router, false).await;

        // Fresh config means a fresh random signing secret
        let restarted = auth_router_generic(repo, AuthConfig::development());
        let status = status_with_cookie(&restarted, &body.session_token).await;
        assert!(!status.authenticated);
    }

    #[tokio::test]
    async fn test_tampered_browser_token_is_rejected() {
        let (_, router) = app().await;
        let (_, body) = sign_in(&router, false).await;

        let mut tampered = body.session_token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert!(!status_with_cookie(&router, &tampered).await.authenticated);
    }

    #[tokio::test]
    async fn test_remember_me_sets_persistent_cookie() {
        let (_, router) = app().await;

        let (cookie, body) = sign_in(&router, true).await;
        assert!(cookie.unwrap().contains("Max-Age=2592000"));
        assert!(body.persistent);
    }

    #[tokio::test]
    async fn test_failed_sign_in_is_generic() {
        let (_, router) = app().await;

        let wrong = router
            .clone()
            .oneshot(sign_in_request(ADMIN, "wrong", false))
            .await
            .unwrap();
        let ghost = router
            .clone()
            .oneshot(sign_in_request("ghost", "whatever", false))
            .await
            .unwrap();

        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ghost.status(), StatusCode::UNAUTHORIZED);
        assert!(set_cookie(&wrong).is_none());
        assert_eq!(body_bytes(wrong).await, body_bytes(ghost).await);
    }

    #[tokio::test]
    async fn test_status_restores_session_from_cookie() {
        let (_, router) = app().await;
        let (_, signed_in) = sign_in(&router, true).await;

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/status")
                    .header(
                        header::COOKIE,
                        format!("session_token={}", signed_in.session_token),
                    )
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookie(&response).is_none());
        let status: SessionStatusResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(status.authenticated);
        assert_eq!(status.user_id, Some(signed_in.user_id));
        assert_eq!(status.user_name.as_deref(), Some(ADMIN));
    }

    #[tokio::test]
    async fn test_status_with_invalid_token_clears_cookie() {
        let (_, router) = app().await;

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/status")
                    .header(header::COOKIE, "session_token=stale")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookie(&response).unwrap().contains("Max-Age=0"));
        let status: SessionStatusResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(!status.authenticated);
        assert!(status.user_name.is_none());
    }

    #[tokio::test]
    async fn test_status_without_token() {
        let (_, router) = app().await;

        let response = router
            .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(set_cookie(&response).is_none());
        let status: SessionStatusResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(!status.authenticated);
    }

    #[tokio::test]
    async fn test_me_requires_session() {
        let (_, router) = app().await;

        let response = router
            .clone()
            .oneshot(Request::builder().uri("/me").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let (_, signed_in) = sign_in(&router, false).await;
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/me")
                    .header(
                        header::AUTHORIZATION,
                        format!("Bearer {}", signed_in.session_token),
                    )
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let me: CurrentUserResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(me.user_id, signed_in.user_id);
        assert_eq!(me.user_name, ADMIN);
    }

    #[tokio::test]
    async fn test_sign_out_revokes_and_clears_cookie() {
        let (repo, router) = app().await;
        let (_, signed_in) = sign_in(&router, true).await;
        assert!(repo.contains_token(&signed_in.session_token).await);

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/signout")
                    .header(
                        header::COOKIE,
                        format!("session_token={}", signed_in.session_token),
                    )
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(set_cookie(&response).unwrap().contains("Max-Age=0"));
        assert!(!repo.contains_token(&signed_in.session_token).await);
    }

    #[tokio::test]
    async fn test_sign_out_with_browser_token_clears_cookie() {
        let (repo, router) = app().await;
        let (_, remembered) = sign_in(&router, true).await;
        let (_, browser) = sign_in(&router, false).await;

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/signout")
                    .header(
                        header::COOKIE,
                        format!("session_token={}", browser.session_token),
                    )
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(set_cookie(&response).unwrap().contains("Max-Age=0"));
        assert!(repo.contains_token(&remembered.session_token).await);
    }

    #[tokio::test]
    async fn test_sign_out_without_session_still_succeeds() {
        let (_, router) = app().await;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/signout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
