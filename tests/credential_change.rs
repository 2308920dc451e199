// tests/credential_change.rs
use quire::application::commands::users::{
    ChangePasswordCommand, LoginUserCommand, MAX_PASSWORD_LENGTH,
};
use quire::application::error::ApplicationError;
use quire::application::ports::security::PasswordHasher;
use quire::domain::user::{Principal, Role};

mod support;

use support::{StrictPasswordHasher, TestApp, principal};

fn command(current: &str, new: &str, confirmation: &str) -> ChangePasswordCommand {
    ChangePasswordCommand {
        current_password: current.into(),
        new_password: new.into(),
        new_password_confirmation: confirmation.into(),
    }
}

#[tokio::test]
async fn correct_claim_and_valid_password_are_accepted() {
    let app = TestApp::new();
    let user = app.seed_user("writer@example.com", "old-secret", Role::Author).await;

    app.services
        .user_commands
        .change_password(&principal(&user), command("old-secret", "abc123x", "abc123x"))
        .await
        .unwrap();

    let stored = app.stored_hash(&user).await;
    let hasher = StrictPasswordHasher;
    assert!(hasher.verify("abc123x", &stored).await.unwrap());
    assert!(!hasher.verify("old-secret", &stored).await.unwrap());
}

#[tokio::test]
async fn six_character_password_is_enough() {
    let app = TestApp::new();
    let user = app.seed_user("writer@example.com", "old-secret", Role::Author).await;

    app.services
        .user_commands
        .change_password(&principal(&user), command("old-secret", "plum42", "plum42"))
        .await
        .unwrap();

    assert_eq!(app.stored_hash(&user).await, "hash::plum42");
}

#[tokio::test]
async fn longest_allowed_password_is_accepted_and_one_more_is_not() {
    let app = TestApp::new();
    let user = app.seed_user("writer@example.com", "old-secret", Role::Author).await;
    let me = principal(&user);

    let longest = "x".repeat(MAX_PASSWORD_LENGTH);
    app.services
        .user_commands
        .change_password(&me, command("old-secret", &longest, &longest))
        .await
        .unwrap();
    assert_eq!(app.stored_hash(&user).await, format!("hash::{longest}"));

    let too_long = "y".repeat(MAX_PASSWORD_LENGTH + 1);
    let err = app
        .services
        .user_commands
        .change_password(&me, command(&longest, &too_long, &too_long))
        .await
        .unwrap_err();
    match err {
        ApplicationError::ValidationFailed(fields) => assert!(fields.has("new_password")),
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
    assert_eq!(app.stored_hash(&user).await, format!("hash::{longest}"));
}

#[tokio::test]
async fn wrong_current_password_is_a_field_scoped_mismatch() {
    let app = TestApp::new();
    let user = app.seed_user("writer@example.com", "old-secret", Role::Author).await;
    let writes_before = app.users.writes();

    let err = app
        .services
        .user_commands
        .change_password(&principal(&user), command("guess", "abc123x", "abc123x"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::CredentialMismatch {
            field: "current_password"
        }
    ));
    assert_eq!(app.stored_hash(&user).await, "hash::old-secret");
    assert_eq!(app.users.writes(), writes_before);
}

#[tokio::test]
async fn invalid_new_passwords_are_reported_per_field() {
    let app = TestApp::new();
    let user = app.seed_user("writer@example.com", "old-secret", Role::Author).await;
    let me = principal(&user);
    let too_long = "x".repeat(4097);

    let cases = [
        command("old-secret", "abc12", "abc12"),
        command("old-secret", "", ""),
        command("old-secret", &too_long, &too_long),
        command("old-secret", "123456", "123456"),
        command("old-secret", "abc123x", "abc123y"),
    ];

    for case in cases {
        let err = app
            .services
            .user_commands
            .change_password(&me, case)
            .await
            .unwrap_err();
        match err {
            ApplicationError::ValidationFailed(fields) => assert!(fields.has("new_password")),
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }

    assert_eq!(app.stored_hash(&user).await, "hash::old-secret");
    assert_eq!(app.users.writes(), 0);
}

#[tokio::test]
async fn confirmation_mismatch_uses_its_own_message() {
    let app = TestApp::new();
    let user = app.seed_user("writer@example.com", "old-secret", Role::Author).await;

    let err = app
        .services
        .user_commands
        .change_password(&principal(&user), command("old-secret", "abc123x", "abc123y"))
        .await
        .unwrap_err();

    let ApplicationError::ValidationFailed(fields) = err else {
        panic!("expected ValidationFailed");
    };
    assert!(
        fields
            .0
            .iter()
            .any(|e| e.field == "new_password" && e.message == "password_mismatch")
    );
}

#[tokio::test]
async fn form_errors_win_over_a_wrong_current_password() {
    let app = TestApp::new();
    let user = app.seed_user("writer@example.com", "old-secret", Role::Author).await;

    let err = app
        .services
        .user_commands
        .change_password(&principal(&user), command("guess", "abc", "abc"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::ValidationFailed(_)));
}

#[tokio::test]
async fn blank_current_password_is_a_validation_error() {
    let app = TestApp::new();
    let user = app.seed_user("writer@example.com", "old-secret", Role::Author).await;

    let err = app
        .services
        .user_commands
        .change_password(&principal(&user), command("  ", "abc123x", "abc123x"))
        .await
        .unwrap_err();
    let ApplicationError::ValidationFailed(fields) = err else {
        panic!("expected ValidationFailed");
    };
    assert!(fields.has("current_password"));
}

#[tokio::test]
async fn anonymous_callers_are_refused() {
    let app = TestApp::new();
    let err = app
        .services
        .user_commands
        .change_password(&Principal::Anonymous, command("a", "abc123x", "abc123x"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
}

#[tokio::test]
async fn service_principals_have_no_password_to_change() {
    let app = TestApp::new();
    let err = app
        .services
        .user_commands
        .change_password(&Principal::service("importer"), command("a", "abc123x", "abc123x"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::UnsupportedPrincipal(_)));

    let err = app
        .services
        .user_commands
        .upgrade_password(&Principal::service("importer"), "whatever")
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::UnsupportedPrincipal(_)));
}

#[tokio::test]
async fn failed_persistence_means_the_change_did_not_happen() {
    let app = TestApp::new();
    let user = app.seed_user("writer@example.com", "old-secret", Role::Author).await;
    app.users.fail_password_writes();

    let err = app
        .services
        .user_commands
        .change_password(&principal(&user), command("old-secret", "abc123x", "abc123x"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(_)));
    assert_eq!(app.stored_hash(&user).await, "hash::old-secret");
}

#[tokio::test]
async fn login_upgrades_outdated_hashes() {
    let app = TestApp::new();
    let user = app.seed_user("writer@example.com", "unused", Role::Author).await;
    let mut legacy = user.clone();
    legacy.set_password(quire::domain::user::PasswordHash::new("legacy::s3cret!").unwrap());
    app.services.user_commands.save(legacy).await.unwrap();

    let result = app
        .services
        .user_commands
        .login(LoginUserCommand {
            email: "writer@example.com".into(),
            password: "s3cret!".into(),
        })
        .await
        .unwrap();

    assert_eq!(result.user.email, "writer@example.com");
    assert_eq!(app.stored_hash(&user).await, "hash::s3cret!");

    let authenticated = app.tokens.authenticate(&result.token.token).await.unwrap();
    assert_eq!(authenticated.id, user.id.unwrap());
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = TestApp::new();
    app.seed_user("writer@example.com", "right", Role::Author).await;

    let err = app
        .services
        .user_commands
        .login(LoginUserCommand {
            email: "writer@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .err()
        .unwrap();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
}
