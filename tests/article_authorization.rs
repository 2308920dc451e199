// tests/article_authorization.rs
use quire::application::commands::articles::{
    CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand,
};
use quire::application::error::ApplicationError;
use quire::application::ports::time::Clock;
use quire::application::queries::articles::GetArticleQuery;
use quire::domain::article::{
    ArticleAction, ArticleRepository, ArticleStatus, Vote, decide, vote,
};
use quire::domain::user::{Principal, Role};

mod support;

use support::{ArticleBuilder, FixedClock, TestApp, at, principal};

fn is_denial(err: &ApplicationError) -> bool {
    matches!(err, ApplicationError::Forbidden(msg) if msg == "forbidden")
}

#[tokio::test]
async fn decision_depends_only_on_authorship() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "pw-owner", Role::Author).await;
    let other = app.seed_user("other@example.com", "pw-other", Role::Author).await;
    let admin = app.seed_user("admin@example.com", "pw-admin", Role::Admin).await;
    let category = app.seed_category("news").await;
    let article = app
        .seed_article(ArticleBuilder::new(owner.id.unwrap(), category).build())
        .await;

    for action in [ArticleAction::View, ArticleAction::Edit, ArticleAction::Delete] {
        assert!(decide(action, &article, &principal(&owner)));
        assert!(!decide(action, &article, &principal(&other)));
        assert!(!decide(action, &article, &principal(&admin)));
        assert!(!decide(action, &article, &Principal::Anonymous));
        assert!(!decide(action, &article, &Principal::service("indexer")));
    }
}

#[tokio::test]
async fn voter_abstains_outside_its_vocabulary() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "pw-owner", Role::Author).await;
    let category = app.seed_category("news").await;
    let article = app
        .seed_article(ArticleBuilder::new(owner.id.unwrap(), category).build())
        .await;

    assert_eq!(vote("PUBLISH", Some(&article), &principal(&owner)), Vote::Abstain);
    assert_eq!(vote("EDIT", None, &principal(&owner)), Vote::Abstain);
    assert_eq!(vote("EDIT", Some(&article), &principal(&owner)), Vote::Granted);
    assert_eq!(vote("EDIT", Some(&article), &Principal::Anonymous), Vote::Denied);
}

#[tokio::test]
async fn owner_can_view_edit_and_delete() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "pw-owner", Role::Author).await;
    let category = app.seed_category("news").await;
    let article = app
        .seed_article(ArticleBuilder::new(owner.id.unwrap(), category).build())
        .await;
    let id = article.id.map(i64::from).unwrap();
    let me = principal(&owner);

    let viewed = app
        .services
        .article_queries
        .get_article(&me, GetArticleQuery { id })
        .await
        .unwrap();
    assert_eq!(viewed.title, "Test Article");

    let edited = app
        .services
        .article_commands
        .update_article(
            &me,
            UpdateArticleCommand {
                id,
                title: Some("Edited".into()),
                content: None,
                status: Some(ArticleStatus::Published),
                category_id: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.title, "Edited");
    assert_eq!(edited.status, ArticleStatus::Published);
    assert_eq!(edited.updated_at, FixedClock.now());
    assert_eq!(edited.created_at, at(0));

    app.services
        .article_commands
        .delete_article(&me, DeleteArticleCommand { id })
        .await
        .unwrap();
    assert!(
        ArticleRepository::find_by_id(app.store.as_ref(), article.id.unwrap())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn admin_lists_everything_but_cannot_act_on_others_articles() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "pw-owner", Role::Author).await;
    let admin = app.seed_user("admin@example.com", "pw-admin", Role::Admin).await;
    let category = app.seed_category("news").await;
    let article = app
        .seed_article(ArticleBuilder::new(owner.id.unwrap(), category).build())
        .await;
    let id = article.id.map(i64::from).unwrap();
    let admin = principal(&admin);

    let err = app
        .services
        .article_queries
        .get_article(&admin, GetArticleQuery { id })
        .await
        .unwrap_err();
    assert!(is_denial(&err));

    let err = app
        .services
        .article_commands
        .delete_article(&admin, DeleteArticleCommand { id })
        .await
        .unwrap_err();
    assert!(is_denial(&err));

    let stored = ArticleRepository::find_by_id(app.store.as_ref(), article.id.unwrap())
        .await
        .unwrap();
    assert_eq!(stored, Some(article));
}

#[tokio::test]
async fn denied_edit_leaves_the_article_untouched() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", "pw-owner", Role::Author).await;
    let intruder = app.seed_user("intruder@example.com", "pw-intruder", Role::Author).await;
    let category = app.seed_category("news").await;
    let article = app
        .seed_article(ArticleBuilder::new(owner.id.unwrap(), category).build())
        .await;

    let err = app
        .services
        .article_commands
        .update_article(
            &principal(&intruder),
            UpdateArticleCommand {
                id: article.id.map(i64::from).unwrap(),
                title: Some("Hijacked".into()),
                content: None,
                status: None,
                category_id: None,
            },
        )
        .await
        .unwrap_err();
    assert!(is_denial(&err));

    let stored = ArticleRepository::find_by_id(app.store.as_ref(), article.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.title.as_str(), "Test Article");
}

#[tokio::test]
async fn create_sets_author_and_equal_timestamps() {
    let app = TestApp::new();
    let author = app.seed_user("writer@example.com", "pw-writer", Role::Author).await;
    let category = app.seed_category("news").await;

    let created = app
        .services
        .article_commands
        .create_article(
            &principal(&author),
            CreateArticleCommand {
                title: "Fresh".into(),
                content: "Words".into(),
                category_id: i64::from(category),
                status: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(created.author_id, author.id.map(i64::from).unwrap());
    assert_eq!(created.status, ArticleStatus::Draft);
    assert_eq!(created.created_at, created.updated_at);
}

#[tokio::test]
async fn anonymous_cannot_create_and_unknown_category_is_not_found() {
    let app = TestApp::new();
    let author = app.seed_user("writer@example.com", "pw-writer", Role::Author).await;

    let command = || CreateArticleCommand {
        title: "Fresh".into(),
        content: "Words".into(),
        category_id: 99,
        status: None,
    };

    let err = app
        .services
        .article_commands
        .create_article(&Principal::Anonymous, command())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));

    let err = app
        .services
        .article_commands
        .create_article(&principal(&author), command())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
