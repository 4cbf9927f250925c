//! Integration tests for the school (tenant) repository.

use scolaris_core::error::ScolarisError;
use scolaris_core::models::school::CreateSchool;
use scolaris_core::repository::SchoolRepository;
use scolaris_db::SurrealSchoolRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    scolaris_db::run_migrations(&db).await.unwrap();
    db
}

#[tokio::test]
async fn create_and_get_school() {
    let db = setup().await;
    let repo = SurrealSchoolRepository::new(db);

    let school = repo
        .create(CreateSchool {
            name: "Hillside Primary".into(),
            email: "office@hillside.example".into(),
        })
        .await
        .unwrap();

    assert_eq!(school.name, "Hillside Primary");

    let fetched = repo.get_by_id(school.id).await.unwrap();
    assert_eq!(fetched.id, school.id);
    assert_eq!(fetched.email, "office@hillside.example");
}

#[tokio::test]
async fn duplicate_email_rejected() {
    let db = setup().await;
    let repo = SurrealSchoolRepository::new(db);

    repo.create(CreateSchool {
        name: "Hillside Primary".into(),
        email: "office@hillside.example".into(),
    })
    .await
    .unwrap();

    let result = repo
        .create(CreateSchool {
            name: "Hillside Annex".into(),
            email: "office@hillside.example".into(),
        })
        .await;

    assert!(matches!(
        result,
        Err(ScolarisError::Duplicate {
            entity: "school",
            field: "email"
        })
    ));
}

#[tokio::test]
async fn unknown_school_is_not_found() {
    let db = setup().await;
    let repo = SurrealSchoolRepository::new(db);

    let result = repo.get_by_id(Uuid::new_v4()).await;
    assert!(matches!(result, Err(ScolarisError::NotFound { .. })));
}
