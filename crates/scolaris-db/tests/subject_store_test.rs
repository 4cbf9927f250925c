//! Integration tests for subjects: per-school code uniqueness, the
//! kind enum, and the optional teacher reference.

use scolaris_core::error::ScolarisError;
use scolaris_core::models::school::CreateSchool;
use scolaris_core::models::subject::{CreateSubject, Subject, SubjectKind, UpdateSubject};
use scolaris_core::repository::{SchoolRepository, TenantScopedRepository};
use scolaris_db::{SurrealSchoolRepository, TenantStore};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

async fn setup() -> (Surreal<surrealdb::engine::local::Db>, Uuid) {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    scolaris_db::run_migrations(&db).await.unwrap();

    let schools = SurrealSchoolRepository::new(db.clone());
    let school = schools
        .create(CreateSchool {
            name: "Hillside Primary".into(),
            email: "office@hillside.example".into(),
        })
        .await
        .unwrap();

    (db, school.id)
}

fn physics(school_id: Uuid) -> CreateSubject {
    CreateSubject {
        school_id,
        name: "Physics".into(),
        code: "PHY-101".into(),
        kind: SubjectKind::Theory,
        teacher_id: None,
        sessions: 0,
    }
}

#[tokio::test]
async fn create_and_fetch_subject() {
    let (db, school_id) = setup().await;
    let store = TenantStore::new(db);

    let created: Subject = store.create(physics(school_id)).await.unwrap();
    assert_eq!(created.kind, SubjectKind::Theory);
    assert_eq!(created.sessions, 0);
    assert!(created.teacher_id.is_none());

    let listed: Vec<Subject> = store.list(school_id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].code, "PHY-101");
}

#[tokio::test]
async fn duplicate_code_rejected_within_school() {
    let (db, school_id) = setup().await;
    let store = TenantStore::new(db);

    let _: Subject = store.create(physics(school_id)).await.unwrap();

    let result: Result<Subject, _> = store
        .create(CreateSubject {
            name: "Physics Lab".into(),
            ..physics(school_id)
        })
        .await;

    assert!(matches!(
        result,
        Err(ScolarisError::Duplicate {
            entity: "subject",
            field: "code"
        })
    ));
}

#[tokio::test]
async fn same_code_allowed_across_schools() {
    let (db, school_a) = setup().await;

    let schools = SurrealSchoolRepository::new(db.clone());
    let school_b = schools
        .create(CreateSchool {
            name: "Riverside Academy".into(),
            email: "office@riverside.example".into(),
        })
        .await
        .unwrap()
        .id;

    let store = TenantStore::new(db);
    let _: Subject = store.create(physics(school_a)).await.unwrap();
    let other: Result<Subject, _> = store.create(physics(school_b)).await;
    assert!(other.is_ok());
}

#[tokio::test]
async fn update_assigns_teacher_and_kind() {
    let (db, school_id) = setup().await;
    let store = TenantStore::new(db);

    let created: Subject = store.create(physics(school_id)).await.unwrap();
    let teacher = Uuid::new_v4();

    let updated: Subject = store
        .update(
            school_id,
            created.id,
            UpdateSubject {
                kind: Some(SubjectKind::Practical),
                teacher_id: Some(teacher),
                sessions: Some(12),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.kind, SubjectKind::Practical);
    assert_eq!(updated.teacher_id, Some(teacher));
    assert_eq!(updated.sessions, 12);
    assert_eq!(updated.name, "Physics"); // untouched
    assert_eq!(updated.code, "PHY-101"); // untouched
}
