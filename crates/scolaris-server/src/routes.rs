//! Route definitions and the generic per-resource handler set.
//!
//! Every resource kind mounts the same four handlers under its own
//! prefix. Tenant and record identifiers arrive as path/query strings
//! and are validated here, so a malformed id surfaces as the uniform
//! 400 envelope instead of an extractor rejection.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use scolaris_core::models::category::Category;
use scolaris_core::models::expense::Expense;
use scolaris_core::models::reason::Reason;
use scolaris_core::models::school::{CreateSchoolPayload, School};
use scolaris_core::models::stock_item::StockItem;
use scolaris_core::models::subject::Subject;
use scolaris_core::models::subject_group::SubjectGroup;
use scolaris_core::repository::{SchoolRepository, TenantScopedRepository};
use scolaris_core::resource::TenantPatch;
use scolaris_core::validate;
use scolaris_db::SurrealResource;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::envelope::Envelope;
use crate::error::AppResult;
use crate::state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/schools", school_routes())
        .nest("/categories", resource_routes::<Category>())
        .nest("/stock-items", resource_routes::<StockItem>())
        .nest("/subject-groups", resource_routes::<SubjectGroup>())
        .nest("/subjects", resource_routes::<Subject>())
        .nest("/expenses", resource_routes::<Expense>())
        .nest("/reasons", resource_routes::<Reason>())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The uniform CRUD surface for one resource kind.
///
/// `GET /{id}` interprets the segment as the school id (listing);
/// `PUT`/`DELETE` interpret it as the resource id.
fn resource_routes<R: SurrealResource>() -> Router<AppState> {
    Router::new()
        .route("/", post(create::<R>))
        .route("/{id}", get(list::<R>).put(update::<R>).delete(remove::<R>))
}

async fn list<R: SurrealResource>(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
) -> AppResult<Json<Envelope<Vec<R>>>> {
    let school_id = validate::ident(&school_id)?;
    let items: Vec<R> = state.store.list(school_id).await?;
    Ok(Json(Envelope::listing(
        format!("{} list retrieved", R::ENTITY),
        items,
    )))
}

async fn create<R: SurrealResource>(
    State(state): State<AppState>,
    Json(payload): Json<R::CreatePayload>,
) -> AppResult<(StatusCode, Json<Envelope<R>>)> {
    let input = R::validate_create(payload)?;
    let record: R = state.store.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::record(format!("{} created", R::ENTITY), record)),
    ))
}

async fn update<R: SurrealResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<R::UpdatePayload>,
) -> AppResult<Json<Envelope<R>>> {
    let id = validate::ident(&id)?;
    let TenantPatch { school_id, patch } = R::validate_update(payload)?;
    let record: R = state.store.update(school_id, id, patch).await?;
    Ok(Json(Envelope::record(
        format!("{} updated", R::ENTITY),
        record,
    )))
}

#[derive(Debug, Deserialize)]
struct TenantQuery {
    school_id: Option<String>,
}

async fn remove<R: SurrealResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<TenantQuery>,
) -> AppResult<Json<Envelope<()>>> {
    let id = validate::ident(&id)?;
    let school_id = validate::tenant_ref("school_id", query.school_id)?;
    let _removed: R = state.store.delete(school_id, id).await?;
    Ok(Json(Envelope::message(format!("{} deleted", R::ENTITY))))
}

// -----------------------------------------------------------------------
// Schools (tenant provisioning)
// -----------------------------------------------------------------------

fn school_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_school))
        .route("/{id}", get(get_school))
}

async fn create_school(
    State(state): State<AppState>,
    Json(payload): Json<CreateSchoolPayload>,
) -> AppResult<(StatusCode, Json<Envelope<School>>)> {
    let input = payload.validate()?;
    let school = state.schools.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::record("school created", school)),
    ))
}

async fn get_school(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Envelope<School>>> {
    let id = validate::ident(&id)?;
    let school = state.schools.get_by_id(id).await?;
    Ok(Json(Envelope::record("school retrieved", school)))
}
