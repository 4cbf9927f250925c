//! Store descriptor for expenses.

use chrono::{DateTime, Utc};
use scolaris_core::models::expense::{CreateExpense, Expense, UpdateExpense};
use surrealdb::Connection;
use surrealdb::method::Query;
use surrealdb_types::SurrealValue;

use crate::error::DbError;
use crate::store::{SurrealResource, UniqueIndex, parse_uuid};

#[derive(Debug, SurrealValue)]
pub struct ExpenseRow {
    record_id: String,
    school_id: String,
    title: String,
    amount: f64,
    incurred_on: DateTime<Utc>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SurrealResource for Expense {
    const TABLE: &'static str = "expense";
    const UNIQUE: &'static [UniqueIndex] = &[];
    const CREATE_SET: &'static str = "school_id = $school_id, title = $title, \
         amount = $amount, incurred_on = $incurred_on, description = $description";

    type Row = ExpenseRow;

    fn bind_create<'r, C: Connection>(query: Query<'r, C>, input: CreateExpense) -> Query<'r, C> {
        query
            .bind(("school_id", input.school_id.to_string()))
            .bind(("title", input.title))
            .bind(("amount", input.amount))
            .bind(("incurred_on", input.incurred_on))
            .bind(("description", input.description))
    }

    fn update_sets(input: &UpdateExpense) -> Vec<&'static str> {
        let mut sets = Vec::new();
        if input.title.is_some() {
            sets.push("title = $title");
        }
        if input.amount.is_some() {
            sets.push("amount = $amount");
        }
        if input.incurred_on.is_some() {
            sets.push("incurred_on = $incurred_on");
        }
        if input.description.is_some() {
            sets.push("description = $description");
        }
        sets
    }

    fn bind_update<'r, C: Connection>(
        mut query: Query<'r, C>,
        input: UpdateExpense,
    ) -> Query<'r, C> {
        if let Some(title) = input.title {
            query = query.bind(("title", title));
        }
        if let Some(amount) = input.amount {
            query = query.bind(("amount", amount));
        }
        if let Some(incurred_on) = input.incurred_on {
            query = query.bind(("incurred_on", incurred_on));
        }
        if let Some(description) = input.description {
            query = query.bind(("description", description));
        }
        query
    }

    fn from_row(row: ExpenseRow) -> Result<Expense, DbError> {
        Ok(Expense {
            id: parse_uuid("record", &row.record_id)?,
            school_id: parse_uuid("school", &row.school_id)?,
            title: row.title,
            amount: row.amount,
            incurred_on: row.incurred_on,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
