//! Database rows for the preference table.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::store::schema;

/// A stored preference value.
#[derive(Debug, Clone, Queryable, Selectable, Getters)]
#[diesel(table_name = schema::preferences)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Preference {
    profile: String,
    key: String,
    value: String,
    updated_at: NaiveDateTime,
}

/// Insertable preference row. `updated_at` is filled in by the database.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::preferences)]
pub struct NewPreference {
    profile: String,
    key: String,
    value: String,
}
