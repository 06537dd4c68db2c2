//! Table mapping for entities stored through [`PgRepository`](crate::PgRepository).

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use truckreg_core::Entity;
use truckreg_entity::truck::Truck;

/// A query that decodes rows into `T`.
pub type RecordQuery<'q, T> = QueryAs<'q, Postgres, T, PgArguments>;

/// Describes how an entity maps onto a table with an `id` identity column.
///
/// `COLUMNS` lists every column except `id`, in the order
/// [`Record::bind_columns`] binds their values.
pub trait Record: Entity + for<'r> FromRow<'r, PgRow> + Unpin + Sized {
    /// Table name.
    const TABLE: &'static str;

    /// Writable columns, excluding `id`.
    const COLUMNS: &'static [&'static str];

    /// Bind one value per entry of `COLUMNS`, in order.
    fn bind_columns<'q>(&'q self, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self>;
}

impl Record for Truck {
    const TABLE: &'static str = "trucks";
    const COLUMNS: &'static [&'static str] = &["model", "production_year", "model_year"];

    fn bind_columns<'q>(&'q self, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(self.model.as_str())
            .bind(self.production_year)
            .bind(self.model_year)
    }
}
