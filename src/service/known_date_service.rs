use crate::errors::ApiResult;
use crate::model::date_validation::{parse_valid_date_time, validate, DateValidationResult};
use crate::model::known_date::KnownDate;
use chrono::Utc;
use sqlx::{query, query_as, query_scalar, Sqlite, SqlitePool, Transaction};

impl KnownDate {
    pub async fn exists(pool: &SqlitePool, value: &str) -> ApiResult<bool> {
        let found = query_scalar::<_, i64>("SELECT EXISTS(SELECT 1 FROM known_dates WHERE value = ?)")
            .bind(value)
            .fetch_one(pool)
            .await?;

        Ok(found != 0)
    }

    pub async fn get_all(pool: &SqlitePool) -> ApiResult<Vec<KnownDate>> {
        let dates = query_as::<_, KnownDate>("SELECT id, value, created_at FROM known_dates ORDER BY id")
            .fetch_all(pool)
            .await?;

        Ok(dates)
    }

    pub async fn get_count(pool: &SqlitePool) -> ApiResult<i64> {
        let count = query_scalar::<_, i64>("SELECT COUNT(*) FROM known_dates")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Inserts the given values, skipping the ones already present.
    /// Returns how many rows were actually added.
    pub async fn insert_many(pool: &SqlitePool, values: &[String]) -> ApiResult<u64> {
        let mut tx = pool.begin().await?;
        let inserted = Self::insert_values(&mut tx, values).await?;
        tx.commit().await?;
        Ok(inserted)
    }

    /// Makes `values` the whole dataset, in one transaction.
    pub async fn replace_all(pool: &SqlitePool, values: &[String]) -> ApiResult<u64> {
        let mut tx = pool.begin().await?;
        query("DELETE FROM known_dates").execute(&mut *tx).await?;
        let inserted = Self::insert_values(&mut tx, values).await?;
        tx.commit().await?;
        Ok(inserted)
    }

    async fn insert_values(tx: &mut Transaction<'_, Sqlite>, values: &[String]) -> ApiResult<u64> {
        let now = Utc::now().timestamp_millis();
        let mut inserted = 0;

        for value in values {
            inserted += query("INSERT INTO known_dates (value, created_at) VALUES (?, ?) ON CONFLICT(value) DO NOTHING")
                .bind(value)
                .bind(now)
                .execute(&mut **tx)
                .await?
                .rows_affected();
        }

        Ok(inserted)
    }

    pub async fn clear(pool: &SqlitePool) -> ApiResult<u64> {
        let rv = query("DELETE FROM known_dates").execute(pool).await?;
        Ok(rv.rows_affected())
    }
}

impl DateValidationResult {
    /// `validate` with the existence lookup done against the database.
    /// The lookup only runs for inputs that parse.
    pub async fn check(pool: &SqlitePool, raw_input: &str) -> ApiResult<Self> {
        let found = match parse_valid_date_time(raw_input) {
            Ok(_) => KnownDate::exists(pool, raw_input).await?,
            Err(_) => false,
        };

        Ok(validate(raw_input, |_| found))
    }
}
