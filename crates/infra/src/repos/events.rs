use async_trait::async_trait;
use sqlx::QueryBuilder;

use super::{classify, EventRepository, RepoError, RepoResult};
use crate::db::Db;
use crate::filter::{EventField, Predicate};
use crate::models::{EventRow, NewEvent};

const EVENT_COLUMNS: &str = "id, organiser_id, name, description, venue, venue_location, \
                             availability, date, image, price";

#[derive(Clone)]
pub struct PgEventRepo {
    pool: Db,
}

impl PgEventRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepo {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<EventRow>> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_all(&self, predicate: &Predicate<EventField>) -> RepoResult<Vec<EventRow>> {
        let mut query = QueryBuilder::new(format!("SELECT {EVENT_COLUMNS} FROM events"));
        predicate.push_where(&mut query);
        query.push(" ORDER BY id ASC");

        let rows = query
            .build_query_as::<EventRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn find_by_organisers(&self, organiser_ids: &[i64]) -> RepoResult<Vec<EventRow>> {
        if organiser_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE organiser_id = ANY($1::bigint[]) ORDER BY id ASC"
        ))
        .bind(organiser_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert(&self, event: NewEvent) -> RepoResult<EventRow> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            r#"
            INSERT INTO events (organiser_id, name, description, venue, venue_location,
                                availability, date, image, price)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(event.organiser_id)
        .bind(&event.name)
        .bind(&event.description)
        .bind(&event.venue)
        .bind(&event.venue_location)
        .bind(event.availability)
        .bind(&event.date)
        .bind(&event.image)
        .bind(event.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, event.organiser_id))?;

        tracing::debug!(event_id = row.id, "inserted event");
        Ok(row)
    }

    async fn save(&self, event: &EventRow) -> RepoResult<EventRow> {
        sqlx::query_as::<_, EventRow>(&format!(
            r#"
            UPDATE events
            SET organiser_id = $2,
                name = $3,
                description = $4,
                venue = $5,
                venue_location = $6,
                availability = $7,
                date = $8,
                image = $9,
                price = $10
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(event.id)
        .bind(event.organiser_id)
        .bind(&event.name)
        .bind(&event.description)
        .bind(&event.venue)
        .bind(&event.venue_location)
        .bind(event.availability)
        .bind(&event.date)
        .bind(&event.image)
        .bind(event.price)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify(e, event.organiser_id))?
        .ok_or(RepoError::NotFound(event.id))
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}
