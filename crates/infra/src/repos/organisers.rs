use async_trait::async_trait;
use sqlx::QueryBuilder;

use super::{OrganiserRepository, RepoError, RepoResult};
use crate::db::Db;
use crate::filter::{OrganiserField, Predicate};
use crate::models::{NewOrganiser, OrganiserRow};

#[derive(Clone)]
pub struct PgOrganiserRepo {
    pool: Db,
}

impl PgOrganiserRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrganiserRepository for PgOrganiserRepo {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<OrganiserRow>> {
        let row = sqlx::query_as::<_, OrganiserRow>(
            r#"
            SELECT id, name, logo, description
            FROM organisers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_many(&self, ids: &[i64]) -> RepoResult<Vec<OrganiserRow>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, OrganiserRow>(
            r#"
            SELECT id, name, logo, description
            FROM organisers
            WHERE id = ANY($1::bigint[])
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_all(
        &self,
        predicate: &Predicate<OrganiserField>,
    ) -> RepoResult<Vec<OrganiserRow>> {
        let mut query =
            QueryBuilder::new("SELECT id, name, logo, description FROM organisers");
        predicate.push_where(&mut query);
        query.push(" ORDER BY id ASC");

        let rows = query
            .build_query_as::<OrganiserRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn insert(&self, organiser: NewOrganiser) -> RepoResult<OrganiserRow> {
        let row = sqlx::query_as::<_, OrganiserRow>(
            r#"
            INSERT INTO organisers (name, logo, description)
            VALUES ($1, $2, $3)
            RETURNING id, name, logo, description
            "#,
        )
        .bind(&organiser.name)
        .bind(&organiser.logo)
        .bind(&organiser.description)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(organiser_id = row.id, "inserted organiser");
        Ok(row)
    }

    async fn save(&self, organiser: &OrganiserRow) -> RepoResult<OrganiserRow> {
        sqlx::query_as::<_, OrganiserRow>(
            r#"
            UPDATE organisers
            SET name = $2,
                logo = $3,
                description = $4
            WHERE id = $1
            RETURNING id, name, logo, description
            "#,
        )
        .bind(organiser.id)
        .bind(&organiser.name)
        .bind(&organiser.logo)
        .bind(&organiser.description)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepoError::NotFound(organiser.id))
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM organisers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}
