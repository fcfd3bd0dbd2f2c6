/*
 * Responsibility
 * - kittens テーブル向け SQLx 操作
 * - PgPool を受け取り create/get/delete を提供
 * - DB エラーは RepoError で返す
 */
use async_trait::async_trait;
use sqlx::PgPool;

use crate::repos::{
    error::RepoError,
    kitten_repo::{KittenRepo, KittenRow, NewKitten},
};

#[derive(Clone, Debug)]
pub struct PgKittenRepo {
    pool: PgPool,
}

impl PgKittenRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KittenRepo for PgKittenRepo {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn create(&self, kitten: NewKitten) -> Result<KittenRow, RepoError> {
        let row = sqlx::query_as::<_, KittenRow>(
            r#"
            INSERT INTO kittens (name, age, color, "ownerId")
            VALUES ($1, $2, $3, $4)
            RETURNING "kittenId", name, age, color, "ownerId", "createdAt"
            "#,
        )
        .bind(&kitten.name)
        .bind(kitten.age)
        .bind(&kitten.color)
        .bind(kitten.owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn get(&self, kitten_id: i64) -> Result<Option<KittenRow>, RepoError> {
        let row = sqlx::query_as::<_, KittenRow>(
            r#"
            SELECT "kittenId", name, age, color, "ownerId", "createdAt"
            FROM kittens
            WHERE "kittenId" = $1
            "#,
        )
        .bind(kitten_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete_owned(&self, kitten_id: i64, owner_id: i64) -> Result<bool, RepoError> {
        let result = sqlx::query(
            r#"
            DELETE FROM kittens
            WHERE "kittenId" = $1 AND "ownerId" = $2
            "#,
        )
        .bind(kitten_id)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
