use super::{DeleteResult, IUserRepo};
use registro_domain::{User, UserId};
use sqlx::{FromRow, SqlitePool};

pub struct SqliteUserRepo {
    pool: SqlitePool,
}

impl SqliteUserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    id: i64,
    nombre: String,
    apellido: String,
    edad: i64,
}

impl Into<User> for UserRaw {
    fn into(self) -> User {
        User {
            id: UserId::new(self.id),
            nombre: self.nombre,
            apellido: self.apellido,
            edad: self.edad as i32,
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for SqliteUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        // An unassigned id is bound as NULL so sqlite allocates the next one
        let id = user.id.is_assigned().then(|| user.id.inner());
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO users(id, nombre, apellido, edad)
            VALUES(?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&user.nombre)
        .bind(&user.apellido)
        .bind(user.edad)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        let users: Vec<UserRaw> = sqlx::query_as(
            r#"
            SELECT id, nombre, apellido, edad FROM users
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    async fn delete_by_id(&self, user_id: UserId) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = ?
            "#,
        )
        .bind(user_id.inner())
        .execute(&self.pool)
        .await?;

        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }

    async fn delete(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = ? AND nombre = ? AND apellido = ? AND edad = ?
            "#,
        )
        .bind(user.id.inner())
        .bind(&user.nombre)
        .bind(&user.apellido)
        .bind(user.edad)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET nombre = ?,
            apellido = ?,
            edad = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.nombre)
        .bind(&user.apellido)
        .bind(user.edad)
        .bind(user.id.inner())
        .execute(&self.pool)
        .await?
        .rows_affected();
        Ok(())
    }
}
