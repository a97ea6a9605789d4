//! User repository for all MySQL operations on the `usuario` table.
//!
//! Identifiers arrive exactly as they appeared in the request path and are
//! bound as string parameters; MySQL performs the comparison. Only the static
//! column names from [`crate::constants`] are ever spliced into SQL text.

use async_trait::async_trait;
use log::{debug, info};
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::{MySql, QueryBuilder};

use crate::config::Config;
use crate::constants::{
    COL_EMAIL, COL_ID, COL_LOGIN, COL_NAME, COL_NATIONAL_ID, COL_PASSWORD, TABLE_USERS,
};
use crate::models::{NewUser, User, UserChanges};
use crate::repositories::StoreError;

/// Storage seam for user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create the table and its unique email index when they do not exist.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a record and return the identifier assigned by storage.
    ///
    /// Fails with [`StoreError::DuplicateEmail`] when the email is taken.
    async fn insert(&self, user: &NewUser) -> Result<u64, StoreError>;

    /// Apply a change-set. Returns `false` when no record has this id.
    ///
    /// A record whose values are rewritten unchanged still counts as found.
    async fn update(&self, id: &str, changes: &UserChanges) -> Result<bool, StoreError>;

    /// Remove a record. Returns `false` when no record has this id.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

/// [`UserRepository`] backed by a MySQL connection pool.
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool using the database settings in `config`.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        info!(
            "Connecting to MySQL at {}:{} (database: {}, max_connections: {})",
            config.db_host, config.db_port, config.database_name, config.db_max_connections
        );

        let options = MySqlConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .username(&config.db_user)
            .password(&config.db_password)
            .database(&config.database_name);

        let pool = MySqlPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }

    async fn exists(&self, id: &str) -> Result<bool, StoreError> {
        let sql = format!("SELECT 1 FROM {TABLE_USERS} WHERE {COL_ID} = ?");
        let row: Option<(i64,)> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}

// The id is cast so that tables created with a signed key still decode into `u64`.
fn select_users_where(column: &str) -> String {
    format!(
        "SELECT CAST({COL_ID} AS UNSIGNED) AS {COL_ID}, \
         {COL_NAME}, {COL_LOGIN}, {COL_PASSWORD}, {COL_NATIONAL_ID}, {COL_EMAIL} \
         FROM {TABLE_USERS} WHERE {column} = ?"
    )
}

fn insert_user_sql() -> String {
    format!(
        "INSERT INTO {TABLE_USERS} ({COL_NAME}, {COL_LOGIN}, {COL_PASSWORD}, {COL_NATIONAL_ID}, {COL_EMAIL}) \
         VALUES (?, ?, ?, ?, ?)"
    )
}

/// Build `UPDATE ... SET` over the supplied columns only, every value bound.
fn update_query(id: &str, changes: &UserChanges) -> QueryBuilder<'static, MySql> {
    let mut builder: QueryBuilder<MySql> = QueryBuilder::new("UPDATE ");
    builder.push(TABLE_USERS).push(" SET ");
    let mut assignments = builder.separated(", ");
    for (column, value) in changes.columns() {
        assignments
            .push(column)
            .push_unseparated(" = ")
            .push_bind_unseparated(value.to_string());
    }
    builder
        .push(" WHERE ")
        .push(COL_ID)
        .push(" = ")
        .push_bind(id.to_string());
    builder
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        info!("Ensuring table `{}` exists...", TABLE_USERS);
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {TABLE_USERS} (\
                {COL_ID} BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY, \
                {COL_NAME} VARCHAR(255) NOT NULL, \
                {COL_LOGIN} VARCHAR(255) NOT NULL, \
                {COL_PASSWORD} VARCHAR(255) NOT NULL, \
                {COL_NATIONAL_ID} VARCHAR(32) NOT NULL, \
                {COL_EMAIL} VARCHAR(255) NOT NULL, \
                UNIQUE KEY uq_{TABLE_USERS}_{COL_EMAIL} ({COL_EMAIL})\
            )"
        );
        sqlx::query(&sql).execute(&self.pool).await?;
        info!("Table `{}` ready", TABLE_USERS);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        debug!("Repository: Finding user by ID: {}", id);
        let sql = select_users_where(COL_ID);
        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        debug!("Repository: Finding user by email");
        let sql = select_users_where(COL_EMAIL);
        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert(&self, user: &NewUser) -> Result<u64, StoreError> {
        let sql = insert_user_sql();
        let result = sqlx::query(&sql)
            .bind(&user.name)
            .bind(&user.login)
            .bind(&user.password_hash)
            .bind(&user.national_id)
            .bind(&user.email)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id())
    }

    async fn update(&self, id: &str, changes: &UserChanges) -> Result<bool, StoreError> {
        if changes.is_empty() {
            return self.exists(id).await;
        }

        debug!(
            "Repository: Updating user {} (columns: {:?})",
            id,
            changes
                .columns()
                .iter()
                .map(|(column, _)| *column)
                .collect::<Vec<_>>()
        );

        // sqlx connects with CLIENT_FOUND_ROWS: rows matched are counted, so a
        // rewrite of identical values still reports the record.
        let result = update_query(id, changes).build().execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let sql = format!("DELETE FROM {TABLE_USERS} WHERE {COL_ID} = ?");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
