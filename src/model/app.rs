use sea_orm::DatabaseConnection;

/// Shared handler state: the database connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool handed to repositories per request.
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
