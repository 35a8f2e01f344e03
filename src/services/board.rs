//! Board storage: users and their saved board documents.
//!
//! DESIGN
//! ======
//! Login is a bare username: the first login creates the user row, later
//! logins return it. Each user id owns at most one board, stored whole as a
//! JSONB document and replaced on every save. Boards are keyed by id alone,
//! so a save does not require a user row. The analysis engine never
//! reads from here; clients send it board snapshots directly.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::analysis::Board;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("malformed board document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Row returned from user queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
}

// =============================================================================
// USERS
// =============================================================================

/// Return the user named `username`, creating it on first sight.
///
/// # Errors
///
/// Returns a database error if the upsert fails.
pub async fn get_or_create_user(pool: &PgPool, username: &str) -> Result<UserRow, BoardError> {
    let (id, username) = sqlx::query_as::<_, (Uuid, String)>(
        "INSERT INTO users (id, username) VALUES ($1, $2)
         ON CONFLICT (username) DO UPDATE SET username = EXCLUDED.username
         RETURNING id, username",
    )
    .bind(Uuid::new_v4())
    .bind(username)
    .fetch_one(pool)
    .await?;

    Ok(UserRow { id, username })
}

// =============================================================================
// BOARDS
// =============================================================================

/// Replace the stored board for `user_id`.
///
/// # Errors
///
/// Returns an error if the board cannot be encoded or the upsert fails.
pub async fn save_board(pool: &PgPool, user_id: Uuid, board: &Board) -> Result<(), BoardError> {
    let doc = serde_json::to_value(board)?;
    sqlx::query(
        "INSERT INTO boards (user_id, board, updated_at) VALUES ($1, $2, now())
         ON CONFLICT (user_id) DO UPDATE SET board = EXCLUDED.board, updated_at = now()",
    )
    .bind(user_id)
    .bind(doc)
    .execute(pool)
    .await?;

    info!(%user_id, cards = board.cards().count(), "board saved");
    Ok(())
}

/// Load the stored board for `user_id`, if any.
///
/// # Errors
///
/// Returns an error if the query fails or the stored document is not a board.
pub async fn load_board(pool: &PgPool, user_id: Uuid) -> Result<Option<Board>, BoardError> {
    let doc: Option<serde_json::Value> = sqlx::query_scalar("SELECT board FROM boards WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(doc.map(serde_json::from_value::<Board>).transpose()?)
}

/// Stored board for `user_id`, or the three-column starter board.
///
/// # Errors
///
/// See [`load_board`].
pub async fn load_board_or_starter(pool: &PgPool, user_id: Uuid) -> Result<Board, BoardError> {
    Ok(load_board(pool, user_id).await?.unwrap_or_else(Board::starter))
}

#[cfg(test)]
#[path = "board_test.rs"]
mod tests;
