use diesel::prelude::*;

use crate::data::DbPool;
use crate::data::models::{NewWord, ProgressError, WordProgress, WordProgressRow, WordRef};
use crate::schema::{word_progress, words};

/// Storage for per-user review history.
pub trait ProgressRepository: Send + Sync {
    fn load(&self, user_id: &str, word_id: &str) -> Result<Option<WordProgress>, ProgressError>;

    /// Inserts or replaces the record for `(user_id, word_id)`.
    fn save(&self, progress: &WordProgress) -> Result<(), ProgressError>;

    fn list_for_user(
        &self,
        user_id: &str,
        language_id: Option<&str>,
    ) -> Result<Vec<WordProgress>, ProgressError>;
}

/// Words the scheduler may need to know about.
pub trait WordCatalog: Send + Sync {
    fn find_word(&self, word_id: &str) -> Result<Option<WordRef>, ProgressError>;

    fn upsert_word(&self, word: &NewWord) -> Result<(), ProgressError>;
}

#[derive(Clone)]
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ProgressRepository for SqliteRepository {
    fn load(&self, user_id: &str, word_id: &str) -> Result<Option<WordProgress>, ProgressError> {
        let mut conn = self.pool.get()?;

        let row = word_progress::table
            .inner_join(words::table)
            .filter(word_progress::user_id.eq(user_id))
            .filter(word_progress::word_id.eq(word_id))
            .select((WordProgressRow::as_select(), words::difficulty))
            .first::<(WordProgressRow, i32)>(&mut conn)
            .optional()?;

        Ok(row.map(|(row, difficulty)| row.into_progress(difficulty)))
    }

    fn save(&self, progress: &WordProgress) -> Result<(), ProgressError> {
        let mut conn = self.pool.get()?;
        let row = WordProgressRow::from(progress);

        diesel::insert_into(word_progress::table)
            .values(&row)
            .on_conflict((word_progress::user_id, word_progress::word_id))
            .do_update()
            .set(&row)
            .execute(&mut conn)?;

        Ok(())
    }

    fn list_for_user(
        &self,
        user_id: &str,
        language_id: Option<&str>,
    ) -> Result<Vec<WordProgress>, ProgressError> {
        let mut conn = self.pool.get()?;

        let mut query = word_progress::table
            .inner_join(words::table)
            .filter(word_progress::user_id.eq(user_id))
            .select((WordProgressRow::as_select(), words::difficulty))
            .into_boxed();

        if let Some(language_id) = language_id {
            query = query.filter(words::language_id.eq(language_id));
        }

        let rows = query
            .order_by(word_progress::next_review_date.asc())
            .load::<(WordProgressRow, i32)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(row, difficulty)| row.into_progress(difficulty))
            .collect())
    }
}

impl WordCatalog for SqliteRepository {
    fn find_word(&self, word_id: &str) -> Result<Option<WordRef>, ProgressError> {
        let mut conn = self.pool.get()?;

        let difficulty = words::table
            .filter(words::word_id.eq(word_id))
            .select(words::difficulty)
            .first::<i32>(&mut conn)
            .optional()?;

        Ok(difficulty.map(|difficulty| WordRef { difficulty }))
    }

    fn upsert_word(&self, word: &NewWord) -> Result<(), ProgressError> {
        let mut conn = self.pool.get()?;

        diesel::insert_into(words::table)
            .values(word)
            .on_conflict(words::word_id)
            .do_update()
            .set(word)
            .execute(&mut conn)?;

        Ok(())
    }
}
