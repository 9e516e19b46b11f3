use diesel::connection::SimpleConnection;
use diesel::SqliteConnection;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS words (
    word_id TEXT PRIMARY KEY NOT NULL,
    language_id TEXT NOT NULL,
    text TEXT NOT NULL,
    translation TEXT NOT NULL DEFAULT '',
    part_of_speech TEXT,
    difficulty INTEGER NOT NULL DEFAULT 3
);

CREATE INDEX IF NOT EXISTS idx_words_language ON words (language_id);

CREATE TABLE IF NOT EXISTS word_progress (
    user_id TEXT NOT NULL,
    word_id TEXT NOT NULL REFERENCES words (word_id),
    current_interval INTEGER NOT NULL DEFAULT 1,
    ease_factor DOUBLE NOT NULL DEFAULT 2.5,
    repetitions INTEGER NOT NULL DEFAULT 0,
    next_review_date TIMESTAMP NOT NULL,
    last_review_date TIMESTAMP,
    correct_streak INTEGER NOT NULL DEFAULT 0,
    total_reviews INTEGER NOT NULL DEFAULT 0,
    average_response_time DOUBLE,
    created_at TIMESTAMP NOT NULL,
    updated_at TIMESTAMP NOT NULL,
    PRIMARY KEY (user_id, word_id)
);

CREATE INDEX IF NOT EXISTS idx_word_progress_due ON word_progress (user_id, next_review_date);
"#;

/// Creates the tables if they do not exist yet.
pub fn run(conn: &mut SqliteConnection) -> Result<(), diesel::result::Error> {
    conn.batch_execute(SCHEMA_SQL)
}
