use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS courses (
            course_id TEXT PRIMARY KEY NOT NULL,
            course_name TEXT NOT NULL DEFAULT '',
            instructor TEXT NOT NULL DEFAULT '',
            course_fee REAL NOT NULL DEFAULT 0,
            duration TEXT NOT NULL DEFAULT '',
            is_course_live BOOLEAN NOT NULL DEFAULT 0
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Every pipeline starts with an instructor match
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_courses_instructor ON courses (instructor)".to_owned(),
    ))
    .await?;

    Ok(())
}
