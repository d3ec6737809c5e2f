//! Intern application operations

use chrono::Utc;
use sqlx::Row;

use crate::error::DbError;
use crate::models::{Intern, NewIntern};
use crate::repository::{Database, map_unique_violation};
use crate::utils::normalize_email;

impl Database {
    // ==================== Intern Operations ====================

    /// Insert a new intern application
    pub async fn insert_intern(&self, intern: NewIntern) -> Result<Intern, DbError> {
        let now = Utc::now();
        let email = normalize_email(&intern.email);
        let skills_json = serde_json::to_string(&intern.skills)
            .map_err(|e| DbError::Serialization(format!("Failed to encode skills: {}", e)))?;

        let result = sqlx::query(
            r#"
            INSERT INTO interns (name, email, phone_number, college, course, year_of_study,
                                 skills, resume_url, linkedin_profile, github_profile, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&intern.name)
        .bind(&email)
        .bind(&intern.phone_number)
        .bind(&intern.college)
        .bind(&intern.course)
        .bind(intern.year_of_study)
        .bind(&skills_json)
        .bind(&intern.resume_url)
        .bind(&intern.linkedin_profile)
        .bind(&intern.github_profile)
        .bind(now.to_rfc3339())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, &format!("Intern response for '{}' already exists", email))
        })?;

        let id: i64 = result.get("id");

        Ok(Intern {
            id,
            name: intern.name,
            email,
            phone_number: intern.phone_number,
            college: intern.college,
            course: intern.course,
            year_of_study: intern.year_of_study,
            skills: intern.skills,
            resume_url: intern.resume_url,
            linkedin_profile: intern.linkedin_profile,
            github_profile: intern.github_profile,
            created_at: now,
        })
    }

    /// Get an intern application by email
    pub async fn get_intern_by_email(&self, email: &str) -> Result<Option<Intern>, DbError> {
        let result = sqlx::query(
            r#"
            SELECT id, name, email, phone_number, college, course, year_of_study,
                   skills, resume_url, linkedin_profile, github_profile, created_at
            FROM interns
            WHERE email = ?
            "#,
        )
        .bind(normalize_email(email))
        .fetch_optional(&self.pool)
        .await?;

        result.map(|row| Intern::try_from(&row).map_err(DbError::from)).transpose()
    }

    /// List all intern applications
    pub async fn list_interns(&self) -> Result<Vec<Intern>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, phone_number, college, course, year_of_study,
                   skills, resume_url, linkedin_profile, github_profile, created_at
            FROM interns
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| Intern::try_from(row).map_err(DbError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::models::NewIntern;
    use crate::repository::Database;
    use crate::DbError;

    async fn test_db() -> (Database, tempfile::NamedTempFile) {
        let file = tempfile::NamedTempFile::new().unwrap();
        let url = format!("sqlite:{}?mode=rwc", file.path().display());
        let db = Database::new(&url).await.unwrap();
        (db, file)
    }

    fn new_intern(email: &str) -> NewIntern {
        NewIntern {
            name: "Intern Applicant".to_string(),
            email: email.to_string(),
            phone_number: "+1-555-0100".to_string(),
            college: "State University".to_string(),
            course: "Computer Science".to_string(),
            year_of_study: 3,
            skills: vec!["rust".to_string(), "sql".to_string()],
            resume_url: "https://example.com/resume.pdf".to_string(),
            linkedin_profile: String::new(),
            github_profile: String::new(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_list_interns() {
        let (db, _file) = test_db().await;

        let intern = db.insert_intern(new_intern("i1@x.com")).await.unwrap();
        assert!(intern.id > 0);
        assert_eq!(intern.skills, vec!["rust", "sql"]);

        db.insert_intern(new_intern("i2@x.com")).await.unwrap();

        let all = db.list_interns().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_skills_round_trip() {
        let (db, _file) = test_db().await;

        db.insert_intern(new_intern("skills@x.com")).await.unwrap();
        let fetched = db.get_intern_by_email("skills@x.com").await.unwrap().unwrap();
        assert_eq!(fetched.skills, vec!["rust", "sql"]);
    }

    #[tokio::test]
    async fn test_duplicate_intern_rejected() {
        let (db, _file) = test_db().await;

        db.insert_intern(new_intern("dup@x.com")).await.unwrap();
        let result = db.insert_intern(new_intern("Dup@X.com")).await;
        assert!(matches!(result, Err(DbError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_get_missing_intern() {
        let (db, _file) = test_db().await;
        assert!(db.get_intern_by_email("nobody@x.com").await.unwrap().is_none());
    }
}
