//! Administrative account operations

use chrono::Utc;
use sqlx::Row;

use crate::error::DbError;
use crate::models::{Admin, NewAdmin};
use crate::repository::{Database, map_unique_violation};
use crate::utils::normalize_email;

impl Database {
    // ==================== Admin Operations ====================

    /// Insert a new administrative account
    ///
    /// Duplicate detection rides on the unique index on `email` rather than a
    /// pre-check, so two concurrent inserts for the same address resolve to
    /// one success and one `DbError::Duplicate`.
    pub async fn insert_admin(&self, admin: NewAdmin) -> Result<Admin, DbError> {
        let now = Utc::now();
        let email = normalize_email(&admin.email);

        let result = sqlx::query(
            r#"
            INSERT INTO admins (name, email, password_hash, role, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&admin.name)
        .bind(&email)
        .bind(&admin.password_hash)
        .bind(admin.role.as_str())
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &format!("Admin '{}' already exists", email)))?;

        let id: i64 = result.get("id");

        Ok(Admin {
            id,
            name: admin.name,
            email,
            password_hash: admin.password_hash,
            role: admin.role,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get an admin by email (case-insensitive)
    pub async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>, DbError> {
        let result = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, role, created_at, updated_at
            FROM admins
            WHERE email = ?
            "#,
        )
        .bind(normalize_email(email))
        .fetch_optional(&self.pool)
        .await?;

        result.map(|row| Admin::try_from(&row).map_err(DbError::from)).transpose()
    }

    /// Get an admin by ID
    pub async fn get_admin_by_id(&self, id: i64) -> Result<Option<Admin>, DbError> {
        let result = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, role, created_at, updated_at
            FROM admins
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        result.map(|row| Admin::try_from(&row).map_err(DbError::from)).transpose()
    }

    /// Check if any admins exist
    pub async fn has_admins(&self) -> Result<bool, DbError> {
        let result = sqlx::query("SELECT COUNT(*) as count FROM admins")
            .fetch_one(&self.pool)
            .await?;
        let count: i64 = result.get("count");
        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{AdminRole, NewAdmin};
    use crate::repository::Database;
    use crate::DbError;

    async fn test_db() -> (Database, tempfile::NamedTempFile) {
        let file = tempfile::NamedTempFile::new().unwrap();
        let url = format!("sqlite:{}?mode=rwc", file.path().display());
        let db = Database::new(&url).await.unwrap();
        (db, file)
    }

    fn new_admin(email: &str) -> NewAdmin {
        NewAdmin {
            name: "Test Admin".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            role: AdminRole::Admin,
        }
    }

    #[tokio::test]
    async fn test_insert_and_fetch_admin() {
        let (db, _file) = test_db().await;

        let admin = db.insert_admin(new_admin("a@x.com")).await.unwrap();
        assert!(admin.id > 0);
        assert_eq!(admin.email, "a@x.com");

        let fetched = db.get_admin_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(fetched.id, admin.id);
        assert_eq!(fetched.role, AdminRole::Admin);

        let by_id = db.get_admin_by_id(admin.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_email_is_case_normalized() {
        let (db, _file) = test_db().await;

        let admin = db.insert_admin(new_admin("Mixed@Case.COM")).await.unwrap();
        assert_eq!(admin.email, "mixed@case.com");

        // Lookup with any casing finds the same record
        let fetched = db.get_admin_by_email("MIXED@case.com").await.unwrap();
        assert!(fetched.is_some());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let (db, _file) = test_db().await;

        db.insert_admin(new_admin("dup@x.com")).await.unwrap();

        let result = db.insert_admin(new_admin("dup@x.com")).await;
        assert!(matches!(result, Err(DbError::Duplicate(_))));

        // Different casing is still the same address
        let result = db.insert_admin(new_admin("DUP@X.COM")).await;
        assert!(matches!(result, Err(DbError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_signup_one_winner() {
        let (db, _file) = test_db().await;

        let a = db.clone();
        let b = db.clone();
        let t1 = tokio::spawn(async move { a.insert_admin(new_admin("race@x.com")).await });
        let t2 = tokio::spawn(async move { b.insert_admin(new_admin("race@x.com")).await });

        let r1 = t1.await.unwrap();
        let r2 = t2.await.unwrap();

        // Exactly one insert wins, the other sees the unique constraint
        assert_eq!(r1.is_ok() as u8 + r2.is_ok() as u8, 1);
        let loser = if r1.is_err() { r1 } else { r2 };
        assert!(matches!(loser, Err(DbError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_has_admins() {
        let (db, _file) = test_db().await;
        assert!(!db.has_admins().await.unwrap());
        db.insert_admin(new_admin("one@x.com")).await.unwrap();
        assert!(db.has_admins().await.unwrap());
    }
}
