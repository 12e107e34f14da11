//! Database repository for the content document and aspirations.
//!
//! Content writes run in a transaction: read the stored document, apply the
//! action, write it back, bump the revision.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{Aspiration, AspirationSubmission, ContentDocument, WriteAction};

/// Revision information for change detection.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision_id: i64,
    pub generated_at: String,
}

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the current revision ID.
    pub async fn get_revision_id(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT revision_id FROM meta WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("revision_id"))
    }

    /// Get revision info.
    pub async fn get_revision_info(&self) -> Result<RevisionInfo, AppError> {
        let row = sqlx::query("SELECT revision_id, generated_at FROM meta WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(RevisionInfo {
            revision_id: row.get("revision_id"),
            generated_at: row.get("generated_at"),
        })
    }

    // ==================== CONTENT OPERATIONS ====================

    /// Get the stored content document.
    pub async fn get_document(&self) -> Result<ContentDocument, AppError> {
        let row = sqlx::query("SELECT document FROM content WHERE id = 1")
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("No content document stored".to_string()))?;

        let json: String = row.get("document");
        serde_json::from_str(&json).map_err(|e| {
            tracing::error!("Stored content document is corrupt: {}", e);
            AppError::Internal(format!("Stored content document is corrupt: {}", e))
        })
    }

    /// Apply a write action to the stored document and return the new revision.
    pub async fn apply_write(&self, action: WriteAction) -> Result<i64, AppError> {
        let tag = action.tag();
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query("SELECT document FROM content WHERE id = 1")
            .fetch_optional(&mut *tx)
            .await?;
        let mut document = match row {
            Some(row) => {
                let json: String = row.get("document");
                serde_json::from_str::<ContentDocument>(&json).map_err(|e| {
                    AppError::Internal(format!("Stored content document is corrupt: {}", e))
                })?
            }
            None => crate::content::default_document(),
        };

        document.apply_write(action);
        let json = serde_json::to_string(&document)
            .map_err(|e| AppError::Internal(format!("Failed to encode document: {}", e)))?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO content (id, document, updated_at) VALUES (1, ?, ?)
             ON CONFLICT(id) DO UPDATE SET document = excluded.document, updated_at = excluded.updated_at",
        )
        .bind(&json)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE meta SET revision_id = revision_id + 1, generated_at = ? WHERE id = 1")
            .bind(&now)
            .execute(&mut *tx)
            .await?;

        let revision: i64 = sqlx::query("SELECT revision_id FROM meta WHERE id = 1")
            .fetch_one(&mut *tx)
            .await?
            .get("revision_id");

        tx.commit().await?;
        tracing::info!("Applied {} (revision {})", tag, revision);
        Ok(revision)
    }

    // ==================== ASPIRATION OPERATIONS ====================

    /// Store a validated aspiration.
    pub async fn create_aspiration(
        &self,
        submission: &AspirationSubmission,
    ) -> Result<Aspiration, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let contact = submission.contact.as_deref().map(str::trim).filter(|s| !s.is_empty());

        sqlx::query(
            "INSERT INTO aspirations (id, name, student_id, department, message, contact, attachment_name, submitted_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(submission.name.trim())
        .bind(submission.student_id.trim())
        .bind(submission.department.trim())
        .bind(submission.message.trim())
        .bind(contact)
        .bind(&submission.attachment_name)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Aspiration {
            id,
            name: submission.name.trim().to_string(),
            student_id: submission.student_id.trim().to_string(),
            department: submission.department.trim().to_string(),
            message: submission.message.trim().to_string(),
            contact: contact.map(str::to_string),
            attachment_name: submission.attachment_name.clone(),
            submitted_at: now,
        })
    }

    /// List aspirations, newest first.
    pub async fn list_aspirations(&self) -> Result<Vec<Aspiration>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, student_id, department, message, contact, attachment_name, submitted_at FROM aspirations ORDER BY submitted_at DESC, rowid DESC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Aspiration {
                id: row.get("id"),
                name: row.get("name"),
                student_id: row.get("student_id"),
                department: row.get("department"),
                message: row.get("message"),
                contact: row.get("contact"),
                attachment_name: row.get("attachment_name"),
                submitted_at: row.get("submitted_at"),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_document;
    use crate::db::init_database;
    use crate::models::{Collection, HeroBackground};
    use tempfile::TempDir;

    async fn repo() -> (Repository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_database(&temp_dir.path().join("test.sqlite"))
            .await
            .unwrap();
        (Repository::new(pool), temp_dir)
    }

    #[tokio::test]
    async fn test_fresh_database_serves_default() {
        let (repo, _dir) = repo().await;

        assert_eq!(repo.get_document().await.unwrap(), default_document());
        assert_eq!(repo.get_revision_id().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_apply_write_bumps_revision() {
        let (repo, _dir) = repo().await;

        let first = repo
            .apply_write(WriteAction::UpdateHeroBackground(HeroBackground {
                background_image: "hero.jpg".to_string(),
            }))
            .await
            .unwrap();
        let second = repo
            .apply_write(WriteAction::UpdateCollection(Collection::News(vec![])))
            .await
            .unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        let doc = repo.get_document().await.unwrap();
        assert_eq!(doc.hero.background_image, "hero.jpg");
        assert!(doc.news.is_empty());
        assert_eq!(doc.gallery, default_document().gallery);
    }

    #[tokio::test]
    async fn test_reopen_keeps_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.sqlite");
        {
            let repo = Repository::new(init_database(&path).await.unwrap());
            repo.apply_write(WriteAction::UpdateCollection(Collection::Gallery(vec![])))
                .await
                .unwrap();
        }

        let repo = Repository::new(init_database(&path).await.unwrap());
        assert!(repo.get_document().await.unwrap().gallery.is_empty());
        assert_eq!(repo.get_revision_id().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_aspirations_trimmed_and_listed() {
        let (repo, _dir) = repo().await;
        let submission = AspirationSubmission {
            name: "  Rina ".to_string(),
            student_id: "P07120".to_string(),
            department: "Gizi".to_string(),
            message: "Tambah fasilitas".to_string(),
            contact: Some("   ".to_string()),
            attachment_name: Some("foto.jpg".to_string()),
        };

        let stored = repo.create_aspiration(&submission).await.unwrap();
        assert_eq!(stored.name, "Rina");
        assert!(stored.contact.is_none());

        let listed = repo.list_aspirations().await.unwrap();
        assert_eq!(listed, vec![stored]);
    }
}
