//! In-memory adapters for every repository and storage port.
//!
//! Each adapter can be switched into a failing mode so callers' error paths
//! can be exercised without a database.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::DocumentStorage;
use crate::application::ports::document_storage::DocumentStorageError;
use crate::domain::entities::{
    AuditLogEntry, ComplianceReport, Document, EmbeddingRecord, Notification,
};
use crate::domain::repositories::{
    AuditLogRepository, AuditLogRepositoryError, DocumentRepository, DocumentRepositoryError,
    EmbeddingRepository, EmbeddingRepositoryError, NotificationRepository,
    NotificationRepositoryError, ReportRepository, ReportRepositoryError, RoleRepository,
    RoleRepositoryError,
};
use crate::domain::value_objects::{RiskLevel, Role};

#[derive(Default)]
pub struct InMemoryDocumentRepository {
    documents: RwLock<HashMap<Uuid, Document>>,
    fail_lookups: AtomicBool,
    lookups: AtomicUsize,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_lookups(&self, fail: bool) {
        self.fail_lookups.store(fail, Ordering::SeqCst);
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn save(&self, document: &Document) -> Result<(), DocumentRepositoryError> {
        self.documents
            .write()
            .await
            .insert(document.id(), document.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Document>, DocumentRepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(DocumentRepositoryError::DatabaseError(
                "document store unavailable".to_string(),
            ));
        }
        Ok(self.documents.read().await.get(&id).cloned())
    }

    async fn mark_analyzed(
        &self,
        id: Uuid,
        analyzed_at: DateTime<Utc>,
    ) -> Result<(), DocumentRepositoryError> {
        let mut documents = self.documents.write().await;
        let document = documents
            .get_mut(&id)
            .ok_or(DocumentRepositoryError::NotFound(id))?;
        document.mark_analyzed(analyzed_at);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryEmbeddingRepository {
    records: RwLock<Vec<EmbeddingRecord>>,
    failing_chunks: RwLock<HashSet<i32>>,
}

impl InMemoryEmbeddingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves for this chunk index fail from now on.
    pub async fn fail_chunk(&self, chunk_index: i32) {
        self.failing_chunks.write().await.insert(chunk_index);
    }

    pub async fn all(&self) -> Vec<EmbeddingRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl EmbeddingRepository for InMemoryEmbeddingRepository {
    async fn save(&self, record: &EmbeddingRecord) -> Result<(), EmbeddingRepositoryError> {
        if self
            .failing_chunks
            .read()
            .await
            .contains(&record.chunk_index())
        {
            return Err(EmbeddingRepositoryError::DatabaseError(
                "insert rejected".to_string(),
            ));
        }

        let mut records = self.records.write().await;
        if records
            .iter()
            .any(|r| r.run_id() == record.run_id() && r.chunk_index() == record.chunk_index())
        {
            return Err(EmbeddingRepositoryError::DuplicateChunk {
                run_id: record.run_id(),
                chunk_index: record.chunk_index(),
            });
        }
        records.push(record.clone());
        Ok(())
    }

    async fn find_by_run(
        &self,
        run_id: Uuid,
    ) -> Result<Vec<EmbeddingRecord>, EmbeddingRepositoryError> {
        let mut found: Vec<EmbeddingRecord> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.run_id() == run_id)
            .cloned()
            .collect();
        found.sort_by_key(|r| r.chunk_index());
        Ok(found)
    }

    async fn count_by_document(&self, document_id: Uuid) -> Result<i64, EmbeddingRepositoryError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.document_id() == document_id)
            .count() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryReportRepository {
    reports: RwLock<Vec<ComplianceReport>>,
    fail_writes: AtomicBool,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn all(&self) -> Vec<ComplianceReport> {
        self.reports.read().await.clone()
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn save(&self, report: &ComplianceReport) -> Result<(), ReportRepositoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ReportRepositoryError::DatabaseError(
                "report store unavailable".to_string(),
            ));
        }
        self.reports.write().await.push(report.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ComplianceReport>, ReportRepositoryError> {
        Ok(self
            .reports
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned())
    }

    async fn find_by_document_id(
        &self,
        document_id: Uuid,
    ) -> Result<Vec<ComplianceReport>, ReportRepositoryError> {
        let mut found: Vec<ComplianceReport> = self
            .reports
            .read()
            .await
            .iter()
            .filter(|r| r.document_id() == document_id)
            .cloned()
            .collect();
        found.sort_by_key(|r| std::cmp::Reverse(r.generated_at()));
        Ok(found)
    }

    async fn find_reanalysis_candidates(
        &self,
        cutoff: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<ComplianceReport>, ReportRepositoryError> {
        let reports = self.reports.read().await;

        let mut latest: HashMap<Uuid, &ComplianceReport> = HashMap::new();
        for report in reports.iter() {
            let entry = latest.entry(report.document_id()).or_insert(report);
            if report.generated_at() > entry.generated_at() {
                *entry = report;
            }
        }

        let mut candidates: Vec<ComplianceReport> = latest
            .into_values()
            .filter(|r| r.generated_at() < cutoff && RiskLevel::elevated().contains(&r.risk_level()))
            .cloned()
            .collect();
        candidates.sort_by_key(|r| r.generated_at());
        candidates.truncate(limit.max(0) as usize);
        Ok(candidates)
    }
}

#[derive(Default)]
pub struct InMemoryNotificationRepository {
    notifications: RwLock<Vec<Notification>>,
    fail_writes: AtomicBool,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn all(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }

    fn check_writable(&self) -> Result<(), NotificationRepositoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(NotificationRepositoryError::DatabaseError(
                "notification store unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn save(&self, notification: &Notification) -> Result<(), NotificationRepositoryError> {
        self.check_writable()?;
        self.notifications.write().await.push(notification.clone());
        Ok(())
    }

    async fn save_batch(
        &self,
        notifications: &[Notification],
    ) -> Result<(), NotificationRepositoryError> {
        self.check_writable()?;
        self.notifications
            .write()
            .await
            .extend_from_slice(notifications);
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Notification>, NotificationRepositoryError> {
        Ok(self
            .notifications
            .read()
            .await
            .iter()
            .filter(|n| n.user_id() == user_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryRoleRepository {
    roles: RwLock<HashMap<Uuid, Vec<Role>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    assign_attempts: AtomicUsize,
}

impl InMemoryRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn assign_attempts(&self) -> usize {
        self.assign_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn find_roles(&self, user_id: Uuid) -> Result<Vec<Role>, RoleRepositoryError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(RoleRepositoryError::DatabaseError(
                "role store unavailable".to_string(),
            ));
        }
        Ok(self
            .roles
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn assign_role(&self, user_id: Uuid, role: Role) -> Result<bool, RoleRepositoryError> {
        self.assign_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RoleRepositoryError::DatabaseError(
                "role store unavailable".to_string(),
            ));
        }

        let mut roles = self.roles.write().await;
        let held = roles.entry(user_id).or_default();
        if held.contains(&role) {
            return Ok(false);
        }
        held.push(role);
        Ok(true)
    }
}

#[derive(Default)]
pub struct InMemoryAuditLogRepository {
    entries: RwLock<Vec<AuditLogEntry>>,
    fail_writes: AtomicBool,
}

impl InMemoryAuditLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn all(&self) -> Vec<AuditLogEntry> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditLogRepository {
    async fn append(&self, entry: &AuditLogEntry) -> Result<(), AuditLogRepositoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AuditLogRepositoryError::DatabaseError(
                "audit store unavailable".to_string(),
            ));
        }
        self.entries.write().await.push(entry.clone());
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<AuditLogEntry>, AuditLogRepositoryError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| e.user_id() == user_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryDocumentStorage {
    files: RwLock<HashMap<String, Vec<u8>>>,
    downloads: AtomicUsize,
}

impl InMemoryDocumentStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put(&self, storage_path: &str, data: &[u8]) {
        self.files
            .write()
            .await
            .insert(storage_path.to_string(), data.to_vec());
    }

    pub fn download_count(&self) -> usize {
        self.downloads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStorage for InMemoryDocumentStorage {
    async fn download(&self, storage_path: &str) -> Result<Vec<u8>, DocumentStorageError> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        self.files
            .read()
            .await
            .get(storage_path)
            .cloned()
            .ok_or_else(|| DocumentStorageError::FileNotFound(storage_path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ComplianceAssessment;

    fn report(document_id: Uuid, risk: RiskLevel, age_days: i64) -> ComplianceReport {
        ComplianceReport::new(
            document_id,
            Uuid::new_v4(),
            ComplianceAssessment {
                compliance_score: 50.0,
                risk_level: risk,
                analysis_summary: String::new(),
                issues: vec![],
                recommendations: vec![],
            },
            "model".to_string(),
            "1".to_string(),
        )
        .with_generated_at(Utc::now() - chrono::Duration::days(age_days))
    }

    #[tokio::test]
    async fn test_candidates_only_consider_latest_report() {
        let repo = InMemoryReportRepository::new();
        let stale = Uuid::new_v4();
        let refreshed = Uuid::new_v4();
        let low = Uuid::new_v4();

        repo.save(&report(stale, RiskLevel::High, 40)).await.unwrap();
        repo.save(&report(refreshed, RiskLevel::Critical, 45)).await.unwrap();
        repo.save(&report(refreshed, RiskLevel::Critical, 1)).await.unwrap();
        repo.save(&report(low, RiskLevel::Low, 90)).await.unwrap();

        let cutoff = Utc::now() - chrono::Duration::days(30);
        let candidates = repo.find_reanalysis_candidates(cutoff, 10).await.unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].document_id(), stale);
    }

    #[tokio::test]
    async fn test_role_assignment_is_idempotent() {
        let repo = InMemoryRoleRepository::new();
        let user = Uuid::new_v4();

        assert!(repo.assign_role(user, Role::Viewer).await.unwrap());
        assert!(!repo.assign_role(user, Role::Viewer).await.unwrap());
        assert_eq!(repo.find_roles(user).await.unwrap(), vec![Role::Viewer]);
    }
}
