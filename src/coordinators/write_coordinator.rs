use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::audit::{AuditRecord, AuditRecorder};
use crate::errors::InternalError;
use crate::errors::internal::{DatabaseError, TenantError};
use crate::providers::TenantResolver;
use crate::types::MutationResult;
use crate::types::internal::context::{RequestContext, RequestId};
use crate::types::internal::{CancelSignal, TenantId};

/// An entity change that runs inside a write transaction
///
/// A mutation only completes by returning an
/// [`ActionOutcome`](crate::types::internal::ActionOutcome), so every change
/// carries the audit intent describing it.
#[async_trait]
pub trait Mutation: Send {
    type Output: Send;

    /// Short name used in logs and cancellation errors
    fn operation(&self) -> &'static str;

    async fn apply(self, txn: &DatabaseTransaction) -> MutationResult<Self::Output>;
}

/// Who is writing, for which tenant
#[derive(Debug, Clone)]
pub struct WriteScope {
    pub actor: String,
    pub tenant: TenantId,
    pub request_id: RequestId,
}

impl WriteScope {
    /// Resolve actor and tenant for a write; no tenant means no write
    pub fn resolve(ctx: &RequestContext, resolver: &dyn TenantResolver) -> Result<Self, InternalError> {
        let tenant = resolver
            .resolve_tenant(ctx)
            .ok_or(TenantError::MissingTenantClaim)?;

        Ok(Self {
            actor: resolver.resolve_display_name(ctx),
            tenant,
            request_id: ctx.request_id.clone(),
        })
    }
}

/// Runs a mutation and its audit entry as one atomic unit
pub struct WriteCoordinator {
    db: DatabaseConnection,
    audit_recorder: Arc<AuditRecorder>,
}

impl WriteCoordinator {
    pub fn new(db: DatabaseConnection, audit_recorder: Arc<AuditRecorder>) -> Self {
        Self { db, audit_recorder }
    }

    /// Apply `mutation` and record its audit entry in a single transaction
    ///
    /// Steps:
    /// 1. Begin a transaction
    /// 2. Apply the mutation on the transaction
    /// 3. Record the mutation's audit intent on the same transaction
    /// 4. Commit
    ///
    /// Any failure, or `cancel` firing before commit, rolls the transaction back
    /// and returns the error. Nothing from a failed run is visible afterwards.
    ///
    /// # Errors
    ///
    /// * `InternalError::Cancelled` - the cancellation signal fired
    /// * `InternalError::Audit` - the audit entry could not be written
    /// * `InternalError::Database` - the mutation, begin or commit failed
    pub async fn run_transactional<M: Mutation>(
        &self,
        scope: &WriteScope,
        cancel: &CancelSignal,
        mutation: M,
    ) -> Result<M::Output, InternalError> {
        let operation = mutation.operation();

        if cancel.is_cancelled() {
            return Err(InternalError::cancelled(operation));
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|source| DatabaseError::TransactionBegin { source })?;

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(InternalError::cancelled(operation)),
            result = self.apply_and_audit(&txn, scope, mutation) => result,
        };

        let value = match result {
            Ok(value) if !cancel.is_cancelled() => value,
            Ok(_) => {
                self.rollback(txn, scope, operation).await;
                return Err(InternalError::cancelled(operation));
            }
            Err(err) => {
                self.log_failure(scope, operation, &err);
                self.rollback(txn, scope, operation).await;
                return Err(err);
            }
        };

        txn.commit().await.map_err(|source| {
            let err = InternalError::from(DatabaseError::TransactionCommit { source });
            self.log_failure(scope, operation, &err);
            err
        })?;

        tracing::debug!(
            request_id = %scope.request_id,
            company = %scope.tenant,
            "{} committed",
            operation
        );

        Ok(value)
    }

    async fn apply_and_audit<M: Mutation>(
        &self,
        txn: &DatabaseTransaction,
        scope: &WriteScope,
        mutation: M,
    ) -> Result<M::Output, InternalError> {
        let outcome = mutation.apply(txn).await?;

        self.audit_recorder
            .record(
                txn,
                AuditRecord {
                    actor: &scope.actor,
                    description: &outcome.audit.description,
                    entity_type: outcome.audit.entity_type,
                    tenant: &scope.tenant,
                    request_id: Some(scope.request_id.to_string()),
                },
            )
            .await?;

        Ok(outcome.value)
    }

    async fn rollback(&self, txn: DatabaseTransaction, scope: &WriteScope, operation: &str) {
        if let Err(source) = txn.rollback().await {
            let err = InternalError::from(DatabaseError::TransactionRollback { source });
            tracing::error!(
                request_id = %scope.request_id,
                actor = %scope.actor,
                company = %scope.tenant,
                "{} rollback failed: {}",
                operation,
                err
            );
        }
    }

    fn log_failure(&self, scope: &WriteScope, operation: &str, err: &InternalError) {
        if matches!(err, InternalError::Cancelled { .. }) {
            tracing::warn!(
                request_id = %scope.request_id,
                actor = %scope.actor,
                company = %scope.tenant,
                "{} cancelled, rolling back",
                operation
            );
        } else {
            tracing::error!(
                request_id = %scope.request_id,
                actor = %scope.actor,
                company = %scope.tenant,
                "{} failed, rolling back: {}",
                operation,
                err
            );
        }
    }
}
