use std::sync::Arc;

use poem::Request;
use poem_openapi::payload::Json;
use poem_openapi::OpenApi;

use crate::api::ApiTags;
use crate::coordinators::AuditTrailCoordinator;
use crate::errors::MasterFileError;
use crate::grid::GridRequest;
use crate::providers::TokenProvider;
use crate::types::dto::audit_trail::AuditTrailGridResponse;
use crate::types::dto::grid::GridPayload;
use crate::types::internal::context::RequestContext;

/// Read-only audit trail endpoint
pub struct AuditTrailApi {
    audit_trail_coordinator: Arc<AuditTrailCoordinator>,
    token_provider: Arc<TokenProvider>,
}

impl AuditTrailApi {
    pub fn new(
        audit_trail_coordinator: Arc<AuditTrailCoordinator>,
        token_provider: Arc<TokenProvider>,
    ) -> Self {
        Self {
            audit_trail_coordinator,
            token_provider,
        }
    }
}

#[OpenApi]
impl AuditTrailApi {
    /// Grid over the caller's tenant audit trail, newest first
    #[oai(path = "/AuditTrail/GetAuditTrailList", method = "post", tag = "ApiTags::AuditTrail")]
    async fn grid(
        &self,
        req: &Request,
        body: GridPayload,
    ) -> Result<Json<AuditTrailGridResponse>, MasterFileError> {
        let ctx = RequestContext::validate_request(req, &self.token_provider);
        let request = GridRequest::from(body);
        let page = self
            .audit_trail_coordinator
            .grid(&ctx, &request)
            .await
            .map_err(|e| MasterFileError::from_internal_error(e, None))?;

        Ok(Json(page.into()))
    }
}
