use std::net::IpAddr;

use crate::{providers::TokenProvider, types::internal::auth::Claims};
use poem::Request;
use poem_openapi::auth::{Bearer, BearerAuthorization};

use super::{request_id::RequestId, request_source::RequestSource};

/// Request context that flows through all layers
///
/// Contains contextual information about the current request that is needed
/// for tenant scoping, auditing, and tracing across API, coordinator, and store layers.
/// This is the identity source the tenant resolver reads from.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    /// IP address of the client making the request
    pub ip_address: Option<IpAddr>,

    /// Unique identifier for this request (for tracing across layers)
    pub request_id: RequestId,

    /// Whether the request is authenticated (JWT validated successfully)
    pub authenticated: bool,

    /// Full JWT claims if authenticated
    pub claims: Option<Claims>,

    /// Source of the request (API or System)
    pub source: RequestSource,

    /// Actor who initiated the operation
    pub actor_id: String,
}

impl RequestContext {
    /// Create an unauthenticated API context with a fresh request id
    pub fn new() -> Self {
        Self {
            ip_address: None,
            request_id: RequestId::new(),
            authenticated: false,
            claims: None,
            source: RequestSource::API,
            actor_id: "unknown".to_owned(),
        }
    }

    /// Create a RequestContext for system operations
    ///
    /// # Arguments
    /// * `operation_name` - Name of the system operation being executed
    pub fn for_system(operation_name: &str) -> Self {
        Self {
            ip_address: None,
            request_id: RequestId::new(),
            authenticated: false,
            claims: None,
            source: RequestSource::System,
            actor_id: format!("system:{}", operation_name),
        }
    }

    fn extract_bearer(req: &Request) -> Option<Bearer> {
        Bearer::from_request(req).ok()
    }

    /// Extract IP address from request headers
    ///
    /// Checks X-Forwarded-For, X-Real-IP, and falls back to remote address.
    fn extract_ip_address(req: &Request) -> Option<IpAddr> {
        // Check X-Forwarded-For header (proxy/load balancer)
        if let Some(forwarded) = req.header("X-Forwarded-For") {
            if let Some(ip) = forwarded.split(',').next() {
                return ip.trim().parse().ok();
            }
        }

        // Check X-Real-IP header (nginx)
        if let Some(real_ip) = req.header("X-Real-IP") {
            return real_ip.parse().ok();
        }

        // Fall back to remote address
        req.remote_addr().as_socket_addr().map(|addr| addr.ip())
    }

    /// Create RequestContext from the incoming request
    ///
    /// Should be called at the beginning of every endpoint. Populates the IP address
    /// and request id, and if a bearer token is present and valid, the claims and
    /// actor id. An invalid or expired token leaves the context unauthenticated;
    /// callers needing a tenant then fail with a missing-tenant error.
    pub fn validate_request(req: &Request, token_provider: &TokenProvider) -> Self {
        let mut ctx = RequestContext::new();

        if let Some(ip) = Self::extract_ip_address(req) {
            ctx = ctx.with_ip_address(ip);
        }

        if let Some(bearer) = Self::extract_bearer(req) {
            match token_provider.validate_jwt(&bearer.token) {
                Ok(claims) => {
                    let actor_id = claims.sub.clone();
                    ctx = ctx.with_auth(claims).with_actor_id(actor_id);
                }
                Err(e) => {
                    tracing::debug!(request_id = %ctx.request_id, "Bearer token rejected: {}", e);
                }
            }
        }

        tracing::trace!("Request context created: {:?}", ctx);

        ctx
    }

    /// Set the ip_address
    pub fn with_ip_address(mut self, ip_address: IpAddr) -> Self {
        self.ip_address = Some(ip_address);
        self
    }

    /// Set authentication state with claims
    pub fn with_auth(mut self, claims: Claims) -> Self {
        self.authenticated = true;
        self.claims = Some(claims);
        self
    }

    /// Set the actor_id
    pub fn with_actor_id(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = actor_id.into();
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
