use crate::types::internal::TenantId;
use crate::types::internal::context::RequestContext;

/// Derives tenant scope and display name from the request identity
///
/// Both lookups are pure. Implementations are injected into coordinators so the
/// identity source can be swapped without touching write or query code.
pub trait TenantResolver: Send + Sync {
    /// `None` when there is no principal or it carries no usable Company claim
    fn resolve_tenant(&self, ctx: &RequestContext) -> Option<TenantId>;

    /// Given name when present, otherwise the canonical identity name
    fn resolve_display_name(&self, ctx: &RequestContext) -> String;
}

/// Resolver reading the validated JWT claims on the request context
#[derive(Debug, Default, Clone, Copy)]
pub struct ClaimsTenantResolver;

impl TenantResolver for ClaimsTenantResolver {
    fn resolve_tenant(&self, ctx: &RequestContext) -> Option<TenantId> {
        ctx.claims
            .as_ref()?
            .company
            .as_deref()
            .and_then(TenantId::parse)
    }

    fn resolve_display_name(&self, ctx: &RequestContext) -> String {
        let non_blank = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };

        ctx.claims
            .as_ref()
            .and_then(|claims| non_blank(&claims.given_name).or_else(|| non_blank(&claims.name)))
            .unwrap_or_else(|| ctx.actor_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::test_claims;

    #[test]
    fn test_resolve_tenant_without_principal_is_none() {
        let ctx = RequestContext::new();

        assert_eq!(ClaimsTenantResolver.resolve_tenant(&ctx), None);
    }

    #[test]
    fn test_resolve_tenant_reads_company_claim() {
        let ctx = RequestContext::new().with_auth(test_claims("user-1", Some("ACME")));

        assert_eq!(
            ClaimsTenantResolver.resolve_tenant(&ctx),
            TenantId::parse("ACME")
        );
    }

    #[test]
    fn test_resolve_tenant_with_blank_claim_is_none() {
        let ctx = RequestContext::new().with_auth(test_claims("user-1", Some("   ")));

        assert_eq!(ClaimsTenantResolver.resolve_tenant(&ctx), None);
    }

    #[test]
    fn test_display_name_prefers_given_name() {
        let mut claims = test_claims("user-1", Some("ACME"));
        claims.given_name = Some("Jane".to_string());
        claims.name = Some("jane.doe@acme.test".to_string());
        let ctx = RequestContext::new().with_auth(claims).with_actor_id("user-1");

        assert_eq!(ClaimsTenantResolver.resolve_display_name(&ctx), "Jane");
    }

    #[test]
    fn test_display_name_falls_back_to_canonical_name() {
        let mut claims = test_claims("user-1", Some("ACME"));
        claims.given_name = Some(String::new());
        claims.name = Some("jane.doe@acme.test".to_string());
        let ctx = RequestContext::new().with_auth(claims).with_actor_id("user-1");

        assert_eq!(
            ClaimsTenantResolver.resolve_display_name(&ctx),
            "jane.doe@acme.test"
        );
    }

    #[test]
    fn test_display_name_falls_back_to_actor_id() {
        let ctx = RequestContext::for_system("nightly-import");

        assert_eq!(
            ClaimsTenantResolver.resolve_display_name(&ctx),
            "system:nightly-import"
        );
    }
}
