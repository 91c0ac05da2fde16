mod common;

use std::net::IpAddr;

use masterfile_backend::providers::{ClaimsTenantResolver, TenantResolver};
use masterfile_backend::types::internal::context::{RequestContext, RequestSource};

#[test]
fn test_request_context_new_defaults_to_api_source() {
    let ctx = RequestContext::new();

    assert_eq!(ctx.source, RequestSource::API);
    assert_eq!(ctx.actor_id, "unknown");
    assert!(!ctx.authenticated);
    assert!(ctx.claims.is_none());
}

#[test]
fn test_request_context_for_system() {
    let ctx = RequestContext::for_system("seed");

    assert_eq!(ctx.source, RequestSource::System);
    assert_eq!(ctx.actor_id, "system:seed");
    assert!(ctx.ip_address.is_none());
    assert!(!ctx.authenticated);
}

#[test]
fn test_request_context_with_ip_address() {
    let ip: IpAddr = "192.168.1.1".parse().unwrap();
    let ctx = RequestContext::new().with_ip_address(ip);

    assert_eq!(ctx.ip_address, Some(ip));
    assert_eq!(ctx.source, RequestSource::API);
}

#[test]
fn test_each_context_gets_its_own_request_id() {
    assert_ne!(RequestContext::new().request_id, RequestContext::new().request_id);
}

#[test]
fn test_tenant_resolves_from_company_claim() {
    let resolver = ClaimsTenantResolver;
    let ctx = common::context("Jane", Some("ACME"));

    assert_eq!(resolver.resolve_tenant(&ctx), Some(common::tenant("ACME")));
    assert_eq!(resolver.resolve_display_name(&ctx), "Jane");
}

#[test]
fn test_unauthenticated_context_has_no_tenant() {
    let resolver = ClaimsTenantResolver;

    assert_eq!(resolver.resolve_tenant(&RequestContext::new()), None);
    assert_eq!(resolver.resolve_tenant(&common::context("Jane", Some("   "))), None);
}
