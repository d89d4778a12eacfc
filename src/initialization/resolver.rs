//! DNS resolver initialization.
//!
//! This module builds the DNS resolver from explicit [`ResolverSettings`].

use trust_dns_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

use crate::config::ResolverSettings;

/// Initializes the DNS resolver for one batch run.
///
/// The resolver talks only to `settings.nameserver` over UDP (with TCP
/// fallback for truncated answers). It makes a single attempt per query,
/// never appends search domains, ignores the hosts file and keeps no cache,
/// so every query in the batch reaches the nameserver.
///
/// # Arguments
///
/// * `settings` - Nameserver and timeout for this run
pub fn init_resolver(settings: &ResolverSettings) -> TokioAsyncResolver {
    let nameservers = NameServerConfigGroup::from_ips_clear(
        &[settings.nameserver.ip()],
        settings.nameserver.port(),
        true,
    );
    let config = ResolverConfig::from_parts(None, vec![], nameservers);

    let mut opts = ResolverOpts::default();
    opts.timeout = settings.timeout;
    opts.attempts = 1;
    opts.ndots = 0;
    opts.cache_size = 0;
    opts.use_hosts_file = false;

    TokioAsyncResolver::tokio(config, opts)
}
