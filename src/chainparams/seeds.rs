//! Seed Node Configuration
//!
//! Bootstrap peers for initial discovery: DNS seeds queried by hostname, and
//! a compiled-in list of fixed addresses used when DNS yields nothing.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::constants::{NODE_NETWORK, ONE_WEEK};

/// A DNS seed, in order of preference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

impl DnsSeed {
    pub const fn new(name: &'static str, host: &'static str) -> Self {
        Self { name, host }
    }
}

/// A fixed seed address as advertised to the address manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAddress {
    pub addr: SocketAddr,
    pub services: u64,
    /// Unix time the peer was last seen
    pub last_seen: u64,
}

/// Turn compiled-in IPv4 seeds into addresses on `port`.
///
/// Each gets a last-seen time between one and two weeks before `now`, so
/// once real peers answer with fresher addresses the seeds lose priority.
pub fn fixed_seed_addresses<R: Rng>(
    ips: &[[u8; 4]],
    port: u16,
    now: u64,
    rng: &mut R,
) -> Vec<SeedAddress> {
    ips.iter()
        .map(|octets| SeedAddress {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::from(*octets)), port),
            services: NODE_NETWORK,
            last_seen: now
                .saturating_sub(rng.gen_range(0..ONE_WEEK))
                .saturating_sub(ONE_WEEK),
        })
        .collect()
}
