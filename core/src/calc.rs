//! # CIDR Engine
//!
//! Turns `address/prefix` into everything the report shows: masks, first
//! and last address, address count and classification tags.
//!
//! Accepted input is `<address>/<prefix>` where the address is an IPv4 dotted
//! quad or an IPv6 literal (no zone) and the prefix is plain decimal digits no
//! larger than the address width. IPv4-mapped IPv6 networks of `/96` or
//! longer (e.g. `::ffff:10.0.0.1/120`) are reported as the IPv4 network they
//! embed (`10.0.0.1/24`). Shorter mapped networks stay IPv6, but their tags
//! follow the IPv4 rules.

use std::net::IpAddr;

use cidrscope_common::network::{bits, mask};
use num_bigint::BigUint;
use pnet::ipnetwork::IpNetwork;
use tracing::debug;

use crate::classify::{self, AddressTag};
use crate::error::CidrError;

const MAPPED_PREFIX: u8 = 96;

/// Everything derived from one CIDR string. Built by [`calc`], never changed
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CidrInfo {
    /// The address as written, host bits included.
    pub ip: IpAddr,
    pub is_v6: bool,
    /// 32 or 128.
    pub ip_bits: u32,
    /// First address: `ip` with every host bit cleared.
    pub network: IpAddr,
    pub net_mask: IpAddr,
    pub net_mask_size: u32,
    pub host_mask: IpAddr,
    pub host_mask_size: u32,
    /// Last (broadcast) address: every host bit set.
    pub max: IpAddr,
    /// `2 ^ host_mask_size`, up to 2^128.
    pub ip_count: BigUint,
    pub tags: Vec<AddressTag>,
}

/// Parses `cidr` and derives its [`CidrInfo`].
pub fn calc(cidr: &str) -> Result<CidrInfo, CidrError> {
    let (ip, prefix) = parse_cidr(cidr)?;

    let network = IpNetwork::new(ip, prefix).map_err(|_| CidrError::PrefixTooLong {
        cidr: cidr.to_string(),
        prefix: prefix.to_string(),
        bits: family_bits(&ip),
    })?;
    debug!("{cidr} is network {}/{}", network.network(), network.prefix());

    let net_mask: IpAddr = network.mask();
    let (net_mask_size, ip_bits) = mask::mask_size(&bits::addr_octets(&net_mask));
    let host_mask_size: u32 = ip_bits - net_mask_size;
    let (host_mask, max) = host_mask_and_max(&network);

    Ok(CidrInfo {
        ip,
        is_v6: ip.is_ipv6(),
        ip_bits,
        network: network.network(),
        net_mask,
        net_mask_size,
        host_mask,
        host_mask_size,
        max,
        ip_count: BigUint::from(1u8) << host_mask_size,
        tags: classify::classify(&ip),
    })
}

/// Splits and validates `address/prefix`.
fn parse_cidr(cidr: &str) -> Result<(IpAddr, u8), CidrError> {
    let Some((addr_str, prefix_str)) = cidr.split_once('/') else {
        return Err(CidrError::MissingPrefix(cidr.to_string()));
    };

    let ip: IpAddr = addr_str.parse().map_err(|_| CidrError::InvalidAddress {
        cidr: cidr.to_string(),
        addr: addr_str.to_string(),
    })?;

    // u8::from_str would also take a leading '+'
    if prefix_str.is_empty() || !prefix_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CidrError::InvalidPrefix {
            cidr: cidr.to_string(),
            prefix: prefix_str.to_string(),
        });
    }

    // digits only from here, so any parse failure is an overflow
    let bits: u8 = family_bits(&ip);
    let prefix: u8 = prefix_str
        .parse::<u32>()
        .ok()
        .and_then(|value| u8::try_from(value).ok())
        .filter(|value| *value <= bits)
        .ok_or_else(|| CidrError::PrefixTooLong {
            cidr: cidr.to_string(),
            prefix: prefix_str.to_string(),
            bits,
        })?;

    Ok(collapse_mapped(ip, prefix))
}

/// `::ffff:a.b.c.d/p` with `p >= 96` becomes `a.b.c.d/(p - 96)`.
fn collapse_mapped(ip: IpAddr, prefix: u8) -> (IpAddr, u8) {
    if let IpAddr::V6(ipv6_addr) = ip {
        if let Some(ipv4_addr) = ipv6_addr.to_ipv4_mapped() {
            if prefix >= MAPPED_PREFIX {
                debug!("collapsing mapped address {ipv6_addr} to {ipv4_addr}");
                return (IpAddr::V4(ipv4_addr), prefix - MAPPED_PREFIX);
            }
        }
    }
    (ip, prefix)
}

fn family_bits(ip: &IpAddr) -> u8 {
    match ip {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    }
}

fn host_mask_and_max(network: &IpNetwork) -> (IpAddr, IpAddr) {
    match network {
        IpNetwork::V4(ipv4_network) => {
            let (host_mask, max) =
                host_side(ipv4_network.network().octets(), ipv4_network.mask().octets());
            (IpAddr::from(host_mask), IpAddr::from(max))
        }
        IpNetwork::V6(ipv6_network) => {
            let (host_mask, max) =
                host_side(ipv6_network.network().octets(), ipv6_network.mask().octets());
            (IpAddr::from(host_mask), IpAddr::from(max))
        }
    }
}

/// Host mask and last address for a network of one address family.
fn host_side<const N: usize>(network: [u8; N], net_mask: [u8; N]) -> ([u8; N], [u8; N]) {
    let mut host_mask = [0u8; N];
    host_mask.copy_from_slice(&mask::complement(&net_mask));

    let mut max = [0u8; N];
    max.copy_from_slice(&mask::max_address(&network, &net_mask));

    (host_mask, max)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
