//! # Address Classification
//!
//! Tags an address with the well-known ranges it falls into. The checks run
//! in a fixed order so the resulting tag list is stable between runs and
//! between releases; new classifications go into [`CLASSIFIERS`] without
//! disturbing the position of existing ones.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressTag {
    Loopback,
    Multicast,
    LinkLocalMulticast,
    InterfaceLocalMulticast,
    /// Evaluated but never reported.
    GlobalUnicast,
    LinkLocalUnicast,
    Unspecified,
}

impl AddressTag {
    pub fn as_str(self) -> &'static str {
        match self {
            AddressTag::Loopback => "loopback",
            AddressTag::Multicast => "multicast",
            AddressTag::LinkLocalMulticast => "link local multicast",
            AddressTag::InterfaceLocalMulticast => "interface local multicast",
            AddressTag::GlobalUnicast => "global unicast",
            AddressTag::LinkLocalUnicast => "link local unicast",
            AddressTag::Unspecified => "unspecified",
        }
    }

    /// Whether the tag shows up in [`classify`] output.
    pub fn is_reported(self) -> bool {
        !matches!(self, AddressTag::GlobalUnicast)
    }
}

impl fmt::Display for AddressTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Predicate = fn(&IpAddr) -> bool;

/// Evaluation order of the classifiers. Order is part of the output format.
pub const CLASSIFIERS: [(AddressTag, Predicate); 7] = [
    (AddressTag::Loopback, is_loopback),
    (AddressTag::Multicast, is_multicast),
    (AddressTag::LinkLocalMulticast, is_link_local_multicast),
    (AddressTag::InterfaceLocalMulticast, is_interface_local_multicast),
    (AddressTag::GlobalUnicast, is_global_unicast),
    (AddressTag::LinkLocalUnicast, is_link_local_unicast),
    (AddressTag::Unspecified, is_unspecified),
];

/// Returns the reported tags matching `ip`, in [`CLASSIFIERS`] order.
///
/// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are classified as the IPv4
/// address they embed.
pub fn classify(ip: &IpAddr) -> Vec<AddressTag> {
    let ip: &IpAddr = &unmap(ip);
    CLASSIFIERS
        .iter()
        .filter(|(_, predicate)| predicate(ip))
        .map(|(tag, _)| *tag)
        .inspect(|tag| trace!("{ip} matches {tag}"))
        .filter(|tag| tag.is_reported())
        .collect()
}

pub fn is_loopback(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(ipv4_addr) => ipv4_addr.octets()[0] == 127,
        IpAddr::V6(ipv6_addr) => *ipv6_addr == Ipv6Addr::LOCALHOST,
    }
}

pub fn is_multicast(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(ipv4_addr) => ipv4_addr.octets()[0] & 0xf0 == 0xe0,
        IpAddr::V6(ipv6_addr) => ipv6_addr.octets()[0] == 0xff,
    }
}

/// `224.0.0.0/24` or `ffx2::/16`.
pub fn is_link_local_multicast(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(ipv4_addr) => {
            let [a, b, c, _] = ipv4_addr.octets();
            a == 224 && b == 0 && c == 0
        }
        IpAddr::V6(ipv6_addr) => multicast_scope(ipv6_addr) == Some(0x02),
    }
}

/// `ffx1::/16`. IPv4 has no interface-local scope.
pub fn is_interface_local_multicast(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(_) => false,
        IpAddr::V6(ipv6_addr) => multicast_scope(ipv6_addr) == Some(0x01),
    }
}

pub fn is_global_unicast(ip: &IpAddr) -> bool {
    if let IpAddr::V4(ipv4_addr) = ip {
        if *ipv4_addr == Ipv4Addr::BROADCAST {
            return false;
        }
    }
    !is_unspecified(ip) && !is_loopback(ip) && !is_multicast(ip) && !is_link_local_unicast(ip)
}

/// `169.254.0.0/16` or `fe80::/10`.
pub fn is_link_local_unicast(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(ipv4_addr) => {
            let [a, b, _, _] = ipv4_addr.octets();
            a == 169 && b == 254
        }
        IpAddr::V6(ipv6_addr) => {
            let octets = ipv6_addr.octets();
            octets[0] == 0xfe && octets[1] & 0xc0 == 0x80
        }
    }
}

pub fn is_unspecified(ip: &IpAddr) -> bool {
    ip.is_unspecified()
}

fn unmap(ip: &IpAddr) -> IpAddr {
    match ip {
        IpAddr::V6(ipv6_addr) => ipv6_addr
            .to_ipv4_mapped()
            .map_or(*ip, IpAddr::V4),
        IpAddr::V4(_) => *ip,
    }
}

fn multicast_scope(ipv6_addr: &Ipv6Addr) -> Option<u8> {
    let octets = ipv6_addr.octets();
    (octets[0] == 0xff).then_some(octets[1] & 0x0f)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
