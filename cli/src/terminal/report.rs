//! # CIDR Report
//!
//! Lays out a [`CidrInfo`] as a two-column text report. Every address row is
//! followed by its bits in binary, and every bit count by a ruler spanning the
//! same columns, so the rulers line up with the binary rows beneath them.

use std::fmt::Display;
use std::io::{self, Write};
use std::net::IpAddr;

use cidrscope_common::network::bits::{addr_octets, bin};
use cidrscope_core::{AddressTag, CidrInfo, mask_line};

const LABEL_WIDTH: usize = 14;
/// `255.255.255.255`
const IPV4_WIDTH: usize = 15;
/// `ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff`
const IPV6_WIDTH: usize = 39;

pub fn write_report<W: Write>(out: &mut W, cidr: &str, info: &CidrInfo) -> io::Result<()> {
    let (width, family): (usize, &str) = if info.is_v6 {
        (IPV6_WIDTH, "IPv6")
    } else {
        (IPV4_WIDTH, "IPv4")
    };
    let net_bits: usize = info.net_mask_size as usize;
    let host_bits: usize = info.host_mask_size as usize;
    let host_offset: String = " ".repeat(net_bits + net_bits / 8);

    writeln!(out)?;
    line(out, "CIDR", cidr)?;
    if !info.tags.is_empty() {
        line(out, "Type", join_tags(&info.tags))?;
    }
    writeln!(out)?;

    let ip_bits = format!("{} ({family})", info.ip_bits);
    row(out, "IP bits", ip_bits, width, mask_line(info.ip_bits as usize))?;
    address_row(out, "IP address", &info.ip, width)?;
    writeln!(out)?;

    let network_bits = format!("{} (..../{})", info.net_mask_size, info.net_mask_size);
    row(out, "Network bits", network_bits, width, mask_line(net_bits))?;
    address_row(out, "Network mask", &info.net_mask, width)?;
    writeln!(out)?;

    let host_bits_value = format!(
        "{} ({} - {})",
        info.host_mask_size, info.ip_bits, info.net_mask_size
    );
    let host_ruler = format!("{host_offset}{}", mask_line(host_bits));
    row(out, "Host bits", host_bits_value, width, host_ruler)?;
    address_row(out, "Host mask", &info.host_mask, width)?;
    writeln!(out)?;

    let count = format!("{} (2 ^ {})", info.ip_count, info.host_mask_size);
    line(out, "Number of IPs", count)?;
    address_row(out, "First IP", &info.network, width)?;
    address_row(out, "Last IP", &info.max, width)?;
    writeln!(out)
}

fn join_tags(tags: &[AddressTag]) -> String {
    tags.iter()
        .map(|tag| tag.as_str())
        .collect::<Vec<&str>>()
        .join(", ")
}

fn line<W: Write>(out: &mut W, label: &str, value: impl Display) -> io::Result<()> {
    writeln!(out, "{label:>w$}:  {value}", w = LABEL_WIDTH)
}

fn row<W: Write>(
    out: &mut W,
    label: &str,
    value: impl Display,
    width: usize,
    visual: impl Display,
) -> io::Result<()> {
    let value: String = value.to_string();
    writeln!(out, "{label:>w$}:  {value:<width$}  {visual}", w = LABEL_WIDTH)
}

fn address_row<W: Write>(
    out: &mut W,
    label: &str,
    addr: &IpAddr,
    width: usize,
) -> io::Result<()> {
    row(out, label, display_addr(addr), width, bin(&addr_octets(addr)))
}

/// Text form of an address. A 16-byte value in the `::ffff:0:0/96` range
/// prints as the dotted quad it carries, e.g. the host mask of a `/80`
/// shows as `255.255.255.255`. The binary column still has all 16 bytes.
fn display_addr(addr: &IpAddr) -> String {
    match addr {
        IpAddr::V6(ipv6_addr) => match ipv6_addr.to_ipv4_mapped() {
            Some(ipv4_addr) => ipv4_addr.to_string(),
            None => ipv6_addr.to_string(),
        },
        IpAddr::V4(ipv4_addr) => ipv4_addr.to_string(),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
