use std::net::IpAddr;

/// Raw octets of an address in network byte order.
pub fn addr_octets(addr: &IpAddr) -> Vec<u8> {
    match addr {
        IpAddr::V4(ipv4_addr) => ipv4_addr.octets().to_vec(),
        IpAddr::V6(ipv6_addr) => ipv6_addr.octets().to_vec(),
    }
}

/// Each byte as eight zero-padded binary digits.
pub fn binary_octets(octets: &[u8]) -> Vec<String> {
    octets.iter().map(|octet| format!("{octet:08b}")).collect()
}

/// Renders octets as space separated binary groups,
/// e.g. `00001010 00010100 00011100 00000000`.
pub fn bin(octets: &[u8]) -> String {
    binary_octets(octets).join(" ")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
