use std::net::IpAddr;

use cidrscope_common::network::{bits, mask};
use cidrscope_core::ruler::{mask_line, ruler_len};
use cidrscope_core::{AddressTag, CidrError, calc};
use num_bigint::BigUint;

const SAMPLES: [(&str, u32); 4] = [
    ("10.20.30.40", 32),
    ("192.168.255.1", 32),
    ("2001:db8:abcd:12::1", 128),
    ("fe80::36cf:f6ff:fe9a:1122", 128),
];

/// Whether bit `i` (0 = most significant) is set.
fn bit(octets: &[u8], i: usize) -> bool {
    octets[i / 8] & (0x80 >> (i % 8)) != 0
}

#[test]
fn sizes_add_up_for_every_prefix() {
    for (addr, width) in SAMPLES {
        for prefix in 0..=width {
            let info = calc(&format!("{addr}/{prefix}")).unwrap();
            assert_eq!(info.ip_bits, width);
            assert_eq!(info.ip_bits as usize, bits::addr_octets(&info.ip).len() * 8);
            assert_eq!(info.net_mask_size + info.host_mask_size, info.ip_bits);
            assert_eq!(
                bits::addr_octets(&info.host_mask),
                mask::complement(&bits::addr_octets(&info.net_mask))
            );
        }
    }
}

#[test]
fn ip_count_is_exact_power_of_two() {
    for (addr, width) in SAMPLES {
        for prefix in 0..=width {
            let info = calc(&format!("{addr}/{prefix}")).unwrap();
            let expected: BigUint = BigUint::from(2u8).pow(info.host_mask_size);
            assert_eq!(info.ip_count, expected, "{addr}/{prefix}");
        }
    }
}

#[test]
fn first_and_last_differ_only_in_host_bits() {
    for (addr, width) in SAMPLES {
        for prefix in 0..=width {
            let info = calc(&format!("{addr}/{prefix}")).unwrap();
            let first = bits::addr_octets(&info.network);
            let last = bits::addr_octets(&info.max);
            let ip = bits::addr_octets(&info.ip);

            for i in 0..width as usize {
                if i < prefix as usize {
                    assert_eq!(bit(&first, i), bit(&last, i), "{addr}/{prefix} bit {i}");
                    assert_eq!(bit(&first, i), bit(&ip, i), "{addr}/{prefix} bit {i}");
                } else {
                    assert!(!bit(&first, i), "{addr}/{prefix} bit {i}");
                    assert!(bit(&last, i), "{addr}/{prefix} bit {i}");
                }
            }
        }
    }
}

#[test]
fn binary_rows_have_one_group_per_byte() {
    for (addr, _) in SAMPLES {
        let info = calc(&format!("{addr}/24")).unwrap();
        for field in [info.ip, info.network, info.net_mask, info.host_mask, info.max] {
            let octets = bits::addr_octets(&field);
            let rendered = bits::bin(&octets);
            let groups: Vec<&str> = rendered.split(' ').collect();
            assert_eq!(groups.len(), octets.len());
            assert!(groups.iter().all(|g| g.len() == 8));
        }
    }
}

#[test]
fn ruler_spans_the_binary_row() {
    for (addr, width) in SAMPLES {
        let info = calc(&format!("{addr}/{width}")).unwrap();
        let row = bits::bin(&bits::addr_octets(&info.ip));
        assert_eq!(mask_line(width as usize).len(), row.len());
        assert_eq!(ruler_len(width as usize), row.len());
    }
}

#[test]
fn ruler_length_law() {
    for n in 0..=64usize {
        let expected = if n == 0 { 0 } else { n + (n - 1) / 8 };
        assert_eq!(mask_line(n).len(), expected, "n = {n}");
    }
}

#[test]
fn known_networks() {
    let info = calc("10.20.30.40/22").unwrap();
    assert_eq!(info.net_mask_size, 22);
    assert_eq!(info.host_mask_size, 10);
    assert_eq!(info.ip_count, BigUint::from(1024u32));
    assert_eq!(info.network, "10.20.28.0".parse::<IpAddr>().unwrap());
    assert_eq!(info.max, "10.20.31.255".parse::<IpAddr>().unwrap());
    assert!(info.tags.is_empty());

    assert!(calc("127.0.0.1/8").unwrap().tags.contains(&AddressTag::Loopback));

    let loopback6 = calc("::1/128").unwrap();
    assert!(loopback6.is_v6);
    assert_eq!(loopback6.ip_bits, 128);
    assert!(loopback6.tags.contains(&AddressTag::Loopback));
}

#[test]
fn malformed_input_is_a_parse_error() {
    assert!(matches!(calc("not-a-cidr"), Err(CidrError::MissingPrefix(_))));
}
