//! End-to-end ordering fixtures.
//!
//! These lists mirror the zone inventories administrators actually see:
//! private-range reverse delegations of mixed specificity across the
//! 10/8, 172.16/12 and 192.168/16 networks, with the odd IPv6 zone
//! mixed in.

use zoneward_sort::{
    hierarchy, natural, sort_order_clause, sort_zone_names, SortAlgorithm, SortDirection,
    SqlDialect,
};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn hierarchical_order_of_private_networks() {
    let input = names(&[
        "2.255.168.192.in-addr.arpa",
        "16.172.in-addr.arpa",
        "10.in-addr.arpa",
        "1.2.168.192.in-addr.arpa",
        "252.1.10.in-addr.arpa",
        "2.10.in-addr.arpa",
        "100.100.10.in-addr.arpa",
        "1.10.in-addr.arpa",
        "200.1.168.192.in-addr.arpa",
    ]);

    let expected = names(&[
        "10.in-addr.arpa",
        "1.10.in-addr.arpa",
        "2.10.in-addr.arpa",
        "252.1.10.in-addr.arpa",
        "100.100.10.in-addr.arpa",
        "16.172.in-addr.arpa",
        "200.1.168.192.in-addr.arpa",
        "1.2.168.192.in-addr.arpa",
        "2.255.168.192.in-addr.arpa",
    ]);

    assert_eq!(sort_zone_names(&input, SortAlgorithm::Hierarchical), expected);
}

#[test]
fn hierarchical_order_keeps_ipv6_last() {
    let input = names(&[
        "1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa",
        "10.in-addr.arpa",
        "1.10.in-addr.arpa",
    ]);

    let expected = names(&[
        "10.in-addr.arpa",
        "1.10.in-addr.arpa",
        "1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa",
    ]);

    assert_eq!(sort_zone_names(&input, SortAlgorithm::Hierarchical), expected);
}

#[test]
fn natural_order_groups_address_families() {
    let input = names(&[
        "2.255.168.192.in-addr.arpa",
        "8.b.d.0.1.0.0.2.ip6.arpa",
        "16.172.in-addr.arpa",
        "10.in-addr.arpa",
        "1.2.168.192.in-addr.arpa",
        "1.10.in-addr.arpa",
        "2.10.in-addr.arpa",
    ]);

    let sorted = sort_zone_names(&input, SortAlgorithm::Natural);
    assert_eq!(sorted.len(), input.len());

    // Every IPv4 reverse zone precedes the IPv6 one.
    let ipv6_position = sorted
        .iter()
        .position(|name| name.contains(".ip6.arpa"))
        .unwrap();
    for name in &sorted[..ipv6_position] {
        assert!(name.contains(".in-addr.arpa"), "{name} interleaved with IPv6");
    }

    // Within IPv4, digit runs order numerically.
    let one_ten = sorted.iter().position(|n| n == "1.10.in-addr.arpa").unwrap();
    let two_ten = sorted.iter().position(|n| n == "2.10.in-addr.arpa").unwrap();
    let ten = sorted.iter().position(|n| n == "10.in-addr.arpa").unwrap();
    assert!(one_ten < two_ten);
    assert!(two_ten < ten);
}

#[test]
fn sorting_sorted_input_is_identity() {
    let sorted_once = sort_zone_names(
        &names(&[
            "100.100.10.in-addr.arpa",
            "10.in-addr.arpa",
            "252.1.10.in-addr.arpa",
        ]),
        SortAlgorithm::Hierarchical,
    );
    assert_eq!(
        sort_zone_names(&sorted_once, SortAlgorithm::Hierarchical),
        sorted_once
    );

    let natural_once = sort_zone_names(&sorted_once, SortAlgorithm::Natural);
    assert_eq!(sort_zone_names(&natural_once, SortAlgorithm::Natural), natural_once);
}

#[test]
fn every_dialect_yields_a_usable_clause() {
    for dialect in [
        SqlDialect::MySql,
        SqlDialect::Postgres,
        SqlDialect::Sqlite,
        SqlDialect::Other,
    ] {
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            for algorithm in [SortAlgorithm::Natural, SortAlgorithm::Hierarchical] {
                let clause = sort_order_clause("records.name", dialect, direction, algorithm);
                assert!(clause.contains("records.name"));
                assert!(clause.contains(direction.as_sql()));
            }
        }
    }
}

#[test]
fn comparators_agree_with_sorters() {
    let a = "1.10.in-addr.arpa".to_string();
    let b = "10.in-addr.arpa".to_string();

    let sorted = hierarchy::sort_hierarchically(&[a.clone(), b.clone()]);
    assert_eq!(hierarchy::hierarchical_cmp(&sorted[0], &sorted[1]), std::cmp::Ordering::Less);

    let sorted = natural::sort_naturally(&[a, b]);
    assert_eq!(natural::natural_cmp(&sorted[0], &sorted[1]), std::cmp::Ordering::Less);
}
