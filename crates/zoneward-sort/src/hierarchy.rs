//! Hierarchical ordering for reverse zone names.
//!
//! Groups every delegation under its top-level reverse network (all of
//! `10.in-addr.arpa` before all of `172.in-addr.arpa`), orders networks
//! numerically, and within a network puts less specific zones first.
//! Opt-in; natural ordering remains the default.

use std::cmp::Ordering;

use tracing::debug;

use crate::{SortDirection, SqlDialect, IPV4_REVERSE_SUFFIX};

/// Builds the hierarchical `ORDER BY` expression for one dialect.
///
/// Keys: the substring before the `.in-addr.arpa` suffix, the leading
/// label coerced to a number, the value length as a specificity proxy,
/// and the raw value as final tie-break. Dialects without split
/// primitives degrade to length-then-raw ordering.
pub fn hierarchical_sort_expression(
    field: &str,
    dialect: SqlDialect,
    direction: SortDirection,
) -> String {
    let dir = direction.as_sql();
    match dialect {
        SqlDialect::MySql => format!(
            "SUBSTRING_INDEX({field}, '{IPV4_REVERSE_SUFFIX}', 1) {dir}, \
             SUBSTRING_INDEX({field}, '.', 1) + 0 {dir}, \
             LENGTH({field}) {dir}, \
             {field} {dir}"
        ),
        SqlDialect::Postgres => format!(
            "SPLIT_PART({field}, '{IPV4_REVERSE_SUFFIX}', 1) {dir}, \
             (SPLIT_PART({field}, '.', 1))::integer {dir}, \
             LENGTH({field}) {dir}, \
             {field} {dir}"
        ),
        SqlDialect::Sqlite => {
            debug!(field, "dialect cannot split strings, approximating by length");
            format!("LENGTH({field}) {dir}, {field} {dir}")
        }
        SqlDialect::Other => format!("{field} {dir}"),
    }
}

/// Compares two zone names by network hierarchy.
///
/// IPv4 reverse zones sort before everything else. Within IPv4, the
/// top-level network label (the last label before the `.in-addr.arpa`
/// suffix) compares numerically; ties break by label count (fewer
/// labels, meaning a less specific delegation, first), then by label
/// values from most significant to least, then by the full name
/// lexically. A label that is not a number counts as zero.
pub fn hierarchical_cmp(a: &str, b: &str) -> Ordering {
    let a_is_ipv4 = a.contains(IPV4_REVERSE_SUFFIX);
    let b_is_ipv4 = b.contains(IPV4_REVERSE_SUFFIX);
    match (a_is_ipv4, b_is_ipv4) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    let a_labels = network_labels(a);
    let b_labels = network_labels(b);

    if a_is_ipv4 && b_is_ipv4 {
        let a_network = a_labels.last().map_or(0, |label| label_value(label));
        let b_network = b_labels.last().map_or(0, |label| label_value(label));
        match a_network.cmp(&b_network) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }

    match a_labels.len().cmp(&b_labels.len()) {
        Ordering::Equal => {}
        unequal => return unequal,
    }

    for (a_label, b_label) in a_labels.iter().rev().zip(b_labels.iter().rev()) {
        match label_value(a_label).cmp(&label_value(b_label)) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }

    a.cmp(b)
}

/// Sorts zone names by network hierarchy.
pub fn sort_hierarchically(names: &[String]) -> Vec<String> {
    let mut sorted = names.to_vec();
    sorted.sort_by(|a, b| hierarchical_cmp(a, b));
    sorted
}

/// Labels of the name with the IPv4 reverse suffix cut off.
fn network_labels(name: &str) -> Vec<&str> {
    let base = match name.find(IPV4_REVERSE_SUFFIX) {
        Some(position) => &name[..position],
        None => name,
    };
    base.split('.').collect()
}

/// Numeric value of a label; anything unparseable counts as zero.
fn label_value(label: &str) -> u64 {
    label.parse().unwrap_or(0)
}
