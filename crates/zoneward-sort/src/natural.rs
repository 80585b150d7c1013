//! Natural ordering for zone names.
//!
//! Natural order treats digit runs as numbers, so `2.10.in-addr.arpa`
//! sorts before `10.10.in-addr.arpa` even though plain byte order would
//! reverse them. The in-memory variant additionally partitions names by
//! address family so IPv4 and IPv6 reverse zones never interleave,
//! regardless of the order the storage engine returned them in.

use std::cmp::Ordering;

use tracing::debug;

use crate::{SortDirection, SqlDialect, IPV4_REVERSE_SUFFIX, IPV6_REVERSE_SUFFIX};

/// Builds the natural-order `ORDER BY` expression for one dialect.
///
/// Three keys: a flag separating values with a numeric prefix, the
/// numeric value of that prefix, and the raw value as tie-break.
/// Dialects without string arithmetic fall back to a single raw key, an
/// accepted loss of precision rather than an error.
pub fn natural_sort_expression(
    field: &str,
    dialect: SqlDialect,
    direction: SortDirection,
) -> String {
    let dir = direction.as_sql();
    match dialect {
        // `+0` coerces the leading digits of a string to a number.
        SqlDialect::MySql | SqlDialect::Sqlite => {
            format!("{field}+0<>0 {dir}, {field}+0 {dir}, {field} {dir}")
        }
        SqlDialect::Postgres => format!(
            "CASE WHEN {field} ~ '^[0-9]+$' THEN 0 ELSE 1 END {dir}, \
             COALESCE(NULLIF(SUBSTRING({field} FROM '^[0-9]+'), ''), '0')::bigint {dir}, \
             {field} {dir}"
        ),
        SqlDialect::Other => {
            debug!(field, "dialect has no numeric coercion, ordering lexically");
            format!("{field} {dir}")
        }
    }
}

/// Sorts zone names naturally, grouped by address family.
///
/// IPv4 reverse zones come first, then IPv6 reverse zones, then
/// anything else; each group is ordered by [`natural_cmp`]. Group order
/// is fixed so listings stay stable across storage backends.
pub fn sort_naturally(names: &[String]) -> Vec<String> {
    let mut ipv4 = Vec::new();
    let mut ipv6 = Vec::new();
    let mut other = Vec::new();

    for name in names {
        if name.contains(IPV4_REVERSE_SUFFIX) {
            ipv4.push(name.clone());
        } else if name.contains(IPV6_REVERSE_SUFFIX) {
            ipv6.push(name.clone());
        } else {
            other.push(name.clone());
        }
    }

    ipv4.sort_by(|a, b| natural_cmp(a, b));
    ipv6.sort_by(|a, b| natural_cmp(a, b));
    other.sort_by(|a, b| natural_cmp(a, b));

    let mut sorted = ipv4;
    sorted.append(&mut ipv6);
    sorted.append(&mut other);
    sorted
}

/// Locale-naive, case-insensitive natural comparison.
///
/// Digit runs compare as numbers with leading zeros ignored; everything
/// else compares byte-wise after ASCII lowercasing. Strings that only
/// differ in leading zeros compare equal, which a stable sort preserves
/// in input order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let run_a = digit_run(a, i);
            let run_b = digit_run(b, j);
            match compare_digit_runs(&a[i..run_a], &b[j..run_b]) {
                Ordering::Equal => {
                    i = run_a;
                    j = run_b;
                }
                unequal => return unequal,
            }
        } else {
            match a[i].to_ascii_lowercase().cmp(&b[j].to_ascii_lowercase()) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                unequal => return unequal,
            }
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

/// End index of the digit run starting at `from`.
fn digit_run(bytes: &[u8], mut from: usize) -> usize {
    while from < bytes.len() && bytes[from].is_ascii_digit() {
        from += 1;
    }
    from
}

/// Compares two digit runs numerically without overflow concerns.
fn compare_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a = trim_leading_zeros(a);
    let b = trim_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn trim_leading_zeros(run: &[u8]) -> &[u8] {
    let nonzero = run.iter().position(|&d| d != b'0').unwrap_or(run.len());
    &run[nonzero..]
}
