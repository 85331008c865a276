//! National dialing prefix assignments per operator
//!
//! Maps four-digit subscriber-number prefixes (e.g. "0912") to the operator
//! that owns the block. Accepts prefixes or full numbers in national,
//! bare, or international (+98 / 0098) form.

use crate::models::PrefixGroup;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Prefix blocks owned by a single operator
pub type PrefixList = &'static [&'static str];

/// Operator name to assigned prefix blocks
const PREFIX_ASSIGNMENTS: &[(&str, PrefixList)] = &[
    (
        "MCI",
        &[
            "0910", "0911", "0912", "0913", "0914", "0915", "0916", "0917",
            "0918", "0919", "0990", "0991", "0992", "0993", "0994",
        ],
    ),
    (
        "Irancell",
        &[
            "0900", "0901", "0902", "0903", "0904", "0905", "0930", "0933",
            "0935", "0936", "0937", "0938", "0939", "0941",
        ],
    ),
    ("Rightel", &["0920", "0921", "0922"]),
    ("Taliya", &["0932"]),
];

/// Inverted index: prefix to owning operator
pub static PREFIX_CARRIERS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for &(carrier, prefixes) in PREFIX_ASSIGNMENTS {
        for &prefix in prefixes {
            m.insert(prefix, carrier);
        }
    }
    m
});

/// Reduce a raw prefix or subscriber number to the national "09.." form
fn national_form(raw: &str) -> Option<String> {
    let compact: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    let digits = if let Some(rest) = compact.strip_prefix("+98") {
        format!("0{}", rest)
    } else if let Some(rest) = compact.strip_prefix("0098") {
        format!("0{}", rest)
    } else if compact.starts_with('9') {
        format!("0{}", compact)
    } else {
        compact
    };

    if digits.len() < 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits)
}

/// Look up the operator owning a four-digit prefix. A miss is a normal outcome.
pub fn carrier_for_prefix(prefix: &str) -> Option<&'static str> {
    let national = national_form(prefix)?;
    if national.len() != 4 {
        return None;
    }
    PREFIX_CARRIERS.get(national.as_str()).copied()
}

/// Look up the operator for a full subscriber number
pub fn carrier_for_number(number: &str) -> Option<&'static str> {
    let national = national_form(number)?;
    PREFIX_CARRIERS.get(&national[..4]).copied()
}

/// Prefix blocks assigned to an operator, matched case-insensitively
pub fn codes_for_carrier(name: &str) -> Option<PrefixList> {
    let wanted = name.trim();
    PREFIX_ASSIGNMENTS
        .iter()
        .find(|(carrier, _)| carrier.eq_ignore_ascii_case(wanted))
        .map(|&(_, prefixes)| prefixes)
}

/// Every assigned prefix, in table order
pub fn all_prefixes() -> Vec<&'static str> {
    PREFIX_ASSIGNMENTS
        .iter()
        .flat_map(|&(_, prefixes)| prefixes.iter().copied())
        .collect()
}

/// Number of assigned prefix blocks per operator
pub fn prefix_counts() -> Vec<(&'static str, usize)> {
    PREFIX_ASSIGNMENTS
        .iter()
        .map(|&(carrier, prefixes)| (carrier, prefixes.len()))
        .collect()
}

/// Prefixes assigned to more than one operator, sorted. Expected empty.
pub fn duplicate_prefixes() -> Vec<&'static str> {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for &(_, prefixes) in PREFIX_ASSIGNMENTS {
        for &prefix in prefixes {
            *counts.entry(prefix).or_insert(0) += 1;
        }
    }
    let mut dups: Vec<&'static str> = counts
        .into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(prefix, _)| prefix)
        .collect();
    dups.sort_unstable();
    dups
}

/// True if any prefix appears under more than one operator
pub fn has_duplicate_prefixes() -> bool {
    all_prefixes().len() != PREFIX_CARRIERS.len()
}

/// True if the prefix is assigned to some operator
pub fn is_assigned(prefix: &str) -> bool {
    carrier_for_prefix(prefix).is_some()
}

/// Full table contents grouped per operator, in table order
pub fn groups() -> Vec<PrefixGroup> {
    PREFIX_ASSIGNMENTS
        .iter()
        .map(|&(carrier, prefixes)| PrefixGroup {
            carrier,
            prefixes: prefixes.to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_to_carrier() {
        assert_eq!(carrier_for_prefix("0912"), Some("MCI"));
        assert_eq!(carrier_for_prefix("0935"), Some("Irancell"));
        assert_eq!(carrier_for_prefix("0921"), Some("Rightel"));
        assert_eq!(carrier_for_prefix("0932"), Some("Taliya"));
    }

    #[test]
    fn test_unassigned_prefix() {
        assert_eq!(carrier_for_prefix("0999"), None);
        assert!(!is_assigned("0999"));
        assert!(is_assigned("0990"));
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(carrier_for_number("09123456789"), Some("MCI"));
        assert_eq!(carrier_for_number("+98 935 123 4567"), Some("Irancell"));
        assert_eq!(carrier_for_number("00989021234567"), Some("Irancell"));
        assert_eq!(carrier_for_number("9221234567"), Some("Rightel"));
        assert_eq!(carrier_for_number("abc"), None);
        assert_eq!(carrier_for_number("02188776655"), None);
    }

    #[test]
    fn test_bare_prefix_forms() {
        assert_eq!(carrier_for_prefix("912"), Some("MCI"));
        assert_eq!(carrier_for_prefix(" 0912 "), Some("MCI"));
    }

    #[test]
    fn test_codes_for_carrier() {
        let mci = codes_for_carrier("MCI").unwrap();
        assert!(mci.contains(&"0912"));
        assert_eq!(codes_for_carrier("irancell"), codes_for_carrier("IRANCELL"));
        assert_eq!(codes_for_carrier("Vodafone"), None);
    }

    #[test]
    fn test_counts_match_totals() {
        let counts = prefix_counts();
        assert_eq!(counts.len(), PREFIX_ASSIGNMENTS.len());
        let total: usize = counts.iter().map(|&(_, n)| n).sum();
        assert_eq!(total, all_prefixes().len());
    }

    #[test]
    fn test_no_duplicate_assignments() {
        assert!(!has_duplicate_prefixes());
        assert!(duplicate_prefixes().is_empty());
        assert_eq!(PREFIX_CARRIERS.len(), all_prefixes().len());
    }

    #[test]
    fn test_groups_cover_table() {
        let groups = groups();
        assert_eq!(groups.len(), PREFIX_ASSIGNMENTS.len());
        assert_eq!(groups[0].carrier, "MCI");
        let total: usize = groups.iter().map(|g| g.prefixes.len()).sum();
        assert_eq!(total, all_prefixes().len());
    }
}
