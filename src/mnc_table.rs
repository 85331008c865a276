//! MCC/MNC registry for Iranian mobile networks
//! Maps Mobile Network Codes within MCC 432 to carrier names

use crate::models::CarrierEntry;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Mobile Country Code for Iran
pub const IRAN_MCC: &str = "432";

/// Registered MNC assignments within MCC 432, in MNC order
const MNC_ASSIGNMENTS: &[(&str, &str)] = &[
    ("11", "MCI (Hamrah-e-Avval)"),
    ("12", "AvaCell (HiWEB)"),
    ("14", "TKC (KFZO)"),
    ("19", "Espadan (MTCE)"),
    ("20", "Rightel"),
    ("32", "Taliya"),
    ("35", "Irancell (MTN)"),
    ("70", "TCI"),
    ("93", "Iraphone"),
];

/// MNC to carrier name index
pub static MNC_CARRIERS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| MNC_ASSIGNMENTS.iter().copied().collect());

/// Canonical two-digit form of an MNC, or None for non-numeric input
fn canonical_mnc(raw: &str) -> Option<String> {
    let digits = raw.trim();
    if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let stripped = digits.trim_start_matches('0');
    match stripped.len() {
        0 => Some("00".to_string()),
        1 => Some(format!("0{}", stripped)),
        _ => Some(stripped.to_string()),
    }
}

/// Look up the carrier for an (MCC, MNC) pair. A miss is a normal outcome.
pub fn lookup(mcc: &str, mnc: &str) -> Option<&'static str> {
    if mcc.trim() != IRAN_MCC {
        return None;
    }
    lookup_mnc(mnc)
}

/// Look up the carrier for an MNC, assuming the Iranian MCC
pub fn lookup_mnc(mnc: &str) -> Option<&'static str> {
    let key = canonical_mnc(mnc)?;
    MNC_CARRIERS.get(key.as_str()).copied()
}

/// Get carrier display name, falling back to a labeled code if not mapped
pub fn carrier_display_name(mnc: &str) -> String {
    lookup_mnc(mnc)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("MNC-{}", mnc.trim()))
}

/// Full registry contents in MNC order
pub fn entries() -> Vec<CarrierEntry> {
    MNC_ASSIGNMENTS
        .iter()
        .map(|&(mnc, carrier)| CarrierEntry {
            mcc: IRAN_MCC,
            mnc,
            carrier,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_pairs() {
        assert_eq!(lookup("432", "11"), Some("MCI (Hamrah-e-Avval)"));
        assert_eq!(lookup("432", "35"), Some("Irancell (MTN)"));
        assert_eq!(lookup("432", "20"), Some("Rightel"));
    }

    #[test]
    fn test_unknown_mnc() {
        assert_eq!(lookup("432", "999"), None);
        assert_eq!(lookup_mnc("99"), None);
    }

    #[test]
    fn test_wrong_mcc() {
        assert_eq!(lookup("310", "11"), None);
        assert_eq!(lookup("", "11"), None);
    }

    #[test]
    fn test_mnc_normalization() {
        assert_eq!(lookup_mnc("011"), Some("MCI (Hamrah-e-Avval)"));
        assert_eq!(lookup("432", " 11 "), Some("MCI (Hamrah-e-Avval)"));
        assert_eq!(lookup_mnc("x1"), None);
        assert_eq!(lookup_mnc(""), None);
        assert_eq!(lookup_mnc("1100"), None);
    }

    #[test]
    fn test_display_fallback() {
        assert_eq!(carrier_display_name("20"), "Rightel");
        assert_eq!(carrier_display_name("99"), "MNC-99");
    }

    #[test]
    fn test_no_duplicate_keys() {
        assert_eq!(MNC_CARRIERS.len(), MNC_ASSIGNMENTS.len());
    }

    #[test]
    fn test_entries_ordered() {
        let all = entries();
        assert_eq!(all.len(), MNC_ASSIGNMENTS.len());
        assert!(all.windows(2).all(|w| w[0].mnc < w[1].mnc));
        assert!(all.iter().all(|e| e.mcc == IRAN_MCC));
    }

    #[test]
    fn test_lookup_idempotent() {
        assert_eq!(lookup("432", "14"), lookup("432", "14"));
    }
}
