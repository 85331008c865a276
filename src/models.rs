use serde::Serialize;

/// One row of the MCC/MNC registry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarrierEntry {
    pub mcc: &'static str,
    pub mnc: &'static str,
    pub carrier: &'static str,
}

/// One operator's assigned dialing-prefix block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefixGroup {
    pub carrier: &'static str,
    pub prefixes: Vec<&'static str>,
}
