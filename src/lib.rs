//! Static reference tables for Iranian mobile carrier codes
//!
//! Two tables: the MCC/MNC registry (MCC 432) and the national dialing
//! prefix assignments per operator. Both are built once behind `LazyLock`,
//! never mutated afterwards, and safe to share across threads.

pub mod mnc_table;
pub mod models;
pub mod prefix_table;
