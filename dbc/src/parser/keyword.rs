//! DBC record keywords, gathered in one place the way the teacher's
//! `parser/keyword.rs` does so the grammar and the parser agree on spelling.

pub const VERSION: &str = "VERSION";
pub const NS_: &str = "NS_";
pub const BS_: &str = "BS_";
pub const BU_: &str = "BU_";
pub const BO_: &str = "BO_";
pub const SG_: &str = "SG_";
pub const CM_: &str = "CM_";
pub const VAL_: &str = "VAL_";
pub const VAL_TABLE_: &str = "VAL_TABLE_";
pub const BA_DEF_: &str = "BA_DEF_";
pub const BA_DEF_DEF_: &str = "BA_DEF_DEF_";
pub const BA_: &str = "BA_";
pub const EV_: &str = "EV_";
pub const BO_TX_BU_: &str = "BO_TX_BU_";
pub const SIG_GROUP_: &str = "SIG_GROUP_";

/// `BU_` sentinel meaning "no assigned node" (spec §3 invariant 3).
pub const UNASSIGNED_NODE: &str = "Vector__XXX";
