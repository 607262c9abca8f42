mod node_list;

pub use node_list::{AddrRecord, NodeListDocument, NodeOptions, NodeStatistics, StunNode};
