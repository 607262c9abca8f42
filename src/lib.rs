//! stun-dial queries a relay manager's node-list endpoint, finds the node
//! with a given name, extracts the port token from its `PublicAddr`, blindly
//! substitutes it into a URL template, and issues a GET to the resulting URL.
//!
//! The whole flow is linear glue with no retries and no shared state; see
//! [`ProbeService::execute`] for the step sequence and [`DialError`] for the
//! failure taxonomy.
//!
//! # Examples
//!
//! ```no_run
//! use stun_dial::{DialResult, ProbeRequest, ProbeService};
//!
//! #[tokio::main]
//! async fn main() -> DialResult<()> {
//!     let request = ProbeRequest {
//!         name: "node-a".to_string(),
//!         list_url: "http://router.local/api/stun".to_string(),
//!         target_template: "http://backend:port/health".to_string(),
//!     };
//!
//!     let report = ProbeService::new().execute(&request).await?;
//!     println!("probe answered {}", report.status.as_u16());
//!     Ok(())
//! }
//! ```

mod core;
mod probe;

pub use crate::core::domain::error::{DialError, DialResult};
pub use crate::core::domain::model::{
    AddrRecord, NodeListDocument, NodeOptions, NodeStatistics, StunNode,
};
pub use crate::core::domain::value_object::{build_target_url, extract_port};
pub use crate::probe::application::request::{ProbeRequest, USAGE};
pub use crate::probe::application::response::ProbeReport;
pub use crate::probe::application::service::ProbeService;
