mod probe_request;

pub use probe_request::{ProbeRequest, USAGE};
