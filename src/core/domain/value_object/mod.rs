mod public_addr;
mod target_url;

pub use public_addr::extract_port;
pub use target_url::build_target_url;
