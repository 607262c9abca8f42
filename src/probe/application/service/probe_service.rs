use crate::{
    core::{
        domain::{
            error::{DialError, DialResult},
            model::{NodeListDocument, StunNode},
            value_object::{build_target_url, extract_port},
        },
        infrastructure::ApiClient,
    },
    probe::application::{request::ProbeRequest, response::ProbeReport},
};

/// Runs the probe sequence end to end: fetch the node list, find the named
/// node, derive the target URL from its public port, and issue the probe
/// request.
pub struct ProbeService {
    client: ApiClient,
}

impl ProbeService {
    pub fn new() -> Self {
        Self {
            client: ApiClient::new(),
        }
    }

    /// Executes one run.
    ///
    /// The five steps are strictly sequential with no retries: fetch, decode,
    /// lookup, compose, dispatch. Progress lines (extracted port, composed
    /// URL) print as the steps complete, so they are visible even when the
    /// final call fails. Note the asymmetry between the two network calls:
    /// the node-list fetch requires a 200, while the probe target may answer
    /// with any status and the run still succeeds.
    ///
    /// # Errors
    /// Every step failure maps to one `DialError` kind; see the error type
    /// for the full taxonomy. All of them are terminal.
    pub async fn execute(&self, request: &ProbeRequest) -> DialResult<ProbeReport> {
        let document = self.client.fetch_node_list(&request.list_url).await?;
        let node = self.find_node(&document, &request.name)?;

        let port = extract_port(&node.public_addr)?;
        println!("Port from PublicAddr ({}): {}", request.name, port);

        let target_url = build_target_url(&request.target_template, &port)?;
        println!("Generated target URL: {target_url}");

        let status = self.client.dispatch(&target_url).await?;

        Ok(ProbeReport {
            port,
            target_url,
            status,
        })
    }

    fn find_node<'a>(
        &self,
        document: &'a NodeListDocument,
        name: &str,
    ) -> DialResult<&'a StunNode> {
        document
            .find_node(name)
            .ok_or_else(|| DialError::NodeNotFound(name.to_string()))
    }
}

impl Default for ProbeService {
    fn default() -> Self {
        Self::new()
    }
}
