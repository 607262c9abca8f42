//! Domain model for the node-list document served by the relay manager.
//!
//! This module defines the structure of the JSON body returned by the
//! node-list endpoint. Only `Name` and `PublicAddr` drive the probe; the
//! remaining fields mirror the upstream schema and are carried as typed
//! pass-through data. Decoding is forward-compatible: every field defaults
//! when absent and unknown keys are ignored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The decoded body of the node-list response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeListDocument {
    /// Whether the STUN module is enabled on the upstream device.
    #[serde(rename = "ModuleEnable")]
    pub module_enable: bool,
    /// Node records in document order. Order is significant: name lookups
    /// return the first match, and names are not guaranteed unique.
    pub list: Vec<StunNode>,
    /// Upstream result code.
    pub ret: i64,
    /// Per-node traffic and connection counters, keyed by node key.
    pub statistics: HashMap<String, NodeStatistics>,
}

impl NodeListDocument {
    /// Returns the first node whose `Name` equals `name` exactly
    /// (case-sensitive, no trimming), or `None` if there is no match.
    pub fn find_node(&self, name: &str) -> Option<&StunNode> {
        self.list.iter().find(|node| node.name == name)
    }
}

/// One relay/forwarding node as described by the upstream API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StunNode {
    /// Upstream record key (also indexes into the statistics map).
    #[serde(rename = "Key")]
    pub key: String,
    /// Display name; the probe's lookup key.
    #[serde(rename = "Name")]
    pub name: String,
    /// STUN mechanism in use (e.g. TCP or UDP hole punching).
    #[serde(rename = "StunType")]
    pub stun_type: String,
    #[serde(rename = "Enable")]
    pub enable: bool,
    #[serde(rename = "DisablePortForward")]
    pub disable_port_forward: bool,
    #[serde(rename = "LastLogs")]
    pub last_logs: String,
    /// Local listen address used for the STUN binding.
    #[serde(rename = "StunLocalAddr")]
    pub stun_local_addr: String,
    #[serde(rename = "TargetAddrList")]
    pub target_addr_list: Vec<String>,
    /// Externally reachable `host:port` string. The probe derives its target
    /// port from the last colon-delimited segment of this value.
    #[serde(rename = "PublicAddr")]
    pub public_addr: String,
    #[serde(rename = "PublicAddrInfo")]
    pub public_addr_info: String,
    // Upstream key spelling ("Histroy") is part of the wire format.
    #[serde(rename = "PublicAddrHistroy")]
    pub public_addr_history: Vec<AddrRecord>,
    #[serde(rename = "WebhookEnable")]
    pub webhook_enable: bool,
    #[serde(rename = "WebhookProxy")]
    pub webhook_proxy: String,
    #[serde(rename = "WebhookCallTime")]
    pub webhook_call_time: String,
    #[serde(rename = "WebhookCallResult")]
    pub webhook_call_result: bool,
    #[serde(rename = "WebhookCallErrorMsg")]
    pub webhook_call_error_msg: String,
    #[serde(rename = "WebhookCallHistroy")]
    pub webhook_call_history: Vec<String>,
    #[serde(rename = "GlobalWebhook")]
    pub global_webhook: bool,
    #[serde(rename = "GlobalWebhookCallTime")]
    pub global_webhook_call_time: String,
    #[serde(rename = "GlobalWebhookCallResult")]
    pub global_webhook_call_result: bool,
    #[serde(rename = "GlobalWebhookCallErrorMsg")]
    pub global_webhook_call_error_msg: String,
    #[serde(rename = "GlobalWebhookCallHistroy")]
    pub global_webhook_call_history: Vec<String>,
    #[serde(rename = "Options")]
    pub options: NodeOptions,
}

/// A historical public-address observation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AddrRecord {
    #[serde(rename = "AddrRecord")]
    pub addr_record: String,
    #[serde(rename = "UpdateTime")]
    pub update_time: String,
}

/// Relay tuning options attached to each node. None of these influence the
/// probe; they are preserved so a decoded document round-trips the upstream
/// schema.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeOptions {
    #[serde(rename = "SingleProxyMaxTCPConnections")]
    pub single_proxy_max_tcp_connections: i64,
    #[serde(rename = "SingleProxyMaxUDPReadTargetDatagoroutineCount")]
    pub single_proxy_max_udp_read_target_data_goroutine_count: i64,
    #[serde(rename = "UDPSessionTimeout")]
    pub udp_session_timeout: i64,
    #[serde(rename = "SafeMode")]
    pub safe_mode: String,
    #[serde(rename = "TCPListenTLS")]
    pub tcp_listen_tls: bool,
    #[serde(rename = "TCPRelayTLS")]
    pub tcp_relay_tls: bool,
    #[serde(rename = "TCPRelayTLSServerName")]
    pub tcp_relay_tls_server_name: String,
    #[serde(rename = "TCPRelayTLSInsecureSkipVerify")]
    pub tcp_relay_tls_insecure_skip_verify: bool,
    #[serde(rename = "TCPStreamEncryptionSource")]
    pub tcp_stream_encryption_source: bool,
    #[serde(rename = "TCPStreamEncryptionAccept")]
    pub tcp_stream_encryption_accept: bool,
    #[serde(rename = "TCPStreamEncryptionKey")]
    pub tcp_stream_encryption_key: String,
    #[serde(rename = "SinglePortSpeedLimit")]
    pub single_port_speed_limit: bool,
    #[serde(rename = "SinglePortSendSpeedLimit")]
    pub single_port_send_speed_limit: i64,
    #[serde(rename = "SinglePortReceSpeedLimit")]
    pub single_port_rece_speed_limit: i64,
    #[serde(rename = "RuleSpeedLimit")]
    pub rule_speed_limit: bool,
    #[serde(rename = "RuleSendSpeedLimit")]
    pub rule_send_speed_limit: i64,
    #[serde(rename = "RuleReceSpeedLimit")]
    pub rule_rece_speed_limit: i64,
    #[serde(rename = "UDPPacketSize")]
    pub udp_packet_size: i64,
    #[serde(rename = "UDPPacketSourceEncryption")]
    pub udp_packet_source_encryption: bool,
    #[serde(rename = "UDPPacketAcceptEncryption")]
    pub udp_packet_accept_encryption: bool,
    #[serde(rename = "UDPPacketEncryptionKey")]
    pub udp_packet_encryption_key: String,
}

/// Traffic and connection counters for one node.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeStatistics {
    #[serde(rename = "TrafficIn")]
    pub traffic_in: i64,
    #[serde(rename = "TrafficOut")]
    pub traffic_out: i64,
    #[serde(rename = "TCPCurrentConnections")]
    pub tcp_current_connections: i64,
    #[serde(rename = "UDPCurrentConnections")]
    pub udp_current_connections: i64,
}
