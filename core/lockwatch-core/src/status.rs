//! Connection status and the notification delivered to consumers.
//!
//! Wire shape (one per tick):
//!
//! ```text
//! { "status": "Connected",          "data": { "port": 5678, "protocol": "https", "pid": 1234 } }
//! { "status": "Waiting for Client", "data": null }
//! ```

use serde::{Deserialize, Serialize};

use crate::lockfile::LockfileRecord;

/// The subset of a lockfile forwarded to the display. No password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    pub port: Option<u16>,
    pub protocol: String,
    pub pid: Option<u32>,
}

impl From<&LockfileRecord> for ConnectionInfo {
    fn from(record: &LockfileRecord) -> Self {
        Self {
            port: record.port,
            protocol: record.protocol.clone(),
            pid: record.pid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected(ConnectionInfo),
    Waiting,
}

impl ConnectionStatus {
    pub fn from_record(record: Option<&LockfileRecord>) -> Self {
        match record {
            Some(record) => ConnectionStatus::Connected(record.into()),
            None => ConnectionStatus::Waiting,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected(_))
    }

    pub fn label(&self) -> StatusLabel {
        match self {
            ConnectionStatus::Connected(_) => StatusLabel::Connected,
            ConnectionStatus::Waiting => StatusLabel::Waiting,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusLabel {
    Connected,
    #[serde(rename = "Waiting for Client")]
    Waiting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusNotification {
    pub status: StatusLabel,
    pub data: Option<ConnectionInfo>,
}

impl From<ConnectionStatus> for StatusNotification {
    fn from(status: ConnectionStatus) -> Self {
        match status {
            ConnectionStatus::Connected(info) => StatusNotification {
                status: StatusLabel::Connected,
                data: Some(info),
            },
            ConnectionStatus::Waiting => StatusNotification {
                status: StatusLabel::Waiting,
                data: None,
            },
        }
    }
}
