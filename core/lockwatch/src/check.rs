//! `check`: one read, one notification, exit code says which.

use std::io::{self, Write};
use std::path::Path;

use lockwatch_core::{ConnectionStatus, LockfileReader, LockwatchConfig, StatusNotification};

pub const EXIT_CONNECTED: i32 = 0;
pub const EXIT_WAITING: i32 = 2;

pub fn run(config: &LockwatchConfig, path: Option<&Path>) -> i32 {
    let reader = LockfileReader::new(config.locator());
    let status = check_status(&reader, path);

    let notification = StatusNotification::from(status.clone());
    let mut stdout = io::stdout().lock();
    if let Err(err) = serde_json::to_writer(&mut stdout, &notification)
        .map_err(io::Error::from)
        .and_then(|()| stdout.write_all(b"\n"))
    {
        tracing::warn!(error = %err, "Failed to write status");
    }

    exit_code(&status)
}

fn check_status(reader: &LockfileReader, path: Option<&Path>) -> ConnectionStatus {
    let record = reader.read(path);
    if let Some(record) = &record {
        tracing::debug!(
            source = ?record.source_path,
            base_url = ?record.base_url(),
            "Lockfile found"
        );
    }
    ConnectionStatus::from_record(record.as_ref())
}

fn exit_code(status: &ConnectionStatus) -> i32 {
    if status.is_connected() {
        EXIT_CONNECTED
    } else {
        EXIT_WAITING
    }
}
