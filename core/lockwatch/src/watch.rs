//! `watch`: run the poll loop and stream notifications to stdout.
//!
//! The loop lives until stdin reaches EOF, so a parent process owns our
//! lifetime by holding the pipe open. A closed stdout (the display went away)
//! turns the consumer unavailable; polling continues until stdin closes.

use std::io::{self, Read, Write};

use lockwatch_core::{LockwatchConfig, PollLoop, StatusConsumer, StatusNotification};
use tracing::{info, warn};

pub fn run(config: &LockwatchConfig) {
    let mut poll = PollLoop::from_config(config);
    poll.subscribe(JsonLinesConsumer::new(io::stdout()));
    poll.start();

    wait_for_eof(io::stdin().lock());

    info!("stdin closed, stopping");
    poll.stop();
}

fn wait_for_eof(mut input: impl Read) {
    if let Err(err) = io::copy(&mut input, &mut io::sink()) {
        warn!(error = %err, "Failed reading stdin");
    }
}

/// Writes each notification as one JSON line.
pub struct JsonLinesConsumer<W: Write> {
    writer: W,
    closed: bool,
}

impl<W: Write> JsonLinesConsumer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            closed: false,
        }
    }

    fn write_line(&mut self, notification: &StatusNotification) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, notification)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

impl<W: Write + Send> StatusConsumer for JsonLinesConsumer<W> {
    fn deliver(&mut self, notification: &StatusNotification) {
        if let Err(err) = self.write_line(notification) {
            warn!(error = %err, "Status output closed; further notifications dropped");
            self.closed = true;
        }
    }

    fn is_available(&self) -> bool {
        !self.closed
    }
}
