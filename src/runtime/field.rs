//! Message loop for one mounted field

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::Source;
use crate::registry::LookupError;

use super::{Host, Widget};

/// Drives a widget: dispatches messages, runs commands, collects async results
pub struct FieldRuntime<W, H> {
    widget: W,
    host: H,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// Messages promised by spawned work but not yet received
    pending: usize,
}

impl<W: Widget, H: Host> FieldRuntime<W, H> {
    pub fn new(widget: W, host: H) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let mut runtime = Self {
            widget,
            host,
            msg_tx,
            msg_rx,
            pending: 0,
        };
        if let Some(cmd) = runtime.widget.mount() {
            runtime.process_cmd(cmd);
        }
        runtime
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_parts(self) -> (W, H) {
        (self.widget, self.host)
    }

    /// Number of async messages still expected
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Run one message through the update loop, returning whether to redraw
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        if let Msg::StopEditing { cancel } = msg {
            tracing::debug!("FieldRuntime: stop_editing(cancel = {})", cancel);
            self.host.stop_editing(cancel);
            return false;
        }

        match self.widget.update(msg) {
            Some(cmd) => {
                let needs_redraw = cmd.needs_redraw();
                self.process_cmd(cmd);
                needs_redraw
            }
            None => false,
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::DebouncedLookup { revision, delay_ms } => {
                let tx = self.msg_tx.clone();
                self.pending += 1;
                std::thread::spawn(move || {
                    std::thread::sleep(Duration::from_millis(delay_ms));
                    let _ = tx.send(Msg::LookupReady { revision });
                });
            }
            Cmd::RunLookup { generation, query } => {
                let Source::Remote(lookup) = self.widget.field().source() else {
                    tracing::warn!("RunLookup issued for a field without a remote source");
                    return;
                };
                let lookup = Arc::clone(lookup);
                let tx = self.msg_tx.clone();
                self.pending += 1;
                std::thread::spawn(move || {
                    let result = panic::catch_unwind(AssertUnwindSafe(|| {
                        lookup.lookup_options(&query)
                    }))
                    .unwrap_or_else(|_| Err(LookupError::Failed("lookup panicked".to_string())));
                    let _ = tx.send(Msg::LookupCompleted { generation, result });
                });
            }
            Cmd::Commit { value, label } => {
                tracing::debug!("FieldRuntime: commit {:?} ({:?})", value, label);
                self.host.on_change(value);
            }
            Cmd::StopEditing { cancel } => {
                // Deferred so the host finishes handling the current event first
                self.pending += 1;
                let _ = self.msg_tx.send(Msg::StopEditing { cancel });
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Process every async message that has already arrived
    pub fn pump(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            needs_redraw |= self.dispatch(msg);
        }
        needs_redraw
    }

    /// Wait up to `timeout` for one async message and process it
    ///
    /// Returns false if nothing arrived in time.
    pub fn pump_blocking(&mut self, timeout: Duration) -> bool {
        match self.msg_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.pending = self.pending.saturating_sub(1);
                self.dispatch(msg);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Process async messages until none are pending
    ///
    /// Returns false if `timeout` elapsed first.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.pending > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !self.pump_blocking(remaining) {
                return false;
            }
        }
        true
    }
}
