//! Byte transport between the simulated RAN and the AMF.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{ErrorKind, Read, Write};
use std::net::TcpStream;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// A blocking, message-oriented transport.
///
/// `blocking_receive` is the flow engine's single suspension point.  It
/// returns `Ok(None)` when the peer has closed the connection or a
/// cancellation has been requested, which ends the flow without error.
pub trait Transport {
    fn send(&mut self, message: &[u8]) -> Result<()>;
    fn blocking_receive(&mut self) -> Result<Option<Vec<u8>>>;
    fn is_open(&self) -> bool;
    fn close(&mut self);
}

const RECEIVE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// TCP transport with 4-byte big-endian length framing.
pub struct TcpTransport {
    stream: TcpStream,
    cancelled: Arc<AtomicBool>,
    open: bool,
}

impl TcpTransport {
    pub fn connect(host: &str, port: u16, cancelled: Arc<AtomicBool>) -> Result<Self> {
        let stream = TcpStream::connect((host, port))
            .with_context(|| format!("failed to connect to AMF at {host}:{port}"))?;
        // Short read timeout so the receive loop can notice cancellation.
        stream.set_read_timeout(Some(RECEIVE_POLL_INTERVAL))?;
        Ok(TcpTransport {
            stream,
            cancelled,
            open: true,
        })
    }

    fn read_exact_interruptible(&mut self, buf: &mut [u8]) -> Result<Option<()>> {
        let mut filled = 0;
        while filled < buf.len() {
            if self.cancelled.load(Ordering::Relaxed) {
                self.close();
                return Ok(None);
            }
            match self.stream.read(&mut buf[filled..]) {
                Ok(0) => {
                    self.close();
                    return Ok(None);
                }
                Ok(n) => filled += n,
                Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(Some(()))
    }
}

impl Transport for TcpTransport {
    fn send(&mut self, message: &[u8]) -> Result<()> {
        self.stream
            .write_all(&(message.len() as u32).to_be_bytes())?;
        self.stream.write_all(message)?;
        Ok(())
    }

    fn blocking_receive(&mut self) -> Result<Option<Vec<u8>>> {
        let mut length = [0u8; 4];
        if self.read_exact_interruptible(&mut length)?.is_none() {
            return Ok(None);
        }
        let mut message = vec![0u8; u32::from_be_bytes(length) as usize];
        if self.read_exact_interruptible(&mut message)?.is_none() {
            return Ok(None);
        }
        Ok(Some(message))
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        if self.open {
            let _ = self.stream.shutdown(std::net::Shutdown::Both);
            self.open = false;
        }
    }
}

/// In-memory transport scripted with canned peer replies.
///
/// The script is indexed by outbound message number: sending the Nth
/// message enqueues `script[N]` as the peer's replies.  Once the inbox
/// is drained and the script exhausted, `blocking_receive` reports the
/// connection as closed.
pub struct ScriptedTransport {
    script: Vec<Vec<Vec<u8>>>,
    inbox: VecDeque<Vec<u8>>,
    sent: Rc<RefCell<Vec<Vec<u8>>>>,
    open: bool,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Vec<Vec<u8>>>) -> Self {
        ScriptedTransport {
            script,
            inbox: VecDeque::new(),
            sent: Rc::new(RefCell::new(Vec::new())),
            open: true,
        }
    }

    /// Shared handle to the log of messages sent so far.
    pub fn sent_log(&self) -> Rc<RefCell<Vec<Vec<u8>>>> {
        Rc::clone(&self.sent)
    }
}

impl Transport for ScriptedTransport {
    fn send(&mut self, message: &[u8]) -> Result<()> {
        let index = self.sent.borrow().len();
        self.sent.borrow_mut().push(message.to_vec());
        if let Some(replies) = self.script.get(index) {
            self.inbox.extend(replies.iter().cloned());
        }
        Ok(())
    }

    fn blocking_receive(&mut self) -> Result<Option<Vec<u8>>> {
        match self.inbox.pop_front() {
            Some(message) => Ok(Some(message)),
            None => {
                self.open = false;
                Ok(None)
            }
        }
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        self.open = false;
    }
}
