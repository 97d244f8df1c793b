//! Background keyboard capture.
//!
//! A dedicated thread blocks on the input device and pushes decoded events
//! into an unbounded channel. The game loop drains that channel one event
//! per tick with [`KeyStream::try_next`], so it never waits on the keyboard
//! and key presses are never coalesced or dropped.

use std::io::{self, Read};
use std::sync::mpsc::{channel, Receiver, SendError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::map::{decode, is_interrupt};
use crate::types::InputEvent;

/// Largest chunk taken from the device in one read.
pub const READ_BUF_LEN: usize = 100;

/// Producer half of the input channel.
#[derive(Debug, Clone)]
pub struct KeySender {
    tx: Sender<InputEvent>,
}

impl KeySender {
    pub fn send(&self, event: InputEvent) -> Result<(), SendError<InputEvent>> {
        self.tx.send(event)
    }
}

/// Consumer half of the input channel, owned by the game loop.
#[derive(Debug)]
pub struct KeyStream {
    rx: Receiver<InputEvent>,
    reader: Option<JoinHandle<()>>,
}

impl KeyStream {
    /// Create a connected sender/stream pair with no reader thread.
    pub fn channel() -> (KeySender, KeyStream) {
        let (tx, rx) = channel();
        (KeySender { tx }, KeyStream { rx, reader: None })
    }

    /// Take the oldest pending event without blocking.
    ///
    /// Returns None when nothing is queued or the producer is gone.
    pub fn try_next(&mut self) -> Option<InputEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Whether the stream is fed by a reader thread that has since exited.
    pub fn reader_finished(&self) -> bool {
        self.reader.as_ref().is_some_and(|h| h.is_finished())
    }
}

/// Spawn the capture thread over `source` (usually stdin in raw mode).
///
/// A read error, end of input, or Ctrl-C is reported as [`InputEvent::Esc`]. The
/// thread ends after delivering the first `Esc`, or once the stream is dropped
/// and the next key arrives.
pub fn spawn_reader<R>(source: R) -> io::Result<KeyStream>
where
    R: Read + Send + 'static,
{
    let (sender, mut stream) = KeyStream::channel();
    let handle = thread::Builder::new()
        .name("pacman-input".into())
        .spawn(move || read_loop(source, sender))?;
    stream.reader = Some(handle);
    Ok(stream)
}

fn read_loop<R: Read>(mut source: R, sender: KeySender) {
    let mut buf = [0u8; READ_BUF_LEN];
    loop {
        let event = match source.read(&mut buf) {
            Ok(0) => {
                debug!("input closed");
                Some(InputEvent::Esc)
            }
            Ok(n) if is_interrupt(&buf[..n]) => {
                debug!("interrupt key");
                Some(InputEvent::Esc)
            }
            Ok(n) => decode(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                warn!(error = %e, "input read failed, treating as escape");
                Some(InputEvent::Esc)
            }
        };

        let Some(event) = event else {
            continue;
        };
        if sender.send(event).is_err() || event == InputEvent::Esc {
            break;
        }
    }
}
