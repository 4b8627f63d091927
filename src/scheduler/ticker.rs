use std::sync::Mutex;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, error, info};

use crate::session::{SharedSession, TickOutcome};

/// One tick per second of simulated playback.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug)]
enum TickerCmd {
    Stop,
}

/// Calls `tick()` on a shared session every `interval` while it is playing.
///
/// The thread stops on `stop()`, on drop, or if the session lock is poisoned.
pub struct Ticker {
    tx: Sender<TickerCmd>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl Ticker {
    pub fn spawn(session: SharedSession, interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel::<TickerCmd>();

        let handle = thread::spawn(move || {
            loop {
                match rx.recv_timeout(interval) {
                    Ok(TickerCmd::Stop) | Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => {
                        let Ok(mut s) = session.lock() else {
                            error!("playback session lock poisoned, ticker stopping");
                            break;
                        };
                        if !s.is_playing() {
                            continue;
                        }
                        match s.tick() {
                            TickOutcome::Advanced => {
                                debug!("tick: advanced to {:?}", s.current_track().map(|t| t.id))
                            }
                            TickOutcome::Repeated => debug!("tick: track repeated"),
                            TickOutcome::Stopped => info!("tick: queue finished"),
                            TickOutcome::Progressed | TickOutcome::Idle => {}
                        }
                    }
                }
            }
            debug!("ticker thread exited");
        });

        Self {
            tx,
            join: Mutex::new(Some(handle)),
        }
    }

    /// Whether the ticker thread is still alive.
    pub fn is_running(&self) -> bool {
        self.join
            .lock()
            .map(|j| j.as_ref().is_some_and(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    /// Stop ticking and wait for the thread. Safe to call more than once.
    pub fn stop(&self) {
        let _ = self.tx.send(TickerCmd::Stop);

        if let Ok(mut j) = self.join.lock()
            && let Some(h) = j.take()
        {
            let _ = h.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
