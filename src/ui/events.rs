use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::sync::SyncEvent;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Outcome reported by the sync worker.
    Sync(SyncEvent),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the terminal reader thread. It stops once every receiver is gone.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)).is_ok(),
                        Ok(Event::Resize(cols, rows)) => {
                            event_tx.send(AppEvent::Resize(cols, rows)).is_ok()
                        }
                        Ok(_) => true,
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal read failed");
                            false
                        }
                    },
                    Ok(false) => true,
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal poll failed");
                        false
                    }
                };
                if !forwarded {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
