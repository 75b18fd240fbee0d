//! Instrumented entropy provider for lifecycle tests.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::entropy::{EntropyProvider, EntropySource};
use crate::error::{Result, SecureRandomError};

#[derive(Debug, Clone)]
pub(crate) enum Behaviour {
    /// Hand out these bytes in order across every handle.
    Replay(Vec<u8>),
    /// Acquire succeeds, every fill fails.
    FailFill,
    /// Acquire fails.
    FailAcquire,
}

#[derive(Debug, Default)]
struct Counters {
    acquired: AtomicUsize,
    released: AtomicUsize,
    fills: AtomicUsize,
}

#[derive(Debug, Clone)]
pub(crate) struct MockProvider {
    behaviour: Behaviour,
    bytes: Arc<Mutex<Vec<u8>>>,
    counters: Arc<Counters>,
}

impl MockProvider {
    pub(crate) fn new(behaviour: Behaviour) -> Self {
        let bytes = match &behaviour {
            Behaviour::Replay(bytes) => bytes.clone(),
            _ => Vec::new(),
        };

        Self {
            behaviour,
            bytes: Arc::new(Mutex::new(bytes)),
            counters: Arc::default(),
        }
    }

    pub(crate) fn acquired(&self) -> usize {
        self.counters.acquired.load(Ordering::SeqCst)
    }

    pub(crate) fn released(&self) -> usize {
        self.counters.released.load(Ordering::SeqCst)
    }

    pub(crate) fn fills(&self) -> usize {
        self.counters.fills.load(Ordering::SeqCst)
    }
}

pub(crate) struct MockSource {
    fail: bool,
    bytes: Arc<Mutex<Vec<u8>>>,
    counters: Arc<Counters>,
}

impl EntropyProvider for MockProvider {
    type Source = MockSource;

    fn acquire(&self) -> Result<MockSource> {
        if let Behaviour::FailAcquire = self.behaviour {
            return Err(SecureRandomError::EntropySourceUnavailable(
                io::Error::other("mock acquire failure"),
            ));
        }

        self.counters.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(MockSource {
            fail: matches!(self.behaviour, Behaviour::FailFill),
            bytes: Arc::clone(&self.bytes),
            counters: Arc::clone(&self.counters),
        })
    }
}

impl EntropySource for MockSource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        self.counters.fills.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(SecureRandomError::EntropySourceUnavailable(
                io::Error::other("mock fill failure"),
            ));
        }

        let mut bytes = self.bytes.lock().unwrap();
        let rest = bytes.split_off(buf.len());
        buf.copy_from_slice(&bytes);
        *bytes = rest;
        Ok(())
    }
}

impl Drop for MockSource {
    fn drop(&mut self) {
        self.counters.released.fetch_add(1, Ordering::SeqCst);
    }
}
