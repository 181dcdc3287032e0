//! Shared test infrastructure for playback integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tilawa_playback::{AudioBackend, BackendError, BackendResult, ResourceId};

/// One backend call, as observed by [`MockBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Load(String),
    Play,
    Pause,
    Seek(Duration),
    Release,
}

#[derive(Debug, Default)]
struct Inner {
    calls: Vec<Call>,
    loaded: Option<ResourceId>,
    failing_locators: Vec<String>,
    reject_play: bool,
}

/// Recording backend whose log survives being moved into a player
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far
    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Locators loaded so far, in order
    pub fn loads(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Load(locator) => Some(locator),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().calls.clear();
    }

    /// Resource currently loaded
    pub fn loaded(&self) -> Option<ResourceId> {
        self.inner.lock().unwrap().loaded
    }

    /// Make loads of `locator` fail
    pub fn fail_locator(&self, locator: &str) {
        self.inner
            .lock()
            .unwrap()
            .failing_locators
            .push(locator.to_string());
    }

    /// Make `play` reject (autoplay policy)
    pub fn set_reject_play(&self, reject: bool) {
        self.inner.lock().unwrap().reject_play = reject;
    }
}

#[async_trait]
impl AudioBackend for MockBackend {
    fn load(&mut self, resource: ResourceId, locator: &str) -> BackendResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Load(locator.to_string()));
        if inner.failing_locators.iter().any(|l| l == locator) {
            return Err(BackendError::Unavailable(locator.to_string()));
        }
        inner.loaded = Some(resource);
        Ok(())
    }

    async fn play(&mut self) -> BackendResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Play);
        if inner.reject_play {
            return Err(BackendError::Rejected("user gesture required".into()));
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.inner.lock().unwrap().calls.push(Call::Pause);
    }

    fn seek(&mut self, position: Duration) -> BackendResult<()> {
        self.inner.lock().unwrap().calls.push(Call::Seek(position));
        Ok(())
    }

    fn release(&mut self) {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Release);
        inner.loaded = None;
    }
}

/// `n` distinct verse locators
pub fn verse_urls(n: usize) -> Vec<String> {
    (1..=n)
        .map(|v| format!("https://cdn.islamic.network/quran/audio/128/ar.alafasy/{v}.mp3"))
        .collect()
}

/// Shared log of notifier calls
pub fn notifications() -> (Arc<Mutex<Vec<usize>>>, impl FnMut(usize) + Send + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |index| sink.lock().unwrap().push(index))
}
