//! Scripted file-existence probe.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};

use crate::locator::FileProbe;

/// Probe answering from a fixed set of existing paths, recording every
/// query it receives.
#[derive(Clone, Default)]
pub struct StaticProbe {
    shared: Arc<Mutex<ProbeState>>,
}

#[derive(Default)]
struct ProbeState {
    existing: BTreeSet<Utf8PathBuf>,
    probed: Vec<Utf8PathBuf>,
}

impl StaticProbe {
    /// Probe for which nothing exists.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Probe for which exactly `paths` exist.
    pub fn with_existing<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Utf8PathBuf>,
    {
        let probe = Self::default();
        {
            let mut state = probe.lock();
            state.existing = paths.into_iter().map(Into::into).collect();
        }
        probe
    }

    /// Every path queried so far, in order.
    pub fn probed(&self) -> Vec<Utf8PathBuf> {
        self.lock().probed.clone()
    }

    fn lock(&self) -> MutexGuard<'_, ProbeState> {
        self.shared.lock().unwrap_or_else(|poison| poison.into_inner())
    }
}

#[async_trait]
impl FileProbe for StaticProbe {
    async fn exists(&self, path: &Utf8Path) -> bool {
        let mut state = self.lock();
        state.probed.push(path.to_owned());
        state.existing.contains(path)
    }
}
