use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::sync::Mutex;
use tracing::debug;

/// Page state plus a mounted flag.
///
/// Handlers await the backend first and then [`apply`](Self::apply) the result;
/// once the page is unmounted, late results are dropped instead of written.
pub struct View<S> {
    state: Arc<Mutex<S>>,
    mounted: Arc<AtomicBool>,
}

impl<S> Clone for View<S> {
    fn clone(&self) -> Self {
        Self { state: Arc::clone(&self.state), mounted: Arc::clone(&self.mounted) }
    }
}

impl<S: Default> Default for View<S> {
    fn default() -> Self {
        Self::mount(S::default())
    }
}

impl<S> View<S> {
    pub fn mount(state: S) -> Self {
        Self { state: Arc::new(Mutex::new(state)), mounted: Arc::new(AtomicBool::new(true)) }
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Run `f` against the state if still mounted; `false` means the update was discarded.
    pub async fn apply<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut S),
    {
        if !self.is_mounted() {
            debug!("view unmounted; result discarded");
            return false;
        }
        let mut state = self.state.lock().await;
        if !self.is_mounted() {
            debug!("view unmounted; result discarded");
            return false;
        }
        f(&mut state);
        true
    }
}

impl<S: Clone> View<S> {
    pub async fn snapshot(&self) -> S {
        self.state.lock().await.clone()
    }
}
