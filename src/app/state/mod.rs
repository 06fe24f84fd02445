mod creation;
mod directory;
mod node;
mod wallet;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use iced::Task;
use soul_ui::widget::Element;

pub use creation::{CreationFlow, CreationStep};
pub use directory::DirectoryStore;
pub use node::{NodeKind, NodePanel};
pub use wallet::{MineState, ReceiveState, SendForm, WalletPanel, WalletsPanel};

use super::{message::Message, view};
use crate::backend::{BackendError, Gateway};

/// A panel of the application. The directory is the only state shared
/// between panels, they only read it.
pub trait State {
    fn view<'a>(&'a self, directory: &'a DirectoryStore) -> Element<'a, view::Message>;
    fn update(
        &mut self,
        _gateway: Arc<dyn Gateway>,
        _directory: &DirectoryStore,
        _message: Message,
    ) -> Task<Message> {
        Task::none()
    }
    /// Mounts the panel: previous results are dropped and fetched again.
    fn reload(&mut self, _gateway: Arc<dyn Gateway>) -> Task<Message> {
        Task::none()
    }
    /// Unmounts the panel, results of calls issued before are ignored.
    fn interrupt(&mut self) {}
    fn close(&mut self) -> Task<Message> {
        Task::none()
    }
}

/// Identity of one mount of a component. Every backend result carries the
/// id it was requested under and is dropped if the component has been
/// remounted or unmounted since.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountId(u64);

impl MountId {
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        MountId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for MountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Returns true if a result issued under `id` may be applied.
fn is_current(mount: Option<MountId>, id: MountId, what: &str) -> bool {
    if mount == Some(id) {
        true
    } else {
        tracing::debug!("Dropping stale {} result of mount {}", what, id);
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    Loading,
    Loaded(T),
    Unavailable(BackendError),
}

impl<T> Loadable<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl<T> From<Result<T, BackendError>> for Loadable<T> {
    fn from(res: Result<T, BackendError>) -> Self {
        match res {
            Ok(t) => Self::Loaded(t),
            Err(e) => Self::Unavailable(e),
        }
    }
}
