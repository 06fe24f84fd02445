use std::sync::Arc;

use iced::Task;

use crate::app::message::Message;
use crate::backend::{BackendError, Gateway, WalletName};

/// Cache of the wallet names known by the node.
///
/// Only `reload` writes to it. A reload requested while another one is in
/// flight is queued and issued once the first one resolved, so results are
/// applied in the order they were requested. A successful reload replaces
/// the whole list, a failed one keeps the previous list and flags it stale.
#[derive(Debug, Default)]
pub struct DirectoryStore {
    wallets: Vec<WalletName>,
    loaded: bool,
    error: Option<BackendError>,
    in_flight: bool,
    queued: bool,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wallets(&self) -> &[WalletName] {
        &self.wallets
    }

    pub fn contains(&self, wallet: &WalletName) -> bool {
        self.wallets.contains(wallet)
    }

    /// True until the first reload resolved.
    pub fn is_loading(&self) -> bool {
        !self.loaded && self.error.is_none()
    }

    pub fn is_reloading(&self) -> bool {
        self.in_flight
    }

    /// Error of the last reload, if it failed. The list is then stale.
    pub fn error(&self) -> Option<&BackendError> {
        self.error.as_ref()
    }

    pub fn reload(&mut self, gateway: Arc<dyn Gateway>) -> Task<Message> {
        if self.in_flight {
            tracing::debug!("Wallet list reload already in flight, queueing");
            self.queued = true;
            return Task::none();
        }
        self.in_flight = true;
        Task::perform(
            async move { gateway.list_wallets().await },
            Message::WalletsLoaded,
        )
    }

    pub fn on_loaded(
        &mut self,
        gateway: Arc<dyn Gateway>,
        res: Result<Vec<WalletName>, BackendError>,
    ) -> Task<Message> {
        self.in_flight = false;
        match res {
            Ok(wallets) => {
                tracing::info!("Node knows {} wallet(s)", wallets.len());
                self.wallets = wallets;
                self.loaded = true;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("Failed to reload wallet list: {}", e);
                self.error = Some(e);
            }
        }
        if std::mem::take(&mut self.queued) {
            self.reload(gateway)
        } else {
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Command, CommandName};
    use crate::utils::{mock::MockGateway, sandbox::collect};
    use serde_json::json;

    fn names(list: &[&str]) -> Vec<WalletName> {
        list.iter().map(|n| WalletName::from(*n)).collect()
    }

    #[tokio::test]
    async fn nth_reload_shows_nth_list() {
        let gateway = Arc::new(MockGateway::new(vec![
            (Command::ListWallets, Ok(json!(["alice"]))),
            (Command::ListWallets, Ok(json!(["bob", "carol"]))),
            (Command::ListWallets, Ok(json!(["dave"]))),
        ]));
        let mut store = DirectoryStore::new();
        assert!(store.is_loading());

        let task = store.reload(gateway.clone());
        // Both follow-ups collapse into a single queued reload.
        assert!(collect(store.reload(gateway.clone())).await.is_empty());
        assert!(collect(store.reload(gateway.clone())).await.is_empty());

        let mut messages = collect(task).await;
        assert_eq!(messages.len(), 1);
        let Some(Message::WalletsLoaded(res)) = messages.pop() else {
            panic!("unexpected message");
        };
        let queued = store.on_loaded(gateway.clone(), res);
        assert_eq!(store.wallets(), names(&["alice"]).as_slice());
        assert!(store.is_reloading());

        let Some(Message::WalletsLoaded(res)) = collect(queued).await.pop() else {
            panic!("unexpected message");
        };
        let next = store.on_loaded(gateway.clone(), res);
        assert_eq!(store.wallets(), names(&["bob", "carol"]).as_slice());
        assert!(!store.is_reloading());
        assert!(collect(next).await.is_empty());
        assert_eq!(gateway.calls().len(), 2);
    }

    #[tokio::test]
    async fn failed_reload_keeps_previous_list() {
        let gateway = Arc::new(MockGateway::new(vec![
            (Command::ListWallets, Ok(json!(["alice", "bob"]))),
            (
                Command::ListWallets,
                Err(BackendError::BackendUnavailable(
                    CommandName::ListWallets,
                    "connection refused".to_string(),
                )),
            ),
            (Command::ListWallets, Ok(json!(["bob"]))),
        ]));
        let mut store = DirectoryStore::new();

        for _ in 0..2 {
            let Some(Message::WalletsLoaded(res)) =
                collect(store.reload(gateway.clone())).await.pop()
            else {
                panic!("unexpected message");
            };
            let _ = store.on_loaded(gateway.clone(), res);
        }
        assert_eq!(store.wallets(), names(&["alice", "bob"]).as_slice());
        assert!(store.error().is_some());
        assert!(store.contains(&WalletName::from("alice")));

        let Some(Message::WalletsLoaded(res)) = collect(store.reload(gateway.clone())).await.pop()
        else {
            panic!("unexpected message");
        };
        let _ = store.on_loaded(gateway, res);
        assert_eq!(store.wallets(), names(&["bob"]).as_slice());
        assert!(store.error().is_none());
        assert!(!store.contains(&WalletName::from("alice")));
    }
}
