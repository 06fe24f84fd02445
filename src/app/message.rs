use crate::app::{state::MountId, view};
use crate::backend::{BackendError, NodeInfo, TransactionRecord, WalletName, WalletSummary};

#[derive(Debug, Clone)]
pub enum Message {
    View(view::Message),
    WalletsLoaded(Result<Vec<WalletName>, BackendError>),
    WalletSummary(MountId, Result<WalletSummary, BackendError>),
    WalletTransactions(MountId, Result<Vec<TransactionRecord>, BackendError>),
    Mined(MountId, Result<(), BackendError>),
    AddressGenerated(MountId, Result<String, BackendError>),
    Sent(MountId, Result<(), BackendError>),
    PhraseGenerated(MountId, Result<String, BackendError>),
    WalletRegistered(MountId, Result<(), BackendError>),
    NodeInfo(MountId, Result<NodeInfo, BackendError>),
}
