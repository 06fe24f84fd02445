//! Command Gateway: the only way the GUI talks to the node daemon.

pub mod command;
pub mod error;
pub mod http;
pub mod model;

use std::fmt::Debug;

use async_trait::async_trait;
use bitcoin::Amount;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use command::{Command, CommandName};
pub use error::{BackendError, ErrorKind};
pub use http::HttpGateway;
pub use model::{
    BitcoinNodeInfo, LightningNodeInfo, NodeInfo, TransactionRecord, WalletName, WalletSummary,
};

#[async_trait]
pub trait Gateway: Debug + Send + Sync {
    /// Issues exactly one backend call, no batching nor caching.
    async fn invoke(&self, command: Command) -> Result<Value, BackendError>;

    async fn list_wallets(&self) -> Result<Vec<WalletName>, BackendError> {
        let cmd = Command::ListWallets;
        let name = cmd.name();
        decode(name, self.invoke(cmd).await?)
    }

    async fn wallet_info(&self, wallet: &WalletName) -> Result<WalletSummary, BackendError> {
        let cmd = Command::WalletInfo {
            wallet: wallet.clone(),
        };
        let name = cmd.name();
        decode(name, self.invoke(cmd).await?)
    }

    async fn list_txs(&self, wallet: &WalletName) -> Result<Vec<TransactionRecord>, BackendError> {
        let cmd = Command::ListTxs {
            wallet: wallet.clone(),
        };
        let name = cmd.name();
        decode(name, self.invoke(cmd).await?)
    }

    async fn generate_to_address(&self, wallet: &WalletName) -> Result<(), BackendError> {
        self.invoke(Command::GenerateToAddress {
            wallet: wallet.clone(),
        })
        .await
        .map(|_| ())
    }

    async fn generate_address(&self, wallet: &WalletName) -> Result<String, BackendError> {
        let cmd = Command::GenerateAddress {
            wallet: wallet.clone(),
        };
        let name = cmd.name();
        decode(name, self.invoke(cmd).await?)
    }

    async fn send(
        &self,
        sender: &WalletName,
        amount: Amount,
        receiver: &str,
    ) -> Result<(), BackendError> {
        self.invoke(Command::Send {
            sender: sender.clone(),
            amount,
            receiver: receiver.to_string(),
        })
        .await
        .map(|_| ())
    }

    async fn new_mmc(&self) -> Result<String, BackendError> {
        let cmd = Command::NewMmc;
        let name = cmd.name();
        decode(name, self.invoke(cmd).await?)
    }

    async fn load_wallet_with_mmc(&self, mmc: &str) -> Result<(), BackendError> {
        self.invoke(Command::LoadWalletWithMmc {
            mmc: mmc.to_string(),
        })
        .await
        .map(|_| ())
    }

    async fn lightning_info(&self) -> Result<LightningNodeInfo, BackendError> {
        let cmd = Command::GetData;
        let name = cmd.name();
        decode(name, self.invoke(cmd).await?)
    }

    async fn blockchain_info(&self) -> Result<BitcoinNodeInfo, BackendError> {
        let cmd = Command::GetBlockchainInfo;
        let name = cmd.name();
        decode(name, self.invoke(cmd).await?)
    }
}

fn decode<T: DeserializeOwned>(command: CommandName, value: Value) -> Result<T, BackendError> {
    serde_json::from_value(value).map_err(|e| {
        BackendError::Unknown(command, format!("unexpected response from node: {}", e))
    })
}
