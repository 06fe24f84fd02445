use std::fmt;

use bitcoin::Amount;
use serde_json::{json, Map, Value};

use super::model::WalletName;

/// The fixed set of operations the node daemon exposes to the GUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    ListWallets,
    WalletInfo,
    ListTxs,
    GenerateToAddress,
    GenerateAddress,
    Send,
    NewMmc,
    LoadWalletWithMmc,
    GetData,
    GetBlockchainInfo,
}

impl CommandName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListWallets => "list_wallets",
            Self::WalletInfo => "wallet_info",
            Self::ListTxs => "list_txs",
            Self::GenerateToAddress => "generate_to_address",
            Self::GenerateAddress => "generate_address",
            Self::Send => "send",
            Self::NewMmc => "new_mmc",
            Self::LoadWalletWithMmc => "load_wallet_with_mmc",
            Self::GetData => "get_data",
            Self::GetBlockchainInfo => "get_blockchain_info",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single backend request: a command name with its named arguments.
#[derive(Clone, PartialEq, Eq)]
pub enum Command {
    ListWallets,
    WalletInfo { wallet: WalletName },
    ListTxs { wallet: WalletName },
    GenerateToAddress { wallet: WalletName },
    GenerateAddress { wallet: WalletName },
    Send {
        sender: WalletName,
        amount: Amount,
        receiver: String,
    },
    NewMmc,
    LoadWalletWithMmc { mmc: String },
    GetData,
    GetBlockchainInfo,
}

impl Command {
    pub fn name(&self) -> CommandName {
        match self {
            Self::ListWallets => CommandName::ListWallets,
            Self::WalletInfo { .. } => CommandName::WalletInfo,
            Self::ListTxs { .. } => CommandName::ListTxs,
            Self::GenerateToAddress { .. } => CommandName::GenerateToAddress,
            Self::GenerateAddress { .. } => CommandName::GenerateAddress,
            Self::Send { .. } => CommandName::Send,
            Self::NewMmc => CommandName::NewMmc,
            Self::LoadWalletWithMmc { .. } => CommandName::LoadWalletWithMmc,
            Self::GetData => CommandName::GetData,
            Self::GetBlockchainInfo => CommandName::GetBlockchainInfo,
        }
    }

    /// Named-argument payload of the command.
    pub fn args(&self) -> Map<String, Value> {
        let value = match self {
            Self::ListWallets | Self::NewMmc | Self::GetData | Self::GetBlockchainInfo => json!({}),
            Self::WalletInfo { wallet }
            | Self::ListTxs { wallet }
            | Self::GenerateToAddress { wallet }
            | Self::GenerateAddress { wallet } => json!({ "walletName": wallet.as_str() }),
            Self::Send {
                sender,
                amount,
                receiver,
            } => json!({
                "sender": sender.as_str(),
                "amount": amount.to_sat(),
                "receiver": receiver,
            }),
            Self::LoadWalletWithMmc { mmc } => json!({ "mmc": mmc }),
        };
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

// The recovery phrase must never end up in the logs.
impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadWalletWithMmc { .. } => f
                .debug_struct("LoadWalletWithMmc")
                .field("mmc", &"<redacted>")
                .finish(),
            _ => write!(f, "{}({})", self.name(), Value::Object(self.args())),
        }
    }
}
