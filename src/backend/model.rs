use std::fmt;

use bitcoin::Amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier of a wallet known by the node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletName(String);

impl WalletName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WalletName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for WalletName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for WalletName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of `wallet_info`, amounts are given in BTC by the node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WalletSummary {
    #[serde(with = "bitcoin::amount::serde::as_btc")]
    pub balance: Amount,
    #[serde(with = "bitcoin::amount::serde::as_btc")]
    pub immature_balance: Amount,
    pub txcount: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ConfirmationTime {
    pub height: u32,
    pub timestamp: u64,
}

impl ConfirmationTime {
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.timestamp)
            .ok()
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
    }
}

/// Entry of `list_txs`, amounts are given in satoshis by the node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionRecord {
    pub txid: String,
    #[serde(with = "bitcoin::amount::serde::as_sat")]
    pub received: Amount,
    #[serde(with = "bitcoin::amount::serde::as_sat")]
    pub sent: Amount,
    #[serde(default, with = "bitcoin::amount::serde::as_sat::opt")]
    pub fee: Option<Amount>,
    #[serde(default)]
    pub confirmation_time: Option<ConfirmationTime>,
}

impl TransactionRecord {
    /// True if the wallet received more than it spent in this transaction.
    pub fn is_incoming(&self) -> bool {
        self.received > self.sent
    }

    /// Absolute value of the net balance change of the wallet.
    pub fn net_amount(&self) -> Amount {
        if self.is_incoming() {
            self.received - self.sent
        } else {
            self.sent - self.received
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LightningNodeInfo {
    pub pubkey: String,
    pub network: String,
    pub port: u16,
    pub node_name: String,
    pub announced_listen_addr: String,
    pub num_usable_channels: usize,
    pub num_channels: usize,
    pub local_balance_msat: u64,
    pub num_peers: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BitcoinNodeInfo {
    pub latest_height: u64,
    /// Shown as given, a node still syncing may report an empty hash.
    pub latest_blockhash: String,
    pub chain: String,
}

/// Read-only information about one of the nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeInfo {
    Lightning(LightningNodeInfo),
    Bitcoin(BitcoinNodeInfo),
}

impl NodeInfo {
    /// Every field of the record as a (label, value) pair, in display order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Lightning(info) => vec![
                ("Pubkey", info.pubkey.clone()),
                ("Network", info.network.clone()),
                ("Port", info.port.to_string()),
                ("Node Name", info.node_name.clone()),
                ("Announced Listen Addr", info.announced_listen_addr.clone()),
                ("Num Usable Channels", info.num_usable_channels.to_string()),
                ("Num Channels", info.num_channels.to_string()),
                ("Local Balance", soul_ui::component::amount::msats(info.local_balance_msat)),
                ("Num Peers", info.num_peers.to_string()),
            ],
            Self::Bitcoin(info) => vec![
                ("Latest Block Height", info.latest_height.to_string()),
                ("Latest Blockhash", info.latest_blockhash.clone()),
                ("Chain", info.chain.clone()),
            ],
        }
    }
}
