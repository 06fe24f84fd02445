use std::str::FromStr;
use std::sync::Arc;

use bitcoin::{
    address::NetworkUnchecked,
    amount::Denomination,
    Address, Amount, Network,
};
use iced::Task;
use soul_ui::widget::{qr_code, Element};

use super::{is_current, DirectoryStore, Loadable, MountId, State};
use crate::app::{error::Error, message::Message, view};
use crate::backend::{Gateway, TransactionRecord, WalletName, WalletSummary};

/// The Wallets menu: the directory tiles and the detail view of the
/// selected wallet, if any.
pub struct WalletsPanel {
    network: Network,
    selected: Option<WalletPanel>,
}

impl WalletsPanel {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<&WalletName> {
        self.selected.as_ref().map(|panel| &panel.wallet)
    }

    pub fn selected_panel(&self) -> Option<&WalletPanel> {
        self.selected.as_ref()
    }

    /// Selecting the already selected wallet mounts it again.
    fn select(&mut self, gateway: Arc<dyn Gateway>, wallet: WalletName) -> Task<Message> {
        if let Some(previous) = self.selected.as_mut() {
            previous.interrupt();
        }
        tracing::info!("Wallet {} selected", wallet);
        let mut panel = WalletPanel::new(wallet, self.network);
        let task = panel.reload(gateway);
        self.selected = Some(panel);
        task
    }
}

impl State for WalletsPanel {
    fn view<'a>(&'a self, directory: &'a DirectoryStore) -> Element<'a, view::Message> {
        view::directory::wallets(
            directory,
            self.selected(),
            self.selected.as_ref().map(|panel| panel.view(directory)),
        )
    }

    fn update(
        &mut self,
        gateway: Arc<dyn Gateway>,
        directory: &DirectoryStore,
        message: Message,
    ) -> Task<Message> {
        match message {
            Message::View(view::Message::SelectWallet(wallet)) => self.select(gateway, wallet),
            _ => match self.selected.as_mut() {
                Some(panel) => panel.update(gateway, directory, message),
                None => Task::none(),
            },
        }
    }

    fn reload(&mut self, gateway: Arc<dyn Gateway>) -> Task<Message> {
        match self.selected.as_mut() {
            Some(panel) => panel.reload(gateway),
            None => Task::none(),
        }
    }

    fn interrupt(&mut self) {
        if let Some(panel) = self.selected.as_mut() {
            panel.interrupt();
        }
    }
}

#[derive(Debug, Default)]
pub struct MineState {
    pub pending: bool,
    pub error: Option<Error>,
    /// Successful mining calls since the panel was mounted.
    pub mined: usize,
}

#[derive(Default)]
pub struct ReceiveState {
    pub pending: bool,
    pub address: Option<String>,
    pub qr_code: Option<qr_code::Data>,
    pub error: Option<Error>,
}

#[derive(Debug, Default)]
pub struct SendForm {
    pub receiver: String,
    pub amount: String,
    pub pending: bool,
    pub error: Option<Error>,
    /// Validated amount and receiver of the payment being sent.
    in_flight: Option<(Amount, String)>,
    /// Amount and receiver of the last successful payment.
    pub sent: Option<(Amount, String)>,
}

impl SendForm {
    fn validate(&self, network: Network) -> Result<(Address, Amount), Error> {
        let address = Address::<NetworkUnchecked>::from_str(self.receiver.trim())
            .map_err(|e| Error::InvalidAddress(e.to_string()))?
            .require_network(network)
            .map_err(|e| Error::InvalidAddress(e.to_string()))?;
        let amount = Amount::from_str_in(self.amount.trim(), Denomination::Bitcoin)
            .map_err(|e| Error::InvalidAmount(e.to_string()))?;
        if amount == Amount::ZERO {
            return Err(Error::InvalidAmount("amount must be positive".to_string()));
        }
        Ok((address, amount))
    }
}

/// Detail view of a single wallet: its summary, its transactions and the
/// mine, receive and send actions.
pub struct WalletPanel {
    wallet: WalletName,
    network: Network,
    mount: Option<MountId>,
    /// Token of the latest summary and transactions fetch. A refresh after
    /// mining or sending supersedes the fetches issued before it.
    refresh: Option<MountId>,
    summary: Loadable<WalletSummary>,
    transactions: Loadable<Vec<TransactionRecord>>,
    mine: MineState,
    receive: ReceiveState,
    send: SendForm,
}

impl WalletPanel {
    pub fn new(wallet: WalletName, network: Network) -> Self {
        Self {
            wallet,
            network,
            mount: None,
            refresh: None,
            summary: Loadable::Loading,
            transactions: Loadable::Loading,
            mine: MineState::default(),
            receive: ReceiveState::default(),
            send: SendForm::default(),
        }
    }

    pub fn wallet(&self) -> &WalletName {
        &self.wallet
    }

    pub fn summary(&self) -> &Loadable<WalletSummary> {
        &self.summary
    }

    pub fn transactions(&self) -> &Loadable<Vec<TransactionRecord>> {
        &self.transactions
    }

    pub fn mine_state(&self) -> &MineState {
        &self.mine
    }

    pub fn receive_state(&self) -> &ReceiveState {
        &self.receive
    }

    pub fn send_form(&self) -> &SendForm {
        &self.send
    }

    /// Issues the summary and transaction fetches concurrently. Results
    /// are applied independently of each other.
    fn fetch(&mut self, gateway: Arc<dyn Gateway>) -> Task<Message> {
        let id = MountId::next();
        self.refresh = Some(id);
        let wallet = self.wallet.clone();
        let gw = gateway.clone();
        let w = wallet.clone();
        Task::batch([
            Task::perform(async move { gw.wallet_info(&w).await }, move |res| {
                Message::WalletSummary(id, res)
            }),
            Task::perform(async move { gateway.list_txs(&wallet).await }, move |res| {
                Message::WalletTransactions(id, res)
            }),
        ])
    }

    fn on_action(
        &mut self,
        gateway: Arc<dyn Gateway>,
        id: MountId,
        msg: view::WalletMessage,
    ) -> Task<Message> {
        match msg {
            view::WalletMessage::Mine => {
                if self.mine.pending {
                    return Task::none();
                }
                self.mine.pending = true;
                self.mine.error = None;
                let wallet = self.wallet.clone();
                Task::perform(
                    async move { gateway.generate_to_address(&wallet).await },
                    move |res| Message::Mined(id, res),
                )
            }
            view::WalletMessage::GenerateAddress => {
                if self.receive.pending {
                    return Task::none();
                }
                self.receive.pending = true;
                self.receive.error = None;
                let wallet = self.wallet.clone();
                Task::perform(
                    async move { gateway.generate_address(&wallet).await },
                    move |res| Message::AddressGenerated(id, res),
                )
            }
            view::WalletMessage::ReceiverEdited(receiver) => {
                self.send.receiver = receiver;
                self.send.error = None;
                Task::none()
            }
            view::WalletMessage::AmountEdited(amount) => {
                self.send.amount = amount;
                self.send.error = None;
                Task::none()
            }
            view::WalletMessage::Send => {
                if self.send.pending {
                    return Task::none();
                }
                let (address, amount) = match self.send.validate(self.network) {
                    Ok(res) => res,
                    Err(e) => {
                        self.send.error = Some(e);
                        return Task::none();
                    }
                };
                self.send.pending = true;
                self.send.error = None;
                self.send.sent = None;
                let wallet = self.wallet.clone();
                let receiver = address.to_string();
                self.send.in_flight = Some((amount, receiver.clone()));
                Task::perform(
                    async move { gateway.send(&wallet, amount, &receiver).await },
                    move |res| Message::Sent(id, res),
                )
            }
        }
    }
}

impl State for WalletPanel {
    fn view<'a>(&'a self, _directory: &'a DirectoryStore) -> Element<'a, view::Message> {
        view::wallet::wallet_panel(
            &self.wallet,
            &self.summary,
            &self.transactions,
            &self.mine,
            &self.receive,
            &self.send,
        )
    }

    fn update(
        &mut self,
        gateway: Arc<dyn Gateway>,
        _directory: &DirectoryStore,
        message: Message,
    ) -> Task<Message> {
        match message {
            Message::WalletSummary(id, res) => {
                if is_current(self.refresh, id, "wallet_info") {
                    if let Err(e) = &res {
                        tracing::error!("Failed to fetch summary of {}: {}", self.wallet, e);
                    }
                    self.summary = res.into();
                }
            }
            Message::WalletTransactions(id, res) => {
                if is_current(self.refresh, id, "list_txs") {
                    if let Err(e) = &res {
                        tracing::error!("Failed to list transactions of {}: {}", self.wallet, e);
                    }
                    self.transactions = res.into();
                }
            }
            Message::Mined(id, res) => {
                if is_current(self.mount, id, "generate_to_address") {
                    self.mine.pending = false;
                    match res {
                        Ok(()) => {
                            self.mine.mined += 1;
                            return self.fetch(gateway);
                        }
                        Err(e) => {
                            tracing::error!("Failed to mine to {}: {}", self.wallet, e);
                            self.mine.error = Some(e.into());
                        }
                    }
                }
            }
            Message::AddressGenerated(id, res) => {
                if is_current(self.mount, id, "generate_address") {
                    self.receive.pending = false;
                    match res {
                        Ok(address) => {
                            self.receive.qr_code = qr_code::Data::new(&address).ok();
                            self.receive.address = Some(address);
                        }
                        Err(e) => {
                            tracing::error!("Failed to generate address for {}: {}", self.wallet, e);
                            self.receive.error = Some(e.into());
                        }
                    }
                }
            }
            Message::Sent(id, res) => {
                if is_current(self.mount, id, "send") {
                    self.send.pending = false;
                    let in_flight = self.send.in_flight.take();
                    match res {
                        Ok(()) => {
                            tracing::info!("Payment sent from {}", self.wallet);
                            self.send.sent = in_flight;
                            self.send.receiver.clear();
                            self.send.amount.clear();
                            return self.fetch(gateway);
                        }
                        Err(e) => {
                            tracing::error!("Failed to send from {}: {}", self.wallet, e);
                            self.send.error = Some(e.into());
                        }
                    }
                }
            }
            Message::View(view::Message::Wallet(msg)) => {
                if let Some(id) = self.mount {
                    return self.on_action(gateway, id, msg);
                }
            }
            _ => {}
        }
        Task::none()
    }

    fn reload(&mut self, gateway: Arc<dyn Gateway>) -> Task<Message> {
        let id = MountId::next();
        tracing::debug!("Mounting wallet {} as {}", self.wallet, id);
        self.mount = Some(id);
        self.summary = Loadable::Loading;
        self.transactions = Loadable::Loading;
        self.mine = MineState::default();
        self.receive = ReceiveState::default();
        self.send = SendForm::default();
        self.fetch(gateway)
    }

    fn interrupt(&mut self) {
        self.mount = None;
        self.refresh = None;
        self.mine.pending = false;
        self.receive.pending = false;
        self.send.pending = false;
        self.send.in_flight = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendError, Command, CommandName};
    use crate::utils::{
        mock::MockGateway,
        sandbox::{collect, drain, Sandbox},
    };
    use bitcoin::{hashes::Hash, PubkeyHash};
    use serde_json::{json, Value};
    use soul_ui::component::amount;

    fn regtest_address() -> String {
        Address::p2pkh(PubkeyHash::all_zeros(), Network::Regtest).to_string()
    }

    fn txs(count: usize) -> Value {
        Value::Array(
            (0..count)
                .map(|i| {
                    json!({
                        "txid": format!("{:064x}", i),
                        "received": 1000,
                        "sent": 0,
                        "confirmation_time": { "height": 100 + i, "timestamp": 1_700_000_000 }
                    })
                })
                .collect(),
        )
    }

    fn info(wallet: &str) -> Command {
        Command::WalletInfo {
            wallet: WalletName::from(wallet),
        }
    }

    fn list_txs(wallet: &str) -> Command {
        Command::ListTxs {
            wallet: WalletName::from(wallet),
        }
    }

    fn wallet_msg(msg: view::WalletMessage) -> Message {
        Message::View(view::Message::Wallet(msg))
    }

    #[tokio::test]
    async fn selecting_bob_shows_his_summary_and_transactions() {
        let gateway = Arc::new(MockGateway::new(vec![
            (
                info("bob"),
                Ok(json!({ "balance": 0.5, "immature_balance": 0, "txcount": 3 })),
            ),
            (list_txs("bob"), Ok(txs(3))),
        ]));
        let directory = DirectoryStore::new();
        let sandbox = Sandbox::new(WalletsPanel::new(Network::Regtest))
            .update(
                gateway.clone(),
                &directory,
                Message::View(view::Message::SelectWallet(WalletName::from("bob"))),
            )
            .await;

        let panel = sandbox.state().selected_panel().unwrap();
        assert_eq!(panel.wallet().as_str(), "bob");
        let summary = panel.summary().loaded().unwrap();
        assert_eq!(amount::btc(summary.balance), "0.5 BTC");
        assert_eq!(amount::btc(summary.immature_balance), "0 BTC");
        assert_eq!(summary.txcount, 3);
        assert_eq!(panel.transactions().loaded().unwrap().len(), 3);
        assert_eq!(gateway.calls(), vec![info("bob"), list_txs("bob")]);
    }

    #[tokio::test]
    async fn results_of_a_previous_selection_are_dropped() {
        let gateway = Arc::new(MockGateway::new(vec![
            (
                info("alice"),
                Ok(json!({ "balance": 1.0, "immature_balance": 2.0, "txcount": 7 })),
            ),
            (list_txs("alice"), Ok(txs(7))),
            (
                info("bob"),
                Ok(json!({ "balance": 0.5, "immature_balance": 0, "txcount": 3 })),
            ),
            (list_txs("bob"), Ok(txs(3))),
        ]));
        let directory = DirectoryStore::new();
        let mut panel = WalletsPanel::new(Network::Regtest);

        let alice = panel.update(
            gateway.clone(),
            &directory,
            Message::View(view::Message::SelectWallet(WalletName::from("alice"))),
        );
        let bob = panel.update(
            gateway.clone(),
            &directory,
            Message::View(view::Message::SelectWallet(WalletName::from("bob"))),
        );

        // Alice's results resolve after bob was selected.
        let alice = collect(alice).await;
        assert_eq!(alice.len(), 2);
        for msg in alice.clone() {
            let _ = panel.update(gateway.clone(), &directory, msg);
        }
        let selected = panel.selected_panel().unwrap();
        assert_eq!(selected.wallet().as_str(), "bob");
        assert!(selected.summary().is_loading());
        assert!(selected.transactions().is_loading());

        for msg in collect(bob).await {
            let _ = panel.update(gateway.clone(), &directory, msg);
        }
        for msg in alice {
            let _ = panel.update(gateway.clone(), &directory, msg);
        }
        let selected = panel.selected_panel().unwrap();
        assert_eq!(selected.summary().loaded().unwrap().txcount, 3);
        assert_eq!(selected.transactions().loaded().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn one_failed_fetch_does_not_clear_the_other() {
        let gateway = Arc::new(MockGateway::new(vec![
            (
                info("alice"),
                Err(BackendError::Unknown(
                    CommandName::WalletInfo,
                    "wallet is locked".to_string(),
                )),
            ),
            (list_txs("alice"), Ok(txs(2))),
        ]));
        let sandbox = Sandbox::new(WalletPanel::new(WalletName::from("alice"), Network::Regtest))
            .reload(gateway, &DirectoryStore::new())
            .await;
        assert!(matches!(
            sandbox.state().summary(),
            Loadable::Unavailable(BackendError::Unknown(..))
        ));
        assert_eq!(sandbox.state().transactions().loaded().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn mining_refreshes_the_summary() {
        let gateway = Arc::new(MockGateway::new(vec![
            (
                info("alice"),
                Ok(json!({ "balance": 0, "immature_balance": 0, "txcount": 0 })),
            ),
            (list_txs("alice"), Ok(txs(0))),
            (
                Command::GenerateToAddress {
                    wallet: WalletName::from("alice"),
                },
                Ok(Value::Null),
            ),
            (
                info("alice"),
                Ok(json!({ "balance": 0, "immature_balance": 50.0, "txcount": 1 })),
            ),
            (list_txs("alice"), Ok(txs(1))),
        ]));
        let directory = DirectoryStore::new();
        let sandbox = Sandbox::new(WalletPanel::new(WalletName::from("alice"), Network::Regtest))
            .reload(gateway.clone(), &directory)
            .await
            .update(gateway.clone(), &directory, wallet_msg(view::WalletMessage::Mine))
            .await;

        let panel = sandbox.state();
        assert_eq!(panel.mine_state().mined, 1);
        assert!(!panel.mine_state().pending);
        let summary = panel.summary().loaded().unwrap();
        assert_eq!(summary.immature_balance, Amount::from_btc(50.0).unwrap());
        assert_eq!(gateway.count(CommandName::WalletInfo), 2);
        assert_eq!(gateway.count(CommandName::ListTxs), 2);
    }

    #[tokio::test]
    async fn late_mount_fetch_does_not_overwrite_the_refresh_after_mining() {
        let gateway = Arc::new(MockGateway::new(vec![
            (
                info("alice"),
                Ok(json!({ "balance": 0, "immature_balance": 0, "txcount": 0 })),
            ),
            (list_txs("alice"), Ok(txs(0))),
            (
                Command::GenerateToAddress {
                    wallet: WalletName::from("alice"),
                },
                Ok(Value::Null),
            ),
            (
                info("alice"),
                Ok(json!({ "balance": 0, "immature_balance": 50.0, "txcount": 1 })),
            ),
            (list_txs("alice"), Ok(txs(1))),
        ]));
        let directory = DirectoryStore::new();
        let mut panel = WalletPanel::new(WalletName::from("alice"), Network::Regtest);

        // The mount fetch is still in flight when the user mines.
        let mount_fetch = collect(panel.reload(gateway.clone())).await;
        assert!(panel.summary().is_loading());
        let mine = panel.update(gateway.clone(), &directory, wallet_msg(view::WalletMessage::Mine));
        for msg in collect(mine).await {
            let refresh = panel.update(gateway.clone(), &directory, msg);
            for msg in collect(refresh).await {
                let _ = panel.update(gateway.clone(), &directory, msg);
            }
        }
        assert_eq!(panel.summary().loaded().unwrap().txcount, 1);

        for msg in mount_fetch {
            let _ = panel.update(gateway.clone(), &directory, msg);
        }
        assert_eq!(panel.summary().loaded().unwrap().txcount, 1);
        assert_eq!(panel.transactions().loaded().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_mining_is_shown() {
        let gateway = Arc::new(MockGateway::new(vec![
            (
                info("alice"),
                Ok(json!({ "balance": 0, "immature_balance": 0, "txcount": 0 })),
            ),
            (list_txs("alice"), Ok(txs(0))),
            (
                Command::GenerateToAddress {
                    wallet: WalletName::from("alice"),
                },
                Err(BackendError::BackendUnavailable(
                    CommandName::GenerateToAddress,
                    "timeout".to_string(),
                )),
            ),
        ]));
        let directory = DirectoryStore::new();
        let sandbox = Sandbox::new(WalletPanel::new(WalletName::from("alice"), Network::Regtest))
            .reload(gateway.clone(), &directory)
            .await
            .update(gateway.clone(), &directory, wallet_msg(view::WalletMessage::Mine))
            .await;
        assert!(matches!(
            sandbox.state().mine_state().error,
            Some(Error::Backend(BackendError::BackendUnavailable(..)))
        ));
        assert_eq!(gateway.count(CommandName::WalletInfo), 1);
    }

    #[tokio::test]
    async fn generated_address_is_shown() {
        let address = regtest_address();
        let gateway = Arc::new(MockGateway::new(vec![
            (
                info("alice"),
                Ok(json!({ "balance": 0, "immature_balance": 0, "txcount": 0 })),
            ),
            (list_txs("alice"), Ok(txs(0))),
            (
                Command::GenerateAddress {
                    wallet: WalletName::from("alice"),
                },
                Ok(json!(address)),
            ),
        ]));
        let directory = DirectoryStore::new();
        let sandbox = Sandbox::new(WalletPanel::new(WalletName::from("alice"), Network::Regtest))
            .reload(gateway.clone(), &directory)
            .await
            .update(
                gateway.clone(),
                &directory,
                wallet_msg(view::WalletMessage::GenerateAddress),
            )
            .await;
        let receive = sandbox.state().receive_state();
        assert_eq!(receive.address.as_deref(), Some(address.as_str()));
        assert!(receive.qr_code.is_some());
        assert!(receive.error.is_none());
    }

    #[tokio::test]
    async fn failed_send_keeps_the_balance() {
        let receiver = regtest_address();
        let gateway = Arc::new(MockGateway::new(vec![
            (
                info("alice"),
                Ok(json!({ "balance": 1.5, "immature_balance": 0, "txcount": 2 })),
            ),
            (list_txs("alice"), Ok(txs(2))),
            (
                Command::Send {
                    sender: WalletName::from("alice"),
                    amount: Amount::from_sat(50_000_000),
                    receiver: receiver.clone(),
                },
                Err(BackendError::ValidationFailed(
                    CommandName::Send,
                    "insufficient funds".to_string(),
                )),
            ),
        ]));
        let directory = DirectoryStore::new();
        let sandbox = Sandbox::new(WalletPanel::new(WalletName::from("alice"), Network::Regtest))
            .reload(gateway.clone(), &directory)
            .await
            .update(
                gateway.clone(),
                &directory,
                wallet_msg(view::WalletMessage::ReceiverEdited(receiver)),
            )
            .await
            .update(
                gateway.clone(),
                &directory,
                wallet_msg(view::WalletMessage::AmountEdited("0.5".to_string())),
            )
            .await
            .update(gateway.clone(), &directory, wallet_msg(view::WalletMessage::Send))
            .await;

        let panel = sandbox.state();
        assert_eq!(
            amount::btc(panel.summary().loaded().unwrap().balance),
            "1.5 BTC"
        );
        assert!(matches!(
            panel.send_form().error,
            Some(Error::Backend(BackendError::ValidationFailed(CommandName::Send, _)))
        ));
        assert!(!panel.send_form().pending);
        assert_eq!(panel.send_form().amount, "0.5");
        assert_eq!(gateway.count(CommandName::Send), 1);
        assert_eq!(gateway.count(CommandName::WalletInfo), 1);
    }

    #[tokio::test]
    async fn successful_send_clears_the_form_and_refreshes() {
        let receiver = regtest_address();
        let gateway = Arc::new(MockGateway::new(vec![
            (
                info("alice"),
                Ok(json!({ "balance": 1.5, "immature_balance": 0, "txcount": 2 })),
            ),
            (list_txs("alice"), Ok(txs(2))),
            (
                Command::Send {
                    sender: WalletName::from("alice"),
                    amount: Amount::from_sat(50_000_000),
                    receiver: receiver.clone(),
                },
                Ok(Value::Null),
            ),
            (
                info("alice"),
                Ok(json!({ "balance": 0.9999, "immature_balance": 0, "txcount": 3 })),
            ),
            (list_txs("alice"), Ok(txs(3))),
        ]));
        let directory = DirectoryStore::new();
        let mut sandbox =
            Sandbox::new(WalletPanel::new(WalletName::from("alice"), Network::Regtest))
                .reload(gateway.clone(), &directory)
                .await;
        let _ = sandbox.state_mut().update(
            gateway.clone(),
            &directory,
            wallet_msg(view::WalletMessage::ReceiverEdited(receiver.clone())),
        );
        let _ = sandbox.state_mut().update(
            gateway.clone(),
            &directory,
            wallet_msg(view::WalletMessage::AmountEdited(" 0.5 ".to_string())),
        );
        let sandbox = sandbox
            .update(gateway.clone(), &directory, wallet_msg(view::WalletMessage::Send))
            .await;

        let panel = sandbox.state();
        assert!(panel.send_form().receiver.is_empty());
        assert!(panel.send_form().amount.is_empty());
        assert_eq!(
            panel.send_form().sent,
            Some((Amount::from_sat(50_000_000), receiver))
        );
        assert_eq!(panel.summary().loaded().unwrap().txcount, 3);
    }

    #[tokio::test]
    async fn sent_confirmation_shows_what_was_sent() {
        let receiver = regtest_address();
        let gateway = Arc::new(MockGateway::new(vec![
            (
                info("alice"),
                Ok(json!({ "balance": 1.5, "immature_balance": 0, "txcount": 2 })),
            ),
            (list_txs("alice"), Ok(txs(2))),
            (
                Command::Send {
                    sender: WalletName::from("alice"),
                    amount: Amount::from_sat(50_000_000),
                    receiver: receiver.clone(),
                },
                Ok(Value::Null),
            ),
            (
                info("alice"),
                Ok(json!({ "balance": 0.9999, "immature_balance": 0, "txcount": 3 })),
            ),
            (list_txs("alice"), Ok(txs(3))),
        ]));
        let directory = DirectoryStore::new();
        let mut panel = WalletPanel::new(WalletName::from("alice"), Network::Regtest);
        let task = panel.reload(gateway.clone());
        drain(task, |msg| panel.update(gateway.clone(), &directory, msg)).await;

        let _ = panel.update(
            gateway.clone(),
            &directory,
            wallet_msg(view::WalletMessage::ReceiverEdited(receiver.clone())),
        );
        let _ = panel.update(
            gateway.clone(),
            &directory,
            wallet_msg(view::WalletMessage::AmountEdited("0.5".to_string())),
        );
        let send = panel.update(gateway.clone(), &directory, wallet_msg(view::WalletMessage::Send));
        assert!(panel.send_form().pending);

        // Edited while the payment is pending.
        let _ = panel.update(
            gateway.clone(),
            &directory,
            wallet_msg(view::WalletMessage::AmountEdited("0.7".to_string())),
        );
        drain(send, |msg| panel.update(gateway.clone(), &directory, msg)).await;

        assert_eq!(
            panel.send_form().sent,
            Some((Amount::from_sat(50_000_000), receiver))
        );
        assert_eq!(panel.summary().loaded().unwrap().txcount, 3);
    }

    #[tokio::test]
    async fn invalid_send_form_is_rejected_before_any_call() {
        let gateway = Arc::new(MockGateway::new(vec![
            (
                info("alice"),
                Ok(json!({ "balance": 1.5, "immature_balance": 0, "txcount": 2 })),
            ),
            (list_txs("alice"), Ok(txs(2))),
        ]));
        let directory = DirectoryStore::new();
        let mut panel = WalletPanel::new(WalletName::from("alice"), Network::Regtest);
        for msg in collect(panel.reload(gateway.clone())).await {
            let _ = panel.update(gateway.clone(), &directory, msg);
        }

        let _ = panel.update(
            gateway.clone(),
            &directory,
            wallet_msg(view::WalletMessage::ReceiverEdited("not an address".to_string())),
        );
        let _ = panel.update(
            gateway.clone(),
            &directory,
            wallet_msg(view::WalletMessage::AmountEdited("0.5".to_string())),
        );
        let task = panel.update(gateway.clone(), &directory, wallet_msg(view::WalletMessage::Send));
        assert!(collect(task).await.is_empty());
        assert!(matches!(panel.send_form().error, Some(Error::InvalidAddress(_))));

        let mainnet = Address::p2pkh(PubkeyHash::all_zeros(), Network::Bitcoin).to_string();
        let _ = panel.update(
            gateway.clone(),
            &directory,
            wallet_msg(view::WalletMessage::ReceiverEdited(mainnet)),
        );
        let _ = panel.update(gateway.clone(), &directory, wallet_msg(view::WalletMessage::Send));
        assert!(matches!(panel.send_form().error, Some(Error::InvalidAddress(_))));

        let _ = panel.update(
            gateway.clone(),
            &directory,
            wallet_msg(view::WalletMessage::ReceiverEdited(regtest_address())),
        );
        let _ = panel.update(
            gateway.clone(),
            &directory,
            wallet_msg(view::WalletMessage::AmountEdited("0".to_string())),
        );
        let _ = panel.update(gateway.clone(), &directory, wallet_msg(view::WalletMessage::Send));
        assert!(matches!(panel.send_form().error, Some(Error::InvalidAmount(_))));

        assert_eq!(gateway.count(CommandName::Send), 0);
    }

    #[tokio::test]
    async fn unmounted_panel_ignores_results() {
        let gateway = Arc::new(MockGateway::new(vec![
            (
                info("alice"),
                Ok(json!({ "balance": 1.5, "immature_balance": 0, "txcount": 2 })),
            ),
            (list_txs("alice"), Ok(txs(2))),
        ]));
        let directory = DirectoryStore::new();
        let mut panel = WalletPanel::new(WalletName::from("alice"), Network::Regtest);
        let task = panel.reload(gateway.clone());
        panel.interrupt();
        for msg in collect(task).await {
            let _ = panel.update(gateway.clone(), &directory, msg);
        }
        assert!(panel.summary().is_loading());
        assert!(panel.transactions().is_loading());
    }
}
