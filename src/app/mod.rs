pub mod config;
pub mod error;
pub mod menu;
pub mod message;
pub mod phrase;
pub mod state;
pub mod view;

use std::sync::Arc;

use iced::{clipboard, widget::Column, Task};

use bitcoin::Network;
use soul_ui::{component::network_banner, widget::Element};

pub use config::Config;
pub use message::Message;

use menu::Menu;
use state::{CreationFlow, DirectoryStore, NodeKind, NodePanel, State, WalletsPanel};
use view::CreationMessage;

use crate::backend::{Gateway, WalletName};

struct Panels {
    current: Menu,
    wallets: WalletsPanel,
    lightning: NodePanel,
    bitcoin: NodePanel,
}

impl Panels {
    fn new(network: Network) -> Panels {
        Self {
            current: Menu::Wallets,
            wallets: WalletsPanel::new(network),
            lightning: NodePanel::new(NodeKind::Lightning),
            bitcoin: NodePanel::new(NodeKind::Bitcoin),
        }
    }

    fn current(&self) -> &dyn State {
        match self.current {
            Menu::Wallets => &self.wallets,
            Menu::Lightning => &self.lightning,
            Menu::Bitcoin => &self.bitcoin,
        }
    }

    fn current_mut(&mut self) -> &mut dyn State {
        match self.current {
            Menu::Wallets => &mut self.wallets,
            Menu::Lightning => &mut self.lightning,
            Menu::Bitcoin => &mut self.bitcoin,
        }
    }
}

pub struct App {
    config: Config,
    gateway: Arc<dyn Gateway>,
    directory: DirectoryStore,
    panels: Panels,
    creation: Option<CreationFlow>,
}

impl App {
    pub fn new(config: Config, gateway: Arc<dyn Gateway>) -> (App, Task<Message>) {
        let mut directory = DirectoryStore::new();
        let cmd = directory.reload(gateway.clone());
        let panels = Panels::new(config.network);
        (
            Self {
                config,
                gateway,
                directory,
                panels,
                creation: None,
            },
            cmd,
        )
    }

    pub fn title(&self) -> String {
        match self.selected_wallet() {
            Some(wallet) => format!("Soul - {}", wallet),
            None => "Soul".to_string(),
        }
    }

    pub fn menu(&self) -> Menu {
        self.panels.current
    }

    pub fn directory(&self) -> &DirectoryStore {
        &self.directory
    }

    pub fn selected_wallet(&self) -> Option<&WalletName> {
        self.panels.wallets.selected()
    }

    pub fn creation(&self) -> Option<&CreationFlow> {
        self.creation.as_ref()
    }

    fn set_current_panel(&mut self, menu: Menu) -> Task<Message> {
        self.panels.current_mut().interrupt();
        self.panels.current = menu;
        self.panels.current_mut().reload(self.gateway.clone())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WalletsLoaded(res) => self.directory.on_loaded(self.gateway.clone(), res),
            Message::View(view::Message::ReloadWallets) => {
                self.directory.reload(self.gateway.clone())
            }
            Message::View(view::Message::Menu(menu)) => Task::batch([
                self.panels.current_mut().close(),
                self.set_current_panel(menu),
            ]),
            Message::View(view::Message::Clipboard(text)) => clipboard::write(text),
            Message::View(view::Message::Creation(CreationMessage::Open)) => {
                if self.creation.is_none() {
                    self.creation = Some(CreationFlow::new());
                }
                Task::none()
            }
            Message::View(view::Message::Creation(CreationMessage::Close)) => {
                match self.creation.take() {
                    Some(mut flow) => flow.close(),
                    None => Task::none(),
                }
            }
            msg @ (Message::View(view::Message::Creation(_)) | Message::PhraseGenerated(..)) => {
                match self.creation.as_mut() {
                    Some(flow) => flow.update(self.gateway.clone(), &self.directory, msg),
                    None => Task::none(),
                }
            }
            // The node state may have changed whatever the result, and even if
            // the modal was closed in the meantime.
            msg @ Message::WalletRegistered(..) => {
                let mut tasks = Vec::new();
                if let Some(flow) = self.creation.as_mut() {
                    tasks.push(flow.update(self.gateway.clone(), &self.directory, msg));
                    if flow.is_registered() {
                        self.creation = None;
                    }
                }
                tasks.push(self.directory.reload(self.gateway.clone()));
                Task::batch(tasks)
            }
            _ => self
                .panels
                .current_mut()
                .update(self.gateway.clone(), &self.directory, message),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let base = view::dashboard(
            self.panels.current,
            self.panels.current().view(&self.directory),
        );
        let view = match &self.creation {
            Some(flow) => view::modal(
                base,
                flow.view(&self.directory),
                view::Message::Creation(CreationMessage::Close),
            ),
            None => base,
        };

        if self.config.network != Network::Bitcoin {
            Column::with_children([
                network_banner(self.config.network).into(),
                view.map(Message::View),
            ])
            .into()
        } else {
            view.map(Message::View)
        }
    }
}
