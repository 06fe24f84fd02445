use std::sync::Arc;

use iced::Task;
use soul_ui::widget::Element;

use super::{is_current, DirectoryStore, Loadable, MountId, State};
use crate::app::{message::Message, view};
use crate::backend::{BackendError, Gateway, NodeInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Lightning,
    Bitcoin,
}

impl NodeKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Lightning => "Lightning Node",
            Self::Bitcoin => "Bitcoin Node",
        }
    }

    async fn fetch(self, gateway: Arc<dyn Gateway>) -> Result<NodeInfo, BackendError> {
        match self {
            Self::Lightning => gateway.lightning_info().await.map(NodeInfo::Lightning),
            Self::Bitcoin => gateway.blockchain_info().await.map(NodeInfo::Bitcoin),
        }
    }
}

/// Read-only information about one of the nodes, fetched once per mount.
pub struct NodePanel {
    kind: NodeKind,
    mount: Option<MountId>,
    info: Loadable<NodeInfo>,
}

impl NodePanel {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            mount: None,
            info: Loadable::Loading,
        }
    }

    pub fn info(&self) -> &Loadable<NodeInfo> {
        &self.info
    }
}

impl State for NodePanel {
    fn view<'a>(&'a self, _directory: &'a DirectoryStore) -> Element<'a, view::Message> {
        view::node::node_panel(self.kind.title(), &self.info)
    }

    fn update(
        &mut self,
        _gateway: Arc<dyn Gateway>,
        _directory: &DirectoryStore,
        message: Message,
    ) -> Task<Message> {
        if let Message::NodeInfo(id, res) = message {
            if is_current(self.mount, id, self.kind.title()) {
                if let Err(e) = &res {
                    tracing::warn!("{} unavailable: {}", self.kind.title(), e);
                }
                self.info = res.into();
            }
        }
        Task::none()
    }

    fn reload(&mut self, gateway: Arc<dyn Gateway>) -> Task<Message> {
        let id = MountId::next();
        self.mount = Some(id);
        self.info = Loadable::Loading;
        let kind = self.kind;
        Task::perform(kind.fetch(gateway), move |res| Message::NodeInfo(id, res))
    }

    fn interrupt(&mut self) {
        self.mount = None;
    }
}
