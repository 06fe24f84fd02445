use std::sync::Arc;

use bip39::{Language, Mnemonic};
use iced::Task;
use soul_ui::widget::Element;

use super::{is_current, DirectoryStore, MountId, State};
use crate::app::{
    error::Error,
    message::Message,
    phrase::{RecoveryPhrase, PHRASE_LEN},
    view::{self, CreationMessage},
};
use crate::backend::Gateway;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationStep {
    Idle,
    PhraseShown,
    Confirming,
    Restoring,
}

/// Wallet creation modal: generate a recovery phrase, show it, have the user
/// type it back, then register the wallet. Restoring registers a wallet from
/// a phrase typed by the user instead.
pub struct CreationFlow {
    mount: Option<MountId>,
    step: CreationStep,
    phrase: Option<RecoveryPhrase>,
    words: Vec<String>,
    restore_input: String,
    pending: bool,
    error: Option<Error>,
    registered: bool,
}

impl Default for CreationFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl CreationFlow {
    pub fn new() -> Self {
        Self {
            mount: Some(MountId::next()),
            step: CreationStep::Idle,
            phrase: None,
            words: vec![String::new(); PHRASE_LEN],
            restore_input: String::new(),
            pending: false,
            error: None,
            registered: false,
        }
    }

    pub fn step(&self) -> CreationStep {
        self.step
    }

    pub fn phrase(&self) -> Option<&RecoveryPhrase> {
        self.phrase.as_ref()
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// True once the node accepted the wallet, the modal can be closed.
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    fn register(&mut self, gateway: Arc<dyn Gateway>, id: MountId, mmc: String) -> Task<Message> {
        self.pending = true;
        self.error = None;
        Task::perform(
            async move { gateway.load_wallet_with_mmc(&mmc).await },
            move |res| Message::WalletRegistered(id, res),
        )
    }

    fn on_action(
        &mut self,
        gateway: Arc<dyn Gateway>,
        id: MountId,
        msg: CreationMessage,
    ) -> Task<Message> {
        if self.pending {
            return Task::none();
        }
        match (self.step, msg) {
            (CreationStep::Idle, CreationMessage::Generate) => {
                self.pending = true;
                self.error = None;
                return Task::perform(
                    async move { gateway.new_mmc().await },
                    move |res| Message::PhraseGenerated(id, res),
                );
            }
            (CreationStep::Idle, CreationMessage::Restore) => {
                self.error = None;
                self.restore_input.clear();
                self.step = CreationStep::Restoring;
            }
            (CreationStep::PhraseShown, CreationMessage::Next) => {
                self.words = vec![String::new(); PHRASE_LEN];
                self.step = CreationStep::Confirming;
            }
            (CreationStep::Confirming, CreationMessage::WordEdited(i, word)) => {
                if let Some(w) = self.words.get_mut(i) {
                    *w = word;
                    self.error = None;
                }
            }
            (CreationStep::Confirming, CreationMessage::Submit) => {
                let Some(phrase) = self.phrase.as_ref() else {
                    return Task::none();
                };
                if let Err(e) = phrase.check(&self.words) {
                    tracing::info!("Recovery phrase confirmation rejected: {}", e);
                    self.error = Some(e);
                    return Task::none();
                }
                let mmc = phrase.to_phrase();
                return self.register(gateway, id, mmc);
            }
            (CreationStep::Restoring, CreationMessage::RestoreEdited(input)) => {
                self.restore_input = input;
                self.error = None;
            }
            (CreationStep::Restoring, CreationMessage::CancelRestore) => {
                self.restore_input.clear();
                self.error = None;
                self.step = CreationStep::Idle;
            }
            (CreationStep::Restoring, CreationMessage::SubmitRestore) => {
                match validate_restore(&self.restore_input) {
                    Ok(mmc) => return self.register(gateway, id, mmc),
                    Err(e) => self.error = Some(e),
                }
            }
            // Messages may carry phrase words, never log them.
            (step, _) => {
                tracing::debug!("Ignoring creation action in step {:?}", step);
            }
        }
        Task::none()
    }
}

fn validate_restore(input: &str) -> Result<String, Error> {
    let phrase = RecoveryPhrase::parse(input)?;
    let mmc = phrase.to_phrase();
    Mnemonic::parse_in_normalized(Language::English, &mmc)
        .map_err(|e| Error::InvalidPhrase(e.to_string()))?;
    Ok(mmc)
}

impl State for CreationFlow {
    fn view<'a>(&'a self, _directory: &'a DirectoryStore) -> Element<'a, view::Message> {
        view::creation::creation_modal(
            self.step,
            self.phrase.as_ref(),
            &self.words,
            &self.restore_input,
            self.pending,
            self.error.as_ref(),
        )
    }

    fn update(
        &mut self,
        gateway: Arc<dyn Gateway>,
        _directory: &DirectoryStore,
        message: Message,
    ) -> Task<Message> {
        match message {
            Message::PhraseGenerated(id, res) => {
                if is_current(self.mount, id, "new_mmc") {
                    self.pending = false;
                    match res.map_err(Error::from).and_then(|s| RecoveryPhrase::parse(&s)) {
                        Ok(phrase) => {
                            self.phrase = Some(phrase);
                            self.step = CreationStep::PhraseShown;
                        }
                        Err(e) => {
                            tracing::error!("Failed to generate recovery phrase: {}", e);
                            self.error = Some(e);
                        }
                    }
                }
            }
            Message::WalletRegistered(id, res) => {
                if is_current(self.mount, id, "load_wallet_with_mmc") {
                    self.pending = false;
                    match res {
                        Ok(()) => {
                            tracing::info!("Wallet registered");
                            self.registered = true;
                            self.phrase = None;
                            self.words = vec![String::new(); PHRASE_LEN];
                            self.restore_input.clear();
                        }
                        Err(e) => {
                            tracing::error!("Failed to register wallet: {}", e);
                            self.error = Some(e.into());
                        }
                    }
                }
            }
            Message::View(view::Message::Creation(msg)) => {
                if let Some(id) = self.mount {
                    return self.on_action(gateway, id, msg);
                }
            }
            _ => {}
        }
        Task::none()
    }

    fn interrupt(&mut self) {
        self.mount = None;
        self.pending = false;
    }

    fn close(&mut self) -> Task<Message> {
        self.interrupt();
        self.phrase = None;
        self.words.clear();
        self.restore_input.clear();
        Task::none()
    }
}
