use crate::app::menu::Menu;
use crate::backend::WalletName;

#[derive(Debug, Clone)]
pub enum Message {
    Menu(Menu),
    Clipboard(String),
    ReloadWallets,
    SelectWallet(WalletName),
    Wallet(WalletMessage),
    Creation(CreationMessage),
}

#[derive(Debug, Clone)]
pub enum WalletMessage {
    Mine,
    GenerateAddress,
    ReceiverEdited(String),
    AmountEdited(String),
    Send,
}

#[derive(Debug, Clone)]
pub enum CreationMessage {
    Open,
    Close,
    Generate,
    Next,
    WordEdited(usize, String),
    Submit,
    Restore,
    RestoreEdited(String),
    CancelRestore,
    SubmitRestore,
}
