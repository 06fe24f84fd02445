use iced::{widget::button, Length};

use soul_ui::{
    component::{button as ui_button, text, warning_card},
    theme,
    widget::*,
};

use super::{CreationMessage, Message};
use crate::app::state::DirectoryStore;
use crate::backend::WalletName;

fn tile<'a>(wallet: &'a WalletName, selected: bool) -> Element<'a, Message> {
    button(text::p1_bold(wallet.as_str()))
        .padding(15)
        .width(Length::Fixed(180.0))
        .style(theme::tile::style(selected))
        .on_press(Message::SelectWallet(wallet.clone()))
        .into()
}

/// The wallet tiles, followed by the detail view of the selected wallet.
pub fn wallets<'a>(
    directory: &'a DirectoryStore,
    selected: Option<&'a WalletName>,
    detail: Option<Element<'a, Message>>,
) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(10)
        .push(text::h2("Wallets").width(Length::Fill))
        .push(
            ui_button::secondary("Reload")
                .on_press_maybe((!directory.is_reloading()).then_some(Message::ReloadWallets)),
        )
        .push(ui_button::primary("New wallet").on_press(Message::Creation(CreationMessage::Open)));

    let mut col = Column::new().spacing(20).push(header);

    if let Some(e) = directory.error() {
        col = col.push(warning_card(format!(
            "The wallet list may be out of date. {}",
            e.user_message()
        )));
    }

    if directory.is_loading() {
        col = col.push(text::p2("Loading wallets..."));
    } else if directory.wallets().is_empty() && directory.error().is_none() {
        col = col.push(text::p2("No wallet yet, create one to get started."));
    } else {
        col = col.push(
            Row::with_children(
                directory
                    .wallets()
                    .iter()
                    .map(|wallet| tile(wallet, selected == Some(wallet))),
            )
            .spacing(10)
            .wrap(),
        );
    }

    if let Some(detail) = detail {
        col = col.push(detail);
    }

    col.into()
}
