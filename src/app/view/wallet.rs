use iced::{Alignment, Length};

use soul_ui::{
    color,
    component::{amount, button as ui_button, card, error_card, text},
    widget::*,
};

use super::{Message, WalletMessage};
use crate::app::state::{Loadable, MineState, ReceiveState, SendForm};
use crate::backend::{TransactionRecord, WalletName, WalletSummary};

pub fn wallet_panel<'a>(
    wallet: &'a WalletName,
    summary: &'a Loadable<WalletSummary>,
    transactions: &'a Loadable<Vec<TransactionRecord>>,
    mine: &'a MineState,
    receive: &'a ReceiveState,
    send: &'a SendForm,
) -> Element<'a, Message> {
    Column::new()
        .spacing(20)
        .push(text::h3(wallet.as_str()))
        .push(summary_view(summary))
        .push(
            Row::new()
                .spacing(20)
                .push(mine_view(mine))
                .push(receive_view(receive)),
        )
        .push(send_view(send))
        .push(transactions_view(transactions))
        .into()
}

fn labeled<'a>(label: &'a str, value: String) -> Column<'a, Message> {
    Column::new()
        .spacing(5)
        .width(Length::Fill)
        .push(text::caption(label).color(color::GREY_2))
        .push(text::h3(value))
}

fn summary_view(summary: &Loadable<WalletSummary>) -> Element<'_, Message> {
    match summary {
        Loadable::Loading => card(text::p2("Loading balance...")).into(),
        Loadable::Loaded(summary) => card(
            Row::new()
                .spacing(20)
                .push(labeled("Balance", amount::btc(summary.balance)))
                .push(labeled(
                    "Immature balance",
                    amount::btc(summary.immature_balance),
                ))
                .push(labeled("Transactions", summary.txcount.to_string())),
        )
        .into(),
        Loadable::Unavailable(e) => error_card("Balance unavailable", e.user_message()).into(),
    }
}

fn mine_view(mine: &MineState) -> Element<'_, Message> {
    let mut col = Column::new()
        .spacing(10)
        .push(text::p1_bold("Mine"))
        .push(text::p2("Mine blocks paying to this wallet."))
        .push(ui_button::primary_maybe(
            if mine.pending { "Mining..." } else { "Mine to self" },
            (!mine.pending).then_some(Message::Wallet(WalletMessage::Mine)),
        ));
    if mine.mined > 0 {
        col = col.push(
            text::caption(format!("Mined {} time(s) since opening this wallet", mine.mined))
                .color(color::GREEN),
        );
    }
    if let Some(e) = &mine.error {
        col = col.push(error_card("Mining failed", e.to_string()));
    }
    card(col).width(Length::FillPortion(1)).into()
}

fn receive_view(receive: &ReceiveState) -> Element<'_, Message> {
    let mut col = Column::new()
        .spacing(10)
        .push(text::p1_bold("Receive"))
        .push(ui_button::primary_maybe(
            "Generate address",
            (!receive.pending).then_some(Message::Wallet(WalletMessage::GenerateAddress)),
        ));
    if let Some(address) = &receive.address {
        col = col.push(
            Row::new()
                .spacing(10)
                .align_y(Alignment::Center)
                .push(text::p2(address.as_str()).width(Length::Fill))
                .push(
                    ui_button::transparent("Copy")
                        .on_press(Message::Clipboard(address.clone())),
                ),
        );
    }
    if let Some(data) = &receive.qr_code {
        col = col.push(qr_code::QRCode::new(data).cell_size(5));
    }
    if let Some(e) = &receive.error {
        col = col.push(error_card("Address generation failed", e.to_string()));
    }
    card(col).width(Length::FillPortion(1)).into()
}

fn send_view(send: &SendForm) -> Element<'_, Message> {
    let can_send = !send.pending && !send.receiver.is_empty() && !send.amount.is_empty();
    let mut col = Column::new()
        .spacing(10)
        .push(text::p1_bold("Send"))
        .push(
            TextInput::new("Receiver address", &send.receiver)
                .on_input_maybe(
                    (!send.pending).then_some(|s: String| Message::Wallet(WalletMessage::ReceiverEdited(s))),
                )
                .padding(10),
        )
        .push(
            TextInput::new("Amount (BTC)", &send.amount)
                .on_input_maybe(
                    (!send.pending).then_some(|s: String| Message::Wallet(WalletMessage::AmountEdited(s))),
                )
                .padding(10),
        )
        .push(ui_button::primary_maybe(
            if send.pending { "Sending..." } else { "Send" },
            can_send.then_some(Message::Wallet(WalletMessage::Send)),
        ));
    if let Some((amount, receiver)) = &send.sent {
        col = col.push(
            text::caption(format!("Sent {} to {}", amount::btc(*amount), receiver))
                .color(color::GREEN),
        );
    }
    if let Some(e) = &send.error {
        col = col.push(error_card("Send failed", e.to_string()));
    }
    card(col).into()
}

fn transaction_row(tx: &TransactionRecord) -> Element<'_, Message> {
    let (direction, sign, tint) = if tx.is_incoming() {
        ("Received", "+", color::GREEN)
    } else {
        ("Sent", "-", color::RED)
    };
    let status = match &tx.confirmation_time {
        Some(conf) => match conf.datetime() {
            Some(dt) => format!(
                "Confirmed at height {}, {}",
                conf.height,
                dt.format("%Y-%m-%d %H:%M")
            ),
            None => format!("Confirmed at height {}", conf.height),
        },
        None => "Unconfirmed".to_string(),
    };
    let mut details = Column::new()
        .spacing(5)
        .width(Length::Fill)
        .push(text::p2_bold(direction))
        .push(text::caption(tx.txid.as_str()).color(color::GREY_2))
        .push(text::caption(status).color(color::GREY_2));
    if let Some(fee) = tx.fee {
        details = details.push(text::caption(format!("Fee: {}", amount::sats(fee))).color(color::GREY_2));
    }
    card(
        Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(details)
            .push(text::p1_bold(format!("{}{}", sign, amount::btc(tx.net_amount()))).color(tint)),
    )
    .padding(10)
    .into()
}

fn transactions_view(transactions: &Loadable<Vec<TransactionRecord>>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match transactions {
        Loadable::Loading => text::p2("Loading transactions...").into(),
        Loadable::Loaded(txs) if txs.is_empty() => text::p2("No transactions yet.").into(),
        Loadable::Loaded(txs) => txs
            .iter()
            .fold(Column::new().spacing(10), |col, tx| col.push(transaction_row(tx)))
            .into(),
        Loadable::Unavailable(e) => {
            error_card("Transactions unavailable", e.user_message()).into()
        }
    };
    Column::new()
        .spacing(10)
        .push(text::h3("Transactions"))
        .push(content)
        .into()
}
