use iced::{Alignment, Length};

use soul_ui::{
    color,
    component::{button as ui_button, error_card, text},
    theme,
    widget::*,
};

use super::{CreationMessage, Message};
use crate::app::{error::Error, phrase::RecoveryPhrase, state::CreationStep};

const WORDS_PER_ROW: usize = 4;

fn creation(msg: CreationMessage) -> Message {
    Message::Creation(msg)
}

fn phrase_grid(words: &[String]) -> Element<'_, Message> {
    words
        .chunks(WORDS_PER_ROW)
        .enumerate()
        .fold(Column::new().spacing(10), |col, (row, chunk)| {
            col.push(chunk.iter().enumerate().fold(
                Row::new().spacing(10),
                |r, (i, word)| {
                    r.push(
                        Container::new(text::p1_regular(format!(
                            "{}. {}",
                            row * WORDS_PER_ROW + i + 1,
                            word
                        )))
                        .width(Length::FillPortion(1)),
                    )
                },
            ))
        })
        .into()
}

fn confirmation_grid(words: &[String]) -> Element<'_, Message> {
    words
        .chunks(WORDS_PER_ROW)
        .enumerate()
        .fold(Column::new().spacing(10), |col, (row, chunk)| {
            col.push(chunk.iter().enumerate().fold(
                Row::new().spacing(10),
                |r, (i, word)| {
                    let index = row * WORDS_PER_ROW + i;
                    r.push(
                        TextInput::new(&format!("Word {}", index + 1), word)
                            .on_input(move |w| creation(CreationMessage::WordEdited(index, w)))
                            .padding(8)
                            .width(Length::FillPortion(1)),
                    )
                },
            ))
        })
        .into()
}

pub fn creation_modal<'a>(
    step: CreationStep,
    phrase: Option<&'a RecoveryPhrase>,
    words: &'a [String],
    restore_input: &'a str,
    pending: bool,
    error: Option<&'a Error>,
) -> Element<'a, Message> {
    let title = if step == CreationStep::Restoring {
        "Restore a wallet"
    } else {
        "Create a wallet"
    };

    let header = Row::new()
        .align_y(Alignment::Center)
        .push(text::h3(title).width(Length::Fill))
        .push(ui_button::transparent("Close").on_press(creation(CreationMessage::Close)));

    let body: Element<'a, Message> = match step {
        CreationStep::Idle => Column::new()
            .spacing(15)
            .push(text::p2(
                "Ask the node for a new 12 word recovery phrase, or restore a wallet \
                 from a phrase you already own.",
            ))
            .push(
                Row::new()
                    .spacing(10)
                    .push(ui_button::primary_maybe(
                        if pending { "Generating..." } else { "Generate recovery phrase" },
                        (!pending).then_some(creation(CreationMessage::Generate)),
                    ))
                    .push(
                        ui_button::secondary("Restore from phrase")
                            .on_press_maybe((!pending).then_some(creation(CreationMessage::Restore))),
                    ),
            )
            .into(),
        CreationStep::PhraseShown => Column::new()
            .spacing(15)
            .push(
                text::p2("Write down these words in order and keep them somewhere safe.")
                    .color(color::ORANGE),
            )
            .push(phrase_grid(phrase.map(|p| p.words()).unwrap_or_default()))
            .push(ui_button::primary("Next").on_press(creation(CreationMessage::Next)))
            .into(),
        CreationStep::Confirming => Column::new()
            .spacing(15)
            .push(text::p2("Type your recovery phrase back to confirm you saved it."))
            .push(confirmation_grid(words))
            .push(ui_button::primary_maybe(
                if pending { "Creating..." } else { "Create wallet" },
                (!pending).then_some(creation(CreationMessage::Submit)),
            ))
            .into(),
        CreationStep::Restoring => Column::new()
            .spacing(15)
            .push(text::p2("Enter the 12 words of your recovery phrase, separated by spaces."))
            .push(
                TextInput::new("Recovery phrase", restore_input)
                    .on_input(|s| creation(CreationMessage::RestoreEdited(s)))
                    .padding(10),
            )
            .push(
                Row::new()
                    .spacing(10)
                    .push(
                        ui_button::secondary("Back")
                            .on_press_maybe((!pending).then_some(creation(CreationMessage::CancelRestore))),
                    )
                    .push(ui_button::primary_maybe(
                        if pending { "Restoring..." } else { "Restore wallet" },
                        (!pending && !restore_input.trim().is_empty())
                            .then_some(creation(CreationMessage::SubmitRestore)),
                    )),
            )
            .into(),
    };

    let mut col = Column::new().spacing(20).push(header).push(body);
    if let Some(e) = error {
        col = col.push(error_card("Error", e.to_string()));
    }

    Container::new(col)
        .padding(30)
        .width(Length::Fixed(640.0))
        .style(theme::card::modal)
        .into()
}
