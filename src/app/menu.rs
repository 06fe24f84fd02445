#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Wallets,
    Lightning,
    Bitcoin,
}

impl Menu {
    pub const ALL: [Menu; 3] = [Menu::Wallets, Menu::Lightning, Menu::Bitcoin];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Wallets => "Wallets",
            Self::Lightning => "Lightning",
            Self::Bitcoin => "Bitcoin",
        }
    }
}
