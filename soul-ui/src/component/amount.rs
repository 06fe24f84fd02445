use bitcoin::Amount;

/// Formats an amount in bitcoin with the shortest decimal representation,
/// e.g. `0.5 BTC` or `0 BTC`.
pub fn btc(amount: Amount) -> String {
    format!("{} BTC", amount.to_btc())
}

pub fn sats(amount: Amount) -> String {
    format!("{} sats", amount.to_sat())
}

pub fn msats(msat: u64) -> String {
    format!("{} msat", msat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_bitcoin_amounts() {
        assert_eq!(btc(Amount::from_sat(50_000_000)), "0.5 BTC");
        assert_eq!(btc(Amount::ZERO), "0 BTC");
        assert_eq!(btc(Amount::from_sat(5_000_000_000)), "50 BTC");
        assert_eq!(btc(Amount::from_sat(1)), "0.00000001 BTC");
    }

    #[test]
    fn formats_small_units() {
        assert_eq!(sats(Amount::from_sat(1_500)), "1500 sats");
        assert_eq!(msats(42_000), "42000 msat");
    }
}
