use std::fmt;
use crate::p2p::enums::trade_type::TradeType;

impl TradeType {
    /// Parses an already uppercased direction.
    pub fn parse(value: &str) -> Option<TradeType> {
        match value {
            "BUY" => Some(TradeType::Buy),
            "SELL" => Some(TradeType::Sell),
            _ => None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::Buy => "BUY",
            TradeType::Sell => "SELL",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
