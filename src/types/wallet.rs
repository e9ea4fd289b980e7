use serde::{Deserialize, Serialize};

/// Funds a wallet has escrowed with the auction house to back its offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscrowBalance {
    /// Escrow account, absent when the wallet never deposited.
    #[serde(rename = "buyerEscrow")]
    pub buyer_escrow: Option<String>,
    /// Balance in SOL.
    pub balance: f64,
}
