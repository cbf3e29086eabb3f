use serde::{Deserialize, Serialize};

/// Способ оплаты на шаге "Оплата"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    EWallet,
    AtCashDesk,
}

impl PaymentMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Банковская карта",
            PaymentMethod::EWallet => "Электронный кошелёк",
            PaymentMethod::AtCashDesk => "Оплата в кассе",
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::Card,
            PaymentMethod::EWallet,
            PaymentMethod::AtCashDesk,
        ]
    }

    /// Код для значения селекта
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::EWallet => "e_wallet",
            PaymentMethod::AtCashDesk => "at_cash_desk",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "card" => Some(PaymentMethod::Card),
            "e_wallet" => Some(PaymentMethod::EWallet),
            "at_cash_desk" => Some(PaymentMethod::AtCashDesk),
            _ => None,
        }
    }
}
