//! Wallet transactions.

use backoffice_core::types::{TransactionId, TripId, WalletId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Kind of wallet movement.
    TransactionType {
        /// Money added to a wallet.
        Topup => "TOPUP",
        /// Money taken out to a bank account.
        Withdrawal => "WITHDRAWAL",
        /// Trip earnings paid to a driver.
        DriverPayout => "DRIVER_PAYOUT",
        /// Trip earnings paid to an owner.
        OwnerPayout => "OWNER_PAYOUT",
    }
}

wire_enum! {
    /// Settlement state.
    TransactionStatus {
        /// Not yet settled.
        Pending => "PENDING",
        /// Settled.
        Completed => "COMPLETED",
        /// Settlement failed.
        Failed => "FAILED",
        /// Voided.
        Cancelled => "CANCELLED",
    }
}

wire_enum! {
    /// Money direction, from the sign of the amount.
    AmountDirection {
        /// Zero or positive amounts.
        In => "IN",
        /// Negative amounts.
        Out => "OUT",
    }
}

impl AmountDirection {
    /// Direction of `amount`. Zero counts as incoming.
    pub fn of(amount: f64) -> Self {
        if amount < 0.0 { Self::Out } else { Self::In }
    }
}

/// A wallet transaction. Amounts are in VND.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction ID.
    #[serde(alias = "TransactionId")]
    pub transaction_id: TransactionId,
    /// Wallet moved.
    #[serde(default)]
    pub wallet_id: Option<WalletId>,
    /// Trip the movement pays for.
    #[serde(default)]
    pub trip_id: Option<TripId>,
    /// Kind of movement.
    #[serde(default, rename = "type", alias = "Type")]
    pub transaction_type: TransactionType,
    /// Signed amount.
    #[serde(default, alias = "Amount")]
    pub amount: f64,
    /// Balance before the movement.
    #[serde(default)]
    pub balance_before: Option<f64>,
    /// Balance after the movement.
    #[serde(default)]
    pub balance_after: Option<f64>,
    /// Settlement state.
    #[serde(default, alias = "Status")]
    pub status: TransactionStatus,
    /// Free text.
    #[serde(default)]
    pub description: Option<String>,
    /// Creation time.
    #[serde(default, with = "crate::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    /// Settlement time.
    #[serde(default, with = "crate::timestamp::option")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Direction of this movement.
    pub fn direction(&self) -> AmountDirection {
        AmountDirection::of(self.amount)
    }

    /// Amount with an explicit sign, e.g. `+50000 VND`.
    pub fn signed_amount(&self) -> String {
        if self.amount >= 0.0 {
            format!("+{} VND", self.amount)
        } else {
            format!("{} VND", self.amount)
        }
    }
}
