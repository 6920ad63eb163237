//! Status enums used across the marketplace, with the wire values and
//! localized labels the mobile clients expect.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unknown {kind} value: '{value}'")]
pub struct UnknownValue {
    kind: &'static str,
    value: String,
}

impl UnknownValue {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Reservation lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 5] = [
        ReservationStatus::Pending,
        ReservationStatus::Confirmed,
        ReservationStatus::Completed,
        ReservationStatus::Cancelled,
        ReservationStatus::NoShow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Completed => "completed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::NoShow => "no_show",
        }
    }

    /// User-facing label (Korean).
    pub fn label(self) -> &'static str {
        match self {
            ReservationStatus::Pending => "대기중",
            ReservationStatus::Confirmed => "확정",
            ReservationStatus::Completed => "완료",
            ReservationStatus::Cancelled => "취소됨",
            ReservationStatus::NoShow => "노쇼",
        }
    }

    /// Badge color (hex) for this state.
    pub fn color(self) -> &'static str {
        match self {
            ReservationStatus::Pending => "#FFA500",
            ReservationStatus::Confirmed => "#007AFF",
            ReservationStatus::Completed => "#00C853",
            ReservationStatus::Cancelled => "#FF3B30",
            ReservationStatus::NoShow => "#8E8E93",
        }
    }
}

impl FromStr for ReservationStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownValue::new("reservation status", s))
    }
}

/// Cash ledger transaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashTransactionType {
    Charge,
    Subscription,
    Refund,
    Withdrawal,
}

impl CashTransactionType {
    pub const ALL: [CashTransactionType; 4] = [
        CashTransactionType::Charge,
        CashTransactionType::Subscription,
        CashTransactionType::Refund,
        CashTransactionType::Withdrawal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CashTransactionType::Charge => "charge",
            CashTransactionType::Subscription => "subscription",
            CashTransactionType::Refund => "refund",
            CashTransactionType::Withdrawal => "withdrawal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CashTransactionType::Charge => "충전",
            CashTransactionType::Subscription => "구독료",
            CashTransactionType::Refund => "환불",
            CashTransactionType::Withdrawal => "출금",
        }
    }
}

impl FromStr for CashTransactionType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownValue::new("cash transaction type", s))
    }
}

/// Store onboarding approval state. New store-owner signups start as
/// `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl StoreApprovalStatus {
    pub const ALL: [StoreApprovalStatus; 3] = [
        StoreApprovalStatus::Pending,
        StoreApprovalStatus::Approved,
        StoreApprovalStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StoreApprovalStatus::Pending => "pending",
            StoreApprovalStatus::Approved => "approved",
            StoreApprovalStatus::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StoreApprovalStatus::Pending => "승인 대기",
            StoreApprovalStatus::Approved => "승인됨",
            StoreApprovalStatus::Rejected => "거절됨",
        }
    }
}

impl Default for StoreApprovalStatus {
    fn default() -> Self {
        StoreApprovalStatus::Pending
    }
}

impl FromStr for StoreApprovalStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownValue::new("store approval status", s))
    }
}

/// Day-of-week labels, indexed Sunday = 0 as the clients store them.
pub const DAY_OF_WEEK_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];
