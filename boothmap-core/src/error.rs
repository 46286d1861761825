//! Refusals returned by the booking desk and invariant violations found by `verify`.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which empty-cart operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyCartOp {
    Clear,
    Checkout,
}

impl EmptyCartOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Checkout => "checkout",
        }
    }
}

impl fmt::Display for EmptyCartOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user action the desk declined. State is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartRejection {
    #[error("booth {0} is already booked")]
    AlreadyBooked(String),
    #[error("booth {0} is already in the cart")]
    AlreadyInCart(String),
    #[error("cannot {0}: the cart is empty")]
    EmptyCart(EmptyCartOp),
    #[error("no booth with id {0:?}")]
    NotFound(String),
}

impl CartRejection {
    /// Rejections the UI should swallow rather than show.
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Stable message key for the notice channel, `None` for silent rejections.
    #[must_use]
    pub const fn notice_key(&self) -> Option<&'static str> {
        match self {
            Self::AlreadyBooked(_) => Some("notice.already_booked"),
            Self::AlreadyInCart(_) => Some("notice.already_in_cart"),
            Self::EmptyCart(EmptyCartOp::Clear) => Some("notice.cart_already_empty"),
            Self::EmptyCart(EmptyCartOp::Checkout) => Some("notice.nothing_to_checkout"),
            Self::NotFound(_) => None,
        }
    }
}

/// A broken cart/catalog invariant. Reaching one is a bug in the desk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("booth {0} is both booked and selected")]
    BookedAndSelected(String),
    #[error("booth {0} appears in the cart more than once")]
    DuplicateLine(String),
    #[error("booth {0} is selected but not in the cart")]
    SelectedNotInCart(String),
    #[error("cart line {0} is not marked selected")]
    LineNotSelected(String),
    #[error("cart line {0} refers to a booked booth")]
    LineForBookedBooth(String),
    #[error("cart line {0} refers to no booth")]
    UnknownLine(String),
    #[error("cart line {id} has price {line} but the booth costs {booth}")]
    PriceMismatch { id: String, line: u32, booth: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_not_found_is_silent() {
        assert!(CartRejection::NotFound("Z1".into()).is_silent());
        assert!(!CartRejection::AlreadyBooked("A2".into()).is_silent());
        assert!(!CartRejection::EmptyCart(EmptyCartOp::Clear).is_silent());
        assert_eq!(CartRejection::NotFound("Z1".into()).notice_key(), None);
    }

    #[test]
    fn empty_cart_keys_differ_by_operation() {
        assert_eq!(
            CartRejection::EmptyCart(EmptyCartOp::Clear).notice_key(),
            Some("notice.cart_already_empty")
        );
        assert_eq!(
            CartRejection::EmptyCart(EmptyCartOp::Checkout).notice_key(),
            Some("notice.nothing_to_checkout")
        );
    }

    #[test]
    fn messages_name_the_booth() {
        let msg = CartRejection::AlreadyInCart("B1".into()).to_string();
        assert!(msg.contains("B1"));
        assert_eq!(
            CartRejection::EmptyCart(EmptyCartOp::Checkout).to_string(),
            "cannot checkout: the cart is empty"
        );
    }
}
