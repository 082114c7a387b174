//! Payment request model and its CSV record form.

use crate::amount::Amount;
use crate::error::{BrCodeError, Result};
use crate::payload;
use serde::Deserialize;

/// A static PIX payment request.
///
/// Built once with [`PaymentRequest::new`] and the `with_*` builder methods;
/// nothing is normalized until the payload is generated.
///
/// # Examples
///
/// ```
/// use pix_brcode::{Amount, PaymentRequest};
///
/// let code = PaymentRequest::new("+5571997170057", "Central Cidadania", "Salvador")
///     .unwrap()
///     .with_amount(Amount::parse("20"))
///     .with_txid("Doação Central da Cidadania")
///     .generate()
///     .unwrap();
/// assert!(code.starts_with("000201"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    key: String,
    merchant_name: String,
    merchant_city: String,
    amount: Option<Amount>,
    txid: Option<String>,
}

impl PaymentRequest {
    /// Creates a request without amount or transaction id.
    ///
    /// Fails with [`BrCodeError::MissingField`] if the key, merchant name or
    /// merchant city is empty or whitespace only. The key is otherwise kept
    /// verbatim.
    pub fn new(
        key: impl Into<String>,
        merchant_name: impl Into<String>,
        merchant_city: impl Into<String>,
    ) -> Result<Self> {
        let key = key.into();
        let merchant_name = merchant_name.into();
        let merchant_city = merchant_city.into();

        if key.trim().is_empty() {
            return Err(BrCodeError::MissingField("key"));
        }
        if merchant_name.trim().is_empty() {
            return Err(BrCodeError::MissingField("merchant_name"));
        }
        if merchant_city.trim().is_empty() {
            return Err(BrCodeError::MissingField("merchant_city"));
        }

        Ok(PaymentRequest {
            key,
            merchant_name,
            merchant_city,
            amount: None,
            txid: None,
        })
    }

    /// Sets the amount. `None` produces an open-amount request.
    pub fn with_amount(mut self, amount: Option<Amount>) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the transaction reference.
    pub fn with_txid(mut self, txid: impl Into<String>) -> Self {
        self.txid = Some(txid.into());
        self
    }

    /// PIX key, unnormalized.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Merchant name as supplied, before normalization.
    pub fn merchant_name(&self) -> &str {
        &self.merchant_name
    }

    /// Merchant city as supplied, before normalization.
    pub fn merchant_city(&self) -> &str {
        &self.merchant_city
    }

    /// Amount, `None` for an open-amount request.
    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    /// Raw transaction reference, if one was set.
    pub fn txid(&self) -> Option<&str> {
        self.txid.as_deref()
    }

    /// Encodes this request as a sealed BR Code string.
    pub fn generate(&self) -> Result<String> {
        payload::generate(self)
    }
}

/// Raw payment request as read from CSV.
///
/// `amount` and `txid` may be missing or empty.
#[derive(Debug, Deserialize)]
pub struct PaymentRecord {
    /// PIX key (phone, e-mail, tax id or random key)
    pub key: String,

    /// Merchant display name
    pub merchant_name: String,

    /// Merchant city
    pub merchant_city: String,

    /// Amount as text; parsed leniently
    #[serde(default)]
    pub amount: Option<String>,

    /// Transaction reference
    #[serde(default)]
    pub txid: Option<String>,
}

impl PaymentRecord {
    /// Converts the record into a [`PaymentRequest`].
    ///
    /// An unparsable or non-positive amount is dropped rather than rejected.
    pub fn parse(&self) -> Result<PaymentRequest> {
        let request = PaymentRequest::new(
            self.key.trim(),
            self.merchant_name.as_str(),
            self.merchant_city.as_str(),
        )?
        .with_amount(self.amount.as_deref().and_then(Amount::parse));

        match self.txid.as_deref() {
            Some(txid) if !txid.trim().is_empty() => Ok(request.with_txid(txid)),
            _ => Ok(request),
        }
    }
}
