//! BR Code payload assembly.
//!
//! Emits the top-level fields in the fixed merchant-presented order and seals
//! the result with the checksum field:
//!
//! ```text
//! 00 01 | 26 {00 GUI, 01 key} | 52 0000 | 53 986 | [54 amount] | 58 BR
//! | 59 name | 60 city | 62 {05 txid} | 63 crc
//! ```

use crate::crc;
use crate::error::Result;
use crate::field::{TaggedField, Template};
use crate::normalize::{normalize, truncate_chars};
use crate::request::PaymentRequest;
use log::debug;

pub const ID_PAYLOAD_FORMAT: &str = "00";
pub const ID_MERCHANT_ACCOUNT: &str = "26";
pub const ID_CATEGORY_CODE: &str = "52";
pub const ID_CURRENCY: &str = "53";
pub const ID_AMOUNT: &str = "54";
pub const ID_COUNTRY: &str = "58";
pub const ID_MERCHANT_NAME: &str = "59";
pub const ID_MERCHANT_CITY: &str = "60";
pub const ID_ADDITIONAL_DATA: &str = "62";

// Sub-field ids.
pub const ID_GUI: &str = "00";
pub const ID_KEY: &str = "01";
pub const ID_TXID: &str = "05";

pub const PAYLOAD_FORMAT: &str = "01";
pub const PIX_GUI: &str = "br.gov.bcb.pix";
pub const CATEGORY_CODE: &str = "0000";
/// ISO 4217 numeric code for BRL.
pub const CURRENCY_BRL: &str = "986";
pub const COUNTRY_CODE: &str = "BR";

pub const MAX_NAME_LEN: usize = 25;
pub const MAX_CITY_LEN: usize = 15;
pub const MAX_TXID_LEN: usize = 25;

/// Placeholder reference for requests without a transaction id.
pub const DEFAULT_TXID: &str = "***";

/// Builds the ordered top-level fields of a request, checksum excluded.
pub fn assemble(request: &PaymentRequest) -> Result<Vec<TaggedField>> {
    let mut fields = Vec::with_capacity(9);

    fields.push(TaggedField::new(ID_PAYLOAD_FORMAT, PAYLOAD_FORMAT)?);
    fields.push(
        Template::new()
            .with(ID_GUI, PIX_GUI)?
            .with(ID_KEY, request.key())?
            .into_field(ID_MERCHANT_ACCOUNT)?,
    );
    fields.push(TaggedField::new(ID_CATEGORY_CODE, CATEGORY_CODE)?);
    fields.push(TaggedField::new(ID_CURRENCY, CURRENCY_BRL)?);

    if let Some(amount) = request.amount() {
        fields.push(TaggedField::new(ID_AMOUNT, amount.to_string())?);
    }

    fields.push(TaggedField::new(ID_COUNTRY, COUNTRY_CODE)?);
    fields.push(TaggedField::new(
        ID_MERCHANT_NAME,
        truncate_chars(&normalize(request.merchant_name()), MAX_NAME_LEN),
    )?);
    fields.push(TaggedField::new(
        ID_MERCHANT_CITY,
        truncate_chars(&normalize(request.merchant_city()), MAX_CITY_LEN),
    )?);
    fields.push(
        Template::new()
            .with(ID_TXID, &reference_label(request.txid()))?
            .into_field(ID_ADDITIONAL_DATA)?,
    );

    Ok(fields)
}

/// Encodes a request into its final BR Code string.
pub fn generate(request: &PaymentRequest) -> Result<String> {
    let fields = assemble(request)?;
    let body: String = fields.iter().map(TaggedField::encode).collect();
    let code = crc::seal(&body)?;

    debug!(
        "Generated BR Code for key {} ({} fields, checksum {})",
        request.key(),
        fields.len() + 1,
        &code[code.len() - 4..]
    );

    Ok(code)
}

/// Value of sub-field 62/05.
///
/// The raw text is cut to 25 characters first, then normalized and stripped
/// of spaces. Case expansion during normalization (`ß` -> `SS`) can grow the
/// result, so it is capped again. An empty result falls back to `***`.
fn reference_label(txid: Option<&str>) -> String {
    let label = txid
        .map(|t| normalize(&truncate_chars(t, MAX_TXID_LEN)).replace(' ', ""))
        .unwrap_or_default();

    if label.is_empty() {
        DEFAULT_TXID.to_string()
    } else {
        truncate_chars(&label, MAX_TXID_LEN)
    }
}
