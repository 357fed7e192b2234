//! Seaport basic-order call encoding.
//!
//! Re-encodes the marketplace's fulfillment transaction as a call to
//! `fulfillBasicOrder_efficient_6GL6yc`, the only fulfillment method the
//! strategy contract forwards.

use alloy_primitives::{Bytes, U256};
use alloy_sol_types::{sol, SolCall};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::fields::Fields;
use crate::domain::{EncodedCall, FulfillmentData};
use crate::error::{PurchaseError, Result};

/// Name of the single supported fulfillment function.
pub const FULFILL_BASIC_ORDER: &str = "fulfillBasicOrder_efficient_6GL6yc";

sol! {
    struct AdditionalRecipient {
        uint256 amount;
        address recipient;
    }

    struct BasicOrderParameters {
        address considerationToken;
        uint256 considerationIdentifier;
        uint256 considerationAmount;
        address offerer;
        address zone;
        address offerToken;
        uint256 offerIdentifier;
        uint256 offerAmount;
        uint8 basicOrderType;
        uint256 startTime;
        uint256 endTime;
        bytes32 zoneHash;
        uint256 salt;
        bytes32 offererConduitKey;
        bytes32 fulfillerConduitKey;
        uint256 totalOriginalAdditionalRecipients;
        AdditionalRecipient[] additionalRecipients;
        bytes signature;
    }

    function fulfillBasicOrder_efficient_6GL6yc(BasicOrderParameters parameters)
        external
        payable
        returns (bool fulfilled);
}

/// Encode the fulfillment payload into a strategy-forwardable call.
///
/// # Errors
///
/// - [`PurchaseError::MissingTransactionData`] if the payload has no transaction
/// - [`PurchaseError::UnsupportedFulfillmentMethod`] if the marketplace names
///   a function other than [`FULFILL_BASIC_ORDER`]
/// - [`PurchaseError::MalformedResponse`] if a field does not parse into its
///   ABI type
#[allow(clippy::result_large_err)]
pub fn encode_fulfillment(data: &FulfillmentData, expected_id: U256) -> Result<EncodedCall> {
    let transaction = data
        .transaction()
        .ok_or(PurchaseError::MissingTransactionData)?;
    let tx = Fields::new(transaction, "fulfillment_data.transaction")?;

    let function = tx
        .optional("function")
        .and_then(|f| f.as_str())
        .map(str::to_string);
    if let Some(ref function) = function {
        let name = function_name(function);
        if !name.is_empty() && name != FULFILL_BASIC_ORDER {
            return Err(PurchaseError::UnsupportedFulfillmentMethod {
                function: function.clone(),
            }
            .into());
        }
    }

    let target = tx.address("to")?;
    let value = tx.uint("value")?;

    info!(
        %target,
        function = function.as_deref().unwrap_or("-"),
        value_eth = %alloy_primitives::utils::format_ether(value),
        value_wei = %value,
        "Transaction details from marketplace"
    );

    let parameters = basic_order_parameters(&tx.object("input_data")?.object("parameters")?)?;
    log_order_window(&parameters);

    let call = fulfillBasicOrder_efficient_6GL6ycCall { parameters };
    let data = Bytes::from(call.abi_encode());

    Ok(EncodedCall {
        target,
        value,
        data,
        expected_id,
        function,
    })
}

/// `fulfillBasicOrder_efficient_6GL6yc((address,...))` -> `fulfillBasicOrder_efficient_6GL6yc`
fn function_name(signature: &str) -> &str {
    signature.split('(').next().unwrap_or_default().trim()
}

#[allow(clippy::result_large_err)]
fn basic_order_parameters(p: &Fields<'_>) -> Result<BasicOrderParameters> {
    let additional_recipients = p
        .array("additionalRecipients")?
        .iter()
        .enumerate()
        .map(|(i, entry)| -> std::result::Result<_, PurchaseError> {
            let r = Fields::new(entry, format!("{}.additionalRecipients[{i}]", p.path()))?;
            Ok(AdditionalRecipient {
                amount: r.uint("amount")?,
                recipient: r.address("recipient")?,
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(BasicOrderParameters {
        considerationToken: p.address("considerationToken")?,
        considerationIdentifier: p.uint("considerationIdentifier")?,
        considerationAmount: p.uint("considerationAmount")?,
        offerer: p.address("offerer")?,
        zone: p.address("zone")?,
        offerToken: p.address("offerToken")?,
        offerIdentifier: p.uint("offerIdentifier")?,
        offerAmount: p.uint("offerAmount")?,
        basicOrderType: p.uint8("basicOrderType")?,
        startTime: p.uint("startTime")?,
        endTime: p.uint("endTime")?,
        zoneHash: p.bytes32("zoneHash")?,
        salt: p.uint("salt")?,
        offererConduitKey: p.bytes32("offererConduitKey")?,
        fulfillerConduitKey: p.bytes32("fulfillerConduitKey")?,
        totalOriginalAdditionalRecipients: p.uint("totalOriginalAdditionalRecipients")?,
        additionalRecipients: additional_recipients,
        signature: p.bytes("signature")?,
    })
}

fn timestamp(value: U256) -> Option<DateTime<Utc>> {
    let secs = i64::try_from(value).ok()?;
    DateTime::from_timestamp(secs, 0)
}

fn log_order_window(parameters: &BasicOrderParameters) {
    let fmt = |t: Option<DateTime<Utc>>| t.map_or_else(|| "-".to_string(), |t| t.to_rfc3339());
    debug!(
        offerer = %parameters.offerer,
        offer_token = %parameters.offerToken,
        offer_identifier = %parameters.offerIdentifier,
        starts = %fmt(timestamp(parameters.startTime)),
        ends = %fmt(timestamp(parameters.endTime)),
        additional_recipients = parameters.additionalRecipients.len(),
        "Basic order parameters"
    );
}
