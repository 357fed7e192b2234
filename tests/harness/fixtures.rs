use serde_json::{json, Value};

pub const SEAPORT: &str = "0x0000000000000068F116a894984e2DB1123eB395";
pub const ORDER_HASH: &str = "0x7f8e3d2c1b0a99887766554433221100ffeeddccbbaa00998877665544332211";
pub const STRATEGY: &str = "0x6BCba7Cd81a5F12c10Ca1BF9B36761CC382658E8";
pub const BUYER: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// Best-listing response body for a 1 ETH listing.
pub fn listing_body() -> String {
    json!({
        "order_hash": ORDER_HASH,
        "chain": "ethereum",
        "type": "basic",
        "price": {
            "current": {
                "currency": "ETH",
                "decimals": 18,
                "value": "1000000000000000000"
            }
        },
        "protocol_data": { "parameters": {}, "signature": null },
        "protocol_address": SEAPORT
    })
    .to_string()
}

pub fn basic_order_parameters() -> Value {
    json!({
        "considerationToken": "0x0000000000000000000000000000000000000000",
        "considerationIdentifier": "0",
        "considerationAmount": "485000000000000000",
        "offerer": "0x1111111111111111111111111111111111111111",
        "zone": "0x0000000000000000000000000000000000000000",
        "offerToken": "0xBC4CA0EdA7647A8aB7C2061c2E118A18a936f13D",
        "offerIdentifier": "5077",
        "offerAmount": "1",
        "basicOrderType": 0,
        "startTime": "1700000000",
        "endTime": "1800000000",
        "zoneHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "salt": "0x360c6ebe",
        "offererConduitKey": "0x0000007b02230091a7ed01230072f7006a004d60a8d4e71d599b8104250f0000",
        "fulfillerConduitKey": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "totalOriginalAdditionalRecipients": "1",
        "additionalRecipients": [
            {
                "amount": "15000000000000000",
                "recipient": "0x0000a26b00c1F0DF003000390027140000fAa719"
            }
        ],
        "signature": "0x"
    })
}

/// Fulfillment response body whose transaction pays `value` wei.
pub fn fulfillment_body(value: &str) -> String {
    json!({
        "protocol": "seaport1.6",
        "fulfillment_data": {
            "transaction": {
                "function": "fulfillBasicOrder_efficient_6GL6yc((address,uint256,uint256,address,address,address,uint256,uint256,uint8,uint256,uint256,bytes32,uint256,bytes32,bytes32,uint256,(uint256,address)[],bytes))",
                "chain": 1,
                "to": SEAPORT,
                "value": value,
                "input_data": { "parameters": basic_order_parameters() }
            },
            "orders": []
        }
    })
    .to_string()
}

/// Fulfillment response body without a transaction.
pub fn fulfillment_body_without_transaction() -> String {
    json!({
        "protocol": "seaport1.6",
        "fulfillment_data": { "orders": [] }
    })
    .to_string()
}
