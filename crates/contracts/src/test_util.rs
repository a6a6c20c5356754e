//! A scripted JSON-RPC node for tests, served through wiremock.
//!
//! `eth_call` is answered from a table keyed by `(to, selector)`; unknown
//! calls revert. Signed transactions are accepted, recorded and mined at
//! block 42 with a receipt whose status is configurable.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use alloy::primitives::{hex, keccak256, Address, U256};
use serde_json::{json, Value};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Block every mocked transaction is mined in.
pub const MINED_BLOCK: u64 = 42;

/// Gas used reported by every mocked receipt.
pub const MINED_GAS_USED: u64 = 50_000;

const GAS_PRICE: &str = "0x3b9aca00";

/// Raw transactions the node accepted, in order.
#[derive(Clone, Default)]
pub struct SentTransactions(Arc<Mutex<Vec<Vec<u8>>>>);

impl SentTransactions {
    fn push(&self, raw: Vec<u8>) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(raw);
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// For each sent transaction, the first of `known` found in its payload.
    pub fn selectors(&self, known: &[[u8; 4]]) -> Vec<[u8; 4]> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter_map(|raw| {
                known
                    .iter()
                    .copied()
                    .find(|sel| raw.windows(4).any(|w| w == sel))
            })
            .collect()
    }
}

#[derive(Clone, Default)]
pub struct RpcMock {
    calls: HashMap<(Address, [u8; 4]), Vec<u8>>,
    native_balance: U256,
    revert_transactions: bool,
    sent: SentTransactions,
}

impl RpcMock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer calls to `to` with `selector` using pre-encoded return data.
    pub fn on_call(mut self, to: Address, selector: [u8; 4], returns: Vec<u8>) -> Self {
        self.calls.insert((to, selector), returns);
        self
    }

    pub fn with_native_balance(mut self, balance: U256) -> Self {
        self.native_balance = balance;
        self
    }

    /// Mine every transaction with a failed status.
    pub fn reverting_transactions(mut self) -> Self {
        self.revert_transactions = true;
        self
    }

    /// Handle on the transactions this node will accept.
    pub fn sent(&self) -> SentTransactions {
        self.sent.clone()
    }

    pub async fn mount(self, server: &MockServer) {
        Mock::given(method("POST")).respond_with(self).mount(server).await;
    }

    /// Start a server answering from this mock.
    pub async fn start(self) -> MockServer {
        let server = MockServer::start().await;
        self.mount(&server).await;
        server
    }

    fn eth_call(&self, params: &Value) -> Result<Value, Value> {
        let tx = &params[0];
        let to: Option<Address> = tx["to"].as_str().and_then(|s| s.parse().ok());
        let input = tx
            .get("input")
            .or_else(|| tx.get("data"))
            .and_then(Value::as_str)
            .and_then(|s| hex::decode(s).ok())
            .unwrap_or_default();

        let key = match (to, input.get(..4)) {
            (Some(to), Some(sel)) => (to, [sel[0], sel[1], sel[2], sel[3]]),
            _ => return Err(json!({"code": -32602, "message": "invalid eth_call"})),
        };

        match self.calls.get(&key) {
            Some(returns) => Ok(json!(hex::encode_prefixed(returns))),
            None => Err(json!({"code": 3, "message": "execution reverted"})),
        }
    }

    fn send_raw_transaction(&self, params: &Value) -> Result<Value, Value> {
        let raw = params[0]
            .as_str()
            .and_then(|s| hex::decode(s).ok())
            .ok_or_else(|| json!({"code": -32602, "message": "invalid raw transaction"}))?;
        let hash = keccak256(&raw);
        self.sent.push(raw);
        Ok(json!(hash))
    }

    fn receipt(&self, params: &Value) -> Value {
        let status = if self.revert_transactions { "0x0" } else { "0x1" };
        json!({
            "type": "0x2",
            "status": status,
            "cumulativeGasUsed": format!("{:#x}", MINED_GAS_USED),
            "logs": [],
            "logsBloom": format!("0x{}", "00".repeat(256)),
            "transactionHash": params[0],
            "transactionIndex": "0x0",
            "blockHash": format!("0x{}", "42".repeat(32)),
            "blockNumber": format!("{:#x}", MINED_BLOCK),
            "gasUsed": format!("{:#x}", MINED_GAS_USED),
            "effectiveGasPrice": GAS_PRICE,
            "from": Address::ZERO,
            "to": null,
            "contractAddress": null,
        })
    }
}

impl Respond for RpcMock {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        let id = body["id"].clone();
        let params = &body["params"];

        let outcome = match body["method"].as_str().unwrap_or_default() {
            "eth_chainId" => Ok(json!("0x138b")),
            "eth_blockNumber" => Ok(json!(format!("{:#x}", MINED_BLOCK))),
            "eth_getBlockByNumber" => Ok(Value::Null),
            "eth_getBalance" => Ok(json!(format!("{:#x}", self.native_balance))),
            "eth_call" => self.eth_call(params),
            "eth_getTransactionCount" => Ok(json!(format!("{:#x}", self.sent.len()))),
            "eth_estimateGas" => Ok(json!("0x186a0")),
            "eth_gasPrice" | "eth_maxPriorityFeePerGas" => Ok(json!(GAS_PRICE)),
            "eth_feeHistory" => Ok(json!({
                "oldestBlock": format!("{:#x}", MINED_BLOCK),
                "baseFeePerGas": [GAS_PRICE, GAS_PRICE],
                "gasUsedRatio": [0.5],
                "reward": [[GAS_PRICE]],
            })),
            "eth_sendRawTransaction" => self.send_raw_transaction(params),
            "eth_getTransactionReceipt" => Ok(self.receipt(params)),
            other => Err(json!({
                "code": -32601,
                "message": format!("method not found: {other}"),
            })),
        };

        let payload = match outcome {
            Ok(result) => json!({"jsonrpc": "2.0", "id": id, "result": result}),
            Err(error) => json!({"jsonrpc": "2.0", "id": id, "error": error}),
        };
        ResponseTemplate::new(200).set_body_json(payload)
    }
}
