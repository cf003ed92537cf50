use crate::command::Command;
use crate::error::RpcResult;
use crate::formatter::{format_record, format_string};
use crate::models::{
    AddressBalance, PrevTxOut, RawAction, RawTransaction, SigHashType, SignedTransaction,
    TxIdVout,
};
use crate::params::Params;
use crate::validation::{require_all_filled, require_non_empty};
use crate::RpcClient;
use serde_json::Value;
use std::sync::Arc;

/// Result of a raw-transaction builder call, shaped by the requested
/// [`RawAction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawOutcome {
    /// Unsigned transaction hex (no action, or `lock`)
    Hex(String),
    /// Signing result (`sign`, `lock,sign`)
    Signed(SignedTransaction),
    /// Broadcast transaction id (`send`)
    Sent(String),
}

impl RawOutcome {
    fn format(command: Command, action: Option<RawAction>, raw: Value) -> Self {
        match action {
            None | Some(RawAction::Lock) => RawOutcome::Hex(format_string(command, raw)),
            Some(RawAction::Sign) | Some(RawAction::LockSign) => {
                RawOutcome::Signed(format_record(command, raw))
            }
            Some(RawAction::Send) => RawOutcome::Sent(format_string(command, raw)),
        }
    }

    /// Transaction hex, when the outcome carries one.
    pub fn hex(&self) -> Option<&str> {
        match self {
            RawOutcome::Hex(hex) => Some(hex),
            RawOutcome::Signed(signed) => Some(&signed.hex),
            RawOutcome::Sent(_) => None,
        }
    }
}

/// Raw-transaction commands: build, annotate, sign, decode and broadcast.
pub struct RawTransactionApi {
    rpc_client: Arc<RpcClient>,
}

impl RawTransactionApi {
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Adds a change output to `address`, optionally with a fixed native fee.
    pub async fn append_raw_change(
        &self,
        tx_hex: &str,
        address: &str,
        native_fee: Option<f64>,
    ) -> RpcResult<String> {
        let params = Params::new().arg(tx_hex).arg(address).opt(native_fee);
        let result = self
            .rpc_client
            .execute_params(Command::AppendRawChange, params)
            .await?;
        Ok(format_string(Command::AppendRawChange, result))
    }

    /// Adds a metadata output carrying `data_hex`.
    pub async fn append_raw_metadata(&self, tx_hex: &str, data_hex: &str) -> RpcResult<String> {
        let params = Params::new().arg(tx_hex).arg(data_hex);
        let result = self
            .rpc_client
            .execute_params(Command::AppendRawMetadata, params)
            .await?;
        Ok(format_string(Command::AppendRawMetadata, result))
    }

    /// Adds a metadata output; `data` is hex or a JSON data object.
    pub async fn append_raw_data(&self, tx_hex: &str, data: impl Into<Value>) -> RpcResult<String> {
        let params = Params::new().arg(tx_hex).arg(data);
        let result = self.rpc_client.execute_params(Command::AppendRawData, params).await?;
        Ok(format_string(Command::AppendRawData, result))
    }

    /// Builds a transaction spending wallet outputs of `from_address`.
    pub async fn create_raw_send_from(
        &self,
        from_address: &str,
        outputs: &[AddressBalance],
        data: &[Value],
        action: Option<RawAction>,
    ) -> RpcResult<RawOutcome> {
        require_non_empty("from-address", from_address)?;
        let outputs = AddressBalance::to_outputs("addresses", outputs)?;
        let params = Params::new()
            .arg(from_address)
            .arg(outputs)
            .opt(data_slot(data, action))
            .opt(action.map(RawAction::as_str));
        let result = self
            .rpc_client
            .execute_params(Command::CreateRawSendFrom, params)
            .await?;
        Ok(RawOutcome::format(Command::CreateRawSendFrom, action, result))
    }

    /// Builds a transaction spending `inputs` into `outputs`.
    pub async fn create_raw_transaction(
        &self,
        inputs: &[TxIdVout],
        outputs: &[AddressBalance],
        data: &[Value],
        action: Option<RawAction>,
    ) -> RpcResult<RawOutcome> {
        require_all_filled("inputs", inputs)?;
        let outputs = AddressBalance::to_outputs("outputs", outputs)?;
        let inputs: Vec<Value> = inputs.iter().map(TxIdVout::to_value).collect();
        let params = Params::new()
            .arg(inputs)
            .arg(outputs)
            .opt(data_slot(data, action))
            .opt(action.map(RawAction::as_str));
        let result = self
            .rpc_client
            .execute_params(Command::CreateRawTransaction, params)
            .await?;
        Ok(RawOutcome::format(Command::CreateRawTransaction, action, result))
    }

    /// `decoderawtransaction`
    pub async fn decode_raw_transaction(&self, tx_hex: &str) -> RpcResult<RawTransaction> {
        let params = Params::new().arg(tx_hex);
        let result = self
            .rpc_client
            .execute_params(Command::DecodeRawTransaction, params)
            .await?;
        Ok(format_record(Command::DecodeRawTransaction, result))
    }

    /// `getrawchangeaddress`
    pub async fn get_raw_change_address(&self) -> RpcResult<String> {
        let result = self
            .rpc_client
            .execute(Command::GetRawChangeAddress, vec![])
            .await?;
        Ok(format_string(Command::GetRawChangeAddress, result))
    }

    /// Serialized transaction hex.
    pub async fn get_raw_transaction(&self, txid: &str) -> RpcResult<String> {
        let params = Params::new().arg(txid).arg(0);
        let result = self
            .rpc_client
            .execute_params(Command::GetRawTransaction, params)
            .await?;
        Ok(format_string(Command::GetRawTransaction, result))
    }

    /// Decoded transaction with block details.
    pub async fn get_raw_transaction_verbose(&self, txid: &str) -> RpcResult<RawTransaction> {
        let params = Params::new().arg(txid).arg(1);
        let result = self
            .rpc_client
            .execute_params(Command::GetRawTransaction, params)
            .await?;
        Ok(format_record(Command::GetRawTransaction, result))
    }

    /// Broadcasts a signed transaction and returns its txid.
    pub async fn send_raw_transaction(&self, tx_hex: &str) -> RpcResult<String> {
        let params = Params::new().arg(tx_hex);
        let result = self
            .rpc_client
            .execute_params(Command::SendRawTransaction, params)
            .await?;
        Ok(format_string(Command::SendRawTransaction, result))
    }

    /// Signs whatever inputs the wallet (or `priv_keys`) can sign.
    /// `prev_outputs` describes inputs not yet known to the daemon.
    pub async fn sign_raw_transaction(
        &self,
        tx_hex: &str,
        prev_outputs: &[PrevTxOut],
        priv_keys: &[String],
        sighash: Option<SigHashType>,
    ) -> RpcResult<SignedTransaction> {
        let prev_outputs = if prev_outputs.is_empty() {
            None
        } else {
            require_all_filled("prevtxs", prev_outputs)?;
            Some(prev_outputs.iter().map(PrevTxOut::to_value).collect::<Vec<_>>())
        };
        let priv_keys = (!priv_keys.is_empty()).then(|| priv_keys.to_vec());
        let params = Params::new()
            .arg(tx_hex)
            .opt(prev_outputs)
            .opt(priv_keys)
            .opt(sighash.map(SigHashType::as_str));
        let result = self
            .rpc_client
            .execute_params(Command::SignRawTransaction, params)
            .await?;
        Ok(format_record(Command::SignRawTransaction, result))
    }
}

/// Metadata slot: omitted when there is nothing to send, an empty array when
/// an action follows.
fn data_slot(data: &[Value], action: Option<RawAction>) -> Option<Value> {
    if data.is_empty() {
        action.map(|_| Value::Array(Vec::new()))
    } else {
        Some(Value::Array(data.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_slot_rules() {
        assert_eq!(data_slot(&[], None), None);
        assert_eq!(data_slot(&[], Some(RawAction::Send)), Some(json!([])));
        assert_eq!(data_slot(&[json!("ff")], None), Some(json!(["ff"])));
    }

    #[test]
    fn outcome_follows_action() {
        let cmd = Command::CreateRawTransaction;
        assert_eq!(
            RawOutcome::format(cmd, None, json!("0100")),
            RawOutcome::Hex("0100".into())
        );
        assert_eq!(
            RawOutcome::format(cmd, Some(RawAction::Lock), json!("0100")).hex(),
            Some("0100")
        );
        assert_eq!(
            RawOutcome::format(cmd, Some(RawAction::Sign), json!({"hex": "0200", "complete": true})),
            RawOutcome::Signed(SignedTransaction {
                hex: "0200".into(),
                complete: true
            })
        );
        assert_eq!(
            RawOutcome::format(cmd, Some(RawAction::Send), json!("txid1")),
            RawOutcome::Sent("txid1".into())
        );
    }
}
