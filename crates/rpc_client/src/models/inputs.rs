//! Caller-built compound arguments.

use crate::error::{RpcError, RpcResult};
use crate::validation::{require_all_filled, RequiredValue, StructuredParam};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;

/// Reference to a transaction output: `{"txid": .., "vout": ..}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxIdVout {
    pub txid: String,
    pub vout: Option<u32>,
}

impl TxIdVout {
    pub fn new(txid: impl Into<String>, vout: u32) -> Self {
        Self {
            txid: txid.into(),
            vout: Some(vout),
        }
    }

    pub fn to_value(&self) -> Value {
        json!({ "txid": self.txid, "vout": self.vout })
    }
}

impl StructuredParam for TxIdVout {
    fn missing_field(&self) -> Option<&'static str> {
        if self.txid.is_missing() {
            Some("txid")
        } else if self.vout.is_none() {
            Some("vout")
        } else {
            None
        }
    }
}

/// An address paired with what it receives: a native-currency amount or an
/// object of asset quantities / issue details.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBalance {
    pub address: String,
    pub value: Option<Value>,
}

impl AddressBalance {
    pub fn new(address: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            address: address.into(),
            value: Some(value.into()),
        }
    }

    /// Native currency amount.
    pub fn native(address: impl Into<String>, amount: f64) -> Self {
        Self::new(address, amount)
    }

    /// Asset quantities keyed by asset identifier.
    pub fn assets<I, K>(address: impl Into<String>, quantities: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let map: Map<String, Value> = quantities
            .into_iter()
            .map(|(asset, qty)| (asset.into(), Value::from(qty)))
            .collect();
        Self::new(address, Value::Object(map))
    }

    /// Builds the `{"address": value, ..}` object the daemon expects, keeping
    /// caller order. Every entry must be filled and addresses must be distinct.
    pub fn to_outputs(name: &str, balances: &[AddressBalance]) -> RpcResult<Map<String, Value>> {
        require_all_filled(name, balances)?;
        let mut outputs = Map::with_capacity(balances.len());
        for balance in balances {
            let value = balance.value.clone().unwrap_or(Value::Null);
            if outputs.insert(balance.address.clone(), value).is_some() {
                return Err(RpcError::invalid_parameter(
                    name,
                    format!("address {} appears more than once", balance.address),
                ));
            }
        }
        Ok(outputs)
    }
}

impl StructuredParam for AddressBalance {
    fn missing_field(&self) -> Option<&'static str> {
        if self.address.is_missing() {
            Some("address")
        } else if self.value.as_ref().map_or(true, Value::is_null) {
            Some("value")
        } else {
            None
        }
    }
}

/// A previous output handed to `signrawtransaction`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrevTxOut {
    pub txid: String,
    pub vout: Option<u32>,
    pub script_pub_key: String,
    /// Needed only for P2SH outputs.
    pub redeem_script: Option<String>,
}

impl PrevTxOut {
    pub fn new(txid: impl Into<String>, vout: u32, script_pub_key: impl Into<String>) -> Self {
        Self {
            txid: txid.into(),
            vout: Some(vout),
            script_pub_key: script_pub_key.into(),
            redeem_script: None,
        }
    }

    #[must_use]
    pub fn with_redeem_script(mut self, redeem_script: impl Into<String>) -> Self {
        self.redeem_script = Some(redeem_script.into());
        self
    }

    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("txid".into(), Value::from(self.txid.clone()));
        obj.insert("vout".into(), Value::from(self.vout));
        obj.insert("scriptPubKey".into(), Value::from(self.script_pub_key.clone()));
        if let Some(redeem) = &self.redeem_script {
            obj.insert("redeemScript".into(), Value::from(redeem.clone()));
        }
        Value::Object(obj)
    }
}

impl StructuredParam for PrevTxOut {
    fn missing_field(&self) -> Option<&'static str> {
        if self.txid.is_missing() {
            Some("txid")
        } else if self.vout.is_none() {
            Some("vout")
        } else if self.script_pub_key.is_missing() {
            Some("scriptPubKey")
        } else {
            None
        }
    }
}

/// New-asset parameters for `issue` / `issuefrom`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueParams {
    pub name: String,
    /// Allow follow-on issues.
    pub open: bool,
    /// Custom fields stored with the issue.
    pub details: Map<String, Value>,
}

impl IssueParams {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    #[must_use]
    pub fn detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn to_value(&self) -> Value {
        json!({ "name": self.name, "open": self.open })
    }

    pub fn details_value(&self) -> Option<Value> {
        (!self.details.is_empty()).then(|| Value::Object(self.details.clone()))
    }
}

impl StructuredParam for IssueParams {
    fn missing_field(&self) -> Option<&'static str> {
        self.name.is_missing().then_some("name")
    }
}

/// Grantable permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    Connect,
    Send,
    Receive,
    Issue,
    Mine,
    Admin,
    Activate,
    Create,
}

impl Permission {
    pub const fn as_str(self) -> &'static str {
        match self {
            Permission::Connect => "connect",
            Permission::Send => "send",
            Permission::Receive => "receive",
            Permission::Issue => "issue",
            Permission::Mine => "mine",
            Permission::Admin => "admin",
            Permission::Activate => "activate",
            Permission::Create => "create",
        }
    }

    /// Comma-delimited list as the daemon expects it.
    pub fn join(permissions: &[Permission]) -> String {
        permissions
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Follow-up action for `createrawtransaction` / `createrawsendfrom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawAction {
    Lock,
    Sign,
    LockSign,
    Send,
}

impl RawAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            RawAction::Lock => "lock",
            RawAction::Sign => "sign",
            RawAction::LockSign => "lock,sign",
            RawAction::Send => "send",
        }
    }
}

/// Signature hash type for `signrawtransaction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigHashType {
    All,
    None,
    Single,
    AllAnyoneCanPay,
    NoneAnyoneCanPay,
    SingleAnyoneCanPay,
}

impl SigHashType {
    pub const fn as_str(self) -> &'static str {
        match self {
            SigHashType::All => "ALL",
            SigHashType::None => "NONE",
            SigHashType::Single => "SINGLE",
            SigHashType::AllAnyoneCanPay => "ALL|ANYONECANPAY",
            SigHashType::NoneAnyoneCanPay => "NONE|ANYONECANPAY",
            SigHashType::SingleAnyoneCanPay => "SINGLE|ANYONECANPAY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn txid_vout_fill_rules() {
        assert!(TxIdVout::new("abc", 0).is_filled());
        assert!(!TxIdVout::default().is_filled());
        let missing_vout = TxIdVout {
            txid: "abc".into(),
            vout: None,
        };
        assert_eq!(missing_vout.missing_field(), Some("vout"));
        assert_eq!(
            TxIdVout::new("abc", 3).to_value(),
            json!({"txid": "abc", "vout": 3})
        );
    }

    #[test]
    fn address_balance_fill_rules() {
        assert!(AddressBalance::native("addr1", 1.0).is_filled());
        assert_eq!(
            AddressBalance::new("", 1.0).missing_field(),
            Some("address")
        );
        let unset = AddressBalance {
            address: "addr1".into(),
            value: None,
        };
        assert_eq!(unset.missing_field(), Some("value"));
        let null = AddressBalance {
            address: "addr1".into(),
            value: Some(Value::Null),
        };
        assert!(!null.is_filled());
    }

    #[test]
    fn outputs_keep_caller_order() {
        let outputs = AddressBalance::to_outputs(
            "outputs",
            &[
                AddressBalance::native("zeta", 1.0),
                AddressBalance::assets("alpha", [("asset1", 5.0)]),
            ],
        )
        .unwrap();
        let keys: Vec<_> = outputs.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        assert_eq!(outputs["alpha"], json!({"asset1": 5.0}));
    }

    #[test]
    fn outputs_reject_duplicates_and_unfilled() {
        let err = AddressBalance::to_outputs(
            "outputs",
            &[
                AddressBalance::native("a", 1.0),
                AddressBalance::native("a", 2.0),
            ],
        )
        .unwrap_err();
        assert!(err.is_invalid_parameter());

        let err = AddressBalance::to_outputs("outputs", &[]).unwrap_err();
        assert!(matches!(err, RpcError::InvalidParameter { ref name, .. } if name == "outputs"));
    }

    #[test]
    fn prev_tx_out_serializes_daemon_keys() {
        let prev = PrevTxOut::new("abc", 1, "76a9").with_redeem_script("5221");
        assert!(prev.is_filled());
        assert_eq!(
            prev.to_value(),
            json!({"txid": "abc", "vout": 1, "scriptPubKey": "76a9", "redeemScript": "5221"})
        );
        let mut prev = PrevTxOut::new("abc", 1, "");
        assert_eq!(prev.missing_field(), Some("scriptPubKey"));
        prev.vout = None;
        assert_eq!(prev.missing_field(), Some("vout"));
    }

    #[test]
    fn permissions_join_with_commas() {
        assert_eq!(
            Permission::join(&[Permission::Connect, Permission::Send, Permission::Receive]),
            "connect,send,receive"
        );
    }

    #[test]
    fn issue_params_need_a_name() {
        assert!(!IssueParams::default().is_filled());
        let params = IssueParams::new("gold").open(true).detail("origin", "mine");
        assert!(params.is_filled());
        assert_eq!(params.to_value(), json!({"name": "gold", "open": true}));
        assert_eq!(params.details_value(), Some(json!({"origin": "mine"})));
    }
}
