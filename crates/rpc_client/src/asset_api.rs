use crate::command::Command;
use crate::error::RpcResult;
use crate::formatter::{format_list, format_string};
use crate::models::{AssetInfo, BalanceAsset, IssueParams};
use crate::params::Params;
use crate::validation::{require_filled, require_non_empty};
use crate::RpcClient;
use serde_json::Value;
use std::sync::Arc;

/// Asset commands: issue, transfer, list and subscribe.
pub struct AssetApi {
    rpc_client: Arc<RpcClient>,
}

impl AssetApi {
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Issues a new asset to `address`. `units` is the smallest transferable
    /// fraction. Custom fields in `asset.details` are sent after a `null`
    /// native amount. Returns the issue txid.
    pub async fn issue(
        &self,
        address: &str,
        asset: &IssueParams,
        quantity: f64,
        units: f64,
    ) -> RpcResult<String> {
        require_filled(asset)?;
        let params = Params::new()
            .arg(address)
            .arg(asset.to_value())
            .arg(quantity)
            .arg(units)
            .opt(None::<f64>)
            .opt(asset.details_value());
        let result = self.rpc_client.execute_params(Command::Issue, params).await?;
        Ok(format_string(Command::Issue, result))
    }

    /// Like [`issue`](Self::issue), paying from `from_address`.
    pub async fn issue_from(
        &self,
        from_address: &str,
        to_address: &str,
        asset: &IssueParams,
        quantity: f64,
        units: f64,
    ) -> RpcResult<String> {
        require_filled(asset)?;
        let params = Params::new()
            .arg(from_address)
            .arg(to_address)
            .arg(asset.to_value())
            .arg(quantity)
            .arg(units)
            .opt(None::<f64>)
            .opt(asset.details_value());
        let result = self.rpc_client.execute_params(Command::IssueFrom, params).await?;
        Ok(format_string(Command::IssueFrom, result))
    }

    /// Follow-on issue of an open asset.
    pub async fn issue_more(&self, address: &str, asset: &str, quantity: f64) -> RpcResult<String> {
        let params = Params::new().arg(address).arg(asset).arg(quantity);
        let result = self.rpc_client.execute_params(Command::IssueMore, params).await?;
        Ok(format_string(Command::IssueMore, result))
    }

    /// `listassets`; an empty `assets` slice lists every asset.
    pub async fn list_assets(
        &self,
        assets: &[String],
        verbose: Option<bool>,
    ) -> RpcResult<Vec<AssetInfo>> {
        let selector = if assets.is_empty() {
            verbose.map(|_| Value::from("*"))
        } else {
            Some(Value::from(assets.to_vec()))
        };
        let params = Params::new().opt(selector).opt(verbose);
        let result = self.rpc_client.execute_params(Command::ListAssets, params).await?;
        Ok(format_list(Command::ListAssets, result))
    }

    /// Sends `quantity` of `asset` to `address`. Returns the txid.
    pub async fn send_asset(&self, address: &str, asset: &str, quantity: f64) -> RpcResult<String> {
        let params = Params::new().arg(address).arg(asset).arg(quantity);
        let result = self.rpc_client.execute_params(Command::SendAsset, params).await?;
        Ok(format_string(Command::SendAsset, result))
    }

    pub async fn send_asset_from(
        &self,
        from_address: &str,
        to_address: &str,
        asset: &str,
        quantity: f64,
    ) -> RpcResult<String> {
        let params = Params::new()
            .arg(from_address)
            .arg(to_address)
            .arg(asset)
            .arg(quantity);
        let result = self.rpc_client.execute_params(Command::SendAssetFrom, params).await?;
        Ok(format_string(Command::SendAssetFrom, result))
    }

    /// `getassetbalances`
    pub async fn get_asset_balances(&self) -> RpcResult<Vec<BalanceAsset>> {
        let result = self.rpc_client.execute(Command::GetAssetBalances, vec![]).await?;
        Ok(format_list(Command::GetAssetBalances, result))
    }

    /// Starts tracking assets or streams.
    pub async fn subscribe(&self, entities: &[String], rescan: Option<bool>) -> RpcResult<()> {
        let params = Params::new().arg(entity_list(entities)?).opt(rescan);
        self.rpc_client.execute_params(Command::Subscribe, params).await?;
        Ok(())
    }

    pub async fn unsubscribe(&self, entities: &[String]) -> RpcResult<()> {
        let params = Params::new().arg(entity_list(entities)?);
        self.rpc_client.execute_params(Command::Unsubscribe, params).await?;
        Ok(())
    }
}

fn entity_list(entities: &[String]) -> RpcResult<Value> {
    require_non_empty("entity-identifiers", entities)?;
    for entity in entities {
        require_non_empty("entity-identifiers", entity)?;
    }
    Ok(Value::from(entities.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entity_list_rejects_blanks() {
        assert!(entity_list(&[]).is_err());
        assert!(entity_list(&["gold".into(), String::new()]).is_err());
        assert_eq!(entity_list(&["gold".into()]).unwrap(), json!(["gold"]));
    }
}
