use crate::command::Command;
use crate::error::RpcResult;
use crate::formatter::{format_bool, format_f64, format_optional_string, format_record};
use crate::models::MiningInfo;
use crate::params::Params;
use crate::RpcClient;
use std::sync::Arc;

/// Mining commands.
pub struct MiningApi {
    rpc_client: Arc<RpcClient>,
}

impl MiningApi {
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// `getmininginfo`
    pub async fn get_mining_info(&self) -> RpcResult<MiningInfo> {
        let result = self.rpc_client.execute(Command::GetMiningInfo, vec![]).await?;
        Ok(format_record(Command::GetMiningInfo, result))
    }

    /// Estimated hashes per second over the last `blocks` blocks (`-1` means
    /// since the last difficulty change), ending at `height`.
    pub async fn get_network_hash_ps(
        &self,
        blocks: Option<i64>,
        height: Option<i64>,
    ) -> RpcResult<f64> {
        let params = Params::new().opt(blocks).opt(height);
        let result = self
            .rpc_client
            .execute_params(Command::GetNetworkHashPs, params)
            .await?;
        Ok(format_f64(Command::GetNetworkHashPs, result))
    }

    /// Adjusts the mining priority of a mempool transaction.
    pub async fn prioritise_transaction(
        &self,
        txid: &str,
        priority_delta: f64,
        fee_delta: i64,
    ) -> RpcResult<bool> {
        let params = Params::new().arg(txid).arg(priority_delta).arg(fee_delta);
        let result = self
            .rpc_client
            .execute_params(Command::PrioritiseTransaction, params)
            .await?;
        Ok(format_bool(Command::PrioritiseTransaction, result))
    }

    /// Submits a block. `None` means accepted; otherwise the rejection reason.
    pub async fn submit_block(&self, block_hex: &str) -> RpcResult<Option<String>> {
        let params = Params::new().arg(block_hex);
        let result = self.rpc_client.execute_params(Command::SubmitBlock, params).await?;
        Ok(format_optional_string(Command::SubmitBlock, result))
    }
}
