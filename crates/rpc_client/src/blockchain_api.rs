use crate::command::Command;
use crate::error::RpcResult;
use crate::formatter::{
    format_f64, format_list, format_object, format_optional_record, format_record, format_string,
    format_u64,
};
use crate::models::{Block, BlockchainInfo, MempoolInfo, TxOutInfo};
use crate::params::Params;
use crate::RpcClient;
use serde_json::{Map, Value};
use std::sync::Arc;

/// A block addressed by hash or by height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockRef {
    Hash(String),
    Height(u64),
}

impl From<u64> for BlockRef {
    fn from(height: u64) -> Self {
        BlockRef::Height(height)
    }
}

impl From<&str> for BlockRef {
    fn from(hash: &str) -> Self {
        BlockRef::Hash(hash.to_string())
    }
}

impl From<String> for BlockRef {
    fn from(hash: String) -> Self {
        BlockRef::Hash(hash)
    }
}

impl From<BlockRef> for Value {
    fn from(block: BlockRef) -> Self {
        match block {
            BlockRef::Hash(hash) => Value::String(hash),
            BlockRef::Height(height) => Value::from(height),
        }
    }
}

/// Chain-state queries.
pub struct BlockchainApi {
    rpc_client: Arc<RpcClient>,
}

impl BlockchainApi {
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Hash of the tip of the best chain.
    pub async fn get_best_block_hash(&self) -> RpcResult<String> {
        let result = self.rpc_client.execute(Command::GetBestBlockHash, vec![]).await?;
        Ok(format_string(Command::GetBestBlockHash, result))
    }

    /// Number of blocks in the best chain.
    pub async fn get_block_count(&self) -> RpcResult<u64> {
        let result = self.rpc_client.execute(Command::GetBlockCount, vec![]).await?;
        Ok(format_u64(Command::GetBlockCount, result))
    }

    pub async fn get_block_hash(&self, height: u64) -> RpcResult<String> {
        let params = Params::new().arg(height);
        let result = self.rpc_client.execute_params(Command::GetBlockHash, params).await?;
        Ok(format_string(Command::GetBlockHash, result))
    }

    /// Decoded block.
    pub async fn get_block(&self, block: impl Into<BlockRef>) -> RpcResult<Block> {
        let block: BlockRef = block.into();
        let params = Params::new().arg(block).arg(true);
        let result = self.rpc_client.execute_params(Command::GetBlock, params).await?;
        Ok(format_record(Command::GetBlock, result))
    }

    /// Serialized block hex.
    pub async fn get_block_hex(&self, block: impl Into<BlockRef>) -> RpcResult<String> {
        let block: BlockRef = block.into();
        let params = Params::new().arg(block).arg(false);
        let result = self.rpc_client.execute_params(Command::GetBlock, params).await?;
        Ok(format_string(Command::GetBlock, result))
    }

    /// `getblockchaininfo`
    pub async fn get_blockchain_info(&self) -> RpcResult<BlockchainInfo> {
        let result = self.rpc_client.execute(Command::GetBlockchainInfo, vec![]).await?;
        Ok(format_record(Command::GetBlockchainInfo, result))
    }

    /// Chain parameters fixed at genesis. Keys vary by protocol version.
    pub async fn get_blockchain_params(&self) -> RpcResult<Map<String, Value>> {
        let result = self
            .rpc_client
            .execute(Command::GetBlockchainParams, vec![])
            .await?;
        Ok(format_object(Command::GetBlockchainParams, result))
    }

    pub async fn get_difficulty(&self) -> RpcResult<f64> {
        let result = self.rpc_client.execute(Command::GetDifficulty, vec![]).await?;
        Ok(format_f64(Command::GetDifficulty, result))
    }

    /// `getmempoolinfo`
    pub async fn get_mempool_info(&self) -> RpcResult<MempoolInfo> {
        let result = self.rpc_client.execute(Command::GetMempoolInfo, vec![]).await?;
        Ok(format_record(Command::GetMempoolInfo, result))
    }

    /// Txids currently in the mempool.
    pub async fn get_raw_mempool(&self) -> RpcResult<Vec<String>> {
        let result = self.rpc_client.execute(Command::GetRawMempool, vec![]).await?;
        Ok(format_list(Command::GetRawMempool, result))
    }

    /// Details of an unspent output; `None` once it is spent.
    pub async fn get_tx_out(
        &self,
        txid: &str,
        vout: u32,
        include_mempool: Option<bool>,
    ) -> RpcResult<Option<TxOutInfo>> {
        let params = Params::new().arg(txid).arg(vout).opt(include_mempool);
        let result = self.rpc_client.execute_params(Command::GetTxOut, params).await?;
        Ok(format_optional_record(Command::GetTxOut, result))
    }

    /// Blocks selected by hashes, heights or ranges such as `"100-110"`.
    pub async fn list_blocks(&self, blocks: &str, verbose: Option<bool>) -> RpcResult<Vec<Block>> {
        let params = Params::new().arg(blocks).opt(verbose);
        let result = self.rpc_client.execute_params(Command::ListBlocks, params).await?;
        Ok(format_list(Command::ListBlocks, result))
    }
}
