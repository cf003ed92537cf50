use crate::command::Command;
use crate::error::RpcResult;
use crate::formatter::{format_list, format_record, format_u64};
use crate::models::{NetTotals, NetworkInfo, PeerInfo};
use crate::params::Params;
use crate::RpcClient;
use std::sync::Arc;

/// What `addnode` does with a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddNodeCommand {
    Add,
    Remove,
    /// Connect once without remembering the peer
    OneTry,
}

impl AddNodeCommand {
    pub const fn as_str(self) -> &'static str {
        match self {
            AddNodeCommand::Add => "add",
            AddNodeCommand::Remove => "remove",
            AddNodeCommand::OneTry => "onetry",
        }
    }
}

/// Peer and network queries.
pub struct NetworkApi {
    rpc_client: Arc<RpcClient>,
}

impl NetworkApi {
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Adds or removes `node` (`ip:port`) from the peer list.
    pub async fn add_node(&self, node: &str, command: AddNodeCommand) -> RpcResult<()> {
        let params = Params::new().arg(node).arg(command.as_str());
        self.rpc_client.execute_params(Command::AddNode, params).await?;
        Ok(())
    }

    pub async fn get_connection_count(&self) -> RpcResult<u64> {
        let result = self.rpc_client.execute(Command::GetConnectionCount, vec![]).await?;
        Ok(format_u64(Command::GetConnectionCount, result))
    }

    /// `getnetworkinfo`
    pub async fn get_network_info(&self) -> RpcResult<NetworkInfo> {
        let result = self.rpc_client.execute(Command::GetNetworkInfo, vec![]).await?;
        Ok(format_record(Command::GetNetworkInfo, result))
    }

    /// `getpeerinfo`
    pub async fn get_peer_info(&self) -> RpcResult<Vec<PeerInfo>> {
        let result = self.rpc_client.execute(Command::GetPeerInfo, vec![]).await?;
        Ok(format_list(Command::GetPeerInfo, result))
    }

    /// Queues a ping to every peer; round-trip times show up in
    /// [`get_peer_info`](Self::get_peer_info).
    pub async fn ping(&self) -> RpcResult<()> {
        self.rpc_client.execute(Command::Ping, vec![]).await?;
        Ok(())
    }

    pub async fn get_net_totals(&self) -> RpcResult<NetTotals> {
        let result = self.rpc_client.execute(Command::GetNetTotals, vec![]).await?;
        Ok(format_record(Command::GetNetTotals, result))
    }
}
