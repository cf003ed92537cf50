use crate::command::Command;
use crate::error::RpcResult;
use crate::formatter::{format_object, format_record, format_string};
use crate::models::NodeInfo;
use crate::params::Params;
use crate::validation::require_non_empty;
use crate::RpcClient;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Node tasks that `pause` / `resume` act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeTask {
    Incoming,
    Mining,
    Offchain,
}

impl NodeTask {
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeTask::Incoming => "incoming",
            NodeTask::Mining => "mining",
            NodeTask::Offchain => "offchain",
        }
    }

    fn join(tasks: &[NodeTask]) -> RpcResult<String> {
        require_non_empty("tasks", tasks)?;
        Ok(tasks
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(","))
    }
}

/// Node control and introspection.
pub struct ControlApi {
    rpc_client: Arc<RpcClient>,
}

impl ControlApi {
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// `getinfo`
    pub async fn get_info(&self) -> RpcResult<NodeInfo> {
        let result = self.rpc_client.execute(Command::GetInfo, vec![]).await?;
        Ok(format_record(Command::GetInfo, result))
    }

    /// Runtime parameters as reported by the daemon.
    pub async fn get_runtime_params(&self) -> RpcResult<Map<String, Value>> {
        let result = self.rpc_client.execute(Command::GetRuntimeParams, vec![]).await?;
        Ok(format_object(Command::GetRuntimeParams, result))
    }

    pub async fn set_runtime_param(&self, param: &str, value: impl Into<Value>) -> RpcResult<()> {
        let params = Params::new().arg(param).arg(value);
        self.rpc_client.execute_params(Command::SetRuntimeParam, params).await?;
        Ok(())
    }

    /// Help text for one command, or the command list.
    pub async fn help(&self, command: Option<&str>) -> RpcResult<String> {
        let params = Params::new().opt(command);
        let result = self.rpc_client.execute_params(Command::Help, params).await?;
        Ok(format_string(Command::Help, result))
    }

    /// Asks the daemon to shut down.
    pub async fn stop(&self) -> RpcResult<String> {
        let result = self.rpc_client.execute(Command::Stop, vec![]).await?;
        Ok(format_string(Command::Stop, result))
    }

    pub async fn pause(&self, tasks: &[NodeTask]) -> RpcResult<()> {
        let params = Params::new().arg(NodeTask::join(tasks)?);
        self.rpc_client.execute_params(Command::Pause, params).await?;
        Ok(())
    }

    pub async fn resume(&self, tasks: &[NodeTask]) -> RpcResult<()> {
        let params = Params::new().arg(NodeTask::join(tasks)?);
        self.rpc_client.execute_params(Command::Resume, params).await?;
        Ok(())
    }

    /// Drops every unconfirmed transaction. Incoming traffic and mining must
    /// be paused first.
    pub async fn clear_mempool(&self) -> RpcResult<()> {
        self.rpc_client.execute(Command::ClearMempool, vec![]).await?;
        Ok(())
    }
}
