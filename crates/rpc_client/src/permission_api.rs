use crate::command::Command;
use crate::error::RpcResult;
use crate::formatter::{format_bool, format_list, format_string};
use crate::models::{Permission, PermissionEntry};
use crate::params::Params;
use crate::validation::require_non_empty;
use crate::RpcClient;
use std::sync::Arc;

/// Permission commands.
pub struct PermissionApi {
    rpc_client: Arc<RpcClient>,
}

impl PermissionApi {
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Grants `permissions` to every address in `addresses`. Returns the txid.
    pub async fn grant(&self, addresses: &[String], permissions: &[Permission]) -> RpcResult<String> {
        let params = Params::new()
            .arg(address_list(addresses)?)
            .arg(permission_list(permissions)?);
        let result = self.rpc_client.execute_params(Command::Grant, params).await?;
        Ok(format_string(Command::Grant, result))
    }

    /// Like [`grant`](Self::grant), signed by `from_address`.
    pub async fn grant_from(
        &self,
        from_address: &str,
        addresses: &[String],
        permissions: &[Permission],
    ) -> RpcResult<String> {
        let params = Params::new()
            .arg(from_address)
            .arg(address_list(addresses)?)
            .arg(permission_list(permissions)?);
        let result = self.rpc_client.execute_params(Command::GrantFrom, params).await?;
        Ok(format_string(Command::GrantFrom, result))
    }

    pub async fn revoke(&self, addresses: &[String], permissions: &[Permission]) -> RpcResult<String> {
        let params = Params::new()
            .arg(address_list(addresses)?)
            .arg(permission_list(permissions)?);
        let result = self.rpc_client.execute_params(Command::Revoke, params).await?;
        Ok(format_string(Command::Revoke, result))
    }

    pub async fn revoke_from(
        &self,
        from_address: &str,
        addresses: &[String],
        permissions: &[Permission],
    ) -> RpcResult<String> {
        let params = Params::new()
            .arg(from_address)
            .arg(address_list(addresses)?)
            .arg(permission_list(permissions)?);
        let result = self.rpc_client.execute_params(Command::RevokeFrom, params).await?;
        Ok(format_string(Command::RevokeFrom, result))
    }

    /// `listpermissions`, optionally narrowed to some permissions and
    /// addresses. Empty slices mean "all".
    pub async fn list_permissions(
        &self,
        permissions: &[Permission],
        addresses: &[String],
    ) -> RpcResult<Vec<PermissionEntry>> {
        let selected = if permissions.is_empty() {
            (!addresses.is_empty()).then(|| "*".to_string())
        } else {
            Some(Permission::join(permissions))
        };
        let addresses = (!addresses.is_empty()).then(|| addresses.join(","));
        let params = Params::new().opt(selected).opt(addresses);
        let result = self
            .rpc_client
            .execute_params(Command::ListPermissions, params)
            .await?;
        Ok(format_list(Command::ListPermissions, result))
    }

    /// Whether `address` currently holds `permission`.
    pub async fn verify_permission(&self, address: &str, permission: Permission) -> RpcResult<bool> {
        let params = Params::new().arg(address).arg(permission.as_str());
        let result = self
            .rpc_client
            .execute_params(Command::VerifyPermission, params)
            .await?;
        Ok(format_bool(Command::VerifyPermission, result))
    }
}

fn address_list(addresses: &[String]) -> RpcResult<String> {
    require_non_empty("addresses", addresses)?;
    for address in addresses {
        require_non_empty("addresses", address)?;
    }
    Ok(addresses.join(","))
}

fn permission_list(permissions: &[Permission]) -> RpcResult<String> {
    require_non_empty("permissions", permissions)?;
    Ok(Permission::join(permissions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_are_comma_delimited() {
        let addresses = vec!["1A".to_string(), "1B".to_string()];
        assert_eq!(address_list(&addresses).unwrap(), "1A,1B");
        assert_eq!(
            permission_list(&[Permission::Send, Permission::Receive]).unwrap(),
            "send,receive"
        );
    }

    #[test]
    fn empty_lists_are_rejected() {
        assert!(address_list(&[]).unwrap_err().is_invalid_parameter());
        assert!(address_list(&[String::new()]).is_err());
        assert!(permission_list(&[]).is_err());
    }
}
