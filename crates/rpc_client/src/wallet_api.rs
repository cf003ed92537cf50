use crate::command::Command;
use crate::error::RpcResult;
use crate::formatter::{format_bool, format_f64, format_list, format_record, format_string};
use crate::models::{
    AddressValidation, BalanceAsset, TxIdVout, UnspentOutput, WalletAddress, WalletInfo,
    WalletTransaction,
};
use crate::params::Params;
use crate::validation::{require_all_filled, require_non_empty};
use crate::RpcClient;
use serde_json::Value;
use std::sync::Arc;

/// Wallet commands: addresses, keys, balances and simple sends.
pub struct WalletApi {
    rpc_client: Arc<RpcClient>,
}

impl WalletApi {
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// `getwalletinfo`
    pub async fn get_wallet_info(&self) -> RpcResult<WalletInfo> {
        let result = self.rpc_client.execute(Command::GetWalletInfo, vec![]).await?;
        Ok(format_record(Command::GetWalletInfo, result))
    }

    /// Native currency balance across the wallet, counting only outputs with
    /// at least `min_conf` confirmations when given.
    pub async fn get_balance(&self, min_conf: Option<u32>) -> RpcResult<f64> {
        let params = Params::new()
            .opt(min_conf.map(|_| "*"))
            .opt(min_conf);
        let result = self.rpc_client.execute_params(Command::GetBalance, params).await?;
        Ok(format_f64(Command::GetBalance, result))
    }

    /// `getnewaddress`
    pub async fn get_new_address(&self) -> RpcResult<String> {
        let result = self.rpc_client.execute(Command::GetNewAddress, vec![]).await?;
        Ok(format_string(Command::GetNewAddress, result))
    }

    /// Wallet addresses as plain strings.
    pub async fn get_addresses(&self) -> RpcResult<Vec<String>> {
        let result = self.rpc_client.execute(Command::GetAddresses, vec![]).await?;
        Ok(format_list(Command::GetAddresses, result))
    }

    /// Wallet addresses with ownership details.
    pub async fn get_addresses_verbose(&self) -> RpcResult<Vec<WalletAddress>> {
        let result = self
            .rpc_client
            .execute(Command::GetAddresses, vec![Value::Bool(true)])
            .await?;
        Ok(format_list(Command::GetAddresses, result))
    }

    /// `validateaddress`
    pub async fn validate_address(&self, address: &str) -> RpcResult<AddressValidation> {
        let params = Params::new().arg(address);
        let result = self.rpc_client.execute_params(Command::ValidateAddress, params).await?;
        Ok(format_record(Command::ValidateAddress, result))
    }

    /// `listunspent`; an empty `addresses` slice means every wallet address.
    pub async fn list_unspent(
        &self,
        min_conf: Option<u32>,
        max_conf: Option<u32>,
        addresses: &[String],
    ) -> RpcResult<Vec<UnspentOutput>> {
        let addresses = (!addresses.is_empty()).then(|| Value::from(addresses.to_vec()));
        let params = Params::new().opt(min_conf).opt(max_conf).opt(addresses);
        let result = self.rpc_client.execute_params(Command::ListUnspent, params).await?;
        Ok(format_list(Command::ListUnspent, result))
    }

    /// `gettotalbalances`
    pub async fn get_total_balances(&self) -> RpcResult<Vec<BalanceAsset>> {
        let result = self.rpc_client.execute(Command::GetTotalBalances, vec![]).await?;
        Ok(format_list(Command::GetTotalBalances, result))
    }

    /// `getaddressbalances`
    pub async fn get_address_balances(
        &self,
        address: &str,
        min_conf: Option<u32>,
    ) -> RpcResult<Vec<BalanceAsset>> {
        let params = Params::new().arg(address).opt(min_conf);
        let result = self
            .rpc_client
            .execute_params(Command::GetAddressBalances, params)
            .await?;
        Ok(format_list(Command::GetAddressBalances, result))
    }

    /// `getwallettransaction`
    pub async fn get_wallet_transaction(
        &self,
        txid: &str,
        include_watch_only: Option<bool>,
        verbose: Option<bool>,
    ) -> RpcResult<WalletTransaction> {
        let params = Params::new().arg(txid).opt(include_watch_only).opt(verbose);
        let result = self
            .rpc_client
            .execute_params(Command::GetWalletTransaction, params)
            .await?;
        Ok(format_record(Command::GetWalletTransaction, result))
    }

    /// `listwallettransactions`
    pub async fn list_wallet_transactions(
        &self,
        count: Option<u32>,
        skip: Option<u32>,
    ) -> RpcResult<Vec<WalletTransaction>> {
        let params = Params::new().opt(count).opt(skip);
        let result = self
            .rpc_client
            .execute_params(Command::ListWalletTransactions, params)
            .await?;
        Ok(format_list(Command::ListWalletTransactions, result))
    }

    /// Sends `amount` (native currency, or an asset-quantity object) to
    /// `address`. Returns the txid.
    pub async fn send(&self, address: &str, amount: impl Into<Value>) -> RpcResult<String> {
        let params = Params::new().arg(address).arg(amount);
        let result = self.rpc_client.execute_params(Command::Send, params).await?;
        Ok(format_string(Command::Send, result))
    }

    /// Like [`send`](Self::send), spending only from `from_address`.
    pub async fn send_from(
        &self,
        from_address: &str,
        to_address: &str,
        amount: impl Into<Value>,
    ) -> RpcResult<String> {
        let params = Params::new().arg(from_address).arg(to_address).arg(amount);
        let result = self.rpc_client.execute_params(Command::SendFrom, params).await?;
        Ok(format_string(Command::SendFrom, result))
    }

    /// Sends with a metadata output; `data` is hex or a JSON data object.
    pub async fn send_with_data(
        &self,
        address: &str,
        amount: impl Into<Value>,
        data: impl Into<Value>,
    ) -> RpcResult<String> {
        let data = data.into();
        require_non_empty("data", &data)?;
        let params = Params::new().arg(address).arg(amount).arg(data);
        let result = self.rpc_client.execute_params(Command::SendWithData, params).await?;
        Ok(format_string(Command::SendWithData, result))
    }

    /// Locks (or unlocks) outputs against automatic coin selection. With
    /// `unlock` and no outputs, every locked output is released.
    pub async fn lock_unspent(&self, unlock: bool, outputs: &[TxIdVout]) -> RpcResult<bool> {
        let mut params = Params::new().arg(unlock);
        if !outputs.is_empty() || !unlock {
            require_all_filled("outputs", outputs)?;
            let outputs: Vec<Value> = outputs.iter().map(TxIdVout::to_value).collect();
            params = params.arg(outputs);
        }
        let result = self.rpc_client.execute_params(Command::LockUnspent, params).await?;
        Ok(format_bool(Command::LockUnspent, result))
    }

    /// `listlockunspent`
    pub async fn list_lock_unspent(&self) -> RpcResult<Vec<TxIdVout>> {
        let result = self.rpc_client.execute(Command::ListLockUnspent, vec![]).await?;
        Ok(format_list(Command::ListLockUnspent, result))
    }

    /// `dumpprivkey`
    pub async fn dump_priv_key(&self, address: &str) -> RpcResult<String> {
        let params = Params::new().arg(address);
        let result = self.rpc_client.execute_params(Command::DumpPrivKey, params).await?;
        Ok(format_string(Command::DumpPrivKey, result))
    }

    /// Adds a watch-only address or script.
    pub async fn import_address(
        &self,
        address: &str,
        label: Option<&str>,
        rescan: Option<bool>,
    ) -> RpcResult<()> {
        let params = Params::new().arg(address).opt(label).opt(rescan);
        self.rpc_client.execute_params(Command::ImportAddress, params).await?;
        Ok(())
    }

    /// `importprivkey`
    pub async fn import_priv_key(
        &self,
        priv_key: &str,
        label: Option<&str>,
        rescan: Option<bool>,
    ) -> RpcResult<()> {
        let params = Params::new().arg(priv_key).opt(label).opt(rescan);
        self.rpc_client.execute_params(Command::ImportPrivKey, params).await?;
        Ok(())
    }

    /// Signs `message` with the key of `address` (or a raw private key).
    pub async fn sign_message(&self, address: &str, message: &str) -> RpcResult<String> {
        let params = Params::new().arg(address).arg(message);
        let result = self.rpc_client.execute_params(Command::SignMessage, params).await?;
        Ok(format_string(Command::SignMessage, result))
    }

    /// `verifymessage`
    pub async fn verify_message(
        &self,
        address: &str,
        signature: &str,
        message: &str,
    ) -> RpcResult<bool> {
        let params = Params::new().arg(address).arg(signature).arg(message);
        let result = self.rpc_client.execute_params(Command::VerifyMessage, params).await?;
        Ok(format_bool(Command::VerifyMessage, result))
    }

    /// Copies the wallet file to `destination` on the daemon's host.
    pub async fn backup_wallet(&self, destination: &str) -> RpcResult<()> {
        let params = Params::new().arg(destination);
        self.rpc_client.execute_params(Command::BackupWallet, params).await?;
        Ok(())
    }

    pub async fn wallet_lock(&self) -> RpcResult<()> {
        self.rpc_client.execute(Command::WalletLock, vec![]).await?;
        Ok(())
    }

    /// Unlocks an encrypted wallet for `timeout_secs`.
    pub async fn wallet_passphrase(&self, passphrase: &str, timeout_secs: u64) -> RpcResult<()> {
        let params = Params::new().arg(passphrase).arg(timeout_secs);
        self.rpc_client.execute_params(Command::WalletPassphrase, params).await?;
        Ok(())
    }
}
