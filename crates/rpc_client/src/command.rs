//! The closed set of daemon commands and their call shape.
//!
//! Every command carries a [`CommandSpec`]: how many positional arguments the
//! daemon accepts and which leading arguments must be non-empty. The generic
//! dispatcher checks this table before anything is sent, so per-command entry
//! points only add typing on top.

use crate::error::{RpcError, RpcResult};
use crate::validation::RequiredValue;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Resource area a command belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandArea {
    Control,
    Wallet,
    RawTransactions,
    Assets,
    Permissions,
    Blockchain,
    Network,
    Mining,
}

/// Positional-argument rules for one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Fewest arguments the daemon accepts.
    pub min_params: usize,
    /// Most arguments the daemon accepts.
    pub max_params: usize,
    /// `(position, name)` of arguments that must be present and non-empty.
    pub required: &'static [(usize, &'static str)],
}

impl CommandSpec {
    /// Checks an argument list against this spec.
    pub fn check(&self, command: Command, params: &[Value]) -> RpcResult<()> {
        if params.len() < self.min_params {
            let name = self
                .required
                .iter()
                .find(|(index, _)| *index >= params.len())
                .map(|(_, name)| *name)
                .unwrap_or("params");
            return Err(RpcError::invalid_parameter(
                name,
                format!(
                    "{command} expects at least {} argument(s), got {}",
                    self.min_params,
                    params.len()
                ),
            ));
        }

        if params.len() > self.max_params {
            return Err(RpcError::invalid_parameter(
                "params",
                format!(
                    "{command} accepts at most {} argument(s), got {}",
                    self.max_params,
                    params.len()
                ),
            ));
        }

        for (index, name) in self.required {
            if params.get(*index).map_or(true, RequiredValue::is_missing) {
                return Err(RpcError::invalid_parameter(
                    *name,
                    format!("{name} is null or empty"),
                ));
            }
        }

        Ok(())
    }
}

macro_rules! commands {
    ($(
        $(#[$meta:meta])*
        $variant:ident => $name:literal, $area:ident, ($min:literal, $max:literal),
            [$($index:literal => $required:literal),*];
    )*) => {
        /// A MultiChain daemon JSON-RPC command.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Command {
            $( $(#[$meta])* $variant, )*
        }

        impl Command {
            /// Every known command.
            pub const ALL: &'static [Command] = &[$(Command::$variant),*];

            /// Wire name sent as the envelope's `method`.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Command::$variant => $name,)*
                }
            }

            /// Resource area of the command.
            pub const fn area(self) -> CommandArea {
                match self {
                    $(Command::$variant => CommandArea::$area,)*
                }
            }

            /// Positional-argument rules of the command.
            pub const fn spec(self) -> CommandSpec {
                match self {
                    $(Command::$variant => CommandSpec {
                        min_params: $min,
                        max_params: $max,
                        required: &[$(($index, $required)),*],
                    },)*
                }
            }
        }
    };
}

commands! {
    // Control
    GetInfo => "getinfo", Control, (0, 0), [];
    GetBlockchainParams => "getblockchainparams", Control, (0, 2), [];
    GetRuntimeParams => "getruntimeparams", Control, (0, 0), [];
    SetRuntimeParam => "setruntimeparam", Control, (2, 2), [0 => "param"];
    Help => "help", Control, (0, 1), [];
    Stop => "stop", Control, (0, 0), [];
    Pause => "pause", Control, (1, 1), [0 => "tasks"];
    Resume => "resume", Control, (1, 1), [0 => "tasks"];
    ClearMempool => "clearmempool", Control, (0, 0), [];
    GetInitStatus => "getinitstatus", Control, (0, 0), [];

    // Wallet: addresses and keys
    AddMultisigAddress => "addmultisigaddress", Wallet, (2, 3), [1 => "keys"];
    CreateKeyPairs => "createkeypairs", Wallet, (0, 1), [];
    CreateMultisig => "createmultisig", Wallet, (2, 2), [1 => "keys"];
    GetAddresses => "getaddresses", Wallet, (0, 1), [];
    GetNewAddress => "getnewaddress", Wallet, (0, 1), [];
    ImportAddress => "importaddress", Wallet, (1, 3), [0 => "address"];
    ListAddresses => "listaddresses", Wallet, (0, 4), [];
    ValidateAddress => "validateaddress", Wallet, (1, 1), [0 => "address"];
    DumpPrivKey => "dumpprivkey", Wallet, (1, 1), [0 => "address"];
    ImportPrivKey => "importprivkey", Wallet, (1, 3), [0 => "privkey"];
    DumpWallet => "dumpwallet", Wallet, (1, 1), [0 => "filename"];
    ImportWallet => "importwallet", Wallet, (1, 2), [0 => "filename"];
    BackupWallet => "backupwallet", Wallet, (1, 1), [0 => "destination"];
    EncryptWallet => "encryptwallet", Wallet, (1, 1), [0 => "passphrase"];
    WalletLock => "walletlock", Wallet, (0, 0), [];
    WalletPassphrase => "walletpassphrase", Wallet, (2, 2), [0 => "passphrase"];
    WalletPassphraseChange => "walletpassphrasechange", Wallet, (2, 2),
        [0 => "oldpassphrase", 1 => "newpassphrase"];
    SignMessage => "signmessage", Wallet, (2, 2), [0 => "address", 1 => "message"];
    VerifyMessage => "verifymessage", Wallet, (3, 3),
        [0 => "address", 1 => "signature", 2 => "message"];

    // Wallet: balances and transactions
    GetWalletInfo => "getwalletinfo", Wallet, (0, 0), [];
    GetBalance => "getbalance", Wallet, (0, 3), [];
    GetTotalBalances => "gettotalbalances", Wallet, (0, 3), [];
    GetAddressBalances => "getaddressbalances", Wallet, (1, 3), [0 => "address"];
    GetWalletTransaction => "getwallettransaction", Wallet, (1, 3), [0 => "txid"];
    ListWalletTransactions => "listwallettransactions", Wallet, (0, 4), [];
    GetAddressTransaction => "getaddresstransaction", Wallet, (2, 3),
        [0 => "address", 1 => "txid"];
    ListAddressTransactions => "listaddresstransactions", Wallet, (1, 4), [0 => "address"];
    ListUnspent => "listunspent", Wallet, (0, 3), [];
    LockUnspent => "lockunspent", Wallet, (1, 2), [];
    ListLockUnspent => "listlockunspent", Wallet, (0, 0), [];
    Send => "send", Wallet, (2, 4), [0 => "address", 1 => "amount"];
    SendFrom => "sendfrom", Wallet, (3, 5),
        [0 => "from-address", 1 => "to-address", 2 => "amount"];
    SendWithData => "sendwithdata", Wallet, (3, 3), [0 => "address", 1 => "amount"];
    SendWithDataFrom => "sendwithdatafrom", Wallet, (4, 4),
        [0 => "from-address", 1 => "to-address", 2 => "amount"];
    PrepareLockUnspent => "preparelockunspent", Wallet, (1, 2), [0 => "asset-quantities"];
    PrepareLockUnspentFrom => "preparelockunspentfrom", Wallet, (2, 3),
        [0 => "from-address", 1 => "asset-quantities"];
    CreateRawExchange => "createrawexchange", Wallet, (3, 3), [0 => "txid"];
    AppendRawExchange => "appendrawexchange", Wallet, (4, 4), [0 => "hexstring", 1 => "txid"];
    CompleteRawExchange => "completerawexchange", Wallet, (4, 5),
        [0 => "hexstring", 1 => "txid"];
    DecodeRawExchange => "decoderawexchange", Wallet, (1, 2), [0 => "hexstring"];
    DisableRawTransaction => "disablerawtransaction", Wallet, (1, 1), [0 => "hexstring"];

    // Raw transactions
    AppendRawChange => "appendrawchange", RawTransactions, (2, 3),
        [0 => "hexstring", 1 => "address"];
    AppendRawMetadata => "appendrawmetadata", RawTransactions, (2, 2),
        [0 => "tx-hex", 1 => "data-hex"];
    AppendRawData => "appendrawdata", RawTransactions, (2, 2), [0 => "tx-hex", 1 => "data"];
    AppendRawTransaction => "appendrawtransaction", RawTransactions, (3, 5), [0 => "tx-hex"];
    CreateRawSendFrom => "createrawsendfrom", RawTransactions, (2, 4),
        [0 => "from-address", 1 => "addresses"];
    CreateRawTransaction => "createrawtransaction", RawTransactions, (2, 4), [];
    DecodeRawTransaction => "decoderawtransaction", RawTransactions, (1, 1), [0 => "hexstring"];
    GetRawChangeAddress => "getrawchangeaddress", RawTransactions, (0, 0), [];
    GetRawTransaction => "getrawtransaction", RawTransactions, (1, 2), [0 => "txid"];
    SendRawTransaction => "sendrawtransaction", RawTransactions, (1, 2), [0 => "hexstring"];
    SignRawTransaction => "signrawtransaction", RawTransactions, (1, 4), [0 => "hexstring"];

    // Assets
    Issue => "issue", Assets, (3, 6), [0 => "address", 1 => "asset-params"];
    IssueFrom => "issuefrom", Assets, (4, 7),
        [0 => "from-address", 1 => "to-address", 2 => "asset-params"];
    IssueMore => "issuemore", Assets, (3, 5), [0 => "address", 1 => "asset"];
    IssueMoreFrom => "issuemorefrom", Assets, (4, 6),
        [0 => "from-address", 1 => "to-address", 2 => "asset"];
    ListAssets => "listassets", Assets, (0, 4), [];
    SendAsset => "sendasset", Assets, (3, 6), [0 => "address", 1 => "asset"];
    SendAssetFrom => "sendassetfrom", Assets, (4, 7),
        [0 => "from-address", 1 => "to-address", 2 => "asset"];
    GetAssetBalances => "getassetbalances", Assets, (0, 4), [];
    GetAssetTransaction => "getassettransaction", Assets, (2, 4), [0 => "asset", 1 => "txid"];
    ListAssetTransactions => "listassettransactions", Assets, (1, 5), [0 => "asset"];
    Subscribe => "subscribe", Assets, (1, 3), [0 => "entity-identifiers"];
    Unsubscribe => "unsubscribe", Assets, (1, 2), [0 => "entity-identifiers"];

    // Permissions
    Grant => "grant", Permissions, (2, 7), [0 => "addresses", 1 => "permissions"];
    GrantFrom => "grantfrom", Permissions, (3, 8),
        [0 => "from-address", 1 => "to-addresses", 2 => "permissions"];
    GrantWithData => "grantwithdata", Permissions, (3, 6),
        [0 => "addresses", 1 => "permissions", 2 => "data"];
    Revoke => "revoke", Permissions, (2, 5), [0 => "addresses", 1 => "permissions"];
    RevokeFrom => "revokefrom", Permissions, (3, 6),
        [0 => "from-address", 1 => "to-addresses", 2 => "permissions"];
    ListPermissions => "listpermissions", Permissions, (0, 3), [];
    VerifyPermission => "verifypermission", Permissions, (2, 2),
        [0 => "address", 1 => "permission"];

    // Blockchain
    GetBestBlockHash => "getbestblockhash", Blockchain, (0, 0), [];
    GetBlock => "getblock", Blockchain, (1, 2), [0 => "hash-or-height"];
    GetBlockchainInfo => "getblockchaininfo", Blockchain, (0, 0), [];
    GetBlockCount => "getblockcount", Blockchain, (0, 0), [];
    GetBlockHash => "getblockhash", Blockchain, (1, 1), [];
    GetChainTips => "getchaintips", Blockchain, (0, 0), [];
    GetDifficulty => "getdifficulty", Blockchain, (0, 0), [];
    GetLastBlockInfo => "getlastblockinfo", Blockchain, (0, 1), [];
    GetMempoolInfo => "getmempoolinfo", Blockchain, (0, 0), [];
    GetRawMempool => "getrawmempool", Blockchain, (0, 1), [];
    GetTxOut => "gettxout", Blockchain, (2, 3), [0 => "txid"];
    GetTxOutSetInfo => "gettxoutsetinfo", Blockchain, (0, 0), [];
    ListBlocks => "listblocks", Blockchain, (1, 2), [0 => "blocks"];
    VerifyChain => "verifychain", Blockchain, (0, 2), [];

    // Network
    AddNode => "addnode", Network, (2, 2), [0 => "node", 1 => "command"];
    GetAddedNodeInfo => "getaddednodeinfo", Network, (1, 2), [];
    GetConnectionCount => "getconnectioncount", Network, (0, 0), [];
    GetNetTotals => "getnettotals", Network, (0, 0), [];
    GetNetworkInfo => "getnetworkinfo", Network, (0, 0), [];
    GetPeerInfo => "getpeerinfo", Network, (0, 0), [];
    Ping => "ping", Network, (0, 0), [];

    // Mining
    GetBlockTemplate => "getblocktemplate", Mining, (0, 1), [];
    GetMiningInfo => "getmininginfo", Mining, (0, 0), [];
    GetNetworkHashPs => "getnetworkhashps", Mining, (0, 2), [];
    PrioritiseTransaction => "prioritisetransaction", Mining, (3, 3), [0 => "txid"];
    SubmitBlock => "submitblock", Mining, (1, 2), [0 => "hexdata"];
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = RpcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Command::ALL
            .iter()
            .copied()
            .find(|command| command.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RpcError::invalid_parameter("command", format!("unknown command: {s}")))
    }
}
