use serde::{Deserialize, Serialize};

/// Result of `getnetworkinfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkInfo {
    pub version: i64,

    pub subversion: String,

    #[serde(rename = "protocolversion")]
    pub protocol_version: i64,

    #[serde(rename = "localservices")]
    pub local_services: String,

    #[serde(rename = "timeoffset")]
    pub time_offset: i64,

    pub connections: u64,

    #[serde(rename = "relayfee")]
    pub relay_fee: f64,

    #[serde(rename = "localaddresses")]
    pub local_addresses: Vec<LocalAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalAddress {
    pub address: String,
    pub port: u16,
    pub score: i64,
}

/// One entry of `getpeerinfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeerInfo {
    pub id: u64,

    pub addr: String,

    #[serde(rename = "addrlocal")]
    pub addr_local: String,

    pub services: String,

    #[serde(rename = "lastsend")]
    pub last_send: i64,

    #[serde(rename = "lastrecv")]
    pub last_recv: i64,

    #[serde(rename = "bytessent")]
    pub bytes_sent: u64,

    #[serde(rename = "bytesrecv")]
    pub bytes_recv: u64,

    #[serde(rename = "conntime")]
    pub conn_time: i64,

    #[serde(rename = "pingtime")]
    pub ping_time: f64,

    pub version: i64,

    #[serde(rename = "subver")]
    pub sub_ver: String,

    /// Address the local node used for the handshake
    #[serde(rename = "handshakelocal")]
    pub handshake_local: String,

    /// Address the peer used for the handshake
    pub handshake: String,

    pub inbound: bool,

    #[serde(rename = "startingheight")]
    pub starting_height: i64,

    #[serde(rename = "banscore")]
    pub ban_score: i64,

    pub synced_headers: i64,

    pub synced_blocks: i64,
}

/// Result of `getnettotals`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetTotals {
    #[serde(rename = "totalbytesrecv")]
    pub total_bytes_recv: u64,

    #[serde(rename = "totalbytessent")]
    pub total_bytes_sent: u64,

    #[serde(rename = "timemillis")]
    pub time_millis: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn peer_info_reads_daemon_keys() {
        let peer: PeerInfo = serde_json::from_value(json!({
            "id": 1,
            "addr": "10.0.0.2:8571",
            "bytessent": 100,
            "bytesrecv": 200,
            "pingtime": 0.01,
            "inbound": false,
            "handshake": "1Peer",
            "synced_blocks": 50
        }))
        .unwrap();
        assert_eq!(peer.bytes_recv, 200);
        assert_eq!(peer.handshake, "1Peer");
        assert_eq!(peer.synced_blocks, 50);
        assert_eq!(peer.synced_headers, 0);
    }
}
