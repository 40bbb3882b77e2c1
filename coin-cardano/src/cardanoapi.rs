/// Chain pointer identifying a staking registration by position.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CardanoBlockchainPointer {
    #[prost(uint32, optional, tag = "1")]
    pub block_index: ::core::option::Option<u32>,
    #[prost(uint32, optional, tag = "2")]
    pub tx_index: ::core::option::Option<u32>,
    #[prost(uint32, optional, tag = "3")]
    pub certificate_index: ::core::option::Option<u32>,
}

/// Parameters the device derives an address from.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CardanoAddressParameters {
    #[prost(enumeration = "CardanoAddressType", optional, tag = "1")]
    pub address_type: ::core::option::Option<i32>,
    /// BIP-32 path to the spending key
    #[prost(uint32, repeated, packed = "false", tag = "2")]
    pub address_n: ::prost::alloc::vec::Vec<u32>,
    /// BIP-32 path to the staking key, when it differs from the
    /// spending account
    #[prost(uint32, repeated, packed = "false", tag = "3")]
    pub address_n_staking: ::prost::alloc::vec::Vec<u32>,
    /// hash of an external staking key; mutually exclusive with
    /// address_n_staking
    #[prost(bytes = "vec", optional, tag = "4")]
    pub staking_key_hash: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// required for pointer addresses
    #[prost(message, optional, tag = "5")]
    pub certificate_pointer: ::core::option::Option<CardanoBlockchainPointer>,
}

/// One input of the transaction being signed.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CardanoTxInput {
    /// BIP-32 path to the witness key
    #[prost(uint32, repeated, packed = "false", tag = "1")]
    pub address_n: ::prost::alloc::vec::Vec<u32>,
    /// hash of the transaction being spent
    #[prost(bytes = "vec", optional, tag = "2")]
    pub prev_hash: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(uint32, optional, tag = "3")]
    pub prev_index: ::core::option::Option<u32>,
}

/// One output of the transaction being signed. Carries either a
/// ready-made address or the parameters the device derives one from,
/// never both.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CardanoTxOutput {
    /// bech32 or base58 address string
    #[prost(string, optional, tag = "1")]
    pub address: ::core::option::Option<::prost::alloc::string::String>,
    /// amount in lovelace; tag 2 is retired, do not reuse
    #[prost(uint64, optional, tag = "3")]
    pub amount: ::core::option::Option<u64>,
    #[prost(message, optional, tag = "4")]
    pub address_parameters: ::core::option::Option<CardanoAddressParameters>,
}

/// Staking certificate carried in the transaction body.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CardanoTxCertificate {
    #[prost(enumeration = "CardanoCertificateType", optional, tag = "1")]
    pub r#type: ::core::option::Option<i32>,
    /// BIP-32 path to the staking key the certificate concerns
    #[prost(uint32, repeated, packed = "false", tag = "2")]
    pub path: ::prost::alloc::vec::Vec<u32>,
    /// pool key hash, delegation certificates only
    #[prost(bytes = "vec", optional, tag = "3")]
    pub pool: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}

/// Reward account withdrawal carried in the transaction body.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CardanoTxWithdrawal {
    #[prost(uint32, repeated, packed = "false", tag = "1")]
    pub path: ::prost::alloc::vec::Vec<u32>,
    #[prost(uint64, optional, tag = "2")]
    pub amount: ::core::option::Option<u64>,
}

/// Request: sign the assembled transaction body.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CardanoSignTx {
    #[prost(message, repeated, tag = "1")]
    pub inputs: ::prost::alloc::vec::Vec<CardanoTxInput>,
    #[prost(message, repeated, tag = "2")]
    pub outputs: ::prost::alloc::vec::Vec<CardanoTxOutput>,
    /// tags 3 and 4 are retired, do not reuse
    #[prost(uint32, optional, tag = "5")]
    pub protocol_magic: ::core::option::Option<u32>,
    /// fee in lovelace
    #[prost(uint64, optional, tag = "6")]
    pub fee: ::core::option::Option<u64>,
    #[prost(uint64, optional, tag = "7")]
    pub ttl: ::core::option::Option<u64>,
    #[prost(uint32, optional, tag = "8")]
    pub network_id: ::core::option::Option<u32>,
    #[prost(message, repeated, tag = "9")]
    pub certificates: ::prost::alloc::vec::Vec<CardanoTxCertificate>,
    #[prost(message, repeated, tag = "10")]
    pub withdrawals: ::prost::alloc::vec::Vec<CardanoTxWithdrawal>,
    /// CBOR-encoded auxiliary data, passed through untouched
    #[prost(bytes = "vec", optional, tag = "11")]
    pub auxiliary_data: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}

/// Response: signed transaction returned by the device.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CardanoSignedTx {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub tx_hash: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub serialized_tx: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CardanoAddressType {
    Base = 0,
    Pointer = 4,
    Enterprise = 6,
    Byron = 8,
    Reward = 14,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CardanoCertificateType {
    StakeRegistration = 0,
    StakeDeregistration = 1,
    StakeDelegation = 2,
}
