pub mod cardanoapi;
pub mod schema;
pub mod transaction;

extern crate anyhow;
use core::result;
pub type Result<T> = result::Result<T, anyhow::Error>;

use thiserror::Error;

pub const CARDANO: &'static str = "CARDANO";

pub use cardanoapi::{
    CardanoAddressParameters, CardanoAddressType, CardanoBlockchainPointer,
    CardanoCertificateType, CardanoSignTx, CardanoSignedTx, CardanoTxCertificate, CardanoTxInput,
    CardanoTxOutput, CardanoTxWithdrawal,
};

#[derive(Error, Debug, PartialOrd, PartialEq)]
pub enum CardanoError {
    #[error("cardano_output_address_conflict")]
    OutputAddressConflict,
    #[error("cardano_output_address_missing")]
    OutputAddressMissing,
    #[error("cardano_output_amount_missing")]
    OutputAmountMissing,
    #[error("cardano_address_type_missing")]
    AddressTypeMissing,
    #[error("cardano_address_type_unknown")]
    AddressTypeUnknown,
    #[error("cardano_certificate_pointer_missing")]
    CertificatePointerMissing,
    #[error("cardano_staking_source_conflict")]
    StakingSourceConflict,
    #[error("cardano_certificate_type_missing")]
    CertificateTypeMissing,
    #[error("cardano_certificate_type_unknown")]
    CertificateTypeUnknown,
    #[error("cardano_certificate_pool_missing")]
    CertificatePoolMissing,
    #[error("cardano_tx_inputs_empty")]
    TxInputsEmpty,
    #[error("cardano_tx_outputs_empty")]
    TxOutputsEmpty,
    #[error("cardano_tx_fee_missing")]
    TxFeeMissing,
    #[error("cardano_protocol_magic_missing")]
    ProtocolMagicMissing,
    #[error("cardano_network_id_missing")]
    NetworkIdMissing,
    #[error("cardano_network_mismatch")]
    NetworkMismatch,
}
