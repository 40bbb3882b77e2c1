use crate::cardanoapi::{
    CardanoAddressParameters, CardanoAddressType, CardanoCertificateType, CardanoSignTx,
    CardanoTxCertificate, CardanoTxOutput,
};
use crate::{CardanoError, Result};
use hwk_common::constants;

/// An output must name exactly one destination, either a finished
/// address or the parameters to derive one, and must carry an amount.
pub fn check_output(output: &CardanoTxOutput) -> Result<()> {
    match (&output.address, &output.address_parameters) {
        (Some(_), Some(_)) => return Err(CardanoError::OutputAddressConflict.into()),
        (None, None) => return Err(CardanoError::OutputAddressMissing.into()),
        _ => {}
    }
    if output.amount.is_none() {
        return Err(CardanoError::OutputAmountMissing.into());
    }
    if let Some(params) = &output.address_parameters {
        check_address_parameters(params)?;
    }
    Ok(())
}

pub fn check_address_parameters(params: &CardanoAddressParameters) -> Result<()> {
    let address_type = match params.address_type {
        None => return Err(CardanoError::AddressTypeMissing.into()),
        Some(raw) => {
            CardanoAddressType::from_i32(raw).ok_or(CardanoError::AddressTypeUnknown)?
        }
    };
    if address_type == CardanoAddressType::Pointer && params.certificate_pointer.is_none() {
        return Err(CardanoError::CertificatePointerMissing.into());
    }
    if params.staking_key_hash.is_some() && !params.address_n_staking.is_empty() {
        return Err(CardanoError::StakingSourceConflict.into());
    }
    Ok(())
}

pub fn check_certificate(cert: &CardanoTxCertificate) -> Result<()> {
    let cert_type = match cert.r#type {
        None => return Err(CardanoError::CertificateTypeMissing.into()),
        Some(raw) => {
            CardanoCertificateType::from_i32(raw).ok_or(CardanoError::CertificateTypeUnknown)?
        }
    };
    if cert_type == CardanoCertificateType::StakeDelegation && cert.pool.is_none() {
        return Err(CardanoError::CertificatePoolMissing.into());
    }
    Ok(())
}

/// Checks a signing request before it goes out to the device.
pub fn check_sign_tx(param: &CardanoSignTx) -> Result<()> {
    if param.inputs.is_empty() {
        return Err(CardanoError::TxInputsEmpty.into());
    }
    if param.outputs.is_empty() {
        return Err(CardanoError::TxOutputsEmpty.into());
    }
    if param.fee.is_none() {
        return Err(CardanoError::TxFeeMissing.into());
    }
    let protocol_magic = param
        .protocol_magic
        .ok_or(CardanoError::ProtocolMagicMissing)?;
    let network_id = param.network_id.ok_or(CardanoError::NetworkIdMissing)?;
    if constants::is_mainnet(protocol_magic) != (network_id == constants::NETWORK_ID_MAINNET) {
        return Err(CardanoError::NetworkMismatch.into());
    }
    for output in &param.outputs {
        check_output(output)?;
    }
    for cert in &param.certificates {
        check_certificate(cert)?;
    }
    Ok(())
}
