use crate::cardanoapi::{
    CardanoAddressParameters, CardanoBlockchainPointer, CardanoSignTx, CardanoSignedTx,
    CardanoTxCertificate, CardanoTxInput, CardanoTxOutput, CardanoTxWithdrawal,
};
use hwk_common::schema::{FieldDescriptor, MessageSchema, WireType};

const fn field(
    tag: u32,
    name: &'static str,
    wire_type: WireType,
    repeated: bool,
) -> FieldDescriptor {
    FieldDescriptor {
        tag,
        name,
        wire_type,
        repeated,
    }
}

impl MessageSchema for CardanoBlockchainPointer {
    const FIELDS: &'static [FieldDescriptor] = &[
        field(1, "block_index", WireType::Varint, false),
        field(2, "tx_index", WireType::Varint, false),
        field(3, "certificate_index", WireType::Varint, false),
    ];
}

impl MessageSchema for CardanoAddressParameters {
    const FIELDS: &'static [FieldDescriptor] = &[
        field(1, "address_type", WireType::Varint, false),
        field(2, "address_n", WireType::Varint, true),
        field(3, "address_n_staking", WireType::Varint, true),
        field(4, "staking_key_hash", WireType::LengthDelimited, false),
        field(5, "certificate_pointer", WireType::LengthDelimited, false),
    ];
}

impl MessageSchema for CardanoTxInput {
    const FIELDS: &'static [FieldDescriptor] = &[
        field(1, "address_n", WireType::Varint, true),
        field(2, "prev_hash", WireType::LengthDelimited, false),
        field(3, "prev_index", WireType::Varint, false),
    ];
}

impl MessageSchema for CardanoTxOutput {
    const FIELDS: &'static [FieldDescriptor] = &[
        field(1, "address", WireType::LengthDelimited, false),
        field(3, "amount", WireType::Varint, false),
        field(4, "address_parameters", WireType::LengthDelimited, false),
    ];
}

impl MessageSchema for CardanoTxCertificate {
    const FIELDS: &'static [FieldDescriptor] = &[
        field(1, "type", WireType::Varint, false),
        field(2, "path", WireType::Varint, true),
        field(3, "pool", WireType::LengthDelimited, false),
    ];
}

impl MessageSchema for CardanoTxWithdrawal {
    const FIELDS: &'static [FieldDescriptor] = &[
        field(1, "path", WireType::Varint, true),
        field(2, "amount", WireType::Varint, false),
    ];
}

impl MessageSchema for CardanoSignTx {
    const FIELDS: &'static [FieldDescriptor] = &[
        field(1, "inputs", WireType::LengthDelimited, true),
        field(2, "outputs", WireType::LengthDelimited, true),
        field(5, "protocol_magic", WireType::Varint, false),
        field(6, "fee", WireType::Varint, false),
        field(7, "ttl", WireType::Varint, false),
        field(8, "network_id", WireType::Varint, false),
        field(9, "certificates", WireType::LengthDelimited, true),
        field(10, "withdrawals", WireType::LengthDelimited, true),
        field(11, "auxiliary_data", WireType::LengthDelimited, false),
    ];
}

impl MessageSchema for CardanoSignedTx {
    const FIELDS: &'static [FieldDescriptor] = &[
        field(1, "tx_hash", WireType::LengthDelimited, false),
        field(2, "serialized_tx", WireType::LengthDelimited, false),
    ];
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cardanoapi::{CardanoAddressType, CardanoCertificateType};
    use hwk_common::message::encode_message;
    use hwk_common::schema::check_field_table;
    use hwk_common::constants;

    #[test]
    fn output_field_table_test() {
        let fields = CardanoTxOutput::FIELDS;
        assert_eq!(3, fields.len());

        assert_eq!(1, fields[0].tag);
        assert_eq!("address", fields[0].name);
        assert_eq!(WireType::LengthDelimited, fields[0].wire_type);
        assert!(!fields[0].repeated);

        assert_eq!(3, fields[1].tag);
        assert_eq!("amount", fields[1].name);
        assert_eq!(WireType::Varint, fields[1].wire_type);
        assert!(!fields[1].repeated);

        assert_eq!(4, fields[2].tag);
        assert_eq!("address_parameters", fields[2].name);
        assert_eq!(WireType::LengthDelimited, fields[2].wire_type);
        assert!(!fields[2].repeated);
    }

    #[test]
    fn retired_tags_stay_out_of_the_tables_test() {
        assert!(CardanoTxOutput::field(2).is_none());
        assert!(CardanoSignTx::field(3).is_none());
        assert!(CardanoSignTx::field(4).is_none());
    }

    #[test]
    fn field_tables_are_well_formed_test() {
        check_field_table(CardanoBlockchainPointer::FIELDS).unwrap();
        check_field_table(CardanoAddressParameters::FIELDS).unwrap();
        check_field_table(CardanoTxInput::FIELDS).unwrap();
        check_field_table(CardanoTxOutput::FIELDS).unwrap();
        check_field_table(CardanoTxCertificate::FIELDS).unwrap();
        check_field_table(CardanoTxWithdrawal::FIELDS).unwrap();
        check_field_table(CardanoSignTx::FIELDS).unwrap();
        check_field_table(CardanoSignedTx::FIELDS).unwrap();
    }

    fn read_varint(buf: &mut &[u8]) -> u64 {
        let mut value = 0u64;
        let mut shift = 0;
        loop {
            let byte = buf[0];
            *buf = &buf[1..];
            value |= u64::from(byte & 0x7f) << shift;
            if byte & 0x80 == 0 {
                break;
            }
            shift += 7;
        }
        value
    }

    fn scan_keys(mut buf: &[u8]) -> Vec<(u32, u32)> {
        let mut keys = Vec::new();
        while !buf.is_empty() {
            let key = read_varint(&mut buf);
            let tag = (key >> 3) as u32;
            let wire = (key & 0x7) as u32;
            keys.push((tag, wire));
            match wire {
                0 => {
                    read_varint(&mut buf);
                }
                2 => {
                    let len = read_varint(&mut buf) as usize;
                    buf = &buf[len..];
                }
                other => panic!("unexpected wire id {}", other),
            }
        }
        keys
    }

    fn assert_keys_match<T: MessageSchema>(encoded: &[u8]) {
        for (tag, wire) in scan_keys(encoded) {
            let field = T::field(tag)
                .unwrap_or_else(|| panic!("encoder emitted undeclared tag {}", tag));
            assert_eq!(field.wire_type.id(), wire, "field {}", field.name);
        }
    }

    #[test]
    fn encoder_agrees_with_field_tables_test() {
        let params = CardanoAddressParameters {
            address_type: Some(CardanoAddressType::Base as i32),
            address_n: vec![2147485500, 2147485463, 2147483648, 0, 0],
            address_n_staking: vec![2147485500, 2147485463, 2147483648, 2, 0],
            staking_key_hash: None,
            certificate_pointer: Some(CardanoBlockchainPointer {
                block_index: Some(2_498_243),
                tx_index: Some(27),
                certificate_index: Some(3),
            }),
        };
        assert_keys_match::<CardanoAddressParameters>(
            &encode_message(params.clone()).unwrap(),
        );

        let sign_tx = CardanoSignTx {
            inputs: vec![CardanoTxInput {
                address_n: vec![2147485500, 2147485463, 2147483648, 0, 0],
                prev_hash: Some(vec![0x1a; 32]),
                prev_index: Some(0),
            }],
            outputs: vec![
                CardanoTxOutput {
                    address: Some("addr1vxtg0cqk3wwxcqk9nr9gd8d9jkxcrest4g5vuyhz0n9q3s".to_string()),
                    amount: Some(3_003_112),
                    address_parameters: None,
                },
                CardanoTxOutput {
                    address: None,
                    amount: Some(1_000_000),
                    address_parameters: Some(params),
                },
            ],
            protocol_magic: Some(constants::PROTOCOL_MAGIC_MAINNET),
            fee: Some(170_000),
            ttl: Some(7_200_000),
            network_id: Some(constants::NETWORK_ID_MAINNET),
            certificates: vec![CardanoTxCertificate {
                r#type: Some(CardanoCertificateType::StakeDelegation as i32),
                path: vec![2147485500, 2147485463, 2147483648, 2, 0],
                pool: Some(vec![0x2b; 28]),
            }],
            withdrawals: vec![CardanoTxWithdrawal {
                path: vec![2147485500, 2147485463, 2147483648, 2, 0],
                amount: Some(1_337),
            }],
            auxiliary_data: Some(vec![0x00, 0x01]),
        };
        let encoded = encode_message(sign_tx).unwrap();
        assert_keys_match::<CardanoSignTx>(&encoded);

        // repeated scalars go out one element per key
        let n_address_keys = scan_keys(&encode_message(CardanoTxInput {
            address_n: vec![2147485500, 2147485463, 2147483648, 0, 0],
            prev_hash: None,
            prev_index: None,
        })
        .unwrap())
        .iter()
        .filter(|(tag, _)| *tag == 1)
        .count();
        assert_eq!(5, n_address_keys);
    }
}
