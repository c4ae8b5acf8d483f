pub use calldata_abi_derive::Tokenize;
pub use calldata_abi_enc::*;
pub use calldata_abi_file::{AbiFileError, ContractAbi};

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn derive() {
        #[derive(Tokenize)]
        pub struct TupleStruct(u8, u8);
        assert_eq!(
            TupleStruct(2, 5).to_token(),
            Token::Tuple(vec![Token::Uint(U256::from(2u8)), Token::Uint(U256::from(5u8))])
        );

        #[derive(Tokenize)]
        pub struct MyStruct {
            a: u8,
            b: u8,
        }
        let param = ParamType::parse("(uint8,uint8)").unwrap();
        assert_eq!(
            MyStruct { a: 3, b: 4 }.encode_as(&param).unwrap(),
            hex!(
                "
				0000000000000000000000000000000000000000000000000000000000000003
				0000000000000000000000000000000000000000000000000000000000000004
			"
            )
        );

        #[derive(Tokenize)]
        pub struct Aleph {
            a: MyStruct,
            c: &'static str,
            b: TupleStruct,
            #[abi_skip]
            _d: [[u8; 3]; 2],
        }

        let aleph = Aleph {
            a: MyStruct { a: 1, b: 2 },
            c: "adhealskd",
            b: TupleStruct(3, 4),
            _d: [[5, 6, 7], [8, 9, 10]],
        };
        let param = ParamType::parse("((uint8,uint8),string,(uint8,uint8))").unwrap();
        assert_eq!(
            aleph.encode_as(&param).unwrap(),
            hex!(
                "
				0000000000000000000000000000000000000000000000000000000000000020
				0000000000000000000000000000000000000000000000000000000000000001
				0000000000000000000000000000000000000000000000000000000000000002
				00000000000000000000000000000000000000000000000000000000000000a0
				0000000000000000000000000000000000000000000000000000000000000003
				0000000000000000000000000000000000000000000000000000000000000004
				0000000000000000000000000000000000000000000000000000000000000009
				61646865616c736b640000000000000000000000000000000000000000000000
			"
            )
        );
    }

    #[test]
    fn encoder_and_descriptor_set_share_one_namespace() {
        let flag: Result<Bytes> = encode(&[ParamType::Bool], &[Token::Bool(true)]);
        assert_eq!(
            flag.unwrap(),
            hex!("0000000000000000000000000000000000000000000000000000000000000001")
        );

        let mut abi = ContractAbi::from_json(
            r#"[{"type": "function", "name": "totalSupply", "inputs": []}]"#,
        )
        .unwrap();
        assert_eq!(
            abi.encode_with_selector("totalSupply", &[]).unwrap(),
            "0x18160ddd"
        );
        assert!(matches!(
            abi.function("mint"),
            Err(AbiFileError::UnknownFunction(_))
        ));
    }

    #[test]
    fn skipped_tuple_field() {
        #[derive(Tokenize)]
        pub struct Pair(#[abi_skip] u64, bool, u64);
        assert_eq!(
            Pair(9, true, 7).to_token(),
            Token::Tuple(vec![Token::Bool(true), Token::Uint(U256::from(7u8))])
        );
    }
}
