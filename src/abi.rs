use sha3::{Digest, Keccak256};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AbiError {
    #[error("invalid hex payload: {0}")]
    BadHex(String),

    #[error("invalid address: {0}")]
    BadAddress(String),

    #[error("return data has no word at index {0}")]
    ShortData(usize),

    #[error("value does not fit the expected integer width")]
    Overflow,
}

/// First four bytes of the Keccak-256 of the canonical signature,
/// e.g. `selector("unstake(uint256)")`.
pub fn selector(signature: &str) -> [u8; 4] {
    let digest = Keccak256::digest(signature.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

pub fn decode_address(address: &str) -> Result<[u8; 20], AbiError> {
    let stripped = address.strip_prefix("0x").unwrap_or(address);
    if stripped.len() != 40 {
        return Err(AbiError::BadAddress(address.to_string()));
    }
    let bytes = hex::decode(stripped).map_err(|_| AbiError::BadAddress(address.to_string()))?;
    // length checked above
    Ok(bytes.try_into().unwrap())
}

/// Calldata builder: selector followed by 32-byte argument words.
pub struct CallData {
    bytes: Vec<u8>,
}

impl CallData {
    pub fn new(signature: &str) -> Self {
        Self {
            bytes: selector(signature).to_vec(),
        }
    }

    pub fn push_address(mut self, address: &str) -> Result<Self, AbiError> {
        let raw = decode_address(address)?;
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&raw);
        self.bytes.extend_from_slice(&word);
        Ok(self)
    }

    pub fn push_uint(mut self, value: u128) -> Self {
        let mut word = [0u8; 32];
        word[16..].copy_from_slice(&value.to_be_bytes());
        self.bytes.extend_from_slice(&word);
        self
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.bytes))
    }
}

/// Decoded `eth_call` return payload, split into 32-byte words.
pub struct ReturnData {
    words: Vec<[u8; 32]>,
}

impl ReturnData {
    pub fn parse(payload: &str) -> Result<Self, AbiError> {
        let stripped = payload.strip_prefix("0x").unwrap_or(payload);
        let bytes = hex::decode(stripped).map_err(|_| AbiError::BadHex(payload.to_string()))?;
        if bytes.len() % 32 != 0 {
            return Err(AbiError::BadHex(payload.to_string()));
        }
        let words = bytes
            .chunks_exact(32)
            .map(|chunk| chunk.try_into().unwrap())
            .collect();
        Ok(Self { words })
    }

    fn word(&self, index: usize) -> Result<&[u8; 32], AbiError> {
        self.words.get(index).ok_or(AbiError::ShortData(index))
    }

    pub fn uint128(&self, index: usize) -> Result<u128, AbiError> {
        let word = self.word(index)?;
        if word[..16].iter().any(|&b| b != 0) {
            return Err(AbiError::Overflow);
        }
        Ok(u128::from_be_bytes(word[16..].try_into().unwrap()))
    }

    pub fn uint64(&self, index: usize) -> Result<u64, AbiError> {
        let word = self.word(index)?;
        if word[..24].iter().any(|&b| b != 0) {
            return Err(AbiError::Overflow);
        }
        Ok(u64::from_be_bytes(word[24..].try_into().unwrap()))
    }

    pub fn address(&self, index: usize) -> Result<String, AbiError> {
        let word = self.word(index)?;
        Ok(format!("0x{}", hex::encode(&word[12..])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_matches_known_erc20_values() {
        assert_eq!(selector("totalSupply()"), [0x18, 0x16, 0x0d, 0xdd]);
        assert_eq!(selector("balanceOf(address)"), [0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(selector("transfer(address,uint256)"), [0xa9, 0x05, 0x9c, 0xbb]);
    }

    #[test]
    fn calldata_pads_address_to_a_word() {
        let data = CallData::new("balanceOf(address)")
            .push_address("0x9bD27c3A181c3B27B0574279FD3e5e20b29B2cBb")
            .unwrap()
            .to_hex();
        assert_eq!(data.len(), 2 + 2 * (4 + 32));
        assert!(data.starts_with("0x70a08231"));
        assert!(data[10..].starts_with("000000000000000000000000"));
        assert!(data.ends_with("9bd27c3a181c3b27b0574279fd3e5e20b29b2cbb"));
    }

    #[test]
    fn calldata_encodes_uint_big_endian() {
        let data = CallData::new("totalSupply()").push_uint(0x0102).to_hex();
        assert!(data.ends_with("0000000000000000000000000000000000000000000000000000000000000102"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(decode_address("0x1234").is_err());
        assert!(decode_address("not an address at all, forty chars long!!").is_err());
        assert!(decode_address("0x9bD27c3A181c3B27B0574279FD3e5e20b29B2cBb").is_ok());
    }

    #[test]
    fn return_data_round_trips_words() {
        let payload = format!(
            "0x{}{}",
            "0000000000000000000000000000000000000000000000000de0b6b3a7640000",
            "0000000000000000000000009bd27c3a181c3b27b0574279fd3e5e20b29b2cbb",
        );
        let ret = ReturnData::parse(&payload).unwrap();
        assert_eq!(ret.uint128(0).unwrap(), 1_000_000_000_000_000_000);
        assert_eq!(
            ret.address(1).unwrap(),
            "0x9bd27c3a181c3b27b0574279fd3e5e20b29b2cbb"
        );
        assert_eq!(ret.uint128(2), Err(AbiError::ShortData(2)));
    }

    #[test]
    fn uint_decode_rejects_oversized_values() {
        let payload = "0x0100000000000000000000000000000000000000000000000000000000000000";
        let ret = ReturnData::parse(payload).unwrap();
        assert_eq!(ret.uint128(0), Err(AbiError::Overflow));
        assert_eq!(ret.uint64(0), Err(AbiError::Overflow));
    }

    #[test]
    fn parse_rejects_ragged_payloads() {
        assert!(ReturnData::parse("0x0102").is_err());
        assert!(ReturnData::parse("0xzz").is_err());
        assert!(ReturnData::parse("0x").unwrap().uint128(0).is_err());
    }
}
