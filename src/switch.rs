//! Read and write facade for the dead man's switch contract.
//!
//! The contract owns every invariant (custody, timeout accounting,
//! nominee payout); this module only encodes calls against its fixed
//! Sepolia deployment and decodes the two views it exposes.

use thiserror::Error;

use crate::abi::{AbiError, CallData, ReturnData};
use crate::rpc::{self, RpcError};
use crate::wallet::{EthereumWallet, TransactionRequest, WalletError};

pub const CONTRACT_ADDRESS: &str = "0x9bD27c3A181c3B27B0574279FD3e5e20b29B2cBb";
pub const SEPOLIA_RPC_URL: &str = "https://ethereum-sepolia-rpc.publicnode.com";
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwitchError {
    #[error("{0}")]
    Abi(#[from] AbiError),

    #[error("{0}")]
    Rpc(#[from] RpcError),

    #[error("{0}")]
    Wallet(#[from] WalletError),
}

/// One account's record in the contract's `stakes` mapping.
#[derive(Clone, Debug, PartialEq)]
pub struct StakeRecord {
    pub balance_wei: u128,
    pub last_sign_in: u64,
    pub nominee: String,
    pub sign_interval: u64,
}

// -- calldata builders, pure so they stay testable off-chain --

pub fn stakes_calldata(account: &str) -> Result<String, AbiError> {
    Ok(CallData::new("stakes(address)")
        .push_address(account)?
        .to_hex())
}

pub fn total_stake_calldata() -> String {
    CallData::new("totalStake()").to_hex()
}

pub fn stake_calldata(nominee: &str, interval_secs: u64) -> Result<String, AbiError> {
    Ok(CallData::new("stake(address,uint256)")
        .push_address(nominee)?
        .push_uint(interval_secs as u128)
        .to_hex())
}

pub fn unstake_calldata(amount_wei: u128) -> String {
    CallData::new("unstake(uint256)")
        .push_uint(amount_wei)
        .to_hex()
}

pub fn sign_in_calldata() -> String {
    CallData::new("signIn()").to_hex()
}

pub fn update_nominee_calldata(nominee: &str) -> Result<String, AbiError> {
    Ok(CallData::new("updateNominee(address)")
        .push_address(nominee)?
        .to_hex())
}

pub fn update_sign_interval_calldata(interval_secs: u64) -> String {
    CallData::new("updateSignInterval(uint256)")
        .push_uint(interval_secs as u128)
        .to_hex()
}

/// Minimal hex quantity encoding ("0x0", "0xde0b6b3a7640000").
pub fn wei_to_hex(amount: u128) -> String {
    format!("0x{:x}", amount)
}

pub fn decode_stake_record(payload: &str) -> Result<StakeRecord, AbiError> {
    let ret = ReturnData::parse(payload)?;
    Ok(StakeRecord {
        balance_wei: ret.uint128(0)?,
        last_sign_in: ret.uint64(1)?,
        nominee: ret.address(2)?,
        sign_interval: ret.uint64(3)?,
    })
}

// -- reads --

pub async fn fetch_stake_record(account: &str) -> Result<StakeRecord, SwitchError> {
    let data = stakes_calldata(account)?;
    let raw = rpc::eth_call(SEPOLIA_RPC_URL, CONTRACT_ADDRESS, &data).await?;
    Ok(decode_stake_record(&raw)?)
}

pub async fn fetch_total_stake() -> Result<u128, SwitchError> {
    let raw = rpc::eth_call(SEPOLIA_RPC_URL, CONTRACT_ADDRESS, &total_stake_calldata()).await?;
    Ok(ReturnData::parse(&raw)?.uint128(0)?)
}

// -- writes; each resolves to the transaction hash --

pub async fn stake(
    from: &str,
    nominee: &str,
    interval_secs: u64,
    amount_wei: u128,
) -> Result<String, SwitchError> {
    let tx = TransactionRequest {
        from: from.to_string(),
        to: CONTRACT_ADDRESS.to_string(),
        data: stake_calldata(nominee, interval_secs)?,
        value: Some(wei_to_hex(amount_wei)),
    };
    Ok(EthereumWallet::send_transaction(&tx).await?)
}

pub async fn unstake(from: &str, amount_wei: u128) -> Result<String, SwitchError> {
    let tx = TransactionRequest {
        from: from.to_string(),
        to: CONTRACT_ADDRESS.to_string(),
        data: unstake_calldata(amount_wei),
        value: None,
    };
    Ok(EthereumWallet::send_transaction(&tx).await?)
}

pub async fn sign_in(from: &str) -> Result<String, SwitchError> {
    let tx = TransactionRequest {
        from: from.to_string(),
        to: CONTRACT_ADDRESS.to_string(),
        data: sign_in_calldata(),
        value: None,
    };
    Ok(EthereumWallet::send_transaction(&tx).await?)
}

pub async fn update_nominee(from: &str, nominee: &str) -> Result<String, SwitchError> {
    let tx = TransactionRequest {
        from: from.to_string(),
        to: CONTRACT_ADDRESS.to_string(),
        data: update_nominee_calldata(nominee)?,
        value: None,
    };
    Ok(EthereumWallet::send_transaction(&tx).await?)
}

pub async fn update_sign_interval(from: &str, interval_secs: u64) -> Result<String, SwitchError> {
    let tx = TransactionRequest {
        from: from.to_string(),
        to: CONTRACT_ADDRESS.to_string(),
        data: update_sign_interval_calldata(interval_secs),
        value: None,
    };
    Ok(EthereumWallet::send_transaction(&tx).await?)
}
