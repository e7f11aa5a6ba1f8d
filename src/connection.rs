use dioxus::prelude::*;

use crate::wallet::{EthereumWallet, WalletError};

/// Shared wallet session, provided once at the app root and read by
/// every component through context. Disconnecting only drops local
/// state; EIP-1193 has no disconnect call.
#[derive(Clone, Copy)]
pub struct Connection {
    account: Signal<Option<String>>,
}

impl Connection {
    pub fn new() -> Self {
        Self {
            account: Signal::new(None),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account.read().is_some()
    }

    pub fn account(&self) -> Option<String> {
        self.account.read().clone()
    }

    pub async fn connect(mut self) -> Result<String, WalletError> {
        let address = EthereumWallet::connect().await?;
        self.account.set(Some(address.clone()));
        Ok(address)
    }

    pub fn disconnect(mut self) {
        self.account.set(None);
    }
}
