//! Viewer wallet context.

use std::sync::RwLock;

/// Supplies the current viewer's address for per-proposal vote lookups.
pub trait WalletContext: Send + Sync {
    /// The connected wallet's address, if any.
    fn current_address(&self) -> Option<String>;
}

/// Wallet context holding an optional session address.
#[derive(Default)]
pub struct SessionWallet {
    address: RwLock<Option<String>>,
}

impl SessionWallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A wallet already connected with the given address.
    pub fn connected(address: impl Into<String>) -> Self {
        Self {
            address: RwLock::new(Some(address.into())),
        }
    }

    /// Set or replace the session address.
    pub fn connect(&self, address: impl Into<String>) {
        *self.address.write().unwrap_or_else(|e| e.into_inner()) = Some(address.into());
    }

    /// Clear the session address.
    pub fn disconnect(&self) {
        *self.address.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

impl WalletContext for SessionWallet {
    fn current_address(&self) -> Option<String> {
        self.address
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wallet_has_no_address() {
        assert_eq!(SessionWallet::new().current_address(), None);
    }

    #[test]
    fn test_connect_and_disconnect() {
        let wallet = SessionWallet::new();
        wallet.connect("cosmos1viewer");
        assert_eq!(wallet.current_address().as_deref(), Some("cosmos1viewer"));
        wallet.disconnect();
        assert_eq!(wallet.current_address(), None);
    }

    #[test]
    fn test_connected_constructor() {
        let wallet = SessionWallet::connected("addr1");
        assert_eq!(wallet.current_address().as_deref(), Some("addr1"));
    }
}
