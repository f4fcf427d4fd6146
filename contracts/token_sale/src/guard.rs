use soroban_sdk::Env;

use crate::errors::Error;
use crate::types::DataKey;

/// Holds the contribution lock for as long as it lives.
///
/// The lock is a temporary-storage entry; dropping the guard removes it, so
/// every return path out of the guarded call releases it.
pub struct ReentrancyGuard {
    env: Env,
}

impl ReentrancyGuard {
    pub fn acquire(env: &Env) -> Result<Self, Error> {
        let storage = env.storage().temporary();
        if storage.get(&DataKey::ReentrancyLock).unwrap_or(false) {
            return Err(Error::ReentrantCall);
        }
        storage.set(&DataKey::ReentrancyLock, &true);
        Ok(Self { env: env.clone() })
    }
}

impl Drop for ReentrancyGuard {
    fn drop(&mut self) {
        self.env
            .storage()
            .temporary()
            .remove(&DataKey::ReentrancyLock);
    }
}
