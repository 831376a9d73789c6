use crate::events;
use crate::storage::Storage;
use crate::types::{GlobalParams, OracleError};
use soroban_sdk::{Address, Env};

pub fn initialize(env: &Env, admin: &Address) -> Result<(), OracleError> {
    if Storage::has_admin(env) {
        return Err(OracleError::AlreadyInitialized);
    }
    admin.require_auth();

    Storage::set_admin(env, admin);
    Storage::set_params(env, &GlobalParams::defaults());
    Ok(())
}

/// Authenticates `admin` and checks it against the stored administrator.
pub fn require_admin(env: &Env, admin: &Address) -> Result<(), OracleError> {
    admin.require_auth();

    match Storage::get_admin(env) {
        Some(stored) if stored == *admin => Ok(()),
        Some(_) => Err(OracleError::Unauthorized),
        None => Err(OracleError::NotInitialized),
    }
}

pub fn set_params(
    env: &Env,
    admin: &Address,
    max_stale_blocks: u32,
    max_deviation_bps: u32,
) -> Result<(), OracleError> {
    require_admin(env, admin)?;

    if max_stale_blocks == 0 || max_deviation_bps == 0 {
        return Err(OracleError::InvalidParams);
    }

    let params = GlobalParams {
        max_stale_blocks,
        max_deviation_bps,
    };
    Storage::set_params(env, &params);
    events::params_updated(env, &params);
    Ok(())
}

pub fn transfer_admin(env: &Env, admin: &Address, new_admin: &Address) -> Result<(), OracleError> {
    require_admin(env, admin)?;
    new_admin.require_auth();

    Storage::set_admin(env, new_admin);
    events::admin_transferred(env, admin, new_admin);
    Ok(())
}
