use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_system::instructions::CreateAccount;

use crate::{
    error::RealEstateError,
    helpers::{require_signer, require_system_program, require_writable},
    state::{Property, PropertyData},
};

/// Create a property account funded by the signer and record the signer as owner.
///
/// Accounts:
/// 0. `[writable, signer]` New property account
/// 1. `[writable, signer]` Payer, becomes the owner
/// 2. `[]`                 System program
pub fn process_create_property(accounts: &[AccountInfo], data: PropertyData) -> ProgramResult {
    let [property_ai, signer_ai, system_program_ai, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(signer_ai)?;
    require_writable(signer_ai)?;
    // the new account signs its own allocation
    require_signer(property_ai)?;
    require_writable(property_ai)?;
    require_system_program(system_program_ai)?;

    if property_ai.owner() == &crate::ID || property_ai.data_len() != 0 {
        return Err(RealEstateError::AlreadyInitialized.into());
    }

    let rent = Rent::get()?;
    CreateAccount {
        from: signer_ai,
        to: property_ai,
        lamports: rent.minimum_balance(Property::LEN),
        space: Property::LEN as u64,
        owner: &crate::ID,
    }
    .invoke()?;

    Property::init(property_ai, *signer_ai.key(), data)?;

    log!("create_property: listed at {} lamports", data.price());
    Ok(())
}
