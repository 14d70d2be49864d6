use pinocchio::{account_info::AccountInfo, ProgramResult};
use pinocchio_log::log;
use pinocchio_system::instructions::Transfer;

use crate::{
    error::RealEstateError,
    helpers::{next_account_info, require_signer, require_system_program, require_writable},
    state::Property,
};

/// Pay the listed price to the current owner and hand the property to the buyer.
///
/// Accounts:
/// 0. `[writable]`         Property account (owned by this program)
/// 1. `[writable, signer]` Buyer
/// 2. `[writable]`         Seller, must be the recorded owner
/// 3. `[]`                 System program
pub fn process_buy_property(accounts: &[AccountInfo]) -> ProgramResult {
    let iter = &mut accounts.iter();
    let property_ai       = next_account_info(iter)?;
    let buyer_ai          = next_account_info(iter)?;
    let seller_ai         = next_account_info(iter)?;
    let system_program_ai = next_account_info(iter)?;

    require_writable(property_ai)?;
    require_signer(buyer_ai)?;
    require_writable(buyer_ai)?;
    require_writable(seller_ai)?;
    require_system_program(system_program_ai)?;

    // copy out before the CPI; no borrow of property data is held across it
    let (owner, price) = {
        let property = Property::load(property_ai)?;
        (property.owner, property.property.price())
    };

    if buyer_ai.key() == &owner {
        return Err(RealEstateError::BuyerIsOwner.into());
    }
    if seller_ai.key() != &owner {
        return Err(RealEstateError::SellerMismatch.into());
    }

    if price > 0 {
        Transfer {
            from: buyer_ai,
            to: seller_ai,
            lamports: price,
        }
        .invoke()?;
    }

    Property::load_mut(property_ai)?.owner = *buyer_ai.key();

    log!("buy_property: paid {} lamports", price);
    Ok(())
}
