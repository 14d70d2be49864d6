use pinocchio::{account_info::AccountInfo, msg, ProgramResult};

/// Takes no accounts and stores nothing; extra accounts are ignored.
pub fn process_initialize(_accounts: &[AccountInfo]) -> ProgramResult {
    msg!("real_estate: initialized");
    Ok(())
}
