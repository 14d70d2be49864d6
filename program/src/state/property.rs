use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::{error::RealEstateError, state::PropertyData};

/// On-chain listing: who owns it and what it is.
#[repr(C)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, ShankAccount)]
pub struct Property {
    /// `sha256("account:Property")[..8]`
    pub discriminator: [u8; 8],
    pub owner: Pubkey,
    pub property: PropertyData,
}

const _: () = assert!(core::mem::align_of::<Property>() == 1);

impl Property {
    /// Leading tag only; the body is the fixed slot layout, not Borsh.
    pub const DISCRIMINATOR: [u8; 8] = [195, 247, 69, 181, 195, 47, 152, 19];

    /// Account space requested at creation.
    pub const LEN: usize = core::mem::size_of::<Property>();

    pub fn new(owner: Pubkey, property: PropertyData) -> Self {
        Self {
            discriminator: Self::DISCRIMINATOR,
            owner,
            property,
        }
    }

    /// Interpret raw account bytes as a property, checking size and tag.
    pub fn from_bytes(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() != Self::LEN || data[..8] != Self::DISCRIMINATOR {
            return Err(RealEstateError::InvalidPropertyAccount.into());
        }
        // alignment is 1 (asserted above) and the length matches exactly
        Ok(unsafe { &*(data.as_ptr() as *const Self) })
    }

    #[inline]
    pub fn load(account: &AccountInfo) -> Result<&Self, ProgramError> {
        if account.owner() != &crate::ID {
            return Err(ProgramError::InvalidAccountOwner);
        }
        Self::from_bytes(unsafe { account.borrow_data_unchecked() })
    }

    #[inline]
    pub fn load_mut(account: &AccountInfo) -> Result<&mut Self, ProgramError> {
        if !account.is_writable() {
            return Err(ProgramError::InvalidAccountData);
        }
        Self::load(account)?;
        let data = unsafe { account.borrow_mut_data_unchecked() };
        Ok(unsafe { &mut *(data.as_mut_ptr() as *mut Self) })
    }

    /// Write a fresh property into an account this program just created.
    pub fn init(account: &AccountInfo, owner: Pubkey, property: PropertyData) -> Result<(), ProgramError> {
        if account.owner() != &crate::ID {
            return Err(ProgramError::InvalidAccountOwner);
        }
        let data = unsafe { account.borrow_mut_data_unchecked() };
        if data.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        if data[..8] != [0u8; 8] {
            return Err(RealEstateError::AlreadyInitialized.into());
        }
        let slot = unsafe { &mut *(data.as_mut_ptr() as *mut Self) };
        *slot = Self::new(owner, property);
        Ok(())
    }
}
