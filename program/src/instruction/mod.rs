use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

pub mod buy_property;
pub mod create_property;
pub mod initialize;

pub use buy_property::*;
pub use create_property::*;
pub use initialize::*;

/// First byte of every instruction.
#[repr(u8)]
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankInstruction)]
pub enum RealEstateInstruction {
    Initialize,

    /// Payload: `PropertyData` (u64 LE integers, u32-prefixed strings).
    #[account(0, writable, signer, name = "property", desc = "New property account")]
    #[account(1, writable, signer, name = "signer", desc = "Payer and first owner")]
    #[account(2, name = "system_program", desc = "System program")]
    CreateProperty,

    #[account(0, writable, name = "property", desc = "Property being sold")]
    #[account(1, writable, signer, name = "buyer", desc = "Pays the price, becomes owner")]
    #[account(2, writable, name = "seller", desc = "Current owner, receives the price")]
    #[account(3, name = "system_program", desc = "System program")]
    BuyProperty,
}

impl RealEstateInstruction {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Initialize => "Initialize",
            Self::CreateProperty => "CreateProperty",
            Self::BuyProperty => "BuyProperty",
        }
    }
}

impl TryFrom<&u8> for RealEstateInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(RealEstateInstruction::Initialize),
            1 => Ok(RealEstateInstruction::CreateProperty),
            2 => Ok(RealEstateInstruction::BuyProperty),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}
