use crate::{
    instruction::{self, RealEstateInstruction},
    state::PropertyData,
};
use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

// Entrypoint macro
program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if program_id != &crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    // single-byte discriminator + raw payload
    let (disc, payload) = instruction_data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;

    match RealEstateInstruction::try_from(disc)? {
        RealEstateInstruction::Initialize => {
            msg!("Instruction: Initialize");
            if !payload.is_empty() {
                return Err(ProgramError::InvalidInstructionData);
            }
            instruction::initialize::process_initialize(accounts)
        }

        RealEstateInstruction::CreateProperty => {
            msg!("Instruction: CreateProperty");
            let data = PropertyData::unpack(payload)?;
            instruction::create_property::process_create_property(accounts, data)
        }

        RealEstateInstruction::BuyProperty => {
            msg!("Instruction: BuyProperty");
            if !payload.is_empty() {
                return Err(ProgramError::InvalidInstructionData);
            }
            instruction::buy_property::process_buy_property(accounts)
        }
    }
}
