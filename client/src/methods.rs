use real_estate::{
    instruction::RealEstateInstruction,
    state::{ADDRESS_MAX, CITY_MAX, IMAGE_URL_MAX, VIEW_MAX},
};
use serde::{Deserialize, Serialize};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_program,
    transaction::Transaction,
};
use tracing::{debug, info};

use crate::{
    error::{RemoteInvocationError, Result},
    handle::ProgramHandle,
};

/// Listing details as the caller supplies them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PropertyListing {
    pub address: String,
    pub rooms: u64,
    pub bathrooms: u64,
    pub kitchens: u64,
    /// Asking price in lamports
    pub price: u64,
    pub city: String,
    pub north_view: String,
    pub south_view: String,
    pub east_view: String,
    pub west_view: String,
    pub image_url: String,
}

impl PropertyListing {
    /// Check every string against the on-chain slot it will land in.
    pub fn validate(&self) -> Result<()> {
        let slots: [(&str, &str, usize); 7] = [
            ("address", &self.address, ADDRESS_MAX),
            ("city", &self.city, CITY_MAX),
            ("north_view", &self.north_view, VIEW_MAX),
            ("south_view", &self.south_view, VIEW_MAX),
            ("east_view", &self.east_view, VIEW_MAX),
            ("west_view", &self.west_view, VIEW_MAX),
            ("image_url", &self.image_url, IMAGE_URL_MAX),
        ];
        for (field, value, max) in slots {
            if value.len() > max {
                return Err(RemoteInvocationError::InvalidArguments(format!(
                    "{field} is {} bytes, at most {max} fit on chain",
                    value.len()
                )));
            }
        }
        Ok(())
    }

    /// Instruction payload: u64 LE integers, u32 LE length-prefixed strings.
    pub fn encode(&self) -> Vec<u8> {
        fn push_str(buf: &mut Vec<u8>, s: &str) {
            buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
            buf.extend_from_slice(s.as_bytes());
        }

        let mut buf = Vec::with_capacity(256);
        push_str(&mut buf, &self.address);
        for n in [self.rooms, self.bathrooms, self.kitchens, self.price] {
            buf.extend_from_slice(&n.to_le_bytes());
        }
        push_str(&mut buf, &self.city);
        for view in [&self.north_view, &self.south_view, &self.east_view, &self.west_view] {
            push_str(&mut buf, view);
        }
        push_str(&mut buf, &self.image_url);
        buf
    }
}

/// Entry points of the program behind a [`ProgramHandle`].
pub struct Methods<'a> {
    handle: &'a ProgramHandle,
}

impl<'a> Methods<'a> {
    pub(crate) fn new(handle: &'a ProgramHandle) -> Self {
        Self { handle }
    }

    fn call(&self, method: RealEstateInstruction, accounts: Vec<AccountMeta>, payload: &[u8]) -> MethodCall<'a> {
        let mut data = Vec::with_capacity(1 + payload.len());
        data.push(method as u8);
        data.extend_from_slice(payload);
        MethodCall {
            handle: self.handle,
            method,
            instruction: Instruction {
                program_id: self.handle.program_id(),
                accounts,
                data,
            },
            signers: Vec::new(),
        }
    }

    /// No accounts, no arguments.
    pub fn initialize(&self) -> MethodCall<'a> {
        self.call(RealEstateInstruction::Initialize, Vec::new(), &[])
    }

    /// List a property at a fresh `property` account; the payer funds it and owns it.
    pub fn create_property(&self, property: &'a Keypair, listing: &PropertyListing) -> Result<MethodCall<'a>> {
        listing.validate()?;
        let payer = self.handle.context().payer_pubkey();
        let accounts = vec![
            AccountMeta::new(property.pubkey(), true),
            AccountMeta::new(payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ];
        Ok(self
            .call(RealEstateInstruction::CreateProperty, accounts, &listing.encode())
            .signer(property))
    }

    /// Buy `property` from `seller`, paying with the context payer.
    pub fn buy_property(&self, property: &Pubkey, seller: &Pubkey) -> MethodCall<'a> {
        let buyer = self.handle.context().payer_pubkey();
        let accounts = vec![
            AccountMeta::new(*property, false),
            AccountMeta::new(buyer, true),
            AccountMeta::new(*seller, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ];
        self.call(RealEstateInstruction::BuyProperty, accounts, &[])
    }
}

/// One pending call; nothing reaches the network until [`MethodCall::rpc`].
pub struct MethodCall<'a> {
    handle: &'a ProgramHandle,
    method: RealEstateInstruction,
    instruction: Instruction,
    signers: Vec<&'a Keypair>,
}

impl<'a> MethodCall<'a> {
    /// Extra signer besides the payer.
    pub fn signer(mut self, keypair: &'a Keypair) -> Self {
        self.signers.push(keypair);
        self
    }

    pub fn instruction(&self) -> &Instruction {
        &self.instruction
    }

    /// Sign with the payer (plus any extra signers), submit, and wait for confirmation.
    ///
    /// The signature is logged only once the cluster has accepted the transaction.
    pub async fn rpc(self) -> Result<Signature> {
        let ctx = self.handle.context();
        let transport = ctx.transport();
        let payer = ctx.payer();

        let blockhash = transport.latest_blockhash().await?;
        let mut signers: Vec<&Keypair> = Vec::with_capacity(1 + self.signers.len());
        signers.push(payer);
        signers.extend(self.signers.iter().copied());

        let transaction = Transaction::new_signed_with_payer(
            &[self.instruction],
            Some(&payer.pubkey()),
            &signers,
            blockhash,
        );
        debug!(
            method = self.method.name(),
            program = %self.handle.program_id(),
            endpoint = transport.endpoint(),
            "submitting transaction"
        );

        let signature = transport.send_and_confirm(&transaction).await?;
        info!(method = self.method.name(), %signature, "Your transaction signature");
        Ok(signature)
    }
}
