use solana_program_test::BanksClient;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use real_estate::{instruction::RealEstateInstruction, state::Property};

/// Host-side listing used to build `CreateProperty` payloads.
#[derive(Clone, Debug)]
pub struct Listing {
    pub address: String,
    pub rooms: u64,
    pub bathrooms: u64,
    pub kitchens: u64,
    pub price: u64,
    pub city: String,
    pub views: [String; 4],
    pub image_url: String,
}

impl Listing {
    pub fn sample(price: u64) -> Self {
        Self {
            address: "12 Harbour Road".into(),
            rooms: 4,
            bathrooms: 2,
            kitchens: 1,
            price,
            city: "Lisbon".into(),
            views: ["sea".into(), "park".into(), "hills".into(), "street".into()],
            image_url: "https://img.example/harbour.png".into(),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        fn push_str(buf: &mut Vec<u8>, s: &str) {
            buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
            buf.extend_from_slice(s.as_bytes());
        }
        let mut buf = Vec::new();
        push_str(&mut buf, &self.address);
        for n in [self.rooms, self.bathrooms, self.kitchens, self.price] {
            buf.extend_from_slice(&n.to_le_bytes());
        }
        push_str(&mut buf, &self.city);
        for view in &self.views {
            push_str(&mut buf, view);
        }
        push_str(&mut buf, &self.image_url);
        buf
    }
}

pub mod ixn {
    use super::*;

    pub fn initialize() -> Instruction {
        Instruction {
            program_id: crate::common::program_id(),
            accounts: vec![],
            data: vec![RealEstateInstruction::Initialize as u8],
        }
    }

    pub fn create_property(property: &Pubkey, signer: &Pubkey, listing: &Listing) -> Instruction {
        let mut data = vec![RealEstateInstruction::CreateProperty as u8];
        data.extend_from_slice(&listing.encode());
        Instruction {
            program_id: crate::common::program_id(),
            accounts: vec![
                AccountMeta::new(*property, true),
                AccountMeta::new(*signer, true),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
            data,
        }
    }

    pub fn buy_property(property: &Pubkey, buyer: &Pubkey, seller: &Pubkey) -> Instruction {
        Instruction {
            program_id: crate::common::program_id(),
            accounts: vec![
                AccountMeta::new(*property, false),
                AccountMeta::new(*buyer, true),
                AccountMeta::new(*seller, false),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
            data: vec![RealEstateInstruction::BuyProperty as u8],
        }
    }
}

/// Fetch a property account and return (owner, price, lamports).
pub async fn get_property(banks_client: &mut BanksClient, pubkey: &Pubkey) -> (Pubkey, u64, u64) {
    let account = banks_client.get_account(*pubkey).await.unwrap().unwrap();
    assert_eq!(account.owner, crate::common::program_id());
    let property = Property::from_bytes(&account.data).unwrap();
    (
        Pubkey::new_from_array(property.owner),
        property.property.price(),
        account.lamports,
    )
}
