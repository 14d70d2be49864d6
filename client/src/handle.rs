use real_estate::{error::RealEstateError, state::Property};
use solana_sdk::pubkey::Pubkey;

use crate::{
    config::ConnectionContext,
    error::{RemoteInvocationError, Result},
    methods::{Methods, PropertyListing},
};

/// A deployed program bound to the context it was resolved in.
#[derive(Debug, Clone)]
pub struct ProgramHandle {
    name: String,
    program_id: Pubkey,
    ctx: ConnectionContext,
}

/// Decoded `Property` account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAccount {
    pub owner: Pubkey,
    pub listing: PropertyListing,
    pub lamports: u64,
}

impl ProgramHandle {
    pub fn new(name: impl Into<String>, program_id: Pubkey, ctx: ConnectionContext) -> Self {
        Self {
            name: name.into(),
            program_id,
            ctx,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    pub fn context(&self) -> &ConnectionContext {
        &self.ctx
    }

    pub fn methods(&self) -> Methods<'_> {
        Methods::new(self)
    }

    /// Read a property account; fails if it is missing or not one of ours.
    pub async fn fetch_property(&self, address: &Pubkey) -> Result<PropertyAccount> {
        let account = self
            .ctx
            .transport()
            .get_account(address)
            .await?
            .ok_or_else(|| RemoteInvocationError::Account {
                address: *address,
                message: "account does not exist".into(),
            })?;

        let decode_err = |message: String| RemoteInvocationError::Account {
            address: *address,
            message,
        };
        if account.owner != self.program_id {
            return Err(decode_err(format!("owned by {}, not {}", account.owner, self.program_id)));
        }
        let property = Property::from_bytes(&account.data)
            .map_err(|_| decode_err(RealEstateError::InvalidPropertyAccount.as_str().into()))?;

        let data = &property.property;
        let text = |slot: Result<&str, RealEstateError>| {
            slot.map(str::to_owned).map_err(|e| decode_err(e.as_str().into()))
        };
        Ok(PropertyAccount {
            owner: Pubkey::new_from_array(property.owner),
            listing: PropertyListing {
                address: text(data.address.as_str())?,
                rooms: data.rooms(),
                bathrooms: data.bathrooms(),
                kitchens: data.kitchens(),
                price: data.price(),
                city: text(data.city.as_str())?,
                north_view: text(data.north_view.as_str())?,
                south_view: text(data.south_view.as_str())?,
                east_view: text(data.east_view.as_str())?,
                west_view: text(data.west_view.as_str())?,
                image_url: text(data.image_url.as_str())?,
            },
            lamports: account.lamports,
        })
    }
}
