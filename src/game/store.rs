use thiserror::Error;

use crate::model::{PlayerProfile, SoundCue, StoreItem, STORE_ITEMS};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreActionError {
    #[error("no store item with id {0:?}")]
    UnknownItem(String),
    #[error("item {0:?} is already owned")]
    AlreadyOwned(String),
    #[error("item costs {price} coins but only {balance} are available")]
    InsufficientCoins { price: u32, balance: u32 },
    #[error("item {0:?} is not owned")]
    NotOwned(String),
}

/// How an item shows up on the store screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Equipped,
    Owned,
    Affordable,
    TooExpensive,
}

pub fn item_status(profile: &PlayerProfile, item: &StoreItem) -> ItemStatus {
    if profile.is_equipped(item.id) {
        ItemStatus::Equipped
    } else if profile.owns(item.id) {
        ItemStatus::Owned
    } else if profile.coins >= item.price {
        ItemStatus::Affordable
    } else {
        ItemStatus::TooExpensive
    }
}

pub fn catalog(profile: &PlayerProfile) -> Vec<(&'static StoreItem, ItemStatus)> {
    STORE_ITEMS
        .iter()
        .map(|item| (item, item_status(profile, item)))
        .collect()
}

pub fn buy(profile: &mut PlayerProfile, item_id: &str) -> Result<&'static StoreItem, StoreActionError> {
    let item = StoreItem::find(item_id)
        .ok_or_else(|| StoreActionError::UnknownItem(item_id.to_string()))?;
    if profile.owns(item.id) {
        return Err(StoreActionError::AlreadyOwned(item.id.to_string()));
    }
    if profile.coins < item.price {
        return Err(StoreActionError::InsufficientCoins {
            price: item.price,
            balance: profile.coins,
        });
    }

    profile.coins -= item.price;
    profile.inventory.push(item.id.to_string());
    Ok(item)
}

/// Purchases reuse the answer cues: success sounds like a correct answer,
/// a refusal like a wrong one.
pub fn purchase_cue<T>(result: &Result<T, StoreActionError>) -> SoundCue {
    SoundCue::for_outcome(result.is_ok())
}

pub fn equip(profile: &mut PlayerProfile, item_id: &str) -> Result<(), StoreActionError> {
    if !profile.owns(item_id) {
        return Err(StoreActionError::NotOwned(item_id.to_string()));
    }
    profile.equipped = Some(item_id.to_string());
    Ok(())
}

/// Icon for the mascot's accessory slot. Ids no longer in the catalog show
/// nothing.
pub fn equipped_item(profile: &PlayerProfile) -> Option<&'static StoreItem> {
    profile.equipped.as_deref().and_then(StoreItem::find)
}
