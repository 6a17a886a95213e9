use serde::Serialize;

/// A cosmetic accessory for the mascot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreItem {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub icon: &'static str,
}

pub const STORE_ITEMS: [StoreItem; 5] = [
    StoreItem {
        id: "hat_top",
        name: "Joben",
        price: 10,
        icon: "🎩",
    },
    StoreItem {
        id: "hat_cowboy",
        name: "Pălărie Cowboy",
        price: 15,
        icon: "🤠",
    },
    StoreItem {
        id: "glasses_sun",
        name: "Ochelari",
        price: 20,
        icon: "🕶️",
    },
    StoreItem {
        id: "crown",
        name: "Coroană",
        price: 50,
        icon: "👑",
    },
    StoreItem {
        id: "bow",
        name: "Funda",
        price: 5,
        icon: "🎀",
    },
];

impl StoreItem {
    pub fn find(id: &str) -> Option<&'static StoreItem> {
        STORE_ITEMS.iter().find(|item| item.id == id)
    }
}
