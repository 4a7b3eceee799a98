//! Closed category taxonomy for grocery items.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use pantry_core::DomainError;

macro_rules! categories {
    (@count $($variant:ident)+) => { 0 $(+ categories!(@one $variant))+ };
    (@one $variant:ident) => { 1 };
    ($($variant:ident => $wire:tt, $label:literal;)+) => {
        /// Category of a grocery item.
        ///
        /// The set is closed: there is no runtime registration. Each tag has a
        /// stable ASCII wire id (what serde reads and writes) and a separate
        /// display label for the UI.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Category {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl Category {
            /// Every tag, in declaration order.
            pub const ALL: [Category; categories!(@count $($variant)+)] = [$(Category::$variant),+];

            /// Stable wire/storage identifier.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Category::$variant => $wire,)+
                }
            }

            /// Human-readable display label.
            pub const fn label(self) -> &'static str {
                match self {
                    $(Category::$variant => $label,)+
                }
            }
        }

        impl FromStr for Category {
            type Err = DomainError;

            /// Parses a wire id. Display labels are not accepted.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Category::$variant),)+
                    other => Err(DomainError::validation(format!("unknown category id: {other:?}"))),
                }
            }
        }
    };
}

categories! {
    Fruits => "fruits", "Fruits";
    Vegetables => "vegetables", "Vegetables";
    Dairy => "dairy", "Dairy";
    MeatAndFish => "meat_and_fish", "Meat & Fish";
    BakedGoods => "baked_goods", "Baked Goods";
    Frozen => "frozen", "Frozen";
    Beverages => "beverages", "Beverages";
    SnacksAndSweets => "snacks_and_sweets", "Snacks & Sweets";
    GrainsAndLegumes => "grains_and_legumes", "Grains & Legumes";
    SpicesAndSauces => "spices_and_sauces", "Spices & Sauces";
    CleaningProducts => "cleaning_products", "Cleaning Products";
    Toiletries => "toiletries", "Toiletries";
    DryGoods => "dry_goods", "Dry Goods";
    CannedGoods => "canned_goods", "Canned Goods";
    BabyFood => "baby_food", "Baby Food";
    PetFood => "pet_food", "Pet Food";
    HouseholdItems => "household_items", "Household Items";
    Other => "other", "Other";
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
