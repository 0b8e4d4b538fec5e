//! Default minibar catalog, used when no saved inventory exists.

use minibar_core::ItemId;

use crate::item::Item;
use crate::state::InventoryState;

/// Seed ids and display names, in display order.
const SEED: &[(&str, &str)] = &[
    ("water", "WATER"),
    ("soju", "SOJU"),
    ("smp", "SMP"),
    ("sml", "SML"),
    ("sma", "SMA"),
    ("coke", "COKE"),
    ("royal", "ROYAL"),
    ("sprite", "SPRITE"),
    ("letsbe", "LET'S BE"),
    ("bacchus", "BACCHUS"),
    ("strawberry_milk", "STRAWBERRY MILK"),
    ("banana_milk", "BANANA MILK"),
    ("hwaggaesu_stick", "HWAGGAESU STICK"),
    ("hwaggaesu_drink", "HWAGGAESU DRINK"),
    ("ramyun", "RAMYUN"),
    ("cup_noodles", "CUP NOODLES"),
    ("esse_pop", "ESSE POP"),
    ("marlboro", "MARLBORO"),
    ("seaweed", "SEAWEED"),
    ("almond_chocolate", "ALMOND CHOCOLATE"),
    ("choco_ball", "CHOCO BALL"),
    ("goya_bar", "GOYA BAR"),
    ("peanut_small", "PEANUT SMALL"),
    ("peanut_large", "PEANUT LARGE"),
    ("mango_pudding", "MANGO PUDDING"),
    ("dried_mango", "DRIED MANGO"),
    ("banana_chip", "BANANA CHIP"),
    ("beef_jerky", "BEEF JERKY"),
    ("roasted_squid", "ROASTED SQUID"),
    ("dried_fish", "DRIED FISH"),
    ("sausage", "SAUSAGE"),
    ("maxim_coffee", "MAXIM COFFEE"),
    ("pringles", "PRINGLES"),
    ("noni_soap", "NONI SOAP"),
    ("tooth_set", "TOOTH SET"),
    ("swimsuit", "SWIMSUIT"),
    ("pocari_sweat", "POCARI SWEAT"),
];

/// The seed catalog: every item present with quantity 0.
pub fn default_catalog() -> InventoryState {
    InventoryState::from_items(
        SEED.iter()
            .map(|(id, name)| Item::restore(ItemId::seed(id), *name, 0))
            .collect(),
    )
}
