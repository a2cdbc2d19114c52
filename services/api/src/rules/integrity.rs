//! Referential integrity rules
//!
//! Every mutation that references a parent entity runs the relevant check
//! here first; a failed check means no write happens. NotFound covers a
//! missing or mismatched parent, Forbidden an identity mismatch, Conflict a
//! uniqueness violation. The store's unique indexes back these checks up at
//! insert time, so a race between check and write still cannot produce
//! duplicates.

use crate::error::AppError;
use store::DirectoryStore;
use types::{Address, Market, Product};

/// Look up the market at `addr`, failing with NotFound if absent.
pub fn require_market(store: &DirectoryStore, addr: &Address) -> Result<Market, AppError> {
    store
        .markets
        .by_address(addr)
        .ok_or_else(|| AppError::NotFound("market place address not found".to_string()))
}

/// Look up the market at `addr` and verify the caller's claimed owner
/// wallet matches the stored one.
pub fn require_owned_market(
    store: &DirectoryStore,
    addr: &Address,
    claimed_owner: &Address,
) -> Result<Market, AppError> {
    let market = require_market(store, addr)?;
    if market.market_owner != *claimed_owner {
        return Err(AppError::Forbidden(
            "you do not own this marketplace".to_string(),
        ));
    }
    Ok(market)
}

/// Look up one product of a market, failing with NotFound if absent.
pub fn require_product(
    store: &DirectoryStore,
    addr: &Address,
    product_id: u64,
) -> Result<Product, AppError> {
    store
        .products
        .get(addr, product_id)
        .ok_or_else(|| AppError::NotFound("product not found".to_string()))
}

/// Market creation: owner, name, address, and numeric id must all be
/// unclaimed. Four independent checks so the caller learns which key
/// collided.
pub fn ensure_market_unclaimed(
    store: &DirectoryStore,
    owner: &Address,
    name: &str,
    addr: &Address,
    market_id: u64,
) -> Result<(), AppError> {
    if store.markets.by_owner(owner).is_some() {
        return Err(AppError::Conflict(
            "owner already has a marketplace".to_string(),
        ));
    }
    if store.markets.by_name(name).is_some() {
        return Err(AppError::Conflict(
            "market name already exists".to_string(),
        ));
    }
    if store.markets.by_address(addr).is_some() {
        return Err(AppError::Conflict(
            "market place address already exists".to_string(),
        ));
    }
    if store.markets.by_market_id(market_id).is_some() {
        return Err(AppError::Conflict("market id already exists".to_string()));
    }
    Ok(())
}

/// Product creation: the numeric id and the name must both be unused within
/// the market. Two separate checks.
pub fn ensure_product_slots_free(
    store: &DirectoryStore,
    addr: &Address,
    product_id: u64,
    name: &str,
) -> Result<(), AppError> {
    if store.products.get(addr, product_id).is_some() {
        return Err(AppError::Conflict("product id already exists".to_string()));
    }
    if store.products.by_name(addr, name).is_some() {
        return Err(AppError::Conflict(
            "product name already exists".to_string(),
        ));
    }
    Ok(())
}

/// Item creation: parents must exist and the denormalized names must match
/// the live parents exactly; the item id must be fresh in the market.
pub fn check_item_parents(
    store: &DirectoryStore,
    addr: &Address,
    product_id: u64,
    market_name: &str,
    product_name: &str,
    item_id: u64,
) -> Result<(), AppError> {
    let market = require_market(store, addr)?;
    if market.name != market_name {
        return Err(AppError::NotFound(
            "market place or name invalid".to_string(),
        ));
    }

    let product = require_product(store, addr, product_id)?;
    if product.name != product_name {
        return Err(AppError::NotFound(
            "market product or name invalid".to_string(),
        ));
    }

    if store.items.get(addr, item_id).is_some() {
        return Err(AppError::Conflict("item already exists".to_string()));
    }
    Ok(())
}

/// Review authorization: the wallet must be the buyer or owner of at least
/// one item in the market.
pub fn require_market_participant(
    store: &DirectoryStore,
    addr: &Address,
    wallet: &Address,
) -> Result<(), AppError> {
    if store.items.participant_exists(addr, wallet) {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "only the owner or a buyer of an item in this marketplace can review it".to_string(),
        ))
    }
}

/// Review authorization narrowed to one product.
pub fn require_product_participant(
    store: &DirectoryStore,
    addr: &Address,
    product_id: u64,
    wallet: &Address,
) -> Result<(), AppError> {
    if store.items.product_participant_exists(addr, product_id, wallet) {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "only the owner or a buyer of this product can review it".to_string(),
        ))
    }
}

/// A rename during update must land on a free name.
pub fn ensure_market_name_free(store: &DirectoryStore, name: &str) -> Result<(), AppError> {
    if store.markets.by_name(name).is_some() {
        return Err(AppError::Conflict("name already exists".to_string()));
    }
    Ok(())
}

pub fn ensure_product_name_free(
    store: &DirectoryStore,
    addr: &Address,
    name: &str,
) -> Result<(), AppError> {
    if store.products.by_name(addr, name).is_some() {
        return Err(AppError::Conflict("name already exists".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{addr, seed_item, seed_market, seed_product};

    #[test]
    fn test_require_owned_market_distinguishes_absent_from_foreign() {
        let store = DirectoryStore::new();
        let market = seed_market(&store, 'a', "Shop1", 1);

        let missing = require_owned_market(&store, &addr('q'), &market.market_owner);
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        let foreign =
            require_owned_market(&store, &market.market_place_address, &addr('z'));
        assert!(matches!(foreign, Err(AppError::Forbidden(_))));

        let owned =
            require_owned_market(&store, &market.market_place_address, &market.market_owner);
        assert!(owned.is_ok());
    }

    #[test]
    fn test_market_creation_conflicts_each_key() {
        let store = DirectoryStore::new();
        let market = seed_market(&store, 'a', "Shop1", 1);

        let by_owner =
            ensure_market_unclaimed(&store, &market.market_owner, "Other", &addr('q'), 9);
        assert!(matches!(by_owner, Err(AppError::Conflict(_))));

        let by_name = ensure_market_unclaimed(&store, &addr('z'), "Shop1", &addr('q'), 9);
        assert!(matches!(by_name, Err(AppError::Conflict(_))));

        let by_addr = ensure_market_unclaimed(
            &store,
            &addr('z'),
            "Other",
            &market.market_place_address,
            9,
        );
        assert!(matches!(by_addr, Err(AppError::Conflict(_))));

        let by_id = ensure_market_unclaimed(&store, &addr('z'), "Other", &addr('q'), 1);
        assert!(matches!(by_id, Err(AppError::Conflict(_))));

        assert!(ensure_market_unclaimed(&store, &addr('z'), "Other", &addr('q'), 9).is_ok());
    }

    #[test]
    fn test_item_parent_checks_match_names() {
        let store = DirectoryStore::new();
        let market = seed_market(&store, 'a', "Shop1", 1);
        seed_product(&store, &market.market_place_address, 1, "Widget");

        let mp = &market.market_place_address;

        // Wrong denormalized market name.
        assert!(matches!(
            check_item_parents(&store, mp, 1, "NotShop", "Widget", 1),
            Err(AppError::NotFound(_))
        ));
        // Wrong denormalized product name.
        assert!(matches!(
            check_item_parents(&store, mp, 1, "Shop1", "Gadget", 1),
            Err(AppError::NotFound(_))
        ));
        // All good.
        assert!(check_item_parents(&store, mp, 1, "Shop1", "Widget", 1).is_ok());

        // Existing item id conflicts.
        seed_item(&store, mp, 1, 1, addr('x'), addr('a'));
        assert!(matches!(
            check_item_parents(&store, mp, 1, "Shop1", "Widget", 1),
            Err(AppError::Conflict(_))
        ));
    }

    #[test]
    fn test_review_authorization_requires_item() {
        let store = DirectoryStore::new();
        let market = seed_market(&store, 'a', "Shop1", 1);
        let mp = &market.market_place_address;
        seed_product(&store, mp, 1, "Widget");
        seed_item(&store, mp, 1, 1, addr('x'), addr('a'));

        assert!(require_market_participant(&store, mp, &addr('x')).is_ok());
        assert!(require_market_participant(&store, mp, &addr('a')).is_ok());
        assert!(matches!(
            require_market_participant(&store, mp, &addr('z')),
            Err(AppError::Forbidden(_))
        ));

        assert!(require_product_participant(&store, mp, 1, &addr('x')).is_ok());
        assert!(matches!(
            require_product_participant(&store, mp, 2, &addr('x')),
            Err(AppError::Forbidden(_))
        ));
    }
}
