use crate::error::Result;
use crate::rest::{MagicEdenHttpClient, Page, Query, Route};
use crate::types::*;

/// Default page size for item-level lists.
pub const DEFAULT_LIMIT: u32 = 100;
/// Default page size for `/collections` and `/launchpad/collections`.
pub const DEFAULT_COLLECTIONS_LIMIT: u32 = 200;
/// Default page size for `/collections/{symbol}/listings`.
pub const DEFAULT_COLLECTION_LISTINGS_LIMIT: u32 = 20;

fn paged(page: Option<Page>, default_limit: u32) -> Query {
    Query::new().page(page.unwrap_or(Page::with_limit(default_limit)))
}

impl MagicEdenHttpClient {
    // --- Tokens ---

    /// GET /tokens/{mint} - Metadata of a token.
    pub async fn get_token_metadata(&self, token_mint: &str) -> Result<TokenMetadata> {
        self.get_one(Route::TokenMetadata, &[token_mint], &Query::new())
            .await
    }

    /// GET /tokens/{mint}/listings - Active listings of a token.
    pub async fn get_token_listings(&self, token_mint: &str) -> Result<Vec<TokenListing>> {
        self.get_many(Route::TokenListings, &[token_mint], &Query::new())
            .await
    }

    /// GET /tokens/{mint}/offers_received - Offers made on a token.
    pub async fn get_token_offers_received(
        &self,
        token_mint: &str,
        page: Option<Page>,
    ) -> Result<Vec<Offer>> {
        self.get_many(
            Route::TokenOffersReceived,
            &[token_mint],
            &paged(page, DEFAULT_LIMIT),
        )
        .await
    }

    /// GET /tokens/{mint}/activities - Activity history of a token.
    pub async fn get_token_activities(
        &self,
        token_mint: &str,
        page: Option<Page>,
    ) -> Result<Vec<TokenActivity>> {
        self.get_many(
            Route::TokenActivities,
            &[token_mint],
            &paged(page, DEFAULT_LIMIT),
        )
        .await
    }

    // --- Wallets ---

    /// GET /wallets/{wallet}/tokens - Tokens held by a wallet.
    ///
    /// With `listed_only` set, only tokens currently listed are returned.
    pub async fn get_wallet_tokens(
        &self,
        wallet_address: &str,
        page: Option<Page>,
        listed_only: bool,
    ) -> Result<Vec<TokenMetadata>> {
        let query = paged(page, DEFAULT_LIMIT).param("listed_only", listed_only);
        self.get_many(Route::WalletTokens, &[wallet_address], &query)
            .await
    }

    /// GET /wallets/{wallet}/activities - Activity history of a wallet.
    pub async fn get_wallet_activities(
        &self,
        wallet_address: &str,
        page: Option<Page>,
    ) -> Result<Vec<WalletActivity>> {
        self.get_many(
            Route::WalletActivities,
            &[wallet_address],
            &paged(page, DEFAULT_LIMIT),
        )
        .await
    }

    /// GET /wallets/{wallet}/offers_made - Offers a wallet has placed.
    pub async fn get_wallet_offers_made(
        &self,
        wallet_address: &str,
        page: Option<Page>,
    ) -> Result<Vec<Offer>> {
        self.get_many(
            Route::WalletOffersMade,
            &[wallet_address],
            &paged(page, DEFAULT_LIMIT),
        )
        .await
    }

    /// GET /wallets/{wallet}/offers_received - Offers on tokens a wallet holds.
    pub async fn get_wallet_offers_received(
        &self,
        wallet_address: &str,
        page: Option<Page>,
    ) -> Result<Vec<Offer>> {
        self.get_many(
            Route::WalletOffersReceived,
            &[wallet_address],
            &paged(page, DEFAULT_LIMIT),
        )
        .await
    }

    /// GET /wallets/{wallet}/escrow_balance - Escrowed funds backing offers.
    pub async fn get_wallet_escrow_balance(&self, wallet_address: &str) -> Result<EscrowBalance> {
        self.get_one(Route::WalletEscrowBalance, &[wallet_address], &Query::new())
            .await
    }

    // --- Collections ---

    /// GET /collections - Collections listed on the marketplace.
    pub async fn get_collections(&self, page: Option<Page>) -> Result<Vec<CollectionItem>> {
        self.get_many(
            Route::Collections,
            &[],
            &paged(page, DEFAULT_COLLECTIONS_LIMIT),
        )
        .await
    }

    /// GET /collections/{symbol}/listings - Active listings in a collection.
    pub async fn get_collection_listings(
        &self,
        symbol: &str,
        page: Option<Page>,
    ) -> Result<Vec<CollectionListing>> {
        self.get_many(
            Route::CollectionListings,
            &[symbol],
            &paged(page, DEFAULT_COLLECTION_LISTINGS_LIMIT),
        )
        .await
    }

    /// GET /collections/{symbol}/activities - Activity history of a collection.
    pub async fn get_collection_activities(
        &self,
        symbol: &str,
        page: Option<Page>,
    ) -> Result<Vec<CollectionActivity>> {
        self.get_many(
            Route::CollectionActivities,
            &[symbol],
            &paged(page, DEFAULT_LIMIT),
        )
        .await
    }

    /// GET /collections/{symbol}/stats - Floor, listed count and volume.
    pub async fn get_collection_stats(&self, symbol: &str) -> Result<CollectionStats> {
        self.get_one(Route::CollectionStats, &[symbol], &Query::new())
            .await
    }

    // --- Launchpad ---

    /// GET /launchpad/collections - Collections minting through the launchpad.
    pub async fn get_launchpad_collections(
        &self,
        page: Option<Page>,
    ) -> Result<Vec<LaunchpadCollection>> {
        self.get_many(
            Route::LaunchpadCollections,
            &[],
            &paged(page, DEFAULT_COLLECTIONS_LIMIT),
        )
        .await
    }
}
