use std::fmt;

/// Every endpoint the client knows about.
///
/// Templates carry positional `{n}` placeholders that are filled, in order,
/// with the path parameters of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    TokenMetadata,
    TokenListings,
    TokenOffersReceived,
    TokenActivities,
    WalletTokens,
    WalletActivities,
    WalletOffersMade,
    WalletOffersReceived,
    WalletEscrowBalance,
    Collections,
    CollectionListings,
    CollectionActivities,
    CollectionStats,
    LaunchpadCollections,
}

impl Route {
    pub const ALL: [Route; 14] = [
        Route::TokenMetadata,
        Route::TokenListings,
        Route::TokenOffersReceived,
        Route::TokenActivities,
        Route::WalletTokens,
        Route::WalletActivities,
        Route::WalletOffersMade,
        Route::WalletOffersReceived,
        Route::WalletEscrowBalance,
        Route::Collections,
        Route::CollectionListings,
        Route::CollectionActivities,
        Route::CollectionStats,
        Route::LaunchpadCollections,
    ];

    pub const fn template(self) -> &'static str {
        match self {
            Route::TokenMetadata => "tokens/{0}",
            Route::TokenListings => "tokens/{0}/listings",
            Route::TokenOffersReceived => "tokens/{0}/offers_received",
            Route::TokenActivities => "tokens/{0}/activities",
            Route::WalletTokens => "wallets/{0}/tokens",
            Route::WalletActivities => "wallets/{0}/activities",
            Route::WalletOffersMade => "wallets/{0}/offers_made",
            Route::WalletOffersReceived => "wallets/{0}/offers_received",
            Route::WalletEscrowBalance => "wallets/{0}/escrow_balance",
            Route::Collections => "collections",
            Route::CollectionListings => "collections/{0}/listings",
            Route::CollectionActivities => "collections/{0}/activities",
            Route::CollectionStats => "collections/{0}/stats",
            Route::LaunchpadCollections => "launchpad/collections",
        }
    }

    /// Number of `{n}` slots in the template.
    pub fn placeholders(self) -> usize {
        let template = self.template();
        (0..)
            .take_while(|i| template.contains(&format!("{{{i}}}")))
            .count()
    }

    /// Fill the template with `params`, positionally and verbatim.
    pub fn resolve(self, params: &[&str]) -> String {
        debug_assert_eq!(
            params.len(),
            self.placeholders(),
            "wrong number of path parameters for {self:?}"
        );
        params
            .iter()
            .enumerate()
            .fold(self.template().to_string(), |path, (i, param)| {
                path.replace(&format!("{{{i}}}"), param)
            })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_single_param() {
        let path = Route::TokenListings.resolve(&["ACcbkzxT3vyRqzKKbaFgwkY2hSaLGCF3BmCzDCew4vk8"]);
        assert_eq!(path, "tokens/ACcbkzxT3vyRqzKKbaFgwkY2hSaLGCF3BmCzDCew4vk8/listings");
    }

    #[test]
    fn test_resolve_no_params() {
        assert_eq!(Route::Collections.resolve(&[]), "collections");
        assert_eq!(Route::LaunchpadCollections.resolve(&[]), "launchpad/collections");
    }

    #[test]
    fn test_placeholder_counts() {
        for route in Route::ALL {
            let expected = match route {
                Route::Collections | Route::LaunchpadCollections => 0,
                _ => 1,
            };
            assert_eq!(route.placeholders(), expected, "{route:?}");
        }
    }

    #[test]
    fn test_templates_are_relative_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for route in Route::ALL {
            let template = route.template();
            assert!(!template.starts_with('/'), "{template}");
            assert!(seen.insert(template), "duplicate template {template}");
        }
    }

    #[test]
    fn test_param_inserted_verbatim() {
        let path = Route::CollectionStats.resolve(&["degods"]);
        assert_eq!(path, "collections/degods/stats");
        assert_eq!(Route::CollectionStats.to_string(), "collections/{0}/stats");
    }
}
