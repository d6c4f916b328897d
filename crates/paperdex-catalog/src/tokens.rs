//! Static list of supported tokens.
//!
//! Metadata only; prices come from the market-data service. The set is
//! fixed at compile time, so unknown ids are rejected before any trade
//! reaches the wallet ledger.

use once_cell::sync::Lazy;
use paperdex_core::{Token, TokenId};

static SUPPORTED_TOKENS: Lazy<Vec<Token>> = Lazy::new(|| {
    vec![
        token(
            "sol",
            "SOL",
            "Solana",
            "So11111111111111111111111111111111111111112",
            9,
            "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/So11111111111111111111111111111111111111112/logo.png",
        ),
        token(
            "bonk",
            "BONK",
            "Bonk",
            "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263",
            5,
            "https://arweave.net/hQiPZOsRZXGXBJd_82PhVdlM_hACsT_q6wqwf5cSY7I",
        ),
        token(
            "wif",
            "WIF",
            "dogwifhat",
            "EKpQGSJtjMFqKZ9KQanSqYXRcF8fBopzLHYxdM65zcjm",
            6,
            "https://bafkreibk3covs5ltyqxa272uodhculbr6kea6betiez2aotjqqzlvtygt4.ipfs.nftstorage.link",
        ),
        token(
            "jup",
            "JUP",
            "Jupiter",
            "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN",
            6,
            "https://static.jup.ag/jup/icon.png",
        ),
        token(
            "ray",
            "RAY",
            "Raydium",
            "4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R",
            6,
            "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R/logo.png",
        ),
        token(
            "orca",
            "ORCA",
            "Orca",
            "orcaEKTdK7LKz57vaAYr9QeNsVEPfiu6QeMU1kektZE",
            6,
            "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/orcaEKTdK7LKz57vaAYr9QeNsVEPfiu6QeMU1kektZE/logo.png",
        ),
        token(
            "popcat",
            "POPCAT",
            "Popcat",
            "7GCihgDB8fe6KNjn2MYtkzZcRjQy3t9GHdC8uHYmW2hr",
            9,
            "https://bafkreidvkvuzyslw5jh5z242lgzwzhbi2kxxnpkic5wsvyno5ikvpr7reu.ipfs.nftstorage.link",
        ),
        token(
            "render",
            "RENDER",
            "Render Token",
            "rndrizKT3MK1iimdxRdWabcF7Zg7AR5T4nud4EkHBof",
            8,
            "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/rndrizKT3MK1iimdxRdWabcF7Zg7AR5T4nud4EkHBof/logo.png",
        ),
    ]
});

fn token(
    id: &str,
    symbol: &str,
    name: &str,
    address: &str,
    decimals: u8,
    logo_url: &str,
) -> Token {
    Token {
        id: TokenId::from(id),
        symbol: symbol.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        decimals,
        logo_url: logo_url.to_string(),
        chain: "solana".to_string(),
    }
}

/// All supported tokens, in listing order.
pub fn supported_tokens() -> &'static [Token] {
    &SUPPORTED_TOKENS
}

/// Look up a token by id.
pub fn token_by_id(token_id: &TokenId) -> Option<&'static Token> {
    SUPPORTED_TOKENS.iter().find(|t| &t.id == token_id)
}
