//! Mock trader leaderboard.

use once_cell::sync::Lazy;
use paperdex_core::TraderId;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A copyable trader profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trader {
    pub id: TraderId,
    pub address: String,
    pub display_name: String,
    pub avatar_url: String,
    pub bio: String,
    pub followers: u64,
    pub pnl_7d: Decimal,
    pub pnl_30d: Decimal,
    pub pnl_percent_7d: Decimal,
    pub pnl_percent_30d: Decimal,
    pub win_rate: Decimal,
    pub total_trades: u64,
    /// Average holding time in seconds.
    pub avg_hold_time: u64,
    pub is_verified: bool,
    pub tags: Vec<String>,
}

/// Sortable leaderboard fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraderSortField {
    PnlPercent7d,
    PnlPercent30d,
    Followers,
    WinRate,
}

impl FromStr for TraderSortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pnlPercent7d" => Ok(Self::PnlPercent7d),
            "pnlPercent30d" => Ok(Self::PnlPercent30d),
            "followers" => Ok(Self::Followers),
            "winRate" => Ok(Self::WinRate),
            _ => Err(()),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn trader(
    id: &str,
    address: &str,
    display_name: &str,
    avatar_seed: &str,
    bio: &str,
    followers: u64,
    pnl_7d: Decimal,
    pnl_30d: Decimal,
    pnl_percent_7d: Decimal,
    pnl_percent_30d: Decimal,
    win_rate: Decimal,
    total_trades: u64,
    avg_hold_time: u64,
    is_verified: bool,
    tags: &[&str],
) -> Trader {
    Trader {
        id: TraderId::from(id),
        address: address.to_string(),
        display_name: display_name.to_string(),
        avatar_url: format!("https://api.dicebear.com/7.x/identicon/svg?seed={avatar_seed}"),
        bio: bio.to_string(),
        followers,
        pnl_7d,
        pnl_30d,
        pnl_percent_7d,
        pnl_percent_30d,
        win_rate,
        total_trades,
        avg_hold_time,
        is_verified,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

static MOCK_TRADERS: Lazy<Vec<Trader>> = Lazy::new(|| {
    vec![
        trader(
            "trader-1",
            "7xKX...3nPq",
            "SolanaWhale",
            "whale",
            "Full-time DeFi trader. Focus on SOL ecosystem gems. NFA.",
            12_450,
            dec!(45_230),
            dec!(182_400),
            dec!(23.5),
            dec!(89.2),
            dec!(72.4),
            1_245,
            14_400,
            true,
            &["Top Trader", "Whale", "DeFi"],
        ),
        trader(
            "trader-2",
            "3mKL...9xRt",
            "MemeKing",
            "meme",
            "Early meme coin hunter. DYOR. High risk, high reward.",
            8_920,
            dec!(28_100),
            dec!(-15_600),
            dec!(156.8),
            dec!(-12.4),
            dec!(45.2),
            892,
            3_600,
            true,
            &["Meme Hunter", "High Risk"],
        ),
        trader(
            "trader-3",
            "9pQR...2wXz",
            "DiamondHands",
            "diamond",
            "Long-term holder. Blue chip tokens only. Patience pays.",
            5_640,
            dec!(8_450),
            dec!(95_200),
            dec!(4.2),
            dec!(47.6),
            dec!(68.9),
            156,
            604_800,
            false,
            &["Holder", "Blue Chip"],
        ),
        trader(
            "trader-4",
            "5tYU...7mNb",
            "ScalpMaster",
            "scalp",
            "Quick in, quick out. Scalping is an art form.",
            15_780,
            dec!(12_890),
            dec!(67_450),
            dec!(8.9),
            dec!(42.3),
            dec!(61.5),
            4_567,
            900,
            true,
            &["Scalper", "High Frequency"],
        ),
        trader(
            "trader-5",
            "2aBC...4dEf",
            "NFTDegen",
            "nft",
            "NFT & token trader. Community alpha. LFG!",
            3_210,
            dec!(-5_670),
            dec!(23_400),
            dec!(-8.4),
            dec!(34.7),
            dec!(52.1),
            678,
            86_400,
            false,
            &["NFT", "Community"],
        ),
        trader(
            "trader-6",
            "8gHI...1jKl",
            "AlphaSeeker",
            "alpha",
            "On-chain analysis. Finding alpha before the crowd.",
            9_870,
            dec!(34_560),
            dec!(145_800),
            dec!(18.7),
            dec!(78.9),
            dec!(65.3),
            423,
            43_200,
            true,
            &["Alpha", "On-chain", "Analyst"],
        ),
    ]
});

/// All mock traders, in listing order.
pub fn mock_traders() -> &'static [Trader] {
    &MOCK_TRADERS
}

/// Look up a trader by id.
pub fn trader_by_id(trader_id: &TraderId) -> Option<&'static Trader> {
    MOCK_TRADERS.iter().find(|t| &t.id == trader_id)
}

/// Sort a trader list by a leaderboard field.
pub fn sort_traders_by_field(traders: &mut [&Trader], field: TraderSortField, descending: bool) {
    traders.sort_by(|a, b| {
        let ord = match field {
            TraderSortField::PnlPercent7d => a.pnl_percent_7d.cmp(&b.pnl_percent_7d),
            TraderSortField::PnlPercent30d => a.pnl_percent_30d.cmp(&b.pnl_percent_30d),
            TraderSortField::Followers => a.followers.cmp(&b.followers),
            TraderSortField::WinRate => a.win_rate.cmp(&b.win_rate),
        };
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
}

/// Keep verified traders only.
pub fn filter_verified_traders<'a>(traders: &[&'a Trader]) -> Vec<&'a Trader> {
    traders.iter().filter(|t| t.is_verified).copied().collect()
}

/// Case-insensitive substring match on tags.
pub fn filter_traders_by_tag<'a>(traders: &[&'a Trader], tag: &str) -> Vec<&'a Trader> {
    let needle = tag.to_lowercase();
    traders
        .iter()
        .filter(|t| t.tags.iter().any(|tg| tg.to_lowercase().contains(&needle)))
        .copied()
        .collect()
}

/// Case-insensitive substring match on display name or address.
pub fn search_traders<'a>(traders: &[&'a Trader], query: &str) -> Vec<&'a Trader> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return traders.to_vec();
    }
    traders
        .iter()
        .filter(|t| {
            t.display_name.to_lowercase().contains(&needle)
                || t.address.to_lowercase().contains(&needle)
        })
        .copied()
        .collect()
}
