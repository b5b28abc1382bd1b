//! Three-tier resolution of one symbol's sub-fetch outcomes.
//!
//! Pure functions only: no I/O, so every fallback path can be tested by
//! handing in ready-made `Result`s.

use rand::Rng;

use crate::{
    batch::synthetic::synthesize,
    models::{
        profile::CompanyProfile,
        quote::Quote,
        stock_record::{StockRecord, Tier},
    },
    providers::UpstreamError,
    reference,
};

/// Tagged outcome of resolving one symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Quote and profile both succeeded.
    Full { quote: Quote, profile: CompanyProfile },
    /// The quote succeeded; the name must come from the fallback table.
    PartialName { quote: Quote },
    /// The quote failed; the record will be synthesized.
    Synthetic,
}

impl Resolution {
    pub fn tier(&self) -> Tier {
        match self {
            Resolution::Full { .. } => Tier::Full,
            Resolution::PartialName { .. } => Tier::Partial,
            Resolution::Synthetic => Tier::Synthetic,
        }
    }

    /// Turns the outcome into the record served for `symbol`.
    ///
    /// `rng` is only consulted for [`Resolution::Synthetic`].
    pub fn into_record<R: Rng>(self, symbol: &str, rng: &mut R) -> StockRecord {
        let tier = self.tier();
        match self {
            Resolution::Full { quote, profile } => StockRecord::from_quote(
                symbol,
                profile.name,
                &quote,
                reference::all_time_high(symbol),
                tier,
            ),
            Resolution::PartialName { quote } => StockRecord::from_quote(
                symbol,
                reference::display_name_or_symbol(symbol),
                &quote,
                reference::all_time_high(symbol),
                tier,
            ),
            Resolution::Synthetic => synthesize(symbol, rng),
        }
    }
}

/// Decides the tier from both sub-fetch results.
///
/// A quote failure always wins: without a live price the record is synthetic
/// even if the profile succeeded.
pub fn resolve(
    quote: Result<Quote, UpstreamError>,
    profile: Result<CompanyProfile, UpstreamError>,
) -> Resolution {
    match (quote, profile) {
        (Ok(quote), Ok(profile)) => Resolution::Full { quote, profile },
        (Ok(quote), Err(_)) => Resolution::PartialName { quote },
        (Err(_), _) => Resolution::Synthetic,
    }
}
