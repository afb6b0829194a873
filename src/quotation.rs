//! Quoting a premium from a user's age, two ways.
//!
//! Both workflows await a single user lookup and price the result with a
//! [`PricingRule`]. They differ only in how the lookup reports failure:
//!
//! - [`get_quotation_with_exception_handling`] takes a lookup that may fail
//!   with any error at all. Every failure is caught in one place, logged and
//!   turned into a zero premium. The cause does not survive.
//! - [`get_quotation_with_result_type`] takes a lookup whose output is a
//!   [`LookupResult`]. The failure is a [`LookupFailure`] value, so the match
//!   on it is checked by the compiler. [`try_quotation`] hands the reason
//!   back to the caller instead of collapsing it.
//!
//! Neither workflow puts a timeout on the lookup. [`with_deadline`] can be
//! wrapped around a lookup explicitly when one is wanted.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::PricingRule;
use crate::error::LookupFailure;
use crate::model::{LookupResult, UserDetails};

/// The premium returned when no quotation could be made.
pub const NO_QUOTATION: u32 = 0;

/// Runs the quotation workflows with a given pricing rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quoter {
    rule: PricingRule,
}

impl Quoter {
    pub fn new(rule: PricingRule) -> Self {
        Quoter { rule }
    }

    pub fn rule(&self) -> &PricingRule {
        &self.rule
    }

    pub async fn quote_with_exception_handling<'a, F, Fut>(&self, user_id: &'a str, lookup: F) -> u32
    where
        F: FnOnce(&'a str) -> Fut,
        Fut: Future<Output = anyhow::Result<UserDetails>>,
    {
        match lookup(user_id).await {
            Ok(details) => self.rule.premium_for(details.age),
            Err(_) => {
                warn!(user_id, "could not get user details, no quotation given");
                NO_QUOTATION
            }
        }
    }

    pub async fn try_quote<'a, F, Fut>(&self, user_id: &'a str, lookup: F) -> Result<u32, LookupFailure>
    where
        F: FnOnce(&'a str) -> Fut,
        Fut: Future<Output = LookupResult>,
    {
        let details = lookup(user_id).await?;
        Ok(self.rule.premium_for(details.age))
    }

    pub async fn quote_with_result_type<'a, F, Fut>(&self, user_id: &'a str, lookup: F) -> u32
    where
        F: FnOnce(&'a str) -> Fut,
        Fut: Future<Output = LookupResult>,
    {
        match self.try_quote(user_id, lookup).await {
            Ok(premium) => premium,
            Err(LookupFailure::UserNotFound) => {
                debug!(user_id, "user not found, no quotation given");
                NO_QUOTATION
            }
            Err(LookupFailure::ServiceNotAvailable) => {
                debug!(user_id, "directory unavailable, no quotation given");
                NO_QUOTATION
            }
        }
    }
}

/// Quote with the default rule, swallowing any lookup error as a zero premium.
pub async fn get_quotation_with_exception_handling<'a, F, Fut>(user_id: &'a str, lookup: F) -> u32
where
    F: FnOnce(&'a str) -> Fut,
    Fut: Future<Output = anyhow::Result<UserDetails>>,
{
    Quoter::default()
        .quote_with_exception_handling(user_id, lookup)
        .await
}

/// Quote with the default rule from a lookup that reports failure as a value.
pub async fn get_quotation_with_result_type<'a, F, Fut>(user_id: &'a str, lookup: F) -> u32
where
    F: FnOnce(&'a str) -> Fut,
    Fut: Future<Output = LookupResult>,
{
    Quoter::default().quote_with_result_type(user_id, lookup).await
}

/// Quote with the default rule, keeping the failure reason.
pub async fn try_quotation<'a, F, Fut>(user_id: &'a str, lookup: F) -> Result<u32, LookupFailure>
where
    F: FnOnce(&'a str) -> Fut,
    Fut: Future<Output = LookupResult>,
{
    Quoter::default().try_quote(user_id, lookup).await
}

/// Race a lookup against a timer.
///
/// A lookup that is still pending when `deadline` passes is dropped and
/// reported as [`LookupFailure::ServiceNotAvailable`].
pub async fn with_deadline<Fut>(deadline: Duration, lookup: Fut) -> LookupResult
where
    Fut: Future<Output = LookupResult>,
{
    tokio::time::timeout(deadline, lookup)
        .await
        .unwrap_or_else(|_| {
            warn!(?deadline, "user lookup timed out");
            Err(LookupFailure::ServiceNotAvailable)
        })
}
