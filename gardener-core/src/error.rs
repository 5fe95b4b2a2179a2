//! Error types for the gardener core library.
//!
//! Generation has no transient failure class: every error is either a
//! rejected precondition or a broken post-generation guarantee, and none are
//! retryable.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring a [`crate::Gardener`] or generating
/// pages and sites with it.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GardenerError {
    /// The requested element count does not leave room beyond the fixed
    /// `html`/`head`/`title`/`body` skeleton.
    #[error("element count must exceed {minimum} (got {got})")]
    ElementCountTooSmall {
        /// Element count supplied by the caller.
        got: usize,
        /// Number of skeleton elements the count must exceed.
        minimum: usize,
    },
    /// More links were supplied than the page has free elements to carry.
    #[error("{links} links cannot be placed in a page with {budget} free elements")]
    LinkBudgetExceeded {
        /// Number of distinct links supplied.
        links: usize,
        /// Elements available below `body`.
        budget: usize,
    },
    /// A site must contain at least its origin page.
    #[error("a site needs at least one page")]
    EmptySite,
    /// A builder option was rejected.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfiguration {
        /// Name of the offending option.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// A post-generation guarantee did not hold, which indicates a defect in
    /// the generator rather than bad input.
    #[error("generation invariant violated: {message}")]
    InvariantViolation {
        /// Description of the broken guarantee.
        message: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`GardenerError`] variants.
    enum GardenerErrorCode for GardenerError {
        /// The requested element count was too small.
        ElementCountTooSmall => ElementCountTooSmall { .. } => "GARDENER_ELEMENT_COUNT_TOO_SMALL",
        /// The link set did not fit in the page.
        LinkBudgetExceeded => LinkBudgetExceeded { .. } => "GARDENER_LINK_BUDGET_EXCEEDED",
        /// A site of zero pages was requested.
        EmptySite => EmptySite => "GARDENER_EMPTY_SITE",
        /// A builder option was rejected.
        InvalidConfiguration => InvalidConfiguration { .. } => "GARDENER_INVALID_CONFIGURATION",
        /// A post-generation guarantee was broken.
        InvariantViolation => InvariantViolation { .. } => "GARDENER_INVARIANT_VIOLATION",
    }
}

/// Convenient result alias for gardener operations.
pub type Result<T> = core::result::Result<T, GardenerError>;
