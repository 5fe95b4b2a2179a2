//! Builder utilities for configuring [`Gardener`] instances.
//!
//! Exposes the tuning surface for page and site generation and validates it
//! before a generator is constructed.

use crate::{Result, error::GardenerError, gardener::Gardener};

const DEFAULT_FILLER_LENGTH: usize = 17;
const DEFAULT_PAGE_PADDING: usize = 91;
const DEFAULT_SCHEME: &str = "http";
const DEFAULT_TLD: &str = "com";

/// Validated generation settings carried by a [`Gardener`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GardenerConfig {
    pub(crate) filler_length: usize,
    pub(crate) page_padding: usize,
    pub(crate) scheme: String,
    pub(crate) tld: String,
}

impl Default for GardenerConfig {
    fn default() -> Self {
        Self {
            filler_length: DEFAULT_FILLER_LENGTH,
            page_padding: DEFAULT_PAGE_PADDING,
            scheme: DEFAULT_SCHEME.to_owned(),
            tld: DEFAULT_TLD.to_owned(),
        }
    }
}

impl GardenerConfig {
    /// Length of the filler values given to optional attributes and titles.
    #[must_use]
    pub const fn filler_length(&self) -> usize {
        self.filler_length
    }

    /// Exclusive upper bound of the random extra elements per site page.
    #[must_use]
    pub const fn page_padding(&self) -> usize {
        self.page_padding
    }

    /// Scheme prefixed to minted hostnames.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Top-level domain appended to minted hostnames.
    #[must_use]
    pub fn tld(&self) -> &str {
        &self.tld
    }
}

/// Configures and constructs [`Gardener`] instances.
///
/// # Examples
/// ```
/// use gardener_core::GardenerBuilder;
///
/// let gardener = GardenerBuilder::new()
///     .with_seed(7)
///     .with_scheme("https")
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(gardener.config().scheme(), "https");
/// assert_eq!(gardener.config().filler_length(), 17);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GardenerBuilder {
    seed: Option<u64>,
    config: GardenerConfig,
}

impl GardenerBuilder {
    /// Creates a builder populated with default parameters and no seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the generator seed so runs are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Overrides the filler length for attribute values and titles.
    #[must_use]
    pub fn with_filler_length(mut self, length: usize) -> Self {
        self.config.filler_length = length;
        self
    }

    /// Overrides the exclusive bound on extra elements per site page.
    #[must_use]
    pub fn with_page_padding(mut self, padding: usize) -> Self {
        self.config.page_padding = padding;
        self
    }

    /// Overrides the scheme of minted hostnames.
    #[must_use]
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        scheme.clone_into(&mut self.config.scheme);
        self
    }

    /// Overrides the top-level domain of minted hostnames.
    #[must_use]
    pub fn with_tld(mut self, tld: &str) -> Self {
        tld.clone_into(&mut self.config.tld);
        self
    }

    /// Validates the configuration and constructs a [`Gardener`].
    ///
    /// # Errors
    /// Returns [`GardenerError::InvalidConfiguration`] when the filler length
    /// or page padding is zero, or when the scheme or top-level domain is
    /// empty.
    ///
    /// # Examples
    /// ```
    /// use gardener_core::{GardenerBuilder, GardenerError};
    ///
    /// let err = GardenerBuilder::new()
    ///     .with_page_padding(0)
    ///     .build()
    ///     .expect_err("zero padding is rejected");
    /// assert!(matches!(
    ///     err,
    ///     GardenerError::InvalidConfiguration { field: "page_padding", .. }
    /// ));
    /// ```
    pub fn build(self) -> Result<Gardener> {
        let config = self.config;
        if config.filler_length == 0 {
            return Err(invalid("filler_length", "must be at least 1"));
        }
        if config.page_padding == 0 {
            return Err(invalid("page_padding", "must be at least 1"));
        }
        if config.scheme.is_empty() {
            return Err(invalid("scheme", "must not be empty"));
        }
        if config.tld.is_empty() {
            return Err(invalid("tld", "must not be empty"));
        }
        Ok(match self.seed {
            Some(seed) => Gardener::with_config(config, seed),
            None => Gardener::with_config_from_entropy(config),
        })
    }
}

fn invalid(field: &'static str, reason: &str) -> GardenerError {
    GardenerError::InvalidConfiguration {
        field,
        reason: reason.to_owned(),
    }
}
