//! Abstract film-loading capability.

use async_trait::async_trait;

use crate::error::LoadError;
use crate::types::Film;

/// Capability to resolve films by key.
///
/// Consumers take a `FilmLoader` at construction time and never care which
/// implementation is behind it: [`NetworkFilmLoader`](crate::NetworkFilmLoader)
/// in production wiring, [`MockFilmLoader`](crate::mock::MockFilmLoader) in
/// tests and previews.
///
/// The ordering of `load_many` results and its treatment of unresolvable
/// keys are deliberately implementation-defined — the network loader sorts
/// by episode and fails the whole batch on any error, while the mock loader
/// preserves input order and silently skips unmapped keys. Callers must not
/// assume either behaviour from the trait alone.
#[async_trait]
pub trait FilmLoader: Send + Sync {
    /// Resolve exactly one film by key. Strict: a key that cannot be
    /// resolved is an error.
    async fn load_one(&self, key: &str) -> Result<Film, LoadError>;

    /// Resolve a set of keys. Ordering and missing-key handling are defined
    /// by each implementation; see the implementation docs.
    async fn load_many(&self, keys: &[String]) -> Result<Vec<Film>, LoadError>;
}
