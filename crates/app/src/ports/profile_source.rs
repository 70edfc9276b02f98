//! Profile source port — where the profile document comes from.

use std::future::Future;

use folio_domain::error::FolioError;
use folio_domain::profile::ProfileDocument;

/// Obtains the profile document. Fetched once per page load.
pub trait ProfileSource {
    /// Load and decode the document.
    fn fetch(&self) -> impl Future<Output = Result<ProfileDocument, FolioError>>;
}
