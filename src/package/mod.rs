//! Package data model, repository store and lookup.

mod locate;
mod meta;
mod store;

pub use locate::find_package;
pub use meta::{DepSpec, META_FILE, Meta};
pub use store::PackageStore;
