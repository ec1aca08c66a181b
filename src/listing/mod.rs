//! The paginated, filterable listing pipeline shared by the folder and file
//! views: a pure filter, a pure paginator, and a controller that keeps the
//! query/page invariants across wholesale reloads.

mod filter;
mod page;
mod state;

pub use filter::filter;
pub use page::{Page, paginate};
pub use state::ListingState;

/// Anything a listing can filter by: a single display key.
pub trait Keyed {
    fn display_key(&self) -> &str;
}
