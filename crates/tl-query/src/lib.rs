//! # tl-query
//!
//! Query building for TrackLink RS attribution links.
//!
//! ## Structure
//!
//! - `encoding` - Percent-encoding of keys and values
//! - `campaign` - Campaign selection and decomposition into sub fields
//! - `query` - The assembled LinkQuery
//! - `builder` - Fluent API for constructing link queries
//! - `params` - Reading and replacing parameters in built queries
//!
//! ## Example
//!
//! ```
//! use tl_query::{build_query, get_param_value, replace_param_value};
//!
//! let query = build_query(
//!     "https://www.google.com?",
//!     [
//!         ("bundle", "com.dev.test"),
//!         ("campaign", "myapp://spring_push_email"),
//!     ],
//! );
//!
//! assert_eq!(get_param_value(&query, "push"), "push");
//! assert_eq!(get_param_value(&query, "sub1"), "spring");
//! assert_eq!(get_param_value(&query, "notId"), "null");
//!
//! let query = replace_param_value(&query, "notId", "a123b");
//! assert_eq!(get_param_value(&query, "notId"), "a123b");
//! ```

pub mod encoding;
pub mod campaign;
pub mod query;
pub mod builder;
pub mod params;

// Re-exports for convenience
pub use builder::{build_query, QueryBuilder};
pub use campaign::{CampaignFields, CampaignInput};
pub use params::{
    get_decoded_param_value, get_param_value, replace_param_value, try_get_param_value,
    try_replace_param_value, QueryParts,
};
pub use query::LinkQuery;
pub use tl_core::{BuilderConfig, ParamSet, ParamValue, TlError, TlResult};
