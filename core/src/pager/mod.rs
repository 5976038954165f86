//! Page state behind the result grid.
//!
//! ```text
//! idle --submit--> loading --ok--> loaded --page--> loading
//!                     |                               |
//!                     +--err--> (idle|loaded), records untouched
//! ```
//!
//! One request may be in flight at a time. Every request carries a sequence
//! number; a completion whose number is not the latest issued is dropped, so
//! an abandoned request can never overwrite newer data.

mod pager;

pub use pager::{Completion, PageTicket, Pager, PagerStatus};
