//! Filter model, query builder, search gateways and result pager for
//! influencer discovery.
//!
//! Transports (HTTP clients, stores) live in `scout-plugins`; this crate only
//! defines the traits they implement.

pub mod api;
pub mod config;
pub mod errors;
pub mod filter;
pub mod gateway;
pub mod pager;
pub mod query;
pub mod search;

pub use self::errors as error;
