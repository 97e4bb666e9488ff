//! Client module - sends the scheduling requests for both WASM and no-WASM environments
//!
//! Both backends implement [`SchedulingApi`](crate::interface::SchedulingApi):
//! reqwest outside the browser, gloo_net (the fetch API) inside it.

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;
