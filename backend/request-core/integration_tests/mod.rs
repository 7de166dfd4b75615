//! End-to-end tests for the request pipeline against a mock gateway.

mod helpers;
mod pipeline;
mod transport;
