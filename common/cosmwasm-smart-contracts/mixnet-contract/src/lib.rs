// Copyright 2021 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

//! Shapes of the records the mixnet contract reports for bonded nodes.
//!
//! Everything in here is produced elsewhere: the contract assembles these
//! values on chain and the validator API serves them as JSON. This crate only
//! pins down their field names and nesting so that consumers get
//! compile-time checking of that contract. Amount fields stay in their
//! string-encoded `Uint128` form; converting them to anything lossy is the
//! caller's decision.

pub mod error;
pub mod gateway;
pub mod mixnode;
mod types;

pub use cosmwasm_std::{Addr, Coin, Uint128};
pub use error::MixnetContractError;
pub use gateway::{Gateway, GatewayBond};
pub use mixnode::{MixNode, MixNodeBond};
pub use types::*;
