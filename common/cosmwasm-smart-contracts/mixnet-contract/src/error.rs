// Copyright 2021 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use cosmwasm_std::Uint128;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MixnetContractError {
    #[error("Attempted to combine stake of different denoms ({pledge} and {delegation})")]
    MismatchedDenoms { pledge: String, delegation: String },

    #[error("Attempted to add stake with overflow ({pledge}.add({delegation}))")]
    StakeOverflow { pledge: Uint128, delegation: Uint128 },
}
