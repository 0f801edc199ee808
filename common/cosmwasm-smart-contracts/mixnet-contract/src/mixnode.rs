// Copyright 2021 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::error::MixnetContractError;
use crate::types::{IdentityKey, IdentityKeyRef, SphinxKey};
use cosmwasm_std::{Addr, Coin, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Information provided by the node operator during bonding that is used
/// to allow other entities to use the services of this mixnode.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, JsonSchema)]
pub struct MixNode {
    /// Network address of this mixnode, for example 1.1.1.1 or foo.mixnode.com
    pub host: String,

    /// Port used by this mixnode for listening for mix packets.
    pub mix_port: u16,

    /// Port used by this mixnode for listening for verloc requests.
    pub verloc_port: u16,

    /// Port used by this mixnode for its http(s) API.
    pub http_api_port: u16,

    /// Public key used for deriving shared keys with sphinx packet senders.
    pub sphinx_key: SphinxKey,

    /// Public key identifying this mixnode.
    pub identity_key: IdentityKey,

    /// The self-reported semver version of this mixnode.
    pub version: String,

    /// The percent of rewards the operator takes before delegators receive
    /// theirs. Assumed to lie in the 0-100 range; not checked at this layer.
    pub profit_margin_percent: u8,
}

/// Basic mixnode information kept by the contract for a bonded node,
/// alongside the stake backing it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, JsonSchema)]
pub struct MixNodeBond {
    /// Original amount pledged by the operator of this node.
    pub pledge_amount: Coin,

    /// All stake delegated to this node by third parties.
    pub total_delegation: Coin,

    /// Address of the owner of this mixnode.
    pub owner: Addr,

    /// Name of the mixing layer this node is assigned to, e.g. "One".
    pub layer: String,

    /// Block height at which this mixnode has been bonded.
    pub block_height: u64,

    /// Information provided by the operator for the use of the mixnet.
    pub mix_node: MixNode,

    /// Entity that bonded this node on behalf of the owner, such as the
    /// vesting contract. Empty when the owner bonded it directly.
    pub proxy: Addr,

    /// Rewards earned by this node that have not been claimed yet.
    pub accumulated_rewards: Uint128,
}

impl MixNodeBond {
    pub fn identity(&self) -> IdentityKeyRef<'_> {
        &self.mix_node.identity_key
    }

    pub fn owner(&self) -> &Addr {
        &self.owner
    }

    pub fn pledge_amount(&self) -> &Coin {
        &self.pledge_amount
    }

    pub fn total_delegation(&self) -> &Coin {
        &self.total_delegation
    }

    pub fn mix_node(&self) -> &MixNode {
        &self.mix_node
    }

    /// Combined pledge and delegated stake backing this node.
    pub fn total_bond(&self) -> Result<Uint128, MixnetContractError> {
        if self.pledge_amount.denom != self.total_delegation.denom {
            return Err(MixnetContractError::MismatchedDenoms {
                pledge: self.pledge_amount.denom.clone(),
                delegation: self.total_delegation.denom.clone(),
            });
        }
        self.pledge_amount
            .amount
            .checked_add(self.total_delegation.amount)
            .map_err(|_| MixnetContractError::StakeOverflow {
                pledge: self.pledge_amount.amount,
                delegation: self.total_delegation.amount,
            })
    }
}

impl PartialOrd for MixNodeBond {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // bonds carrying different denoms cannot be meaningfully compared
        if self.pledge_amount.denom != other.pledge_amount.denom {
            return None;
        }

        let this = self.total_bond().ok()?;
        let that = other.total_bond().ok()?;

        this.partial_cmp(&that)
    }
}

impl Display for MixNodeBond {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "amount: {} {}, owner: {}, identity: {}",
            self.pledge_amount.amount,
            self.pledge_amount.denom,
            self.owner,
            self.identity()
        )
    }
}
