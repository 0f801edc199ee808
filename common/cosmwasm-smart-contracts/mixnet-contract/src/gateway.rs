// Copyright 2021 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::types::{IdentityKey, IdentityKeyRef, SphinxKey};
use cosmwasm_std::{Addr, Coin};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Information provided by the node operator during bonding that is used
/// to allow other entities to use the services of this gateway.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, JsonSchema)]
pub struct Gateway {
    /// Network address of this gateway, for example 1.1.1.1 or foo.gateway.com
    pub host: String,

    /// Port used by this gateway for listening for mix packets.
    pub mix_port: u16,

    /// Port used by this gateway for listening for client requests.
    pub clients_port: u16,

    /// The physical, self-reported, location of this gateway.
    pub location: String,

    /// Public key used for deriving shared keys with sphinx packet senders.
    pub sphinx_key: SphinxKey,

    /// Public key identifying this gateway.
    pub identity_key: IdentityKey,

    /// The self-reported semver version of this gateway.
    pub version: String,
}

/// Basic gateway information kept by the contract for a bonded node,
/// alongside the stake backing it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, JsonSchema)]
pub struct GatewayBond {
    /// Original amount pledged by the operator of this node.
    pub pledge_amount: Coin,

    /// Address of the owner of this gateway.
    pub owner: Addr,

    /// Block height at which this gateway has been bonded.
    pub block_height: u64,

    /// Information provided by the operator for the use of the mixnet.
    pub gateway: Gateway,

    /// Entity that bonded this node on behalf of the owner, such as the
    /// vesting contract. Empty when the owner bonded it directly.
    pub proxy: Addr,
}

impl GatewayBond {
    pub fn identity(&self) -> IdentityKeyRef<'_> {
        &self.gateway.identity_key
    }

    pub fn owner(&self) -> &Addr {
        &self.owner
    }

    pub fn pledge_amount(&self) -> &Coin {
        &self.pledge_amount
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }
}

impl PartialOrd for GatewayBond {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // bonds carrying different denoms cannot be meaningfully compared
        if self.pledge_amount.denom != other.pledge_amount.denom {
            return None;
        }

        self.pledge_amount
            .amount
            .partial_cmp(&other.pledge_amount.amount)
    }
}

impl Display for GatewayBond {
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
