// Copyright 2022 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use cosmwasm_std::Addr;
use nym_mixnet_contract_common::{MixNode, MixNodeBond};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bonded mixnode annotated with the network metrics the validator API has
/// computed for it. The metrics arrive precomputed alongside the bond;
/// nothing in this crate derives them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct MixNodeBondAnnotated {
    /// The underlying bond, exactly as the contract reports it.
    pub mixnode_bond: MixNodeBond,

    /// Ratio of this node's total stake to the network saturation point.
    pub stake_saturation: f64,

    /// Percentage of network monitor probes this node responded to.
    pub uptime: f64,

    /// Estimated annualized yield for the operator of this node.
    pub estimated_operator_apy: f64,

    /// Estimated annualized yield for this node's delegators.
    pub estimated_delegators_apy: f64,
}

impl MixNodeBondAnnotated {
    pub fn mix_node(&self) -> &MixNode {
        &self.mixnode_bond.mix_node
    }

    pub fn identity_key(&self) -> &str {
        self.mixnode_bond.identity()
    }

    pub fn owner(&self) -> &Addr {
        self.mixnode_bond.owner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::Uint128;

    #[test]
    fn annotated_bond_carries_bond_and_metrics_unchanged() {
        // payload as served by /v1/mixnodes/detailed
        let raw = r#"{
            "mixnode_bond": {
                "pledge_amount": { "denom": "unym", "amount": "50000000000" },
                "total_delegation": { "denom": "unym", "amount": "8500000000" },
                "owner": "n1rnl8mkkcv7g45uxb6dn4zcpkvmvvcyqsnwmkjn",
                "layer": "One",
                "block_height": 631274,
                "mix_node": {
                    "host": "142.93.12.178",
                    "mix_port": 1789,
                    "verloc_port": 1790,
                    "http_api_port": 8000,
                    "sphinx_key": "C6tCV8yTcdPFGPRT7fjdMqYsoAvdGQbKV5VHQ8EZaPbU",
                    "identity_key": "3ebjp1Fb9hdcS1AR6AZihgeJiMHkB5jjuXYoFvpxYsbS",
                    "version": "1.0.2",
                    "profit_margin_percent": 10
                },
                "proxy": "",
                "accumulated_rewards": "1384756"
            },
            "stake_saturation": 0.91,
            "uptime": 98.5,
            "estimated_operator_apy": 11.71,
            "estimated_delegators_apy": 9.42
        }"#;

        let annotated: MixNodeBondAnnotated = serde_json::from_str(raw).unwrap();
        assert_eq!(1789, annotated.mix_node().mix_port);
        assert_eq!(98.5, annotated.uptime);
        assert_eq!(
            "3ebjp1Fb9hdcS1AR6AZihgeJiMHkB5jjuXYoFvpxYsbS",
            annotated.identity_key()
        );
        assert_eq!(
            Uint128::new(1_384_756),
            annotated.mixnode_bond.accumulated_rewards
        );

        let reserialized = serde_json::to_string(&annotated).unwrap();
        let recovered: MixNodeBondAnnotated = serde_json::from_str(&reserialized).unwrap();
        assert_eq!(annotated, recovered);
    }

    #[test]
    fn metrics_are_required_fields() {
        // a bare bond is not a valid detailed response
        let raw = r#"{
            "mixnode_bond": {
                "pledge_amount": { "denom": "unym", "amount": "50000000000" },
                "total_delegation": { "denom": "unym", "amount": "8500000000" },
                "owner": "n1rnl8mkkcv7g45uxb6dn4zcpkvmvvcyqsnwmkjn",
                "layer": "One",
                "block_height": 631274,
                "mix_node": {
                    "host": "142.93.12.178",
                    "mix_port": 1789,
                    "verloc_port": 1790,
                    "http_api_port": 8000,
                    "sphinx_key": "C6tCV8yTcdPFGPRT7fjdMqYsoAvdGQbKV5VHQ8EZaPbU",
                    "identity_key": "3ebjp1Fb9hdcS1AR6AZihgeJiMHkB5jjuXYoFvpxYsbS",
                    "version": "1.0.2",
                    "profit_margin_percent": 10
                },
                "proxy": "",
                "accumulated_rewards": "1384756"
            }
        }"#;
        assert!(serde_json::from_str::<MixNodeBondAnnotated>(raw).is_err());
    }
}
