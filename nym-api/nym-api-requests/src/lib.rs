// Copyright 2022 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub mod models;

pub mod routes {
    pub const V1: &str = "/v1";

    pub mod v1 {
        pub const MIXNODES: &str = "/mixnodes";
        pub const GATEWAYS: &str = "/gateways";

        pub mod mixnodes {
            pub const DETAILED: &str = "/detailed";
        }
    }
}
