// Copyright 2021 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

/// Base58-encoded ed25519 public key.
pub type IdentityKey = String;
pub type IdentityKeyRef<'a> = &'a str;

/// Base58-encoded x25519 public key.
pub type SphinxKey = String;
