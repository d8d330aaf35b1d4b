// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Serde helper writing raw bytes as a lowercase hex string.

use serde::Serializer;

pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&hex::encode(bytes))
}
