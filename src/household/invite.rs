// Invite codes: generation, demo allow-list, share text

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const INVITE_CODE_LEN: usize = 8;

/// Characters a generated invite code is drawn from
pub const INVITE_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!*";

/// Codes accepted by the join flow in demo mode
pub const DEMO_INVITE_CODES: &[&str] = &["HOUSE123", "DEMO456", "TEST789"];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InviteCode(String);

impl InviteCode {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let code = (0..INVITE_CODE_LEN)
            .map(|_| INVITE_ALPHABET[rng.gen_range(0..INVITE_ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invite code must be {INVITE_CODE_LEN} characters from [a-zA-Z0-9!*], got '{0}'")]
pub struct MalformedCode(pub String);

impl std::str::FromStr for InviteCode {
    type Err = MalformedCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let well_formed = s.chars().count() == INVITE_CODE_LEN
            && s.bytes().all(|b| INVITE_ALPHABET.contains(&b));
        if well_formed {
            Ok(Self(s.to_string()))
        } else {
            Err(MalformedCode(s.to_string()))
        }
    }
}

impl fmt::Display for InviteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize user input the way the join flow compares it. Only case is
/// folded; surrounding whitespace makes a code invalid.
pub fn normalize_code(input: &str) -> String {
    input.to_uppercase()
}

/// Look up a code in the demo allow-list, ignoring case
pub fn match_demo_code(input: &str) -> Option<InviteCode> {
    let normalized = normalize_code(input);
    DEMO_INVITE_CODES
        .iter()
        .find(|code| **code == normalized)
        .map(|code| InviteCode((*code).to_string()))
}

/// Text handed to the share sink when inviting someone
pub fn invite_message(house_name: &str, code: &InviteCode) -> String {
    format!(
        "You're invited to join {house_name}!\n\n\
         Download HouseFlow and use this invite code:\n\n\
         Invite code: {code}\n\n\
         Let's organize the chores together!"
    )
}
