/// Credential utilities
///
/// The only authentication primitive in Taskboard is password hashing:
/// registration stores an Argon2id hash and login re-verifies the
/// plaintext against it. No sessions or tokens are issued.

pub mod password;
