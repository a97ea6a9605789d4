/// bcrypt work factor for stored password hashes.
pub const PASSWORD_HASH_COST: u32 = 12;
