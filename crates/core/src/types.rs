/// User record identifiers are assigned by the directory as `max + 1`.
pub type DbId = i64;
