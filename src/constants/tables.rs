//! Table and column names of the user store.

pub const TABLE_USERS: &str = "usuario";

pub const COL_ID: &str = "idUsuario";
pub const COL_NAME: &str = "nomeUsuario";
pub const COL_LOGIN: &str = "userUsuario";
pub const COL_PASSWORD: &str = "senhaUsuario";
pub const COL_NATIONAL_ID: &str = "cpfUsuario";
pub const COL_EMAIL: &str = "emailUsuario";
