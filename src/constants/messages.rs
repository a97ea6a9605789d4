//! Success message constants returned to API clients (pt-BR).

pub const MSG_USER_CREATED: &str = "Usuário criado com sucesso!";
pub const MSG_USER_UPDATED: &str = "Usuário atualizado com sucesso!";
pub const MSG_USER_DELETED: &str = "Usuário deletado com sucesso!";

pub const MSG_SERVER_RUNNING: &str = "Server is running";
