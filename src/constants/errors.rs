//! Error message constants returned to API clients (pt-BR).

// Validation errors
pub const ERR_MISSING_FIELDS: &str = "Todos os campos são obrigatórios!";
pub const ERR_NO_UPDATE_FIELDS: &str = "Nenhum dado fornecido para atualizar!";
pub const ERR_INVALID_BODY: &str = "Corpo da requisição inválido!";

// User errors
pub const ERR_USER_NOT_FOUND: &str = "Usuário não encontrado";
pub const ERR_EMAIL_EXISTS: &str = "E-mail em uso! Por favor, utilize outro e-mail!";

// Storage failures, one per operation
pub const ERR_FETCH_FAILED: &str = "Erro ao buscar usuário";
pub const ERR_CREATE_FAILED: &str = "Erro interno do servidor ao criar usuário";
pub const ERR_UPDATE_FAILED: &str = "Erro interno do servidor ao atualizar usuário";
pub const ERR_DELETE_FAILED: &str = "Erro interno do servidor ao deletar usuário";
