//! Domain-level constants.
//!
//! These constants hold the fixed user-facing messages.

// =============================================================================
// Error messages
// =============================================================================

pub const MSG_EMAIL_IN_USE: &str = "Esse e-mail já está em uso";

pub const MSG_INVALID_CREDENTIALS: &str = "Credenciais inválidas";

pub const MSG_ACCESS_DENIED: &str = "Acesso negado!";

pub const MSG_UNEXPECTED: &str = "Algo de errado aconteceu, Tente novamente em breve.";

pub const MSG_CONNECTION: &str = "Falha de conexão com o servidor";
