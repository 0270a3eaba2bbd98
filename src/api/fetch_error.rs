use thiserror::Error;

/// Why a page could not get its data from the listings API.
///
/// The three variants are mutually exclusive and each renders its own
/// message. An empty catalog is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The requested identifier has no record upstream.
    #[error("listing not found")]
    NotFound,
    /// Upstream answered with a non-2xx status (other than 404 on a lookup).
    #[error("upstream responded with status {0}")]
    LoadFailed(u16),
    /// No usable response was received.
    #[error("could not reach the listings API")]
    ConnectionFailed,
}

impl FetchError {
    /// Message shown on the catalog page.
    pub fn catalog_message(&self) -> String {
        match self {
            FetchError::NotFound => "Nenhum imóvel encontrado".to_string(),
            FetchError::LoadFailed(status) => format!("Erro ao carregar imóveis: {status}"),
            FetchError::ConnectionFailed => CONNECTION_MESSAGE.to_string(),
        }
    }

    /// Message shown on the detail page.
    pub fn detail_message(&self) -> String {
        match self {
            FetchError::NotFound => "Imóvel não encontrado".to_string(),
            FetchError::LoadFailed(status) => format!("Erro ao carregar imóvel: {status}"),
            FetchError::ConnectionFailed => CONNECTION_MESSAGE.to_string(),
        }
    }

    /// Status this server answers with when the error ends a page render.
    pub fn http_status(&self) -> u16 {
        match self {
            FetchError::NotFound => 404,
            FetchError::LoadFailed(_) | FetchError::ConnectionFailed => 502,
        }
    }
}

const CONNECTION_MESSAGE: &str = "Erro de conexão. Verifique sua internet.";
