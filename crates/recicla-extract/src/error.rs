use thiserror::Error;

pub const PDF_ERROR_MARKER: &str = "Erro ao ler PDF";
pub const TEXT_ERROR_MARKER: &str = "Erro ao ler TXT";
pub const TABULAR_ERROR_MARKER: &str = "Erro ao ler CSV";
pub const IMAGE_ERROR_MARKER: &str = "Erro ao processar a imagem";
pub const UNSUPPORTED_ERROR_MARKER: &str = "Tipo de arquivo não suportado";

/// Failure of a single extractor. The display text starts with a fixed
/// per-kind marker followed by the underlying reason.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Erro ao ler PDF: {0}")]
    Pdf(String),

    #[error("Erro ao ler TXT: {0}")]
    Text(String),

    #[error("Erro ao ler CSV: {0}")]
    Tabular(String),

    #[error("Erro ao processar a imagem: {0}")]
    Image(String),

    #[error("Tipo de arquivo não suportado: {0}")]
    UnsupportedFileType(String),
}

impl ExtractError {
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Pdf(_) => PDF_ERROR_MARKER,
            Self::Text(_) => TEXT_ERROR_MARKER,
            Self::Tabular(_) => TABULAR_ERROR_MARKER,
            Self::Image(_) => IMAGE_ERROR_MARKER,
            Self::UnsupportedFileType(_) => UNSUPPORTED_ERROR_MARKER,
        }
    }

    /// The underlying reason, without the marker.
    pub fn reason(&self) -> &str {
        match self {
            Self::Pdf(r)
            | Self::Text(r)
            | Self::Tabular(r)
            | Self::Image(r)
            | Self::UnsupportedFileType(r) => r,
        }
    }
}
