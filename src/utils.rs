#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(
        "El nombre del componente debe comenzar en una letra mayúscula y no debe contener espacios."
    )]
    InvalidName { name: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
