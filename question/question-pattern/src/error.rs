use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern could not be compiled: {0}")]
    Build(#[from] regex_automata::meta::BuildError),
}
