pub mod errors;
pub mod db;
pub mod solicitacao;

#[cfg(test)]
mod tests;
