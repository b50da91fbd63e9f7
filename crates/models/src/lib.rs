pub mod errors;
pub mod db;
pub mod car;

#[cfg(test)]
mod tests;
