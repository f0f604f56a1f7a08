pub mod db;
pub mod errors;
pub mod extract;
pub mod load;
pub mod responses;
pub mod router;
pub mod templates;
pub mod transform;

#[cfg(test)]
mod tests;
