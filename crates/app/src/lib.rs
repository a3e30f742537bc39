//! Shared application cart store and persistence modules.

pub mod cart;
pub mod context;
pub mod storage;

#[cfg(test)]
mod test;
