//! Typed client for the JCDecaux self-service bicycle API, which provides
//! live dock availability for the cities ("contracts") JCDecaux operates in.

pub mod client;
pub mod types;

#[cfg(test)]
mod tests;
