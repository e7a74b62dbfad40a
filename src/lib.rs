pub mod export;
pub mod sim;
pub mod trace;
pub mod traffic;

#[cfg(test)]
mod test;
